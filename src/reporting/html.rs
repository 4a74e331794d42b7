//! # HTML Reporting Module / HTML 报告模块
//!
//! This module handles the generation of HTML reports from a result tree.
//! It creates styled HTML files with suite statistics, a detailed results
//! table in the same children-before-parent order as the textual report,
//! and toggleable failure output.
//!
//! 此模块处理从结果树生成 HTML 报告。
//! 它创建带有套件统计、与文本报告相同“先子后父”顺序的详细结果表格
//! 以及可切换失败输出的样式化 HTML 文件。

use anyhow::Result;
use std::path::Path;

use crate::core::models::ResultNode;
use crate::infra::{fs, t};
use crate::reporting::text::FRAMEWORK_MARKER;

/// Embedded CSS styles for HTML reports / HTML 报告的嵌入式 CSS 样式
const HTML_STYLE: &str = include_str!("assets/report.css");

/// Embedded JavaScript for HTML report interactivity / HTML 报告交互性的嵌入式 JavaScript
const HTML_SCRIPT: &str = include_str!("assets/report.js");

/// Generates an HTML report for a result tree.
/// Creates a styled HTML file with summary statistics, a results table
/// and toggleable cause output for failed leaves.
///
/// 为结果树生成 HTML 报告。
/// 创建一个样式化的 HTML 文件，包含摘要统计、结果表格
/// 以及失败叶子的可切换原因输出。
///
/// # Arguments / 参数
/// * `root` - The root of the result tree to report
///            要报告的结果树的根
/// * `output_path` - The file path where the HTML report will be saved
///                   保存 HTML 报告的文件路径
/// * `locale` - The locale to use for internationalization
///              用于国际化的语言环境
///
/// # Errors / 错误
/// This function will return an error if the output file cannot be
/// written to the specified path.
///
/// 如果无法将输出文件写入指定路径，此函数会返回错误。
pub fn generate_html_report(root: &ResultNode, output_path: &Path, locale: &str) -> Result<()> {
    let mut html = String::new();
    html.push_str(&format!(
        "<!DOCTYPE html><html><head><title>{}</title>",
        t!("html_report.title", locale = locale)
    ));
    html.push_str("<style>");
    html.push_str(HTML_STYLE);
    html.push_str("</style>");
    html.push_str("</head><body>");
    html.push_str(&format!(
        "<h1>{} &mdash; {}</h1>",
        t!("html_report.main_header", locale = locale),
        escape_html(root.name())
    ));

    // Add summary statistics
    html.push_str("<div class='summary-container'>");
    html.push_str(&format!(
        "<div class='summary-item'><span class='count'>{}</span><span class='label'>{}</span></div>",
        root.test_count(),
        t!("html_report.summary.tests", locale = locale)
    ));
    html.push_str(&format!(
        "<div class='summary-item'><span class='count'>{}</span><span class='label'>{}</span></div>",
        root.completed_count(),
        t!("html_report.summary.completed", locale = locale)
    ));
    html.push_str(&format!(
        "<div class='summary-item'><span class='count {}'>{}</span><span class='label'>{}</span></div>",
        if root.passed() { "passed-text" } else { "failed-text" },
        root.passed_count(),
        t!("html_report.summary.passed", locale = locale)
    ));
    html.push_str("</div>");

    // Add results table
    html.push_str("<table><thead><tr>");
    html.push_str(&format!(
        "<th>{}</th>",
        t!("html_report.table.header.name", locale = locale)
    ));
    html.push_str(&format!(
        "<th class='num'>{}</th>",
        t!("html_report.table.header.tests", locale = locale)
    ));
    html.push_str(&format!(
        "<th class='num'>{}</th>",
        t!("html_report.table.header.complete", locale = locale)
    ));
    html.push_str(&format!(
        "<th class='num'>{}</th>",
        t!("html_report.table.header.pass", locale = locale)
    ));
    html.push_str("</tr></thead><tbody>");

    let mut row_id = 0usize;
    push_node_rows(&mut html, root, 0, &mut row_id, locale);

    html.push_str("</tbody></table>");
    html.push_str(&format!(
        "<div class='footer'>{}</div>",
        t!(
            "html_report.generated_at",
            locale = locale,
            time = chrono::Local::now().format("%Y-%m-%d %H:%M:%S")
        )
    ));
    html.push_str("<script>");
    html.push_str(HTML_SCRIPT);
    html.push_str("</script></body></html>");

    fs::write_report(output_path, &html)
}

/// Emits the table rows for one subtree, children before the node itself,
/// matching the document order of the textual report.
fn push_node_rows(
    html: &mut String,
    node: &ResultNode,
    depth: usize,
    row_id: &mut usize,
    locale: &str,
) {
    if node.is_group() {
        for child in node.children() {
            push_node_rows(html, child, depth + 1, row_id, locale);
        }
        html.push_str(&format!(
            "<tr class='group-row'><td>{}{}</td><td class='num'>{}</td><td class='num'>{}</td><td class='num'>{}</td></tr>",
            "&nbsp;&nbsp;".repeat(depth),
            escape_html(node.name()),
            node.test_count(),
            node.completed_count(),
            node.passed_count()
        ));
        return;
    }

    let status_class = if node.passed() {
        "status-Passed"
    } else if !node.completed() && node.failure_cause().is_none() {
        "status-Incomplete"
    } else {
        "status-Failed"
    };

    let output_id = format!("output-{row_id}");
    *row_id += 1;

    let (output_toggle, error_details) = if let Some(cause) = node.failure_cause() {
        let mut detail = String::new();
        detail.push_str(cause.description());
        for frame in cause.trace() {
            detail.push_str(&format!(
                "\n{}.{} at {}",
                frame.origin, frame.function, frame.line
            ));
            if frame.origin.contains(FRAMEWORK_MARKER) {
                break;
            }
        }
        (
            format!(
                "<div class='output-toggle' onclick=\"toggleOutput('{}')\">{}</div>",
                output_id,
                t!("html_report.toggle_output", locale = locale)
            ),
            format!(
                "<tr id='{}' style='display:none;'><td colspan='4'><pre class='output-content'>{}</pre></td></tr>",
                output_id,
                escape_html(&detail)
            ),
        )
    } else {
        (String::new(), String::new())
    };

    html.push_str(&format!(
        "<tr><td><span class='status-cell {}'>{}{}</span>{}</td><td class='num'>1</td><td class='num'>{}</td><td class='num'>{}</td></tr>",
        status_class,
        "&nbsp;&nbsp;".repeat(depth),
        escape_html(node.name()),
        output_toggle,
        if node.completed() { "YES" } else { "NO" },
        if node.passed() { "YES" } else { "NO" }
    ));
    html.push_str(&error_details);
}

/// Simple HTML escape function to replace special characters with their HTML entities
/// 简单的 HTML 转义函数，用 HTML 实体替换特殊字符
fn escape_html(input: &str) -> String {
    input
        .replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
        .replace('"', "&quot;")
        .replace('\'', "&#39;")
}
