//! # Console Reporting Module / 控制台报告模块
//!
//! This module handles the display of result trees in the console.
//! It provides functionality for printing the textual report and
//! colorful per-suite summaries with internationalization support.
//!
//! 此模块处理结果树在控制台中的显示。
//! 它提供打印文本报告以及彩色套件摘要的功能，支持国际化。

use colored::*;

use crate::core::config::ReportConfig;
use crate::core::models::ResultNode;
use crate::infra::t;

/// Prints the textual report to the console under a localized banner.
/// The banner is green when the whole tree passed and red otherwise;
/// the report body itself is never colorized or localized.
///
/// 在本地化横幅下向控制台打印文本报告。
/// 整棵树通过时横幅为绿色，否则为红色；报告正文本身不着色也不本地化。
///
/// # Arguments / 参数
/// * `root` - The root of the result tree to report
///            要报告的结果树的根
/// * `config` - Report options: language and detail/exception flags
///              报告选项：语言以及详情/异常标志
pub fn print_report(root: &ResultNode, config: &ReportConfig) {
    let locale = config.language.as_str();
    let banner = t!("report.report_banner", locale = locale);
    if root.passed() {
        println!("{}", banner.green().bold());
    } else {
        println!("{}", banner.red().bold());
    }
    print!("{}", root.render(config.show_all_details, config.show_exceptions));
}

/// Prints one colored status line per top-level child of `root`.
/// Passed suites are green, incomplete ones yellow, failed ones red.
///
/// 为 `root` 的每个顶层子结果打印一行彩色状态。
/// 通过的套件为绿色，未完成的为黄色，失败的为红色。
///
/// # Output Format / 输出格式
/// ```text
/// --- Suite Summary ---
///   - Passed       | suite_alpha                              |     4     4     4
///   - Failed       | suite_beta                               |     3     3     1
/// ```
pub fn print_summary(root: &ResultNode, locale: &str) {
    println!("\n{}", t!("report.summary_banner", locale = locale).bold());

    for child in root.children() {
        println!(
            "  - {:<12} | {:<40} | {:>5} {:>5} {:>5}",
            status_colored(child, locale),
            child.name(),
            child.test_count(),
            child.completed_count(),
            child.passed_count()
        );
    }
}

/// Prints detailed information about every failed leaf in the tree,
/// with its cause description and recorded call trace.
///
/// 打印树中每个失败叶子的详细信息，包括其原因描述和记录的调用栈。
///
/// # Behavior / 行为
/// - Prints a localized all-passed message when nothing failed
/// - Includes separator lines for visual clarity
///
/// - 没有失败时打印本地化的全部通过消息
/// - 包含分隔线以提高视觉清晰度
pub fn print_failure_details(root: &ResultNode, locale: &str) {
    let mut failures = Vec::new();
    collect_failed_leaves(root, &mut failures);

    if failures.is_empty() {
        println!("{}", t!("report.no_failures", locale = locale).green());
        return;
    }

    println!("\n{}", t!("report.failure_banner", locale = locale).red().bold());
    println!("{}", "-".repeat(80));

    for (i, leaf) in failures.iter().enumerate() {
        println!(
            "[{}/{}] {}",
            i + 1,
            failures.len(),
            t!("report.failure_header", locale = locale, name = leaf.name()).red()
        );
        if let Some(cause) = leaf.failure_cause() {
            println!("  {cause}");
            for frame in cause.trace() {
                println!("    {}.{} at {}", frame.origin.cyan(), frame.function, frame.line);
            }
        }
        println!("{}", "-".repeat(80));
    }
}

/// Localized, colored status for one node.
fn status_colored(node: &ResultNode, locale: &str) -> ColoredString {
    if node.passed() {
        t!("report.status_passed", locale = locale).green()
    } else if !node.completed() && node.failure_cause().is_none() {
        t!("report.status_incomplete", locale = locale).yellow()
    } else {
        t!("report.status_failed", locale = locale).red()
    }
}

/// Collects references to every non-passing leaf, depth-first.
fn collect_failed_leaves<'a>(node: &'a ResultNode, out: &mut Vec<&'a ResultNode>) {
    if node.is_group() {
        for child in node.children() {
            collect_failed_leaves(child, out);
        }
    } else if !node.passed() {
        out.push(node);
    }
}
