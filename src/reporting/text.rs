//! # Textual Report Module / 文本报告模块
//!
//! Fixed-width plain text rendering of a result tree. The layout is a
//! compatibility surface: the column widths, header labels and YES/NO
//! flags below are pinned by the unit tests and must not drift.
//!
//! 结果树的固定宽度纯文本渲染。其布局是兼容性表面：
//! 下方的列宽、表头标签和 YES/NO 标志由单元测试锁定，不得漂移。

use crate::core::models::ResultNode;

/// Marker identifying the framework's own code in captured call traces.
/// Trace rendering stops after the first frame whose origin contains this
/// substring, so only caller-relevant frames are shown.
///
/// 在捕获的调用栈中标识框架自身代码的标记。
/// 栈渲染在第一个来源包含此子串的栈帧之后停止，
/// 因此只显示与调用者相关的栈帧。
pub const FRAMEWORK_MARKER: &str = "suite_report::";

// Summary labels are padded to a common 10-column width.
const LABEL_TESTS: &str = "Tests     ";
const LABEL_COMPLETED: &str = "Completed ";
const LABEL_PASSED: &str = "Passed    ";

// Detail table header: a 50-column name field and two 8-column columns.
const DETAIL_HEADER: &str = "\nName                                             Complete     Pass\n";
const DETAIL_RULE: &str = "================================================== ======== ========\n";

// Leaf row flags, right-justified in their 9-column cells.
const FLAG_YES: &str = "      YES";
const FLAG_NO: &str = "       NO";

impl ResultNode {
    /// Renders a human-readable textual report of this subtree.
    ///
    /// `show_all_details` lists a row for every result rather than only
    /// the failing ones; `show_exceptions` appends failure causes with
    /// their truncated call traces. Rendering is a pure read-only
    /// traversal and may be invoked repeatedly.
    ///
    /// 渲染此子树的人类可读文本报告。
    ///
    /// `show_all_details` 为每个结果列出一行，而不仅是失败的结果；
    /// `show_exceptions` 附加失败原因及其截断的调用栈。
    /// 渲染是纯只读遍历，可以反复调用。
    pub fn render(&self, show_all_details: bool, show_exceptions: bool) -> String {
        let mut report = String::new();
        self.build_report(&mut report, true, show_all_details, show_exceptions);
        report
    }

    /// The convenience full report form, `render(true, true)`.
    ///
    /// 便捷的完整报告形式，即 `render(true, true)`。
    pub fn render_full(&self) -> String {
        self.render(true, true)
    }

    /// Depth-first, children-before-self emission. The header and the
    /// root's own statistics appear only at the top-level call.
    fn build_report(&self, report: &mut String, top_level: bool, details: bool, exceptions: bool) {
        if top_level {
            report.push_str(&format!("{}:-\n", self.name()));
            report.push_str(&format!("{}{}\n", LABEL_TESTS, self.test_count()));
            report.push_str(&format!("{}{}\n", LABEL_COMPLETED, self.completed_count()));
            report.push_str(&format!("{}{}\n", LABEL_PASSED, self.passed_count()));
            if details || !self.passed() {
                report.push_str(DETAIL_HEADER);
                report.push_str(DETAIL_RULE);
            }
        }

        if self.is_group() && (exceptions || details) {
            for child in self.children() {
                child.build_report(report, false, details, exceptions);
            }
        }

        if details || !self.passed() {
            if self.is_group() {
                report.push_str(&format!(
                    "{:>8} {:<41}{:>9}{:>9}\n",
                    self.test_count(),
                    self.name(),
                    self.completed_count(),
                    self.passed_count()
                ));
            } else {
                report.push_str(&format!("{:<50}", self.name()));
                report.push_str(if self.completed() { FLAG_YES } else { FLAG_NO });
                report.push_str(if self.passed() { FLAG_YES } else { FLAG_NO });
                report.push('\n');
            }
        }

        if exceptions {
            if let Some(cause) = self.failure_cause() {
                report.push_str(&format!("  >> {}\n", cause));
                report.push_str("  >> Cause:\n");
                for frame in cause.trace() {
                    report.push_str(&format!(
                        "  >> {}.{} at {}\n",
                        frame.origin, frame.function, frame.line
                    ));
                    // Stop where the trace re-enters framework code.
                    if frame.origin.contains(FRAMEWORK_MARKER) {
                        break;
                    }
                }
            }
        }
    }
}
