//! # Reporting Module / 报告模块
//!
//! This module handles the rendering and display of result trees in
//! multiple formats: the fixed-width textual report, colored console
//! output with internationalization support, and styled HTML files.
//!
//! 此模块处理结果树在多种格式下的渲染和显示：
//! 固定宽度的文本报告、支持国际化的彩色控制台输出，以及样式化的 HTML 文件。

pub mod console;
pub mod html;
pub mod text;

// Re-export common reporting functions
pub use console::{print_failure_details, print_report, print_summary};
pub use html::generate_html_report;
