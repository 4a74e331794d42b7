//! # Suite Report Library / Suite Report 库
//!
//! This library provides the core functionality for aggregating and
//! reporting hierarchical test results: leaf results for individual test
//! cases, suite results whose pass/complete state derives from their
//! children, and report rendering in text, console and HTML form.
//!
//! 此库提供聚合与报告层级测试结果的核心功能：
//! 单个测试用例的叶子结果、由子结果派生通过/完成状态的套件结果，
//! 以及文本、控制台和 HTML 形式的报告渲染。
//!
//! ## Modules / 模块
//!
//! - `core` - Result tree data model and report configuration
//! - `infra` - Infrastructure services like report file output and i18n support
//! - `reporting` - Report rendering and display
//!
//! - `core` - 结果树数据模型和报告配置
//! - `infra` - 基础设施服务，如报告文件输出和国际化支持
//! - `reporting` - 报告渲染与显示

pub mod core;
pub mod infra;
pub mod reporting;

// Re-export commonly used items
pub use crate::core::config::ReportConfig;
pub use crate::core::models::{FailureCause, ResultNode, TraceFrame};

/// Initializes the library's internationalization (i18n) based on the system locale.
///
/// This function detects the user's system locale and sets the appropriate
/// language for console messages. It attempts to match the full locale
/// (e.g., "zh-CN"), then just the language code (e.g., "en"), and finally
/// falls back to the default language ("en").
pub fn init() {
    // Detect system locale and set it for i18n.
    // Fallback to "en" if detection fails.
    let locale = sys_locale::get_locale().unwrap_or_else(|| "en".to_string());
    let available_locales = rust_i18n::available_locales!();

    // Try to match the full locale first (e.g., "zh-CN")
    // Then try to match the language part only (e.g., "en" from "en-US")
    // Finally, fall back to "en"
    let lang = if available_locales.contains(&locale.as_str()) {
        locale.as_str()
    } else {
        locale
            .split('-')
            .next()
            .filter(|lang_code| available_locales.contains(lang_code))
            .unwrap_or("en")
    };

    rust_i18n::set_locale(lang);
}

// Initialize i18n
rust_i18n::i18n!("locales", fallback = "en");
