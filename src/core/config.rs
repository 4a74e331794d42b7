use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

/// Controls how reports are produced, loaded from a TOML file by the
/// harness embedding this library.
/// 控制报告的生成方式，由嵌入此库的执行框架从 TOML 文件加载。
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct ReportConfig {
    /// The language for console messages (e.g., "en", "zh-CN").
    /// Defaults to "en" if not specified.
    ///
    /// 控制台消息的语言（例如 "en", "zh-CN"）。
    /// 如果未指定，则默认为 "en"。
    #[serde(default = "default_language")]
    pub language: String,

    /// If `true`, the report lists a row for every result, not only the
    /// failing ones. Defaults to `true`, the full report form.
    ///
    /// 如果为 `true`，报告会为每个结果列出一行，而不仅是失败的结果。
    /// 默认为 `true`，即完整报告形式。
    #[serde(default = "default_true")]
    pub show_all_details: bool,

    /// If `true`, failure causes and their call traces are included.
    /// Defaults to `true`.
    ///
    /// 如果为 `true`，则包含失败原因及其调用栈。默认为 `true`。
    #[serde(default = "default_true")]
    pub show_exceptions: bool,

    /// Optional path for an HTML rendition of the report. No HTML report
    /// is produced when absent.
    ///
    /// HTML 报告的可选输出路径。缺省时不生成 HTML 报告。
    #[serde(default)]
    pub html_output: Option<PathBuf>,
}

impl Default for ReportConfig {
    fn default() -> Self {
        Self {
            language: default_language(),
            show_all_details: true,
            show_exceptions: true,
            html_output: None,
        }
    }
}

impl ReportConfig {
    /// Loads a report configuration from a TOML file.
    pub fn load(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read report config: {}", path.display()))?;
        let config = toml::from_str(&content)
            .with_context(|| format!("Failed to parse report config: {}", path.display()))?;
        Ok(config)
    }
}

fn default_language() -> String {
    "en".to_string()
}

fn default_true() -> bool {
    true
}
