//! # Config Module Unit Tests / Config 模块单元测试
//!
//! This module contains unit tests for the `config.rs` module,
//! covering TOML parsing, field defaults and file loading.
//!
//! 此模块包含 `config.rs` 模块的单元测试，
//! 覆盖 TOML 解析、字段默认值和文件加载。

use std::path::PathBuf;
use suite_report::ReportConfig;

#[cfg(test)]
mod parsing_tests {
    use super::*;

    #[test]
    fn test_empty_config_uses_defaults() {
        let config: ReportConfig = toml::from_str("").unwrap();

        assert_eq!(config.language, "en");
        assert!(config.show_all_details);
        assert!(config.show_exceptions);
        assert!(config.html_output.is_none());
    }

    #[test]
    fn test_full_config_round() {
        let config: ReportConfig = toml::from_str(
            r#"
language = "zh-CN"
show_all_details = false
show_exceptions = false
html_output = "reports/suite.html"
"#,
        )
        .unwrap();

        assert_eq!(config.language, "zh-CN");
        assert!(!config.show_all_details);
        assert!(!config.show_exceptions);
        assert_eq!(config.html_output, Some(PathBuf::from("reports/suite.html")));
    }

    #[test]
    fn test_partial_config_keeps_other_defaults() {
        let config: ReportConfig = toml::from_str("show_all_details = false").unwrap();

        assert!(!config.show_all_details);
        assert!(config.show_exceptions);
        assert_eq!(config.language, "en");
    }

    #[test]
    fn test_default_impl_matches_empty_parse() {
        let parsed: ReportConfig = toml::from_str("").unwrap();
        let default = ReportConfig::default();

        assert_eq!(parsed.language, default.language);
        assert_eq!(parsed.show_all_details, default.show_all_details);
        assert_eq!(parsed.show_exceptions, default.show_exceptions);
        assert_eq!(parsed.html_output, default.html_output);
    }
}

#[cfg(test)]
mod loading_tests {
    use super::*;

    #[test]
    fn test_load_from_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("report.toml");
        std::fs::write(&path, "language = \"zh-CN\"\nshow_exceptions = false\n").unwrap();

        let config = ReportConfig::load(&path).unwrap();

        assert_eq!(config.language, "zh-CN");
        assert!(!config.show_exceptions);
        assert!(config.show_all_details);
    }

    #[test]
    fn test_load_missing_file_reports_path() {
        let err = ReportConfig::load(&PathBuf::from("does/not/exist.toml")).unwrap_err();

        assert!(format!("{err:#}").contains("Failed to read report config"));
    }

    #[test]
    fn test_load_invalid_toml_reports_parse_error() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("broken.toml");
        std::fs::write(&path, "language = [not toml").unwrap();

        let err = ReportConfig::load(&path).unwrap_err();

        assert!(format!("{err:#}").contains("Failed to parse report config"));
    }
}
