//! # File System Operations Module / 文件系统操作模块
//!
//! This module provides utilities for writing rendered reports to disk.
//!
//! 此模块提供将渲染后的报告写入磁盘的实用功能。

use anyhow::{Context, Result};
use std::fs;
use std::path::Path;

/// Writes a rendered report to `path`, creating missing parent
/// directories first.
///
/// # Arguments
/// * `path` - Destination file for the report
/// * `contents` - The fully rendered report text or markup
pub fn write_report(path: &Path, contents: &str) -> Result<()> {
    if let Some(parent) = path.parent() {
        if !parent.as_os_str().is_empty() && !parent.exists() {
            fs::create_dir_all(parent).with_context(|| {
                format!("Failed to create report directory: {}", parent.display())
            })?;
        }
    }
    fs::write(path, contents)
        .with_context(|| format!("Failed to write report file: {}", path.display()))
}
