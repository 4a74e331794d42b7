//! # Core Module / 核心模块
//!
//! This module contains the core functionality of Suite Report,
//! including the result tree data model and report configuration.
//!
//! 此模块包含 Suite Report 的核心功能，
//! 包括结果树数据模型和报告配置。

pub mod config;
pub mod models;

// Re-exports
pub use config::ReportConfig;
pub use models::{FailureCause, ResultNode, TraceFrame};
