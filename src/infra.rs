//! # Infrastructure Module / 基础设施模块
//!
//! This module provides infrastructure services for Suite Report,
//! including report file output and i18n support.
//!
//! 此模块为 Suite Report 提供基础设施服务，
//! 包括报告文件输出和国际化支持。

pub mod fs;

// Re-export i18n functions for easier access
pub use rust_i18n::t;
