//! # Infrastructure Module / 基础设施模块
//!
//! This module provides infrastructure services for unitcheck,
//! including captured invocation of user callables, file system operations,
//! and i18n support.
//!
//! 此模块为 unitcheck 提供基础设施服务，
//! 包括用户可调用对象的捕获式调用、文件系统操作和国际化支持。

pub mod fs;
pub mod i18n;
pub mod invoke;

// Re-export i18n functions for easier access
pub use rust_i18n::t;
