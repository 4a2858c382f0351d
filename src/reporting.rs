//! # Reporting Module / 报告模块
//!
//! This module handles the display and export of run reports.
//! It provides functionality for printing colorful, formatted summaries to the
//! console with internationalization support, and for writing JSON reports.
//!
//! 此模块处理运行报告的显示和导出。
//! 它提供在控制台打印彩色格式化摘要的功能（支持国际化），以及写入 JSON 报告的功能。

pub mod console;
pub mod json;

// Re-export common reporting functions
pub use console::{print_property_summary, print_suite_summary};
pub use json::{to_json, write_report};
