//! # JSON Reporting Module / JSON 报告模块
//!
//! Serializes run reports for tooling that consumes them after the run.
//!
//! 序列化运行报告，供运行结束后使用这些报告的工具读取。

use anyhow::{Context, Result};
use serde::Serialize;
use std::path::Path;

use crate::infra::fs;

/// Renders any report as pretty-printed JSON.
pub fn to_json<R: Serialize>(report: &R) -> Result<String> {
    serde_json::to_string_pretty(report).context("Failed to serialize report")
}

/// Writes a report as JSON to `output_path`, creating parent directories.
///
/// # Arguments / 参数
/// * `report` - A `SuiteReport` or `PropertyReport`
///              `SuiteReport` 或 `PropertyReport`
/// * `output_path` - The file path where the report will be saved
///                   保存报告的文件路径
///
/// # Errors / 错误
/// Returns an error if the report cannot be serialized or the file cannot be written.
/// 如果报告无法序列化或文件无法写入，则返回错误。
pub fn write_report<R: Serialize>(report: &R, output_path: &Path) -> Result<()> {
    let json = to_json(report)?;
    fs::write_with_parents(output_path, &json)
}
