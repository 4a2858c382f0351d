//! # File System Operations Module / 文件系统操作模块
//!
//! This module provides the small amount of file handling the engine needs:
//! reading configuration files and writing reports.
//!
//! 此模块提供引擎所需的少量文件处理功能：
//! 读取配置文件和写入报告。

use anyhow::{Context, Result};
use std::fs;
use std::path::Path;

/// Reads a UTF-8 text file, naming the path on failure.
pub fn read_to_string(path: &Path) -> Result<String> {
    fs::read_to_string(path).with_context(|| format!("Failed to read file: {}", path.display()))
}

/// Writes `contents` to `path`, creating missing parent directories first.
///
/// # Arguments
/// * `path` - Destination file path
/// * `contents` - Text to write
///
/// # Returns
/// A `Result` indicating success or failure
pub fn write_with_parents(path: &Path, contents: &str) -> Result<()> {
    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        fs::create_dir_all(parent).with_context(|| {
            format!("Failed to create report directory: {}", parent.display())
        })?;
    }
    fs::write(path, contents).with_context(|| format!("Failed to write file: {}", path.display()))
}
