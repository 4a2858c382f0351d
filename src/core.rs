//! # Core Module / 核心模块
//!
//! This module contains the core functionality of unitcheck:
//! suite declarations, method classification, the lifecycle orchestrator,
//! parameter domain resolution, combination building and property checking.
//!
//! 此模块包含 unitcheck 的核心功能：
//! 套件声明、方法分类、生命周期编排、参数值域解析、组合构建和属性检查。

pub mod classifier;
pub mod combinator;
pub mod config;
pub mod domain;
pub mod engine;
pub mod error;
pub mod execution;
pub mod models;
pub mod property;
pub mod suite;

// Re-exports
pub use config::EngineConfig;
pub use engine::Engine;
pub use error::EngineError;
pub use execution::run_suite;
pub use property::run_properties;
