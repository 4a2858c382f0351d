//! # unitcheck Library / unitcheck 库
//!
//! A small test execution engine with two jobs: running lifecycle-managed unit
//! tests declared on a type, and checking properties exhaustively (up to a
//! bound) over the combinations of domains declared on their parameters.
//!
//! 一个小型测试执行引擎，承担两项工作：运行在类型上声明的、
//! 由生命周期管理的单元测试，以及在参数声明的值域组合上
//! 穷举地（在上限之内）检查属性。
//!
//! ## Modules / 模块
//!
//! - `core` - Declarations, classification, orchestration and property checking
//! - `infra` - Captured invocation of user code and file system helpers
//! - `reporting` - Console summaries and JSON reports
//!
//! - `core` - 声明、分类、编排和属性检查
//! - `infra` - 用户代码的捕获式调用和文件系统辅助功能
//! - `reporting` - 控制台摘要和 JSON 报告

pub mod core;
pub mod infra;
pub mod reporting;

// Re-export commonly used items
pub use core::models;
pub use core::models::{Parameter, ParameterSpec, Value};
pub use core::suite::Suite;
pub use core::{Engine, EngineConfig, EngineError};

/// Initializes the process-wide default locale from the system locale.
///
/// This function detects the user's system locale and sets the appropriate
/// language for messages that are not given an explicit locale. It attempts to
/// match the full locale (e.g., "zh-CN"), then just the language code
/// (e.g., "en"), and finally falls back to the default language ("en").
pub fn init() {
    let locale = sys_locale::get_locale().unwrap_or_else(|| "en".to_string());
    rust_i18n::set_locale(resolve_locale(&locale));
}

/// Maps a requested locale onto one with a message catalogue.
pub fn resolve_locale(requested: &str) -> &str {
    let available_locales = rust_i18n::available_locales!();

    if available_locales.contains(&requested) {
        requested
    } else {
        requested
            .split('-')
            .next()
            .filter(|lang_code| available_locales.contains(lang_code))
            .unwrap_or("en")
    }
}

// Initialize i18n
rust_i18n::i18n!("locales", fallback = "en");
