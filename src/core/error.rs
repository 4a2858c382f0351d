//! # Engine Errors / 引擎错误
//!
//! Fatal conditions that abort a whole run for one type. Per-test and
//! per-property failures are never reported through this type; they are
//! recorded in the run reports instead.
//!
//! 会中止某个类型整次运行的致命错误。单个测试或属性的失败
//! 不会通过此类型报告，而是记录在运行报告中。
//!
//! Underlying causes are attached as `anyhow` context layers, so callers can
//! still reach an `EngineError` with `anyhow::Error::downcast_ref`.

use thiserror::Error;

use crate::core::models::MethodRole;

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum EngineError {
    #[error("no suite registered for type '{0}'")]
    UnknownType(String),

    #[error("a suite for type '{0}' is already registered")]
    DuplicateType(String),

    #[error("failed to construct an instance of '{type_name}'")]
    Construction { type_name: String },

    #[error("more than one role binding detected: {name}")]
    DuplicateRoleBinding { name: String },

    #[error("{name} is declared as {role} but is bound as {found} callable")]
    RoleMismatch {
        name: String,
        role: MethodRole,
        found: &'static str,
    },

    #[error("no domain marker found on parameter '{parameter}'")]
    MissingDomainMarker { parameter: String },

    #[error("parameter '{parameter}' carries {count} domain markers; exactly one is allowed")]
    AmbiguousDomainMarker { parameter: String, count: usize },

    #[error(
        "container parameter '{parameter}' has {found} type arguments; exactly one is supported"
    )]
    MalformedContainer { parameter: String, found: usize },

    #[error("generator '{generator}' is not declared on '{type_name}'")]
    UnknownGenerator { generator: String, type_name: String },

    #[error("generator '{generator}' failed while sampling values")]
    GeneratorFailed { generator: String },

    #[error("value domain for parameter '{parameter}' exceeds the limit of {limit} values")]
    DomainTooLarge { parameter: String, limit: usize },

    #[error("{role} callable '{method}' failed")]
    LifecycleFailure { method: String, role: MethodRole },

    #[error("too many properties: more than {limit} outcomes recorded")]
    BudgetExceeded { limit: usize },

    #[error("invalid configuration: {0}")]
    InvalidConfig(String),
}

impl EngineError {
    /// Returns `true` for errors caused by how a type was declared or configured,
    /// as opposed to failures raised while running it.
    pub fn is_configuration_error(&self) -> bool {
        !matches!(
            self,
            EngineError::LifecycleFailure { .. } | EngineError::BudgetExceeded { .. }
        )
    }
}

/// Finds the `EngineError` behind a fatal run error, looking through context layers.
pub fn engine_error(error: &anyhow::Error) -> Option<&EngineError> {
    error.downcast_ref::<EngineError>()
}
