use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::path::Path;

use crate::core::error::EngineError;
use crate::infra::fs;

/// Default number of combinations evaluated per property.
pub const DEFAULT_MAX_ATTEMPTS_PER_PROPERTY: usize = 100;
/// Default number of property outcomes recorded before a run is aborted.
pub const DEFAULT_MAX_PROPERTIES: usize = 100;
/// Default ceiling on the size of a single materialised value domain.
pub const DEFAULT_MAX_DOMAIN_SIZE: usize = 1_000_000;

/// Runtime settings for the engine, optionally loaded from a TOML file.
/// Every field has a default, so an empty file is a valid configuration.
///
/// 引擎的运行时设置，可以从 TOML 文件加载。
/// 每个字段都有默认值，因此空文件也是有效的配置。
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
#[serde(deny_unknown_fields)]
pub struct EngineConfig {
    /// The language for progress and summary messages (e.g., "en", "zh-CN").
    /// 进度和摘要消息的语言（例如 "en", "zh-CN"）。
    #[serde(default = "default_language")]
    pub language: String,

    /// How many combinations of a property are evaluated at most.
    /// 每个属性最多评估的组合数量。
    #[serde(default = "default_max_attempts_per_property")]
    pub max_attempts_per_property: usize,

    /// How many property outcomes may be recorded before the run fails with
    /// a budget error.
    /// 在运行因预算错误失败之前最多可以记录的属性结果数量。
    #[serde(default = "default_max_properties")]
    pub max_properties: usize,

    /// The largest value domain the resolver will materialise for one parameter,
    /// container expansions included.
    /// 解析器为单个参数物化的最大值域（包括容器展开）。
    #[serde(default = "default_max_domain_size")]
    pub max_domain_size: usize,

    /// Print a line per test and property while running.
    /// 运行时为每个测试和属性打印一行。
    #[serde(default = "default_verbose")]
    pub verbose: bool,
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self {
            language: default_language(),
            max_attempts_per_property: default_max_attempts_per_property(),
            max_properties: default_max_properties(),
            max_domain_size: default_max_domain_size(),
            verbose: default_verbose(),
        }
    }
}

impl EngineConfig {
    /// Parses and validates a configuration from TOML text.
    pub fn from_toml_str(content: &str) -> Result<Self> {
        let config: EngineConfig =
            toml::from_str(content).context("Failed to parse engine configuration")?;
        config.validate()?;
        Ok(config)
    }

    /// Loads, parses and validates a configuration file.
    pub fn from_file(path: &Path) -> Result<Self> {
        let content = fs::read_to_string(path)?;
        Self::from_toml_str(&content)
            .with_context(|| format!("Invalid configuration file: {}", path.display()))
    }

    /// Checks that every bound is usable.
    pub fn validate(&self) -> Result<()> {
        if self.max_attempts_per_property == 0 {
            return Err(EngineError::InvalidConfig(
                "max_attempts_per_property must be at least 1".to_string(),
            )
            .into());
        }
        if self.max_properties == 0 {
            return Err(
                EngineError::InvalidConfig("max_properties must be at least 1".to_string()).into(),
            );
        }
        if self.max_domain_size == 0 {
            return Err(
                EngineError::InvalidConfig("max_domain_size must be at least 1".to_string()).into(),
            );
        }
        Ok(())
    }

    /// A copy of this configuration with progress output switched off.
    ///
    /// Panics caught inside test and property bodies are never echoed by the
    /// panic hook, in either mode; they only show up as recorded failures.
    pub fn quiet(mut self) -> Self {
        self.verbose = false;
        self
    }
}

fn default_language() -> String {
    "en".to_string()
}

fn default_max_attempts_per_property() -> usize {
    DEFAULT_MAX_ATTEMPTS_PER_PROPERTY
}

fn default_max_properties() -> usize {
    DEFAULT_MAX_PROPERTIES
}

fn default_max_domain_size() -> usize {
    DEFAULT_MAX_DOMAIN_SIZE
}

fn default_verbose() -> bool {
    true
}
