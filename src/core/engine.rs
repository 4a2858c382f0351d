//! # Engine Module / 引擎模块
//!
//! The [`Engine`] owns the configuration and a registry mapping type
//! identifiers to their suite declarations. Its two entry points run the unit
//! tests or the properties of one registered type.
//!
//! [`Engine`] 持有配置以及一个将类型标识符映射到套件声明的注册表。
//! 它的两个入口分别运行某个已注册类型的单元测试或属性。

use anyhow::Result;
use std::collections::BTreeMap;

use crate::core::{
    config::EngineConfig,
    error::EngineError,
    execution,
    models::{PropertyReport, SuiteReport},
    property,
    suite::Suite,
};

/// Object-safe view of a `Suite<T>`, erasing the instance type.
trait RegisteredSuite {
    fn run_suite(&self, config: &EngineConfig) -> Result<SuiteReport>;
    fn run_properties(&self, config: &EngineConfig) -> Result<PropertyReport>;
}

impl<T> RegisteredSuite for Suite<T> {
    fn run_suite(&self, config: &EngineConfig) -> Result<SuiteReport> {
        execution::run_suite(self, config)
    }

    fn run_properties(&self, config: &EngineConfig) -> Result<PropertyReport> {
        property::run_properties(self, config)
    }
}

/// Registry of suites plus the settings every run uses.
///
/// ```
/// use unitcheck::{Engine, EngineConfig, Suite};
///
/// struct Counter(u32);
///
/// let mut engine = Engine::new(EngineConfig::default().quiet()).unwrap();
/// engine
///     .register(Suite::new("Counter", || Ok(Counter(0))).test("starts_at_zero", |c| {
///         anyhow::ensure!(c.0 == 0, "counter started at {}", c.0);
///         Ok(())
///     }))
///     .unwrap();
///
/// let report = engine.run_suite("Counter").unwrap();
/// assert!(report.is_success());
/// ```
pub struct Engine {
    config: EngineConfig,
    suites: BTreeMap<String, Box<dyn RegisteredSuite>>,
}

impl Engine {
    /// Creates an engine after validating `config`.
    pub fn new(config: EngineConfig) -> Result<Self> {
        config.validate()?;
        Ok(Self {
            config,
            suites: BTreeMap::new(),
        })
    }

    pub fn config(&self) -> &EngineConfig {
        &self.config
    }

    /// Registers a suite under its type name.
    pub fn register<T: 'static>(&mut self, suite: Suite<T>) -> Result<&mut Self> {
        let type_name = suite.type_name().to_string();
        if self.suites.contains_key(&type_name) {
            return Err(EngineError::DuplicateType(type_name).into());
        }
        self.suites.insert(type_name, Box::new(suite));
        Ok(self)
    }

    /// Registered type identifiers, sorted.
    pub fn type_names(&self) -> impl Iterator<Item = &str> {
        self.suites.keys().map(String::as_str)
    }

    /// Runs the unit tests of the type registered as `type_name`.
    pub fn run_suite(&self, type_name: &str) -> Result<SuiteReport> {
        self.lookup(type_name)?.run_suite(&self.config)
    }

    /// Checks the properties of the type registered as `type_name`.
    pub fn run_properties(&self, type_name: &str) -> Result<PropertyReport> {
        self.lookup(type_name)?.run_properties(&self.config)
    }

    fn lookup(&self, type_name: &str) -> Result<&dyn RegisteredSuite> {
        self.suites
            .get(type_name)
            .map(Box::as_ref)
            .ok_or_else(|| EngineError::UnknownType(type_name.to_string()).into())
    }
}

impl std::fmt::Debug for Engine {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Engine")
            .field("config", &self.config)
            .field("suites", &self.suites.keys().collect::<Vec<_>>())
            .finish()
    }
}
