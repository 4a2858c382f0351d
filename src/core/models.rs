//! # Data Models Module / 数据模型模块
//!
//! This module defines the core data structures shared by the unit test
//! orchestrator and the property checker: method roles, parameter domain
//! markers, concrete values, recorded failures and the per-run reports.
//!
//! 此模块定义单元测试编排器和属性检查器共享的核心数据结构：
//! 方法角色、参数域标记、具体值、记录的失败以及每次运行的报告。

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fmt;
use std::time::Duration;

use crate::infra::invoke::Raised;

/// The place a declared callable takes in the test lifecycle.
/// 已声明的可调用对象在测试生命周期中的位置。
#[derive(Debug, PartialEq, Eq, Clone, Copy, Hash, Serialize, Deserialize)]
pub enum MethodRole {
    /// Runs once before any test, without an instance.
    /// 在任何测试之前运行一次，不需要实例。
    SetupOnce,
    /// Runs once after all tests, without an instance.
    /// 在所有测试之后运行一次，不需要实例。
    TeardownOnce,
    /// Runs on every fresh instance before its test.
    /// 在每个新实例的测试之前运行。
    SetupEach,
    /// Runs on every fresh instance after its test, whatever the outcome.
    /// 在每个新实例的测试之后运行，无论结果如何。
    TeardownEach,
    /// A unit test body.
    /// 单元测试主体。
    Test,
    /// A property checked against every generated combination.
    /// 针对每个生成的组合进行检查的属性。
    Property,
}

impl MethodRole {
    /// Returns `true` for roles that are invoked without an instance.
    pub fn is_static(&self) -> bool {
        matches!(self, MethodRole::SetupOnce | MethodRole::TeardownOnce)
    }
}

impl fmt::Display for MethodRole {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            MethodRole::SetupOnce => "setup-once",
            MethodRole::TeardownOnce => "teardown-once",
            MethodRole::SetupEach => "setup-each",
            MethodRole::TeardownEach => "teardown-each",
            MethodRole::Test => "test",
            MethodRole::Property => "property",
        };
        f.write_str(label)
    }
}

/// A concrete value handed to a property as a positional argument.
/// 作为位置参数传递给属性的具体值。
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Value {
    Bool(bool),
    Int(i64),
    Str(String),
    List(Vec<Value>),
}

impl Value {
    pub fn as_int(&self) -> Option<i64> {
        match self {
            Value::Int(i) => Some(*i),
            _ => None,
        }
    }

    pub fn as_str(&self) -> Option<&str> {
        match self {
            Value::Str(s) => Some(s),
            _ => None,
        }
    }

    pub fn as_list(&self) -> Option<&[Value]> {
        match self {
            Value::List(items) => Some(items),
            _ => None,
        }
    }

    pub fn as_bool(&self) -> Option<bool> {
        match self {
            Value::Bool(b) => Some(*b),
            _ => None,
        }
    }

    /// Like [`Value::as_int`], but reports a descriptive error for use inside property bodies.
    pub fn try_int(&self) -> anyhow::Result<i64> {
        self.as_int()
            .ok_or_else(|| anyhow::anyhow!("expected an integer argument, got {}", self))
    }

    pub fn try_str(&self) -> anyhow::Result<&str> {
        self.as_str()
            .ok_or_else(|| anyhow::anyhow!("expected a string argument, got {}", self))
    }

    pub fn try_list(&self) -> anyhow::Result<&[Value]> {
        self.as_list()
            .ok_or_else(|| anyhow::anyhow!("expected a list argument, got {}", self))
    }
}

impl fmt::Display for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Value::Bool(b) => write!(f, "{b}"),
            Value::Int(i) => write!(f, "{i}"),
            Value::Str(s) => write!(f, "{s:?}"),
            Value::List(items) => {
                f.write_str("[")?;
                for (i, item) in items.iter().enumerate() {
                    if i > 0 {
                        f.write_str(", ")?;
                    }
                    write!(f, "{item}")?;
                }
                f.write_str("]")
            }
        }
    }
}

impl From<i64> for Value {
    fn from(value: i64) -> Self {
        Value::Int(value)
    }
}

impl From<i32> for Value {
    fn from(value: i32) -> Self {
        Value::Int(value.into())
    }
}

impl From<bool> for Value {
    fn from(value: bool) -> Self {
        Value::Bool(value)
    }
}

impl From<&str> for Value {
    fn from(value: &str) -> Self {
        Value::Str(value.to_string())
    }
}

impl From<String> for Value {
    fn from(value: String) -> Self {
        Value::Str(value)
    }
}

impl<V: Into<Value>> From<Vec<V>> for Value {
    fn from(values: Vec<V>) -> Self {
        Value::List(values.into_iter().map(Into::into).collect())
    }
}

/// The finite, ordered candidate values for one parameter position.
pub type ValueDomain = Vec<Value>;

/// One value per declared parameter, in parameter order.
pub type Combination = Vec<Value>;

/// Describes how to enumerate the candidate values of one parameter.
/// 描述如何枚举一个参数的候选值。
#[derive(Debug, Clone, PartialEq)]
pub enum ParameterSpec {
    /// Every integer from `min` to `max`, inclusive. Empty when `min > max`.
    /// 从 `min` 到 `max`（含）的每个整数。当 `min > max` 时为空。
    IntegerRange { min: i64, max: i64 },
    /// The given strings in declared order.
    /// 按声明顺序给出的字符串。
    StringSet { values: Vec<String> },
    /// Every list of length `min..=max` whose elements come from the single type argument.
    /// 长度在 `min..=max` 之间、元素来自唯一类型参数的每个列表。
    ContainerLength {
        min: usize,
        max: usize,
        type_arguments: Vec<AnnotatedType>,
    },
    /// `count` values pulled from a named generator on the property's instance.
    /// 从属性实例上的命名生成器中拉取 `count` 个值。
    GeneratedSample { generator: String, count: usize },
}

impl ParameterSpec {
    pub fn int_range(min: i64, max: i64) -> Self {
        ParameterSpec::IntegerRange { min, max }
    }

    pub fn string_set<I, S>(values: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        ParameterSpec::StringSet {
            values: values.into_iter().map(Into::into).collect(),
        }
    }

    /// A list parameter whose single element type carries `element`.
    pub fn list(min: usize, max: usize, element: ParameterSpec) -> Self {
        ParameterSpec::ContainerLength {
            min,
            max,
            type_arguments: vec![AnnotatedType::new(element)],
        }
    }

    pub fn generated(generator: impl Into<String>, count: usize) -> Self {
        ParameterSpec::GeneratedSample {
            generator: generator.into(),
            count,
        }
    }
}

/// A declared type together with the domain markers attached to it.
/// Exactly one marker is expected; the resolver rejects anything else.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct AnnotatedType {
    pub markers: Vec<ParameterSpec>,
}

impl AnnotatedType {
    pub fn new(spec: ParameterSpec) -> Self {
        Self {
            markers: vec![spec],
        }
    }

    pub fn with_markers(markers: Vec<ParameterSpec>) -> Self {
        Self { markers }
    }

    /// A type with no marker at all.
    pub fn bare() -> Self {
        Self::default()
    }
}

/// A named property parameter.
#[derive(Debug, Clone, PartialEq)]
pub struct Parameter {
    pub name: String,
    pub ty: AnnotatedType,
}

impl Parameter {
    pub fn new(name: impl Into<String>, spec: ParameterSpec) -> Self {
        Self {
            name: name.into(),
            ty: AnnotatedType::new(spec),
        }
    }

    pub fn annotated(name: impl Into<String>, ty: AnnotatedType) -> Self {
        Self {
            name: name.into(),
            ty,
        }
    }
}

/// Distinguishes a returned error from a caught panic.
/// 区分返回的错误和捕获的 panic。
#[derive(Debug, PartialEq, Eq, Clone, Copy, Serialize, Deserialize)]
pub enum FailureKind {
    /// The callable returned `Err`.
    /// 可调用对象返回了 `Err`。
    Error,
    /// The callable panicked, e.g. through a failed `assert!`.
    /// 可调用对象发生了 panic，例如 `assert!` 失败。
    Panic,
}

/// The recorded cause of a failed test or property invocation.
/// 失败的测试或属性调用的记录原因。
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TestFailure {
    pub kind: FailureKind,
    /// The innermost cause, with any context layers unwrapped.
    /// 最内层的原因，已剥离所有上下文层。
    pub message: String,
    /// The full cause chain, outermost first.
    /// 完整的原因链，最外层在前。
    #[serde(default)]
    pub causes: Vec<String>,
}

impl TestFailure {
    pub fn from_error(error: &anyhow::Error) -> Self {
        Self {
            kind: FailureKind::Error,
            message: error.root_cause().to_string(),
            causes: error.chain().map(|cause| cause.to_string()).collect(),
        }
    }

    pub fn from_panic(message: impl Into<String>) -> Self {
        let message = message.into();
        Self {
            kind: FailureKind::Panic,
            causes: vec![message.clone()],
            message,
        }
    }

    pub fn is_panic(&self) -> bool {
        self.kind == FailureKind::Panic
    }
}

impl From<Raised> for TestFailure {
    fn from(raised: Raised) -> Self {
        match raised {
            Raised::Error(error) => TestFailure::from_error(&error),
            Raised::Panic(message) => TestFailure::from_panic(message),
        }
    }
}

impl fmt::Display for TestFailure {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.kind {
            FailureKind::Error => write!(f, "{}", self.message),
            FailureKind::Panic => write!(f, "panicked: {}", self.message),
        }
    }
}

/// Result of one unit test run over a registered type.
/// An absent failure means the test passed.
///
/// 对已注册类型进行一次单元测试运行的结果。
/// 没有失败记录表示测试通过。
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SuiteReport {
    pub type_name: String,
    pub started_at: DateTime<Utc>,
    pub duration: Duration,
    /// Test name to optional failure cause, sorted by name.
    /// 测试名称到可选失败原因的映射，按名称排序。
    pub results: BTreeMap<String, Option<TestFailure>>,
}

impl SuiteReport {
    pub fn passed(&self) -> impl Iterator<Item = &str> {
        self.results
            .iter()
            .filter(|(_, failure)| failure.is_none())
            .map(|(name, _)| name.as_str())
    }

    pub fn failed(&self) -> impl Iterator<Item = (&str, &TestFailure)> {
        self.results
            .iter()
            .filter_map(|(name, failure)| failure.as_ref().map(|f| (name.as_str(), f)))
    }

    pub fn failure(&self, test: &str) -> Option<&TestFailure> {
        self.results.get(test).and_then(Option::as_ref)
    }

    pub fn is_success(&self) -> bool {
        self.results.values().all(Option::is_none)
    }
}

/// What happened to a single property.
/// 单个属性的检查结果。
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PropertyOutcome {
    /// The first falsifying combination, if any.
    /// 第一个证伪组合（如果有）。
    pub counterexample: Option<Combination>,
    /// Set when the falsifying call raised rather than returned `false`.
    /// 当证伪调用抛出失败而不是返回 `false` 时设置。
    pub failure: Option<TestFailure>,
    /// Number of combinations actually evaluated.
    /// 实际评估的组合数量。
    pub attempts: usize,
}

impl PropertyOutcome {
    pub fn held(attempts: usize) -> Self {
        Self {
            counterexample: None,
            failure: None,
            attempts,
        }
    }

    pub fn is_falsified(&self) -> bool {
        self.counterexample.is_some()
    }
}

/// Result of one property-check run over a registered type.
/// 对已注册类型进行一次属性检查运行的结果。
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PropertyReport {
    pub type_name: String,
    pub started_at: DateTime<Utc>,
    pub duration: Duration,
    pub results: BTreeMap<String, PropertyOutcome>,
}

impl PropertyReport {
    pub fn counterexample(&self, property: &str) -> Option<&[Value]> {
        self.results
            .get(property)
            .and_then(|outcome| outcome.counterexample.as_deref())
    }

    pub fn falsified(&self) -> impl Iterator<Item = (&str, &PropertyOutcome)> {
        self.results
            .iter()
            .filter(|(_, outcome)| outcome.is_falsified())
            .map(|(name, outcome)| (name.as_str(), outcome))
    }

    pub fn is_success(&self) -> bool {
        self.results.values().all(|outcome| !outcome.is_falsified())
    }
}
