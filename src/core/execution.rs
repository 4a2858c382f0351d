//! # Lifecycle Orchestrator Module / 生命周期编排模块
//!
//! This module runs the unit tests declared on a suite. One-time setup runs
//! before any test and one-time teardown after all of them; every test gets a
//! freshly constructed instance wrapped in the per-test setup and teardown
//! callables.
//!
//! 此模块运行套件上声明的单元测试。一次性初始化在任何测试之前运行，
//! 一次性清理在所有测试之后运行；每个测试都会获得一个新构建的实例，
//! 并由每测试的初始化和清理可调用对象包裹。
//!
//! Only failures raised by a test body are isolated and recorded. A failure in
//! any setup or teardown callable, or in the constructor, aborts the run.

use anyhow::{Context, Result};
use chrono::Utc;
use colored::*;
use std::collections::BTreeMap;
use std::time::Instant;

use crate::{
    core::{
        classifier::{classify, SeenNames},
        config::EngineConfig,
        error::EngineError,
        models::{MethodRole, SuiteReport, TestFailure},
        suite::{MethodDecl, Suite},
    },
    infra::{i18n::Message, invoke::invoke_captured},
};

/// The lifecycle callables of one suite, classified and sorted.
struct Lifecycle<'a, T> {
    setup_once: Vec<&'a MethodDecl<T>>,
    teardown_once: Vec<&'a MethodDecl<T>>,
    setup_each: Vec<&'a MethodDecl<T>>,
    teardown_each: Vec<&'a MethodDecl<T>>,
    tests: Vec<&'a MethodDecl<T>>,
}

impl<'a, T> Lifecycle<'a, T> {
    /// Classifies every role with one shared set of seen names.
    fn classify(suite: &'a Suite<T>) -> Result<Self> {
        let methods = suite.methods();
        let mut seen = SeenNames::new();
        Ok(Self {
            setup_once: classify(methods, MethodRole::SetupOnce, &mut seen)?,
            teardown_once: classify(methods, MethodRole::TeardownOnce, &mut seen)?,
            setup_each: classify(methods, MethodRole::SetupEach, &mut seen)?,
            teardown_each: classify(methods, MethodRole::TeardownEach, &mut seen)?,
            tests: classify(methods, MethodRole::Test, &mut seen)?,
        })
    }
}

/// Runs every test declared on `suite` and records the outcome of each.
///
/// # Arguments
/// * `suite` - The declaration of the type under test
/// * `config` - Engine settings (locale and verbosity are used here)
///
/// # Returns
/// A `SuiteReport` mapping each test name to its optional failure cause
///
/// # Errors
/// Any configuration error found while classifying, a constructor failure, or
/// a failure raised by a setup or teardown callable.
pub fn run_suite<T>(suite: &Suite<T>, config: &EngineConfig) -> Result<SuiteReport> {
    let locale = config.language.as_str();
    let lifecycle = Lifecycle::classify(suite)
        .with_context(|| format!("Invalid test declarations on '{}'", suite.type_name()))?;

    let started_at = Utc::now();
    let start_time = Instant::now();

    if config.verbose {
        println!(
            "{}",
            Message::SuiteStart {
                type_name: suite.type_name(),
                count: lifecycle.tests.len(),
            }
            .render(locale)
            .blue()
        );
    }

    for method in &lifecycle.setup_once {
        run_lifecycle_method(method, None)?;
    }

    let mut results = BTreeMap::new();
    for test in &lifecycle.tests {
        // Fresh instance per test; only static state carries over.
        let mut instance = construct(suite)?;

        for method in &lifecycle.setup_each {
            run_lifecycle_method(method, Some(&mut instance))?;
        }

        let outcome = invoke_captured(|| test.binding.call(Some(&mut instance)))
            .err()
            .map(TestFailure::from);

        if config.verbose {
            match &outcome {
                None => println!(
                    "{}",
                    Message::TestPassed { name: &test.name }.render(locale).green()
                ),
                Some(failure) => println!(
                    "{}",
                    Message::TestFailed {
                        name: &test.name,
                        cause: &failure.to_string(),
                    }
                    .render(locale)
                    .red()
                ),
            }
        }
        results.insert(test.name.clone(), outcome);

        for method in &lifecycle.teardown_each {
            run_lifecycle_method(method, Some(&mut instance))?;
        }
    }

    for method in &lifecycle.teardown_once {
        run_lifecycle_method(method, None)?;
    }

    let duration = start_time.elapsed();
    if config.verbose {
        let failed = results.values().filter(|outcome| outcome.is_some()).count();
        println!(
            "{}",
            Message::SuiteFinished {
                type_name: suite.type_name(),
                passed: results.len() - failed,
                failed,
                duration: &format!("{:.2?}", duration),
            }
            .render(locale)
            .bold()
        );
    }

    Ok(SuiteReport {
        type_name: suite.type_name().to_string(),
        started_at,
        duration,
        results,
    })
}

/// Builds an instance, reporting any failure as a fatal construction error.
pub(crate) fn construct<T>(suite: &Suite<T>) -> Result<T> {
    invoke_captured(|| suite.construct())
        .map_err(|raised| raised.into_error())
        .with_context(|| EngineError::Construction {
            type_name: suite.type_name().to_string(),
        })
}

/// Invokes a setup or teardown callable. Its failures are not isolated.
fn run_lifecycle_method<T>(method: &MethodDecl<T>, instance: Option<&mut T>) -> Result<()> {
    invoke_captured(|| method.binding.call(instance))
        .map_err(|raised| raised.into_error())
        .with_context(|| EngineError::LifecycleFailure {
            method: method.name.clone(),
            role: method.role,
        })
}
