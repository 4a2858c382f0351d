//! # Property Executor Module / 属性执行模块
//!
//! Checks every property declared on a suite against the combinations of its
//! parameter domains. A single instance is shared by all properties and all of
//! their combinations. Evaluation of a property stops at its first falsifying
//! combination, and at most `max_attempts_per_property` combinations are tried.
//!
//! 针对参数值域的组合检查套件上声明的每个属性。所有属性及其所有组合
//! 共享同一个实例。属性的评估在第一个证伪组合处停止，
//! 最多尝试 `max_attempts_per_property` 个组合。

use anyhow::{Context, Result};
use chrono::Utc;
use colored::*;
use std::collections::BTreeMap;
use std::time::Instant;

use crate::{
    core::{
        classifier::classify_properties,
        combinator::Combinations,
        config::EngineConfig,
        domain::DomainResolver,
        error::EngineError,
        execution::construct,
        models::{Combination, PropertyOutcome, PropertyReport, TestFailure, Value},
        suite::{PropertyDecl, Suite},
    },
    infra::{i18n::Message, invoke::invoke_captured},
};

/// Runs every property declared on `suite`.
///
/// # Arguments
/// * `suite` - The declaration of the type under test
/// * `config` - Engine settings; both bounds and the domain size limit apply
///
/// # Returns
/// A `PropertyReport` mapping each property to its outcome
///
/// # Errors
/// A configuration error (declaration, domain or generator problems), a
/// constructor failure, or `BudgetExceeded` once more than `max_properties`
/// outcomes have been recorded.
pub fn run_properties<T>(suite: &Suite<T>, config: &EngineConfig) -> Result<PropertyReport> {
    let locale = config.language.as_str();
    let properties = classify_properties(suite.methods(), suite.properties())
        .with_context(|| format!("Invalid property declarations on '{}'", suite.type_name()))?;

    let started_at = Utc::now();
    let start_time = Instant::now();

    let mut instance = construct(suite)?;
    let resolver = DomainResolver::new(suite, config.max_domain_size);

    if config.verbose {
        println!(
            "{}",
            Message::PropertyStart {
                type_name: suite.type_name(),
                count: properties.len(),
            }
            .render(locale)
            .blue()
        );
    }

    let mut results = BTreeMap::new();
    for property in properties {
        let domains = resolver
            .resolve_all(&property.parameters, &mut instance)
            .with_context(|| {
                format!(
                    "Failed to resolve parameter domains of property '{}'",
                    property.name
                )
            })?;

        let outcome = check_property(
            property,
            &mut instance,
            Combinations::from_domains(&domains),
            config.max_attempts_per_property,
        );

        if config.verbose {
            report_outcome(&property.name, &outcome, locale);
        }
        results.insert(property.name.clone(), outcome);

        if results.len() > config.max_properties {
            return Err(EngineError::BudgetExceeded {
                limit: config.max_properties,
            }
            .into());
        }
    }

    let duration = start_time.elapsed();
    if config.verbose {
        let falsified = results.values().filter(|o| o.is_falsified()).count();
        println!(
            "{}",
            Message::PropertyFinished {
                type_name: suite.type_name(),
                held: results.len() - falsified,
                falsified,
                duration: &format!("{:.2?}", duration),
            }
            .render(locale)
            .bold()
        );
    }

    Ok(PropertyReport {
        type_name: suite.type_name().to_string(),
        started_at,
        duration,
        results,
    })
}

/// Evaluates the first `max_attempts` combinations in order, stopping at the
/// first one that returns `false` or raises.
pub fn check_property<T, I>(
    property: &PropertyDecl<T>,
    instance: &mut T,
    combinations: I,
    max_attempts: usize,
) -> PropertyOutcome
where
    I: IntoIterator<Item = Combination>,
{
    let mut attempts = 0;
    for combination in combinations.into_iter().take(max_attempts) {
        attempts += 1;
        match invoke_captured(|| (property.body)(&mut *instance, &combination)) {
            Ok(true) => continue,
            Ok(false) => {
                return PropertyOutcome {
                    counterexample: Some(combination),
                    failure: None,
                    attempts,
                };
            }
            Err(raised) => {
                return PropertyOutcome {
                    counterexample: Some(combination),
                    failure: Some(TestFailure::from(raised)),
                    attempts,
                };
            }
        }
    }
    PropertyOutcome::held(attempts)
}

fn report_outcome(name: &str, outcome: &PropertyOutcome, locale: &str) {
    match &outcome.counterexample {
        None => println!(
            "{}",
            Message::PropertyHeld {
                name,
                attempts: outcome.attempts,
            }
            .render(locale)
            .green()
        ),
        Some(counterexample) => println!(
            "{}",
            Message::PropertyFalsified {
                name,
                attempts: outcome.attempts,
                counterexample: &format_combination(counterexample),
            }
            .render(locale)
            .red()
        ),
    }
}

/// Renders a combination as a parenthesised argument list, e.g. `(1, "x")`.
pub fn format_combination(values: &[Value]) -> String {
    let rendered: Vec<String> = values.iter().map(ToString::to_string).collect();
    format!("({})", rendered.join(", "))
}
