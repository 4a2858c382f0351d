//! # Console Reporting Module / 控制台报告模块
//!
//! This module handles the display of run reports in the console.
//! It provides functionality for printing colorful, formatted summaries with
//! internationalization support.
//!
//! 此模块处理控制台中运行报告的显示。
//! 它提供打印彩色格式化摘要的功能，支持国际化。

use colored::*;

use crate::core::models::{PropertyReport, SuiteReport};
use crate::core::property::format_combination;
use crate::infra::i18n::Message;

/// Prints a formatted summary of a unit test run to the console.
/// Rows follow the report's name order.
///
/// 在控制台打印单元测试运行的格式化摘要。
/// 行按报告中的名称顺序排列。
///
/// # Arguments / 参数
/// * `report` - The report to summarize
///              要总结的报告
/// * `locale` - The language locale to use for messages
///              用于消息的语言区域设置
///
/// # Output Format / 输出格式
/// ```text
/// --- Unit Test Summary ---
///   - Passed     | adds_numbers                            |
///   - Failed     | divides_by_zero                         | attempt to divide by zero
///   1 of 2 succeeded
/// ```
pub fn print_suite_summary(report: &SuiteReport, locale: &str) {
    println!("\n{}", Message::SuiteBanner.render(locale).bold());

    if report.results.is_empty() {
        println!("  {}", Message::NoResults.render(locale).dimmed());
        return;
    }

    for (name, failure) in &report.results {
        let (status, detail) = match failure {
            None => (Message::StatusPassed.render(locale).green(), String::new()),
            Some(failure) => (
                Message::StatusFailed.render(locale).red(),
                failure.to_string(),
            ),
        };
        println!("  - {:<10} | {:<40} | {}", status, name, detail);
    }

    let passed = report.passed().count();
    println!(
        "  {}",
        Message::Totals {
            passed,
            total: report.results.len(),
        }
        .render(locale)
    );
}

/// Prints a formatted summary of a property check run to the console,
/// including the counterexample of every falsified property.
///
/// 在控制台打印属性检查运行的格式化摘要，包括每个被证伪属性的反例。
pub fn print_property_summary(report: &PropertyReport, locale: &str) {
    println!("\n{}", Message::PropertyBanner.render(locale).bold());

    if report.results.is_empty() {
        println!("  {}", Message::NoResults.render(locale).dimmed());
        return;
    }

    for (name, outcome) in &report.results {
        let attempts = Message::Attempts {
            attempts: outcome.attempts,
        }
        .render(locale);
        let (status, detail) = match &outcome.counterexample {
            None => (Message::StatusHeld.render(locale).green(), attempts),
            Some(counterexample) => {
                let mut detail = format!(
                    "{}, {}",
                    attempts,
                    Message::Counterexample {
                        counterexample: &format_combination(counterexample),
                    }
                    .render(locale)
                );
                if let Some(failure) = &outcome.failure {
                    detail.push_str(&format!(": {}", failure));
                }
                (Message::StatusFalsified.render(locale).red(), detail)
            }
        };
        println!("  - {:<10} | {:<40} | {}", status, name, detail);
    }

    let held = report.results.len() - report.falsified().count();
    println!(
        "  {}",
        Message::Totals {
            passed: held,
            total: report.results.len(),
        }
        .render(locale)
    );
}
