//! # I18n Module / 国际化模块
//!
//! Every localized line the engine prints goes through [`Message`]. Each
//! variant names one catalogue entry in `locales/` and carries the values its
//! placeholders need, so rendering a message always uses the same key and
//! the same argument names.
//!
//! 引擎打印的每一行本地化文本都通过 [`Message`] 生成。每个变体对应
//! `locales/` 中的一个目录条目，并携带其占位符所需的值。

use crate::infra::t;

/// A localized console message and its arguments.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Message<'a> {
    SuiteStart { type_name: &'a str, count: usize },
    TestPassed { name: &'a str },
    TestFailed { name: &'a str, cause: &'a str },
    SuiteFinished { type_name: &'a str, passed: usize, failed: usize, duration: &'a str },
    PropertyStart { type_name: &'a str, count: usize },
    PropertyHeld { name: &'a str, attempts: usize },
    PropertyFalsified { name: &'a str, attempts: usize, counterexample: &'a str },
    PropertyFinished { type_name: &'a str, held: usize, falsified: usize, duration: &'a str },
    SuiteBanner,
    PropertyBanner,
    StatusPassed,
    StatusFailed,
    StatusHeld,
    StatusFalsified,
    NoResults,
    Attempts { attempts: usize },
    Counterexample { counterexample: &'a str },
    Totals { passed: usize, total: usize },
}

impl Message<'_> {
    /// Renders the message in `locale`, falling back to English for unknown locales.
    pub fn render(&self, locale: &str) -> String {
        match *self {
            Message::SuiteStart { type_name, count } => {
                t!("suite.start", locale = locale, count = count, type_name = type_name).into()
            }
            Message::TestPassed { name } => t!("suite.test_passed", locale = locale, name = name).into(),
            Message::TestFailed { name, cause } => {
                t!("suite.test_failed", locale = locale, name = name, cause = cause).into()
            }
            Message::SuiteFinished {
                type_name,
                passed,
                failed,
                duration,
            } => t!(
                "suite.finished",
                locale = locale,
                type_name = type_name,
                passed = passed,
                failed = failed,
                duration = duration
            ).into(),
            Message::PropertyStart { type_name, count } => {
                t!("property.start", locale = locale, count = count, type_name = type_name).into()
            }
            Message::PropertyHeld { name, attempts } => {
                t!("property.held", locale = locale, name = name, attempts = attempts).into()
            }
            Message::PropertyFalsified {
                name,
                attempts,
                counterexample,
            } => t!(
                "property.falsified",
                locale = locale,
                name = name,
                attempts = attempts,
                counterexample = counterexample
            ).into(),
            Message::PropertyFinished {
                type_name,
                held,
                falsified,
                duration,
            } => t!(
                "property.finished",
                locale = locale,
                type_name = type_name,
                held = held,
                falsified = falsified,
                duration = duration
            ).into(),
            Message::SuiteBanner => t!("summary.suite_banner", locale = locale).into(),
            Message::PropertyBanner => t!("summary.property_banner", locale = locale).into(),
            Message::StatusPassed => t!("summary.status_passed", locale = locale).into(),
            Message::StatusFailed => t!("summary.status_failed", locale = locale).into(),
            Message::StatusHeld => t!("summary.status_held", locale = locale).into(),
            Message::StatusFalsified => t!("summary.status_falsified", locale = locale).into(),
            Message::NoResults => t!("summary.no_results", locale = locale).into(),
            Message::Attempts { attempts } => {
                t!("summary.attempts", locale = locale, attempts = attempts).into()
            }
            Message::Counterexample { counterexample } => {
                t!("summary.counterexample", locale = locale, counterexample = counterexample).into()
            }
            Message::Totals { passed, total } => {
                t!("summary.totals", locale = locale, passed = passed, total = total).into()
            }
        }
    }
}
