//! # Models Module Unit Tests / Models 模块单元测试
//!
//! This module contains unit tests for the data models: values and their
//! rendering, recorded failures, and the helpers on the run reports.
//!
//! 此模块包含数据模型的单元测试：值及其渲染、记录的失败，
//! 以及运行报告上的辅助方法。

use anyhow::Context;
use chrono::Utc;
use predicates::prelude::*;
use std::collections::BTreeMap;
use std::time::Duration;
use unitcheck::core::models::{
    FailureKind, MethodRole, PropertyOutcome, PropertyReport, SuiteReport, TestFailure,
};
use unitcheck::infra::invoke::Raised;
use unitcheck::Value;

fn suite_report(results: Vec<(&str, Option<TestFailure>)>) -> SuiteReport {
    SuiteReport {
        type_name: "Sample".to_string(),
        started_at: Utc::now(),
        duration: Duration::from_millis(5),
        results: results
            .into_iter()
            .map(|(name, failure)| (name.to_string(), failure))
            .collect(),
    }
}

#[cfg(test)]
mod value_tests {
    use super::*;

    #[test]
    fn test_display() {
        assert_eq!(Value::Int(-3).to_string(), "-3");
        assert_eq!(Value::Bool(true).to_string(), "true");
        assert_eq!(Value::from("hi").to_string(), "\"hi\"");
        assert_eq!(Value::from(vec![1, 2]).to_string(), "[1, 2]");
        assert_eq!(Value::List(vec![]).to_string(), "[]");
        assert_eq!(
            Value::List(vec![Value::from(vec!["a"]), Value::List(vec![])]).to_string(),
            "[[\"a\"], []]"
        );
    }

    #[test]
    fn test_accessors() {
        assert_eq!(Value::Int(4).as_int(), Some(4));
        assert_eq!(Value::Int(4).as_str(), None);
        assert_eq!(Value::from("s").as_str(), Some("s"));
        assert_eq!(Value::Bool(false).as_bool(), Some(false));
        assert_eq!(Value::from(vec![1]).as_list().map(<[Value]>::len), Some(1));
    }

    #[test]
    fn test_try_accessors_describe_the_mismatch() {
        let err = Value::from("x").try_int().unwrap_err();
        assert_eq!(err.to_string(), "expected an integer argument, got \"x\"");
        assert!(Value::Int(1).try_str().is_err());
        assert!(Value::Int(1).try_list().is_err());
        assert_eq!(Value::from(vec![2, 3]).try_list().unwrap().len(), 2);
    }

    #[test]
    fn test_json_is_untagged() {
        let value = Value::List(vec![Value::Int(1), Value::from("a"), Value::Bool(true)]);
        let json = serde_json::to_string(&value).unwrap();
        assert_eq!(json, r#"[1,"a",true]"#);

        let back: Value = serde_json::from_str(&json).unwrap();
        assert_eq!(back, value);
    }
}

#[cfg(test)]
mod role_tests {
    use super::*;

    #[test]
    fn test_static_roles() {
        assert!(MethodRole::SetupOnce.is_static());
        assert!(MethodRole::TeardownOnce.is_static());
        assert!(!MethodRole::SetupEach.is_static());
        assert!(!MethodRole::TeardownEach.is_static());
        assert!(!MethodRole::Test.is_static());
        assert!(!MethodRole::Property.is_static());
    }

    #[test]
    fn test_display_is_kebab_case() {
        assert_eq!(MethodRole::SetupOnce.to_string(), "setup-once");
        assert_eq!(MethodRole::TeardownEach.to_string(), "teardown-each");
        assert_eq!(MethodRole::Property.to_string(), "property");
    }
}

#[cfg(test)]
mod failure_tests {
    use super::*;

    #[test]
    fn test_from_error_unwraps_to_the_root_cause() {
        let error = Err::<(), _>(anyhow::anyhow!("disk full"))
            .context("while saving")
            .unwrap_err();

        let failure = TestFailure::from_error(&error);
        assert_eq!(failure.kind, FailureKind::Error);
        assert_eq!(failure.message, "disk full");
        assert_eq!(failure.causes, vec!["while saving", "disk full"]);
        assert_eq!(failure.to_string(), "disk full");
    }

    #[test]
    fn test_from_panic() {
        let failure = TestFailure::from_panic("assertion failed");
        assert!(failure.is_panic());
        assert_eq!(failure.to_string(), "panicked: assertion failed");
    }

    #[test]
    fn test_from_raised() {
        let from_error: TestFailure = Raised::Error(anyhow::anyhow!("boom")).into();
        assert_eq!(from_error.kind, FailureKind::Error);

        let from_panic: TestFailure = Raised::Panic("oops".to_string()).into();
        assert_eq!(from_panic.kind, FailureKind::Panic);
        assert_eq!(from_panic.message, "oops");
    }

    #[test]
    fn test_raised_into_error_keeps_the_panic_message() {
        let error = Raised::Panic("index out of bounds".to_string()).into_error();
        assert_eq!(error.to_string(), "panicked: index out of bounds");
    }
}

#[cfg(test)]
mod report_tests {
    use super::*;

    #[test]
    fn test_suite_report_helpers() {
        let report = suite_report(vec![
            ("b_passes", None),
            ("a_fails", Some(TestFailure::from_panic("no"))),
            ("c_passes", None),
        ]);

        assert_eq!(report.passed().collect::<Vec<_>>(), vec!["b_passes", "c_passes"]);
        let failed: Vec<_> = report.failed().map(|(name, _)| name).collect();
        assert_eq!(failed, vec!["a_fails"]);
        assert!(report.failure("a_fails").is_some_and(TestFailure::is_panic));
        assert!(report.failure("b_passes").is_none());
        assert!(report.failure("missing").is_none());
        assert!(!report.is_success());
    }

    #[test]
    fn test_empty_suite_report_is_a_success() {
        assert!(suite_report(vec![]).is_success());
    }

    #[test]
    fn test_property_report_helpers() {
        let mut results = BTreeMap::new();
        results.insert("holds".to_string(), PropertyOutcome::held(4));
        results.insert(
            "breaks".to_string(),
            PropertyOutcome {
                counterexample: Some(vec![Value::Int(0)]),
                failure: None,
                attempts: 1,
            },
        );
        let report = PropertyReport {
            type_name: "Calc".to_string(),
            started_at: Utc::now(),
            duration: Duration::ZERO,
            results,
        };

        assert_eq!(report.counterexample("breaks"), Some(&[Value::Int(0)][..]));
        assert_eq!(report.counterexample("holds"), None);
        assert_eq!(report.falsified().count(), 1);
        assert!(!report.is_success());
        assert!(!PropertyOutcome::held(0).is_falsified());
    }

    #[test]
    fn test_suite_report_json_shape() {
        let report = suite_report(vec![("broken", Some(TestFailure::from_panic("bad")))]);
        let json = serde_json::to_string(&report).unwrap();

        let has_fields = predicate::str::contains("\"type_name\":\"Sample\"")
            .and(predicate::str::contains("\"broken\""))
            .and(predicate::str::contains("\"kind\":\"Panic\""));
        assert!(has_fields.eval(&json));
    }
}
