// Shared fixtures for integration tests
#![allow(dead_code)]

use std::cell::{Cell, RefCell};
use std::rc::Rc;

use unitcheck::core::error::engine_error;
use unitcheck::{Engine, EngineConfig, EngineError, Parameter, ParameterSpec, Suite};

/// The calculator from the end-to-end scenario.
pub struct Calc;

impl Calc {
    pub fn add(&self, a: i64, b: i64) -> i64 {
        a + b
    }
}

/// `add(a in 1..=2, b in 10..=11) == a + b`, which holds for all 4 combinations.
pub fn calc_suite() -> Suite<Calc> {
    Suite::new("Calc", || Ok(Calc)).property(
        "add",
        vec![
            Parameter::new("a", ParameterSpec::int_range(1, 2)),
            Parameter::new("b", ParameterSpec::int_range(10, 11)),
        ],
        |calc, args| {
            let (a, b) = (args[0].try_int()?, args[1].try_int()?);
            Ok(calc.add(a, b) == a + b)
        },
    )
}

/// An engine that does not print progress lines.
pub fn quiet_engine() -> Engine {
    Engine::new(EngineConfig::default().quiet()).expect("default config is valid")
}

pub fn quiet_engine_with(config: EngineConfig) -> Engine {
    Engine::new(config.quiet()).expect("test config is valid")
}

/// Extracts the `EngineError` behind a fatal run error.
pub fn expect_engine_error(error: &anyhow::Error) -> EngineError {
    engine_error(error)
        .cloned()
        .unwrap_or_else(|| panic!("expected an EngineError, got: {error:?}"))
}

/// A shared, append-only log that lifecycle callables write into.
#[derive(Clone, Default)]
pub struct CallLog(Rc<RefCell<Vec<String>>>);

impl CallLog {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&self, entry: impl Into<String>) {
        self.0.borrow_mut().push(entry.into());
    }

    pub fn entries(&self) -> Vec<String> {
        self.0.borrow().clone()
    }
}

/// Counts invocations from inside `'static` closures.
#[derive(Clone, Default)]
pub struct Counter(Rc<Cell<usize>>);

impl Counter {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn bump(&self) -> usize {
        let next = self.0.get() + 1;
        self.0.set(next);
        next
    }

    pub fn get(&self) -> usize {
        self.0.get()
    }
}
