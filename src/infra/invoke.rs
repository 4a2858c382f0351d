//! # Captured Invocation Module / 捕获式调用模块
//!
//! Runs user-supplied callables and captures whatever they raise. A returned
//! `Err` and a panic (for example from a failed `assert!`) both become a
//! [`Raised`] value, so the orchestrators can record or propagate them the
//! same way.
//!
//! 运行用户提供的可调用对象并捕获其抛出的任何失败。返回的 `Err`
//! 和 panic（例如 `assert!` 失败）都会变成 [`Raised`] 值，
//! 以便编排器以相同的方式记录或传播它们。
//!
//! A captured panic is not printed by the panic hook: the engine installs a
//! hook once that stays silent while the current thread is inside
//! [`invoke_captured`] and defers to the previous hook everywhere else.

use anyhow::Result;
use once_cell::sync::OnceCell;
use std::any::Any;
use std::cell::Cell;
use std::panic::{self, catch_unwind, AssertUnwindSafe};

/// A failure raised by a user callable.
#[derive(Debug)]
pub enum Raised {
    /// The callable returned an error.
    Error(anyhow::Error),
    /// The callable panicked; holds the rendered panic payload.
    Panic(String),
}

impl Raised {
    /// Converts the failure into an `anyhow::Error` for the fatal paths.
    pub fn into_error(self) -> anyhow::Error {
        match self {
            Raised::Error(error) => error,
            Raised::Panic(message) => anyhow::anyhow!("panicked: {}", message),
        }
    }
}

thread_local! {
    static CAPTURING: Cell<bool> = const { Cell::new(false) };
}

static SILENT_HOOK: OnceCell<()> = OnceCell::new();

fn install_silent_hook() {
    SILENT_HOOK.get_or_init(|| {
        let previous = panic::take_hook();
        panic::set_hook(Box::new(move |info| {
            if !is_capturing() {
                previous(info);
            }
        }));
    });
}

/// Returns `true` while the current thread is running a captured callable.
pub fn is_capturing() -> bool {
    CAPTURING.try_with(Cell::get).unwrap_or(false)
}

/// Restores the capture flag when a captured call ends, including nested ones.
struct CaptureGuard {
    was_capturing: bool,
}

impl CaptureGuard {
    fn enter() -> Self {
        Self {
            was_capturing: CAPTURING.with(|flag| flag.replace(true)),
        }
    }
}

impl Drop for CaptureGuard {
    fn drop(&mut self) {
        let was_capturing = self.was_capturing;
        CAPTURING.with(|flag| flag.set(was_capturing));
    }
}

/// Invokes `f`, turning both `Err` results and panics into [`Raised`].
///
/// The callable is assumed to leave shared state usable after a panic, which is
/// what a test harness expects from the code under test.
pub fn invoke_captured<R, F>(f: F) -> std::result::Result<R, Raised>
where
    F: FnOnce() -> Result<R>,
{
    install_silent_hook();
    let outcome = {
        let _guard = CaptureGuard::enter();
        catch_unwind(AssertUnwindSafe(f))
    };
    match outcome {
        Ok(Ok(value)) => Ok(value),
        Ok(Err(error)) => Err(Raised::Error(error)),
        Err(payload) => Err(Raised::Panic(panic_message(payload.as_ref()))),
    }
}

/// Renders a panic payload the way the standard panic hook does for the common cases.
pub fn panic_message(payload: &(dyn Any + Send)) -> String {
    if let Some(message) = payload.downcast_ref::<&str>() {
        (*message).to_string()
    } else if let Some(message) = payload.downcast_ref::<String>() {
        message.clone()
    } else {
        "Box<dyn Any>".to_string()
    }
}
