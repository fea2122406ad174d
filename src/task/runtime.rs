//! Host runtime access for tasks.
//!
//! Tasks never own a scheduler. They ride on tokio, through two entry points:
//!
//! 1. **Global Runtime**: a lazily-initialized multi-thread runtime used
//!    whenever a task is scheduled or waited on from outside any runtime.
//!    It is created once and never dropped.
//!
//! 2. **Blocking Wait**: [`try_run_blocking`] drives a future to completion
//!    from synchronous code. Inside a multi-thread runtime it uses
//!    `block_in_place` on the caller's handle; inside a current-thread
//!    runtime it refuses with [`BlockingError::CurrentThreadRuntime`]
//!    rather than deadlocking the only worker.
//!
//! The blocking wait is an escape hatch for top-level callers and tests.
//! It must never be called from within a task continuation.

use std::cell::RefCell;
use std::error::Error;
use std::fmt;
use std::future::Future;
use std::sync::LazyLock;

use tokio::runtime::{Builder, Handle, Runtime, RuntimeFlavor};

// =============================================================================
// Global Runtime
// =============================================================================

/// Global tokio runtime, one worker per CPU core.
static GLOBAL_RUNTIME: LazyLock<Runtime> = LazyLock::new(|| {
    Builder::new_multi_thread()
        .worker_threads(num_cpus::get())
        .thread_name("monadkit-worker")
        .enable_all()
        .build()
        .expect("Failed to create global tokio runtime")
});

/// Returns the global runtime, creating it on first use.
#[inline]
#[must_use]
pub fn global() -> &'static Runtime {
    &GLOBAL_RUNTIME
}

thread_local! {
    static CACHED_HANDLE: RefCell<Option<Handle>> = const { RefCell::new(None) };
}

/// Returns a handle to the current runtime, or to the global one.
///
/// Inside a tokio runtime this is `Handle::current()`; elsewhere a
/// per-thread cached handle to [`global`] is returned.
#[inline]
#[must_use]
pub fn handle() -> Handle {
    if let Ok(current_handle) = Handle::try_current() {
        return current_handle;
    }

    CACHED_HANDLE.with(|cached| {
        cached
            .borrow_mut()
            .get_or_insert_with(|| global().handle().clone())
            .clone()
    })
}

// =============================================================================
// Blocking Error
// =============================================================================

/// Why a blocking wait could not be performed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BlockingError {
    /// `block_in_place` is unavailable on a current-thread runtime.
    CurrentThreadRuntime,

    /// The caller's runtime flavor is not one this crate knows how to block on.
    UnsupportedRuntimeFlavor,
}

impl fmt::Display for BlockingError {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::CurrentThreadRuntime => {
                write!(
                    formatter,
                    "cannot wait on a task from a current-thread runtime: \
                     block_in_place is only supported in multi-thread runtimes"
                )
            }
            Self::UnsupportedRuntimeFlavor => {
                write!(
                    formatter,
                    "cannot wait on a task: \
                     the runtime flavor is not supported for blocking execution"
                )
            }
        }
    }
}

impl Error for BlockingError {}

// =============================================================================
// Blocking Execution
// =============================================================================

/// Drives `future` to completion, blocking the current thread.
///
/// # Errors
///
/// Returns `Err(BlockingError::CurrentThreadRuntime)` when called from within
/// a current-thread tokio runtime, and
/// `Err(BlockingError::UnsupportedRuntimeFlavor)` for unknown flavors.
///
/// # Examples
///
/// ```rust
/// use monadkit::task::runtime::try_run_blocking;
///
/// let result = try_run_blocking(async { 40 + 2 });
/// assert_eq!(result, Ok(42));
/// ```
#[inline]
pub fn try_run_blocking<F, T>(future: F) -> Result<T, BlockingError>
where
    F: Future<Output = T>,
{
    if let Ok(current_handle) = Handle::try_current() {
        match current_handle.runtime_flavor() {
            RuntimeFlavor::MultiThread => Ok(tokio::task::block_in_place(|| {
                current_handle.block_on(future)
            })),
            RuntimeFlavor::CurrentThread => Err(BlockingError::CurrentThreadRuntime),
            _ => Err(BlockingError::UnsupportedRuntimeFlavor),
        }
    } else {
        Ok(global().block_on(future))
    }
}

/// Drives `future` to completion, blocking the current thread.
///
/// # Panics
///
/// Panics if called from within a current-thread runtime.
#[inline]
pub fn run_blocking<F, T>(future: F) -> T
where
    F: Future<Output = T>,
{
    match try_run_blocking(future) {
        Ok(value) => value,
        Err(error) => panic!("run_blocking failed: {error}"),
    }
}
