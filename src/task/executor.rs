//! The scheduling capability tasks are built on.
//!
//! A [`Task`](super::Task) only needs one thing from its host: somewhere to
//! run a future to completion in the background. That capability is the
//! [`Executor`] trait, so any concurrency primitive can stand in for tokio.

use std::fmt;

use futures::future::BoxFuture;
use tokio::runtime::Handle;

use super::runtime;

/// Runs detached futures to completion.
///
/// Implementations decide where the future runs (a thread pool, an event
/// loop, the calling thread). Dropping the future without completing it is
/// observed by the owning task as a cancellation.
pub trait Executor: Send + Sync {
    /// Starts running `future` in the background.
    fn execute(&self, future: BoxFuture<'static, ()>);
}

/// Spawns futures onto a tokio runtime.
#[derive(Clone)]
pub struct TokioExecutor {
    handle: Handle,
}

impl TokioExecutor {
    /// Uses the current runtime, or the global one outside any runtime.
    #[must_use]
    pub fn current() -> Self {
        Self {
            handle: runtime::handle(),
        }
    }

    /// Uses the runtime behind `handle`.
    #[must_use]
    pub const fn from_handle(handle: Handle) -> Self {
        Self { handle }
    }
}

impl Default for TokioExecutor {
    fn default() -> Self {
        Self::current()
    }
}

impl fmt::Debug for TokioExecutor {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        formatter
            .debug_struct("TokioExecutor")
            .field("flavor", &self.handle.runtime_flavor())
            .finish()
    }
}

impl Executor for TokioExecutor {
    fn execute(&self, future: BoxFuture<'static, ()>) {
        // Detached: the task observes completion through its own channel.
        drop(self.handle.spawn(future));
    }
}

/// Runs each future to completion on the calling thread before returning.
///
/// Useful for tests and single-threaded hosts. It blocks the caller, so it
/// must not be used from inside an async context.
#[derive(Debug, Clone, Copy, Default)]
pub struct InlineExecutor;

impl Executor for InlineExecutor {
    fn execute(&self, future: BoxFuture<'static, ()>) {
        futures::executor::block_on(future);
    }
}
