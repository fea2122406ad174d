//! Deferred computations with fault and cancellation outcomes.
//!
//! A [`Task<A>`] resolves exactly once, to an [`Outcome<A>`]: `Completed(A)`,
//! `Faulted(TaskError)` or `Cancelled`. The combinators on `Task` lift the
//! vocabulary of [`Maybe`](crate::control::Maybe) (`map`, `flat_map`,
//! `filter`, `zip`, `join`, `apply`) onto asynchronous values, plus the
//! boolean combinators `and`/`or` and the fault handlers `rescue`/`catch_as`.
//!
//! # Scheduling
//!
//! Tasks do not own a scheduler. A task built with [`Task::from_future`] is
//! lazy: it runs when awaited or when [`Task::schedule`] hands it to an
//! [`Executor`] (tokio by default). Combinators return a new pending task
//! immediately and never block the caller; only [`Task::join`] and
//! [`Task::group_join`] schedule their operands eagerly, and only
//! [`Task::wait`] blocks.
//!
//! # Faults
//!
//! A panic raised by a user callback, or by the wrapped future, never
//! escapes synchronously: it resolves the task as faulted with a
//! [`PanicError`].
//!
//! # Examples
//!
//! ```rust
//! use monadkit::task::{Outcome, Task};
//!
//! let accepted = Task::completed(10).map(|x| x * 2).filter(|x| *x > 15);
//! assert_eq!(accepted.wait(), Outcome::Completed(20));
//!
//! let rejected = Task::completed(10).map(|x| x * 2).filter(|x| *x > 100);
//! assert!(rejected.wait().is_faulted());
//! ```

mod combinators;
mod error;
mod executor;
mod outcome;
pub mod runtime;

pub use combinators::{lift2, lift3, sequence, traverse};
pub use error::{
    AggregateError, CancelledError, KeyMismatch, PanicError, PredicateRejected, TaskError,
};
pub use executor::{Executor, InlineExecutor, TokioExecutor};
pub use outcome::Outcome;
pub use runtime::BlockingError;

use std::fmt;
use std::future::Future;
use std::panic::AssertUnwindSafe;
use std::pin::Pin;
use std::task::{Context, Poll};

use futures::FutureExt;
use futures::channel::oneshot;
use futures::future::{self, BoxFuture};
use pin_project_lite::pin_project;

// =============================================================================
// Task Struct Definition
// =============================================================================

pin_project! {
    /// A handle to a computation that resolves to an [`Outcome`].
    ///
    /// `Task` implements `Future<Output = Outcome<A>>`, so it can be awaited
    /// directly; synchronous callers use [`Task::wait`].
    ///
    /// # Monad Laws
    ///
    /// Observed through the resolved outcome:
    ///
    /// 1. **Left Identity**: `Task::completed(a).flat_map(f) == f(a)`
    /// 2. **Right Identity**: `m.flat_map(Task::completed) == m`
    /// 3. **Associativity**: `m.flat_map(f).flat_map(g) == m.flat_map(|x| f(x).flat_map(g))`
    #[must_use = "tasks are lazy and do nothing unless awaited, scheduled or waited on"]
    pub struct Task<A> {
        #[pin]
        state: TaskState<A>,
    }
}

pin_project! {
    // State transitions:
    //
    // - `Resolved` -> `Consumed` (outcome handed out on first poll)
    // - `Deferred` -> `Consumed` (inner future resolved)
    // - `Scheduled` -> `Consumed` (executor delivered the outcome, or dropped it)
    #[project = TaskStateProj]
    enum TaskState<A> {
        Resolved {
            outcome: Option<Outcome<A>>,
        },
        Deferred {
            future: BoxFuture<'static, Outcome<A>>,
        },
        Scheduled {
            receiver: oneshot::Receiver<Outcome<A>>,
        },
        Consumed,
    }
}

// =============================================================================
// Future Implementation
// =============================================================================

impl<A> Future for Task<A> {
    type Output = Outcome<A>;

    fn poll(self: Pin<&mut Self>, context: &mut Context<'_>) -> Poll<Self::Output> {
        let mut this = self.project();

        let outcome = match this.state.as_mut().project() {
            TaskStateProj::Resolved { outcome } => outcome.take().expect(
                "Task internal error: resolved outcome was already taken. \
                 This indicates the Task was polled after completion.",
            ),
            TaskStateProj::Deferred { future } => match future.as_mut().poll(context) {
                Poll::Ready(outcome) => outcome,
                Poll::Pending => return Poll::Pending,
            },
            TaskStateProj::Scheduled { receiver } => match Pin::new(receiver).poll(context) {
                Poll::Ready(Ok(outcome)) => outcome,
                Poll::Ready(Err(oneshot::Canceled)) => {
                    tracing::debug!("executor dropped a scheduled task; resolving as cancelled");
                    Outcome::Cancelled
                }
                Poll::Pending => return Poll::Pending,
            },
            TaskStateProj::Consumed => panic!("Task polled after completion"),
        };

        this.state.set(TaskState::Consumed);
        Poll::Ready(outcome)
    }
}

// =============================================================================
// Constructors
// =============================================================================

impl<A> Task<A> {
    /// Creates a task that is already resolved to `outcome`.
    pub const fn from_outcome(outcome: Outcome<A>) -> Self {
        Self {
            state: TaskState::Resolved {
                outcome: Some(outcome),
            },
        }
    }

    /// Creates a task that has already completed with `value`.
    pub const fn completed(value: A) -> Self {
        Self::from_outcome(Outcome::Completed(value))
    }

    /// Creates a task that has already faulted.
    pub const fn faulted(error: TaskError) -> Self {
        Self::from_outcome(Outcome::Faulted(error))
    }

    /// Creates a task that has already been cancelled.
    pub const fn cancelled() -> Self {
        Self::from_outcome(Outcome::Cancelled)
    }

    /// Returns `true` once the task has been handed to an executor.
    pub const fn is_scheduled(&self) -> bool {
        matches!(self.state, TaskState::Scheduled { .. })
    }
}

impl<A: Send + 'static> Task<A> {
    /// Wraps a future resolving to an explicit outcome.
    ///
    /// A panic while polling `future` resolves the task as faulted.
    pub fn from_outcome_future<Fut>(future: Fut) -> Self
    where
        Fut: Future<Output = Outcome<A>> + Send + 'static,
    {
        Self {
            state: TaskState::Deferred {
                future: guarded(future),
            },
        }
    }

    /// Wraps a future producing a value. The future is not polled yet.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use monadkit::task::{Outcome, Task};
    ///
    /// let task = Task::from_future(async { 40 + 2 });
    /// assert_eq!(task.wait(), Outcome::Completed(42));
    /// ```
    pub fn from_future<Fut>(future: Fut) -> Self
    where
        Fut: Future<Output = A> + Send + 'static,
    {
        Self::from_outcome_future(future.map(Outcome::Completed))
    }

    /// Wraps a fallible future; `Err` resolves the task as faulted.
    pub fn from_result_future<Fut, E>(future: Fut) -> Self
    where
        Fut: Future<Output = Result<A, E>> + Send + 'static,
        E: std::error::Error + Send + Sync + 'static,
    {
        Self::from_outcome_future(future.map(Outcome::from))
    }

    /// Defers even the creation of the future until the task runs.
    pub fn new<F, Fut>(action: F) -> Self
    where
        F: FnOnce() -> Fut + Send + 'static,
        Fut: Future<Output = A> + Send + 'static,
    {
        Self::from_outcome_future(async move { Outcome::Completed(action().await) })
    }

    /// Wraps `future` and schedules it on the default executor right away.
    pub fn spawn<Fut>(future: Fut) -> Self
    where
        Fut: Future<Output = A> + Send + 'static,
    {
        Self::from_future(future).schedule()
    }

    /// Wraps `future` and schedules it on `executor` right away.
    pub fn spawn_on<Fut, E>(future: Fut, executor: &E) -> Self
    where
        Fut: Future<Output = A> + Send + 'static,
        E: Executor + ?Sized,
    {
        Self::from_future(future).schedule_on(executor)
    }

    // =========================================================================
    // Scheduling
    // =========================================================================

    /// Schedules the task on [`TokioExecutor::current`].
    ///
    /// Already scheduled or resolved tasks are returned unchanged.
    pub fn schedule(self) -> Self {
        self.schedule_on(&TokioExecutor::current())
    }

    /// Schedules the task on `executor`.
    ///
    /// The outcome is delivered back through a channel; if the executor
    /// drops the work before it resolves, the task resolves as cancelled.
    pub fn schedule_on<E>(self, executor: &E) -> Self
    where
        E: Executor + ?Sized,
    {
        match self.state {
            TaskState::Deferred { future } => {
                let (sender, receiver) = oneshot::channel();
                tracing::trace!("scheduling task onto executor");
                executor.execute(Box::pin(async move {
                    let outcome = future.await;
                    // Nobody is left to observe the outcome if the handle was dropped.
                    let _ = sender.send(outcome);
                }));
                Self {
                    state: TaskState::Scheduled { receiver },
                }
            }
            state => Self { state },
        }
    }

    /// Resolves as cancelled if `signal` completes before the task does.
    ///
    /// A task that was already scheduled keeps running on its executor;
    /// only this handle stops observing it.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use monadkit::task::{Outcome, Task};
    ///
    /// let never = Task::from_future(futures::future::pending::<i32>());
    /// let cancelled = never.cancel_on(async {});
    /// assert_eq!(cancelled.wait(), Outcome::Cancelled);
    /// ```
    pub fn cancel_on<S>(self, signal: S) -> Self
    where
        S: Future<Output = ()> + Send + 'static,
    {
        Self::from_outcome_future(async move {
            match future::select(Box::pin(self), Box::pin(signal)).await {
                future::Either::Left((outcome, _)) => outcome,
                future::Either::Right(((), _)) => Outcome::Cancelled,
            }
        })
    }

    // =========================================================================
    // Synchronous Wait
    // =========================================================================

    /// Blocks the current thread until the task resolves.
    ///
    /// Intended for top-level callers and tests; never call it from inside a
    /// continuation.
    ///
    /// # Errors
    ///
    /// Returns [`BlockingError`] when called from a runtime that cannot block
    /// (a current-thread tokio runtime).
    pub fn try_wait(self) -> Result<Outcome<A>, BlockingError> {
        runtime::try_run_blocking(self)
    }

    /// Blocks the current thread until the task resolves.
    ///
    /// # Panics
    ///
    /// Panics if called from within a current-thread runtime.
    pub fn wait(self) -> Outcome<A> {
        runtime::run_blocking(self)
    }

    /// Blocks until the task resolves and converts the outcome with
    /// [`Outcome::into_result`].
    ///
    /// # Errors
    ///
    /// Returns the fault payload, or a [`CancelledError`] for a cancelled task.
    ///
    /// # Panics
    ///
    /// Panics if called from within a current-thread runtime.
    pub fn wait_value(self) -> Result<A, TaskError> {
        self.wait().into_result()
    }
}

impl<A> fmt::Debug for Task<A> {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        let state = match &self.state {
            TaskState::Resolved { .. } => "resolved",
            TaskState::Deferred { .. } => "deferred",
            TaskState::Scheduled { .. } => "scheduled",
            TaskState::Consumed => "consumed",
        };
        formatter.debug_struct("Task").field("state", &state).finish()
    }
}

/// Boxes `future`, turning a panic during any poll into a fault.
fn guarded<A, Fut>(future: Fut) -> BoxFuture<'static, Outcome<A>>
where
    Fut: Future<Output = Outcome<A>> + Send + 'static,
{
    AssertUnwindSafe(future)
        .catch_unwind()
        .map(|result| match result {
            Ok(outcome) => outcome,
            Err(payload) => {
                let error = TaskError::from_panic(&*payload);
                tracing::debug!(%error, "task callback panicked; resolving as faulted");
                Outcome::Faulted(error)
            }
        })
        .boxed()
}
