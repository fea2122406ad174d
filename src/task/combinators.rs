//! Functor, applicative and monad combinators over [`Task`].
//!
//! Every combinator returns a new pending task without blocking. Callbacks
//! run once the source resolves; a callback that panics resolves the result
//! as faulted instead of unwinding into the caller.

use std::error::Error;
use std::fmt;

use crate::control::Maybe;

use super::error::{KeyMismatch, PredicateRejected, TaskError};
use super::outcome::{Failures, Outcome};
use super::Task;

// =============================================================================
// Continuations
// =============================================================================

impl<A: Send + 'static> Task<A> {
    /// Attaches a continuation that observes the final outcome exactly once.
    ///
    /// This is the primitive the other combinators are built from.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use monadkit::task::{Outcome, Task};
    ///
    /// let described = Task::<i32>::cancelled().continue_with(|outcome| {
    ///     Outcome::Completed(if outcome.is_cancelled() { "cancelled" } else { "other" })
    /// });
    /// assert_eq!(described.wait(), Outcome::Completed("cancelled"));
    /// ```
    pub fn continue_with<B, F>(self, continuation: F) -> Task<B>
    where
        F: FnOnce(Outcome<A>) -> Outcome<B> + Send + 'static,
        B: Send + 'static,
    {
        Task::from_outcome_future(async move { continuation(self.await) })
    }

    /// Attaches a continuation that produces a further task, and forwards
    /// that task's outcome.
    pub fn continue_with_task<B, F>(self, continuation: F) -> Task<B>
    where
        F: FnOnce(Outcome<A>) -> Task<B> + Send + 'static,
        B: Send + 'static,
    {
        Task::from_outcome_future(async move { continuation(self.await).await })
    }

    // =========================================================================
    // Functor
    // =========================================================================

    /// Transforms the completed value.
    ///
    /// Faults and cancellation propagate without invoking `selector`.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use monadkit::task::{Outcome, Task};
    ///
    /// assert_eq!(Task::completed(21).map(|x| x * 2).wait(), Outcome::Completed(42));
    /// ```
    pub fn map<B, F>(self, selector: F) -> Task<B>
    where
        F: FnOnce(A) -> B + Send + 'static,
        B: Send + 'static,
    {
        self.continue_with(move |outcome| outcome.map(selector))
    }

    /// Alias for [`Task::map`].
    pub fn select<B, F>(self, selector: F) -> Task<B>
    where
        F: FnOnce(A) -> B + Send + 'static,
        B: Send + 'static,
    {
        self.map(selector)
    }

    // =========================================================================
    // Monad
    // =========================================================================

    /// Chains a task-producing function and forwards the inner task's outcome.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use monadkit::task::{Outcome, Task};
    ///
    /// let chained = Task::completed(10).flat_map(|x| Task::completed(x + 1));
    /// assert_eq!(chained.wait(), Outcome::Completed(11));
    /// ```
    pub fn flat_map<B, F>(self, binder: F) -> Task<B>
    where
        F: FnOnce(A) -> Task<B> + Send + 'static,
        B: Send + 'static,
    {
        self.continue_with_task(move |outcome| match outcome {
            Outcome::Completed(value) => binder(value),
            Outcome::Faulted(error) => Task::faulted(error),
            Outcome::Cancelled => Task::cancelled(),
        })
    }

    /// Alias for [`Task::flat_map`].
    pub fn select_many<B, F>(self, binder: F) -> Task<B>
    where
        F: FnOnce(A) -> Task<B> + Send + 'static,
        B: Send + 'static,
    {
        self.flat_map(binder)
    }

    /// Like [`Task::flat_map`], but the binder may produce no task at all,
    /// which resolves the result as cancelled.
    pub fn flat_map_maybe<B, F>(self, binder: F) -> Task<B>
    where
        F: FnOnce(A) -> Maybe<Task<B>> + Send + 'static,
        B: Send + 'static,
    {
        self.flat_map(move |value| binder(value).get_or_else_with(Task::cancelled))
    }

    /// Chains a task and projects the source value together with its result.
    pub fn flat_map_with<U, B, F, G>(self, binder: F, result_selector: G) -> Task<B>
    where
        F: FnOnce(&A) -> Task<U> + Send + 'static,
        G: FnOnce(A, U) -> B + Send + 'static,
        U: Send + 'static,
        B: Send + 'static,
    {
        Task::from_outcome_future(async move {
            match self.await {
                Outcome::Completed(value) => {
                    let inner = binder(&value);
                    inner.await.map(|bound| result_selector(value, bound))
                }
                Outcome::Faulted(error) => Outcome::Faulted(error),
                Outcome::Cancelled => Outcome::Cancelled,
            }
        })
    }

    // =========================================================================
    // Filtering
    // =========================================================================

    /// Keeps the completed value only if `predicate` holds.
    ///
    /// A rejected value resolves the task as faulted with
    /// [`PredicateRejected`]: a task has no "absent" terminal state.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use monadkit::task::{Outcome, PredicateRejected, Task};
    ///
    /// let outcome = Task::completed(3).filter(|x| *x > 5).wait();
    /// assert!(matches!(outcome, Outcome::Faulted(ref e) if e.is::<PredicateRejected>()));
    /// ```
    pub fn filter<P>(self, predicate: P) -> Self
    where
        P: FnOnce(&A) -> bool + Send + 'static,
        A: fmt::Debug,
    {
        self.filter_with(predicate, |value| format!("{value:?}"))
    }

    /// Like [`Task::filter`], for values without a `Debug` rendering.
    ///
    /// `describe` runs only for a rejected value and supplies the
    /// [`PredicateRejected`] description.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use monadkit::task::{Outcome, PredicateRejected, Task};
    ///
    /// struct Ticket(u32);
    ///
    /// let outcome = Task::completed(Ticket(3))
    ///     .filter_with(|t| t.0 > 5, |t| format!("ticket #{}", t.0))
    ///     .wait();
    /// let description = match &outcome {
    ///     Outcome::Faulted(e) => e.downcast_ref::<PredicateRejected>().map(|r| r.description().to_string()),
    ///     _ => None,
    /// };
    /// assert_eq!(description.as_deref(), Some("ticket #3"));
    /// ```
    pub fn filter_with<P, D>(self, predicate: P, describe: D) -> Self
    where
        P: FnOnce(&A) -> bool + Send + 'static,
        D: FnOnce(&A) -> String + Send + 'static,
    {
        self.continue_with(move |outcome| match outcome {
            Outcome::Completed(value) => {
                if predicate(&value) {
                    Outcome::Completed(value)
                } else {
                    let rejected = PredicateRejected::described(describe(&value));
                    Outcome::Faulted(TaskError::new(rejected))
                }
            }
            other => other,
        })
    }

    // =========================================================================
    // Combining
    // =========================================================================

    /// Runs both tasks concurrently and combines their values.
    ///
    /// If either side does not complete, the result is faulted when any
    /// side faulted (two faults become an [`AggregateError`](super::AggregateError)),
    /// otherwise cancelled.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use monadkit::task::{Outcome, Task};
    ///
    /// let sum = Task::completed(2).zip(Task::completed(3), |a, b| a + b);
    /// assert_eq!(sum.wait(), Outcome::Completed(5));
    /// ```
    pub fn zip<B, C, F>(self, other: Task<B>, combiner: F) -> Task<C>
    where
        F: FnOnce(A, B) -> C + Send + 'static,
        B: Send + 'static,
        C: Send + 'static,
    {
        Task::from_outcome_future(async move {
            let (this, other) = futures::future::join(self, other).await;
            let mut failures = Failures::default();
            match (failures.take(this), failures.take(other)) {
                (Some(left), Some(right)) => Outcome::Completed(combiner(left, right)),
                _ => failures.into_outcome(),
            }
        })
    }

    /// Correlates two tasks by key.
    ///
    /// Both operands are scheduled on the default executor before this
    /// returns. When both complete and their keys are equal the values are
    /// combined; differing keys resolve as faulted with [`KeyMismatch`].
    pub fn join<B, K, C, KeyThis, KeyOther, Combine>(
        self,
        other: Task<B>,
        key_of_this: KeyThis,
        key_of_other: KeyOther,
        combine: Combine,
    ) -> Task<C>
    where
        B: Send + 'static,
        C: Send + 'static,
        K: PartialEq + fmt::Debug,
        KeyThis: FnOnce(&A) -> K + Send + 'static,
        KeyOther: FnOnce(&B) -> K + Send + 'static,
        Combine: FnOnce(A, B) -> C + Send + 'static,
    {
        let this = self.schedule();
        let other = other.schedule();
        Task::from_outcome_future(async move {
            let (this, other) = futures::future::join(this, other).await;
            let mut failures = Failures::default();
            match (failures.take(this), failures.take(other)) {
                (Some(left), Some(right)) => {
                    let left_key = key_of_this(&left);
                    let right_key = key_of_other(&right);
                    if left_key == right_key {
                        Outcome::Completed(combine(left, right))
                    } else {
                        Outcome::Faulted(TaskError::new(KeyMismatch::new(&left_key, &right_key)))
                    }
                }
                _ => failures.into_outcome(),
            }
        })
    }

    /// Like [`Task::join`], but `combine` receives the inner side as an
    /// already-resolved task.
    pub fn group_join<B, K, C, KeyThis, KeyOther, Combine>(
        self,
        other: Task<B>,
        key_of_this: KeyThis,
        key_of_other: KeyOther,
        combine: Combine,
    ) -> Task<C>
    where
        B: Send + 'static,
        C: Send + 'static,
        K: PartialEq + fmt::Debug,
        KeyThis: FnOnce(&A) -> K + Send + 'static,
        KeyOther: FnOnce(&B) -> K + Send + 'static,
        Combine: FnOnce(A, Task<B>) -> C + Send + 'static,
    {
        self.join(other, key_of_this, key_of_other, move |left, right| {
            combine(left, Task::completed(right))
        })
    }

    // =========================================================================
    // Fault Handling
    // =========================================================================

    /// Replaces a fault with the outcome of a fallback task.
    ///
    /// `factory` runs only when the source faulted. Completed values and
    /// cancellation pass through untouched.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use monadkit::task::{Outcome, Task, TaskError};
    ///
    /// let rescued = Task::<i32>::faulted(TaskError::msg("boom")).rescue(|_| Task::completed(0));
    /// assert_eq!(rescued.wait(), Outcome::Completed(0));
    /// ```
    pub fn rescue<F>(self, factory: F) -> Self
    where
        F: FnOnce(TaskError) -> Self + Send + 'static,
    {
        Self::from_outcome_future(async move {
            match self.await {
                Outcome::Faulted(error) => {
                    tracing::debug!(%error, "rescuing faulted task with fallback");
                    factory(error).await
                }
                other => other,
            }
        })
    }

    /// Recovers from faults whose payload is an `E`.
    ///
    /// Faults of other kinds, and cancellation, propagate unchanged.
    pub fn catch_as<E, F>(self, handler: F) -> Self
    where
        E: Error + 'static,
        F: FnOnce(&E) -> A + Send + 'static,
    {
        Self::from_outcome_future(async move {
            match self.await {
                Outcome::Faulted(error) => match error.downcast_ref::<E>() {
                    Some(specific) => {
                        tracing::debug!(%error, "recovering from matching fault");
                        Outcome::Completed(handler(specific))
                    }
                    None => Outcome::Faulted(error),
                },
                other => other,
            }
        })
    }
}

// =============================================================================
// Boolean Combinators
// =============================================================================

impl Task<bool> {
    /// Resolves to `true` iff both tasks complete with `true`.
    ///
    /// Both operands are always evaluated; there is no short circuit.
    pub fn and(self, other: Self) -> Self {
        self.zip(other, |left, right| left && right)
    }

    /// Resolves to `true` iff either task completes with `true`.
    ///
    /// Both operands must complete; there is no short circuit.
    pub fn or(self, other: Self) -> Self {
        self.zip(other, |left, right| left || right)
    }

    /// Negates the completed value.
    #[allow(clippy::should_implement_trait)]
    pub fn not(self) -> Self {
        self.map(|value| !value)
    }
}

// =============================================================================
// Applicative
// =============================================================================

impl<F: Send + 'static> Task<F> {
    /// Applies a task-held function to a task-held argument.
    ///
    /// Function and argument are evaluated concurrently.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use monadkit::task::{Outcome, Task};
    ///
    /// let function = Task::completed(|x: i32| x * 2);
    /// assert_eq!(function.apply(Task::completed(21)).wait(), Outcome::Completed(42));
    /// ```
    pub fn apply<A, B>(self, argument: Task<A>) -> Task<B>
    where
        F: FnOnce(A) -> B,
        A: Send + 'static,
        B: Send + 'static,
    {
        self.zip(argument, |function, value| function(value))
    }

    /// Applies a task-held binary function to two task-held arguments.
    pub fn apply2<A, B, C>(self, first: Task<A>, second: Task<B>) -> Task<C>
    where
        F: FnOnce(A, B) -> C,
        A: Send + 'static,
        B: Send + 'static,
        C: Send + 'static,
    {
        Task::from_outcome_future(async move {
            let (function, first, second) = futures::join!(self, first, second);
            let mut failures = Failures::default();
            match (
                failures.take(function),
                failures.take(first),
                failures.take(second),
            ) {
                (Some(function), Some(first), Some(second)) => {
                    Outcome::Completed(function(first, second))
                }
                _ => failures.into_outcome(),
            }
        })
    }

    /// Applies a task-held ternary function to three task-held arguments.
    pub fn apply3<A, B, C, D>(self, first: Task<A>, second: Task<B>, third: Task<C>) -> Task<D>
    where
        F: FnOnce(A, B, C) -> D,
        A: Send + 'static,
        B: Send + 'static,
        C: Send + 'static,
        D: Send + 'static,
    {
        Task::from_outcome_future(async move {
            let (function, first, second, third) = futures::join!(self, first, second, third);
            let mut failures = Failures::default();
            match (
                failures.take(function),
                failures.take(first),
                failures.take(second),
                failures.take(third),
            ) {
                (Some(function), Some(first), Some(second), Some(third)) => {
                    Outcome::Completed(function(first, second, third))
                }
                _ => failures.into_outcome(),
            }
        })
    }
}

/// Lifts a binary function over two tasks.
pub fn lift2<A, B, C, F>(function: F, first: Task<A>, second: Task<B>) -> Task<C>
where
    F: FnOnce(A, B) -> C + Send + 'static,
    A: Send + 'static,
    B: Send + 'static,
    C: Send + 'static,
{
    first.zip(second, function)
}

/// Lifts a ternary function over three tasks.
pub fn lift3<A, B, C, D, F>(function: F, first: Task<A>, second: Task<B>, third: Task<C>) -> Task<D>
where
    F: FnOnce(A, B, C) -> D + Send + 'static,
    A: Send + 'static,
    B: Send + 'static,
    C: Send + 'static,
    D: Send + 'static,
{
    Task::completed(function).apply3(first, second, third)
}

// =============================================================================
// Collections
// =============================================================================

/// Waits for every task and collects their values in input order.
///
/// All tasks are awaited even after one fails. Any fault faults the
/// aggregate (several become an [`AggregateError`](super::AggregateError));
/// otherwise any cancellation cancels it.
///
/// # Examples
///
/// ```rust
/// use monadkit::task::{Outcome, Task, sequence};
///
/// let all = sequence(vec![Task::completed(1), Task::completed(2), Task::completed(3)]);
/// assert_eq!(all.wait(), Outcome::Completed(vec![1, 2, 3]));
/// ```
pub fn sequence<A, I>(tasks: I) -> Task<Vec<A>>
where
    I: IntoIterator<Item = Task<A>>,
    A: Send + 'static,
{
    let tasks: Vec<Task<A>> = tasks.into_iter().collect();
    Task::from_outcome_future(async move {
        let outcomes = futures::future::join_all(tasks).await;
        let expected = outcomes.len();
        let mut failures = Failures::default();
        let values: Vec<A> = outcomes
            .into_iter()
            .filter_map(|outcome| failures.take(outcome))
            .collect();
        if values.len() == expected {
            Outcome::Completed(values)
        } else {
            failures.into_outcome()
        }
    })
}

/// Maps every item to a task and collects the results, as [`sequence`].
///
/// `function` runs once the resulting task runs, not at call time.
pub fn traverse<T, A, I, F>(items: I, function: F) -> Task<Vec<A>>
where
    I: IntoIterator<Item = T>,
    T: Send + 'static,
    A: Send + 'static,
    F: FnMut(T) -> Task<A> + Send + 'static,
{
    let items: Vec<T> = items.into_iter().collect();
    Task::from_outcome_future(async move { sequence(items.into_iter().map(function)).await })
}
