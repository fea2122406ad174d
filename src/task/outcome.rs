//! Terminal outcomes of a task.

use crate::control::Maybe;

use super::error::{CancelledError, TaskError};

/// The single terminal outcome of a [`Task`](super::Task).
///
/// A task resolves exactly once, to exactly one of these states.
/// Cancellation is distinct from a fault: it carries no error payload and
/// is never routed through fault handlers such as
/// [`Task::rescue`](super::Task::rescue).
#[derive(Debug, Clone, PartialEq)]
pub enum Outcome<A> {
    /// The task produced a value.
    Completed(A),
    /// The task terminated with an error.
    Faulted(TaskError),
    /// The task will never produce an outcome.
    Cancelled,
}

impl<A> Outcome<A> {
    /// Returns `true` if the task produced a value.
    #[inline]
    pub const fn is_completed(&self) -> bool {
        matches!(self, Self::Completed(_))
    }

    /// Returns `true` if the task faulted.
    #[inline]
    pub const fn is_faulted(&self) -> bool {
        matches!(self, Self::Faulted(_))
    }

    /// Returns `true` if the task was cancelled.
    #[inline]
    pub const fn is_cancelled(&self) -> bool {
        matches!(self, Self::Cancelled)
    }

    /// Returns the value of a completed outcome.
    #[inline]
    pub fn value(self) -> Maybe<A> {
        match self {
            Self::Completed(value) => Maybe::Present(value),
            Self::Faulted(_) | Self::Cancelled => Maybe::Absent,
        }
    }

    /// Returns the fault of a faulted outcome.
    #[inline]
    pub const fn error(&self) -> Maybe<&TaskError> {
        match self {
            Self::Faulted(error) => Maybe::Present(error),
            Self::Completed(_) | Self::Cancelled => Maybe::Absent,
        }
    }

    /// Maps a completed value; faults and cancellation pass through.
    #[inline]
    pub fn map<B, F>(self, function: F) -> Outcome<B>
    where
        F: FnOnce(A) -> B,
    {
        match self {
            Self::Completed(value) => Outcome::Completed(function(value)),
            Self::Faulted(error) => Outcome::Faulted(error),
            Self::Cancelled => Outcome::Cancelled,
        }
    }

    /// Converts into a `Result`, reporting cancellation as [`CancelledError`].
    ///
    /// # Errors
    ///
    /// Returns the fault payload for `Faulted`, and a `TaskError` wrapping
    /// `CancelledError` for `Cancelled`.
    pub fn into_result(self) -> Result<A, TaskError> {
        match self {
            Self::Completed(value) => Ok(value),
            Self::Faulted(error) => Err(error),
            Self::Cancelled => Err(TaskError::new(CancelledError)),
        }
    }
}

impl<A, E> From<Result<A, E>> for Outcome<A>
where
    E: std::error::Error + Send + Sync + 'static,
{
    fn from(result: Result<A, E>) -> Self {
        match result {
            Ok(value) => Self::Completed(value),
            Err(error) => Self::Faulted(TaskError::new(error)),
        }
    }
}

// =============================================================================
// Failure Aggregation
// =============================================================================

/// Collects the non-completed outcomes of several operands.
///
/// Faults are kept in operand order. The combined outcome is a fault when
/// any operand faulted, otherwise a cancellation.
#[derive(Debug, Default)]
pub(crate) struct Failures {
    faults: Vec<TaskError>,
}

impl Failures {
    pub(crate) fn take<A>(&mut self, outcome: Outcome<A>) -> Option<A> {
        match outcome {
            Outcome::Completed(value) => Some(value),
            Outcome::Faulted(error) => {
                self.faults.push(error);
                None
            }
            Outcome::Cancelled => None,
        }
    }

    pub(crate) fn into_outcome<B>(self) -> Outcome<B> {
        if self.faults.is_empty() {
            Outcome::Cancelled
        } else {
            Outcome::Faulted(TaskError::aggregate(self.faults))
        }
    }
}
