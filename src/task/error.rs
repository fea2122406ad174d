//! Fault payloads carried by [`Outcome::Faulted`](super::Outcome::Faulted).

use std::any::Any;
use std::error::Error;
use std::fmt;
use std::sync::Arc;

// =============================================================================
// TaskError
// =============================================================================

/// The error payload of a faulted task.
///
/// `TaskError` wraps any `Error + Send + Sync + 'static` behind an `Arc`, so
/// an outcome can be cloned and observed by several continuations. The
/// concrete kind can be recovered with [`TaskError::downcast_ref`].
///
/// Two `TaskError`s compare equal only if they share the same payload
/// (i.e. one is a clone of the other).
///
/// # Examples
///
/// ```rust
/// use monadkit::task::{PredicateRejected, TaskError};
///
/// let error = TaskError::new(PredicateRejected::new(&7));
/// assert!(error.is::<PredicateRejected>());
/// assert_eq!(error.to_string(), "value 7 rejected by predicate");
/// ```
#[derive(Clone)]
pub struct TaskError {
    inner: Arc<dyn Error + Send + Sync + 'static>,
}

impl TaskError {
    /// Wraps an error value.
    pub fn new<E>(error: E) -> Self
    where
        E: Error + Send + Sync + 'static,
    {
        Self {
            inner: Arc::new(error),
        }
    }

    /// Creates an ad-hoc fault from a message.
    pub fn msg(message: impl Into<String>) -> Self {
        Self::new(MessageError(message.into()))
    }

    /// Converts a panic payload caught from a callback or future.
    pub(crate) fn from_panic(payload: &(dyn Any + Send)) -> Self {
        Self::new(PanicError::from_payload(payload))
    }

    /// Combines several faults.
    ///
    /// A single fault is returned as is; two or more become an [`AggregateError`].
    pub(crate) fn aggregate(mut errors: Vec<Self>) -> Self {
        if errors.len() == 1 {
            errors.remove(0)
        } else {
            Self::new(AggregateError { errors })
        }
    }

    /// Returns the payload as `E` if it is of that type.
    pub fn downcast_ref<E>(&self) -> Option<&E>
    where
        E: Error + 'static,
    {
        self.inner.downcast_ref::<E>()
    }

    /// Returns `true` if the payload is of type `E`.
    pub fn is<E>(&self) -> bool
    where
        E: Error + 'static,
    {
        self.inner.is::<E>()
    }

    /// Returns `true` for faults that stand in for a cancellation, such as
    /// a value rejected by [`Task::filter`](super::Task::filter).
    pub fn is_cancellation_style(&self) -> bool {
        self.is::<PredicateRejected>() || self.is::<CancelledError>()
    }

    /// Returns the rendered error message.
    pub fn message(&self) -> String {
        self.inner.to_string()
    }
}

impl fmt::Debug for TaskError {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        formatter.debug_tuple("TaskError").field(&self.inner).finish()
    }
}

impl fmt::Display for TaskError {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(&self.inner, formatter)
    }
}

impl Error for TaskError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        self.inner.source()
    }
}

impl PartialEq for TaskError {
    fn eq(&self, other: &Self) -> bool {
        Arc::ptr_eq(&self.inner, &other.inner)
    }
}

// =============================================================================
// Fault Kinds
// =============================================================================

/// A callback or future panicked while the task was running.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PanicError {
    message: String,
}

impl PanicError {
    fn from_payload(payload: &(dyn Any + Send)) -> Self {
        let message = payload
            .downcast_ref::<&str>()
            .map(|message| (*message).to_string())
            .or_else(|| payload.downcast_ref::<String>().cloned())
            .unwrap_or_else(|| "<non-string panic payload>".to_string());
        Self { message }
    }

    /// The panic message.
    pub fn message(&self) -> &str {
        &self.message
    }
}

impl fmt::Display for PanicError {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(formatter, "task callback panicked: {}", self.message)
    }
}

impl Error for PanicError {}

/// A predicate rejected the task's value.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PredicateRejected {
    description: String,
}

impl PredicateRejected {
    /// Describes the rejected value through its `Debug` rendering.
    pub fn new<A: fmt::Debug>(value: &A) -> Self {
        Self {
            description: format!("{value:?}"),
        }
    }

    /// Uses a caller-supplied description of the rejected value.
    pub fn described(description: impl Into<String>) -> Self {
        Self {
            description: description.into(),
        }
    }

    /// The description of the rejected value.
    pub fn description(&self) -> &str {
        &self.description
    }
}

impl fmt::Display for PredicateRejected {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(formatter, "value {} rejected by predicate", self.description)
    }
}

impl Error for PredicateRejected {}

/// The keys projected by a join did not match.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct KeyMismatch {
    left_key: String,
    right_key: String,
}

impl KeyMismatch {
    pub(crate) fn new<K: fmt::Debug>(left_key: &K, right_key: &K) -> Self {
        Self {
            left_key: format!("{left_key:?}"),
            right_key: format!("{right_key:?}"),
        }
    }

    /// The `Debug` rendering of the key from the first operand.
    pub fn left_key(&self) -> &str {
        &self.left_key
    }

    /// The `Debug` rendering of the key from the second operand.
    pub fn right_key(&self) -> &str {
        &self.right_key
    }
}

impl fmt::Display for KeyMismatch {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            formatter,
            "join keys differ: {} != {}",
            self.left_key, self.right_key
        )
    }
}

impl Error for KeyMismatch {}

/// Several operands of one combinator faulted.
#[derive(Debug, Clone, PartialEq)]
pub struct AggregateError {
    errors: Vec<TaskError>,
}

impl AggregateError {
    /// The collected faults, in operand order.
    pub fn errors(&self) -> &[TaskError] {
        &self.errors
    }
}

impl fmt::Display for AggregateError {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(formatter, "{} faults:", self.errors.len())?;
        for (index, error) in self.errors.iter().enumerate() {
            let separator = if index == 0 { " " } else { "; " };
            write!(formatter, "{separator}{error}")?;
        }
        Ok(())
    }
}

impl Error for AggregateError {}

/// Produced by [`Outcome::into_result`](super::Outcome::into_result) for a
/// cancelled outcome.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CancelledError;

impl fmt::Display for CancelledError {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(formatter, "task was cancelled")
    }
}

impl Error for CancelledError {}

#[derive(Debug)]
struct MessageError(String);

impl fmt::Display for MessageError {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        formatter.write_str(&self.0)
    }
}

impl Error for MessageError {}
