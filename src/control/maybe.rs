//! Maybe type - zero or one value.
//!
//! This module provides the `Maybe<T>` type, which is either `Present(T)` or
//! `Absent`. Absence is a first-class outcome rather than an error: it is
//! eliminated with [`Maybe::get_or_else`], [`Maybe::fold`] or
//! [`Maybe::match_with`], never thrown.
//!
//! Every combinator is lazy on the miss path: when the value is absent, the
//! supplied function is never invoked.
//!
//! # Examples
//!
//! ```rust
//! use monadkit::control::Maybe;
//!
//! let value = Maybe::Present(5).map(|x| x + 1).filter(|x| *x > 3);
//! assert_eq!(value, Maybe::Present(6));
//!
//! let rejected = Maybe::Present(5).filter(|x| *x > 10);
//! assert_eq!(rejected, Maybe::Absent);
//! ```

use std::fmt;

use super::Either;
use super::Lazy;

/// A value that may or may not be present.
///
/// `Maybe<T>` is a closed sum type: `Absent` carries no value of type `T`,
/// not even a default, so "no value" and "a value equal to the zero of `T`"
/// stay distinguishable.
///
/// Ordering matches `Option`: `Absent` sorts before every `Present`.
///
/// # Type Parameters
///
/// * `T` - The type of the contained value
///
/// # Examples
///
/// ```rust
/// use monadkit::control::Maybe;
///
/// let present: Maybe<i32> = Maybe::Present(0);
/// let absent: Maybe<i32> = Maybe::Absent;
///
/// assert_ne!(present, absent);
/// assert_eq!(present.get_or_else(7), 0);
/// assert_eq!(absent.get_or_else(7), 7);
/// ```
#[derive(Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Maybe<T> {
    /// No value is present.
    Absent,
    /// A value is present.
    Present(T),
}

/// Wraps a value as `Maybe::Present`.
///
/// # Examples
///
/// ```rust
/// use monadkit::control::{Maybe, present};
///
/// assert_eq!(present(3), Maybe::Present(3));
/// ```
#[inline]
pub const fn present<T>(value: T) -> Maybe<T> {
    Maybe::Present(value)
}

/// Returns `Maybe::Absent` for any `T`.
///
/// # Examples
///
/// ```rust
/// use monadkit::control::{Maybe, absent};
///
/// let value: Maybe<String> = absent();
/// assert!(value.is_absent());
/// ```
#[inline]
pub const fn absent<T>() -> Maybe<T> {
    Maybe::Absent
}

impl<T> Maybe<T> {
    // =========================================================================
    // Type Checking
    // =========================================================================

    /// Returns `true` if a value is present.
    #[inline]
    pub const fn is_present(&self) -> bool {
        matches!(self, Self::Present(_))
    }

    /// Returns `true` if no value is present.
    #[inline]
    pub const fn is_absent(&self) -> bool {
        matches!(self, Self::Absent)
    }

    /// Converts from `&Maybe<T>` to `Maybe<&T>`.
    #[inline]
    pub const fn as_ref(&self) -> Maybe<&T> {
        match self {
            Self::Present(value) => Maybe::Present(value),
            Self::Absent => Maybe::Absent,
        }
    }

    /// Converts from `&mut Maybe<T>` to `Maybe<&mut T>`.
    #[inline]
    pub const fn as_mut(&mut self) -> Maybe<&mut T> {
        match self {
            Self::Present(value) => Maybe::Present(value),
            Self::Absent => Maybe::Absent,
        }
    }

    /// Converts into the standard library `Option`.
    #[inline]
    pub fn into_option(self) -> Option<T> {
        match self {
            Self::Present(value) => Some(value),
            Self::Absent => None,
        }
    }

    // =========================================================================
    // Functor / Monad
    // =========================================================================

    /// Applies a function to the contained value.
    ///
    /// Returns `Present(function(x))` for `Present(x)` and `Absent` otherwise.
    /// The function is not invoked when the value is absent.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use monadkit::control::Maybe;
    ///
    /// assert_eq!(Maybe::Present(21).map(|x| x * 2), Maybe::Present(42));
    /// assert_eq!(Maybe::<i32>::Absent.map(|x| x * 2), Maybe::Absent);
    /// ```
    #[inline]
    pub fn map<B, F>(self, function: F) -> Maybe<B>
    where
        F: FnOnce(T) -> B,
    {
        match self {
            Self::Present(value) => Maybe::Present(function(value)),
            Self::Absent => Maybe::Absent,
        }
    }

    /// Chains a computation that itself may produce no value.
    ///
    /// For `Present(x)` the result of `function(x)` is returned as is, so
    /// `Maybe::Present(x).bind(f) == f(x)` (left identity).
    ///
    /// # Examples
    ///
    /// ```rust
    /// use monadkit::control::Maybe;
    ///
    /// let half = |x: i32| if x % 2 == 0 { Maybe::Present(x / 2) } else { Maybe::Absent };
    ///
    /// assert_eq!(Maybe::Present(8).bind(half), Maybe::Present(4));
    /// assert_eq!(Maybe::Present(3).bind(half), Maybe::Absent);
    /// ```
    #[inline]
    pub fn bind<B, F>(self, function: F) -> Maybe<B>
    where
        F: FnOnce(T) -> Maybe<B>,
    {
        match self {
            Self::Present(value) => function(value),
            Self::Absent => Maybe::Absent,
        }
    }

    /// Binds and then projects the pair of source and bound values.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use monadkit::control::Maybe;
    ///
    /// let result = Maybe::Present(2).select_many(|x| Maybe::Present(x * 10), |x, y| x + y);
    /// assert_eq!(result, Maybe::Present(22));
    /// ```
    pub fn select_many<U, B, F, G>(self, binder: F, result_selector: G) -> Maybe<B>
    where
        F: FnOnce(&T) -> Maybe<U>,
        G: FnOnce(T, U) -> B,
    {
        match self {
            Self::Present(value) => match binder(&value) {
                Maybe::Present(bound) => Maybe::Present(result_selector(value, bound)),
                Maybe::Absent => Maybe::Absent,
            },
            Self::Absent => Maybe::Absent,
        }
    }

    /// Keeps the value only if the predicate holds.
    ///
    /// The predicate is never invoked when the value is already absent.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use monadkit::control::Maybe;
    ///
    /// assert_eq!(Maybe::Present(4).filter(|x| x % 2 == 0), Maybe::Present(4));
    /// assert_eq!(Maybe::Present(3).filter(|x| x % 2 == 0), Maybe::Absent);
    /// ```
    #[inline]
    #[must_use]
    pub fn filter<P>(self, predicate: P) -> Self
    where
        P: FnOnce(&T) -> bool,
    {
        match self {
            Self::Present(value) => {
                if predicate(&value) {
                    Self::Present(value)
                } else {
                    Self::Absent
                }
            }
            Self::Absent => Self::Absent,
        }
    }

    /// Aggregates the value (zero or one of it) into a seed.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use monadkit::control::Maybe;
    ///
    /// assert_eq!(Maybe::Present(5).fold(10, |acc, x| acc + x), 15);
    /// assert_eq!(Maybe::Absent.fold(10, |acc, x: i32| acc + x), 10);
    /// ```
    #[inline]
    pub fn fold<B, F>(self, seed: B, function: F) -> B
    where
        F: FnOnce(B, T) -> B,
    {
        match self {
            Self::Present(value) => function(seed, value),
            Self::Absent => seed,
        }
    }

    /// Eliminates the `Maybe` by applying one of two functions.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use monadkit::control::Maybe;
    ///
    /// let describe = |m: Maybe<i32>| m.match_with(|x| format!("got {x}"), || "nothing".to_string());
    /// assert_eq!(describe(Maybe::Present(1)), "got 1");
    /// assert_eq!(describe(Maybe::Absent), "nothing");
    /// ```
    #[inline]
    pub fn match_with<B, F, G>(self, on_present: F, on_absent: G) -> B
    where
        F: FnOnce(T) -> B,
        G: FnOnce() -> B,
    {
        match self {
            Self::Present(value) => on_present(value),
            Self::Absent => on_absent(),
        }
    }

    // =========================================================================
    // Combining
    // =========================================================================

    /// Combines two values when both are present.
    ///
    /// The combiner runs exactly once when both operands are present and
    /// never otherwise.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use monadkit::control::Maybe;
    ///
    /// assert_eq!(Maybe::Present(2).zip(Maybe::Present(3), |a, b| a * b), Maybe::Present(6));
    /// assert_eq!(Maybe::Present(2).zip(Maybe::<i32>::Absent, |a, b| a * b), Maybe::Absent);
    /// ```
    #[inline]
    pub fn zip<U, C, F>(self, other: Maybe<U>, combiner: F) -> Maybe<C>
    where
        F: FnOnce(T, U) -> C,
    {
        match (self, other) {
            (Self::Present(left), Maybe::Present(right)) => Maybe::Present(combiner(left, right)),
            _ => Maybe::Absent,
        }
    }

    /// Combines two values when both are present and their keys are equal.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use monadkit::control::Maybe;
    ///
    /// let first = Maybe::Present(("k", 1));
    /// let second = Maybe::Present(("k", 2));
    /// let joined = first.join(second, |p| p.0, |p| p.0, |a, b| a.1 + b.1);
    /// assert_eq!(joined, Maybe::Present(3));
    ///
    /// let other = Maybe::Present(("x", 2));
    /// assert_eq!(first.join(other, |p| p.0, |p| p.0, |a, b| a.1 + b.1), Maybe::Absent);
    /// ```
    pub fn join<U, K, D, KeyThis, KeyOther, Combine>(
        self,
        other: Maybe<U>,
        key_of_this: KeyThis,
        key_of_other: KeyOther,
        combine: Combine,
    ) -> Maybe<D>
    where
        K: PartialEq,
        KeyThis: FnOnce(&T) -> K,
        KeyOther: FnOnce(&U) -> K,
        Combine: FnOnce(T, U) -> D,
    {
        match (self, other) {
            (Self::Present(left), Maybe::Present(right)) => {
                if key_of_this(&left) == key_of_other(&right) {
                    Maybe::Present(combine(left, right))
                } else {
                    Maybe::Absent
                }
            }
            _ => Maybe::Absent,
        }
    }

    /// Returns this value if present, otherwise `other`.
    #[inline]
    #[must_use]
    pub fn or_else(self, other: Self) -> Self {
        match self {
            Self::Present(_) => self,
            Self::Absent => other,
        }
    }

    /// Returns this value if present, otherwise the result of `function`.
    ///
    /// The function is not invoked when the value is present.
    #[inline]
    #[must_use]
    pub fn or_else_with<F>(self, function: F) -> Self
    where
        F: FnOnce() -> Self,
    {
        match self {
            Self::Present(_) => self,
            Self::Absent => function(),
        }
    }

    // =========================================================================
    // Elimination with fallback
    // =========================================================================

    /// Returns the contained value or the eagerly supplied fallback.
    #[inline]
    pub fn get_or_else(self, fallback: T) -> T {
        match self {
            Self::Present(value) => value,
            Self::Absent => fallback,
        }
    }

    /// Returns the contained value or computes a fallback.
    ///
    /// The thunk is only called when the value is absent.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use monadkit::control::Maybe;
    /// use std::cell::Cell;
    ///
    /// let calls = Cell::new(0);
    /// let value = Maybe::Present(1).get_or_else_with(|| {
    ///     calls.set(calls.get() + 1);
    ///     0
    /// });
    /// assert_eq!(value, 1);
    /// assert_eq!(calls.get(), 0);
    /// ```
    #[inline]
    pub fn get_or_else_with<F>(self, fallback: F) -> T
    where
        F: FnOnce() -> T,
    {
        match self {
            Self::Present(value) => value,
            Self::Absent => fallback(),
        }
    }

    /// Returns the contained value or the value of a memoized [`Lazy`].
    ///
    /// The lazy value is forced only when this `Maybe` is absent.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use monadkit::control::{Lazy, Maybe};
    ///
    /// let fallback = Lazy::new(|| 99);
    /// assert_eq!(Maybe::Present(1).get_or_else_lazy(&fallback), 1);
    /// assert!(!fallback.is_initialized());
    ///
    /// assert_eq!(Maybe::Absent.get_or_else_lazy(&fallback), 99);
    /// assert!(fallback.is_initialized());
    /// ```
    pub fn get_or_else_lazy<F>(self, fallback: &Lazy<T, F>) -> T
    where
        T: Clone,
        F: FnOnce() -> T,
    {
        match self {
            Self::Present(value) => value,
            Self::Absent => fallback.force().clone(),
        }
    }

    /// Runs a side effect on the contained value and returns `self` unchanged.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use monadkit::control::Maybe;
    ///
    /// let mut seen = Vec::new();
    /// let value = Maybe::Present(3).on_present(|x| seen.push(*x)).map(|x| x + 1);
    /// assert_eq!(value, Maybe::Present(4));
    /// assert_eq!(seen, vec![3]);
    /// ```
    #[inline]
    #[must_use]
    pub fn on_present<F>(self, side_effect: F) -> Self
    where
        F: FnOnce(&T),
    {
        if let Self::Present(value) = &self {
            side_effect(value);
        }
        self
    }

    /// Runs a side effect when no value is present and returns `self` unchanged.
    #[inline]
    #[must_use]
    pub fn on_absent<F>(self, side_effect: F) -> Self
    where
        F: FnOnce(),
    {
        if self.is_absent() {
            side_effect();
        }
        self
    }

    /// Converts into an `Either`, using `left_value` when absent.
    #[inline]
    pub fn to_either<L>(self, left_value: L) -> Either<L, T> {
        match self {
            Self::Present(value) => Either::Right(value),
            Self::Absent => Either::Left(left_value),
        }
    }

    /// Returns an iterator over the contained value (zero or one item).
    #[inline]
    pub fn iter(&self) -> std::option::IntoIter<&T> {
        self.as_ref().into_option().into_iter()
    }
}

impl<T: Default> Maybe<T> {
    /// Returns the contained value or `T::default()`.
    #[inline]
    pub fn get_or_default(self) -> T {
        match self {
            Self::Present(value) => value,
            Self::Absent => T::default(),
        }
    }
}

impl<T> Maybe<Maybe<T>> {
    /// Removes one level of nesting.
    #[inline]
    pub fn flatten(self) -> Maybe<T> {
        self.bind(|inner| inner)
    }
}

// =============================================================================
// Applicative
// =============================================================================

impl<F> Maybe<F> {
    /// Applies a wrapped function to a wrapped argument.
    ///
    /// The result is present only if both the function and the argument are.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use monadkit::control::Maybe;
    ///
    /// let double = Maybe::Present(|x: i32| x * 2);
    /// assert_eq!(double.apply(Maybe::Present(21)), Maybe::Present(42));
    /// ```
    #[inline]
    pub fn apply<A, B>(self, argument: Maybe<A>) -> Maybe<B>
    where
        F: FnOnce(A) -> B,
    {
        self.zip(argument, |function, value| function(value))
    }
}

/// Lifts a binary function over two `Maybe` arguments.
///
/// # Examples
///
/// ```rust
/// use monadkit::control::{Maybe, lift2};
///
/// assert_eq!(lift2(|a: i32, b: i32| a + b, Maybe::Present(1), Maybe::Present(2)), Maybe::Present(3));
/// ```
#[inline]
pub fn lift2<A, B, C, F>(function: F, first: Maybe<A>, second: Maybe<B>) -> Maybe<C>
where
    F: FnOnce(A, B) -> C,
{
    first.zip(second, function)
}

/// Lifts a ternary function over three `Maybe` arguments.
#[inline]
pub fn lift3<A, B, C, D, F>(
    function: F,
    first: Maybe<A>,
    second: Maybe<B>,
    third: Maybe<C>,
) -> Maybe<D>
where
    F: FnOnce(A, B, C) -> D,
{
    match (first, second, third) {
        (Maybe::Present(a), Maybe::Present(b), Maybe::Present(c)) => {
            Maybe::Present(function(a, b, c))
        }
        _ => Maybe::Absent,
    }
}

// =============================================================================
// Conversions
// =============================================================================

/// Extension for lifting plain values and `Option`s into `Maybe`.
pub trait ToMaybe<T> {
    /// Converts `self` into a `Maybe`.
    fn to_maybe(self) -> Maybe<T>;
}

impl<T> ToMaybe<T> for Option<T> {
    #[inline]
    fn to_maybe(self) -> Maybe<T> {
        Maybe::from(self)
    }
}

impl<T> From<Option<T>> for Maybe<T> {
    #[inline]
    fn from(option: Option<T>) -> Self {
        match option {
            Some(value) => Self::Present(value),
            None => Self::Absent,
        }
    }
}

impl<T> From<Maybe<T>> for Option<T> {
    #[inline]
    fn from(maybe: Maybe<T>) -> Self {
        maybe.into_option()
    }
}

impl<T> Default for Maybe<T> {
    /// Returns `Absent`; no `T: Default` bound is required.
    #[inline]
    fn default() -> Self {
        Self::Absent
    }
}

impl<T> IntoIterator for Maybe<T> {
    type Item = T;
    type IntoIter = std::option::IntoIter<T>;

    fn into_iter(self) -> Self::IntoIter {
        self.into_option().into_iter()
    }
}

impl<'a, T> IntoIterator for &'a Maybe<T> {
    type Item = &'a T;
    type IntoIter = std::option::IntoIter<&'a T>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

impl<A, V: FromIterator<A>> FromIterator<Maybe<A>> for Maybe<V> {
    /// Collects present values; a single absent element makes the whole result absent.
    fn from_iter<I: IntoIterator<Item = Maybe<A>>>(iter: I) -> Self {
        iter.into_iter()
            .map(Maybe::into_option)
            .collect::<Option<V>>()
            .into()
    }
}

impl<T: fmt::Display> fmt::Display for Maybe<T> {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Present(value) => write!(formatter, "Present({value})"),
            Self::Absent => write!(formatter, "Absent"),
        }
    }
}
