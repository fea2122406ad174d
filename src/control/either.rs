//! Either type - a value that can be one of two types.
//!
//! This module provides the `Either<L, R>` type, which represents a value
//! that is either a `Left(L)` or a `Right(R)`. Neither side is privileged:
//! every combinator comes in a left-biased and a right-biased flavour
//! (`map_left`/`map_right`, `bind_left`/`bind_right`, `zip_left`/`zip_right`, ...).
//!
//! # Examples
//!
//! ```rust
//! use monadkit::control::Either;
//!
//! // Creating Either values
//! let left: Either<i32, String> = Either::Left(42);
//! let right: Either<i32, String> = Either::Right("hello".to_string());
//!
//! // Pattern matching
//! match left {
//!     Either::Left(n) => println!("Got left: {}", n),
//!     Either::Right(s) => println!("Got right: {}", s),
//! }
//!
//! // Using match_with to handle both cases
//! let result = right.match_with(
//!     |n| format!("Number: {}", n),
//!     |s| format!("String: {}", s),
//! );
//! assert_eq!(result, "String: hello");
//! ```

use std::fmt;

use super::Maybe;

/// A value that can be one of two types.
///
/// `Either<L, R>` represents a value that is either `Left(L)` or `Right(R)`.
/// Both alternatives are equally valid outcomes; equality never holds
/// between a `Left` and a `Right`, whatever they contain.
///
/// # Type Parameters
///
/// * `L` - The type of the left value
/// * `R` - The type of the right value
///
/// # Examples
///
/// ```rust
/// use monadkit::control::Either;
///
/// let success: Either<String, i32> = Either::Right(42);
/// let failure: Either<String, i32> = Either::Left("error".to_string());
///
/// // Map over the right value
/// let doubled = success.map_right(|x| x * 2);
/// assert_eq!(doubled, Either::Right(84));
/// ```
#[derive(Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Either<L, R> {
    /// The left alternative.
    Left(L),
    /// The right alternative.
    Right(R),
}

impl<L, R> Either<L, R> {
    // =========================================================================
    // Type Checking
    // =========================================================================

    /// Returns `true` if this is a `Left` value.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use monadkit::control::Either;
    ///
    /// let left: Either<i32, String> = Either::Left(42);
    /// assert!(left.is_left());
    ///
    /// let right: Either<i32, String> = Either::Right("hello".to_string());
    /// assert!(!right.is_left());
    /// ```
    #[inline]
    pub const fn is_left(&self) -> bool {
        matches!(self, Self::Left(_))
    }

    /// Returns `true` if this is a `Right` value.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use monadkit::control::Either;
    ///
    /// let right: Either<i32, String> = Either::Right("hello".to_string());
    /// assert!(right.is_right());
    ///
    /// let left: Either<i32, String> = Either::Left(42);
    /// assert!(!left.is_right());
    /// ```
    #[inline]
    pub const fn is_right(&self) -> bool {
        matches!(self, Self::Right(_))
    }

    // =========================================================================
    // Value Extraction (Consuming)
    // =========================================================================

    /// Converts the `Either` into a `Maybe<L>`, consuming the either.
    ///
    /// Returns `Present(l)` if this is `Left(l)`, otherwise `Absent`.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use monadkit::control::{Either, Maybe};
    ///
    /// let left: Either<i32, String> = Either::Left(42);
    /// assert_eq!(left.into_left(), Maybe::Present(42));
    ///
    /// let right: Either<i32, String> = Either::Right("hello".to_string());
    /// assert_eq!(right.into_left(), Maybe::Absent);
    /// ```
    #[inline]
    pub fn into_left(self) -> Maybe<L> {
        match self {
            Self::Left(value) => Maybe::Present(value),
            Self::Right(_) => Maybe::Absent,
        }
    }

    /// Converts the `Either` into a `Maybe<R>`, consuming the either.
    #[inline]
    pub fn into_right(self) -> Maybe<R> {
        match self {
            Self::Left(_) => Maybe::Absent,
            Self::Right(value) => Maybe::Present(value),
        }
    }

    // =========================================================================
    // Reference Extraction (Non-consuming)
    // =========================================================================

    /// Returns a reference to the left value if present.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use monadkit::control::Either;
    ///
    /// let left: Either<i32, String> = Either::Left(42);
    /// assert_eq!(left.left_ref(), Some(&42));
    ///
    /// let right: Either<i32, String> = Either::Right("hello".to_string());
    /// assert_eq!(right.left_ref(), None);
    /// ```
    #[inline]
    pub const fn left_ref(&self) -> Option<&L> {
        match self {
            Self::Left(value) => Some(value),
            Self::Right(_) => None,
        }
    }

    /// Returns a reference to the right value if present.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use monadkit::control::Either;
    ///
    /// let right: Either<i32, String> = Either::Right("hello".to_string());
    /// assert_eq!(right.right_ref(), Some(&"hello".to_string()));
    ///
    /// let left: Either<i32, String> = Either::Left(42);
    /// assert_eq!(left.right_ref(), None);
    /// ```
    #[inline]
    pub const fn right_ref(&self) -> Option<&R> {
        match self {
            Self::Left(_) => None,
            Self::Right(value) => Some(value),
        }
    }

    // =========================================================================
    // Mapping Operations
    // =========================================================================

    /// Applies a function to the left value if present.
    ///
    /// If this is `Left(l)`, returns `Left(function(l))`.
    /// If this is `Right(r)`, returns `Right(r)` unchanged.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use monadkit::control::Either;
    ///
    /// let left: Either<i32, String> = Either::Left(42);
    /// let result = left.map_left(|x| x * 2);
    /// assert_eq!(result, Either::Left(84));
    ///
    /// let right: Either<i32, String> = Either::Right("hello".to_string());
    /// let result = right.map_left(|x: i32| x * 2);
    /// assert_eq!(result, Either::Right("hello".to_string()));
    /// ```
    #[inline]
    pub fn map_left<T, F>(self, function: F) -> Either<T, R>
    where
        F: FnOnce(L) -> T,
    {
        match self {
            Self::Left(value) => Either::Left(function(value)),
            Self::Right(value) => Either::Right(value),
        }
    }

    /// Applies a function to the right value if present.
    ///
    /// If this is `Right(r)`, returns `Right(function(r))`.
    /// If this is `Left(l)`, returns `Left(l)` unchanged.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use monadkit::control::Either;
    ///
    /// let right: Either<i32, String> = Either::Right("hello".to_string());
    /// let result = right.map_right(|s| s.len());
    /// assert_eq!(result, Either::Right(5));
    ///
    /// let left: Either<i32, String> = Either::Left(42);
    /// let result = left.map_right(|s: String| s.len());
    /// assert_eq!(result, Either::Left(42));
    /// ```
    #[inline]
    pub fn map_right<T, F>(self, function: F) -> Either<L, T>
    where
        F: FnOnce(R) -> T,
    {
        match self {
            Self::Left(value) => Either::Left(value),
            Self::Right(value) => Either::Right(function(value)),
        }
    }

    /// Applies one of two functions depending on whether this is Left or Right.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use monadkit::control::Either;
    ///
    /// let left: Either<i32, String> = Either::Left(42);
    /// let result = left.bimap(|x| x * 2, |s: String| s.len());
    /// assert_eq!(result, Either::Left(84));
    ///
    /// let right: Either<i32, String> = Either::Right("hello".to_string());
    /// let result = right.bimap(|x: i32| x * 2, |s| s.len());
    /// assert_eq!(result, Either::Right(5));
    /// ```
    #[inline]
    pub fn bimap<T, U, F, G>(self, left_function: F, right_function: G) -> Either<T, U>
    where
        F: FnOnce(L) -> T,
        G: FnOnce(R) -> U,
    {
        match self {
            Self::Left(value) => Either::Left(left_function(value)),
            Self::Right(value) => Either::Right(right_function(value)),
        }
    }

    // =========================================================================
    // Monadic Operations
    // =========================================================================

    /// Chains a computation on the left value.
    ///
    /// `Either::Left(x).bind_left(f) == f(x)`; a `Right` passes through.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use monadkit::control::Either;
    ///
    /// let checked = |x: i32| if x > 0 { Either::Left(x) } else { Either::Right("negative") };
    ///
    /// assert_eq!(Either::Left(5).bind_left(checked), Either::Left(5));
    /// assert_eq!(Either::Left(-5).bind_left(checked), Either::Right("negative"));
    /// assert_eq!(Either::<i32, &str>::Right("skip").bind_left(checked), Either::Right("skip"));
    /// ```
    #[inline]
    pub fn bind_left<T, F>(self, function: F) -> Either<T, R>
    where
        F: FnOnce(L) -> Either<T, R>,
    {
        match self {
            Self::Left(value) => function(value),
            Self::Right(value) => Either::Right(value),
        }
    }

    /// Chains a computation on the right value.
    ///
    /// `Either::Right(x).bind_right(f) == f(x)`; a `Left` passes through.
    #[inline]
    pub fn bind_right<T, F>(self, function: F) -> Either<L, T>
    where
        F: FnOnce(R) -> Either<L, T>,
    {
        match self {
            Self::Left(value) => Either::Left(value),
            Self::Right(value) => function(value),
        }
    }

    /// Aggregates the left value into a seed; a `Right` returns the seed unchanged.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use monadkit::control::Either;
    ///
    /// let left: Either<i32, String> = Either::Left(5);
    /// assert_eq!(left.fold_left(1, |acc, x| acc + x), 6);
    /// ```
    #[inline]
    pub fn fold_left<B, F>(self, seed: B, function: F) -> B
    where
        F: FnOnce(B, L) -> B,
    {
        match self {
            Self::Left(value) => function(seed, value),
            Self::Right(_) => seed,
        }
    }

    /// Aggregates the right value into a seed; a `Left` returns the seed unchanged.
    #[inline]
    pub fn fold_right<B, F>(self, seed: B, function: F) -> B
    where
        F: FnOnce(B, R) -> B,
    {
        match self {
            Self::Left(_) => seed,
            Self::Right(value) => function(seed, value),
        }
    }

    // =========================================================================
    // Combining
    // =========================================================================

    /// Combines the left values of two eithers.
    ///
    /// - both `Left`: `Left(combiner(a, b))`
    /// - `self` is `Right(r)`: `Right(r)`
    /// - `self` is `Left`, `other` is `Right(r)`: `Right(r)` taken from `other`
    ///
    /// # Examples
    ///
    /// ```rust
    /// use monadkit::control::Either;
    ///
    /// let a: Either<i32, &str> = Either::Left(2);
    /// let b: Either<i32, &str> = Either::Left(3);
    /// assert_eq!(a.zip_left(b, |x, y| x + y), Either::Left(5));
    ///
    /// let c: Either<i32, &str> = Either::Right("other");
    /// assert_eq!(a.zip_left(c, |x, y| x + y), Either::Right("other"));
    /// ```
    pub fn zip_left<U, T, F>(self, other: Either<U, R>, combiner: F) -> Either<T, R>
    where
        F: FnOnce(L, U) -> T,
    {
        match (self, other) {
            (Self::Left(left), Either::Left(other_left)) => Either::Left(combiner(left, other_left)),
            (Self::Left(_), Either::Right(other_right)) => Either::Right(other_right),
            (Self::Right(right), _) => Either::Right(right),
        }
    }

    /// Combines the right values of two eithers.
    ///
    /// Mirror image of [`Either::zip_left`]: when `self` is `Right` but `other`
    /// is `Left(l)`, the result is `Left(l)` taken from `other`.
    pub fn zip_right<U, T, F>(self, other: Either<L, U>, combiner: F) -> Either<L, T>
    where
        F: FnOnce(R, U) -> T,
    {
        match (self, other) {
            (Self::Right(right), Either::Right(other_right)) => {
                Either::Right(combiner(right, other_right))
            }
            (Self::Right(_), Either::Left(other_left)) => Either::Left(other_left),
            (Self::Left(left), _) => Either::Left(left),
        }
    }

    /// Like [`Either::zip_left`], additionally gated on equal projected keys.
    ///
    /// Returns `Absent` only when both operands are `Left` and their keys
    /// differ; the off-side propagation is the same as `zip_left`.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use monadkit::control::{Either, Maybe};
    ///
    /// let a: Either<(&str, i32), ()> = Either::Left(("k", 1));
    /// let b: Either<(&str, i32), ()> = Either::Left(("k", 2));
    /// let c: Either<(&str, i32), ()> = Either::Left(("z", 2));
    ///
    /// assert_eq!(a.join_left(b, |p| p.0, |p| p.0, |x, y| x.1 + y.1), Maybe::Present(Either::Left(3)));
    /// assert_eq!(a.join_left(c, |p| p.0, |p| p.0, |x, y| x.1 + y.1), Maybe::Absent);
    /// ```
    pub fn join_left<U, K, T, KeyThis, KeyOther, Combine>(
        self,
        other: Either<U, R>,
        key_of_this: KeyThis,
        key_of_other: KeyOther,
        combine: Combine,
    ) -> Maybe<Either<T, R>>
    where
        K: PartialEq,
        KeyThis: FnOnce(&L) -> K,
        KeyOther: FnOnce(&U) -> K,
        Combine: FnOnce(L, U) -> T,
    {
        match (self, other) {
            (Self::Left(left), Either::Left(other_left)) => {
                if key_of_this(&left) == key_of_other(&other_left) {
                    Maybe::Present(Either::Left(combine(left, other_left)))
                } else {
                    Maybe::Absent
                }
            }
            (Self::Left(_), Either::Right(other_right)) => Maybe::Present(Either::Right(other_right)),
            (Self::Right(right), _) => Maybe::Present(Either::Right(right)),
        }
    }

    /// Like [`Either::zip_right`], additionally gated on equal projected keys.
    pub fn join_right<U, K, T, KeyThis, KeyOther, Combine>(
        self,
        other: Either<L, U>,
        key_of_this: KeyThis,
        key_of_other: KeyOther,
        combine: Combine,
    ) -> Maybe<Either<L, T>>
    where
        K: PartialEq,
        KeyThis: FnOnce(&R) -> K,
        KeyOther: FnOnce(&U) -> K,
        Combine: FnOnce(R, U) -> T,
    {
        match (self, other) {
            (Self::Right(right), Either::Right(other_right)) => {
                if key_of_this(&right) == key_of_other(&other_right) {
                    Maybe::Present(Either::Right(combine(right, other_right)))
                } else {
                    Maybe::Absent
                }
            }
            (Self::Right(_), Either::Left(other_left)) => Maybe::Present(Either::Left(other_left)),
            (Self::Left(left), _) => Maybe::Present(Either::Left(left)),
        }
    }

    // =========================================================================
    // Side Effects
    // =========================================================================

    /// Runs a side effect on the left value and returns `self` unchanged.
    #[inline]
    #[must_use]
    pub fn on_left<F>(self, side_effect: F) -> Self
    where
        F: FnOnce(&L),
    {
        if let Self::Left(value) = &self {
            side_effect(value);
        }
        self
    }

    /// Runs a side effect on the right value and returns `self` unchanged.
    #[inline]
    #[must_use]
    pub fn on_right<F>(self, side_effect: F) -> Self
    where
        F: FnOnce(&R),
    {
        if let Self::Right(value) = &self {
            side_effect(value);
        }
        self
    }

    // =========================================================================
    // Elimination
    // =========================================================================

    /// Eliminates the Either by applying one of two functions.
    ///
    /// This is the total eliminator: exactly one of the functions runs.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use monadkit::control::Either;
    ///
    /// let left: Either<i32, String> = Either::Left(3);
    /// assert_eq!(left.map_left(|x| x * 2).match_with(|l| l, |_| -1), 6);
    ///
    /// let right: Either<i32, String> = Either::Right("e".to_string());
    /// assert_eq!(right.map_left(|x| x * 2).match_with(|l| l, |_| -1), -1);
    /// ```
    #[inline]
    pub fn match_with<T, F, G>(self, left_function: F, right_function: G) -> T
    where
        F: FnOnce(L) -> T,
        G: FnOnce(R) -> T,
    {
        match self {
            Self::Left(value) => left_function(value),
            Self::Right(value) => right_function(value),
        }
    }

    // =========================================================================
    // Swap Operation
    // =========================================================================

    /// Swaps the Left and Right variants.
    ///
    /// `Left(l)` becomes `Right(l)`, and `Right(r)` becomes `Left(r)`.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use monadkit::control::Either;
    ///
    /// let left: Either<i32, String> = Either::Left(42);
    /// assert_eq!(left.swap(), Either::Right(42));
    ///
    /// let right: Either<i32, String> = Either::Right("hello".to_string());
    /// assert_eq!(right.swap(), Either::Left("hello".to_string()));
    /// ```
    #[inline]
    pub fn swap(self) -> Either<R, L> {
        match self {
            Self::Left(value) => Either::Right(value),
            Self::Right(value) => Either::Left(value),
        }
    }

    // =========================================================================
    // Unwrap Operations
    // =========================================================================

    /// Returns the left value, consuming the either.
    ///
    /// # Panics
    ///
    /// Panics if this is a `Right` value.
    #[inline]
    pub fn unwrap_left(self) -> L {
        match self {
            Self::Left(value) => value,
            Self::Right(_) => panic!("called `Either::unwrap_left()` on a `Right` value"),
        }
    }

    /// Returns the right value, consuming the either.
    ///
    /// # Panics
    ///
    /// Panics if this is a `Left` value.
    #[inline]
    pub fn unwrap_right(self) -> R {
        match self {
            Self::Left(_) => panic!("called `Either::unwrap_right()` on a `Left` value"),
            Self::Right(value) => value,
        }
    }

    // =========================================================================
    // Conversion Operations
    // =========================================================================

    /// Converts into a pair of `Option`s.
    ///
    /// Returns `(Some(l), None)` for `Left(l)` and `(None, Some(r))` for `Right(r)`.
    #[inline]
    pub fn into_options(self) -> (Option<L>, Option<R>) {
        match self {
            Self::Left(value) => (Some(value), None),
            Self::Right(value) => (None, Some(value)),
        }
    }
}

// =============================================================================
// Default-based Operations
// =============================================================================

impl<L: Default, R> Either<L, R> {
    /// Returns the left value, or default if this is a Right.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use monadkit::control::Either;
    ///
    /// let left: Either<i32, String> = Either::Left(42);
    /// assert_eq!(left.left_or_default(), 42);
    ///
    /// let right: Either<i32, String> = Either::Right("hello".to_string());
    /// assert_eq!(right.left_or_default(), 0);
    /// ```
    #[inline]
    pub fn left_or_default(self) -> L {
        match self {
            Self::Left(value) => value,
            Self::Right(_) => L::default(),
        }
    }
}

impl<L, R: Default> Either<L, R> {
    /// Returns the right value, or default if this is a Left.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use monadkit::control::Either;
    ///
    /// let right: Either<i32, String> = Either::Right("hello".to_string());
    /// assert_eq!(right.right_or_default(), "hello".to_string());
    ///
    /// let left: Either<i32, String> = Either::Left(42);
    /// assert_eq!(left.right_or_default(), String::new());
    /// ```
    #[inline]
    pub fn right_or_default(self) -> R {
        match self {
            Self::Left(_) => R::default(),
            Self::Right(value) => value,
        }
    }
}

impl<L, R> Either<L, R> {
    /// Returns the left value, or computes one from the right value.
    #[inline]
    pub fn left_or_else<F>(self, function: F) -> L
    where
        F: FnOnce(R) -> L,
    {
        match self {
            Self::Left(value) => value,
            Self::Right(value) => function(value),
        }
    }

    /// Returns the right value, or computes one from the left value.
    #[inline]
    pub fn right_or_else<F>(self, function: F) -> R
    where
        F: FnOnce(L) -> R,
    {
        match self {
            Self::Left(value) => function(value),
            Self::Right(value) => value,
        }
    }
}

// =============================================================================
// Applicative Operations
// =============================================================================

impl<L, F> Either<L, F> {
    /// Applies a right-held function to a right-held argument.
    ///
    /// A `Left` on either operand short-circuits, the function's own `Left`
    /// taking precedence.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use monadkit::control::Either;
    ///
    /// let function: Either<String, fn(i32) -> i32> = Either::Right(|x| x + 1);
    /// assert_eq!(function.apply_right(Either::Right(41)), Either::Right(42));
    /// ```
    pub fn apply_right<A, B>(self, argument: Either<L, A>) -> Either<L, B>
    where
        F: FnOnce(A) -> B,
    {
        self.zip_right(argument, |function, value| function(value))
    }
}

impl<F, R> Either<F, R> {
    /// Applies a left-held function to a left-held argument.
    pub fn apply_left<A, B>(self, argument: Either<A, R>) -> Either<B, R>
    where
        F: FnOnce(A) -> B,
    {
        self.zip_left(argument, |function, value| function(value))
    }
}

/// Constructs `Either::Left` without naming the right type up front.
///
/// # Examples
///
/// ```rust
/// use monadkit::control::{Either, left};
///
/// let value: Either<i32, String> = left(3);
/// assert!(value.is_left());
/// ```
#[inline]
pub const fn left<L, R>(value: L) -> Either<L, R> {
    Either::Left(value)
}

/// Constructs `Either::Right` without naming the left type up front.
#[inline]
pub const fn right<L, R>(value: R) -> Either<L, R> {
    Either::Right(value)
}

// =============================================================================
// Debug Implementation
// =============================================================================

impl<L: fmt::Debug, R: fmt::Debug> fmt::Debug for Either<L, R> {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Left(value) => formatter.debug_tuple("Left").field(value).finish(),
            Self::Right(value) => formatter.debug_tuple("Right").field(value).finish(),
        }
    }
}

impl<L: fmt::Display, R: fmt::Display> fmt::Display for Either<L, R> {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Left(value) => write!(formatter, "Left({value})"),
            Self::Right(value) => write!(formatter, "Right({value})"),
        }
    }
}

// =============================================================================
// From Implementations
// =============================================================================

impl<L, R> From<Result<R, L>> for Either<L, R> {
    /// Converts a `Result` to an `Either`.
    ///
    /// `Ok(r)` becomes `Right(r)`, and `Err(e)` becomes `Left(e)`.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use monadkit::control::Either;
    ///
    /// let ok: Result<i32, String> = Ok(42);
    /// let either: Either<String, i32> = ok.into();
    /// assert_eq!(either, Either::Right(42));
    ///
    /// let err: Result<i32, String> = Err("error".to_string());
    /// let either: Either<String, i32> = err.into();
    /// assert_eq!(either, Either::Left("error".to_string()));
    /// ```
    #[inline]
    fn from(result: Result<R, L>) -> Self {
        match result {
            Ok(value) => Self::Right(value),
            Err(error) => Self::Left(error),
        }
    }
}

impl<L, R> From<Either<L, R>> for Result<R, L> {
    /// Converts an `Either` to a `Result`.
    ///
    /// `Right(r)` becomes `Ok(r)`, and `Left(l)` becomes `Err(l)`.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use monadkit::control::Either;
    ///
    /// let right: Either<String, i32> = Either::Right(42);
    /// let result: Result<i32, String> = right.into();
    /// assert_eq!(result, Ok(42));
    ///
    /// let left: Either<String, i32> = Either::Left("error".to_string());
    /// let result: Result<i32, String> = left.into();
    /// assert_eq!(result, Err("error".to_string()));
    /// ```
    #[inline]
    fn from(either: Either<L, R>) -> Self {
        match either {
            Either::Left(value) => Err(value),
            Either::Right(value) => Ok(value),
        }
    }
}
