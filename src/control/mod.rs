//! Algebraic value containers.
//!
//! This module provides the pure, immutable building blocks:
//!
//! - [`Maybe`]: zero or one value (`Present` / `Absent`)
//! - [`Either`]: exactly one of two typed alternatives (`Left` / `Right`)
//! - [`Lazy`]: a memoized deferred value, used as a lazy fallback
//! - [`MaybeIteratorExt`]: "or absent" lookups and `choose` over iterators
//!
//! # Examples
//!
//! ```rust
//! use monadkit::control::{Either, Maybe, left, present};
//!
//! let total = present(5).map(|x| x + 1).filter(|x| *x > 3);
//! assert_eq!(total, Maybe::Present(6));
//!
//! let doubled: Either<i32, &str> = left(3);
//! assert_eq!(doubled.map_left(|x| x * 2).match_with(|l| l, |_| -1), 6);
//! ```

mod either;
mod iter;
mod lazy;
mod maybe;

pub use either::{Either, left, right};
pub use iter::{Choose, MaybeIteratorExt};
pub use lazy::{Lazy, LazyState};
pub use maybe::{Maybe, ToMaybe, absent, lift2, lift3, present};
