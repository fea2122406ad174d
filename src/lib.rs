//! # monadkit
//!
//! Optional values, two-sided values and deferred computations sharing one
//! combinator vocabulary.
//!
//! ## Overview
//!
//! - **Maybe**: a value that is present or absent, with `map`, `bind`,
//!   `filter`, `zip`, `join`, `apply` and friends
//! - **Either**: a value that is one of two alternatives, with the same
//!   operations available on either side
//! - **Task**: a deferred computation that completes, faults or is cancelled,
//!   composed with the same combinators plus fault handling
//!
//! ## Feature Flags
//!
//! - `control`: `Maybe`, `Either`, `Lazy` and the iterator extensions
//! - `task`: `Task` and its runtime integration (implies `control`)
//! - `serde`: `Serialize`/`Deserialize` for `Maybe` and `Either`
//! - `full`: Enable all features
//!
//! ## Example
//!
//! ```rust
//! use monadkit::prelude::*;
//!
//! let price = present(40).zip(present(2), |a, b| a + b);
//! assert_eq!(price, Maybe::Present(42));
//!
//! let parsed: Either<String, i32> = right(7);
//! assert_eq!(parsed.map_right(|x| x * 6).into_right(), Maybe::Present(42));
//! ```

#![forbid(unsafe_code)]
#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![warn(clippy::nursery)]
#![allow(clippy::redundant_closure_for_method_calls)]

/// Prelude module for convenient imports.
///
/// The task-level `lift2`/`lift3` are not re-exported here; they live at
/// `monadkit::task::{lift2, lift3}`.
///
/// # Usage
///
/// ```rust
/// use monadkit::prelude::*;
/// ```
pub mod prelude {
    #[cfg(feature = "control")]
    pub use crate::control::*;

    #[cfg(feature = "task")]
    pub use crate::task::{
        Executor, InlineExecutor, Outcome, Task, TaskError, TokioExecutor, sequence, traverse,
    };
}

#[cfg(feature = "control")]
pub mod control;

#[cfg(feature = "task")]
pub mod task;
