//! Memoized deferred values.
//!
//! `Lazy<T, F>` is the deferred-value form accepted by
//! [`Maybe::get_or_else_lazy`](super::Maybe::get_or_else_lazy): the
//! initializer runs at most once, and only when something forces it.
//!
//! # Examples
//!
//! ```rust
//! use monadkit::control::Lazy;
//! use std::cell::Cell;
//!
//! let call_count = Cell::new(0);
//! let lazy = Lazy::new(|| {
//!     call_count.set(call_count.get() + 1);
//!     42
//! });
//!
//! assert!(!lazy.is_initialized());
//! assert_eq!(*lazy.force(), 42);
//! assert_eq!(*lazy.force(), 42);
//! assert_eq!(call_count.get(), 1);
//! ```

use std::cell::{Ref, RefCell};
use std::fmt;

use super::Maybe;

/// The internal state of a `Lazy` value.
#[derive(Debug)]
pub enum LazyState<T, F> {
    /// The value has not been initialized yet.
    /// Contains the initialization function.
    Uninit(F),
    /// The value has been initialized.
    Init(T),
    /// The initialization function panicked.
    Poisoned,
}

/// A lazily evaluated value with memoization.
///
/// # Thread Safety
///
/// This type is NOT thread-safe. It is meant for local fallbacks; share
/// values across threads through `std::sync::LazyLock` instead.
pub struct Lazy<T, F = fn() -> T> {
    state: RefCell<LazyState<T, F>>,
}

impl<T, F: FnOnce() -> T> Lazy<T, F> {
    /// Creates a new lazy value. The initializer is not called yet.
    #[inline]
    pub const fn new(initializer: F) -> Self {
        Self {
            state: RefCell::new(LazyState::Uninit(initializer)),
        }
    }

    /// Forces evaluation of the lazy value and returns a reference to it.
    ///
    /// # Panics
    ///
    /// - If the initialization function panics, the lazy value becomes
    ///   poisoned and all future calls to `force()` will panic.
    /// - If the value is already poisoned from a previous panic.
    pub fn force(&self) -> Ref<'_, T> {
        let needs_initialization = {
            let state = self.state.borrow();
            match &*state {
                LazyState::Init(_) => false,
                LazyState::Poisoned => panic!("Lazy instance has been poisoned"),
                LazyState::Uninit(_) => true,
            }
        };

        if needs_initialization {
            self.initialize();
        }

        Ref::map(self.state.borrow(), |state| match state {
            LazyState::Init(value) => value,
            _ => panic!("Lazy should be initialized at this point"),
        })
    }

    fn initialize(&self) {
        let mut state = self.state.borrow_mut();

        if !matches!(&*state, LazyState::Uninit(_)) {
            return;
        }

        // Stay poisoned if the initializer unwinds.
        let LazyState::Uninit(initializer) = std::mem::replace(&mut *state, LazyState::Poisoned)
        else {
            unreachable!()
        };

        *state = LazyState::Init(initializer());
    }

    /// Consumes the lazy value, running the initializer if needed.
    ///
    /// Returns `Absent` if the value was poisoned.
    pub fn into_inner(self) -> Maybe<T> {
        match self.state.into_inner() {
            LazyState::Init(value) => Maybe::Present(value),
            LazyState::Uninit(initializer) => Maybe::Present(initializer()),
            LazyState::Poisoned => Maybe::Absent,
        }
    }
}

impl<T> Lazy<T, fn() -> T> {
    /// Creates an already-initialized lazy value.
    #[inline]
    pub const fn pure(value: T) -> Self {
        Self {
            state: RefCell::new(LazyState::Init(value)),
        }
    }
}

impl<T, F> Lazy<T, F> {
    /// Returns `true` once the initializer has run successfully.
    #[inline]
    pub fn is_initialized(&self) -> bool {
        matches!(&*self.state.borrow(), LazyState::Init(_))
    }

    /// Returns `true` if the initializer panicked.
    #[inline]
    pub fn is_poisoned(&self) -> bool {
        matches!(&*self.state.borrow(), LazyState::Poisoned)
    }
}

impl<T: fmt::Debug, F> fmt::Debug for Lazy<T, F> {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        let state = self.state.borrow();
        match &*state {
            LazyState::Init(value) => formatter.debug_tuple("Lazy").field(value).finish(),
            LazyState::Uninit(_) => formatter.debug_tuple("Lazy").field(&"<uninit>").finish(),
            LazyState::Poisoned => formatter.debug_tuple("Lazy").field(&"<poisoned>").finish(),
        }
    }
}
