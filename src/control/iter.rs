//! Iterator adapters that answer with `Maybe` instead of panicking.
//!
//! [`MaybeIteratorExt`] is implemented for every iterator. Each "or absent"
//! lookup returns [`Maybe::Absent`] when no qualifying element exists, and
//! [`MaybeIteratorExt::choose`] keeps only the present projections, in
//! source order.
//!
//! # Examples
//!
//! ```rust
//! use monadkit::control::{Maybe, MaybeIteratorExt};
//!
//! let numbers = vec![1, 2, 3, 4];
//! assert_eq!(numbers.iter().copied().first_or_absent(), Maybe::Present(1));
//! assert_eq!(numbers.iter().copied().element_at_or_absent(9), Maybe::Absent);
//!
//! let evens: Vec<i32> = numbers
//!     .into_iter()
//!     .choose(|x| if x % 2 == 0 { Maybe::Present(x * 10) } else { Maybe::Absent })
//!     .collect();
//! assert_eq!(evens, vec![20, 40]);
//! ```

use std::fmt;
use std::iter::FusedIterator;

use super::Maybe;

/// Lookup and projection adapters over any iterator.
pub trait MaybeIteratorExt: Iterator + Sized {
    /// Returns the first element, or `Absent` for an empty iterator.
    fn first_or_absent(mut self) -> Maybe<Self::Item> {
        self.next().into()
    }

    /// Returns the first element satisfying `predicate`.
    fn first_or_absent_by<P>(mut self, predicate: P) -> Maybe<Self::Item>
    where
        P: FnMut(&Self::Item) -> bool,
    {
        self.find(predicate).into()
    }

    /// Returns the last element, or `Absent` for an empty iterator.
    fn last_or_absent(self) -> Maybe<Self::Item> {
        self.last().into()
    }

    /// Returns the last element satisfying `predicate`.
    fn last_or_absent_by<P>(self, predicate: P) -> Maybe<Self::Item>
    where
        P: FnMut(&Self::Item) -> bool,
    {
        self.filter(predicate).last().into()
    }

    /// Returns the only element.
    ///
    /// `Absent` when the iterator is empty or yields more than one element.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use monadkit::control::{Maybe, MaybeIteratorExt};
    ///
    /// assert_eq!([7].into_iter().single_or_absent(), Maybe::Present(7));
    /// assert_eq!([7, 8].into_iter().single_or_absent(), Maybe::Absent);
    /// ```
    fn single_or_absent(mut self) -> Maybe<Self::Item> {
        match (self.next(), self.next()) {
            (Some(only), None) => Maybe::Present(only),
            _ => Maybe::Absent,
        }
    }

    /// Returns the only element satisfying `predicate`.
    fn single_or_absent_by<P>(self, predicate: P) -> Maybe<Self::Item>
    where
        P: FnMut(&Self::Item) -> bool,
    {
        self.filter(predicate).single_or_absent()
    }

    /// Returns the element at `index` (zero-based).
    fn element_at_or_absent(mut self, index: usize) -> Maybe<Self::Item> {
        self.nth(index).into()
    }

    /// Projects each element through `chooser`, yielding only present results.
    ///
    /// The adapter is lazy; `chooser` runs as the result is consumed.
    fn choose<B, F>(self, chooser: F) -> Choose<Self, F>
    where
        F: FnMut(Self::Item) -> Maybe<B>,
    {
        Choose {
            iter: self,
            chooser,
        }
    }

    /// Collects the iterator's `Maybe` items; any `Absent` makes the result `Absent`.
    fn sequence_maybe<A>(self) -> Maybe<Vec<A>>
    where
        Self: Iterator<Item = Maybe<A>>,
    {
        self.collect()
    }
}

impl<I: Iterator> MaybeIteratorExt for I {}

/// Iterator returned by [`MaybeIteratorExt::choose`].
#[must_use = "iterators are lazy and do nothing unless consumed"]
#[derive(Clone)]
pub struct Choose<I, F> {
    iter: I,
    chooser: F,
}

impl<I: fmt::Debug, F> fmt::Debug for Choose<I, F> {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        formatter.debug_struct("Choose").field("iter", &self.iter).finish()
    }
}

impl<B, I, F> Iterator for Choose<I, F>
where
    I: Iterator,
    F: FnMut(I::Item) -> Maybe<B>,
{
    type Item = B;

    fn next(&mut self) -> Option<B> {
        let chooser = &mut self.chooser;
        self.iter.find_map(|item| chooser(item).into_option())
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let (_, upper) = self.iter.size_hint();
        (0, upper)
    }
}

impl<B, I, F> DoubleEndedIterator for Choose<I, F>
where
    I: DoubleEndedIterator,
    F: FnMut(I::Item) -> Maybe<B>,
{
    fn next_back(&mut self) -> Option<B> {
        while let Some(item) = self.iter.next_back() {
            if let Maybe::Present(value) = (self.chooser)(item) {
                return Some(value);
            }
        }
        None
    }
}

impl<B, I, F> FusedIterator for Choose<I, F>
where
    I: FusedIterator,
    F: FnMut(I::Item) -> Maybe<B>,
{
}
