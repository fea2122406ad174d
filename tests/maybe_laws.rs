#![cfg(feature = "control")]
//! Property-based tests for `Maybe<T>` laws.
//!
//! - **Functor Laws**: identity and composition
//! - **Monad Laws**: left identity, right identity, associativity
//! - **Filter**: agreement with `bind`
//! - **Zip**: agreement with `apply`

use monadkit::control::{Maybe, absent, present};
use proptest::prelude::*;

fn maybe_strategy() -> impl Strategy<Value = Maybe<i32>> {
    prop_oneof![
        1 => Just(Maybe::Absent),
        3 => any::<i32>().prop_map(Maybe::Present),
    ]
}

fn half(x: i32) -> Maybe<i32> {
    if x % 2 == 0 { present(x / 2) } else { absent() }
}

fn positive(x: i32) -> Maybe<i32> {
    if x > 0 { present(x) } else { absent() }
}

// =============================================================================
// Functor Laws
// =============================================================================

proptest! {
    #[test]
    fn prop_functor_identity(maybe in maybe_strategy()) {
        prop_assert_eq!(maybe.map(|x| x), maybe);
    }

    #[test]
    fn prop_functor_composition(maybe in maybe_strategy()) {
        let f = |x: i32| x.wrapping_mul(3);
        let g = |x: i32| x.wrapping_sub(7);
        prop_assert_eq!(maybe.map(f).map(g), maybe.map(|x| g(f(x))));
    }
}

// =============================================================================
// Monad Laws
// =============================================================================

proptest! {
    #[test]
    fn prop_monad_left_identity(value in any::<i32>()) {
        prop_assert_eq!(present(value).bind(half), half(value));
    }

    #[test]
    fn prop_monad_right_identity(maybe in maybe_strategy()) {
        prop_assert_eq!(maybe.bind(Maybe::Present), maybe);
    }

    #[test]
    fn prop_monad_associativity(maybe in maybe_strategy()) {
        prop_assert_eq!(
            maybe.bind(half).bind(positive),
            maybe.bind(|x| half(x).bind(positive))
        );
    }
}

// =============================================================================
// Derived Operations
// =============================================================================

proptest! {
    #[test]
    fn prop_filter_agrees_with_bind(maybe in maybe_strategy()) {
        let predicate = |x: &i32| x % 3 == 0;
        prop_assert_eq!(
            maybe.filter(predicate),
            maybe.bind(|x| if predicate(&x) { present(x) } else { absent() })
        );
    }

    #[test]
    fn prop_zip_agrees_with_apply(first in maybe_strategy(), second in maybe_strategy()) {
        let combine = |a: i32, b: i32| a.wrapping_add(b);
        prop_assert_eq!(
            first.zip(second, combine),
            first.map(|a| move |b| combine(a, b)).apply(second)
        );
    }

    #[test]
    fn prop_get_or_else_matches_fold(maybe in maybe_strategy(), fallback in any::<i32>()) {
        prop_assert_eq!(maybe.get_or_else(fallback), maybe.fold(fallback, |_, x| x));
    }
}

// =============================================================================
// Consistency Laws
// =============================================================================

proptest! {
    #[test]
    fn prop_map_agrees_with_bind(maybe in maybe_strategy()) {
        let f = |x: i32| x.wrapping_add(11);
        prop_assert_eq!(maybe.map(f), maybe.bind(|x| present(f(x))));
    }

    #[test]
    fn prop_applicative_homomorphism(value in any::<i32>()) {
        let f = |x: i32| x.wrapping_neg();
        prop_assert_eq!(present(f).apply(present(value)), present(f(value)));
    }

    #[test]
    fn prop_or_else(first in maybe_strategy(), second in maybe_strategy()) {
        let expected = if first.is_present() { first } else { second };
        prop_assert_eq!(first.or_else(second), expected);
    }

    #[test]
    fn prop_ordering_agrees_with_option(first in maybe_strategy(), second in maybe_strategy()) {
        prop_assert_eq!(
            first.cmp(&second),
            first.into_option().cmp(&second.into_option())
        );
    }
}
