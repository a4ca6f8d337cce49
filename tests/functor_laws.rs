//! Property-based tests for the functor laws of `Maybe::map`.
//!
//! - **Identity Law**: `m.map(|x| x) == m`
//! - **Composition Law**: `m.map(f).map(g) == m.map(|x| g(f(x)))`
//!
//! Both the inherent `map` and the `Functor::fmap` instance are checked.

use maybe::optional::Maybe;
use proptest::prelude::*;

fn any_maybe_i32() -> impl Strategy<Value = Maybe<i32>> {
    prop::option::of(any::<i32>()).prop_map(Maybe::from)
}

fn any_maybe_string() -> impl Strategy<Value = Maybe<String>> {
    prop::option::of(any::<String>()).prop_map(Maybe::from)
}

// =============================================================================
// Inherent map
// =============================================================================

proptest! {
    #[test]
    fn prop_identity_law(value in any_maybe_i32()) {
        prop_assert_eq!(value.map(|x| x), value);
    }

    #[test]
    fn prop_composition_law(value in any_maybe_i32()) {
        let function1 = |n: i32| n.wrapping_add(1);
        let function2 = |n: i32| n.wrapping_mul(2);

        let left = value.map(function1).map(function2);
        let right = value.map(|x| function2(function1(x)));

        prop_assert_eq!(left, right);
    }

    #[test]
    fn prop_string_identity_law(value in any_maybe_string()) {
        prop_assert_eq!(value.clone().map(|x| x), value);
    }

    /// Changing the payload type keeps the variant
    #[test]
    fn prop_string_composition_law(value in any_maybe_string()) {
        let function1 = |s: String| s.len();
        let function2 = |n: usize| n.wrapping_mul(2);

        let left = value.clone().map(function1).map(function2);
        let right = value.map(|x| function2(function1(x)));

        prop_assert_eq!(left, right);
    }

    #[test]
    fn prop_map_preserves_presence(value in any_maybe_i32()) {
        prop_assert_eq!(value.map(i64::from).is_present(), value.is_present());
    }
}

// =============================================================================
// Functor instance
// =============================================================================

#[cfg(feature = "typeclass")]
mod functor_instance {
    use super::any_maybe_i32;
    use maybe::optional::Maybe;
    use maybe::typeclass::Functor;
    use proptest::prelude::*;

    proptest! {
        #[test]
        fn prop_fmap_identity_law(value in any_maybe_i32()) {
            prop_assert_eq!(value.fmap(|x| x), value);
        }

        #[test]
        fn prop_fmap_agrees_with_map(value in any_maybe_i32()) {
            let function = |n: i32| n.wrapping_sub(7);
            prop_assert_eq!(value.fmap(function), value.map(function));
        }

        #[test]
        fn prop_fmap_ref_keeps_original(value in any_maybe_i32()) {
            let mapped: Maybe<i64> = value.fmap_ref(|n| i64::from(*n) * 2);
            prop_assert_eq!(mapped, value.map(|n| i64::from(n) * 2));
        }
    }
}
