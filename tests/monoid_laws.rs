#![cfg(feature = "typeclass")]
//! Property-based tests for the Semigroup and Monoid instances of `Maybe`.
//!
//! - **Associativity**: `(a.combine(b)).combine(c) == a.combine(b.combine(c))`
//! - **Left Identity**: `empty().combine(a) == a`
//! - **Right Identity**: `a.combine(empty()) == a`

use maybe::optional::Maybe;
use maybe::typeclass::{First, Foldable, Last, Monoid, Product, Semigroup, Sum};
use proptest::prelude::*;
use rstest::rstest;

fn any_maybe_string() -> impl Strategy<Value = Maybe<String>> {
    prop::option::of("[a-z]{0,8}").prop_map(Maybe::from)
}

fn any_maybe_sum() -> impl Strategy<Value = Maybe<Sum<i64>>> {
    prop::option::of(-1000_i64..1000).prop_map(|value| Maybe::from(value.map(Sum::new)))
}

proptest! {
    #[test]
    fn prop_string_associativity(
        a in any_maybe_string(),
        b in any_maybe_string(),
        c in any_maybe_string(),
    ) {
        let left = a.clone().combine(b.clone()).combine(c.clone());
        let right = a.combine(b.combine(c));
        prop_assert_eq!(left, right);
    }

    #[test]
    fn prop_string_identity(value in any_maybe_string()) {
        let empty = <Maybe<String> as Monoid>::empty();
        prop_assert_eq!(empty.clone().combine(value.clone()), value.clone());
        prop_assert_eq!(value.clone().combine(empty), value);
    }

    #[test]
    fn prop_sum_associativity(a in any_maybe_sum(), b in any_maybe_sum(), c in any_maybe_sum()) {
        prop_assert_eq!(a.combine(b).combine(c), a.combine(b.combine(c)));
    }

    /// Absent entries are skipped rather than treated as zero
    #[test]
    fn prop_combine_all_skips_absent(values in prop::collection::vec(any_maybe_sum(), 0..16)) {
        let expected: i64 = values.iter().flatten().map(|sum| sum.0).sum();
        let combined = Maybe::combine_all(values.clone());
        let all_absent = values.iter().all(Maybe::is_absent);
        if all_absent {
            prop_assert_eq!(combined, Maybe::absent());
        } else {
            prop_assert_eq!(combined, Maybe::present(Sum::new(expected)));
        }
    }
}

#[rstest]
fn first_and_last_over_maybe() {
    let readings = vec![Maybe::absent(), Maybe::present(3), Maybe::present(8), Maybe::absent()];

    let first = First::combine_all(readings.iter().copied().map(First::from));
    let last = Last::combine_all(readings.into_iter().map(Last::from));

    assert_eq!(first.into_inner(), Maybe::present(3));
    assert_eq!(last.into_inner(), Maybe::present(8));
}

#[rstest]
fn product_fold_map() {
    let value = Maybe::present(6);
    let product: Product<i32> = value.fold_map(Product::new);
    assert_eq!(product.into_inner(), 6);

    let nothing: Maybe<i32> = Maybe::absent();
    assert_eq!(nothing.fold_map(Product::new).into_inner(), 1);
}
