#![cfg(feature = "compose")]
//! Integration tests for `compose!`, `kleisli!`, `maybe!` and the helper functions.

use maybe::compose::{compose_pair, identity, kleisli};
use maybe::optional::{Maybe, absent, present};
use maybe::{compose, maybe};
use proptest::prelude::*;
use rstest::rstest;
use std::cell::Cell;

fn parse_number(text: &str) -> Maybe<i32> {
    Maybe::from(text.parse().ok())
}

fn positive(n: i32) -> Maybe<i32> {
    if n > 0 { present(n) } else { absent() }
}

fn any_maybe_i32() -> impl Strategy<Value = Maybe<i32>> {
    prop::option::of(any::<i32>()).prop_map(Maybe::from)
}

fn below(limit: i32) -> impl Fn(i32) -> Maybe<i32> + Copy {
    move |n| if n < limit { present(n) } else { absent() }
}

fn shifted(offset: i32) -> impl Fn(i32) -> Maybe<i32> + Copy {
    move |n| Maybe::from(n.checked_add(offset))
}

// =============================================================================
// compose!
// =============================================================================

#[rstest]
fn compose_macro_matches_compose_pair() {
    let add_one = |x: i32| x + 1;
    let double = |x: i32| x * 2;
    let square = |x: i32| x * x;
    assert_eq!(compose!(add_one, double, square)(3), compose_pair(add_one, compose_pair(double, square))(3));
}

#[rstest]
fn compose_with_identity() {
    let double = |x: i32| x * 2;
    assert_eq!(compose!(identity, double)(4), double(4));
    assert_eq!(compose!(double, identity)(4), double(4));
}

proptest! {
    /// `map` of a composition equals composing the maps
    #[test]
    fn prop_map_compose(value in any_maybe_i32()) {
        let f = |n: i32| n.wrapping_add(3);
        let g = |n: i32| n.wrapping_mul(5);
        prop_assert_eq!(value.map(compose!(g, f)), value.map(f).map(g));
    }
}

// =============================================================================
// kleisli!
// =============================================================================

#[rstest]
#[case("8", present(8))]
#[case("-8", absent())]
#[case("eight", absent())]
fn kleisli_of_parse_and_check(#[case] input: &str, #[case] expected: Maybe<i32>) {
    let step = kleisli!(parse_number, positive);
    assert_eq!(step(input), expected);
}

#[rstest]
fn kleisli_macro_equals_nested_and_then() {
    let step = kleisli!(parse_number, positive, below(100));
    for input in ["5", "0", "500", "x"] {
        let nested = parse_number(input).and_then(|n| positive(n).and_then(below(100)));
        assert_eq!(step(input), nested);
    }
}

#[rstest]
fn kleisli_stops_at_first_absent() {
    let later_steps = Cell::new(0);
    let counter = &later_steps;
    let counted = |n: i32| {
        counter.set(counter.get() + 1);
        present(n)
    };
    let step = kleisli!(parse_number, positive, counted);

    assert_eq!(step("-1"), absent());
    assert_eq!(step("oops"), absent());
    assert_eq!(later_steps.get(), 0);

    assert_eq!(step("3"), present(3));
    assert_eq!(later_steps.get(), 1);
}

proptest! {
    #[test]
    fn prop_kleisli_left_identity(value in any::<i32>(), limit in any::<i32>()) {
        let f = below(limit);
        prop_assert_eq!(kleisli(Maybe::present, f)(value), f(value));
    }

    #[test]
    fn prop_kleisli_right_identity(value in any::<i32>(), limit in any::<i32>()) {
        let f = below(limit);
        prop_assert_eq!(kleisli(f, Maybe::present)(value), f(value));
    }

    #[test]
    fn prop_kleisli_associativity(
        value in any::<i32>(),
        limit in any::<i32>(),
        first_offset in any::<i32>(),
        second_offset in any::<i32>(),
    ) {
        let f = below(limit);
        let g = shifted(first_offset);
        let h = shifted(second_offset);

        let left = kleisli(kleisli(f, g), h);
        let right = kleisli(f, kleisli(g, h));

        prop_assert_eq!(left(value), right(value));
    }

    /// Binding a value into a composed step equals chaining `and_then`
    #[test]
    fn prop_kleisli_agrees_with_and_then(value in any_maybe_i32(), limit in any::<i32>(), offset in any::<i32>()) {
        let step = kleisli!(below(limit), shifted(offset));
        prop_assert_eq!(value.and_then(&step), value.and_then(below(limit)).and_then(shifted(offset)));
    }
}

// =============================================================================
// maybe!
// =============================================================================

#[rstest]
fn maybe_block_present() {
    let result = maybe! {
        a <= parse_number("4");
        b <= positive(a);
        let squared = b * b;
        Maybe::present(squared)
    };
    assert_eq!(result, present(16));
}

#[rstest]
#[case("0")]
#[case("zero")]
fn maybe_block_absent(#[case] input: &str) {
    let result = maybe! {
        a <= parse_number(input);
        b <= positive(a);
        Maybe::present(b)
    };
    assert_eq!(result, absent());
}

#[rstest]
fn maybe_block_equals_nested_and_then() {
    let block = maybe! {
        a <= parse_number("3");
        b <= parse_number("4");
        Maybe::present(a * b)
    };
    let nested = parse_number("3").and_then(|a| parse_number("4").and_then(move |b| present(a * b)));
    assert_eq!(block, nested);
}

#[rstest]
fn maybe_block_short_circuits() {
    let steps = Cell::new(0);
    let counter = &steps;
    let count = |m: Maybe<i32>| {
        counter.set(counter.get() + 1);
        m
    };
    let result = maybe! {
        a <= count(absent());
        b <= count(present(a + 1));
        Maybe::present(b)
    };
    assert_eq!(result, absent());
    assert_eq!(steps.get(), 1);
}

#[rstest]
fn maybe_block_tuple_bind_and_let_tuple() {
    let result = maybe! {
        (name, age) <= present(("Ada", 36));
        let (first, rest) = name.split_at(1);
        Maybe::present(format!("{first}.{rest} is {age}"))
    };
    assert_eq!(result, present("A.da is 36".to_string()));
}
