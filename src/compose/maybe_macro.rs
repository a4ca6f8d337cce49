//! The `maybe!` macro: do-notation for chains of [`Maybe`](crate::optional::Maybe) steps.
//!
//! Each `pattern <= expression;` line binds the payload of a `Maybe` and
//! continues with the rest of the block. The first absent step ends the
//! whole block with `Absent`, and the lines after it are never evaluated.
//!
//! # Syntax
//!
//! ```text
//! maybe! {
//!     pattern <= maybe_expression;   // bind
//!     let pattern = expression;      // plain let
//!     result_expression              // final Maybe
//! }
//! ```
//!
//! # Expansion
//!
//! ```text
//! maybe! { user <= find(id); zip <= user.zip(); cost(zip) }
//! ```
//!
//! becomes
//!
//! ```text
//! find(id).and_then(move |user| user.zip().and_then(move |zip| cost(zip)))
//! ```

/// Do-notation for `Maybe` chains.
///
/// # Examples
///
/// ```rust
/// use maybe::maybe;
/// use maybe::optional::Maybe;
///
/// fn parse(text: &str) -> Maybe<i32> {
///     Maybe::from(text.parse().ok())
/// }
///
/// let total = maybe! {
///     a <= parse("40");
///     b <= parse("2");
///     let sum = a + b;
///     Maybe::present(sum)
/// };
/// assert_eq!(total, Maybe::present(42));
///
/// let broken = maybe! {
///     a <= parse("40");
///     b <= parse("two");
///     Maybe::present(a + b)
/// };
/// assert_eq!(broken, Maybe::absent());
/// ```
#[macro_export]
macro_rules! maybe {
    // Terminal expression
    ($result:expr) => {
        $result
    };

    // Bind with identifier pattern
    ($pattern:ident <= $maybe:expr ; $($rest:tt)+) => {
        $maybe.and_then(move |$pattern| {
            $crate::maybe!($($rest)+)
        })
    };

    // Bind with tuple pattern
    (($($pattern:tt)*) <= $maybe:expr ; $($rest:tt)+) => {
        $maybe.and_then(move |($($pattern)*)| {
            $crate::maybe!($($rest)+)
        })
    };

    // Bind and discard
    (_ <= $maybe:expr ; $($rest:tt)+) => {
        $maybe.and_then(move |_| {
            $crate::maybe!($($rest)+)
        })
    };

    // Plain let with identifier
    (let $pattern:ident = $expr:expr ; $($rest:tt)+) => {
        {
            let $pattern = $expr;
            $crate::maybe!($($rest)+)
        }
    };

    // Plain let with tuple pattern
    (let ($($pattern:tt)*) = $expr:expr ; $($rest:tt)+) => {
        {
            let ($($pattern)*) = $expr;
            $crate::maybe!($($rest)+)
        }
    };
}

#[cfg(test)]
mod tests {
    use crate::optional::Maybe;
    use std::cell::Cell;

    #[test]
    fn binds_present_values() {
        let result = maybe! {
            x <= Maybe::present(5);
            y <= Maybe::present(10);
            Maybe::present(x + y)
        };
        assert_eq!(result, Maybe::present(15));
    }

    #[test]
    fn let_binding_between_steps() {
        let result = maybe! {
            x <= Maybe::present(5);
            let doubled = x * 2;
            Maybe::present(doubled)
        };
        assert_eq!(result, Maybe::present(10));
    }

    #[test]
    fn tuple_pattern() {
        let result = maybe! {
            (left, right) <= Maybe::present((3, 4));
            Maybe::present(left * right)
        };
        assert_eq!(result, Maybe::present(12));
    }

    #[test]
    fn wildcard_pattern_keeps_absence() {
        let result: Maybe<i32> = maybe! {
            _ <= Maybe::<()>::absent();
            Maybe::present(1)
        };
        assert_eq!(result, Maybe::absent());
    }

    #[test]
    fn absent_step_skips_the_rest() {
        let later_steps = Cell::new(0);
        let counter = &later_steps;
        let result: Maybe<i32> = maybe! {
            x <= Maybe::<i32>::absent();
            y <= {
                counter.set(counter.get() + 1);
                Maybe::present(x + 1)
            };
            Maybe::present(y)
        };
        assert_eq!(result, Maybe::absent());
        assert_eq!(later_steps.get(), 0);
    }
}
