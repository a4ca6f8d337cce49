//! The `kleisli!` macro for composing steps that return `Maybe`.
//!
//! `kleisli!(f, g, h)` is the function `|x| f(x).and_then(g).and_then(h)`.
//! Where `compose!` reads right to left, `kleisli!` reads in the order the
//! steps run.

/// Composes `Maybe`-returning functions from left to right.
///
/// Each step runs only if the one before it produced a value; the first
/// `Absent` is the result of the whole composition.
///
/// # Laws
///
/// - **Left Identity**: `kleisli!(Maybe::present, f) == f`
/// - **Right Identity**: `kleisli!(f, Maybe::present) == f`
/// - **Associativity**: `kleisli!(kleisli!(f, g), h) == kleisli!(f, kleisli!(g, h))`
///
/// # Examples
///
/// ```
/// use maybe::kleisli;
/// use maybe::optional::Maybe;
///
/// fn lookup(id: u32) -> Maybe<&'static str> {
///     if id == 42 { Maybe::present("10115") } else { Maybe::absent() }
/// }
///
/// fn zone(zip: &'static str) -> Maybe<u8> {
///     if zip.starts_with('1') { Maybe::present(1) } else { Maybe::absent() }
/// }
///
/// fn cost(zone: u8) -> Maybe<f64> {
///     if zone == 1 { Maybe::present(7.5) } else { Maybe::absent() }
/// }
///
/// let shipping_cost = kleisli!(lookup, zone, cost);
/// assert_eq!(shipping_cost(42), Maybe::present(7.5));
/// assert_eq!(shipping_cost(999), Maybe::absent());
/// ```
#[macro_export]
macro_rules! kleisli {
    ($step:expr $(,)?) => {
        $step
    };

    ($first:expr, $($rest:expr),+ $(,)?) => {
        $crate::compose::kleisli($first, $crate::kleisli!($($rest),+))
    };
}
