//! The `compose!` macro for function composition.
//!
//! Composed functions are what the functor composition law talks about:
//! `m.map(compose!(g, f)) == m.map(f).map(g)`.

/// Composes functions from right to left.
///
/// `compose!(f, g, h)(x)` is equivalent to `f(g(h(x)))`.
///
/// # Laws
///
/// - **Associativity**: `compose!(f, compose!(g, h)) == compose!(compose!(f, g), h)`
/// - **Left Identity**: `compose!(identity, f) == f`
/// - **Right Identity**: `compose!(f, identity) == f`
///
/// # Examples
///
/// ```
/// use maybe::compose;
/// use maybe::optional::Maybe;
///
/// fn add_one(x: i32) -> i32 { x + 1 }
/// fn double(x: i32) -> i32 { x * 2 }
///
/// let composed = compose!(add_one, double);
/// assert_eq!(composed(5), 11);
///
/// // Mapping a composition equals composing maps
/// let value = Maybe::present(5);
/// assert_eq!(value.map(compose!(add_one, double)), value.map(double).map(add_one));
/// ```
///
/// Steps that return `Maybe` compose with [`kleisli!`](crate::kleisli!)
/// instead, which threads the value through `and_then`.
#[macro_export]
macro_rules! compose {
    ($function:expr $(,)?) => {
        $function
    };

    ($outer:expr, $($inner:expr),+ $(,)?) => {
        $crate::compose::compose_pair($outer, $crate::compose!($($inner),+))
    };
}
