//! Collecting and traversing sequences of [`Maybe`] values.
//!
//! A sequence of `Maybe<A>` can be turned into a `Maybe` of a collection:
//! present when every element is present, absent as soon as one is not.
//! Iteration stops at the first absent element.

use super::maybe::Maybe;

impl<A, V> FromIterator<Maybe<A>> for Maybe<V>
where
    V: FromIterator<A>,
{
    /// # Examples
    ///
    /// ```rust
    /// use maybe::optional::Maybe;
    ///
    /// let all: Maybe<Vec<i32>> = vec![Maybe::present(1), Maybe::present(2)].into_iter().collect();
    /// assert_eq!(all, Maybe::present(vec![1, 2]));
    ///
    /// let some: Maybe<Vec<i32>> = vec![Maybe::present(1), Maybe::absent()].into_iter().collect();
    /// assert_eq!(some, Maybe::absent());
    /// ```
    fn from_iter<I>(iterable: I) -> Self
    where
        I: IntoIterator<Item = Maybe<A>>,
    {
        let mut saw_absent = false;
        let collected: V = iterable
            .into_iter()
            .map_while(|element| match element {
                Maybe::Present(value) => Some(value),
                Maybe::Absent => {
                    saw_absent = true;
                    None
                }
            })
            .collect();

        if saw_absent {
            Self::Absent
        } else {
            Self::Present(collected)
        }
    }
}

/// Applies `function` to each item and collects the results, or returns
/// `Absent` if any application does.
///
/// `function` is not called for items after the first absent result.
///
/// # Examples
///
/// ```rust
/// use maybe::optional::{Maybe, traverse};
///
/// let parse = |text: &str| Maybe::from(text.parse::<u8>().ok());
///
/// let parsed: Maybe<Vec<u8>> = traverse(["1", "2", "3"], parse);
/// assert_eq!(parsed, Maybe::present(vec![1, 2, 3]));
///
/// let failed: Maybe<Vec<u8>> = traverse(["1", "x", "3"], parse);
/// assert_eq!(failed, Maybe::absent());
/// ```
pub fn traverse<I, A, B, V, F>(items: I, function: F) -> Maybe<V>
where
    I: IntoIterator<Item = A>,
    F: FnMut(A) -> Maybe<B>,
    V: FromIterator<B>,
{
    items.into_iter().map(function).collect()
}

/// Turns a sequence of `Maybe` values into a `Maybe` of a collection.
///
/// # Examples
///
/// ```rust
/// use maybe::optional::{Maybe, sequence};
///
/// let values: Maybe<Vec<char>> = sequence(vec![Maybe::present('a'), Maybe::present('b')]);
/// assert_eq!(values, Maybe::present(vec!['a', 'b']));
/// ```
pub fn sequence<I, A, V>(items: I) -> Maybe<V>
where
    I: IntoIterator<Item = Maybe<A>>,
    V: FromIterator<A>,
{
    items.into_iter().collect()
}
