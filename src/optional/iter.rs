//! Iterators over the payload of a [`Maybe`].
//!
//! A `Maybe` behaves as a collection of zero or one element, so it can take
//! part in `for` loops, `Iterator::flatten`, `extend` and friends.

use std::iter::FusedIterator;

use super::maybe::Maybe;

/// Borrowing iterator returned by [`Maybe::iter`].
#[derive(Clone, Debug)]
pub struct Iter<'a, T> {
    inner: Maybe<&'a T>,
}

impl<'a, T> Iter<'a, T> {
    pub(super) const fn new(inner: Maybe<&'a T>) -> Self {
        Self { inner }
    }
}

impl<'a, T> Iterator for Iter<'a, T> {
    type Item = &'a T;

    #[inline]
    fn next(&mut self) -> Option<Self::Item> {
        std::mem::take(&mut self.inner).into()
    }

    #[inline]
    fn size_hint(&self) -> (usize, Option<usize>) {
        let remaining = usize::from(self.inner.is_present());
        (remaining, Some(remaining))
    }
}

impl<T> DoubleEndedIterator for Iter<'_, T> {
    #[inline]
    fn next_back(&mut self) -> Option<Self::Item> {
        self.next()
    }
}

impl<T> ExactSizeIterator for Iter<'_, T> {}

impl<T> FusedIterator for Iter<'_, T> {}

/// Owning iterator returned by `Maybe::into_iter`.
#[derive(Clone, Debug)]
pub struct IntoIter<T> {
    inner: Maybe<T>,
}

impl<T> Iterator for IntoIter<T> {
    type Item = T;

    #[inline]
    fn next(&mut self) -> Option<T> {
        std::mem::take(&mut self.inner).into()
    }

    #[inline]
    fn size_hint(&self) -> (usize, Option<usize>) {
        let remaining = usize::from(self.inner.is_present());
        (remaining, Some(remaining))
    }
}

impl<T> DoubleEndedIterator for IntoIter<T> {
    #[inline]
    fn next_back(&mut self) -> Option<T> {
        self.next()
    }
}

impl<T> ExactSizeIterator for IntoIter<T> {}

impl<T> FusedIterator for IntoIter<T> {}

impl<T> IntoIterator for Maybe<T> {
    type Item = T;
    type IntoIter = IntoIter<T>;

    /// # Examples
    ///
    /// ```rust
    /// use maybe::optional::Maybe;
    ///
    /// let values: Vec<i32> = vec![Maybe::present(1), Maybe::absent(), Maybe::present(3)]
    ///     .into_iter()
    ///     .flatten()
    ///     .collect();
    /// assert_eq!(values, vec![1, 3]);
    /// ```
    #[inline]
    fn into_iter(self) -> IntoIter<T> {
        IntoIter { inner: self }
    }
}

impl<'a, T> IntoIterator for &'a Maybe<T> {
    type Item = &'a T;
    type IntoIter = Iter<'a, T>;

    #[inline]
    fn into_iter(self) -> Iter<'a, T> {
        self.iter()
    }
}
