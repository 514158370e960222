//! Strided, non-owning views over matrix storage.
//!
//! A view covers `EXTENT` logical elements of a contiguous buffer, where the
//! logical element `i` lives at offset `i * STRIDE` from the start of the
//! view. Row views of a [`Matrix`](crate::Matrix) have a stride of 1 and
//! column views a stride equal to the number of columns; both expose the same
//! iteration protocol, so generic consumers (`sum`, `zip`, `eq`, copying)
//! treat them identically.
//!
//! - [`StridedView`]: shared view, `Copy`, iterates as `&T`
//! - [`StridedViewMut`]: exclusive view, iterates as `&mut T`
//! - [`Iter`] / [`IterMut`]: double-ended, exact-size iterators over a view

use core::fmt;
use core::iter::{FusedIterator, StepBy};
use core::ops::{Index, IndexMut, Mul};
use core::slice;

use num_traits::Zero;

use crate::error::{MatrixError, Result};
use crate::linalg::inner_product;

/// Number of buffer elements spanned by `extent` logical elements at `stride`.
///
/// The span runs from the first to the last addressed element inclusive, so
/// no trailing padding of the final step is required.
#[inline]
pub(crate) const fn span_len(extent: usize, stride: usize) -> usize {
    if extent == 0 {
        0
    } else {
        (extent - 1) * stride + 1
    }
}

/// Shared strided window over `EXTENT` elements spaced `STRIDE` apart.
///
/// The view borrows the buffer it was built from, so it can never outlive
/// the matrix it refers to. It performs no allocation and carries no runtime
/// shape information: extent and stride are part of its type.
///
/// # Type Parameters
/// - `'a`: Lifetime of the borrowed storage
/// - `T`: Element type
/// - `EXTENT`: Number of logical elements
/// - `STRIDE`: Distance in buffer elements between consecutive logical elements
pub struct StridedView<'a, T, const EXTENT: usize, const STRIDE: usize> {
    data: &'a [T],
}

impl<T, const EXTENT: usize, const STRIDE: usize> Clone for StridedView<'_, T, EXTENT, STRIDE> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<T, const EXTENT: usize, const STRIDE: usize> Copy for StridedView<'_, T, EXTENT, STRIDE> {}

impl<'a, T, const EXTENT: usize, const STRIDE: usize> StridedView<'a, T, EXTENT, STRIDE> {
    const SPAN: usize = span_len(EXTENT, STRIDE);

    /// Create a view over the leading elements of `data`.
    ///
    /// Only the first `(EXTENT - 1) * STRIDE + 1` elements are borrowed; any
    /// further elements of `data` are ignored.
    ///
    /// # Errors
    ///
    /// Returns [`MatrixError::LengthMismatch`] if `data` is shorter than the
    /// strided span.
    pub fn new(data: &'a [T]) -> Result<Self> {
        if data.len() < Self::SPAN {
            return Err(MatrixError::length_mismatch(Self::SPAN, data.len()));
        }
        Ok(Self::from_span(&data[..Self::SPAN]))
    }

    /// Wrap a slice whose length is exactly the strided span.
    #[inline]
    pub(crate) fn from_span(data: &'a [T]) -> Self {
        debug_assert_eq!(data.len(), Self::SPAN);
        Self { data }
    }

    /// Number of logical elements in the view.
    #[inline]
    pub const fn len(&self) -> usize {
        EXTENT
    }

    /// Returns `true` if the view has no elements.
    #[inline]
    pub const fn is_empty(&self) -> bool {
        EXTENT == 0
    }

    /// Distance in buffer elements between consecutive logical elements.
    #[inline]
    pub const fn stride(&self) -> usize {
        STRIDE
    }

    /// Returns the logical element `index`, or `None` if it is past the end.
    #[inline]
    pub fn get(&self, index: usize) -> Option<&'a T> {
        if index < EXTENT {
            Some(&self.data[index * STRIDE])
        } else {
            None
        }
    }

    /// First logical element, if any.
    #[inline]
    pub fn first(&self) -> Option<&'a T> {
        self.get(0)
    }

    /// Last logical element, if any.
    #[inline]
    pub fn last(&self) -> Option<&'a T> {
        EXTENT.checked_sub(1).and_then(|index| self.get(index))
    }

    /// Iterator over the logical elements, front to back.
    #[inline]
    pub fn iter(&self) -> Iter<'a, T, STRIDE> {
        Iter::new(self.data, EXTENT)
    }

    /// Copy the logical elements into an array.
    pub fn to_array(&self) -> [T; EXTENT]
    where
        T: Copy,
    {
        core::array::from_fn(|i| self.data[i * STRIDE])
    }

    /// Inner product with another view of the same extent.
    ///
    /// The strides of the two views are independent, so a row can be paired
    /// with a column directly.
    pub fn dot<U, O, const OTHER_STRIDE: usize>(
        &self,
        other: &StridedView<'_, U, EXTENT, OTHER_STRIDE>,
    ) -> O
    where
        T: Mul<U, Output = O> + Copy,
        U: Copy,
        O: Zero,
    {
        inner_product(self.iter(), other.iter())
    }
}

impl<T, const EXTENT: usize, const STRIDE: usize> Index<usize>
    for StridedView<'_, T, EXTENT, STRIDE>
{
    type Output = T;

    /// Out-of-range indices panic through the slice bounds check.
    #[inline]
    fn index(&self, index: usize) -> &T {
        &self.data[index * STRIDE]
    }
}

impl<'a, T, const EXTENT: usize, const STRIDE: usize> IntoIterator
    for StridedView<'a, T, EXTENT, STRIDE>
{
    type Item = &'a T;
    type IntoIter = Iter<'a, T, STRIDE>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

impl<'a, T, const EXTENT: usize, const STRIDE: usize> IntoIterator
    for &StridedView<'a, T, EXTENT, STRIDE>
{
    type Item = &'a T;
    type IntoIter = Iter<'a, T, STRIDE>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

impl<T: fmt::Debug, const EXTENT: usize, const STRIDE: usize> fmt::Debug
    for StridedView<'_, T, EXTENT, STRIDE>
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_list().entries(self.iter()).finish()
    }
}

impl<T, U, const EXTENT: usize, const STRIDE: usize, const OTHER_STRIDE: usize>
    PartialEq<StridedView<'_, U, EXTENT, OTHER_STRIDE>> for StridedView<'_, T, EXTENT, STRIDE>
where
    T: PartialEq<U>,
{
    fn eq(&self, other: &StridedView<'_, U, EXTENT, OTHER_STRIDE>) -> bool {
        self.iter().zip(other.iter()).all(|(a, b)| a == b)
    }
}

impl<T, U, const EXTENT: usize, const STRIDE: usize> PartialEq<[U; EXTENT]>
    for StridedView<'_, T, EXTENT, STRIDE>
where
    T: PartialEq<U>,
{
    fn eq(&self, other: &[U; EXTENT]) -> bool {
        self.iter().zip(other).all(|(a, b)| a == b)
    }
}

/// Exclusive strided window over `EXTENT` elements spaced `STRIDE` apart.
///
/// Same layout as [`StridedView`], but holds a mutable borrow so elements can
/// be written through it. Only one mutable view of a matrix can exist at a
/// time.
pub struct StridedViewMut<'a, T, const EXTENT: usize, const STRIDE: usize> {
    data: &'a mut [T],
}

impl<'a, T, const EXTENT: usize, const STRIDE: usize> StridedViewMut<'a, T, EXTENT, STRIDE> {
    const SPAN: usize = span_len(EXTENT, STRIDE);

    /// Create a mutable view over the leading elements of `data`.
    ///
    /// A zero `STRIDE` is rejected at compile time, since it would alias one
    /// element several times.
    ///
    /// # Errors
    ///
    /// Returns [`MatrixError::LengthMismatch`] if `data` is shorter than the
    /// strided span.
    pub fn new(data: &'a mut [T]) -> Result<Self> {
        const { assert!(STRIDE > 0, "mutable view stride must be non-zero") };
        let actual = data.len();
        match data.get_mut(..Self::SPAN) {
            Some(span) => Ok(Self::from_span(span)),
            None => Err(MatrixError::length_mismatch(Self::SPAN, actual)),
        }
    }

    #[inline]
    pub(crate) fn from_span(data: &'a mut [T]) -> Self {
        debug_assert_eq!(data.len(), Self::SPAN);
        debug_assert!(STRIDE > 0 || EXTENT <= 1);
        Self { data }
    }

    /// Number of logical elements in the view.
    #[inline]
    pub const fn len(&self) -> usize {
        EXTENT
    }

    /// Returns `true` if the view has no elements.
    #[inline]
    pub const fn is_empty(&self) -> bool {
        EXTENT == 0
    }

    /// Distance in buffer elements between consecutive logical elements.
    #[inline]
    pub const fn stride(&self) -> usize {
        STRIDE
    }

    /// Reborrow as a shared view.
    #[inline]
    pub fn as_view(&self) -> StridedView<'_, T, EXTENT, STRIDE> {
        StridedView::from_span(&*self.data)
    }

    /// Returns the logical element `index`, or `None` if it is past the end.
    #[inline]
    pub fn get(&self, index: usize) -> Option<&T> {
        if index < EXTENT {
            Some(&self.data[index * STRIDE])
        } else {
            None
        }
    }

    /// Mutable access to the logical element `index`.
    #[inline]
    pub fn get_mut(&mut self, index: usize) -> Option<&mut T> {
        if index < EXTENT {
            Some(&mut self.data[index * STRIDE])
        } else {
            None
        }
    }

    /// Shared iterator over the logical elements.
    #[inline]
    pub fn iter(&self) -> Iter<'_, T, STRIDE> {
        Iter::new(&*self.data, EXTENT)
    }

    /// Mutable iterator over the logical elements.
    #[inline]
    pub fn iter_mut(&mut self) -> IterMut<'_, T> {
        IterMut::new(&mut *self.data, STRIDE)
    }

    /// Assign `value` to every logical element.
    pub fn fill(&mut self, value: T)
    where
        T: Clone,
    {
        for slot in self.iter_mut() {
            slot.clone_from(&value);
        }
    }

    /// Copy element-wise from a shared view of the same extent.
    ///
    /// The source stride may differ, which is how a row is written into a
    /// column.
    pub fn copy_from_view<const OTHER_STRIDE: usize>(
        &mut self,
        src: &StridedView<'_, T, EXTENT, OTHER_STRIDE>,
    ) where
        T: Clone,
    {
        for (dst, value) in self.iter_mut().zip(src.iter()) {
            dst.clone_from(value);
        }
    }

    /// Copy the logical elements into an array.
    pub fn to_array(&self) -> [T; EXTENT]
    where
        T: Copy,
    {
        self.as_view().to_array()
    }
}

impl<T, const EXTENT: usize, const STRIDE: usize> Index<usize>
    for StridedViewMut<'_, T, EXTENT, STRIDE>
{
    type Output = T;

    #[inline]
    fn index(&self, index: usize) -> &T {
        &self.data[index * STRIDE]
    }
}

impl<T, const EXTENT: usize, const STRIDE: usize> IndexMut<usize>
    for StridedViewMut<'_, T, EXTENT, STRIDE>
{
    #[inline]
    fn index_mut(&mut self, index: usize) -> &mut T {
        &mut self.data[index * STRIDE]
    }
}

impl<'a, T, const EXTENT: usize, const STRIDE: usize> IntoIterator
    for StridedViewMut<'a, T, EXTENT, STRIDE>
{
    type Item = &'a mut T;
    type IntoIter = IterMut<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        IterMut::new(self.data, STRIDE)
    }
}

impl<'b, T, const EXTENT: usize, const STRIDE: usize> IntoIterator
    for &'b mut StridedViewMut<'_, T, EXTENT, STRIDE>
{
    type Item = &'b mut T;
    type IntoIter = IterMut<'b, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter_mut()
    }
}

impl<'b, T, const EXTENT: usize, const STRIDE: usize> IntoIterator
    for &'b StridedViewMut<'_, T, EXTENT, STRIDE>
{
    type Item = &'b T;
    type IntoIter = Iter<'b, T, STRIDE>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

impl<T: fmt::Debug, const EXTENT: usize, const STRIDE: usize> fmt::Debug
    for StridedViewMut<'_, T, EXTENT, STRIDE>
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_list().entries(self.iter()).finish()
    }
}

impl<T, U, const EXTENT: usize, const STRIDE: usize> PartialEq<[U; EXTENT]>
    for StridedViewMut<'_, T, EXTENT, STRIDE>
where
    T: PartialEq<U>,
{
    fn eq(&self, other: &[U; EXTENT]) -> bool {
        self.as_view() == *other
    }
}

/// Random-access iterator over a [`StridedView`].
///
/// Positions are kept in logical units; the stride is applied only when an
/// element is read. `nth`, `nth_back` and `len` are O(1).
pub struct Iter<'a, T, const STRIDE: usize> {
    data: &'a [T],
    front: usize,
    back: usize,
}

impl<'a, T, const STRIDE: usize> Iter<'a, T, STRIDE> {
    #[inline]
    fn new(data: &'a [T], extent: usize) -> Self {
        Self {
            data,
            front: 0,
            back: extent,
        }
    }
}

impl<T, const STRIDE: usize> Clone for Iter<'_, T, STRIDE> {
    fn clone(&self) -> Self {
        Self {
            data: self.data,
            front: self.front,
            back: self.back,
        }
    }
}

impl<T: fmt::Debug, const STRIDE: usize> fmt::Debug for Iter<'_, T, STRIDE> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_list().entries(self.clone()).finish()
    }
}

impl<'a, T, const STRIDE: usize> Iterator for Iter<'a, T, STRIDE> {
    type Item = &'a T;

    #[inline]
    fn next(&mut self) -> Option<&'a T> {
        if self.front == self.back {
            return None;
        }
        let item = &self.data[self.front * STRIDE];
        self.front += 1;
        Some(item)
    }

    #[inline]
    fn size_hint(&self) -> (usize, Option<usize>) {
        let remaining = self.back - self.front;
        (remaining, Some(remaining))
    }

    #[inline]
    fn nth(&mut self, n: usize) -> Option<&'a T> {
        self.front = self.front.saturating_add(n).min(self.back);
        self.next()
    }

    #[inline]
    fn count(self) -> usize {
        self.len()
    }

    #[inline]
    fn last(mut self) -> Option<&'a T> {
        self.next_back()
    }
}

impl<'a, T, const STRIDE: usize> DoubleEndedIterator for Iter<'a, T, STRIDE> {
    #[inline]
    fn next_back(&mut self) -> Option<&'a T> {
        if self.front == self.back {
            return None;
        }
        self.back -= 1;
        Some(&self.data[self.back * STRIDE])
    }

    #[inline]
    fn nth_back(&mut self, n: usize) -> Option<&'a T> {
        self.back = self.back.saturating_sub(n).max(self.front);
        self.next_back()
    }
}

impl<T, const STRIDE: usize> ExactSizeIterator for Iter<'_, T, STRIDE> {}

impl<T, const STRIDE: usize> FusedIterator for Iter<'_, T, STRIDE> {}

/// Mutable iterator over a [`StridedViewMut`].
pub struct IterMut<'a, T> {
    inner: StepBy<slice::IterMut<'a, T>>,
}

impl<'a, T> IterMut<'a, T> {
    #[inline]
    fn new(data: &'a mut [T], stride: usize) -> Self {
        // The span ends on an addressed element, so stepping yields exactly
        // the logical elements.
        Self {
            inner: data.iter_mut().step_by(stride.max(1)),
        }
    }
}

impl<T> fmt::Debug for IterMut<'_, T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("IterMut")
            .field("remaining", &self.inner.len())
            .finish()
    }
}

impl<'a, T> Iterator for IterMut<'a, T> {
    type Item = &'a mut T;

    #[inline]
    fn next(&mut self) -> Option<&'a mut T> {
        self.inner.next()
    }

    #[inline]
    fn size_hint(&self) -> (usize, Option<usize>) {
        self.inner.size_hint()
    }

    #[inline]
    fn nth(&mut self, n: usize) -> Option<&'a mut T> {
        self.inner.nth(n)
    }
}

impl<'a, T> DoubleEndedIterator for IterMut<'a, T> {
    #[inline]
    fn next_back(&mut self) -> Option<&'a mut T> {
        self.inner.next_back()
    }

    #[inline]
    fn nth_back(&mut self, n: usize) -> Option<&'a mut T> {
        self.inner.nth_back(n)
    }
}

impl<T> ExactSizeIterator for IterMut<'_, T> {}

impl<T> FusedIterator for IterMut<'_, T> {}

#[cfg(test)]
mod tests {
    use super::*;

    const DATA: [i32; 6] = [1, 2, 3, 4, 5, 6];

    #[test]
    fn test_span_len() {
        assert_eq!(span_len(0, 3), 0);
        assert_eq!(span_len(1, 3), 1);
        assert_eq!(span_len(2, 3), 4);
        assert_eq!(span_len(3, 1), 3);
    }

    #[test]
    fn test_contiguous_view() {
        let view = StridedView::<i32, 3, 1>::new(&DATA).unwrap();
        assert_eq!(view.len(), 3);
        assert_eq!(view.stride(), 1);
        assert_eq!(view, [1, 2, 3]);
        assert_eq!(view.first(), Some(&1));
        assert_eq!(view.last(), Some(&3));
        assert_eq!(view.get(3), None);
    }

    #[test]
    fn test_strided_view_reads_every_nth_element() {
        let view = StridedView::<i32, 3, 2>::new(&DATA).unwrap();
        assert_eq!(view.to_array(), [1, 3, 5]);
        assert_eq!(view[2], 5);
        assert_eq!(view.iter().sum::<i32>(), 9);
    }

    #[test]
    fn test_view_too_short() {
        let err = StridedView::<i32, 4, 2>::new(&DATA).unwrap_err();
        assert_eq!(err, MatrixError::length_mismatch(7, 6));
    }

    #[test]
    fn test_empty_view() {
        let view = StridedView::<i32, 0, 5>::new(&[]).unwrap();
        assert!(view.is_empty());
        assert_eq!(view.iter().next(), None);
        assert_eq!(view.last(), None);
    }

    #[test]
    fn test_iterator_random_access() {
        let view = StridedView::<i32, 3, 2>::new(&DATA).unwrap();

        let mut it = view.iter();
        assert_eq!(it.len(), 3);
        assert_eq!(it.nth(1), Some(&3));
        assert_eq!(it.len(), 1);
        assert_eq!(it.next(), Some(&5));
        assert_eq!(it.next(), None);

        let mut it = view.iter();
        assert_eq!(it.next_back(), Some(&5));
        assert_eq!(it.nth_back(0), Some(&3));
        assert_eq!(it.next(), Some(&1));
        assert_eq!(it.next_back(), None);

        assert_eq!(view.iter().nth(10), None);
        assert_eq!(view.iter().rev().copied().collect::<Vec<_>>(), vec![5, 3, 1]);
        assert_eq!(view.iter().last(), Some(&5));
        assert_eq!(view.iter().count(), 3);
    }

    #[test]
    fn test_views_compare_across_strides() {
        let row_major = [1, 2, 3, 4];
        let strided = [1, 0, 2, 0, 3, 0, 4];
        let a = StridedView::<i32, 4, 1>::new(&row_major).unwrap();
        let b = StridedView::<i32, 4, 2>::new(&strided).unwrap();
        assert_eq!(a, b);
        assert_eq!(a.dot(&b), 30);
    }

    #[test]
    fn test_mutable_view_writes_through() {
        let mut data = [0; 6];
        {
            let mut column = StridedViewMut::<i32, 2, 3>::new(&mut data).unwrap();
            column[0] = 7;
            *column.get_mut(1).unwrap() = 8;
            assert_eq!(column.get_mut(2), None);
            assert_eq!(column, [7, 8]);
        }
        assert_eq!(data, [7, 0, 0, 8, 0, 0]);
    }

    #[test]
    fn test_mutable_view_fill_and_copy() {
        let mut data = [0; 6];
        let source = [4, 5, 6];
        {
            let mut view = StridedViewMut::<i32, 3, 2>::new(&mut data).unwrap();
            view.fill(9);
            assert_eq!(view.to_array(), [9, 9, 9]);

            let src = StridedView::<i32, 3, 1>::new(&source).unwrap();
            view.copy_from_view(&src);
        }
        assert_eq!(data[..5], [4, 0, 5, 0, 6]);
    }

    #[test]
    fn test_iter_mut_both_ends() {
        let mut data = [1, 2, 3, 4, 5];
        let view = StridedViewMut::<i32, 3, 2>::new(&mut data).unwrap();
        let mut it = view.into_iter();
        assert_eq!(it.len(), 3);
        *it.next_back().unwrap() *= 10;
        *it.next().unwrap() *= 100;
        assert_eq!(it.len(), 1);
        drop(it);
        assert_eq!(data, [100, 2, 3, 4, 50]);
    }

    #[test]
    fn test_debug_lists_logical_elements() {
        let view = StridedView::<i32, 3, 2>::new(&DATA).unwrap();
        assert_eq!(format!("{view:?}"), "[1, 3, 5]");
    }
}
