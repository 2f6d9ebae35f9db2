use std::fmt::{self, Display, Formatter};
use std::ops::{Index, IndexMut};
use std::slice;

use derive_getters::Dissolve;
use derive_more::{Constructor, From};
use eyre::{eyre, Result};

use biorange_core_rs::seq::{
    fill_from_pipe, ContigOp, ContigOpMut, PipeOp, ResizeOp, SeqOp, SeqOpMut,
};

use super::view::RangeView;

/// Mutable view over a sub-range of sequence storage owned elsewhere.
///
/// Same shape as [`RangeView`], bound through a mutable borrow: element
/// writes go straight through to the referenced storage. The view still owns
/// nothing and cannot change the extent of the range it covers — its
/// [`ResizeOp`] accepts only the current length.
#[derive(Dissolve, Constructor, From, Debug, PartialEq, Eq, Hash)]
pub struct RangeViewMut<'a, T> {
    slots: &'a mut [T],
}

impl<'a, T> RangeViewMut<'a, T> {
    /// View bound to no storage at all.
    pub fn empty() -> Self {
        Self { slots: &mut [] }
    }

    /// Bind to the current full range of a mutable container.
    pub fn of<C>(cont: &'a mut C) -> Self
    where
        C: ContigOpMut<Item = T> + ?Sized,
    {
        Self {
            slots: cont.as_slots_mut(),
        }
    }

    /// Re-point this view at another container's current range. Zero-copy.
    pub fn rebind<C>(&mut self, cont: &'a mut C)
    where
        C: ContigOpMut<Item = T> + ?Sized,
    {
        self.slots = cont.as_slots_mut();
    }

    /// Read-only view over the same range.
    pub fn as_view(&self) -> RangeView<'_, T> {
        RangeView::new(&*self.slots)
    }

    /// Populate the viewed slots from a pull-based pipe.
    ///
    /// The pipe must declare exactly this view's length; see
    /// [`fill_from_pipe`] for the bracketing and ordering contract.
    pub fn fill_from<P>(&mut self, src: P) -> Result<usize>
    where
        P: PipeOp<Item = T>,
    {
        fill_from_pipe(self, src)
    }
}

impl<T> Default for RangeViewMut<'_, T> {
    fn default() -> Self {
        Self::empty()
    }
}

impl<T> SeqOp for RangeViewMut<'_, T> {
    type Item = T;
    type Len = usize;
    type Iter<'i>
        = slice::Iter<'i, T>
    where
        Self: 'i;

    const IS_VIEW: bool = true;

    #[inline(always)]
    fn iter(&self) -> Self::Iter<'_> {
        self.slots.iter()
    }

    #[inline(always)]
    fn len(&self) -> usize {
        self.slots.len()
    }

    fn value(&self, pos: usize) -> Result<&T> {
        SeqOp::value(&*self.slots, pos)
    }

    #[inline(always)]
    unsafe fn value_unchecked(&self, pos: usize) -> &T {
        SeqOp::value_unchecked(&*self.slots, pos)
    }
}

impl<T> SeqOpMut for RangeViewMut<'_, T> {
    type IterMut<'i>
        = slice::IterMut<'i, T>
    where
        Self: 'i;

    #[inline(always)]
    fn iter_mut(&mut self) -> Self::IterMut<'_> {
        self.slots.iter_mut()
    }

    fn value_mut(&mut self, pos: usize) -> Result<&mut T> {
        SeqOpMut::value_mut(&mut *self.slots, pos)
    }

    #[inline(always)]
    unsafe fn value_mut_unchecked(&mut self, pos: usize) -> &mut T {
        SeqOpMut::value_mut_unchecked(&mut *self.slots, pos)
    }
}

// The view cannot grow or shrink storage it does not own: the only accepted
// length is the one it already covers.
impl<T> ResizeOp for RangeViewMut<'_, T> {
    fn resize(&mut self, new_len: usize) -> Result<usize> {
        if new_len == self.slots.len() {
            Ok(new_len)
        } else {
            Err(eyre!(
                "Cannot resize a borrowed range of {} elements to {}: the view does not own its storage",
                self.slots.len(),
                new_len
            ))
        }
    }
}

impl<T> ContigOp for RangeViewMut<'_, T> {
    #[inline(always)]
    fn as_slots(&self) -> &[T] {
        &*self.slots
    }
}

impl<T> ContigOpMut for RangeViewMut<'_, T> {
    #[inline(always)]
    fn as_slots_mut(&mut self) -> &mut [T] {
        &mut *self.slots
    }
}

impl<T> Index<usize> for RangeViewMut<'_, T> {
    type Output = T;

    #[inline(always)]
    fn index(&self, pos: usize) -> &T {
        &self.slots[pos]
    }
}

impl<T> IndexMut<usize> for RangeViewMut<'_, T> {
    #[inline(always)]
    fn index_mut(&mut self, pos: usize) -> &mut T {
        &mut self.slots[pos]
    }
}

impl<T: Display> Display for RangeViewMut<'_, T> {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        Display::fmt(&self.display(), f)
    }
}

impl<T: PartialEq> PartialEq<&[T]> for RangeViewMut<'_, T> {
    fn eq(&self, other: &&[T]) -> bool {
        *self.slots == **other
    }
}

impl<T: PartialEq> PartialEq<RangeViewMut<'_, T>> for &[T] {
    fn eq(&self, other: &RangeViewMut<'_, T>) -> bool {
        **self == *other.slots
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_write_through() {
        let mut cont = vec![10, 20, 30, 40, 50];
        let mut view = RangeViewMut::of(&mut cont);

        assert_eq!(SeqOp::len(&view), 5);
        assert_eq!(view[2], 30);

        view[2] = 99;
        *view.value_mut(0).unwrap() = 11;
        unsafe { *view.value_mut_unchecked(4) = 55 };

        assert_eq!(cont, vec![11, 20, 99, 40, 55]);
    }

    #[test]
    fn test_resize_is_a_validated_noop() {
        let mut cont = vec![1, 2, 3];
        let mut view = RangeViewMut::of(&mut cont);

        assert_eq!(view.resize(3).unwrap(), 3);
        assert_eq!(view.resize(3).unwrap(), 3);
        assert!(view.resize(4).is_err());
        assert!(view.resize(2).is_err());
        assert_eq!(SeqOp::len(&view), 3);
    }

    #[test]
    fn test_fill_from_pipe() {
        use biorange_core_rs::seq::IntoPipe;

        let mut cont = vec![0; 3];
        let mut view = RangeViewMut::of(&mut cont);

        view.fill_from(vec![4, 5, 6].into_pipe()).unwrap();
        assert_eq!(cont, vec![4, 5, 6]);
    }

    #[test]
    fn test_fill_length_mismatch() {
        use biorange_core_rs::seq::IntoPipe;

        let mut cont = vec![0; 3];
        let mut view = RangeViewMut::of(&mut cont);

        assert!(view.fill_from(vec![4, 5].into_pipe()).is_err());
        assert!(view.fill_from(vec![4, 5, 6, 7].into_pipe()).is_err());
        assert_eq!(cont, vec![0, 0, 0]);
    }

    #[test]
    fn test_rebind() {
        let mut first = vec![1, 2, 3];
        let mut second = vec![7, 8];

        let mut view = RangeViewMut::of(&mut first);
        view.rebind(&mut second);
        view[0] = 70;

        assert_eq!(view, &[70, 8][..]);
        assert_eq!(second, vec![70, 8]);
        assert_eq!(first, vec![1, 2, 3]);
    }

    #[test]
    fn test_as_view() {
        let mut cont = vec![1, 2];
        let view = RangeViewMut::of(&mut cont);

        assert_eq!(view.as_view(), &[1, 2][..]);
    }

    #[test]
    fn test_empty() {
        let mut view = RangeViewMut::<i32>::empty();

        assert!(SeqOp::is_empty(&view));
        assert_eq!(view.resize(0).unwrap(), 0);
        assert!(view.value_mut(0).is_err());
    }

    #[test]
    fn test_mutation_via_iter_mut() {
        let mut cont = vec![1, 2, 3];
        let mut view = RangeViewMut::of(&mut cont);

        for slot in view.iter_mut() {
            *slot *= 10;
        }
        assert_eq!(cont, vec![10, 20, 30]);
    }
}
