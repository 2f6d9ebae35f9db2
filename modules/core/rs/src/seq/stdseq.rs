use std::slice;

use eyre::{eyre, Result};

use super::ops::{ContigOp, ContigOpMut, ResizeOp, SeqOp, SeqOpMut};

impl<T> SeqOp for [T] {
    type Item = T;
    type Len = usize;
    type Iter<'a>
        = slice::Iter<'a, T>
    where
        Self: 'a;

    #[inline(always)]
    fn iter(&self) -> Self::Iter<'_> {
        <[T]>::iter(self)
    }

    #[inline(always)]
    fn len(&self) -> usize {
        <[T]>::len(self)
    }

    fn value(&self, pos: usize) -> Result<&T> {
        self.get(pos)
            .ok_or_else(|| eyre!("Position {} is outside the range [0, {})", pos, self.len()))
    }

    #[inline(always)]
    unsafe fn value_unchecked(&self, pos: usize) -> &T {
        self.get_unchecked(pos)
    }
}

impl<T> SeqOpMut for [T] {
    type IterMut<'a>
        = slice::IterMut<'a, T>
    where
        Self: 'a;

    #[inline(always)]
    fn iter_mut(&mut self) -> Self::IterMut<'_> {
        <[T]>::iter_mut(self)
    }

    fn value_mut(&mut self, pos: usize) -> Result<&mut T> {
        let len = self.len();
        self.get_mut(pos)
            .ok_or_else(|| eyre!("Position {} is outside the range [0, {})", pos, len))
    }

    #[inline(always)]
    unsafe fn value_mut_unchecked(&mut self, pos: usize) -> &mut T {
        self.get_unchecked_mut(pos)
    }
}

// A bare slice has a fixed extent, same as a borrowed range over it.
impl<T> ResizeOp for [T] {
    fn resize(&mut self, new_len: usize) -> Result<usize> {
        if new_len == self.len() {
            Ok(new_len)
        } else {
            Err(eyre!(
                "Cannot resize fixed-extent storage of {} elements to {}",
                self.len(),
                new_len
            ))
        }
    }
}

impl<T> ContigOp for [T] {
    #[inline(always)]
    fn as_slots(&self) -> &[T] {
        self
    }
}

impl<T> ContigOpMut for [T] {
    #[inline(always)]
    fn as_slots_mut(&mut self) -> &mut [T] {
        self
    }
}

impl<T> SeqOp for Vec<T> {
    type Item = T;
    type Len = usize;
    type Iter<'a>
        = slice::Iter<'a, T>
    where
        Self: 'a;

    #[inline(always)]
    fn iter(&self) -> Self::Iter<'_> {
        self.as_slice().iter()
    }

    #[inline(always)]
    fn len(&self) -> usize {
        Vec::len(self)
    }

    fn value(&self, pos: usize) -> Result<&T> {
        SeqOp::value(self.as_slice(), pos)
    }

    #[inline(always)]
    unsafe fn value_unchecked(&self, pos: usize) -> &T {
        SeqOp::value_unchecked(self.as_slice(), pos)
    }
}

impl<T> SeqOpMut for Vec<T> {
    type IterMut<'a>
        = slice::IterMut<'a, T>
    where
        Self: 'a;

    #[inline(always)]
    fn iter_mut(&mut self) -> Self::IterMut<'_> {
        self.as_mut_slice().iter_mut()
    }

    fn value_mut(&mut self, pos: usize) -> Result<&mut T> {
        SeqOpMut::value_mut(self.as_mut_slice(), pos)
    }

    #[inline(always)]
    unsafe fn value_mut_unchecked(&mut self, pos: usize) -> &mut T {
        SeqOpMut::value_mut_unchecked(self.as_mut_slice(), pos)
    }
}

impl<T: Clone + Default> ResizeOp for Vec<T> {
    fn resize(&mut self, new_len: usize) -> Result<usize> {
        Vec::resize(self, new_len, T::default());
        Ok(new_len)
    }
}

impl<T> ContigOp for Vec<T> {
    #[inline(always)]
    fn as_slots(&self) -> &[T] {
        self.as_slice()
    }
}

impl<T> ContigOpMut for Vec<T> {
    #[inline(always)]
    fn as_slots_mut(&mut self) -> &mut [T] {
        self.as_mut_slice()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_slice_access() {
        let seq = [10, 20, 30];
        let seq: &[i32] = &seq;

        assert_eq!(SeqOp::len(seq), 3);
        assert!(!SeqOp::is_empty(seq));
        assert_eq!(seq.value(0).unwrap(), &10);
        assert_eq!(seq.value(2).unwrap(), &30);
        assert!(seq.value(3).is_err());
        assert_eq!(unsafe { seq.value_unchecked(1) }, &20);
    }

    #[test]
    fn test_slice_mutation() {
        let mut seq = [1, 2, 3];
        let seq: &mut [i32] = &mut seq;

        *seq.value_mut(1).unwrap() = 20;
        assert_eq!(*seq, [1, 20, 3]);
        assert!(seq.value_mut(3).is_err());

        unsafe { *seq.value_mut_unchecked(0) = 10 };
        assert_eq!(*seq, [10, 20, 3]);
    }

    #[test]
    fn test_slice_resize_is_validated() {
        let mut seq = [1, 2, 3];
        let seq: &mut [i32] = &mut seq;

        assert_eq!(seq.resize(3).unwrap(), 3);
        assert!(seq.resize(2).is_err());
        assert!(seq.resize(4).is_err());
    }

    #[test]
    fn test_vec_access() {
        let seq = vec![10, 20, 30];

        assert_eq!(SeqOp::len(&seq), 3);
        assert_eq!(seq.value(1).unwrap(), &20);
        assert!(seq.value(3).is_err());
        assert!(!<Vec<i32> as SeqOp>::IS_VIEW);
    }

    #[test]
    fn test_vec_resize_grows_and_shrinks() {
        let mut seq = vec![1, 2, 3];

        assert_eq!(ResizeOp::resize(&mut seq, 5).unwrap(), 5);
        assert_eq!(seq, vec![1, 2, 3, 0, 0]);

        assert_eq!(ResizeOp::resize(&mut seq, 2).unwrap(), 2);
        assert_eq!(seq, vec![1, 2]);
    }

    #[test]
    fn test_empty() {
        let seq: &[i32] = &[];
        assert_eq!(SeqOp::len(seq), 0);
        assert!(SeqOp::is_empty(seq));
        assert!(seq.value(0).is_err());
    }
}
