use std::fmt::Display;

use eyre::Result;
use num::Zero;

use crate::num::PrimUInt;

use super::fmt::SeqDisplay;

/// Read capabilities shared by owning sequences and borrowed ranges over them.
///
/// The element type, the count type and the borrowing iterator are associated
/// items resolved per concrete type, so generic algorithms written against
/// this trait monomorphize down to direct element access with no runtime
/// dispatch anywhere on the path.
pub trait SeqOp {
    /// The type of individual elements.
    type Item;

    /// The type used to count and address elements.
    type Len: PrimUInt;

    /// Iterator over borrowed elements, front to back.
    type Iter<'a>: Iterator<Item = &'a Self::Item>
    where
        Self: 'a;

    /// Set for sequences that borrow their storage instead of owning it.
    /// Generic code checks this to decide whether holding on to the sequence
    /// is safe long-term or the elements must be copied out first.
    const IS_VIEW: bool = false;

    /// Iterate the elements without consuming them.
    fn iter(&self) -> Self::Iter<'_>;

    /// Number of elements.
    fn len(&self) -> Self::Len;

    /// Returns true if there are no elements.
    fn is_empty(&self) -> bool {
        self.len().is_zero()
    }

    /// Borrow the element at the given position.
    /// Fails if the position is outside [0, len).
    fn value(&self, pos: Self::Len) -> Result<&Self::Item>;

    /// Borrow the element at the given position without bounds checks.
    ///
    /// # Safety
    ///
    /// This function is unsafe because the position must be within [0, len).
    unsafe fn value_unchecked(&self, pos: Self::Len) -> &Self::Item;

    /// Format the sequence element by element, exactly as the referenced
    /// elements would be formatted on their own.
    fn display(&self) -> SeqDisplay<'_, Self>
    where
        Self: Sized,
        Self::Item: Display,
    {
        SeqDisplay::new(self)
    }
}

/// Write capabilities layered on top of [`SeqOp`].
pub trait SeqOpMut: SeqOp {
    /// Iterator over mutably borrowed elements, front to back.
    type IterMut<'a>: Iterator<Item = &'a mut Self::Item>
    where
        Self: 'a;

    /// Iterate the elements, allowing each to be replaced in place.
    fn iter_mut(&mut self) -> Self::IterMut<'_>;

    /// Mutably borrow the element at the given position.
    /// Fails if the position is outside [0, len).
    fn value_mut(&mut self, pos: Self::Len) -> Result<&mut Self::Item>;

    /// Mutably borrow the element at the given position without bounds checks.
    ///
    /// # Safety
    ///
    /// This function is unsafe because the position must be within [0, len).
    unsafe fn value_mut_unchecked(&mut self, pos: Self::Len) -> &mut Self::Item;
}

/// Destinations whose length can be set, or at least validated, before
/// elements are written into them.
///
/// Growable containers actually change their length. Fixed-extent storage
/// (borrowed ranges, bare slices) accepts only its current length and reports
/// any other request as an error: generic algorithms resize their destination
/// defensively before writing, and a destination that cannot honor the
/// request must fail it instead of letting the write run past the end.
pub trait ResizeOp: SeqOp {
    /// Set the length to `new_len`, returning the resulting length.
    fn resize(&mut self, new_len: Self::Len) -> Result<Self::Len>;
}

/// Sequences backed by a single contiguous run of slots.
pub trait ContigOp: SeqOp {
    /// Borrow the underlying slots.
    fn as_slots(&self) -> &[Self::Item];
}

/// Mutable access to the contiguous slots.
pub trait ContigOpMut: ContigOp + SeqOpMut {
    fn as_slots_mut(&mut self) -> &mut [Self::Item];
}
