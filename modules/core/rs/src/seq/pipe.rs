use derive_getters::Dissolve;
use derive_more::Constructor;
use eyre::{eyre, Result};
use impl_tools::autoimpl;

use super::ops::{ResizeOp, SeqOpMut};

/// Pull-based sequential producer of elements.
///
/// A pipe declares up front how many elements it will yield. Reading is
/// bracketed by [`begin_read`]/[`end_read`] so the pipe can set up and tear
/// down internal state (buffers, an external or lazily computed source), and
/// between the brackets elements are pulled strictly in order, one per
/// [`pull`], in a single pass.
///
/// [`begin_read`]: PipeOp::begin_read
/// [`end_read`]: PipeOp::end_read
/// [`pull`]: PipeOp::pull
#[autoimpl(for<T: trait + ?Sized> &mut T, Box<T>)]
pub trait PipeOp {
    type Item;

    /// Number of elements this pipe will yield.
    fn len(&self) -> usize;

    /// Returns true if the pipe will yield no elements.
    fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Called once before the first pull.
    fn begin_read(&mut self) -> Result<()>;

    /// Produce the next element. Called at most [`len`](PipeOp::len) times
    /// between [`begin_read`](PipeOp::begin_read) and
    /// [`end_read`](PipeOp::end_read).
    fn pull(&mut self) -> Result<Self::Item>;

    /// Called once after the last pull.
    fn end_read(&mut self) -> Result<()>;
}

/// Adapter exposing any exact-size iterator as a [`PipeOp`].
#[derive(Clone, Debug, Default, PartialEq, Eq, Hash, Dissolve, Constructor)]
pub struct IterPipe<I> {
    iter: I,
}

impl<I: ExactSizeIterator> PipeOp for IterPipe<I> {
    type Item = I::Item;

    #[inline(always)]
    fn len(&self) -> usize {
        self.iter.len()
    }

    fn begin_read(&mut self) -> Result<()> {
        Ok(())
    }

    fn pull(&mut self) -> Result<Self::Item> {
        self.iter
            .next()
            .ok_or_else(|| eyre!("Pulled past the end of the pipe"))
    }

    fn end_read(&mut self) -> Result<()> {
        Ok(())
    }
}

/// Types that can be turned into a pull-based pipe.
pub trait IntoPipe {
    type Item;
    type Pipe: PipeOp<Item = Self::Item>;

    fn into_pipe(self) -> Self::Pipe;
}

impl<I> IntoPipe for I
where
    I: IntoIterator,
    I::IntoIter: ExactSizeIterator,
{
    type Item = I::Item;
    type Pipe = IterPipe<I::IntoIter>;

    fn into_pipe(self) -> Self::Pipe {
        IterPipe::new(self.into_iter())
    }
}

/// Populate a pre-sized destination from a pipe.
///
/// The pipe must declare exactly the destination's length: the destination
/// is resized first, and fixed-extent destinations (borrowed ranges, bare
/// slices) turn a mismatch into an error before a single element is pulled.
/// A mismatch never truncates and never pads. On success the pull loop is
/// bracketed by exactly one [`PipeOp::begin_read`] and one
/// [`PipeOp::end_read`], and elements land in the destination slots in pull
/// order. If a pull fails, the error is returned as is and the closing
/// bracket is not sent.
pub fn fill_from_pipe<D, P>(dest: &mut D, mut src: P) -> Result<D::Len>
where
    D: SeqOpMut + ResizeOp + ?Sized,
    P: PipeOp<Item = D::Item>,
{
    let declared: D::Len = num::cast(src.len()).ok_or_else(|| {
        eyre!(
            "Pipe length {} does not fit the destination count type",
            src.len()
        )
    })?;

    let len = dest.resize(declared)?;
    src.begin_read()?;
    for slot in dest.iter_mut() {
        *slot = src.pull()?;
    }
    src.end_read()?;
    Ok(len)
}
