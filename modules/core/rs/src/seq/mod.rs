pub use copy::copy_into;
pub use fmt::SeqDisplay;
pub use ops::{ContigOp, ContigOpMut, ResizeOp, SeqOp, SeqOpMut};
pub use pipe::{fill_from_pipe, IntoPipe, IterPipe, PipeOp};

mod copy;
mod fmt;
mod ops;
mod pipe;
mod stdseq;
