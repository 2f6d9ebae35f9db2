pub use range::{RangeView, RangeViewMut};

pub mod range;
