pub use view::RangeView;
pub use view_mut::RangeViewMut;

mod view;
mod view_mut;
