pub mod color;
pub mod layout;

pub use color::{parse_color, with_opacity};
pub use layout::{hex_size, GridLayout, ShapeIter};
