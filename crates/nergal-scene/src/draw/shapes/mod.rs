//! One module per shape: the payload struct plus its `DrawSurface` push
//! helper live together, so adding a shape never touches the others.

pub(crate) mod circle;
pub(crate) mod rect;
pub(crate) mod triangle;

pub use circle::CircleCmd;
pub use rect::RectCmd;
pub use triangle::TriangleCmd;
