use crate::draw::shapes::circle::CircleCmd;
use crate::draw::shapes::rect::RectCmd;
use crate::draw::shapes::triangle::TriangleCmd;

/// Renderer-agnostic draw command.
///
/// Extending the stream:
/// - add a new shape module under `draw::shapes::*`
/// - add a new variant here
/// - implement the push helper inside that shape module
#[derive(Debug, Clone, PartialEq)]
pub enum DrawCmd {
    Circle(CircleCmd),
    Rect(RectCmd),
    Triangle(TriangleCmd),
}
