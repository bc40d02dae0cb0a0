use crate::coords::Vec2;
use crate::draw::{Color, DrawCmd, DrawSurface};

/// Axis-aligned rectangle draw payload (rotated about its origin when
/// `rotation` is non-zero).
#[derive(Debug, Clone, PartialEq)]
pub struct RectCmd {
    /// Top-left corner in logical pixels.
    pub origin: Vec2,
    pub size: Vec2,
    /// Degrees, clockwise, about `origin`.
    pub rotation: f32,
    pub fill: Color,
    /// Texture file name to sample, tinted by `fill`. `None` = solid fill.
    pub texture: Option<String>,
}

impl RectCmd {
    #[inline]
    pub fn new(origin: Vec2, size: Vec2, rotation: f32, fill: Color, texture: Option<String>) -> Self {
        Self {
            origin,
            size,
            rotation,
            fill,
            texture,
        }
    }
}

impl DrawSurface {
    /// Records a rectangle draw command.
    #[inline]
    pub fn push_rect(
        &mut self,
        origin: Vec2,
        size: Vec2,
        rotation: f32,
        fill: Color,
        texture: Option<String>,
    ) {
        self.push(DrawCmd::Rect(RectCmd::new(origin, size, rotation, fill, texture)));
    }
}
