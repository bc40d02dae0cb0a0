use crate::coords::Vec2;
use crate::draw::{Color, DrawCmd, DrawSurface};

/// Circle draw payload.
#[derive(Debug, Clone, PartialEq)]
pub struct CircleCmd {
    pub center: Vec2,
    pub radius: f32,
    /// Degrees, clockwise. Only visible when a texture is mapped.
    pub rotation: f32,
    pub fill: Color,
    /// Texture file name to sample, tinted by `fill`. `None` = solid fill.
    pub texture: Option<String>,
}

impl CircleCmd {
    #[inline]
    pub fn new(
        center: Vec2,
        radius: f32,
        rotation: f32,
        fill: Color,
        texture: Option<String>,
    ) -> Self {
        Self {
            center,
            radius,
            rotation,
            fill,
            texture,
        }
    }
}

impl DrawSurface {
    /// Records a circle draw command.
    #[inline]
    pub fn push_circle(
        &mut self,
        center: Vec2,
        radius: f32,
        rotation: f32,
        fill: Color,
        texture: Option<String>,
    ) {
        self.push(DrawCmd::Circle(CircleCmd::new(
            center, radius, rotation, fill, texture,
        )));
    }
}
