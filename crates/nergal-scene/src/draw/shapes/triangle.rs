use crate::coords::Vec2;
use crate::draw::{Color, DrawCmd, DrawSurface};

/// Triangle draw payload: an equilateral triangle inscribed in a circle,
/// apex up at zero rotation.
#[derive(Debug, Clone, PartialEq)]
pub struct TriangleCmd {
    /// Center of the circumscribing circle.
    pub center: Vec2,
    /// Circumradius in logical pixels.
    pub radius: f32,
    /// Degrees, clockwise, about `center`.
    pub rotation: f32,
    pub fill: Color,
    /// Texture file name to sample, tinted by `fill`. `None` = solid fill.
    pub texture: Option<String>,
}

impl TriangleCmd {
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
    /// Records a triangle draw command.
    #[inline]
    pub fn push_triangle(
        &mut self,
        center: Vec2,
        radius: f32,
        rotation: f32,
        fill: Color,
        texture: Option<String>,
    ) {
        self.push(DrawCmd::Triangle(TriangleCmd::new(
            center, radius, rotation, fill, texture,
        )));
    }
}
