use std::cell::{Cell, RefCell};

use nergal_memory::SharedHandle;

use super::{Component, ComponentKind, Texture};
use crate::coords::Vec2;
use crate::draw::{Color, DrawSurface};

/// Geometry kinds a [`Shape`] can take.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum ShapeKind {
    /// Draws nothing.
    Empty,
    Circle,
    Rectangle,
    Triangle,
}

/// The drawable of an actor.
///
/// Holds the geometry kind plus the position/rotation/scale the actor copied
/// over from its transform, and optionally a shared [`Texture`] to map over
/// the fill. Starts [`ShapeKind::Empty`]; [`create_shape`](Self::create_shape)
/// picks the geometry.
#[derive(Debug)]
pub struct Shape {
    kind: Cell<ShapeKind>,
    position: Cell<Vec2>,
    /// Degrees, clockwise.
    rotation: Cell<f32>,
    scale: Cell<Vec2>,
    fill: Cell<Color>,
    /// Circumradius for circles and triangles.
    radius: Cell<f32>,
    /// Edge lengths for rectangles.
    size: Cell<Vec2>,
    /// Shared with the resource registry; null when untextured.
    texture: RefCell<SharedHandle<Texture>>,
}

impl Shape {
    pub fn new() -> Self {
        Self {
            kind: Cell::new(ShapeKind::Empty),
            position: Cell::new(Vec2::zero()),
            rotation: Cell::new(0.0),
            scale: Cell::new(Vec2::one()),
            fill: Cell::new(Color::WHITE),
            radius: Cell::new(0.0),
            size: Cell::new(Vec2::zero()),
            texture: RefCell::new(SharedHandle::null()),
        }
    }

    /// Switches to `kind` and resets the geometry to that kind's defaults:
    /// a 10 px circle, a 100×50 rectangle, or a triangle of circumradius 50,
    /// each with a white fill.
    pub fn create_shape(&self, kind: ShapeKind) {
        self.kind.set(kind);
        self.fill.set(Color::WHITE);
        match kind {
            ShapeKind::Empty => {}
            ShapeKind::Circle => self.radius.set(10.0),
            ShapeKind::Rectangle => self.size.set(Vec2::new(100.0, 50.0)),
            ShapeKind::Triangle => self.radius.set(50.0),
        }
    }

    #[inline]
    pub fn shape_kind(&self) -> ShapeKind {
        self.kind.get()
    }

    #[inline]
    pub fn position(&self) -> Vec2 {
        self.position.get()
    }

    #[inline]
    pub fn set_position(&self, position: Vec2) {
        self.position.set(position);
    }

    #[inline]
    pub fn rotation(&self) -> f32 {
        self.rotation.get()
    }

    #[inline]
    pub fn set_rotation(&self, degrees: f32) {
        self.rotation.set(degrees);
    }

    #[inline]
    pub fn scale(&self) -> Vec2 {
        self.scale.get()
    }

    #[inline]
    pub fn set_scale(&self, scale: Vec2) {
        self.scale.set(scale);
    }

    #[inline]
    pub fn fill(&self) -> Color {
        self.fill.get()
    }

    #[inline]
    pub fn set_fill(&self, fill: Color) {
        self.fill.set(fill);
    }

    #[inline]
    pub fn radius(&self) -> f32 {
        self.radius.get()
    }

    #[inline]
    pub fn set_radius(&self, radius: f32) {
        self.radius.set(radius);
    }

    #[inline]
    pub fn size(&self) -> Vec2 {
        self.size.get()
    }

    #[inline]
    pub fn set_size(&self, size: Vec2) {
        self.size.set(size);
    }

    /// Binds a texture to map over the fill. The handle is shared: the
    /// registry (or any other holder) releasing its copy keeps the asset
    /// alive here.
    pub fn set_texture(&self, texture: SharedHandle<Texture>) {
        *self.texture.borrow_mut() = texture;
    }

    /// The bound texture, shared. Null handle when untextured.
    pub fn texture(&self) -> SharedHandle<Texture> {
        self.texture.borrow().clone()
    }

    fn texture_name(&self) -> Option<String> {
        self.texture.borrow().get().map(Texture::file_name)
    }
}

impl Component for Shape {
    fn kind(&self) -> ComponentKind {
        ComponentKind::Shape
    }

    /// Scale is baked into the emitted geometry; radius-based shapes use the
    /// x component.
    fn render(&self, surface: &mut DrawSurface) {
        let scale = self.scale.get();
        let fill = self.fill.get();
        let texture = self.texture_name();
        match self.kind.get() {
            ShapeKind::Empty => {}
            ShapeKind::Circle => surface.push_circle(
                self.position.get(),
                self.radius.get() * scale.x,
                self.rotation.get(),
                fill,
                texture,
            ),
            ShapeKind::Rectangle => {
                let size = self.size.get();
                surface.push_rect(
                    self.position.get(),
                    Vec2::new(size.x * scale.x, size.y * scale.y),
                    self.rotation.get(),
                    fill,
                    texture,
                );
            }
            ShapeKind::Triangle => surface.push_triangle(
                self.position.get(),
                self.radius.get() * scale.x,
                self.rotation.get(),
                fill,
                texture,
            ),
        }
    }
}

impl Default for Shape {
    fn default() -> Self {
        Self::new()
    }
}
