use std::cell::Cell;

use super::{Component, ComponentKind};
use crate::coords::Vec2;

/// Position, rotation, and scale of an actor.
///
/// The transform is the authority; the actor copies these values onto its
/// drawable once per update, so steering code only ever touches the
/// transform.
#[derive(Debug)]
pub struct Transform {
    position: Cell<Vec2>,
    /// Degrees, clockwise.
    rotation: Cell<f32>,
    scale: Cell<Vec2>,
}

impl Transform {
    /// Identity transform: origin, no rotation, scale one.
    pub fn new() -> Self {
        Self {
            position: Cell::new(Vec2::zero()),
            rotation: Cell::new(0.0),
            scale: Cell::new(Vec2::one()),
        }
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

    /// Sets all three values in one call.
    pub fn set_transform(&self, position: Vec2, rotation: f32, scale: Vec2) {
        self.position.set(position);
        self.rotation.set(rotation);
        self.scale.set(scale);
    }

    /// Steers straight toward `target` at `speed` (pixels per second),
    /// stopping once within `range` pixels of it.
    pub fn seek(&self, target: Vec2, speed: f32, dt: f32, range: f32) {
        let position = self.position.get();
        let to_target = target - position;
        if to_target.length() > range {
            let step = to_target.normalized_or_zero() * speed * dt;
            self.position.set(position + step);
        }
    }
}

impl Component for Transform {
    fn kind(&self) -> ComponentKind {
        ComponentKind::Transform
    }
}

impl Default for Transform {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn identity_defaults() {
        let t = Transform::new();
        assert_eq!(t.position(), Vec2::zero());
        assert_eq!(t.rotation(), 0.0);
        assert_eq!(t.scale(), Vec2::one());
    }

    #[test]
    fn set_transform_updates_everything() {
        let t = Transform::new();
        t.set_transform(Vec2::new(3.0, 4.0), 90.0, Vec2::new(2.0, 2.0));
        assert_eq!(t.position(), Vec2::new(3.0, 4.0));
        assert_eq!(t.rotation(), 90.0);
        assert_eq!(t.scale(), Vec2::new(2.0, 2.0));
    }

    // ── seek ──────────────────────────────────────────────────────────────

    #[test]
    fn seek_closes_distance_along_the_line() {
        let t = Transform::new();
        let target = Vec2::new(100.0, 0.0);

        t.seek(target, 50.0, 0.1, 1.0);

        assert_eq!(t.position(), Vec2::new(5.0, 0.0));
        t.seek(target, 50.0, 0.1, 1.0);
        assert_eq!(t.position(), Vec2::new(10.0, 0.0));
    }

    #[test]
    fn seek_holds_still_inside_arrival_range() {
        let t = Transform::new();
        t.set_position(Vec2::new(99.5, 0.0));

        t.seek(Vec2::new(100.0, 0.0), 50.0, 0.1, 1.0);

        assert_eq!(t.position(), Vec2::new(99.5, 0.0));
    }

    #[test]
    fn seek_step_scales_with_dt() {
        let slow = Transform::new();
        let fast = Transform::new();
        let target = Vec2::new(0.0, 100.0);

        slow.seek(target, 10.0, 0.1, 0.0);
        fast.seek(target, 10.0, 0.2, 0.0);

        assert_eq!(slow.position(), Vec2::new(0.0, 1.0));
        assert_eq!(fast.position(), Vec2::new(0.0, 2.0));
    }

    #[test]
    fn seek_does_not_explode_at_the_target() {
        let t = Transform::new();
        // Standing exactly on the target with a zero range: direction has no
        // length, so the position must stay finite and unchanged.
        t.seek(Vec2::zero(), 10.0, 0.1, 0.0);
        assert_eq!(t.position(), Vec2::zero());
    }
}
