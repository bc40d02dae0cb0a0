//! Actor components.
//!
//! A component is whatever an actor owns a share of: geometry, a transform,
//! an asset description. Actors store them type-erased as [`ComponentHandle`]
//! and recover concrete types through the handle's checked cast, so lookup
//! needs no registration tables.
//!
//! Components are mutably aliasable through every live handle, which is why
//! the capability methods take `&self` and concrete components keep their
//! state in `Cell`s.

use std::fmt;
use std::ptr::NonNull;

use nergal_memory::{AsAny, SharedHandle};

use crate::draw::DrawSurface;

mod shape;
mod texture;
mod transform;

pub use shape::{Shape, ShapeKind};
pub use texture::Texture;
pub use transform::Transform;

/// Capability set every component offers the stage loop.
///
/// Both methods default to doing nothing; a component implements the ones it
/// actually provides. [`AsAny`] as the supertrait is what lets a trait-object
/// handle be cast back to the concrete component type.
pub trait Component: AsAny {
    /// Stable tag for tooling (outlines, diagnostics).
    fn kind(&self) -> ComponentKind;

    /// Advances internal state by `dt` seconds.
    fn update(&self, _dt: f32) {}

    /// Records this component's draw commands for the current frame.
    fn render(&self, _surface: &mut DrawSurface) {}
}

/// Component discriminator for tooling and diagnostics.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum ComponentKind {
    Transform,
    Shape,
    Texture,
}

impl fmt::Display for ComponentKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            ComponentKind::Transform => "Transform",
            ComponentKind::Shape => "Shape",
            ComponentKind::Texture => "Texture",
        };
        f.write_str(name)
    }
}

/// Shared handle to a type-erased component, the unit actors store.
pub type ComponentHandle = SharedHandle<dyn Component>;

/// Upcasts a typed component handle into the erased form actors store.
///
/// The returned handle shares the argument's allocation and count; passing a
/// null handle yields a null handle.
pub fn upcast<C: Component>(handle: SharedHandle<C>) -> ComponentHandle {
    match handle.as_non_null() {
        Some(object) => {
            let object: NonNull<dyn Component> = object;
            // SAFETY: same allocation, viewed through the component vtable.
            unsafe { handle.alias(object) }
        }
        None => ComponentHandle::null(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    struct Marker;

    impl Component for Marker {
        fn kind(&self) -> ComponentKind {
            ComponentKind::Texture
        }
    }

    #[test]
    fn upcast_preserves_identity_and_count() {
        let typed = SharedHandle::new(Marker);
        let erased = upcast(typed.clone());

        assert_eq!(typed.strong_count(), 2);
        assert!(erased.ptr_eq(&typed));
        assert_eq!(erased.kind(), ComponentKind::Texture);
    }

    #[test]
    fn upcast_consumes_its_argument_reference() {
        let typed = SharedHandle::new(Marker);
        let erased = upcast(typed);
        assert_eq!(erased.strong_count(), 1);
    }

    #[test]
    fn upcast_of_null_is_null() {
        let erased = upcast(SharedHandle::<Marker>::null());
        assert!(erased.is_null());
    }

    #[test]
    fn erased_handle_casts_back() {
        let erased = upcast(SharedHandle::new(Marker));
        assert!(!erased.cast::<Marker>().is_null());
        assert!(erased.cast::<String>().is_null());
    }

    #[test]
    fn kind_names_render_for_tooling() {
        assert_eq!(ComponentKind::Transform.to_string(), "Transform");
        assert_eq!(ComponentKind::Shape.to_string(), "Shape");
    }
}
