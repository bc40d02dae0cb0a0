//! Actors: named bags of shared components.

use std::fmt;

use nergal_memory::SharedHandle;

use crate::component::{self, Component, ComponentHandle, ComponentKind, Shape, Transform};
use crate::draw::DrawSurface;

/// A scene entity, identified by name and made of components.
///
/// Components are stored as shared handles to the erased [`Component`] trait,
/// so callers can hold a typed handle to one while the actor keeps its own.
/// Lookup walks the components in insertion order and returns the first whose
/// concrete type matches, which makes "one component per type" a convention
/// rather than a rule.
pub struct Actor {
    name: String,
    /// Invariant: never holds a null handle.
    components: Vec<ComponentHandle>,
}

impl Actor {
    /// A ready-to-draw actor carrying a [`Shape`] and a [`Transform`].
    ///
    /// The shape starts empty; call
    /// [`create_shape`](Shape::create_shape) to pick its geometry.
    pub fn new(name: impl Into<String>) -> Self {
        let mut actor = Self::empty(name);
        actor.add(Shape::new());
        actor.add(Transform::new());
        actor
    }

    /// An actor with no components at all.
    pub fn empty(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            components: Vec::new(),
        }
    }

    #[inline]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Moves `component` onto the heap and shares it with this actor.
    pub fn add<C: Component>(&mut self, component: C) {
        self.components
            .push(component::upcast(SharedHandle::new(component)));
    }

    /// Adds an already-shared component. Null handles are logged and ignored
    /// so lookup and update never have to re-check.
    pub fn add_handle(&mut self, handle: ComponentHandle) {
        if handle.is_null() {
            log::warn!("actor '{}' ignored a null component handle", self.name);
            return;
        }
        self.components.push(handle);
    }

    /// The first component of concrete type `C`, shared. Null handle when the
    /// actor has none.
    pub fn component<C: Component>(&self) -> SharedHandle<C> {
        for component in &self.components {
            let hit = component.cast::<C>();
            if !hit.is_null() {
                return hit;
            }
        }
        SharedHandle::null()
    }

    /// All components, in insertion order.
    #[inline]
    pub fn components(&self) -> &[ComponentHandle] {
        &self.components
    }

    /// Copies the transform's position, rotation and scale into the shape,
    /// then updates every component in insertion order.
    ///
    /// The copy happens first so a component that moves the transform during
    /// its own update takes effect on the next frame, not mid-frame.
    pub fn update(&self, dt: f32) {
        let transform = self.component::<Transform>();
        let shape = self.component::<Shape>();
        if let (Some(transform), Some(shape)) = (transform.get(), shape.get()) {
            shape.set_position(transform.position());
            shape.set_rotation(transform.rotation());
            shape.set_scale(transform.scale());
        }

        for component in &self.components {
            component.update(dt);
        }
    }

    /// Lets every component push its draw commands, in insertion order.
    pub fn render(&self, surface: &mut DrawSurface) {
        for component in &self.components {
            component.render(surface);
        }
    }
}

impl fmt::Debug for Actor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let kinds: Vec<ComponentKind> = self.components.iter().map(|c| c.kind()).collect();
        f.debug_struct("Actor")
            .field("name", &self.name)
            .field("components", &kinds)
            .finish()
    }
}
