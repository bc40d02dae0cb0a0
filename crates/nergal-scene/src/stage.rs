//! The stage owns every spawned actor.

use nergal_memory::SharedHandle;

use crate::actor::Actor;
use crate::draw::DrawSurface;

/// Ordered collection of live actors.
///
/// Spawning hands back a shared handle, so callers keep direct access to the
/// actors they care about while the stage drives the whole cast each frame.
/// Update and render both walk actors in spawn order.
#[derive(Debug, Default)]
pub struct Stage {
    actors: Vec<SharedHandle<Actor>>,
}

impl Stage {
    pub fn new() -> Self {
        Self { actors: Vec::new() }
    }

    /// Moves `actor` onto the stage and returns a handle shared with it.
    pub fn spawn(&mut self, actor: Actor) -> SharedHandle<Actor> {
        log::debug!("spawned actor '{}'", actor.name());
        let handle = SharedHandle::new(actor);
        self.actors.push(handle.clone());
        handle
    }

    /// The first actor with this name, shared. Null handle when the stage has
    /// no such actor.
    pub fn find(&self, name: &str) -> SharedHandle<Actor> {
        for actor in &self.actors {
            if actor.name() == name {
                return actor.clone();
            }
        }
        SharedHandle::null()
    }

    /// All actors, in spawn order.
    #[inline]
    pub fn actors(&self) -> &[SharedHandle<Actor>] {
        &self.actors
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.actors.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.actors.is_empty()
    }

    pub fn update(&self, dt: f32) {
        for actor in &self.actors {
            actor.update(dt);
        }
    }

    pub fn render(&self, surface: &mut DrawSurface) {
        for actor in &self.actors {
            actor.render(surface);
        }
    }
}
