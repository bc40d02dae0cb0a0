//! Scene core: actors, their components, and the shared-handle plumbing
//! between them.
//!
//! This crate owns the simulation-side pieces. Rendering backends are
//! external; they consume the [`draw`] stream an actor records, so nothing
//! here touches a window or a GPU.
//!
//! ```rust
//! use nergal_scene::actor::Actor;
//! use nergal_scene::component::{Shape, ShapeKind};
//!
//! let actor = Actor::new("demo");
//! let shape = actor.component::<Shape>();
//! shape.create_shape(ShapeKind::Circle);
//! assert_eq!(shape.radius(), 10.0);
//! ```

pub mod coords;
pub mod draw;
pub mod time;

pub mod actor;
pub mod component;
pub mod stage;

pub mod inspect;
pub mod logging;
pub mod notify;
pub mod resources;
