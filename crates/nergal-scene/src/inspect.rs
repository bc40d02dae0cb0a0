//! Plain-text outlines of actors and stages, for logs and consoles.

use std::fmt::Write as _;

use crate::actor::Actor;
use crate::component::{ComponentHandle, ComponentKind, Shape, ShapeKind, Texture, Transform};
use crate::stage::Stage;

/// One line describing a component, downcast through its advertised kind.
///
/// A component whose kind does not match its concrete type still gets a line,
/// just without details.
fn describe(component: &ComponentHandle) -> String {
    match component.kind() {
        ComponentKind::Transform => {
            if let Some(transform) = component.cast::<Transform>().get() {
                let position = transform.position();
                let scale = transform.scale();
                return format!(
                    "Transform position ({}, {}) rotation {} scale ({}, {})",
                    position.x,
                    position.y,
                    transform.rotation(),
                    scale.x,
                    scale.y
                );
            }
        }
        ComponentKind::Shape => {
            if let Some(shape) = component.cast::<Shape>().get() {
                let mut line = match shape.shape_kind() {
                    ShapeKind::Empty => "Shape Empty".to_owned(),
                    ShapeKind::Circle => format!("Shape Circle radius {}", shape.radius()),
                    ShapeKind::Rectangle => {
                        let size = shape.size();
                        format!("Shape Rectangle {}x{}", size.x, size.y)
                    }
                    ShapeKind::Triangle => format!("Shape Triangle radius {}", shape.radius()),
                };
                if let Some(texture) = shape.texture().get() {
                    let _ = write!(line, " textured {}", texture.file_name());
                }
                return line;
            }
        }
        ComponentKind::Texture => {
            if let Some(texture) = component.cast::<Texture>().get() {
                return format!("Texture {}", texture.file_name());
            }
        }
    }
    component.kind().to_string()
}

/// The actor's name plus one indented line per component.
pub fn actor_outline(actor: &Actor) -> String {
    let mut text = format!(
        "actor '{}': {} component(s)\n",
        actor.name(),
        actor.components().len()
    );
    for component in actor.components() {
        let _ = writeln!(text, "  - {}", describe(component));
    }
    text
}

/// Every actor's outline, in spawn order.
pub fn stage_outline(stage: &Stage) -> String {
    let mut text = format!("stage: {} actor(s)\n", stage.len());
    for actor in stage.actors() {
        text.push_str(&actor_outline(actor));
    }
    text
}
