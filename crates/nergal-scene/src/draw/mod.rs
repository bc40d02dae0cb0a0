//! Draw stream types.
//!
//! Responsibilities:
//! - record renderer-agnostic draw commands for one frame
//! - keep insertion order, because insertion order *is* the paint order
//! - keep shape-specific payloads isolated per shape file under `draw::shapes`
//!
//! A renderer replays [`DrawSurface::items`] front to back against whatever
//! backend it owns; this crate never draws pixels itself.

mod cmd;
mod color;
mod surface;

pub mod shapes;

pub use cmd::DrawCmd;
pub use color::Color;
pub use surface::DrawSurface;
