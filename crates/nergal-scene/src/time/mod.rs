//! Frame timing.
//!
//! One [`FrameClock`] per stage loop; call `tick()` once per frame and feed
//! the resulting `dt` to [`Stage::update`](crate::stage::Stage::update).
//! Nothing here touches the scene, so the clock is reusable by any loop that
//! wants stable deltas.

mod frame_clock;

pub use frame_clock::{FrameClock, FrameTime};
