//! Frame timing.
//!
//! The runtime owns one [`FrameClock`] and ticks it once per drawn frame;
//! scenes read the resulting [`FrameTime`] through the frame context.

mod frame_clock;

pub use frame_clock::{FrameClock, FrameTime};
