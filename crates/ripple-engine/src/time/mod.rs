//! Frame timing.
//!
//! - `FrameClock` hands out one `FrameTime` per rendered frame.
//! - `FpsCounter` produces the periodic frames-per-second report.

mod fps;
mod frame_clock;

pub use fps::{FpsCounter, DEFAULT_REPORT_EVERY};
pub use frame_clock::{FrameClock, FrameTime};
