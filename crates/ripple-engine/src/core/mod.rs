//! Contracts between the runtime loop and the demo programs.

mod app;
mod ctx;

pub use app::{App, AppControl};
pub use ctx::FrameCtx;
