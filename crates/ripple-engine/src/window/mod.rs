//! Window + runtime loop.
//!
//! Owns the `winit` event loop and the single demo window, brings up the
//! GL device on it and drives the app once per frame.

mod config;
mod runtime;
mod x11;

pub use config::{RuntimeConfig, WindowHints};
pub use runtime::Runtime;
