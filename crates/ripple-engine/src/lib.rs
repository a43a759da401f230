//! Ripple engine crate.
//!
//! Window, EGL context and GLES 2 quad renderer shared by the ripple demos.

pub mod anim;
pub mod core;
pub mod device;
pub mod input;
pub mod logging;
pub mod render;
pub mod time;
pub mod window;

pub use glow;
