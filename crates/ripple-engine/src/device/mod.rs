//! EGL display, surface and OpenGL ES context management.
//!
//! This module is responsible for:
//! - opening the EGL display for the window's native display connection
//! - choosing a framebuffer config and creating the window surface
//! - creating the GLES 2 context, making it current and loading `glow`

mod config;
mod gpu;
mod init;

pub use config::{pick_config, ConfigCandidate};
pub use gpu::Gpu;
pub use init::GlInit;
