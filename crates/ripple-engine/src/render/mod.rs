//! GLES 2 rendering.
//!
//! One program, one vertex buffer, one draw call per frame. All calls
//! assume the context from `device::Gpu` is current on this thread.

mod pattern;
mod program;
mod quad;
pub mod shaders;

pub use pattern::Pattern;
pub use program::ShaderProgram;
pub use quad::{FrameUniforms, QuadRenderer, CLEAR_COLOR, QUAD_VERTICES};
