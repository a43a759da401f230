use anyhow::Result;

use crate::input::{InputEvent, InputState};

use super::ctx::FrameCtx;

/// Control directive returned by app callbacks.
#[derive(Debug, Copy, Clone, Eq, PartialEq)]
pub enum AppControl {
    Continue,
    Exit,
}

/// Application contract driven by `window::Runtime`.
///
/// Call order: `init` once after the GL context is current, then any
/// number of `on_input` / `on_frame`, then `teardown` once while the
/// context is still current.
pub trait App {
    /// Creates GL resources. An error aborts startup.
    fn init(&mut self, gl: &glow::Context) -> Result<()>;

    /// Called for every translated input event, after `state` has been
    /// updated with it.
    fn on_input(&mut self, event: &InputEvent, state: &InputState) -> AppControl {
        let _ = (event, state);
        AppControl::Continue
    }

    /// Renders one frame. The runtime swaps buffers afterwards.
    fn on_frame(&mut self, ctx: &mut FrameCtx<'_>) -> AppControl;

    /// Releases GL resources.
    fn teardown(&mut self, gl: &glow::Context) {
        let _ = gl;
    }
}
