use crate::input::{pointer_to_offset, InputFrame, InputState};
use crate::time::FrameTime;

/// Per-frame context passed to `App::on_frame`.
pub struct FrameCtx<'a> {
    pub gl: &'a glow::Context,
    /// Drawable size in physical pixels.
    pub size: (u32, u32),
    pub time: FrameTime,
    pub input: &'a InputState,
    pub input_frame: &'a InputFrame,
}

impl FrameCtx<'_> {
    /// Pointer position as a clip-space offset; origin while the pointer is
    /// outside the window.
    pub fn pointer_offset(&self) -> [f32; 2] {
        self.input
            .pointer_pos
            .map(|pos| pointer_to_offset(pos, self.size))
            .unwrap_or([0.0, 0.0])
    }
}
