//! The two ripple demo programs.
//!
//! Both draw the same animated quad; they differ in how the pointer is used.

use anyhow::{Context, Result};
use ripple_engine::anim::Phase;
use ripple_engine::core::{App, AppControl, FrameCtx};
use ripple_engine::input::{InputEvent, InputState, Key};
use ripple_engine::render::{FrameUniforms, Pattern, QuadRenderer};

/// How a demo reacts to the pointer.
#[derive(Debug, Copy, Clone, Eq, PartialEq)]
pub enum PointerMode {
    /// Any pointer motion ends the program.
    QuitOnMotion,
    /// The quad is displaced to follow the pointer; Escape or Q quits.
    Follow,
}

/// Animated-quad demo.
pub struct RippleApp {
    pattern: Pattern,
    mode: PointerMode,
    phase: Phase,
    renderer: Option<QuadRenderer>,
}

impl RippleApp {
    pub fn new(pattern: Pattern, mode: PointerMode) -> Self {
        Self {
            pattern,
            mode,
            phase: Phase::default(),
            renderer: None,
        }
    }

    /// Rings pattern, exits on the first pointer motion.
    pub fn rings() -> Self {
        Self::new(Pattern::Rings, PointerMode::QuitOnMotion)
    }

    /// Waves pattern following the pointer.
    pub fn follow() -> Self {
        Self::new(Pattern::Waves, PointerMode::Follow)
    }

    pub fn mode(&self) -> PointerMode {
        self.mode
    }

    fn control_for(&self, event: &InputEvent) -> AppControl {
        match self.mode {
            PointerMode::QuitOnMotion if event.is_pointer_motion() => {
                log::info!("pointer motion observed, exiting");
                AppControl::Exit
            }
            PointerMode::Follow if event.is_key_press(Key::Escape) || event.is_key_press(Key::Q) => {
                AppControl::Exit
            }
            _ => AppControl::Continue,
        }
    }
}

impl App for RippleApp {
    fn init(&mut self, gl: &ripple_engine::glow::Context) -> Result<()> {
        let renderer = QuadRenderer::new(gl, self.pattern)
            .with_context(|| format!("failed to build {:?} renderer", self.pattern))?;
        self.renderer = Some(renderer);
        Ok(())
    }

    fn on_input(&mut self, event: &InputEvent, _state: &InputState) -> AppControl {
        self.control_for(event)
    }

    fn on_frame(&mut self, ctx: &mut FrameCtx<'_>) -> AppControl {
        let Some(renderer) = self.renderer.as_ref() else {
            return AppControl::Exit;
        };

        let mut uniforms = FrameUniforms::new(self.phase.advance(), ctx.size);
        if self.mode == PointerMode::Follow {
            uniforms = uniforms.with_offset(ctx.pointer_offset());
        }

        renderer.draw(ctx.gl, &uniforms);
        AppControl::Continue
    }

    fn teardown(&mut self, gl: &ripple_engine::glow::Context) {
        if let Some(renderer) = self.renderer.take() {
            renderer.destroy(gl);
        }
    }
}
