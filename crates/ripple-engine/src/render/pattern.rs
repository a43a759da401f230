use super::shaders;

/// Fragment pattern drawn on the quad.
#[derive(Debug, Copy, Clone, Default, Eq, PartialEq)]
pub enum Pattern {
    /// `sin((x² + y²) * 40 + phase)`
    #[default]
    Rings,
    /// `cos(x * 10 + phase) * sin(y * 10 + phase)`
    Waves,
}

impl Pattern {
    pub fn fragment_source(self) -> &'static str {
        match self {
            Pattern::Rings => shaders::RINGS_FRAGMENT,
            Pattern::Waves => shaders::WAVES_FRAGMENT,
        }
    }

    /// CPU evaluation of the fragment math at quad position `pos`.
    ///
    /// The shader multiplies opaque white by this value, so the channel
    /// output is this clamped to `[0, 1]` by the framebuffer.
    pub fn intensity(self, pos: [f32; 2], phase: f32) -> f32 {
        let [x, y] = pos;
        match self {
            Pattern::Rings => ((x * x + y * y) * 40.0 + phase).sin(),
            Pattern::Waves => (x * 10.0 + phase).cos() * (y * 10.0 + phase).sin(),
        }
    }
}
