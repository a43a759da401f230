use anyhow::Result;
use glutin::api::egl::config::Config;
use glutin::config::{Api, ColorBufferType, GlConfig};

/// Properties of a framebuffer config relevant to selection.
///
/// Implemented for glutin's EGL `Config`; the trait keeps selection
/// testable without a display.
pub trait ConfigCandidate {
    /// Color plus alpha bits per pixel.
    fn buffer_bits(&self) -> u8;

    /// Whether the config can back an OpenGL ES 2 context.
    fn supports_gles2(&self) -> bool;
}

impl ConfigCandidate for Config {
    fn buffer_bits(&self) -> u8 {
        let color = match self.color_buffer_type() {
            Some(ColorBufferType::Rgb { r_size, g_size, b_size }) => {
                r_size.saturating_add(g_size).saturating_add(b_size)
            }
            Some(ColorBufferType::Luminance(l)) => l,
            None => 0,
        };
        color.saturating_add(self.alpha_size())
    }

    fn supports_gles2(&self) -> bool {
        self.api().contains(Api::GLES2)
    }
}

/// Picks the first candidate with at least `min_buffer_bits` that supports
/// GLES 2.
///
/// Candidates arrive in EGL's own preference order, so the first match is
/// the one `eglChooseConfig` would have returned with a config size of one.
pub fn pick_config<C, I>(candidates: I, min_buffer_bits: u8) -> Result<C>
where
    C: ConfigCandidate,
    I: IntoIterator<Item = C>,
{
    let mut seen = 0usize;
    for candidate in candidates {
        seen += 1;
        if candidate.supports_gles2() && candidate.buffer_bits() >= min_buffer_bits {
            log::debug!(
                "picked EGL config #{} ({} bits)",
                seen,
                candidate.buffer_bits()
            );
            return Ok(candidate);
        }
    }

    anyhow::bail!(
        "didn't get exactly one config, but 0 ({seen} candidates, none with >= {min_buffer_bits} bits and GLES2)"
    )
}
