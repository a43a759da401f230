use anyhow::Result;
use glow::HasContext;

use super::pattern::Pattern;
use super::program::{GlUniform, ShaderProgram};
use super::shaders::{self, OFFSET_UNIFORM, PHASE_UNIFORM, POSITION_ATTRIB};

type GlBuffer = <glow::Context as HasContext>::Buffer;

/// Full-screen quad in clip space, as a 4-vertex triangle strip (xyzw).
pub const QUAD_VERTICES: [[f32; 4]; 4] = [
    [-1.0, -1.0, 0.0, 1.0],
    [1.0, -1.0, 0.0, 1.0],
    [-1.0, 1.0, 0.0, 1.0],
    [1.0, 1.0, 0.0, 1.0],
];

/// Opaque green, visible wherever the quad does not cover.
pub const CLEAR_COLOR: [f32; 4] = [0.0, 1.0, 0.0, 1.0];

/// Per-frame inputs to [`QuadRenderer::draw`].
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct FrameUniforms {
    pub phase: f32,
    /// Clip-space displacement of the quad.
    pub offset: [f32; 2],
    /// Viewport size in physical pixels.
    pub viewport: (u32, u32),
}

impl FrameUniforms {
    pub fn new(phase: f32, viewport: (u32, u32)) -> Self {
        Self {
            phase,
            offset: [0.0, 0.0],
            viewport,
        }
    }

    pub fn with_offset(mut self, offset: [f32; 2]) -> Self {
        self.offset = offset;
        self
    }
}

/// Draws the animated quad.
pub struct QuadRenderer {
    program: ShaderProgram,
    vbo: GlBuffer,
    phase: GlUniform,
    offset: Option<GlUniform>,
}

impl QuadRenderer {
    /// Builds the program and uploads the vertex buffer.
    ///
    /// Fails if either stage does not compile or `phase` is missing.
    pub fn new(gl: &glow::Context, pattern: Pattern) -> Result<Self> {
        let program = ShaderProgram::build(gl, shaders::QUAD_VERTEX, pattern.fragment_source())?;
        program.bind(gl);

        let phase = match program.uniform(gl, PHASE_UNIFORM) {
            Ok(loc) => loc,
            Err(e) => {
                program.destroy(gl);
                return Err(e);
            }
        };
        let offset = program.try_uniform(gl, OFFSET_UNIFORM);
        if offset.is_none() {
            log::debug!("`{OFFSET_UNIFORM}` uniform not active; quad stays centered");
        }

        // SAFETY: context is current; the buffer is bound only here and in draw.
        let vbo = unsafe {
            let vbo = match gl.create_buffer() {
                Ok(b) => b,
                Err(e) => {
                    program.destroy(gl);
                    anyhow::bail!("failed to create vertex buffer: {e}");
                }
            };
            gl.bind_buffer(glow::ARRAY_BUFFER, Some(vbo));
            gl.buffer_data_u8_slice(
                glow::ARRAY_BUFFER,
                bytemuck::cast_slice(&QUAD_VERTICES),
                glow::STATIC_DRAW,
            );
            vbo
        };

        log::debug!("quad renderer ready ({pattern:?})");

        Ok(Self {
            program,
            vbo,
            phase,
            offset,
        })
    }

    /// Clears the framebuffer and draws one frame of the quad.
    pub fn draw(&self, gl: &glow::Context, uniforms: &FrameUniforms) {
        let (w, h) = uniforms.viewport;
        let [r, g, b, a] = CLEAR_COLOR;

        self.program.bind(gl);

        // SAFETY: all objects were created on this context, which is current.
        unsafe {
            gl.viewport(0, 0, w as i32, h as i32);
            gl.clear_color(r, g, b, a);
            gl.clear(glow::COLOR_BUFFER_BIT);

            gl.uniform_1_f32(Some(&self.phase), uniforms.phase);
            if let Some(offset) = &self.offset {
                gl.uniform_2_f32(Some(offset), uniforms.offset[0], uniforms.offset[1]);
            }

            gl.bind_buffer(glow::ARRAY_BUFFER, Some(self.vbo));
            gl.vertex_attrib_pointer_f32(POSITION_ATTRIB, 4, glow::FLOAT, false, 0, 0);
            gl.enable_vertex_attrib_array(POSITION_ATTRIB);
            gl.draw_arrays(glow::TRIANGLE_STRIP, 0, QUAD_VERTICES.len() as i32);
        }
    }

    /// Releases GL objects. The context must still be current.
    pub fn destroy(self, gl: &glow::Context) {
        // SAFETY: see `draw`.
        unsafe {
            gl.disable_vertex_attrib_array(POSITION_ATTRIB);
            gl.bind_buffer(glow::ARRAY_BUFFER, None);
            gl.delete_buffer(self.vbo);
        }
        self.program.destroy(gl);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn quad_covers_clip_space() {
        let xs: Vec<f32> = QUAD_VERTICES.iter().map(|v| v[0]).collect();
        let ys: Vec<f32> = QUAD_VERTICES.iter().map(|v| v[1]).collect();
        assert_eq!(xs.iter().cloned().fold(f32::INFINITY, f32::min), -1.0);
        assert_eq!(xs.iter().cloned().fold(f32::NEG_INFINITY, f32::max), 1.0);
        assert_eq!(ys.iter().cloned().fold(f32::INFINITY, f32::min), -1.0);
        assert_eq!(ys.iter().cloned().fold(f32::NEG_INFINITY, f32::max), 1.0);
        assert!(QUAD_VERTICES.iter().all(|v| v[3] == 1.0));
    }

    #[test]
    fn strip_order_has_no_degenerate_triangles() {
        // Triangles (0,1,2) and (1,2,3) must both have non-zero area.
        let area = |a: [f32; 4], b: [f32; 4], c: [f32; 4]| {
            ((b[0] - a[0]) * (c[1] - a[1]) - (c[0] - a[0]) * (b[1] - a[1])).abs() / 2.0
        };
        let v = QUAD_VERTICES;
        assert_eq!(area(v[0], v[1], v[2]) + area(v[1], v[2], v[3]), 4.0);
    }

    #[test]
    fn vertex_data_is_tightly_packed() {
        let bytes: &[u8] = bytemuck::cast_slice(&QUAD_VERTICES);
        assert_eq!(bytes.len(), 4 * 4 * std::mem::size_of::<f32>());
    }

    #[test]
    fn uniforms_default_to_no_offset() {
        let u = FrameUniforms::new(1.5, (600, 400));
        assert_eq!(u.offset, [0.0, 0.0]);
        assert_eq!(u.with_offset([0.5, -0.5]).offset, [0.5, -0.5]);
    }

    #[test]
    fn clear_color_is_opaque_green() {
        assert_eq!(CLEAR_COLOR, [0.0, 1.0, 0.0, 1.0]);
    }
}
