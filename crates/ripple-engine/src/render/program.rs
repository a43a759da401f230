use anyhow::{Context, Result};
use glow::HasContext;

use super::shaders::POSITION_ATTRIB;

type GlProgram = <glow::Context as HasContext>::Program;
type GlShader = <glow::Context as HasContext>::Shader;
pub(crate) type GlUniform = <glow::Context as HasContext>::UniformLocation;

/// Linked vertex + fragment program.
///
/// Must be released with [`ShaderProgram::destroy`] while its context is
/// current; GL objects are not freed on drop.
#[derive(Debug)]
pub struct ShaderProgram {
    program: GlProgram,
}

impl ShaderProgram {
    /// Compiles both stages and links them.
    ///
    /// Non-empty info logs are forwarded to the logger even on success;
    /// compile or link failure returns the log as the error.
    pub fn build(gl: &glow::Context, vertex_src: &str, fragment_src: &str) -> Result<Self> {
        // SAFETY: callers hold a current context for `gl`.
        unsafe {
            let vertex = compile(gl, glow::VERTEX_SHADER, vertex_src)
                .context("vertex shader compile failed")?;
            let fragment = match compile(gl, glow::FRAGMENT_SHADER, fragment_src) {
                Ok(s) => s,
                Err(e) => {
                    gl.delete_shader(vertex);
                    return Err(e.context("fragment shader compile failed"));
                }
            };

            let linked = link(gl, vertex, fragment);

            gl.delete_shader(vertex);
            gl.delete_shader(fragment);

            Ok(Self { program: linked? })
        }
    }

    /// Makes this the active program.
    pub fn bind(&self, gl: &glow::Context) {
        // SAFETY: `program` was created on this context.
        unsafe { gl.use_program(Some(self.program)) };
    }

    /// Looks up a uniform that must exist.
    pub fn uniform(&self, gl: &glow::Context, name: &str) -> Result<GlUniform> {
        self.try_uniform(gl, name)
            .with_context(|| format!("unable to get uniform location for `{name}`"))
    }

    /// Looks up a uniform; `None` if unused or optimized out.
    pub fn try_uniform(&self, gl: &glow::Context, name: &str) -> Option<GlUniform> {
        // SAFETY: `program` was linked on this context.
        unsafe { gl.get_uniform_location(self.program, name) }
    }

    pub fn destroy(self, gl: &glow::Context) {
        // SAFETY: `program` belongs to this context and is not used after.
        unsafe {
            gl.use_program(None);
            gl.delete_program(self.program);
        }
    }
}

unsafe fn compile(gl: &glow::Context, stage: u32, source: &str) -> Result<GlShader> {
    unsafe {
        let shader = gl.create_shader(stage).map_err(anyhow::Error::msg)?;
        gl.shader_source(shader, source);
        gl.compile_shader(shader);

        let info = gl.get_shader_info_log(shader);
        let ok = gl.get_shader_compile_status(shader);
        if !ok {
            gl.delete_shader(shader);
            anyhow::bail!("{}", info.trim_end());
        }

        if !info.trim().is_empty() {
            log::warn!("shader compiler: {}", info.trim_end());
        }

        Ok(shader)
    }
}

unsafe fn link(gl: &glow::Context, vertex: GlShader, fragment: GlShader) -> Result<GlProgram> {
    unsafe {
        let program = gl.create_program().map_err(anyhow::Error::msg)?;
        gl.attach_shader(program, vertex);
        gl.attach_shader(program, fragment);
        gl.bind_attrib_location(program, POSITION_ATTRIB, "position");
        gl.link_program(program);

        gl.detach_shader(program, vertex);
        gl.detach_shader(program, fragment);

        let info = gl.get_program_info_log(program);
        if !gl.get_program_link_status(program) {
            gl.delete_program(program);
            anyhow::bail!("program link failed: {}", info.trim_end());
        }

        if !info.trim().is_empty() {
            log::warn!("program linker: {}", info.trim_end());
        }

        Ok(program)
    }
}
