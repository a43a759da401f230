//! GLSL ES 1.00 sources for the quad program.

/// Shared vertex stage. `offset` shifts the quad in clip space; `pos`
/// carries the undisplaced position so the pattern moves with the quad.
pub const QUAD_VERTEX: &str = "\
attribute vec4 position;
uniform vec2 offset;
varying mediump vec2 pos;
void main() {
    gl_Position = position + vec4(offset, 0.0, 0.0);
    pos = position.xy;
}
";

/// Concentric rings radiating from the quad's center.
pub const RINGS_FRAGMENT: &str = "\
varying mediump vec2 pos;
uniform mediump float phase;
void main() {
    gl_FragColor = vec4(1.0, 1.0, 1.0, 1.0) * sin((pos.x * pos.x + pos.y * pos.y) * 40.0 + phase);
}
";

/// Checker-like interference of a horizontal and a vertical wave.
pub const WAVES_FRAGMENT: &str = "\
varying mediump vec2 pos;
uniform mediump float phase;
void main() {
    gl_FragColor = vec4(1.0, 1.0, 1.0, 1.0) * cos(pos.x * 10.0 + phase) * sin(pos.y * 10.0 + phase);
}
";

/// Attribute slot bound to `position` before linking.
pub const POSITION_ATTRIB: u32 = 0;

pub const PHASE_UNIFORM: &str = "phase";
pub const OFFSET_UNIFORM: &str = "offset";

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn fragments_declare_phase() {
        for src in [RINGS_FRAGMENT, WAVES_FRAGMENT] {
            assert!(src.contains(&format!("uniform mediump float {PHASE_UNIFORM};")));
            assert!(src.contains("varying mediump vec2 pos;"));
        }
    }

    #[test]
    fn vertex_declares_position_and_offset() {
        assert!(QUAD_VERTEX.contains("attribute vec4 position;"));
        assert!(QUAD_VERTEX.contains(&format!("uniform vec2 {OFFSET_UNIFORM};")));
    }

    #[test]
    fn sources_have_no_version_directive() {
        // GLSL ES 1.00 is the default when `#version` is absent.
        for src in [QUAD_VERTEX, RINGS_FRAGMENT, WAVES_FRAGMENT] {
            assert!(!src.contains("#version"));
        }
    }
}
