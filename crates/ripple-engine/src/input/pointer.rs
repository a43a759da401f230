/// Maps a pointer position (physical pixels, top-left origin) to a
/// normalized-device-coordinate offset.
///
/// `x` runs -1 (left edge) to 1 (right edge), `y` runs -1 (bottom) to
/// 1 (top). A zero-sized surface maps everything to the origin.
pub fn pointer_to_offset(pos: (f32, f32), size: (u32, u32)) -> [f32; 2] {
    let (w, h) = size;
    if w == 0 || h == 0 {
        return [0.0, 0.0];
    }

    let x = pos.0 / w as f32 * 2.0 - 1.0;
    let y = 1.0 - pos.1 / h as f32 * 2.0;
    [x.clamp(-1.0, 1.0), y.clamp(-1.0, 1.0)]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn center_is_origin() {
        assert_eq!(pointer_to_offset((300.0, 200.0), (600, 400)), [0.0, 0.0]);
    }

    #[test]
    fn corners_map_to_unit_square() {
        assert_eq!(pointer_to_offset((0.0, 0.0), (600, 400)), [-1.0, 1.0]);
        assert_eq!(pointer_to_offset((600.0, 400.0), (600, 400)), [1.0, -1.0]);
    }

    #[test]
    fn outside_positions_are_clamped() {
        assert_eq!(pointer_to_offset((-50.0, 900.0), (600, 400)), [-1.0, -1.0]);
    }

    #[test]
    fn zero_size_is_origin() {
        assert_eq!(pointer_to_offset((10.0, 10.0), (0, 400)), [0.0, 0.0]);
    }
}
