/// Startup parameters for the GL device.
#[derive(Debug, Clone)]
pub struct GlInit {
    /// Minimum total color buffer depth in bits (`EGL_BUFFER_SIZE`).
    pub min_buffer_size: u8,

    /// Requested OpenGL ES context version.
    pub gles_major: u8,
    pub gles_minor: u8,

    /// Block `swap_buffers` on vertical blank.
    ///
    /// The loop never sleeps, so this is its only throttle. If the driver
    /// rejects the swap interval a warning is logged and startup continues;
    /// the frame rate is then whatever the driver's default pacing gives,
    /// which may be unthrottled.
    pub vsync: bool,
}

impl Default for GlInit {
    fn default() -> Self {
        Self {
            min_buffer_size: 16,
            gles_major: 2,
            gles_minor: 0,
            vsync: true,
        }
    }
}
