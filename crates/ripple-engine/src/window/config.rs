use winit::dpi::LogicalSize;

use crate::time::DEFAULT_REPORT_EVERY;

/// Window-manager properties written on X11 before the window is mapped.
#[derive(Debug, Copy, Clone, Eq, PartialEq)]
pub struct WindowHints {
    /// `_NET_WM_STATE = [_NET_WM_STATE_FULLSCREEN]`
    pub net_wm_fullscreen: bool,
    /// `_HILDON_NON_COMPOSITED_WINDOW = 1`: asks Hildon/Maemo compositors
    /// to scan out the window directly.
    pub hildon_non_composited: bool,
}

impl WindowHints {
    pub const NONE: Self = Self {
        net_wm_fullscreen: false,
        hildon_non_composited: false,
    };

    pub fn any(&self) -> bool {
        self.net_wm_fullscreen || self.hildon_non_composited
    }
}

impl Default for WindowHints {
    fn default() -> Self {
        Self {
            net_wm_fullscreen: true,
            hildon_non_composited: true,
        }
    }
}

/// Window/runtime configuration.
#[derive(Debug, Clone)]
pub struct RuntimeConfig {
    pub title: String,
    /// Size requested before the window manager applies fullscreen.
    pub initial_size: LogicalSize<f64>,
    /// Request a fullscreen window. On X11 with `hints.net_wm_fullscreen`
    /// the property does this; elsewhere winit's borderless fullscreen is used.
    pub fullscreen: bool,
    pub hints: WindowHints,
    /// Frames between fps lines on stdout.
    pub fps_report_every: u64,
}

impl Default for RuntimeConfig {
    fn default() -> Self {
        Self {
            title: "GL test".to_string(),
            initial_size: LogicalSize::new(600.0, 400.0),
            fullscreen: true,
            hints: WindowHints::default(),
            fps_report_every: DEFAULT_REPORT_EVERY,
        }
    }
}

impl RuntimeConfig {
    pub fn with_title(mut self, title: impl Into<String>) -> Self {
        self.title = title.into();
        self
    }

    /// Whether winit itself must be asked for fullscreen, given the platform.
    pub(crate) fn needs_winit_fullscreen(&self, on_x11: bool) -> bool {
        self.fullscreen && !(on_x11 && self.hints.net_wm_fullscreen)
    }
}
