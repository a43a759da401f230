use std::ffi::CStr;
use std::mem::ManuallyDrop;
use std::num::NonZeroU32;

use anyhow::{Context, Result};
use glutin::api::egl::context::PossiblyCurrentContext;
use glutin::api::egl::display::Display;
use glutin::api::egl::surface::Surface;
use glutin::config::{Api, ColorBufferType, ConfigTemplateBuilder};
use glutin::context::{
    ContextApi, ContextAttributesBuilder, NotCurrentGlContext, PossiblyCurrentGlContext, Version,
};
use glutin::display::GlDisplay;
use glutin::surface::{GlSurface, SurfaceAttributesBuilder, SwapInterval, WindowSurface};
use raw_window_handle::{HasDisplayHandle, HasWindowHandle};
use winit::dpi::PhysicalSize;
use winit::window::Window;

use super::{pick_config, GlInit};

/// EGL + OpenGL ES state bound to one window.
///
/// Dropping releases the context, then the surface, then terminates the
/// display. The window itself must outlive this value.
pub struct Gpu {
    /// Loaded GL entry points.
    gl: glow::Context,

    /// Current context.
    context: ManuallyDrop<PossiblyCurrentContext>,

    /// Window surface the context renders into.
    surface: ManuallyDrop<Surface<WindowSurface>>,

    /// EGL display connection.
    display: ManuallyDrop<Display>,

    /// Surface size in physical pixels.
    size: PhysicalSize<u32>,
}

impl Gpu {
    /// Brings up EGL on `window` and makes a GLES context current.
    pub fn new(window: &Window, init: &GlInit) -> Result<Self> {
        let size = window.inner_size();
        let (width, height) = non_zero_size(size).context("window has zero size")?;

        let raw_display = window
            .display_handle()
            .context("window has no display handle")?
            .as_raw();
        let raw_window = window
            .window_handle()
            .context("window has no native handle")?
            .as_raw();

        // SAFETY: the raw display handle comes from a live winit window.
        let display = unsafe { Display::new(raw_display) }
            .context("got no EGL display")?;

        let template = ConfigTemplateBuilder::new()
            .with_api(Api::GLES2)
            .with_buffer_type(ColorBufferType::Rgb {
                r_size: 5,
                g_size: 6,
                b_size: 5,
            })
            .compatible_with_native_window(raw_window)
            .build();

        // SAFETY: the display outlives the returned iterator.
        let candidates = unsafe { display.find_configs(template) }
            .context("failed to choose config")?;
        let config = pick_config(candidates, init.min_buffer_size)?;

        let surface_attrs =
            SurfaceAttributesBuilder::<WindowSurface>::new().build(raw_window, width, height);
        // SAFETY: `raw_window` stays valid while the window lives; the caller
        // drops `Gpu` before the window.
        let surface = unsafe { display.create_window_surface(&config, &surface_attrs) }
            .context("unable to create EGL surface")?;

        let context_attrs = ContextAttributesBuilder::new()
            .with_context_api(ContextApi::Gles(Some(Version::new(
                init.gles_major,
                init.gles_minor,
            ))))
            .build(Some(raw_window));
        // SAFETY: config and attributes belong to this display.
        let context = unsafe { display.create_context(&config, &context_attrs) }
            .context("unable to create EGL context")?
            .make_current(&surface)
            .context("unable to make EGL context current")?;

        let interval = if init.vsync {
            SwapInterval::Wait(NonZeroU32::MIN)
        } else {
            SwapInterval::DontWait
        };
        if let Err(e) = surface.set_swap_interval(&context, interval) {
            // Some drivers reject interval changes; frames are then paced
            // by whatever the driver defaults to, possibly not at all.
            log::warn!("failed to set swap interval, frame rate may be unthrottled: {e}");
        }

        // SAFETY: the context is current on this thread.
        let gl = unsafe {
            glow::Context::from_loader_function_cstr(|name: &CStr| display.get_proc_address(name))
        };
        log::debug!("GL context ready ({}x{})", size.width, size.height);

        Ok(Self {
            gl,
            context: ManuallyDrop::new(context),
            surface: ManuallyDrop::new(surface),
            display: ManuallyDrop::new(display),
            size,
        })
    }

    /// GL entry points for the current context.
    pub fn gl(&self) -> &glow::Context {
        &self.gl
    }

    /// EGL vendor/version string.
    pub fn egl_version(&self) -> String {
        self.display.version_string()
    }

    /// Current drawable size in physical pixels.
    pub fn size(&self) -> PhysicalSize<u32> {
        self.size
    }

    /// Resizes the EGL surface. Zero sizes are recorded but not applied.
    pub fn resize(&mut self, new_size: PhysicalSize<u32>) {
        self.size = new_size;
        if let Some((w, h)) = non_zero_size(new_size) {
            self.surface.resize(&*self.context, w, h);
        }
    }

    /// Presents the back buffer.
    pub fn swap_buffers(&self) -> Result<()> {
        self.surface
            .swap_buffers(&*self.context)
            .context("eglSwapBuffers failed")
    }
}

impl Drop for Gpu {
    fn drop(&mut self) {
        // SAFETY: each field is taken exactly once and never touched again.
        let (context, surface, display) = unsafe {
            (
                ManuallyDrop::take(&mut self.context),
                ManuallyDrop::take(&mut self.surface),
                ManuallyDrop::take(&mut self.display),
            )
        };

        release_in_order(
            || {
                if let Err(e) = context.make_not_current() {
                    log::warn!("failed to release EGL context: {e}");
                }
            },
            surface,
            display,
            |display| {
                // SAFETY: the context and surface created on this display are
                // gone and nothing else in the process uses it.
                unsafe { display.terminate() };
                log::debug!("EGL display terminated");
            },
        );
    }
}

/// Teardown sequence: context, then surface, then display termination.
fn release_in_order<S, D>(
    release_context: impl FnOnce(),
    surface: S,
    display: D,
    terminate: impl FnOnce(D),
) {
    release_context();
    drop(surface);
    terminate(display);
}

fn non_zero_size(size: PhysicalSize<u32>) -> Option<(NonZeroU32, NonZeroU32)> {
    Some((NonZeroU32::new(size.width)?, NonZeroU32::new(size.height)?))
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::RefCell;

    struct Tracked<'a>(&'static str, &'a RefCell<Vec<&'static str>>);

    impl Drop for Tracked<'_> {
        fn drop(&mut self) {
            self.1.borrow_mut().push(self.0);
        }
    }

    #[test]
    fn teardown_terminates_display_last() {
        let log = RefCell::new(Vec::new());
        let context = Tracked("context", &log);
        let surface = Tracked("surface", &log);
        let display = Tracked("display", &log);

        release_in_order(
            move || drop(context),
            surface,
            display,
            |d| {
                log.borrow_mut().push("terminate");
                drop(d);
            },
        );

        assert_eq!(*log.borrow(), vec!["context", "surface", "terminate", "display"]);
    }

    #[test]
    fn zero_dimensions_are_rejected() {
        assert!(non_zero_size(PhysicalSize::new(0, 400)).is_none());
        assert!(non_zero_size(PhysicalSize::new(600, 0)).is_none());
    }

    #[test]
    fn non_zero_dimensions_pass_through() {
        let (w, h) = non_zero_size(PhysicalSize::new(600, 400)).unwrap();
        assert_eq!((w.get(), h.get()), (600, 400));
    }
}
