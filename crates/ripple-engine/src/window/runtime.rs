use anyhow::{Context, Result};
use raw_window_handle::{HasDisplayHandle, HasWindowHandle};

use winit::application::ApplicationHandler;
use winit::event::WindowEvent;
use winit::event_loop::{ActiveEventLoop, ControlFlow, EventLoop};
use winit::window::{Fullscreen, Window, WindowId};

use crate::core::{App, AppControl, FrameCtx};
use crate::device::{GlInit, Gpu};
use crate::input::platform::winit::translate_window_event;
use crate::input::{InputFrame, InputState};
use crate::time::{FpsCounter, FrameClock};

use super::{x11, RuntimeConfig};

/// Entry point for the runtime.
pub struct Runtime;

impl Runtime {
    /// Opens the window, runs `app` until it asks to exit, then tears down.
    ///
    /// Any startup failure (display, window, hints, EGL, shaders) is
    /// returned as the error; the loop has no recovery path.
    pub fn run<A>(config: RuntimeConfig, gl_init: GlInit, app: A) -> Result<()>
    where
        A: 'static + App,
    {
        let event_loop = EventLoop::new().context("cannot connect to display server")?;
        event_loop.set_control_flow(ControlFlow::Poll);

        let mut state = AppState::new(config, gl_init, app);

        event_loop
            .run_app(&mut state)
            .context("winit event loop terminated with error")?;

        state.finish()
    }
}

/// Everything bound to the open window.
///
/// Field order is drop order: GL state goes before the window it renders to.
struct WindowEntry {
    input_state: InputState,
    input_frame: InputFrame,
    clock: FrameClock,
    fps: FpsCounter,

    gpu: Gpu,
    window: Window,
}

struct AppState<A>
where
    A: App + 'static,
{
    config: RuntimeConfig,
    gl_init: GlInit,
    app: A,

    entry: Option<WindowEntry>,
    started: bool,
    fatal: Option<anyhow::Error>,
}

impl<A> AppState<A>
where
    A: App + 'static,
{
    fn new(config: RuntimeConfig, gl_init: GlInit, app: A) -> Self {
        Self {
            config,
            gl_init,
            app,
            entry: None,
            started: false,
            fatal: None,
        }
    }

    fn fail(&mut self, event_loop: &ActiveEventLoop, err: anyhow::Error) {
        log::error!("{err:#}");
        if self.fatal.is_none() {
            self.fatal = Some(err);
        }
        event_loop.exit();
    }

    fn finish(mut self) -> Result<()> {
        self.shutdown();
        match self.fatal.take() {
            Some(err) => Err(err),
            None => Ok(()),
        }
    }

    fn create_entry(&mut self, event_loop: &ActiveEventLoop) -> Result<WindowEntry> {
        let on_x11 = event_loop
            .display_handle()
            .map(|h| x11::is_x11(h.as_raw()))
            .unwrap_or(false);

        let mut attrs = Window::default_attributes()
            .with_title(self.config.title.clone())
            .with_inner_size(self.config.initial_size)
            // Hints must be on the window before it is mapped.
            .with_visible(false);

        if self.config.needs_winit_fullscreen(on_x11) {
            attrs = attrs.with_fullscreen(Some(Fullscreen::Borderless(None)));
        }

        let window = event_loop
            .create_window(attrs)
            .context("failed to create window")?;

        if on_x11 {
            let raw = window
                .window_handle()
                .context("window has no native handle")?
                .as_raw();
            let id = x11::window_id(raw).context("X11 display without an X11 window")?;
            x11::apply_hints(id, self.config.hints)?;
        } else if self.config.hints.any() {
            log::debug!("not running on X11; window hints skipped");
        }

        window.set_visible(true);

        let gpu = Gpu::new(&window, &self.gl_init)?;
        log::info!("EGL {}", gpu.egl_version());

        self.app.init(gpu.gl())?;

        Ok(WindowEntry {
            input_state: InputState::default(),
            input_frame: InputFrame::default(),
            clock: FrameClock::default(),
            fps: FpsCounter::new(self.config.fps_report_every),
            gpu,
            window,
        })
    }

    /// Releases app resources, then GL, then the window.
    fn shutdown(&mut self) {
        if let Some(entry) = self.entry.take() {
            self.app.teardown(entry.gpu.gl());
            log::info!("rendered {} frames", entry.fps.frames());
            drop(entry);
        }
    }

    fn render_frame(&mut self, event_loop: &ActiveEventLoop) {
        let Some(entry) = self.entry.as_mut() else {
            return;
        };

        let time = entry.clock.tick();
        let size = entry.gpu.size();

        let control = {
            let mut ctx = FrameCtx {
                gl: entry.gpu.gl(),
                size: (size.width, size.height),
                time,
                input: &entry.input_state,
                input_frame: &entry.input_frame,
            };
            self.app.on_frame(&mut ctx)
        };

        entry.window.pre_present_notify();
        if let Err(e) = entry.gpu.swap_buffers() {
            self.fail(event_loop, e);
            return;
        }

        if let Some(fps) = entry.fps.record_frame() {
            println!("fps: {fps:.6}");
        }

        entry.input_frame.clear();

        if control == AppControl::Exit {
            event_loop.exit();
        }
    }
}

impl<A> ApplicationHandler for AppState<A>
where
    A: App + 'static,
{
    fn resumed(&mut self, event_loop: &ActiveEventLoop) {
        if self.started {
            return;
        }
        self.started = true;

        match self.create_entry(event_loop) {
            Ok(entry) => {
                entry.window.request_redraw();
                self.entry = Some(entry);
            }
            Err(e) => self.fail(event_loop, e),
        }
    }

    fn about_to_wait(&mut self, _event_loop: &ActiveEventLoop) {
        // Render unconditionally; swap_buffers paces the loop.
        if let Some(entry) = &self.entry {
            entry.window.request_redraw();
        }
    }

    fn window_event(
        &mut self,
        event_loop: &ActiveEventLoop,
        window_id: WindowId,
        event: WindowEvent,
    ) {
        let Some(entry) = self.entry.as_mut() else {
            return;
        };
        if entry.window.id() != window_id {
            return;
        }

        if let Some(ev) = translate_window_event(&event) {
            entry
                .input_state
                .apply_event(&mut entry.input_frame, ev.clone());

            if self.app.on_input(&ev, &entry.input_state) == AppControl::Exit {
                event_loop.exit();
                return;
            }
        }

        match event {
            WindowEvent::CloseRequested => event_loop.exit(),

            WindowEvent::Resized(new_size) => entry.gpu.resize(new_size),

            WindowEvent::ScaleFactorChanged { .. } => {
                let new_size = entry.window.inner_size();
                entry.gpu.resize(new_size);
            }

            WindowEvent::RedrawRequested => self.render_frame(event_loop),

            _ => {}
        }
    }

    fn exiting(&mut self, _event_loop: &ActiveEventLoop) {
        self.shutdown();
    }
}
