use anyhow::{Context, Result};
use ouroboros::self_referencing;
use winit::application::ApplicationHandler;
use winit::dpi::LogicalSize;
use winit::event::WindowEvent;
use winit::event_loop::{ActiveEventLoop, ControlFlow, EventLoop};
use winit::window::{Window, WindowId};

use crate::coords::Viewport;
use crate::core::{logical_viewport, App, AppControl, FrameCtx, WindowCtx};
use crate::device::{Gpu, GpuInit};
use crate::input::InputState;
use crate::time::FrameClock;

use super::translate::translate;

#[derive(Debug, Clone)]
pub struct RuntimeConfig {
    pub title: String,
    pub initial_size: LogicalSize<f64>,
}

impl Default for RuntimeConfig {
    fn default() -> Self {
        Self {
            title: "hexmap".to_string(),
            initial_size: LogicalSize::new(1200.0, 1000.0),
        }
    }
}

pub struct Runtime;

impl Runtime {
    /// Opens the window and blocks until it is closed or `app` asks to exit.
    ///
    /// Errors are platform failures: no event loop, no window, no usable GPU.
    pub fn run<A>(config: RuntimeConfig, gpu_init: GpuInit, app: A) -> Result<()>
    where
        A: App + 'static,
    {
        let event_loop = EventLoop::new().context("failed to create winit EventLoop")?;
        let mut handler = Handler {
            config,
            gpu_init,
            app,
            surface: None,
            failure: None,
        };
        event_loop
            .run_app(&mut handler)
            .context("winit event loop terminated with error")?;

        handler.failure.map_or(Ok(()), Err)
    }
}

/// A window together with the GPU context borrowing it.
#[self_referencing]
struct WindowSurface {
    input: InputState,
    clock: FrameClock,
    window: Window,
    #[borrows(window)]
    #[covariant]
    gpu: Gpu<'this>,
}

impl WindowSurface {
    fn open(event_loop: &ActiveEventLoop, config: &RuntimeConfig, init: GpuInit) -> Result<Self> {
        let attrs = Window::default_attributes()
            .with_title(config.title.as_str())
            .with_inner_size(config.initial_size);
        let window = event_loop
            .create_window(attrs)
            .context("failed to create window")?;

        WindowSurfaceTryBuilder {
            input: InputState::default(),
            clock: FrameClock::default(),
            window,
            gpu_builder: |w| pollster::block_on(Gpu::new(w, init)),
        }
        .try_build()
        .context("GPU initialization failed for window")
    }

    fn request_redraw(&self) {
        self.with_window(|w| w.request_redraw());
    }

    /// Follows a new physical size and reports the new logical one.
    fn resized(&mut self) -> Viewport {
        self.with_mut(|f| {
            f.gpu.resize(f.window.inner_size());
            logical_viewport(f.window)
        })
    }
}

struct Handler<A> {
    config: RuntimeConfig,
    gpu_init: GpuInit,
    app: A,
    surface: Option<WindowSurface>,
    /// Startup error, returned from `Runtime::run` once the loop has stopped.
    failure: Option<anyhow::Error>,
}

impl<A: App> Handler<A> {
    fn shutdown(&mut self, event_loop: &ActiveEventLoop) {
        self.surface = None;
        event_loop.exit();
    }

    fn frame(&mut self) -> AppControl {
        let (Some(surface), app) = (self.surface.as_mut(), &mut self.app) else {
            return AppControl::Continue;
        };
        surface.with_mut(|f| {
            let mut ctx = FrameCtx {
                window: WindowCtx { window: f.window },
                gpu: f.gpu,
                time: f.clock.tick(),
            };
            app.on_frame(&mut ctx)
        })
    }

    /// Forwards `event` to the app, if it is an input event.
    fn input(&mut self, event: &WindowEvent) -> AppControl {
        let (Some(surface), app) = (self.surface.as_mut(), &mut self.app) else {
            return AppControl::Continue;
        };
        surface.with_mut(|f| {
            match translate(event, f.window.scale_factor(), f.input) {
                Some(ev) => {
                    f.input.track(&ev);
                    app.on_input(&ev)
                }
                None => AppControl::Continue,
            }
        })
    }
}

impl<A: App + 'static> ApplicationHandler for Handler<A> {
    fn resumed(&mut self, event_loop: &ActiveEventLoop) {
        if self.surface.is_some() {
            return;
        }
        match WindowSurface::open(event_loop, &self.config, self.gpu_init.clone()) {
            Ok(surface) => {
                let viewport = surface.with_window(|w| logical_viewport(w));
                log::info!(
                    "window '{}' open at {}x{}",
                    self.config.title,
                    viewport.width,
                    viewport.height
                );
                self.app.on_resize(viewport);
                surface.request_redraw();
                self.surface = Some(surface);
            }
            Err(e) => {
                log::error!("startup failed: {e:#}");
                self.failure = Some(e);
                self.shutdown(event_loop);
            }
        }
    }

    fn about_to_wait(&mut self, event_loop: &ActiveEventLoop) {
        // Redraw continuously; FIFO presentation paces the loop.
        event_loop.set_control_flow(ControlFlow::Wait);
        if let Some(surface) = &self.surface {
            surface.request_redraw();
        }
    }

    fn window_event(&mut self, event_loop: &ActiveEventLoop, _id: WindowId, event: WindowEvent) {
        if self.input(&event) == AppControl::Exit {
            self.shutdown(event_loop);
            return;
        }

        match event {
            WindowEvent::CloseRequested => {
                log::info!("window closed");
                self.shutdown(event_loop);
            }
            WindowEvent::Resized(_) | WindowEvent::ScaleFactorChanged { .. } => {
                if let Some(surface) = self.surface.as_mut() {
                    let viewport = surface.resized();
                    self.app.on_resize(viewport);
                    surface.request_redraw();
                }
            }
            WindowEvent::RedrawRequested => {
                if self.frame() == AppControl::Exit {
                    log::info!("app requested exit");
                    self.shutdown(event_loop);
                }
            }
            _ => {}
        }
    }
}
