use winit::dpi::LogicalSize;

use hexmap_engine::coords::Viewport;
use hexmap_engine::core::{App as EngineApp, AppControl, FrameCtx};
use hexmap_engine::device::GpuInit;
use hexmap_engine::input::InputEvent;
use hexmap_engine::render::shapes::polygon::PolygonRenderer;
use hexmap_engine::scene::DrawList;
use hexmap_engine::window::{Runtime, RuntimeConfig};

use crate::config::MapConfig;
use crate::map::HexMap;

// ── Application ───────────────────────────────────────────────────────────

/// Top-level builder: configure the window and the map, then start the event loop.
///
/// ```rust,ignore
/// Application::new()
///     .title("HexMap")
///     .size(1200.0, 1000.0)
///     .run()?;
/// ```
pub struct Application {
    title:  String,
    width:  f64,
    height: f64,
    config: MapConfig,
    gpu:    GpuInit,
}

impl Application {
    pub fn new() -> Self {
        Self {
            title:  "hexmap".to_string(),
            width:  1200.0,
            height: 1000.0,
            config: MapConfig::default(),
            gpu:    GpuInit::default(),
        }
    }

    /// Set the window title.
    pub fn title(mut self, t: impl Into<String>) -> Self {
        self.title = t.into();
        self
    }

    /// Set the initial window size in logical pixels.
    pub fn size(mut self, width: f64, height: f64) -> Self {
        self.width  = width;
        self.height = height;
        self
    }

    /// Replace the map configuration.
    pub fn config(mut self, config: MapConfig) -> Self {
        self.config = config;
        self
    }

    /// Override surface/device preferences.
    pub fn gpu(mut self, gpu: GpuInit) -> Self {
        self.gpu = gpu;
        self
    }

    /// Start the event loop. Returns once the window is closed.
    ///
    /// Errors come from the platform layer only (event loop, window, GPU).
    pub fn run(self) -> anyhow::Result<()> {
        let config = RuntimeConfig {
            title:        self.title,
            initial_size: LogicalSize::new(self.width, self.height),
        };
        log::info!(
            "starting \"{}\" at {}x{}",
            config.title, config.initial_size.width, config.initial_size.height
        );
        let state = MapAppState::new(HexMap::new(self.config));
        Runtime::run(config, self.gpu, state)
    }
}

impl Default for Application {
    fn default() -> Self {
        Self::new()
    }
}

// ── MapAppState ───────────────────────────────────────────────────────────

/// Engine-facing state: the map plus the renderer and a reused draw list.
struct MapAppState {
    map:              HexMap,
    draw_list:        DrawList,
    polygon_renderer: PolygonRenderer,
}

impl MapAppState {
    fn new(map: HexMap) -> Self {
        Self {
            map,
            draw_list:        DrawList::new(),
            polygon_renderer: PolygonRenderer::new(),
        }
    }
}

impl EngineApp for MapAppState {
    fn on_input(&mut self, event: &InputEvent) -> AppControl {
        self.map.handle_input(event);
        AppControl::Continue
    }

    fn on_resize(&mut self, viewport: Viewport) {
        self.map.resize(viewport);
    }

    fn on_frame(&mut self, ctx: &mut FrameCtx<'_, '_>) -> AppControl {
        let viewport = ctx.window.viewport();

        self.draw_list.clear();
        self.map.paint(&mut self.draw_list, viewport);

        if ctx.time.frame_index % 600 == 0 {
            log::trace!(
                "frame {}: {} tiles, {} drawn, {:.0} fps",
                ctx.time.frame_index,
                self.map.grid().len(),
                self.draw_list.len(),
                ctx.time.fps()
            );
        }

        let background = self.map.config().background;
        let dl = &mut self.draw_list;
        let renderer = &mut self.polygon_renderer;
        ctx.render(background, |rctx, target| {
            renderer.render(rctx, target, dl);
        })
    }
}
