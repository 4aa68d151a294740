//! The application context: grid, view and gesture state in one owner.

use hexmap_engine::coords::{Rect, Vec2, Viewport};
use hexmap_engine::input::InputEvent;
use hexmap_engine::scene::shapes::Border;
use hexmap_engine::scene::{DrawList, ZIndex};

use crate::config::MapConfig;
use crate::controller::{InputController, MapAction};
use crate::grid::HexGrid;
use crate::hex::Hex;
use crate::view::ViewTransform;

const TILE_LAYER: ZIndex = ZIndex::new(0);

/// All mutable map state.
#[derive(Debug, Clone)]
pub struct HexMap {
    grid: HexGrid,
    view: ViewTransform,
    controller: InputController,
    config: MapConfig,
}

impl HexMap {
    pub fn new(config: MapConfig) -> Self {
        let layout = config.layout();
        let palette = config.palette.clone();
        let grid = if config.origin_tile {
            HexGrid::with_origin_tile(layout, palette)
        } else {
            HexGrid::new(layout, palette)
        };
        Self {
            grid,
            view: ViewTransform::default().with_zoom_bounds(config.min_zoom, config.max_zoom),
            controller: InputController::new(
                config.drag_threshold,
                config.zoom_in_step,
                config.zoom_out_step,
            ),
            config,
        }
    }

    #[inline]
    pub fn grid(&self) -> &HexGrid {
        &self.grid
    }

    #[inline]
    pub fn view(&self) -> &ViewTransform {
        &self.view
    }

    #[inline]
    pub fn controller(&self) -> &InputController {
        &self.controller
    }

    #[inline]
    pub fn config(&self) -> &MapConfig {
        &self.config
    }

    /// Re-centers the view pivot on the new viewport.
    pub fn resize(&mut self, viewport: Viewport) {
        if viewport.is_valid() {
            self.view.set_pivot(viewport.center());
        }
    }

    /// Routes one input event through the controller and applies the result.
    pub fn handle_input(&mut self, event: &InputEvent) {
        if let Some(action) = self.controller.handle(event, &self.view) {
            self.apply(action);
        }
    }

    pub fn apply(&mut self, action: MapAction) {
        match action {
            MapAction::Click(screen) => {
                let hex = self.grid.tile_at(screen, &self.view);
                let color = self.grid.click(hex);
                log::debug!("tile ({}, {}) -> {:?}", hex.q, hex.r, color);
            }
            MapAction::Pan(d) => self.view.pan(d.x, d.y),
            MapAction::Rotate(d) => self.view.rotate(d),
            MapAction::Zoom(f) => self.view.zoom_by(f),
            MapAction::Reset => {
                self.view.reset();
                log::debug!("view reset");
            }
        }
    }

    /// Records every visible tile as a filled, outlined hexagon in screen space.
    ///
    /// Tiles are emitted in `(q, r)` order so frames are deterministic.
    pub fn paint(&self, draw_list: &mut DrawList, viewport: Viewport) {
        let screen = viewport.bounds();
        let layout = self.grid.layout();
        let radius = layout.circumradius() * self.view.zoom() + self.config.outline_width;
        let border = Border::new(self.config.outline_width, self.config.outline);

        let mut tiles: Vec<(Hex, _)> = self.grid.iter().collect();
        tiles.sort_unstable_by_key(|(h, _)| *h);

        for (hex, tile) in tiles {
            let center = self.view.to_screen(layout.hex_to_pixel(hex));
            if !screen.overlaps(Rect::around_circle(center, radius)) {
                continue;
            }
            let corners: [Vec2; 6] = layout.corners(hex).map(|c| self.view.to_screen(c));
            draw_list.push_polygon(TILE_LAYER, &corners, Some(tile.color.to_color()), Some(border));
        }
    }
}

impl Default for HexMap {
    fn default() -> Self {
        Self::new(MapConfig::default())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use hexmap_engine::input::{MouseButton, MouseButtonState, PointerButtonEvent, PointerMoveEvent};
    use hexmap_engine::scene::DrawCmd;

    fn viewport() -> Viewport {
        Viewport::new(1200.0, 1000.0)
    }

    fn map() -> HexMap {
        let mut m = HexMap::new(MapConfig { origin_tile: false, ..MapConfig::default() });
        m.resize(viewport());
        m
    }

    fn button(button: MouseButton, state: MouseButtonState, x: f32, y: f32) -> InputEvent {
        InputEvent::PointerButton(PointerButtonEvent { button, state, x, y })
    }

    fn click(m: &mut HexMap, x: f32, y: f32) {
        m.handle_input(&button(MouseButton::Left, MouseButtonState::Pressed, x, y));
        m.handle_input(&button(MouseButton::Left, MouseButtonState::Released, x, y));
    }

    fn drag(m: &mut HexMap, b: MouseButton, from: (f32, f32), to: (f32, f32)) {
        m.handle_input(&button(b, MouseButtonState::Pressed, from.0, from.1));
        m.handle_input(&InputEvent::PointerMoved(PointerMoveEvent { x: to.0, y: to.1 }));
        m.handle_input(&button(b, MouseButtonState::Released, to.0, to.1));
    }

    // ── scenarios ─────────────────────────────────────────────────────────

    #[test]
    fn click_creates_tile_then_cycles_color() {
        let mut m = map();
        let palette = m.config().palette.clone();

        click(&mut m, 600.0, 500.0);
        assert_eq!(m.grid().color_of(Hex::ORIGIN), Some(palette.first()));

        click(&mut m, 600.0, 500.0);
        assert_eq!(m.grid().color_of(Hex::ORIGIN), Some(palette.colors()[1]));
        assert_eq!(m.grid().len(), 1);
    }

    #[test]
    fn click_on_neighbor_creates_second_tile() {
        let mut m = map();
        let center = m.grid().layout().hex_to_pixel(Hex::new(1, 0));
        let screen = m.view().to_screen(center);
        click(&mut m, screen.x, screen.y);
        assert!(m.grid().color_of(Hex::new(1, 0)).is_some());
        assert!(m.grid().color_of(Hex::ORIGIN).is_none());
    }

    #[test]
    fn left_drag_pans_without_editing() {
        let mut m = map();
        drag(&mut m, MouseButton::Left, (100.0, 100.0), (150.0, 120.0));
        assert_eq!(m.view().pan_offset(), Vec2::new(50.0, 20.0));
        assert!(m.grid().is_empty());
    }

    #[test]
    fn left_drag_pan_is_divided_by_zoom() {
        let mut m = map();
        m.apply(MapAction::Zoom(2.0));
        drag(&mut m, MouseButton::Left, (100.0, 100.0), (150.0, 120.0));
        assert_eq!(m.view().pan_offset(), Vec2::new(25.0, 10.0));
    }

    #[test]
    fn middle_click_resets_view() {
        let mut m = map();
        drag(&mut m, MouseButton::Left, (100.0, 100.0), (300.0, 250.0));
        drag(&mut m, MouseButton::Right, (700.0, 500.0), (600.0, 600.0));
        m.apply(MapAction::Zoom(3.0));

        m.handle_input(&button(MouseButton::Middle, MouseButtonState::Pressed, 10.0, 10.0));
        m.handle_input(&button(MouseButton::Middle, MouseButtonState::Released, 10.0, 10.0));

        assert_eq!(m.view().pan_offset(), Vec2::zero());
        assert_eq!(m.view().rotation(), 0.0);
        assert_eq!(m.view().zoom(), 1.0);
    }

    #[test]
    fn click_after_rotation_hits_the_tile_under_cursor() {
        let mut m = map();
        drag(&mut m, MouseButton::Right, (700.0, 500.0), (650.0, 580.0));
        let target = Hex::new(2, -1);
        let screen = m.view().to_screen(m.grid().layout().hex_to_pixel(target));
        click(&mut m, screen.x, screen.y);
        assert!(m.grid().color_of(target).is_some());
    }

    // ── paint ─────────────────────────────────────────────────────────────

    #[test]
    fn paint_emits_one_polygon_per_visible_tile() {
        let mut m = map();
        m.apply(MapAction::Click(Vec2::new(600.0, 500.0)));
        m.apply(MapAction::Click(Vec2::new(600.0 + 173.0, 500.0)));

        let mut dl = DrawList::new();
        m.paint(&mut dl, viewport());
        assert_eq!(dl.len(), 2);
        let DrawCmd::Polygon(cmd) = &dl.items()[0].cmd;
        assert_eq!(cmd.points.len(), 6);
        assert!(cmd.fill.is_some());
    }

    #[test]
    fn paint_culls_offscreen_tiles() {
        let mut m = map();
        m.apply(MapAction::Click(Vec2::new(600.0, 500.0)));
        m.apply(MapAction::Pan(Vec2::new(5000.0, 0.0)));

        let mut dl = DrawList::new();
        m.paint(&mut dl, viewport());
        assert!(dl.is_empty());
    }

    #[test]
    fn painted_corners_follow_view() {
        let mut m = map();
        m.apply(MapAction::Click(Vec2::new(600.0, 500.0)));
        m.apply(MapAction::Zoom(0.5));

        let mut dl = DrawList::new();
        m.paint(&mut dl, viewport());
        let DrawCmd::Polygon(cmd) = &dl.items()[0].cmd;
        for p in &cmd.points {
            let d = (*p - Vec2::new(600.0, 500.0)).length();
            assert!((d - 50.0).abs() < 1e-3, "{d}");
        }
    }

    #[test]
    fn resize_moves_pivot_to_center() {
        let mut m = map();
        m.resize(Viewport::new(800.0, 600.0));
        assert_eq!(m.view().pivot(), Vec2::new(400.0, 300.0));
        m.resize(Viewport::new(0.0, 0.0));
        assert_eq!(m.view().pivot(), Vec2::new(400.0, 300.0));
    }

    #[test]
    fn default_map_starts_with_origin_tile() {
        assert_eq!(HexMap::default().grid().len(), 1);
    }
}
