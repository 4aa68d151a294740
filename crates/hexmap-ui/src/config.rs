use hexmap_engine::paint::Color;

use crate::controller::{DRAG_THRESHOLD, ZOOM_IN_STEP, ZOOM_OUT_STEP};
use crate::layout::{Layout, Orientation};
use crate::palette::Palette;
use crate::view::{MAX_ZOOM, MIN_ZOOM};

/// Map behavior and appearance.
#[derive(Debug, Clone)]
pub struct MapConfig {
    /// Hex center-to-corner distance in world units (screen px at zoom 1).
    pub hex_size: f32,
    pub orientation: Orientation,
    pub palette: Palette,

    /// See [`DRAG_THRESHOLD`].
    pub drag_threshold: f32,
    pub zoom_in_step: f32,
    pub zoom_out_step: f32,
    pub min_zoom: f32,
    pub max_zoom: f32,

    pub background: Color,
    pub outline: Color,
    /// Outline width in screen px; independent of zoom.
    pub outline_width: f32,

    /// Start with a tile at (0, 0).
    pub origin_tile: bool,
}

impl MapConfig {
    pub fn layout(&self) -> Layout {
        Layout::new(self.orientation, self.hex_size)
    }
}

impl Default for MapConfig {
    fn default() -> Self {
        Self {
            hex_size: 100.0,
            orientation: Orientation::POINTY,
            palette: Palette::default(),
            drag_threshold: DRAG_THRESHOLD,
            zoom_in_step: ZOOM_IN_STEP,
            zoom_out_step: ZOOM_OUT_STEP,
            min_zoom: MIN_ZOOM,
            max_zoom: MAX_ZOOM,
            background: Color::black(),
            outline: Color::from_srgb_u8(20, 20, 24, 255),
            outline_width: 2.0,
            origin_tile: true,
        }
    }
}
