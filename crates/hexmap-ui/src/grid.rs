//! Tile storage keyed by axial coordinate.

use std::collections::HashMap;

use hexmap_engine::coords::Vec2;

use crate::hex::Hex;
use crate::layout::Layout;
use crate::palette::{Palette, Rgb};
use crate::view::ViewTransform;

/// A placed hex tile.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub struct Tile {
    pub color: Rgb,
}

/// Hex layout plus the set of placed tiles.
#[derive(Debug, Clone)]
pub struct HexGrid {
    layout: Layout,
    palette: Palette,
    tiles: HashMap<Hex, Tile>,
}

impl HexGrid {
    /// Empty grid.
    pub fn new(layout: Layout, palette: Palette) -> Self {
        Self {
            layout,
            palette,
            tiles: HashMap::new(),
        }
    }

    /// Grid holding a single tile at the origin, so the first frame is not blank.
    pub fn with_origin_tile(layout: Layout, palette: Palette) -> Self {
        let mut grid = Self::new(layout, palette);
        let first = grid.palette.first();
        grid.set_color(Hex::ORIGIN, first);
        grid
    }

    #[inline]
    pub fn layout(&self) -> &Layout {
        &self.layout
    }

    #[inline]
    pub fn palette(&self) -> &Palette {
        &self.palette
    }

    /// Hex under a screen point, through the inverse view then the inverse layout.
    pub fn tile_at(&self, screen: Vec2, view: &ViewTransform) -> Hex {
        self.layout.pixel_to_hex(view.to_world(screen))
    }

    /// Inserts or recolors a tile.
    pub fn set_color(&mut self, hex: Hex, color: Rgb) {
        self.tiles.insert(hex, Tile { color });
    }

    /// `None` when no tile is placed at `hex`.
    pub fn color_of(&self, hex: Hex) -> Option<Rgb> {
        self.tiles.get(&hex).map(|t| t.color)
    }

    /// Places a tile with the first palette color, or advances an existing
    /// tile to the next palette color. Returns the resulting color.
    pub fn click(&mut self, hex: Hex) -> Rgb {
        let color = match self.color_of(hex) {
            Some(current) => self.palette.next_after(current),
            None => self.palette.first(),
        };
        self.set_color(hex, color);
        color
    }

    pub fn iter(&self) -> impl Iterator<Item = (Hex, &Tile)> {
        self.tiles.iter().map(|(h, t)| (*h, t))
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.tiles.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.tiles.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::layout::Orientation;

    fn grid() -> HexGrid {
        HexGrid::new(Layout::new(Orientation::POINTY, 100.0), Palette::default())
    }

    #[test]
    fn color_of_missing_tile_is_none() {
        assert_eq!(grid().color_of(Hex::new(4, 4)), None);
    }

    #[test]
    fn set_color_inserts_then_updates() {
        let mut g = grid();
        g.set_color(Hex::new(1, 2), Rgb(1, 1, 1));
        g.set_color(Hex::new(1, 2), Rgb(2, 2, 2));
        assert_eq!(g.len(), 1);
        assert_eq!(g.color_of(Hex::new(1, 2)), Some(Rgb(2, 2, 2)));
    }

    #[test]
    fn click_creates_then_cycles() {
        let mut g = grid();
        let p = g.palette().clone();
        assert_eq!(g.click(Hex::ORIGIN), p.first());
        assert_eq!(g.click(Hex::ORIGIN), p.colors()[1]);
        assert_eq!(g.len(), 1);
    }

    #[test]
    fn with_origin_tile_starts_with_one_tile() {
        let g = HexGrid::with_origin_tile(Layout::new(Orientation::POINTY, 100.0), Palette::default());
        assert_eq!(g.len(), 1);
        assert_eq!(g.color_of(Hex::ORIGIN), Some(g.palette().first()));
    }

    #[test]
    fn tile_at_hex_centers_under_default_view() {
        let g = grid();
        let view = ViewTransform::new(Vec2::new(600.0, 500.0));
        for q in -6..=6 {
            for r in -6..=6 {
                let h = Hex::new(q, r);
                let screen = view.to_screen(g.layout().hex_to_pixel(h));
                assert_eq!(g.tile_at(screen, &view), h);
            }
        }
    }

    #[test]
    fn tile_at_identity_view_uses_world_coordinates() {
        let g = grid();
        let view = ViewTransform::default();
        for q in -8..=8 {
            for r in -8..=8 {
                let h = Hex::new(q, r);
                assert_eq!(g.tile_at(g.layout().hex_to_pixel(h), &view), h);
            }
        }
    }

    #[test]
    fn tile_at_follows_rotated_zoomed_view() {
        let g = grid();
        let mut view = ViewTransform::new(Vec2::new(600.0, 500.0));
        view.pan(37.0, -12.0);
        view.rotate(0.8);
        view.zoom_by(0.6);
        for h in [Hex::new(0, 0), Hex::new(3, -1), Hex::new(-2, 5)] {
            let screen = view.to_screen(g.layout().hex_to_pixel(h));
            assert_eq!(g.tile_at(screen, &view), h);
        }
    }
}
