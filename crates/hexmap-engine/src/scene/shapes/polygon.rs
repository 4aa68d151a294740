use crate::coords::{Rect, Vec2};
use crate::paint::Color;
use crate::scene::{DrawCmd, DrawList, ZIndex};

use super::Border;

/// Convex polygon draw payload.
///
/// Points are in logical pixels, in winding order (either direction). The
/// renderer fans the fill from the first point, so only convex outlines are
/// filled correctly.
#[derive(Debug, Clone, PartialEq)]
pub struct PolygonCmd {
    pub points: Vec<Vec2>,
    pub fill: Option<Color>,
    pub border: Option<Border>,
}

impl PolygonCmd {
    #[inline]
    pub fn new(points: Vec<Vec2>, fill: Option<Color>, border: Option<Border>) -> Self {
        Self { points, fill, border }
    }

    /// Axis-aligned bounds of the outline (ignores border width).
    pub fn bounds(&self) -> Option<Rect> {
        Rect::from_points(self.points.iter().copied())
    }

    /// True when there is nothing to rasterize.
    #[inline]
    pub fn is_degenerate(&self) -> bool {
        self.points.len() < 3 || (self.fill.is_none() && self.border.is_none())
    }
}

impl DrawList {
    /// Records a polygon draw command.
    #[inline]
    pub fn push_polygon(
        &mut self,
        z: ZIndex,
        points: &[Vec2],
        fill: Option<Color>,
        border: Option<Border>,
    ) {
        self.push(z, DrawCmd::Polygon(PolygonCmd::new(points.to_vec(), fill, border)));
    }

    /// Records a filled polygon without an outline.
    #[inline]
    pub fn push_filled_polygon(&mut self, z: ZIndex, points: &[Vec2], color: Color) {
        self.push_polygon(z, points, Some(color), None);
    }
}
