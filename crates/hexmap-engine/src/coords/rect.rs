use super::Vec2;

/// Axis-aligned box in logical pixels, stored as inclusive-min / exclusive-max corners.
///
/// Used for culling, so every query tolerates inverted corners.
#[derive(Debug, Copy, Clone, Default, PartialEq)]
pub struct Rect {
    pub min: Vec2,
    pub max: Vec2,
}

impl Rect {
    #[inline]
    pub const fn new(x: f32, y: f32, w: f32, h: f32) -> Self {
        Self {
            min: Vec2::new(x, y),
            max: Vec2::new(x + w, y + h),
        }
    }

    #[inline]
    pub const fn from_corners(min: Vec2, max: Vec2) -> Self {
        Self { min, max }
    }

    /// Tight bounds of a point set; `None` when empty.
    pub fn from_points<I>(points: I) -> Option<Self>
    where
        I: IntoIterator<Item = Vec2>,
    {
        let mut it = points.into_iter();
        let first = it.next()?;
        Some(it.fold(Self::from_corners(first, first), |r, p| Self {
            min: Vec2::new(r.min.x.min(p.x), r.min.y.min(p.y)),
            max: Vec2::new(r.max.x.max(p.x), r.max.y.max(p.y)),
        }))
    }

    /// Square bounding box of a circle.
    #[inline]
    pub fn around_circle(center: Vec2, radius: f32) -> Self {
        let r = Vec2::new(radius.abs(), radius.abs());
        Self::from_corners(center - r, center + r)
    }

    #[inline]
    pub fn width(self) -> f32 {
        (self.max.x - self.min.x).abs()
    }

    #[inline]
    pub fn height(self) -> f32 {
        (self.max.y - self.min.y).abs()
    }

    #[inline]
    pub fn is_finite(self) -> bool {
        self.min.is_finite() && self.max.is_finite()
    }

    /// Swaps inverted corners.
    pub fn sorted(self) -> Self {
        Self {
            min: Vec2::new(self.min.x.min(self.max.x), self.min.y.min(self.max.y)),
            max: Vec2::new(self.min.x.max(self.max.x), self.min.y.max(self.max.y)),
        }
    }

    /// `min <= p < max` on both axes.
    pub fn contains(self, p: Vec2) -> bool {
        let r = self.sorted();
        (r.min.x..r.max.x).contains(&p.x) && (r.min.y..r.max.y).contains(&p.y)
    }

    /// Shared area is non-zero. Touching edges do not count.
    pub fn overlaps(self, other: Rect) -> bool {
        let (a, b) = (self.sorted(), other.sorted());
        a.min.x < b.max.x && b.min.x < a.max.x && a.min.y < b.max.y && b.min.y < a.max.y
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn v(x: f32, y: f32) -> Vec2 { Vec2::new(x, y) }

    // ── construction ──────────────────────────────────────────────────────

    #[test]
    fn new_takes_origin_and_size() {
        let r = Rect::new(1.0, 2.0, 10.0, 20.0);
        assert_eq!(r.min, v(1.0, 2.0));
        assert_eq!(r.max, v(11.0, 22.0));
        assert_eq!((r.width(), r.height()), (10.0, 20.0));
    }

    #[test]
    fn from_points_spans_all_points() {
        let r = Rect::from_points([v(1.0, 5.0), v(-2.0, 3.0), v(4.0, -1.0)]);
        assert_eq!(r, Some(Rect::from_corners(v(-2.0, -1.0), v(4.0, 5.0))));
        assert_eq!(Rect::from_points(std::iter::empty()), None);
    }

    #[test]
    fn around_circle_is_centered() {
        let b = Rect::around_circle(v(50.0, 40.0), 10.0);
        assert_eq!(b, Rect::new(40.0, 30.0, 20.0, 20.0));
    }

    // ── queries ───────────────────────────────────────────────────────────

    #[test]
    fn contains_is_half_open() {
        let r = Rect::new(0.0, 0.0, 10.0, 10.0);
        assert!(r.contains(v(0.0, 0.0)));
        assert!(!r.contains(v(10.0, 10.0)));
    }

    #[test]
    fn inverted_corners_still_contain() {
        let r = Rect::from_corners(v(10.0, 10.0), v(0.0, 0.0));
        assert!(r.contains(v(5.0, 5.0)));
    }

    #[test]
    fn overlaps_partial() {
        assert!(Rect::new(0.0, 0.0, 10.0, 10.0).overlaps(Rect::new(5.0, 5.0, 10.0, 10.0)));
    }

    #[test]
    fn touching_edges_do_not_overlap() {
        assert!(!Rect::new(0.0, 0.0, 10.0, 10.0).overlaps(Rect::new(10.0, 0.0, 10.0, 10.0)));
    }

    #[test]
    fn circle_far_outside_does_not_overlap() {
        let screen = Rect::new(0.0, 0.0, 1200.0, 1000.0);
        assert!(!screen.overlaps(Rect::around_circle(v(5600.0, 500.0), 100.0)));
        assert!(screen.overlaps(Rect::around_circle(v(-50.0, 500.0), 100.0)));
    }
}
