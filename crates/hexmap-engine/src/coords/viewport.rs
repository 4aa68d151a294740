use super::{Rect, Vec2};

/// Drawable area in logical pixels. Shaders divide by this to reach NDC.
#[derive(Debug, Copy, Clone, Default, PartialEq)]
pub struct Viewport {
    pub width: f32,
    pub height: f32,
}

impl Viewport {
    #[inline]
    pub const fn new(width: f32, height: f32) -> Self {
        Self { width, height }
    }

    /// Non-zero and finite on both axes. Minimized windows report 0x0.
    #[inline]
    pub fn is_valid(self) -> bool {
        [self.width, self.height].iter().all(|d| d.is_finite() && *d > 0.0)
    }

    #[inline]
    pub fn center(self) -> Vec2 {
        Vec2::new(self.width, self.height) * 0.5
    }

    /// The whole viewport as a rectangle anchored at the origin.
    #[inline]
    pub fn bounds(self) -> Rect {
        Rect::new(0.0, 0.0, self.width, self.height)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn zero_sized_viewport_is_invalid() {
        assert!(!Viewport::new(0.0, 600.0).is_valid());
        assert!(!Viewport::new(800.0, f32::NAN).is_valid());
        assert!(Viewport::new(800.0, 600.0).is_valid());
    }

    #[test]
    fn center_and_bounds() {
        let vp = Viewport::new(1200.0, 1000.0);
        assert_eq!(vp.center(), Vec2::new(600.0, 500.0));
        assert_eq!(vp.bounds().max, Vec2::new(1200.0, 1000.0));
    }
}
