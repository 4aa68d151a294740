//! Hex ↔ world-space mapping.

use hexmap_engine::coords::Vec2;

use crate::hex::{FractionalHex, Hex};

const SQRT_3: f32 = 1.732_050_8;

/// Forward (`f*`) and inverse (`b*`) 2x2 matrices for one hex orientation,
/// plus the angle of the first corner in sixths of a turn.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct Orientation {
    pub f0: f32,
    pub f1: f32,
    pub f2: f32,
    pub f3: f32,
    pub b0: f32,
    pub b1: f32,
    pub b2: f32,
    pub b3: f32,
    pub start_angle: f32,
}

impl Orientation {
    /// Corners at top and bottom; rows of hexes are horizontal.
    pub const POINTY: Orientation = Orientation {
        f0: SQRT_3,
        f1: SQRT_3 / 2.0,
        f2: 0.0,
        f3: 3.0 / 2.0,
        b0: SQRT_3 / 3.0,
        b1: -1.0 / 3.0,
        b2: 0.0,
        b3: 2.0 / 3.0,
        start_angle: 0.5,
    };

    /// Flat edges at top and bottom; columns of hexes are vertical.
    pub const FLAT: Orientation = Orientation {
        f0: 3.0 / 2.0,
        f1: 0.0,
        f2: SQRT_3 / 2.0,
        f3: SQRT_3,
        b0: 2.0 / 3.0,
        b1: 0.0,
        b2: -1.0 / 3.0,
        b3: SQRT_3 / 3.0,
        start_angle: 0.0,
    };
}

/// Orientation + hex size + world origin.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct Layout {
    pub orientation: Orientation,
    /// Center-to-corner distance on each axis, in world units.
    pub size: Vec2,
    /// World position of hex (0, 0).
    pub origin: Vec2,
}

impl Layout {
    pub fn new(orientation: Orientation, size: f32) -> Self {
        Self {
            orientation,
            size: Vec2::new(size, size),
            origin: Vec2::zero(),
        }
    }

    /// World-space center of `hex`.
    pub fn hex_to_pixel(&self, hex: Hex) -> Vec2 {
        let m = &self.orientation;
        let (q, r) = (hex.q as f32, hex.r as f32);
        let x = (m.f0 * q + m.f1 * r) * self.size.x;
        let y = (m.f2 * q + m.f3 * r) * self.size.y;
        Vec2::new(x + self.origin.x, y + self.origin.y)
    }

    /// Fractional hex under a world-space point.
    pub fn pixel_to_fractional(&self, p: Vec2) -> FractionalHex {
        let m = &self.orientation;
        let pt = Vec2::new(
            (p.x - self.origin.x) / self.size.x,
            (p.y - self.origin.y) / self.size.y,
        );
        let q = m.b0 * pt.x + m.b1 * pt.y;
        let r = m.b2 * pt.x + m.b3 * pt.y;
        FractionalHex::new(q, r)
    }

    /// Hex containing a world-space point.
    #[inline]
    pub fn pixel_to_hex(&self, p: Vec2) -> Hex {
        self.pixel_to_fractional(p).round()
    }

    /// Offset of corner `i` (0..6) from a hex center.
    pub fn corner_offset(&self, corner: usize) -> Vec2 {
        let angle = core::f32::consts::FRAC_PI_3 * (self.orientation.start_angle - corner as f32);
        let (sin, cos) = angle.sin_cos();
        Vec2::new(self.size.x * cos, self.size.y * sin)
    }

    /// The six world-space corners of `hex`.
    pub fn corners(&self, hex: Hex) -> [Vec2; 6] {
        let center = self.hex_to_pixel(hex);
        core::array::from_fn(|i| center + self.corner_offset(i))
    }

    /// Center-to-corner distance, the radius of the circle enclosing a hex.
    #[inline]
    pub fn circumradius(&self) -> f32 {
        self.size.x.max(self.size.y)
    }
}
