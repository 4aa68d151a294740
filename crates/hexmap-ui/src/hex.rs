//! Axial / cube hex coordinates.
//!
//! Axial `(q, r)` is the storage form; the third cube coordinate is always
//! `s = -q - r`.

use core::ops::{Add, Sub};

/// Integer axial coordinate of a single hex.
#[derive(Debug, Copy, Clone, Default, Eq, PartialEq, Hash, Ord, PartialOrd)]
pub struct Hex {
    pub q: i32,
    pub r: i32,
}

impl Hex {
    /// The six neighbor offsets, counter-clockwise starting from +q.
    pub const DIRECTIONS: [Hex; 6] = [
        Hex::new(1, 0),
        Hex::new(1, -1),
        Hex::new(0, -1),
        Hex::new(-1, 0),
        Hex::new(-1, 1),
        Hex::new(0, 1),
    ];

    pub const ORIGIN: Hex = Hex::new(0, 0);

    #[inline]
    pub const fn new(q: i32, r: i32) -> Self {
        Self { q, r }
    }

    #[inline]
    pub const fn s(self) -> i32 {
        -self.q - self.r
    }

    pub fn neighbors(self) -> [Hex; 6] {
        Self::DIRECTIONS.map(|d| self + d)
    }

    /// Number of steps between two hexes.
    pub fn distance(self, other: Hex) -> u32 {
        let d = self - other;
        (d.q.unsigned_abs() + d.r.unsigned_abs() + d.s().unsigned_abs()) / 2
    }
}

impl Add for Hex {
    type Output = Hex;
    #[inline]
    fn add(self, rhs: Hex) -> Hex {
        Hex::new(self.q + rhs.q, self.r + rhs.r)
    }
}

impl Sub for Hex {
    type Output = Hex;
    #[inline]
    fn sub(self, rhs: Hex) -> Hex {
        Hex::new(self.q - rhs.q, self.r - rhs.r)
    }
}

/// Real-valued cube coordinate, as produced by inverse layout mapping.
#[derive(Debug, Copy, Clone, Default, PartialEq)]
pub struct FractionalHex {
    pub q: f32,
    pub r: f32,
    pub s: f32,
}

impl FractionalHex {
    #[inline]
    pub fn new(q: f32, r: f32) -> Self {
        Self { q, r, s: -q - r }
    }

    /// The hex containing this point.
    ///
    /// Rounds each cube component, then recomputes the one with the largest
    /// rounding error from the other two so `q + r + s == 0` holds.
    pub fn round(self) -> Hex {
        let mut q = self.q.round();
        let mut r = self.r.round();
        let s = self.s.round();

        let dq = (q - self.q).abs();
        let dr = (r - self.r).abs();
        let ds = (s - self.s).abs();

        if dq > dr && dq > ds {
            q = -r - s;
        } else if dr > ds {
            r = -q - s;
        }

        Hex::new(q as i32, r as i32)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    // ── neighbors / distance ──────────────────────────────────────────────

    #[test]
    fn neighbors_are_all_at_distance_one() {
        let h = Hex::new(3, -7);
        for n in h.neighbors() {
            assert_eq!(h.distance(n), 1);
        }
    }

    #[test]
    fn neighbors_are_distinct() {
        let mut ns = Hex::ORIGIN.neighbors().to_vec();
        ns.sort();
        ns.dedup();
        assert_eq!(ns.len(), 6);
    }

    #[test]
    fn distance_along_diagonal() {
        assert_eq!(Hex::new(0, 0).distance(Hex::new(3, -3)), 3);
        assert_eq!(Hex::new(-2, 1).distance(Hex::new(2, 1)), 4);
    }

    #[test]
    fn cube_coordinates_sum_to_zero() {
        let h = Hex::new(5, -2);
        assert_eq!(h.q + h.r + h.s(), 0);
    }

    // ── round ─────────────────────────────────────────────────────────────

    #[test]
    fn round_exact_integers() {
        assert_eq!(FractionalHex::new(2.0, -1.0).round(), Hex::new(2, -1));
    }

    #[test]
    fn round_near_center() {
        assert_eq!(FractionalHex::new(1.1, -0.2).round(), Hex::new(1, 0));
    }

    #[test]
    fn round_fixes_largest_error_component() {
        // q=0.3, r=0.3 → naive rounding gives (0, 0, -1), which breaks the
        // cube constraint; s has the largest error and is recomputed.
        assert_eq!(FractionalHex::new(0.3, 0.3).round(), Hex::new(0, 0));
        // q=0.6, r=0.3, s=-0.9 → naive (1, 0, -1) is already consistent.
        assert_eq!(FractionalHex::new(0.6, 0.3).round(), Hex::new(1, 0));
    }
}
