//! Camera over the hex world: pan, rotation, zoom.

use core::f32::consts::{PI, TAU};

use hexmap_engine::coords::Vec2;

/// Smallest allowed zoom factor.
pub const MIN_ZOOM: f32 = 0.05;
/// Largest allowed zoom factor.
pub const MAX_ZOOM: f32 = 32.0;

/// Pan / rotate / zoom mapping between world and screen space.
///
/// `to_screen(w) = pivot + zoom * R(rotation) * (w + pan)`:
/// translate, then rotate, then scale, then move to the screen pivot.
/// `to_world` applies the exact inverse, so hit-testing matches rendering.
///
/// Invariants: `zoom` is within the zoom bounds (`[MIN_ZOOM, MAX_ZOOM]` by
/// default), `rotation` is in `[0, 2π)`.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct ViewTransform {
    pan: Vec2,
    rotation: f32,
    zoom: f32,
    /// Screen point that world + pan = (0, 0) lands on; the viewport center.
    pivot: Vec2,
    zoom_bounds: (f32, f32),
}

impl ViewTransform {
    pub fn new(pivot: Vec2) -> Self {
        Self {
            pan: Vec2::zero(),
            rotation: 0.0,
            zoom: 1.0,
            pivot,
            zoom_bounds: (MIN_ZOOM, MAX_ZOOM),
        }
    }

    /// Narrows or widens the zoom range. Invalid ranges keep the defaults.
    pub fn with_zoom_bounds(mut self, min: f32, max: f32) -> Self {
        if min.is_finite() && max.is_finite() && min > 0.0 && min <= max {
            self.zoom_bounds = (min, max);
            self.zoom = self.zoom.clamp(min, max);
        }
        self
    }

    #[inline]
    pub fn zoom_bounds(&self) -> (f32, f32) {
        self.zoom_bounds
    }

    #[inline]
    pub fn pan_offset(&self) -> Vec2 {
        self.pan
    }

    #[inline]
    pub fn rotation(&self) -> f32 {
        self.rotation
    }

    #[inline]
    pub fn zoom(&self) -> f32 {
        self.zoom
    }

    #[inline]
    pub fn pivot(&self) -> Vec2 {
        self.pivot
    }

    /// Follows a window resize. Pan, rotation and zoom are kept.
    pub fn set_pivot(&mut self, pivot: Vec2) {
        if pivot.is_finite() {
            self.pivot = pivot;
        }
    }

    /// Accumulates a world-space offset.
    pub fn pan(&mut self, dx: f32, dy: f32) {
        let d = Vec2::new(dx, dy);
        if d.is_finite() {
            self.pan += d;
        }
    }

    /// Accumulates a rotation in radians, normalized into `[0, 2π)`.
    pub fn rotate(&mut self, d_angle: f32) {
        if d_angle.is_finite() {
            self.rotation = normalize_angle(self.rotation + d_angle);
        }
    }

    /// Multiplies the zoom, clamped to the zoom bounds.
    ///
    /// Non-finite or non-positive factors are ignored.
    pub fn zoom_by(&mut self, factor: f32) {
        if factor.is_finite() && factor > 0.0 {
            let (min, max) = self.zoom_bounds;
            self.zoom = (self.zoom * factor).clamp(min, max);
        }
    }

    /// Restores pan (0, 0), rotation 0 and zoom 1. Pivot and zoom bounds are kept.
    pub fn reset(&mut self) {
        let (min, max) = self.zoom_bounds;
        *self = Self::new(self.pivot).with_zoom_bounds(min, max);
    }

    /// World → screen.
    pub fn to_screen(&self, world: Vec2) -> Vec2 {
        self.pivot + (world + self.pan).rotated(self.rotation) * self.zoom
    }

    /// Screen → world; exact inverse of [`to_screen`](Self::to_screen).
    pub fn to_world(&self, screen: Vec2) -> Vec2 {
        ((screen - self.pivot) / self.zoom).rotated(-self.rotation) - self.pan
    }

    /// World offset that moves content by `delta` on screen.
    pub fn screen_delta_to_world(&self, delta: Vec2) -> Vec2 {
        (delta / self.zoom).rotated(-self.rotation)
    }

    /// Angle of a screen point around the pivot.
    pub fn angle_at(&self, screen: Vec2) -> f32 {
        (screen - self.pivot).angle()
    }
}

impl Default for ViewTransform {
    fn default() -> Self {
        Self::new(Vec2::zero())
    }
}

/// Maps any finite angle into `[0, 2π)`.
pub fn normalize_angle(a: f32) -> f32 {
    let r = a.rem_euclid(TAU);
    // rem_euclid can round up to exactly TAU for tiny negative inputs.
    if r >= TAU { 0.0 } else { r }
}

/// Maps an angle difference into `(-π, π]`, the shortest signed turn.
pub fn wrap_delta(d: f32) -> f32 {
    let r = normalize_angle(d);
    if r > PI { r - TAU } else { r }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn close(a: Vec2, b: Vec2, eps: f32) -> bool {
        (a.x - b.x).abs() < eps && (a.y - b.y).abs() < eps
    }

    fn busy_view() -> ViewTransform {
        let mut v = ViewTransform::new(Vec2::new(600.0, 500.0));
        v.pan(-123.5, 48.25);
        v.rotate(2.1);
        v.zoom_by(1.7);
        v
    }

    // ── round trips ───────────────────────────────────────────────────────

    #[test]
    fn to_screen_of_to_world_is_identity() {
        let v = busy_view();
        for x in (0..1200).step_by(97) {
            for y in (0..1000).step_by(89) {
                let p = Vec2::new(x as f32, y as f32);
                assert!(close(v.to_screen(v.to_world(p)), p, 1e-2), "{p:?}");
            }
        }
    }

    #[test]
    fn to_world_of_to_screen_is_identity() {
        let v = busy_view();
        let w = Vec2::new(-321.0, 77.0);
        assert!(close(v.to_world(v.to_screen(w)), w, 1e-2));
    }

    #[test]
    fn default_view_maps_world_origin_to_pivot() {
        let v = ViewTransform::new(Vec2::new(600.0, 500.0));
        assert_eq!(v.to_screen(Vec2::zero()), Vec2::new(600.0, 500.0));
    }

    // ── ordering ──────────────────────────────────────────────────────────

    #[test]
    fn pan_is_applied_before_rotation_and_zoom() {
        let mut v = ViewTransform::new(Vec2::zero());
        v.pan(10.0, 0.0);
        v.rotate(core::f32::consts::FRAC_PI_2);
        v.zoom_by(2.0);
        // (0 + 10, 0) → rotate 90° → (0, 10) → zoom 2 → (0, 20)
        assert!(close(v.to_screen(Vec2::zero()), Vec2::new(0.0, 20.0), 1e-4));
    }

    #[test]
    fn screen_delta_moves_content_by_delta() {
        let before = busy_view();
        let mut after = before;
        let d = before.screen_delta_to_world(Vec2::new(50.0, 20.0));
        after.pan(d.x, d.y);
        let w = Vec2::new(42.0, -17.0);
        let moved = after.to_screen(w) - before.to_screen(w);
        assert!(close(moved, Vec2::new(50.0, 20.0), 1e-2));
    }

    // ── zoom bounds ───────────────────────────────────────────────────────

    #[test]
    fn zoom_is_clamped_at_both_ends() {
        let mut v = ViewTransform::default();
        for _ in 0..500 {
            v.zoom_by(1.05);
        }
        assert_eq!(v.zoom(), MAX_ZOOM);
        for _ in 0..1000 {
            v.zoom_by(0.95);
        }
        assert_eq!(v.zoom(), MIN_ZOOM);
    }

    #[test]
    fn zoom_ignores_degenerate_factors() {
        let mut v = ViewTransform::default();
        v.zoom_by(0.0);
        v.zoom_by(-2.0);
        v.zoom_by(f32::NAN);
        v.zoom_by(f32::INFINITY);
        assert_eq!(v.zoom(), 1.0);
    }

    #[test]
    fn custom_zoom_bounds_survive_reset() {
        let mut v = ViewTransform::default().with_zoom_bounds(0.5, 2.0);
        v.zoom_by(10.0);
        assert_eq!(v.zoom(), 2.0);
        v.reset();
        assert_eq!(v.zoom(), 1.0);
        v.zoom_by(0.01);
        assert_eq!(v.zoom(), 0.5);
    }

    #[test]
    fn inverted_zoom_bounds_are_ignored() {
        let v = ViewTransform::default().with_zoom_bounds(4.0, 2.0);
        assert_eq!(v.zoom_bounds(), (MIN_ZOOM, MAX_ZOOM));
    }

    // ── rotation range ────────────────────────────────────────────────────

    #[test]
    fn rotation_stays_in_range_for_mixed_turns() {
        let mut v = ViewTransform::default();
        let steps = [0.3, -1.7, 6.5, -12.9, 1e-9, -1e-9, PI, -TAU, 100.0];
        for (i, d) in steps.iter().cycle().take(200).enumerate() {
            v.rotate(*d * (i as f32 % 3.0 - 1.0));
            assert!((0.0..TAU).contains(&v.rotation()), "{}", v.rotation());
        }
    }

    #[test]
    fn tiny_negative_rotation_stays_below_tau() {
        let mut v = ViewTransform::default();
        v.rotate(-1e-9);
        assert!(v.rotation() < TAU);
    }

    #[test]
    fn wrap_delta_picks_shortest_turn() {
        assert!((wrap_delta(TAU - 0.1) + 0.1).abs() < 1e-5);
        assert!((wrap_delta(-TAU + 0.1) - 0.1).abs() < 1e-5);
        assert!((wrap_delta(PI) - PI).abs() < 1e-5);
    }

    // ── reset ─────────────────────────────────────────────────────────────

    #[test]
    fn reset_restores_defaults_but_keeps_pivot() {
        let mut v = busy_view();
        v.reset();
        assert_eq!(v.pan_offset(), Vec2::zero());
        assert_eq!(v.rotation(), 0.0);
        assert_eq!(v.zoom(), 1.0);
        assert_eq!(v.pivot(), Vec2::new(600.0, 500.0));
    }
}
