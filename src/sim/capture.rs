//! Capture detection

use glam::Vec2;

/// True when the two positions are strictly within `radius` of each other.
///
/// Compared on squared distance; a separation of exactly `radius` is not a
/// capture.
#[inline]
pub fn is_caught(a: Vec2, b: Vec2, radius: f32) -> bool {
    a.distance_squared(b) < radius * radius
}
