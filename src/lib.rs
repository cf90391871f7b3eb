//! Runaway - a top-down pursuit-evasion arcade game
//!
//! Core modules:
//! - `sim`: Headless simulation (agents, movement policies, match state machine)
//! - `config`: Data-driven match configuration
//! - `input`: Pending-command slot and key mapping for frontends
//!
//! The simulation never touches a window, a clock, or a keyboard: frontends
//! feed it timestamps and the latest directional command each tick, and
//! consume render snapshots plus a single terminal event per match.

pub mod config;
pub mod input;
pub mod sim;

pub use config::{AgentConfig, MatchConfig};

use glam::Vec2;

/// Game configuration constants
pub mod consts {
    /// Countdown length in seconds
    pub const TOTAL_TIME: f64 = 30.0;
    /// Capture radius in arena units
    pub const CATCH_RADIUS: f32 = 50.0;
    /// Tick interval the host scheduler re-arms after each tick
    pub const TICK_INTERVAL_MS: u64 = 100;

    /// Arena half-extent: positions are clamped to [-B, B] on each axis
    pub const ARENA_BOUND: f32 = 340.0;
    /// Starting distance between the agents along the x-axis
    pub const INITIAL_SEPARATION: f32 = 400.0;

    /// Runner step sizes (units per move, degrees per turn)
    pub const RUNNER_STEP_MOVE: f32 = 12.0;
    pub const RUNNER_STEP_TURN: f32 = 15.0;
    /// Chaser step sizes
    pub const CHASER_STEP_MOVE: f32 = 10.0;
    pub const CHASER_STEP_TURN: f32 = 10.0;

    /// Points per second survived
    pub const POINTS_PER_SECOND: f64 = 10.0;
}

/// Normalize an angle in degrees to [0, 360)
#[inline]
pub fn normalize_degrees(angle: f32) -> f32 {
    angle.rem_euclid(360.0)
}

/// Bearing from `from` to `to` in degrees, normalized to [0, 360)
#[inline]
pub fn bearing_to(from: Vec2, to: Vec2) -> f32 {
    let d = to - from;
    normalize_degrees(d.y.atan2(d.x).to_degrees())
}

/// Smallest signed rotation from `current` to `desired`, in degrees.
///
/// Result lies in [-180, 180]; an exact 180-degree difference maps to -180.
#[inline]
pub fn signed_angle_diff(current: f32, desired: f32) -> f32 {
    (desired - current + 540.0).rem_euclid(360.0) - 180.0
}

/// Clamp `value` into [-limit, limit]
#[inline]
pub fn clamp_magnitude(value: f32, limit: f32) -> f32 {
    value.clamp(-limit, limit)
}

/// Unit vector pointing along a heading given in degrees
#[inline]
pub fn heading_vec(heading: f32) -> Vec2 {
    Vec2::from_angle(heading.to_radians())
}
