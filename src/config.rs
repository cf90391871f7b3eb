//! Match configuration
//!
//! Every tunable of a match in one serde-friendly struct, so frontends can
//! load variants from JSON without touching simulation code.

use std::time::Duration;

use serde::{Deserialize, Serialize};

use crate::consts;

/// Step sizes for one agent
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct AgentConfig {
    /// Distance covered by one move step (arena units)
    pub step_move: f32,
    /// Rotation of one turn step (degrees)
    pub step_turn: f32,
}

/// Per-match tunables
///
/// One value per match; nothing here changes after the match starts.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct MatchConfig {
    /// Countdown length in seconds
    pub total_time: f64,
    /// Capture radius: the match is lost when the agents are strictly closer
    pub catch_radius: f32,
    /// Interval the host scheduler re-arms between ticks
    pub tick_interval_ms: u64,
    /// Arena half-extent (axis-aligned square, positions clamp to [-B, B])
    pub arena_bound: f32,
    /// Starting distance between the agents
    pub initial_separation: f32,
    /// Runner step sizes
    pub runner: AgentConfig,
    /// Chaser step sizes
    pub chaser: AgentConfig,
}

impl Default for MatchConfig {
    fn default() -> Self {
        Self {
            total_time: consts::TOTAL_TIME,
            catch_radius: consts::CATCH_RADIUS,
            tick_interval_ms: consts::TICK_INTERVAL_MS,
            arena_bound: consts::ARENA_BOUND,
            initial_separation: consts::INITIAL_SEPARATION,
            runner: AgentConfig {
                step_move: consts::RUNNER_STEP_MOVE,
                step_turn: consts::RUNNER_STEP_TURN,
            },
            chaser: AgentConfig {
                step_move: consts::CHASER_STEP_MOVE,
                step_turn: consts::CHASER_STEP_TURN,
            },
        }
    }
}

impl MatchConfig {
    /// Tick interval as a `Duration` for host schedulers
    pub fn tick_interval(&self) -> Duration {
        Duration::from_millis(self.tick_interval_ms)
    }
}
