//! Agents: a pose plus the policy that drives it

use glam::Vec2;
use serde::{Deserialize, Serialize};

use super::policy::{Command, Policy, Steer};
use crate::{heading_vec, normalize_degrees};

/// Read-only snapshot of an agent's position and heading.
///
/// Opponents and renderers only ever see poses, never the agent itself.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Pose {
    /// Position on the arena plane
    pub pos: Vec2,
    /// Heading in degrees, canonical [0, 360)
    pub heading: f32,
}

/// One match participant: pose, bound policy, and step sizes
#[derive(Debug, Clone)]
pub struct Agent {
    pose: Pose,
    policy: Policy,
    step_move: f32,
    step_turn: f32,
}

impl Agent {
    pub fn new(policy: Policy, step_move: f32, step_turn: f32) -> Self {
        Self {
            pose: Pose {
                pos: Vec2::ZERO,
                heading: 0.0,
            },
            policy,
            step_move,
            step_turn,
        }
    }

    /// Set the starting pose. Called once at match start.
    pub fn place(&mut self, pos: Vec2, heading: f32) {
        self.pose = Pose {
            pos,
            heading: normalize_degrees(heading),
        };
    }

    /// Advance one tick: apply the policy's steer, then clamp into the arena.
    pub fn tick(&mut self, opponent: &Pose, command: Option<Command>, bound: f32) {
        let steer = self
            .policy
            .advance(&self.pose, opponent, self.step_move, self.step_turn, command);
        self.apply(steer, bound);
    }

    /// Rotation first, then translation along the updated heading; each axis
    /// clamps independently into [-bound, bound].
    fn apply(&mut self, steer: Steer, bound: f32) {
        self.pose.heading = normalize_degrees(self.pose.heading + steer.turn);
        self.pose.pos += heading_vec(self.pose.heading) * steer.advance;
        self.pose.pos = self
            .pose
            .pos
            .clamp(Vec2::splat(-bound), Vec2::splat(bound));
    }

    /// Read-only view for rendering and opponent queries
    pub fn pose(&self) -> Pose {
        self.pose
    }
}
