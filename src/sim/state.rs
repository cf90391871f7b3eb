//! Match state and lifecycle types

use glam::Vec2;
use serde::{Deserialize, Serialize};

use super::agent::Agent;
use super::clock::MatchClock;
use super::policy::Policy;
use crate::config::MatchConfig;

/// Lifecycle of a match. Transitions are one-directional: `Running` enters
/// exactly one of the terminal phases and never leaves it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum MatchPhase {
    /// Clock running, agents moving
    Running,
    /// Countdown expired before capture
    Won,
    /// Chaser reached the runner
    Lost,
}

impl MatchPhase {
    pub fn is_terminal(&self) -> bool {
        *self != MatchPhase::Running
    }
}

/// Terminal event payload, produced exactly once per match
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MatchOutcome {
    pub message: String,
    pub final_score: u32,
}

/// Complete per-match state.
///
/// One instance per match; nothing is shared between matches. Mutated once
/// per tick while `Running`, frozen afterwards.
#[derive(Debug, Clone)]
pub struct MatchState {
    pub config: MatchConfig,
    pub phase: MatchPhase,
    pub clock: MatchClock,
    pub score: u32,
    pub runner: Agent,
    pub chaser: Agent,
    outcome: Option<MatchOutcome>,
}

impl MatchState {
    /// Build a match with both agents placed on the x-axis facing each other:
    /// runner on the left heading 0, chaser on the right heading 180.
    pub fn new(config: MatchConfig, runner_policy: Policy, chaser_policy: Policy) -> Self {
        let mut runner = Agent::new(
            runner_policy,
            config.runner.step_move,
            config.runner.step_turn,
        );
        let mut chaser = Agent::new(
            chaser_policy,
            config.chaser.step_move,
            config.chaser.step_turn,
        );
        let half = config.initial_separation / 2.0;
        runner.place(Vec2::new(-half, 0.0), 0.0);
        chaser.place(Vec2::new(half, 0.0), 180.0);

        log::debug!(
            "match start: total_time={}s catch_radius={} bound={}",
            config.total_time,
            config.catch_radius,
            config.arena_bound
        );

        Self {
            clock: MatchClock::new(config.total_time),
            phase: MatchPhase::Running,
            score: 0,
            runner,
            chaser,
            outcome: None,
            config,
        }
    }

    /// Terminal event, if the match has ended
    pub fn outcome(&self) -> Option<&MatchOutcome> {
        self.outcome.as_ref()
    }

    /// Enter a terminal phase, freezing the score into the outcome.
    pub(crate) fn finish(&mut self, phase: MatchPhase, message: &str) -> MatchOutcome {
        self.phase = phase;
        let outcome = MatchOutcome {
            message: message.to_string(),
            final_score: self.score,
        };
        self.outcome = Some(outcome.clone());
        log::info!("match over: {} (score {})", message, self.score);
        outcome
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_places_agents_facing_each_other() {
        let state = MatchState::new(MatchConfig::default(), Policy::Manual, Policy::Pursuit);
        assert_eq!(state.phase, MatchPhase::Running);
        assert_eq!(state.score, 0);
        assert!(state.outcome().is_none());

        let runner = state.runner.pose();
        let chaser = state.chaser.pose();
        assert_eq!(runner.pos, Vec2::new(-200.0, 0.0));
        assert_eq!(runner.heading, 0.0);
        assert_eq!(chaser.pos, Vec2::new(200.0, 0.0));
        assert_eq!(chaser.heading, 180.0);
    }

    #[test]
    fn test_finish_freezes_score_into_outcome() {
        let mut state = MatchState::new(MatchConfig::default(), Policy::Manual, Policy::Pursuit);
        state.score = 123;
        let outcome = state.finish(MatchPhase::Won, "Time's up! You win");
        assert_eq!(outcome.final_score, 123);
        assert_eq!(state.phase, MatchPhase::Won);
        assert!(state.phase.is_terminal());
        assert_eq!(state.outcome(), Some(&outcome));
    }
}
