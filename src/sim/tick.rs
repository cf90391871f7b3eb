//! Per-tick match advancement
//!
//! The host owns the schedule: it calls `tick` with a timestamp and the
//! latest pending command, renders `Frame`s while the match runs, and stops
//! re-arming its timer after the single `Over` event.

use serde::{Deserialize, Serialize};

use super::agent::Pose;
use super::capture::is_caught;
use super::clock::{format_clock, score_for};
use super::policy::Command;
use super::state::{MatchOutcome, MatchPhase, MatchState};

/// Input for a single tick
#[derive(Debug, Clone, Copy, Default)]
pub struct TickInput {
    /// Wall-clock timestamp in seconds (monotonic, host-defined origin)
    pub now: f64,
    /// Latest manual command since the previous tick, if any
    pub command: Option<Command>,
}

/// Renderable snapshot of one running tick
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Frame {
    pub runner: Pose,
    pub chaser: Pose,
    /// Remaining time as `MM:SS.T`
    pub formatted_time: String,
    pub score: u32,
}

/// What the host should do after a tick
#[derive(Debug, Clone)]
pub enum TickOutcome {
    /// Match still running: render and schedule the next tick
    Frame(Frame),
    /// Match just ended: report once and stop rescheduling
    Over(MatchOutcome),
    /// Match was already over: nothing changed
    Settled,
}

/// Advance the match by one tick.
///
/// Per tick: fold the timestamp into the clock, recompute the score, move the
/// runner then the chaser, then check capture and timeout on the post-move
/// poses. Strictly a no-op once the phase is terminal; `Over` is returned by
/// exactly one call per match.
pub fn tick(state: &mut MatchState, input: &TickInput) -> TickOutcome {
    if state.phase.is_terminal() {
        return TickOutcome::Settled;
    }

    state.clock.advance(input.now);
    state.score = score_for(state.clock.elapsed());

    // Runner moves first; the chaser steers at the runner's post-move pose.
    let chaser_pose = state.chaser.pose();
    state
        .runner
        .tick(&chaser_pose, input.command, state.config.arena_bound);
    let runner_pose = state.runner.pose();
    state
        .chaser
        .tick(&runner_pose, None, state.config.arena_bound);

    if is_caught(
        state.runner.pose().pos,
        state.chaser.pose().pos,
        state.config.catch_radius,
    ) {
        return TickOutcome::Over(state.finish(MatchPhase::Lost, "Caught! Game Over"));
    }
    if state.clock.expired() {
        return TickOutcome::Over(state.finish(MatchPhase::Won, "Time's up! You win"));
    }

    TickOutcome::Frame(Frame {
        runner: state.runner.pose(),
        chaser: state.chaser.pose(),
        formatted_time: format_clock(state.clock.remaining()),
        score: state.score,
    })
}
