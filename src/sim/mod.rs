//! Headless pursuit simulation
//!
//! All gameplay logic lives here and stays free of rendering, input devices,
//! and wall-clock access:
//! - Timestamps and the pending command come in through `TickInput`
//! - Randomness comes from a seeded RNG injected at construction
//! - Frontends consume `TickOutcome` snapshots and one terminal event

pub mod agent;
pub mod capture;
pub mod clock;
pub mod policy;
pub mod state;
pub mod tick;

pub use agent::{Agent, Pose};
pub use capture::is_caught;
pub use clock::{MatchClock, format_clock, score_for};
pub use policy::{Command, Policy, Steer};
pub use state::{MatchOutcome, MatchPhase, MatchState};
pub use tick::{Frame, TickInput, TickOutcome, tick};
