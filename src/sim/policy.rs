//! Movement policies
//!
//! Each agent owns one policy. A policy turns what it can see this tick (its
//! own pose, the opponent's pose, the pending manual command) into a single
//! `Steer`. Policies never move positions themselves; the agent applies the
//! steer and clamps to the arena.

use rand::{Rng, SeedableRng};
use rand_pcg::Pcg32;
use serde::{Deserialize, Serialize};

use super::agent::Pose;
use crate::{bearing_to, clamp_magnitude, signed_angle_diff};

/// A discrete directional command from the player
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Command {
    Forward,
    Backward,
    TurnLeft,
    TurnRight,
    QuickTurnLeft,
    QuickTurnRight,
}

/// One tick's worth of motion: rotation applied first, then translation
/// along the updated heading
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct Steer {
    /// Signed distance along the heading (negative = backward)
    pub advance: f32,
    /// Signed rotation in degrees (positive = counterclockwise/left)
    pub turn: f32,
}

/// Movement policy, selected per agent at match construction
#[derive(Debug, Clone)]
pub enum Policy {
    /// Player-driven: consumes the pending command, otherwise holds still
    Manual,
    /// Uniform choice between stepping forward, turning left, turning right
    RandomWalk(Pcg32),
    /// Turn toward the opponent's bearing, capped per tick, always advancing
    Pursuit,
}

impl Policy {
    /// Random-walk policy with a seeded RNG, reproducible per seed
    pub fn random_walk(seed: u64) -> Self {
        Policy::RandomWalk(Pcg32::seed_from_u64(seed))
    }

    /// Compute this tick's steer.
    ///
    /// `command` is the latest manual directive since the previous tick;
    /// only the `Manual` variant reads it.
    pub fn advance(
        &mut self,
        me: &Pose,
        opponent: &Pose,
        step_move: f32,
        step_turn: f32,
        command: Option<Command>,
    ) -> Steer {
        match self {
            Policy::Manual => match command {
                Some(Command::Forward) => Steer {
                    advance: step_move,
                    turn: 0.0,
                },
                Some(Command::Backward) => Steer {
                    advance: -step_move,
                    turn: 0.0,
                },
                Some(Command::TurnLeft) => Steer {
                    advance: 0.0,
                    turn: step_turn,
                },
                Some(Command::TurnRight) => Steer {
                    advance: 0.0,
                    turn: -step_turn,
                },
                Some(Command::QuickTurnLeft) => Steer {
                    advance: 0.0,
                    turn: 2.0 * step_turn,
                },
                Some(Command::QuickTurnRight) => Steer {
                    advance: 0.0,
                    turn: -2.0 * step_turn,
                },
                None => Steer::default(),
            },
            Policy::RandomWalk(rng) => match rng.random_range(0..3) {
                0 => Steer {
                    advance: step_move,
                    turn: 0.0,
                },
                1 => Steer {
                    advance: 0.0,
                    turn: step_turn,
                },
                _ => Steer {
                    advance: 0.0,
                    turn: -step_turn,
                },
            },
            Policy::Pursuit => {
                let desired = bearing_to(me.pos, opponent.pos);
                let diff = signed_angle_diff(me.heading, desired);
                Steer {
                    advance: step_move,
                    turn: clamp_magnitude(diff, step_turn),
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use glam::Vec2;
    use proptest::prelude::*;

    fn pose(x: f32, y: f32, heading: f32) -> Pose {
        Pose {
            pos: Vec2::new(x, y),
            heading,
        }
    }

    #[test]
    fn test_manual_commands() {
        let mut policy = Policy::Manual;
        let me = pose(0.0, 0.0, 0.0);
        let opp = pose(100.0, 0.0, 180.0);

        let cases = [
            (Some(Command::Forward), 12.0, 0.0),
            (Some(Command::Backward), -12.0, 0.0),
            (Some(Command::TurnLeft), 0.0, 15.0),
            (Some(Command::TurnRight), 0.0, -15.0),
            (Some(Command::QuickTurnLeft), 0.0, 30.0),
            (Some(Command::QuickTurnRight), 0.0, -30.0),
            (None, 0.0, 0.0),
        ];
        for (command, advance, turn) in cases {
            let steer = policy.advance(&me, &opp, 12.0, 15.0, command);
            assert_eq!(steer, Steer { advance, turn }, "command {command:?}");
        }
    }

    #[test]
    fn test_random_walk_only_the_three_moves() {
        let mut policy = Policy::random_walk(7);
        let me = pose(0.0, 0.0, 0.0);
        let opp = pose(100.0, 0.0, 180.0);

        let mut seen = [0u32; 3];
        for _ in 0..300 {
            let steer = policy.advance(&me, &opp, 10.0, 10.0, None);
            match steer {
                Steer { advance, turn } if advance == 10.0 && turn == 0.0 => seen[0] += 1,
                Steer { advance, turn } if advance == 0.0 && turn == 10.0 => seen[1] += 1,
                Steer { advance, turn } if advance == 0.0 && turn == -10.0 => seen[2] += 1,
                other => panic!("unexpected steer {other:?}"),
            }
        }
        // With 300 uniform draws every option shows up.
        assert!(seen.iter().all(|&n| n > 0), "counts {seen:?}");
    }

    #[test]
    fn test_random_walk_reproducible_per_seed() {
        let mut a = Policy::random_walk(42);
        let mut b = Policy::random_walk(42);
        let me = pose(0.0, 0.0, 0.0);
        let opp = pose(100.0, 0.0, 180.0);

        for _ in 0..50 {
            assert_eq!(
                a.advance(&me, &opp, 10.0, 10.0, None),
                b.advance(&me, &opp, 10.0, 10.0, None)
            );
        }
    }

    #[test]
    fn test_pursuit_aligned_keeps_heading() {
        let mut policy = Policy::Pursuit;
        // Opponent dead ahead along heading 0: bearing and diff are exactly 0.
        let steer = policy.advance(&pose(0.0, 0.0, 0.0), &pose(100.0, 0.0, 0.0), 10.0, 10.0, None);
        assert_eq!(steer.turn, 0.0);
        assert_eq!(steer.advance, 10.0);
    }

    #[test]
    fn test_pursuit_turns_toward_target() {
        let mut policy = Policy::Pursuit;
        // Opponent due north of an east-facing pursuer: left turn.
        let steer = policy.advance(&pose(0.0, 0.0, 0.0), &pose(0.0, 100.0, 0.0), 10.0, 10.0, None);
        assert!(steer.turn > 0.0);
        // Opponent due south: right turn.
        let steer = policy.advance(&pose(0.0, 0.0, 0.0), &pose(0.0, -100.0, 0.0), 10.0, 10.0, None);
        assert!(steer.turn < 0.0);
    }

    #[test]
    fn test_pursuit_always_advances() {
        let mut policy = Policy::Pursuit;
        // Even with the opponent dead astern the pursuer keeps moving.
        let steer = policy.advance(
            &pose(0.0, 0.0, 0.0),
            &pose(-100.0, 0.0, 0.0),
            10.0,
            10.0,
            None,
        );
        assert_eq!(steer.advance, 10.0);
        assert_eq!(steer.turn, -10.0);
    }

    proptest! {
        #[test]
        fn prop_pursuit_turn_never_exceeds_cap(
            mx in -340.0f32..340.0,
            my in -340.0f32..340.0,
            heading in -1080.0f32..1080.0,
            ox in -340.0f32..340.0,
            oy in -340.0f32..340.0,
            step_turn in 0.1f32..45.0,
        ) {
            let mut policy = Policy::Pursuit;
            let steer = policy.advance(
                &pose(mx, my, heading),
                &pose(ox, oy, 0.0),
                10.0,
                step_turn,
                None,
            );
            prop_assert!(steer.turn.abs() <= step_turn);
        }
    }
}
