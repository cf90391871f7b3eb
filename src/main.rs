//! Runaway terminal frontend
//!
//! Thin plumbing around the headless simulation: a stdin reader feeds the
//! command slot, a sleep-then-tick loop drives the match, stdout is the
//! render sink.
//!
//! Controls (runner): W/S move forward/backward, A/D turn, Q/E quick turn.
//! Input is line-buffered, so each key needs Enter.

use std::path::Path;
use std::sync::Arc;
use std::thread;
use std::time::Instant;

use clap::Parser;

use runaway::config::MatchConfig;
use runaway::input::{CommandSlot, command_for_key};
use runaway::sim::{MatchState, Policy, TickInput, TickOutcome, tick};

/// A top-down pursuit-evasion arcade game
#[derive(Parser, Debug)]
#[command(version, about)]
struct Args {
    /// Path to a JSON match configuration
    #[arg(long)]
    config: Option<std::path::PathBuf>,
    /// Let a random walker play the runner instead of the keyboard
    #[arg(long)]
    demo: bool,
    /// RNG seed for --demo
    #[arg(long, default_value_t = 1)]
    seed: u64,
}

/// Load a match config, falling back to defaults on any problem.
fn load_config(path: Option<&Path>) -> MatchConfig {
    let Some(path) = path else {
        return MatchConfig::default();
    };
    match std::fs::read_to_string(path) {
        Ok(json) => match serde_json::from_str(&json) {
            Ok(config) => {
                log::info!("loaded match config from {}", path.display());
                config
            }
            Err(err) => {
                log::warn!("bad match config {}: {err}", path.display());
                MatchConfig::default()
            }
        },
        Err(err) => {
            log::warn!("cannot read {}: {err}", path.display());
            MatchConfig::default()
        }
    }
}

/// Forward mapped keys from stdin into the shared command slot.
fn spawn_input_reader(slot: Arc<CommandSlot>) {
    thread::spawn(move || {
        use std::io::BufRead;
        let stdin = std::io::stdin();
        for line in stdin.lock().lines() {
            let Ok(line) = line else { break };
            for key in line.chars() {
                if let Some(command) = command_for_key(key) {
                    slot.post(command);
                }
            }
        }
    });
}

fn main() {
    env_logger::init();
    let args = Args::parse();
    let config = load_config(args.config.as_deref());
    let interval = config.tick_interval();

    let runner_policy = if args.demo {
        log::info!("demo mode: random-walk runner, seed {}", args.seed);
        Policy::random_walk(args.seed)
    } else {
        Policy::Manual
    };
    let mut state = MatchState::new(config, runner_policy, Policy::Pursuit);

    let slot = Arc::new(CommandSlot::new());
    if !args.demo {
        spawn_input_reader(Arc::clone(&slot));
        println!("Controls: W/S move, A/D turn, Q/E quick turn (press Enter after each).");
    }

    // Self-rescheduling tick chain: sleep-then-tick, so a slow tick delays
    // the next one rather than skipping it.
    let start = Instant::now();
    loop {
        let input = TickInput {
            now: start.elapsed().as_secs_f64(),
            command: slot.take(),
        };
        match tick(&mut state, &input) {
            TickOutcome::Frame(frame) => {
                println!(
                    "Time: {}  Score: {}  runner ({:>4.0}, {:>4.0}) {:3.0}°  chaser ({:>4.0}, {:>4.0}) {:3.0}°",
                    frame.formatted_time,
                    frame.score,
                    frame.runner.pos.x,
                    frame.runner.pos.y,
                    frame.runner.heading,
                    frame.chaser.pos.x,
                    frame.chaser.pos.y,
                    frame.chaser.heading,
                );
            }
            TickOutcome::Over(outcome) => {
                println!("{}", outcome.message);
                println!("Final Score: {}", outcome.final_score);
                break;
            }
            TickOutcome::Settled => break,
        }
        thread::sleep(interval);
    }
}
