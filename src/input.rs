//! Frontend input adapter
//!
//! Key mapping and the single pending-command cell shared between an input
//! thread and the tick loop. Simulation code never sees this module; it only
//! receives the already-extracted `Option<Command>` through `TickInput`.

use std::sync::Mutex;

use crate::sim::Command;

/// Latest-command cell: `post` overwrites, `take` consumes.
///
/// Commands issued faster than the tick cadence overwrite each other; only
/// the newest survives to the next tick. Mutex-backed so an input thread can
/// post while the tick loop reads.
#[derive(Debug, Default)]
pub struct CommandSlot {
    slot: Mutex<Option<Command>>,
}

impl CommandSlot {
    pub fn new() -> Self {
        Self::default()
    }

    /// Replace the pending command with a newer one.
    pub fn post(&self, command: Command) {
        *self.slot.lock().unwrap() = Some(command);
    }

    /// Consume the pending command, leaving the slot empty.
    pub fn take(&self) -> Option<Command> {
        self.slot.lock().unwrap().take()
    }
}

/// Map a pressed key to a command: WASD plus Q/E quick turns,
/// case-insensitive.
pub fn command_for_key(key: char) -> Option<Command> {
    match key.to_ascii_lowercase() {
        'w' => Some(Command::Forward),
        's' => Some(Command::Backward),
        'a' => Some(Command::TurnLeft),
        'd' => Some(Command::TurnRight),
        'q' => Some(Command::QuickTurnLeft),
        'e' => Some(Command::QuickTurnRight),
        _ => None,
    }
}
