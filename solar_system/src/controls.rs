//! User commands understood by the scene

use winit::event::ElementState;
use winit::keyboard::KeyCode;

/// A discrete action triggered by the user.
///
/// Commands that need a location (`Relaunch`, `Launch`) read the cursor
/// position passed alongside them to [`crate::scene::Scene::apply`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Command {
    /// Stop the driver loop
    Quit,
    /// Recentre the sun and drop the planet, at rest, under the cursor
    Relaunch,
    /// Push the planet toward the cursor
    Launch,
    /// Take the planet out of the simulation
    Deactivate,
    IncreaseMass,
    DecreaseMass,
}

impl Command {
    pub fn label(self) -> &'static str {
        match self {
            Command::Quit => "quit",
            Command::Relaunch => "relaunch",
            Command::Launch => "launch",
            Command::Deactivate => "deactivate",
            Command::IncreaseMass => "mass up",
            Command::DecreaseMass => "mass down",
        }
    }
}

/// Key bindings shown in the help panel.
pub const BINDINGS: &[(&str, Command)] = &[
    ("Esc", Command::Quit),
    ("2", Command::Relaunch),
    ("Space", Command::Launch),
    ("Q", Command::Deactivate),
    ("Up", Command::IncreaseMass),
    ("Down", Command::DecreaseMass),
];

/// Map a key event to a command.
///
/// Only the initial press counts: releases and auto-repeats while a key is
/// held produce nothing, so each command fires once per keystroke.
pub fn command_for_key(key: KeyCode, state: ElementState, repeat: bool) -> Option<Command> {
    if state != ElementState::Pressed || repeat {
        return None;
    }

    match key {
        KeyCode::Escape => Some(Command::Quit),
        KeyCode::Digit2 => Some(Command::Relaunch),
        KeyCode::Space => Some(Command::Launch),
        KeyCode::KeyQ => Some(Command::Deactivate),
        KeyCode::ArrowUp => Some(Command::IncreaseMass),
        KeyCode::ArrowDown => Some(Command::DecreaseMass),
        _ => None,
    }
}
