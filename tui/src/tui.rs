//! Stepping through generations with the keyboard.

use crossterm::{
    event::{self, Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers},
    terminal,
};
use std::io;
use tinylife_lib::{Error, Step, StepSource};

/// Waits for one key press per frame.
///
/// The exit key (case-insensitive) and `Ctrl-C` end the game;
/// any other key goes on.
pub(crate) struct Keyboard {
    exit_key: char,
}

impl Keyboard {
    pub(crate) fn new(exit_key: char) -> Self {
        Keyboard { exit_key }
    }
}

impl StepSource for Keyboard {
    fn next_step(&mut self) -> Result<Step, Error> {
        terminal::enable_raw_mode().map_err(Error::InputReadError)?;
        let key = read_key();
        terminal::disable_raw_mode().map_err(Error::InputReadError)?;
        let key = key.map_err(Error::InputReadError)?;

        Ok(match key.code {
            KeyCode::Char('c') if key.modifiers.contains(KeyModifiers::CONTROL) => {
                Step::ExitRequested
            }
            KeyCode::Char(c) => Step::from_key(c, self.exit_key),
            _ => Step::Continue,
        })
    }
}

/// Blocks until a key is pressed. Releases and other events are skipped.
fn read_key() -> io::Result<KeyEvent> {
    loop {
        if let Event::Key(key) = event::read()? {
            if key.kind == KeyEventKind::Press {
                return Ok(key);
            }
        }
    }
}
