//! Game configuration.

use crate::{error::Error, rules::Life, world::World};
use educe::Educe;

mod layout;

pub use layout::PatternLayout;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// How the game advances from one generation to the next.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "lowercase"))]
pub enum StepMode {
    /// Waits for a key after each frame.
    #[default]
    Interactive,

    /// Advances without waiting for input.
    Auto,
}

/// Game configuration.
///
/// The world and the game will be generated from this configuration.
#[derive(Clone, Debug, Educe, PartialEq, Eq)]
#[educe(Default)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct Config {
    /// Maximal width of the world.
    ///
    /// Random worlds always have this width.
    #[educe(Default = 10)]
    pub max_width: usize,

    /// Maximal height of the world.
    ///
    /// Random worlds always have this height.
    #[educe(Default = 10)]
    pub max_height: usize,

    /// The character marking a living cell, in pattern files and on screen.
    #[educe(Default = 'o')]
    pub alive_marker: char,

    /// The character marking a dead cell on screen.
    ///
    /// In pattern files any character other than
    /// [`alive_marker`](#structfield.alive_marker) is a dead cell.
    #[educe(Default = '.')]
    pub dead_marker: char,

    /// How lines of a pattern file map onto the world.
    pub layout: PatternLayout,

    /// The rule string of the cellular automaton.
    #[educe(Default = "B3/S23")]
    pub rule_string: String,

    /// The least number of random placements when seeding randomly.
    #[educe(Default = 10)]
    pub random_min: usize,

    /// The number of random placements is
    /// [`random_min`](#structfield.random_min) plus a uniform draw
    /// from `0..random_spread`.
    #[educe(Default = 10)]
    pub random_spread: usize,

    /// How the game advances.
    pub step_mode: StepMode,

    /// The key which ends an interactive game. Case-insensitive.
    #[educe(Default = 'x')]
    pub exit_key: char,

    /// Pause between frames in milliseconds, when not interactive.
    pub delay_ms: u64,
}

impl Config {
    /// Sets up a new configuration with the given maximal size.
    pub fn new(max_width: usize, max_height: usize) -> Self {
        Config {
            max_width,
            max_height,
            ..Config::default()
        }
    }

    /// Sets the alive marker.
    pub fn set_alive_marker(mut self, alive_marker: char) -> Self {
        self.alive_marker = alive_marker;
        self
    }

    /// Sets the dead marker.
    pub fn set_dead_marker(mut self, dead_marker: char) -> Self {
        self.dead_marker = dead_marker;
        self
    }

    /// Sets the pattern layout.
    pub fn set_layout(mut self, layout: PatternLayout) -> Self {
        self.layout = layout;
        self
    }

    /// Sets the rule string.
    pub fn set_rule_string<S: ToString>(mut self, rule_string: S) -> Self {
        self.rule_string = rule_string.to_string();
        self
    }

    /// Sets the range of the number of random placements.
    pub fn set_random_count(mut self, random_min: usize, random_spread: usize) -> Self {
        self.random_min = random_min;
        self.random_spread = random_spread;
        self
    }

    /// Sets the step mode.
    pub fn set_step_mode(mut self, step_mode: StepMode) -> Self {
        self.step_mode = step_mode;
        self
    }

    /// Sets the exit key.
    pub fn set_exit_key(mut self, exit_key: char) -> Self {
        self.exit_key = exit_key;
        self
    }

    /// Sets the pause between frames.
    pub fn set_delay_ms(mut self, delay_ms: u64) -> Self {
        self.delay_ms = delay_ms;
        self
    }

    /// Parses the rule string.
    pub fn rule(&self) -> Result<Life, Error> {
        self.rule_string.parse()
    }

    /// Checks that the configuration can produce a game.
    pub fn validate(&self) -> Result<(), Error> {
        World::check_size(self.max_width, self.max_height)?;
        if self.alive_marker == self.dead_marker {
            return Err(Error::MarkerError);
        }
        self.rule()?;
        Ok(())
    }
}
