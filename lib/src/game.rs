//! The game loop.

use crate::{
    config::Config,
    error::Error,
    render::Frame,
    rules::Life,
    traits::{Screen, StepSource},
    world::World,
};
use log::{debug, info, warn};

/// The signal to go on, or to stop.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Step {
    /// Computes the next generation.
    Continue,
    /// Ends the game without computing another generation.
    ExitRequested,
}

impl Step {
    /// The step signalled by a key press.
    ///
    /// `exit_key` is compared case-insensitively;
    /// every other key means [`Continue`](Step::Continue).
    pub fn from_key(key: char, exit_key: char) -> Self {
        if key.to_lowercase().eq(exit_key.to_lowercase()) {
            Step::ExitRequested
        } else {
            Step::Continue
        }
    }
}

/// The reason the game finished.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum FinishedReason {
    /// Every cell is dead.
    AllDead,
    /// The player asked to exit.
    ExitRequested,
}

/// Game status.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Status {
    /// More generations may follow.
    Running,
    /// The game is over. No more input will be read.
    Terminated(FinishedReason),
}

/// A game: one world, evolving generation by generation.
///
/// Still lifes and oscillators run forever; only an empty world or an
/// exit request ends the game.
#[derive(Clone, Debug)]
pub struct Game {
    config: Config,
    rule: Life,
    world: World,

    /// Starts at 1, and increases by one for each generation computed.
    cycle: u32,

    status: Status,
}

impl Game {
    /// Starts a game on the given first generation.
    ///
    /// Returns an error if the rule string in the configuration is invalid.
    pub fn new(config: &Config, world: World) -> Result<Self, Error> {
        let rule = config.rule()?;
        let status = if world.is_all_dead() {
            Status::Terminated(FinishedReason::AllDead)
        } else {
            Status::Running
        };
        Ok(Game {
            config: config.clone(),
            rule,
            world,
            cycle: 1,
            status,
        })
    }

    /// Game configuration.
    pub fn config(&self) -> &Config {
        &self.config
    }

    /// The current generation.
    pub fn world(&self) -> &World {
        &self.world
    }

    /// The cycle number shown on the frame.
    pub fn cycle(&self) -> u32 {
        self.cycle
    }

    /// Number of living cells in the current generation.
    pub fn population(&self) -> usize {
        self.world.cell_count()
    }

    /// Whether the game is still running.
    pub fn status(&self) -> Status {
        self.status
    }

    /// The current frame.
    pub fn frame(&self) -> Frame<'_> {
        Frame::new(self)
    }

    /// Acts on one step signal.
    ///
    /// Does nothing once the game has terminated.
    pub fn step(&mut self, step: Step) -> Status {
        if self.status != Status::Running {
            return self.status;
        }
        match step {
            Step::ExitRequested => {
                self.status = Status::Terminated(FinishedReason::ExitRequested);
            }
            Step::Continue => {
                self.world = self.rule.evolve(&self.world);
                self.cycle += 1;
                debug!(
                    "Cycle {}: {} living cells",
                    self.cycle,
                    self.world.cell_count()
                );
                if self.world.is_all_dead() {
                    self.status = Status::Terminated(FinishedReason::AllDead);
                }
            }
        }
        self.status
    }

    /// Runs the game until it terminates.
    ///
    /// Shows a frame, reads one step, and so on. The last frame is shown
    /// once the game has terminated, and then no more input is read.
    pub fn run<I, S>(&mut self, input: &mut I, screen: &mut S) -> FinishedReason
    where
        I: StepSource + ?Sized,
        S: Screen + ?Sized,
    {
        loop {
            self.show(screen);
            if let Status::Terminated(reason) = self.status {
                info!("Game over after {} cycles: {:?}", self.cycle, reason);
                return reason;
            }
            let step = input.next_step().unwrap_or_else(|e| {
                warn!("{}", e);
                Step::Continue
            });
            self.step(step);
        }
    }

    fn show<S: Screen + ?Sized>(&self, screen: &mut S) {
        if let Err(e) = screen.show(&self.frame().to_string()) {
            warn!("{}", e);
        }
    }
}
