//! Rendering a generation as a text frame.

use crate::{cells::ALIVE, config::StepMode, game::Game};
use std::fmt::{self, Display, Formatter};

/// One frame: the world, annotated with the cycle number and,
/// for interactive games, a prompt.
///
/// ```plaintext
/// ..o..   Cycle : 03
/// ..o..
/// ..o..   Press any key (X to Exit)
/// ```
pub struct Frame<'a> {
    game: &'a Game,
}

impl<'a> Frame<'a> {
    pub(crate) fn new(game: &'a Game) -> Self {
        Frame { game }
    }
}

impl Display for Frame<'_> {
    fn fmt(&self, f: &mut Formatter) -> Result<(), fmt::Error> {
        let config = self.game.config();
        let world = self.game.world();
        let last = world.height() as i32 - 1;
        for y in 0..=last {
            for x in 0..world.width() as i32 {
                let c = if world.get_cell((x, y)) == ALIVE {
                    config.alive_marker
                } else {
                    config.dead_marker
                };
                write!(f, "{}", c)?;
            }
            if y == 0 {
                write!(f, "   Cycle : {:02}", self.game.cycle())?;
            }
            if y == last && config.step_mode == StepMode::Interactive {
                write!(
                    f,
                    "   Press any key ({} to Exit)",
                    config.exit_key.to_ascii_uppercase()
                )?;
            }
            writeln!(f)?;
        }
        Ok(())
    }
}
