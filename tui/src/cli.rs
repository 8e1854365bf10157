use crate::args::Args;
use log::{info, warn};
use rand::{rngs::StdRng, thread_rng, SeedableRng};
use std::{io, time::Duration};
use tinylife_lib::{AutoAdvance, Console, Error, FinishedReason, Game, StepMode, StepSource};

#[cfg(feature = "tui")]
use crate::tui::Keyboard;

/// Seeds the world and plays the game to the end.
pub(crate) fn run(args: Args) -> Result<FinishedReason, Error> {
    let mut config = args.config;
    if cfg!(not(feature = "tui")) && config.step_mode == StepMode::Interactive {
        warn!("Built without keyboard support. Generations will advance on their own.");
        config.step_mode = StepMode::Auto;
    }

    let world = match args.seed {
        Some(seed) => config.seed(Some(&args.pattern), &mut StdRng::seed_from_u64(seed)),
        None => config.seed(Some(&args.pattern), &mut thread_rng()),
    };
    let mut game = Game::new(&config, world)?;
    info!("Rule: {}", config.rule_string);

    let mut input: Box<dyn StepSource> = match config.step_mode {
        #[cfg(feature = "tui")]
        StepMode::Interactive => Box::new(Keyboard::new(config.exit_key)),
        _ => Box::new(AutoAdvance::with_delay(Duration::from_millis(
            config.delay_ms,
        ))),
    };
    let mut screen = Console::new(io::stdout().lock());
    Ok(game.run(input.as_mut(), &mut screen))
}
