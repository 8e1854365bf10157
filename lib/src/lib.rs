//! __tinylife__: Conway's Game of Life on a small bounded grid.
//!
//! The first generation comes from a pattern file, or from random placement
//! when there is no usable pattern file. Each generation is shown as a text
//! frame, and the game goes on until every cell is dead or the player asks
//! to exit.
//!
//! # Example
//!
//! ```rust
//! use tinylife_lib::{AutoAdvance, Config, Console, FinishedReason, Game, World};
//!
//! // A single cell dies of loneliness.
//! let config = Config::new(5, 5);
//! let world = World::with_alive(5, 5, vec![(2, 2)]);
//! let mut game = Game::new(&config, world).unwrap();
//! let mut screen = Console::new(Vec::new());
//!
//! assert_eq!(game.run(&mut AutoAdvance::new(), &mut screen), FinishedReason::AllDead);
//! assert_eq!(game.cycle(), 2);
//! ```

mod cells;
mod config;
mod error;
mod game;
mod render;
pub mod rules;
mod seed;
mod traits;
mod world;

pub use cells::{Coord, State, ALIVE, DEAD};
pub use config::{Config, PatternLayout, StepMode};
pub use error::{Error, ParseError};
pub use game::{FinishedReason, Game, Status, Step};
pub use render::Frame;
pub use traits::{AutoAdvance, Console, Screen, StepSource};
pub use world::{World, MAX_CELLS};
