//! Seeding the first generation.

use crate::{
    cells::ALIVE,
    config::Config,
    error::{Error, ParseError},
    world::World,
};
use log::{info, warn};
use rand::Rng;
use std::{fs, path::Path};

impl Config {
    /// Draws the number of random placements:
    /// [`random_min`](#structfield.random_min) plus a uniform draw
    /// from `0..random_spread`.
    pub fn random_placements<R: Rng + ?Sized>(&self, rng: &mut R) -> usize {
        if self.random_spread > 0 {
            self.random_min + rng.gen_range(0..self.random_spread)
        } else {
            self.random_min
        }
    }

    /// Generates a world of the maximal size with some randomly placed
    /// living cells.
    ///
    /// The number of placements comes from
    /// [`random_placements`](Self::random_placements). Placements may hit the
    /// same cell more than once.
    ///
    /// # Panics
    ///
    /// Panics if the maximal size fails [`validate`](Self::validate).
    pub fn random_world<R: Rng + ?Sized>(&self, rng: &mut R) -> World {
        let mut world = World::new(self.max_width, self.max_height);
        let count = self.random_placements(rng);
        for _ in 0..count {
            let x = rng.gen_range(0..self.max_width) as i32;
            let y = rng.gen_range(0..self.max_height) as i32;
            world.set_cell((x, y), ALIVE);
        }
        world
    }

    /// Parses a pattern file.
    ///
    /// The first two lines are the width and the height, each at most the
    /// maximal size. Every following line is scanned for
    /// [`alive_marker`](#structfield.alive_marker), and each occurrence is
    /// mapped to a cell by the [`layout`](#structfield.layout).
    /// Cells mapped outside the world are ignored.
    pub fn parse_pattern(&self, text: &str) -> Result<World, Error> {
        let mut lines = text.lines();
        let width = parse_dimension(lines.next(), 1, self.max_width)?;
        let height = parse_dimension(lines.next(), 2, self.max_height)?;

        let mut world = World::new(width, height);
        for (line, content) in lines.enumerate() {
            for (offset, c) in content.chars().enumerate() {
                if c != self.alive_marker {
                    continue;
                }
                let coord = self.layout.map(line, offset);
                if world.on_grid(coord) {
                    world.set_cell(coord, ALIVE);
                }
            }
        }
        Ok(world)
    }

    /// Reads and parses a pattern file.
    pub fn read_pattern<P: AsRef<Path>>(&self, path: P) -> Result<World, Error> {
        let path = path.as_ref();
        let text = fs::read_to_string(path).map_err(|source| Error::ConfigOpenError {
            path: path.to_owned(),
            source,
        })?;
        self.parse_pattern(&text)
    }

    /// Seeds the first generation from a pattern file,
    /// or randomly when there is no pattern file or it cannot be used.
    ///
    /// Never fails for a configuration that passes [`validate`](Self::validate).
    ///
    /// # Panics
    ///
    /// Panics if the maximal size is invalid and a random world is needed.
    pub fn seed<P, R>(&self, path: Option<P>, rng: &mut R) -> World
    where
        P: AsRef<Path>,
        R: Rng + ?Sized,
    {
        if let Some(path) = path {
            match self.read_pattern(&path) {
                Ok(world) => {
                    info!(
                        "Loaded a {}x{} world from {:?}",
                        world.width(),
                        world.height(),
                        path.as_ref()
                    );
                    return world;
                }
                Err(e) => warn!("{}. Using a random world instead.", e),
            }
        }
        let world = self.random_world(rng);
        info!("Seeded {} living cells at random", world.cell_count());
        world
    }
}

/// Parses the width or height on line `line` (1-indexed) of a pattern file.
fn parse_dimension(text: Option<&str>, line: usize, max: usize) -> Result<usize, ParseError> {
    let text = text.ok_or(ParseError::MissingHeader(line))?.trim();
    let value: usize = text
        .parse()
        .map_err(|_| ParseError::InvalidNumber(line, text.to_owned()))?;
    if value == 0 {
        Err(ParseError::NonPositive(line))
    } else if value > max {
        Err(ParseError::TooLarge { line, value, max })
    } else {
        Ok(value)
    }
}
