//! The world.

use crate::{
    cells::{Coord, State, ALIVE, DEAD},
    error::Error,
};

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// The offsets of the eight cells in the Moore neighborhood.
pub(crate) const NBHD: [(i32, i32); 8] = [
    (-1, -1),
    (-1, 0),
    (-1, 1),
    (0, -1),
    (0, 1),
    (1, -1),
    (1, 0),
    (1, 1),
];

/// The largest number of cells in a world.
///
/// Coordinates are `i32`, so neither side can be longer than this either.
pub const MAX_CELLS: usize = i32::MAX as usize;

/// The world: a bounded grid of cells.
///
/// A world is a plain value. Evolution never mutates it, but produces
/// a new world of the same size.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(try_from = "WorldSer"))]
pub struct World {
    width: usize,
    height: usize,

    /// The states of all cells, stored column by column,
    /// so that the cell `(x, y)` is at `x * height + y`.
    ///
    /// Always holds exactly `width * height` cells.
    cells: Vec<State>,
}

impl World {
    /// Checks that a world of this size can exist,
    /// and returns its number of cells.
    pub fn check_size(width: usize, height: usize) -> Result<usize, Error> {
        if width == 0 || height == 0 {
            return Err(Error::NonPositiveError);
        }
        width
            .checked_mul(height)
            .filter(|&size| size <= MAX_CELLS)
            .ok_or(Error::TooLargeError { width, height })
    }

    /// Creates a new world of the given size where every cell is dead.
    ///
    /// Returns an error if the size fails [`check_size`](Self::check_size).
    pub fn try_new(width: usize, height: usize) -> Result<Self, Error> {
        let size = World::check_size(width, height)?;
        Ok(World {
            width,
            height,
            cells: vec![DEAD; size],
        })
    }

    /// Creates a new world of the given size where every cell is dead.
    ///
    /// # Panics
    ///
    /// Panics if the size fails [`check_size`](Self::check_size).
    pub fn new(width: usize, height: usize) -> Self {
        match World::try_new(width, height) {
            Ok(world) => world,
            Err(e) => panic!("{}", e),
        }
    }

    /// Creates a world of the given size with the listed cells alive.
    ///
    /// Coordinates outside the world are ignored.
    pub fn with_alive<I>(width: usize, height: usize, alive: I) -> Self
    where
        I: IntoIterator<Item = Coord>,
    {
        let mut world = World::new(width, height);
        for coord in alive {
            if world.on_grid(coord) {
                world.set_cell(coord, ALIVE);
            }
        }
        world
    }

    /// Width.
    pub fn width(&self) -> usize {
        self.width
    }

    /// Height.
    pub fn height(&self) -> usize {
        self.height
    }

    /// Whether the coordinates are inside the world.
    ///
    /// This is the only bounds check; every other accessor assumes it holds.
    #[inline]
    pub fn on_grid(&self, (x, y): Coord) -> bool {
        x >= 0 && (x as usize) < self.width && y >= 0 && (y as usize) < self.height
    }

    #[inline]
    fn index(&self, coord: Coord) -> usize {
        debug_assert!(self.on_grid(coord), "cell {:?} is off the grid", coord);
        coord.0 as usize * self.height + coord.1 as usize
    }

    /// Gets the state of a cell.
    ///
    /// # Panics
    ///
    /// Panics if the cell is not [on the grid](Self::on_grid).
    #[inline]
    pub fn get_cell(&self, coord: Coord) -> State {
        self.cells[self.index(coord)]
    }

    /// Sets the state of a cell.
    ///
    /// # Panics
    ///
    /// Panics if the cell is not [on the grid](Self::on_grid).
    #[inline]
    pub fn set_cell(&mut self, coord: Coord, state: State) {
        let index = self.index(coord);
        self.cells[index] = state;
    }

    /// Iterates over the coordinates of all cells, row by row.
    pub fn coords(&self) -> impl Iterator<Item = Coord> {
        let (width, height) = (self.width as i32, self.height as i32);
        (0..height).flat_map(move |y| (0..width).map(move |x| (x, y)))
    }

    /// Coordinates of all living cells, row by row.
    pub fn alive_cells(&self) -> Vec<Coord> {
        self.coords()
            .filter(|&coord| self.get_cell(coord) == ALIVE)
            .collect()
    }

    /// Number of living cells.
    pub fn cell_count(&self) -> usize {
        self.cells.iter().filter(|&&state| state == ALIVE).count()
    }

    /// Number of living cells among the eight neighbors of a cell.
    ///
    /// The cell itself is never counted; neighbors off the grid count as dead.
    pub fn count_live_neighbors(&self, (x, y): Coord) -> usize {
        NBHD.iter()
            .map(|(dx, dy)| (x + dx, y + dy))
            .filter(|&coord| self.on_grid(coord) && self.get_cell(coord) == ALIVE)
            .count()
    }

    /// Whether every cell is dead.
    pub fn is_all_dead(&self) -> bool {
        self.cells.iter().all(|&state| state == DEAD)
    }

    /// Displays the world in [Plaintext](https://conwaylife.com/wiki/Plaintext) format,
    /// with the given glyphs for living and dead cells.
    ///
    /// Each row is ended with a newline.
    pub fn display_with(&self, alive: char, dead: char) -> String {
        let mut str = String::with_capacity((self.width + 1) * self.height);
        for y in 0..self.height as i32 {
            for x in 0..self.width as i32 {
                match self.get_cell((x, y)) {
                    State::Dead => str.push(dead),
                    State::Alive => str.push(alive),
                }
            }
            str.push('\n');
        }
        str
    }

    /// Displays the world in [Plaintext](https://conwaylife.com/wiki/Plaintext) format.
    ///
    /// * **Dead** cells are represented by `.`;
    /// * **Living** cells are represented by `o`.
    pub fn plaintext(&self) -> String {
        self.display_with('o', '.')
    }
}

/// A world as it is read by `serde`, before its size is checked.
#[cfg(feature = "serde")]
#[derive(Deserialize)]
pub struct WorldSer {
    width: usize,
    height: usize,
    cells: Vec<State>,
}

#[cfg(feature = "serde")]
impl TryFrom<WorldSer> for World {
    type Error = Error;

    fn try_from(ser: WorldSer) -> Result<Self, Self::Error> {
        let size = World::check_size(ser.width, ser.height)?;
        if ser.cells.len() != size {
            return Err(Error::InvalidWorld {
                width: ser.width,
                height: ser.height,
                cells: ser.cells.len(),
            });
        }
        Ok(World {
            width: ser.width,
            height: ser.height,
            cells: ser.cells,
        })
    }
}
