//! Totalistic Life-like rules.

use crate::{
    cells::{State, ALIVE, DEAD},
    error::Error,
    world::World,
};
use ca_rules::ParseLife;
use std::{
    fmt::{self, Display, Formatter},
    str::FromStr,
};

/// Totalistic Life-like rules.
///
/// A dead cell is born when its number of living neighbors is in the
/// birth set; a living cell survives when it is in the survival set.
/// Every other cell is dead in the next generation.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct Life {
    /// `birth[n]` is true when a dead cell with `n` living neighbors is born.
    birth: [bool; 9],
    /// `survival[n]` is true when a living cell with `n` living neighbors survives.
    survival: [bool; 9],
}

impl Life {
    /// Constructs a new rule from the `b` and `s` data.
    ///
    /// Neighbor counts above 8 are ignored.
    pub fn new(b: Vec<u8>, s: Vec<u8>) -> Self {
        let mut birth = [false; 9];
        let mut survival = [false; 9];
        for n in b.into_iter().filter(|&n| n <= 8) {
            birth[n as usize] = true;
        }
        for n in s.into_iter().filter(|&n| n <= 8) {
            survival[n as usize] = true;
        }
        Life { birth, survival }
    }

    /// Whether the rule contains `B0`.
    ///
    /// In other words, whether a dead cell would become [`ALIVE`] in the next
    /// generation, if all its neighbors are dead.
    pub fn has_b0(&self) -> bool {
        self.birth[0]
    }

    /// The state of a cell in the next generation, given its current state
    /// and its number of living neighbors.
    #[inline]
    pub fn transition(&self, state: State, alives: usize) -> State {
        let table = match state {
            State::Dead => &self.birth,
            State::Alive => &self.survival,
        };
        if table.get(alives).copied().unwrap_or(false) {
            ALIVE
        } else {
            DEAD
        }
    }

    /// Computes the next generation.
    ///
    /// Every cell is computed from the old world, which is left untouched,
    /// so no cell ever sees a neighbor that is already updated.
    pub fn evolve(&self, world: &World) -> World {
        let mut next = World::new(world.width(), world.height());
        for coord in world.coords() {
            let state = self.transition(world.get_cell(coord), world.count_live_neighbors(coord));
            if state == ALIVE {
                next.set_cell(coord, ALIVE);
            }
        }
        next
    }
}

/// Conway's Game of Life, `B3/S23`.
impl Default for Life {
    fn default() -> Self {
        Life::new(vec![3], vec![2, 3])
    }
}

/// A parser for the rule.
impl ParseLife for Life {
    fn from_bs(b: Vec<u8>, s: Vec<u8>) -> Self {
        Self::new(b, s)
    }
}

impl FromStr for Life {
    type Err = Error;

    fn from_str(input: &str) -> Result<Self, Self::Err> {
        let rule: Life = ParseLife::parse_rule(input).map_err(Error::ParseRuleError)?;
        if rule.has_b0() {
            Err(Error::B0Error)
        } else {
            Ok(rule)
        }
    }
}

/// Displays the rule in `B/S` notation.
impl Display for Life {
    fn fmt(&self, f: &mut Formatter) -> Result<(), fmt::Error> {
        write!(f, "B")?;
        for n in (0..=8).filter(|&n| self.birth[n]) {
            write!(f, "{}", n)?;
        }
        write!(f, "/S")?;
        for n in (0..=8).filter(|&n| self.survival[n]) {
            write!(f, "{}", n)?;
        }
        Ok(())
    }
}

impl World {
    /// Computes the next generation under Conway's Game of Life.
    pub fn evolve(&self) -> World {
        Life::default().evolve(self)
    }
}
