//! How lines of a pattern file map onto the world.

use crate::{cells::Coord, error::Error};
use std::{
    fmt::{self, Display, Formatter},
    str::FromStr,
};

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// How a character in a pattern file maps to a cell.
///
/// The header (width and height) is not counted: line `0` is the first
/// line after the header.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum PatternLayout {
    /// Each line is a row.
    ///
    /// ```plaintext
    /// line 0: (0,0) (1,0) (2,0)
    /// line 1: (0,1) (1,1) (2,1)
    /// ```
    #[default]
    #[cfg_attr(feature = "serde", serde(rename = "rows"))]
    RowsAreLines,

    /// Each line is a column.
    ///
    /// ```plaintext
    /// line 0: (0,0) (0,1) (0,2)
    /// line 1: (1,0) (1,1) (1,2)
    /// ```
    #[cfg_attr(feature = "serde", serde(rename = "columns"))]
    ColumnsAreLines,
}

impl PatternLayout {
    /// The cell denoted by the character at `offset` on pattern line `line`.
    ///
    /// The result may be off the grid; callers must check.
    #[inline]
    pub fn map(self, line: usize, offset: usize) -> Coord {
        let (line, offset) = (line as i32, offset as i32);
        match self {
            PatternLayout::RowsAreLines => (offset, line),
            PatternLayout::ColumnsAreLines => (line, offset),
        }
    }
}

impl FromStr for PatternLayout {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "rows" | "r" => Ok(PatternLayout::RowsAreLines),
            "columns" | "c" => Ok(PatternLayout::ColumnsAreLines),
            _ => Err(Error::InvalidLayout(s.to_owned())),
        }
    }
}

impl Display for PatternLayout {
    fn fmt(&self, f: &mut Formatter) -> Result<(), fmt::Error> {
        let s = match self {
            PatternLayout::RowsAreLines => "rows",
            PatternLayout::ColumnsAreLines => "columns",
        };
        write!(f, "{}", s)?;
        Ok(())
    }
}
