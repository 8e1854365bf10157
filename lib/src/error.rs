//! All kinds of errors in this crate.

use ca_rules::ParseRuleError;
use displaydoc::Display;
use std::{io, path::PathBuf};
use thiserror::Error;

/// All kinds of errors in this crate.
#[derive(Debug, Display, Error)]
pub enum Error {
    /// Unable to open pattern file {path:?}: {source}
    ConfigOpenError {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
    /// Invalid pattern file: {0}
    ConfigParseError(#[from] ParseError),
    /// Unable to read from the input: {0}
    InputReadError(#[source] io::Error),
    /// Unable to write to the screen: {0}
    OutputError(#[source] io::Error),
    /// Invalid rule: {0:?}.
    ParseRuleError(#[from] ParseRuleError),
    /// Rules with B0 are not supported.
    B0Error,
    /// Invalid pattern layout: {0:?}.
    InvalidLayout(String),
    /// Maximal width / height should be positive.
    NonPositiveError,
    /// A {width}x{height} world is too large.
    TooLargeError { width: usize, height: usize },
    /// A {width}x{height} world cannot hold {cells} cells.
    InvalidWorld {
        width: usize,
        height: usize,
        cells: usize,
    },
    /// Alive and dead markers must be different characters.
    MarkerError,
    /// Invalid settings: {0}
    SettingsError(String),
}

/// Errors in the header of a pattern file.
///
/// Line numbers are 1-indexed, as an editor shows them.
#[derive(Clone, Debug, PartialEq, Eq, Display, Error)]
pub enum ParseError {
    /// missing header on line {0}
    MissingHeader(usize),
    /// line {0}: {1:?} is not a number
    InvalidNumber(usize, String),
    /// line {0}: dimension must be positive
    NonPositive(usize),
    /// line {line}: {value} exceeds the maximum of {max}
    TooLarge { line: usize, value: usize, max: usize },
}
