//! All kinds of errors in this crate.

use displaydoc::Display;
use thiserror::Error;

/// All kinds of errors in this crate.
#[derive(Clone, Debug, PartialEq, Eq, Display, Error)]
pub enum Error {
    /// The game is already over.
    GameOverError,
    /// Width / height should be positive.
    NonPositiveError,
    /// The stripe interval should be positive.
    ZeroStripesError,
    /// The board has no cells.
    EmptyBoardError,
    /// Line {0} of the board is {1} cells long; expected {2}.
    UnevenLinesError(usize, usize, usize),
    /// Unable to read the board: {0}.
    IoError(String),
}
