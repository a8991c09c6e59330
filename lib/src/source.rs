//! Sources that populate a new generation.

use crate::{
    cells::{Cell, Coord},
    error::Error,
    generation::Generation,
    size::Size,
};
use std::{fs, path::Path};

/// A board parsed from plaintext.
///
/// Each trimmed, non-blank line of the input is one run of cells along the
/// x axis: the line index is the x coordinate and the character index the
/// y coordinate. `'0'` is a dead cell; any other character is a live cell.
/// All lines must have the same length.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Board {
    size: Size,
    lines: Vec<Vec<Cell>>,
}

impl Board {
    /// Parses a board from text.
    ///
    /// Blank lines are skipped, so trailing newlines are harmless. Lines of
    /// unequal length fail with [`Error::UnevenLinesError`]; input with no
    /// cells at all fails with [`Error::EmptyBoardError`].
    pub fn parse(text: &str) -> Result<Self, Error> {
        let mut lines = Vec::new();
        for line in text.lines() {
            let line = line.trim();
            if line.is_empty() {
                continue;
            }
            let cells: Vec<Cell> = line
                .chars()
                .map(|c| if c == '0' { Cell::Dead } else { Cell::Alive })
                .collect();
            lines.push(cells);
        }
        let height = match lines.first() {
            Some(first) => first.len(),
            None => return Err(Error::EmptyBoardError),
        };
        for (x, line) in lines.iter().enumerate() {
            if line.len() != height {
                return Err(Error::UnevenLinesError(x + 1, line.len(), height));
            }
        }
        let size = Size::new(lines.len() as i32, height as i32);
        Ok(Board { size, lines })
    }

    /// Reads and parses a board file.
    ///
    /// An unreadable file is fatal at construction time; there is no retry.
    pub fn from_path(path: impl AsRef<Path>) -> Result<Self, Error> {
        let text = fs::read_to_string(path).map_err(|e| Error::IoError(e.to_string()))?;
        Board::parse(&text)
    }

    /// The size of the board.
    pub const fn size(&self) -> Size {
        self.size
    }

    /// The cell at an in-range coordinate.
    pub(crate) fn cell(&self, (x, y): Coord) -> Cell {
        self.lines[x as usize][y as usize]
    }
}

/// Decides the state of every cell of a new generation.
///
/// A [`Generation`] is built by asking its source for a cell at every
/// coordinate, in the order of [`Size::coords`]. The set of sources is
/// closed; construction dispatches over it in one place.
#[derive(Clone, Copy, Debug)]
pub enum Source<'a> {
    /// An unbiased coin flip for every cell.
    Random(Size),
    /// Every `m`-th cell in construction order is alive, starting with the
    /// `m`-th visited cell. `m` must be positive.
    Stripes(Size, usize),
    /// The cells of a parsed plaintext board.
    Board(&'a Board),
    /// The successor of a generation under the life rule.
    Next(&'a Generation),
}

impl Source<'_> {
    /// The size of the generation this source produces.
    pub fn size(&self) -> Size {
        match *self {
            Source::Random(size) | Source::Stripes(size, _) => size,
            Source::Board(board) => board.size(),
            Source::Next(prev) => prev.size(),
        }
    }
}
