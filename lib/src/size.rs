//! The size of the board and the toroidal coordinate mapping.

use crate::cells::Coord;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// The size of a board.
///
/// A board is a torus: its coordinate space wraps around at every edge, so
/// any integer coordinate maps back onto the board via [`wrap`](Size::wrap).
/// The size of a board never changes over a simulation's lifetime; every
/// generation derived from a board shares its size.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Size {
    /// Extent of the x axis.
    pub width: i32,
    /// Extent of the y axis.
    pub height: i32,
}

impl Size {
    /// Creates a new size.
    ///
    /// Both extents must be positive; [`Config`](crate::Config) validates
    /// this before constructing a board.
    pub const fn new(width: i32, height: i32) -> Self {
        Size { width, height }
    }

    /// Number of cells on the board.
    #[inline]
    pub const fn area(self) -> usize {
        self.width as usize * self.height as usize
    }

    /// Maps an arbitrary coordinate onto the board.
    ///
    /// Each axis wraps independently by its own extent, using mathematical
    /// modulo, so the result lies in `[0, width) × [0, height)` for any
    /// integer input, including negative ones.
    #[inline]
    pub fn wrap(self, (x, y): Coord) -> Coord {
        (x.rem_euclid(self.width), y.rem_euclid(self.height))
    }

    /// Position of an already-wrapped coordinate in a flat row-major store.
    #[inline]
    pub(crate) fn index(self, (x, y): Coord) -> usize {
        x as usize * self.height as usize + y as usize
    }

    /// Iterates over every coordinate of the board exactly once,
    /// with `x` in the outer loop and `y` in the inner loop.
    ///
    /// This is the canonical construction order of a
    /// [`Generation`](crate::Generation); order-sensitive sources rely on it.
    pub fn coords(self) -> impl Iterator<Item = Coord> {
        let height = self.height;
        (0..self.width).flat_map(move |x| (0..height).map(move |y| (x, y)))
    }
}
