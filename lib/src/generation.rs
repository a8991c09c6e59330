//! Immutable snapshots of the board.

use crate::{
    cells::{Cell, Coord},
    size::Size,
    source::Source,
};
use rand::{thread_rng, Rng};

/// The eight offsets of the Moore neighborhood, excluding the cell itself.
const NBHD: [Coord; 8] = [
    (-1, -1),
    (-1, 0),
    (-1, 1),
    (0, -1),
    (0, 1),
    (1, -1),
    (1, 0),
    (1, 1),
];

/// An immutable snapshot of the whole board at one point in simulated time.
///
/// A generation is filled from a [`Source`] exactly once, when it is built;
/// afterwards it only answers queries. Every coordinate-taking query wraps
/// its argument around the edges of the board, so neighborhoods span the
/// torus seam. A fully built generation is plain data and can be shared
/// freely, across threads included.
#[derive(Clone, Debug)]
pub struct Generation {
    size: Size,
    cells: Box<[Cell]>,
}

impl Generation {
    /// Builds a new generation, asking `source` for every cell.
    ///
    /// Cells are visited in the order of [`Size::coords`]. Only the
    /// [`Stripes`](Source::Stripes) source is sensitive to that order; its
    /// counter runs over visited cells, not coordinates, and is threaded
    /// through this loop rather than kept inside the source.
    pub fn new(source: Source<'_>) -> Self {
        let size = source.size();
        let mut rng = thread_rng();
        let mut visited = 0_usize;
        let mut cells = Vec::with_capacity(size.area());
        for coord in size.coords() {
            visited += 1;
            let cell = match source {
                Source::Random(_) => {
                    if rng.gen() {
                        Cell::Alive
                    } else {
                        Cell::Dead
                    }
                }
                Source::Stripes(_, m) => {
                    if visited % m == 0 {
                        Cell::Alive
                    } else {
                        Cell::Dead
                    }
                }
                Source::Board(board) => board.cell(coord),
                Source::Next(prev) => prev.next_cell(coord),
            };
            cells.push(cell);
        }
        Generation {
            size,
            cells: cells.into_boxed_slice(),
        }
    }

    /// The size of the board.
    #[inline]
    pub const fn size(&self) -> Size {
        self.size
    }

    /// The cell at a coordinate, after wrapping.
    #[inline]
    fn cell(&self, coord: Coord) -> Cell {
        self.cells[self.size.index(self.size.wrap(coord))]
    }

    /// Whether the cell at a coordinate is alive.
    ///
    /// The coordinate may lie anywhere; it wraps around the board.
    #[inline]
    pub fn is_live(&self, coord: Coord) -> bool {
        self.cell(coord).is_alive()
    }

    /// Number of live cells among the eight neighbors of a coordinate.
    ///
    /// Each neighbor lookup wraps independently, so the count is correct
    /// across the torus seam. The cell itself is never counted; the result
    /// is in `[0, 8]`.
    pub fn live_neighbors(&self, (x, y): Coord) -> usize {
        NBHD.iter()
            .filter(|&&(dx, dy)| self.is_live((x + dx, y + dy)))
            .count()
    }

    /// Number of live cells on the whole board.
    pub fn live(&self) -> usize {
        self.cells.iter().filter(|cell| cell.is_alive()).count()
    }

    /// Number of cells whose state differs from `other`.
    ///
    /// Both generations must have the same size; comparing generations of
    /// different sizes is a caller error and panics.
    pub fn changed(&self, other: &Generation) -> usize {
        assert_eq!(
            self.size, other.size,
            "compared generations must have the same size"
        );
        self.cells
            .iter()
            .zip(other.cells.iter())
            .filter(|(a, b)| a != b)
            .count()
    }

    /// The state the cell at a coordinate takes in the next generation.
    ///
    /// A dead cell comes alive with exactly 3 live neighbors; a live cell
    /// survives with 2 or 3. Everything else is dead.
    pub fn next_cell(&self, coord: Coord) -> Cell {
        match (self.is_live(coord), self.live_neighbors(coord)) {
            (_, 3) | (true, 2) => Cell::Alive,
            _ => Cell::Dead,
        }
    }
}
