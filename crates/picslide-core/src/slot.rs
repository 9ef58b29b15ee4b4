//! Slot indices and grid coordinates.

use crate::GridSize;

/// A 1-based slot index in row-major order within an n×n grid.
///
/// For a slot `p` on a board of size `n`, the grid coordinates are
/// `row = (p - 1) / n` and `col = (p - 1) % n`. This mapping is shared
/// by move validation and rendering; see [`Slot::coord`].
///
/// # Examples
///
/// ```
/// use picslide_core::{GridSize, Slot};
///
/// let size = GridSize::new(3);
/// let slot = Slot::new(5);
/// let coord = slot.coord(size);
/// assert_eq!((coord.row, coord.col), (1, 1));
/// assert_eq!(Slot::from_coord(coord, size), slot);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, derive_more::Display)]
#[display("{_0}")]
pub struct Slot(u8);

impl Slot {
    /// Creates a slot from a 1-based index.
    ///
    /// # Panics
    ///
    /// Panics if `value` is 0 or exceeds the largest board
    /// (`GridSize::MAX.cell_count()`).
    #[must_use]
    pub fn new(value: u8) -> Self {
        assert!(
            value >= 1 && value <= GridSize::MAX.cell_count(),
            "invalid slot index: {value}"
        );
        Self(value)
    }

    /// Returns the 1-based slot index.
    #[must_use]
    #[inline]
    pub const fn get(self) -> u8 {
        self.0
    }

    /// Returns the slot holding the last cell of the board, which is the
    /// blank tile's home.
    #[must_use]
    pub fn last(size: GridSize) -> Self {
        Self(size.cell_count())
    }

    /// Returns an iterator over every slot of a board, in row-major order.
    pub fn all(size: GridSize) -> impl Iterator<Item = Self> {
        (1..=size.cell_count()).map(Self)
    }

    /// Returns the zero-based grid coordinates of this slot.
    #[must_use]
    pub fn coord(self, size: GridSize) -> Coord {
        let n = size.get();
        Coord {
            row: (self.0 - 1) / n,
            col: (self.0 - 1) % n,
        }
    }

    /// Creates a slot from zero-based grid coordinates.
    ///
    /// # Panics
    ///
    /// Panics if either coordinate lies outside the board.
    #[must_use]
    pub fn from_coord(coord: Coord, size: GridSize) -> Self {
        let n = size.get();
        assert!(
            coord.row < n && coord.col < n,
            "coordinate ({}, {}) outside {size}x{size} board",
            coord.row,
            coord.col
        );
        Self(coord.row * n + coord.col + 1)
    }

    /// Returns whether this slot and `other` are grid-adjacent: their
    /// coordinates differ by exactly 1 in a single axis.
    ///
    /// A slot is not adjacent to itself, and diagonal neighbors are not
    /// adjacent.
    #[must_use]
    pub fn is_adjacent(self, other: Self, size: GridSize) -> bool {
        self.coord(size).manhattan_distance(other.coord(size)) == 1
    }

    /// Returns the slot directly above, if any.
    #[must_use]
    pub fn up(self, size: GridSize) -> Option<Self> {
        let coord = self.coord(size);
        let row = coord.row.checked_sub(1)?;
        Some(Self::from_coord(Coord { row, ..coord }, size))
    }

    /// Returns the slot directly below, if any.
    #[must_use]
    pub fn down(self, size: GridSize) -> Option<Self> {
        let coord = self.coord(size);
        let row = coord.row + 1;
        (row < size.get()).then(|| Self::from_coord(Coord { row, ..coord }, size))
    }

    /// Returns the slot directly to the left, if any.
    #[must_use]
    pub fn left(self, size: GridSize) -> Option<Self> {
        let coord = self.coord(size);
        let col = coord.col.checked_sub(1)?;
        Some(Self::from_coord(Coord { col, ..coord }, size))
    }

    /// Returns the slot directly to the right, if any.
    #[must_use]
    pub fn right(self, size: GridSize) -> Option<Self> {
        let coord = self.coord(size);
        let col = coord.col + 1;
        (col < size.get()).then(|| Self::from_coord(Coord { col, ..coord }, size))
    }
}

/// Zero-based (row, column) coordinates on an n×n grid.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Coord {
    /// Row index, 0 at the top.
    pub row: u8,
    /// Column index, 0 at the left.
    pub col: u8,
}

impl Coord {
    /// Returns the Manhattan distance between two coordinates.
    #[must_use]
    pub fn manhattan_distance(self, other: Self) -> u8 {
        self.row.abs_diff(other.row) + self.col.abs_diff(other.col)
    }
}
