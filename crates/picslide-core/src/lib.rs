//! Grid geometry for sliding-tile puzzles.
//!
//! This crate provides the shared position model used by both move
//! validation and rendering:
//!
//! - [`GridSize`]: the board dimension, bounded to 2-9
//! - [`Slot`]: a 1-based slot index in row-major order
//! - [`Coord`]: zero-based (row, column) grid coordinates
//!
//! The slot ↔ coordinate mapping defined here is the single source of
//! truth for adjacency checks and for computing a tile's visual offset;
//! every consumer must go through it.
//!
//! # Examples
//!
//! ```
//! use picslide_core::{GridSize, Slot};
//!
//! let size = GridSize::new(3);
//!
//! // Slots are numbered 1..=9 in row-major order on a 3x3 board.
//! let top_left = Slot::new(1);
//! let center = Slot::new(5);
//!
//! assert_eq!(top_left.coord(size).row, 0);
//! assert_eq!(center.coord(size).col, 1);
//!
//! // Diagonal slots are not adjacent.
//! assert!(!top_left.is_adjacent(center, size));
//! assert!(top_left.is_adjacent(Slot::new(2), size));
//! ```

pub use self::{size::*, slot::*};

mod size;
mod slot;
