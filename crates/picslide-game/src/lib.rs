//! The sliding-tile puzzle engine.
//!
//! This crate turns a square raster image and a grid dimension into a
//! playable puzzle:
//!
//! - [`TileSet`]: builds the n×n tile collection from an [`ImageInfo`]
//!   descriptor, validates slides against grid adjacency, and detects the
//!   solved arrangement
//! - [`Shuffler`]: randomizes the slot assignment across all tiles
//! - [`Session`]: the orchestrator owning grid size, board, and the
//!   completion flag, driven by external events (image supplied, size
//!   changed, tile clicked, restart)
//!
//! The engine never touches pixels; each non-blank tile carries a
//! [`TileRegion`] describing the rectangular crop a renderer should draw.
//!
//! # Examples
//!
//! ```
//! use picslide_game::{ImageInfo, Session, Shuffler, TileId};
//!
//! let mut shuffler = Shuffler::with_seed(42);
//! let mut session = Session::new();
//! assert!(session.phase().is_empty());
//!
//! session.supply_image(ImageInfo { side_px: 600 }, &mut shuffler);
//! assert!(session.phase().is_ready());
//!
//! // Clicking a tile either slides it into the blank or is ignored.
//! let _outcome = session.click_tile(TileId::new(1));
//! ```

pub use self::{session::*, shuffler::*, tile::*, tileset::*};

mod session;
mod shuffler;
mod tile;
mod tileset;
