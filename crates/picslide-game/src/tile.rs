//! Tiles and their image regions.

use picslide_core::{GridSize, Slot};

/// The fixed identity of a tile, 1-based.
///
/// A tile's id equals its solved slot and never changes after creation;
/// only the tile's current [`Slot`] moves. The blank tile's id is `n²`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, derive_more::Display)]
#[display("{_0}")]
pub struct TileId(u8);

impl TileId {
    /// Creates a tile id from a 1-based index.
    ///
    /// # Panics
    ///
    /// Panics if `value` is 0 or exceeds the largest board
    /// (`GridSize::MAX.cell_count()`).
    #[must_use]
    pub fn new(value: u8) -> Self {
        assert!(
            value >= 1 && value <= GridSize::MAX.cell_count(),
            "invalid tile id: {value}"
        );
        Self(value)
    }

    /// Returns the 1-based id.
    #[must_use]
    #[inline]
    pub const fn get(self) -> u8 {
        self.0
    }

    /// Returns the slot this tile occupies in the solved arrangement.
    #[must_use]
    pub fn home_slot(self) -> Slot {
        Slot::new(self.0)
    }
}

/// Descriptor of a decoded square raster image.
///
/// The engine only needs the side length to compute tile regions; pixel
/// data stays with the rendering collaborator. Squareness is the image
/// provider's responsibility (it crops before handing the image over).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ImageInfo {
    /// Side length of the square image, in pixels.
    pub side_px: u32,
}

/// A rectangular pixel crop of the source image.
///
/// Regions are computed from integer boundaries `k·W/n`, so the n×n
/// regions tile the raster exactly even when `n` does not divide `W`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TileRegion {
    /// Left edge, in pixels from the image's left.
    pub x: u32,
    /// Top edge, in pixels from the image's top.
    pub y: u32,
    /// Width in pixels.
    pub width: u32,
    /// Height in pixels.
    pub height: u32,
}

/// One unit of the puzzle: a fixed identity, a mutable current slot, and
/// the image crop it renders.
///
/// The blank tile has no region.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Tile {
    id: TileId,
    slot: Slot,
    region: Option<TileRegion>,
}

impl Tile {
    pub(crate) fn new(id: TileId, slot: Slot, region: Option<TileRegion>) -> Self {
        Self { id, slot, region }
    }

    /// Returns the tile's fixed identity.
    #[must_use]
    #[inline]
    pub fn id(&self) -> TileId {
        self.id
    }

    /// Returns the slot the tile currently occupies.
    #[must_use]
    #[inline]
    pub fn slot(&self) -> Slot {
        self.slot
    }

    pub(crate) fn set_slot(&mut self, slot: Slot) {
        self.slot = slot;
    }

    /// Returns the image crop this tile renders, or `None` for the blank.
    #[must_use]
    #[inline]
    pub fn region(&self) -> Option<TileRegion> {
        self.region
    }

    /// Returns whether this is the blank tile (the open grid cell).
    #[must_use]
    pub fn is_blank(&self) -> bool {
        self.region.is_none()
    }

    /// Returns whether the tile currently sits on its solved slot.
    #[must_use]
    pub fn is_home(&self) -> bool {
        self.slot.get() == self.id.get()
    }
}
