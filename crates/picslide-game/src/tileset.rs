//! The tile collection: building, sliding, win detection.

use picslide_core::{GridSize, Slot};
use rand::{Rng, seq::SliceRandom as _};

use crate::{ImageInfo, Tile, TileId, TileRegion};

/// Why a slide request was ignored.
///
/// Neither case is a failure: clicking a non-adjacent tile is a normal
/// user action, and a click on the blank itself should never reach the
/// engine. Both leave the board untouched.
#[derive(Debug, Clone, Copy, PartialEq, Eq, derive_more::Display, derive_more::Error)]
pub enum SlideBlock {
    /// The requested tile is the blank; the blank is not a move target.
    #[display("the blank tile cannot be slid")]
    Blank,
    /// The requested tile is not grid-adjacent to the blank.
    #[display("tile is not adjacent to the blank")]
    NotAdjacent,
}

/// An ordered collection of `n²` tiles, one per slot.
///
/// Tiles are stored in id order and keep that order for their entire
/// life; only the `slot` field of each tile changes. At every point the
/// slots of all tiles form exactly the set `{1..n²}`: building assigns
/// `slot == id`, shuffling applies a permutation, and sliding applies a
/// transposition, so the bijection holds by construction.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TileSet {
    size: GridSize,
    tiles: Vec<Tile>,
}

impl TileSet {
    /// Partitions a square image into an n×n tile collection in solved
    /// order.
    ///
    /// Ids are assigned row-major (`id = row·n + col + 1`); the last cell
    /// becomes the blank tile with no image region. Each non-blank tile's
    /// region is the rectangle from boundary `k·W/n` to `(k+1)·W/n` on
    /// both axes, which covers the raster exactly. The source image is
    /// only described, never touched.
    #[must_use]
    pub fn build(image: ImageInfo, size: GridSize) -> Self {
        let n = u32::from(size.get());
        let side = image.side_px;
        let blank_id = size.cell_count();

        let tiles = Slot::all(size)
            .map(|slot| {
                let id = TileId::new(slot.get());
                let region = (id.get() != blank_id).then(|| {
                    let coord = slot.coord(size);
                    let (row, col) = (u32::from(coord.row), u32::from(coord.col));
                    let x = col * side / n;
                    let y = row * side / n;
                    TileRegion {
                        x,
                        y,
                        width: (col + 1) * side / n - x,
                        height: (row + 1) * side / n - y,
                    }
                });
                Tile::new(id, slot, region)
            })
            .collect();

        Self { size, tiles }
    }

    /// Returns the board dimension.
    #[must_use]
    pub fn size(&self) -> GridSize {
        self.size
    }

    /// Returns the number of tiles (`n²`, blank included).
    #[must_use]
    pub fn len(&self) -> usize {
        self.tiles.len()
    }

    /// Returns whether the collection holds no tiles. Never true for a
    /// built set.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.tiles.is_empty()
    }

    /// Returns an iterator over all tiles in id order.
    pub fn iter(&self) -> impl Iterator<Item = &Tile> {
        self.tiles.iter()
    }

    /// Returns the tile with the given identity.
    ///
    /// # Panics
    ///
    /// Panics if `id` does not belong to this board.
    #[must_use]
    pub fn tile(&self, id: TileId) -> &Tile {
        &self.tiles[usize::from(id.get()) - 1]
    }

    /// Returns the tile currently occupying `slot`, or `None` if the slot
    /// is outside this board.
    #[must_use]
    pub fn tile_at(&self, slot: Slot) -> Option<&Tile> {
        self.tiles.iter().find(|tile| tile.slot() == slot)
    }

    /// Returns the slot the blank tile currently occupies.
    #[must_use]
    pub fn blank_slot(&self) -> Slot {
        // The blank is the highest id, so it is the last stored tile.
        self.tiles[self.tiles.len() - 1].slot()
    }

    /// Applies a uniform random permutation to the slot assignment across
    /// all tiles, blank included. Ids are untouched.
    ///
    /// No solvability check is performed; the resulting arrangement may be
    /// unreachable by legal slides.
    pub fn shuffle<R: Rng + ?Sized>(&mut self, rng: &mut R) {
        let mut slots: Vec<Slot> = self.tiles.iter().map(Tile::slot).collect();
        slots.shuffle(rng);
        for (tile, slot) in self.tiles.iter_mut().zip(slots) {
            tile.set_slot(slot);
        }
    }

    /// Checks whether sliding the given tile into the blank is legal,
    /// without mutating the board.
    ///
    /// # Errors
    ///
    /// Returns [`SlideBlock::Blank`] if `id` names the blank tile, or
    /// [`SlideBlock::NotAdjacent`] if the tile's slot and the blank's slot
    /// are not at Manhattan distance exactly 1.
    ///
    /// # Panics
    ///
    /// Panics if `id` does not belong to this board.
    pub fn slide_capability(&self, id: TileId) -> Result<(), SlideBlock> {
        let tile = self.tile(id);
        if tile.is_blank() {
            return Err(SlideBlock::Blank);
        }
        if !tile.slot().is_adjacent(self.blank_slot(), self.size) {
            return Err(SlideBlock::NotAdjacent);
        }
        Ok(())
    }

    /// Slides the given tile into the blank slot.
    ///
    /// On success, exactly the clicked tile's and the blank's slots are
    /// exchanged; every other tile is untouched, so the slot bijection is
    /// preserved. On a block the board is left unchanged.
    ///
    /// # Errors
    ///
    /// See [`TileSet::slide_capability`].
    ///
    /// # Panics
    ///
    /// Panics if `id` does not belong to this board.
    pub fn slide(&mut self, id: TileId) -> Result<(), SlideBlock> {
        self.slide_capability(id)?;
        let blank_index = self.tiles.len() - 1;
        let clicked_index = usize::from(id.get()) - 1;
        let clicked_slot = self.tiles[clicked_index].slot();
        let blank_slot = self.tiles[blank_index].slot();
        self.tiles[clicked_index].set_slot(blank_slot);
        self.tiles[blank_index].set_slot(clicked_slot);
        Ok(())
    }

    /// Returns whether every tile sits on its solved slot.
    #[must_use]
    pub fn is_solved(&self) -> bool {
        self.tiles.iter().all(Tile::is_home)
    }
}

#[cfg(test)]
mod tests {
    use proptest::prelude::*;

    use super::*;
    use crate::Shuffler;

    const IMAGE: ImageInfo = ImageInfo { side_px: 600 };

    #[test]
    fn test_build_assigns_row_major_ids_in_solved_order() {
        let tiles = TileSet::build(IMAGE, GridSize::new(3));
        assert_eq!(tiles.len(), 9);
        for (i, tile) in tiles.iter().enumerate() {
            let expected = u8::try_from(i + 1).unwrap();
            assert_eq!(tile.id().get(), expected);
            assert_eq!(tile.slot().get(), expected);
        }
    }

    #[test]
    fn test_build_marks_exactly_one_blank_with_highest_id() {
        for n in 2..=9 {
            let size = GridSize::new(n);
            let tiles = TileSet::build(IMAGE, size);
            let blanks: Vec<_> = tiles.iter().filter(|tile| tile.is_blank()).collect();
            assert_eq!(blanks.len(), 1);
            assert_eq!(blanks[0].id().get(), size.cell_count());
        }
    }

    #[test]
    fn test_build_regions_are_exact_crops() {
        let tiles = TileSet::build(IMAGE, GridSize::new(3));
        // 600 / 3 divides evenly: every region is 200x200 at grid-aligned
        // offsets.
        let region = tiles.tile(TileId::new(5)).region().unwrap();
        assert_eq!(
            region,
            TileRegion {
                x: 200,
                y: 200,
                width: 200,
                height: 200
            }
        );
        let region = tiles.tile(TileId::new(3)).region().unwrap();
        assert_eq!(
            region,
            TileRegion {
                x: 400,
                y: 0,
                width: 200,
                height: 200
            }
        );
    }

    #[test]
    fn test_build_regions_tile_fractional_sizes_exactly() {
        // 100 / 3 is fractional; boundaries land at 0, 33, 66, 100 so the
        // row widths are 33, 33, 34 with no gap or overlap.
        let tiles = TileSet::build(ImageInfo { side_px: 100 }, GridSize::new(3));
        let widths: Vec<u32> = (1..=3)
            .map(|id| tiles.tile(TileId::new(id)).region().unwrap().width)
            .collect();
        assert_eq!(widths, [33, 33, 34]);
        assert_eq!(widths.iter().sum::<u32>(), 100);
        let last = tiles.tile(TileId::new(3)).region().unwrap();
        assert_eq!(last.x + last.width, 100);
    }

    #[test]
    fn test_shuffle_preserves_slot_bijection() {
        let mut shuffler = Shuffler::with_seed(7);
        for n in 2..=9 {
            let size = GridSize::new(n);
            let mut tiles = TileSet::build(IMAGE, size);
            shuffler.shuffle(&mut tiles);
            let mut slots: Vec<u8> = tiles.iter().map(|tile| tile.slot().get()).collect();
            slots.sort_unstable();
            let expected: Vec<u8> = (1..=size.cell_count()).collect();
            assert_eq!(slots, expected);
            // Ids untouched.
            for (i, tile) in tiles.iter().enumerate() {
                assert_eq!(usize::from(tile.id().get()), i + 1);
            }
        }
    }

    #[test]
    fn test_slide_swaps_exactly_the_clicked_and_blank_slots() {
        let mut tiles = TileSet::build(IMAGE, GridSize::new(3));
        // Solved order: blank (id 9) at slot 9, tile 8 at slot 8 is
        // adjacent to it.
        let before = tiles.clone();
        tiles.slide(TileId::new(8)).unwrap();
        assert_eq!(tiles.tile(TileId::new(8)).slot(), Slot::new(9));
        assert_eq!(tiles.blank_slot(), Slot::new(8));
        for id in 1..=7 {
            let id = TileId::new(id);
            assert_eq!(tiles.tile(id).slot(), before.tile(id).slot());
        }
    }

    #[test]
    fn test_slide_rejects_non_adjacent_and_blank_without_mutation() {
        let mut tiles = TileSet::build(IMAGE, GridSize::new(3));
        let before = tiles.clone();

        // Tile 1 is two rows and two columns away from the blank at 9.
        assert_eq!(tiles.slide(TileId::new(1)), Err(SlideBlock::NotAdjacent));
        assert_eq!(tiles, before);

        // Diagonal neighbor of the blank.
        assert_eq!(tiles.slide(TileId::new(5)), Err(SlideBlock::NotAdjacent));
        assert_eq!(tiles, before);

        // The blank itself.
        assert_eq!(tiles.slide(TileId::new(9)), Err(SlideBlock::Blank));
        assert_eq!(tiles, before);
    }

    #[test]
    fn test_is_solved_detects_home_arrangement() {
        let mut tiles = TileSet::build(IMAGE, GridSize::new(2));
        assert!(tiles.is_solved());
        tiles.slide(TileId::new(3)).unwrap();
        assert!(!tiles.is_solved());
        tiles.slide(TileId::new(3)).unwrap();
        assert!(tiles.is_solved());
    }

    #[test]
    fn test_blank_slot_tracks_the_blank() {
        let mut tiles = TileSet::build(IMAGE, GridSize::new(3));
        assert_eq!(tiles.blank_slot(), Slot::new(9));
        tiles.slide(TileId::new(6)).unwrap();
        assert_eq!(tiles.blank_slot(), Slot::new(6));
        tiles.slide(TileId::new(5)).unwrap();
        assert_eq!(tiles.blank_slot(), Slot::new(5));
    }

    #[test]
    fn test_tile_at_finds_by_current_slot() {
        let mut tiles = TileSet::build(IMAGE, GridSize::new(3));
        tiles.slide(TileId::new(8)).unwrap();
        assert_eq!(tiles.tile_at(Slot::new(9)).unwrap().id(), TileId::new(8));
        assert_eq!(tiles.tile_at(Slot::new(8)).unwrap().id(), TileId::new(9));
    }

    proptest! {
        #[test]
        fn bijection_holds_under_any_shuffle_and_click_sequence(
            n in 2u8..=5,
            seed in any::<u64>(),
            clicks in prop::collection::vec(1u8..=25, 0..40),
        ) {
            let size = GridSize::new(n);
            let mut shuffler = Shuffler::with_seed(seed);
            let mut tiles = TileSet::build(IMAGE, size);
            shuffler.shuffle(&mut tiles);

            for click in clicks {
                if click > size.cell_count() {
                    continue;
                }
                // Rejected slides must leave the board untouched.
                let before = tiles.clone();
                if tiles.slide(TileId::new(click)).is_err() {
                    prop_assert_eq!(&tiles, &before);
                }

                let mut slots: Vec<u8> =
                    tiles.iter().map(|tile| tile.slot().get()).collect();
                slots.sort_unstable();
                let expected: Vec<u8> = (1..=size.cell_count()).collect();
                prop_assert_eq!(slots, expected);

                // Exactly one blank, and it is always the highest id.
                let blanks: Vec<_> =
                    tiles.iter().filter(|tile| tile.is_blank()).collect();
                prop_assert_eq!(blanks.len(), 1);
                prop_assert_eq!(blanks[0].id().get(), size.cell_count());
            }
        }
    }
}
