//! The game session orchestrator.

use picslide_core::GridSize;

use crate::{ImageInfo, Shuffler, SlideBlock, TileId, TileSet};

/// The observable phase of a [`Session`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, derive_more::IsVariant)]
pub enum SessionPhase {
    /// No image supplied yet; only the stored grid size exists.
    Empty,
    /// A shuffled board is in play.
    Ready,
    /// The board reached the solved arrangement; only restart leaves this
    /// phase.
    Solved,
}

/// The result of a tile click.
#[derive(Debug, Clone, Copy, PartialEq, Eq, derive_more::IsVariant)]
pub enum ClickOutcome {
    /// The tile slid into the blank slot.
    Moved,
    /// The tile slid into the blank slot and completed the puzzle.
    Solved,
    /// Nothing changed.
    Ignored(ClickIgnored),
}

/// Why a click left the session untouched.
///
/// None of these are failures; they are normal, expected events that the
/// session absorbs silently.
#[derive(Debug, Clone, Copy, PartialEq, Eq, derive_more::Display)]
pub enum ClickIgnored {
    /// No image has been supplied, so there is no board to play.
    #[display("no board is in play")]
    NoBoard,
    /// The puzzle is already solved; the board is frozen until restart.
    #[display("the puzzle is already solved")]
    AlreadySolved,
    /// The clicked tile is the blank itself.
    #[display("the blank tile cannot be slid")]
    Blank,
    /// The clicked tile is not grid-adjacent to the blank.
    #[display("tile is not adjacent to the blank")]
    NotAdjacent,
}

impl From<SlideBlock> for ClickIgnored {
    fn from(block: SlideBlock) -> Self {
        match block {
            SlideBlock::Blank => Self::Blank,
            SlideBlock::NotAdjacent => Self::NotAdjacent,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
struct Board {
    image: ImageInfo,
    tiles: TileSet,
    solved: bool,
}

/// A sliding-puzzle game session.
///
/// Owns the current grid size, the source image reference, the tile
/// arrangement, and the completion flag, and orchestrates building,
/// shuffling, move validation, and win detection in response to external
/// events. All operations are synchronous and run to completion.
///
/// The session starts empty. Supplying an image builds and shuffles a
/// board; changing the grid size rebuilds it from scratch (progress is
/// intentionally discarded); restarting returns to the empty phase with
/// the default grid size.
///
/// # Examples
///
/// ```
/// use picslide_core::GridSize;
/// use picslide_game::{ImageInfo, Session, SessionPhase, Shuffler};
///
/// let mut shuffler = Shuffler::with_seed(9);
/// let mut session = Session::new();
/// session.set_grid_size(GridSize::new(4), &mut shuffler);
///
/// session.supply_image(ImageInfo { side_px: 512 }, &mut shuffler);
/// assert_eq!(session.phase(), SessionPhase::Ready);
/// assert_eq!(session.tiles().unwrap().len(), 16);
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Session {
    grid_size: GridSize,
    board: Option<Board>,
}

impl Session {
    /// Creates an empty session with the default grid size.
    #[must_use]
    pub fn new() -> Self {
        Self {
            grid_size: GridSize::DEFAULT,
            board: None,
        }
    }

    /// Creates a session around a prepared arrangement.
    ///
    /// The grid size is taken from the tile set and the completion flag
    /// from its current arrangement. Used to resume a known board state,
    /// chiefly in tests.
    #[must_use]
    pub fn with_board(image: ImageInfo, tiles: TileSet) -> Self {
        let solved = tiles.is_solved();
        Self {
            grid_size: tiles.size(),
            board: Some(Board {
                image,
                tiles,
                solved,
            }),
        }
    }

    /// Returns the current grid size.
    #[must_use]
    pub fn grid_size(&self) -> GridSize {
        self.grid_size
    }

    /// Returns the session's phase.
    #[must_use]
    pub fn phase(&self) -> SessionPhase {
        match &self.board {
            None => SessionPhase::Empty,
            Some(board) if board.solved => SessionPhase::Solved,
            Some(_) => SessionPhase::Ready,
        }
    }

    /// Returns whether the puzzle has been solved this session.
    #[must_use]
    pub fn is_complete(&self) -> bool {
        self.board.as_ref().is_some_and(|board| board.solved)
    }

    /// Returns the tile arrangement in play, if any.
    #[must_use]
    pub fn tiles(&self) -> Option<&TileSet> {
        self.board.as_ref().map(|board| &board.tiles)
    }

    /// Returns the descriptor of the image in play, if any.
    #[must_use]
    pub fn image(&self) -> Option<ImageInfo> {
        self.board.as_ref().map(|board| board.image)
    }

    /// Supplies a decoded square image, building and shuffling a fresh
    /// board at the current grid size.
    ///
    /// Valid from any phase; any previous board is discarded and the
    /// completion flag reset.
    pub fn supply_image(&mut self, image: ImageInfo, shuffler: &mut Shuffler) {
        let mut tiles = TileSet::build(image, self.grid_size);
        shuffler.shuffle(&mut tiles);
        self.board = Some(Board {
            image,
            tiles,
            solved: false,
        });
    }

    /// Changes the grid size.
    ///
    /// With a board in play this rebuilds and reshuffles it at the new
    /// size, discarding all progress. While empty, the size is only
    /// stored for the next image.
    pub fn set_grid_size(&mut self, size: GridSize, shuffler: &mut Shuffler) {
        self.grid_size = size;
        if let Some(board) = &self.board {
            let image = board.image;
            self.supply_image(image, shuffler);
        }
    }

    /// Handles a click on the tile with the given identity.
    ///
    /// A legal click slides the tile into the blank slot and runs win
    /// detection; once the detector reports solved, the completion flag
    /// stays set until [`Session::restart`]. Everything else is a silent
    /// no-op with a reason.
    ///
    /// # Panics
    ///
    /// Panics if `id` does not belong to the board in play.
    pub fn click_tile(&mut self, id: TileId) -> ClickOutcome {
        let Some(board) = &mut self.board else {
            return ClickOutcome::Ignored(ClickIgnored::NoBoard);
        };
        if board.solved {
            return ClickOutcome::Ignored(ClickIgnored::AlreadySolved);
        }
        match board.tiles.slide(id) {
            Ok(()) => {
                if board.tiles.is_solved() {
                    board.solved = true;
                    ClickOutcome::Solved
                } else {
                    ClickOutcome::Moved
                }
            }
            Err(block) => ClickOutcome::Ignored(block.into()),
        }
    }

    /// Resets the session to the empty phase: image reference dropped,
    /// tiles emptied, completion flag cleared, grid size back to the
    /// default. Idempotent.
    pub fn restart(&mut self) {
        self.grid_size = GridSize::DEFAULT;
        self.board = None;
    }
}

impl Default for Session {
    fn default() -> Self {
        Self::new()
    }
}
