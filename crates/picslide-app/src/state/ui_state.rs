use eframe::egui::{Context, TextureHandle, TextureOptions};
use picslide_game::TileSet;

use crate::image_loader::{self, LoadedImage};

// UiState owns the rendering side: the decoded source raster, the
// per-tile textures sliced from it, and transient feedback like load
// errors. Tile textures are indexed by tile id - 1; the blank has none.
#[derive(Default)]
pub(crate) struct UiState {
    pub(crate) source: Option<LoadedImage>,
    pub(crate) tile_textures: Vec<Option<TextureHandle>>,
    pub(crate) preview: Option<TextureHandle>,
    pub(crate) load_error: Option<String>,
}

impl UiState {
    /// Re-slices the source raster into one texture per non-blank tile.
    ///
    /// Called whenever the board is rebuilt (new image or new grid
    /// size). Without a source image there is nothing to slice and any
    /// stale textures are dropped.
    pub(crate) fn rebuild_tile_textures(&mut self, ctx: &Context, tiles: &TileSet) {
        let Some(source) = &self.source else {
            self.tile_textures.clear();
            return;
        };
        self.tile_textures = tiles
            .iter()
            .map(|tile| {
                tile.region().map(|region| {
                    ctx.load_texture(
                        format!("tile-{}", tile.id()),
                        image_loader::tile_color_image(source, region),
                        TextureOptions::LINEAR,
                    )
                })
            })
            .collect();
    }

    /// Drops everything derived from the current board and image.
    pub(crate) fn clear_board(&mut self) {
        self.source = None;
        self.tile_textures.clear();
        self.preview = None;
        self.load_error = None;
    }
}
