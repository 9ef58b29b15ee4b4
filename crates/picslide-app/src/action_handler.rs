use eframe::egui::Context;
use picslide_core::GridSize;
use picslide_game::{ClickOutcome, TileId};

use crate::{
    action::{Action, ActionRequestQueue, SlideDirection},
    image_loader,
    state::{AppState, UiState},
};

pub(crate) fn handle_all(
    app_state: &mut AppState,
    ui_state: &mut UiState,
    ctx: &Context,
    action_queue: &mut ActionRequestQueue,
) {
    for action in action_queue.take_all() {
        handle(app_state, ui_state, ctx, action);
    }
}

pub(crate) fn handle(
    app_state: &mut AppState,
    ui_state: &mut UiState,
    ctx: &Context,
    action: Action,
) {
    match action {
        Action::ClickTile(id) => click_tile(app_state, id),
        Action::SlideBlank(direction) => {
            if let Some(id) = tile_toward_blank(app_state, direction) {
                click_tile(app_state, id);
            }
        }
        Action::SetGridSize(raw) => set_grid_size(app_state, ui_state, ctx, raw),
        Action::PickImage => pick_image(app_state, ui_state, ctx),
        Action::Restart => {
            app_state.session.restart();
            ui_state.clear_board();
            log::info!("session restarted");
        }
    }
}

fn click_tile(app_state: &mut AppState, id: TileId) {
    match app_state.session.click_tile(id) {
        ClickOutcome::Moved => {}
        ClickOutcome::Solved => log::info!("puzzle solved"),
        ClickOutcome::Ignored(reason) => log::debug!("click on tile {id} ignored: {reason}"),
    }
}

/// Resolves an arrow key to the tile that should slide: the blank's
/// neighbor on the side opposite the pressed direction.
fn tile_toward_blank(app_state: &AppState, direction: SlideDirection) -> Option<TileId> {
    let tiles = app_state.session.tiles()?;
    let size = tiles.size();
    let blank = tiles.blank_slot();
    let source = match direction {
        SlideDirection::Up => blank.down(size),
        SlideDirection::Down => blank.up(size),
        SlideDirection::Left => blank.right(size),
        SlideDirection::Right => blank.left(size),
    }?;
    tiles.tile_at(source).map(picslide_game::Tile::id)
}

fn set_grid_size(app_state: &mut AppState, ui_state: &mut UiState, ctx: &Context, raw: u8) {
    let size = GridSize::new(raw);
    if size == app_state.session.grid_size() {
        return;
    }
    app_state.session.set_grid_size(size, &mut app_state.shuffler);
    if let Some(tiles) = app_state.session.tiles() {
        log::info!("board rebuilt at {size}x{size}");
        ui_state.rebuild_tile_textures(ctx, tiles);
    }
}

fn pick_image(app_state: &mut AppState, ui_state: &mut UiState, ctx: &Context) {
    let Some(path) = rfd::FileDialog::new()
        .add_filter("images", &["png", "jpg", "jpeg", "gif", "bmp", "webp"])
        .pick_file()
    else {
        return;
    };

    match image_loader::load_square(&path) {
        Ok(loaded) => {
            log::info!(
                "loaded {} ({}px square)",
                path.display(),
                loaded.side_px()
            );
            ui_state.load_error = None;
            app_state
                .session
                .supply_image(loaded.info(), &mut app_state.shuffler);
            ui_state.preview = Some(ctx.load_texture(
                "source-preview",
                image_loader::full_color_image(&loaded),
                eframe::egui::TextureOptions::LINEAR,
            ));
            ui_state.source = Some(loaded);
            if let Some(tiles) = app_state.session.tiles() {
                ui_state.rebuild_tile_textures(ctx, tiles);
            }
        }
        Err(err) => {
            log::warn!("{err}");
            ui_state.load_error = Some(err.to_string());
        }
    }
}

#[cfg(test)]
mod tests {
    use picslide_core::Slot;
    use picslide_game::{ImageInfo, Session, SessionPhase, TileSet};

    use super::*;

    const IMAGE: ImageInfo = ImageInfo { side_px: 300 };

    fn fixture() -> (AppState, UiState, Context) {
        (AppState::with_seed(11), UiState::default(), Context::default())
    }

    #[test]
    fn set_grid_size_while_empty_only_stores_the_size() {
        let (mut app_state, mut ui_state, ctx) = fixture();

        handle(&mut app_state, &mut ui_state, &ctx, Action::SetGridSize(6));

        assert_eq!(app_state.session.grid_size(), GridSize::new(6));
        assert_eq!(app_state.session.phase(), SessionPhase::Empty);
        assert!(ui_state.tile_textures.is_empty());
    }

    #[test]
    fn set_grid_size_clamps_the_raw_control_value() {
        let (mut app_state, mut ui_state, ctx) = fixture();

        handle(&mut app_state, &mut ui_state, &ctx, Action::SetGridSize(99));

        assert_eq!(app_state.session.grid_size(), GridSize::MAX);
    }

    #[test]
    fn set_grid_size_rebuilds_a_board_in_play() {
        let (mut app_state, mut ui_state, ctx) = fixture();
        app_state
            .session
            .supply_image(IMAGE, &mut app_state.shuffler);

        handle(&mut app_state, &mut ui_state, &ctx, Action::SetGridSize(4));

        assert_eq!(app_state.session.tiles().unwrap().len(), 16);
        assert!(!app_state.session.is_complete());
    }

    #[test]
    fn click_tile_slides_an_adjacent_tile() {
        let (mut app_state, mut ui_state, ctx) = fixture();
        // A solved board freezes clicks, so displace two tiles first;
        // this parks the blank at slot 7.
        let mut tiles = TileSet::build(IMAGE, GridSize::new(3));
        tiles.slide(TileId::new(8)).unwrap();
        tiles.slide(TileId::new(7)).unwrap();
        app_state.session = Session::with_board(IMAGE, tiles);
        assert_eq!(app_state.session.tiles().unwrap().blank_slot(), Slot::new(7));

        // Tile 4 sits directly above the blank.
        handle(
            &mut app_state,
            &mut ui_state,
            &ctx,
            Action::ClickTile(TileId::new(4)),
        );
        assert_eq!(app_state.session.tiles().unwrap().blank_slot(), Slot::new(4));
    }

    #[test]
    fn slide_blank_moves_the_neighbor_opposite_the_arrow() {
        let (mut app_state, mut ui_state, ctx) = fixture();
        app_state
            .session
            .supply_image(IMAGE, &mut app_state.shuffler);

        let before = app_state.session.tiles().unwrap().clone();
        let blank = before.blank_slot();
        let size = before.size();

        handle(
            &mut app_state,
            &mut ui_state,
            &ctx,
            Action::SlideBlank(SlideDirection::Left),
        );

        let after = app_state.session.tiles().unwrap();
        match blank.right(size) {
            // The tile right of the blank slid left: blank moved right.
            Some(source) => {
                assert_eq!(after.blank_slot(), source);
                assert_eq!(
                    after.tile_at(blank).unwrap().id(),
                    before.tile_at(source).unwrap().id()
                );
            }
            // Blank on the right edge: nothing to slide.
            None => assert_eq!(after, &before),
        }
    }

    #[test]
    fn slide_blank_without_a_board_is_ignored() {
        let (mut app_state, mut ui_state, ctx) = fixture();

        handle(
            &mut app_state,
            &mut ui_state,
            &ctx,
            Action::SlideBlank(SlideDirection::Up),
        );

        assert_eq!(app_state.session.phase(), SessionPhase::Empty);
    }

    #[test]
    fn restart_clears_session_and_ui_state() {
        let (mut app_state, mut ui_state, ctx) = fixture();
        app_state
            .session
            .supply_image(IMAGE, &mut app_state.shuffler);
        ui_state.load_error = Some("stale".to_owned());

        handle(&mut app_state, &mut ui_state, &ctx, Action::Restart);

        assert_eq!(app_state.session.phase(), SessionPhase::Empty);
        assert_eq!(app_state.session.grid_size(), GridSize::DEFAULT);
        assert!(ui_state.tile_textures.is_empty());
        assert!(ui_state.load_error.is_none());
    }
}
