use eframe::egui::{
    Align2, Color32, FontId, Painter, Rect, Sense, Spinner, TextureHandle, Ui, pos2, vec2,
};
use egui_extras::{Size, StripBuilder};
use picslide_game::TileSet;

use crate::action::{Action, ActionRequestQueue};

const FULL_UV: Rect = Rect {
    min: pos2(0.0, 0.0),
    max: pos2(1.0, 1.0),
};

#[derive(Clone)]
pub struct BoardViewModel<'a> {
    tiles: Option<&'a TileSet>,
    textures: &'a [Option<TextureHandle>],
    solved: bool,
}

impl<'a> BoardViewModel<'a> {
    #[must_use]
    pub fn new(
        tiles: Option<&'a TileSet>,
        textures: &'a [Option<TextureHandle>],
        solved: bool,
    ) -> Self {
        Self {
            tiles,
            textures,
            solved,
        }
    }
}

/// Lays the square board out centered in the available space.
pub fn show(ui: &mut Ui, vm: &BoardViewModel, action_queue: &mut ActionRequestQueue) {
    let spacing = ui.spacing().item_spacing;
    let side = (ui.available_size() - spacing).min_elem().max(0.0);

    StripBuilder::new(ui)
        .size(Size::remainder())
        .size(Size::exact(side))
        .size(Size::remainder())
        .horizontal(|mut strip| {
            strip.empty();
            strip.cell(|ui| {
                StripBuilder::new(ui)
                    .size(Size::remainder())
                    .size(Size::exact(side))
                    .size(Size::remainder())
                    .vertical(|mut strip| {
                        strip.empty();
                        strip.cell(|ui| {
                            board_square(ui, vm, action_queue);
                        });
                        strip.empty();
                    });
            });
            strip.empty();
        });
}

fn board_square(ui: &mut Ui, vm: &BoardViewModel, action_queue: &mut ActionRequestQueue) {
    let Some(tiles) = vm.tiles else {
        empty_placeholder(ui);
        return;
    };

    let size = tiles.size();
    let n = f32::from(size.get());
    let (rect, _) = ui.allocate_exact_size(ui.available_size(), Sense::hover());
    let cell = rect.width() / n;
    let painter = ui.painter_at(rect);
    painter.rect_filled(rect, 4, ui.visuals().extreme_bg_color);

    for tile in tiles.iter() {
        if tile.is_blank() {
            continue;
        }

        // The shared slot -> coordinate mapping decides where the tile is
        // drawn, so visuals can never drift from the adjacency rules.
        let coord = tile.slot().coord(size);
        let min = rect.min + vec2(f32::from(coord.col) * cell, f32::from(coord.row) * cell);
        let tile_rect = Rect::from_min_size(min, vec2(cell, cell)).shrink(1.0);

        let texture = vm
            .textures
            .get(usize::from(tile.id().get()) - 1)
            .and_then(Option::as_ref);
        if let Some(texture) = texture {
            painter.image(texture.id(), tile_rect, FULL_UV, Color32::WHITE);
        } else {
            // No texture yet (or headless): fall back to the tile number.
            painter.rect_filled(tile_rect, 2, ui.visuals().faint_bg_color);
            painter.text(
                tile_rect.center(),
                Align2::CENTER_CENTER,
                tile.id().to_string(),
                FontId::proportional(cell * 0.4),
                ui.visuals().text_color(),
            );
        }

        if !vm.solved {
            let response = ui.interact(
                tile_rect,
                ui.id().with(("tile", tile.id().get())),
                Sense::click(),
            );
            if response.clicked() {
                action_queue.request(Action::ClickTile(tile.id()));
            }
        }
    }

    if vm.solved {
        solved_overlay(&painter, rect);
    }
}

fn empty_placeholder(ui: &mut Ui) {
    ui.vertical_centered(|ui| {
        ui.add_space(ui.available_height() * 0.4);
        ui.add(Spinner::new().size(48.0));
        ui.add_space(8.0);
        ui.label("Pick an image to build a puzzle");
    });
}

fn solved_overlay(painter: &Painter, rect: Rect) {
    painter.rect_filled(rect, 4, Color32::from_black_alpha(96));
    painter.text(
        rect.center(),
        Align2::CENTER_CENTER,
        "Solved!",
        FontId::proportional(rect.height() * 0.1),
        Color32::WHITE,
    );
}
