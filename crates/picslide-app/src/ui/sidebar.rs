use eframe::egui::{DragValue, Image, RichText, TextureHandle, Ui};
use picslide_core::GridSize;
use picslide_game::SessionPhase;

use crate::action::{Action, ActionRequestQueue};

#[derive(Clone)]
pub struct SidebarViewModel<'a> {
    phase: SessionPhase,
    grid_size: u8,
    preview: Option<&'a TextureHandle>,
    load_error: Option<&'a str>,
}

impl<'a> SidebarViewModel<'a> {
    #[must_use]
    pub fn new(
        phase: SessionPhase,
        grid_size: u8,
        preview: Option<&'a TextureHandle>,
        load_error: Option<&'a str>,
    ) -> Self {
        Self {
            phase,
            grid_size,
            preview,
            load_error,
        }
    }
}

pub fn show(ui: &mut Ui, vm: &SidebarViewModel, action_queue: &mut ActionRequestQueue) {
    ui.vertical(|ui| {
        ui.heading("Picslide");
        ui.separator();

        ui.group(|ui| {
            let status = match vm.phase {
                SessionPhase::Empty => RichText::new("Pick an image to start"),
                SessionPhase::Ready => RichText::new("Game in progress"),
                SessionPhase::Solved => RichText::new("Congratulations! You solved the puzzle!")
                    .color(ui.visuals().warn_fg_color),
            };
            ui.label(status.size(16.0));
        });
        ui.add_space(8.0);

        ui.label("Grid size");
        let mut size = vm.grid_size;
        let response = ui.add(
            DragValue::new(&mut size).range(GridSize::MIN.get()..=GridSize::MAX.get()),
        );
        if response.changed() {
            action_queue.request(Action::SetGridSize(size));
        }
        ui.add_space(8.0);

        if ui.button("Open image\u{2026}").clicked() {
            action_queue.request(Action::PickImage);
        }
        if let Some(error) = vm.load_error {
            ui.colored_label(ui.visuals().error_fg_color, error);
        }

        if let Some(preview) = vm.preview {
            ui.add_space(8.0);
            ui.label("Source");
            ui.add(Image::new(preview).max_width(ui.available_width()));
        }

        if !vm.phase.is_empty() {
            ui.add_space(8.0);
            if ui.button("Restart").clicked() {
                action_queue.request(Action::Restart);
            }
        }
    });
}
