//! Picslide desktop application UI.
//!
//! # Design Notes
//! - Desktop-focused: a centered square board with a sidebar for the
//!   grid-size control, image selection, and status.
//! - Mouse clicks slide tiles; arrow keys slide the blank's neighbors.
//! - Status display derived from the session phase.

use eframe::{
    App, CreationContext, Frame,
    egui::{CentralPanel, Context, SidePanel},
};

use crate::{
    action::ActionRequestQueue,
    action_handler,
    state::{AppState, UiState},
    ui::{self, board::BoardViewModel, sidebar::SidebarViewModel},
};

pub struct PicslideApp {
    app_state: AppState,
    ui_state: UiState,
}

impl PicslideApp {
    #[must_use]
    pub fn new(_cc: &CreationContext<'_>) -> Self {
        Self {
            app_state: AppState::new(),
            ui_state: UiState::default(),
        }
    }
}

impl App for PicslideApp {
    fn update(&mut self, ctx: &Context, _frame: &mut Frame) {
        let mut action_queue = ActionRequestQueue::default();

        ctx.input(|i| ui::input::handle_input(i, &mut action_queue));
        action_handler::handle_all(&mut self.app_state, &mut self.ui_state, ctx, &mut action_queue);

        SidePanel::left("sidebar")
            .resizable(false)
            .exact_width(220.0)
            .show(ctx, |panel_ui| {
                let vm = SidebarViewModel::new(
                    self.app_state.session.phase(),
                    self.app_state.session.grid_size().get(),
                    self.ui_state.preview.as_ref(),
                    self.ui_state.load_error.as_deref(),
                );
                ui::sidebar::show(panel_ui, &vm, &mut action_queue);
            });

        CentralPanel::default().show(ctx, |panel_ui| {
            let vm = BoardViewModel::new(
                self.app_state.session.tiles(),
                &self.ui_state.tile_textures,
                self.app_state.session.is_complete(),
            );
            ui::board::show(panel_ui, &vm, &mut action_queue);
        });

        action_handler::handle_all(&mut self.app_state, &mut self.ui_state, ctx, &mut action_queue);
    }
}
