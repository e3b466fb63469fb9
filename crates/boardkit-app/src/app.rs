//! Boardkit Sudoku board demo UI.
//!
//! # Design Notes
//! - Desktop-focused demo: a 9x9 grid with clear 3x3 boundaries, mouse
//!   selection, and keyboard navigation/digit entry.
//! - All mutations flow through the action queue; the board in [`AppState`]
//!   owns the logical state and the UI renders from a per-frame view model.

use boardkit_core::Position;
use eframe::{
    App, CreationContext, Frame,
    egui::{CentralPanel, Context},
};

use crate::{
    action::{self, ActionRequestQueue},
    state::AppState,
    ui, view_model_builder,
};

#[derive(Debug)]
pub struct BoardApp {
    state: AppState,
}

impl BoardApp {
    #[must_use]
    pub fn new(_cc: &CreationContext<'_>) -> Self {
        Self {
            state: AppState::new(),
        }
    }

    /// Creates the demo app with a few cells pre-filled.
    #[must_use]
    pub fn with_demo_values(cc: &CreationContext<'_>) -> Self {
        let mut app = Self::new(cc);
        for (pos, input) in [
            (Position::new(0, 0), "5"),
            (Position::new(2, 1), "3"),
            (Position::new(8, 8), "9"),
        ] {
            app.state.board.enter_value(pos, input);
        }
        app
    }
}

impl App for BoardApp {
    fn update(&mut self, ctx: &Context, _frame: &mut Frame) {
        let mut action_queue = ActionRequestQueue::default();

        ctx.input(|i| ui::input::handle_input(i, &mut action_queue));
        action::handler::handle_all(&mut self.state, &mut action_queue);

        let vm = view_model_builder::build_board_screen_view_model(&self.state);

        CentralPanel::default().show(ctx, |ui| {
            ui::board_screen::show(ui, &vm, &mut action_queue);
        });

        // Clicks recorded during rendering are applied before the next frame.
        action::handler::handle_all(&mut self.state, &mut action_queue);
    }
}
