use boardkit_core::Position;

use crate::{
    action::{Action, ActionRequestQueue},
    state::AppState,
};

const DEFAULT_POSITION: Position = Position::new(0, 0);

/// Drains the queue and applies every pending action to `state`.
pub fn handle_all(state: &mut AppState, queue: &mut ActionRequestQueue) {
    for action in queue.take_all() {
        handle(state, action);
    }
}

fn handle(state: &mut AppState, action: Action) {
    match action {
        Action::SelectCell(pos) => state.board.select(pos),
        Action::ClearSelection => state.board.clear_selection(),
        Action::MoveSelection(direction) => {
            // Keyboard navigation with no selection starts from the origin.
            let current = state.board.selected().unwrap_or(DEFAULT_POSITION);
            let next = direction.apply_to(current).unwrap_or(current);
            state.board.select(next);
        }
        Action::EnterText(text) => {
            if let Some(pos) = state.board.selected() {
                state.board.enter_value(pos, &text);
            }
        }
    }
}
