use boardkit_core::Position;

use crate::{
    state::AppState,
    ui::{
        board_screen::BoardScreenViewModel,
        grid::{GridCell, GridViewModel, GridVisualState},
        status_line::StatusLineViewModel,
    },
};

fn build_grid(state: &AppState) -> GridViewModel {
    let cells = std::array::from_fn(|index| {
        let pos = Position::ALL[index];
        let mut visual_state = GridVisualState::empty();
        if state.board.is_selected(pos) {
            visual_state |= GridVisualState::SELECTED;
        }
        // Checkerboard shading over the 3x3 boxes.
        if pos.box_index() % 2 == 1 {
            visual_state |= GridVisualState::ALT_BOX;
        }
        GridCell {
            value: state.board.value(pos),
            visual_state,
        }
    });
    GridViewModel::new(cells)
}

#[must_use]
pub fn build_board_screen_view_model(state: &AppState) -> BoardScreenViewModel {
    BoardScreenViewModel::new(
        build_grid(state),
        StatusLineViewModel::new(state.board.selected()),
    )
}
