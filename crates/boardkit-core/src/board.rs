//! Board state and single-cell selection.

use crate::{Digit, Position};

/// A 9x9 board of optional cell values with at most one selected cell.
///
/// The board is the single owner of all cell state. UI layers render from it
/// and route raw user events back through its methods; they never keep value
/// or selection state of their own. Because the selection is stored as one
/// `Option<Position>` rather than a flag on each cell, "at most one cell is
/// selected" holds by construction.
///
/// # Examples
///
/// ```
/// use boardkit_core::{Board, Digit, Position};
///
/// let mut board = Board::new();
/// board.select(Position::new(2, 3));
/// assert!(board.is_selected(Position::new(2, 3)));
///
/// board.enter_value(Position::new(2, 3), "5");
/// assert_eq!(board.value(Position::new(2, 3)), Some(Digit::D5));
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Board {
    cells: [Option<Digit>; 81],
    selected: Option<Position>,
}

impl Default for Board {
    fn default() -> Self {
        Self::new()
    }
}

impl Board {
    /// Creates an empty board with no selection.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            cells: [None; 81],
            selected: None,
        }
    }

    /// Returns the value stored at `pos`, or `None` if the cell is empty.
    #[must_use]
    pub fn value(&self, pos: Position) -> Option<Digit> {
        self.cells[pos.index()]
    }

    /// Stores `digit` at `pos`, replacing any previous value.
    pub fn set_digit(&mut self, pos: Position, digit: Digit) {
        self.cells[pos.index()] = Some(digit);
    }

    /// Applies raw text input to the cell at `pos`.
    ///
    /// The input is stored only when the entire string parses as an integer
    /// in the range 1-9. Any other input is ignored: rejection is not an
    /// error, produces no diagnostic, and leaves a previously stored value
    /// untouched rather than clearing it.
    pub fn enter_value(&mut self, pos: Position, input: &str) {
        if let Ok(digit) = input.parse::<Digit>() {
            self.set_digit(pos, digit);
        }
    }

    /// Selects the cell at `pos`.
    ///
    /// Any previously selected cell is deselected; selecting the already
    /// selected cell leaves the board unchanged.
    pub fn select(&mut self, pos: Position) {
        self.selected = Some(pos);
    }

    /// Clears the selection. No-op when nothing is selected.
    pub fn clear_selection(&mut self) {
        self.selected = None;
    }

    /// Returns the currently selected cell, if any.
    #[must_use]
    pub const fn selected(&self) -> Option<Position> {
        self.selected
    }

    /// Returns whether the cell at `pos` is the selected cell.
    #[must_use]
    pub fn is_selected(&self, pos: Position) -> bool {
        self.selected == Some(pos)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn selected_count(board: &Board) -> usize {
        Position::ALL
            .iter()
            .filter(|&&pos| board.is_selected(pos))
            .count()
    }

    #[test]
    fn new_board_is_empty_and_unselected() {
        let board = Board::new();
        for pos in Position::ALL {
            assert_eq!(board.value(pos), None);
            assert!(!board.is_selected(pos));
        }
        assert_eq!(board.selected(), None);
    }

    #[test]
    fn select_tracks_exactly_one_cell() {
        let mut board = Board::new();

        board.select(Position::new(1, 2));
        assert_eq!(selected_count(&board), 1);
        assert!(board.is_selected(Position::new(1, 2)));

        // Selecting another cell deselects the previous one.
        board.select(Position::new(7, 0));
        assert_eq!(selected_count(&board), 1);
        assert!(board.is_selected(Position::new(7, 0)));
        assert!(!board.is_selected(Position::new(1, 2)));
    }

    #[test]
    fn reselecting_the_same_cell_is_idempotent() {
        let mut board = Board::new();
        board.select(Position::new(4, 4));
        let after_first = board.clone();

        board.select(Position::new(4, 4));
        assert_eq!(board, after_first);
    }

    #[test]
    fn clear_selection_deselects() {
        let mut board = Board::new();
        board.select(Position::new(3, 2));

        board.clear_selection();
        assert_eq!(board.selected(), None);
        assert_eq!(selected_count(&board), 0);

        // No-op when nothing is selected.
        board.clear_selection();
        assert_eq!(board.selected(), None);
    }

    #[test]
    fn enter_value_stores_valid_digits() {
        let mut board = Board::new();
        let pos = Position::new(2, 5);

        board.enter_value(pos, "5");
        assert_eq!(board.value(pos), Some(Digit::D5));

        board.enter_value(pos, "9");
        assert_eq!(board.value(pos), Some(Digit::D9));
    }

    #[test]
    fn rejected_input_leaves_cell_unchanged() {
        let mut board = Board::new();
        let pos = Position::new(0, 0);

        for input in ["0", "10", "abc", ""] {
            board.enter_value(pos, input);
            assert_eq!(board.value(pos), None, "{input:?} must not set a value");
        }
    }

    #[test]
    fn rejected_input_does_not_clear_previous_value() {
        let mut board = Board::new();
        let pos = Position::new(0, 0);

        board.enter_value(pos, "7");
        board.enter_value(pos, "99");
        assert_eq!(board.value(pos), Some(Digit::D7));

        for input in ["0", "abc", "", "-1"] {
            board.enter_value(pos, input);
            assert_eq!(board.value(pos), Some(Digit::D7));
        }
    }

    #[test]
    fn set_digit_overwrites() {
        let mut board = Board::new();
        let pos = Position::new(8, 8);

        board.set_digit(pos, Digit::D1);
        board.set_digit(pos, Digit::D2);
        assert_eq!(board.value(pos), Some(Digit::D2));
    }

    #[test]
    fn values_are_independent_of_selection() {
        let mut board = Board::new();
        board.enter_value(Position::new(6, 1), "4");

        board.select(Position::new(6, 1));
        board.clear_selection();
        assert_eq!(board.value(Position::new(6, 1)), Some(Digit::D4));
    }

    mod props {
        use proptest::prelude::*;

        use super::*;

        #[derive(Debug, Clone)]
        enum Op {
            Select { x: u8, y: u8 },
            ClearSelection,
            EnterValue { x: u8, y: u8, input: String },
        }

        fn op_strategy() -> impl Strategy<Value = Op> {
            let coord = 0u8..9;
            prop_oneof![
                (coord.clone(), coord.clone()).prop_map(|(x, y)| Op::Select { x, y }),
                Just(Op::ClearSelection),
                (coord.clone(), coord, "[0-9a-z ]{0,3}")
                    .prop_map(|(x, y, input)| Op::EnterValue { x, y, input }),
            ]
        }

        fn apply(board: &mut Board, op: &Op) {
            match op {
                Op::Select { x, y } => board.select(Position::new(*x, *y)),
                Op::ClearSelection => board.clear_selection(),
                Op::EnterValue { x, y, input } => {
                    board.enter_value(Position::new(*x, *y), input);
                }
            }
        }

        proptest! {
            #[test]
            fn at_most_one_cell_is_ever_selected(
                ops in proptest::collection::vec(op_strategy(), 0..32),
            ) {
                let mut board = Board::new();
                for op in &ops {
                    apply(&mut board, op);
                    let count = Position::ALL
                        .iter()
                        .filter(|&&pos| board.is_selected(pos))
                        .count();
                    prop_assert!(count <= 1);
                    prop_assert_eq!(count == 1, board.selected().is_some());
                }
            }

            #[test]
            fn input_either_sets_a_digit_or_changes_nothing(
                x in 0u8..9,
                y in 0u8..9,
                seed in proptest::option::of(1u8..=9),
                input in "\\PC{0,4}",
            ) {
                let mut board = Board::new();
                let pos = Position::new(x, y);
                if let Some(value) = seed {
                    board.set_digit(pos, Digit::from_value(value).unwrap());
                }
                let before = board.value(pos);

                board.enter_value(pos, &input);

                match input.parse::<Digit>() {
                    Ok(digit) => prop_assert_eq!(board.value(pos), Some(digit)),
                    Err(_) => prop_assert_eq!(board.value(pos), before),
                }
            }
        }
    }
}
