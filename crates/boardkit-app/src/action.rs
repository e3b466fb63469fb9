use std::mem;

use boardkit_core::Position;

pub mod handler;

// Every user interaction becomes an Action; UI code only requests, the
// handler is the sole place that mutates AppState.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Action {
    SelectCell(Position),
    ClearSelection,
    MoveSelection(MoveDirection),
    EnterText(String),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MoveDirection {
    Up,
    Down,
    Left,
    Right,
}

impl MoveDirection {
    #[must_use]
    pub fn apply_to(self, pos: Position) -> Option<Position> {
        match self {
            Self::Up => pos.up(),
            Self::Down => pos.down(),
            Self::Left => pos.left(),
            Self::Right => pos.right(),
        }
    }
}

#[derive(Debug, Default)]
pub struct ActionRequestQueue {
    actions: Vec<Action>,
}

impl ActionRequestQueue {
    pub fn request(&mut self, action: Action) {
        self.actions.push(action);
    }

    pub fn take_all(&mut self) -> Vec<Action> {
        mem::take(&mut self.actions)
    }
}

#[cfg(test)]
mod tests {
    use super::{Action, ActionRequestQueue};

    #[test]
    fn take_all_returns_actions_in_order_and_clears_queue() {
        let mut queue = ActionRequestQueue::default();
        queue.request(Action::ClearSelection);
        queue.request(Action::EnterText("5".to_owned()));

        let drained = queue.take_all();
        assert_eq!(drained.len(), 2);
        assert_eq!(drained[0], Action::ClearSelection);
        assert_eq!(drained[1], Action::EnterText("5".to_owned()));

        let drained_again = queue.take_all();
        assert!(drained_again.is_empty());
    }
}
