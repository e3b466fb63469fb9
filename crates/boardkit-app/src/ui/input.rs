use eframe::egui::{Event, InputState, Key};

use crate::action::{Action, ActionRequestQueue, MoveDirection};

struct Shortcut {
    key: Key,
    action: Action,
}

impl Shortcut {
    const fn plain(key: Key, action: Action) -> Self {
        Self { key, action }
    }
}

const SHORTCUTS: [Shortcut; 5] = [
    Shortcut::plain(Key::ArrowUp, Action::MoveSelection(MoveDirection::Up)),
    Shortcut::plain(Key::ArrowDown, Action::MoveSelection(MoveDirection::Down)),
    Shortcut::plain(Key::ArrowLeft, Action::MoveSelection(MoveDirection::Left)),
    Shortcut::plain(Key::ArrowRight, Action::MoveSelection(MoveDirection::Right)),
    Shortcut::plain(Key::Escape, Action::ClearSelection),
];

pub fn handle_input(i: &InputState, action_queue: &mut ActionRequestQueue) {
    for shortcut in SHORTCUTS {
        if i.key_pressed(shortcut.key) && i.modifiers.is_none() {
            action_queue.request(shortcut.action);
        }
    }

    // Typed text is forwarded verbatim; the board decides what to accept.
    for event in &i.events {
        if let Event::Text(text) = event {
            action_queue.request(Action::EnterText(text.clone()));
        }
    }
}
