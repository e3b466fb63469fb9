use boardkit_core::Board;

// AppState owns all mutable demo state. Handlers receive it explicitly;
// there is no free-standing module state for callbacks to reach into.
#[derive(Debug, Default)]
pub struct AppState {
    pub board: Board,
}

impl AppState {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }
}
