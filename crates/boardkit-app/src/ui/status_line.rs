use boardkit_core::Position;
use eframe::egui::{Align, Label, RichText, Ui, Widget as _};

#[derive(Debug, Clone)]
pub struct StatusLineViewModel {
    selected: Option<Position>,
}

impl StatusLineViewModel {
    #[must_use]
    pub fn new(selected: Option<Position>) -> Self {
        Self { selected }
    }
}

pub fn show(ui: &mut Ui, vm: &StatusLineViewModel, cell_size: f32) {
    let text = match vm.selected {
        Some(pos) => format!(
            "Selected row {}, column {}. Type 1-9 to set the cell.",
            pos.y(),
            pos.x()
        ),
        None => "Click a cell or use the arrow keys to select one.".to_owned(),
    };
    ui.horizontal(|ui| {
        Label::new(RichText::new(text).size(cell_size * 0.35))
            .halign(Align::Min)
            .ui(ui);
    });
}
