use eframe::egui::{self, Ui};
use egui_extras::{Size, StripBuilder};

use crate::{
    action::ActionRequestQueue,
    ui::{
        grid::{self, GridViewModel},
        status_line::{self, StatusLineViewModel},
    },
};

#[derive(Debug, Clone)]
pub struct BoardScreenViewModel {
    pub grid_vm: GridViewModel,
    pub status_vm: StatusLineViewModel,
}

impl BoardScreenViewModel {
    #[must_use]
    pub fn new(grid_vm: GridViewModel, status_vm: StatusLineViewModel) -> Self {
        Self { grid_vm, status_vm }
    }
}

pub fn show(ui: &mut Ui, vm: &BoardScreenViewModel, action_queue: &mut ActionRequestQueue) {
    let grid_units = grid::required_side_units();
    let status_units = 1.0;
    let total_units = grid_units + status_units;

    let spacing = ui.spacing().item_spacing;
    let avail = ui.available_size() - spacing * egui::vec2(2.0, 3.0);
    let grid_side = f32::min(avail.x, avail.y * grid_units / total_units);
    let cell_size = grid_side / grid_units;
    let status_height = cell_size * status_units;

    StripBuilder::new(ui)
        .size(Size::remainder())
        .size(Size::exact(grid_side))
        .size(Size::remainder())
        .horizontal(|mut strip| {
            strip.empty();
            strip.cell(|ui| {
                StripBuilder::new(ui)
                    .size(Size::remainder())
                    .size(Size::exact(grid_side))
                    .size(Size::exact(spacing.y))
                    .size(Size::exact(status_height))
                    .size(Size::remainder())
                    .vertical(|mut strip| {
                        strip.empty();
                        strip.cell(|ui| {
                            grid::show(ui, &vm.grid_vm, cell_size, action_queue);
                        });
                        strip.cell(|_ui| {}); // Spacer
                        strip.cell(|ui| {
                            status_line::show(ui, &vm.status_vm, cell_size);
                        });
                        strip.empty();
                    });
            });
            strip.empty();
        });
}
