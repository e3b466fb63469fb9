use std::sync::Arc;

use boardkit_core::{Digit, Position};
use eframe::egui::{
    Align2, Color32, FontId, Painter, Pos2, Rect, Sense, Stroke, StrokeKind, Ui, Vec2,
};

use crate::{
    action::{Action, ActionRequestQueue},
    ui::grid_theme::{GridPalette, GridTheme},
};

bitflags::bitflags! {
    #[derive(Debug, Clone, Copy, PartialEq, Eq)]
    pub struct GridVisualState: u8 {
        const SELECTED = 0b0000_0001;
        const ALT_BOX = 0b0000_0010;
    }
}

impl GridVisualState {
    fn fill_color(self, palette: &GridPalette) -> Color32 {
        if self.intersects(Self::SELECTED) {
            return palette.cell_bg_selected;
        }
        if self.intersects(Self::ALT_BOX) {
            return palette.cell_bg_alt_box;
        }
        palette.cell_bg_default
    }

    fn border(self, palette: &GridPalette, cell_size: f32) -> Stroke {
        let base_width = f32::max(cell_size * CELL_BORDER_WIDTH_BASE_RATIO, 1.0);
        if self.intersects(Self::SELECTED) {
            Stroke::new(
                base_width * SELECTED_BORDER_WIDTH_RATIO,
                palette.border_selected,
            )
        } else {
            Stroke::new(base_width, palette.border_inactive)
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GridCell {
    pub value: Option<Digit>,
    pub visual_state: GridVisualState,
}

#[derive(Debug, Clone)]
pub struct GridViewModel {
    cells: [GridCell; 81],
}

impl GridViewModel {
    #[must_use]
    pub fn new(cells: [GridCell; 81]) -> Self {
        Self { cells }
    }

    #[must_use]
    pub fn cell(&self, pos: Position) -> &GridCell {
        &self.cells[pos.index()]
    }
}

pub const GRID_CELLS: f32 = 9.0;

const CELL_BORDER_WIDTH_BASE_RATIO: f32 = 0.03;
const THICK_BORDER_WIDTH_RATIO: f32 = 3.0;
const SELECTED_BORDER_WIDTH_RATIO: f32 = 3.0;

/// Side length units the grid occupies for one cell-size unit, including
/// the outer border and the two thick box separators.
#[must_use]
pub const fn required_side_units() -> f32 {
    GRID_CELLS + CELL_BORDER_WIDTH_BASE_RATIO * THICK_BORDER_WIDTH_RATIO * 4.0
}

#[must_use]
pub fn grid_side_with_border(cell_size: f32) -> f32 {
    GRID_CELLS * cell_size + thick_border_width(cell_size) * 4.0
}

fn thick_border_width(cell_size: f32) -> f32 {
    f32::max(cell_size * CELL_BORDER_WIDTH_BASE_RATIO, 1.0) * THICK_BORDER_WIDTH_RATIO
}

pub fn show(ui: &mut Ui, vm: &GridViewModel, cell_size: f32, action_queue: &mut ActionRequestQueue) {
    let style = Arc::clone(ui.style());
    let visuals = &style.visuals;
    let grid_theme = GridTheme::from_visuals(visuals);
    let palette = grid_theme.palette_for(visuals);
    let grid_side = grid_side_with_border(cell_size);

    let (rect, _response) = ui.allocate_exact_size(Vec2::splat(grid_side), Sense::hover());

    let thick_border = Stroke::new(thick_border_width(cell_size), palette.border_inactive);
    let inner_rect = rect.shrink(thick_border.width);

    let painter = ui.painter();
    painter.rect_stroke(rect, 0.0, thick_border, StrokeKind::Inside);

    for y in 0..9u8 {
        for x in 0..9u8 {
            let pos = Position::new(x, y);
            let cell = vm.cell(pos);

            let xf = f32::from(x);
            let yf = f32::from(y);
            let cell_min = inner_rect.min
                + Vec2::new(
                    cell_size * xf + (xf / 3.0).floor() * thick_border.width,
                    cell_size * yf + (yf / 3.0).floor() * thick_border.width,
                );
            let cell_rect = Rect::from_min_max(cell_min, cell_min + Vec2::splat(cell_size));

            painter.rect_filled(cell_rect, 0.0, cell.visual_state.fill_color(palette));

            if let Some(digit) = cell.value {
                painter.text(
                    cell_rect.center(),
                    Align2::CENTER_CENTER,
                    digit.as_str(),
                    FontId::proportional(cell_size * 0.8),
                    palette.text_value,
                );
            }

            painter.rect_stroke(
                cell_rect,
                0.0,
                cell.visual_state.border(palette, cell_size),
                StrokeKind::Inside,
            );

            let response = ui.interact(cell_rect, ui.id().with((x, y)), Sense::click());
            if response.clicked() {
                action_queue.request(Action::SelectCell(pos));
            }
        }
    }

    draw_box_borders(painter, inner_rect, cell_size, thick_border);
}

fn draw_box_borders(painter: &Painter, inner_rect: Rect, cell_size: f32, stroke: Stroke) {
    let half = stroke.width * 0.5;

    for i in [1.0, 2.0] {
        let offset = cell_size * 3.0 * i + stroke.width * (i - 0.5);

        let x = inner_rect.min.x + offset;
        let v_rect = Rect::from_min_max(
            Pos2::new(x - half, inner_rect.min.y),
            Pos2::new(x + half, inner_rect.max.y),
        );
        painter.rect_filled(v_rect, 0.0, stroke.color);

        let y = inner_rect.min.y + offset;
        let h_rect = Rect::from_min_max(
            Pos2::new(inner_rect.min.x, y - half),
            Pos2::new(inner_rect.max.x, y + half),
        );
        painter.rect_filled(h_rect, 0.0, stroke.color);
    }
}
