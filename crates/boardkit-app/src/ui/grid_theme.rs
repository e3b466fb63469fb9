use eframe::egui::{Color32, Visuals};

/// Color palette for board grid rendering.
///
/// Kept separate from `egui::Visuals` so grid-specific colors (selection,
/// box shading) can be tuned without being constrained by the global UI
/// theme.
#[derive(Debug, Clone)]
pub struct GridPalette {
    pub cell_bg_default: Color32,
    pub cell_bg_alt_box: Color32,
    pub cell_bg_selected: Color32,

    pub border_inactive: Color32,
    pub border_selected: Color32,

    pub text_value: Color32,
}

impl GridPalette {
    /// Initializes the palette from the current visuals.
    #[must_use]
    pub fn from_visuals(visuals: &Visuals) -> Self {
        Self {
            cell_bg_default: visuals.text_edit_bg_color(),
            cell_bg_alt_box: visuals.faint_bg_color,
            cell_bg_selected: visuals.selection.bg_fill,

            border_inactive: visuals.widgets.inactive.fg_stroke.color,
            border_selected: visuals.selection.stroke.color,

            text_value: visuals.strong_text_color(),
        }
    }
}

/// Holds light/dark palettes and selects one based on the current visuals.
#[derive(Debug, Clone)]
pub struct GridTheme {
    pub light: GridPalette,
    pub dark: GridPalette,
}

impl GridTheme {
    /// Creates a theme using the current visuals for both palettes.
    #[must_use]
    pub fn from_visuals(visuals: &Visuals) -> Self {
        let palette = GridPalette::from_visuals(visuals);
        Self {
            light: palette.clone(),
            dark: palette,
        }
    }

    #[must_use]
    pub fn palette_for(&self, visuals: &Visuals) -> &GridPalette {
        if visuals.dark_mode { &self.dark } else { &self.light }
    }
}
