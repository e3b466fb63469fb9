//! Two-pane transfer list widget.

use eframe::egui::{Button, ScrollArea, Ui};

/// Event returned by [`DualListBox::show`] after a transfer button moved an
/// item between the lists.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DualListEvent {
    /// The selected right-hand item was moved to the left list.
    MovedLeft,
    /// The selected left-hand item was moved to the right list.
    MovedRight,
}

/// A dual list box: two titled item lists with buttons to move the selected
/// item from one side to the other.
///
/// Each side holds at most one selected item. Moving appends the item to the
/// end of the destination list and clears the source selection. The list
/// contents are queried with [`left_items`](Self::left_items) and
/// [`right_items`](Self::right_items) after a move event.
#[derive(Debug, Clone)]
pub struct DualListBox {
    left_title: String,
    right_title: String,
    left: Vec<String>,
    right: Vec<String>,
    left_selected: Option<usize>,
    right_selected: Option<usize>,
}

impl Default for DualListBox {
    fn default() -> Self {
        Self::new()
    }
}

impl DualListBox {
    /// Creates an empty dual list box with default titles.
    #[must_use]
    pub fn new() -> Self {
        Self {
            left_title: "Left".to_owned(),
            right_title: "Right".to_owned(),
            left: Vec::new(),
            right: Vec::new(),
            left_selected: None,
            right_selected: None,
        }
    }

    /// Sets the heading shown above the left list.
    pub fn set_left_title(&mut self, title: impl Into<String>) {
        self.left_title = title.into();
    }

    /// Sets the heading shown above the right list.
    pub fn set_right_title(&mut self, title: impl Into<String>) {
        self.right_title = title.into();
    }

    /// Replaces the left list contents and clears its selection.
    pub fn set_left_items(&mut self, items: Vec<String>) {
        self.left = items;
        self.left_selected = None;
    }

    /// Replaces the right list contents and clears its selection.
    pub fn set_right_items(&mut self, items: Vec<String>) {
        self.right = items;
        self.right_selected = None;
    }

    /// Returns the current left list items in order.
    #[must_use]
    pub fn left_items(&self) -> &[String] {
        &self.left
    }

    /// Returns the current right list items in order.
    #[must_use]
    pub fn right_items(&self) -> &[String] {
        &self.right
    }

    /// Moves the selected right-hand item to the end of the left list.
    ///
    /// Returns `false` without changing anything when no right-hand item is
    /// selected.
    pub fn move_selected_to_left(&mut self) -> bool {
        let Some(index) = self.right_selected.take() else {
            return false;
        };
        let item = self.right.remove(index);
        self.left.push(item);
        true
    }

    /// Moves the selected left-hand item to the end of the right list.
    ///
    /// Returns `false` without changing anything when no left-hand item is
    /// selected.
    pub fn move_selected_to_right(&mut self) -> bool {
        let Some(index) = self.left_selected.take() else {
            return false;
        };
        let item = self.left.remove(index);
        self.right.push(item);
        true
    }

    /// Renders the widget and returns the move performed this frame, if any.
    pub fn show(&mut self, ui: &mut Ui) -> Option<DualListEvent> {
        let mut event = None;

        let button_column = 40.0;
        let spacing = ui.spacing().item_spacing.x;
        let pane_width = (ui.available_width() - button_column - 2.0 * spacing) / 2.0;
        let pane_height = ui.available_height();

        ui.horizontal(|ui| {
            show_pane(
                ui,
                "dual_list_left",
                &self.left_title,
                &self.left,
                &mut self.left_selected,
                pane_width,
                pane_height,
            );

            ui.vertical(|ui| {
                ui.set_width(button_column);
                ui.add_space(pane_height * 0.4);
                let move_left = ui
                    .add_enabled(self.right_selected.is_some(), Button::new("\u{25c0}"))
                    .on_hover_text("Move selected item to the left list");
                if move_left.clicked() && self.move_selected_to_left() {
                    event = Some(DualListEvent::MovedLeft);
                }
                let move_right = ui
                    .add_enabled(self.left_selected.is_some(), Button::new("\u{25b6}"))
                    .on_hover_text("Move selected item to the right list");
                if move_right.clicked() && self.move_selected_to_right() {
                    event = Some(DualListEvent::MovedRight);
                }
            });

            show_pane(
                ui,
                "dual_list_right",
                &self.right_title,
                &self.right,
                &mut self.right_selected,
                pane_width,
                pane_height,
            );
        });

        event
    }
}

fn show_pane(
    ui: &mut Ui,
    id_salt: &str,
    title: &str,
    items: &[String],
    selected: &mut Option<usize>,
    width: f32,
    height: f32,
) {
    ui.vertical(|ui| {
        ui.set_width(width);
        ui.set_height(height);
        ui.strong(title);
        ui.group(|ui| {
            ScrollArea::vertical()
                .id_salt(id_salt)
                .auto_shrink([false, false])
                .show(ui, |ui| {
                    for (index, item) in items.iter().enumerate() {
                        let is_selected = *selected == Some(index);
                        if ui.selectable_label(is_selected, item).clicked() {
                            *selected = if is_selected { None } else { Some(index) };
                        }
                    }
                });
        });
    });
}

#[cfg(test)]
mod tests {
    use super::*;

    fn items(values: &[&str]) -> Vec<String> {
        values.iter().map(|&s| s.to_owned()).collect()
    }

    #[test]
    fn move_without_selection_is_a_noop() {
        let mut list = DualListBox::new();
        list.set_left_items(items(&["foo", "bar"]));
        list.set_right_items(items(&["alpha"]));

        assert!(!list.move_selected_to_left());
        assert!(!list.move_selected_to_right());
        assert_eq!(list.left_items(), items(&["foo", "bar"]).as_slice());
        assert_eq!(list.right_items(), items(&["alpha"]).as_slice());
    }

    #[test]
    fn move_transfers_the_selected_item_and_clears_selection() {
        let mut list = DualListBox::new();
        list.set_left_items(items(&["foo", "bar"]));
        list.set_right_items(items(&["alpha", "beta", "gamma"]));
        list.right_selected = Some(1);

        assert!(list.move_selected_to_left());
        assert_eq!(list.left_items(), items(&["foo", "bar", "beta"]).as_slice());
        assert_eq!(list.right_items(), items(&["alpha", "gamma"]).as_slice());
        assert_eq!(list.right_selected, None);

        // The move consumed the selection, so a second move does nothing.
        assert!(!list.move_selected_to_left());
    }

    #[test]
    fn moved_items_append_in_order() {
        let mut list = DualListBox::new();
        list.set_right_items(items(&["alpha", "beta"]));

        list.right_selected = Some(0);
        assert!(list.move_selected_to_left());
        list.right_selected = Some(0);
        assert!(list.move_selected_to_left());

        assert_eq!(list.left_items(), items(&["alpha", "beta"]).as_slice());
        assert!(list.right_items().is_empty());
    }

    #[test]
    fn replacing_items_clears_selection() {
        let mut list = DualListBox::new();
        list.set_left_items(items(&["foo"]));
        list.left_selected = Some(0);

        list.set_left_items(items(&["other"]));
        assert_eq!(list.left_selected, None);
    }
}
