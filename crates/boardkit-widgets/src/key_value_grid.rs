//! Grouped key/value property grid widget.

use eframe::egui::{CollapsingHeader, Ui};
use egui_extras::{Column, TableBuilder};

/// A property grid of key/value string pairs organized into named groups.
///
/// Groups and the keys within them keep their insertion order; re-adding an
/// existing key replaces its value in place. Rendering shows one collapsible
/// header per group containing a striped two-column table.
#[derive(Debug, Clone, Default)]
pub struct KeyValueGrid {
    groups: Vec<Group>,
}

#[derive(Debug, Clone)]
struct Group {
    title: String,
    entries: Vec<Entry>,
}

#[derive(Debug, Clone)]
struct Entry {
    key: String,
    value: String,
}

impl KeyValueGrid {
    /// Creates an empty grid.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds or updates an entry.
    ///
    /// The group is created on first use and keeps its position; within a
    /// group a new key is appended and an existing key has its value
    /// replaced without moving.
    pub fn add(&mut self, group: &str, key: &str, value: &str) {
        let index = match self.groups.iter().position(|g| g.title == group) {
            Some(index) => index,
            None => {
                self.groups.push(Group {
                    title: group.to_owned(),
                    entries: Vec::new(),
                });
                self.groups.len() - 1
            }
        };
        let entries = &mut self.groups[index].entries;
        match entries.iter_mut().find(|entry| entry.key == key) {
            Some(entry) => entry.value = value.to_owned(),
            None => entries.push(Entry {
                key: key.to_owned(),
                value: value.to_owned(),
            }),
        }
    }

    /// Returns the value stored for `key` in `group`, if present.
    #[must_use]
    pub fn value_of(&self, group: &str, key: &str) -> Option<&str> {
        self.groups
            .iter()
            .find(|g| g.title == group)?
            .entries
            .iter()
            .find(|entry| entry.key == key)
            .map(|entry| entry.value.as_str())
    }

    /// Returns the group titles in insertion order.
    pub fn group_titles(&self) -> impl Iterator<Item = &str> {
        self.groups.iter().map(|group| group.title.as_str())
    }

    /// Renders the grid.
    pub fn show(&self, ui: &mut Ui) {
        for group in &self.groups {
            CollapsingHeader::new(&group.title)
                .default_open(true)
                .show(ui, |ui| {
                    // One table per group; salt the id so they don't clash.
                    ui.push_id(&group.title, |ui| {
                        show_group_table(ui, &group.entries);
                    });
                });
        }
    }
}

fn show_group_table(ui: &mut Ui, entries: &[Entry]) {
    TableBuilder::new(ui)
        .striped(true)
        .column(Column::auto().at_least(120.0))
        .column(Column::remainder())
        .body(|mut body| {
            for entry in entries {
                body.row(18.0, |mut row| {
                    row.col(|ui| {
                        ui.label(&entry.key);
                    });
                    row.col(|ui| {
                        ui.label(&entry.value);
                    });
                });
            }
        });
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn groups_keep_insertion_order() {
        let mut grid = KeyValueGrid::new();
        grid.add("Settings", "Theme", "Dark");
        grid.add("Network", "Proxy", "");
        grid.add("Settings", "Language", "en-US");

        let titles: Vec<_> = grid.group_titles().collect();
        assert_eq!(titles, ["Settings", "Network"]);
    }

    #[test]
    fn value_of_finds_entries_per_group() {
        let mut grid = KeyValueGrid::new();
        grid.add("User", "Email", "alice@example.com");
        grid.add("Network", "Timeout", "30s");

        assert_eq!(grid.value_of("User", "Email"), Some("alice@example.com"));
        assert_eq!(grid.value_of("Network", "Timeout"), Some("30s"));
        assert_eq!(grid.value_of("User", "Timeout"), None);
        assert_eq!(grid.value_of("Missing", "Email"), None);
    }

    #[test]
    fn duplicate_key_replaces_value_in_place() {
        let mut grid = KeyValueGrid::new();
        grid.add("Settings", "Theme", "Dark");
        grid.add("Settings", "Language", "en-US");
        grid.add("Settings", "Theme", "Light");

        assert_eq!(grid.value_of("Settings", "Theme"), Some("Light"));
        // Replacement does not reorder the group's keys.
        let titles: Vec<_> = grid.group_titles().collect();
        assert_eq!(titles, ["Settings"]);
    }

    #[test]
    fn empty_values_are_stored() {
        let mut grid = KeyValueGrid::new();
        grid.add("Network", "Proxy", "");
        assert_eq!(grid.value_of("Network", "Proxy"), Some(""));
    }
}
