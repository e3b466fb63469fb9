//! Reusable egui widgets for the boardkit demos.
//!
//! Each widget keeps its state in a plain struct whose mutation methods are
//! independent of rendering, so list and grouping behavior is covered by
//! unit tests without a live UI. The `show` methods render the state in
//! immediate mode and report user interaction through return values.
//!
//! - [`DualListBox`]: two titled lists with buttons to transfer the selected
//!   item between them.
//! - [`KeyValueGrid`]: grouped key/value rows rendered as collapsible
//!   two-column tables.

pub mod dual_list_box;
pub mod key_value_grid;

pub use self::{
    dual_list_box::{DualListBox, DualListEvent},
    key_value_grid::KeyValueGrid,
};
