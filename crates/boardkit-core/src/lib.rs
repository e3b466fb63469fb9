//! Core data structures for the boardkit widget demos.
//!
//! This crate owns the logical state behind the grid widgets: cell values,
//! input validation, and single-cell selection. It has no dependency on any
//! GUI toolkit, so every state transition can be exercised in plain unit
//! tests; the UI crates render from this state and route raw user events
//! back into it.
//!
//! # Overview
//!
//! - [`digit`]: Type-safe representation of cell values 1-9, including the
//!   strict text-input parse rule.
//! - [`position`]: Board coordinate type with row-major indexing, 3x3 box
//!   lookup, and edge-aware neighbor navigation.
//! - [`board`]: The 9x9 board itself, combining stored values with the
//!   single-selection state machine.
//!
//! # Examples
//!
//! ```
//! use boardkit_core::{Board, Digit, Position};
//!
//! let mut board = Board::new();
//!
//! // Select a cell; selecting another cell replaces the selection.
//! board.select(Position::new(2, 3));
//! board.select(Position::new(4, 4));
//! assert_eq!(board.selected(), Some(Position::new(4, 4)));
//!
//! // Text input is stored only when it is a whole digit 1-9.
//! board.enter_value(Position::new(0, 0), "7");
//! board.enter_value(Position::new(0, 0), "99"); // silently ignored
//! assert_eq!(board.value(Position::new(0, 0)), Some(Digit::D7));
//! ```

pub mod board;
pub mod digit;
pub mod position;

pub use self::{
    board::Board,
    digit::{Digit, ParseDigitError},
    position::{BOX_SIZE, GRID_SIZE, Position},
};
