#![deny(clippy::all, clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]
//! # Grid Topology
//!
//! Coordinate bookkeeping for rectangular tabular worlds.
//!
//! Cells are addressed by a linear index in `[0, width * height)`, laid out
//! row by row so that `index = y * width + x`. The [`GridTopology`] type owns
//! the dimensions and converts between the two addressings. It holds no
//! episode state and every method is a pure function of its inputs.
//!
//! Movement is expressed with the four-valued [`Action`] set. Moving into a
//! wall is not an error: [`GridTopology::apply`] clamps each axis to the grid
//! bounds independently, so the agent simply stays put along that axis.
//!
//! ```rust
//! use grid::{Action, GridTopology};
//!
//! let grid = GridTopology::new(3, 2).unwrap();
//! assert_eq!(grid.index_to_coords(4), (1, 1));
//! assert_eq!(grid.apply(0, Action::Left), 0);
//! assert_eq!(grid.apply(0, Action::Up), 3);
//! ```

pub mod action;
pub mod topology;

pub use action::Action;
pub use topology::{GridError, GridTopology};
