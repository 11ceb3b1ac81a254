//! Deterministic Minesweeper game logic.
//!
//! A [`Configuration`] describes the board, [`generate`] turns it into a [`Grid`], and the grid's
//! [`reveal`](Grid::reveal), [`mark`](Grid::mark) and [`unmark`](Grid::unmark) operations play it until
//! [`Grid::is_game_over`] reports a win or a loss.
//!
//! ```
//! use minefield_core::*;
//!
//! let mut grid = generate(Difficulty::Easy.configuration(1));
//! grid.reveal((7, 0))?;
//! assert_eq!(grid.visible_count(), 21);
//!
//! grid.reveal((0, 3))?;
//! assert!(grid.is_dead());
//! # Ok::<(), GameError>(())
//! ```
#![no_std]

extern crate alloc;

pub use cell::*;
pub use config::*;
pub use engine::*;
pub use error::*;
pub use generator::*;
pub use grid::*;
pub use rng::*;
pub use types::*;

mod cell;
mod config;
mod engine;
mod error;
mod generator;
mod grid;
mod rng;
mod types;
