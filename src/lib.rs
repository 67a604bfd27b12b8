#![cfg_attr(not(feature = "std"), no_std)]

extern crate alloc;
#[cfg(feature = "std")]
extern crate std;

mod bitboard;
mod board;
mod cell;
mod common;
mod config;
mod fleet;
mod game;
#[cfg(feature = "std")]
mod logging;
mod player;
mod ship;
mod targeting;
mod tracking;
#[cfg(feature = "std")]
mod ui;

pub use bitboard::{BitBoard, BitBoardError};
pub use board::*;
pub use cell::*;
pub use common::*;
pub use config::*;
pub use fleet::*;
pub use game::*;
#[cfg(feature = "std")]
pub use logging::{init_logging, init_logging_with};
pub use player::*;
pub use ship::*;
pub use targeting::*;
pub use tracking::*;
#[cfg(feature = "std")]
pub use ui::*;
