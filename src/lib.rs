#![cfg_attr(not(feature = "std"), no_std)]

extern crate alloc;
#[cfg(feature = "std")]
extern crate std;

mod autoplay;
mod board;
mod cell;
mod common;
mod config;
mod game;
mod guess;
mod placement;
mod targeting;
#[cfg(feature = "std")]
mod console;
#[cfg(feature = "std")]
mod logging;

pub use autoplay::*;
pub use board::*;
pub use cell::*;
pub use common::*;
pub use config::*;
pub use game::*;
pub use guess::*;
pub use placement::*;
pub use targeting::*;
#[cfg(feature = "std")]
pub use console::*;
#[cfg(feature = "std")]
pub use logging::init_logging;
