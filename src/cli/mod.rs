pub mod commands;
pub mod menu;

pub use commands::*;
