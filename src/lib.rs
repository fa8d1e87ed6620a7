//! Typed stack navigation and synchronized lyrics for a terminal music
//! client.

pub mod config;
pub mod lyrics;
pub mod routing;
pub mod ui;
pub mod util;
