pub mod app;
pub mod catalog;
pub mod components;
pub mod input;
pub mod layout;
pub mod now_playing;
pub mod routes;
pub mod theme;
pub mod traits;
pub mod tui;
pub mod util;
pub mod views;

#[cfg(test)]
pub(crate) mod test_support;
