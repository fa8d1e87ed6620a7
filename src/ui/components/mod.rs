pub mod list;
pub mod lyrics;
pub mod player;
pub mod sidebar;
pub mod slide;
