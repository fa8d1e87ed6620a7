pub mod browse;
pub mod home;
pub mod lyrics;
pub mod search;
pub mod search_result;
pub mod settings;

pub use browse::Browse;
pub use home::Home;
pub use lyrics::Lyrics;
pub use search::Search;
pub use search_result::SearchResult;
pub use settings::Settings;
