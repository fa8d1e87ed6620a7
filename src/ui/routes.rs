//! Destinations of the music client and the home dispatcher that renders
//! them.

use tracing::warn;

use crate::{
    config::Config,
    routing::{
        Animation, Entry, GlobalEmitter, Route, Route0, Route1, RouteError, RouteHandler,
        RouteHandlerBuilder, RouteParams, TransitionSpec, required,
    },
    ui::{
        traits::View,
        views::{Browse, Home, Lyrics, Search, SearchResult, Settings},
    },
};

pub type Screen = Box<dyn View>;

pub const ALBUM_ROUTE: Route1<Option<String>> = Route1::new("albumRoute");
pub const ARTIST_ROUTE: Route1<Option<String>> = Route1::new("artistRoute");
pub const PLAYLIST_ROUTE: Route1<Option<String>> = Route1::new("playlistRoute");
pub const SEARCH_ROUTE: Route1<String> = Route1::new("searchRoute");
pub const SEARCH_RESULT_ROUTE: Route1<String> = Route1::new("searchResultRoute");
pub const SETTINGS_ROUTE: Route0 = Route0::new("settingsRoute");
pub const LYRICS_ROUTE: Route0 = Route0::new("lyricsRoute");

pub(crate) fn screen(view: impl View + 'static) -> Screen {
    Box::new(view)
}

/// Entry for a key action. An encode failure is logged and the action
/// dropped.
pub fn entry_for<P: RouteParams>(route: &Route<P>, params: P) -> Option<Entry> {
    route
        .entry(params)
        .inspect_err(|e| warn!("Skipping navigation: {e}"))
        .ok()
}

/// Destinations any screen may reach through the emitter. The pages they
/// open run their own dispatcher listening to `emitter`.
pub fn global_routes(
    builder: RouteHandlerBuilder<Screen>,
    emitter: &GlobalEmitter,
) -> RouteHandlerBuilder<Screen> {
    let (album, artist, playlist) = (emitter.clone(), emitter.clone(), emitter.clone());
    builder
        .route(&ALBUM_ROUTE, move |(browse_id,)| {
            Ok(screen(Browse::album(required(browse_id, "browseId")?, &album)))
        })
        .route(&ARTIST_ROUTE, move |(browse_id,)| {
            Ok(screen(Browse::artist(required(browse_id, "browseId")?, &artist)))
        })
        .route(&PLAYLIST_ROUTE, move |(browse_id,)| {
            Ok(screen(Browse::playlist(required(browse_id, "browseId")?, &playlist)))
        })
}

/// Search and its results sit at the same depth, so swapping between them
/// is classified as unknown; give it a direction anyway.
pub fn home_transitions() -> TransitionSpec {
    TransitionSpec::new().on_unknown(|initial, target| {
        if initial.is(&SEARCH_ROUTE) && target.is(&SEARCH_RESULT_ROUTE) {
            Some(Animation::SlideFromRight)
        } else if initial.is(&SEARCH_RESULT_ROUTE) && target.is(&SEARCH_ROUTE) {
            Some(Animation::SlideFromLeft)
        } else {
            None
        }
    })
}

pub fn home_router(
    config: &Config,
    emitter: &GlobalEmitter,
) -> Result<RouteHandler<Screen>, RouteError> {
    let settings = config.clone();

    global_routes(RouteHandler::builder(|| screen(Home::default())), emitter)
        .route(&SETTINGS_ROUTE, move |()| Ok(screen(Settings::new(settings.clone()))))
        .route(&LYRICS_ROUTE, |()| Ok(screen(Lyrics)))
        .route(&SEARCH_RESULT_ROUTE, |(query,)| Ok(screen(SearchResult::new(query))))
        .route(&SEARCH_ROUTE, |(initial_text_input,)| {
            Ok(screen(Search::new(initial_text_input)))
        })
        .listen_to(emitter)
        .unmatched(config.unmatched)
        .transitions(home_transitions())
        .build()
}
