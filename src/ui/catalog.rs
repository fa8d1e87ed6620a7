//! Built-in sample library the front end browses. Real metadata providers
//! live outside this crate.

#[derive(Debug)]
pub struct Artist {
    pub id: &'static str,
    pub name: &'static str,
}

#[derive(Debug)]
pub struct Album {
    pub id: &'static str,
    pub title: &'static str,
    pub artist_id: &'static str,
    pub year: u16,
    pub tracks: &'static [&'static str],
}

#[derive(Debug)]
pub struct Playlist {
    pub id: &'static str,
    pub title: &'static str,
    pub tracks: &'static [(&'static str, &'static str)],
}

#[derive(Debug)]
pub struct Track {
    pub title: &'static str,
    pub artist_id: &'static str,
    pub album_id: &'static str,
    pub duration_ms: u64,
    pub lrc: &'static str,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Hit {
    Album(&'static str),
    Artist(&'static str),
    Playlist(&'static str),
}

pub const ARTISTS: &[Artist] = &[
    Artist {
        id: "UC-harbor",
        name: "Harbor Lights",
    },
    Artist {
        id: "UC-neon",
        name: "Neon Orchard",
    },
    Artist {
        id: "UC-slow",
        name: "Slow Meridian",
    },
];

pub const ALBUMS: &[Album] = &[
    Album {
        id: "MPRE-tides",
        title: "Low Tides",
        artist_id: "UC-harbor",
        year: 2019,
        tracks: &["Breakwater", "Salt in the Wires", "Lantern Room", "Undertow"],
    },
    Album {
        id: "MPRE-signal",
        title: "Signal Fires",
        artist_id: "UC-harbor",
        year: 2022,
        tracks: &["First Light", "Relay", "Coastline Radio"],
    },
    Album {
        id: "MPRE-orchard",
        title: "Glass Orchard",
        artist_id: "UC-neon",
        year: 2021,
        tracks: &["Greenhouse", "Static Bloom", "Pollen Count", "Afterglow"],
    },
    Album {
        id: "MPRE-meridian",
        title: "Meridian",
        artist_id: "UC-slow",
        year: 2018,
        tracks: &["Equator", "Longitude", "Dusk Line"],
    },
];

pub const PLAYLISTS: &[Playlist] = &[
    Playlist {
        id: "VL-evening",
        title: "Evening Drive",
        tracks: &[
            ("Coastline Radio", "UC-harbor"),
            ("Afterglow", "UC-neon"),
            ("Dusk Line", "UC-slow"),
        ],
    },
    Playlist {
        id: "VL-focus",
        title: "Focus",
        tracks: &[("Longitude", "UC-slow"), ("Lantern Room", "UC-harbor")],
    },
];

pub static NOW_PLAYING: Track = Track {
    title: "Lantern Room",
    artist_id: "UC-harbor",
    album_id: "MPRE-tides",
    duration_ms: 24_000,
    lrc: "[ar:Harbor Lights]\n\
          [ti:Lantern Room]\n\
          [00:00.00]\n\
          [00:02.00]The harbor hums below the stairs\n\
          [00:05.50]A lantern left for someone\n\
          [00:09.00]Salt on the glass, the tide returns\n\
          [00:12.50]\n\
          [00:14.00]Keep the light on\n\
          [00:17.00]Keep the light on\n\
          [00:20.50]Until the morning comes",
};

pub fn album(id: &str) -> Option<&'static Album> {
    ALBUMS.iter().find(|a| a.id == id)
}

pub fn artist(id: &str) -> Option<&'static Artist> {
    ARTISTS.iter().find(|a| a.id == id)
}

pub fn playlist(id: &str) -> Option<&'static Playlist> {
    PLAYLISTS.iter().find(|p| p.id == id)
}

pub fn albums_by(artist_id: &str) -> impl Iterator<Item = &'static Album> + '_ {
    ALBUMS.iter().filter(move |a| a.artist_id == artist_id)
}

pub fn artist_name(id: &str) -> &'static str {
    artist(id).map(|a| a.name).unwrap_or("Unknown")
}

/// Case-insensitive substring search over titles and names.
pub fn search(query: &str) -> Vec<Hit> {
    let query = query.trim().to_lowercase();
    if query.is_empty() {
        return Vec::new();
    }
    let matches = |text: &str| text.to_lowercase().contains(&query);

    let artists = ARTISTS.iter().filter(|a| matches(a.name)).map(|a| Hit::Artist(a.id));
    let albums = ALBUMS.iter().filter(|a| matches(a.title)).map(|a| Hit::Album(a.id));
    let playlists = PLAYLISTS
        .iter()
        .filter(|p| matches(p.title))
        .map(|p| Hit::Playlist(p.id));

    artists.chain(albums).chain(playlists).collect()
}
