/// One artist from the `items` list, with `followers` flattened to its total.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ArtistRecord {
    /// API URL of the full artist object
    pub href: String,
    /// Spotify artist ID, read from the `id` key
    pub spotify_id: String,
    /// Display name
    pub name: String,
    /// 0–100 in practice, not validated
    pub popularity: i64,
    /// Object type, read from the `type` key; `"artist"` in practice
    pub kind: String,
    /// `spotify:artist:<id>`
    pub uri: String,
    /// Artist pictures, may be empty
    pub images: Vec<ImageRecord>,
    /// Genre names in upstream order, may be empty
    pub genres: Vec<String>,
    /// `followers.total`; `followers.href` is always null upstream and dropped
    pub followers: u64,
}

/// One artist picture; Spotify lists them largest first.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ImageRecord {
    /// Pixels
    pub height: u64,
    /// Pixels
    pub width: u64,
    /// CDN URL of the picture
    pub url: String,
}

/// A search-by-artist page with the `artists` envelope unwrapped.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SearchResponse {
    /// URL of this page
    pub href: String,
    /// Page size requested
    pub limit: i64,
    /// URL of the following page, never followed
    pub next: Option<String>,
    /// Index of the first item of this page
    pub offset: i64,
    /// URL of the preceding page, never followed
    pub previous: Option<String>,
    /// Matches on the server side, can exceed `artists.len()`
    pub total: i64,
    /// Decoded `artists.items`
    pub artists: Vec<ArtistRecord>,
}

impl SearchResponse {
    /// First artist of the page, if any.
    #[must_use]
    pub fn first_artist(&self) -> Option<&ArtistRecord> {
        self.artists.first()
    }
}
