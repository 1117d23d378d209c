/// Decoded record types
pub mod entities;
/// Decode errors and document paths
pub mod errors;
/// Field access helpers and the optional-field policy
pub mod fields;
/// JSON to record mapping
pub mod mapper;

pub use entities::{ArtistRecord, ImageRecord, SearchResponse};
pub use errors::{DecodeError, FieldPath, JsonKind, PathSegment};
pub use fields::BestEffort;
pub use mapper::decode_search_response;

/// Response of `GET /v1/search?q=nujabes&type=artist&limit=1`, as returned by
/// Spotify's web console.
pub const SAMPLE_RESPONSE: &str = include_str!("sample.json");
