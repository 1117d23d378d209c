//! Spotify search decoder - turn artist search responses into flat records
//!
//! This library decodes the JSON body of a Spotify `search?type=artist` call
//! into owned, typed values: the `artists` envelope is unwrapped, `id` becomes
//! `spotify_id` and `followers` is flattened to its total.

/// Application level errors used by the command line front end
pub mod errors;
/// Search response records and their decoder
pub mod search;
