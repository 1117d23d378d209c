use std::str::FromStr;

use serde_json::Value;

use crate::search::{
    entities::{ArtistRecord, ImageRecord, SearchResponse},
    errors::{DecodeError, FieldPath},
    fields::{BestEffort, ObjectReader},
};

/// Decode a raw search-by-artist response body.
///
/// The mapping is written out by hand because three rules don't fit a 1:1
/// structural mapping:
/// - the `artists` envelope is unwrapped: its `items` become
///   [`SearchResponse::artists`] and its siblings (`href`, `limit`, ...) are
///   hoisted to the top level;
/// - `id` is renamed to [`ArtistRecord::spotify_id`];
/// - `followers` is flattened to its `total`.
///
/// `next` and `previous` are decoded with [`BestEffort`]; every
/// other consumed key is required. Unknown keys are ignored.
pub fn decode_search_response(input: &[u8]) -> Result<SearchResponse, DecodeError> {
    let document: Value = serde_json::from_slice(input)?;
    SearchResponse::try_from(&document)
}

impl TryFrom<&Value> for SearchResponse {
    type Error = DecodeError;

    fn try_from(document: &Value) -> Result<Self, Self::Error> {
        let root = ObjectReader::new(document, FieldPath::root())?;
        let envelope = root.object("artists")?;

        Ok(SearchResponse {
            href: envelope.string("href")?,
            limit: envelope.integer("limit")?,
            next: BestEffort::apply(envelope.string("next")),
            offset: envelope.integer("offset")?,
            previous: BestEffort::apply(envelope.string("previous")),
            total: envelope.integer("total")?,
            artists: envelope.array("items")?.map(decode_artist)?,
        })
    }
}

impl FromStr for SearchResponse {
    type Err = DecodeError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        decode_search_response(s.as_bytes())
    }
}

fn decode_artist(value: &Value, path: FieldPath) -> Result<ArtistRecord, DecodeError> {
    let artist = ObjectReader::new(value, path)?;

    Ok(ArtistRecord {
        href: artist.string("href")?,
        spotify_id: artist.string("id")?,
        name: artist.string("name")?,
        popularity: artist.integer("popularity")?,
        kind: artist.string("type")?,
        uri: artist.string("uri")?,
        images: artist.array("images")?.map(decode_image)?,
        genres: artist.array("genres")?.strings()?,
        followers: artist.object("followers")?.unsigned("total")?,
    })
}

fn decode_image(value: &Value, path: FieldPath) -> Result<ImageRecord, DecodeError> {
    let image = ObjectReader::new(value, path)?;

    Ok(ImageRecord {
        height: image.unsigned("height")?,
        width: image.unsigned("width")?,
        url: image.string("url")?,
    })
}

#[cfg(test)]
mod tests {
    use serde_json::{Value, json};

    use super::decode_search_response;
    use crate::search::{DecodeError, JsonKind, SAMPLE_RESPONSE, SearchResponse};

    fn sample() -> Value {
        serde_json::from_str(SAMPLE_RESPONSE).unwrap()
    }

    fn first_artist(document: &mut Value) -> &mut Value {
        &mut document["artists"]["items"][0]
    }

    #[test]
    fn followers_ignore_href_in_every_shape() {
        for href in [json!(null), json!("https://api.spotify.com/v1/followers")] {
            let mut document = sample();
            first_artist(&mut document)["followers"]["href"] = href;
            let response = SearchResponse::try_from(&document).unwrap();
            assert_eq!(response.artists[0].followers, 439_243);
        }

        let mut document = sample();
        first_artist(&mut document)["followers"] = json!({ "total": 12 });
        let response = SearchResponse::try_from(&document).unwrap();
        assert_eq!(response.artists[0].followers, 12);
    }

    #[test]
    fn followers_total_is_required() {
        let mut document = sample();
        first_artist(&mut document)["followers"] = json!({ "href": null });
        let err = SearchResponse::try_from(&document).unwrap_err();
        assert!(matches!(err, DecodeError::MissingField(_)));
        assert_eq!(
            err.path().unwrap().to_string(),
            "artists.items[0].followers.total"
        );
    }

    #[test]
    fn followers_must_be_an_object() {
        let mut document = sample();
        first_artist(&mut document)["followers"] = json!(439_243);
        let err = SearchResponse::try_from(&document).unwrap_err();
        assert!(matches!(
            err,
            DecodeError::TypeMismatch {
                expected: JsonKind::Object,
                actual: JsonKind::UnsignedInteger,
                ..
            }
        ));
    }

    #[test]
    fn first_failure_wins() {
        let mut document = sample();
        let artist = first_artist(&mut document).as_object_mut().unwrap();
        artist.remove("name");
        artist.remove("uri");
        let err = SearchResponse::try_from(&document).unwrap_err();
        assert_eq!(err.path().unwrap().to_string(), "artists.items[0].name");
    }

    #[test]
    fn root_must_be_an_object() {
        let err = decode_search_response(b"[]").unwrap_err();
        assert!(matches!(
            err,
            DecodeError::TypeMismatch {
                expected: JsonKind::Object,
                actual: JsonKind::Array,
                ..
            }
        ));
        assert_eq!(err.path().unwrap().to_string(), "<root>");
    }

    #[test]
    fn invalid_utf8_is_malformed() {
        let err = decode_search_response(&[0xff, b'{', b'}']).unwrap_err();
        assert!(matches!(err, DecodeError::MalformedInput(_)));
        assert!(err.path().is_none());
    }

    #[test]
    fn parses_from_str() {
        let response: SearchResponse = SAMPLE_RESPONSE.parse().unwrap();
        assert_eq!(response.first_artist().unwrap().name, "Nujabes");
    }
}
