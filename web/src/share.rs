use base64::{engine::general_purpose::URL_SAFE_NO_PAD, Engine};
use shared_types::{Place, SharedCollection};
use thiserror::Error;

/// Query parameter the share token travels in.
pub const QUERY_PARAM: &str = "data";

#[derive(Debug, Error)]
pub enum ShareDecodeError {
    #[error("share token is not valid base64: {0}")]
    Base64(#[from] base64::DecodeError),
    #[error("share token does not hold a valid collection: {0}")]
    Json(#[from] serde_json::Error),
    #[error("share token payload is malformed: {0}")]
    Structure(&'static str),
}

/// Serializes the collection to a URL-safe token. The payload carries the
/// places plus a creation timestamp.
pub fn encode(places: &[Place]) -> String {
    let payload = SharedCollection {
        places: places.to_vec(),
        created: chrono::Utc::now().to_rfc3339(),
    };
    let json = serde_json::to_string(&payload).expect("collection serializes to JSON");
    URL_SAFE_NO_PAD.encode(json)
}

/// Strict inverse of [`encode`]. A single malformed entry rejects the
/// whole collection; callers fall back to local storage.
pub fn decode(token: &str) -> Result<SharedCollection, ShareDecodeError> {
    let bytes = URL_SAFE_NO_PAD.decode(token.trim())?;
    let payload: SharedCollection = serde_json::from_slice(&bytes)?;
    validate(&payload.places)?;
    Ok(payload)
}

fn validate(places: &[Place]) -> Result<(), ShareDecodeError> {
    let mut seen = std::collections::HashSet::new();
    for place in places {
        if place.id.is_empty() {
            return Err(ShareDecodeError::Structure("empty place id"));
        }
        if !seen.insert(place.id.as_str()) {
            return Err(ShareDecodeError::Structure("duplicate place id"));
        }
        if place.name.is_empty() {
            return Err(ShareDecodeError::Structure("empty place name"));
        }
        if !place.lat.is_finite() || !place.long.is_finite() {
            return Err(ShareDecodeError::Structure("non-finite coordinate"));
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use shared_types::{Category, MarkerColor};

    fn place(id: &str, name: &str) -> Place {
        Place {
            id: id.to_string(),
            name: name.to_string(),
            address: "Niseko, Japan".to_string(),
            lat: 42.8050,
            long: 140.6890,
            category: Some(Category::Ramen),
            color: MarkerColor::Blue,
            notes: Some("worth the queue".to_string()),
        }
    }

    #[test]
    fn round_trip_preserves_places_and_order() {
        let places = vec![place("a", "one"), place("b", "two"), place("c", "three")];
        let token = encode(&places);
        let decoded = decode(&token).unwrap();
        assert_eq!(decoded.places, places);
        assert!(!decoded.created.is_empty());
    }

    #[test]
    fn token_is_safe_for_a_query_parameter() {
        let token = encode(&[place("a", "one")]);
        assert!(token
            .chars()
            .all(|c| c.is_ascii_alphanumeric() || c == '-' || c == '_'));
    }

    #[test]
    fn decode_rejects_plain_text() {
        let err = decode("this is not a token!").unwrap_err();
        assert!(matches!(err, ShareDecodeError::Base64(_)));
    }

    #[test]
    fn decode_rejects_json_without_places() {
        let token = URL_SAFE_NO_PAD.encode(r#"{"created":"2024-01-01T00:00:00Z"}"#);
        let err = decode(&token).unwrap_err();
        assert!(matches!(err, ShareDecodeError::Json(_)));
    }

    #[test]
    fn decode_rejects_non_collection_json() {
        let token = URL_SAFE_NO_PAD.encode("[1, 2, 3]");
        let err = decode(&token).unwrap_err();
        assert!(matches!(err, ShareDecodeError::Json(_)));
    }

    #[test]
    fn decode_rejects_entry_with_missing_fields() {
        let token = URL_SAFE_NO_PAD
            .encode(r#"{"places":[{"id":"a","name":"no coordinates"}],"created":"x"}"#);
        let err = decode(&token).unwrap_err();
        assert!(matches!(err, ShareDecodeError::Json(_)));
    }

    #[test]
    fn decode_rejects_non_finite_coordinates() {
        // 1e999 overflows f64 into infinity during JSON parsing
        let token = URL_SAFE_NO_PAD.encode(
            r#"{"places":[{"id":"a","name":"n","address":"x","latitude":1e999,"longitude":0.0}],"created":"x"}"#,
        );
        let err = decode(&token).unwrap_err();
        assert!(matches!(
            err,
            ShareDecodeError::Structure("non-finite coordinate")
        ));
    }

    #[test]
    fn decode_rejects_duplicate_ids() {
        let mut first = place("same", "one");
        first.notes = None;
        let second = place("same", "two");
        let json = serde_json::to_string(&SharedCollection {
            places: vec![first, second],
            created: "x".to_string(),
        })
        .unwrap();
        let err = decode(&URL_SAFE_NO_PAD.encode(json)).unwrap_err();
        assert!(matches!(
            err,
            ShareDecodeError::Structure("duplicate place id")
        ));
    }

    #[test]
    fn decode_rejects_empty_names() {
        let mut bad = place("a", "one");
        bad.name = String::new();
        let json = serde_json::to_string(&SharedCollection {
            places: vec![bad],
            created: "x".to_string(),
        })
        .unwrap();
        let err = decode(&URL_SAFE_NO_PAD.encode(json)).unwrap_err();
        assert!(matches!(err, ShareDecodeError::Structure("empty place name")));
    }

    #[test]
    fn decode_accepts_an_empty_collection() {
        let decoded = decode(&encode(&[])).unwrap();
        assert!(decoded.places.is_empty());
    }
}
