use leptos::prelude::*;
use leptos::server;
use shared_types::Coordinates;

#[cfg(feature = "ssr")]
use shared_types::GeocodeError;

/// Resolves a free-text address to coordinates via the Nominatim search
/// endpoint, using only the first result. Failures surface as a
/// user-visible message; nothing is created on the client side.
#[server]
pub async fn geocode_address(address: String) -> Result<Coordinates, ServerFnError> {
    match lookup(address.trim()).await {
        Ok(coords) => Ok(coords),
        Err(err) => Err(ServerFnError::new(err.to_string())),
    }
}

#[cfg(feature = "ssr")]
const DEFAULT_ENDPOINT: &str = "https://nominatim.openstreetmap.org";

// Nominatim's usage policy requires an identifying User-Agent
#[cfg(feature = "ssr")]
const USER_AGENT: &str = concat!("mapstack/", env!("CARGO_PKG_VERSION"));

#[cfg(feature = "ssr")]
fn search_url(address: &str) -> String {
    let base =
        std::env::var("NOMINATIM_URL").unwrap_or_else(|_| DEFAULT_ENDPOINT.to_string());
    format!(
        "{}/search?format=json&q={}",
        base.trim_end_matches('/'),
        urlencoding::encode(address)
    )
}

#[cfg(feature = "ssr")]
async fn lookup(address: &str) -> Result<Coordinates, GeocodeError> {
    use std::time::Duration;

    if address.is_empty() {
        return Err(GeocodeError::NotFound);
    }

    let client = reqwest::Client::builder()
        .user_agent(USER_AGENT)
        .timeout(Duration::from_secs(10))
        .build()
        .map_err(|err| GeocodeError::Network(err.to_string()))?;

    let url = search_url(address);
    tracing::debug!(%url, "geocoding address");

    let response = client
        .get(&url)
        .send()
        .await
        .map_err(|err| GeocodeError::Network(err.to_string()))?;

    if !response.status().is_success() {
        return Err(GeocodeError::Network(format!(
            "unexpected status {}",
            response.status()
        )));
    }

    let body = response
        .text()
        .await
        .map_err(|err| GeocodeError::Network(err.to_string()))?;

    parse_search_response(&body)
}

/// Pulls the first result's coordinates out of a Nominatim response body.
/// The public endpoint returns `lat`/`lon` as strings; numbers are accepted
/// too.
#[cfg(feature = "ssr")]
pub fn parse_search_response(body: &str) -> Result<Coordinates, GeocodeError> {
    let results: serde_json::Value =
        serde_json::from_str(body).map_err(|err| GeocodeError::Network(err.to_string()))?;

    let first = results
        .as_array()
        .ok_or_else(|| GeocodeError::Network("expected a result array".to_string()))?
        .first()
        .ok_or(GeocodeError::NotFound)?;

    Ok(Coordinates {
        lat: coordinate_field(first, "lat")?,
        long: coordinate_field(first, "lon")?,
    })
}

#[cfg(feature = "ssr")]
fn coordinate_field(result: &serde_json::Value, key: &str) -> Result<f64, GeocodeError> {
    let parsed = match result.get(key) {
        Some(serde_json::Value::String(raw)) => raw.parse::<f64>().ok(),
        Some(serde_json::Value::Number(number)) => number.as_f64(),
        _ => None,
    };
    parsed
        .filter(|value| value.is_finite())
        .ok_or_else(|| GeocodeError::Network(format!("result has no usable `{key}`")))
}
