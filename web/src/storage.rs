use shared_types::Place;

pub const STORAGE_KEY: &str = "mapstack_places";

/// Writes the collection to localStorage. Best effort; failures are logged
/// and the in-memory collection stays authoritative.
pub fn save_places(places: &[Place]) {
    let json = match serde_json::to_string(places) {
        Ok(json) => json,
        Err(err) => {
            leptos::logging::warn!("failed to serialize places: {err}");
            return;
        }
    };
    let Some(storage) = local_storage() else {
        return;
    };
    if storage.set_item(STORAGE_KEY, &json).is_err() {
        leptos::logging::warn!("failed to write places to localStorage");
    }
}

/// Reads the saved collection. Missing or malformed data yields an empty
/// starting collection rather than an error.
pub fn load_places() -> Vec<Place> {
    let Some(storage) = local_storage() else {
        return Vec::new();
    };
    let Ok(Some(raw)) = storage.get_item(STORAGE_KEY) else {
        return Vec::new();
    };
    match serde_json::from_str::<Vec<Place>>(&raw) {
        Ok(places) => places,
        Err(err) => {
            leptos::logging::warn!("discarding malformed saved places: {err}");
            Vec::new()
        }
    }
}

fn local_storage() -> Option<web_sys::Storage> {
    web_sys::window()?.local_storage().ok().flatten()
}
