use crate::{
    components::notice::Notice,
    store::PlaceStore,
    views::map::{map_marker::PlaceMarker, map_marker_popup, util},
};
use leptos::prelude::*;
use leptos_leaflet::{
    leaflet::{LatLng, LatLngBounds, Map, Popup, PopupOptions},
    prelude::*,
};
use shared_types::Place;
use wasm_bindgen::JsValue;

// Default to Niseko, Japan until the collection has places
pub const DEFAULT_CENTER: (f64, f64) = (42.8050, 140.6890);
pub const DEFAULT_ZOOM: f64 = 13.0;

#[component]
pub fn MapRenderer(
    store: PlaceStore,
    /// Bumped by the controller after bulk loads and adds to refit the view.
    fit_epoch: RwSignal<u64>,
    notice: RwSignal<Option<Notice>>,
) -> impl IntoView {
    let map: JsRwSignal<Option<Map>> = JsRwSignal::new_local(None::<Map>);

    let active = Memo::new(move |_| store.active());

    // Selection from either the list or a marker pans to the place and
    // opens a popup there
    Effect::new(move |_| {
        let Some(map_instance) = map.get() else {
            return;
        };
        let Some(id) = active.get() else {
            return;
        };
        let Some(place) = store.get_untracked(&id) else {
            return;
        };
        focus(&map_instance, &place);
    });

    Effect::new(move |_| {
        fit_epoch.get();
        let Some(map_instance) = map.get() else {
            return;
        };
        fit_view(&map_instance, &store.places_untracked());
    });

    // Leaflet itself loads from a CDN tag; if the container never comes up,
    // say so once instead of failing silently
    Effect::new(move |_| {
        set_timeout(
            move || {
                if map.get_untracked().is_none() {
                    notice.set(Some(Notice::error(
                        "The map failed to load. Please refresh the page.",
                    )));
                }
            },
            std::time::Duration::from_secs(5),
        );
    });

    view! {
        <MapContainer
            style="height: 100%; width: 100%; flex: 1"
            center=Position::new(DEFAULT_CENTER.0, DEFAULT_CENTER.1)
            zoom=DEFAULT_ZOOM
            set_view=true
            map=map.write_only()
        >
            <TileLayer
                url="https://tile.openstreetmap.org/{z}/{x}/{y}.png"
                attribution="&copy; <a href=\"https://www.openstreetmap.org/copyright\">OpenStreetMap</a> contributors"
            />
            <For
                each=move || store.places()
                key=|place| place.id.clone()
                children=move |place| {
                    view! {
                        <PlaceMarker place=place on_select=Callback::new(move |id: String| store.select(&id)) />
                    }
                }
            />
        </MapContainer>
    }
}

fn focus(map: &Map, place: &Place) {
    let at = LatLng::new(place.lat, place.long);
    map.set_view(&at, util::FOCUS_ZOOM);

    let popup = Popup::new(&PopupOptions::new(), None);
    popup.set_lat_lng(&at);
    popup.set_content(&JsValue::from_str(&map_marker_popup::summary_html(place)));
    popup.open_on(map);
}

fn fit_view(map: &Map, places: &[Place]) {
    match places {
        [] => {}
        [only] => {
            map.set_view(&LatLng::new(only.lat, only.long), util::FOCUS_ZOOM);
        }
        _ => {
            if let Some(region) = util::bounding_region(places) {
                let bounds = LatLngBounds::new(
                    &LatLng::new(region.south_west.lat, region.south_west.long),
                    &LatLng::new(region.north_east.lat, region.north_east.long),
                );
                map.fit_bounds(&bounds);
            }
        }
    }
}
