use crate::views::map::map_marker_popup::PlacePopup;
use leptos::prelude::*;
use leptos_leaflet::prelude::*;
use shared_types::Place;

#[component]
pub fn PlaceMarker(place: Place, #[prop(into)] on_select: Callback<String>) -> impl IntoView {
    let icon_svg = pin_icon(place.color.svg_fill());
    let position = Position::new(place.lat, place.long);
    let name = place.name.clone();

    let id = place.id.clone();
    let mouse_events = MouseEvents::new().on_click(move |_| on_select.run(id.clone()));

    view! {
        <Marker
            position=position
            draggable=false
            icon_url=Some(icon_svg)
            icon_size=Some((28.0, 42.0))
            icon_anchor=Some((14.0, 42.0))
            mouse_events=mouse_events
        >
            <Tooltip>{name}</Tooltip>
            <Popup>
                <PlacePopup place=place />
            </Popup>
        </Marker>
    }
}

/// Teardrop pin filled with the marker color; the fill arrives URL-escaped.
pub fn pin_icon(fill: &str) -> String {
    format!(
        "data:image/svg+xml,%3Csvg xmlns='http://www.w3.org/2000/svg' width='28' height='42' viewBox='0 0 28 42'%3E%3Cdefs%3E%3Cfilter id='shadow' x='-50%25' y='-50%25' width='200%25' height='200%25'%3E%3CfeDropShadow dx='0' dy='1' stdDeviation='1.5' flood-color='%23000' flood-opacity='0.25'/%3E%3C/filter%3E%3C/defs%3E%3Cpath fill='{}' stroke='%23ffffff' stroke-width='1.5' filter='url(%23shadow)' d='M14 2C8.5 2 4 6.5 4 12c0 8.5 10 26 10 26s10-17.5 10-26c0-5.5-4.5-10-10-10zm0 13.5c-1.9 0-3.5-1.6-3.5-3.5s1.6-3.5 3.5-3.5 3.5 1.6 3.5 3.5-1.6 3.5-3.5 3.5z'/%3E%3C/svg%3E",
        fill
    )
}
