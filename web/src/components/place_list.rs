use leptos::prelude::*;
use shared_types::Place;

use crate::store::PlaceStore;

const NOTES_EXCERPT_LEN: usize = 120;

#[component]
pub fn PlaceList(store: PlaceStore, #[prop(into)] on_delete: Callback<String>) -> impl IntoView {
    view! {
        <div class="places-list">
            {move || {
                if store.is_empty() {
                    view! {
                        <div class="empty-state">
                            <div class="empty-state-icon">"📍"</div>
                            <p>"No places yet"</p>
                            <p class="empty-state-hint">
                                "Click \"Add Place\" to get started"
                            </p>
                        </div>
                    }
                    .into_any()
                } else {
                    view! {
                        <For
                            each=move || store.places()
                            key=|place| place.id.clone()
                            children=move |place| {
                                view! { <PlaceCard store=store place=place on_delete=on_delete /> }
                            }
                        />
                    }
                    .into_any()
                }
            }}
        </div>
    }
}

#[component]
fn PlaceCard(store: PlaceStore, place: Place, on_delete: Callback<String>) -> impl IntoView {
    let id = place.id.clone();
    let is_active = Memo::new({
        let id = id.clone();
        move |_| store.active().as_deref() == Some(id.as_str())
    });
    let select_id = id.clone();
    let delete_id = id.clone();

    view! {
        <div
            class="place-card"
            class:active=move || is_active.get()
            on:click=move |_| store.select(&select_id)
        >
            <div class="place-name">
                <span
                    class="place-marker"
                    style=format!("background: {}", place.color.hex())
                ></span>
                {place.name.clone()}
            </div>
            {place.category.map(|category| view! {
                <span class="place-category">{category.emoji()} " " {category.label()}</span>
            })}
            {place.notes.as_deref().map(|notes| view! {
                <div class="place-notes">{excerpt(notes, NOTES_EXCERPT_LEN)}</div>
            })}
            <div class="place-actions">
                <button
                    class="secondary"
                    on:click=move |ev| {
                        ev.stop_propagation();
                        on_delete.run(delete_id.clone());
                    }
                >
                    "Delete"
                </button>
            </div>
        </div>
    }
}

/// First `max` characters of the notes, cut on a char boundary, with an
/// ellipsis when anything was dropped.
pub fn excerpt(text: &str, max: usize) -> String {
    if text.chars().count() <= max {
        text.to_string()
    } else {
        let cut: String = text.chars().take(max).collect();
        format!("{}…", cut.trim_end())
    }
}
