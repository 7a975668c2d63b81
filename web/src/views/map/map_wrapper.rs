use leptos::{prelude::*, task::spawn_local};
use leptos_router::hooks::use_query_map;
use shared_types::PlaceDraft;
use thaw::{Button, ButtonAppearance};
use wasm_bindgen::JsValue;
use wasm_bindgen_futures::JsFuture;

use crate::{
    components::{Notice, NoticeBar, PlaceForm, PlaceList},
    server::geocode_address,
    share,
    store::PlaceStore,
    views::map::map_renderer::MapRenderer,
};

#[component]
pub fn MapStackApp() -> impl IntoView {
    let store = PlaceStore::new();

    // UI state
    let notice = RwSignal::new(None::<Notice>);
    let fit_epoch = RwSignal::new(0u64);
    let form_open = RwSignal::new(false);
    let geocoding = RwSignal::new(false);
    let share_fallback = RwSignal::new(None::<String>);

    let query = use_query_map();

    // Startup: a share token in the URL wins; otherwise whatever was saved
    // locally. Runs once, on the client.
    Effect::new(move |_| {
        match query.with_untracked(|params| params.get(share::QUERY_PARAM)) {
            Some(token) => match share::decode(&token) {
                Ok(payload) => store.replace(payload.places, true),
                Err(err) => {
                    leptos::logging::warn!("ignoring shared collection: {err}");
                    store.restore();
                }
            },
            None => store.restore(),
        }
        if !store.places_untracked().is_empty() {
            fit_epoch.update(|epoch| *epoch += 1);
        }
    });

    let handle_submit = move |draft: PlaceDraft| {
        geocoding.set(true);
        spawn_local(async move {
            match geocode_address(draft.address.clone()).await {
                Ok(coords) => {
                    store.create(draft, coords);
                    geocoding.set(false);
                    form_open.set(false);
                    fit_epoch.update(|epoch| *epoch += 1);
                }
                Err(err) => {
                    geocoding.set(false);
                    notice.set(Some(Notice::error(format!(
                        "Could not add that place: {err}"
                    ))));
                }
            }
        });
    };

    let handle_delete = move |id: String| {
        let confirmed = web_sys::window()
            .and_then(|w| w.confirm_with_message("Delete this place?").ok())
            .unwrap_or(false);
        if confirmed {
            store.delete(&id);
        }
    };

    let share_collection = move |_| {
        let places = store.places_untracked();
        if places.is_empty() {
            notice.set(Some(Notice::error("Add a place before sharing.")));
            return;
        }
        let token = share::encode(&places);
        let Some(url) = share_link(&token) else {
            return;
        };
        spawn_local(async move {
            match copy_to_clipboard(&url).await {
                Ok(()) => notice.set(Some(Notice::success(
                    "Shareable link copied to clipboard. Anyone with the link can view your map.",
                ))),
                // Clipboard access can be denied; hand the link over for
                // manual copying instead
                Err(_) => share_fallback.set(Some(url)),
            }
        });
    };

    view! {
        <div class="mapstack-container">
            <header class="mapstack-header">
                <div class="header-titles">
                    <h1>"MapStack"</h1>
                    <p class="collection-description">
                        {move || if store.is_shared() {
                            "Shared collection. Click \"Add Place\" to make it your own."
                        } else {
                            "Save places you love and share them with anyone."
                        }}
                    </p>
                </div>
                <div class="header-actions">
                    <Button
                        appearance=ButtonAppearance::Primary
                        on_click=move |_| form_open.set(true)
                    >
                        "Add Place"
                    </Button>
                    <Button on_click=share_collection>"Share"</Button>
                </div>
            </header>

            <NoticeBar notice=notice />

            {move || share_fallback.get().map(|url| view! {
                <div class="share-fallback">
                    <span>"Copy this link to share:"</span>
                    <input
                        type="text"
                        readonly
                        prop:value=url.clone()
                        on:focus=move |ev| {
                            event_target::<web_sys::HtmlInputElement>(&ev).select();
                        }
                    />
                    <button class="secondary" on:click=move |_| share_fallback.set(None)>
                        "Done"
                    </button>
                </div>
            })}

            <div class="mapstack-content">
                <aside class="mapstack-sidebar">
                    <PlaceList store=store on_delete=Callback::new(handle_delete) />
                </aside>
                <div class="mapstack-map">
                    <MapRenderer store=store fit_epoch=fit_epoch notice=notice />
                </div>
            </div>

            <PlaceForm show=form_open busy=geocoding on_submit=Callback::new(handle_submit) />
        </div>
    }
}

fn share_link(token: &str) -> Option<String> {
    let location = web_sys::window()?.location();
    let origin = location.origin().ok()?;
    let path = location.pathname().ok()?;
    Some(format!(
        "{origin}{path}?{}={}",
        share::QUERY_PARAM,
        urlencoding::encode(token)
    ))
}

async fn copy_to_clipboard(text: &str) -> Result<(), JsValue> {
    let window = web_sys::window().ok_or_else(|| JsValue::from_str("no window"))?;
    let clipboard = window.navigator().clipboard();
    JsFuture::from(clipboard.write_text(text)).await.map(|_| ())
}
