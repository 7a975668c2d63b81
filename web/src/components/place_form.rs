use leptos::prelude::*;
use shared_types::{Category, MarkerColor, PlaceDraft};

#[component]
pub fn PlaceForm(
    show: RwSignal<bool>,
    /// True while the submitted draft is being geocoded; the form stays up
    /// with its fields intact so a failed lookup can be retried.
    busy: RwSignal<bool>,
    #[prop(into)] on_submit: Callback<PlaceDraft>,
) -> impl IntoView {
    // Form state
    let name = RwSignal::new(String::new());
    let address = RwSignal::new(String::new());
    let category = RwSignal::new(String::new());
    let color = RwSignal::new(MarkerColor::Red.tag().to_string());
    let notes = RwSignal::new(String::new());

    let reset_form = move || {
        name.set(String::new());
        address.set(String::new());
        category.set(String::new());
        color.set(MarkerColor::Red.tag().to_string());
        notes.set(String::new());
    };

    // Fields clear whenever the modal closes, whichever path closed it
    Effect::new(move |_| {
        if !show.get() {
            reset_form();
        }
    });

    let is_form_valid = move || {
        !name.get().trim().is_empty() && !address.get().trim().is_empty()
    };

    let is_button_disabled = Memo::new(move |_| !is_form_valid() || busy.get());

    let close_modal = move || {
        if !busy.get_untracked() {
            show.set(false);
        }
    };

    let handle_submit = move |ev: web_sys::SubmitEvent| {
        ev.prevent_default();
        if !is_form_valid() || busy.get_untracked() {
            return;
        }
        let trimmed_notes = notes.get_untracked().trim().to_string();
        let draft = PlaceDraft {
            name: name.get_untracked().trim().to_string(),
            address: address.get_untracked().trim().to_string(),
            category: Category::from_tag(&category.get_untracked()),
            color: MarkerColor::from_tag(&color.get_untracked()).unwrap_or_default(),
            notes: (!trimmed_notes.is_empty()).then_some(trimmed_notes),
        };
        on_submit.run(draft);
    };

    view! {
        <div
            class=move || if show.get() { "modal-overlay show" } else { "modal-overlay" }
            on:click=move |_| close_modal()
        >
            <div class="modal" on:click=|ev| ev.stop_propagation()>
                <div class="modal-header">
                    <h2>"Add Place"</h2>
                    <button class="modal-close" on:click=move |_| close_modal()>
                        "✕"
                    </button>
                </div>
                <form on:submit=handle_submit>
                    <div class="form-group">
                        <label for="place-name">"Name"</label>
                        <input
                            id="place-name"
                            type="text"
                            placeholder="e.g. Ramen Santouka"
                            prop:value=move || name.get()
                            on:input=move |ev| name.set(event_target_value(&ev))
                            disabled=move || busy.get()
                        />
                    </div>
                    <div class="form-group">
                        <label for="place-address">"Address"</label>
                        <input
                            id="place-address"
                            type="text"
                            placeholder="e.g. Niseko, Japan"
                            prop:value=move || address.get()
                            on:input=move |ev| address.set(event_target_value(&ev))
                            disabled=move || busy.get()
                        />
                    </div>
                    <div class="form-group">
                        <label for="place-category">"Category"</label>
                        <select
                            id="place-category"
                            prop:value=move || category.get()
                            on:change=move |ev| category.set(event_target_value(&ev))
                            disabled=move || busy.get()
                        >
                            <option value="">"No category"</option>
                            {Category::ALL
                                .iter()
                                .map(|c| view! {
                                    <option value=c.tag()>
                                        {format!("{} {}", c.emoji(), c.label())}
                                    </option>
                                })
                                .collect_view()}
                        </select>
                    </div>
                    <div class="form-group">
                        <label for="place-color">"Marker color"</label>
                        <select
                            id="place-color"
                            prop:value=move || color.get()
                            on:change=move |ev| color.set(event_target_value(&ev))
                            disabled=move || busy.get()
                        >
                            {MarkerColor::ALL
                                .iter()
                                .map(|c| view! {
                                    <option value=c.tag()>{c.tag()}</option>
                                })
                                .collect_view()}
                        </select>
                    </div>
                    <div class="form-group">
                        <label for="place-notes">"Notes"</label>
                        <textarea
                            id="place-notes"
                            rows=3
                            placeholder="Anything worth remembering"
                            prop:value=move || notes.get()
                            on:input=move |ev| notes.set(event_target_value(&ev))
                            disabled=move || busy.get()
                        ></textarea>
                    </div>
                    <div class="form-actions">
                        <button
                            type="button"
                            class="secondary"
                            on:click=move |_| close_modal()
                            disabled=move || busy.get()
                        >
                            "Cancel"
                        </button>
                        <button
                            type="submit"
                            class="primary"
                            disabled=move || is_button_disabled.get()
                        >
                            {move || if busy.get() { "Finding address..." } else { "Add Place" }}
                        </button>
                    </div>
                </form>
            </div>
        </div>
    }
}
