use leptos::prelude::*;
use shared_types::Place;
use thaw::{Label, LabelSize};

#[component]
pub fn PlacePopup(place: Place) -> impl IntoView {
    view! {
        <div class="place-popup">
            <Label size=LabelSize::Large>{place.name.clone()}</Label>
            {place.category.map(|category| view! {
                <p class="place-popup-category">{category.emoji()} " " {category.label()}</p>
            })}
            {place.notes.clone().map(|notes| view! {
                <p class="place-popup-notes">{notes}</p>
            })}
        </div>
    }
}

/// Escaped HTML summary used by the imperative popup opened on selection.
/// Declarative marker popups render [`PlacePopup`] instead.
pub fn summary_html(place: &Place) -> String {
    let mut html = format!("<strong>{}</strong>", escape_html(&place.name));
    if let Some(category) = place.category {
        html.push_str(&format!("<br/>{} {}", category.emoji(), category.label()));
    }
    if let Some(notes) = &place.notes {
        html.push_str(&format!(
            "<br/><span class=\"place-popup-notes\">{}</span>",
            escape_html(notes)
        ));
    }
    html
}

// Notes and names are user text; never splice them into HTML raw
fn escape_html(text: &str) -> String {
    let mut escaped = String::with_capacity(text.len());
    for ch in text.chars() {
        match ch {
            '&' => escaped.push_str("&amp;"),
            '<' => escaped.push_str("&lt;"),
            '>' => escaped.push_str("&gt;"),
            '"' => escaped.push_str("&quot;"),
            '\'' => escaped.push_str("&#39;"),
            _ => escaped.push(ch),
        }
    }
    escaped
}

#[cfg(test)]
mod tests {
    use super::*;
    use shared_types::{Category, MarkerColor};

    fn place() -> Place {
        Place {
            id: "a".to_string(),
            name: "Ramen Santouka".to_string(),
            address: "Niseko, Japan".to_string(),
            lat: 42.8050,
            long: 140.6890,
            category: Some(Category::Ramen),
            color: MarkerColor::Red,
            notes: Some("cash only".to_string()),
        }
    }

    #[test]
    fn summary_includes_name_category_and_notes() {
        let html = summary_html(&place());
        assert!(html.contains("Ramen Santouka"));
        assert!(html.contains("🍜"));
        assert!(html.contains("cash only"));
    }

    #[test]
    fn summary_omits_absent_fields() {
        let mut place = place();
        place.category = None;
        place.notes = None;
        let html = summary_html(&place);
        assert!(!html.contains("<br/>"));
    }

    #[test]
    fn summary_escapes_user_text() {
        let mut place = place();
        place.name = "<script>alert(1)</script>".to_string();
        let html = summary_html(&place);
        assert!(!html.contains("<script>"));
        assert!(html.contains("&lt;script&gt;"));
    }
}
