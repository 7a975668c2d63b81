use leptos::prelude::*;
use shared_types::{Coordinates, Place, PlaceDraft};
use uuid::Uuid;

use crate::storage;

/// Ordered collection of places plus the active-place pointer.
///
/// Pure state and transitions; persistence and map/list refresh live in
/// [`PlaceStore`] and the components observing it.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Collection {
    places: Vec<Place>,
    active: Option<String>,
}

impl Collection {
    pub fn from_places(places: Vec<Place>) -> Self {
        Collection {
            places,
            active: None,
        }
    }

    /// Builds a place from the draft plus geocoded coordinates and appends
    /// it. Ids are random UUIDs, so rapid successive adds stay distinct.
    pub fn create(&mut self, draft: PlaceDraft, coords: Coordinates) -> Place {
        let place = Place {
            id: Uuid::new_v4().to_string(),
            name: draft.name,
            address: draft.address,
            lat: coords.lat,
            long: coords.long,
            category: draft.category,
            color: draft.color,
            notes: draft.notes,
        };
        self.places.push(place.clone());
        place
    }

    /// Removes the place with `id`. Unknown ids are a no-op. Clears the
    /// active pointer when it referenced the removed place.
    pub fn delete(&mut self, id: &str) {
        self.places.retain(|place| place.id != id);
        if self.active.as_deref() == Some(id) {
            self.active = None;
        }
    }

    /// Sets the active place. Ids not in the collection leave the pointer
    /// unchanged.
    pub fn select(&mut self, id: &str) {
        if self.places.iter().any(|place| place.id == id) {
            self.active = Some(id.to_string());
        }
    }

    pub fn places(&self) -> &[Place] {
        &self.places
    }

    pub fn active(&self) -> Option<&str> {
        self.active.as_deref()
    }

    pub fn get(&self, id: &str) -> Option<&Place> {
        self.places.iter().find(|place| place.id == id)
    }

    pub fn len(&self) -> usize {
        self.places.len()
    }

    pub fn is_empty(&self) -> bool {
        self.places.is_empty()
    }
}

/// Reactive handle over the collection, handed to every component that
/// reads or mutates it. Mutations write through to localStorage.
#[derive(Clone, Copy)]
pub struct PlaceStore {
    collection: RwSignal<Collection>,
    shared: RwSignal<bool>,
}

impl PlaceStore {
    pub fn new() -> Self {
        PlaceStore {
            collection: RwSignal::new(Collection::default()),
            shared: RwSignal::new(false),
        }
    }

    pub fn create(&self, draft: PlaceDraft, coords: Coordinates) -> Place {
        let place = self.collection.write().create(draft, coords);
        self.persist();
        place
    }

    pub fn delete(&self, id: &str) {
        self.collection.write().delete(id);
        self.persist();
    }

    pub fn select(&self, id: &str) {
        self.collection.write().select(id);
    }

    pub fn places(&self) -> Vec<Place> {
        self.collection.with(|c| c.places().to_vec())
    }

    pub fn places_untracked(&self) -> Vec<Place> {
        self.collection.with_untracked(|c| c.places().to_vec())
    }

    pub fn active(&self) -> Option<String> {
        self.collection.with(|c| c.active().map(str::to_string))
    }

    pub fn get_untracked(&self, id: &str) -> Option<Place> {
        self.collection.with_untracked(|c| c.get(id).cloned())
    }

    pub fn is_empty(&self) -> bool {
        self.collection.with(|c| c.is_empty())
    }

    /// Whether the collection came from a share link rather than local
    /// storage. Adds still work but diverge from the link.
    pub fn is_shared(&self) -> bool {
        self.shared.get()
    }

    /// Swaps in a whole new collection, e.g. one decoded from a share link.
    pub fn replace(&self, places: Vec<Place>, shared: bool) {
        self.collection.set(Collection::from_places(places));
        self.shared.set(shared);
    }

    /// Loads whatever was saved locally. Missing or malformed data leaves
    /// the collection empty.
    pub fn restore(&self) {
        let places = storage::load_places();
        if !places.is_empty() {
            self.collection.set(Collection::from_places(places));
        }
    }

    fn persist(&self) {
        self.collection.with_untracked(|c| storage::save_places(c.places()));
    }
}

impl Default for PlaceStore {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use shared_types::MarkerColor;

    fn draft(name: &str) -> PlaceDraft {
        PlaceDraft {
            name: name.to_string(),
            address: "Niseko, Japan".to_string(),
            category: None,
            color: MarkerColor::Red,
            notes: None,
        }
    }

    fn coords() -> Coordinates {
        Coordinates {
            lat: 42.8050,
            long: 140.6890,
        }
    }

    #[test]
    fn create_appends_exactly_one_place() {
        let mut collection = Collection::default();
        collection.create(draft("one"), coords());
        let place = collection.create(draft("two"), coords());

        assert_eq!(collection.len(), 2);
        assert_eq!(collection.places()[1].id, place.id);
        assert_eq!(place.name, "two");
        assert_eq!(place.lat, 42.8050);
    }

    #[test]
    fn created_ids_are_unique() {
        let mut collection = Collection::default();
        let first = collection.create(draft("one"), coords());
        let second = collection.create(draft("two"), coords());
        assert_ne!(first.id, second.id);
    }

    #[test]
    fn create_id_is_absent_from_prior_collection() {
        let mut collection = Collection::default();
        for i in 0..20 {
            let existing: Vec<String> =
                collection.places().iter().map(|p| p.id.clone()).collect();
            let place = collection.create(draft(&format!("place {i}")), coords());
            assert!(!existing.contains(&place.id));
        }
    }

    #[test]
    fn places_keep_insertion_order() {
        let mut collection = Collection::default();
        collection.create(draft("a"), coords());
        collection.create(draft("b"), coords());
        collection.create(draft("c"), coords());
        let names: Vec<&str> = collection.places().iter().map(|p| p.name.as_str()).collect();
        assert_eq!(names, ["a", "b", "c"]);
    }

    #[test]
    fn delete_is_idempotent() {
        let mut collection = Collection::default();
        let place = collection.create(draft("a"), coords());

        collection.delete(&place.id);
        assert!(collection.is_empty());

        // Second delete of the same id is a no-op
        collection.delete(&place.id);
        assert!(collection.is_empty());
    }

    #[test]
    fn delete_clears_active_pointer() {
        let mut collection = Collection::default();
        let place = collection.create(draft("a"), coords());
        collection.select(&place.id);
        assert_eq!(collection.active(), Some(place.id.as_str()));

        collection.delete(&place.id);
        assert_eq!(collection.active(), None);
    }

    #[test]
    fn delete_of_other_place_keeps_active_pointer() {
        let mut collection = Collection::default();
        let keep = collection.create(draft("keep"), coords());
        let drop = collection.create(draft("drop"), coords());
        collection.select(&keep.id);

        collection.delete(&drop.id);
        assert_eq!(collection.active(), Some(keep.id.as_str()));
    }

    #[test]
    fn select_ignores_unknown_ids() {
        let mut collection = Collection::default();
        let place = collection.create(draft("a"), coords());
        collection.select(&place.id);

        collection.select("not-a-member");
        assert_eq!(collection.active(), Some(place.id.as_str()));
    }

    #[test]
    fn from_places_starts_with_no_selection() {
        let mut source = Collection::default();
        source.create(draft("a"), coords());
        let collection = Collection::from_places(source.places().to_vec());
        assert_eq!(collection.active(), None);
        assert_eq!(collection.len(), 1);
    }
}
