use shared_types::{Coordinates, Place};

/// Zoom used when centering the view on a single place.
pub const FOCUS_ZOOM: f64 = 15.0;

// Relative margin added around a fitted region, floored so that
// near-coincident places still produce a usable span.
const MARGIN_RATIO: f64 = 0.1;
const MIN_PAD_DEG: f64 = 0.0025;

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BoundingRegion {
    pub south_west: Coordinates,
    pub north_east: Coordinates,
}

impl BoundingRegion {
    pub fn contains(&self, lat: f64, long: f64) -> bool {
        lat >= self.south_west.lat
            && lat <= self.north_east.lat
            && long >= self.south_west.long
            && long <= self.north_east.long
    }

    pub fn center(&self) -> Coordinates {
        Coordinates {
            lat: (self.south_west.lat + self.north_east.lat) / 2.0,
            long: (self.south_west.long + self.north_east.long) / 2.0,
        }
    }
}

/// Region covering every place's coordinates, grown by a fixed relative
/// margin. Empty collections have no region; callers treat that as a
/// no-op. Single-place collections are centered directly instead (see
/// the map renderer), so the degenerate region never reaches the map.
pub fn bounding_region(places: &[Place]) -> Option<BoundingRegion> {
    let first = places.first()?;
    let mut south = first.lat;
    let mut north = first.lat;
    let mut west = first.long;
    let mut east = first.long;

    for place in &places[1..] {
        south = south.min(place.lat);
        north = north.max(place.lat);
        west = west.min(place.long);
        east = east.max(place.long);
    }

    let lat_pad = ((north - south) * MARGIN_RATIO).max(MIN_PAD_DEG);
    let long_pad = ((east - west) * MARGIN_RATIO).max(MIN_PAD_DEG);

    Some(BoundingRegion {
        south_west: Coordinates {
            lat: south - lat_pad,
            long: west - long_pad,
        },
        north_east: Coordinates {
            lat: north + lat_pad,
            long: east + long_pad,
        },
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use shared_types::MarkerColor;

    fn place_at(lat: f64, long: f64) -> Place {
        Place {
            id: format!("{lat},{long}"),
            name: "somewhere".to_string(),
            address: String::new(),
            lat,
            long,
            category: None,
            color: MarkerColor::Red,
            notes: None,
        }
    }

    #[test]
    fn empty_collection_has_no_region() {
        assert_eq!(bounding_region(&[]), None);
    }

    #[test]
    fn single_place_region_is_centered_on_it() {
        let region = bounding_region(&[place_at(42.8050, 140.6890)]).unwrap();
        let center = region.center();
        assert!((center.lat - 42.8050).abs() < 1e-9);
        assert!((center.long - 140.6890).abs() < 1e-9);
        assert!(region.contains(42.8050, 140.6890));
    }

    #[test]
    fn region_contains_every_place() {
        let places = vec![
            place_at(42.8050, 140.6890),
            place_at(43.0621, 141.3544),
            place_at(42.7762, 140.6874),
        ];
        let region = bounding_region(&places).unwrap();
        for place in &places {
            assert!(region.contains(place.lat, place.long));
        }
    }

    #[test]
    fn region_is_grown_by_the_margin() {
        let places = vec![place_at(42.0, 140.0), place_at(43.0, 141.0)];
        let region = bounding_region(&places).unwrap();
        assert!(region.south_west.lat < 42.0);
        assert!(region.south_west.long < 140.0);
        assert!(region.north_east.lat > 43.0);
        assert!(region.north_east.long > 141.0);
    }

    #[test]
    fn coincident_places_still_get_a_span() {
        let places = vec![place_at(42.8, 140.7), place_at(42.8, 140.7)];
        let region = bounding_region(&places).unwrap();
        assert!(region.north_east.lat - region.south_west.lat > 0.0);
        assert!(region.north_east.long - region.south_west.long > 0.0);
    }
}
