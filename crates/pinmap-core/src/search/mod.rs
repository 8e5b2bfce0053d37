//! Search filter over the pin collection
//!
//! A pure projection with no side effects: the UI recomputes it whenever
//! the collection or the query changes.

use crate::models::Pin;

/// Pins whose remark or address contains the query as a case-insensitive
/// substring, in their original order. An empty query matches everything.
#[must_use]
pub fn filter_pins(pins: &[Pin], query: &str) -> Vec<Pin> {
    if query.is_empty() {
        return pins.to_vec();
    }

    let needle = query.to_lowercase();
    pins.iter()
        .filter(|pin| {
            pin.remark.to_lowercase().contains(&needle)
                || pin.address.to_lowercase().contains(&needle)
        })
        .cloned()
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{DraftPin, PinId};
    use pretty_assertions::assert_eq;

    fn pin(remark: &str, address: &str) -> Pin {
        Pin {
            id: PinId::new(),
            lat: 0.0,
            lng: 0.0,
            address: address.to_string(),
            remark: remark.to_string(),
        }
    }

    fn sample() -> Vec<Pin> {
        vec![
            pin("Coffee shop", "MG Road, Bangalore"),
            pin("", "Park"),
        ]
    }

    #[test]
    fn test_matches_address_substring() {
        let pins = sample();
        let hits = filter_pins(&pins, "road");
        assert_eq!(hits.len(), 1);
        assert_eq!(hits[0].remark, "Coffee shop");
    }

    #[test]
    fn test_case_insensitive() {
        let pins = sample();
        let hits = filter_pins(&pins, "PARK");
        assert_eq!(hits.len(), 1);
        assert_eq!(hits[0].address, "Park");
    }

    #[test]
    fn test_empty_query_matches_all() {
        let pins = sample();
        assert_eq!(filter_pins(&pins, ""), pins);
    }

    #[test]
    fn test_matches_remark_substring() {
        let pins = sample();
        let hits = filter_pins(&pins, "coffee");
        assert_eq!(hits.len(), 1);
    }

    #[test]
    fn test_no_match() {
        let pins = sample();
        assert!(filter_pins(&pins, "harbour").is_empty());
    }

    #[test]
    fn test_preserves_order() {
        let pins = vec![pin("a stop", "x"), pin("b stop", "y"), pin("c stop", "z")];
        let hits = filter_pins(&pins, "stop");
        let remarks: Vec<&str> = hits.iter().map(|p| p.remark.as_str()).collect();
        assert_eq!(remarks, vec!["a stop", "b stop", "c stop"]);
    }

    #[test]
    fn test_draft_conversion_is_searchable() {
        let mut draft = DraftPin::new(1.0, 2.0);
        draft.set_remark("Weekend market");
        let pins = vec![draft.into_pin()];
        assert_eq!(filter_pins(&pins, "weekend").len(), 1);
    }
}
