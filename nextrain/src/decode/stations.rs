//! `getAllStationsXML` decoding.

use super::{child_text, parse_document, repeated};

/// Decode a station list document into sorted station names.
///
/// Collects the non-empty `StationDesc` of every `objStation` under
/// `ArrayOfObjStation` and sorts them in ordinal order. Duplicates are kept.
pub fn decode_station_list(bytes: &[u8]) -> Vec<String> {
    let Some(doc) = parse_document(bytes) else {
        return Vec::new();
    };

    let mut stations: Vec<String> = repeated(&doc, "ArrayOfObjStation", "objStation")
        .filter_map(|station| child_text(station, "StationDesc"))
        .filter(|name| !name.is_empty())
        .map(str::to_string)
        .collect();

    stations.sort();
    stations
}


#[cfg(test)]
mod proptests {
    use super::*;
    use proptest::prelude::*;

    proptest! {
        /// Output is sorted and has one entry per input name
        #[test]
        fn sorted_and_complete(names in proptest::collection::vec("[A-Za-z][A-Za-z ]{0,15}", 0..20)) {
            let items: String = names
                .iter()
                .map(|n| format!("<objStation><StationDesc>{n}</StationDesc></objStation>"))
                .collect();
            let doc = format!("<ArrayOfObjStation>{items}</ArrayOfObjStation>");

            let stations = decode_station_list(doc.as_bytes());

            prop_assert_eq!(stations.len(), names.len());
            prop_assert!(stations.windows(2).all(|w| w[0] <= w[1]));

            let mut expected = names.clone();
            expected.sort();
            prop_assert_eq!(stations, expected);
        }
    }
}
