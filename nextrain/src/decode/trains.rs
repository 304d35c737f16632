//! `getStationDataByNameXML` decoding.

use tracing::trace;

use crate::domain::Train;

use super::{child_text, parse_document, repeated};

/// Decode a station data document into trains, in document order.
///
/// An `objStationData` entry becomes a `Train` only if `Origin`,
/// `Destination`, `Expdepart` and `Duein` are all present and `Duein` is a
/// non-negative integer. Other entries are skipped.
pub fn decode_trains_from_station(bytes: &[u8]) -> Vec<Train> {
    let Some(doc) = parse_document(bytes) else {
        return Vec::new();
    };

    repeated(&doc, "ArrayOfObjStationData", "objStationData")
        .filter_map(|entry| {
            let train = decode_entry(entry);
            if train.is_none() {
                trace!(
                    train_code = child_text(entry, "Traincode").unwrap_or("?"),
                    "skipping incomplete station data entry"
                );
            }
            train
        })
        .collect()
}

fn decode_entry(entry: roxmltree::Node<'_, '_>) -> Option<Train> {
    let origin = child_text(entry, "Origin")?;
    let destination = child_text(entry, "Destination")?;
    let expected_departure = child_text(entry, "Expdepart")?;
    let due_in = child_text(entry, "Duein")?.parse::<u32>().ok()?;

    Some(Train::new(origin, destination, expected_departure, due_in))
}

#[cfg(test)]
mod tests {
    use super::*;

    const FIXTURE: &[u8] = include_bytes!("../../data/fixtures/Dublin Connolly.xml");

    fn entry(origin: &str, destination: &str, expdepart: &str, duein: &str) -> String {
        format!(
            "<objStationData>\
             <Origin>{origin}</Origin>\
             <Destination>{destination}</Destination>\
             <Expdepart>{expdepart}</Expdepart>\
             <Duein>{duein}</Duein>\
             </objStationData>"
        )
    }

    fn doc(entries: &[String]) -> String {
        format!(
            "<ArrayOfObjStationData>{}</ArrayOfObjStationData>",
            entries.concat()
        )
    }

    #[test]
    fn decodes_fixture_in_document_order() {
        let trains = decode_trains_from_station(FIXTURE);

        let due: Vec<u32> = trains.iter().map(Train::due_in).collect();
        assert_eq!(due, vec![14, 6, 22, 9, 3]);

        assert_eq!(trains[0], Train::new("Howth", "Greystones", "10:29", 14));
        assert_eq!(trains[2].origin(), "Dublin Connolly");
        assert_eq!(trains[2].destination(), "Maynooth");
    }

    #[test]
    fn drops_entry_missing_a_field() {
        let missing_destination = "<objStationData>\
             <Origin>Howth</Origin>\
             <Expdepart>10:00</Expdepart>\
             <Duein>4</Duein>\
             </objStationData>"
            .to_string();
        let xml = doc(&[entry("Howth", "Bray", "10:24", "9"), missing_destination]);

        let trains = decode_trains_from_station(xml.as_bytes());

        assert_eq!(trains.len(), 1);
        assert_eq!(trains[0].destination(), "Bray");
    }

    #[test]
    fn drops_entry_with_non_integer_due_in() {
        let xml = doc(&[
            entry("Howth", "Bray", "10:24", "soon"),
            entry("Howth", "Bray", "10:24", "-2"),
            entry("Howth", "Bray", "10:24", "4.5"),
            entry("Howth", "Bray", "10:24", ""),
            entry("Howth", "Bray", "10:30", "12"),
        ]);

        let trains = decode_trains_from_station(xml.as_bytes());

        assert_eq!(trains, vec![Train::new("Howth", "Bray", "10:30", 12)]);
    }

    #[test]
    fn empty_text_fields_count_as_present() {
        let xml = doc(&[entry("", "Bray", "", "0")]);

        let trains = decode_trains_from_station(xml.as_bytes());

        assert_eq!(trains, vec![Train::new("", "Bray", "", 0)]);
    }

    #[test]
    fn keeps_non_ascii_names() {
        let xml = doc(&[entry("Bray", "Dún Laoghaire", "11:02", "7")]);

        let trains = decode_trains_from_station(xml.as_bytes());

        assert_eq!(trains[0].destination(), "Dún Laoghaire");
    }

    #[test]
    fn empty_board_decodes_empty() {
        let xml = "<?xml version=\"1.0\" encoding=\"utf-8\"?>\
                   <ArrayOfObjStationData xmlns=\"http://api.irishrail.ie/realtime/\" />";
        assert!(decode_trains_from_station(xml.as_bytes()).is_empty());
    }

    #[test]
    fn malformed_and_wrong_shape_decode_empty() {
        assert!(decode_trains_from_station(b"").is_empty());
        assert!(decode_trains_from_station(b"<ArrayOfObjStationData>").is_empty());

        let station_list = "<ArrayOfObjStation><objStation><StationDesc>Cork</StationDesc></objStation></ArrayOfObjStation>";
        assert!(decode_trains_from_station(station_list.as_bytes()).is_empty());
    }
}
