//! Destination matching and fallback for train searches.

use crate::domain::{Train, TrainSearchResult};

/// Pick the trains that answer "from the origin to `destination`".
///
/// Trains are first sorted by due-in (stable, so ties keep feed order); the
/// feed is not reliably sorted. Those whose destination equals `destination`
/// exactly are returned if there are any. Otherwise every train is returned
/// so the caller still has something useful to show.
///
/// Matching is byte-for-byte: "bray" or "Bray " will not match "Bray".
pub fn select_trains(mut trains: Vec<Train>, destination: &str) -> TrainSearchResult {
    trains.sort_by_key(Train::due_in);

    let terminating: Vec<Train> = trains
        .iter()
        .filter(|t| t.destination() == destination)
        .cloned()
        .collect();

    if terminating.is_empty() {
        TrainSearchResult::TerminatingAtOtherDestination(trains)
    } else {
        TrainSearchResult::TerminatingAtDestination(terminating)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn train(destination: &str, due_in: u32) -> Train {
        Train::new("Dublin Connolly", destination, "10:00", due_in)
    }

    fn due(result: &TrainSearchResult) -> Vec<u32> {
        result.trains().iter().map(Train::due_in).collect()
    }

    #[test]
    fn falls_back_to_all_trains_sorted() {
        let trains = vec![train("Bray", 15), train("Howth", 3), train("Malahide", 9)];

        let result = select_trains(trains, "Maynooth");

        assert!(matches!(
            result,
            TrainSearchResult::TerminatingAtOtherDestination(_)
        ));
        assert_eq!(due(&result), vec![3, 9, 15]);
    }

    #[test]
    fn returns_only_matches_sorted() {
        let trains = vec![
            train("Bray", 15),
            train("Howth", 3),
            train("Bray", 7),
            train("Malahide", 1),
        ];

        let result = select_trains(trains, "Bray");

        assert!(result.terminates_at_destination());
        assert_eq!(due(&result), vec![7, 15]);
        assert!(result.trains().iter().all(|t| t.destination() == "Bray"));
    }

    #[test]
    fn empty_board_falls_back_to_empty() {
        let result = select_trains(Vec::new(), "Bray");
        assert_eq!(result, TrainSearchResult::TerminatingAtOtherDestination(vec![]));
    }

    #[test]
    fn matching_is_exact() {
        let trains = vec![train("Bray", 4)];

        for query in ["bray", "Bray ", " Bray", "BRAY"] {
            assert!(!select_trains(trains.clone(), query).terminates_at_destination());
        }
        assert!(select_trains(trains, "Bray").terminates_at_destination());
    }

    #[test]
    fn ties_keep_feed_order() {
        let first = Train::new("Howth", "Bray", "10:05", 5);
        let second = Train::new("Malahide", "Bray", "10:05", 5);

        let result = select_trains(vec![first.clone(), second.clone()], "Bray");

        assert_eq!(result.into_trains(), vec![first, second]);
    }
}
