//! Result of a train search.

use super::Train;

/// Answer to "trains from A to B".
///
/// The upstream API only lists every train through an origin station, so a
/// search either finds trains terminating at the requested destination or
/// falls back to everything leaving the origin.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TrainSearchResult {
    /// Trains whose destination is the requested station. Never empty.
    TerminatingAtDestination(Vec<Train>),

    /// No train terminates at the requested station; these are all trains
    /// through the origin. May be empty.
    TerminatingAtOtherDestination(Vec<Train>),
}

impl TrainSearchResult {
    /// The trains in this result, soonest first.
    pub fn trains(&self) -> &[Train] {
        match self {
            TrainSearchResult::TerminatingAtDestination(trains)
            | TrainSearchResult::TerminatingAtOtherDestination(trains) => trains,
        }
    }

    /// Consume the result, returning its trains.
    pub fn into_trains(self) -> Vec<Train> {
        match self {
            TrainSearchResult::TerminatingAtDestination(trains)
            | TrainSearchResult::TerminatingAtOtherDestination(trains) => trains,
        }
    }

    /// Whether the trains terminate at the requested destination.
    pub fn terminates_at_destination(&self) -> bool {
        matches!(self, TrainSearchResult::TerminatingAtDestination(_))
    }
}
