//! Data transfer objects for web requests and responses.

use serde::{Deserialize, Serialize};

use crate::domain::{Train, TrainSearchResult};

/// Request to search for trains between two stations.
#[derive(Debug, Deserialize)]
pub struct TrainSearchRequest {
    /// Origin station name, as listed by `/stations`
    pub origin: String,

    /// Destination station name
    pub destination: String,
}

/// All station names, sorted.
#[derive(Debug, Serialize)]
pub struct StationListResponse {
    pub stations: Vec<String>,
}

/// A train in search results.
#[derive(Debug, Serialize)]
pub struct TrainResult {
    pub origin: String,
    pub destination: String,
    /// Expected departure time ("HH:MM")
    pub expected_departure: String,
    /// Minutes until due
    pub due_in: u32,
}

impl From<&Train> for TrainResult {
    fn from(train: &Train) -> Self {
        Self {
            origin: train.origin().to_string(),
            destination: train.destination().to_string(),
            expected_departure: train.expected_departure_time().to_string(),
            due_in: train.due_in(),
        }
    }
}

/// Which kind of answer a search produced.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum SearchKind {
    /// Trains terminate at the requested destination
    TerminatingAtDestination,
    /// None do; these are all trains through the origin
    TerminatingAtOtherDestination,
}

/// Response to a train search.
#[derive(Debug, Serialize)]
pub struct TrainSearchResponse {
    pub kind: SearchKind,
    pub trains: Vec<TrainResult>,
}

impl From<&TrainSearchResult> for TrainSearchResponse {
    fn from(result: &TrainSearchResult) -> Self {
        let kind = match result {
            TrainSearchResult::TerminatingAtDestination(_) => SearchKind::TerminatingAtDestination,
            TrainSearchResult::TerminatingAtOtherDestination(_) => {
                SearchKind::TerminatingAtOtherDestination
            }
        };
        Self {
            kind,
            trains: result.trains().iter().map(TrainResult::from).collect(),
        }
    }
}

/// Error response body.
#[derive(Debug, Serialize)]
pub struct ErrorResponse {
    pub error: String,
}
