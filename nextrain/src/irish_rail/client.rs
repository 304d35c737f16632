//! Irish Rail realtime API client.
//!
//! Coordinates the transport and the decoder for the two queries the
//! application needs, and applies the destination fallback policy.

use tracing::debug;

use crate::decode::{decode_station_list, decode_trains_from_station};
use crate::domain::TrainSearchResult;
use crate::transport::{Networker, Request, Transport, TransportError};

use super::endpoints::{DEFAULT_BASE_URL, Endpoints};
use super::error::IrishRailError;
use super::select::select_trains;

/// Configuration for the Irish Rail client.
#[derive(Debug, Clone)]
pub struct IrishRailConfig {
    /// Base URL for the API (defaults to production Irish Rail)
    pub base_url: String,
}

impl IrishRailConfig {
    /// Create a config pointing at the production API.
    pub fn new() -> Self {
        Self {
            base_url: DEFAULT_BASE_URL.to_string(),
        }
    }

    /// Set a custom base URL (for testing).
    pub fn with_base_url(mut self, url: impl Into<String>) -> Self {
        self.base_url = url.into();
        self
    }
}

impl Default for IrishRailConfig {
    fn default() -> Self {
        Self::new()
    }
}

/// Irish Rail API client.
///
/// The API has no "trains between two stations" query, only every train
/// through a station. `search_trains` filters that board down to trains
/// terminating at the destination, or returns the whole board when none do.
#[derive(Debug, Clone)]
pub struct IrishRailClient<T = Networker> {
    transport: T,
    endpoints: Endpoints,
}

impl<T: Transport> IrishRailClient<T> {
    /// Create a new client over the given transport.
    pub fn new(transport: T, config: IrishRailConfig) -> Result<Self, IrishRailError> {
        Ok(Self {
            transport,
            endpoints: Endpoints::new(&config.base_url)?,
        })
    }

    /// Fetch every station name, sorted.
    pub async fn list_stations(&self) -> Result<Vec<String>, TransportError> {
        let response = self
            .transport
            .request(Request::get(self.endpoints.all_stations()))
            .await?;

        let stations = decode_station_list(&response.body);
        debug!(
            status = response.status,
            stations = stations.len(),
            "fetched station list"
        );
        Ok(stations)
    }

    /// Find trains from `origin` to `destination`.
    ///
    /// Transport failures are returned unchanged; nothing is retried.
    pub async fn search_trains(
        &self,
        origin: &str,
        destination: &str,
    ) -> Result<TrainSearchResult, TransportError> {
        let url = self.endpoints.trains_from_station(origin);
        let response = self.transport.request(Request::get(url)).await?;

        let trains = decode_trains_from_station(&response.body);
        let decoded = trains.len();
        let result = select_trains(trains, destination);

        debug!(
            origin,
            destination,
            status = response.status,
            decoded,
            returned = result.trains().len(),
            terminating = result.terminates_at_destination(),
            "searched trains"
        );
        Ok(result)
    }

    /// The underlying transport.
    pub fn transport(&self) -> &T {
        &self.transport
    }

    /// The resolved endpoint URLs.
    pub fn endpoints(&self) -> &Endpoints {
        &self.endpoints
    }
}
