//! Irish Rail realtime API endpoint URLs.

use reqwest::Url;

use super::error::IrishRailError;

/// Default base URL for the Irish Rail realtime API.
pub const DEFAULT_BASE_URL: &str = "http://api.irishrail.ie/realtime/realtime.asmx/";

const ALL_STATIONS_PATH: &str = "getAllStationsXML";
const STATION_DATA_PATH: &str = "getStationDataByNameXML";
const STATION_DESC_PARAM: &str = "StationDesc";

/// Resolved endpoint URLs for one base URL.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Endpoints {
    all_stations: Url,
    station_data: Url,
}

impl Endpoints {
    /// Resolve the endpoints against `base_url`. A missing trailing slash is added.
    pub fn new(base_url: &str) -> Result<Self, IrishRailError> {
        let invalid = |reason: String| IrishRailError::InvalidBaseUrl {
            url: base_url.to_string(),
            reason,
        };

        let mut normalized = base_url.to_string();
        if !normalized.ends_with('/') {
            normalized.push('/');
        }

        let base = Url::parse(&normalized).map_err(|e| invalid(e.to_string()))?;
        if base.cannot_be_a_base() {
            return Err(invalid("cannot be a base".to_string()));
        }

        let all_stations = base
            .join(ALL_STATIONS_PATH)
            .map_err(|e| invalid(e.to_string()))?;
        let station_data = base
            .join(STATION_DATA_PATH)
            .map_err(|e| invalid(e.to_string()))?;

        Ok(Self {
            all_stations,
            station_data,
        })
    }

    /// URL listing every station.
    pub fn all_stations(&self) -> Url {
        self.all_stations.clone()
    }

    /// URL listing trains through `station`.
    ///
    /// The name is percent-encoded: station names contain spaces, and some
    /// contain non-ASCII letters (e.g. "Dún Laoghaire").
    pub fn trains_from_station(&self, station: &str) -> Url {
        let mut url = self.station_data.clone();
        let query = format!("{STATION_DESC_PARAM}={}", urlencoding::encode(station));
        url.set_query(Some(&query));
        url
    }
}
