//! Irish Rail realtime API client.
//!
//! Two read-only, anonymous XML endpoints are used:
//! - `getAllStationsXML` lists every station
//! - `getStationDataByNameXML?StationDesc=...` lists trains due at a station
//!   within the next 90 minutes
//!
//! Neither endpoint reports application errors through HTTP status codes.

mod client;
mod endpoints;
mod error;
mod select;


pub use client::{IrishRailClient, IrishRailConfig};
pub use endpoints::{DEFAULT_BASE_URL, Endpoints};
pub use error::IrishRailError;
pub use select::select_trains;
