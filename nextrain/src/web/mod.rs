//! Web layer for the departure search.
//!
//! Exposes the station list and train search over HTTP as JSON.

mod dto;
mod routes;
mod state;

pub use dto::*;
pub use routes::{AppError, create_router};
pub use state::AppState;
