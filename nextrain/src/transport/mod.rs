//! HTTP transport.
//!
//! Performs one request per call and hands back either the raw response
//! body or a classified `TransportError`:
//! - connectivity failures (DNS, refused, dropped, timed out) → `NoConnection`
//! - a response without a body → `NoData`
//! - anything else → `NetworkingFailure`, keeping the cause
//!
//! Status codes are passed through uninterpreted.

mod client;
mod error;
mod fixture;
mod request;


use std::future::Future;

pub use client::{Networker, NetworkerConfig, PendingRequest, RequestHandle};
pub use error::TransportError;
pub use fixture::{FixtureError, FixtureTransport};
pub use request::{HttpMethod, RawResponse, Request, TransportOutcome};

/// Something that can perform a request.
///
/// This abstraction allows the Irish Rail client to be tested with
/// canned responses.
pub trait Transport {
    /// Perform the request. Resolves exactly once.
    fn request(&self, request: Request) -> impl Future<Output = TransportOutcome> + Send;
}

impl Transport for Networker {
    fn request(&self, request: Request) -> impl Future<Output = TransportOutcome> + Send {
        self.start(request)
    }
}

impl Transport for FixtureTransport {
    fn request(&self, request: Request) -> impl Future<Output = TransportOutcome> + Send {
        std::future::ready(self.respond(&request))
    }
}

/// Transport chosen at startup: live HTTP or fixture files.
#[derive(Debug, Clone)]
pub enum AnyTransport {
    Live(Networker),
    Fixture(FixtureTransport),
}

impl Transport for AnyTransport {
    fn request(&self, request: Request) -> impl Future<Output = TransportOutcome> + Send {
        async move {
            match self {
                AnyTransport::Live(networker) => networker.start(request).await,
                AnyTransport::Fixture(fixtures) => fixtures.respond(&request),
            }
        }
    }
}
