//! reqwest-backed HTTP client.
//!
//! `Networker` is API-agnostic: it performs exactly one request per call,
//! never retries, and sorts failures into the `TransportError` kinds.
//! Every request it starts is registered so it can be canceled
//! individually or all at once.

use std::collections::HashMap;
use std::future::Future;
use std::pin::Pin;
use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::{Arc, Mutex, MutexGuard, PoisonError};
use std::task::{Context, Poll};
use std::time::Duration;

use futures::future::{AbortHandle, Abortable, BoxFuture, FutureExt};
use reqwest::header::{HeaderMap, HeaderName, HeaderValue};
use tracing::{debug, info, trace};

use super::error::TransportError;
use super::request::{RawResponse, Request, TransportOutcome};

/// Default request timeout in seconds.
const DEFAULT_TIMEOUT_SECS: u64 = 30;

/// Configuration for the HTTP client.
///
/// Fixed once the client is built; to change it, build a new client.
#[derive(Debug, Clone)]
pub struct NetworkerConfig {
    /// Headers sent with every request
    pub default_headers: HeaderMap,
    /// Request timeout in seconds
    pub timeout_secs: u64,
    /// Log full requests and responses at info level
    pub verbose: bool,
}

impl NetworkerConfig {
    /// Create a config with no default headers and the default timeout.
    pub fn new() -> Self {
        Self {
            default_headers: HeaderMap::new(),
            timeout_secs: DEFAULT_TIMEOUT_SECS,
            verbose: false,
        }
    }

    /// Add a header sent with every request.
    pub fn with_default_header(mut self, name: HeaderName, value: HeaderValue) -> Self {
        self.default_headers.insert(name, value);
        self
    }

    /// Set request timeout.
    pub fn with_timeout(mut self, secs: u64) -> Self {
        self.timeout_secs = secs;
        self
    }

    /// Enable or disable verbose request/response logging.
    pub fn with_verbose(mut self, verbose: bool) -> Self {
        self.verbose = verbose;
        self
    }
}

impl Default for NetworkerConfig {
    fn default() -> Self {
        Self::new()
    }
}

type InFlight = Arc<Mutex<HashMap<u64, AbortHandle>>>;

fn lock(in_flight: &InFlight) -> MutexGuard<'_, HashMap<u64, AbortHandle>> {
    in_flight.lock().unwrap_or_else(PoisonError::into_inner)
}

/// HTTP client performing single, cancelable requests.
#[derive(Debug, Clone)]
pub struct Networker {
    http: reqwest::Client,
    default_headers: Arc<HeaderMap>,
    verbose: bool,
    in_flight: InFlight,
    next_id: Arc<AtomicU64>,
}

impl Networker {
    /// Create a new client with the given configuration.
    pub fn new(config: NetworkerConfig) -> Result<Self, TransportError> {
        let http = reqwest::Client::builder()
            .default_headers(config.default_headers.clone())
            .timeout(Duration::from_secs(config.timeout_secs))
            .build()
            .map_err(TransportError::NetworkingFailure)?;

        Ok(Self {
            http,
            default_headers: Arc::new(config.default_headers),
            verbose: config.verbose,
            in_flight: Arc::new(Mutex::new(HashMap::new())),
            next_id: Arc::new(AtomicU64::new(0)),
        })
    }

    /// Start a request.
    ///
    /// The returned future resolves exactly once. Canceling it through its
    /// handle (or `cancel_all`) makes it resolve with `TransportError::Canceled`.
    pub fn start(&self, request: Request) -> PendingRequest {
        let (handle, registration) = AbortHandle::new_pair();
        let id = self.next_id.fetch_add(1, Ordering::Relaxed);
        lock(&self.in_flight).insert(id, handle.clone());

        let guard = InFlightGuard {
            id,
            in_flight: Arc::clone(&self.in_flight),
        };
        let this = self.clone();
        let fut = async move {
            let _guard = guard;
            this.execute(request).await
        }
        .boxed();

        PendingRequest {
            inner: Abortable::new(fut, registration),
            handle,
        }
    }

    /// Perform a request and wait for its outcome.
    pub async fn send(&self, request: Request) -> TransportOutcome {
        self.start(request).await
    }

    /// Cancel every request started from this client that has not resolved.
    pub fn cancel_all(&self) {
        let handles: Vec<AbortHandle> = lock(&self.in_flight).values().cloned().collect();
        debug!(count = handles.len(), "canceling in-flight requests");
        for handle in handles {
            handle.abort();
        }
    }

    /// Number of requests started and not yet resolved or dropped.
    pub fn active_requests(&self) -> usize {
        lock(&self.in_flight).len()
    }

    /// Whether any request is in flight (the network activity indicator).
    pub fn is_active(&self) -> bool {
        self.active_requests() > 0
    }

    /// Headers sent with every request.
    pub fn default_headers(&self) -> &HeaderMap {
        &self.default_headers
    }

    async fn execute(&self, request: Request) -> TransportOutcome {
        self.log_request(&request);

        let Request {
            url,
            method,
            headers,
            body,
        } = request;

        let mut builder = self.http.request(method.into(), url.clone()).headers(headers);
        if let Some(body) = body {
            builder = builder.body(body);
        }

        let response = builder.send().await.map_err(|e| {
            let err = TransportError::classify(e);
            debug!(method = method.as_str(), url = %url, error = %err, "request failed");
            err
        })?;

        let status = response.status().as_u16();
        let body = response.bytes().await.map_err(|e| {
            let err = TransportError::classify(e);
            debug!(url = %url, status, error = %err, "reading response body failed");
            err
        })?;

        if self.verbose {
            info!(
                method = method.as_str(),
                url = %url,
                status,
                body = %String::from_utf8_lossy(&body),
                "response"
            );
        } else {
            debug!(url = %url, status, bytes = body.len(), "response");
        }

        if body.is_empty() {
            return Err(TransportError::NoData);
        }

        Ok(RawResponse {
            status,
            body: body.to_vec(),
        })
    }

    fn log_request(&self, request: &Request) {
        if self.verbose {
            let headers = merged_headers(&self.default_headers, &request.headers);
            let body = request.body.as_deref().map(String::from_utf8_lossy);
            info!(
                method = request.method.as_str(),
                url = %request.url,
                headers = ?headers,
                body = ?body,
                "request"
            );
        } else {
            trace!(method = request.method.as_str(), url = %request.url, "request");
        }
    }
}

/// The headers a request goes out with: defaults, with per-request values
/// replacing any default of the same name.
pub(crate) fn merged_headers(defaults: &HeaderMap, overrides: &HeaderMap) -> HeaderMap {
    let mut merged = defaults.clone();
    for name in overrides.keys() {
        merged.remove(name);
    }
    for (name, value) in overrides {
        merged.append(name.clone(), value.clone());
    }
    merged
}

/// Removes a request from the in-flight registry when it resolves or is dropped.
struct InFlightGuard {
    id: u64,
    in_flight: InFlight,
}

impl Drop for InFlightGuard {
    fn drop(&mut self) {
        lock(&self.in_flight).remove(&self.id);
    }
}

/// A started request. Resolves to its `TransportOutcome`.
pub struct PendingRequest {
    inner: Abortable<BoxFuture<'static, TransportOutcome>>,
    handle: AbortHandle,
}

impl PendingRequest {
    /// A handle that can cancel this request from elsewhere.
    pub fn handle(&self) -> RequestHandle {
        RequestHandle(self.handle.clone())
    }
}

impl Future for PendingRequest {
    type Output = TransportOutcome;

    fn poll(self: Pin<&mut Self>, cx: &mut Context<'_>) -> Poll<Self::Output> {
        let this = self.get_mut();
        Pin::new(&mut this.inner)
            .poll(cx)
            .map(|result| result.unwrap_or(Err(TransportError::Canceled)))
    }
}

/// Cancels a single pending request.
#[derive(Debug, Clone)]
pub struct RequestHandle(AbortHandle);

impl RequestHandle {
    /// Cancel the request. It resolves with `TransportError::Canceled`
    /// unless it already resolved.
    pub fn cancel(&self) {
        self.0.abort();
    }
}
