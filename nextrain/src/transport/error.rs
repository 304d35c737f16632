//! Transport error types.

use std::error::Error as _;
use std::io;

/// Errors from a single HTTP request.
#[derive(Debug, thiserror::Error)]
pub enum TransportError {
    /// DNS failure, refused or dropped connection, or timeout
    #[error("No internet connection.")]
    NoConnection,

    /// The response carried no body
    #[error("Received no data.")]
    NoData,

    /// Any other transport-level failure
    #[error("networking failure: {0}")]
    NetworkingFailure(#[source] reqwest::Error),

    /// The request was canceled through its handle
    #[error("request canceled")]
    Canceled,
}

impl TransportError {
    /// Sort a reqwest failure into connectivity problems and everything else.
    pub(crate) fn classify(err: reqwest::Error) -> Self {
        if err.is_connect() || err.is_timeout() || lost_connection(&err) {
            TransportError::NoConnection
        } else {
            TransportError::NetworkingFailure(err)
        }
    }

    /// Whether this is a connectivity-class failure.
    pub fn is_no_connection(&self) -> bool {
        matches!(self, TransportError::NoConnection)
    }
}

/// Walk the source chain looking for an I/O error that means the link went away.
fn lost_connection(err: &reqwest::Error) -> bool {
    let mut source = err.source();
    while let Some(cause) = source {
        if let Some(io_err) = cause.downcast_ref::<io::Error>()
            && matches!(
                io_err.kind(),
                io::ErrorKind::ConnectionRefused
                    | io::ErrorKind::ConnectionReset
                    | io::ErrorKind::ConnectionAborted
                    | io::ErrorKind::NotConnected
                    | io::ErrorKind::BrokenPipe
                    | io::ErrorKind::TimedOut
            )
        {
            return true;
        }
        source = cause.source();
    }
    false
}
