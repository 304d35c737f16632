//! Transport serving canned responses from a directory.
//!
//! Lets the server run and be tested without reaching the upstream API.
//! Files are keyed by stem: a request carrying a `StationDesc` query
//! parameter is answered from `{StationDesc}.xml`, any other request from
//! `{last path segment}.xml` (e.g. `getAllStationsXML.xml`).

use std::collections::HashMap;
use std::path::{Path, PathBuf};

use reqwest::Url;
use tracing::debug;

use super::error::TransportError;
use super::request::{RawResponse, Request, TransportOutcome};

/// Query parameter whose value selects the fixture file.
const KEY_PARAM: &str = "StationDesc";

/// Errors loading a fixture directory.
#[derive(Debug, thiserror::Error)]
pub enum FixtureError {
    /// Directory or file could not be read
    #[error("failed to read {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// No `.xml` files found
    #[error("no fixture files found in {0}")]
    Empty(PathBuf),
}

/// Transport answering requests from pre-loaded files.
#[derive(Debug, Clone)]
pub struct FixtureTransport {
    responses: HashMap<String, Vec<u8>>,
}

impl FixtureTransport {
    /// Load every `.xml` file in `dir`.
    pub fn load(dir: impl AsRef<Path>) -> Result<Self, FixtureError> {
        let dir = dir.as_ref();
        let io_err = |path: &Path| {
            let path = path.to_path_buf();
            move |source| FixtureError::Io { path, source }
        };

        let mut responses = HashMap::new();
        for entry in std::fs::read_dir(dir).map_err(io_err(dir))? {
            let path = entry.map_err(io_err(dir))?.path();
            if !path.is_file() || path.extension().and_then(|s| s.to_str()) != Some("xml") {
                continue;
            }
            let Some(stem) = path.file_stem().and_then(|s| s.to_str()) else {
                continue;
            };
            let body = std::fs::read(&path).map_err(io_err(&path))?;
            responses.insert(stem.to_string(), body);
        }

        if responses.is_empty() {
            return Err(FixtureError::Empty(dir.to_path_buf()));
        }

        debug!(dir = %dir.display(), count = responses.len(), "loaded fixtures");
        Ok(Self { responses })
    }

    /// Build from in-memory responses keyed the same way as files.
    pub fn from_responses<K, V>(responses: impl IntoIterator<Item = (K, V)>) -> Self
    where
        K: Into<String>,
        V: Into<Vec<u8>>,
    {
        Self {
            responses: responses
                .into_iter()
                .map(|(k, v)| (k.into(), v.into()))
                .collect(),
        }
    }

    /// Keys of the loaded fixtures, sorted.
    pub fn keys(&self) -> Vec<&str> {
        let mut keys: Vec<&str> = self.responses.keys().map(String::as_str).collect();
        keys.sort_unstable();
        keys
    }

    /// Answer a request. Unknown keys and empty files resolve to `NoData`.
    pub fn respond(&self, request: &Request) -> TransportOutcome {
        let body = fixture_key(&request.url).and_then(|key| self.responses.get(&key));
        match body {
            Some(body) if !body.is_empty() => Ok(RawResponse {
                status: 200,
                body: body.clone(),
            }),
            _ => {
                debug!(url = %request.url, "no fixture for request");
                Err(TransportError::NoData)
            }
        }
    }
}

fn fixture_key(url: &Url) -> Option<String> {
    if let Some((_, value)) = url.query_pairs().find(|(k, _)| k == KEY_PARAM) {
        return Some(value.into_owned());
    }
    url.path_segments()?
        .next_back()
        .filter(|s| !s.is_empty())
        .map(str::to_string)
}
