//! Executes generated requests against an elasticsearch-compatible service.

use std::{collections::BTreeMap, io::Write, time::Duration};

use thiserror::Error;
use tracing::{debug, info};

use crate::{
    ast::SelectStatement,
    generator::{GenerationError, build_search_request},
};

#[derive(Debug, Error)]
pub enum SearchError {
    #[error("generation error: {0}")]
    Generation(#[from] GenerationError),

    #[error("transport error: {0}")]
    Transport(String),

    #[error("invalid request method: {0}")]
    Method(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

/// A single synchronous request/response exchange with the search service.
pub trait SearchClient {
    fn execute(
        &self,
        method: &str,
        path: &str,
        query_args: &BTreeMap<String, String>,
        body: &str,
    ) -> Result<Vec<u8>, SearchError>;
}

/// [`SearchClient`] speaking HTTP to a base URL such as `http://localhost:9200`.
pub struct HttpSearchClient {
    base_url: String,
    client: reqwest::blocking::Client,
}

impl HttpSearchClient {
    pub fn new(base_url: &str, timeout: Duration) -> Result<Self, SearchError> {
        let client = reqwest::blocking::Client::builder()
            .timeout(timeout)
            .build()
            .map_err(|e| SearchError::Transport(format!("failed to create HTTP client: {}", e)))?;

        Ok(Self {
            base_url: base_url.trim_end_matches('/').to_string(),
            client,
        })
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }
}

impl SearchClient for HttpSearchClient {
    fn execute(
        &self,
        method: &str,
        path: &str,
        query_args: &BTreeMap<String, String>,
        body: &str,
    ) -> Result<Vec<u8>, SearchError> {
        let method = reqwest::Method::from_bytes(method.as_bytes())
            .map_err(|_| SearchError::Method(method.to_string()))?;
        let url = format!("{}{}", self.base_url, path);
        debug!(%method, %url, "sending request");

        let response = self
            .client
            .request(method, &url)
            .query(query_args)
            .header(reqwest::header::CONTENT_TYPE, "application/json")
            .body(body.to_string())
            .send()
            .map_err(|e| SearchError::Transport(e.to_string()))?;

        info!(status = response.status().as_u16(), %url, "response received");

        let bytes = response
            .bytes()
            .map_err(|e| SearchError::Transport(e.to_string()))?;
        Ok(bytes.to_vec())
    }
}

/// Generate the request for `stmt`, optionally echo it to `out`, execute it
/// and return the raw response text.
pub fn exec_search(
    stmt: &SelectStatement,
    print: bool,
    client: &dyn SearchClient,
    out: &mut dyn Write,
) -> Result<String, SearchError> {
    let request = build_search_request(stmt)?;

    if print {
        writeln!(out, "{}", request)?;
    }

    let response = client.execute(&request.method, &request.path, &request.query_args, &request.body)?;
    Ok(String::from_utf8_lossy(&response).into_owned())
}
