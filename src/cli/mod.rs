//! CLI support for essql
//!
//! The `essql` binary is a thin shell over these functions, which keeps the
//! command behaviour testable without a terminal or a live search service.

mod bulk;
mod query;

pub use bulk::{BulkOptions, BulkOutcome, execute_bulk};
pub use query::{QueryOptions, QueryOutcome, execute_query, statement_from};

use std::io;

use thiserror::Error;

use crate::{GenerationError, ParseError, SearchError};

/// Errors that can occur during CLI operations
#[derive(Debug, Error)]
pub enum CliError {
    #[error(transparent)]
    Parse(#[from] ParseError),

    #[error("generation error: {0}")]
    Generation(#[from] GenerationError),

    #[error(transparent)]
    Search(SearchError),

    #[error("invalid JSON: {0}")]
    Json(#[from] serde_json::Error),

    #[error("IO error: {0}")]
    Io(#[from] io::Error),

    #[error("no query provided; pass it as an argument or pipe it to stdin")]
    NoInput,
}

impl From<SearchError> for CliError {
    fn from(e: SearchError) -> Self {
        match e {
            SearchError::Generation(e) => CliError::Generation(e),
            SearchError::Io(e) => CliError::Io(e),
            e => CliError::Search(e),
        }
    }
}
