//! Re-index the hits of a saved search response

use std::{fs, io::Write, path::PathBuf};

use super::CliError;
use crate::{
    bulk::{bulk_body_from_hits, bulk_index},
    search::SearchClient,
};

/// Options for the bulk command
#[derive(Debug, Clone, Default)]
pub struct BulkOptions {
    /// Saved search response (JSON)
    pub file: PathBuf,
    /// Echo the generated request before executing it
    pub print: bool,
    /// Generate only, never contact the service
    pub norun: bool,
}

#[derive(Debug)]
pub enum BulkOutcome {
    /// `norun` was set; the NDJSON body that would have been sent
    Generated(String),
    /// Raw response text from the service
    Executed(String),
}

pub fn execute_bulk(
    options: &BulkOptions,
    client: &dyn SearchClient,
    out: &mut dyn Write,
) -> Result<BulkOutcome, CliError> {
    let text = fs::read_to_string(&options.file)?;
    let doc: serde_json::Value = serde_json::from_str(&text)?;
    let body = bulk_body_from_hits(&doc)?;

    if options.print {
        write!(out, "POST /_bulk\n{}", body)?;
    }

    if options.norun {
        return Ok(BulkOutcome::Generated(body));
    }

    Ok(BulkOutcome::Executed(bulk_index(client, &body)?))
}
