//! Compile a query and run it against the search service

use std::io::Write;

use tracing::{info, warn};

use super::CliError;
use crate::{
    Lexer, SelectStatement, TokenCursor, TokenKind, docpath,
    generator::{SearchRequest, build_search_request},
    parser::{parse, parse_condition},
    search::{SearchClient, exec_search},
};

/// Options for the query command
#[derive(Debug, Clone, Default)]
pub struct QueryOptions {
    /// A full `SELECT` statement or a bare `WHERE` clause
    pub query: String,
    /// Target indices for a bare `WHERE` clause
    pub indices: Vec<String>,
    /// Echo the generated request before executing it
    pub print: bool,
    /// Generate only, never contact the service
    pub norun: bool,
}

/// Result of a query command
#[derive(Debug)]
pub enum QueryOutcome {
    /// `norun` was set; the request that would have been sent
    Generated(SearchRequest),
    /// Raw response text from the service
    Executed(String),
}

fn is_select_statement(query: &str) -> bool {
    let mut cursor = TokenCursor::new(Lexer::new(query));
    cursor.scan_ignore_whitespace().is(TokenKind::Select)
}

/// Build the statement for `options`: either parse the `SELECT` statement
/// as-is, or parse a bare clause and target `options.indices`.
pub fn statement_from(options: &QueryOptions) -> Result<SelectStatement, CliError> {
    if is_select_statement(&options.query) {
        if !options.indices.is_empty() {
            warn!(indices = ?options.indices, "--index ignored for a SELECT statement");
        }
        return Ok(parse(&options.query)?);
    }

    let cond = parse_condition(&options.query)?;
    Ok(SelectStatement::new(options.indices.clone(), cond))
}

/// Execute a query command
pub fn execute_query(
    options: &QueryOptions,
    client: &dyn SearchClient,
    out: &mut dyn Write,
) -> Result<QueryOutcome, CliError> {
    let stmt = statement_from(options)?;

    if options.norun {
        let request = build_search_request(&stmt)?;
        if options.print {
            writeln!(out, "{}", request)?;
        }
        return Ok(QueryOutcome::Generated(request));
    }

    let response = exec_search(&stmt, options.print, client, out)?;

    match serde_json::from_str::<serde_json::Value>(&response) {
        Ok(doc) => info!(hits = docpath::hit_count(&doc), "search complete"),
        Err(e) => warn!(error = %e, "response is not JSON"),
    }

    Ok(QueryOutcome::Executed(response))
}
