//! Re-indexing glue: turns the hits of a saved search response into an
//! elasticsearch `_bulk` request body.

use std::collections::BTreeMap;

use serde::Serialize;
use serde_json::Value;
use tracing::debug;

use crate::{
    docpath,
    search::{SearchClient, SearchError},
};

#[derive(Debug, Serialize)]
struct BulkRecord {
    #[serde(rename = "_index", skip_serializing_if = "String::is_empty")]
    index: String,
    #[serde(rename = "_type", skip_serializing_if = "String::is_empty")]
    doc_type: String,
    #[serde(rename = "_id", skip_serializing_if = "String::is_empty")]
    id: String,
}

#[derive(Debug, Serialize)]
struct BulkAction {
    index: BulkRecord,
}

/// NDJSON body with an `index` action line and a document line per hit in
/// `hits/hits`. The document is the hit's `_source`, or the whole hit when it
/// has none.
pub fn bulk_body_from_hits(response: &Value) -> Result<String, serde_json::Error> {
    let hits = docpath::slice_val(response, "hits/hits");
    debug!(total = docpath::hit_count(response), hits = hits.len(), "building bulk body");

    let mut body = String::new();
    for hit in hits {
        let action = BulkAction {
            index: BulkRecord {
                index: docpath::str_val(hit, "_index"),
                doc_type: docpath::str_val(hit, "_type"),
                id: docpath::str_val(hit, "_id"),
            },
        };
        let doc = hit.get("_source").unwrap_or(hit);

        body.push_str(&serde_json::to_string(&action)?);
        body.push('\n');
        body.push_str(&serde_json::to_string(doc)?);
        body.push('\n');
    }
    Ok(body)
}

/// Post a `_bulk` body and return the raw response text.
pub fn bulk_index(client: &dyn SearchClient, body: &str) -> Result<String, SearchError> {
    let response = client.execute("POST", "/_bulk", &BTreeMap::new(), body)?;
    Ok(String::from_utf8_lossy(&response).into_owned())
}
