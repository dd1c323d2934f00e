//! Lowers a condition tree to an elasticsearch filter clause.
//!
//! Output is single-line JSON with a fixed key order per clause:
//!
//! | Value  | Operator          | Clause                                              |
//! |--------|-------------------|-----------------------------------------------------|
//! | number | `<` `<=` `>` `>=` | `{"range": {"f": {"lt": 1}}}`                       |
//! | number | `=`               | `{"term": {"f": 1}}`                                |
//! | number | `!=`              | `{"bool": {"must_not": {"term": {"f": 1}}}}`        |
//! | string | `=`               | `{"term": {"f": "v"}}`                              |
//! | string | `!=`              | `{"bool": {"must_not": {"term": {"f": "v"}}}}`      |
//!
//! Conjunctions become `{"bool": {"must": [l, r]}}` for `AND` and
//! `{"bool": {"should": [l, r]}}` for `OR`, one wrapper per tree node.
//!
//! Matches over the AST have no wildcard arms, so a new variant does not
//! compile until it is lowered here.

use std::{collections::BTreeMap, fmt};

use thiserror::Error;
use tracing::debug;

use crate::ast::{CompOp, Cond, CondComp, CondConj, ConjOp, Expr, SelectStatement, expressions::unquote};

/// AST shapes that have no filter clause equivalent.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum GenerationError {
    #[error("unsupported comparison: {value_type} values cannot use '{op}' (field {ident})")]
    UnsupportedComparison {
        ident: String,
        op: CompOp,
        value_type: &'static str,
    },

    #[error("function call comparisons not yet supported for: {name}")]
    FunctionCall { name: String },

    #[error("only searching a single index is supported, got: {0:?}")]
    TableCount(Vec<String>),
}

/// Generate the clause for any condition node.
pub fn gen_cond_clause(cond: &Cond) -> Result<String, GenerationError> {
    lower(vec![Pending::Cond(cond)])
}

/// `bool.must` / `bool.should` holding both sides.
pub fn gen_conj_clause(conj: &CondConj) -> Result<String, GenerationError> {
    let mut pending = Vec::new();
    push_conj_sides(&mut pending, conj);
    Ok(format!("{}{}", conj_prefix(conj.op), lower(pending)?))
}

/// Work left for [`lower`]: a subtree to generate or literal text to append.
enum Pending<'a> {
    Cond(&'a Cond),
    Text(&'static str),
}

// Chains nest one wrapper per node, so the walk keeps its own stack rather
// than recursing once per level.
fn lower(mut pending: Vec<Pending<'_>>) -> Result<String, GenerationError> {
    let mut out = String::new();
    while let Some(next) = pending.pop() {
        match next {
            Pending::Text(text) => out.push_str(text),
            Pending::Cond(Cond::Comp(comp)) => out.push_str(&gen_comp_clause(comp)?),
            Pending::Cond(Cond::Conj(conj)) => {
                out.push_str(conj_prefix(conj.op));
                push_conj_sides(&mut pending, conj);
            }
        }
    }
    Ok(out)
}

fn push_conj_sides<'a>(pending: &mut Vec<Pending<'a>>, conj: &'a CondConj) {
    pending.push(Pending::Text("]}}"));
    pending.push(Pending::Cond(&conj.right));
    pending.push(Pending::Text(", "));
    pending.push(Pending::Cond(&conj.left));
}

fn conj_prefix(op: ConjOp) -> &'static str {
    match op {
        ConjOp::And => r#"{"bool": {"must": ["#,
        ConjOp::Or => r#"{"bool": {"should": ["#,
    }
}

/// Term or range clause for a single comparison.
pub fn gen_comp_clause(comp: &CondComp) -> Result<String, GenerationError> {
    let field = json_string(&comp.ident);

    let value = match &comp.val {
        Expr::Number(n) => json_number(*n),
        Expr::String(s) => json_string(unquote(s)),
        Expr::FuncCall(call) => {
            return Err(GenerationError::FunctionCall {
                name: call.name.clone(),
            });
        }
    };

    let term = format!(r#"{{"term": {{{}: {}}}}}"#, field, value);
    match comp.op {
        CompOp::Eq => Ok(term),
        CompOp::Ne => Ok(format!(r#"{{"bool": {{"must_not": {}}}}}"#, term)),
        CompOp::Lt | CompOp::Le | CompOp::Gt | CompOp::Ge => match (&comp.val, gen_range_op(comp.op)) {
            (Expr::Number(_), Some(range_op)) => Ok(format!(
                r#"{{"range": {{{}: {{"{}": {}}}}}}}"#,
                field, range_op, value
            )),
            _ => Err(GenerationError::UnsupportedComparison {
                ident: comp.ident.clone(),
                op: comp.op,
                value_type: comp.val.type_name(),
            }),
        },
    }
}

/// The range clause key for `<`, `<=`, `>`, `>=`; `None` for anything else.
pub fn gen_range_op(op: CompOp) -> Option<&'static str> {
    match op {
        CompOp::Lt => Some("lt"),
        CompOp::Le => Some("lte"),
        CompOp::Gt => Some("gt"),
        CompOp::Ge => Some("gte"),
        CompOp::Eq | CompOp::Ne => None,
    }
}

fn json_string(s: &str) -> String {
    serde_json::Value::String(s.to_string()).to_string()
}

/// Shortest representation that parses back to the same value, so `-9`
/// stays `-9` and `12.3` stays `12.3`. Magnitudes outside `[1e-6, 1e21)`
/// switch to exponent form (`1e300`, `-2.5e-8`).
fn json_number(n: f64) -> String {
    let magnitude = n.abs();
    if magnitude == 0.0 || (1e-6..1e21).contains(&magnitude) {
        return n.to_string();
    }
    match serde_json::Number::from_f64(n) {
        Some(num) => num.to_string(),
        None => n.to_string(),
    }
}

/// A search request ready to hand to a [`crate::search::SearchClient`].
#[derive(Debug, Clone, PartialEq)]
pub struct SearchRequest {
    pub method: String,
    pub path: String,
    pub query_args: BTreeMap<String, String>,
    pub body: String,
}

impl fmt::Display for SearchRequest {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {}\n{}", self.method, self.path, self.body)
    }
}

/// Build the `_search` request for a statement targeting exactly one index.
pub fn build_search_request(stmt: &SelectStatement) -> Result<SearchRequest, GenerationError> {
    let index = match stmt.table_list.as_slice() {
        [index] => index,
        tables => return Err(GenerationError::TableCount(tables.to_vec())),
    };

    let clause = gen_cond_clause(&stmt.where_cond)?;
    let body = format!(r#"{{"filter": {}}}"#, clause);
    debug!(index = %index, body = %body, "generated search body");

    let mut query_args = BTreeMap::new();
    query_args.insert("pretty".to_string(), "true".to_string());

    Ok(SearchRequest {
        method: "POST".to_string(),
        path: format!("/{}/_search", index),
        query_args,
        body,
    })
}
