//! Core logic behind the command-line tools:
//! - `path-update` — set a value at a property path
//! - `path-remove` — delete the value at a property path
//! - `path-get`    — print the value at a property path
//!
//! Documents and values are JSON text; results are pretty-printed JSON.

use serde_json::Value;

use crate::{get, remove_with, update, MutateError, MutateOptions, Tree};

// ── Errors ────────────────────────────────────────────────────────────────

#[derive(Debug)]
pub enum CliError {
    Json(serde_json::Error),
    Mutate(MutateError),
    NotFound(String),
}

impl std::fmt::Display for CliError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            CliError::Json(e)     => write!(f, "{e}"),
            CliError::Mutate(e)   => write!(f, "{e}"),
            CliError::NotFound(p) => write!(f, "Not found: {p}"),
        }
    }
}

impl std::error::Error for CliError {}

impl From<serde_json::Error> for CliError {
    fn from(e: serde_json::Error) -> Self { CliError::Json(e) }
}

impl From<MutateError> for CliError {
    fn from(e: MutateError) -> Self { CliError::Mutate(e) }
}

fn parse_tree(json: &str) -> Result<Tree, CliError> {
    let value: Value = serde_json::from_str(json)?;
    Ok(Tree::from(value))
}

fn render(tree: &Tree) -> Result<String, CliError> {
    Ok(serde_json::to_string_pretty(&Value::from(tree))?)
}

// ── path-update ───────────────────────────────────────────────────────────

/// Set `value_json` at `path` inside `doc_json`.
pub fn update_document(doc_json: &str, path: &str, value_json: &str) -> Result<String, CliError> {
    let doc = parse_tree(doc_json)?;
    let value = parse_tree(value_json)?;
    render(&update(&doc, path, value)?)
}

// ── path-remove ───────────────────────────────────────────────────────────

/// Remove the value at `path` inside `doc_json`.
///
/// With `strict`, missing paths leave the document unchanged instead of
/// being created.
pub fn remove_document(doc_json: &str, path: &str, strict: bool) -> Result<String, CliError> {
    let doc = parse_tree(doc_json)?;
    let options = if strict { MutateOptions::strict() } else { MutateOptions::default() };
    render(&remove_with(&doc, path, &options)?)
}

// ── path-get ──────────────────────────────────────────────────────────────

/// Look up `path` inside `doc_json`.
pub fn lookup_path(doc_json: &str, path: &str) -> Result<String, CliError> {
    let doc = parse_tree(doc_json)?;
    match get(&doc, path) {
        Some(found) => render(found),
        None => Err(CliError::NotFound(path.to_string())),
    }
}
