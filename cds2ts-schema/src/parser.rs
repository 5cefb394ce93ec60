//! CSN JSON parser.
//!
//! Reads the JSON form of a compiled CDS model (`cds compile --to csn`)
//! into the internal schema representation.

use crate::error::ParseError;
use crate::ordered::OrderedMap;
use crate::types::{Definition, Schema};
use serde::Deserialize;
use std::path::Path;

/// Top-level shape of a CSN document. Keys other than these are ignored.
#[derive(Deserialize)]
struct CsnDocument {
    namespace: Option<String>,
    definitions: Option<OrderedMap<Definition>>,
}

/// Parses a CSN document from a string.
///
/// # Arguments
/// * `json` - CSN document content
///
/// # Returns
/// Parsed schema or parse error.
///
/// # Errors
/// Returns `ParseError` if the JSON is malformed or has no `definitions` object.
pub fn parse_csn(json: &str) -> Result<Schema, ParseError> {
    let document: CsnDocument = serde_json::from_str(json)?;
    let definitions = document
        .definitions
        .ok_or_else(|| ParseError::invalid_structure("no definitions object found"))?;

    Ok(Schema {
        namespace: document.namespace,
        definitions,
    })
}

/// Parses a CSN document from a file.
///
/// # Errors
/// Returns `ParseError` if the file cannot be read or parsed.
pub fn parse_csn_file(path: &Path) -> Result<Schema, ParseError> {
    let json = std::fs::read_to_string(path)?;
    parse_csn(&json)
}
