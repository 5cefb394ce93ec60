//! # cds2ts Codegen
//!
//! TypeScript declaration generation from CDS schemas.
//!
//! This crate provides:
//! - Identifier sanitization for CDS names
//! - CDS scalar to TypeScript type mapping
//! - Interface, enum and type alias rendering
//! - Hoisting of inline enums out of entities
//! - Document assembly and writing

pub mod error;
pub mod generator;
pub mod names;
pub mod output;
pub mod typescript;

pub use error::CodegenError;
pub use generator::{Document, Generator, GeneratorConfig, OutputMode};
pub use names::{declaration_name, sanitize_name, sanitize_target};
pub use output::write_documents;
pub use typescript::{RenderContext, RenderKind, Renderable, map_scalar_type};

/// Generates TypeScript documents from a CSN JSON string.
///
/// # Arguments
/// * `json` - CSN document content
/// * `config` - Generation settings
///
/// # Returns
/// Generated documents, one or many depending on the output mode.
///
/// # Errors
/// Returns `CodegenError` if parsing fails.
pub fn generate_from_json(
    json: &str,
    config: GeneratorConfig,
) -> Result<Vec<Document>, CodegenError> {
    let schema = cds2ts_schema::parse_csn(json)?;
    let generator = Generator::new(&schema, config);
    Ok(generator.generate())
}

/// Generates TypeScript documents from a CSN JSON file.
///
/// # Errors
/// Returns `CodegenError` if reading or parsing fails.
pub fn generate_from_file(
    path: &std::path::Path,
    config: GeneratorConfig,
) -> Result<Vec<Document>, CodegenError> {
    let json = std::fs::read_to_string(path)?;
    generate_from_json(&json, config)
}
