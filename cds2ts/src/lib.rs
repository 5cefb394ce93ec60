//! # cds2ts
//!
//! Convert CDS models to TypeScript type declarations.
//!
//! Entities and structured types become interfaces, enums become TypeScript
//! enums (inline enums are hoisted next to the entity declaring them) and
//! scalar types become type aliases.
//!
//! ## Quick Start
//!
//! ```ignore
//! use cds2ts::prelude::*;
//!
//! let schema = parse_csn(&std::fs::read_to_string("gen/csn.json")?)?;
//! let config = GeneratorConfig::new().prefix("I");
//! let source = Generator::new(&schema, config).generate_single();
//! ```
//!
//! ## Crate Organization
//!
//! - [`schema`] - CSN model and parser
//! - [`codegen`] - TypeScript generation

pub mod prelude;

/// CDS schema model and CSN parsing.
pub mod schema {
    pub use cds2ts_schema::*;
}

/// TypeScript code generation.
pub mod codegen {
    pub use cds2ts_codegen::*;
}

pub use cds2ts_codegen::{
    CodegenError, Document, Generator, GeneratorConfig, OutputMode, generate_from_file,
    generate_from_json, write_documents,
};
pub use cds2ts_schema::{ParseError, Schema, parse_csn, parse_csn_file};
