//! # cds2ts Schema
//!
//! CDS schema model and CSN parser.
//!
//! This crate provides:
//! - The definition/element model of a compiled CDS model (CSN)
//! - An insertion-ordered map that keeps schema declaration order
//! - The closed set of CDS scalar type tags
//! - JSON parsing of CSN documents

pub mod error;
pub mod ordered;
pub mod parser;
pub mod types;

pub use error::ParseError;
pub use ordered::OrderedMap;
pub use parser::{parse_csn, parse_csn_file};
pub use types::{Cardinality, Definition, Element, EnumValue, Kind, ScalarType, Schema};
