//! Prelude module for convenient imports.
//!
//! ```ignore
//! use cds2ts::prelude::*;
//! ```

// Schema types
pub use cds2ts_schema::{
    Cardinality, Definition, Element, EnumValue, Kind, OrderedMap, ParseError, Schema,
    parse_csn, parse_csn_file,
};

// Generation
pub use cds2ts_codegen::{
    CodegenError, Document, Generator, GeneratorConfig, OutputMode, RenderContext, Renderable,
    generate_from_file, generate_from_json, write_documents,
};
