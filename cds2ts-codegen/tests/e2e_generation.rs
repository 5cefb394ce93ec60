//! End-to-end generation from CSN documents.

use cds2ts_codegen::{
    CodegenError, GeneratorConfig, OutputMode, generate_from_file, generate_from_json,
    write_documents,
};
use std::fs;

const BOOKSHOP: &str = r#"{
  "namespace": "sap.capire.bookshop",
  "definitions": {
    "sap.capire.bookshop.Books": {
      "kind": "entity",
      "elements": {
        "ID": { "key": true, "type": "cds.Integer" },
        "title": { "type": "cds.String", "length": 111 },
        "descr": { "type": "cds.LargeString" },
        "author": {
          "type": "cds.Association",
          "target": "sap.capire.bookshop.Authors",
          "keys": [{ "ref": ["ID"] }]
        },
        "stock": { "type": "cds.Integer" },
        "price": { "type": "cds.Decimal", "precision": 9, "scale": 2 },
        "status": {
          "type": "cds.String",
          "enum": { "Available": { "val": "A" }, "SoldOut": { "val": "S" } }
        },
        "tags": { "items": { "type": "cds.String" } },
        "modifiedAt": { "type": "cds.Timestamp" }
      }
    },
    "sap.capire.bookshop.Authors": {
      "kind": "entity",
      "elements": {
        "ID": { "key": true, "type": "cds.Integer" },
        "name": { "type": "cds.String" },
        "books": {
          "type": "cds.Association",
          "cardinality": { "max": "*" },
          "target": "sap.capire.bookshop.Books",
          "on": [{ "ref": ["books", "author"] }, "=", { "ref": ["$self"] }]
        },
        "address": { "type": "sap.capire.bookshop.Address" }
      }
    },
    "sap.capire.bookshop.Address": {
      "kind": "type",
      "elements": {
        "street": { "type": "cds.String" },
        "city": { "type": "cds.String" }
      }
    },
    "sap.capire.bookshop.Rating": {
      "kind": "type",
      "type": "cds.Integer",
      "enum": { "Poor": { "val": 1 }, "Good": { "val": 3 }, "Great": { "val": 5 } }
    },
    "sap.capire.bookshop.ISBN": { "kind": "type", "type": "cds.String" },
    "CatalogService": { "kind": "service" },
    "CatalogService.submitOrder": { "kind": "action" }
  }
}"#;

const EXPECTED: &str = "export enum BooksStatus {
    Available = \"A\",
    SoldOut = \"S\",
}

export interface IBooks {
    ID: number;
    title: string;
    descr: string;
    author?: IAuthors;
    stock: number;
    price: number;
    status: BooksStatus;
    tags: string[];
    modifiedAt: Date;
}

export interface IAuthors {
    ID: number;
    name: string;
    books?: IBooks[];
    address: IAddress;
}

export interface IAddress {
    street: string;
    city: string;
}

export enum Rating {
    Poor = 1,
    Good = 3,
    Great = 5,
}

export type ISBN = string;
";

#[test]
fn test_bookshop_single_document() {
    let documents = generate_from_json(BOOKSHOP, GeneratorConfig::new().prefix("I"))
        .expect("Failed to generate");

    assert_eq!(documents.len(), 1);
    assert_eq!(documents[0].content, EXPECTED);
}

#[test]
fn test_bookshop_entity_index() {
    let documents = generate_from_json(BOOKSHOP, GeneratorConfig::new().entity_index(true))
        .expect("Failed to generate");

    assert!(documents[0].content.ends_with(
        "export enum Entity {
    Books = \"sap.capire.bookshop.Books\",
    Authors = \"sap.capire.bookshop.Authors\",
}
"
    ));
}

#[test]
fn test_bookshop_per_definition_files() {
    let dir = tempfile::tempdir().expect("Failed to create temp dir");
    let input = dir.path().join("model.json");
    fs::write(&input, BOOKSHOP).expect("Failed to write model");

    let config = GeneratorConfig::new()
        .prefix("I")
        .output_mode(OutputMode::PerDefinition);
    let documents = generate_from_file(&input, config).expect("Failed to generate");
    let out_dir = dir.path().join("types");
    let written = write_documents(&documents, &out_dir).expect("Failed to write");

    assert_eq!(written.len(), 5);
    let books = fs::read_to_string(out_dir.join("IBooks.ts")).expect("Failed to read");
    assert!(books.starts_with(
        "import type { IAuthors } from \"./IAuthors\";\n\nexport enum BooksStatus {"
    ));
    assert!(books.ends_with("    modifiedAt: Date;\n}\n"));
    let authors = fs::read_to_string(out_dir.join("IAuthors.ts")).expect("Failed to read");
    assert!(authors.starts_with(
        "import type { IBooks } from \"./IBooks\";\n\
         import type { IAddress } from \"./IAddress\";\n\
         \n\
         export interface IAuthors {"
    ));
    let isbn = fs::read_to_string(out_dir.join("ISBN.ts")).expect("Failed to read");
    assert_eq!(isbn, "export type ISBN = string;\n");
}

#[test]
fn test_invalid_input() {
    let err = generate_from_json("42", GeneratorConfig::new()).unwrap_err();
    assert!(matches!(err, CodegenError::Parse(_)));
}

#[test]
fn test_missing_input_file() {
    let err = generate_from_file(
        std::path::Path::new("/nonexistent/model.json"),
        GeneratorConfig::new(),
    )
    .unwrap_err();
    assert!(matches!(err, CodegenError::Io(_)));
}

#[test]
fn test_colliding_names_written_to_separate_files() {
    let model = r#"{
  "definitions": {
    "a.Books": { "kind": "entity", "elements": { "x": { "type": "cds.String" } } },
    "b.Books": { "kind": "entity", "elements": { "y": { "type": "cds.Integer" } } }
  }
}"#;
    let dir = tempfile::tempdir().expect("Failed to create temp dir");
    let config = GeneratorConfig::new().output_mode(OutputMode::PerDefinition);
    let documents = generate_from_json(model, config).expect("Failed to generate");
    let written = write_documents(&documents, dir.path()).expect("Failed to write");

    assert_eq!(written.len(), 2);
    let first = fs::read_to_string(dir.path().join("Books.ts")).expect("Failed to read");
    let second = fs::read_to_string(dir.path().join("Books_1.ts")).expect("Failed to read");
    assert!(first.contains("    x: string;"));
    assert!(second.contains("    y: number;"));
}
