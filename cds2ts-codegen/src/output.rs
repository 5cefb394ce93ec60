//! Writing generated documents to disk.
//!
//! A path ending in `.ts` names a single output file. Any other path is
//! treated as a directory that receives one file per document.

use crate::error::CodegenError;
use crate::generator::Document;
use std::collections::HashSet;
use std::fs;
use std::path::{Path, PathBuf};

/// Writes documents to the given path.
///
/// # Returns
/// Paths of the files written.
///
/// # Errors
/// Returns `CodegenError::Output` if several documents are aimed at a single
/// `.ts` file or share a file name (ignoring case), or `CodegenError::Io` if
/// writing fails. Nothing is written when an `Output` error is returned.
pub fn write_documents(documents: &[Document], path: &Path) -> Result<Vec<PathBuf>, CodegenError> {
    if is_file_target(path) {
        let [document] = documents else {
            return Err(CodegenError::output(
                path,
                format!(
                    "{} documents need a directory, not a single file",
                    documents.len()
                ),
            ));
        };
        if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
            fs::create_dir_all(parent)?;
        }
        write_file(path, &document.content)?;
        return Ok(vec![path.to_path_buf()]);
    }

    let mut seen = HashSet::new();
    if let Some(duplicate) = documents
        .iter()
        .find(|document| !seen.insert(document.file_name.to_lowercase()))
    {
        return Err(CodegenError::output(
            path.join(&duplicate.file_name),
            "more than one document has this file name",
        ));
    }

    fs::create_dir_all(path)?;
    documents
        .iter()
        .map(|document| -> Result<PathBuf, CodegenError> {
            let file = path.join(&document.file_name);
            write_file(&file, &document.content)?;
            Ok(file)
        })
        .collect()
}

fn is_file_target(path: &Path) -> bool {
    path.extension().is_some_and(|ext| ext == "ts")
}

fn write_file(path: &Path, content: &str) -> Result<(), CodegenError> {
    fs::write(path, content)?;
    tracing::info!("Wrote {} ({} bytes)", path.display(), content.len());
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn document(name: &str, content: &str) -> Document {
        Document {
            file_name: name.to_string(),
            content: content.to_string(),
        }
    }

    #[test]
    fn test_write_single_file() {
        let dir = tempfile::tempdir().expect("Failed to create temp dir");
        let target = dir.path().join("types").join("model.ts");

        let written = write_documents(&[document("index.ts", "export type A = string;\n")], &target)
            .expect("Failed to write");

        assert_eq!(written, [target.clone()]);
        let content = fs::read_to_string(&target).expect("Failed to read");
        assert_eq!(content, "export type A = string;\n");
    }

    #[test]
    fn test_write_directory() {
        let dir = tempfile::tempdir().expect("Failed to create temp dir");
        let target = dir.path().join("generated");
        let documents = [
            document("IBooks.ts", "export interface IBooks {\n}\n"),
            document("Genre.ts", "export enum Genre {\n}\n"),
        ];

        let written = write_documents(&documents, &target).expect("Failed to write");

        assert_eq!(written.len(), 2);
        assert!(target.join("IBooks.ts").exists());
        let genre = fs::read_to_string(target.join("Genre.ts")).expect("Failed to read");
        assert_eq!(genre, "export enum Genre {\n}\n");
    }

    #[test]
    fn test_duplicate_file_names_rejected() {
        let dir = tempfile::tempdir().expect("Failed to create temp dir");
        let target = dir.path().join("generated");
        let documents = [
            document("Books.ts", "export interface Books {\n    x: string;\n}\n"),
            document("books.ts", "export interface books {\n}\n"),
        ];

        let err = write_documents(&documents, &target).unwrap_err();
        assert!(matches!(err, CodegenError::Output { .. }));
        assert!(!target.exists());
    }

    #[test]
    fn test_many_documents_to_single_file() {
        let dir = tempfile::tempdir().expect("Failed to create temp dir");
        let target = dir.path().join("model.ts");
        let documents = [document("A.ts", "a\n"), document("B.ts", "b\n")];

        let err = write_documents(&documents, &target).unwrap_err();
        assert!(matches!(err, CodegenError::Output { .. }));
        assert!(!target.exists());
    }
}
