//! Generation driver.
//!
//! Walks the top-level definitions of a schema in declaration order, picks a
//! renderer for each and assembles the rendered declarations into one or
//! more documents.

use crate::typescript::{EnumType, RenderContext, Renderable, TypeToken};
use cds2ts_schema::{Definition, EnumValue, Kind, OrderedMap, Schema};
use std::collections::{HashMap, HashSet};

/// Name of the declaration listing all entities.
pub const ENTITY_INDEX_NAME: &str = "Entity";

/// File name of the document produced in single-document mode.
pub const SINGLE_DOCUMENT_NAME: &str = "index.ts";

/// How declarations are split into documents.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum OutputMode {
    /// All declarations in one document.
    #[default]
    Single,
    /// One document per top-level definition.
    PerDefinition,
}

/// Settings for a generation pass.
#[derive(Debug, Clone, Default)]
pub struct GeneratorConfig {
    prefix: String,
    output_mode: OutputMode,
    entity_index: bool,
}

impl GeneratorConfig {
    /// Creates a configuration with default settings.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the prefix prepended to interface names.
    #[must_use]
    pub fn prefix(mut self, prefix: impl Into<String>) -> Self {
        self.prefix = prefix.into();
        self
    }

    /// Sets the output mode.
    #[must_use]
    pub fn output_mode(mut self, mode: OutputMode) -> Self {
        self.output_mode = mode;
        self
    }

    /// Enables the `Entity` enum mapping entity names to model names.
    #[must_use]
    pub fn entity_index(mut self, enabled: bool) -> Self {
        self.entity_index = enabled;
        self
    }

    /// Returns the interface prefix.
    #[must_use]
    pub fn interface_prefix(&self) -> &str {
        &self.prefix
    }

    /// Returns the output mode.
    #[must_use]
    pub const fn mode(&self) -> OutputMode {
        self.output_mode
    }
}

/// One generated source file.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Document {
    /// File name, relative to the output directory.
    pub file_name: String,
    /// File content, ending with a newline.
    pub content: String,
}

impl Document {
    fn from_declarations(file_name: impl Into<String>, declarations: &[String]) -> Self {
        let mut content = declarations.join("\n\n");
        content.push('\n');
        Self {
            file_name: file_name.into(),
            content,
        }
    }
}

/// A rendered top-level declaration.
struct Declaration<'a> {
    /// Schema name of the definition, absent for synthesized declarations.
    model_name: Option<&'a str>,
    name: String,
    references: Vec<&'a str>,
    text: String,
}

/// Generator turning a schema into TypeScript documents.
pub struct Generator<'a> {
    schema: &'a Schema,
    config: GeneratorConfig,
}

impl<'a> Generator<'a> {
    /// Creates a new generator.
    #[must_use]
    pub fn new(schema: &'a Schema, config: GeneratorConfig) -> Self {
        Self { schema, config }
    }

    /// Generates the documents for the configured output mode.
    ///
    /// In [`OutputMode::PerDefinition`] every document gets a distinct file
    /// name and starts with `import type` lines for the declarations it
    /// refers to in other documents.
    #[must_use]
    pub fn generate(&self) -> Vec<Document> {
        let declarations = self.declarations();

        match self.config.output_mode {
            OutputMode::Single => {
                let texts: Vec<String> = declarations.into_iter().map(|d| d.text).collect();
                vec![Document::from_declarations(SINGLE_DOCUMENT_NAME, &texts)]
            }
            OutputMode::PerDefinition => split_documents(&declarations),
        }
    }

    /// Generates all declarations as a single document's content.
    #[must_use]
    pub fn generate_single(&self) -> String {
        let texts: Vec<String> = self.declarations().into_iter().map(|d| d.text).collect();
        Document::from_declarations(SINGLE_DOCUMENT_NAME, &texts).content
    }

    fn context(&self) -> RenderContext<'_> {
        RenderContext::new(&self.config.prefix).with_schema(self.schema)
    }

    /// Renders every definition that produces a declaration, in schema order.
    fn declarations(&self) -> Vec<Declaration<'_>> {
        tracing::debug!(
            "Generating {} definitions (namespace: {})",
            self.schema.len(),
            self.schema.namespace.as_deref().unwrap_or("<none>")
        );

        let context = self.context();
        let mut declared: HashMap<String, &str> = HashMap::new();
        let mut declarations = Vec::new();
        let mut entities = OrderedMap::new();

        for (name, definition) in self.schema.definitions() {
            let Some(renderable) = Renderable::new(name, definition, context) else {
                tracing::debug!("Skipping {} ({:?})", name, definition.kind);
                continue;
            };

            let declaration_name = renderable.declaration_name();
            tracing::debug!(
                "Rendering {} as {:?} {}",
                name,
                renderable.kind(),
                declaration_name
            );

            if let Some(previous) = declared.insert(declaration_name.clone(), name) {
                tracing::warn!(
                    "{} and {} are both declared as {}",
                    previous,
                    name,
                    declaration_name
                );
            }

            if let Renderable::Entity(entity) = &renderable {
                if definition.kind == Kind::Entity {
                    entities.insert(entity.sanitized_name(), EnumValue::from(entity.model_name()));
                }
            }

            declarations.push(Declaration {
                model_name: Some(name),
                name: declaration_name,
                references: renderable.references(),
                text: renderable.to_type(),
            });
        }

        if self.config.entity_index {
            let index_name = unique_name(ENTITY_INDEX_NAME, |candidate| {
                declared.contains_key(candidate)
            });
            if index_name != ENTITY_INDEX_NAME {
                tracing::warn!(
                    "{} is already declared, entity index renamed to {}",
                    ENTITY_INDEX_NAME,
                    index_name
                );
            }
            declarations.push(entity_index(index_name, entities, context));
        }

        declarations
    }
}

/// Renders the enum listing every entity by sanitized and model name.
fn entity_index<'a>(
    name: String,
    entities: OrderedMap<EnumValue>,
    context: RenderContext<'_>,
) -> Declaration<'a> {
    let definition = Definition::enumeration(None, entities);
    let text = EnumType::new(&name, &definition, context).to_type();
    Declaration {
        model_name: None,
        name,
        references: Vec::new(),
        text,
    }
}

/// Returns `name`, or `name_<n>` with the smallest `n` that is not taken.
fn unique_name(name: &str, is_taken: impl Fn(&str) -> bool) -> String {
    if !is_taken(name) {
        return name.to_string();
    }
    (1_usize..)
        .map(|n| format!("{name}_{n}"))
        .find(|candidate| !is_taken(candidate.as_str()))
        .unwrap_or_else(|| name.to_string())
}

/// Builds one document per declaration.
fn split_documents(declarations: &[Declaration<'_>]) -> Vec<Document> {
    let stems = file_stems(declarations);
    let modules: HashMap<&str, (&str, &str)> = declarations
        .iter()
        .zip(&stems)
        .filter_map(|(declaration, stem)| {
            let model_name = declaration.model_name?;
            Some((model_name, (declaration.name.as_str(), stem.as_str())))
        })
        .collect();

    declarations
        .iter()
        .zip(&stems)
        .map(|(declaration, stem)| {
            let mut parts = Vec::with_capacity(2);
            parts.extend(import_block(declaration, stem, &modules));
            parts.push(declaration.text.clone());
            Document::from_declarations(format!("{stem}.ts"), &parts)
        })
        .collect()
}

/// Assigns each declaration a file stem. Stems are compared ignoring case
/// so that files stay distinct on case-insensitive file systems.
fn file_stems(declarations: &[Declaration<'_>]) -> Vec<String> {
    let mut taken: HashSet<String> = HashSet::new();
    declarations
        .iter()
        .map(|declaration| {
            let stem = unique_name(&declaration.name, |candidate| {
                taken.contains(&candidate.to_lowercase())
            });
            if stem != declaration.name {
                tracing::warn!(
                    "{} written to {}.ts, {}.ts is already taken",
                    declaration.model_name.unwrap_or(&declaration.name),
                    stem,
                    declaration.name
                );
            }
            taken.insert(stem.to_lowercase());
            stem
        })
        .collect()
}

/// Renders the `import type` lines a document needs.
///
/// `modules` maps schema names to their declaration name and file stem.
fn import_block(
    declaration: &Declaration<'_>,
    stem: &str,
    modules: &HashMap<&str, (&str, &str)>,
) -> Option<String> {
    let mut imported: Vec<&str> = Vec::new();
    let mut lines = Vec::new();

    for reference in &declaration.references {
        let Some(&(name, module)) = modules.get(reference) else {
            continue;
        };
        if module == stem || name == declaration.name || imported.contains(&name) {
            continue;
        }
        imported.push(name);
        lines.push(format!(
            "{} {} {{ {} }} {} \"./{}\"{}",
            TypeToken::IMPORT,
            TypeToken::TYPE,
            name,
            TypeToken::FROM,
            module,
            TypeToken::SEMICOLON
        ));
    }

    (!lines.is_empty()).then(|| lines.join("\n"))
}
