//! Type alias code generation.

use super::base::{BaseType, RenderContext, TypeToken, collect_references};
use super::scalar::is_scalar_tag;
use cds2ts_schema::{Definition, Element};

/// Renderer for `type` definitions that are neither structured nor enums.
#[derive(Debug, Clone, Copy)]
pub struct AliasType<'a> {
    base: BaseType<'a>,
}

impl<'a> AliasType<'a> {
    /// Creates a new alias renderer.
    #[must_use]
    pub const fn new(
        name: &'a str,
        definition: &'a Definition,
        context: RenderContext<'a>,
    ) -> Self {
        Self {
            base: BaseType::new(name, definition, context),
        }
    }

    /// Returns the declared alias name.
    #[must_use]
    pub fn sanitized_name(&self) -> String {
        self.base.sanitized_name()
    }

    /// Returns the schema names the aliased type refers to.
    #[must_use]
    pub fn references(&self) -> Vec<&'a str> {
        let definition = self.base.definition();
        let mut references = Vec::new();
        if let Some(target) = definition.target.as_deref() {
            references.push(target);
        } else if let Some(items) = &definition.items {
            collect_references(items, &mut references);
        } else if let Some(tag) = definition.type_name.as_deref() {
            if !is_scalar_tag(tag) {
                references.push(tag);
            }
        }
        references
    }

    /// Renders the alias declaration.
    #[must_use]
    pub fn to_type(&self) -> String {
        let definition = self.base.definition();
        let underlying = Element {
            type_name: definition.type_name.clone(),
            cardinality: definition.cardinality,
            target: definition.target.clone(),
            items: definition.items.clone().map(Box::new),
            ..Element::default()
        };

        format!(
            "{} {} {} = {}{}",
            TypeToken::EXPORT,
            TypeToken::TYPE,
            self.sanitized_name(),
            self.base.context().resolve_element(&underlying),
            TypeToken::SEMICOLON
        )
    }
}
