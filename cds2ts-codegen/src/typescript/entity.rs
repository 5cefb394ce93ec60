//! Entity code generation.
//!
//! Entities and structured types become interfaces. Inline enums cannot be
//! written inside an interface body, so each one is hoisted into its own
//! enum declaration placed right before the interface that uses it.

use super::base::{BaseType, RenderContext, TypeToken, collect_references};
use super::enums::EnumType;
use cds2ts_schema::{Definition, Element};
use std::iter;

/// Renderer for entities and structured types.
#[derive(Debug, Clone, Copy)]
pub struct EntityType<'a> {
    base: BaseType<'a>,
}

impl<'a> EntityType<'a> {
    /// Creates a new entity renderer.
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

    /// Renders the hoisted enums followed by the interface declaration.
    #[must_use]
    pub fn to_type(&self) -> String {
        let hoisted: Vec<String> = self
            .elements()
            .filter_map(|(field_name, element)| self.hoist_enum(field_name, element))
            .collect();

        let fields = self
            .elements()
            .map(|(field_name, element)| self.base.create_interface_field(field_name, element));

        let interface = iter::once(self.base.create_interface())
            .chain(fields)
            .chain(iter::once(TypeToken::CURLY_BRACE_RIGHT.to_string()))
            .collect::<Vec<_>>()
            .join("\n");

        if hoisted.is_empty() {
            interface
        } else {
            format!("{}\n\n{}", hoisted.join("\n\n"), interface)
        }
    }

    /// Returns the name other declarations use to refer to this entity.
    #[must_use]
    pub fn sanitized_name(&self) -> String {
        self.base.sanitized_name()
    }

    /// Returns the interface name, including the prefix.
    #[must_use]
    pub fn interface_name(&self) -> String {
        self.base.context().interface_name(self.base.name())
    }

    /// Returns the original, unsanitized schema name.
    #[must_use]
    pub const fn model_name(&self) -> &'a str {
        self.base.name()
    }

    /// Returns the schema names referenced by the entity's fields, in field order.
    #[must_use]
    pub fn references(&self) -> Vec<&'a str> {
        let mut references = Vec::new();
        for (_, element) in self.elements() {
            collect_references(element, &mut references);
        }
        references
    }

    fn elements(&self) -> impl Iterator<Item = (&'a str, &'a Element)> + use<'a> {
        self.base
            .definition()
            .elements
            .iter()
            .flat_map(|elements| elements.iter())
    }

    /// Renders the enum declared inline on a field, if any.
    fn hoist_enum(&self, field_name: &str, element: &Element) -> Option<String> {
        let carrier = element.enum_carrier()?;
        let enum_name = self.base.inline_enum_name(field_name);
        let definition = Definition::enumeration(
            carrier.type_name.clone(),
            carrier.enum_members.clone().unwrap_or_default(),
        );
        Some(EnumType::new(&enum_name, &definition, self.base.context()).to_type())
    }
}
