//! Selection of the renderer for a definition.

use super::alias::AliasType;
use super::base::RenderContext;
use super::entity::EntityType;
use super::enums::EnumType;
use cds2ts_schema::{Definition, Kind};

/// Shape a definition takes in generated output.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum RenderKind {
    /// Interface declaration.
    Entity,
    /// Enum declaration.
    Enum,
    /// Type alias declaration.
    Alias,
}

impl RenderKind {
    /// Classifies a definition. Returns `None` for definitions that produce
    /// no declaration (services, contexts, actions and other kinds).
    #[must_use]
    pub fn of(definition: &Definition) -> Option<Self> {
        match definition.kind {
            Kind::Entity => Some(Self::Entity),
            Kind::Enum => Some(Self::Enum),
            Kind::Type if definition.is_enum() => Some(Self::Enum),
            Kind::Type if definition.is_structured() => Some(Self::Entity),
            Kind::Type => Some(Self::Alias),
            Kind::Other => None,
        }
    }

    /// Returns true if the definition is declared as an interface and so
    /// carries the interface prefix.
    #[must_use]
    pub const fn is_interface(self) -> bool {
        matches!(self, Self::Entity)
    }
}

/// A renderer for one top-level definition.
#[derive(Debug, Clone, Copy)]
pub enum Renderable<'a> {
    /// Interface renderer.
    Entity(EntityType<'a>),
    /// Enum renderer.
    Enum(EnumType<'a>),
    /// Type alias renderer.
    Alias(AliasType<'a>),
}

impl<'a> Renderable<'a> {
    /// Creates the renderer matching the definition's kind.
    #[must_use]
    pub fn new(
        name: &'a str,
        definition: &'a Definition,
        context: RenderContext<'a>,
    ) -> Option<Self> {
        let renderable = match RenderKind::of(definition)? {
            RenderKind::Entity => Self::Entity(EntityType::new(name, definition, context)),
            RenderKind::Enum => Self::Enum(EnumType::new(name, definition, context)),
            RenderKind::Alias => Self::Alias(AliasType::new(name, definition, context)),
        };
        Some(renderable)
    }

    /// Returns the kind of declaration produced.
    #[must_use]
    pub const fn kind(&self) -> RenderKind {
        match self {
            Self::Entity(_) => RenderKind::Entity,
            Self::Enum(_) => RenderKind::Enum,
            Self::Alias(_) => RenderKind::Alias,
        }
    }

    /// Returns the name of the top-level declaration, prefix included.
    #[must_use]
    pub fn declaration_name(&self) -> String {
        match self {
            Self::Entity(entity) => entity.interface_name(),
            Self::Enum(enum_type) => enum_type.sanitized_name(),
            Self::Alias(alias) => alias.sanitized_name(),
        }
    }

    /// Returns the schema names the declaration refers to.
    #[must_use]
    pub fn references(&self) -> Vec<&'a str> {
        match self {
            Self::Entity(entity) => entity.references(),
            Self::Enum(_) => Vec::new(),
            Self::Alias(alias) => alias.references(),
        }
    }

    /// Renders the declaration text.
    #[must_use]
    pub fn to_type(&self) -> String {
        match self {
            Self::Entity(entity) => entity.to_type(),
            Self::Enum(enum_type) => enum_type.to_type(),
            Self::Alias(alias) => alias.to_type(),
        }
    }
}
