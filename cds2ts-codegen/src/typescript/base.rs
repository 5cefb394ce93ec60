//! Shared rendering helpers.
//!
//! [`RenderContext`] carries the settings that apply to a whole generation
//! pass and resolves type tags to TypeScript type names. [`BaseType`] holds
//! one definition being rendered and formats interface headers and field
//! lines for it. The enum, entity and alias renderers are built on top of
//! both.

use super::renderable::RenderKind;
use super::scalar::{FALLBACK_TYPE, is_scalar_tag, map_scalar_type};
use crate::names::{capitalize, declaration_name, sanitize_name};
use cds2ts_schema::{Definition, Element, Schema};

/// TypeScript tokens used in generated declarations.
pub struct TypeToken;

impl TypeToken {
    /// `export` keyword.
    pub const EXPORT: &'static str = "export";
    /// `interface` keyword.
    pub const INTERFACE: &'static str = "interface";
    /// `enum` keyword.
    pub const ENUM: &'static str = "enum";
    /// `type` keyword.
    pub const TYPE: &'static str = "type";
    /// `import` keyword.
    pub const IMPORT: &'static str = "import";
    /// `from` keyword.
    pub const FROM: &'static str = "from";
    /// Opening brace.
    pub const CURLY_BRACE_LEFT: &'static str = "{";
    /// Closing brace.
    pub const CURLY_BRACE_RIGHT: &'static str = "}";
    /// Statement terminator.
    pub const SEMICOLON: &'static str = ";";
    /// Optional property marker.
    pub const QUESTION_MARK: &'static str = "?";
    /// Array type suffix.
    pub const ARRAY: &'static str = "[]";
    /// Member indentation.
    pub const INDENT: &'static str = "    ";
}

/// Settings and lookups shared by all renderers of one generation pass.
#[derive(Debug, Clone, Copy, Default)]
pub struct RenderContext<'a> {
    prefix: &'a str,
    schema: Option<&'a Schema>,
}

impl<'a> RenderContext<'a> {
    /// Creates a context with the given interface prefix.
    #[must_use]
    pub const fn new(prefix: &'a str) -> Self {
        Self {
            prefix,
            schema: None,
        }
    }

    /// Resolves references against the given schema.
    ///
    /// Without a schema, references to user types are emitted unprefixed.
    #[must_use]
    pub fn with_schema(mut self, schema: &'a Schema) -> Self {
        self.schema = Some(schema);
        self
    }

    /// Returns the interface prefix.
    #[must_use]
    pub const fn prefix(&self) -> &'a str {
        self.prefix
    }

    /// Returns the interface name for a fully qualified schema name.
    #[must_use]
    pub fn interface_name(&self, raw: &str) -> String {
        format!("{}{}", self.prefix, declaration_name(raw))
    }

    /// Returns the name under which a referenced definition is declared.
    #[must_use]
    pub fn reference_name(&self, raw: &str) -> String {
        let is_interface = self
            .schema
            .and_then(|schema| schema.get_definition(raw))
            .and_then(RenderKind::of)
            .is_some_and(RenderKind::is_interface);

        if is_interface {
            self.interface_name(raw)
        } else {
            declaration_name(raw)
        }
    }

    /// Resolves a type tag: scalars go through the type mapper, anything
    /// else is a reference to another definition.
    #[must_use]
    pub fn resolve_tag(&self, tag: Option<&str>) -> String {
        match tag {
            Some(tag) if !is_scalar_tag(tag) => self.reference_name(tag),
            Some(tag) => map_scalar_type(tag).to_string(),
            None => FALLBACK_TYPE.to_string(),
        }
    }

    /// Resolves the TypeScript type of an element without inline enums.
    #[must_use]
    pub fn resolve_element(&self, element: &Element) -> String {
        let resolved = if element.is_association() {
            match element.target.as_deref() {
                Some(target) => self.interface_name(target),
                None => FALLBACK_TYPE.to_string(),
            }
        } else if let Some(items) = element.items.as_deref() {
            array_of(&self.resolve_element(items))
        } else {
            self.resolve_tag(element.type_name.as_deref())
        };

        if element.is_to_many() {
            array_of(&resolved)
        } else {
            resolved
        }
    }
}

/// Wraps a type as an array type.
#[must_use]
pub fn array_of(type_name: &str) -> String {
    format!("{}{}", type_name, TypeToken::ARRAY)
}

/// Collects the schema names an element's type refers to.
///
/// Fields carrying an inline enum refer to the hoisted enum only.
pub fn collect_references<'e>(element: &'e Element, references: &mut Vec<&'e str>) {
    if element.enum_carrier().is_some() {
        return;
    }
    if element.is_association() {
        references.extend(element.target.as_deref());
    } else if let Some(items) = element.items.as_deref() {
        collect_references(items, references);
    } else if let Some(tag) = element.type_name.as_deref() {
        if !is_scalar_tag(tag) {
            references.push(tag);
        }
    }
}

/// A definition being rendered, with its name and render context.
#[derive(Debug, Clone, Copy)]
pub struct BaseType<'a> {
    name: &'a str,
    definition: &'a Definition,
    context: RenderContext<'a>,
}

impl<'a> BaseType<'a> {
    /// Creates a base type.
    #[must_use]
    pub const fn new(
        name: &'a str,
        definition: &'a Definition,
        context: RenderContext<'a>,
    ) -> Self {
        Self {
            name,
            definition,
            context,
        }
    }

    /// Returns the raw schema name.
    #[must_use]
    pub const fn name(&self) -> &'a str {
        self.name
    }

    /// Returns the definition.
    #[must_use]
    pub const fn definition(&self) -> &'a Definition {
        self.definition
    }

    /// Returns the render context.
    #[must_use]
    pub const fn context(&self) -> RenderContext<'a> {
        self.context
    }

    /// Returns the sanitized, unprefixed name.
    #[must_use]
    pub fn sanitized_name(&self) -> String {
        declaration_name(self.name)
    }

    /// Returns the opening line of an interface declaration.
    #[must_use]
    pub fn create_interface(&self) -> String {
        format!(
            "{} {} {} {}",
            TypeToken::EXPORT,
            TypeToken::INTERFACE,
            self.context.interface_name(self.name),
            TypeToken::CURLY_BRACE_LEFT
        )
    }

    /// Returns the name of the enum hoisted out of the given field:
    /// the entity name followed by the capitalized field name.
    #[must_use]
    pub fn inline_enum_name(&self, field_name: &str) -> String {
        format!(
            "{}{}",
            self.sanitized_name(),
            capitalize(&sanitize_name(field_name))
        )
    }

    /// Returns the TypeScript type of a field.
    #[must_use]
    pub fn field_type(&self, field_name: &str, element: &Element) -> String {
        if element.enum_carrier().is_none() {
            return self.context.resolve_element(element);
        }

        let enum_name = self.inline_enum_name(field_name);
        if element.items.is_some() || element.is_to_many() {
            array_of(&enum_name)
        } else {
            enum_name
        }
    }

    /// Returns one formatted field line of an interface body.
    #[must_use]
    pub fn create_interface_field(&self, field_name: &str, element: &Element) -> String {
        let optional = if element.is_optional() {
            TypeToken::QUESTION_MARK
        } else {
            ""
        };

        format!(
            "{}{}{}: {}{}",
            TypeToken::INDENT,
            sanitize_name(field_name),
            optional,
            self.field_type(field_name, element),
            TypeToken::SEMICOLON
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use cds2ts_schema::{Cardinality, EnumValue, OrderedMap};

    fn books() -> Definition {
        Definition::entity(OrderedMap::new())
    }

    #[test]
    fn test_create_interface() {
        let definition = books();
        let base = BaseType::new("my.bookshop.Books", &definition, RenderContext::new(""));
        assert_eq!(base.create_interface(), "export interface Books {");
    }

    #[test]
    fn test_create_interface_with_prefix() {
        let definition = books();
        let base = BaseType::new("Book", &definition, RenderContext::new("I"));
        assert_eq!(base.create_interface(), "export interface IBook {");
        assert_eq!(base.sanitized_name(), "Book");
    }

    #[test]
    fn test_scalar_field() {
        let definition = books();
        let base = BaseType::new("Books", &definition, RenderContext::new(""));
        let line = base.create_interface_field("title", &Element::of_type("cds.String"));
        assert_eq!(line, "    title: string;");
    }

    #[test]
    fn test_field_name_sanitized() {
        let definition = books();
        let base = BaseType::new("Books", &definition, RenderContext::new(""));
        let line = base.create_interface_field("page-count", &Element::of_type("cds.Integer"));
        assert_eq!(line, "    page_count: number;");
    }

    #[test]
    fn test_association_fields() {
        let definition = books();
        let base = BaseType::new("Books", &definition, RenderContext::new("I"));

        let to_one = Element::association("my.bookshop.Authors", Cardinality::ToOne);
        assert_eq!(
            base.create_interface_field("author", &to_one),
            "    author?: IAuthors;"
        );

        let to_many = Element::association("my.bookshop.Reviews", Cardinality::ToMany);
        assert_eq!(
            base.create_interface_field("reviews", &to_many),
            "    reviews?: IReviews[];"
        );
    }

    #[test]
    fn test_not_null_association_is_required() {
        let definition = books();
        let base = BaseType::new("Books", &definition, RenderContext::new(""));
        let mut element = Element::association("Authors", Cardinality::ToOne);
        element.not_null = true;
        assert_eq!(
            base.create_interface_field("author", &element),
            "    author: Authors;"
        );
    }

    #[test]
    fn test_inline_enum_field_type() {
        let definition = books();
        let base = BaseType::new("my.Books", &definition, RenderContext::new("I"));
        let members: OrderedMap<EnumValue> = [("A", EnumValue::Implicit)].into_iter().collect();
        let element = Element::with_enum(Some("cds.String".to_string()), members);

        assert_eq!(base.inline_enum_name("status"), "BooksStatus");
        assert_eq!(
            base.create_interface_field("status", &element),
            "    status: BooksStatus;"
        );
    }

    #[test]
    fn test_arrayed_field() {
        let definition = books();
        let base = BaseType::new("Books", &definition, RenderContext::new(""));
        let element = Element {
            items: Some(Box::new(Element::of_type("cds.String"))),
            ..Element::default()
        };
        assert_eq!(
            base.create_interface_field("tags", &element),
            "    tags: string[];"
        );
    }

    #[test]
    fn test_collect_references() {
        let members: OrderedMap<EnumValue> = [("A", EnumValue::Implicit)].into_iter().collect();
        let elements = [
            Element::of_type("cds.String"),
            Element::association("my.Authors", Cardinality::ToMany),
            Element::of_type("my.Genre"),
            Element {
                items: Some(Box::new(Element::of_type("my.Tag"))),
                ..Element::default()
            },
            Element::with_enum(Some("my.Code".to_string()), members),
        ];

        let mut references = Vec::new();
        for element in &elements {
            collect_references(element, &mut references);
        }
        assert_eq!(references, ["my.Authors", "my.Genre", "my.Tag"]);
    }

    #[test]
    fn test_unknown_scalar_falls_back() {
        let context = RenderContext::new("");
        assert_eq!(context.resolve_tag(Some("cds.Vector")), "any");
        assert_eq!(context.resolve_tag(None), "any");
    }

    #[test]
    fn test_reference_resolution_with_schema() {
        let schema = Schema::new(
            [
                ("my.Address", {
                    let mut def = Definition::entity(OrderedMap::new());
                    def.kind = cds2ts_schema::Kind::Type;
                    def
                }),
                ("my.Title", Definition::alias("cds.String")),
            ]
            .into_iter()
            .collect(),
        );

        let context = RenderContext::new("I").with_schema(&schema);
        assert_eq!(context.resolve_tag(Some("my.Address")), "IAddress");
        assert_eq!(context.resolve_tag(Some("my.Title")), "Title");
        assert_eq!(context.resolve_tag(Some("my.Unknown")), "Unknown");

        let without_schema = RenderContext::new("I");
        assert_eq!(without_schema.resolve_tag(Some("my.Address")), "Address");
    }
}
