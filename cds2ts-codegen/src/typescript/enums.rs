//! Enum code generation.

use super::base::{BaseType, RenderContext, TypeToken};
use super::scalar::is_numeric_tag;
use crate::names::sanitize_name;
use cds2ts_schema::{Definition, EnumValue};

/// Renderer for enum definitions.
#[derive(Debug, Clone, Copy)]
pub struct EnumType<'a> {
    base: BaseType<'a>,
}

impl<'a> EnumType<'a> {
    /// Creates a new enum renderer.
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

    /// Returns the declared enum name.
    #[must_use]
    pub fn sanitized_name(&self) -> String {
        self.base.sanitized_name()
    }

    /// Renders the enum declaration.
    #[must_use]
    pub fn to_type(&self) -> String {
        let definition = self.base.definition();
        let numeric = definition
            .type_name
            .as_deref()
            .is_some_and(is_numeric_tag);

        let header = format!(
            "{} {} {} {}",
            TypeToken::EXPORT,
            TypeToken::ENUM,
            self.sanitized_name(),
            TypeToken::CURLY_BRACE_LEFT
        );
        let members = definition
            .enum_members
            .iter()
            .flat_map(|members| members.iter())
            .map(|(name, value)| member_line(name, value, numeric));

        std::iter::once(header)
            .chain(members)
            .chain(std::iter::once(TypeToken::CURLY_BRACE_RIGHT.to_string()))
            .collect::<Vec<_>>()
            .join("\n")
    }
}

/// Formats one enum member.
///
/// Members without an explicit value are left bare in numeric enums and
/// take their own name as value otherwise.
fn member_line(name: &str, value: &EnumValue, numeric: bool) -> String {
    let member = sanitize_name(name);
    let literal = match value {
        EnumValue::Number(n) => n.to_string(),
        EnumValue::String(s) => quote(s),
        EnumValue::Bool(b) => quote(&b.to_string()),
        EnumValue::Implicit if numeric => {
            return format!("{}{},", TypeToken::INDENT, member);
        }
        EnumValue::Implicit => quote(name),
    };
    format!("{}{} = {},", TypeToken::INDENT, member, literal)
}

/// Quotes a string as a TypeScript string literal.
fn quote(s: &str) -> String {
    let mut result = String::with_capacity(s.len() + 2);
    result.push('"');
    for c in s.chars() {
        match c {
            '"' => result.push_str("\\\""),
            '\\' => result.push_str("\\\\"),
            '\n' => result.push_str("\\n"),
            '\r' => result.push_str("\\r"),
            '\t' => result.push_str("\\t"),
            _ => result.push(c),
        }
    }
    result.push('"');
    result
}
