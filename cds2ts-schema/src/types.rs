//! Schema type definitions.
//!
//! This module contains the data structures representing a compiled CDS model
//! (CSN): top-level definitions, their elements, enum members, cardinalities
//! and the closed set of CDS scalar types.

use crate::ordered::OrderedMap;
use serde::Deserialize;
use serde_json::Value;

/// Complete CSN document.
#[derive(Debug, Clone, Default)]
pub struct Schema {
    /// Namespace declared by the model, if any.
    pub namespace: Option<String>,
    /// Top-level definitions keyed by fully qualified name.
    pub definitions: OrderedMap<Definition>,
}

impl Schema {
    /// Creates a schema from a set of definitions.
    #[must_use]
    pub fn new(definitions: OrderedMap<Definition>) -> Self {
        Self {
            namespace: None,
            definitions,
        }
    }

    /// Looks up a definition by its fully qualified name.
    #[must_use]
    pub fn get_definition(&self, name: &str) -> Option<&Definition> {
        self.definitions.get(name)
    }

    /// Iterates over all definitions in declaration order.
    pub fn definitions(&self) -> impl Iterator<Item = (&str, &Definition)> {
        self.definitions.iter()
    }

    /// Returns the number of top-level definitions.
    #[must_use]
    pub fn len(&self) -> usize {
        self.definitions.len()
    }

    /// Returns true if the schema has no definitions.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.definitions.is_empty()
    }
}

/// Kind of a top-level definition.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Kind {
    /// Persisted entity (or view/projection).
    Entity,
    /// User-defined type: structured, enum or scalar alias.
    Type,
    /// Standalone enumeration.
    Enum,
    /// Services, contexts, actions, aspects and everything else.
    #[default]
    #[serde(other)]
    Other,
}

/// Top-level schema definition.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct Definition {
    /// Definition kind.
    #[serde(default)]
    pub kind: Kind,
    /// Fields of a structured definition, in declaration order.
    pub elements: Option<OrderedMap<Element>>,
    /// Enum members, in declaration order.
    #[serde(rename = "enum")]
    pub enum_members: Option<OrderedMap<EnumValue>>,
    /// Underlying type tag.
    #[serde(rename = "type", default, deserialize_with = "type_tag")]
    pub type_name: Option<String>,
    /// Multiplicity of the definition.
    pub cardinality: Option<Cardinality>,
    /// Item type of an arrayed definition (`many T`).
    pub items: Option<Element>,
    /// Association target, for association-typed definitions.
    pub target: Option<String>,
}

impl Definition {
    /// Creates an entity definition with the given elements.
    #[must_use]
    pub fn entity(elements: OrderedMap<Element>) -> Self {
        Self {
            kind: Kind::Entity,
            elements: Some(elements),
            ..Self::default()
        }
    }

    /// Creates a `type` definition carrying enum members.
    #[must_use]
    pub fn enumeration(type_name: Option<String>, members: OrderedMap<EnumValue>) -> Self {
        Self {
            kind: Kind::Type,
            type_name,
            enum_members: Some(members),
            ..Self::default()
        }
    }

    /// Creates a scalar alias definition.
    #[must_use]
    pub fn alias(type_name: impl Into<String>) -> Self {
        Self {
            kind: Kind::Type,
            type_name: Some(type_name.into()),
            ..Self::default()
        }
    }

    /// Returns true if the definition has fields.
    #[must_use]
    pub fn is_structured(&self) -> bool {
        self.elements.is_some()
    }

    /// Returns true if the definition has enum members.
    #[must_use]
    pub fn is_enum(&self) -> bool {
        self.enum_members.is_some()
    }
}

/// Field within an entity or structured type.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Element {
    /// Scalar tag or name of another definition.
    #[serde(rename = "type", default, deserialize_with = "type_tag")]
    pub type_name: Option<String>,
    /// Multiplicity of the field.
    pub cardinality: Option<Cardinality>,
    /// Inline enum members.
    #[serde(rename = "enum")]
    pub enum_members: Option<OrderedMap<EnumValue>>,
    /// Target entity of an association or composition.
    pub target: Option<String>,
    /// Item type of an arrayed field (`many T`).
    pub items: Option<Box<Element>>,
    /// Whether the field is part of the primary key.
    #[serde(default)]
    pub key: bool,
    /// Whether the field is declared `not null`.
    #[serde(default)]
    pub not_null: bool,
}

impl Element {
    /// Returns the element carrying inline enum members: this element, or
    /// its item type for arrayed fields.
    #[must_use]
    pub fn enum_carrier(&self) -> Option<&Element> {
        if self.enum_members.is_some() {
            return Some(self);
        }
        self.items
            .as_deref()
            .filter(|items| items.enum_members.is_some())
    }

    /// Creates an element of the given type.
    #[must_use]
    pub fn of_type(type_name: impl Into<String>) -> Self {
        Self {
            type_name: Some(type_name.into()),
            ..Self::default()
        }
    }

    /// Creates an association to the given target.
    #[must_use]
    pub fn association(target: impl Into<String>, cardinality: Cardinality) -> Self {
        Self {
            type_name: Some(ASSOCIATION.to_string()),
            target: Some(target.into()),
            cardinality: Some(cardinality),
            ..Self::default()
        }
    }

    /// Creates an element with inline enum members.
    #[must_use]
    pub fn with_enum(type_name: Option<String>, members: OrderedMap<EnumValue>) -> Self {
        Self {
            type_name,
            enum_members: Some(members),
            ..Self::default()
        }
    }

    /// Returns true for associations and compositions.
    #[must_use]
    pub fn is_association(&self) -> bool {
        self.target.is_some()
            || matches!(self.type_name.as_deref(), Some(ASSOCIATION | COMPOSITION))
    }

    /// Returns true if the field holds a collection.
    #[must_use]
    pub fn is_to_many(&self) -> bool {
        self.cardinality == Some(Cardinality::ToMany)
    }

    /// Returns true if the field may be absent.
    ///
    /// Associations are optional unless they are keys or declared `not null`.
    #[must_use]
    pub fn is_optional(&self) -> bool {
        self.is_association() && !self.key && !self.not_null
    }
}

/// Reads a `type` slot. Only plain names are kept; CSN `{"ref": [...]}`
/// type expressions resolve to no tag.
fn type_tag<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: serde::Deserializer<'de>,
{
    Ok(match Value::deserialize(deserializer)? {
        Value::String(tag) => Some(tag),
        _ => None,
    })
}

/// Type tag of a managed association.
pub const ASSOCIATION: &str = "cds.Association";
/// Type tag of a composition.
pub const COMPOSITION: &str = "cds.Composition";

/// Field or definition multiplicity.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Deserialize)]
#[serde(from = "Value")]
pub enum Cardinality {
    /// At most one value.
    #[default]
    ToOne,
    /// Any number of values.
    ToMany,
}

impl From<Value> for Cardinality {
    fn from(value: Value) -> Self {
        let many = match &value {
            Value::String(s) => matches!(s.as_str(), "to-many" | "many" | "*"),
            Value::Object(obj) => match obj.get("max") {
                Some(Value::String(max)) => max == "*",
                Some(Value::Number(max)) => max.as_u64().is_some_and(|n| n > 1),
                _ => false,
            },
            _ => false,
        };
        if many { Self::ToMany } else { Self::ToOne }
    }
}

/// Literal value of an enum member.
#[derive(Debug, Clone, PartialEq, Default, Deserialize)]
#[serde(from = "Value")]
pub enum EnumValue {
    /// Numeric literal.
    Number(serde_json::Number),
    /// String literal.
    String(String),
    /// Boolean literal.
    Bool(bool),
    /// No explicit value.
    #[default]
    Implicit,
}

impl From<Value> for EnumValue {
    fn from(value: Value) -> Self {
        match value {
            Value::Number(n) => Self::Number(n),
            Value::String(s) => Self::String(s),
            Value::Bool(b) => Self::Bool(b),
            Value::Object(mut obj) => obj.remove("val").map_or(Self::Implicit, Self::from),
            Value::Null | Value::Array(_) => Self::Implicit,
        }
    }
}

impl From<i64> for EnumValue {
    fn from(value: i64) -> Self {
        Self::Number(value.into())
    }
}

impl From<&str> for EnumValue {
    fn from(value: &str) -> Self {
        Self::String(value.to_string())
    }
}

/// CDS built-in scalar types.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ScalarType {
    /// Universally unique identifier.
    Uuid,
    /// Bounded string.
    String,
    /// Unbounded string.
    LargeString,
    /// Boolean.
    Boolean,
    /// 32-bit integer.
    Integer,
    /// 64-bit integer.
    Integer64,
    /// Signed 16-bit integer.
    Int16,
    /// Signed 32-bit integer.
    Int32,
    /// Signed 64-bit integer.
    Int64,
    /// Unsigned 8-bit integer.
    UInt8,
    /// Fixed-point decimal.
    Decimal,
    /// Floating decimal.
    DecimalFloat,
    /// 64-bit floating point.
    Double,
    /// Calendar date.
    Date,
    /// Time of day.
    Time,
    /// Date and time (seconds precision).
    DateTime,
    /// Date and time (sub-second precision).
    Timestamp,
    /// Bounded binary.
    Binary,
    /// Unbounded binary.
    LargeBinary,
}

impl ScalarType {
    /// All scalar types.
    pub const ALL: [Self; 19] = [
        Self::Uuid,
        Self::String,
        Self::LargeString,
        Self::Boolean,
        Self::Integer,
        Self::Integer64,
        Self::Int16,
        Self::Int32,
        Self::Int64,
        Self::UInt8,
        Self::Decimal,
        Self::DecimalFloat,
        Self::Double,
        Self::Date,
        Self::Time,
        Self::DateTime,
        Self::Timestamp,
        Self::Binary,
        Self::LargeBinary,
    ];

    /// Returns the qualified CDS type name.
    #[must_use]
    pub const fn cds_name(&self) -> &'static str {
        match self {
            Self::Uuid => "cds.UUID",
            Self::String => "cds.String",
            Self::LargeString => "cds.LargeString",
            Self::Boolean => "cds.Boolean",
            Self::Integer => "cds.Integer",
            Self::Integer64 => "cds.Integer64",
            Self::Int16 => "cds.Int16",
            Self::Int32 => "cds.Int32",
            Self::Int64 => "cds.Int64",
            Self::UInt8 => "cds.UInt8",
            Self::Decimal => "cds.Decimal",
            Self::DecimalFloat => "cds.DecimalFloat",
            Self::Double => "cds.Double",
            Self::Date => "cds.Date",
            Self::Time => "cds.Time",
            Self::DateTime => "cds.DateTime",
            Self::Timestamp => "cds.Timestamp",
            Self::Binary => "cds.Binary",
            Self::LargeBinary => "cds.LargeBinary",
        }
    }

    /// Parses a scalar type from its CDS name, qualified (`cds.String`) or bare (`String`).
    #[must_use]
    pub fn from_cds_name(name: &str) -> Option<Self> {
        let bare = name.strip_prefix("cds.").unwrap_or(name);
        Self::ALL
            .into_iter()
            .find(|t| &t.cds_name()["cds.".len()..] == bare)
    }

    /// Returns true for integer, decimal and floating point types.
    #[must_use]
    pub const fn is_numeric(&self) -> bool {
        matches!(
            self,
            Self::Integer
                | Self::Integer64
                | Self::Int16
                | Self::Int32
                | Self::Int64
                | Self::UInt8
                | Self::Decimal
                | Self::DecimalFloat
                | Self::Double
        )
    }
}
