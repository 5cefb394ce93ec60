//! CDS scalar to TypeScript type mapping.

use cds2ts_schema::ScalarType;

/// Type emitted for tags that are not recognized scalars.
pub const FALLBACK_TYPE: &str = "any";

/// Returns the TypeScript type for a CDS scalar.
#[must_use]
pub const fn ts_type(scalar: ScalarType) -> &'static str {
    match scalar {
        ScalarType::Uuid | ScalarType::String | ScalarType::LargeString => "string",
        ScalarType::Boolean => "boolean",
        ScalarType::Integer
        | ScalarType::Integer64
        | ScalarType::Int16
        | ScalarType::Int32
        | ScalarType::Int64
        | ScalarType::UInt8
        | ScalarType::Decimal
        | ScalarType::DecimalFloat
        | ScalarType::Double => "number",
        ScalarType::Date | ScalarType::Time | ScalarType::DateTime | ScalarType::Timestamp => {
            "Date"
        }
        ScalarType::Binary | ScalarType::LargeBinary => "Buffer",
    }
}

/// Maps a CDS scalar tag to its TypeScript type.
///
/// Unrecognized tags map to [`FALLBACK_TYPE`].
#[must_use]
pub fn map_scalar_type(tag: &str) -> &'static str {
    ScalarType::from_cds_name(tag).map_or(FALLBACK_TYPE, ts_type)
}

/// Returns true if the tag is handled by [`map_scalar_type`] rather than
/// being a reference to a user definition.
#[must_use]
pub fn is_scalar_tag(tag: &str) -> bool {
    tag.starts_with("cds.") || ScalarType::from_cds_name(tag).is_some()
}

/// Returns true if the tag maps to a numeric TypeScript type.
#[must_use]
pub fn is_numeric_tag(tag: &str) -> bool {
    ScalarType::from_cds_name(tag).is_some_and(|scalar| scalar.is_numeric())
}
