//! TypeScript code generation modules.

pub mod alias;
pub mod base;
pub mod entity;
pub mod enums;
pub mod renderable;
pub mod scalar;

pub use alias::AliasType;
pub use base::{BaseType, RenderContext, TypeToken, collect_references};
pub use entity::EntityType;
pub use enums::EnumType;
pub use renderable::{RenderKind, Renderable};
pub use scalar::{FALLBACK_TYPE, map_scalar_type};
