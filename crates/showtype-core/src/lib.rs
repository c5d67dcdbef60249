#![cfg_attr(coverage_nightly, feature(coverage_attribute))]

//! Core data structures for showtype.
//!
//! Two layers:
//! - **Type model** (`TypeUnion`, `Atomic`, ...): immutable, tree-shaped values
//!   handed over by a type checker for the duration of one render call
//! - **Type catalog** (`TypeCatalog`): read-only lookup of a class's display name
//!   and declared template parameters
//!
//! Both layers deserialize from JSON so that inferred types can be fed to the
//! printer from outside the host analyzer.

mod catalog;
mod types;
pub mod utils;

#[cfg(test)]
mod types_tests;

pub use catalog::{ClassDecl, ClassInfo, EmptyCatalog, StaticCatalog, TypeCatalog};
pub use types::{Atomic, NamedObject, Param, Shape, ShapeField, ShapeKey, Signature, TypeUnion};

/// Errors raised when a type value would violate a model invariant.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ModelError {
    /// A union must hold at least one atomic member.
    #[error("type union must have at least one member")]
    EmptyUnion,

    /// Shape keys must be unique.
    #[error("duplicate shape key `{0}`")]
    DuplicateShapeKey(ShapeKey),
}

/// Parse a JSON-encoded type union.
pub fn parse_union(json: &str) -> Result<TypeUnion, serde_json::Error> {
    serde_json::from_str(json)
}
