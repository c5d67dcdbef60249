//! showtype: readable renderings of inferred static types.
//!
//! # Example
//!
//! ```
//! use showtype_lib::{Atomic, NamedObject, StaticCatalog, TypeUnion, render};
//!
//! let catalog = StaticCatalog::new().with_class("App\\Collection", &["TKey", "TValue"]);
//! let ty = TypeUnion::from(
//!     NamedObject::new("App\\Collection")
//!         .arg(Atomic::opaque("int"))
//!         .arg(Atomic::opaque("string")),
//! );
//!
//! assert_eq!(render(&ty, &catalog), "\nCollection<TKey: int, TValue: string>\n");
//! ```

#![cfg_attr(coverage_nightly, feature(coverage_attribute))]

pub mod diagnostics;
pub mod pretty;
mod printer;
pub mod probe;


pub use diagnostics::{Diagnostics, DiagnosticsPrinter, Severity, Span};
pub use pretty::{render, render_atomic, render_union};
pub use printer::TypePrinter;
pub use probe::{Probe, SHOW_TYPE_MARKER, Site, SiteKind};

pub use showtype_core::{
    Atomic, ClassInfo, EmptyCatalog, ModelError, NamedObject, Param, Shape, ShapeKey, Signature,
    StaticCatalog, TypeCatalog, TypeUnion,
};
