//! Builder-pattern printer for rendering types.
//!
//! # Example
//!
//! ```
//! use showtype_lib::{Atomic, StaticCatalog, TypePrinter, TypeUnion};
//!
//! let catalog = StaticCatalog::new();
//! let ty = TypeUnion::from(Atomic::list(Atomic::opaque("int")));
//! let text = TypePrinter::new(&catalog).framed(false).render(&ty);
//! assert_eq!(text, "list<TValue: int>");
//! ```

use showtype_core::{Atomic, TypeCatalog, TypeUnion};

use crate::pretty::{render, render_atomic, render_union};

/// Renders types against one catalog. Framed output (the default) wraps the
/// rendering in a leading and trailing newline.
#[derive(Clone, Copy)]
pub struct TypePrinter<'c> {
    catalog: &'c dyn TypeCatalog,
    framed: bool,
}

impl<'c> TypePrinter<'c> {
    pub fn new(catalog: &'c dyn TypeCatalog) -> Self {
        Self {
            catalog,
            framed: true,
        }
    }

    /// Whether to wrap the output in newlines (default: true).
    pub fn framed(mut self, value: bool) -> Self {
        self.framed = value;
        self
    }

    pub fn render(&self, union: &TypeUnion) -> String {
        if self.framed {
            render(union, self.catalog)
        } else {
            render_union(union, self.catalog, 1)
        }
    }

    /// Render a single atomic at the outermost level, never framed.
    pub fn render_atomic(&self, atomic: &Atomic) -> String {
        render_atomic(atomic, self.catalog, 1)
    }
}
