//! Class catalog: display names and declared template parameters.

use std::collections::HashMap;

use serde::{Deserialize, Serialize};

use crate::utils::short_class_name;

/// What the printer needs to know about a declared class.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ClassInfo {
    /// Trailing identifier of the declared name, namespace stripped.
    pub short_name: String,
    /// Declared generic parameter names in order.
    /// `None` when the class declares no template parameters of its own.
    pub template_params: Option<Vec<String>>,
}

/// Read-only lookup of class information by identifier.
///
/// Implementations must be side-effect free: the printer may call `resolve`
/// any number of times per render.
pub trait TypeCatalog {
    /// Returns `None` for identifiers the catalog does not know.
    fn resolve(&self, class_id: &str) -> Option<ClassInfo>;
}

impl<T: TypeCatalog + ?Sized> TypeCatalog for &T {
    fn resolve(&self, class_id: &str) -> Option<ClassInfo> {
        (**self).resolve(class_id)
    }
}

impl<T: TypeCatalog + ?Sized> TypeCatalog for Box<T> {
    fn resolve(&self, class_id: &str) -> Option<ClassInfo> {
        (**self).resolve(class_id)
    }
}

/// Catalog that knows no classes.
#[derive(Debug, Clone, Copy, Default)]
pub struct EmptyCatalog;

impl TypeCatalog for EmptyCatalog {
    fn resolve(&self, _class_id: &str) -> Option<ClassInfo> {
        None
    }
}

/// Class declaration as read from a catalog file.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ClassDecl {
    /// Fully qualified name, e.g. `App\Collection`.
    pub name: String,
    #[serde(default)]
    pub template_params: Option<Vec<String>>,
}

/// In-memory catalog built from class declarations.
///
/// Class identifiers are matched case-insensitively and without a leading `\`,
/// so `\App\Foo`, `App\Foo` and `app\foo` all resolve to the same declaration.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(from = "Vec<ClassDecl>")]
pub struct StaticCatalog {
    classes: HashMap<String, ClassInfo>,
}

impl StaticCatalog {
    pub fn new() -> Self {
        Self::default()
    }

    /// Parse a JSON array of class declarations.
    pub fn from_json(json: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(json)
    }

    /// Register a class. A later declaration of the same class replaces the earlier one.
    pub fn declare(&mut self, name: &str, template_params: Option<Vec<String>>) {
        let info = ClassInfo {
            short_name: short_class_name(name).to_string(),
            template_params,
        };
        self.classes.insert(normalize_class_id(name), info);
    }

    /// Builder-style variant of [`declare`](Self::declare).
    pub fn with_class(mut self, name: &str, template_params: &[&str]) -> Self {
        let params = if template_params.is_empty() {
            None
        } else {
            Some(template_params.iter().map(|p| p.to_string()).collect())
        };
        self.declare(name, params);
        self
    }

    pub fn len(&self) -> usize {
        self.classes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.classes.is_empty()
    }
}

impl From<Vec<ClassDecl>> for StaticCatalog {
    fn from(decls: Vec<ClassDecl>) -> Self {
        let mut catalog = Self::new();
        for decl in decls {
            catalog.declare(&decl.name, decl.template_params);
        }
        catalog
    }
}

impl FromIterator<ClassDecl> for StaticCatalog {
    fn from_iter<T: IntoIterator<Item = ClassDecl>>(iter: T) -> Self {
        Self::from(iter.into_iter().collect::<Vec<_>>())
    }
}

impl TypeCatalog for StaticCatalog {
    fn resolve(&self, class_id: &str) -> Option<ClassInfo> {
        self.classes.get(&normalize_class_id(class_id)).cloned()
    }
}

fn normalize_class_id(class_id: &str) -> String {
    class_id.trim_start_matches('\\').to_lowercase()
}
