//! Type representation consumed by the printer.
//!
//! # Overview
//!
//! Types are recursive in a strict alternation: a `TypeUnion` holds `Atomic`
//! members and every nested type inside an `Atomic` is again a `TypeUnion`.
//! The only exception is `NamedObject::intersection`, which holds atomics
//! directly because an intersection is never a union.
//!
//! Values are plain owned trees. Nesting must be acyclic: printing recurses
//! without a cycle guard.
//!
//! # JSON encoding
//!
//! - A union is an array of atomics: `[{"kind": "opaque", "id": "int"}]`
//! - Atomics are tagged by `kind` in kebab-case
//! - Shape fields are an ordered array of `{"key", "type", "optional"}` entries
//!
//! Empty unions and repeated shape keys are rejected while decoding.

use std::fmt;

use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

use crate::ModelError;

/// A logical "or" of atomic possibilities, in display order.
///
/// Never empty. Duplicates are kept as given.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "Vec<Atomic>", into = "Vec<Atomic>")]
pub struct TypeUnion(Vec<Atomic>);

impl TypeUnion {
    pub fn new(atomics: Vec<Atomic>) -> Result<Self, ModelError> {
        if atomics.is_empty() {
            return Err(ModelError::EmptyUnion);
        }
        Ok(Self(atomics))
    }

    pub fn single(atomic: Atomic) -> Self {
        Self(vec![atomic])
    }

    /// Append another member.
    pub fn or(mut self, atomic: Atomic) -> Self {
        self.0.push(atomic);
        self
    }

    pub fn atomics(&self) -> &[Atomic] {
        &self.0
    }

    #[allow(clippy::len_without_is_empty)]
    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Atomic> {
        self.0.iter()
    }
}

impl TryFrom<Vec<Atomic>> for TypeUnion {
    type Error = ModelError;

    fn try_from(atomics: Vec<Atomic>) -> Result<Self, Self::Error> {
        Self::new(atomics)
    }
}

impl From<TypeUnion> for Vec<Atomic> {
    fn from(union: TypeUnion) -> Self {
        union.0
    }
}

impl From<Atomic> for TypeUnion {
    fn from(atomic: Atomic) -> Self {
        Self::single(atomic)
    }
}

impl<'a> IntoIterator for &'a TypeUnion {
    type Item = &'a Atomic;
    type IntoIter = std::slice::Iter<'a, Atomic>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.iter()
    }
}

/// One concrete possibility within a union.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "kebab-case")]
pub enum Atomic {
    /// Homogeneous integer-indexed sequence.
    List {
        element: TypeUnion,
        #[serde(default)]
        non_empty: bool,
    },
    /// Homogeneous key → value mapping.
    Array {
        key: TypeUnion,
        value: TypeUnion,
        #[serde(default)]
        non_empty: bool,
    },
    /// Lazy key → value source.
    Iterable { key: TypeUnion, value: TypeUnion },
    Closure(Signature),
    Callable(Signature),
    /// String naming a class, optionally bounded by a class or interface.
    ClassString {
        #[serde(default)]
        bound: Option<NamedObject>,
    },
    Named(NamedObject),
    Shape(Shape),
    /// Class-scoped generic parameter reference.
    TemplateParam {
        name: String,
        defining_class: String,
        constraint: TypeUnion,
    },
    /// Any kind without dedicated rendering; printed as its identifier.
    Opaque { id: String },
}

impl Atomic {
    pub fn opaque(id: impl Into<String>) -> Self {
        Self::Opaque { id: id.into() }
    }

    pub fn list(element: impl Into<TypeUnion>) -> Self {
        Self::List {
            element: element.into(),
            non_empty: false,
        }
    }

    pub fn non_empty_list(element: impl Into<TypeUnion>) -> Self {
        Self::List {
            element: element.into(),
            non_empty: true,
        }
    }

    pub fn array(key: impl Into<TypeUnion>, value: impl Into<TypeUnion>) -> Self {
        Self::Array {
            key: key.into(),
            value: value.into(),
            non_empty: false,
        }
    }

    pub fn non_empty_array(key: impl Into<TypeUnion>, value: impl Into<TypeUnion>) -> Self {
        Self::Array {
            key: key.into(),
            value: value.into(),
            non_empty: true,
        }
    }

    pub fn iterable(key: impl Into<TypeUnion>, value: impl Into<TypeUnion>) -> Self {
        Self::Iterable {
            key: key.into(),
            value: value.into(),
        }
    }

    pub fn class_string(bound: Option<NamedObject>) -> Self {
        Self::ClassString { bound }
    }

    pub fn template_param(
        name: impl Into<String>,
        defining_class: impl Into<String>,
        constraint: impl Into<TypeUnion>,
    ) -> Self {
        Self::TemplateParam {
            name: name.into(),
            defining_class: defining_class.into(),
            constraint: constraint.into(),
        }
    }
}

impl From<NamedObject> for Atomic {
    fn from(object: NamedObject) -> Self {
        Self::Named(object)
    }
}

impl From<Shape> for Atomic {
    fn from(shape: Shape) -> Self {
        Self::Shape(shape)
    }
}

impl From<NamedObject> for TypeUnion {
    fn from(object: NamedObject) -> Self {
        Self::single(Atomic::Named(object))
    }
}

impl From<Shape> for TypeUnion {
    fn from(shape: Shape) -> Self {
        Self::single(Atomic::Shape(shape))
    }
}

/// Signature shared by closures and callables.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Signature {
    #[serde(default)]
    pub params: Vec<Param>,
    /// `None` renders as `void`.
    #[serde(default)]
    pub return_type: Option<TypeUnion>,
    #[serde(default)]
    pub pure: bool,
}

impl Signature {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn param(mut self, param: Param) -> Self {
        self.params.push(param);
        self
    }

    pub fn returns(mut self, ty: impl Into<TypeUnion>) -> Self {
        self.return_type = Some(ty.into());
        self
    }

    pub fn pure(mut self, value: bool) -> Self {
        self.pure = value;
        self
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Param {
    pub name: String,
    /// `None` renders as `mixed`.
    #[serde(default, rename = "type")]
    pub ty: Option<TypeUnion>,
    #[serde(default)]
    pub by_ref: bool,
    #[serde(default)]
    pub variadic: bool,
}

impl Param {
    /// Parameter without a declared type.
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            ty: None,
            by_ref: false,
            variadic: false,
        }
    }

    pub fn typed(name: impl Into<String>, ty: impl Into<TypeUnion>) -> Self {
        Self {
            ty: Some(ty.into()),
            ..Self::new(name)
        }
    }

    pub fn by_ref(mut self, value: bool) -> Self {
        self.by_ref = value;
        self
    }

    pub fn variadic(mut self, value: bool) -> Self {
        self.variadic = value;
        self
    }
}

/// Reference to a declared class or interface.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NamedObject {
    /// Fully qualified identifier, as known to the catalog.
    pub class_id: String,
    /// Positional generic arguments; empty for non-generic references.
    #[serde(default)]
    pub type_args: Vec<TypeUnion>,
    #[serde(default)]
    pub intersection: Vec<Atomic>,
}

impl NamedObject {
    pub fn new(class_id: impl Into<String>) -> Self {
        Self {
            class_id: class_id.into(),
            type_args: Vec::new(),
            intersection: Vec::new(),
        }
    }

    pub fn arg(mut self, ty: impl Into<TypeUnion>) -> Self {
        self.type_args.push(ty.into());
        self
    }

    pub fn intersect(mut self, atomic: impl Into<Atomic>) -> Self {
        self.intersection.push(atomic.into());
        self
    }
}

/// Key of a shape field: a tuple index or a record field name.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(untagged)]
pub enum ShapeKey {
    Index(i64),
    Name(String),
}

impl fmt::Display for ShapeKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ShapeKey::Index(index) => write!(f, "{}", index),
            ShapeKey::Name(name) => f.write_str(name),
        }
    }
}

impl ShapeKey {
    /// Decimal integer names (`"0"`, `"-3"`) are the same key as the index.
    fn canonical(self) -> Self {
        match self {
            ShapeKey::Name(name) => match name.parse::<i64>() {
                Ok(index) if index.to_string() == name => ShapeKey::Index(index),
                _ => ShapeKey::Name(name),
            },
            key => key,
        }
    }
}

impl From<i64> for ShapeKey {
    fn from(index: i64) -> Self {
        Self::Index(index)
    }
}

impl From<&str> for ShapeKey {
    fn from(name: &str) -> Self {
        Self::Name(name.to_string())
    }
}

impl From<String> for ShapeKey {
    fn from(name: String) -> Self {
        Self::Name(name)
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ShapeField {
    pub ty: TypeUnion,
    /// The field may be absent.
    pub optional: bool,
}

/// Fixed-shape record (`array{a: int}`) or tuple (`array{int, string}`).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "RawShape", into = "RawShape")]
pub struct Shape {
    pub is_list: bool,
    pub fields: IndexMap<ShapeKey, ShapeField>,
}

impl Shape {
    /// Record shape with named fields.
    pub fn keyed() -> Self {
        Self {
            is_list: false,
            fields: IndexMap::new(),
        }
    }

    /// Tuple shape with positional fields.
    pub fn list() -> Self {
        Self {
            is_list: true,
            fields: IndexMap::new(),
        }
    }

    /// Build a shape from ordered fields, rejecting repeated keys.
    pub fn from_fields(
        is_list: bool,
        fields: impl IntoIterator<Item = (ShapeKey, ShapeField)>,
    ) -> Result<Self, ModelError> {
        let mut shape = Self {
            is_list,
            fields: IndexMap::new(),
        };
        for (key, field) in fields {
            let key = key.canonical();
            if shape.fields.contains_key(&key) {
                return Err(ModelError::DuplicateShapeKey(key));
            }
            shape.fields.insert(key, field);
        }
        Ok(shape)
    }

    /// Add a required field. A repeated key replaces the earlier field in place.
    pub fn field(self, key: impl Into<ShapeKey>, ty: impl Into<TypeUnion>) -> Self {
        self.with_field(key.into(), ty.into(), false)
    }

    /// Add a possibly-absent field. A repeated key replaces the earlier field in place.
    pub fn optional_field(self, key: impl Into<ShapeKey>, ty: impl Into<TypeUnion>) -> Self {
        self.with_field(key.into(), ty.into(), true)
    }

    /// Append a positional field keyed by the next index.
    pub fn element(self, ty: impl Into<TypeUnion>) -> Self {
        let index = self.fields.len() as i64;
        self.with_field(ShapeKey::Index(index), ty.into(), false)
    }

    fn with_field(mut self, key: ShapeKey, ty: TypeUnion, optional: bool) -> Self {
        self.fields.insert(key.canonical(), ShapeField { ty, optional });
        self
    }
}

#[derive(Serialize, Deserialize)]
struct RawShape {
    #[serde(default)]
    is_list: bool,
    #[serde(default)]
    fields: Vec<RawShapeField>,
}

#[derive(Serialize, Deserialize)]
struct RawShapeField {
    key: ShapeKey,
    #[serde(rename = "type")]
    ty: TypeUnion,
    #[serde(default)]
    optional: bool,
}

impl TryFrom<RawShape> for Shape {
    type Error = ModelError;

    fn try_from(raw: RawShape) -> Result<Self, Self::Error> {
        let fields = raw.fields.into_iter().map(|f| {
            (
                f.key,
                ShapeField {
                    ty: f.ty,
                    optional: f.optional,
                },
            )
        });
        Shape::from_fields(raw.is_list, fields)
    }
}

impl From<Shape> for RawShape {
    fn from(shape: Shape) -> Self {
        Self {
            is_list: shape.is_list,
            fields: shape
                .fields
                .into_iter()
                .map(|(key, field)| RawShapeField {
                    key,
                    ty: field.ty,
                    optional: field.optional,
                })
                .collect(),
        }
    }
}
