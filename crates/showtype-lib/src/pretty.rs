//! Rendering of type unions as readable annotations.
//!
//! Output follows a structural annotation syntax:
//! - `list<TValue: int>`, `non-empty-array<TKey: int, TValue: string>`
//! - `pure-Closure(int $x, ...string $rest): bool`
//! - `Collection<TKey: int, TValue: User> & Countable`
//! - `array{int, string}` for tuples, one field per line for records
//!
//! `level` is the shape nesting depth. It starts at 1 and only grows when
//! descending into a shape field; record fields are indented by `level` tabs.
//!
//! Rendering is total: unknown classes fall back to their raw identifier and
//! kinds without dedicated syntax print their identifier verbatim.

use showtype_core::utils::short_class_name;
use showtype_core::{Atomic, NamedObject, Param, Shape, Signature, TypeCatalog, TypeUnion};

/// Render a union framed by a leading and trailing newline.
#[tracing::instrument(level = "trace", skip_all, fields(members = union.len()))]
pub fn render(union: &TypeUnion, catalog: &dyn TypeCatalog) -> String {
    format!("\n{}\n", render_union(union, catalog, 1))
}

/// Render union members joined by ` | `, in order.
pub fn render_union(union: &TypeUnion, catalog: &dyn TypeCatalog, level: usize) -> String {
    union
        .iter()
        .map(|atomic| render_atomic(atomic, catalog, level))
        .collect::<Vec<_>>()
        .join(" | ")
}

pub fn render_atomic(atomic: &Atomic, catalog: &dyn TypeCatalog, level: usize) -> String {
    match atomic {
        Atomic::List { element, non_empty } => {
            let name = if *non_empty { "non-empty-list" } else { "list" };
            format!("{}<TValue: {}>", name, render_union(element, catalog, level))
        }
        Atomic::Array {
            key,
            value,
            non_empty,
        } => {
            let name = if *non_empty {
                "non-empty-array"
            } else {
                "array"
            };
            format!(
                "{}<TKey: {}, TValue: {}>",
                name,
                render_union(key, catalog, level),
                render_union(value, catalog, level)
            )
        }
        Atomic::Iterable { key, value } => format!(
            "iterable<TKey: {}, TValue: {}>",
            render_union(key, catalog, level),
            render_union(value, catalog, level)
        ),
        Atomic::Closure(signature) => render_signature("Closure", signature, catalog, level),
        Atomic::Callable(signature) => render_signature("callable", signature, catalog, level),
        Atomic::ClassString { bound: None } => "class-string".to_string(),
        Atomic::ClassString { bound: Some(bound) } => {
            format!("class-string<{}>", render_named(bound, catalog, level))
        }
        Atomic::Named(object) => render_named(object, catalog, level),
        Atomic::Shape(shape) => render_shape(shape, catalog, level),
        Atomic::TemplateParam {
            defining_class,
            constraint,
            ..
        } => format!(
            "from {} as {}",
            template_owner_name(defining_class, catalog),
            render_union(constraint, catalog, level)
        ),
        Atomic::Opaque { id } => id.clone(),
    }
}

fn render_signature(
    name: &str,
    signature: &Signature,
    catalog: &dyn TypeCatalog,
    level: usize,
) -> String {
    let params = signature
        .params
        .iter()
        .map(|param| render_param(param, catalog, level))
        .collect::<Vec<_>>()
        .join(", ");
    let return_type = match &signature.return_type {
        Some(ty) => render_union(ty, catalog, level),
        None => "void".to_string(),
    };
    let pure = if signature.pure { "pure-" } else { "" };

    format!("{}{}({}): {}", pure, name, params, return_type)
}

fn render_param(param: &Param, catalog: &dyn TypeCatalog, level: usize) -> String {
    let ty = match &param.ty {
        Some(ty) => render_union(ty, catalog, level),
        None => "mixed".to_string(),
    };
    let variadic = if param.variadic { "..." } else { "" };
    let by_ref = if param.by_ref { "&" } else { "" };

    format!("{}{} {}${}", variadic, ty, by_ref, param.name)
        .trim()
        .to_string()
}

fn render_named(object: &NamedObject, catalog: &dyn TypeCatalog, level: usize) -> String {
    let info = catalog.resolve(&object.class_id);
    if info.is_none() {
        tracing::debug!(class_id = %object.class_id, "class not in catalog, using raw id");
    }

    let name = info
        .as_ref()
        .map_or(object.class_id.as_str(), |info| info.short_name.as_str());

    let main = if object.type_args.is_empty() {
        name.to_string()
    } else {
        // Arguments stay positional; declared names only label them.
        let labels = info
            .as_ref()
            .and_then(|info| info.template_params.as_deref())
            .unwrap_or(&[]);
        let generics = object
            .type_args
            .iter()
            .enumerate()
            .map(|(i, arg)| {
                let rendered = render_union(arg, catalog, level);
                match labels.get(i) {
                    Some(label) => format!("{}: {}", label, rendered),
                    None => rendered,
                }
            })
            .collect::<Vec<_>>()
            .join(", ");
        format!("{}<{}>", name, generics)
    };

    if object.intersection.is_empty() {
        return main;
    }

    std::iter::once(main)
        .chain(
            object
                .intersection
                .iter()
                .map(|atomic| render_atomic(atomic, catalog, level)),
        )
        .collect::<Vec<_>>()
        .join(" & ")
}

fn render_shape(shape: &Shape, catalog: &dyn TypeCatalog, level: usize) -> String {
    if shape.fields.is_empty() {
        return "array{}".to_string();
    }

    if shape.is_list {
        let elements = shape
            .fields
            .values()
            .map(|field| render_union(&field.ty, catalog, level + 1))
            .collect::<Vec<_>>()
            .join(", ");
        return format!("array{{{}}}", elements);
    }

    let lines = shape
        .fields
        .iter()
        .map(|(key, field)| {
            let optional = if field.optional { "?" } else { "" };
            format!(
                "{}{}{}: {}",
                tabs(level),
                key,
                optional,
                render_union(&field.ty, catalog, level + 1)
            )
        })
        .collect::<Vec<_>>()
        .join(",\n");

    format!("array{{\n{},\n{}}}", lines, tabs(level.saturating_sub(1)))
}

/// Display name of the scope that declares a template parameter.
///
/// Function scopes (`fn-array_map`) are not catalog entries, so an unresolved
/// owner falls back to its trailing identifier.
fn template_owner_name(defining_class: &str, catalog: &dyn TypeCatalog) -> String {
    match catalog.resolve(defining_class) {
        Some(info) => info.short_name,
        None => short_class_name(defining_class).to_string(),
    }
}

fn tabs(level: usize) -> String {
    "\t".repeat(level)
}
