use indoc::indoc;

use crate::{
    Atomic, ModelError, NamedObject, Param, Shape, ShapeField, ShapeKey, Signature, TypeUnion,
    parse_union,
};

fn int() -> Atomic {
    Atomic::opaque("int")
}

fn string() -> Atomic {
    Atomic::opaque("string")
}

#[test]
fn union_rejects_empty() {
    assert_eq!(TypeUnion::new(vec![]), Err(ModelError::EmptyUnion));
}

#[test]
fn union_keeps_order_and_duplicates() {
    let union = TypeUnion::single(int()).or(string()).or(int());
    let ids: Vec<_> = union
        .iter()
        .map(|a| match a {
            Atomic::Opaque { id } => id.as_str(),
            _ => unreachable!(),
        })
        .collect();
    assert_eq!(ids, ["int", "string", "int"]);
    assert_eq!(union.len(), 3);
}

#[test]
fn shape_from_fields_rejects_duplicate_key() {
    let field = || ShapeField {
        ty: int().into(),
        optional: false,
    };
    let result = Shape::from_fields(
        false,
        [
            (ShapeKey::from("id"), field()),
            (ShapeKey::from("name"), field()),
            (ShapeKey::from("id"), field()),
        ],
    );
    assert_eq!(result, Err(ModelError::DuplicateShapeKey(ShapeKey::from("id"))));
}

#[test]
fn shape_builder_preserves_insertion_order() {
    let shape = Shape::keyed()
        .field("zeta", int())
        .optional_field("alpha", string())
        .field("mid", int());
    let keys: Vec<String> = shape.fields.keys().map(|k| k.to_string()).collect();
    assert_eq!(keys, ["zeta", "alpha", "mid"]);
    assert!(shape.fields[1].optional);
}

#[test]
fn shape_elements_are_indexed() {
    let shape = Shape::list().element(int()).element(string());
    let keys: Vec<_> = shape.fields.keys().cloned().collect();
    assert_eq!(keys, [ShapeKey::Index(0), ShapeKey::Index(1)]);
}

#[test]
fn decode_opaque_union() {
    let union = parse_union(r#"[{"kind": "opaque", "id": "int"}, {"kind": "opaque", "id": "null"}]"#)
        .unwrap();
    assert_eq!(union, TypeUnion::single(int()).or(Atomic::opaque("null")));
}

#[test]
fn decode_rejects_empty_union() {
    let err = parse_union("[]").unwrap_err();
    assert!(
        err.to_string()
            .starts_with("type union must have at least one member"),
        "{err}"
    );
}

#[test]
fn decode_nested_generic_object() {
    let json = indoc! {r#"
        [{
            "kind": "named",
            "class_id": "App\\Collection",
            "type_args": [
                [{"kind": "opaque", "id": "int"}],
                [{"kind": "list", "element": [{"kind": "opaque", "id": "string"}], "non_empty": true}]
            ],
            "intersection": [{"kind": "named", "class_id": "Countable"}]
        }]
    "#};
    let expected = NamedObject::new("App\\Collection")
        .arg(int())
        .arg(Atomic::non_empty_list(string()))
        .intersect(NamedObject::new("Countable"));
    assert_eq!(parse_union(json).unwrap(), TypeUnion::from(expected));
}

#[test]
fn decode_closure_defaults() {
    let json = indoc! {r#"
        [{
            "kind": "closure",
            "params": [
                {"name": "items", "type": [{"kind": "opaque", "id": "array"}], "by_ref": true},
                {"name": "rest", "variadic": true}
            ]
        }]
    "#};
    let expected = Atomic::Closure(
        Signature::new()
            .param(Param::typed("items", Atomic::opaque("array")).by_ref(true))
            .param(Param::new("rest").variadic(true)),
    );
    assert_eq!(parse_union(json).unwrap(), TypeUnion::from(expected));
}

#[test]
fn decode_shape_with_mixed_keys() {
    let json = indoc! {r#"
        [{
            "kind": "shape",
            "fields": [
                {"key": "name", "type": [{"kind": "opaque", "id": "string"}]},
                {"key": 0, "type": [{"kind": "opaque", "id": "int"}], "optional": true}
            ]
        }]
    "#};
    let expected = Shape::keyed()
        .field("name", string())
        .optional_field(0i64, int());
    assert_eq!(parse_union(json).unwrap(), TypeUnion::from(expected));
}

#[test]
fn decode_rejects_duplicate_shape_key() {
    let json = indoc! {r#"
        [{
            "kind": "shape",
            "is_list": true,
            "fields": [
                {"key": 0, "type": [{"kind": "opaque", "id": "int"}]},
                {"key": 0, "type": [{"kind": "opaque", "id": "int"}]}
            ]
        }]
    "#};
    let err = parse_union(json).unwrap_err();
    assert!(err.to_string().contains("duplicate shape key `0`"), "{err}");
}

#[test]
fn decode_rejects_integer_and_string_spelling_of_same_key() {
    let json = indoc! {r#"
        [{
            "kind": "shape",
            "fields": [
                {"key": 0, "type": [{"kind": "opaque", "id": "int"}]},
                {"key": "0", "type": [{"kind": "opaque", "id": "string"}]}
            ]
        }]
    "#};
    let err = parse_union(json).unwrap_err();
    assert!(err.to_string().contains("duplicate shape key `0`"), "{err}");
}

#[test]
fn decimal_names_become_indices() {
    let shape = Shape::keyed()
        .field("-3", int())
        .field("07", int())
        .field("+1", int())
        .field("x1", int());
    let keys: Vec<&ShapeKey> = shape.fields.keys().collect();
    assert_eq!(
        keys,
        [
            &ShapeKey::Index(-3),
            &ShapeKey::from("07"),
            &ShapeKey::from("+1"),
            &ShapeKey::from("x1"),
        ]
    );

    let replaced = Shape::keyed().field(0i64, int()).field("0", string());
    assert_eq!(replaced.fields.len(), 1);
    assert_eq!(replaced.fields[&ShapeKey::Index(0)].ty, TypeUnion::from(string()));
}

#[test]
fn from_fields_rejects_name_matching_index() {
    let field = || ShapeField {
        ty: int().into(),
        optional: false,
    };
    let result = Shape::from_fields(
        false,
        [(ShapeKey::Index(1), field()), (ShapeKey::from("1"), field())],
    );
    assert_eq!(result, Err(ModelError::DuplicateShapeKey(ShapeKey::Index(1))));
}

#[test]
fn decode_rejects_unknown_kind() {
    assert!(parse_union(r#"[{"kind": "resource"}]"#).is_err());
}

#[test]
fn encode_then_decode_template_param() {
    let union = TypeUnion::from(Atomic::template_param(
        "T",
        "App\\Box",
        Atomic::class_string(Some(NamedObject::new("App\\Model"))),
    ));
    let json = serde_json::to_string(&union).unwrap();
    insta::assert_snapshot!(json, @r#"[{"kind":"template-param","name":"T","defining_class":"App\\Box","constraint":[{"kind":"class-string","bound":{"class_id":"App\\Model","type_args":[],"intersection":[]}}]}]"#);
    assert_eq!(parse_union(&json).unwrap(), union);
}
