#![cfg(test)]

use proptest::prelude::*;

use super::*;

fn map<const N: usize>(entries: [(&str, Value); N]) -> RawMap {
    entries.into_iter().map(|(k, v)| (Key::from(k), v)).collect()
}

fn flat() -> Dict {
    Dict::from_map(
        map([
            ("foo", "foo".into()),
            ("bar", "bar".into()),
            ("baz", "baz".into()),
            ("boo", "boo".into()),
        ]),
        None,
    )
}

fn nested() -> Dict {
    Dict::from_map(
        map([
            ("foo", "foo".into()),
            ("bar", "bar".into()),
            ("baz", map([("boo", "boo".into())]).into()),
        ]),
        Some("."),
    )
}

#[test]
fn test_path_get_promotes() {
    let mut dict = nested();
    assert!(
        dict.iter().any(|(k, v)| k.as_name() == Some("baz") && v.is_map()),
        "Nested mappings shouldn't be promoted on construction."
    );

    assert_eq!(dict.get("baz.boo"), Some(&Value::from("boo")));
    assert!(
        matches!(dict.get("baz"), Some(Value::Dict(_))),
        "Reading through a nested mapping should promote it to a dict."
    );
    assert_eq!(
        dict.get_dict("baz").map(|child| child.all()),
        Some(map([("boo", "boo".into())])),
    );
    assert_eq!(
        dict.get_dict("baz").and_then(|child| child.delimiter().map(str::to_owned)),
        Some(".".to_owned()),
        "Promoted children should share the parent's delimiter."
    );
}

#[test]
fn test_promotion_is_stable() {
    let mut dict = Dict::from_map(
        map([("a", map([("b", map([("c", 1.into())]).into())]).into())]),
        Some("."),
    );

    let first = dict.get_dict("a.b").map(|child| child as *const Dict);
    let second = dict.get_dict("a.b").map(|child| child as *const Dict);
    assert!(first.is_some());
    assert_eq!(first, second, "Repeated reads should return the same child dict.");

    if let Some(child) = dict.get_dict("a.b") {
        assert!(child.set("d", 2).is_ok());
    }
    assert_eq!(
        dict.get("a.b.d"),
        Some(&Value::Int(2)),
        "Writes through a promoted child should be visible from the parent."
    );
}

#[test]
fn test_set_path() {
    let mut dict = Dict::from_map(map([("a", map([("b", map([]).into())]).into())]), Some("."));

    assert!(dict.set("a.b.c", "v").is_ok());
    assert_eq!(dict.get("a.b.c"), Some(&Value::from("v")));
    assert_eq!(
        dict.all(),
        map([("a", map([("b", map([("c", "v".into())]).into())]).into())]),
    );

    assert!(dict.set("a.b.c", "w").is_ok());
    assert_eq!(dict.get("a.b.c"), Some(&Value::from("w")), "Paths should overwrite.");
}

#[test]
fn test_path_split_on_first_delimiter() {
    let mut dict = Dict::with_delimiter("::");
    assert!(dict.set("a", map([])).is_ok());
    assert!(dict.set("a::b::c", 1).is_ok());

    assert_eq!(dict.get("a::b::c"), None, "`b` doesn't exist, so the write was dropped.");
    assert!(dict.set("a::b", map([])).is_ok());
    assert!(dict.set("a::b::c", 1).is_ok());
    assert_eq!(dict.get("a::b::c"), Some(&Value::Int(1)));
}

#[test]
fn test_missing_path_drop() {
    let mut dict = Dict::with_delimiter(".");
    assert!(dict.set("x.y", 1).is_ok(), "Dropping is the default policy.");
    assert!(!dict.has("x"));
    assert!(dict.is_empty());

    let mut dict = nested();
    assert!(dict.set("foo.bar", 1).is_ok());
    assert_eq!(
        dict.get("foo"),
        Some(&Value::from("foo")),
        "A scalar parent shouldn't be replaced."
    );
}

#[test]
fn test_missing_path_create() {
    let mut dict = Dict::with_delimiter(".").with_path_policy(PathPolicy::Create);
    assert!(dict.set("x.y.z", 1).is_ok());
    assert_eq!(dict.get("x.y.z"), Some(&Value::Int(1)));
    assert_eq!(
        dict.all(),
        map([("x", map([("y", map([("z", 1.into())]).into())]).into())]),
    );
    assert_eq!(
        dict.get_dict("x").map(|child| child.path_policy()),
        Some(PathPolicy::Create),
        "Created children should inherit the policy."
    );

    assert!(dict.set("s", "scalar").is_ok());
    assert!(dict.set("s.t", 2).is_ok());
    assert_eq!(dict.get("s"), Some(&Value::from("scalar")));
}

#[test]
fn test_missing_path_error() {
    let mut dict = Dict::with_delimiter(".").with_path_policy(PathPolicy::Error);
    assert_eq!(
        dict.set("x.y", 1).err(),
        Some(DictError::MissingPath(MissingPath { path: "x.y".into() })),
    );
    assert!(dict.is_empty());
}

#[test]
fn test_invalid_key() {
    let mut dict = Dict::new();
    assert_eq!(
        dict.set(123, "x").err(),
        Some(DictError::InvalidKey(InvalidKey { kind: "int" })),
    );
    assert!(dict.set(1.5, "x").is_err());
    assert!(dict.set(Value::Bool(true), "x").is_err());
    assert!(dict.set_all([(Value::from("ok"), 1), (Value::Null, 2)]).is_err());
    assert_eq!(dict.len(), 1, "Pairs before the invalid key should have been set.");
    assert_eq!(
        DictError::from(InvalidKey { kind: "int" }).to_string(),
        "Dict key must be a string or object, got int!",
    );
}

#[test]
fn test_object_keys() {
    let object = Object::new(5_u8);
    let lookalike = Object::new(5_u8);

    let mut dict = Dict::with_delimiter(".");
    assert!(dict.set(object.clone(), "by identity").is_ok());

    assert_eq!(dict.get(&object), Some(&Value::from("by identity")));
    assert_eq!(dict.get(&lookalike), None, "Objects should be compared by identity.");
    assert_eq!(object.downcast_ref::<u8>(), Some(&5));
    assert!(dict.set(Value::Object(lookalike.clone()), 1).is_ok());
    assert_eq!(dict.len(), 2);
}

#[test]
fn test_has_agrees_with_get() {
    let mut dict = nested();
    for key in ["foo", "baz", "baz.boo", "baz.nope", "nope", "foo.bar", ""] {
        let has = dict.has(key);
        assert_eq!(has, dict.get(key).is_some(), "has and get disagree on {key:?}");
    }
}

#[test]
fn test_get_defaults() {
    let mut dict = nested();
    let fallback = Value::from("fallback");

    assert_eq!(dict.get_or("foo", &fallback), &Value::from("foo"));
    assert_eq!(dict.get_or("nope", &fallback), &fallback);
    assert_eq!(
        dict.get_or_else("nope", |d, key| Value::from(format!("{key}/{}", d.len()))),
        Value::from("nope/3"),
    );
    assert_eq!(
        dict.compute(10_i64, |d, default| d.len() as i64 + default),
        13,
    );
}

#[test]
fn test_all_roundtrips() {
    let raw = map([
        ("one", 1.into()),
        ("list", vec![Value::from("a"), map([("x", true.into())]).into()].into()),
        ("three", map([("four", map([("five", 5.into())]).into())]).into()),
    ]);
    let mut dict = Dict::from_map(raw.clone(), Some("."));
    assert_eq!(dict.all(), raw);

    assert!(dict.has("three.four.five"));
    assert_eq!(dict.all(), raw, "Promotion shouldn't change the flattened form.");
    assert!(dict.all().values().all(|v| !v.is_dict()));
}

#[test]
fn test_merge() {
    let raw1 = map([
        ("one", 1.into()),
        ("ten", 2.into()),
        ("three", map([("four", 5.into())]).into()),
    ]);
    let raw2 = map([
        ("ten", 1.into()),
        ("three", map([("four", 4.into())]).into()),
    ]);

    let mut dict1 = Dict::from_map(raw1.clone(), Some("."));
    let dict2 = Dict::from_map(raw2.clone(), Some("."));
    assert!(dict1.merge(&dict2).is_ok());

    assert_eq!(
        dict1.all(),
        map([
            ("one", 1.into()),
            ("ten", 1.into()),
            ("three", map([("four", 4.into())]).into()),
        ]),
    );
    assert_eq!(dict2.all(), raw2, "The merged dict shouldn't be modified.");

    let mut dict1 = Dict::from_map(raw1, None);
    dict1.merge_recursive(&dict2);
    assert_eq!(
        dict1.all(),
        map([
            ("one", 1.into()),
            ("ten", vec![Value::Int(2), Value::Int(1)].into()),
            ("three", map([("four", vec![Value::Int(5), Value::Int(4)].into())]).into()),
        ]),
    );

    dict1.merge_recursive(&Dict::from_map(map([("ten", 3.into())]), None));
    assert_eq!(
        dict1.get("ten"),
        Some(&Value::List(vec![2.into(), 1.into(), 3.into()])),
        "Merging into a list should extend it."
    );
}

#[test]
fn test_fill() {
    let mut dict = flat();
    dict.fill(&Dict::from_map(map([("foo", 1.into()), ("new", 2.into())]), None));

    assert_eq!(dict.get("foo"), Some(&Value::from("foo")), "Existing keys should be kept.");
    assert_eq!(dict.get("new"), Some(&Value::Int(2)));
    assert_eq!(dict.len(), 5);
}

#[test]
fn test_remove() {
    let mut dict = flat();
    assert_eq!(dict.remove("foo"), Ok(Value::from("foo")));
    assert!(!dict.has("foo"));
    assert_eq!(
        dict.keys().map(ToString::to_string).collect::<Vec<_>>(),
        ["bar", "baz", "boo"],
        "Removal should preserve the order of the other entries."
    );

    let error = dict.remove("NonExistingKey");
    assert!(error.as_ref().is_err_and(DictError::is_missing_key));
    assert_eq!(
        error.map_err(|e| e.to_string()),
        Err("The dict has no key named \"NonExistingKey\"!".to_owned()),
    );
    assert_eq!(dict.remove_silent("NonExistingKey"), None);

    let mut dict = nested();
    assert_eq!(dict.remove_silent("baz.boo"), Some(Value::from("boo")));
    assert_eq!(dict.get_dict("baz").map(|child| child.is_empty()), Some(true));
}

#[test]
fn test_order() {
    let mut dict = flat();
    assert_eq!(dict.first(), Some(&Value::from("foo")));
    assert_eq!(dict.last(), Some(&Value::from("boo")));

    assert!(dict.set("foo", "hello").is_ok());
    assert_eq!(dict.get("foo"), Some(&Value::from("hello")));
    assert_eq!(dict.first(), Some(&Value::from("hello")), "Overwriting should keep the position.");

    dict.sort_keys_by(|a, b| b.to_string().cmp(&a.to_string()));
    assert_eq!(
        dict.keys().map(ToString::to_string).collect::<Vec<_>>(),
        ["foo", "boo", "baz", "bar"],
    );

    assert_eq!(dict.clear().len(), 0);
    assert_eq!(dict.first(), None);
}

#[test]
fn test_find_filter_concat() {
    let dict = flat();
    assert_eq!(dict.find(&Value::from("baz")), Some(&Key::from("baz")));
    assert_eq!(dict.find(&Value::from("nope")), None);

    let filtered = dict.filter(|_, v| v == &Value::from("foo"));
    assert_eq!(filtered.all(), map([("foo", "foo".into())]));
    assert_eq!(dict.len(), 4, "Filtering shouldn't modify the original.");

    assert_eq!(dict.concat("+"), "foo+bar+baz+boo");
    assert_eq!(
        dict.fold(String::new(), |acc, v, k| format!("{acc}{k}={v};")),
        "foo=foo;bar=bar;baz=baz;boo=boo;",
    );
}

#[test]
fn test_copy_is_independent() {
    let dict = nested();
    let mut copy = dict.clone();
    assert_eq!(copy, dict);

    assert!(copy.set("baz.boo", "changed").is_ok());
    assert_ne!(copy, dict);
    assert_eq!(dict.all().get(&KeyRef::Name("baz")), Some(&Value::Map(map([("boo", "boo".into())]))));
}

#[test]
fn test_collect() {
    let dict: Dict = [("a", 1), ("b", 2)].into_iter().collect();
    assert_eq!(dict.all(), map([("a", 1.into()), ("b", 2.into())]));
    assert_eq!(
        dict.into_iter().map(|(k, _)| k).collect::<Vec<_>>(),
        [Key::from("a"), Key::from("b")],
    );
}

#[cfg(feature = "serde")]
#[test]
fn test_json() {
    let json = serde_json::json!({ "name": "x", "nested": { "n": 1, "list": [1.5, null] } });
    let mut dict = Dict::from_json(json.clone(), Some(".")).unwrap_or_default();

    assert_eq!(dict.get("nested.n"), Some(&Value::Int(1)));
    assert_eq!(dict.to_json(), json);
    assert_eq!(
        Dict::from_json(serde_json::json!([1, 2]), None).err(),
        Some(DictError::NotAMapping(NotAMapping)),
    );
}

fn arb_value() -> impl Strategy<Value = Value> {
    let leaf = prop_oneof![
        Just(Value::Null),
        any::<bool>().prop_map(Value::Bool),
        any::<i64>().prop_map(Value::Int),
        "[a-z]{0,6}".prop_map(Value::Str),
    ];
    leaf.prop_recursive(3, 32, 4, |inner| {
        prop::collection::vec(("[a-c]{1,2}", inner), 0..4).prop_map(|entries| {
            Value::Map(entries.into_iter().map(|(k, v)| (Key::Name(k), v)).collect())
        })
    })
}

fn arb_map() -> impl Strategy<Value = RawMap> {
    prop::collection::vec(("[a-c]{1,2}", arb_value()), 0..6)
        .prop_map(|entries| entries.into_iter().map(|(k, v)| (Key::Name(k), v)).collect())
}

proptest! {
    #[test]
    fn prop_all_returns_source(raw in arb_map(), paths in prop::collection::vec("[a-c]{1,2}(\\.[a-c]{1,2}){0,2}", 0..8)) {
        let mut dict = Dict::from_map(raw.clone(), Some("."));
        for path in &paths {
            dict.get(path.as_str());
        }
        prop_assert_eq!(dict.all(), raw);
    }

    #[test]
    fn prop_has_matches_get(raw in arb_map(), path in "[a-c]{1,2}(\\.[a-c]{1,2}){0,2}") {
        let mut dict = Dict::from_map(raw, Some("."));
        let has = dict.has(path.as_str());
        prop_assert_eq!(has, dict.get(path.as_str()).is_some());
    }

    #[test]
    fn prop_set_then_get(raw in arb_map(), path in "[a-c]{1,2}(\\.[a-c]{1,2}){0,2}", value in any::<i64>()) {
        let mut dict = Dict::from_map(raw, Some(".")).with_path_policy(PathPolicy::Create);
        let segments: Vec<&str> = path.split('.').collect();
        let resolvable = (1..segments.len()).all(|n| {
            dict.get(segments[..n].join(".").as_str()).is_none_or(Value::is_mapping)
        });
        prop_assert!(dict.set(path.as_str(), value).is_ok());
        if resolvable {
            prop_assert_eq!(dict.get(path.as_str()), Some(&Value::Int(value)));
        }
    }
}

