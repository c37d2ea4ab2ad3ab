use yamlite::{
    convert, from_yaml, json_to_yaml, to_yaml, yaml, yaml_to_json, Direction, Error, Value,
};

fn assert_roundtrip(doc: &Value) {
    let text = to_yaml(doc);
    let back = from_yaml(&text);
    assert_eq!(&back, doc, "round trip failed for:\n{}", text);
}

#[test]
fn test_serialization_idempotence_flat() {
    assert_roundtrip(&yaml!({"name": "Ada", "active": true, "age": 36}));
    assert_roundtrip(&yaml!([3, 1, 2]));
    assert_roundtrip(&yaml!({"a": null, "b": false, "c": 2.5}));
}

#[test]
fn test_serialization_idempotence_nested() {
    assert_roundtrip(&yaml!({
        "server": {
            "host": "localhost",
            "ports": [80, 443],
            "tls": {"enabled": true, "cert": "selfsigned"}
        },
        "tags": ["edge", "prod"]
    }));
    assert_roundtrip(&yaml!([{"id": 1, "deps": [2, 3]}, {"id": 2, "deps": []}]));
    assert_roundtrip(&yaml!([[1, 2], [3], ["x"]]));
}

#[test]
fn test_json_roundtrip_deep_equality() {
    let inputs = [
        r#"{"name":"Ada","active":true}"#,
        r#"{"items":[{"id":1},{"id":2}],"count":2}"#,
        r#"[null,true,1,2.5,"text",[],{}]"#,
        r#"{"nested":{"deep":{"leaf":[1,2,3]}}}"#,
    ];
    for input in inputs {
        let yaml = json_to_yaml(input).unwrap();
        let back = yaml_to_json(&yaml).unwrap();
        let expected: serde_json::Value = serde_json::from_str(input).unwrap();
        let actual: serde_json::Value = serde_json::from_str(&back).unwrap();
        assert_eq!(actual, expected, "through:\n{}", yaml);
    }
}

#[test]
fn test_quoting_trigger() {
    let with_colon = to_yaml(&yaml!({"k": "a: b"}));
    assert_eq!(with_colon, "k: \"a: b\"");

    let with_hash = to_yaml(&yaml!({"k": "a#b"}));
    assert_eq!(with_hash, "k: \"a#b\"");

    let plain = to_yaml(&yaml!({"k": "plain"}));
    assert_eq!(plain, "k: plain");
}

#[test]
fn test_sequence_order_preserved() {
    let text = to_yaml(&yaml!([3, 1, 2]));
    assert_eq!(text, "- 3\n- 1\n- 2");
    assert_eq!(from_yaml(&text), yaml!([3, 1, 2]));
}

#[test]
fn test_mapping_key_order_preserved() {
    let yaml = json_to_yaml(r#"{"b":1,"a":2}"#).unwrap();
    assert_eq!(yaml, "b: 1\na: 2");

    let json = yaml_to_json(&yaml).unwrap();
    let reparsed: serde_json::Value = serde_json::from_str(&json).unwrap();
    let keys: Vec<_> = reparsed.as_object().unwrap().keys().cloned().collect();
    assert_eq!(keys, vec!["b", "a"]);
}

#[test]
fn test_scenario_flat_object() {
    let yaml = json_to_yaml(r#"{"name":"Ada","active":true}"#).unwrap();
    assert_eq!(yaml.lines().collect::<Vec<_>>(), vec!["name: Ada", "active: true"]);

    let back = from_yaml(&yaml);
    assert_eq!(back, yaml!({"name": "Ada", "active": true}));
}

#[test]
fn test_scenario_nested_array_of_objects() {
    let yaml = json_to_yaml(r#"{"items":[{"id":1},{"id":2}]}"#).unwrap();
    assert_eq!(yaml, "items:\n  - id: 1\n  - id: 2");

    let back = from_yaml(&yaml);
    assert_eq!(back, yaml!({"items": [{"id": 1}, {"id": 2}]}));
}

#[test]
fn test_scenario_invalid_json_input() {
    let result = convert(r#"{"a":}"#, Direction::JsonToYaml);
    match result {
        Err(Error::Json(msg)) => assert!(!msg.is_empty()),
        other => panic!("expected a JSON error, got {:?}", other.map(|_| ())),
    }
}

#[test]
fn test_scenario_unquoted_colon_value() {
    let doc = from_yaml("url: http://x.com");
    assert_eq!(doc, yaml!({"url": "http://x.com"}));
}
