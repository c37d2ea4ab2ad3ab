use yamlite::{
    convert, convert_with_options, from_yaml, from_yaml_with_options, yaml, yaml_to_json,
    Direction, Error, Options,
};

#[test]
fn test_json_to_yaml_scalar_document() {
    assert_eq!(convert("42", Direction::JsonToYaml).unwrap(), "42");
    assert_eq!(convert("null", Direction::JsonToYaml).unwrap(), "null");
    assert_eq!(
        convert("\"hello\"", Direction::JsonToYaml).unwrap(),
        "hello"
    );
}

#[test]
fn test_yaml_to_json_scalar_document() {
    assert_eq!(convert("42", Direction::YamlToJson).unwrap(), "42");
    assert_eq!(convert("hello", Direction::YamlToJson).unwrap(), "\"hello\"");
    assert_eq!(convert("", Direction::YamlToJson).unwrap(), "null");
}

#[test]
fn test_json_output_is_two_space_pretty() {
    let json = yaml_to_json("name: Ada\nnums:\n  - 1\n  - 2").unwrap();
    assert_eq!(
        json,
        "{\n  \"name\": \"Ada\",\n  \"nums\": [\n    1,\n    2\n  ]\n}"
    );
}

#[test]
fn test_custom_indent_width() {
    let yaml = convert_with_options(
        r#"{"a":{"b":{"c":1}}}"#,
        Direction::JsonToYaml,
        Options::new().with_indent(4),
    )
    .unwrap();
    assert_eq!(yaml, "a:\n    b:\n        c: 1");
}

#[test]
fn test_empty_containers_survive_both_directions() {
    let yaml = convert(r#"{"a":[],"b":{}}"#, Direction::JsonToYaml).unwrap();
    assert_eq!(yaml, "a: []\nb: {}");

    let json = convert(&yaml, Direction::YamlToJson).unwrap();
    let value: serde_json::Value = serde_json::from_str(&json).unwrap();
    assert_eq!(value, serde_json::json!({"a": [], "b": {}}));
}

#[test]
fn test_integer_and_float_lexical_forms() {
    let json = convert("int: 42\nneg: -7\nfloat: 2.5", Direction::YamlToJson).unwrap();
    let value: serde_json::Value = serde_json::from_str(&json).unwrap();
    assert_eq!(value, serde_json::json!({"int": 42, "neg": -7, "float": 2.5}));
}

#[test]
fn test_invalid_json_reports_decoder_message() {
    let err = convert(r#"{"a":}"#, Direction::JsonToYaml).unwrap_err();
    let msg = err.to_string();
    assert!(msg.contains("invalid JSON"));
    // serde_json reports the position of the offending token
    assert!(msg.contains("column"));
}

#[test]
fn test_lenient_direction_swallows_unsupported_constructs() {
    // multi-document markers and flow collections degrade, never error
    let doc = from_yaml("---\na: [1, 2]\n---\nb: 1");
    assert_eq!(doc, yaml!({"a": "[1, 2]", "b": 1}));
}

#[test]
fn test_strict_mode_surfaces_parse_errors() {
    let result = convert_with_options(
        "a: 1\n---",
        Direction::YamlToJson,
        Options::new().with_strict(true),
    );
    match result {
        Err(Error::Parse { line, .. }) => assert_eq!(line, 2),
        other => panic!("expected a parse error, got {:?}", other.map(|_| ())),
    }
}

#[test]
fn test_strict_mode_accepts_well_formed_documents() {
    let doc = from_yaml_with_options(
        "items:\n  - id: 1\n  - id: 2\ncount: 2",
        Options::new().with_strict(true),
    )
    .unwrap();
    assert_eq!(doc, yaml!({"items": [{"id": 1}, {"id": 2}], "count": 2}));
}

#[test]
fn test_failed_conversion_produces_no_output() {
    // Result is Err, not Ok with partial text
    assert!(convert("[1,", Direction::JsonToYaml).is_err());
}
