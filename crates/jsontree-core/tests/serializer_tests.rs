use jsontree_core::{parse, stringify, write_to, Value};

#[test]
fn scalars() {
    assert_eq!(stringify(&Value::Null), "null");
    assert_eq!(stringify(&Value::Bool(true)), "true");
    assert_eq!(stringify(&Value::Bool(false)), "false");
    assert_eq!(stringify(&Value::int(0)), "0");
    assert_eq!(stringify(&Value::int(i64::MIN)), "-9223372036854775808");
    assert_eq!(stringify(&Value::number(0.1)), "0.1");
    assert_eq!(stringify(&Value::number(-2.5)), "-2.5");
}

#[test]
fn whole_doubles_print_as_integers() {
    assert_eq!(stringify(&Value::number(5.0)), "5");
    assert_eq!(stringify(&Value::number(-0.0)), "0");
}

#[test]
fn huge_doubles_use_exponent_form() {
    let text = stringify(&Value::number(1e300));
    assert_eq!(parse(&text).unwrap().get_double().unwrap(), 1e300);
}

#[test]
fn non_finite_doubles_become_null() {
    assert_eq!(stringify(&Value::number(f64::NAN)), "null");
    assert_eq!(stringify(&Value::number(f64::INFINITY)), "null");
}

#[test]
fn output_is_compact() {
    let v = parse("{ \"a\" : [ 1 , 2 ] ,\n \"b\" : { } }").unwrap();
    assert_eq!(stringify(&v), r#"{"a":[1,2],"b":{}}"#);
}

#[test]
fn unpaired_quote_and_trailing_backslash_are_escaped() {
    let v = Value::string("say \"hi\"\n\\");
    assert_eq!(stringify(&v), "\"say \\\"hi\\\"\n\\\\\"");
}

#[test]
fn parsed_escapes_are_emitted_as_written() {
    let input = r#""line\nnext\ttab \"q\" \\ \/""#;
    assert_eq!(stringify(&parse(input).unwrap()), input);
}

#[test]
fn keys_are_escaped_like_strings() {
    let v = Value::object_from([("a\"b", Value::Null)]);
    assert_eq!(stringify(&v), r#"{"a\"b":null}"#);
}

#[test]
fn stored_unicode_escape_is_emitted_verbatim() {
    let v = parse(r#"["\u0041\u00e9"]"#).unwrap();
    assert_eq!(stringify(&v), r#"["\u0041\u00e9"]"#);
}

#[test]
fn end_to_end_document() {
    let input = r#"{"a":1,"b":[true,null,"x"]}"#;
    assert_eq!(stringify(&parse(input).unwrap()), input);
}

#[test]
fn display_matches_stringify() {
    let v = parse(r#"[1,"two",{"three":3.5}]"#).unwrap();
    assert_eq!(format!("{v}"), stringify(&v));
}

#[test]
fn write_to_streams_same_text() {
    let v = parse(r#"{"k":[1,2,3]}"#).unwrap();
    let mut buf = Vec::new();
    write_to(&v, &mut buf).unwrap();
    assert_eq!(String::from_utf8(buf).unwrap(), stringify(&v));
}
