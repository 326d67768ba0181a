/// Property-based tests over random trees.
///
/// Generated trees are serialized, re-parsed, and compared structurally. The container
/// operations are checked against the size and position rules they promise.
///
/// Strings are stored with their escapes verbatim, so a tree only re-parses to an equal
/// tree when its strings are already in stored form: every `"` and `\` belongs to a
/// complete escape sequence. Arbitrary strings are still checked for a stable canonical
/// text.
///
/// Doubles whose fractional part lies within the integer tolerance of zero are not
/// generated: they classify as integers and print without their fraction.
use jsontree_core::{parse, stringify, Map, Value};
use proptest::prelude::*;

// ============================================================================
// Strategies
// ============================================================================

/// Strings as the parser stores them.
fn arb_string() -> BoxedStrategy<String> {
    prop_oneof![
        "[a-zA-Z0-9 ]{0,20}",
        // Plain characters, escape pairs, and `\u` with any four characters.
        prop::string::string_regex(r#"([^"\\]|\\[^u]|\\u.{4}){0,10}"#).unwrap(),
    ]
    .boxed()
}

/// Any text at all, including unpaired quotes and backslashes.
fn arb_raw_string() -> BoxedStrategy<String> {
    prop_oneof![
        any::<String>(),
        prop::string::string_regex(r#"([a-z"\\]|\\u[0-9a-fA-F]{0,4}){0,10}"#).unwrap(),
    ]
    .boxed()
}

fn arb_double() -> impl Strategy<Value = f64> {
    (-1.0e12..1.0e12f64).prop_filter("fraction must be visible", |f| f.fract().abs() >= 1e-6)
}

fn arb_scalar_with(strings: BoxedStrategy<String>) -> BoxedStrategy<Value> {
    prop_oneof![
        Just(Value::Null),
        any::<bool>().prop_map(Value::Bool),
        any::<i64>().prop_map(Value::int),
        arb_double().prop_map(Value::number),
        strings.prop_map(Value::String),
    ]
    .boxed()
}

fn arb_tree_with(strings: BoxedStrategy<String>) -> impl Strategy<Value = Value> {
    arb_scalar_with(strings.clone()).prop_recursive(4, 64, 6, move |inner| {
        prop_oneof![
            prop::collection::vec(inner.clone(), 0..6).prop_map(Value::Array),
            prop::collection::vec((strings.clone(), inner), 0..6)
                .prop_map(|pairs| Value::Object(pairs.into_iter().collect::<Map>())),
        ]
    })
}

fn arb_scalar() -> BoxedStrategy<Value> {
    arb_scalar_with(arb_string())
}

fn arb_value() -> impl Strategy<Value = Value> {
    arb_tree_with(arb_string())
}

fn arb_raw_value() -> impl Strategy<Value = Value> {
    arb_tree_with(arb_raw_string())
}

// ============================================================================
// Properties
// ============================================================================

proptest! {
    #![proptest_config(ProptestConfig::with_cases(500))]

    /// A serialized tree parses back to an equal tree.
    #[test]
    fn roundtrip_preserves_tree(value in arb_value()) {
        let text = stringify(&value);
        let reparsed = parse(&text).unwrap();
        prop_assert_eq!(&reparsed, &value, "text: {}", text);
    }

    /// Serialized output is a fixed point of parse → stringify, whatever the strings hold.
    #[test]
    fn canonical_text_is_stable(value in arb_raw_value()) {
        let once = stringify(&value);
        let twice = stringify(&parse(&once).unwrap());
        prop_assert_eq!(once, twice);
    }

    /// Appending grows the array by one and the new element is last.
    #[test]
    fn append_lands_last(items in prop::collection::vec(arb_scalar(), 0..10), extra in arb_scalar()) {
        let mut arr = Value::Array(items);
        let before = arr.size();
        arr.arr_append(extra.clone()).unwrap();
        prop_assert_eq!(arr.size(), before + 1);
        prop_assert_eq!(arr.get_arr_at(before).unwrap(), &extra);
    }

    /// Removing index `i` shifts every later element down by one.
    #[test]
    fn remove_shifts_down(items in prop::collection::vec(arb_scalar(), 1..10), pick in any::<prop::sample::Index>()) {
        let i = pick.index(items.len());
        let mut arr = Value::Array(items.clone());
        arr.arr_remove_at(i).unwrap();
        prop_assert_eq!(arr.size(), items.len() - 1);
        for j in i..arr.size() {
            prop_assert_eq!(arr.get_arr_at(j).unwrap(), &items[j + 1]);
        }
    }

    /// Setting a key makes it readable and never disturbs the other keys' order.
    #[test]
    fn set_then_get(value in arb_value(), key in arb_string(), entry in arb_scalar()) {
        let mut obj = Value::object();
        if let Value::Object(map) = &value {
            for (k, v) in map.iter() {
                obj.set_obj_at(k, v.clone()).unwrap();
            }
        }
        let existed = obj.as_object().unwrap().contains_key(&key);
        let before = obj.size();
        obj.set_obj_at(key.clone(), entry.clone()).unwrap();
        prop_assert_eq!(obj.get_obj_at(&key).unwrap(), &entry);
        prop_assert_eq!(obj.size(), if existed { before } else { before + 1 });
    }

    /// Removing a key drops exactly that pair.
    #[test]
    fn remove_drops_one_pair(pairs in prop::collection::vec((arb_string(), arb_scalar()), 1..8), pick in any::<prop::sample::Index>()) {
        let map: Map = pairs.into_iter().collect();
        let keys: Vec<String> = map.keys().map(str::to_string).collect();
        let victim = keys[pick.index(keys.len())].clone();
        let mut obj = Value::Object(map);
        obj.obj_remove_at(&victim).unwrap();
        let remaining: Vec<String> = obj.as_object().unwrap().keys().map(str::to_string).collect();
        let expected: Vec<String> = keys.into_iter().filter(|k| *k != victim).collect();
        prop_assert_eq!(remaining, expected);
    }

    /// Arbitrary text never panics the parser.
    #[test]
    fn parser_never_panics(input in any::<String>()) {
        let _ = parse(&input);
    }
}
