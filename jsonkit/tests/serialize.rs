use std::collections::{BTreeMap, BTreeSet, LinkedList, VecDeque};

use indexmap::IndexMap;
use jsonkit::{to_string, to_string_pretty, Serialize, Stack};
use time::macros::datetime;

#[derive(Serialize, Debug, PartialEq)]
struct Person {
    name: String,
    age: i32,
    #[jsonkit(skip)]
    session_token: String,
}

#[derive(Serialize, Debug, PartialEq)]
enum Priority {
    Zero,
    One,
    Two,
}

#[derive(Serialize, Debug, PartialEq)]
enum StatusCode {
    Ok = 200,
    NotFound = 404,
    ServerError = 500,
}

#[test]
fn simple_types_serialize_to_their_literal_text() {
    assert_eq!(to_string(&(-128i8)).unwrap(), "-128");
    assert_eq!(to_string(&255u8).unwrap(), "255");

    assert_eq!(to_string(&(-32768i16)).unwrap(), "-32768");
    assert_eq!(to_string(&65535u16).unwrap(), "65535");

    assert_eq!(to_string(&(-2147483648i32)).unwrap(), "-2147483648");
    assert_eq!(to_string(&4294967295u32).unwrap(), "4294967295");

    assert_eq!(to_string(&i64::MIN).unwrap(), "-9223372036854775808");
    assert_eq!(to_string(&u64::MAX).unwrap(), "18446744073709551615");

    assert_eq!(to_string(&(-3.14f32)).unwrap(), "-3.14");
    assert_eq!(to_string(&3.14f64).unwrap(), "3.14");

    assert_eq!(
        to_string(&"This is \"Special\" string.").unwrap(),
        "\"This is \\\"Special\\\" string.\""
    );
    assert_eq!(to_string(&'A').unwrap(), "\"A\"");
    assert_eq!(to_string(&true).unwrap(), "true");
    assert_eq!(to_string(&false).unwrap(), "false");
}

#[test]
fn float_specials_serialize_as_quoted_sentinels() {
    assert_eq!(to_string(&f64::NAN).unwrap(), "\"NaN\"");
    assert_eq!(to_string(&f64::INFINITY).unwrap(), "\"Infinity\"");
    assert_eq!(to_string(&f64::NEG_INFINITY).unwrap(), "\"-Infinity\"");
    assert_eq!(to_string(&f32::NAN).unwrap(), "\"NaN\"");
    assert_eq!(to_string(&f32::INFINITY).unwrap(), "\"Infinity\"");
    assert_eq!(to_string(&f32::NEG_INFINITY).unwrap(), "\"-Infinity\"");
}

#[test]
fn enums_serialize_as_ordinals() {
    assert_eq!(to_string(&Priority::Zero).unwrap(), "0");
    assert_eq!(to_string(&Priority::One).unwrap(), "1");
    assert_eq!(to_string(&Priority::Two).unwrap(), "2");
    assert_eq!(to_string(&StatusCode::Ok).unwrap(), "200");
    assert_eq!(to_string(&StatusCode::NotFound).unwrap(), "404");
    assert_eq!(to_string(&StatusCode::ServerError).unwrap(), "500");
}

#[test]
fn moments_serialize_with_millisecond_precision() {
    assert_eq!(
        to_string(&datetime!(2025-03-05 11:18:32.512)).unwrap(),
        "\"2025-03-05T11:18:32.512\""
    );
    assert_eq!(
        to_string(&datetime!(2001-01-01 0:00)).unwrap(),
        "\"2001-01-01T00:00:00.000\""
    );
}

#[test]
fn durations_serialize_in_canonical_form() {
    let long = time::Duration::days(5)
        + time::Duration::hours(11)
        + time::Duration::minutes(18)
        + time::Duration::seconds(32)
        + time::Duration::milliseconds(512);

    assert_eq!(to_string(&long).unwrap(), "\"5.11:18:32.5120000\"");

    let short =
        time::Duration::hours(1) + time::Duration::minutes(2) + time::Duration::seconds(3);

    assert_eq!(to_string(&short).unwrap(), "\"01:02:03\"");
    assert_eq!(to_string(&(-short)).unwrap(), "\"-01:02:03\"");
}

#[test]
fn structs_serialize_in_declaration_order_without_excluded_fields() {
    let person = Person {
        name: "John".to_string(),
        age: 100,
        session_token: "Some value".to_string(),
    };

    assert_eq!(
        to_string(&person).unwrap(),
        "{\"name\":\"John\",\"age\":100}"
    );
}

#[test]
fn sequences_serialize_in_iteration_order() {
    let expected = "[0,64,128,255]";

    assert_eq!(to_string(&[0u8, 64, 128, 255]).unwrap(), expected);
    assert_eq!(to_string(&vec![0u8, 64, 128, 255]).unwrap(), expected);
    assert_eq!(
        to_string(&vec![0u8, 64, 128, 255].into_boxed_slice()).unwrap(),
        expected
    );
    assert_eq!(
        to_string(&LinkedList::from([0u8, 64, 128, 255])).unwrap(),
        expected
    );
    assert_eq!(
        to_string(&BTreeSet::from([0u8, 64, 128, 255])).unwrap(),
        expected
    );

    let mut queue = VecDeque::new();

    queue.push_back(0u8);
    queue.push_back(64);
    queue.push_back(128);
    queue.push_back(255);

    assert_eq!(to_string(&queue).unwrap(), expected);
}

#[test]
fn stacks_serialize_top_first() {
    let mut stack = Stack::new();

    stack.push(0u8);
    stack.push(64);
    stack.push(128);
    stack.push(255);

    assert_eq!(to_string(&stack).unwrap(), "[255,128,64,0]");
}

#[test]
fn maps_serialize_in_their_own_iteration_order() {
    let dictionary = IndexMap::from([
        ("One".to_string(), 1),
        ("Two".to_string(), 2),
        ("Three".to_string(), 3),
    ]);

    assert_eq!(
        to_string(&dictionary).unwrap(),
        "{\"One\":1,\"Two\":2,\"Three\":3}"
    );

    // Sorted maps iterate by key; non-string keys stringify
    let by_ordinal = BTreeMap::from([(2, "b".to_string()), (1, "a".to_string())]);

    assert_eq!(to_string(&by_ordinal).unwrap(), "{\"1\":\"a\",\"2\":\"b\"}");
}

#[test]
fn tuples_serialize_as_item_objects() {
    assert_eq!(
        to_string(&(1, "Two", 3.14f32)).unwrap(),
        "{\"Item1\":1,\"Item2\":\"Two\",\"Item3\":3.14}"
    );
}

#[test]
fn options_serialize_as_value_or_null() {
    assert_eq!(to_string(&Some(5)).unwrap(), "5");
    assert_eq!(to_string(&None::<i32>).unwrap(), "null");
}

#[test]
fn indented_output_uses_two_spaces_and_crlf() {
    let person = Person {
        name: "John".to_string(),
        age: 100,
        session_token: String::new(),
    };

    assert_eq!(
        to_string_pretty(&person).unwrap(),
        "{\r\n  \"name\": \"John\",\r\n  \"age\": 100\r\n}"
    );

    assert_eq!(
        to_string_pretty(&vec![1, 2]).unwrap(),
        "[\r\n  1,\r\n  2\r\n]"
    );
}

#[test]
fn nested_members_are_never_reordered() {
    #[derive(Serialize)]
    struct Wrapper {
        zebra: u8,
        apple: Vec<u8>,
        mango: Person,
    }

    let wrapper = Wrapper {
        zebra: 1,
        apple: vec![2, 3],
        mango: Person {
            name: "J".to_string(),
            age: 4,
            session_token: String::new(),
        },
    };

    assert_eq!(
        to_string(&wrapper).unwrap(),
        "{\"zebra\":1,\"apple\":[2,3],\"mango\":{\"name\":\"J\",\"age\":4}}"
    );
}

#[test]
fn renamed_fields_use_the_wire_name() {
    #[derive(Serialize)]
    struct Renamed {
        #[jsonkit(rename = "Name")]
        name: String,
    }

    let renamed = Renamed {
        name: "John".to_string(),
    };

    assert_eq!(to_string(&renamed).unwrap(), "{\"Name\":\"John\"}");
}
