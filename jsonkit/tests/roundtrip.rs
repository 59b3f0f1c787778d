use std::collections::BTreeMap;

use jsonkit::core::{stage_sequence, ContainerKind, Value};
use jsonkit::{from_str, to_string, to_string_pretty, Deserialize, Serialize, Stack};

#[derive(Serialize, Deserialize, Debug, PartialEq)]
enum Rarity {
    Common,
    Rare,
    Legendary = 10,
}

#[derive(Serialize, Deserialize, Debug, PartialEq)]
struct Item {
    id: u64,
    label: String,
    rarity: Rarity,
    weight: f64,
    tags: Vec<String>,
}

#[derive(Serialize, Deserialize, Debug, PartialEq)]
struct Inventory {
    owner: String,
    position: (f64, f64),
    items: Vec<Item>,
    capacity_by_slot: BTreeMap<String, u32>,
    bound_to: Option<Box<Item>>,
}

fn sample_inventory() -> Inventory {
    Inventory {
        owner: "John".to_string(),
        position: (-12.5, 40.0),
        items: vec![
            Item {
                id: 1,
                label: "Sword".to_string(),
                rarity: Rarity::Rare,
                weight: 3.5,
                tags: vec!["weapon".to_string(), "steel".to_string()],
            },
            Item {
                id: 2,
                label: "Apple".to_string(),
                rarity: Rarity::Common,
                weight: 0.1,
                tags: Vec::new(),
            },
        ],
        capacity_by_slot: BTreeMap::from([("belt".to_string(), 4), ("bag".to_string(), 20)]),
        bound_to: None,
    }
}

#[test]
fn nested_structures_round_trip() {
    let inventory = sample_inventory();
    let json = to_string(&inventory).unwrap();
    let restored: Inventory = from_str(&json).unwrap();

    assert_eq!(restored, inventory);
}

#[test]
fn indented_output_round_trips_too() {
    let inventory = sample_inventory();
    let json = to_string_pretty(&inventory).unwrap();
    let restored: Inventory = from_str(&json).unwrap();

    assert_eq!(restored, inventory);
}

#[test]
fn boundary_integers_round_trip() {
    for value in [i64::MIN, -1, 0, i64::MAX] {
        let json = to_string(&value).unwrap();

        assert_eq!(from_str::<i64>(&json).unwrap(), value);
    }

    for value in [0, 1, u64::MAX] {
        let json = to_string(&value).unwrap();

        assert_eq!(from_str::<u64>(&json).unwrap(), value);
    }

    let json = to_string(&u128::MAX).unwrap();

    assert_eq!(from_str::<u128>(&json).unwrap(), u128::MAX);

    let json = to_string(&i128::MIN).unwrap();

    assert_eq!(from_str::<i128>(&json).unwrap(), i128::MIN);
}

#[test]
fn floats_round_trip_exactly() {
    for value in [0.1f64, -3.14, 1.0e300, 5e-324, f64::MAX, f64::MIN] {
        let json = to_string(&value).unwrap();

        assert_eq!(from_str::<f64>(&json).unwrap(), value);
    }

    for value in [0.1f32, -3.14, f32::MAX, f32::MIN] {
        let json = to_string(&value).unwrap();

        assert_eq!(from_str::<f32>(&json).unwrap(), value);
    }

    let json = to_string(&f64::NAN).unwrap();

    assert!(from_str::<f64>(&json).unwrap().is_nan());

    let json = to_string(&f64::INFINITY).unwrap();

    assert_eq!(from_str::<f64>(&json).unwrap(), f64::INFINITY);
}

#[test]
fn stacks_round_trip_preserving_drain_order() {
    let mut stack = Stack::new();

    stack.push(0u8);
    stack.push(64);
    stack.push(128);
    stack.push(255);

    let json = to_string(&stack).unwrap();

    assert_eq!(json, "[255,128,64,0]");

    let mut restored: Stack<u8> = from_str(&json).unwrap();

    assert_eq!(restored, stack);
    assert_eq!(restored.pop(), Some(255));
    assert_eq!(restored.pop(), Some(128));
    assert_eq!(restored.pop(), Some(64));
    assert_eq!(restored.pop(), Some(0));
}

#[test]
fn moments_and_durations_round_trip() {
    let moment = time::macros::datetime!(2025-03-05 11:18:32.512);
    let json = to_string(&moment).unwrap();

    assert_eq!(from_str::<time::PrimitiveDateTime>(&json).unwrap(), moment);

    let duration = time::Duration::days(5)
        + time::Duration::hours(11)
        + time::Duration::minutes(18)
        + time::Duration::seconds(32)
        + time::Duration::milliseconds(512);
    let json = to_string(&duration).unwrap();

    assert_eq!(from_str::<time::Duration>(&json).unwrap(), duration);
}

#[test]
fn value_trees_round_trip_verbatim() {
    let text = "{\"a\":[1,true,null,\"x\"],\"b\":{\"c\":-2.5}}";
    let value: Value = from_str(text).unwrap();

    assert_eq!(to_string(&value).unwrap(), text);
}

// A downstream sequence type plugs into the reconstruction rules by
// declaring its kind and staging through the shared routine.
#[derive(Debug, PartialEq)]
struct Bag<T> {
    items: Vec<T>,
}

impl<T: jsonkit::Serialize> jsonkit::Serialize for Bag<T> {
    fn serialize(&self) -> jsonkit::core::Result<Value> {
        jsonkit::core::serialize_sequence(self.items.iter())
    }
}

impl<T: jsonkit::Deserialize> jsonkit::Deserialize for Bag<T> {
    fn deserialize(value: Value) -> jsonkit::core::Result<Self> {
        let items = stage_sequence(value, ContainerKind::GrowableCollection)?;

        Ok(Self { items })
    }
}

#[test]
fn downstream_containers_reuse_the_staging_rules() {
    let bag = Bag {
        items: vec![1, 2, 3],
    };
    let json = to_string(&bag).unwrap();

    assert_eq!(json, "[1,2,3]");
    assert_eq!(from_str::<Bag<i32>>(&json).unwrap(), bag);
}

#[test]
fn raw_identifiers_lose_their_prefix_on_the_wire() {
    #[derive(Serialize, Deserialize, Debug, PartialEq)]
    struct Tagged {
        r#type: String,
        count: u32,
    }

    let tagged = Tagged {
        r#type: "fruit".to_string(),
        count: 3,
    };
    let json = to_string(&tagged).unwrap();

    assert_eq!(json, "{\"type\":\"fruit\",\"count\":3}");
    assert_eq!(from_str::<Tagged>(&json).unwrap(), tagged);
}

#[test]
fn tuple_structs_travel_as_item_objects() {
    #[derive(Serialize, Deserialize, Debug, PartialEq)]
    struct Pair(i32, String);

    let pair = Pair(1, "Two".to_string());
    let json = to_string(&pair).unwrap();

    assert_eq!(json, "{\"Item1\":1,\"Item2\":\"Two\"}");
    assert_eq!(from_str::<Pair>(&json).unwrap(), pair);
}

#[test]
fn unit_structs_travel_as_empty_objects() {
    #[derive(Serialize, Deserialize, Debug, PartialEq)]
    struct Marker;

    let json = to_string(&Marker).unwrap();

    assert_eq!(json, "{}");
    assert_eq!(from_str::<Marker>(&json).unwrap(), Marker);
}
