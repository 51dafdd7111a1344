
use crate::util::{init_tracing, map::stress_sequential};
use ordmap::{Entry, OrderedMap, Value};

fn entries(pairs: &[(&str, i64)]) -> Vec<Entry<i64>> {
    pairs
        .iter()
        .map(|&(key, value)| Entry::new(key, value))
        .collect()
}

#[test]
fn test_set_keeps_first_insertion_order() {
    let mut map: OrderedMap<i64> = OrderedMap::new();

    map.set("c", 1).set("a", 2).set("b", 3);
    map.set("a", 20).set("c", 10);

    assert_eq!(map.get_keys(), vec!["c", "a", "b"]);
    assert_eq!(map.to_list(), entries(&[("c", 10), ("a", 20), ("b", 3)]));
    assert_eq!(map.len(), 3);
}

#[test]
fn test_construct_with_duplicates() {
    let map = OrderedMap::from_pairs(vec![("a", 1), ("b", 2), ("a", 3)]);

    assert_eq!(map.len(), 2);
    assert_eq!(map.to_list(), entries(&[("a", 3), ("b", 2)]));

    let empty = OrderedMap::<i64>::from_pairs(Vec::<(String, i64)>::new());
    assert!(empty.is_empty());
    assert_eq!(empty.get_keys(), Vec::<&str>::new());
}

#[test]
fn test_get_and_exists() {
    let mut map: OrderedMap<i64> = OrderedMap::from([("x", 1)]);

    assert_eq!(map.get("x"), Some(&1));
    assert_eq!(map.get("y"), None);
    assert!(map.exists("x"));
    assert!(!map.exists("y"));

    *map.get_mut("x").unwrap() += 41;
    assert_eq!(map.get("x"), Some(&42));
    assert_eq!(map.get_mut("y"), None);
}

#[test]
fn test_delete() {
    let mut map: OrderedMap<i64> = OrderedMap::from([("a", 1), ("b", 2), ("c", 3)]);

    map.delete("b");
    assert!(!map.exists("b"));
    assert_eq!(map.get("b"), None);
    assert_eq!(map.len(), 2);
    assert_eq!(map.get_keys(), vec!["a", "c"]);

    // absent and already deleted keys are no-ops
    map.delete("b");
    map.delete("zzz");
    assert_eq!(map.len(), 2);
    assert_eq!(map.to_list(), entries(&[("a", 1), ("c", 3)]));

    assert_eq!(map.remove("a"), Some(1));
    assert_eq!(map.remove("a"), None);
}

#[test]
fn test_reinsert_after_delete_goes_to_end() {
    let mut map: OrderedMap<i64> = OrderedMap::from([("a", 1), ("b", 2), ("c", 3)]);

    map.delete("a");
    map.set("a", 4);

    assert_eq!(map.get_keys(), vec!["b", "c", "a"]);
    assert_eq!(map.get("a"), Some(&4));
}

#[test]
fn test_keys_restartable() {
    let map: OrderedMap<i64> = OrderedMap::from([("a", 1), ("b", 2)]);

    let first: Vec<_> = map.keys().collect();
    let second: Vec<_> = map.keys().collect();
    assert_eq!(first, second);
    assert_eq!(map.keys().len(), 2);
}

#[test]
fn test_append_without_overwrite() {
    init_tracing();

    let mut map: OrderedMap<i64> = OrderedMap::from([("a", 1), ("b", 2)]);
    let other: OrderedMap<i64> = OrderedMap::from([("c", 30), ("b", 20), ("d", 40)]);

    map.append(&other, false);

    assert_eq!(
        map.to_list(),
        entries(&[("a", 1), ("b", 2), ("c", 30), ("d", 40)])
    );
    // other is untouched
    assert_eq!(other.get_keys(), vec!["c", "b", "d"]);
}

#[test]
fn test_append_with_overwrite() {
    init_tracing();

    let mut map: OrderedMap<i64> = OrderedMap::from([("a", 1), ("b", 2)]);
    let mut other: OrderedMap<i64> = OrderedMap::from([("c", 30), ("b", 20), ("a", 10)]);
    other.delete("c");

    map.append(&other, true).set("e", 5);

    assert_eq!(map.to_list(), entries(&[("a", 10), ("b", 20), ("e", 5)]));
}

#[test]
fn test_len_counts_live_keys() {
    let mut map: OrderedMap<i64> = OrderedMap::new();

    for i in 0..100 {
        map.set(format!("k{}", i), i);
    }
    for i in 0..100 {
        map.set(format!("k{}", i), -i);
    }
    assert_eq!(map.len(), 100);

    for i in (0..100).filter(|i| i % 2 == 0) {
        map.delete(&format!("k{}", i));
    }
    assert_eq!(map.len(), 50);
    assert_eq!(map.tombstones(), 50);

    map.compact();
    assert_eq!(map.len(), 50);
    assert_eq!(map.keys().next(), Some("k1"));

    map.clear();
    assert!(map.is_empty());
    assert_eq!(map.tombstones(), 0);
}

#[test]
fn test_scenario() {
    let mut map: OrderedMap = OrderedMap::from([("x", Value::Int(1)), ("y", Value::Int(2))]);

    map.set("x", 3.into());
    map.delete("y");
    map.set("z", 4.into());

    let list = map.to_list();
    assert_eq!(list.len(), 2);
    assert_eq!(list[0].key, "x");
    assert_eq!(list[0].value.as_i64(), Some(3));
    assert_eq!(list[1].key, "z");
    assert_eq!(list[1].value.as_i64(), Some(4));

    assert_eq!(map.to_json().unwrap(), r#"{"x":3,"z":4}"#);
}

#[test]
fn test_iterators_and_extend() {
    let mut map: OrderedMap<i64> = vec![("a", 1), ("b", 2)].into_iter().collect();
    map.extend(vec![("c".to_string(), 3), ("a".to_string(), 100)]);

    let borrowed: Vec<(&str, &i64)> = (&map).into_iter().collect();
    assert_eq!(borrowed, vec![("a", &100), ("b", &2), ("c", &3)]);

    let owned: Vec<(String, i64)> = map.into_iter().collect();
    assert_eq!(owned[2], ("c".to_string(), 3));
}

#[test]
fn stress_ordered_map() {
    stress_sequential::<OrderedMap<u64>>(100_000);
}
