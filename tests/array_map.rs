use std::mem;

use arraymap::{ArrayKey, ArrayMap, Error};
use proptest::prelude::*;

/// The number of operations to perform in each proptest case.
const TEST_SIZE: usize = 1_000;

/// Keys are drawn from a small pool so operation sequences collide often.
fn key_strategy() -> impl Strategy<Value = ArrayKey> {
    prop_oneof![
        (-20i64..20).prop_map(ArrayKey::Int),
        prop::sample::select(vec![
            "alpha", "beta", "gamma", "delta", "epsilon", "zeta", "eta", "theta",
        ])
        .prop_map(ArrayKey::from),
    ]
}

fn value_strategy() -> impl Strategy<Value = i64> {
    -1_000i64..1_000
}

// ─── Naive oracle: a linear-scan pair list with the documented semantics ─────

/// The obviously-correct model: every operation is a linear scan over an
/// ordered pair list.
#[derive(Debug, Default)]
struct ModelMap {
    entries: Vec<(ArrayKey, i64)>,
}

impl ModelMap {
    fn position(&self, key: &ArrayKey) -> Option<usize> {
        self.entries.iter().position(|(k, _)| k == key)
    }

    fn insert(&mut self, key: ArrayKey, value: i64) -> Option<i64> {
        match self.position(&key) {
            Some(pos) => Some(mem::replace(&mut self.entries[pos].1, value)),
            None => {
                self.entries.push((key, value));
                None
            }
        }
    }

    fn remove(&mut self, key: &ArrayKey) -> Option<i64> {
        self.position(key).map(|pos| self.entries.remove(pos).1)
    }

    fn remove_value(&mut self, value: i64) -> bool {
        match self.entries.iter().position(|(_, v)| *v == value) {
            Some(pos) => {
                self.entries.remove(pos);
                true
            }
            None => false,
        }
    }

    fn get(&self, key: &ArrayKey) -> Option<i64> {
        self.position(key).map(|pos| self.entries[pos].1)
    }

    fn key_of(&self, value: i64) -> Option<ArrayKey> {
        self.entries.iter().find(|(_, v)| *v == value).map(|(k, _)| k.clone())
    }

    fn is_list(&self) -> bool {
        self.entries
            .iter()
            .enumerate()
            .all(|(pos, (key, _))| *key == ArrayKey::Int(pos as i64))
    }

    fn push(&mut self, value: i64) -> bool {
        if !self.is_list() {
            return false;
        }
        let key = ArrayKey::Int(self.entries.len() as i64);
        self.entries.push((key, value));
        true
    }

    fn pop_first(&mut self) -> Option<(ArrayKey, i64)> {
        if self.entries.is_empty() {
            None
        } else {
            Some(self.entries.remove(0))
        }
    }

    fn pop_last(&mut self) -> Option<(ArrayKey, i64)> {
        self.entries.pop()
    }

    fn sort(&mut self) {
        self.entries.sort_by(|a, b| a.1.cmp(&b.1));
    }

    fn pairs(&self) -> Vec<(ArrayKey, i64)> {
        self.entries.clone()
    }
}

// ─── Operations enum for driving randomized tests ────────────────────────────

#[derive(Debug, Clone)]
enum MapOp {
    Insert(ArrayKey, i64),
    Remove(ArrayKey),
    RemoveValue(i64),
    Push(i64),
    Get(ArrayKey),
    ContainsKey(ArrayKey),
    ContainsValue(i64),
    KeyOf(i64),
    FirstLast,
    PopFirst,
    PopLast,
    IsList,
    Sort,
    Clear,
}

fn map_op_strategy() -> impl Strategy<Value = MapOp> {
    prop_oneof![
        6 => (key_strategy(), value_strategy()).prop_map(|(k, v)| MapOp::Insert(k, v)),
        3 => key_strategy().prop_map(MapOp::Remove),
        1 => value_strategy().prop_map(MapOp::RemoveValue),
        2 => value_strategy().prop_map(MapOp::Push),
        2 => key_strategy().prop_map(MapOp::Get),
        1 => key_strategy().prop_map(MapOp::ContainsKey),
        1 => value_strategy().prop_map(MapOp::ContainsValue),
        1 => value_strategy().prop_map(MapOp::KeyOf),
        1 => Just(MapOp::FirstLast),
        1 => Just(MapOp::PopFirst),
        1 => Just(MapOp::PopLast),
        1 => Just(MapOp::IsList),
        1 => Just(MapOp::Sort),
        1 => Just(MapOp::Clear),
    ]
}

fn observed_pairs(map: &ArrayMap<i64>) -> Vec<(ArrayKey, i64)> {
    map.iter().map(|(k, &v)| (k.clone(), v)).collect()
}

// ─── Core CRUD operations ────────────────────────────────────────────────────

proptest! {
    #![proptest_config(ProptestConfig::with_cases(32))]

    /// Replays a random operation sequence on both ArrayMap and the naive
    /// model and asserts identical results at every step.
    #[test]
    fn map_ops_match_model(ops in proptest::collection::vec(map_op_strategy(), TEST_SIZE)) {
        let mut map: ArrayMap<i64> = ArrayMap::new();
        let mut model = ModelMap::default();

        for op in &ops {
            match op {
                MapOp::Insert(k, v) => {
                    let got = map.insert(k.clone(), *v);
                    let expected = model.insert(k.clone(), *v);
                    prop_assert_eq!(got, expected, "insert({}, {})", k, v);
                }
                MapOp::Remove(k) => {
                    let got = map.remove(k.clone());
                    let expected = model.remove(k);
                    prop_assert_eq!(got, expected, "remove({})", k);
                }
                MapOp::RemoveValue(v) => {
                    let got = map.remove_value(v);
                    let expected = model.remove_value(*v);
                    prop_assert_eq!(got, expected, "remove_value({})", v);
                }
                MapOp::Push(v) => {
                    let got = map.push(*v);
                    let expected = model.push(*v);
                    match (got, expected) {
                        (Ok(_), true) | (Err(Error::NotAList), false) => {}
                        (got, expected) => {
                            prop_assert!(false, "push({}) mismatch: {:?} vs ok={}", v, got.map(|_| ()), expected);
                        }
                    }
                }
                MapOp::Get(k) => {
                    prop_assert_eq!(map.get(k.clone()).copied(), model.get(k), "get({})", k);
                    match map.try_get(k.clone()) {
                        Ok(&v) => prop_assert_eq!(Some(v), model.get(k), "try_get({})", k),
                        Err(Error::KeyNotFound(missing)) => {
                            prop_assert_eq!(&missing, k, "try_get({}) error key", k);
                            prop_assert_eq!(model.get(k), None, "try_get({}) spurious error", k);
                        }
                        Err(other) => prop_assert!(false, "try_get({}) unexpected error {:?}", k, other),
                    }
                }
                MapOp::ContainsKey(k) => {
                    prop_assert_eq!(map.contains_key(k.clone()), model.get(k).is_some(), "contains_key({})", k);
                }
                MapOp::ContainsValue(v) => {
                    prop_assert_eq!(map.contains_value(v), model.key_of(*v).is_some(), "contains_value({})", v);
                }
                MapOp::KeyOf(v) => {
                    prop_assert_eq!(map.key_of(v).cloned(), model.key_of(*v), "key_of({})", v);
                }
                MapOp::FirstLast => {
                    let pairs = model.pairs();
                    prop_assert_eq!(map.first().copied(), pairs.first().map(|(_, v)| *v), "first");
                    prop_assert_eq!(map.last().copied(), pairs.last().map(|(_, v)| *v), "last");
                    prop_assert_eq!(map.first_key().cloned(), pairs.first().map(|(k, _)| k.clone()), "first_key");
                    prop_assert_eq!(map.last_key().cloned(), pairs.last().map(|(k, _)| k.clone()), "last_key");
                }
                MapOp::PopFirst => {
                    prop_assert_eq!(map.pop_first(), model.pop_first(), "pop_first");
                }
                MapOp::PopLast => {
                    prop_assert_eq!(map.pop_last(), model.pop_last(), "pop_last");
                }
                MapOp::IsList => {
                    prop_assert_eq!(map.is_list(), model.is_list(), "is_list");
                }
                MapOp::Sort => {
                    map.sort();
                    model.sort();
                }
                MapOp::Clear => {
                    map.clear();
                    model.entries.clear();
                    prop_assert!(map.is_empty());
                }
            }
            prop_assert_eq!(map.len(), model.entries.len(), "len mismatch after {:?}", op);
            prop_assert_eq!(map.is_empty(), model.entries.is_empty(), "is_empty mismatch after {:?}", op);
        }

        prop_assert_eq!(observed_pairs(&map), model.pairs(), "final iteration mismatch");
    }

    /// Iteration order matches the model, forward, reversed, split by keys
    /// and values, and by ownership.
    #[test]
    fn iter_matches_model(entries in proptest::collection::vec((key_strategy(), value_strategy()), TEST_SIZE)) {
        let mut map: ArrayMap<i64> = ArrayMap::new();
        let mut model = ModelMap::default();
        for (k, v) in &entries {
            map.insert(k.clone(), *v);
            model.insert(k.clone(), *v);
        }
        let pairs = model.pairs();

        prop_assert_eq!(observed_pairs(&map), pairs.clone(), "iter() mismatch");

        let rev: Vec<_> = map.iter().rev().map(|(k, &v)| (k.clone(), v)).collect();
        let mut expected_rev = pairs.clone();
        expected_rev.reverse();
        prop_assert_eq!(rev, expected_rev, "iter().rev() mismatch");

        let keys: Vec<_> = map.keys().cloned().collect();
        let expected_keys: Vec<_> = pairs.iter().map(|(k, _)| k.clone()).collect();
        prop_assert_eq!(keys, expected_keys.clone(), "keys() mismatch");

        let values: Vec<_> = map.values().copied().collect();
        let expected_values: Vec<_> = pairs.iter().map(|(_, v)| *v).collect();
        prop_assert_eq!(values, expected_values.clone(), "values() mismatch");

        let into: Vec<_> = map.clone().into_iter().collect();
        prop_assert_eq!(into, pairs.clone(), "into_iter() mismatch");

        let into_keys: Vec<_> = map.clone().into_keys().collect();
        prop_assert_eq!(into_keys, expected_keys, "into_keys() mismatch");

        let into_values: Vec<_> = map.clone().into_values().collect();
        prop_assert_eq!(into_values, expected_values, "into_values() mismatch");

        // Restartable: two passes with no mutation in between are identical.
        prop_assert_eq!(observed_pairs(&map), observed_pairs(&map), "iteration is not restartable");

        // Export matches iteration.
        let exported: Vec<_> = map.clone().into_entries();
        prop_assert_eq!(exported, pairs, "into_entries() mismatch");
    }

    /// ExactSizeIterator and DoubleEndedIterator cooperate: alternating
    /// front/back traversal visits every entry exactly once.
    #[test]
    fn iter_size_and_double_ended(entries in proptest::collection::vec((key_strategy(), value_strategy()), 1..TEST_SIZE)) {
        let map: ArrayMap<i64> = entries.iter().cloned().collect();

        prop_assert_eq!(map.iter().len(), map.len(), "ExactSizeIterator len mismatch");

        let mut seen = Vec::new();
        let mut iter = map.iter();
        let mut toggle = true;
        loop {
            let item = if toggle { iter.next() } else { iter.next_back() };
            match item {
                Some((k, _)) => seen.push(k.clone()),
                None => break,
            }
            toggle = !toggle;
        }
        prop_assert_eq!(seen.len(), map.len(), "double-ended traversal count mismatch");
        seen.sort();
        seen.dedup();
        prop_assert_eq!(seen.len(), map.len(), "double-ended traversal repeated a key");
    }

    /// FromIterator over pairs keeps the first position and last value for
    /// duplicate keys, matching `insert` in a loop.
    #[test]
    fn from_iter_matches_insert_loop(entries in proptest::collection::vec((key_strategy(), value_strategy()), TEST_SIZE)) {
        let collected: ArrayMap<i64> = entries.iter().cloned().collect();
        let mut looped: ArrayMap<i64> = ArrayMap::new();
        for (k, v) in &entries {
            looped.insert(k.clone(), *v);
        }
        prop_assert_eq!(observed_pairs(&collected), observed_pairs(&looped));
    }

    /// retain keeps exactly the approved entries, in order, with keys intact.
    #[test]
    fn retain_matches_filter(entries in proptest::collection::vec((key_strategy(), value_strategy()), TEST_SIZE)) {
        let mut map: ArrayMap<i64> = entries.iter().cloned().collect();
        let derived = map.filter(|_, v| v % 3 != 0);
        map.retain(|_, v| *v % 3 != 0);

        prop_assert_eq!(observed_pairs(&map), observed_pairs(&derived), "retain/filter disagree");
        prop_assert!(map.values().all(|v| v % 3 != 0));
    }
}

// ─── Derivation: value-semantics copies ──────────────────────────────────────

proptest! {
    #![proptest_config(ProptestConfig::with_cases(32))]

    /// filter preserves original keys and drops everything the predicate
    /// rejects; the source map is untouched.
    #[test]
    fn filter_preserves_keys(entries in proptest::collection::vec((key_strategy(), value_strategy()), TEST_SIZE)) {
        let map: ArrayMap<i64> = entries.iter().cloned().collect();
        let before = observed_pairs(&map);

        let even = map.filter(|_, v| v % 2 == 0);

        let expected: Vec<_> = before.iter().filter(|(_, v)| v % 2 == 0).cloned().collect();
        prop_assert_eq!(observed_pairs(&even), expected, "filter() mismatch");
        prop_assert_eq!(observed_pairs(&map), before, "filter() mutated the source");

        for (k, v) in even.iter() {
            prop_assert_eq!(map.get(k), Some(v), "filtered entry lost its key");
        }
    }

    /// map keeps keys and order while transforming every value.
    #[test]
    fn map_keeps_keys(entries in proptest::collection::vec((key_strategy(), value_strategy()), TEST_SIZE)) {
        let map: ArrayMap<i64> = entries.iter().cloned().collect();
        let doubled = map.map(|_, v| v * 2);

        prop_assert_eq!(map.len(), doubled.len());
        for ((k1, v), (k2, d)) in map.iter().zip(doubled.iter()) {
            prop_assert_eq!(k1, k2, "map() reordered keys");
            prop_assert_eq!(v * 2, *d, "map() wrong value");
        }
    }

    /// fold is a left fold over values in insertion order.
    #[test]
    fn fold_matches_values(entries in proptest::collection::vec((key_strategy(), value_strategy()), TEST_SIZE)) {
        let map: ArrayMap<i64> = entries.iter().cloned().collect();

        let folded = map.fold(Vec::new(), |mut acc, v| {
            acc.push(*v);
            acc
        });
        let values: Vec<_> = map.values().copied().collect();
        prop_assert_eq!(folded, values);

        let sum = map.fold(0i64, |acc, v| acc.wrapping_add(*v));
        let expected: i64 = map.values().fold(0i64, |acc, v| acc.wrapping_add(*v));
        prop_assert_eq!(sum, expected);
    }

    /// find/any/all agree with iterator equivalents.
    #[test]
    fn predicates_match_iterators(
        entries in proptest::collection::vec((key_strategy(), value_strategy()), TEST_SIZE),
        threshold in value_strategy(),
    ) {
        let map: ArrayMap<i64> = entries.iter().cloned().collect();

        prop_assert_eq!(
            map.find(|v| *v > threshold),
            map.values().find(|v| **v > threshold),
            "find mismatch"
        );
        prop_assert_eq!(
            map.any(|_, v| *v > threshold),
            map.values().any(|v| *v > threshold),
            "any mismatch"
        );
        prop_assert_eq!(
            map.all(|_, v| *v > threshold),
            map.values().all(|v| *v > threshold),
            "all mismatch"
        );
    }

    /// sort orders values, keeps every key attached to its value, and is
    /// observable through lookups afterward.
    #[test]
    fn sort_preserves_association(entries in proptest::collection::vec((key_strategy(), value_strategy()), TEST_SIZE)) {
        let mut map: ArrayMap<i64> = entries.iter().cloned().collect();
        let before: Vec<_> = observed_pairs(&map);

        map.sort();

        let values: Vec<_> = map.values().copied().collect();
        prop_assert!(values.windows(2).all(|w| w[0] <= w[1]), "values not sorted");
        prop_assert_eq!(map.len(), before.len());
        for (k, v) in &before {
            prop_assert_eq!(map.get(k.clone()), Some(v), "sort broke key association");
        }
    }

    /// sorted/sorted_by never mutate the receiver.
    #[test]
    fn sorted_leaves_source_untouched(entries in proptest::collection::vec((key_strategy(), value_strategy()), TEST_SIZE)) {
        let map: ArrayMap<i64> = entries.iter().cloned().collect();
        let before = observed_pairs(&map);

        let ascending = map.sorted();
        let descending = map.sorted_by(|a, b| b.cmp(a));

        prop_assert_eq!(observed_pairs(&map), before, "sorted() mutated the source");

        let asc: Vec<_> = ascending.values().copied().collect();
        prop_assert!(asc.windows(2).all(|w| w[0] <= w[1]));
        let desc: Vec<_> = descending.values().copied().collect();
        prop_assert!(desc.windows(2).all(|w| w[0] >= w[1]));
    }

    /// Derived maps are independent copies: mutating the source afterward
    /// does not leak into them, and vice versa.
    #[test]
    fn derived_maps_are_independent(entries in proptest::collection::vec((key_strategy(), value_strategy()), 1..TEST_SIZE)) {
        let mut map: ArrayMap<i64> = entries.iter().cloned().collect();
        let mut derived = map.filter(|_, _| true);
        let snapshot = observed_pairs(&map);

        map.insert("sentinel-key", 777);
        for (_, v) in map.iter_mut() {
            *v = v.wrapping_add(1);
        }
        prop_assert_eq!(observed_pairs(&derived), snapshot, "mutating source leaked into derived");

        derived.clear();
        prop_assert!(map.len() > 0, "clearing derived leaked into source");
    }

    /// to_keys/to_values re-index from zero and preserve order.
    #[test]
    fn to_keys_to_values_reindex(entries in proptest::collection::vec((key_strategy(), value_strategy()), TEST_SIZE)) {
        let map: ArrayMap<i64> = entries.iter().cloned().collect();

        let keys = map.to_keys();
        let values = map.to_values();

        prop_assert!(keys.is_list());
        prop_assert!(values.is_list());
        prop_assert_eq!(keys.len(), map.len());
        prop_assert_eq!(values.len(), map.len());

        for (pos, (k, v)) in map.iter().enumerate() {
            let pos = pos as i64;
            prop_assert_eq!(keys.get(pos), Some(k), "to_keys out of order");
            prop_assert_eq!(values.get(pos), Some(v), "to_values out of order");
        }
    }
}

// ─── Lists and the push gate ─────────────────────────────────────────────────

proptest! {
    #![proptest_config(ProptestConfig::with_cases(32))]

    /// from_values always builds a list, and pushes extend it one key past
    /// the end.
    #[test]
    fn from_values_builds_a_list(values in proptest::collection::vec(value_strategy(), 0..200)) {
        let mut map = ArrayMap::from_values(values.clone());

        prop_assert!(map.is_list());
        prop_assert_eq!(map.len(), values.len());
        for (pos, v) in values.iter().enumerate() {
            prop_assert_eq!(map.get(pos as i64), Some(v));
        }

        map.push(41).unwrap();
        prop_assert!(map.is_list());
        prop_assert_eq!(map.get(values.len() as i64), Some(&41));
        prop_assert_eq!(map.last(), Some(&41));
    }

    /// The push gate: any map holding a string key (or an out-of-place
    /// integer key) rejects push and stays unchanged.
    #[test]
    fn push_rejects_keyed_maps(
        values in proptest::collection::vec(value_strategy(), 0..50),
        key in "[a-z]{1,8}",
        v in value_strategy(),
    ) {
        let mut map = ArrayMap::from_values(values);
        map.set(key.as_str(), v);

        let before = observed_pairs(&map);
        prop_assert_eq!(map.push(v).unwrap_err(), Error::NotAList);
        prop_assert_eq!(map.push_all([1, 2, 3]).unwrap_err(), Error::NotAList);
        prop_assert_eq!(observed_pairs(&map), before, "failed push mutated the map");
    }

    /// Entry API matches plain insert/get semantics.
    #[test]
    fn entry_api_matches_model(
        initial in proptest::collection::vec((key_strategy(), value_strategy()), TEST_SIZE / 2),
        probes in proptest::collection::vec(key_strategy(), TEST_SIZE / 2),
    ) {
        let mut map: ArrayMap<i64> = initial.iter().cloned().collect();
        let mut model = ModelMap::default();
        for (k, v) in &initial {
            model.insert(k.clone(), *v);
        }

        for k in &probes {
            *map.entry(k.clone()).or_insert(0) += 1;
            let bumped = model.get(k).unwrap_or(0) + 1;
            model.insert(k.clone(), bumped);
        }

        prop_assert_eq!(observed_pairs(&map), model.pairs(), "entry or_insert mismatch");
    }

    /// Order-sensitive equality and hashing: equal op histories agree, and
    /// reordering entries breaks equality.
    #[test]
    fn eq_is_order_sensitive(entries in proptest::collection::vec((key_strategy(), value_strategy()), 2..100)) {
        let a: ArrayMap<i64> = entries.iter().cloned().collect();
        let b: ArrayMap<i64> = entries.iter().cloned().collect();
        prop_assert_eq!(&a, &b);

        use std::hash::{BuildHasher, RandomState};
        let s = RandomState::new();
        prop_assert_eq!(s.hash_one(&a), s.hash_one(&b), "equal maps must hash alike");

        if a.len() >= 2 {
            let mut swapped: Vec<_> = a.clone().into_entries();
            swapped.swap(0, 1);
            let c: ArrayMap<i64> = swapped.into_iter().collect();
            prop_assert_ne!(&a, &c, "order must be observable in equality");
        }
    }
}
