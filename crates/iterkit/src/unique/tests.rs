use super::*;
use crate::ext::IterKitExt;
use std::cell::Cell;

#[test]
fn integers_first_and_repeat() {
    let out: Vec<(i32, bool)> = is_unique_everseen(vec![1, 2, 1, 3, 2, 2]).collect();
    assert_eq!(
        out,
        vec![
            (1, true),
            (2, true),
            (1, false),
            (3, true),
            (2, false),
            (2, false),
        ]
    );
}

#[test]
fn empty_input_yields_nothing() {
    assert_eq!(is_unique_everseen(Vec::<u8>::new()).count(), 0);
}

#[test]
fn lists_compare_by_content() {
    let input: Vec<Value> = vec![
        vec![1i64].into(),
        vec![2i64].into(),
        vec![1i64].into(),
        vec![1i64].into(),
    ];
    let mut it = is_unique_everseen(input);
    let flags: Vec<bool> = it.by_ref().map(|(_, first)| first).collect();
    assert_eq!(flags, [true, true, false, false]);
    assert_eq!(it.seen().scanned_len(), 2);
    assert_eq!(it.seen().hashed_len(), 0);
}

#[test]
fn mixed_hashability_routes_per_element() {
    let input = vec![
        Value::Int(1),
        Value::List(vec![Value::Int(1)]),
        Value::Tuple(vec![Value::Int(1)]),
        Value::Tuple(vec![Value::List(vec![])]),
        Value::Int(1),
        Value::Tuple(vec![Value::List(vec![])]),
        Value::List(vec![Value::Int(1)]),
        Value::Str("1".into()),
    ];
    let mut it = is_unique_everseen(input.clone());
    let out: Vec<(Value, bool)> = it.by_ref().collect();
    let elements: Vec<Value> = out.iter().map(|(v, _)| v.clone()).collect();
    assert_eq!(elements, input);
    let flags: Vec<bool> = out.iter().map(|(_, f)| *f).collect();
    assert_eq!(flags, [true, true, true, true, false, false, false, true]);
    // Int(1), Tuple([Int]), Str -> hashed; List, Tuple([List]) -> scanned
    assert_eq!(it.seen().hashed_len(), 3);
    assert_eq!(it.seen().scanned_len(), 2);
}

#[test]
fn tuple_hashability_found_during_attempt() {
    assert!(Value::Tuple(vec![Value::Int(1), Value::Str("a".into())]).is_hashable());
    assert!(!Value::Tuple(vec![Value::Int(1), Value::List(vec![])]).is_hashable());
    assert!(!Value::List(vec![]).is_hashable());
}

#[test]
fn signed_zero_floats_are_one_key() {
    let flags: Vec<bool> = is_unique_everseen(vec![Value::Float(0.0), Value::Float(-0.0)])
        .map(|(_, f)| f)
        .collect();
    assert_eq!(flags, [true, false]);
}

#[test]
fn nan_is_never_a_duplicate() {
    let flags: Vec<bool> = is_unique_everseen(vec![Value::Float(f64::NAN), Value::Float(f64::NAN)])
        .map(|(_, f)| f)
        .collect();
    assert_eq!(flags, [true, true]);
}

#[test]
fn key_function_groups_elements() {
    let words = ["apple", "avocado", "banana", "blueberry", "cherry"];
    let flags: Vec<(&str, bool)> = words
        .iter()
        .copied()
        .is_unique_everseen_by_key(|w| w.chars().next())
        .collect();
    assert_eq!(
        flags,
        [
            ("apple", true),
            ("avocado", false),
            ("banana", true),
            ("blueberry", false),
            ("cherry", true),
        ]
    );
}

#[test]
fn key_may_be_unhashable() {
    let rows = vec![(1, "a"), (2, "b"), (1, "c")];
    let flags: Vec<bool> = is_unique_everseen_by_key(rows, |(n, _)| Value::List(vec![Value::Int(*n)]))
        .map(|(_, f)| f)
        .collect();
    assert_eq!(flags, [true, true, false]);
}

#[test]
fn classifies_before_pulling_the_next_element() {
    let pulled = Cell::new(0usize);
    let source = (0..).map(|i| {
        pulled.set(pulled.get() + 1);
        i % 3
    });
    let mut it = is_unique_everseen(source);
    assert_eq!(it.next(), Some((0, true)));
    assert_eq!(pulled.get(), 1);
    assert_eq!(it.next(), Some((1, true)));
    assert_eq!(it.next(), Some((2, true)));
    assert_eq!(it.next(), Some((0, false)));
    assert_eq!(pulled.get(), 4);
}

#[test]
fn exact_size_forwarded() {
    let it = is_unique_everseen(vec![1, 1, 2]);
    assert_eq!(it.len(), 3);
}

#[test]
fn seen_contains_and_len() {
    let mut seen: Seen<Value> = Seen::with_cfg(SeenCfg { capacity: 8 });
    assert!(seen.is_empty());
    assert!(seen.insert(Value::Int(4)));
    assert!(seen.insert(Value::List(vec![Value::Int(4)])));
    assert!(!seen.insert(Value::Int(4)));
    assert!(seen.contains(&Value::List(vec![Value::Int(4)])));
    assert!(!seen.contains(&Value::Int(5)));
    assert_eq!(seen.len(), 2);
}

#[test]
fn no_duplicates_passes_then_fails_once() {
    let out: Vec<Result<i32, StreamError>> = no_duplicates(vec![1, 2, 3, 2, 4], "id").collect();
    assert_eq!(
        out,
        vec![
            Ok(1),
            Ok(2),
            Ok(3),
            Err(StreamError::Duplicate {
                name: "id".into(),
                element: "2".into(),
            }),
        ]
    );
    let err = out[3].clone().unwrap_err();
    assert_eq!(err.to_string(), "duplicate id: 2");
}

#[test]
fn no_duplicates_clean_input_collects() {
    let collected: Result<Vec<&str>, StreamError> =
        vec!["a", "b", "c"].into_iter().no_duplicates("item").collect();
    assert_eq!(collected.unwrap(), ["a", "b", "c"]);
}

#[test]
fn no_duplicates_by_key_reports_element() {
    let res: Result<Vec<(u8, char)>, StreamError> =
        no_duplicates_by_key(vec![(1, 'x'), (2, 'y'), (1, 'z')], |p| p.0, "pair").collect();
    assert_eq!(
        res.unwrap_err(),
        StreamError::Duplicate {
            name: "pair".into(),
            element: "(1, 'z')".into(),
        }
    );
}

/// Equality ignores `hashable`; hashing fails when it is false.
#[derive(Clone, Debug)]
struct Flaky {
    v: i32,
    hashable: bool,
}

impl PartialEq for Flaky {
    fn eq(&self, other: &Self) -> bool {
        self.v == other.v
    }
}

impl TryHash for Flaky {
    fn try_hash<H: std::hash::Hasher>(&self, state: &mut H) -> Result<(), Unhashable> {
        if !self.hashable {
            return Err(Unhashable);
        }
        state.write_i32(self.v);
        Ok(())
    }
}

#[test]
fn duplicates_match_across_stores() {
    let input = vec![
        Flaky { v: 1, hashable: true },
        Flaky { v: 1, hashable: false },
        Flaky { v: 2, hashable: false },
        Flaky { v: 2, hashable: true },
    ];
    let mut it = is_unique_everseen(input);
    let flags: Vec<bool> = it.by_ref().map(|(_, f)| f).collect();
    assert_eq!(flags, [true, false, true, false]);
    assert_eq!(it.seen().hashed_len(), 1);
    assert_eq!(it.seen().scanned_len(), 1);
    assert!(it.seen().contains(&Flaky { v: 2, hashable: true }));
    assert!(it.seen().contains(&Flaky { v: 1, hashable: false }));
}

#[test]
fn gate_stays_closed_after_first_duplicate() {
    let mut gate = DuplicateGate::new();
    assert_eq!(gate.admit(1), Admit::First);
    assert_eq!(gate.admit(1), Admit::Duplicate);
    assert!(gate.is_closed());
    assert_eq!(gate.admit(2), Admit::Closed);
}

#[test]
fn no_duplicates_ends_for_good_after_error() {
    let mut it = no_duplicates(vec![1, 1, 2], "item");
    assert_eq!(it.next(), Some(Ok(1)));
    assert!(matches!(it.next(), Some(Err(StreamError::Duplicate { .. }))));
    assert_eq!(it.next(), None);
    assert_eq!(it.next(), None);
    assert_eq!(it.size_hint(), (0, Some(0)));
}
