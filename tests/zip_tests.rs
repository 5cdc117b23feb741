//! Zip tests: pairing, shortest-wins, argument checks, failure passthrough.


use pullseq::{collect, values, zip, Cursor, Error, Sequence, SequenceExt, Values};
use test_sources::failing_at;

fn add(x: i32, y: i32) -> i32 {
    x + y
}

#[test]
fn pairs_elementwise() {
    let first = values(vec![1, 2, 3]);
    let second = values(vec![2, 5, 9]);

    let zipped = first.zip(second, add);
    assert_eq!(collect(&zipped).unwrap(), vec![3, 7, 12]);
}

#[test]
fn absent_first_fails_on_first_pull() {
    let second = values(vec![2, 5, 9]);

    let zipped = zip(None::<Values<i32>>, Some(second), Some(add));
    let err = collect(&zipped).unwrap_err();
    assert!(matches!(err, Error::ArgumentNull("first")));
}

#[test]
fn absent_second_fails_on_first_pull() {
    let first = values(vec![1, 2, 3]);

    let zipped = zip(Some(first), None::<Values<i32>>, Some(add));
    let err = collect(&zipped).unwrap_err();
    assert!(matches!(err, Error::ArgumentNull("second")));
}

#[test]
fn absent_combine_fails_on_first_pull() {
    let first = values(vec![1, 2, 3]);
    let second = values(vec![2, 4, 6]);

    let zipped = zip(Some(first), Some(second), None::<fn(i32, i32) -> i32>);
    let err = collect(&zipped).unwrap_err();
    assert!(matches!(err, Error::ArgumentNull("combine")));
}

#[test]
fn failure_in_first_surfaces_after_valid_prefix() {
    // Faults when asked for its second element: one pair comes out first.
    let first = failing_at(vec![1, 2, 3], 1);
    let second = values(vec![2, 4, 6]);

    let zipped = first.zip(second, add);
    let mut cursor = zipped.open();

    let mut seen = Vec::new();
    let err = loop {
        match cursor.next() {
            Ok(Some(pair)) => seen.push(pair),
            Ok(None) => panic!("expected the fault to surface"),
            Err(e) => break e,
        }
    };
    assert_eq!(seen, vec![3]);
    assert!(matches!(err, Error::Source(_)));

    // Faulted enumeration is over; the cursor now reports exhausted.
    assert_eq!(cursor.next().unwrap(), None);
}

#[test]
fn failure_in_second_surfaces_after_valid_prefix() {
    let first = values(vec![1, 2, 3]);
    let second = failing_at(vec![2, 4, 6], 2);

    let zipped = first.zip(second, add);
    let mut cursor = zipped.open();

    let mut seen = Vec::new();
    let err = loop {
        match cursor.next() {
            Ok(Some(pair)) => seen.push(pair),
            Ok(None) => panic!("expected the fault to surface"),
            Err(e) => break e,
        }
    };
    assert_eq!(seen, vec![3, 6]);
    assert!(matches!(err, Error::Source(_)));
}

#[test]
fn non_faulting_prefix_of_failing_source_still_pairs() {
    // The failing source is long enough that pairing ends before the fault.
    let first = values(vec![2, 4, 6]);
    let second = failing_at(vec![1, 3, 3, 0], 3);

    let zipped = first.zip(second, add);
    assert_eq!(collect(&zipped).unwrap(), vec![3, 7, 9]);
}

#[test]
fn both_empty() {
    let zipped = values(Vec::<i32>::new()).zip(values(Vec::<i32>::new()), add);
    assert_eq!(collect(&zipped).unwrap(), Vec::<i32>::new());
}

#[test]
fn first_empty() {
    let zipped = values(Vec::<i32>::new()).zip(values(vec![2, 4, 8]), add);
    assert_eq!(collect(&zipped).unwrap(), Vec::<i32>::new());
}

#[test]
fn second_empty() {
    let zipped = values(vec![1, 2, 3]).zip(values(Vec::<i32>::new()), add);
    assert_eq!(collect(&zipped).unwrap(), Vec::<i32>::new());
}

#[test]
fn both_single() {
    let zipped = values(vec![1]).zip(values(vec![2]), add);
    assert_eq!(collect(&zipped).unwrap(), vec![3]);
}

#[test]
fn equal_lengths() {
    let zipped = values(vec![1, 2, 3]).zip(values(vec![2, 3, 4]), add);
    assert_eq!(collect(&zipped).unwrap(), vec![3, 5, 7]);
}

#[test]
fn second_longer_than_first() {
    let zipped = values(vec![1, 2]).zip(values(vec![2, 4, 8, 16]), add);
    assert_eq!(collect(&zipped).unwrap(), vec![3, 6]);
}

#[test]
fn first_longer_than_second() {
    let zipped = values(vec![1, 2, 3, 4]).zip(values(vec![2, 4]), add);
    assert_eq!(collect(&zipped).unwrap(), vec![3, 6]);
}

#[test]
fn same_inputs_with_a_different_combine() {
    let first = values(vec![1, 2, 3, 4]);
    let second = values(vec![2, 4, 8]);

    let sums = first.clone().zip(second.clone(), |x, y| x + y);
    assert_eq!(collect(&sums).unwrap(), vec![3, 6, 11]);

    let diffs = first.zip(second, |x, y| x - y);
    assert_eq!(collect(&diffs).unwrap(), vec![-1, -2, -5]);
}

#[test]
fn absent_elements_still_occupy_positions() {
    let first = values(vec![None, Some(2), Some(3), Some(4)]);
    let second = values(vec![2, 4, 8]);

    let zipped = first.zip(second, |x: Option<i32>, y| x.map(|v| v + y));
    assert_eq!(collect(&zipped).unwrap(), vec![None, Some(6), Some(11)]);
}

#[test]
fn absent_element_in_the_middle() {
    let first = values(vec![Some(1), None, Some(3)]);
    let second = values(vec![2, 4, 6, 8]);

    let zipped = first.zip(second, |x: Option<i32>, y| x.map(|v| v + y));
    assert_eq!(collect(&zipped).unwrap(), vec![Some(3), None, Some(9)]);
}

#[test]
fn both_sides_all_absent() {
    let first: Values<Option<i32>> = values(vec![None, None, None, None]);
    let second: Values<Option<i32>> = values(vec![None, None, None]);

    let zipped = first.zip(second, |x, y| match (x, y) {
        (Some(a), Some(b)) => Some(a + b),
        _ => None,
    });
    assert_eq!(collect(&zipped).unwrap(), vec![None, None, None]);
}

#[test]
fn zipped_sequence_is_reenumerable() {
    let zipped = values(vec![1, 2, 3]).zip(values(vec![10, 20, 30]), add);

    assert_eq!(collect(&zipped).unwrap(), vec![11, 22, 33]);
    assert_eq!(collect(&zipped).unwrap(), vec![11, 22, 33]);
}

#[test]
fn concurrent_enumerations_do_not_interfere() {
    let zipped = values(vec![1, 2, 3]).zip(values(vec![10, 20, 30]), add);

    let mut a = zipped.open();
    let mut b = zipped.open();

    assert_eq!(a.next().unwrap(), Some(11));
    assert_eq!(b.next().unwrap(), Some(11));
    assert_eq!(a.next().unwrap(), Some(22));
    assert_eq!(a.next().unwrap(), Some(33));
    assert_eq!(b.next().unwrap(), Some(22));
    assert_eq!(a.next().unwrap(), None);
    assert_eq!(b.next().unwrap(), Some(33));
}

#[test]
fn consumer_may_abandon_a_partial_enumeration() {
    let zipped = values(vec![1, 2, 3]).zip(values(vec![10, 20, 30]), add);

    let mut cursor = zipped.open();
    assert_eq!(cursor.next().unwrap(), Some(11));
    drop(cursor);

    // The sequence is untouched by the abandoned cursor.
    assert_eq!(collect(&zipped).unwrap(), vec![11, 22, 33]);
}
