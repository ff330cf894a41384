//! Randomized operation sequences checked against `std::collections::VecDeque`.

use std::collections::VecDeque;

use dual_deque::{
    ArrayDeque, Deque, LinkedDeque, INITIAL_CAPACITY, MIN_SHRINK_CAPACITY, SHRINK_DIVISOR,
};
use proptest::prelude::*;
use proptest::test_runner::TestCaseError;

#[derive(Clone, Debug)]
enum Op {
    AddFirst(i32),
    AddLast(i32),
    RemoveFirst,
    RemoveLast,
    Get(usize),
}

fn op() -> impl Strategy<Value = Op> {
    prop_oneof![
        3 => any::<i32>().prop_map(Op::AddFirst),
        3 => any::<i32>().prop_map(Op::AddLast),
        2 => Just(Op::RemoveFirst),
        2 => Just(Op::RemoveLast),
        2 => (0usize..160).prop_map(Op::Get),
    ]
}

/// Sequences that grow the deque first and then mostly shrink it.
fn grow_then_shrink() -> impl Strategy<Value = Vec<Op>> {
    let grow = prop::collection::vec(
        prop_oneof![
            any::<i32>().prop_map(Op::AddFirst),
            any::<i32>().prop_map(Op::AddLast),
        ],
        64..200,
    );
    let shrink = prop::collection::vec(
        prop_oneof![
            3 => Just(Op::RemoveFirst),
            3 => Just(Op::RemoveLast),
            1 => any::<i32>().prop_map(Op::AddLast),
            1 => (0usize..200).prop_map(Op::Get),
        ],
        64..400,
    );
    (grow, shrink).prop_map(|(mut grow, shrink)| {
        grow.extend(shrink);
        grow
    })
}

fn apply<D: Deque<i32>>(
    deque: &mut D,
    oracle: &mut VecDeque<i32>,
    op: &Op,
) -> Result<(), TestCaseError> {
    match *op {
        Op::AddFirst(x) => {
            deque.add_first(x);
            oracle.push_front(x);
        }
        Op::AddLast(x) => {
            deque.add_last(x);
            oracle.push_back(x);
        }
        Op::RemoveFirst => {
            prop_assert_eq!(deque.remove_first(), oracle.pop_front());
        }
        Op::RemoveLast => {
            prop_assert_eq!(deque.remove_last(), oracle.pop_back());
        }
        Op::Get(index) => {
            prop_assert_eq!(deque.get(index), oracle.get(index));
        }
    }
    prop_assert_eq!(deque.size(), oracle.len());
    prop_assert_eq!(deque.is_empty(), oracle.is_empty());
    Ok(())
}

fn assert_matches_oracle<D: Deque<i32> + Default>(ops: &[Op]) -> Result<(), TestCaseError> {
    let mut deque = D::default();
    let mut oracle = VecDeque::new();

    for op in ops {
        apply(&mut deque, &mut oracle, op)?;
    }

    for (i, elem) in oracle.iter().enumerate() {
        prop_assert_eq!(deque.get(i), Some(elem));
    }
    Ok(())
}

fn assert_capacity_policy(deque: &ArrayDeque<i32>) -> Result<(), TestCaseError> {
    let cap = deque.capacity();
    prop_assert!(cap >= deque.size());
    prop_assert!(cap >= INITIAL_CAPACITY);
    prop_assert!(cap.is_power_of_two());
    if deque.resize_stats().shrinks > 0 {
        prop_assert!(cap >= MIN_SHRINK_CAPACITY);
    }
    prop_assert!(cap <= MIN_SHRINK_CAPACITY || deque.size() * SHRINK_DIVISOR >= cap);
    Ok(())
}

proptest! {
    #[test]
    fn array_deque_matches_vec_deque(ops in prop::collection::vec(op(), 0..500)) {
        assert_matches_oracle::<ArrayDeque<i32>>(&ops)?;
    }

    #[test]
    fn linked_deque_matches_vec_deque(ops in prop::collection::vec(op(), 0..500)) {
        assert_matches_oracle::<LinkedDeque<i32>>(&ops)?;
    }

    #[test]
    fn array_deque_survives_grow_then_shrink(ops in grow_then_shrink()) {
        let mut deque = ArrayDeque::new();
        let mut oracle = VecDeque::new();

        for op in &ops {
            apply(&mut deque, &mut oracle, op)?;
            assert_capacity_policy(&deque)?;
        }
        prop_assert!(deque.iter().eq(oracle.iter()));
    }

    #[test]
    fn linked_deque_survives_grow_then_shrink(ops in grow_then_shrink()) {
        assert_matches_oracle::<LinkedDeque<i32>>(&ops)?;
    }

    #[test]
    fn get_recursive_matches_get(ops in prop::collection::vec(op(), 0..200)) {
        let mut deque = LinkedDeque::new();
        let mut oracle = VecDeque::new();

        for op in &ops {
            apply(&mut deque, &mut oracle, op)?;
            for index in 0..deque.size() + 2 {
                prop_assert_eq!(deque.get(index), deque.get_recursive(index));
            }
        }
    }

    #[test]
    fn size_counts_adds_minus_successful_removes(ops in prop::collection::vec(op(), 0..300)) {
        let mut array = ArrayDeque::new();
        let mut linked = LinkedDeque::new();
        let mut expected = 0usize;

        for op in &ops {
            match *op {
                Op::AddFirst(x) => {
                    array.add_first(x);
                    linked.add_first(x);
                    expected += 1;
                }
                Op::AddLast(x) => {
                    array.add_last(x);
                    linked.add_last(x);
                    expected += 1;
                }
                Op::RemoveFirst => {
                    let removed = array.remove_first();
                    prop_assert_eq!(removed, linked.remove_first());
                    expected -= usize::from(removed.is_some());
                }
                Op::RemoveLast => {
                    let removed = array.remove_last();
                    prop_assert_eq!(removed, linked.remove_last());
                    expected -= usize::from(removed.is_some());
                }
                Op::Get(_) => {}
            }
            prop_assert_eq!(array.size(), expected);
            prop_assert_eq!(linked.size(), expected);
        }
        prop_assert_eq!(&array, &linked);
    }

    #[test]
    fn add_last_then_remove_last_round_trips(
        prefix in prop::collection::vec(any::<i32>(), 0..40),
        x in any::<i32>(),
    ) {
        let mut array = ArrayDeque::from(prefix.clone());
        let mut linked = LinkedDeque::from(prefix.clone());

        array.add_last(x);
        linked.add_last(x);

        prop_assert_eq!(array.remove_last(), Some(x));
        prop_assert_eq!(linked.remove_last(), Some(x));
        prop_assert_eq!(&array, &prefix);
        prop_assert_eq!(&linked, &prefix);
    }
}
