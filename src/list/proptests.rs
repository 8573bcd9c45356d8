use super::List;
use proptest::prelude::*;
use proptest::test_runner::Config;
use proptest_state_machine::{ReferenceStateMachine, StateMachineTest};

proptest_state_machine::prop_state_machine! {
    #![proptest_config(Config {
        // Shrunk sequences are reported inline; no regression file.
        failure_persistence: None,
        .. Config::default()
    })]

    #[test]
    fn list_behaves_like_vec(sequential 50..300 => List<u32>);
}

/// The possible transitions of the state machine.
///
/// Index and range arguments are generated as free integers and reduced
/// modulo the current length on application, identically on the model and
/// on the list, so every generated transition is applicable to any state.
#[derive(Clone, Debug)]
pub enum Transition {
    PushFront(u32),
    PushBack(u32),
    PopFront,
    PopBack,
    Insert(usize, u32),
    Remove(usize),
    SplitOff(usize),
    SpliceAt(usize, Vec<u32>),
    Drain(usize, usize),
    Assign(Vec<u32>),
    Sort,
    Reverse,
    Dedup,
    Clear,
}

/// Reduce a free position to a valid one, `0..=len`.
fn position(raw: usize, len: usize) -> usize {
    raw % (len + 1)
}

/// Reduce a free pair to a valid index range within `0..=len`.
fn range(raw_start: usize, raw_len: usize, len: usize) -> (usize, usize) {
    let start = raw_start % (len + 1);
    let end = start + raw_len % (len - start + 1);
    (start, end)
}

pub struct ListStateMachine;

impl ReferenceStateMachine for ListStateMachine {
    type State = Vec<u32>;
    type Transition = Transition;

    fn init_state() -> BoxedStrategy<Self::State> {
        Just(Vec::new()).boxed()
    }

    fn transitions(_state: &Self::State) -> BoxedStrategy<Self::Transition> {
        let items = proptest::collection::vec(any::<u32>(), 0..8);
        prop_oneof![
            3 => any::<u32>().prop_map(Transition::PushFront),
            3 => any::<u32>().prop_map(Transition::PushBack),
            2 => Just(Transition::PopFront),
            2 => Just(Transition::PopBack),
            2 => (any::<usize>(), any::<u32>()).prop_map(|(at, v)| Transition::Insert(at, v)),
            2 => any::<usize>().prop_map(Transition::Remove),
            1 => any::<usize>().prop_map(Transition::SplitOff),
            1 => (any::<usize>(), items.clone()).prop_map(|(at, vs)| Transition::SpliceAt(at, vs)),
            1 => (any::<usize>(), any::<usize>()).prop_map(|(a, b)| Transition::Drain(a, b)),
            1 => items.prop_map(Transition::Assign),
            1 => Just(Transition::Sort),
            1 => Just(Transition::Reverse),
            1 => Just(Transition::Dedup),
            1 => Just(Transition::Clear),
        ]
        .boxed()
    }

    fn apply(mut state: Self::State, transition: &Self::Transition) -> Self::State {
        match transition {
            Transition::PushFront(value) => state.insert(0, *value),
            Transition::PushBack(value) => state.push(*value),
            Transition::PopFront => {
                if !state.is_empty() {
                    state.remove(0);
                }
            }
            Transition::PopBack => {
                state.pop();
            }
            Transition::Insert(at, value) => {
                let at = position(*at, state.len());
                state.insert(at, *value);
            }
            Transition::Remove(at) => {
                if !state.is_empty() {
                    let at = *at % state.len();
                    state.remove(at);
                }
            }
            Transition::SplitOff(at) => {
                let at = position(*at, state.len());
                state.truncate(at);
            }
            Transition::SpliceAt(at, items) => {
                let at = position(*at, state.len());
                state.splice(at..at, items.iter().copied());
            }
            Transition::Drain(a, b) => {
                let (start, end) = range(*a, *b, state.len());
                state.drain(start..end);
            }
            Transition::Assign(items) => {
                state.clear();
                state.extend(items.iter().copied());
            }
            Transition::Sort => state.sort(),
            Transition::Reverse => state.reverse(),
            Transition::Dedup => state.dedup(),
            Transition::Clear => state.clear(),
        }
        state
    }
}

impl StateMachineTest for List<u32> {
    type SystemUnderTest = Self;
    type Reference = ListStateMachine;

    fn init_test(
        _ref_state: &<Self::Reference as ReferenceStateMachine>::State,
    ) -> Self::SystemUnderTest {
        List::new()
    }

    fn apply(
        mut state: Self::SystemUnderTest,
        _ref_state: &<Self::Reference as ReferenceStateMachine>::State,
        transition: Transition,
    ) -> Self::SystemUnderTest {
        match transition {
            Transition::PushFront(value) => state.push_front(value),
            Transition::PushBack(value) => state.push_back(value),
            Transition::PopFront => {
                state.pop_front();
            }
            Transition::PopBack => {
                state.pop_back();
            }
            Transition::Insert(at, value) => {
                let at = position(at, state.len());
                state.insert(at, value);
            }
            Transition::Remove(at) => {
                if !state.is_empty() {
                    let at = at % state.len();
                    state.remove(at);
                }
            }
            Transition::SplitOff(at) => {
                let at = position(at, state.len());
                drop(state.split_off(at));
            }
            Transition::SpliceAt(at, items) => {
                let at = position(at, state.len());
                state.splice_at(at, List::from_iter(items));
            }
            Transition::Drain(a, b) => {
                let (start, end) = range(a, b, state.len());
                state.drain(start..end);
            }
            Transition::Assign(items) => state.assign(items),
            Transition::Sort => state.sort(),
            Transition::Reverse => state.reverse(),
            Transition::Dedup => state.dedup(),
            Transition::Clear => state.clear(),
        }
        state
    }

    fn check_invariants(
        state: &Self::SystemUnderTest,
        ref_state: &<Self::Reference as ReferenceStateMachine>::State,
    ) {
        assert_eq!(state.len(), ref_state.len());
        assert!(state.iter().eq(ref_state.iter()));
        // the chain must read the same backwards
        assert!(state.iter().rev().eq(ref_state.iter().rev()));
    }
}

proptest! {
    #[test]
    fn sort_matches_vec(values in proptest::collection::vec(any::<i32>(), 0..64)) {
        let mut list = List::from_iter(values.iter().copied());
        let mut expected = values;
        list.sort();
        expected.sort();
        prop_assert_eq!(list.into_vec(), expected);
    }

    #[test]
    fn merge_of_sorted_inputs_is_sorted(
        a in proptest::collection::vec(any::<i32>(), 0..32),
        b in proptest::collection::vec(any::<i32>(), 0..32),
    ) {
        let (mut a, mut b) = (a, b);
        a.sort();
        b.sort();
        let mut list = List::from_iter(a.iter().copied());
        let mut other = List::from_iter(b.iter().copied());
        list.merge(&mut other);
        prop_assert!(other.is_empty());

        let mut expected = a;
        expected.extend(b);
        expected.sort();
        prop_assert_eq!(list.into_vec(), expected);
    }

    #[test]
    fn reverse_is_an_involution(values in proptest::collection::vec(any::<i32>(), 0..32)) {
        let mut list = List::from_iter(values.iter().copied());
        list.reverse();
        prop_assert!(list.iter().eq(values.iter().rev()));
        list.reverse();
        prop_assert_eq!(list.into_vec(), values);
    }

    #[test]
    fn dedup_matches_vec(values in proptest::collection::vec(0u8..4, 0..32)) {
        let mut list = List::from_iter(values.iter().copied());
        let mut expected = values;
        list.dedup();
        expected.dedup();
        prop_assert_eq!(list.into_vec(), expected);
    }
}
