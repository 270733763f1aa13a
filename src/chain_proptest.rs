#![cfg(test)]

// Property tests for Chain kept inside the crate so they can inspect the
// sentinel links directly.

use crate::chain::Chain;
use crate::error::Error;
use proptest::prelude::*;
use std::collections::VecDeque;
use std::rc::Rc;

// Operations index into a pool of handles; several pool slots hold equal
// content so identity and equality diverge.
#[derive(Clone, Debug)]
enum Op {
    Append(usize),
    Remove(usize),
    Contains(usize),
    PopFront,
    PopBack,
    Clear,
}

fn arb_ops(pool: usize) -> impl Strategy<Value = Vec<Op>> {
    let op = prop_oneof![
        4 => (0..pool).prop_map(Op::Append),
        3 => (0..pool).prop_map(Op::Remove),
        2 => (0..pool).prop_map(Op::Contains),
        1 => Just(Op::PopFront),
        1 => Just(Op::PopBack),
        1 => Just(Op::Clear),
    ];
    proptest::collection::vec(op, 1..80)
}

fn position(model: &VecDeque<Rc<i32>>, h: &Rc<i32>) -> Option<usize> {
    model.iter().position(|x| Rc::ptr_eq(x, h))
}

// Property: state-machine equivalence against a VecDeque of handles.
// Invariants exercised after every step:
// - `len` equals appends minus successful removals.
// - Head/tail sentinels are directly linked iff the chain is empty.
// - Forward and backward iteration match the model order by identity.
// - `first`/`last` agree with the model ends, or report `Empty`.
proptest! {
    #![proptest_config(ProptestConfig { cases: 128, .. ProptestConfig::default() })]
    #[test]
    fn prop_chain_matches_model(ops in arb_ops(6)) {
        // Slots 0..3 and 3..6 hold equal values pairwise.
        let pool: Vec<Rc<i32>> = (0..6).map(|i| Rc::new(i % 3)).collect();
        let mut sut: Chain<i32> = Chain::new(0);
        let mut model: VecDeque<Rc<i32>> = VecDeque::new();
        let mut appended = 0usize;
        let mut removed = 0usize;

        for op in ops {
            match op {
                Op::Append(i) => {
                    sut.append(pool[i].clone());
                    model.push_back(pool[i].clone());
                    appended += 1;
                }
                Op::Remove(i) => {
                    let expect = position(&model, &pool[i]);
                    let did = sut.remove(&pool[i]);
                    prop_assert_eq!(did, expect.is_some());
                    if let Some(p) = expect {
                        model.remove(p);
                        removed += 1;
                    }
                }
                Op::Contains(i) => {
                    prop_assert_eq!(sut.contains(&pool[i]), position(&model, &pool[i]).is_some());
                }
                Op::PopFront => {
                    let got = sut.pop_front();
                    let want = model.pop_front();
                    prop_assert_eq!(got.is_some(), want.is_some());
                    if let (Some(g), Some(w)) = (got, want) {
                        prop_assert!(Rc::ptr_eq(&g, &w));
                        removed += 1;
                    }
                }
                Op::PopBack => {
                    let got = sut.pop_back();
                    let want = model.pop_back();
                    prop_assert_eq!(got.is_some(), want.is_some());
                    if let (Some(g), Some(w)) = (got, want) {
                        prop_assert!(Rc::ptr_eq(&g, &w));
                        removed += 1;
                    }
                }
                Op::Clear => {
                    removed += model.len();
                    model.clear();
                    sut.clear();
                }
            }

            prop_assert_eq!(sut.len(), appended - removed);
            prop_assert_eq!(sut.len(), model.len());
            prop_assert!(sut.is_consistent());

            let head_next = sut.node(sut.head()).and_then(|n| n.next());
            let tail_prev = sut.node(sut.tail()).and_then(|n| n.prev());
            let linked = head_next == Some(sut.tail()) && tail_prev == Some(sut.head());
            prop_assert_eq!(linked, sut.is_empty());

            prop_assert!(sut.iter().zip(model.iter()).all(|(a, b)| Rc::ptr_eq(a, b)));
            prop_assert!(sut.iter().rev().zip(model.iter().rev()).all(|(a, b)| Rc::ptr_eq(a, b)));
            prop_assert_eq!(sut.iter().count(), model.len());

            match model.front() {
                Some(w) => prop_assert!(Rc::ptr_eq(sut.first().unwrap(), w)),
                None => prop_assert_eq!(sut.first().err(), Some(Error::Empty)),
            }
            match model.back() {
                Some(w) => prop_assert!(Rc::ptr_eq(sut.last().unwrap(), w)),
                None => prop_assert_eq!(sut.last().err(), Some(Error::Empty)),
            }
        }

        // The chain holds one handle per element and nothing else.
        drop(model);
        let held: usize = pool.iter().map(|h| Rc::strong_count(h) - 1).sum();
        prop_assert_eq!(held, sut.len());
    }
}
