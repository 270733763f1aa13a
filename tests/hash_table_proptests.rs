// HashTable property tests.
//
// Property 1: state-machine equivalence against a per-bucket model.
//  - Model: Vec of buckets, each a Vec of (key, value) handle pairs in
//    insertion order; bucket chosen with floor-mod of the integer key.
//  - Operations: add, delete by identity, find, delete-first, delete-last.
//  - Invariants after each step: per-bucket lengths match, first/last data
//    match the model's lowest/highest non-empty bucket ends, len matches.
//
// Property 2: retagging never changes bucket contents.
use chained_hashtable::{Datum, Domain, Error, HashTable, Selector};
use proptest::prelude::*;
use std::rc::Rc;

#[derive(Clone, Debug)]
enum Op {
    Add(i64, usize),
    Delete(i64, usize),
    Find(i64, usize),
    DeleteFirst,
    DeleteLast,
}

fn arb_op() -> impl Strategy<Value = Op> {
    prop_oneof![
        4 => (-20i64..20, 0usize..8).prop_map(|(k, v)| Op::Add(k, v)),
        2 => (-20i64..20, 0usize..8).prop_map(|(k, v)| Op::Delete(k, v)),
        2 => (-20i64..20, 0usize..8).prop_map(|(k, v)| Op::Find(k, v)),
        1 => Just(Op::DeleteFirst),
        1 => Just(Op::DeleteLast),
    ]
}

type Model = Vec<Vec<(i64, Rc<Datum>)>>;

fn model_first(m: &Model) -> Option<&Rc<Datum>> {
    m.iter().find_map(|b| b.first()).map(|(_, v)| v)
}

fn model_last(m: &Model) -> Option<&Rc<Datum>> {
    m.iter().rev().find_map(|b| b.last()).map(|(_, v)| v)
}

proptest! {
    #![proptest_config(ProptestConfig { cases: 96, .. ProptestConfig::default() })]
    #[test]
    fn prop_table_matches_bucket_model(
        n in 1usize..=12,
        ops in proptest::collection::vec(arb_op(), 1..100)
    ) {
        let mut t = HashTable::new(n, Domain::Integer, Domain::Integer).unwrap();
        let mut model: Model = vec![Vec::new(); n];
        // Value handles: equal content across slots, distinct identity.
        let values: Vec<Rc<Datum>> = (0..8).map(|i| Rc::new(Datum::Integer(i % 2))).collect();
        let bucket = |k: i64| k.rem_euclid(n as i64) as usize;

        for op in ops {
            match op {
                Op::Add(k, vi) => {
                    t.add(&Rc::new(Datum::Integer(k)), &values[vi]).unwrap();
                    model[bucket(k)].push((k, values[vi].clone()));
                }
                Op::Delete(k, vi) => {
                    let b = &mut model[bucket(k)];
                    let pos = b.iter().position(|(_, v)| Rc::ptr_eq(v, &values[vi]));
                    let res = t.delete(&Rc::new(Datum::Integer(k)), &values[vi]);
                    match pos {
                        Some(p) => {
                            prop_assert_eq!(res, Ok(()));
                            b.remove(p);
                        }
                        None => prop_assert_eq!(res, Err(Error::NotFound)),
                    }
                }
                Op::Find(k, vi) => {
                    let want = model[bucket(k)].iter().any(|(_, v)| Rc::ptr_eq(v, &values[vi]));
                    prop_assert_eq!(t.find(&Rc::new(Datum::Integer(k)), &values[vi]), Ok(want));
                }
                Op::DeleteFirst => {
                    let want = model.iter_mut().find(|b| !b.is_empty()).map(|b| b.remove(0));
                    match (t.delete_first_data(), want) {
                        (Ok(got), Some((_, w))) => prop_assert!(Rc::ptr_eq(&got, &w)),
                        (Err(Error::Empty), None) => {}
                        (got, w) => prop_assert!(false, "mismatch: {:?} vs {:?}", got, w),
                    }
                }
                Op::DeleteLast => {
                    let want = model.iter_mut().rev().find(|b| !b.is_empty()).and_then(|b| b.pop());
                    match (t.delete_last_data(), want) {
                        (Ok(got), Some((_, w))) => prop_assert!(Rc::ptr_eq(&got, &w)),
                        (Err(Error::Empty), None) => {}
                        (got, w) => prop_assert!(false, "mismatch: {:?} vs {:?}", got, w),
                    }
                }
            }

            for (i, b) in model.iter().enumerate() {
                let chain = t.bucket(i).unwrap();
                prop_assert_eq!(chain.len(), b.len());
                prop_assert!(chain.is_consistent());
            }
            prop_assert_eq!(t.len(), model.iter().map(Vec::len).sum::<usize>());
            match model_first(&model) {
                Some(w) => prop_assert!(Rc::ptr_eq(t.first_data().unwrap(), w)),
                None => prop_assert_eq!(t.first_data().err(), Some(Error::Empty)),
            }
            match model_last(&model) {
                Some(w) => prop_assert!(Rc::ptr_eq(t.last_data().unwrap(), w)),
                None => prop_assert_eq!(t.last_data().err(), Some(Error::Empty)),
            }
        }
    }

    #[test]
    fn prop_domain_switch_keeps_contents(
        keys in proptest::collection::vec("[a-z]{0,6}", 0..30),
        to_key in 0i32..3,
        to_value in 0i32..3,
    ) {
        let mut t = HashTable::new(10, Domain::String, Domain::Integer).unwrap();
        let value = Rc::new(Datum::Integer(1));
        for k in &keys {
            t.add(&Rc::new(Datum::from(k.as_str())), &value).unwrap();
        }
        let before: Vec<usize> = (0..10).map(|i| t.bucket(i).unwrap().len()).collect();

        t.change_domain(Selector::Key, Domain::try_from(to_key).unwrap());
        t.change_domain(Selector::Value, Domain::try_from(to_value).unwrap());

        let after: Vec<usize> = (0..10).map(|i| t.bucket(i).unwrap().len()).collect();
        prop_assert_eq!(before, after);
        prop_assert_eq!(t.len(), keys.len());
        prop_assert_eq!(Rc::strong_count(&value), keys.len() + 1);
    }
}
