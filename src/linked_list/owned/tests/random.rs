extern crate std;

use std::vec::Vec;

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use crate::linked_list::owned::list::LinkedList;

/// Drives the list and a `Vec` model through the same mixed traffic and
/// checks that every observation agrees.
#[test]
fn test_differential_against_vec_model() {
    let mut rng = StdRng::seed_from_u64(0x51b9_11ed);
    let mut list = LinkedList::new();
    let mut model: Vec<i64> = Vec::new();
    let mut next_value: i64 = 0;

    for step in 0..5_000 {
        let mut fresh = || {
            next_value += 1;
            next_value
        };

        match rng.random_range(0..10) {
            0 => {
                let value = fresh();
                list.push_front(value);
                model.insert(0, value);
            }
            1 => {
                let value = fresh();
                list.push_back(value);
                model.push(value);
            }
            2 => {
                // Deliberately overshoots the valid bound once in a while.
                let index = rng.random_range(0..=model.len() + 1);
                let value = fresh();
                let result = list.insert(index, value);
                if index <= model.len() {
                    assert_eq!(result, Ok(()));
                    model.insert(index, value);
                } else {
                    assert!(result.is_err());
                }
            }
            3 => {
                let index = rng.random_range(0..=model.len() + 1);
                let count = rng.random_range(0..4);
                let values: Vec<i64> = (0..count).map(|_| fresh()).collect();
                let result = list.insert_all(index, values.iter().copied());
                if index <= model.len() {
                    assert_eq!(result, Ok(()));
                    model.splice(index..index, values);
                } else {
                    assert!(result.is_err());
                }
            }
            4 => {
                assert_eq!(list.pop_front().ok(), (!model.is_empty()).then(|| model.remove(0)));
            }
            5 => {
                assert_eq!(list.pop_back().ok(), model.pop());
            }
            6 => {
                let index = rng.random_range(0..=model.len());
                let result = list.remove(index);
                if index < model.len() {
                    assert_eq!(result, Ok(model.remove(index)));
                } else {
                    assert!(result.is_err());
                }
            }
            7 => {
                let index = rng.random_range(0..=model.len() + 1);
                assert_eq!(list.get(index), model.get(index));
            }
            8 => {
                assert_eq!(list.front(), model.first());
                assert_eq!(list.back(), model.last());
            }
            _ => {
                // Rare full reset.
                if rng.random_range(0..50) == 0 {
                    list.clear();
                    model.clear();
                }
            }
        }

        assert_eq!(list.len(), model.len(), "length diverged at step {step}");
        if step % 64 == 0 {
            assert_eq!(list.to_vec(), model, "order diverged at step {step}");
        }
    }

    assert_eq!(list.to_vec(), model);
}
