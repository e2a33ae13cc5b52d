//! Algebraic laws checked over arbitrary finite sources.

use pipes_stream::{filter, flat_map, from_iter, map, run, Pipe};
use quickcheck::quickcheck;
use std::sync::{Arc, Mutex};

fn push_of(values: Vec<i64>) -> Pipe<i64> {
    Pipe::push(move |mut emit| {
        for v in values {
            emit(v);
        }
    })
}

fn collected(pipe: Pipe<i64>) -> Vec<i64> {
    let out = Arc::new(Mutex::new(Vec::new()));
    let sink = Arc::clone(&out);
    run(pipe, move |x| sink.lock().unwrap().push(x));
    let result = out.lock().unwrap().clone();
    result
}

quickcheck! {
    fn functor_law_pull(xs: Vec<i64>) -> bool {
        let composed = map(map(from_iter(xs.clone()), |x| x.wrapping_mul(2)), |x| x.wrapping_add(1));
        let fused = map(from_iter(xs), |x| x.wrapping_mul(2).wrapping_add(1));
        collected(composed) == collected(fused)
    }

    fn functor_law_push(xs: Vec<i64>) -> bool {
        let composed = map(map(push_of(xs.clone()), |x| x.wrapping_mul(2)), |x| x.wrapping_add(1));
        let fused = map(push_of(xs), |x| x.wrapping_mul(2).wrapping_add(1));
        collected(composed) == collected(fused)
    }

    fn filter_identity_pull(xs: Vec<i64>) -> bool {
        collected(filter(from_iter(xs.clone()), |_| true)) == xs
    }

    fn filter_identity_push(xs: Vec<i64>) -> bool {
        collected(filter(push_of(xs.clone()), |_| true)) == xs
    }

    fn filter_all_push_delivers_nothing(xs: Vec<i64>) -> bool {
        collected(filter(push_of(xs), |_| false)).is_empty()
    }

    fn flat_map_singleton_is_map_pull(xs: Vec<i64>) -> bool {
        let bound = flat_map(from_iter(xs.clone()), |x| from_iter(vec![x.wrapping_mul(3)]));
        let mapped = map(from_iter(xs), |x| x.wrapping_mul(3));
        collected(bound) == collected(mapped)
    }

    fn flat_map_singleton_is_map_push(xs: Vec<i64>) -> bool {
        let bound = flat_map(push_of(xs.clone()), |x| push_of(vec![x.wrapping_mul(3)]));
        let mapped = map(push_of(xs), |x| x.wrapping_mul(3));
        collected(bound) == collected(mapped)
    }

    fn push_and_pull_agree_on_any_pipeline(xs: Vec<i64>) -> bool {
        let over_pull = map(filter(from_iter(xs.clone()), |x| x % 2 == 0), |x| x.wrapping_mul(10));
        let over_push = map(filter(push_of(xs), |x| x % 2 == 0), |x| x.wrapping_mul(10));
        collected(over_pull) == collected(over_push)
    }
}
