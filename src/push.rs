//! Combinator logic for the immediate push representation.
//!
//! Each combinator wraps the inner continuation consumer: when the new
//! pipe is invoked with a continuation, the inner source is invoked with a
//! continuation that does the extra work. Delivery is synchronous and
//! in-order; control returning from the source call is the end signal.

use std::sync::{Arc, Mutex};

use crate::pipe::{Emit, Pipe, PushFn};

pub(crate) fn map<T, R, F>(src: PushFn<T>, mut f: F) -> Pipe<R>
where
    T: Send + 'static,
    R: Send + 'static,
    F: FnMut(T) -> R + Send + 'static,
{
    Pipe::push(move |mut emit: Emit<R>| src(Box::new(move |x| emit(f(x)))))
}

/// Each outer element drives its dependent pipe to completion before the
/// outer source produces the next one (depth-first, never interleaved).
/// The downstream continuation is shared across those nested deliveries
/// behind a lock so each dependent pipe can own a handle to it.
pub(crate) fn flat_map<T, R, F>(src: PushFn<T>, mut f: F) -> Pipe<R>
where
    T: Send + 'static,
    R: Send + 'static,
    F: FnMut(T) -> Pipe<R> + Send + 'static,
{
    Pipe::push(move |emit: Emit<R>| {
        let emit = Arc::new(Mutex::new(emit));
        src(Box::new(move |x| {
            let emit = Arc::clone(&emit);
            let inner = f(x).into_push();
            inner(Box::new(move |y| {
                let mut emit = emit.lock().unwrap();
                (*emit)(y);
            }));
        }));
    })
}

pub(crate) fn flat_map_with<T, R, S, F, G>(src: PushFn<T>, mut f: F, g: G) -> Pipe<S>
where
    T: Clone + Send + 'static,
    R: Send + 'static,
    S: Send + 'static,
    F: FnMut(T) -> Pipe<R> + Send + 'static,
    G: FnMut(T, R) -> S + Send + 'static,
{
    Pipe::push(move |emit: Emit<S>| {
        let shared = Arc::new(Mutex::new((emit, g)));
        src(Box::new(move |x: T| {
            let shared = Arc::clone(&shared);
            let inner = f(x.clone()).into_push();
            inner(Box::new(move |y| {
                let mut shared = shared.lock().unwrap();
                let (emit, g) = &mut *shared;
                let out = (*g)(x.clone(), y);
                (*emit)(out);
            }));
        }));
    })
}

pub(crate) fn filter<T, P>(src: PushFn<T>, mut pred: P) -> Pipe<T>
where
    T: Send + 'static,
    P: FnMut(&T) -> bool + Send + 'static,
{
    Pipe::push(move |mut emit: Emit<T>| {
        src(Box::new(move |x| {
            if pred(&x) {
                emit(x);
            }
        }))
    })
}
