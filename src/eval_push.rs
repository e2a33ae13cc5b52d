//! Combinator logic for the deferred ("compile then start") push
//! representation.
//!
//! Mirrors the immediate push combinators, but every combinator operates
//! on a builder (continuation in, start action out) instead of a
//! continuation consumer. Nothing is delivered until the start action is
//! invoked, which makes the compiled form the extension point for a future
//! stoppable handle.

use std::sync::{Arc, Mutex};

use crate::pipe::{BuildFn, Emit, Pipe};

pub(crate) fn map<T, R, F>(build: BuildFn<T>, mut f: F) -> Pipe<R>
where
    T: Send + 'static,
    R: Send + 'static,
    F: FnMut(T) -> R + Send + 'static,
{
    Pipe::eval_push(move |mut emit: Emit<R>| build(Box::new(move |x| emit(f(x)))))
}

/// A dependent pipe cannot be precompiled (it only exists once its outer
/// element arrives), so each outer element builds the inner start action
/// and invokes it on the spot. Depth-first ordering is preserved.
pub(crate) fn flat_map<T, R, F>(build: BuildFn<T>, mut f: F) -> Pipe<R>
where
    T: Send + 'static,
    R: Send + 'static,
    F: FnMut(T) -> Pipe<R> + Send + 'static,
{
    Pipe::eval_push(move |emit: Emit<R>| {
        let emit = Arc::new(Mutex::new(emit));
        build(Box::new(move |x| {
            let emit = Arc::clone(&emit);
            let inner = f(x).into_eval_push();
            let start = inner(Box::new(move |y| {
                let mut emit = emit.lock().unwrap();
                (*emit)(y);
            }));
            start();
        }))
    })
}

pub(crate) fn flat_map_with<T, R, S, F, G>(build: BuildFn<T>, mut f: F, g: G) -> Pipe<S>
where
    T: Clone + Send + 'static,
    R: Send + 'static,
    S: Send + 'static,
    F: FnMut(T) -> Pipe<R> + Send + 'static,
    G: FnMut(T, R) -> S + Send + 'static,
{
    Pipe::eval_push(move |emit: Emit<S>| {
        let shared = Arc::new(Mutex::new((emit, g)));
        build(Box::new(move |x: T| {
            let shared = Arc::clone(&shared);
            let inner = f(x.clone()).into_eval_push();
            let start = inner(Box::new(move |y| {
                let mut shared = shared.lock().unwrap();
                let (emit, g) = &mut *shared;
                let out = (*g)(x.clone(), y);
                (*emit)(out);
            }));
            start();
        }))
    })
}

pub(crate) fn filter<T, P>(build: BuildFn<T>, mut pred: P) -> Pipe<T>
where
    T: Send + 'static,
    P: FnMut(&T) -> bool + Send + 'static,
{
    Pipe::eval_push(move |mut emit: Emit<T>| {
        build(Box::new(move |x| {
            if pred(&x) {
                emit(x);
            }
        }))
    })
}
