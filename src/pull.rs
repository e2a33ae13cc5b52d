//! Combinator logic for the pull representation.
//!
//! Every combinator wraps the inner next-element thunk in a new one;
//! `EndOfStream` propagates through `?` untouched.

use crate::pipe::{Pipe, PullFn};

pub(crate) fn map<T, R, F>(mut src: PullFn<T>, mut f: F) -> Pipe<R>
where
    T: Send + 'static,
    R: Send + 'static,
    F: FnMut(T) -> R + Send + 'static,
{
    Pipe::pull(move || Ok(f(src()?)))
}

/// Draws exactly one element from the dependent pipe per outer element, a
/// single-pass zip-like bind rather than full flattening.
pub(crate) fn flat_map<T, R, F>(mut src: PullFn<T>, mut f: F) -> Pipe<R>
where
    T: Send + 'static,
    R: Send + 'static,
    F: FnMut(T) -> Pipe<R> + Send + 'static,
{
    Pipe::pull(move || {
        let x = src()?;
        let mut inner = f(x).into_pull();
        inner()
    })
}

pub(crate) fn flat_map_with<T, R, S, F, G>(mut src: PullFn<T>, mut f: F, mut g: G) -> Pipe<S>
where
    T: Clone + Send + 'static,
    R: Send + 'static,
    S: Send + 'static,
    F: FnMut(T) -> Pipe<R> + Send + 'static,
    G: FnMut(T, R) -> S + Send + 'static,
{
    Pipe::pull(move || {
        let x = src()?;
        let mut inner = f(x.clone()).into_pull();
        let y = inner()?;
        Ok(g(x, y))
    })
}

pub(crate) fn filter<T, P>(mut src: PullFn<T>, mut pred: P) -> Pipe<T>
where
    T: Send + 'static,
    P: FnMut(&T) -> bool + Send + 'static,
{
    // Loops until the inner pull yields a match or signals exhaustion; an
    // unbounded inner source with no match never returns.
    Pipe::pull(move || loop {
        let x = src()?;
        if pred(&x) {
            return Ok(x);
        }
    })
}
