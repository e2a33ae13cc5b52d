//! Extension trait providing method-style chaining over [Pipe].

use crate::pipe::{self, Pipe, Start};

/// Combinators as methods, for fluent pipeline building.
///
/// Every method delegates to the free function of the same name in
/// [crate::pipe]; both surfaces are equivalent.
pub trait PipeExt<T>: Sized {
    /// Transform each element with `f`.
    fn map<R, F>(self, f: F) -> Pipe<R>
    where
        R: Send + 'static,
        F: FnMut(T) -> R + Send + 'static;

    /// Bind each element to a dependent pipe produced by `f`.
    fn flat_map<R, F>(self, f: F) -> Pipe<R>
    where
        R: Send + 'static,
        F: FnMut(T) -> Pipe<R> + Send + 'static;

    /// Bind each element to a dependent pipe and combine with `g`.
    fn flat_map_with<R, S, F, G>(self, f: F, g: G) -> Pipe<S>
    where
        T: Clone,
        R: Send + 'static,
        S: Send + 'static,
        F: FnMut(T) -> Pipe<R> + Send + 'static,
        G: FnMut(T, R) -> S + Send + 'static;

    /// Keep only the elements satisfying `pred`.
    fn filter<P>(self, pred: P) -> Pipe<T>
    where
        P: FnMut(&T) -> bool + Send + 'static;

    /// Drive the pipe to completion with a terminal action.
    fn run<A>(self, action: A)
    where
        A: FnMut(T) + Send + 'static;

    /// Compile a push pipe into a start action without running it.
    fn compile<A>(self, action: A) -> Start
    where
        A: FnMut(T) + Send + 'static;
}

impl<T: Send + 'static> PipeExt<T> for Pipe<T> {
    fn map<R, F>(self, f: F) -> Pipe<R>
    where
        R: Send + 'static,
        F: FnMut(T) -> R + Send + 'static,
    {
        pipe::map(self, f)
    }

    fn flat_map<R, F>(self, f: F) -> Pipe<R>
    where
        R: Send + 'static,
        F: FnMut(T) -> Pipe<R> + Send + 'static,
    {
        pipe::flat_map(self, f)
    }

    fn flat_map_with<R, S, F, G>(self, f: F, g: G) -> Pipe<S>
    where
        T: Clone,
        R: Send + 'static,
        S: Send + 'static,
        F: FnMut(T) -> Pipe<R> + Send + 'static,
        G: FnMut(T, R) -> S + Send + 'static,
    {
        pipe::flat_map_with(self, f, g)
    }

    fn filter<P>(self, pred: P) -> Pipe<T>
    where
        P: FnMut(&T) -> bool + Send + 'static,
    {
        pipe::filter(self, pred)
    }

    fn run<A>(self, action: A)
    where
        A: FnMut(T) + Send + 'static,
    {
        pipe::run(self, action)
    }

    fn compile<A>(self, action: A) -> Start
    where
        A: FnMut(T) + Send + 'static,
    {
        pipe::compile(self, action)
    }
}
