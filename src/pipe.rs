//! Core pipe handle and the combinator dispatch site.
//!
//! A [Pipe] is an opaque stream of values backed by one of three concrete
//! representations: a pull function, an immediate push source, or a
//! deferred ("compile then start") push source. Combinators work uniformly
//! over all three; the `match` in each free function below is the only
//! place representation routing lives.

use crate::error::{EndOfStream, PullResult};
use crate::{eval_push, pull, push};

/// Per-element continuation driven by push pipes.
pub type Emit<T> = Box<dyn FnMut(T) + Send>;

/// Start action produced by compiling a deferred push pipe.
pub type Start = Box<dyn FnOnce() + Send>;

/// Next-element thunk backing a pull pipe.
pub(crate) type PullFn<T> = Box<dyn FnMut() -> PullResult<T> + Send>;

/// Continuation consumer backing an immediate push pipe. Invoking it
/// delivers every element the source produces, then returns.
pub(crate) type PushFn<T> = Box<dyn FnOnce(Emit<T>) + Send>;

/// Builder backing a deferred push pipe: continuation in, start action out.
pub(crate) type BuildFn<T> = Box<dyn FnOnce(Emit<T>) -> Start + Send>;

pub(crate) enum Repr<T> {
    Pull(PullFn<T>),
    Push(PushFn<T>),
    EvalPush(BuildFn<T>),
}

impl<T> Repr<T> {
    pub(crate) fn kind(&self) -> &'static str {
        match self {
            Repr::Pull(_) => "pull",
            Repr::Push(_) => "push",
            Repr::EvalPush(_) => "eval-push",
        }
    }
}

/// A stream of values.
///
/// Building a pipeline allocates closures only; no element moves and no
/// user function runs until [run] drives the finished pipe.
///
/// # Examples
/// ```
/// use pipes_stream::{from_iter, PipeExt};
/// use std::sync::{Arc, Mutex};
///
/// let out = Arc::new(Mutex::new(Vec::new()));
/// let sink = Arc::clone(&out);
/// from_iter(vec![1, 2, 3, 4, 5])
///     .filter(|x| x % 2 == 0)
///     .map(|x| x * 10)
///     .run(move |x| sink.lock().unwrap().push(x));
/// assert_eq!(*out.lock().unwrap(), vec![20, 40]);
/// ```
pub struct Pipe<T> {
    pub(crate) repr: Repr<T>,
}

impl<T: Send + 'static> Pipe<T> {
    /// Create a pull pipe from a raw next-element function.
    ///
    /// The function returns `Err(EndOfStream)` once the source is
    /// exhausted and must not be called again after that.
    pub fn pull<F>(f: F) -> Self
    where
        F: FnMut() -> PullResult<T> + Send + 'static,
    {
        Pipe {
            repr: Repr::Pull(Box::new(f)),
        }
    }

    /// Create an immediate push pipe from a continuation consumer.
    ///
    /// `src` is invoked once with the terminal continuation and must drive
    /// it for every element before returning.
    pub fn push<F>(src: F) -> Self
    where
        F: FnOnce(Emit<T>) + Send + 'static,
    {
        Pipe {
            repr: Repr::Push(Box::new(src)),
        }
    }

    /// Create a deferred push pipe from a builder.
    ///
    /// `build` compiles a continuation into a start action; delivery only
    /// begins when the start action is invoked.
    pub fn eval_push<F>(build: F) -> Self
    where
        F: FnOnce(Emit<T>) -> Start + Send + 'static,
    {
        Pipe {
            repr: Repr::EvalPush(Box::new(build)),
        }
    }

    /// Unwrap the pull representation.
    ///
    /// A dependent pipe handed to `flat_map` must share the outer pipe's
    /// representation; anything else is a defect in the caller's pipeline.
    pub(crate) fn into_pull(self) -> PullFn<T> {
        match self.repr {
            Repr::Pull(f) => f,
            other => panic!("expected a pull pipe, got a {} pipe", other.kind()),
        }
    }

    pub(crate) fn into_push(self) -> PushFn<T> {
        match self.repr {
            Repr::Push(f) => f,
            other => panic!("expected a push pipe, got a {} pipe", other.kind()),
        }
    }

    pub(crate) fn into_eval_push(self) -> BuildFn<T> {
        match self.repr {
            Repr::EvalPush(f) => f,
            other => panic!("expected an eval-push pipe, got a {} pipe", other.kind()),
        }
    }
}

// ================================
// Adapters
// ================================

/// Create a pull pipe from an iterator.
///
/// The iterator is dropped as soon as exhaustion is first observed, so any
/// resource it holds is released exactly once. Pulling again after
/// `EndOfStream` has been raised is a contract violation and panics.
pub fn from_iter<I>(iter: I) -> Pipe<I::Item>
where
    I: IntoIterator,
    I::IntoIter: Send + 'static,
    I::Item: Send + 'static,
{
    let mut iter = Some(iter.into_iter());
    Pipe::pull(move || match iter.take() {
        Some(mut it) => match it.next() {
            Some(item) => {
                iter = Some(it);
                Ok(item)
            }
            None => Err(EndOfStream),
        },
        None => panic!("pull pipe advanced past end of stream"),
    })
}

// ================================
// Combinators
// ================================

/// Transform each element of the pipe with `f`.
pub fn map<T, R, F>(pipe: Pipe<T>, f: F) -> Pipe<R>
where
    T: Send + 'static,
    R: Send + 'static,
    F: FnMut(T) -> R + Send + 'static,
{
    match pipe.repr {
        Repr::Pull(src) => pull::map(src, f),
        Repr::Push(src) => push::map(src, f),
        Repr::EvalPush(build) => eval_push::map(build, f),
    }
}

/// Bind each element to a dependent pipe produced by `f`.
///
/// The dependent pipe must share the outer pipe's representation. For pull
/// pipes exactly one element is drawn from the dependent pipe per outer
/// element; for push pipes the dependent pipe is driven to completion
/// before the outer source produces its next element (depth-first).
pub fn flat_map<T, R, F>(pipe: Pipe<T>, f: F) -> Pipe<R>
where
    T: Send + 'static,
    R: Send + 'static,
    F: FnMut(T) -> Pipe<R> + Send + 'static,
{
    match pipe.repr {
        Repr::Pull(src) => pull::flat_map(src, f),
        Repr::Push(src) => push::flat_map(src, f),
        Repr::EvalPush(build) => eval_push::flat_map(build, f),
    }
}

/// Like [flat_map], but combine the outer element with each dependent
/// element via `g` before delivering.
pub fn flat_map_with<T, R, S, F, G>(pipe: Pipe<T>, f: F, g: G) -> Pipe<S>
where
    T: Clone + Send + 'static,
    R: Send + 'static,
    S: Send + 'static,
    F: FnMut(T) -> Pipe<R> + Send + 'static,
    G: FnMut(T, R) -> S + Send + 'static,
{
    match pipe.repr {
        Repr::Pull(src) => pull::flat_map_with(src, f, g),
        Repr::Push(src) => push::flat_map_with(src, f, g),
        Repr::EvalPush(build) => eval_push::flat_map_with(build, f, g),
    }
}

/// Keep only the elements satisfying `pred`.
pub fn filter<T, P>(pipe: Pipe<T>, pred: P) -> Pipe<T>
where
    T: Send + 'static,
    P: FnMut(&T) -> bool + Send + 'static,
{
    match pipe.repr {
        Repr::Pull(src) => pull::filter(src, pred),
        Repr::Push(src) => push::filter(src, pred),
        Repr::EvalPush(build) => eval_push::filter(build, pred),
    }
}

// ================================
// Execution
// ================================

/// Drive a finished pipe to completion, applying `action` to each element.
///
/// This is the only operation with observable side effects. For a pull
/// pipe it pulls until `EndOfStream`, which never reaches the caller; for
/// an immediate push pipe it invokes the source with `action`; for a
/// deferred push pipe it compiles the start action and invokes it.
pub fn run<T, A>(pipe: Pipe<T>, mut action: A)
where
    T: Send + 'static,
    A: FnMut(T) + Send + 'static,
{
    match pipe.repr {
        Repr::Pull(mut next) => {
            log::trace!("run: draining pull pipe");
            loop {
                match next() {
                    Ok(item) => action(item),
                    Err(EndOfStream) => break,
                }
            }
        }
        Repr::Push(src) => {
            log::trace!("run: invoking push source");
            src(Box::new(action));
        }
        Repr::EvalPush(build) => {
            log::trace!("run: compiling eval-push source");
            let start = build(Box::new(action));
            start();
        }
    }
}

/// Compile a push pipe into a start action without running it.
///
/// For a deferred pipe this invokes the builder; for an immediate pipe the
/// source call is wrapped in a thunk. Pull pipes have no compiled form and
/// panic here.
pub fn compile<T, A>(pipe: Pipe<T>, action: A) -> Start
where
    T: Send + 'static,
    A: FnMut(T) + Send + 'static,
{
    match pipe.repr {
        Repr::Pull(_) => panic!("pull pipes cannot be compiled"),
        Repr::Push(src) => Box::new(move || src(Box::new(action))),
        Repr::EvalPush(build) => build(Box::new(action)),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn from_iter_raises_end_of_stream_once() {
        let mut next = match from_iter(vec![7]).repr {
            Repr::Pull(f) => f,
            _ => unreachable!(),
        };
        assert_eq!(next(), Ok(7));
        assert_eq!(next(), Err(EndOfStream));
    }

    #[test]
    #[should_panic(expected = "advanced past end of stream")]
    fn from_iter_panics_when_pulled_past_end() {
        let mut next = match from_iter(Vec::<i32>::new()).repr {
            Repr::Pull(f) => f,
            _ => unreachable!(),
        };
        assert_eq!(next(), Err(EndOfStream));
        let _ = next();
    }

    #[test]
    #[should_panic(expected = "expected a pull pipe, got a push pipe")]
    fn flat_map_rejects_mixed_representations() {
        let mixed = flat_map(from_iter(vec![1]), |_| {
            Pipe::push(|mut emit: Emit<i32>| emit(1))
        });
        run(mixed, |_| {});
    }

    #[test]
    #[should_panic(expected = "pull pipes cannot be compiled")]
    fn compile_rejects_pull_pipes() {
        let _ = compile(from_iter(vec![1]), |_| {});
    }
}
