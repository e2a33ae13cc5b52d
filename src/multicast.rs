//! Fan-out event sources and the subscription-to-push adapters.
//!
//! An [EventSource] is the external "register a handler" collaborator for
//! push pipes. Cloning it yields another handle to the same underlying
//! handler set, so several consumers can attach to one source; delivery is
//! multicast to all of them in registration order.

use std::sync::{Arc, Mutex};

use crate::pipe::{Emit, Pipe};

type Handler<T> = Box<dyn FnMut(T) + Send>;

/// Configuration for the multicast handler set.
#[derive(Debug, Clone)]
pub struct MulticastConfig {
    pub initial_capacity: usize,
}

impl Default for MulticastConfig {
    fn default() -> Self {
        Self {
            initial_capacity: 8,
        }
    }
}

/// A cloneable fan-out notification source.
///
/// Attach and delivery are serialized under one lock, so an attach racing
/// an in-flight delivery can never be lost or observe a torn handler set.
/// Handlers stay registered for the lifetime of the source; there is no
/// unsubscribe. Failures inside the producer are not forwarded — a failing
/// producer simply stops emitting.
///
/// Handlers must not emit on the source that is delivering to them; the
/// guard is held for the whole delivery.
pub struct EventSource<T> {
    handlers: Arc<Mutex<Vec<Handler<T>>>>,
}

impl<T> Clone for EventSource<T> {
    fn clone(&self) -> Self {
        EventSource {
            handlers: Arc::clone(&self.handlers),
        }
    }
}

impl<T: Clone + Send + 'static> EventSource<T> {
    pub fn new() -> Self {
        Self::with_config(MulticastConfig::default())
    }

    pub fn with_config(config: MulticastConfig) -> Self {
        EventSource {
            handlers: Arc::new(Mutex::new(Vec::with_capacity(config.initial_capacity))),
        }
    }

    /// Attach a handler that is invoked once per emitted element.
    pub fn subscribe<F>(&self, handler: F)
    where
        F: FnMut(T) + Send + 'static,
    {
        let mut handlers = self.handlers.lock().unwrap();
        handlers.push(Box::new(handler));
        log::debug!("multicast: {} handler(s) attached", handlers.len());
    }

    /// Deliver `value` to every attached handler in registration order.
    pub fn emit(&self, value: T) {
        let mut handlers = self.handlers.lock().unwrap();
        log::trace!("multicast: delivering to {} handler(s)", handlers.len());
        for handler in handlers.iter_mut() {
            (*handler)(value.clone());
        }
    }
}

impl<T: Clone + Send + 'static> Default for EventSource<T> {
    fn default() -> Self {
        Self::new()
    }
}

/// Adapt a subscription source into an immediate push pipe.
///
/// The pipe's continuation consumer registers the terminal continuation as
/// a handler; elements flow whenever the source emits.
pub fn from_events<T>(source: &EventSource<T>) -> Pipe<T>
where
    T: Clone + Send + 'static,
{
    let source = source.clone();
    Pipe::push(move |emit: Emit<T>| source.subscribe(emit))
}

/// Adapt a subscription source into a deferred push pipe.
///
/// Registration happens at build time; the start action is a no-op because
/// delivery is driven by the source's own emits, not by starting.
pub fn from_events_deferred<T>(source: &EventSource<T>) -> Pipe<T>
where
    T: Clone + Send + 'static,
{
    let source = source.clone();
    Pipe::eval_push(move |emit: Emit<T>| {
        source.subscribe(emit);
        Box::new(|| {})
    })
}
