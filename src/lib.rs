//! pipes-stream - A minimal stream algebra unifying push and pull delivery
//!
//! Pipelines are built declaratively from map / flat_map / filter
//! combinators, independent of whether the underlying source is an event
//! subscription (push) or an enumerable sequence (pull), and attached to
//! either representation without rewriting the pipeline.

pub mod error;
pub mod multicast;
pub mod pipe;
pub mod pipe_ext;

mod eval_push;
mod pull;
mod push;

// Re-export the core surface at the crate root
pub use error::{EndOfStream, PullResult};
pub use multicast::{from_events, from_events_deferred, EventSource, MulticastConfig};
pub use pipe::{compile, filter, flat_map, flat_map_with, from_iter, map, run, Emit, Pipe, Start};
pub use pipe_ext::PipeExt;
