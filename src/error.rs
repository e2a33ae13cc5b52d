//! Error types and handling for pipes-stream
//!
//! This module provides the out-of-band signalling used by pull pipes.

/// Raised by a pull pipe once its source has no more elements.
///
/// This is an expected outcome, not a failure: the executor uses it to
/// terminate the pull loop and it never surfaces to the pipeline's own
/// consumer. Combinators propagate it unchanged with `?` and must not
/// catch or suppress it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
#[error("end of stream")]
pub struct EndOfStream;

/// Result of asking a pull pipe for its next element.
pub type PullResult<T> = Result<T, EndOfStream>;
