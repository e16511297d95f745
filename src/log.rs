//! Logging for layout passes.
//!
//! `debug!` and `warn!` forward to `tracing` with the `tracing` feature and
//! compile to nothing without it. Their arguments are not evaluated in the
//! disabled build, so they must not carry side effects.

#[cfg(feature = "tracing")]
pub(crate) use tracing::{debug, warn};

#[cfg(not(feature = "tracing"))]
macro_rules! discard_event {
    ($($arg:tt)*) => {};
}

#[cfg(not(feature = "tracing"))]
pub(crate) use {discard_event as debug, discard_event as warn};
