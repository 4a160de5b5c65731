//! Logging for the conversion pipeline.
//!
//! Extraction logs at `debug` which sizing path it took (viewBox,
//! width/height or the 24×24 default) and why an input was rejected.
//! Generation logs the component identifier at `trace`. Without the
//! `tracing` feature `debug!` and `trace!` expand to nothing.

#[cfg(feature = "tracing")]
pub use tracing::{debug, trace};

#[cfg(not(feature = "tracing"))]
#[macro_export]
macro_rules! debug {
    ($($arg:tt)*) => {};
}

#[cfg(not(feature = "tracing"))]
#[macro_export]
macro_rules! trace {
    ($($arg:tt)*) => {};
}

#[cfg(not(feature = "tracing"))]
pub use crate::{debug, trace};
