//! Conditional logging macro.
//!
//! With the `tracing` feature enabled this re-exports `tracing::debug`.
//! When disabled, the macro expands to a no-op.

#[cfg(feature = "tracing")]
pub use tracing::debug;

#[cfg(not(feature = "tracing"))]
#[macro_export]
macro_rules! debug {
    ($($arg:tt)*) => {};
}

#[cfg(not(feature = "tracing"))]
pub use crate::debug;
