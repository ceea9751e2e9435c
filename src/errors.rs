//! Error types with miette diagnostics.

use miette::Diagnostic;
use thiserror::Error;

/// Errors raised while turning prompt answers into a logo document.
///
/// Rendering itself is infallible; the only failure happens when the
/// user-supplied shape name is matched against the known kinds.
#[derive(Error, Diagnostic, Debug)]
pub enum Error {
    #[error("Invalid shape: {name}")]
    #[diagnostic(
        code(sigil::invalid_shape),
        help("known shapes are circle, triangle, square and rectangle (any ASCII case)")
    )]
    InvalidShape { name: String },
}
