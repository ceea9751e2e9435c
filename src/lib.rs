//! Generate simple SVG text logos from a handful of prompt answers.
//!
//! The crate turns a shape name, a short label and two colors into a fixed
//! 300x200 SVG document with the shape centered behind the label:
//!
//! ```
//! let svg = sigil::generate_logo("circle", "AB", "red", "blue")?;
//! assert!(svg.contains(r#"<circle cx="150" cy="100" r="50" fill="blue" />"#));
//! # Ok::<(), sigil::Error>(())
//! ```
//!
//! Shape names match case-insensitively; anything else is an
//! [`Error::InvalidShape`]. The label and both colors are interpolated into
//! the markup verbatim, see [`svg::render`] for the caveats.

pub mod defaults;
mod errors;
pub mod log;
pub mod svg;
mod types;

pub use errors::Error;
pub use types::{LogoSpec, ShapeKind, ShapeSpec};

/// Build the logo document for one set of prompt answers.
///
/// `shape` picks the backdrop by name (any ASCII case); the other three
/// strings are used as-is. Returns the rendered document without a trailing
/// newline.
pub fn generate_logo(
    shape: &str,
    text: &str,
    text_color: &str,
    shape_color: &str,
) -> Result<String, Error> {
    let kind: ShapeKind = shape.parse()?;
    crate::log::debug!(shape = kind.name(), "matched shape");
    let spec = LogoSpec::new(text, text_color, ShapeSpec::new(kind, shape_color));
    Ok(svg::render(&spec))
}
