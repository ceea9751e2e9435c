//! SVG generation: shape fragments and the fixed document template.
//!
//! Fragments are plain markup strings; the composer drops one fragment and
//! one `<text>` element into a fixed 300x200 canvas. Output is built with
//! string templates only, so for a given [`LogoSpec`] it is byte-for-byte
//! reproducible.

use glam::{DVec2, dvec2};

use crate::defaults;
use crate::types::{LogoSpec, ShapeKind, ShapeSpec};

/// Render the complete SVG document for one logo request.
///
/// The label and both color strings are interpolated verbatim: a `<` or `"`
/// typed at the prompt lands unescaped in the output. Callers that need
/// well-formed markup for arbitrary input must sanitize it first.
pub fn render(spec: &LogoSpec) -> String {
    let shape = shape_fragment(&spec.shape);
    let width = fmt_num(defaults::CANVAS_WIDTH);
    let height = fmt_num(defaults::CANVAS_HEIGHT);
    let font_size = fmt_num(defaults::FONT_SIZE);
    let text = &spec.text;
    let text_color = &spec.text_color;
    let document = format!(
        r#"<svg version="1.1" width="{width}" height="{height}" xmlns="http://www.w3.org/2000/svg">
  {shape}
  <text x="50%" y="50%" fill="{text_color}" font-size="{font_size}" text-anchor="middle" dominant-baseline="middle">{text}</text>
</svg>"#
    );
    crate::log::debug!(bytes = document.len(), "composed logo document");
    document
}

/// Markup fragment for one shape, anchored so its visual center sits on
/// `spec.center`.
pub fn shape_fragment(spec: &ShapeSpec) -> String {
    let c = spec.center;
    match spec.kind {
        ShapeKind::Circle { radius } => format!(
            r#"<circle cx="{}" cy="{}" r="{}" fill="{}" />"#,
            fmt_num(c.x),
            fmt_num(c.y),
            fmt_num(radius),
            spec.fill,
        ),
        ShapeKind::Triangle { side } => {
            // Base sits half a side below the center, apex the same
            // distance above.
            let half = side / 2.0;
            let base_left = c + dvec2(-half, half);
            let apex = c + dvec2(0.0, -half);
            let base_right = c + dvec2(half, half);
            format!(
                r#"<polygon points="{} {} {}" fill="{}" />"#,
                fmt_point(base_left),
                fmt_point(apex),
                fmt_point(base_right),
                spec.fill,
            )
        }
        ShapeKind::Square { side } => rect_fragment(c, dvec2(side, side), &spec.fill),
        ShapeKind::Rectangle { width, height } => {
            rect_fragment(c, dvec2(width, height), &spec.fill)
        }
    }
}

/// Axis-aligned `<rect>` of the given size, centered on `center`.
fn rect_fragment(center: DVec2, size: DVec2, fill: &str) -> String {
    let origin = center - size / 2.0;
    format!(
        r#"<rect x="{}" y="{}" width="{}" height="{}" fill="{}" />"#,
        fmt_num(origin.x),
        fmt_num(origin.y),
        fmt_num(size.x),
        fmt_num(size.y),
        fill,
    )
}

/// `x,y` pair for a polygon `points` attribute.
fn fmt_point(p: DVec2) -> String {
    format!("{},{}", fmt_num(p.x), fmt_num(p.y))
}

/// Format a number with six significant figures and trailing zeros trimmed,
/// so whole coordinates print without a decimal point.
fn fmt_num(value: f64) -> String {
    const SIG_FIGS: i32 = 6;
    if value == 0.0 {
        return "0".to_string();
    }
    let magnitude = value.abs().log10().floor() as i32;
    let decimals = (SIG_FIGS - 1 - magnitude).max(0);
    let scale = 10_f64.powi(decimals);
    let rounded = (value * scale).round() / scale;
    let s = format!("{rounded:.prec$}", prec = decimals as usize);
    if s.contains('.') {
        s.trim_end_matches('0').trim_end_matches('.').to_string()
    } else {
        s
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn spec(kind: ShapeKind, fill: &str) -> ShapeSpec {
        ShapeSpec::new(kind, fill)
    }

    #[test]
    fn circle_fragment() {
        let frag = shape_fragment(&spec(ShapeKind::Circle { radius: 50.0 }, "blue"));
        assert_eq!(frag, r#"<circle cx="150" cy="100" r="50" fill="blue" />"#);
    }

    #[test]
    fn triangle_fragment_lists_base_left_apex_base_right() {
        let frag = shape_fragment(&spec(ShapeKind::Triangle { side: 100.0 }, "green"));
        assert_eq!(
            frag,
            r#"<polygon points="100,150 150,50 200,150" fill="green" />"#
        );
    }

    #[test]
    fn square_fragment_is_centered() {
        let frag = shape_fragment(&spec(ShapeKind::Square { side: 100.0 }, "red"));
        assert_eq!(frag, r#"<rect x="100" y="50" width="100" height="100" fill="red" />"#);
    }

    #[test]
    fn rectangle_fragment_has_top_left_at_50_50() {
        let frag = shape_fragment(&spec(
            ShapeKind::Rectangle {
                width: 200.0,
                height: 100.0,
            },
            "green",
        ));
        assert_eq!(frag, r#"<rect x="50" y="50" width="200" height="100" fill="green" />"#);
    }

    #[test]
    fn fragments_honor_explicit_geometry() {
        let frag = shape_fragment(&spec(ShapeKind::Circle { radius: 62.5 }, "teal"));
        assert_eq!(frag, r#"<circle cx="150" cy="100" r="62.5" fill="teal" />"#);
    }

    #[test]
    fn document_wraps_fragment_and_label() {
        let logo = LogoSpec::new("AB", "red", spec(ShapeKind::Circle { radius: 50.0 }, "blue"));
        let doc = render(&logo);
        assert!(doc.starts_with(
            r#"<svg version="1.1" width="300" height="200" xmlns="http://www.w3.org/2000/svg">"#
        ));
        assert!(doc.ends_with("</svg>"));
        assert!(doc.contains(
            r#"<text x="50%" y="50%" fill="red" font-size="48" text-anchor="middle" dominant-baseline="middle">AB</text>"#
        ));
    }

    #[test]
    fn label_and_colors_are_interpolated_verbatim() {
        // Documented pass-through: nothing is escaped on the way into the
        // markup.
        let logo = LogoSpec::new(
            "<AB>",
            "not a color",
            spec(ShapeKind::Square { side: 100.0 }, "#00ff00"),
        );
        let doc = render(&logo);
        assert!(doc.contains("><AB></text>"));
        assert!(doc.contains(r#"fill="not a color""#));
        assert!(doc.contains(r##"fill="#00ff00""##));
    }

    #[test]
    fn fmt_num_trims_trailing_zeros() {
        assert_eq!(fmt_num(150.0), "150");
        assert_eq!(fmt_num(0.0), "0");
        assert_eq!(fmt_num(62.5), "62.5");
        assert_eq!(fmt_num(-12.25), "-12.25");
        assert_eq!(fmt_num(1.0 / 3.0), "0.333333");
    }
}
