//! SVG export of a composition at its logical size.

use crate::canvas::Style;
use crate::composition::Composition;
use std::fmt::Write;

/// Configuration for SVG export.
#[derive(Debug, Clone, Default)]
pub struct SvgExporter {
    /// Colors and stroke.
    pub style: Style,
}

impl SvgExporter {
    /// Create an exporter with a custom style.
    pub const fn new(style: Style) -> Self {
        Self { style }
    }

    /// Export a composition to an SVG document.
    ///
    /// Each block becomes one `<rect>` with the heavy square-capped outline.
    /// Output depends only on the composition and style.
    pub fn export(&self, composition: &Composition) -> String {
        let width = composition.width();
        let height = composition.height();
        let style = &self.style;

        let mut out = String::with_capacity(256 + composition.blocks().len() * 96);

        let _ = write!(
            out,
            "<svg xmlns=\"http://www.w3.org/2000/svg\" \
             width=\"{width}\" height=\"{height}\" \
             viewBox=\"0 0 {width} {height}\">"
        );

        // Background rectangle.
        let _ = write!(
            out,
            "<rect width=\"100%\" height=\"100%\" fill=\"{}\"/>",
            style.background
        );

        let _ = write!(
            out,
            "<g stroke=\"{}\" stroke-width=\"{}\" stroke-linecap=\"square\">",
            style.stroke, style.stroke_weight
        );

        for block in composition.blocks() {
            let r = block.rect;
            let _ = write!(
                out,
                "<rect x=\"{}\" y=\"{}\" width=\"{}\" height=\"{}\" fill=\"{}\"/>",
                r.x,
                r.y,
                r.width,
                r.height,
                style.palette.color(block.paint)
            );
        }

        out.push_str("</g></svg>");
        out
    }
}
