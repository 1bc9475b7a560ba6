//! Export module: vector output for compositions.

mod svg;

pub use svg::SvgExporter;
