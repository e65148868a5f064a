/// `encodeURIComponent`-compatible percent encoding and data URIs.
pub mod encode;
/// SVG displacement map builder.
pub mod image;
/// Raster preview through resvg.
pub mod raster;
