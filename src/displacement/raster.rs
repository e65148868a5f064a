use std::path::Path;

use anyhow::Context as _;

use crate::{
    displacement::image::DisplacementImage,
    foundation::error::{GlassError, GlassResult},
};

/// Largest raster edge the preview will allocate.
pub const MAX_RASTER_DIM: u32 = 16_384;

/// A rasterized displacement map, premultiplied RGBA8.
#[derive(Clone, Debug, PartialEq)]
pub struct RasterMap {
    /// Width in pixels.
    pub width: u32,
    /// Height in pixels.
    pub height: u32,
    /// Premultiplied RGBA8, row-major.
    pub rgba8_premul: Vec<u8>,
}

impl RasterMap {
    /// Premultiplied pixel at `(x, y)`.
    pub fn pixel(&self, x: u32, y: u32) -> Option<[u8; 4]> {
        if x >= self.width || y >= self.height {
            return None;
        }
        let i = ((y as usize) * (self.width as usize) + (x as usize)) * 4;
        let px = self.rgba8_premul.get(i..i + 4)?;
        Some([px[0], px[1], px[2], px[3]])
    }
}

/// Parse a displacement document into a `usvg` tree.
pub fn parse_document(document: &str) -> GlassResult<usvg::Tree> {
    let opts = usvg::Options::default();
    let tree = usvg::Tree::from_str(document, &opts).context("parse displacement svg")?;
    Ok(tree)
}

/// Rasterize a displacement map at `scale` device pixels per CSS pixel.
///
/// This is the debug preview of what the filter's `feImage` samples.
#[tracing::instrument(level = "debug", skip(image), fields(view_box = %image.view_box()))]
pub fn rasterize_displacement(image: &DisplacementImage, scale: f32) -> GlassResult<RasterMap> {
    if !scale.is_finite() || scale <= 0.0 {
        return Err(GlassError::validation("raster scale must be finite and > 0"));
    }

    let tree = parse_document(image.document())?;
    let size = tree.size();
    let width = (size.width() * scale).ceil().max(1.0) as u32;
    let height = (size.height() * scale).ceil().max(1.0) as u32;
    if width > MAX_RASTER_DIM || height > MAX_RASTER_DIM {
        return Err(GlassError::render(format!(
            "raster size too large: {width}x{height} (max {MAX_RASTER_DIM}x{MAX_RASTER_DIM})"
        )));
    }

    let mut pixmap = resvg::tiny_skia::Pixmap::new(width, height)
        .ok_or_else(|| GlassError::render("failed to allocate displacement pixmap"))?;
    let sx = (width as f32) / size.width();
    let sy = (height as f32) / size.height();
    resvg::render(
        &tree,
        resvg::tiny_skia::Transform::from_scale(sx, sy),
        &mut pixmap.as_mut(),
    );

    Ok(RasterMap {
        width,
        height,
        rgba8_premul: pixmap.data().to_vec(),
    })
}

/// Write a raster map as a straight-alpha PNG.
pub fn write_png(map: &RasterMap, path: &Path) -> GlassResult<()> {
    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        std::fs::create_dir_all(parent)
            .with_context(|| format!("create output dir '{}'", parent.display()))?;
    }

    let mut straight = map.rgba8_premul.clone();
    unpremultiply_rgba8_in_place(&mut straight);
    ::image::save_buffer_with_format(
        path,
        &straight,
        map.width,
        map.height,
        ::image::ColorType::Rgba8,
        ::image::ImageFormat::Png,
    )
    .with_context(|| format!("write png '{}'", path.display()))?;
    Ok(())
}

fn unpremultiply_rgba8_in_place(rgba: &mut [u8]) {
    for px in rgba.chunks_exact_mut(4) {
        let a = u16::from(px[3]);
        if a == 0 || a == 255 {
            continue;
        }
        for c in &mut px[..3] {
            *c = ((u16::from(*c) * 255 + a / 2) / a).min(255) as u8;
        }
    }
}

#[cfg(test)]
#[path = "../../tests/unit/displacement/raster.rs"]
mod tests;
