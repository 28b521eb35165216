use std::path::Path;

use anyhow::Context;

use crate::foundation::error::{SlidemorphError, SlidemorphResult};

/// Rasterize an SVG frame document into straight-alpha RGBA8.
///
/// `resources_dir` resolves relative `href`s.
#[tracing::instrument(skip(svg))]
pub fn rasterize(svg: &str, resources_dir: Option<&Path>) -> SlidemorphResult<image::RgbaImage> {
    let opts = usvg::Options {
        resources_dir: resources_dir.map(Path::to_path_buf),
        ..usvg::Options::default()
    };
    let tree = usvg::Tree::from_str(svg, &opts).context("parse frame svg")?;
    let size = tree.size().to_int_size();
    let mut pixmap = resvg::tiny_skia::Pixmap::new(size.width(), size.height())
        .ok_or_else(|| SlidemorphError::validation("frame has zero size"))?;
    resvg::render(&tree, resvg::tiny_skia::Transform::default(), &mut pixmap.as_mut());

    let mut rgba = Vec::with_capacity(pixmap.pixels().len() * 4);
    for px in pixmap.pixels() {
        let c = px.demultiply();
        rgba.extend_from_slice(&[c.red(), c.green(), c.blue(), c.alpha()]);
    }
    image::RgbaImage::from_raw(size.width(), size.height(), rgba)
        .ok_or_else(|| SlidemorphError::validation("pixel buffer does not match frame size"))
}

/// Rasterize an SVG frame document and write it as PNG.
pub fn write_png(svg: &str, resources_dir: Option<&Path>, out: &Path) -> SlidemorphResult<()> {
    let img = rasterize(svg, resources_dir)?;
    img.save_with_format(out, image::ImageFormat::Png)
        .with_context(|| format!("write png '{}'", out.display()))?;
    Ok(())
}

#[cfg(test)]
#[path = "../../tests/unit/render/raster.rs"]
mod tests;
