use std::path::PathBuf;

use crate::foundation::core::{BezPath, Size, ViewBox};

/// Visual content attached to a slide.
#[derive(Clone, Debug)]
pub enum VisualContent {
    /// Normalized vector path; the only kind that can take part in a morph.
    Vector(VectorContent),
    /// Raster image reference, placed but never morphed.
    Image(ImageContent),
}

impl VisualContent {
    /// Vector geometry, if this content has any.
    pub fn as_vector(&self) -> Option<&VectorContent> {
        match self {
            Self::Vector(v) => Some(v),
            Self::Image(_) => None,
        }
    }

    /// Intrinsic size used when placing the content on the canvas.
    pub fn size(&self) -> Size {
        match self {
            Self::Vector(v) => v.view_box.size(),
            Self::Image(i) => Size::new(f64::from(i.width), f64::from(i.height)),
        }
    }
}

/// Single path already translated into the canonical view box.
#[derive(Clone, Debug)]
pub struct VectorContent {
    /// SVG path data (`d` attribute).
    pub path_d: String,
    /// Canonical frame the path lives in.
    pub view_box: ViewBox,
}

impl VectorContent {
    /// Build from already-normalized geometry.
    pub fn new(path: BezPath, view_box: ViewBox) -> Self {
        Self {
            path_d: path.to_svg(),
            view_box,
        }
    }

    /// Standalone SVG document wrapping the path.
    pub fn markup(&self) -> String {
        svg_stub(
            self.view_box.width,
            self.view_box.height,
            &format!(r#"<path d="{}"/>"#, self.path_d),
        )
    }
}

/// Reference to a raster image on disk.
#[derive(Clone, Debug)]
pub struct ImageContent {
    /// Source file.
    pub source: PathBuf,
    /// Width in pixels.
    pub width: u32,
    /// Height in pixels.
    pub height: u32,
}

/// Wrap SVG body markup in a document with a `0 0 width height` view box.
pub fn svg_stub(width: f64, height: f64, body: &str) -> String {
    format!(
        r#"<svg width="{width}px" height="{height}px" viewBox="0 0 {width} {height}" version="1.1" xmlns="http://www.w3.org/2000/svg" xmlns:xlink="http://www.w3.org/1999/xlink">{body}</svg>"#
    )
}
