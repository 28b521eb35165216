use std::path::Path;

use crate::{
    assets::normalize::normalize_path,
    foundation::{
        core::{Affine, BezPath, Point, ViewBox},
        error::{SlidemorphError, SlidemorphResult},
    },
    slides::content::{ImageContent, VectorContent, VisualContent},
};

/// Turns a user-selected file into normalized visual content.
pub trait ContentLoader: Send + Sync {
    /// Load and normalize `path`.
    fn load(&self, path: &Path) -> SlidemorphResult<VisualContent>;
}

/// Loader for SVG documents, raw path-data files and raster images on the local filesystem.
///
/// - `.svg`: the first `<path>` in document order, with its transforms applied;
/// - `.path`, `.d`, `.txt`: SVG path data;
/// - anything else: decoded as a raster image for its dimensions.
///
/// Vector geometry is fitted and centred into `frame`.
#[derive(Clone, Copy, Debug, Default)]
pub struct FsContentLoader {
    frame: ViewBox,
}

impl FsContentLoader {
    /// Loader normalizing into `frame`.
    pub fn new(frame: ViewBox) -> Self {
        Self { frame }
    }

    /// Extract, flatten transforms of and normalize the first path of an SVG document.
    pub fn load_svg(&self, bytes: &[u8]) -> SlidemorphResult<VisualContent> {
        let opts = usvg::Options::default();
        let tree = usvg::Tree::from_data(bytes, &opts)
            .map_err(|e| SlidemorphError::load(format!("parse svg: {e}")))?;
        let path = first_path(tree.root())
            .ok_or_else(|| SlidemorphError::load("svg contains no path"))?;
        self.vector(path)
    }

    /// Parse and normalize SVG path data.
    pub fn load_path_data(&self, d: &str) -> SlidemorphResult<VisualContent> {
        let path = BezPath::from_svg(d.trim())
            .map_err(|e| SlidemorphError::load(format!("invalid path data: {e}")))?;
        self.vector(path)
    }

    fn vector(&self, path: BezPath) -> SlidemorphResult<VisualContent> {
        let normalized = normalize_path(&path, self.frame)?;
        Ok(VisualContent::Vector(VectorContent::new(normalized, self.frame)))
    }
}

impl ContentLoader for FsContentLoader {
    #[tracing::instrument(skip(self))]
    fn load(&self, path: &Path) -> SlidemorphResult<VisualContent> {
        let ext = path
            .extension()
            .and_then(|e| e.to_str())
            .map(str::to_ascii_lowercase)
            .unwrap_or_default();
        let read_err =
            |e: std::io::Error| SlidemorphError::load(format!("read '{}': {e}", path.display()));

        match ext.as_str() {
            "svg" => self.load_svg(&std::fs::read(path).map_err(read_err)?),
            "path" | "d" | "txt" => {
                self.load_path_data(&std::fs::read_to_string(path).map_err(read_err)?)
            }
            _ => {
                let (width, height) = image::image_dimensions(path).map_err(|e| {
                    SlidemorphError::load(format!("decode image '{}': {e}", path.display()))
                })?;
                Ok(VisualContent::Image(ImageContent {
                    source: path.to_path_buf(),
                    width,
                    height,
                }))
            }
        }
    }
}

fn first_path(group: &usvg::Group) -> Option<BezPath> {
    for node in group.children() {
        match node {
            usvg::Node::Path(p) => return Some(to_bez_path(p.data(), p.abs_transform())),
            usvg::Node::Group(g) => {
                if let Some(found) = first_path(g) {
                    return Some(found);
                }
            }
            _ => {}
        }
    }
    None
}

fn to_bez_path(data: &usvg::tiny_skia_path::Path, ts: usvg::Transform) -> BezPath {
    use usvg::tiny_skia_path::PathSegment;

    let pt = |p: usvg::tiny_skia_path::Point| Point::new(f64::from(p.x), f64::from(p.y));
    let mut out = BezPath::new();
    for seg in data.segments() {
        match seg {
            PathSegment::MoveTo(p) => out.move_to(pt(p)),
            PathSegment::LineTo(p) => out.line_to(pt(p)),
            PathSegment::QuadTo(p1, p) => out.quad_to(pt(p1), pt(p)),
            PathSegment::CubicTo(p1, p2, p) => out.curve_to(pt(p1), pt(p2), pt(p)),
            PathSegment::Close => out.close_path(),
        }
    }
    let affine = Affine::new([ts.sx, ts.ky, ts.kx, ts.sy, ts.tx, ts.ty].map(f64::from));
    affine * out
}

#[cfg(test)]
#[path = "../../tests/unit/assets/loader.rs"]
mod tests;
