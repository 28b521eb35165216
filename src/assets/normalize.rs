use kurbo::Shape;

use crate::foundation::{
    core::{Affine, BezPath, ViewBox},
    error::{SlidemorphError, SlidemorphResult},
};

/// Fit `path` into the content area of `frame`, preserving aspect ratio and centring it.
pub fn normalize_path(path: &BezPath, frame: ViewBox) -> SlidemorphResult<BezPath> {
    if path.elements().is_empty() {
        return Err(SlidemorphError::load("path has no geometry"));
    }
    let bounds = path.bounding_box();
    if !bounds.is_finite() {
        return Err(SlidemorphError::load("path bounds are not finite"));
    }

    let target = frame.content_rect();
    let scale = match (bounds.width() > 0.0, bounds.height() > 0.0) {
        (true, true) => (target.width() / bounds.width()).min(target.height() / bounds.height()),
        (true, false) => target.width() / bounds.width(),
        (false, true) => target.height() / bounds.height(),
        (false, false) => 1.0,
    };

    let fit = Affine::translate(target.center().to_vec2())
        * Affine::scale(scale)
        * Affine::translate(-bounds.center().to_vec2());
    Ok(fit * path.clone())
}
