//! Per-instance transform derivation.
//!
//! Everything here is a pure function of a parameter set and an instance index. It runs once
//! per instance per rendered frame, so identical inputs must produce identical output.

use crate::{
    foundation::core::{Affine, Canvas, Size, Vec2},
    params::{
        registry::{ParamId, resolve},
        set::ParameterSet,
    },
};

/// Placement of one instance.
#[derive(Clone, Copy, Debug, PartialEq, serde::Serialize)]
pub struct InstanceTransform {
    /// Centre position in percent of the canvas.
    pub position_percent: Vec2,
    /// Uniform scale factor.
    pub scale: f64,
    /// Rotation in degrees, clockwise in screen space.
    pub rotation_deg: f64,
    /// Opacity; not clamped, presenters clamp to `[0, 1]` when drawing.
    pub opacity: f64,
    /// Advisory duration for the presenter's own property transitions.
    pub transition_ms: f64,
}

impl InstanceTransform {
    /// Map content of `content_size` onto `canvas`.
    ///
    /// The content's centre lands on `position_percent`, and scale/rotation pivot around it.
    pub fn to_affine(&self, canvas: Canvas, content_size: Size) -> Affine {
        let centre = canvas.percent_to_px(self.position_percent).to_vec2();
        let half = Vec2::new(content_size.width / 2.0, content_size.height / 2.0);
        Affine::translate(centre)
            * Affine::rotate(self.rotation_deg.to_radians())
            * Affine::scale(self.scale)
            * Affine::translate(-half)
    }

    /// Opacity clamped to `[0, 1]`.
    pub fn clamped_opacity(&self) -> f64 {
        self.opacity.clamp(0.0, 1.0)
    }
}

/// Derive the transform of instance `i` from `params`.
///
/// With `count == 0` the opacity step is treated as zero; no instance renders in that case
/// anyway (see [`instance_count`]).
pub fn derive_transform(params: &ParameterSet, i: usize) -> InstanceTransform {
    let r = |id| resolve(params, id);
    let idx = i as f64;

    let count = r(ParamId::Count);
    let (o, oe) = (r(ParamId::Opacity), r(ParamId::OpacityEnd));
    let opacity_step = if count == 0.0 { 0.0 } else { (o - oe) / count };

    InstanceTransform {
        position_percent: Vec2::new(
            r(ParamId::X) + idx * r(ParamId::Dx),
            r(ParamId::Y) + idx * r(ParamId::Dy),
        ),
        scale: r(ParamId::Scale) + idx * r(ParamId::ScaleStep),
        rotation_deg: r(ParamId::Rotation) + idx * r(ParamId::RotationStep),
        opacity: o - opacity_step * idx,
        transition_ms: r(ParamId::TransitionMs),
    }
}

/// Number of instances to render for `params`, capped at `max_instances`.
///
/// Negative or non-finite counts render nothing; fractional counts are floored.
pub fn instance_count(params: &ParameterSet, max_instances: usize) -> usize {
    let count = resolve(params, ParamId::Count);
    if !count.is_finite() || count <= 0.0 {
        return 0;
    }
    let floored = count.floor();
    if floored >= max_instances as f64 {
        max_instances
    } else {
        floored as usize
    }
}

#[cfg(test)]
#[path = "../../tests/unit/transform/engine.rs"]
mod tests;
