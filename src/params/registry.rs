use std::{fmt, str::FromStr};

use crate::{
    foundation::error::{SlidemorphError, SlidemorphResult},
    params::set::ParameterSet,
};

/// Identifier of a recognized instance parameter.
#[derive(
    Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, serde::Serialize, serde::Deserialize,
)]
pub enum ParamId {
    /// Horizontal position of instance 0, percent of canvas width.
    #[serde(rename = "x")]
    X,
    /// Vertical position of instance 0, percent of canvas height.
    #[serde(rename = "y")]
    Y,
    /// Number of instances.
    #[serde(rename = "count")]
    Count,
    /// Horizontal step per instance.
    #[serde(rename = "dx")]
    Dx,
    /// Vertical step per instance.
    #[serde(rename = "dy")]
    Dy,
    /// Scale of instance 0.
    #[serde(rename = "sc")]
    Scale,
    /// Scale step per instance.
    #[serde(rename = "dSc")]
    ScaleStep,
    /// Rotation of instance 0 in degrees.
    #[serde(rename = "rot")]
    Rotation,
    /// Rotation step per instance in degrees.
    #[serde(rename = "dRot")]
    RotationStep,
    /// Rotation origin x. Registered for the controls surface only.
    #[serde(rename = "origX")]
    OriginX,
    /// Rotation origin y. Registered for the controls surface only.
    #[serde(rename = "origY")]
    OriginY,
    /// Opacity of instance 0.
    #[serde(rename = "o")]
    Opacity,
    /// Opacity the sequence fades towards.
    #[serde(rename = "oe")]
    OpacityEnd,
    /// Transition duration in milliseconds.
    #[serde(rename = "tt")]
    TransitionMs,
}

impl ParamId {
    /// All ids in registry (display) order.
    pub const ALL: [ParamId; 14] = [
        ParamId::X,
        ParamId::Y,
        ParamId::Count,
        ParamId::Dx,
        ParamId::Dy,
        ParamId::Scale,
        ParamId::ScaleStep,
        ParamId::Rotation,
        ParamId::RotationStep,
        ParamId::OriginX,
        ParamId::OriginY,
        ParamId::Opacity,
        ParamId::OpacityEnd,
        ParamId::TransitionMs,
    ];

    /// Stable string id used by the controls surface and CLI.
    pub fn as_str(self) -> &'static str {
        match self {
            ParamId::X => "x",
            ParamId::Y => "y",
            ParamId::Count => "count",
            ParamId::Dx => "dx",
            ParamId::Dy => "dy",
            ParamId::Scale => "sc",
            ParamId::ScaleStep => "dSc",
            ParamId::Rotation => "rot",
            ParamId::RotationStep => "dRot",
            ParamId::OriginX => "origX",
            ParamId::OriginY => "origY",
            ParamId::Opacity => "o",
            ParamId::OpacityEnd => "oe",
            ParamId::TransitionMs => "tt",
        }
    }
}

impl fmt::Display for ParamId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ParamId {
    type Err = SlidemorphError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        ParamId::ALL
            .into_iter()
            .find(|id| id.as_str() == s)
            .ok_or_else(|| SlidemorphError::unknown_parameter(s))
    }
}

/// Static description of one parameter: id, display label and default value.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ParameterDescriptor {
    /// Parameter id.
    pub id: ParamId,
    /// Label shown next to the input field.
    pub label: &'static str,
    /// Value used whenever a parameter set does not hold the id.
    pub default: f64,
}

const fn desc(id: ParamId, label: &'static str, default: f64) -> ParameterDescriptor {
    ParameterDescriptor { id, label, default }
}

// Indexed by `ParamId as usize`; order must match `ParamId::ALL`.
static REGISTRY: [ParameterDescriptor; 14] = [
    desc(ParamId::X, "x, %", 50.0),
    desc(ParamId::Y, "y, %", 50.0),
    desc(ParamId::Count, "count", 2.0),
    desc(ParamId::Dx, "step x", 0.0),
    desc(ParamId::Dy, "step y", 0.0),
    desc(ParamId::Scale, "initial scale", 1.0),
    desc(ParamId::ScaleStep, "scale step", 0.0),
    desc(ParamId::Rotation, "initial rotation, deg", 0.0),
    desc(ParamId::RotationStep, "rotation step, deg", 0.0),
    desc(ParamId::OriginX, "rotation origin x", 0.0),
    desc(ParamId::OriginY, "rotation origin y", 0.0),
    desc(ParamId::Opacity, "initial opacity", 1.0),
    desc(ParamId::OpacityEnd, "ending opacity", 0.0),
    desc(ParamId::TransitionMs, "transition duration, ms", 200.0),
];

/// Descriptor for a registered id.
pub fn descriptor(id: ParamId) -> &'static ParameterDescriptor {
    &REGISTRY[id as usize]
}

/// Descriptor for a string id, failing for ids outside the registry.
pub fn descriptor_by_name(name: &str) -> SlidemorphResult<&'static ParameterDescriptor> {
    Ok(descriptor(name.parse()?))
}

/// All descriptors in display order.
pub fn descriptors() -> impl Iterator<Item = &'static ParameterDescriptor> {
    REGISTRY.iter()
}

/// Committed value of `id` in `params`, falling back to the registry default.
pub fn resolve(params: &ParameterSet, id: ParamId) -> f64 {
    params.get(id).unwrap_or(descriptor(id).default)
}

#[cfg(test)]
#[path = "../../tests/unit/params/registry.rs"]
mod tests;
