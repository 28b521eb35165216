use std::{fs::File, io::BufReader, path::Path};

use crate::{
    foundation::{
        core::{Canvas, Fps, ViewBox},
        error::{SlidemorphError, SlidemorphResult},
    },
    morph::interp::InterpolateOptions,
};

/// Instance cap applied when a config does not set one.
pub const DEFAULT_MAX_INSTANCES: usize = 1000;

/// Engine-wide settings shared by rendering, loading and playback.
///
/// Every field has a default, so a JSON document only needs the keys it overrides.
#[derive(Clone, Copy, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(default)]
pub struct EngineConfig {
    /// Presentation surface size.
    pub canvas: Canvas,
    /// Frame loaded vector content is normalized into.
    pub frame: ViewBox,
    /// Cap on rendered instances per slide.
    pub max_instances: usize,
    /// Path interpolation tuning.
    pub interpolate: InterpolateOptions,
    /// Frame rate for offline playback.
    pub fps: Fps,
}

impl EngineConfig {
    /// Parse a config from JSON text.
    pub fn from_json_str(s: &str) -> SlidemorphResult<Self> {
        serde_json::from_str(s)
            .map_err(|e| SlidemorphError::validation(format!("parse config JSON: {e}")))
    }

    /// Parse a config from a JSON reader.
    pub fn from_reader<R: std::io::Read>(r: R) -> SlidemorphResult<Self> {
        serde_json::from_reader(r)
            .map_err(|e| SlidemorphError::validation(format!("parse config JSON: {e}")))
    }

    /// Parse a config from a JSON file on disk.
    pub fn from_path(path: impl AsRef<Path>) -> SlidemorphResult<Self> {
        let path = path.as_ref();
        let f = File::open(path).map_err(|e| {
            SlidemorphError::validation(format!("open config JSON '{}': {e}", path.display()))
        })?;
        Self::from_reader(BufReader::new(f))
    }

    /// Reject values no renderer or driver can work with.
    pub fn validate(&self) -> SlidemorphResult<()> {
        if self.canvas.width == 0 || self.canvas.height == 0 {
            return Err(SlidemorphError::validation("canvas width/height must be > 0"));
        }
        let ViewBox {
            width,
            height,
            padding,
        } = self.frame;
        if !(width.is_finite() && height.is_finite() && width > 0.0 && height > 0.0) {
            return Err(SlidemorphError::validation("frame width/height must be > 0"));
        }
        if !(padding.is_finite() && padding >= 0.0 && padding * 2.0 < width.min(height)) {
            return Err(SlidemorphError::validation(
                "frame padding must be >= 0 and leave room for content",
            ));
        }
        Fps::new(self.fps.num, self.fps.den)?;
        self.interpolate.validate()
    }
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self {
            canvas: Canvas::default(),
            frame: ViewBox::default(),
            max_instances: DEFAULT_MAX_INSTANCES,
            interpolate: InterpolateOptions::default(),
            fps: Fps::default(),
        }
    }
}

#[cfg(test)]
#[path = "../../tests/unit/foundation/config.rs"]
mod tests;
