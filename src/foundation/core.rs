use std::time::Duration;

use crate::foundation::error::{SlidemorphError, SlidemorphResult};

pub use kurbo::{Affine, BezPath, Point, Rect, Size, Vec2};

/// Presentation surface dimensions in pixels.
#[derive(Clone, Copy, Debug, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct Canvas {
    /// Width in pixels.
    pub width: u32,
    /// Height in pixels.
    pub height: u32,
}

impl Canvas {
    /// Convert a percentage position into canvas pixels.
    pub fn percent_to_px(self, percent: Vec2) -> Point {
        Point::new(
            percent.x / 100.0 * f64::from(self.width),
            percent.y / 100.0 * f64::from(self.height),
        )
    }
}

impl Default for Canvas {
    fn default() -> Self {
        Self {
            width: 800,
            height: 600,
        }
    }
}

/// Canonical coordinate frame that loaded vector content is normalized into.
#[derive(Clone, Copy, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(default)]
pub struct ViewBox {
    /// Frame width in user units.
    pub width: f64,
    /// Frame height in user units.
    pub height: f64,
    /// Inset kept free on every side when fitting content.
    pub padding: f64,
}

impl ViewBox {
    /// Frame bounds as a rectangle anchored at the origin.
    pub fn rect(self) -> Rect {
        Rect::new(0.0, 0.0, self.width, self.height)
    }

    /// Region content is fitted into (frame minus padding).
    pub fn content_rect(self) -> Rect {
        self.rect().inset(-self.padding)
    }

    /// Frame size as a `kurbo::Size`.
    pub fn size(self) -> Size {
        Size::new(self.width, self.height)
    }
}

impl Default for ViewBox {
    fn default() -> Self {
        Self {
            width: 100.0,
            height: 100.0,
            padding: 0.0,
        }
    }
}

/// Frames-per-second represented as a rational `num/den`.
#[derive(Clone, Copy, Debug, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct Fps {
    /// Numerator (frames).
    pub num: u32,
    /// Denominator (seconds), must be non-zero.
    pub den: u32,
}

impl Fps {
    /// Create a validated FPS value.
    pub fn new(num: u32, den: u32) -> SlidemorphResult<Self> {
        if den == 0 {
            return Err(SlidemorphError::validation("Fps den must be > 0"));
        }
        if num == 0 {
            return Err(SlidemorphError::validation("Fps num must be > 0"));
        }
        Ok(Self { num, den })
    }

    /// Duration of one frame.
    pub fn frame_duration(self) -> Duration {
        Duration::from_nanos(u64::from(self.den) * 1_000_000_000 / u64::from(self.num))
    }
}

impl Default for Fps {
    fn default() -> Self {
        Self { num: 60, den: 1 }
    }
}

/// Milliseconds as `f64`, the unit slide durations are authored in.
pub fn duration_ms(d: Duration) -> f64 {
    d.as_nanos() as f64 / 1_000_000.0
}
