use kurbo::{ParamCurve, ParamCurveArclen, PathEl};

use crate::foundation::{
    core::{BezPath, Point},
    error::{SlidemorphError, SlidemorphResult},
};

const ARCLEN_ACCURACY: f64 = 1e-4;

/// Tuning for path interpolation.
#[derive(Clone, Copy, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(default)]
pub struct InterpolateOptions {
    /// Upper bound on the distance between consecutive resampled points, in path units.
    pub max_segment_length: f64,
    /// Hard cap on resampled points per path.
    pub max_points: usize,
}

impl Default for InterpolateOptions {
    fn default() -> Self {
        Self {
            max_segment_length: 10.0,
            max_points: 2048,
        }
    }
}

impl InterpolateOptions {
    /// Reject option values that cannot produce a tween.
    pub fn validate(&self) -> SlidemorphResult<()> {
        if !(self.max_segment_length.is_finite() && self.max_segment_length > 0.0) {
            return Err(SlidemorphError::validation(
                "max_segment_length must be a positive number",
            ));
        }
        if self.max_points < 3 {
            return Err(SlidemorphError::validation("max_points must be >= 3"));
        }
        Ok(())
    }
}

/// Progress-to-path function produced for one morph step.
///
/// Takes progress in `[0, 1]` and returns SVG path data.
pub type PathTween = Box<dyn Fn(f64) -> String + Send + Sync>;

/// Builds tweens between two SVG path strings.
pub trait PathInterpolator {
    /// Build a tween from `source` (progress 0) to `target` (progress 1).
    fn build(
        &self,
        source: &str,
        target: &str,
        opts: &InterpolateOptions,
    ) -> SlidemorphResult<PathTween>;
}

/// Interpolator that resamples both paths by arc length and blends point pairs.
///
/// Only the first subpath of each path takes part. If either path is closed both are sampled
/// and blended as closed rings, rotated so that the target's start point minimizes the total
/// squared travel distance. Progress 0 and 1 return
/// the source and target strings unchanged.
#[derive(Clone, Copy, Debug, Default)]
pub struct ResamplingInterpolator;

impl PathInterpolator for ResamplingInterpolator {
    fn build(
        &self,
        source: &str,
        target: &str,
        opts: &InterpolateOptions,
    ) -> SlidemorphResult<PathTween> {
        opts.validate()?;
        let a = Ring::parse(source)?;
        let b = Ring::parse(target)?;

        let longest = a.length.max(b.length);
        let wanted = (longest / opts.max_segment_length).ceil();
        let n = if wanted.is_finite() {
            (wanted as usize).clamp(3, opts.max_points)
        } else {
            opts.max_points
        };
        let closed = a.closed || b.closed;

        let from = a.sample(n, closed);
        let mut to = b.sample(n, closed);
        if closed {
            let offset = best_rotation(&from, &to);
            to.rotate_left(offset);
        }

        let source = source.to_string();
        let target = target.to_string();
        Ok(Box::new(move |t| {
            if t <= 0.0 || t.is_nan() {
                return source.clone();
            }
            if t >= 1.0 {
                return target.clone();
            }
            blend(&from, &to, t, closed).to_svg()
        }))
    }
}

struct Ring {
    path: BezPath,
    start: Point,
    closed: bool,
    seg_lengths: Vec<f64>,
    length: f64,
}

impl Ring {
    fn parse(d: &str) -> SlidemorphResult<Self> {
        let full = BezPath::from_svg(d)
            .map_err(|e| SlidemorphError::validation(format!("invalid path data: {e}")))?;

        let mut path = BezPath::new();
        let mut start = None;
        let mut closed = false;
        for el in full.elements() {
            match *el {
                PathEl::MoveTo(p) => {
                    if start.is_some() {
                        break;
                    }
                    start = Some(p);
                }
                PathEl::ClosePath => {
                    closed = true;
                    path.push(*el);
                    break;
                }
                _ => {}
            }
            path.push(*el);
        }
        let start = start.ok_or_else(|| SlidemorphError::validation("path has no geometry"))?;

        let seg_lengths: Vec<f64> = path
            .segments()
            .map(|s| s.arclen(ARCLEN_ACCURACY))
            .collect();
        let length = seg_lengths.iter().sum();
        Ok(Self {
            path,
            start,
            closed,
            seg_lengths,
            length,
        })
    }

    /// `n` points evenly spaced by arc length; `closed` sampling skips the end point.
    fn sample(&self, n: usize, closed: bool) -> Vec<Point> {
        if self.length <= 0.0 {
            return vec![self.start; n];
        }
        let divisions = if closed { n } else { n - 1 };
        let step = self.length / divisions as f64;

        let segs: Vec<_> = self.path.segments().collect();
        let mut out = Vec::with_capacity(n);
        let mut seg = 0;
        let mut seg_start = 0.0;
        for k in 0..n {
            let d = (k as f64 * step).min(self.length);
            while seg + 1 < segs.len() && d > seg_start + self.seg_lengths[seg] {
                seg_start += self.seg_lengths[seg];
                seg += 1;
            }
            let local = (d - seg_start).clamp(0.0, self.seg_lengths[seg]);
            let t = if self.seg_lengths[seg] > 0.0 {
                segs[seg].inv_arclen(local, ARCLEN_ACCURACY)
            } else {
                0.0
            };
            out.push(segs[seg].eval(t));
        }
        out
    }
}

fn best_rotation(from: &[Point], to: &[Point]) -> usize {
    let n = to.len();
    let mut best = (0, f64::INFINITY);
    for offset in 0..n {
        let cost: f64 = from
            .iter()
            .enumerate()
            .map(|(i, p)| (*p - to[(i + offset) % n]).hypot2())
            .sum();
        if cost < best.1 {
            best = (offset, cost);
        }
    }
    best.0
}

fn blend(from: &[Point], to: &[Point], t: f64, closed: bool) -> BezPath {
    let mut out = BezPath::new();
    for (i, (a, b)) in from.iter().zip(to).enumerate() {
        let p = a.lerp(*b, t);
        if i == 0 {
            out.move_to(p);
        } else {
            out.line_to(p);
        }
    }
    if closed {
        out.close_path();
    }
    out
}

#[cfg(test)]
#[path = "../../tests/unit/morph/interp.rs"]
mod tests;
