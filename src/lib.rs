//! Slidemorph is a parametric slide engine: each slide repeats one piece of visual content as a
//! series of transformed instances, and playback morphs vector geometry from slide to slide.
//!
//! # Pipeline overview
//!
//! 1. **Edit**: raw form text goes into a [`SlideStore`]; text that parses as a finite number is
//!    committed to the slide's [`ParameterSet`], anything else is held for display only.
//! 2. **Load**: files picked for a slide are loaded off the frame loop by a [`LoadQueue`] and
//!    normalized into a canonical [`ViewBox`].
//! 3. **Derive**: [`derive_transform`] turns a parameter set and an instance index into an
//!    [`InstanceTransform`] (position, scale, rotation, opacity).
//! 4. **Present**: an [`InstanceRenderer`] hands placements to a [`Presenter`] such as
//!    [`SvgScene`], which [`rasterize`] turns into pixels.
//! 5. **Morph**: a [`MorphDriver`] ticked by a [`FrameClock`] interpolates geometry between
//!    consecutive slides, one step per slide, each lasting that slide's `tt` milliseconds.
//!
//! Design constraints:
//!
//! - **No unsafe**: `unsafe` is forbidden in this crate.
//! - **No globals**: every piece of state is an owned value passed by reference.
//! - **Pure geometry**: the frame drawn at time `now` depends only on the playback session, the
//!   slides and `now`.
#![forbid(unsafe_code)]
#![deny(missing_docs)]

mod assets;
mod controls;
mod foundation;
mod morph;
mod params;
mod render;
mod slides;
mod transform;

pub use assets::loader::{ContentLoader, FsContentLoader};
pub use assets::normalize::normalize_path;
pub use assets::queue::{LoadQueue, LoadReport};
pub use controls::surface::{ControlField, ControlsSurface, SlideButton};
pub use foundation::config::{DEFAULT_MAX_INSTANCES, EngineConfig};
pub use foundation::core::{
    Affine, BezPath, Canvas, Fps, Point, Rect, Size, Vec2, ViewBox, duration_ms,
};
pub use foundation::error::{SlidemorphError, SlidemorphResult};
pub use morph::clock::{FrameClock, ManualClock, SystemClock};
pub use morph::driver::{
    AnimationSession, DriverState, MorphDriver, PlaybackSummary, TickOutcome, play_offline,
};
pub use morph::interp::{InterpolateOptions, PathInterpolator, PathTween, ResamplingInterpolator};
pub use params::registry::{
    ParamId, ParameterDescriptor, descriptor, descriptor_by_name, descriptors, resolve,
};
pub use params::set::{EditOutcome, ParameterSet, RawTextSet, SlideParams, parse_finite};
pub use render::instances::InstanceRenderer;
pub use render::presenter::{
    GeometryWrite, Placement, Presenter, RecordedInstance, RecordingPresenter,
};
pub use render::raster::{rasterize, write_png};
pub use render::svg::SvgScene;
pub use slides::content::{ImageContent, VectorContent, VisualContent, svg_stub};
pub use slides::store::{Slide, SlideStore};
pub use transform::engine::{InstanceTransform, derive_transform, instance_count};
