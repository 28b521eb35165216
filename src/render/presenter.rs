use std::path::PathBuf;

use crate::{
    foundation::core::ViewBox, slides::content::VisualContent,
    transform::engine::InstanceTransform,
};

/// One instance of a slide's content, ready for placement.
#[derive(Clone, Copy, Debug)]
pub struct Placement<'a> {
    /// Instance index in `[0, count)`.
    pub index: usize,
    /// Content shared by every instance of the slide.
    pub content: &'a VisualContent,
    /// Per-instance transform.
    pub transform: InstanceTransform,
}

/// Intermediate morph geometry for one instance.
#[derive(Clone, Copy, Debug)]
pub struct GeometryWrite<'a> {
    /// Instance index in `[0, count)`.
    pub index: usize,
    /// SVG path data shared by every instance within a morph step.
    pub path_d: &'a str,
    /// Frame the path data lives in.
    pub view_box: ViewBox,
    /// Per-instance transform.
    pub transform: InstanceTransform,
}

/// Presentation layer: owns actual output.
pub trait Presenter {
    /// Called before the first placement of a frame.
    fn begin_frame(&mut self) {}

    /// Draw static content for one instance.
    fn place(&mut self, placement: &Placement<'_>);

    /// Draw interpolated geometry for one instance.
    fn write_geometry(&mut self, write: &GeometryWrite<'_>);

    /// Called after the last placement of a frame.
    fn end_frame(&mut self) {}
}

/// What a [`RecordingPresenter`] saw for one instance.
#[derive(Clone, Debug, PartialEq)]
pub struct RecordedInstance {
    /// Instance index.
    pub index: usize,
    /// Transform the instance was drawn with.
    pub transform: InstanceTransform,
    /// Path data drawn, for vector content and morph writes.
    pub path_d: Option<String>,
    /// Image source drawn, for raster content.
    pub image: Option<PathBuf>,
}

/// Presenter that keeps every frame in memory.
///
/// Useful for headless hosts and tests.
#[derive(Clone, Debug, Default)]
pub struct RecordingPresenter {
    /// Completed frames, oldest first.
    pub frames: Vec<Vec<RecordedInstance>>,
    open: Vec<RecordedInstance>,
}

impl RecordingPresenter {
    /// Most recently completed frame.
    pub fn last_frame(&self) -> Option<&[RecordedInstance]> {
        self.frames.last().map(Vec::as_slice)
    }
}

impl Presenter for RecordingPresenter {
    fn begin_frame(&mut self) {
        self.open.clear();
    }

    fn place(&mut self, placement: &Placement<'_>) {
        let (path_d, image) = match placement.content {
            VisualContent::Vector(v) => (Some(v.path_d.clone()), None),
            VisualContent::Image(i) => (None, Some(i.source.clone())),
        };
        self.open.push(RecordedInstance {
            index: placement.index,
            transform: placement.transform,
            path_d,
            image,
        });
    }

    fn write_geometry(&mut self, write: &GeometryWrite<'_>) {
        self.open.push(RecordedInstance {
            index: write.index,
            transform: write.transform,
            path_d: Some(write.path_d.to_string()),
            image: None,
        });
    }

    fn end_frame(&mut self) {
        self.frames.push(std::mem::take(&mut self.open));
    }
}
