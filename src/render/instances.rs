use crate::{
    foundation::core::ViewBox,
    render::presenter::{GeometryWrite, Placement, Presenter},
    slides::store::Slide,
    transform::engine::{derive_transform, instance_count},
};

/// Expands a slide into per-instance placements.
#[derive(Clone, Copy, Debug)]
pub struct InstanceRenderer {
    max_instances: usize,
}

impl InstanceRenderer {
    /// Renderer that never emits more than `max_instances` instances per slide.
    pub fn new(max_instances: usize) -> Self {
        Self { max_instances }
    }

    /// Instances `slide` would render.
    pub fn count(&self, slide: &Slide) -> usize {
        instance_count(slide.params(), self.max_instances)
    }

    /// Lazily derive placements for `slide`; empty until content is loaded.
    pub fn placements<'a>(&self, slide: &'a Slide) -> impl Iterator<Item = Placement<'a>> + 'a {
        let count = if slide.has_content() {
            self.count(slide)
        } else {
            0
        };
        let content = slide.content();
        (0..count).filter_map(move |index| {
            Some(Placement {
                index,
                content: content?,
                transform: derive_transform(slide.params(), index),
            })
        })
    }

    /// Draw the static frame of `slide`. Returns the number of instances drawn.
    pub fn render_slide(&self, slide: &Slide, presenter: &mut dyn Presenter) -> usize {
        presenter.begin_frame();
        let mut drawn = 0;
        for placement in self.placements(slide) {
            presenter.place(&placement);
            drawn += 1;
        }
        presenter.end_frame();
        drawn
    }

    /// Draw `path_d` for every instance of `slide`, each with its own transform.
    pub fn render_with_geometry(
        &self,
        slide: &Slide,
        path_d: &str,
        view_box: ViewBox,
        presenter: &mut dyn Presenter,
    ) -> usize {
        let count = self.count(slide);
        presenter.begin_frame();
        for index in 0..count {
            presenter.write_geometry(&GeometryWrite {
                index,
                path_d,
                view_box,
                transform: derive_transform(slide.params(), index),
            });
        }
        presenter.end_frame();
        count
    }
}

#[cfg(test)]
#[path = "../../tests/unit/render/instances.rs"]
mod tests;
