use std::{path::PathBuf, sync::Arc, time::Duration};

use crate::{
    assets::{
        loader::{ContentLoader, FsContentLoader},
        queue::{LoadQueue, LoadReport},
    },
    foundation::{config::EngineConfig, error::SlidemorphResult},
    morph::{
        driver::{DriverState, MorphDriver, TickOutcome},
        interp::ResamplingInterpolator,
    },
    params::{
        registry::{ParamId, descriptors, resolve},
        set::EditOutcome,
    },
    render::{instances::InstanceRenderer, presenter::Presenter},
    slides::store::SlideStore,
};

/// One labelled input of the parameter form.
#[derive(Clone, Debug, PartialEq)]
pub struct ControlField {
    /// Parameter the field edits.
    pub id: ParamId,
    /// Display label.
    pub label: &'static str,
    /// Text shown in the field.
    pub value: String,
}

/// One entry of the slide selector.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct SlideButton {
    /// Slide index.
    pub index: usize,
    /// Whether this slide is the one being edited.
    pub active: bool,
}

/// Headless model of the editing surface: parameter form, slide selector, file picker and
/// play/pause toggle, wired to the store, loader queue and morph driver.
pub struct ControlsSurface {
    store: SlideStore,
    driver: MorphDriver,
    loads: LoadQueue,
    renderer: InstanceRenderer,
}

impl ControlsSurface {
    /// Surface with one default slide, loading files from the local filesystem.
    pub fn new(config: &EngineConfig) -> Self {
        Self::with_loader(config, Arc::new(FsContentLoader::new(config.frame)))
    }

    /// Surface with one default slide and a custom content loader.
    pub fn with_loader(config: &EngineConfig, loader: Arc<dyn ContentLoader>) -> Self {
        let renderer = InstanceRenderer::new(config.max_instances);
        Self {
            store: SlideStore::new(),
            driver: MorphDriver::new(ResamplingInterpolator, config.interpolate, renderer),
            loads: LoadQueue::new(loader),
            renderer,
        }
    }

    /// Slides behind the surface.
    pub fn store(&self) -> &SlideStore {
        &self.store
    }

    /// Playback state.
    pub fn state(&self) -> DriverState {
        self.driver.state()
    }

    /// Form fields for the active slide, in registry order.
    ///
    /// A field shows the raw text last typed into it, falling back to the committed value and
    /// then to the registry default.
    pub fn fields(&self) -> SlidemorphResult<Vec<ControlField>> {
        let slide = self.store.current_slide()?;
        Ok(descriptors()
            .map(|d| ControlField {
                id: d.id,
                label: d.label,
                value: match slide.text().get(d.id) {
                    Some(raw) => raw.to_owned(),
                    None => resolve(slide.params(), d.id).to_string(),
                },
            })
            .collect())
    }

    /// One selector entry per slide.
    pub fn slide_buttons(&self) -> Vec<SlideButton> {
        let active = self.store.active_index();
        (0..self.store.len())
            .map(|index| SlideButton {
                index,
                active: index == active,
            })
            .collect()
    }

    /// Type `raw` into the field `id` of the active slide.
    pub fn edit(&mut self, id: ParamId, raw: &str) -> SlidemorphResult<EditOutcome> {
        let active = self.store.active_index();
        self.store.update_param(active, id, raw)
    }

    /// Append a copy of the active slide. Returns its index.
    pub fn add_slide(&mut self) -> SlidemorphResult<usize> {
        self.store.duplicate_current()
    }

    /// Switch the slide being edited.
    pub fn select(&mut self, index: usize) -> SlidemorphResult<()> {
        self.store.select(index)
    }

    /// Start loading `path` into the active slide. The content appears once the load is applied.
    pub fn pick_file(&mut self, path: impl Into<PathBuf>) {
        self.loads.request(self.store.active_index(), path);
    }

    /// Apply finished loads without blocking.
    pub fn apply_loads(&mut self) -> Vec<LoadReport> {
        self.loads.apply(&mut self.store)
    }

    /// Block until every pending load is applied.
    pub fn wait_for_loads(&mut self) -> Vec<LoadReport> {
        self.loads.wait_all(&mut self.store)
    }

    /// Start or stop morph playback.
    pub fn toggle_play(&mut self, now: Duration) -> SlidemorphResult<DriverState> {
        self.driver.toggle(&self.store, now)
    }

    /// Draw one frame at `now`.
    ///
    /// Finished loads are applied first. While playing the driver draws the morph; otherwise
    /// the active slide's static instances are drawn and [`TickOutcome::Idle`] is returned.
    pub fn frame(&mut self, now: Duration, presenter: &mut dyn Presenter) -> TickOutcome {
        self.apply_loads();
        if self.driver.is_playing() {
            return self.driver.tick(&self.store, now, presenter);
        }
        if let Ok(slide) = self.store.current_slide() {
            self.renderer.render_slide(slide, presenter);
        }
        TickOutcome::Idle
    }
}

#[cfg(test)]
#[path = "../../tests/unit/controls/surface.rs"]
mod tests;
