use crate::{
    foundation::error::{SlidemorphError, SlidemorphResult},
    params::{
        registry::ParamId,
        set::{EditOutcome, ParameterSet, RawTextSet, SlideParams},
    },
    slides::content::VisualContent,
};

/// One saved configuration: parameters, their raw text, and optional content.
#[derive(Clone, Debug, Default)]
pub struct Slide {
    params: SlideParams,
    content: Option<VisualContent>,
}

impl Slide {
    /// Slide with the given committed values and no content.
    pub fn with_params(params: ParameterSet) -> Self {
        Self {
            params: SlideParams::from_values(params),
            content: None,
        }
    }

    /// Committed numeric values.
    pub fn params(&self) -> &ParameterSet {
        self.params.values()
    }

    /// Raw text as typed into the controls.
    pub fn text(&self) -> &RawTextSet {
        self.params.text()
    }

    /// Loaded content; `None` until a load completes.
    pub fn content(&self) -> Option<&VisualContent> {
        self.content.as_ref()
    }

    /// Return `true` if a load has been applied to this slide.
    pub fn has_content(&self) -> bool {
        self.content.is_some()
    }

    fn duplicate(&self) -> Self {
        Self {
            params: self.params.clone(),
            content: None,
        }
    }
}

/// Ordered, append-only sequence of slides plus the active selection.
///
/// All mutation goes through `&mut self` methods, so a reader never sees a raw text update
/// without its committed numeric counterpart.
#[derive(Clone, Debug)]
pub struct SlideStore {
    slides: Vec<Slide>,
    active: usize,
    revision: u64,
}

impl Default for SlideStore {
    fn default() -> Self {
        Self::new()
    }
}

impl SlideStore {
    /// Store with a single default slide selected.
    pub fn new() -> Self {
        Self::from_slide(Slide::default())
    }

    /// Store whose first slide is `first`.
    pub fn from_slide(first: Slide) -> Self {
        Self {
            slides: vec![first],
            active: 0,
            revision: 0,
        }
    }

    /// Number of slides.
    pub fn len(&self) -> usize {
        self.slides.len()
    }

    /// Always `false` through the public API; kept for the `len` convention.
    pub fn is_empty(&self) -> bool {
        self.slides.is_empty()
    }

    /// Index of the active slide.
    pub fn active_index(&self) -> usize {
        self.active
    }

    /// Counter bumped whenever what the active slide renders may have changed.
    pub fn revision(&self) -> u64 {
        self.revision
    }

    /// Iterate slides in sequence order.
    pub fn iter(&self) -> impl Iterator<Item = &Slide> + '_ {
        self.slides.iter()
    }

    /// The active slide.
    pub fn current_slide(&self) -> SlidemorphResult<&Slide> {
        if self.slides.is_empty() {
            return Err(SlidemorphError::NoSlides);
        }
        self.slide(self.active)
    }

    /// Bounds-checked slide accessor.
    pub fn slide(&self, index: usize) -> SlidemorphResult<&Slide> {
        self.slides
            .get(index)
            .ok_or_else(|| SlidemorphError::index_out_of_range(index, self.slides.len()))
    }

    fn slide_mut(&mut self, index: usize) -> SlidemorphResult<&mut Slide> {
        let len = self.slides.len();
        self.slides
            .get_mut(index)
            .ok_or_else(|| SlidemorphError::index_out_of_range(index, len))
    }

    /// Store `raw_text` for `id` on a slide, committing it when it parses as a finite number.
    #[tracing::instrument(skip(self))]
    pub fn update_param(
        &mut self,
        slide_index: usize,
        id: ParamId,
        raw_text: &str,
    ) -> SlidemorphResult<EditOutcome> {
        let outcome = self.slide_mut(slide_index)?.params.edit(id, raw_text);
        match &outcome {
            EditOutcome::Committed(v) => tracing::trace!(value = v, "param committed"),
            EditOutcome::Held(e) => tracing::debug!(error = %e, "param held"),
        }
        self.touch(slide_index);
        Ok(outcome)
    }

    /// Replace a slide's content; the latest call wins.
    #[tracing::instrument(skip(self, content))]
    pub fn load_content(
        &mut self,
        slide_index: usize,
        content: VisualContent,
    ) -> SlidemorphResult<()> {
        self.slide_mut(slide_index)?.content = Some(content);
        self.touch(slide_index);
        Ok(())
    }

    /// Append a copy of the active slide's params and text, without content.
    ///
    /// Returns the new slide's index. The selection does not move.
    #[tracing::instrument(skip(self))]
    pub fn duplicate_current(&mut self) -> SlidemorphResult<usize> {
        let copy = self.current_slide()?.duplicate();
        self.slides.push(copy);
        let index = self.slides.len() - 1;
        tracing::debug!(index, "slide duplicated");
        Ok(index)
    }

    /// Change the active slide.
    pub fn select(&mut self, index: usize) -> SlidemorphResult<()> {
        if index >= self.slides.len() {
            return Err(SlidemorphError::index_out_of_range(index, self.slides.len()));
        }
        if index != self.active {
            self.active = index;
            self.revision += 1;
        }
        Ok(())
    }

    fn touch(&mut self, slide_index: usize) {
        if slide_index == self.active {
            self.revision += 1;
        }
    }
}

#[cfg(test)]
#[path = "../../tests/unit/slides/store.rs"]
mod tests;
