use std::time::Duration;

use crate::{
    foundation::{
        core::{Fps, ViewBox, duration_ms},
        error::{SlidemorphError, SlidemorphResult},
    },
    morph::{
        clock::{FrameClock, ManualClock},
        interp::{InterpolateOptions, PathInterpolator, PathTween, ResamplingInterpolator},
    },
    params::{
        registry::{ParamId, resolve},
        set::ParameterSet,
    },
    render::{instances::InstanceRenderer, presenter::Presenter},
    slides::{content::VectorContent, store::SlideStore},
};

/// Position of playback in the slide sequence.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct AnimationSession {
    /// Slide being morphed towards, from `step_index - 1`.
    pub step_index: usize,
    /// Timestamp the current step started at.
    pub step_start: Duration,
}

/// Externally visible driver state.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum DriverState {
    /// Not playing.
    Idle,
    /// Morphing towards `step_index`.
    Playing {
        /// Slide being morphed towards.
        step_index: usize,
    },
}

/// Result of one frame tick.
#[derive(Debug)]
pub enum TickOutcome {
    /// Driver is idle; nothing was drawn and nothing will be rescheduled.
    Idle,
    /// Step still in flight; schedule another tick.
    Continue {
        /// Current step.
        step_index: usize,
        /// Unclamped elapsed fraction of the step.
        progress: f64,
    },
    /// Step `from` completed and playback moved to step `to`.
    Advanced {
        /// Completed step.
        from: usize,
        /// New step.
        to: usize,
    },
    /// Last step completed; driver is idle again.
    Finished,
    /// Playback stopped because the next step could not start.
    Aborted(SlidemorphError),
}

impl TickOutcome {
    /// Return `true` when the caller should schedule another tick.
    pub fn keeps_playing(&self) -> bool {
        matches!(self, Self::Continue { .. } | Self::Advanced { .. })
    }
}

struct ActiveStep {
    session: AnimationSession,
    tween: PathTween,
    view_box: ViewBox,
}

/// Frame-driven state machine that morphs through the slide sequence.
pub struct MorphDriver<I = ResamplingInterpolator> {
    interpolator: I,
    options: InterpolateOptions,
    renderer: InstanceRenderer,
    active: Option<ActiveStep>,
}

impl<I: PathInterpolator> MorphDriver<I> {
    /// Idle driver.
    pub fn new(interpolator: I, options: InterpolateOptions, renderer: InstanceRenderer) -> Self {
        Self {
            interpolator,
            options,
            renderer,
            active: None,
        }
    }

    /// Current state.
    pub fn state(&self) -> DriverState {
        match &self.active {
            Some(step) => DriverState::Playing {
                step_index: step.session.step_index,
            },
            None => DriverState::Idle,
        }
    }

    /// Return `true` while playing.
    pub fn is_playing(&self) -> bool {
        self.active.is_some()
    }

    /// Session of the in-flight step, if playing.
    pub fn session(&self) -> Option<AnimationSession> {
        self.active.as_ref().map(|s| s.session)
    }

    /// Start playback from step 1, or stop it.
    ///
    /// Starting needs at least two slides whose first two carry vector content; on failure the
    /// driver stays idle and the reason is returned.
    #[tracing::instrument(skip(self, store))]
    pub fn toggle(&mut self, store: &SlideStore, now: Duration) -> SlidemorphResult<DriverState> {
        if self.active.take().is_some() {
            tracing::info!("playback stopped");
            return Ok(DriverState::Idle);
        }
        if store.len() < 2 {
            return Err(SlidemorphError::validation(
                "morph playback needs at least two slides",
            ));
        }
        self.active = Some(self.build_step(store, 1, now)?);
        tracing::info!(slides = store.len(), "playback started");
        Ok(self.state())
    }

    /// Advance playback to `now` and draw the frame.
    pub fn tick(
        &mut self,
        store: &SlideStore,
        now: Duration,
        presenter: &mut dyn Presenter,
    ) -> TickOutcome {
        let Some(step) = &self.active else {
            return TickOutcome::Idle;
        };
        let (step_index, view_box) = (step.session.step_index, step.view_box);

        let slide = match store.slide(step_index) {
            Ok(slide) => slide,
            Err(e) => return self.abort(e),
        };
        let progress = step_progress(slide.params(), step.session.step_start, now);
        let geometry = (step.tween)(progress.min(1.0));
        self.renderer
            .render_with_geometry(slide, &geometry, view_box, presenter);

        if progress < 1.0 {
            return TickOutcome::Continue {
                step_index,
                progress,
            };
        }

        let next = step_index + 1;
        if next >= store.len() {
            self.active = None;
            tracing::info!("playback finished");
            return TickOutcome::Finished;
        }
        match self.build_step(store, next, now) {
            Ok(step) => {
                self.active = Some(step);
                tracing::debug!(from = step_index, to = next, "morph step advanced");
                TickOutcome::Advanced {
                    from: step_index,
                    to: next,
                }
            }
            Err(e) => self.abort(e),
        }
    }

    /// Geometry the in-flight step shows at `now`, without mutating playback.
    pub fn current_geometry(&self, store: &SlideStore, now: Duration) -> Option<String> {
        let step = self.active.as_ref()?;
        let slide = store.slide(step.session.step_index).ok()?;
        let progress = step_progress(slide.params(), step.session.step_start, now);
        Some((step.tween)(progress.min(1.0)))
    }

    fn build_step(
        &self,
        store: &SlideStore,
        step_index: usize,
        now: Duration,
    ) -> SlidemorphResult<ActiveStep> {
        let source = vector_content(store, step_index - 1)?;
        let target = vector_content(store, step_index)?;
        let tween = self
            .interpolator
            .build(&source.path_d, &target.path_d, &self.options)?;
        Ok(ActiveStep {
            session: AnimationSession {
                step_index,
                step_start: now,
            },
            tween,
            view_box: target.view_box,
        })
    }

    fn abort(&mut self, err: SlidemorphError) -> TickOutcome {
        self.active = None;
        tracing::warn!(error = %err, "playback aborted");
        TickOutcome::Aborted(err)
    }
}

fn vector_content(store: &SlideStore, index: usize) -> SlidemorphResult<&VectorContent> {
    store
        .slide(index)?
        .content()
        .and_then(|c| c.as_vector())
        .ok_or_else(|| SlidemorphError::missing_content(index))
}

/// Unclamped fraction of a step's `tt` elapsed between `start` and `now`.
///
/// A non-positive or non-finite duration completes the step immediately.
fn step_progress(params: &ParameterSet, start: Duration, now: Duration) -> f64 {
    let tt = resolve(params, ParamId::TransitionMs);
    if !(tt.is_finite() && tt > 0.0) {
        return 1.0;
    }
    duration_ms(now.saturating_sub(start)) / tt
}

/// Summary of an offline playback run.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct PlaybackSummary {
    /// Frames drawn.
    pub frames: usize,
    /// Steps completed.
    pub steps: usize,
    /// Whether the run reached the end of the sequence.
    pub finished: bool,
}

/// Play the whole sequence against a [`ManualClock`] at `fps`, drawing every frame.
///
/// Stops after `frame_limit` frames if the sequence has not finished by then.
pub fn play_offline<I: PathInterpolator>(
    driver: &mut MorphDriver<I>,
    store: &SlideStore,
    fps: Fps,
    presenter: &mut dyn Presenter,
    frame_limit: usize,
) -> SlidemorphResult<PlaybackSummary> {
    let clock = ManualClock::default();
    if driver.is_playing() {
        driver.toggle(store, clock.now())?;
    }
    driver.toggle(store, clock.now())?;

    let mut summary = PlaybackSummary {
        frames: 0,
        steps: 0,
        finished: false,
    };
    while summary.frames < frame_limit {
        let outcome = driver.tick(store, clock.now(), presenter);
        summary.frames += 1;
        match outcome {
            TickOutcome::Continue { .. } => {}
            TickOutcome::Advanced { .. } => summary.steps += 1,
            TickOutcome::Finished => {
                summary.steps += 1;
                summary.finished = true;
                break;
            }
            TickOutcome::Aborted(e) => return Err(e),
            TickOutcome::Idle => break,
        }
        clock.advance(fps.frame_duration());
    }
    Ok(summary)
}

#[cfg(test)]
#[path = "../../tests/unit/morph/driver.rs"]
mod tests;
