use super::*;
use crate::{
    foundation::core::BezPath,
    render::presenter::RecordingPresenter,
    slides::content::{ImageContent, VisualContent},
};

fn ms(v: u64) -> Duration {
    Duration::from_millis(v)
}

fn vector(d: &str) -> VisualContent {
    VisualContent::Vector(VectorContent::new(
        BezPath::from_svg(d).unwrap(),
        ViewBox::default(),
    ))
}

const SHAPES: [&str; 3] = [
    "M10 10L90 10L90 90L10 90Z",
    "M50 5L95 95L5 95Z",
    "M20 20L80 20L80 80Z",
];

/// Store of `n` slides, each with content and `tt` set to `tt_ms`.
fn store(n: usize, tt_ms: &str) -> SlideStore {
    let mut store = SlideStore::new();
    store.update_param(0, ParamId::TransitionMs, tt_ms).unwrap();
    for _ in 1..n {
        store.duplicate_current().unwrap();
    }
    for i in 0..n {
        store.load_content(i, vector(SHAPES[i % SHAPES.len()])).unwrap();
    }
    store
}

fn driver() -> MorphDriver {
    MorphDriver::new(
        ResamplingInterpolator,
        InterpolateOptions::default(),
        InstanceRenderer::new(100),
    )
}

#[test]
fn three_slide_walk_advances_then_finishes() {
    let store = store(3, "100");
    let mut d = driver();
    let mut rec = RecordingPresenter::default();

    assert_eq!(
        d.toggle(&store, ms(0)).unwrap(),
        DriverState::Playing { step_index: 1 }
    );
    assert_eq!(d.session().unwrap().step_index, 1);

    assert!(matches!(
        d.tick(&store, ms(50), &mut rec),
        TickOutcome::Continue { step_index: 1, .. }
    ));
    assert!(matches!(
        d.tick(&store, ms(100), &mut rec),
        TickOutcome::Advanced { from: 1, to: 2 }
    ));
    assert_eq!(
        d.session(),
        Some(AnimationSession {
            step_index: 2,
            step_start: ms(100),
        })
    );
    assert!(matches!(
        d.tick(&store, ms(150), &mut rec),
        TickOutcome::Continue { step_index: 2, .. }
    ));
    assert!(matches!(
        d.tick(&store, ms(200), &mut rec),
        TickOutcome::Finished
    ));
    assert_eq!(d.state(), DriverState::Idle);
    assert!(matches!(d.tick(&store, ms(250), &mut rec), TickOutcome::Idle));
}

#[test]
fn progress_is_capped_before_interpolation() {
    let store = store(3, "100");
    let mut d = driver();
    let mut rec = RecordingPresenter::default();
    d.toggle(&store, ms(0)).unwrap();

    let outcome = d.tick(&store, ms(350), &mut rec);
    assert!(matches!(outcome, TickOutcome::Advanced { from: 1, to: 2 }));
    let target = vector_content(&store, 1).unwrap();
    let frame = rec.last_frame().unwrap();
    assert_eq!(frame[0].path_d.as_deref(), Some(target.path_d.as_str()));
}

#[test]
fn late_tick_advances_only_one_step() {
    let store = store(3, "100");
    let mut d = driver();
    let mut rec = RecordingPresenter::default();
    d.toggle(&store, ms(0)).unwrap();
    d.tick(&store, ms(1000), &mut rec);
    assert_eq!(d.state(), DriverState::Playing { step_index: 2 });
}

#[test]
fn frames_write_shared_geometry_with_target_transforms() {
    let mut store = store(2, "100");
    store.update_param(1, ParamId::Count, "3").unwrap();
    store.update_param(1, ParamId::Dx, "10").unwrap();
    let mut d = driver();
    let mut rec = RecordingPresenter::default();
    d.toggle(&store, ms(0)).unwrap();
    d.tick(&store, ms(40), &mut rec);

    let frame = rec.last_frame().unwrap();
    assert_eq!(frame.len(), 3);
    let geometry = frame[0].path_d.clone();
    assert!(frame.iter().all(|i| i.path_d == geometry));
    assert_eq!(
        frame[2].transform,
        crate::transform::engine::derive_transform(store.slide(1).unwrap().params(), 2)
    );
    assert_eq!(geometry, d.current_geometry(&store, ms(40)));
}

#[test]
fn toggle_off_discards_session_and_restarts_at_one() {
    let store = store(3, "100");
    let mut d = driver();
    let mut rec = RecordingPresenter::default();
    d.toggle(&store, ms(0)).unwrap();
    d.tick(&store, ms(120), &mut rec);
    assert_eq!(d.state(), DriverState::Playing { step_index: 2 });

    assert_eq!(d.toggle(&store, ms(130)).unwrap(), DriverState::Idle);
    assert!(d.session().is_none());
    assert!(d.current_geometry(&store, ms(130)).is_none());

    let frames_before = rec.frames.len();
    assert!(matches!(d.tick(&store, ms(140), &mut rec), TickOutcome::Idle));
    assert_eq!(rec.frames.len(), frames_before);

    assert_eq!(
        d.toggle(&store, ms(500)).unwrap(),
        DriverState::Playing { step_index: 1 }
    );
    assert_eq!(d.session().unwrap().step_start, ms(500));
}

#[test]
fn needs_two_slides_to_start() {
    let store = store(1, "100");
    let mut d = driver();
    let err = d.toggle(&store, ms(0)).unwrap_err();
    assert!(matches!(err, SlidemorphError::Validation(_)));
    assert_eq!(d.state(), DriverState::Idle);
}

#[test]
fn missing_content_on_start_stays_idle() {
    let mut store = SlideStore::new();
    store.load_content(0, vector(SHAPES[0])).unwrap();
    store.duplicate_current().unwrap();
    let mut d = driver();
    let err = d.toggle(&store, ms(0)).unwrap_err();
    assert!(matches!(err, SlidemorphError::MissingContent { slide: 1 }));
    assert!(!d.is_playing());
}

#[test]
fn missing_content_mid_sequence_aborts() {
    let mut store = SlideStore::new();
    store.update_param(0, ParamId::TransitionMs, "100").unwrap();
    store.duplicate_current().unwrap();
    store.duplicate_current().unwrap();
    store.load_content(0, vector(SHAPES[0])).unwrap();
    store.load_content(1, vector(SHAPES[1])).unwrap();
    store
        .load_content(
            2,
            VisualContent::Image(ImageContent {
                source: "pic.png".into(),
                width: 10,
                height: 10,
            }),
        )
        .unwrap();

    let mut d = driver();
    let mut rec = RecordingPresenter::default();
    d.toggle(&store, ms(0)).unwrap();
    let outcome = d.tick(&store, ms(100), &mut rec);
    assert!(matches!(
        outcome,
        TickOutcome::Aborted(SlidemorphError::MissingContent { slide: 2 })
    ));
    assert!(!outcome.keeps_playing());
    assert_eq!(d.state(), DriverState::Idle);
}

#[test]
fn non_positive_duration_completes_immediately() {
    let store = store(2, "0");
    let mut d = driver();
    let mut rec = RecordingPresenter::default();
    d.toggle(&store, ms(0)).unwrap();
    assert!(matches!(d.tick(&store, ms(0), &mut rec), TickOutcome::Finished));
}

#[test]
fn each_slide_uses_its_own_duration() {
    let mut store = store(3, "100");
    store.update_param(2, ParamId::TransitionMs, "400").unwrap();
    let mut d = driver();
    let mut rec = RecordingPresenter::default();
    d.toggle(&store, ms(0)).unwrap();
    d.tick(&store, ms(100), &mut rec);
    match d.tick(&store, ms(300), &mut rec) {
        TickOutcome::Continue { step_index, progress } => {
            assert_eq!(step_index, 2);
            assert_eq!(progress, 0.5);
        }
        other => panic!("unexpected outcome {other:?}"),
    }
}

#[test]
fn offline_playback_runs_to_the_end() {
    let store = store(3, "100");
    let mut d = driver();
    let mut rec = RecordingPresenter::default();
    let fps = Fps::new(50, 1).unwrap();
    let summary = play_offline(&mut d, &store, fps, &mut rec, 1000).unwrap();
    assert!(summary.finished);
    assert_eq!(summary.steps, 2);
    assert_eq!(summary.frames, 11);
    assert_eq!(rec.frames.len(), 11);
    assert!(!d.is_playing());
}

#[test]
fn offline_playback_honours_frame_limit() {
    let store = store(3, "100");
    let mut d = driver();
    let mut rec = RecordingPresenter::default();
    let fps = Fps::new(50, 1).unwrap();
    let summary = play_offline(&mut d, &store, fps, &mut rec, 3).unwrap();
    assert!(!summary.finished);
    assert_eq!(summary.frames, 3);
}

#[test]
fn completed_last_step_draws_once_then_goes_idle() {
    let store = store(2, "100");
    let mut d = driver();
    let mut rec = RecordingPresenter::default();
    d.toggle(&store, ms(0)).unwrap();

    assert!(matches!(d.tick(&store, ms(150), &mut rec), TickOutcome::Finished));
    assert_eq!(rec.frames.len(), 1);
    assert!(matches!(d.tick(&store, ms(200), &mut rec), TickOutcome::Idle));
    assert_eq!(rec.frames.len(), 1);
    assert_eq!(d.current_geometry(&store, ms(200)), None);
}
