use super::*;
use crate::{
    foundation::core::{BezPath, Vec2},
    params::{registry::ParamId, set::ParameterSet},
    render::presenter::RecordingPresenter,
    slides::{
        content::{VectorContent, VisualContent},
        store::SlideStore,
    },
};

fn store_with_content(params: &[(ParamId, &str)]) -> SlideStore {
    let mut store = SlideStore::new();
    for (id, raw) in params {
        store.update_param(0, *id, raw).unwrap();
    }
    store
        .load_content(
            0,
            VisualContent::Vector(VectorContent::new(
                BezPath::from_svg("M0 0L10 0L10 10Z").unwrap(),
                ViewBox::default(),
            )),
        )
        .unwrap();
    store
}

#[test]
fn contentless_slide_renders_nothing() {
    let store = SlideStore::new();
    let mut rec = RecordingPresenter::default();
    let drawn = InstanceRenderer::new(100).render_slide(store.current_slide().unwrap(), &mut rec);
    assert_eq!(drawn, 0);
    assert_eq!(rec.frames.len(), 1);
    assert!(rec.last_frame().unwrap().is_empty());
}

#[test]
fn renders_count_instances_with_derived_transforms() {
    let store = store_with_content(&[(ParamId::Count, "3"), (ParamId::Dx, "5")]);
    let slide = store.current_slide().unwrap();
    let mut rec = RecordingPresenter::default();
    assert_eq!(InstanceRenderer::new(100).render_slide(slide, &mut rec), 3);

    let frame = rec.last_frame().unwrap();
    assert_eq!(frame.len(), 3);
    for (i, inst) in frame.iter().enumerate() {
        assert_eq!(inst.index, i);
        assert_eq!(inst.transform, derive_transform(slide.params(), i));
        assert!(inst.path_d.is_some());
    }
    assert_eq!(frame[2].transform.position_percent, Vec2::new(60.0, 50.0));
}

#[test]
fn placements_are_lazy_and_capped() {
    let store = store_with_content(&[(ParamId::Count, "1000000")]);
    let slide = store.current_slide().unwrap();
    let renderer = InstanceRenderer::new(16);
    assert_eq!(renderer.count(slide), 16);
    assert_eq!(renderer.placements(slide).take(4).count(), 4);
    assert_eq!(renderer.placements(slide).count(), 16);
}

#[test]
fn geometry_override_shares_path_across_instances() {
    let mut store = SlideStore::from_slide(Slide::with_params(
        ParameterSet::new().with(ParamId::Count, 2.0),
    ));
    store.update_param(0, ParamId::Rotation, "45").unwrap();
    let slide = store.current_slide().unwrap();
    let mut rec = RecordingPresenter::default();
    let n = InstanceRenderer::new(10).render_with_geometry(
        slide,
        "M1 1L2 2",
        ViewBox::default(),
        &mut rec,
    );
    assert_eq!(n, 2);
    let frame = rec.last_frame().unwrap();
    assert!(frame.iter().all(|i| i.path_d.as_deref() == Some("M1 1L2 2")));
    assert_eq!(frame[1].transform.rotation_deg, 45.0);
}
