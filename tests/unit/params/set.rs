use super::*;

#[test]
fn numeric_text_commits_both() {
    let mut p = SlideParams::default();
    let out = p.edit(ParamId::X, "3.5");
    assert_eq!(out.committed(), Some(3.5));
    assert_eq!(p.text().get(ParamId::X), Some("3.5"));
    assert_eq!(p.values().get(ParamId::X), Some(3.5));
}

#[test]
fn garbage_text_keeps_previous_value() {
    let mut p = SlideParams::default();
    p.edit(ParamId::Dx, "12");
    let out = p.edit(ParamId::Dx, "abc");
    assert!(matches!(out, EditOutcome::Held(SlidemorphError::Parse(_))));
    assert_eq!(p.text().get(ParamId::Dx), Some("abc"));
    assert_eq!(p.values().get(ParamId::Dx), Some(12.0));
}

#[test]
fn mid_edit_states_are_held() {
    let mut p = SlideParams::default();
    for raw in ["-", "", "  ", "1e", "NaN", "inf", "-infinity"] {
        assert!(p.edit(ParamId::Y, raw).committed().is_none(), "{raw:?}");
        assert_eq!(p.text().get(ParamId::Y), Some(raw));
    }
    assert_eq!(p.values().get(ParamId::Y), None);
}

#[test]
fn parse_finite_accepts_common_forms() {
    assert_eq!(parse_finite("-4").unwrap(), -4.0);
    assert_eq!(parse_finite(" 0.25 ").unwrap(), 0.25);
    assert_eq!(parse_finite(".5").unwrap(), 0.5);
    assert_eq!(parse_finite("1e3").unwrap(), 1000.0);
}

#[test]
fn parameter_set_serializes_with_string_ids() {
    let set = ParameterSet::new()
        .with(ParamId::ScaleStep, 0.5)
        .with(ParamId::TransitionMs, 200.0);
    let json = serde_json::to_string(&set).unwrap();
    assert_eq!(json, r#"{"dSc":0.5,"tt":200.0}"#);
    let back: ParameterSet = serde_json::from_str(&json).unwrap();
    assert_eq!(back, set);
}
