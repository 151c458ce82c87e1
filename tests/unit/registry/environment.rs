use super::*;

#[test]
fn scroll_metrics_fraction_uses_scrollable_extent() {
    let m = ScrollMetrics {
        offset: 500.0,
        scroll_height: 1500.0,
    };
    assert!((m.fraction(500.0) - 0.5).abs() < 1e-12);
    assert_eq!(m.fraction(1500.0), 0.0);

    let past_end = ScrollMetrics {
        offset: 5000.0,
        scroll_height: 1500.0,
    };
    assert_eq!(past_end.fraction(500.0), 1.0);
}

#[test]
fn static_environment_reports_pushed_state() {
    let mut env = StaticEnvironment::default();
    assert_eq!(env.viewport(), Size::new(1280.0, 720.0));
    assert_eq!(env.scroll_metrics(), ScrollMetrics::default());

    env.scroll.offset = 120.0;
    env.viewport = Size::new(400.0, 800.0);
    assert_eq!(env.scroll_metrics().offset, 120.0);
    assert_eq!(env.viewport().width, 400.0);
}

#[test]
fn static_environment_json_defaults_scroll() {
    let env: StaticEnvironment =
        serde_json::from_str(r#"{"viewport":{"width":800.0,"height":600.0}}"#).unwrap();
    assert_eq!(env, StaticEnvironment::new(800.0, 600.0));
}
