use green_rs::GreenError;
use green_rs::api::{GreenSession, SessionConfig};
use green_rs::core::{SourcePoint, TruncationOrder, Viewport};
use green_rs::render::NullRenderer;

#[test]
fn minimal_json_fills_viewer_defaults() {
    let config = SessionConfig::from_json_str(r#"{"viewport":{"width":640,"height":480}}"#)
        .expect("minimal config");

    assert_eq!(config.viewport, Viewport::new(640, 480));
    assert_eq!(config.grid_resolution, 50);
    assert_eq!(config.initial_order.get(), 2);
    assert_eq!(config.initial_source, SourcePoint::new(0.25, 0.5));
}

#[test]
fn json_round_trip_preserves_config() {
    let config = SessionConfig::default()
        .with_order(TruncationOrder::new(12).expect("order"))
        .with_source(SourcePoint::new(0.7, 0.2));
    let json = config.to_json_pretty().expect("serialize");
    let restored = SessionConfig::from_json_str(&json).expect("deserialize");
    assert_eq!(restored, config);
}

#[test]
fn out_of_range_initial_order_is_rejected() {
    for order in [0, 1, 201] {
        let json = format!(
            r#"{{"viewport":{{"width":640,"height":480}},"initial_order":{order}}}"#
        );
        let err = SessionConfig::from_json_str(&json).expect_err("order outside bounds");
        assert!(matches!(err, GreenError::InvalidData(_)));
    }
}

#[test]
fn session_rejects_invalid_config() {
    let err = GreenSession::new(
        NullRenderer::default(),
        SessionConfig::new(Viewport::new(0, 480)),
    )
    .err()
    .expect("zero viewport");
    assert!(matches!(err, GreenError::InvalidViewport { .. }));

    let err = GreenSession::new(
        NullRenderer::default(),
        SessionConfig::default().with_grid_resolution(1),
    )
    .err()
    .expect("degenerate grid");
    assert!(matches!(err, GreenError::InvalidGrid(_)));
}
