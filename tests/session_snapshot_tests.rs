use green_rs::api::{GreenSession, SessionConfig, SessionSnapshot};
use green_rs::render::NullRenderer;

#[test]
fn default_snapshot_reports_viewer_state() {
    let session = GreenSession::new(NullRenderer::default(), SessionConfig::default())
        .expect("session init");
    let snapshot = session.snapshot().expect("snapshot");

    assert_eq!(snapshot.order, 2);
    assert_eq!(snapshot.grid_shape, (50, 50));
    assert_eq!(snapshot.generation, 1);
    assert_eq!(snapshot.readout.order, "N = 2");
    assert_eq!(snapshot.readout.source, "(x_0,y_0) = (0.25,0.5)");
    assert!(snapshot.field_max >= 0.0);
    assert!(snapshot.field_min < 0.0);
    assert!(snapshot.value_near_source < 0.0);
    assert!(snapshot.value_near_source >= snapshot.field_min);
}

#[test]
fn snapshot_json_round_trips() {
    let mut session = GreenSession::new(
        NullRenderer::default(),
        SessionConfig::default().with_grid_resolution(9),
    )
    .expect("session init");
    assert!(session.increment_order());

    let json = session.snapshot_json_pretty().expect("json");
    let restored: SessionSnapshot = serde_json::from_str(&json).expect("parse snapshot");

    assert_eq!(restored, session.snapshot().expect("snapshot"));
    assert_eq!(restored.order, 3);
    assert_eq!(restored.generation, 2);
}
