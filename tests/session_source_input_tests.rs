use std::cell::Cell;
use std::rc::Rc;

use green_rs::GreenError;
use green_rs::api::{GreenSession, SessionConfig};
use green_rs::core::{SourcePoint, Viewport};
use green_rs::render::NullRenderer;

fn session() -> GreenSession<NullRenderer> {
    let config = SessionConfig::new(Viewport::new(320, 240)).with_grid_resolution(12);
    GreenSession::new(NullRenderer::default(), config).expect("session init")
}

#[test]
fn invalid_text_leaves_state_untouched_and_notifies_once() {
    let mut session = session();
    let notifications = Rc::new(Cell::new(0usize));
    {
        let notifications = Rc::clone(&notifications);
        session.set_error_notifier(move |err| {
            assert!(matches!(err, GreenError::InvalidNumericInput { .. }));
            notifications.set(notifications.get() + 1);
        });
    }
    session.render().expect("initial render");

    let field = session.field().clone();
    let readout = session.readout().clone();
    let generation = session.generation();

    let err = session
        .set_source_from_text("abc", "0.5")
        .expect_err("non-numeric x_0 must be rejected");

    assert!(matches!(
        err,
        GreenError::InvalidNumericInput { field: "x_0", .. }
    ));
    assert_eq!(notifications.get(), 1);
    assert_eq!(session.source(), SourcePoint::new(0.25, 0.5));
    assert_eq!(session.field(), &field);
    assert_eq!(session.readout(), &readout);
    assert_eq!(session.generation(), generation);
    assert_eq!(session.renderer().frames_rendered, 1);
}

#[test]
fn invalid_second_entry_does_not_apply_first() {
    let mut session = session();
    let err = session
        .set_source_from_text("0.7", "")
        .expect_err("empty y_0 must be rejected");

    assert!(matches!(
        err,
        GreenError::InvalidNumericInput { field: "y_0", .. }
    ));
    assert_eq!(session.source(), SourcePoint::new(0.25, 0.5));
}

#[test]
fn valid_text_moves_source_and_refreshes() {
    let mut session = session();
    let field = session.field().clone();

    session
        .set_source_from_text(" 0.6", "0.3 ")
        .expect("valid coordinates");

    assert_eq!(session.source(), SourcePoint::new(0.6, 0.3));
    assert_eq!(session.readout().source, "(x_0,y_0) = (0.6,0.3)");
    assert_eq!(session.generation(), 2);
    assert_ne!(session.field(), &field);

    let marker = &session.scene().overlays[0];
    assert_eq!(marker.points[0].x, 0.6);
    assert_eq!(marker.points[0].y, 0.3);
}

#[test]
fn setting_the_same_source_still_reevaluates() {
    let mut session = session();
    session
        .set_source_from_text("0.25", "0.5")
        .expect("valid coordinates");
    assert_eq!(session.generation(), 2);
}

#[test]
fn sources_outside_the_square_are_accepted() {
    let mut session = session();
    session
        .set_source_from_text("1.5", "-0.25")
        .expect("out-of-square sources are not rejected");

    assert_eq!(session.source(), SourcePoint::new(1.5, -0.25));
    assert!(session.field().iter().all(|value| value.is_finite()));
}

#[test]
fn non_finite_numeric_source_is_rejected() {
    let mut session = session();
    let err = session
        .set_source(SourcePoint::new(f64::NAN, 0.5))
        .expect_err("nan source");
    assert!(matches!(err, GreenError::InvalidData(_)));
    assert_eq!(session.generation(), 1);
}

#[test]
fn huge_finite_sources_keep_the_session_renderable() {
    let mut session = session();

    session
        .set_source_from_text("1e307", "0.5")
        .expect("huge but finite x_0 is accepted");
    assert!(session.field().iter().all(|value| value.is_finite()));
    session.render().expect("render after huge source");
    assert!(session.increment_order());
    session.render().expect("render after order step");

    session
        .set_source_from_text("1.7e308", "0.5")
        .expect("near-max x_0 is accepted");
    assert!(session.field().iter().all(|value| value.is_finite()));
    session.render().expect("render after near-max source");
    assert_eq!(session.renderer().frames_rendered, 3);
}
