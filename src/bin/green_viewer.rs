use gtk4 as gtk;
use gtk4::prelude::*;

use green_rs::api::{GreenSession, SessionConfig};
use green_rs::platform_gtk::GtkGreenAdapter;
use green_rs::render::CairoRenderer;

fn main() {
    let _ = green_rs::telemetry::init_default_tracing();

    let app = gtk::Application::builder()
        .application_id("rs.green.viewer")
        .build();
    app.connect_activate(build_ui);
    app.run();
}

fn build_ui(app: &gtk::Application) {
    let session = match build_session() {
        Ok(session) => session,
        Err(err) => {
            eprintln!("failed to initialize green function session: {err}");
            return;
        }
    };

    let adapter = GtkGreenAdapter::new(session);

    let window = gtk::ApplicationWindow::builder()
        .application(app)
        .title("Green function")
        .build();
    window.set_child(Some(adapter.widget()));
    window.present();
}

fn build_session() -> green_rs::GreenResult<GreenSession<CairoRenderer>> {
    let config = SessionConfig::default();
    let renderer = CairoRenderer::new(
        i32::try_from(config.viewport.width).unwrap_or(i32::MAX),
        i32::try_from(config.viewport.height).unwrap_or(i32::MAX),
    )?;
    GreenSession::new(renderer, config)
}
