use std::path::{Path, PathBuf};

use green_rs::api::{GreenSession, SessionConfig};
use green_rs::render::CairoRenderer;

const DEFAULT_OUTPUT_PATH: &str = "green.png";

fn main() {
    let _ = green_rs::telemetry::init_default_tracing();

    let output = std::env::args()
        .nth(1)
        .map_or_else(|| PathBuf::from(DEFAULT_OUTPUT_PATH), PathBuf::from);

    if let Err(err) = run(&output) {
        eprintln!("failed to render {}: {err}", output.display());
        std::process::exit(1);
    }
    println!("wrote {}", output.display());
}

fn run(output: &Path) -> green_rs::GreenResult<()> {
    let config = SessionConfig::default();
    let renderer = CairoRenderer::new(
        i32::try_from(config.viewport.width).unwrap_or(i32::MAX),
        i32::try_from(config.viewport.height).unwrap_or(i32::MAX),
    )?;
    let mut session = GreenSession::new(renderer, config)?;
    session.render()?;
    session.renderer().write_png(output)
}
