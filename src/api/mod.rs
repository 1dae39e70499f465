//! Presentation layer: mutable viewer state, scene building and rendering.

mod readout;
mod scene;
mod session;
mod session_config;
mod session_snapshot;
mod source_input;
mod state;
mod surface_render_frame_builder;

pub use readout::Readout;
pub use scene::{MarkerShape, OverlayPolyline, OverlayStyle, SurfaceScene};
pub use session::GreenSession;
pub use session_config::{SessionConfig, SurfaceStyle};
pub use session_snapshot::SessionSnapshot;
pub use source_input::{parse_coordinate, parse_source};
pub use state::PresentationState;
pub use surface_render_frame_builder::build_surface_frame;
