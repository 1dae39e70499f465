//! green-rs: truncated Fourier-series Green's function on the unit square.
//!
//! The numeric core (`core::series`) is a pure evaluator of the double sine
//! series for the Dirichlet Laplacian. The `api` layer holds the mutable
//! viewer state and turns each evaluation into a backend-agnostic
//! `render::RenderFrame`; Cairo and GTK4 backends are opt-in features.

pub mod api;
pub mod core;
pub mod error;
pub mod render;
pub mod telemetry;

#[cfg(feature = "gtk4-adapter")]
pub mod platform_gtk;

pub use api::{GreenSession, SessionConfig};
pub use crate::core::{Grid, evaluate};
pub use error::{GreenError, GreenResult};
