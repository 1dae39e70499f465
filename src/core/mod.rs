pub mod grid;
pub mod order;
pub mod projection;
pub mod scale;
pub mod series;
pub mod types;

pub use grid::{DEFAULT_GRID_RESOLUTION, Grid, linspace};
pub use order::TruncationOrder;
pub use projection::{Camera, ProjectedPoint, ViewAngles};
pub use scale::LinearScale;
pub use series::{added_terms, evaluate, evaluate_point, mode_eigenvalue, mode_term, sin_pi};
pub use types::{Field, Point3, SourcePoint, Viewport, ZRange};
