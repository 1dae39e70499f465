use serde::{Deserialize, Serialize};

use super::PresentationState;

/// Text shown next to the plot for the current parameters.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Readout {
    /// `N = <order>`, also used as the plot title.
    pub order: String,
    /// `(x_0,y_0) = (<x0>,<y0>)`.
    pub source: String,
}

impl Readout {
    #[must_use]
    pub fn new(state: &PresentationState) -> Self {
        Self {
            order: format!("N = {}", state.order.get()),
            source: format!(
                "(x_0,y_0) = ({},{})",
                format_coordinate(state.source.x),
                format_coordinate(state.source.y)
            ),
        }
    }
}

// `Debug` keeps a trailing `.0` on whole numbers (`1.0`, not `1`).
fn format_coordinate(value: f64) -> String {
    format!("{value:?}")
}
