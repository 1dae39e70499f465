use serde::{Deserialize, Serialize};

use crate::core::{SourcePoint, TruncationOrder};

/// Mutable parameters owned by the presentation layer.
///
/// The evaluator never sees this record; sessions read it when rebuilding
/// the scene.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct PresentationState {
    pub order: TruncationOrder,
    pub source: SourcePoint,
}

impl PresentationState {
    #[must_use]
    pub fn new(order: TruncationOrder, source: SourcePoint) -> Self {
        Self { order, source }
    }
}
