use ordered_float::OrderedFloat;
use serde::{Deserialize, Serialize};

use crate::core::{SourcePoint, ZRange};
use crate::error::{GreenError, GreenResult};
use crate::render::Renderer;

use super::{GreenSession, Readout};

/// Serializable session state used by regression tests and debugging tools.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SessionSnapshot {
    pub order: u32,
    pub source: SourcePoint,
    pub grid_shape: (usize, usize),
    pub z_range: ZRange,
    pub field_min: f64,
    pub field_max: f64,
    /// Field value at the grid node nearest to the source.
    pub value_near_source: f64,
    pub readout: Readout,
    pub generation: u64,
}

impl<R: Renderer> GreenSession<R> {
    pub fn snapshot(&self) -> GreenResult<SessionSnapshot> {
        let field = self.field();
        let source = self.source();
        let field_min = field.iter().copied().map(OrderedFloat).min();
        let field_max = field.iter().copied().map(OrderedFloat).max();
        let (Some(field_min), Some(field_max)) = (field_min, field_max) else {
            return Err(GreenError::InvalidGrid("field is empty".to_owned()));
        };
        let value_near_source = self
            .grid()
            .nearest_node(source.x, source.y)
            .and_then(|index| field.get(index).copied())
            .ok_or_else(|| GreenError::InvalidGrid("field is empty".to_owned()))?;

        Ok(SessionSnapshot {
            order: self.order(),
            source,
            grid_shape: self.grid().shape(),
            z_range: self.scene().z_range,
            field_min: field_min.0,
            field_max: field_max.0,
            value_near_source,
            readout: self.readout().clone(),
            generation: self.generation(),
        })
    }

    pub fn snapshot_json_pretty(&self) -> GreenResult<String> {
        let snapshot = self.snapshot()?;
        serde_json::to_string_pretty(&snapshot)
            .map_err(|e| GreenError::InvalidData(format!("failed to serialize snapshot: {e}")))
    }
}
