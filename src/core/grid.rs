use ndarray::Array2;

use crate::error::{GreenError, GreenResult};

/// Sample count along each axis of the default viewer grid.
pub const DEFAULT_GRID_RESOLUTION: usize = 50;

/// Fixed sample grid over the unit square.
///
/// Holds the `(X, Y)` coordinate arrays of a meshgrid: row `r` follows `y`,
/// column `c` follows `x`. Both arrays always share one shape.
#[derive(Debug, Clone, PartialEq)]
pub struct Grid {
    x: Array2<f64>,
    y: Array2<f64>,
}

impl Grid {
    /// Builds a `resolution x resolution` meshgrid of `linspace(0, 1, resolution)`.
    pub fn uniform(resolution: usize) -> GreenResult<Self> {
        if resolution < 2 {
            return Err(GreenError::InvalidGrid(format!(
                "grid resolution must be >= 2, got {resolution}"
            )));
        }

        let axis = linspace(0.0, 1.0, resolution);
        let x = Array2::from_shape_fn((resolution, resolution), |(_, col)| axis[col]);
        let y = Array2::from_shape_fn((resolution, resolution), |(row, _)| axis[row]);
        Ok(Self { x, y })
    }

    /// Wraps caller-provided coordinate arrays.
    pub fn from_arrays(x: Array2<f64>, y: Array2<f64>) -> GreenResult<Self> {
        if x.dim() != y.dim() {
            return Err(GreenError::InvalidGrid(format!(
                "coordinate arrays must share one shape, got {:?} and {:?}",
                x.dim(),
                y.dim()
            )));
        }
        if x.is_empty() {
            return Err(GreenError::InvalidGrid(
                "coordinate arrays must not be empty".to_owned(),
            ));
        }
        if x.iter().chain(y.iter()).any(|value| !value.is_finite()) {
            return Err(GreenError::InvalidGrid(
                "grid coordinates must be finite".to_owned(),
            ));
        }

        Ok(Self { x, y })
    }

    #[must_use]
    pub fn x(&self) -> &Array2<f64> {
        &self.x
    }

    #[must_use]
    pub fn y(&self) -> &Array2<f64> {
        &self.y
    }

    /// `(rows, cols)` shape shared by both coordinate arrays.
    #[must_use]
    pub fn shape(&self) -> (usize, usize) {
        self.x.dim()
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.x.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.x.is_empty()
    }

    /// Coordinates of the node at `(row, col)`.
    #[must_use]
    pub fn node(&self, row: usize, col: usize) -> Option<(f64, f64)> {
        Some((*self.x.get((row, col))?, *self.y.get((row, col))?))
    }

    /// Index of the node closest to `(x, y)` in Euclidean distance.
    #[must_use]
    pub fn nearest_node(&self, x: f64, y: f64) -> Option<(usize, usize)> {
        self.x
            .indexed_iter()
            .zip(self.y.iter())
            .map(|((index, gx), gy)| {
                let dx = gx - x;
                let dy = gy - y;
                (ordered_float::OrderedFloat(dx * dx + dy * dy), index)
            })
            .min_by_key(|(distance, _)| *distance)
            .map(|(_, index)| index)
    }
}

/// `count` evenly spaced samples over `[start, end]`, both ends included.
#[must_use]
pub fn linspace(start: f64, end: f64, count: usize) -> Vec<f64> {
    match count {
        0 => Vec::new(),
        1 => vec![start],
        _ => {
            let last = (count - 1) as f64;
            (0..count)
                .map(|k| start + (end - start) * (k as f64) / last)
                .collect()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn linspace_hits_both_ends_exactly() {
        let samples = linspace(0.0, 1.0, 50);
        assert_eq!(samples.len(), 50);
        assert_eq!(samples[0], 0.0);
        assert_eq!(samples[49], 1.0);
    }

    #[test]
    fn uniform_grid_follows_meshgrid_layout() {
        let grid = Grid::uniform(3).expect("grid");
        assert_eq!(grid.shape(), (3, 3));
        assert_eq!(grid.node(0, 2), Some((1.0, 0.0)));
        assert_eq!(grid.node(2, 0), Some((0.0, 1.0)));
        assert_eq!(grid.node(1, 1), Some((0.5, 0.5)));
        assert_eq!(grid.node(3, 0), None);
    }

    #[test]
    fn uniform_grid_rejects_single_sample() {
        assert!(matches!(Grid::uniform(1), Err(GreenError::InvalidGrid(_))));
    }

    #[test]
    fn from_arrays_rejects_shape_mismatch() {
        let x = Array2::zeros((2, 3));
        let y = Array2::zeros((3, 2));
        assert!(matches!(
            Grid::from_arrays(x, y),
            Err(GreenError::InvalidGrid(_))
        ));
    }

    #[test]
    fn nearest_node_picks_closest_sample() {
        let grid = Grid::uniform(5).expect("grid");
        assert_eq!(grid.nearest_node(0.26, 0.49), Some((2, 1)));
    }
}
