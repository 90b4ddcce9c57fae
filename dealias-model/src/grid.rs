//! Generic grid type for per-gate radar sweep data.

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// A rectangular grid of per-gate values for a single radar sweep.
///
/// # Data Layout
///
/// Data is stored in row-major order where rays are rows and gates are
/// columns: `values[ray * gate_count + gate]`. This layout is cache-friendly
/// for iterating along rays (radial traversal), which matches how radar data
/// arrives.
///
/// # Example
///
/// ```
/// use dealias_model::SweepGrid;
///
/// // Create a sweep grid with 360 rays and 100 gates
/// let grid = SweepGrid::filled(360, 100, 0.0f32);
///
/// assert_eq!(grid.ray_count(), 360);
/// assert_eq!(grid.gate_count(), 100);
/// ```
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct SweepGrid<T> {
    ray_count: usize,
    gate_count: usize,
    values: Vec<T>,
}

impl<T> SweepGrid<T> {
    /// Creates a new SweepGrid with the given geometry and data.
    ///
    /// # Arguments
    ///
    /// * `ray_count` - Number of rays (azimuths) in the sweep
    /// * `gate_count` - Number of gates per ray
    /// * `values` - Data values in row-major order (ray, gate)
    ///
    /// # Panics
    ///
    /// Panics if `values.len() != ray_count * gate_count`.
    pub fn new(ray_count: usize, gate_count: usize, values: Vec<T>) -> Self {
        assert_eq!(
            values.len(),
            ray_count * gate_count,
            "values length {} does not match ray_count {} * gate_count {} = {}",
            values.len(),
            ray_count,
            gate_count,
            ray_count * gate_count
        );
        Self {
            ray_count,
            gate_count,
            values,
        }
    }

    /// Number of rays in the sweep.
    pub fn ray_count(&self) -> usize {
        self.ray_count
    }

    /// Number of gates per ray.
    pub fn gate_count(&self) -> usize {
        self.gate_count
    }

    /// Grid shape as `(ray_count, gate_count)`.
    pub fn shape(&self) -> (usize, usize) {
        (self.ray_count, self.gate_count)
    }

    /// Total number of data points in the grid.
    pub fn data_count(&self) -> usize {
        self.values.len()
    }

    /// Returns a reference to the data values.
    pub fn values(&self) -> &[T] {
        &self.values
    }

    /// Returns a mutable reference to the data values.
    pub fn values_mut(&mut self) -> &mut [T] {
        &mut self.values
    }

    /// Consumes the grid and returns the values vector.
    pub fn into_values(self) -> Vec<T> {
        self.values
    }

    /// Returns the linear index for (ray, gate) coordinates.
    ///
    /// # Panics
    ///
    /// Panics in debug mode if ray >= ray_count or gate >= gate_count.
    #[inline]
    pub fn idx(&self, ray: usize, gate: usize) -> usize {
        debug_assert!(
            ray < self.ray_count,
            "ray={} >= ray_count={}",
            ray,
            self.ray_count
        );
        debug_assert!(
            gate < self.gate_count,
            "gate={} >= gate_count={}",
            gate,
            self.gate_count
        );
        ray * self.gate_count + gate
    }

    /// Returns a reference to the value at (ray, gate).
    ///
    /// # Panics
    ///
    /// Panics if ray >= ray_count or gate >= gate_count.
    #[inline]
    pub fn get(&self, ray: usize, gate: usize) -> &T {
        &self.values[self.idx(ray, gate)]
    }

    /// Returns a mutable reference to the value at (ray, gate).
    ///
    /// # Panics
    ///
    /// Panics if ray >= ray_count or gate >= gate_count.
    #[inline]
    pub fn get_mut(&mut self, ray: usize, gate: usize) -> &mut T {
        let idx = self.idx(ray, gate);
        &mut self.values[idx]
    }

    /// Returns the gates of a single ray as a slice.
    ///
    /// # Panics
    ///
    /// Panics if ray >= ray_count.
    pub fn ray(&self, ray: usize) -> &[T] {
        let start = ray * self.gate_count;
        &self.values[start..start + self.gate_count]
    }

    /// Returns an iterator over rays, yielding each ray's gates as a slice.
    pub fn rays(&self) -> impl Iterator<Item = &[T]> {
        self.values.chunks_exact(self.gate_count.max(1))
    }
}

impl<T: Clone> SweepGrid<T> {
    /// Creates a grid of the given shape with every gate set to `value`.
    pub fn filled(ray_count: usize, gate_count: usize, value: T) -> Self {
        Self {
            ray_count,
            gate_count,
            values: vec![value; ray_count * gate_count],
        }
    }
}
