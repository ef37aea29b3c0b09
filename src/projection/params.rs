use serde::{Deserialize, Serialize};

/// Fixed parameters of a Lambert Conformal Conic forecast grid on a spherical earth.
///
/// Angles are in degrees, distances in kilometers, and the origin offset is in grid units. The
/// default value describes the 5 km short-range forecast grid.
///
/// # Examples
///
/// ```rust
/// use grid_forecast::ProjectionParams;
///
/// let params = ProjectionParams::default();
/// assert_eq!(params.grid_spacing_km(), 5.0);
///
/// // A coarser grid over the same cone.
/// let coarse = ProjectionParams::default().with_grid_spacing_km(10.0).with_origin(22.0, 68.0);
/// assert_eq!(coarse.origin(), (22.0, 68.0));
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ProjectionParams {
    earth_radius_km: f64,
    grid_spacing_km: f64,
    standard_parallel_1: f64,
    standard_parallel_2: f64,
    reference_longitude: f64,
    reference_latitude: f64,
    origin_x: f64,
    origin_y: f64,
}

impl Default for ProjectionParams {
    fn default() -> Self {
        ProjectionParams {
            earth_radius_km: 6371.00877,
            grid_spacing_km: 5.0,
            standard_parallel_1: 30.0,
            standard_parallel_2: 60.0,
            reference_longitude: 126.0,
            reference_latitude: 38.0,
            origin_x: 43.0,
            origin_y: 136.0,
        }
    }
}

impl ProjectionParams {
    /// Builder method to set the radius of the spherical earth.
    #[inline]
    pub fn with_earth_radius_km(self, earth_radius_km: f64) -> Self {
        Self {
            earth_radius_km,
            ..self
        }
    }

    /// Builder method to set the distance between neighboring grid points.
    #[inline]
    pub fn with_grid_spacing_km(self, grid_spacing_km: f64) -> Self {
        Self {
            grid_spacing_km,
            ..self
        }
    }

    /// Builder method to set the two standard parallels where the cone cuts the sphere.
    #[inline]
    pub fn with_standard_parallels(self, first: f64, second: f64) -> Self {
        Self {
            standard_parallel_1: first,
            standard_parallel_2: second,
            ..self
        }
    }

    /// Builder method to set the reference point of the grid.
    #[inline]
    pub fn with_reference(self, latitude: f64, longitude: f64) -> Self {
        Self {
            reference_latitude: latitude,
            reference_longitude: longitude,
            ..self
        }
    }

    /// Builder method to set the grid coordinates of the reference point.
    #[inline]
    pub fn with_origin(self, x: f64, y: f64) -> Self {
        Self {
            origin_x: x,
            origin_y: y,
            ..self
        }
    }

    /// Radius of the spherical earth in km.
    #[inline]
    pub fn earth_radius_km(&self) -> f64 {
        self.earth_radius_km
    }

    /// Grid spacing in km.
    #[inline]
    pub fn grid_spacing_km(&self) -> f64 {
        self.grid_spacing_km
    }

    /// The standard parallels in degrees, `(first, second)`.
    #[inline]
    pub fn standard_parallels(&self) -> (f64, f64) {
        (self.standard_parallel_1, self.standard_parallel_2)
    }

    /// Reference latitude in degrees.
    #[inline]
    pub fn reference_latitude(&self) -> f64 {
        self.reference_latitude
    }

    /// Reference longitude in degrees.
    #[inline]
    pub fn reference_longitude(&self) -> f64 {
        self.reference_longitude
    }

    /// Grid coordinates of the reference point, `(x, y)`.
    #[inline]
    pub fn origin(&self) -> (f64, f64) {
        (self.origin_x, self.origin_y)
    }
}
