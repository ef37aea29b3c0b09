//! Lambert Conformal Conic projection between geodetic coordinates and forecast grid cells.
//!
//! The projection is done on a sphere. Grid cells are identified by the integer `(nx, ny)` pair
//! the forecast service is queried with.

use crate::error::{ForecastError, Result};
use serde::{Deserialize, Serialize};
use std::f64::consts::PI;
use tracing::trace;

pub use self::params::ProjectionParams;

mod params;

const DEG_TO_RAD: f64 = PI / 180.0;
const RAD_TO_DEG: f64 = 180.0 / PI;

/// A point on the earth in decimal degrees.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct GeoCoordinate {
    /// Latitude in degrees, positive north.
    pub latitude: f64,
    /// Longitude in degrees, positive east.
    pub longitude: f64,
}

impl GeoCoordinate {
    /// Create a coordinate, checking that it is finite and within the geodetic domain.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use grid_forecast::GeoCoordinate;
    ///
    /// assert!(GeoCoordinate::new(37.5665, 126.978).is_ok());
    /// assert!(GeoCoordinate::new(91.0, 126.978).is_err());
    /// assert!(GeoCoordinate::new(37.5665, f64::NAN).is_err());
    /// ```
    pub fn new(latitude: f64, longitude: f64) -> Result<Self> {
        if !latitude.is_finite() || !longitude.is_finite() {
            return Err(ForecastError::NonFiniteCoordinate);
        }
        if !(-90.0..=90.0).contains(&latitude) {
            return Err(ForecastError::LatitudeOutOfRange(latitude));
        }
        if !(-180.0..=180.0).contains(&longitude) {
            return Err(ForecastError::LongitudeOutOfRange(longitude));
        }

        Ok(GeoCoordinate {
            latitude,
            longitude,
        })
    }

    /// Create a coordinate without failing. Latitude is clamped into [-90, 90] and longitude is
    /// wrapped into [-180, 180], leaving values already in that range alone.
    ///
    /// Non-finite values pass through unchanged.
    pub fn clamped(latitude: f64, longitude: f64) -> Self {
        let lat = latitude.clamp(-90.0, 90.0);
        let lon = if (-180.0..=180.0).contains(&longitude) {
            longitude
        } else {
            (longitude + 180.0).rem_euclid(360.0) - 180.0
        };

        if lat != latitude || lon != longitude {
            trace!(latitude, longitude, lat, lon, "coordinate moved into domain");
        }

        GeoCoordinate {
            latitude: lat,
            longitude: lon,
        }
    }
}

impl From<(f64, f64)> for GeoCoordinate {
    /// Build from a `(latitude, longitude)` tuple, clamping into the domain.
    fn from((latitude, longitude): (f64, f64)) -> Self {
        GeoCoordinate::clamped(latitude, longitude)
    }
}

/// Integer coordinates of a forecast grid cell.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct GridCell {
    /// Column index.
    pub nx: i32,
    /// Row index.
    pub ny: i32,
}

impl GridCell {
    /// The cell for central Seoul, used when no location is available.
    pub const SEOUL: GridCell = GridCell { nx: 60, ny: 127 };
}

/// A Lambert Conformal Conic projection with its cone constants precomputed.
///
/// # Examples
///
/// ```rust
/// use grid_forecast::{GeoCoordinate, GridCell, GridProjector, ProjectionParams};
///
/// let projector = GridProjector::new(ProjectionParams::default());
/// let seoul = GeoCoordinate::new(37.5665, 126.9780).unwrap();
///
/// assert_eq!(projector.project(seoul), GridCell { nx: 60, ny: 127 });
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct GridProjector {
    params: ProjectionParams,
    // Earth radius in grid units
    re: f64,
    // Cone constant
    sn: f64,
    // Scale factor anchored at the first standard parallel
    sf: f64,
    // Radius at the reference latitude
    ro: f64,
    // Reference longitude in radians
    olon: f64,
}

impl Default for GridProjector {
    fn default() -> Self {
        GridProjector::new(ProjectionParams::default())
    }
}

impl GridProjector {
    /// Precompute the cone for a set of projection parameters.
    pub fn new(params: ProjectionParams) -> Self {
        let re = params.earth_radius_km() / params.grid_spacing_km();
        let (slat1, slat2) = params.standard_parallels();
        let slat1 = slat1 * DEG_TO_RAD;
        let slat2 = slat2 * DEG_TO_RAD;
        let olat = params.reference_latitude() * DEG_TO_RAD;
        let olon = params.reference_longitude() * DEG_TO_RAD;

        let sn = (PI * 0.25 + slat2 * 0.5).tan() / (PI * 0.25 + slat1 * 0.5).tan();
        let sn = (slat1.cos() / slat2.cos()).ln() / sn.ln();

        let sf = (PI * 0.25 + slat1 * 0.5).tan();
        let sf = sf.powf(sn) * slat1.cos() / sn;

        let ro = (PI * 0.25 + olat * 0.5).tan();
        let ro = re * sf / ro.powf(sn);

        GridProjector {
            params,
            re,
            sn,
            sf,
            ro,
            olon,
        }
    }

    /// The parameters this projection was built from.
    #[inline]
    pub fn params(&self) -> &ProjectionParams {
        &self.params
    }

    /// The cone constant.
    #[inline]
    pub fn cone_constant(&self) -> f64 {
        self.sn
    }

    /// Find the grid cell containing a coordinate.
    ///
    /// Coordinates outside the geodetic domain are clamped first, so this never fails. Positions
    /// are rounded half up, matching the cell numbering used by the forecast service.
    pub fn project<C>(&self, coord: C) -> GridCell
    where
        GeoCoordinate: From<C>,
    {
        let coord = GeoCoordinate::from(coord);
        let GeoCoordinate {
            latitude,
            longitude,
        } = GeoCoordinate::clamped(coord.latitude, coord.longitude);
        let (origin_x, origin_y) = self.params.origin();

        let ra = (PI * 0.25 + latitude * DEG_TO_RAD * 0.5).tan();
        let ra = self.re * self.sf / ra.powf(self.sn);

        // Wrap before scaling or the antimeridian becomes a seam.
        let mut theta = longitude * DEG_TO_RAD - self.olon;
        if theta > PI {
            theta -= 2.0 * PI;
        }
        if theta < -PI {
            theta += 2.0 * PI;
        }
        theta *= self.sn;

        let nx = (ra * theta.sin() + origin_x + 0.5).floor();
        let ny = (self.ro - ra * theta.cos() + origin_y + 0.5).floor();

        // Saturating casts, NaN maps to 0
        GridCell {
            nx: nx as i32,
            ny: ny as i32,
        }
    }

    /// Find the coordinate of the center of a grid cell.
    ///
    /// This is the inverse of [`project`](GridProjector::project), so projecting the result lands
    /// back in the same cell.
    pub fn grid_to_geo(&self, cell: GridCell) -> GeoCoordinate {
        let (origin_x, origin_y) = self.params.origin();

        let xn = f64::from(cell.nx) - origin_x;
        let yn = self.ro - f64::from(cell.ny) + origin_y;

        let ra = xn.hypot(yn);
        let ra = if self.sn < 0.0 { -ra } else { ra };

        let alat = (self.re * self.sf / ra).powf(1.0 / self.sn);
        let alat = 2.0 * alat.atan() - PI * 0.5;

        let theta = if xn == 0.0 {
            0.0
        } else if yn == 0.0 {
            if xn < 0.0 {
                -PI * 0.5
            } else {
                PI * 0.5
            }
        } else {
            xn.atan2(yn)
        };
        let alon = theta / self.sn + self.olon;

        GeoCoordinate::clamped(alat * RAD_TO_DEG, alon * RAD_TO_DEG)
    }
}

/// Find the grid cell of a coordinate on the default short-range forecast grid.
///
/// # Examples
///
/// ```rust
/// use grid_forecast::{project_to_grid, GridCell};
///
/// assert_eq!(project_to_grid((37.5665, 126.9780)), GridCell { nx: 60, ny: 127 });
/// ```
pub fn project_to_grid<C>(coord: C) -> GridCell
where
    GeoCoordinate: From<C>,
{
    GridProjector::default().project(coord)
}
