#![warn(missing_docs)]
//! Functions and data types for working with a short-range gridded weather forecast.
//!
//! Three transformations sit between a caller and the forecast service:
//!
//! - [`project_to_grid`] maps a latitude and longitude to the `(nx, ny)` cell of the Lambert
//!   Conformal Conic forecast grid.
//! - [`resolve_issuance`] finds the most recent bulletin for a wall-clock time.
//! - [`normalize`] groups the flat list of records the service returns into one
//!   [`ForecastSnapshot`] per forecast time, and the `decode_*` functions turn its codes into
//!   labels.
//!
//! Fetching the records is left to the caller; [`ForecastRequest`] only assembles the query
//! parameters. Everything here is pure and synchronous, nothing is cached between calls.

//
// API
//
pub use crate::codes::{
    decode_precipitation_type, decode_sky, decode_wind_direction, PrecipitationType,
    SkyCondition, WindDirection, NO_INFORMATION,
};
pub use crate::error::{ForecastError, Result};
pub use crate::issuance::{
    resolve_issuance, resolve_issuance_at, resolve_issuance_now, ForecastBulletin,
    ForecastRequest, IssuanceSchedule, SHORT_RANGE_HOURS,
};
pub use crate::normalize::{normalize, ForecastSnapshot, Normalizer, SnapshotSummary};
pub use crate::observation::{Category, ObservationValue, RawObservation};
pub use crate::projection::{
    project_to_grid, GeoCoordinate, GridCell, GridProjector, ProjectionParams,
};

//
// Internal use only
//
mod codes;
mod error;
mod issuance;
mod normalize;
mod observation;
mod projection;
#[cfg(test)]
mod test_data;
