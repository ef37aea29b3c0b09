//! Error types for the grid-forecast crate.

/// Error type for the crate.
///
/// The core transformations never fail; these errors come from the validating constructors and
/// parsers that sit around them.
#[derive(Clone, Debug, PartialEq, thiserror::Error)]
pub enum ForecastError {
    /// Latitude outside of [-90, 90] degrees.
    #[error("latitude {0} is outside of [-90, 90] degrees")]
    LatitudeOutOfRange(f64),
    /// Longitude outside of [-180, 180] degrees.
    #[error("longitude {0} is outside of [-180, 180] degrees")]
    LongitudeOutOfRange(f64),
    /// A coordinate was NaN or infinite.
    #[error("non-finite coordinate")]
    NonFiniteCoordinate,
    /// A base date that is not a `YYYYMMDD` calendar date.
    #[error("invalid base date: {0:?}")]
    InvalidBaseDate(String),
    /// A base time that is not one of the published bulletin times.
    #[error("invalid base time: {0:?}")]
    InvalidBaseTime(String),
    /// A publication schedule without any valid hour.
    #[error("issuance schedule has no hours in 0-23")]
    EmptySchedule,
    /// A category code that is not in the known table.
    #[error("unknown category code: {0:?}")]
    UnknownCategory(String),
    /// A value that could not be interpreted for its category.
    #[error("invalid value {value:?} for category {category}")]
    InvalidValue {
        /// Category code the value was stored under.
        category: String,
        /// The raw value.
        value: String,
    },
}

/// Shorthand for results.
pub type Result<T> = ::std::result::Result<T, ForecastError>;
