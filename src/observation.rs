//! Raw forecast records as delivered by the grid forecast service.

use crate::error::{ForecastError, Result};
use serde::{Deserialize, Serialize};
use std::{fmt::Display, str::FromStr};
use strum_macros::{EnumIter, EnumString, IntoStaticStr};

/// One forecast value for one category at one forecast time.
///
/// Field names follow the service's item records. Every field is optional so a partially filled
/// record still deserializes; the normalizer decides what to do with it.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RawObservation {
    /// Issue date of the bulletin, `YYYYMMDD`.
    pub base_date: Option<String>,
    /// Issue time of the bulletin, `HHMM`.
    pub base_time: Option<String>,
    /// Valid date of the forecast, `YYYYMMDD`.
    #[serde(rename = "fcstDate")]
    pub forecast_date: Option<String>,
    /// Valid time of the forecast, `HHMM`.
    #[serde(rename = "fcstTime")]
    pub forecast_time: Option<String>,
    /// Category code, e.g. `TMP`.
    #[serde(rename = "category")]
    pub category_code: Option<String>,
    /// The forecast value.
    #[serde(rename = "fcstValue")]
    pub value: Option<ObservationValue>,
    /// Grid column.
    pub nx: Option<i32>,
    /// Grid row.
    pub ny: Option<i32>,
}

impl RawObservation {
    /// Create a record with all the fields the normalizer uses.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use grid_forecast::RawObservation;
    ///
    /// let obs = RawObservation::new("20240301", "0500", "20240301", "0600", "TMP", "3");
    /// assert_eq!(obs.category_code.as_deref(), Some("TMP"));
    /// ```
    pub fn new<V>(
        base_date: &str,
        base_time: &str,
        forecast_date: &str,
        forecast_time: &str,
        category_code: &str,
        value: V,
    ) -> Self
    where
        ObservationValue: From<V>,
    {
        RawObservation {
            base_date: Some(base_date.to_owned()),
            base_time: Some(base_time.to_owned()),
            forecast_date: Some(forecast_date.to_owned()),
            forecast_time: Some(forecast_time.to_owned()),
            category_code: Some(category_code.to_owned()),
            value: Some(ObservationValue::from(value)),
            nx: None,
            ny: None,
        }
    }

    /// Builder method to set the grid cell the record belongs to.
    #[inline]
    pub fn with_cell(self, nx: i32, ny: i32) -> Self {
        RawObservation {
            nx: Some(nx),
            ny: Some(ny),
            ..self
        }
    }

    /// The `(forecast_date, forecast_time)` pair records are grouped by, if both are present.
    pub fn grouping_key(&self) -> Option<(&str, &str)> {
        match (&self.forecast_date, &self.forecast_time) {
            (Some(date), Some(time)) => Some((date.as_str(), time.as_str())),
            _ => None,
        }
    }

    /// The category, if the code is one of the known ones.
    pub fn category(&self) -> Option<Category> {
        self.category_code
            .as_deref()
            .and_then(|code| Category::from_str(code).ok())
    }
}

/// A forecast value. The service sends most values as text, but numbers are accepted as well.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum ObservationValue {
    /// A numeric value.
    Number(f64),
    /// A textual value, which may still hold a number.
    Text(String),
}

impl ObservationValue {
    /// The value as a number, parsing text if needed.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use grid_forecast::ObservationValue;
    ///
    /// assert_eq!(ObservationValue::from("-3.5").as_f64(), Some(-3.5));
    /// assert_eq!(ObservationValue::from(12.0).as_f64(), Some(12.0));
    /// assert_eq!(ObservationValue::from("no rain").as_f64(), None);
    /// ```
    pub fn as_f64(&self) -> Option<f64> {
        match self {
            ObservationValue::Number(val) => Some(*val),
            ObservationValue::Text(txt) => txt.trim().parse().ok(),
        }
    }

    /// The value as an integral code, e.g. for the sky or precipitation type tables.
    pub fn as_code(&self) -> Option<i32> {
        self.as_f64()
            .filter(|val| val.fract() == 0.0)
            .filter(|val| *val >= f64::from(i32::MIN) && *val <= f64::from(i32::MAX))
            .map(|val| val as i32)
    }

    /// The text of the value, if it was sent as text.
    pub fn as_str(&self) -> Option<&str> {
        match self {
            ObservationValue::Number(_) => None,
            ObservationValue::Text(txt) => Some(txt),
        }
    }
}

impl From<f64> for ObservationValue {
    fn from(val: f64) -> Self {
        ObservationValue::Number(val)
    }
}

impl From<i32> for ObservationValue {
    fn from(val: i32) -> Self {
        ObservationValue::Number(f64::from(val))
    }
}

impl From<&str> for ObservationValue {
    fn from(val: &str) -> Self {
        ObservationValue::Text(val.to_owned())
    }
}

impl From<String> for ObservationValue {
    fn from(val: String) -> Self {
        ObservationValue::Text(val)
    }
}

impl Display for ObservationValue {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        match self {
            ObservationValue::Number(val) => write!(f, "{}", val),
            ObservationValue::Text(txt) => write!(f, "{}", txt),
        }
    }
}

/// The category codes of the short-range forecast.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, EnumIter, EnumString, IntoStaticStr,
)]
pub enum Category {
    /// Probability of precipitation (%)
    #[strum(serialize = "POP")]
    PrecipitationProbability,
    /// Precipitation type, see [`PrecipitationType`](crate::PrecipitationType)
    #[strum(serialize = "PTY")]
    PrecipitationType,
    /// One hour precipitation amount (category text)
    #[strum(serialize = "PCP")]
    Precipitation,
    /// Relative humidity (%)
    #[strum(serialize = "REH")]
    Humidity,
    /// One hour new snow (category text)
    #[strum(serialize = "SNO")]
    Snowfall,
    /// Sky condition, see [`SkyCondition`](crate::SkyCondition)
    #[strum(serialize = "SKY")]
    Sky,
    /// One hour temperature (C)
    #[strum(serialize = "TMP")]
    Temperature,
    /// Daily minimum temperature (C)
    #[strum(serialize = "TMN")]
    MinTemperature,
    /// Daily maximum temperature (C)
    #[strum(serialize = "TMX")]
    MaxTemperature,
    /// East-west wind component (m/s)
    #[strum(serialize = "UUU")]
    WindU,
    /// North-south wind component (m/s)
    #[strum(serialize = "VVV")]
    WindV,
    /// Wave height (m)
    #[strum(serialize = "WAV")]
    WaveHeight,
    /// Wind direction (degrees)
    #[strum(serialize = "VEC")]
    WindDirection,
    /// Wind speed (m/s)
    #[strum(serialize = "WSD")]
    WindSpeed,
}

impl Category {
    /// Parse a category code.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use grid_forecast::Category;
    ///
    /// assert_eq!(Category::parse("TMP").unwrap(), Category::Temperature);
    /// assert_eq!(Category::Temperature.code(), "TMP");
    /// assert!(Category::parse("XYZ").is_err());
    /// ```
    pub fn parse(code: &str) -> Result<Self> {
        Category::from_str(code).map_err(|_| ForecastError::UnknownCategory(code.to_owned()))
    }

    /// The code as the service spells it.
    #[inline]
    pub fn code(self) -> &'static str {
        self.into()
    }
}
