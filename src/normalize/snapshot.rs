use crate::{
    codes::{decode_precipitation_type, decode_sky, decode_wind_direction},
    error::{ForecastError, Result},
    issuance::{parse_hhmm, parse_yyyymmdd, ForecastBulletin},
    observation::{Category, ObservationValue},
};
use chrono::NaiveDateTime;
use metfor::{Celsius, MetersPSec, Quantity, WindSpdDir};
use optional::{none, some, Optioned};
use std::{collections::BTreeMap, fmt::Display};

/// All the forecast values for one forecast time of one bulletin.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct ForecastSnapshot {
    /// Issue date of the bulletin, `YYYYMMDD`, as sent with the first record.
    pub base_date: Option<String>,
    /// Issue time of the bulletin, `HHMM`, as sent with the first record.
    pub base_time: Option<String>,
    /// Valid date, `YYYYMMDD`.
    pub forecast_date: String,
    /// Valid time, `HHMM`.
    pub forecast_time: String,
    /// Values keyed by category code, unknown codes included.
    pub categories: BTreeMap<String, ObservationValue>,
}

impl ForecastSnapshot {
    pub(crate) fn new(
        base_date: Option<String>,
        base_time: Option<String>,
        forecast_date: String,
        forecast_time: String,
    ) -> Self {
        ForecastSnapshot {
            base_date,
            base_time,
            forecast_date,
            forecast_time,
            categories: BTreeMap::new(),
        }
    }

    /// Look up a value by its raw category code.
    #[inline]
    pub fn get(&self, code: &str) -> Option<&ObservationValue> {
        self.categories.get(code)
    }

    /// Look up a value by category.
    #[inline]
    pub fn value(&self, category: Category) -> Option<&ObservationValue> {
        self.get(category.code())
    }

    /// The bulletin this snapshot came from, if its base date and time are valid.
    pub fn bulletin(&self) -> Option<ForecastBulletin> {
        match (&self.base_date, &self.base_time) {
            (Some(date), Some(time)) => ForecastBulletin::parse(date, time).ok(),
            _ => None,
        }
    }

    /// The time the forecast is valid for, if the date and time are well formed.
    pub fn valid_time(&self) -> Option<NaiveDateTime> {
        let date = parse_yyyymmdd(&self.forecast_date)?;
        let (hour, minute) = parse_hhmm(&self.forecast_time)?;
        date.and_hms_opt(hour, minute, 0)
    }

    /// A numeric value. Missing is not an error, a value that isn't a number is.
    pub fn number(&self, category: Category) -> Result<Optioned<f64>> {
        match self.value(category) {
            None => Ok(none()),
            Some(val) => val
                .as_f64()
                .map(some)
                .ok_or_else(|| invalid_value(category, val)),
        }
    }

    /// An integral code value. Missing is not an error, a value that isn't an integer is.
    pub fn code(&self, category: Category) -> Result<Optioned<i32>> {
        match self.value(category) {
            None => Ok(none()),
            Some(val) => val
                .as_code()
                .map(some)
                .ok_or_else(|| invalid_value(category, val)),
        }
    }

    /// Temperature for the hour.
    pub fn temperature(&self) -> Result<Optioned<Celsius>> {
        self.number(Category::Temperature).map(|t| t.map_t(Celsius))
    }

    /// Daily minimum temperature, only sent with the early morning forecast time.
    pub fn min_temperature(&self) -> Result<Optioned<Celsius>> {
        self.number(Category::MinTemperature).map(|t| t.map_t(Celsius))
    }

    /// Daily maximum temperature, only sent with the afternoon forecast time.
    pub fn max_temperature(&self) -> Result<Optioned<Celsius>> {
        self.number(Category::MaxTemperature).map(|t| t.map_t(Celsius))
    }

    /// Relative humidity in percent.
    pub fn humidity(&self) -> Result<Optioned<f64>> {
        self.number(Category::Humidity)
    }

    /// Probability of precipitation in percent.
    pub fn precipitation_probability(&self) -> Result<Optioned<f64>> {
        self.number(Category::PrecipitationProbability)
    }

    /// Sky condition code.
    pub fn sky(&self) -> Result<Optioned<i32>> {
        self.code(Category::Sky)
    }

    /// Precipitation type code.
    pub fn precipitation_type(&self) -> Result<Optioned<i32>> {
        self.code(Category::PrecipitationType)
    }

    /// Direction the wind blows from in degrees.
    pub fn wind_direction(&self) -> Result<Optioned<f64>> {
        self.number(Category::WindDirection)
    }

    /// Wind speed.
    pub fn wind_speed(&self) -> Result<Optioned<MetersPSec>> {
        self.number(Category::WindSpeed).map(|s| s.map_t(MetersPSec))
    }

    /// Wind speed and direction, if both are available.
    pub fn wind(&self) -> Result<Option<WindSpdDir<MetersPSec>>> {
        let speed = self.wind_speed()?.into_option();
        let direction = self.wind_direction()?.into_option();

        Ok(speed.and_then(|speed| direction.map(|direction| WindSpdDir { speed, direction })))
    }

    /// Decode the snapshot for display.
    ///
    /// Values that are missing or can't be read are shown as missing rather than failing.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use grid_forecast::{normalize, RawObservation};
    ///
    /// let snapshots = normalize(vec![
    ///     RawObservation::new("20240301", "0500", "20240301", "0600", "TMP", "-1"),
    ///     RawObservation::new("20240301", "0500", "20240301", "0600", "SKY", "3"),
    ///     RawObservation::new("20240301", "0500", "20240301", "0600", "PTY", "0"),
    ///     RawObservation::new("20240301", "0500", "20240301", "0600", "VEC", "250"),
    ///     RawObservation::new("20240301", "0500", "20240301", "0600", "WSD", "2.1"),
    /// ]);
    ///
    /// assert_eq!(
    ///     snapshots[0].summary().to_string(),
    ///     "20240301 0600: -1°C | mostly cloudy | none | west (2.1 m/s)"
    /// );
    /// ```
    pub fn summary(&self) -> SnapshotSummary {
        let sky = self.sky().ok().and_then(Optioned::into_option);
        let pty = self.precipitation_type().ok().and_then(Optioned::into_option);
        let vec = self.wind_direction().ok().and_then(Optioned::into_option);

        SnapshotSummary {
            forecast_date: self.forecast_date.clone(),
            forecast_time: self.forecast_time.clone(),
            temperature: self.temperature().unwrap_or_else(|_| none()),
            sky: decode_sky(sky),
            precipitation: decode_precipitation_type(pty),
            wind_direction: decode_wind_direction(vec),
            wind_speed: self.wind_speed().unwrap_or_else(|_| none()),
        }
    }
}

fn invalid_value(category: Category, val: &ObservationValue) -> ForecastError {
    ForecastError::InvalidValue {
        category: category.code().to_owned(),
        value: val.to_string(),
    }
}

/// Readable labels for one snapshot.
#[derive(Debug, Clone, PartialEq)]
pub struct SnapshotSummary {
    /// Valid date, `YYYYMMDD`.
    pub forecast_date: String,
    /// Valid time, `HHMM`.
    pub forecast_time: String,
    /// Temperature.
    pub temperature: Optioned<Celsius>,
    /// Sky condition label.
    pub sky: String,
    /// Precipitation type label.
    pub precipitation: String,
    /// Wind direction label.
    pub wind_direction: String,
    /// Wind speed.
    pub wind_speed: Optioned<MetersPSec>,
}

impl Display for SnapshotSummary {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        write!(f, "{} {}: ", self.forecast_date, self.forecast_time)?;

        match self.temperature.into_option() {
            Some(t) => write!(f, "{}°C", t.unpack())?,
            None => write!(f, "-°C")?,
        }

        write!(
            f,
            " | {} | {} | {} (",
            self.sky, self.precipitation, self.wind_direction
        )?;

        match self.wind_speed.into_option() {
            Some(spd) => write!(f, "{} m/s)", spd.unpack()),
            None => write!(f, "- m/s)"),
        }
    }
}
