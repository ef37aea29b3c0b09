//! Decoding the categorical codes of a forecast into readable labels.
//!
//! Every decoder returns a label for every input. Codes outside of the tables fall back to a
//! label carrying the raw code, and missing values get a fixed label.

use strum_macros::{Display, EnumIter, EnumString};

/// Label used when a value is missing.
pub const NO_INFORMATION: &str = "no information";

/// Sky condition, code table of the `SKY` category.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, EnumIter, Display)]
#[repr(u8)]
pub enum SkyCondition {
    /// Clear sky.
    #[strum(to_string = "clear")]
    Clear = 1,
    /// Mostly cloudy.
    #[strum(to_string = "mostly cloudy")]
    MostlyCloudy = 3,
    /// Overcast.
    #[strum(to_string = "overcast")]
    Overcast = 4,
}

impl SkyCondition {
    /// Look up a code, `None` if it is not in the table.
    pub fn from_code(code: i32) -> Option<Self> {
        use SkyCondition::*;

        match code {
            1 => Some(Clear),
            3 => Some(MostlyCloudy),
            4 => Some(Overcast),
            _ => None,
        }
    }
}

/// Precipitation type, code table of the `PTY` category.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, EnumIter, Display)]
#[repr(u8)]
#[allow(missing_docs)]
pub enum PrecipitationType {
    #[strum(to_string = "none")]
    None = 0,
    #[strum(to_string = "rain")]
    Rain = 1,
    #[strum(to_string = "rain/snow")]
    RainAndSnow = 2,
    #[strum(to_string = "snow")]
    Snow = 3,
    #[strum(to_string = "shower")]
    Shower = 4,
    #[strum(to_string = "drizzle")]
    Drizzle = 5,
    #[strum(to_string = "drizzle/snow flurries")]
    DrizzleAndSnowFlurries = 6,
    #[strum(to_string = "snow flurries")]
    SnowFlurries = 7,
}

impl PrecipitationType {
    /// Look up a code, `None` if it is not in the table.
    pub fn from_code(code: i32) -> Option<Self> {
        use PrecipitationType::*;

        match code {
            0 => Some(None),
            1 => Some(Rain),
            2 => Some(RainAndSnow),
            3 => Some(Snow),
            4 => Some(Shower),
            5 => Some(Drizzle),
            6 => Some(DrizzleAndSnowFlurries),
            7 => Some(SnowFlurries),
            _ => Option::None,
        }
    }
}

/// The 16 points of the compass, starting at north and going clockwise.
///
/// Parses from either the label or the abbreviation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, EnumIter, EnumString, Display)]
#[allow(missing_docs)]
pub enum WindDirection {
    #[strum(to_string = "north", serialize = "N")]
    North,
    #[strum(to_string = "north-northeast", serialize = "NNE")]
    NorthNortheast,
    #[strum(to_string = "northeast", serialize = "NE")]
    Northeast,
    #[strum(to_string = "east-northeast", serialize = "ENE")]
    EastNortheast,
    #[strum(to_string = "east", serialize = "E")]
    East,
    #[strum(to_string = "east-southeast", serialize = "ESE")]
    EastSoutheast,
    #[strum(to_string = "southeast", serialize = "SE")]
    Southeast,
    #[strum(to_string = "south-southeast", serialize = "SSE")]
    SouthSoutheast,
    #[strum(to_string = "south", serialize = "S")]
    South,
    #[strum(to_string = "south-southwest", serialize = "SSW")]
    SouthSouthwest,
    #[strum(to_string = "southwest", serialize = "SW")]
    Southwest,
    #[strum(to_string = "west-southwest", serialize = "WSW")]
    WestSouthwest,
    #[strum(to_string = "west", serialize = "W")]
    West,
    #[strum(to_string = "west-northwest", serialize = "WNW")]
    WestNorthwest,
    #[strum(to_string = "northwest", serialize = "NW")]
    Northwest,
    #[strum(to_string = "north-northwest", serialize = "NNW")]
    NorthNorthwest,
}

const COMPASS: [WindDirection; 16] = {
    use WindDirection::*;
    [
        North,
        NorthNortheast,
        Northeast,
        EastNortheast,
        East,
        EastSoutheast,
        Southeast,
        SouthSoutheast,
        South,
        SouthSouthwest,
        Southwest,
        WestSouthwest,
        West,
        WestNorthwest,
        Northwest,
        NorthNorthwest,
    ]
};

impl WindDirection {
    /// Bin a bearing in degrees the way the forecast's own display does.
    ///
    /// The bearing is offset by 22.5 degrees before it is binned, so the labels run one sector
    /// clockwise of the textbook compass rose (0 degrees is north-northeast). Fractional degrees
    /// are truncated toward zero first. Non-finite bearings have no direction.
    pub fn from_bearing(bearing: f64) -> Option<Self> {
        if !bearing.is_finite() {
            return None;
        }

        let index = (((bearing.trunc() + 22.5) / 45.0) * 2.0 + 0.5).floor() as i64;
        Some(COMPASS[index.rem_euclid(16) as usize])
    }

    /// Position on the compass, 0 for north through 15 for north-northwest.
    #[inline]
    pub fn index(self) -> usize {
        self as usize
    }
}

/// Decode a sky condition code.
///
/// # Examples
///
/// ```rust
/// use grid_forecast::decode_sky;
///
/// assert_eq!(decode_sky(1), "clear");
/// assert_eq!(decode_sky(99), "code 99");
/// assert_eq!(decode_sky(None), "no information");
/// ```
pub fn decode_sky<C>(code: C) -> String
where
    Option<i32>: From<C>,
{
    match Option::<i32>::from(code) {
        Some(code) => SkyCondition::from_code(code)
            .map(|sky| sky.to_string())
            .unwrap_or_else(|| fallback_label(code)),
        None => NO_INFORMATION.to_owned(),
    }
}

/// Decode a precipitation type code. A missing code means no precipitation.
///
/// # Examples
///
/// ```rust
/// use grid_forecast::decode_precipitation_type;
///
/// assert_eq!(decode_precipitation_type(2), "rain/snow");
/// assert_eq!(decode_precipitation_type(None), "none");
/// assert_eq!(decode_precipitation_type(9), "code 9");
/// ```
pub fn decode_precipitation_type<C>(code: C) -> String
where
    Option<i32>: From<C>,
{
    let code = Option::<i32>::from(code).unwrap_or(PrecipitationType::None as i32);

    PrecipitationType::from_code(code)
        .map(|pty| pty.to_string())
        .unwrap_or_else(|| fallback_label(code))
}

/// Decode a wind bearing in degrees into a compass label.
///
/// # Examples
///
/// ```rust
/// use grid_forecast::decode_wind_direction;
///
/// assert_eq!(decode_wind_direction(None), "no information");
/// assert_eq!(decode_wind_direction(90.0), "east-southeast");
/// assert_eq!(decode_wind_direction(0.0), decode_wind_direction(360.0));
/// ```
pub fn decode_wind_direction<B>(bearing: B) -> String
where
    Option<f64>: From<B>,
{
    Option::<f64>::from(bearing)
        .and_then(WindDirection::from_bearing)
        .map(|dir| dir.to_string())
        .unwrap_or_else(|| NO_INFORMATION.to_owned())
}

fn fallback_label(code: i32) -> String {
    format!("code {}", code)
}
