//! Finding the most recent forecast bulletin for a wall-clock time.
//!
//! Bulletins are published on a fixed daily schedule of local hours. A time before the first
//! publication of the day belongs to the last bulletin of the previous day.

use crate::{
    error::{ForecastError, Result},
    projection::GridCell,
};
use chrono::{DateTime, Local, NaiveDate, NaiveDateTime, TimeZone, Timelike};
use itertools::Itertools;
use std::fmt::Display;
use tracing::trace;

/// Publication hours of the short-range forecast.
pub const SHORT_RANGE_HOURS: [u32; 8] = [2, 5, 8, 11, 14, 17, 20, 23];

/// The local hours of the day at which bulletins are published.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct IssuanceSchedule {
    // Sorted, unique, all < 24, never empty.
    hours: Vec<u32>,
}

impl Default for IssuanceSchedule {
    fn default() -> Self {
        IssuanceSchedule {
            hours: SHORT_RANGE_HOURS.to_vec(),
        }
    }
}

impl IssuanceSchedule {
    /// Create a schedule from a list of publication hours.
    ///
    /// Hours are sorted and de-duplicated. Returns an error if no hour in 0-23 is given.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use grid_forecast::IssuanceSchedule;
    ///
    /// let sched = IssuanceSchedule::new(vec![18, 6, 0, 12, 6]).unwrap();
    /// assert_eq!(sched.hours(), &[0, 6, 12, 18]);
    ///
    /// assert!(IssuanceSchedule::new(vec![24, 30]).is_err());
    /// ```
    pub fn new<H>(hours: H) -> Result<Self>
    where
        Vec<u32>: From<H>,
    {
        let mut hours = Vec::from(hours);
        hours.retain(|&h| h < 24);
        hours.sort_unstable();
        hours.dedup();

        if hours.is_empty() {
            Err(ForecastError::EmptySchedule)
        } else {
            Ok(IssuanceSchedule { hours })
        }
    }

    /// The publication hours in ascending order.
    #[inline]
    pub fn hours(&self) -> &[u32] {
        &self.hours
    }

    /// Whether a bulletin is published at this hour.
    #[inline]
    pub fn publishes_at(&self, hour: u32) -> bool {
        self.hours.binary_search(&hour).is_ok()
    }

    /// Find the most recent bulletin published at or before `now`.
    ///
    /// Only the hour of `now` matters; a bulletin counts as published from the top of its hour.
    pub fn resolve(&self, now: NaiveDateTime) -> ForecastBulletin {
        let today = now.date();
        let hour = now.hour();

        let bulletin = match self.hours.iter().rev().find(|&&h| h <= hour) {
            Some(&base_hour) => ForecastBulletin {
                base_date: today,
                base_hour,
            },
            None => ForecastBulletin {
                // There is no day before the earliest representable date, stay put.
                base_date: today.pred_opt().unwrap_or(today),
                base_hour: self.last_hour(),
            },
        };

        trace!(%now, %bulletin, "resolved bulletin");
        bulletin
    }

    fn last_hour(&self) -> u32 {
        // Never empty by construction.
        self.hours.last().copied().unwrap_or(SHORT_RANGE_HOURS[7])
    }
}

/// Identifies a published forecast by its issue date and hour.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct ForecastBulletin {
    /// Calendar date the bulletin was issued.
    pub base_date: NaiveDate,
    /// Hour of the day the bulletin was issued.
    pub base_hour: u32,
}

impl ForecastBulletin {
    /// Parse the `YYYYMMDD` and `HHMM` strings the forecast service uses, checking the time
    /// against the short-range schedule.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use grid_forecast::ForecastBulletin;
    ///
    /// let bulletin = ForecastBulletin::parse("20240301", "0500").unwrap();
    /// assert_eq!(bulletin.base_hour, 5);
    /// assert_eq!(bulletin.to_string(), "20240301 0500");
    ///
    /// assert!(ForecastBulletin::parse("20240301", "0600").is_err());
    /// assert!(ForecastBulletin::parse("2024031", "0500").is_err());
    /// ```
    pub fn parse(base_date: &str, base_time: &str) -> Result<Self> {
        Self::parse_with_schedule(base_date, base_time, &IssuanceSchedule::default())
    }

    /// Like [`parse`](ForecastBulletin::parse), but against an arbitrary schedule.
    pub fn parse_with_schedule(
        base_date: &str,
        base_time: &str,
        schedule: &IssuanceSchedule,
    ) -> Result<Self> {
        let date = parse_yyyymmdd(base_date)
            .ok_or_else(|| ForecastError::InvalidBaseDate(base_date.to_owned()))?;

        let hour = parse_hhmm(base_time)
            .filter(|&(h, m)| m == 0 && schedule.publishes_at(h))
            .map(|(h, _)| h)
            .ok_or_else(|| ForecastError::InvalidBaseTime(base_time.to_owned()))?;

        Ok(ForecastBulletin {
            base_date: date,
            base_hour: hour,
        })
    }

    /// The `base_date` request parameter, `YYYYMMDD`.
    pub fn base_date_param(&self) -> String {
        self.base_date.format("%Y%m%d").to_string()
    }

    /// The `base_time` request parameter, `HHMM`.
    pub fn base_time_param(&self) -> String {
        format!("{:02}00", self.base_hour)
    }
}

impl Display for ForecastBulletin {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        write!(f, "{} {:02}00", self.base_date.format("%Y%m%d"), self.base_hour)
    }
}

pub(crate) fn parse_yyyymmdd(val: &str) -> Option<NaiveDate> {
    if val.len() != 8 || !val.bytes().all(|b| b.is_ascii_digit()) {
        return None;
    }
    NaiveDate::parse_from_str(val, "%Y%m%d").ok()
}

pub(crate) fn parse_hhmm(val: &str) -> Option<(u32, u32)> {
    if val.len() != 4 || !val.bytes().all(|b| b.is_ascii_digit()) {
        return None;
    }
    let hour: u32 = val[..2].parse().ok()?;
    let minute: u32 = val[2..].parse().ok()?;

    if hour < 24 && minute < 60 {
        Some((hour, minute))
    } else {
        None
    }
}

/// Find the short-range bulletin in effect at a wall-clock time.
///
/// # Examples
///
/// ```rust
/// use chrono::NaiveDate;
/// use grid_forecast::resolve_issuance;
///
/// let now = NaiveDate::from_ymd_opt(2024, 3, 1).unwrap().and_hms_opt(1, 30, 0).unwrap();
/// let bulletin = resolve_issuance(now);
///
/// assert_eq!(bulletin.base_date_param(), "20240229");
/// assert_eq!(bulletin.base_time_param(), "2300");
/// ```
pub fn resolve_issuance(now: NaiveDateTime) -> ForecastBulletin {
    IssuanceSchedule::default().resolve(now)
}

/// Find the short-range bulletin in effect at a time, using the wall clock of its time zone.
pub fn resolve_issuance_at<Tz: TimeZone>(now: &DateTime<Tz>) -> ForecastBulletin {
    resolve_issuance(now.naive_local())
}

/// Find the short-range bulletin in effect right now on the local clock.
pub fn resolve_issuance_now() -> ForecastBulletin {
    resolve_issuance_at(&Local::now())
}

/// The parameters of one page of a grid forecast query.
///
/// Only the query parameters are assembled here. Endpoint, credentials, and transport belong to
/// the caller.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ForecastRequest {
    /// Bulletin to fetch.
    pub bulletin: ForecastBulletin,
    /// Grid cell to fetch.
    pub cell: GridCell,
    /// 1 based page number.
    pub page_no: u32,
    /// Rows per page.
    pub num_of_rows: u32,
}

impl ForecastRequest {
    /// Default page size, large enough for a full short-range bulletin in one page.
    pub const DEFAULT_ROWS: u32 = 1000;

    /// Create a request for the first page of a bulletin at a cell.
    pub fn new(bulletin: ForecastBulletin, cell: GridCell) -> Self {
        ForecastRequest {
            bulletin,
            cell,
            page_no: 1,
            num_of_rows: Self::DEFAULT_ROWS,
        }
    }

    /// Builder method to select a page.
    #[inline]
    pub fn with_page(self, page_no: u32, num_of_rows: u32) -> Self {
        ForecastRequest {
            page_no,
            num_of_rows,
            ..self
        }
    }

    /// The query parameters in the order the service documents them.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use grid_forecast::{ForecastBulletin, ForecastRequest, GridCell};
    ///
    /// let bulletin = ForecastBulletin::parse("20240301", "0500").unwrap();
    /// let pairs = ForecastRequest::new(bulletin, GridCell::SEOUL).query_pairs();
    ///
    /// assert_eq!(pairs[3], ("base_date", "20240301".to_owned()));
    /// assert_eq!(pairs[6], ("ny", "127".to_owned()));
    /// ```
    pub fn query_pairs(&self) -> Vec<(&'static str, String)> {
        vec![
            ("pageNo", self.page_no.to_string()),
            ("numOfRows", self.num_of_rows.to_string()),
            ("dataType", "JSON".to_owned()),
            ("base_date", self.bulletin.base_date_param()),
            ("base_time", self.bulletin.base_time_param()),
            ("nx", self.cell.nx.to_string()),
            ("ny", self.cell.ny.to_string()),
        ]
    }

    /// The query parameters joined into a query string, without the leading `?`.
    ///
    /// Every value is a plain number or word, so nothing needs escaping.
    pub fn query_string(&self) -> String {
        self.query_pairs()
            .iter()
            .map(|(key, val)| format!("{}={}", key, val))
            .join("&")
    }
}

#[cfg(test)]
mod test {
    use super::*;
    use chrono::{FixedOffset, Utc};

    fn at(y: i32, m: u32, d: u32, hour: u32, minute: u32) -> NaiveDateTime {
        NaiveDate::from_ymd_opt(y, m, d)
            .unwrap()
            .and_hms_opt(hour, minute, 0)
            .unwrap()
    }

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn test_boundary_hours() {
        let b = resolve_issuance(at(2024, 6, 15, 1, 59));
        assert_eq!(b.base_date, date(2024, 6, 14));
        assert_eq!(b.base_time_param(), "2300");

        let b = resolve_issuance(at(2024, 6, 15, 2, 0));
        assert_eq!(b.base_date, date(2024, 6, 15));
        assert_eq!(b.base_time_param(), "0200");

        let b = resolve_issuance(at(2024, 6, 15, 23, 59));
        assert_eq!(b.base_date, date(2024, 6, 15));
        assert_eq!(b.base_time_param(), "2300");
    }

    #[test]
    fn test_every_hour() {
        #[rustfmt::skip]
        let expected = [
            23, 23, 2, 2, 2, 5, 5, 5, 8, 8, 8, 11,
            11, 11, 14, 14, 14, 17, 17, 17, 20, 20, 20, 23,
        ];

        for (hour, &base_hour) in expected.iter().enumerate() {
            let b = resolve_issuance(at(2024, 6, 15, hour as u32, 30));
            assert_eq!(b.base_hour, base_hour, "hour {}", hour);

            let day = if hour < 2 { 14 } else { 15 };
            assert_eq!(b.base_date, date(2024, 6, day), "hour {}", hour);
        }
    }

    #[test]
    fn test_rollover_month_and_year() {
        assert_eq!(
            resolve_issuance(at(2024, 3, 1, 0, 0)).base_date,
            date(2024, 2, 29)
        );
        assert_eq!(
            resolve_issuance(at(2023, 3, 1, 1, 0)).base_date,
            date(2023, 2, 28)
        );
        assert_eq!(
            resolve_issuance(at(2024, 5, 1, 0, 10)).base_date,
            date(2024, 4, 30)
        );

        let b = resolve_issuance(at(2025, 1, 1, 0, 5));
        assert_eq!(b.base_date, date(2024, 12, 31));
        assert_eq!(b.to_string(), "20241231 2300");
    }

    #[test]
    fn test_resolve_in_time_zone() {
        let kst = FixedOffset::east_opt(9 * 3600).unwrap();

        // 16:30 UTC is 01:30 the next day in Seoul.
        let now = kst.from_utc_datetime(&at(2024, 1, 1, 16, 30));
        let b = resolve_issuance_at(&now);
        assert_eq!(b.base_date, date(2024, 1, 1));
        assert_eq!(b.base_hour, 23);

        let now = Utc.from_utc_datetime(&at(2024, 1, 1, 16, 30));
        let b = resolve_issuance_at(&now);
        assert_eq!(b.base_date, date(2024, 1, 1));
        assert_eq!(b.base_hour, 14);
    }

    #[test]
    fn test_resolve_now_is_on_schedule() {
        let b = resolve_issuance_now();
        assert!(SHORT_RANGE_HOURS.contains(&b.base_hour));
    }

    #[test]
    fn test_custom_schedule() {
        let sched = IssuanceSchedule::new(vec![0, 6, 12, 18]).unwrap();

        let b = sched.resolve(at(2024, 6, 15, 0, 0));
        assert_eq!(b.base_date, date(2024, 6, 15));
        assert_eq!(b.base_hour, 0);

        let b = sched.resolve(at(2024, 6, 15, 17, 59));
        assert_eq!(b.base_hour, 12);

        let late = IssuanceSchedule::new(vec![21]).unwrap();
        let b = late.resolve(at(2024, 6, 15, 20, 0));
        assert_eq!(b.base_date, date(2024, 6, 14));
        assert_eq!(b.base_hour, 21);

        assert_eq!(
            IssuanceSchedule::new(Vec::<u32>::new()),
            Err(ForecastError::EmptySchedule)
        );
    }

    #[test]
    fn test_parse() {
        let b = ForecastBulletin::parse("20241231", "2300").unwrap();
        assert_eq!(b.base_date, date(2024, 12, 31));
        assert_eq!(b.base_hour, 23);
        assert_eq!(b.base_date_param(), "20241231");

        assert_eq!(
            ForecastBulletin::parse("20240230", "0200"),
            Err(ForecastError::InvalidBaseDate("20240230".to_owned()))
        );
        assert_eq!(
            ForecastBulletin::parse("20240301", "0230"),
            Err(ForecastError::InvalidBaseTime("0230".to_owned()))
        );
        assert!(ForecastBulletin::parse("2024-03-01", "0200").is_err());
        assert!(ForecastBulletin::parse("20240301", "2400").is_err());
        assert!(ForecastBulletin::parse("20240301", "+200").is_err());
    }

    #[test]
    fn test_query_pairs() {
        let bulletin = ForecastBulletin::parse("20240229", "2300").unwrap();
        let request = ForecastRequest::new(bulletin, GridCell { nx: 98, ny: 76 }).with_page(2, 300);

        assert_eq!(
            request.query_pairs(),
            vec![
                ("pageNo", "2".to_owned()),
                ("numOfRows", "300".to_owned()),
                ("dataType", "JSON".to_owned()),
                ("base_date", "20240229".to_owned()),
                ("base_time", "2300".to_owned()),
                ("nx", "98".to_owned()),
                ("ny", "76".to_owned()),
            ]
        );
        assert_eq!(
            request.query_string(),
            "pageNo=2&numOfRows=300&dataType=JSON&base_date=20240229&base_time=2300&nx=98&ny=76"
        );
    }
}
