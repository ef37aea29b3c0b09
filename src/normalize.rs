//! Grouping a flat batch of forecast records into one snapshot per forecast time.

use crate::observation::RawObservation;
use std::collections::{hash_map::Entry, HashMap};
use std::iter::FromIterator;
use tracing::debug;

pub use self::snapshot::{ForecastSnapshot, SnapshotSummary};

mod snapshot;

/// Accumulates records into snapshots keyed by `(forecast_date, forecast_time)`.
///
/// Snapshots come out in the order their key was first seen. The service sends records in
/// chronological order, so this is chronological too; nothing here sorts them.
///
/// # Examples
///
/// ```rust
/// use grid_forecast::{Normalizer, RawObservation};
///
/// let mut normalizer = Normalizer::new();
/// normalizer.push(RawObservation::new("20240301", "0500", "20240301", "0600", "TMP", "-1"));
/// normalizer.push(RawObservation::new("20240301", "0500", "20240301", "0600", "SKY", "1"));
/// normalizer.push(RawObservation::new("20240301", "0500", "20240301", "0700", "TMP", "0"));
///
/// let snapshots = normalizer.finish();
/// assert_eq!(snapshots.len(), 2);
/// assert_eq!(snapshots[0].categories.len(), 2);
/// ```
#[derive(Debug, Clone, Default)]
pub struct Normalizer {
    // Position of each key in `snapshots`
    index: HashMap<(String, String), usize>,
    snapshots: Vec<ForecastSnapshot>,
    skipped: usize,
}

impl Normalizer {
    /// Create an empty normalizer.
    #[inline]
    pub fn new() -> Self {
        Normalizer::default()
    }

    /// Merge one record.
    ///
    /// The first record for a key sets the snapshot's bulletin fields. Every record then writes
    /// its value under its category code, replacing any earlier value for that code. Records
    /// without both a forecast date and time are skipped.
    pub fn push(&mut self, obs: RawObservation) {
        let RawObservation {
            base_date,
            base_time,
            forecast_date,
            forecast_time,
            category_code,
            value,
            ..
        } = obs;

        let key = match (forecast_date, forecast_time) {
            (Some(date), Some(time)) => (date, time),
            (date, time) => {
                self.skipped += 1;
                debug!(?date, ?time, ?category_code, "skipping record without forecast time");
                return;
            }
        };

        let idx = match self.index.entry(key) {
            Entry::Occupied(entry) => *entry.get(),
            Entry::Vacant(entry) => {
                let (date, time) = entry.key();
                let idx = self.snapshots.len();
                self.snapshots.push(ForecastSnapshot::new(
                    base_date,
                    base_time,
                    date.clone(),
                    time.clone(),
                ));
                *entry.insert(idx)
            }
        };

        if let (Some(code), Some(value)) = (category_code, value) {
            self.snapshots[idx].categories.insert(code, value);
        }
    }

    /// Number of snapshots so far.
    #[inline]
    pub fn len(&self) -> usize {
        self.snapshots.len()
    }

    /// True if no record has been merged yet.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.snapshots.is_empty()
    }

    /// Number of records skipped for lacking a grouping key.
    #[inline]
    pub fn skipped(&self) -> usize {
        self.skipped
    }

    /// The snapshots in first seen order.
    pub fn finish(self) -> Vec<ForecastSnapshot> {
        debug!(
            snapshots = self.snapshots.len(),
            skipped = self.skipped,
            "normalized forecast batch"
        );
        self.snapshots
    }
}

impl Extend<RawObservation> for Normalizer {
    fn extend<I: IntoIterator<Item = RawObservation>>(&mut self, iter: I) {
        for obs in iter {
            self.push(obs);
        }
    }
}

impl FromIterator<RawObservation> for Normalizer {
    fn from_iter<I: IntoIterator<Item = RawObservation>>(iter: I) -> Self {
        let mut normalizer = Normalizer::new();
        normalizer.extend(iter);
        normalizer
    }
}

/// Group a batch of records into snapshots, one per forecast time, in first seen order.
///
/// An empty batch gives no snapshots.
///
/// # Examples
///
/// ```rust
/// use grid_forecast::{normalize, RawObservation};
///
/// assert!(normalize(Vec::new()).is_empty());
///
/// let snapshots = normalize(vec![
///     RawObservation::new("20240301", "0500", "20240301", "0600", "TMP", "-1"),
///     RawObservation::new("20240301", "0500", "20240301", "0600", "TMP", "2"),
/// ]);
/// assert_eq!(snapshots[0].get("TMP").unwrap().as_f64(), Some(2.0));
/// ```
pub fn normalize<I>(observations: I) -> Vec<ForecastSnapshot>
where
    I: IntoIterator<Item = RawObservation>,
{
    observations
        .into_iter()
        .fold(Normalizer::new(), |mut acc, obs| {
            acc.push(obs);
            acc
        })
        .finish()
}
