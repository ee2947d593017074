// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@kernel.org>

//! Ordered entry collection with distance and pace aggregates.
//!
//! Order is feed order (newest first). The collection serializes as
//! `{"entries": [...]}`, which is both the API response shape and the
//! on-disk format.

use std::collections::HashSet;
use std::time::Duration;

use chrono::{DateTime, FixedOffset};
use serde::{Deserialize, Serialize};

use crate::error::{FeedError, Result};
use crate::models::Entry;
use crate::time_utils::format_duration;

/// Statute miles per kilometer, applied to metric paces when averaging.
const MILES_PER_KILOMETER: f64 = 1.609;

/// Id passed to [`EntryCollection::remove`] to remove the first entry.
pub const FIRST_ENTRY: i64 = -1;

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct EntryCollection {
    #[serde(default)]
    pub entries: Vec<Entry>,
}

impl From<Vec<Entry>> for EntryCollection {
    fn from(entries: Vec<Entry>) -> Self {
        Self { entries }
    }
}

impl EntryCollection {
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Entry> {
        self.entries.iter()
    }

    /// Remove the entry with the given id.
    ///
    /// [`FIRST_ENTRY`] removes the first entry regardless of its id.
    pub fn remove(&mut self, id: i64) -> Result<Entry> {
        let index = self
            .entries
            .iter()
            .position(|e| id == FIRST_ENTRY || e.id == id)
            .ok_or(FeedError::NotFound(id))?;
        Ok(self.entries.remove(index))
    }

    /// Sum of workout distances.
    ///
    /// Units are not reconciled: miles and kilometers are added as-is.
    pub fn total_distance(&self) -> f64 {
        self.entries
            .iter()
            .filter_map(|e| e.workout.as_ref())
            .map(|w| w.distance.value)
            .sum()
    }

    /// Average pace per mile across all workouts with a positive pace.
    ///
    /// Kilometer paces are scaled to per-mile paces before averaging.
    /// Workouts without distance do not count toward the average. Returns
    /// zero when no workout has a pace.
    pub fn average_pace(&self) -> Result<Duration> {
        let mut total_nanos: u128 = 0;
        let mut count: u128 = 0;

        for workout in self.entries.iter().filter_map(|e| e.workout.as_ref()) {
            let mut pace = workout.pace()?;
            if workout.distance.is_kilometers() {
                pace = per_kilometer_to_per_mile(pace);
            }

            if !pace.is_zero() {
                total_nanos += pace.as_nanos();
                count += 1;
            }
        }

        if count == 0 {
            return Ok(Duration::ZERO);
        }

        let avg = total_nanos / count;
        let secs = u64::try_from(avg / 1_000_000_000).map_err(|_| {
            FeedError::Parse(format!("average pace of {} ns is out of range", avg))
        })?;
        Ok(Duration::new(secs, (avg % 1_000_000_000) as u32))
    }

    /// Average pace for display. Errors produce an empty string.
    pub fn average_pace_str(&self) -> String {
        match self.average_pace() {
            Ok(pace) => format_duration(pace),
            Err(e) => {
                tracing::debug!(error = %e, "Average pace unavailable");
                String::new()
            }
        }
    }

    /// Timestamp of the newest entry, skipping unparseable ones.
    pub fn latest_time(&self) -> Option<DateTime<FixedOffset>> {
        self.entries.iter().filter_map(|e| e.time().ok()).max()
    }

    /// Prepend entries from a newer fetch, skipping ids already held.
    ///
    /// Returns the number of entries added.
    pub fn merge_newer(&mut self, newer: EntryCollection) -> usize {
        let known: HashSet<i64> = self.entries.iter().map(|e| e.id).collect();
        let mut added: Vec<Entry> = newer
            .entries
            .into_iter()
            .filter(|e| !known.contains(&e.id))
            .collect();
        let count = added.len();

        added.append(&mut self.entries);
        self.entries = added;
        count
    }
}

/// Convert a minutes-per-kilometer pace to minutes-per-mile.
fn per_kilometer_to_per_mile(pace: Duration) -> Duration {
    Duration::from_nanos((pace.as_nanos() as f64 * MILES_PER_KILOMETER) as u64)
}

impl<'a> IntoIterator for &'a EntryCollection {
    type Item = &'a Entry;
    type IntoIter = std::slice::Iter<'a, Entry>;

    fn into_iter(self) -> Self::IntoIter {
        self.entries.iter()
    }
}
