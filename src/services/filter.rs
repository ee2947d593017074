// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! Entry search by date range, workout type and text pattern.
//!
//! Dates use the short `YY/M/D` or `YY/M` forms and are interpreted in the
//! caller's time zone. The end bound is inclusive through 23:59:59 of its day.
//! Entries without a workout never match.

use chrono::{DateTime, Local, NaiveDate, NaiveTime, TimeZone};
use regex::Regex;

use crate::error::{FeedError, Result};
use crate::models::{Entry, EntryCollection};
use crate::services::date_template::parse_date;

/// Search criteria. Empty strings disable the corresponding predicate.
#[derive(Debug, Clone, Default)]
pub struct FilterCriteria {
    /// Earliest date, `YY/M/D` or `YY/M`
    pub start_date: String,
    /// Latest date (inclusive); only honored together with `start_date`
    pub end_date: String,
    /// Regular expression matched against workout title and message;
    /// empty or `*` matches everything
    pub pattern: String,
    /// Exact workout type ("running", "cycling", ...)
    pub workout_type: String,
}

impl FilterCriteria {
    pub fn new(start_date: &str, end_date: &str, pattern: &str, workout_type: &str) -> Self {
        Self {
            start_date: start_date.to_string(),
            end_date: end_date.to_string(),
            pattern: pattern.to_string(),
            workout_type: workout_type.to_string(),
        }
    }

    fn regex(&self) -> Result<Regex> {
        let pattern = match self.pattern.as_str() {
            "" | "*" => ".*",
            p => p,
        };
        Ok(Regex::new(pattern)?)
    }

    fn date_range<Tz: TimeZone>(&self, tz: &Tz) -> Result<Option<DateRange<Tz>>> {
        if self.start_date.is_empty() {
            return Ok(None);
        }

        let start = local_time(tz, parse_date(&self.start_date)?, NaiveTime::MIN)?;
        let end = if self.end_date.is_empty() {
            None
        } else {
            Some(local_time(tz, parse_date(&self.end_date)?, end_of_day())?)
        };

        Ok(Some(DateRange { start, end }))
    }
}

/// Last whole second of a day, the inclusive end bound.
fn end_of_day() -> NaiveTime {
    NaiveTime::from_hms_opt(23, 59, 59).expect("23:59:59 is a valid time")
}

struct DateRange<Tz: TimeZone> {
    start: DateTime<Tz>,
    end: Option<DateTime<Tz>>,
}

impl<Tz: TimeZone> DateRange<Tz> {
    fn contains(&self, time: &DateTime<Tz>) -> bool {
        if *time < self.start {
            return false;
        }
        match &self.end {
            Some(end) => time <= end,
            None => true,
        }
    }
}

/// Anchor a calendar date and wall-clock time in `tz`.
fn local_time<Tz: TimeZone>(tz: &Tz, date: NaiveDate, time: NaiveTime) -> Result<DateTime<Tz>> {
    tz.from_local_datetime(&date.and_time(time))
        .earliest()
        .ok_or_else(|| FeedError::Parse(format!("{} {} does not exist in local time", date, time)))
}

impl EntryCollection {
    /// Select matching entries, interpreting dates in the local time zone.
    ///
    /// The result is a new collection in the original order.
    pub fn filter(&self, criteria: &FilterCriteria) -> Result<EntryCollection> {
        self.filter_in(criteria, &Local)
    }

    /// Select matching entries, interpreting dates in `tz`.
    pub fn filter_in<Tz: TimeZone>(
        &self,
        criteria: &FilterCriteria,
        tz: &Tz,
    ) -> Result<EntryCollection> {
        let range = criteria.date_range(tz)?;
        let regex = criteria.regex()?;

        let matches: Vec<Entry> = self
            .iter()
            .filter(|entry| {
                let Some(workout) = entry.active_workout() else {
                    return false;
                };
                if !criteria.workout_type.is_empty() && workout.kind != criteria.workout_type {
                    return false;
                }
                if let Some(range) = &range {
                    match entry.time() {
                        Ok(time) => {
                            if !range.contains(&time.with_timezone(tz)) {
                                return false;
                            }
                        }
                        Err(e) => {
                            tracing::debug!(entry_id = entry.id, error = %e, "Skipping entry");
                            return false;
                        }
                    }
                }
                regex.is_match(&workout.title) || regex.is_match(&entry.message)
            })
            .cloned()
            .collect();

        tracing::debug!(matched = matches.len(), total = self.len(), "Filtered entries");
        Ok(EntryCollection::from(matches))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{Distance, Workout};
    use chrono::FixedOffset;

    fn pacific() -> FixedOffset {
        FixedOffset::west_opt(7 * 3600).unwrap()
    }

    fn make_entry(id: i64, at: &str, kind: &str, title: &str, message: &str) -> Entry {
        Entry {
            id,
            at: at.to_string(),
            message: message.to_string(),
            workout: Some(Workout {
                kind: kind.to_string(),
                distance: Distance {
                    value: 3.0,
                    units: "miles".to_string(),
                },
                duration: 1800,
                title: title.to_string(),
                ..Default::default()
            }),
            ..Default::default()
        }
    }

    fn ids(entries: &EntryCollection) -> Vec<i64> {
        entries.iter().map(|e| e.id).collect()
    }

    fn sample() -> EntryCollection {
        EntryCollection::from(vec![
            make_entry(5, "2013-05-20T18:00:00-07:00", "running", "Hill repeats", "Legs are toast"),
            make_entry(4, "2013-05-15T07:00:00-07:00", "cycling", "Commute", "Headwind both ways"),
            Entry {
                id: 3,
                at: "2013-05-14T12:00:00-07:00".to_string(),
                message: "Great run today, everyone!".to_string(),
                ..Default::default()
            },
            make_entry(2, "2013-05-14T06:30:00-07:00", "running", "Easy run", "Recovery"),
            make_entry(1, "2013-04-30T06:30:00-07:00", "running", "Long run", "Felt strong"),
        ])
    }

    #[test]
    fn test_match_all_skips_non_workouts() {
        let entries = sample();
        for pattern in ["", "*"] {
            let criteria = FilterCriteria::new("", "", pattern, "");
            let found = entries.filter_in(&criteria, &pacific()).unwrap();
            assert_eq!(ids(&found), vec![5, 4, 2, 1]);
        }
    }

    #[test]
    fn test_workout_type_is_exact() {
        let entries = sample();
        let found = entries
            .filter_in(&FilterCriteria::new("", "", "", "cycling"), &pacific())
            .unwrap();
        assert_eq!(ids(&found), vec![4]);

        let found = entries
            .filter_in(&FilterCriteria::new("", "", "", "run"), &pacific())
            .unwrap();
        assert!(found.is_empty());
    }

    #[test]
    fn test_pattern_matches_title_or_message() {
        let entries = sample();
        let found = entries
            .filter_in(&FilterCriteria::new("", "", "(?i)hill|recovery", ""), &pacific())
            .unwrap();
        assert_eq!(ids(&found), vec![5, 2]);

        // message-only match on a non-workout entry still doesn't count
        let found = entries
            .filter_in(&FilterCriteria::new("", "", "everyone", ""), &pacific())
            .unwrap();
        assert!(found.is_empty());
    }

    #[test]
    fn test_invalid_pattern() {
        let result = sample().filter_in(&FilterCriteria::new("", "", "(unclosed", ""), &pacific());
        assert!(matches!(result, Err(FeedError::InvalidPattern(_))));
    }

    #[test]
    fn test_invalid_dates() {
        let entries = sample();
        let result = entries.filter_in(&FilterCriteria::new("13-05-14", "", "", ""), &pacific());
        assert!(matches!(result, Err(FeedError::InvalidFormat(_))));

        let result = entries.filter_in(&FilterCriteria::new("13/5/1", "2013", "", ""), &pacific());
        assert!(matches!(result, Err(FeedError::InvalidFormat(_))));
    }

    #[test]
    fn test_start_bound_includes_midnight() {
        let entries = EntryCollection::from(vec![
            make_entry(2, "2013-05-14T00:00:00-07:00", "running", "A", ""),
            make_entry(1, "2013-05-13T23:59:59-07:00", "running", "B", ""),
        ]);
        let found = entries
            .filter_in(&FilterCriteria::new("13/5/14", "", "", ""), &pacific())
            .unwrap();
        assert_eq!(ids(&found), vec![2]);
    }

    #[test]
    fn test_end_bound_inclusive_through_end_of_day() {
        let entries = EntryCollection::from(vec![
            make_entry(3, "2013-05-15T00:00:00-07:00", "running", "A", ""),
            make_entry(2, "2013-05-14T23:59:59-07:00", "running", "B", ""),
            make_entry(1, "2013-05-01T00:00:00-07:00", "running", "C", ""),
        ]);
        let found = entries
            .filter_in(&FilterCriteria::new("13/5/1", "13/5/14", "", ""), &pacific())
            .unwrap();
        assert_eq!(ids(&found), vec![2, 1]);
    }

    #[test]
    fn test_end_of_day_bound() {
        assert_eq!(end_of_day(), NaiveTime::from_hms_opt(23, 59, 59).unwrap());
        assert_ne!(end_of_day(), NaiveTime::MIN);
    }

    #[test]
    fn test_two_digit_year_before_2000() {
        let entries = EntryCollection::from(vec![
            make_entry(2, "1969-07-20T20:17:00-07:00", "walking", "Moon", ""),
            make_entry(1, "2069-07-20T20:17:00-07:00", "walking", "Anniversary", ""),
        ]);
        let found = entries
            .filter_in(&FilterCriteria::new("69/7/20", "69/7/20", "", ""), &pacific())
            .unwrap();
        assert_eq!(ids(&found), vec![2]);
    }

    #[test]
    fn test_non_ascii_digits_are_invalid_format() {
        let criteria = FilterCriteria::new("\u{662}\u{663}/\u{665}/\u{661}\u{664}", "", "", "");
        let result = sample().filter_in(&criteria, &pacific());
        assert!(matches!(result, Err(FeedError::InvalidFormat(_))));
    }

    #[test]
    fn test_entry_times_converted_to_zone() {
        // 2013-05-14T05:00Z is still May 13 in UTC-7
        let entries = EntryCollection::from(vec![make_entry(1, "2013-05-14T05:00:00Z", "running", "A", "")]);
        let found = entries
            .filter_in(&FilterCriteria::new("13/5/14", "", "", ""), &pacific())
            .unwrap();
        assert!(found.is_empty());

        let utc = FixedOffset::east_opt(0).unwrap();
        let found = entries
            .filter_in(&FilterCriteria::new("13/5/14", "", "", ""), &utc)
            .unwrap();
        assert_eq!(ids(&found), vec![1]);
    }

    #[test]
    fn test_month_range() {
        let entries = sample();
        let found = entries
            .filter_in(&FilterCriteria::new("13/5", "13/5/31", "", "running"), &pacific())
            .unwrap();
        assert_eq!(ids(&found), vec![5, 2]);
    }

    #[test]
    fn test_end_without_start_is_ignored() {
        let entries = sample();
        let found = entries
            .filter_in(&FilterCriteria::new("", "13/5/1", "", ""), &pacific())
            .unwrap();
        assert_eq!(found.len(), 4);
    }

    #[test]
    fn test_unparseable_timestamp_skipped_only_with_dates() {
        let entries = EntryCollection::from(vec![make_entry(1, "someday", "running", "A", "")]);
        let all = entries.filter_in(&FilterCriteria::default(), &pacific()).unwrap();
        assert_eq!(all.len(), 1);

        let dated = entries
            .filter_in(&FilterCriteria::new("13/5/1", "", "", ""), &pacific())
            .unwrap();
        assert!(dated.is_empty());
    }

    #[test]
    fn test_result_is_independent_copy() {
        let entries = sample();
        let mut found = entries.filter_in(&FilterCriteria::default(), &pacific()).unwrap();
        found.remove(5).unwrap();
        found.entries[0].message.push_str(" (edited)");

        assert_eq!(entries.len(), 5);
        assert_eq!(entries.entries[1].message, "Headwind both ways");
    }

    #[test]
    fn test_local_zone_bounds() {
        let midnight = Local.with_ymd_and_hms(2013, 5, 14, 0, 0, 0).earliest().unwrap();
        let day_before = Local.with_ymd_and_hms(2013, 5, 13, 12, 0, 0).earliest().unwrap();
        let entries = EntryCollection::from(vec![
            make_entry(2, &midnight.to_rfc3339(), "running", "A", ""),
            make_entry(1, &day_before.to_rfc3339(), "running", "B", ""),
        ]);

        let found = entries.filter(&FilterCriteria::new("13/5/14", "", "", "")).unwrap();
        assert_eq!(ids(&found), vec![2]);
    }
}
