// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! Recognition of the short date strings accepted by entry search.
//!
//! Two shapes are accepted, both with a two-digit year:
//! - `YY/M/D` (day granularity)
//! - `YY/M` (month granularity, first day of the month)

use std::sync::LazyLock;

use chrono::NaiveDate;
use regex::Regex;

use crate::error::{FeedError, Result};

/// Shape of a date string, used to pick the parse format.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DateTemplate {
    YearMonthDay,
    YearMonth,
}

/// Ordered (shape, template) pairs; the first match wins.
static TEMPLATES: LazyLock<Vec<(Regex, DateTemplate)>> = LazyLock::new(|| {
    vec![
        (
            Regex::new(r"^[0-9]{2}/[0-9]{1,2}/[0-9]{1,2}$").expect("day template regex is valid"),
            DateTemplate::YearMonthDay,
        ),
        (
            Regex::new(r"^[0-9]{2}/[0-9]{1,2}$").expect("month template regex is valid"),
            DateTemplate::YearMonth,
        ),
    ]
});

impl DateTemplate {
    /// Find the template matching `date`.
    pub fn resolve(date: &str) -> Result<Self> {
        TEMPLATES
            .iter()
            .find(|(shape, _)| shape.is_match(date))
            .map(|(_, template)| *template)
            .ok_or_else(|| FeedError::InvalidFormat(date.to_string()))
    }

    /// Parse `date` with this template into a calendar date.
    ///
    /// Two-digit years 69-99 are 1969-1999; 00-68 are 2000-2068.
    pub fn parse(&self, date: &str) -> Result<NaiveDate> {
        let (yy, rest) = date
            .split_once('/')
            .ok_or_else(|| parse_error(date, "missing month"))?;
        let yy: i32 = yy.parse().map_err(|e| parse_error(date, e))?;
        let year = if yy >= 69 { 1900 + yy } else { 2000 + yy };

        let full = match self {
            DateTemplate::YearMonthDay => format!("{}/{}", year, rest),
            // month granularity starts on the first
            DateTemplate::YearMonth => format!("{}/{}/1", year, rest),
        };
        NaiveDate::parse_from_str(&full, "%Y/%m/%d").map_err(|e| parse_error(date, e))
    }
}

fn parse_error(date: &str, reason: impl std::fmt::Display) -> FeedError {
    FeedError::Parse(format!("date {:?}: {}", date, reason))
}

/// Resolve the template for `date` and parse it.
pub fn parse_date(date: &str) -> Result<NaiveDate> {
    DateTemplate::resolve(date)?.parse(date)
}
