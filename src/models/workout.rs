// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@kernel.org>

//! Workout payload of a feed entry, with duration and pace derivation.

use std::time::Duration;

use serde::{Deserialize, Serialize};

use crate::error::{FeedError, Result};
use crate::time_utils::format_duration;

/// Units string the service uses for metric distances.
pub const KILOMETERS: &str = "kilometers";

/// Units string the service uses for imperial distances.
pub const MILES: &str = "miles";

/// Activity-specific part of an entry.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Workout {
    /// Activity category ("running", "cycling", ...); empty means no workout
    #[serde(rename = "activity_type", default)]
    pub kind: String,
    #[serde(default)]
    pub distance: Distance,
    /// Subjective rating ("great", "tired", ...)
    #[serde(default)]
    pub felt: String,
    /// Elapsed time in whole seconds
    #[serde(default)]
    pub duration: u64,
    #[serde(default)]
    pub title: String,
}

/// Distance value in the units the athlete logged it in.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Distance {
    #[serde(default)]
    pub value: f64,
    #[serde(default)]
    pub units: String,
}

impl Distance {
    pub fn is_kilometers(&self) -> bool {
        self.units == KILOMETERS
    }
}

impl Workout {
    /// True when this workout carries an activity type.
    pub fn is_present(&self) -> bool {
        !self.kind.is_empty()
    }

    /// Total elapsed time.
    pub fn duration(&self) -> Duration {
        Duration::from_secs(self.duration)
    }

    /// Elapsed time formatted as `H:MM:SS` or `M:SS`.
    pub fn duration_str(&self) -> String {
        format_duration(self.duration())
    }

    /// Time per unit of distance, in the workout's own units.
    ///
    /// Workouts without a positive distance (weight training, yoga, ...)
    /// have a zero pace. The result keeps microsecond precision.
    pub fn pace(&self) -> Result<Duration> {
        if self.distance.value <= 0.0 {
            return Ok(Duration::ZERO);
        }

        let secs_per_unit = self.duration().as_secs_f64() / self.distance.value;
        let micros = (secs_per_unit * 1_000_000.0).round();
        if !micros.is_finite() || micros < 0.0 || micros > u64::MAX as f64 {
            return Err(FeedError::Parse(format!(
                "pace of {} seconds per unit is out of range",
                secs_per_unit
            )));
        }

        Ok(Duration::from_micros(micros as u64))
    }

    /// Pace formatted as `H:MM:SS` or `M:SS`.
    pub fn pace_str(&self) -> Result<String> {
        self.pace().map(format_duration)
    }
}
