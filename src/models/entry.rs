// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@kernel.org>

//! Dailymile feed entry model, as returned by the API and stored on disk.

use chrono::{DateTime, FixedOffset};
use serde::{Deserialize, Serialize};

use crate::error::{FeedError, Result};
use crate::models::Workout;

/// One feed item: a workout and/or a social post.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Entry {
    pub id: i64,
    #[serde(default)]
    pub url: String,
    /// Timestamp (RFC 3339)
    #[serde(default)]
    pub at: String,
    #[serde(default)]
    pub message: String,
    #[serde(default)]
    pub comments: Vec<Comment>,
    #[serde(default)]
    pub likes: Vec<Like>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub geo: Option<Geo>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub location: Option<Location>,
    #[serde(default)]
    pub user: User,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub workout: Option<Workout>,
}

impl Entry {
    /// Parse the entry timestamp.
    pub fn time(&self) -> Result<DateTime<FixedOffset>> {
        DateTime::parse_from_rfc3339(&self.at).map_err(|e| {
            FeedError::Parse(format!("entry {} timestamp {:?}: {}", self.id, self.at, e))
        })
    }

    /// The workout payload, if this entry logs one.
    pub fn active_workout(&self) -> Option<&Workout> {
        self.workout.as_ref().filter(|w| w.is_present())
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Comment {
    #[serde(default)]
    pub body: String,
    #[serde(default)]
    pub created_at: String,
    #[serde(default)]
    pub user: User,
}

/// A like carries no data of its own; only the count matters.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Like {}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Location {
    #[serde(default)]
    pub name: String,
}

/// Dailymile user profile.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct User {
    #[serde(rename = "username", default)]
    pub name: String,
    #[serde(default)]
    pub display_name: String,
    #[serde(default)]
    pub photo_url: String,
    /// Profile URL
    #[serde(rename = "usr", default)]
    pub url: String,
}

/// GeoJSON-style point. Coordinates are strings, longitude first.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Geo {
    #[serde(rename = "type", default)]
    pub kind: String,
    #[serde(default)]
    pub coordinates: Vec<String>,
}

impl Geo {
    pub fn longitude(&self) -> Option<f64> {
        self.coordinate(0)
    }

    pub fn latitude(&self) -> Option<f64> {
        self.coordinate(1)
    }

    fn coordinate(&self, index: usize) -> Option<f64> {
        self.coordinates.get(index)?.trim().parse().ok()
    }
}
