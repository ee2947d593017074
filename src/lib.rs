// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@kernel.org>

//! Dailymile-Feed: fetch, store and query a Dailymile activity feed
//!
//! This crate fetches feed entries from the Dailymile API, keeps them in a
//! local JSON file, and searches and summarizes them (date ranges, workout
//! types, text patterns, total distance and average pace).

pub mod config;
pub mod error;
pub mod models;
pub mod services;
pub mod time_utils;

pub use error::{FeedError, Result};
pub use models::{Entry, EntryCollection, Workout};
pub use services::{DailymileClient, FilterCriteria};
