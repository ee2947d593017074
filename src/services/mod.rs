// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! Services module - fetching, persistence and search.

pub mod client;
pub mod date_template;
pub mod filter;
pub mod storage;

pub use client::DailymileClient;
pub use date_template::DateTemplate;
pub use filter::FilterCriteria;
