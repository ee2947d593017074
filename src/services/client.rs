// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! Dailymile API client for fetching feed entries.
//!
//! Handles:
//! - Paged entry listing for a user
//! - Incremental listing of entries newer than a timestamp
//!
//! Requests are issued once; retrying is left to the caller.

use std::time::Duration;

use crate::error::{FeedError, Result};
use crate::models::EntryCollection;

/// Public Dailymile API root.
pub const DEFAULT_BASE_URL: &str = "http://api.dailymile.com";

/// Dailymile API client.
#[derive(Clone)]
pub struct DailymileClient {
    http: reqwest::Client,
    base_url: String,
}

impl Default for DailymileClient {
    fn default() -> Self {
        Self::new(DEFAULT_BASE_URL)
    }
}

impl DailymileClient {
    /// Create a client for the given API root.
    pub fn new(base_url: &str) -> Self {
        Self {
            http: reqwest::Client::new(),
            base_url: base_url.trim_end_matches('/').to_string(),
        }
    }

    /// Create a client whose requests give up after `timeout`.
    pub fn with_timeout(base_url: &str, timeout: Duration) -> Result<Self> {
        let http = reqwest::Client::builder()
            .timeout(timeout)
            .build()
            .map_err(|e| FeedError::Api(format!("HTTP client setup failed: {}", e)))?;

        Ok(Self {
            http,
            base_url: base_url.trim_end_matches('/').to_string(),
        })
    }

    /// Fetch one page of a user's entries (newest first, pages start at 1).
    pub async fn entries_by_page(&self, user: &str, page: u32) -> Result<EntryCollection> {
        self.get_entries(user, &[("page", page.to_string())]).await
    }

    /// Fetch a user's entries posted after a Unix timestamp.
    pub async fn entries_since(&self, user: &str, since: i64) -> Result<EntryCollection> {
        self.get_entries(user, &[("since", since.to_string())]).await
    }

    fn entries_url(&self, user: &str) -> String {
        format!(
            "{}/people/{}/entries.json",
            self.base_url,
            urlencoding::encode(user)
        )
    }

    /// GET the entries endpoint and decode the body.
    ///
    /// An empty body means no entries.
    async fn get_entries(&self, user: &str, query: &[(&str, String)]) -> Result<EntryCollection> {
        let url = self.entries_url(user);
        tracing::debug!(url = %url, ?query, "Fetching entries");

        let response = self
            .http
            .get(&url)
            .query(query)
            .send()
            .await
            .map_err(|e| FeedError::Api(e.to_string()))?;

        let status = response.status();
        let body = response
            .bytes()
            .await
            .map_err(|e| FeedError::Api(format!("Failed to read response: {}", e)))?;

        if !status.is_success() {
            tracing::warn!(status = status.as_u16(), user, "Dailymile request failed");
            return Err(FeedError::Api(format!(
                "HTTP {}: {}",
                status,
                String::from_utf8_lossy(&body)
            )));
        }

        if body.is_empty() {
            return Ok(EntryCollection::default());
        }

        let entries: EntryCollection = serde_json::from_slice(&body)?;
        tracing::debug!(count = entries.len(), user, "Fetched entries");
        Ok(entries)
    }
}
