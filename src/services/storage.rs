// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! Local JSON persistence of entry collections.

use std::fs;
use std::io::Write;
use std::path::Path;

use crate::error::Result;
use crate::models::EntryCollection;

/// Write `entries` to `path` as JSON, replacing any existing file.
///
/// On Unix the file is created readable and writable by the owner only.
pub fn save<P: AsRef<Path>>(path: P, entries: &EntryCollection) -> Result<()> {
    let path = path.as_ref();
    let bytes = serde_json::to_vec(entries)?;

    let mut options = fs::OpenOptions::new();
    options.write(true).create(true).truncate(true);
    #[cfg(unix)]
    {
        use std::os::unix::fs::OpenOptionsExt;
        options.mode(0o600);
    }

    let mut file = options.open(path)?;
    file.write_all(&bytes)?;

    tracing::debug!(path = %path.display(), count = entries.len(), "Saved entries");
    Ok(())
}

/// Read an entry collection previously written by [`save`].
pub fn load<P: AsRef<Path>>(path: P) -> Result<EntryCollection> {
    let path = path.as_ref();
    let bytes = fs::read(path)?;
    let entries: EntryCollection = serde_json::from_slice(&bytes)?;

    tracing::debug!(path = %path.display(), count = entries.len(), "Loaded entries");
    Ok(entries)
}
