// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@kernel.org>

//! Data models for the Dailymile feed.

pub mod collection;
pub mod entry;
pub mod workout;

pub use collection::{EntryCollection, FIRST_ENTRY};
pub use entry::{Comment, Entry, Geo, Like, Location, User};
pub use workout::{Distance, Workout};
