// Copyright 2025 the Hotmap Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use core::fmt;

/// Failure to build the areas of a map.
///
/// A failed build is never memoized; the next request for the same map
/// parses again.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum MapLoadError {
    /// The map description could not be parsed.
    Parse(String),
    /// The map description could not be read.
    Io(String),
    /// The map identity cannot name a description (resource id 0, blank
    /// path or blank inline text).
    InvalidIdentity,
    /// The record at `index` is not a usable polygon (fewer than three
    /// points or non-finite coordinates).
    InvalidArea {
        /// Position of the offending record in parser output.
        index: usize,
    },
}

impl fmt::Display for MapLoadError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Parse(msg) => write!(f, "failed to parse map description: {msg}"),
            Self::Io(msg) => write!(f, "failed to read map description: {msg}"),
            Self::InvalidIdentity => f.write_str("map identity does not name a description"),
            Self::InvalidArea { index } => write!(f, "area record {index} is not a valid polygon"),
        }
    }
}

impl core::error::Error for MapLoadError {}
