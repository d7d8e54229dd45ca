// Copyright 2025 the Hotmap Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use core::fmt;
use std::sync::Arc;

use crate::MapLoadError;

/// Names one map description; the key under which its areas are memoized.
///
/// Two identities are the same map exactly when they compare equal, so an
/// inline description is keyed by its full text.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub enum MapIdentity {
    /// A description bundled with the application, by resource id.
    Resource(u32),
    /// A description stored in a local file.
    File(Arc<str>),
    /// A description held in memory, for example fetched over the network.
    Inline(Arc<str>),
}

impl MapIdentity {
    /// Identity of a local file.
    pub fn file(path: impl Into<Arc<str>>) -> Self {
        Self::File(path.into())
    }

    /// Identity of an in-memory description.
    pub fn inline(text: impl Into<Arc<str>>) -> Self {
        Self::Inline(text.into())
    }

    /// Rejects identities that cannot name a description.
    pub fn validate(&self) -> Result<(), MapLoadError> {
        let usable = match self {
            Self::Resource(id) => *id != 0,
            Self::File(path) => !path.trim().is_empty(),
            Self::Inline(text) => !text.trim().is_empty(),
        };
        if usable {
            Ok(())
        } else {
            Err(MapLoadError::InvalidIdentity)
        }
    }
}

impl fmt::Display for MapIdentity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Resource(id) => write!(f, "resource #{id}"),
            Self::File(path) => write!(f, "file {path}"),
            // Inline text can be large; keep log lines short.
            Self::Inline(text) => write!(f, "inline map ({} bytes)", text.len()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn validate_rejects_empty_names() {
        assert_eq!(
            MapIdentity::Resource(0).validate(),
            Err(MapLoadError::InvalidIdentity)
        );
        assert_eq!(
            MapIdentity::file("  ").validate(),
            Err(MapLoadError::InvalidIdentity)
        );
        assert_eq!(
            MapIdentity::inline("").validate(),
            Err(MapLoadError::InvalidIdentity)
        );
        assert_eq!(MapIdentity::Resource(7).validate(), Ok(()));
        assert_eq!(MapIdentity::file("/maps/floor.xml").validate(), Ok(()));
    }

    #[test]
    fn display_keeps_inline_text_out_of_logs() {
        let id = MapIdentity::inline("<map>...</map>");
        assert_eq!(id.to_string(), "inline map (14 bytes)");
    }
}
