// Copyright 2025 the Hotmap Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use std::sync::Arc;
use std::thread::JoinHandle;

use hotmap_areas::{AreaSet, MapIdentity, MapLoadError};

/// How a background map build ended.
#[derive(Clone, Debug)]
pub enum MapLoadStatus {
    /// The store was built and installed as the current map.
    Installed(Arc<AreaSet>),
    /// Another map was set while this one was building; the result was
    /// discarded.
    Superseded,
}

/// Handle to a background map build started by
/// [`ImageMap::set_map`](crate::ImageMap::set_map).
///
/// Dropping the handle detaches the build; it still completes and installs
/// its result.
#[derive(Debug)]
pub struct MapLoad {
    identity: MapIdentity,
    handle: JoinHandle<Result<MapLoadStatus, MapLoadError>>,
}

impl MapLoad {
    pub(crate) fn new(
        identity: MapIdentity,
        handle: JoinHandle<Result<MapLoadStatus, MapLoadError>>,
    ) -> Self {
        Self { identity, handle }
    }

    /// The map being built.
    pub fn identity(&self) -> &MapIdentity {
        &self.identity
    }

    /// Returns `true` once the build thread has finished.
    pub fn is_finished(&self) -> bool {
        self.handle.is_finished()
    }

    /// Blocks until the build finishes.
    ///
    /// A panic in the map parser is resumed on the calling thread.
    pub fn wait(self) -> Result<MapLoadStatus, MapLoadError> {
        match self.handle.join() {
            Ok(result) => result,
            Err(panic) => std::panic::resume_unwind(panic),
        }
    }
}
