// Copyright 2025 the Hotmap Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use hotmap_areas::MapLoadError;

/// An area resolved from a tap.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct AreaHit {
    /// Store index of the area.
    pub index: usize,
    /// Logical id of the area.
    pub data_id: i32,
}

/// Callbacks from an [`ImageMap`](crate::ImageMap).
///
/// `on_area_resolved` runs on the thread that delivered the pointer event.
/// `on_map_load_failed` runs on the background build thread. No lock is held
/// during either call, so implementations may call back into the map.
pub trait ImageMapListener: Send + Sync {
    /// A confirmed single tap landed inside an area.
    fn on_area_resolved(&self, hit: AreaHit) {
        let _ = hit;
    }

    /// Building the current map failed. The map stays unbuilt; a later
    /// request retries.
    fn on_map_load_failed(&self, error: &MapLoadError) {
        let _ = error;
    }
}
