// Copyright 2025 the Hotmap Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use hotmap_areas::{PaintStyle, ResolverConfig};
use hotmap_gesture::GestureConfig;

/// Tuning for an [`ImageMap`](crate::ImageMap).
///
/// Hosts that read widget attributes (selection color, padding and so on)
/// map them onto these fields.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct ImageMapConfig {
    /// Touch slop, tap timing and pinch response.
    pub gesture: GestureConfig,
    /// Framing of shown areas.
    pub resolver: ResolverConfig,
    /// Style for highlighted areas that were shown without one.
    pub selection_style: PaintStyle,
    /// Upper bound on the zoom scale; `None` leaves it unbounded.
    pub max_scale: Option<f64>,
}

