// Copyright 2025 the Hotmap Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use hotmap_areas::{AreaSet, HighlightSet, PaintStyle};
use hotmap_view::Viewport;
use kurbo::{Affine, BezPath};

/// One highlighted area, ready to paint.
#[derive(Clone, Debug, PartialEq)]
pub struct HighlightPaint {
    /// Store index of the area.
    pub index: usize,
    /// Outline in view space.
    pub path: BezPath,
    /// How to paint it.
    pub style: PaintStyle,
}

/// What to draw for one frame.
///
/// The host draws the image with `transform` (content to view), then each
/// highlight on top, in order.
#[derive(Clone, Debug, PartialEq)]
pub struct RenderPlan {
    /// Content-to-view transform for the image.
    pub transform: Affine,
    /// Highlights to paint over the image.
    pub highlights: Vec<HighlightPaint>,
}

impl RenderPlan {
    pub(crate) fn build(
        viewport: &Viewport,
        areas: Option<&AreaSet>,
        highlighted: &HighlightSet,
        default_style: PaintStyle,
    ) -> Self {
        let transform = viewport.transform();
        let highlights = match areas {
            Some(areas) if viewport.is_initialized() => highlighted
                .resolved(default_style)
                .filter_map(|(index, style)| {
                    let area = areas.get(index)?;
                    Some(HighlightPaint {
                        index,
                        path: transform * area.path().clone(),
                        style,
                    })
                })
                .collect(),
            _ => Vec::new(),
        };
        Self {
            transform,
            highlights,
        }
    }
}
