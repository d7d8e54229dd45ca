// Copyright 2025 the Hotmap Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Hit testing, framing and highlight state over one [`AreaSet`].

use hotmap_view::{Viewport, ViewportState};
use kurbo::Point;

use crate::{AreaSet, HighlightRequest, HighlightSet};

/// Tunables for [`AreaResolver`].
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ResolverConfig {
    /// Extra width and height, in content units, added around framed areas.
    /// Half goes on each side.
    pub selection_padding: f64,
    /// When `true`, framing also zooms so the padded areas fill the view.
    /// Otherwise only the center moves.
    pub auto_fit: bool,
}

impl Default for ResolverConfig {
    fn default() -> Self {
        Self {
            selection_padding: 50.0,
            auto_fit: false,
        }
    }
}

/// Where to put the viewport to show a group of areas.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Framing {
    /// Content point to bring to the view center.
    pub center: Point,
    /// Scale to show it at, before the viewport clamps it.
    pub scale: f64,
}

/// Resolves pointer positions to areas and owns the highlight state.
///
/// Highlight requests need both a built [`AreaSet`] and an initialized
/// [`Viewport`]. Requests made earlier are parked, only the most recent one is
/// kept, and [`AreaResolver::replay_pending`] applies it once both are
/// available.
#[derive(Clone, Debug, Default)]
pub struct AreaResolver {
    config: ResolverConfig,
    highlight: HighlightSet,
    pending: Option<HighlightRequest>,
}

impl AreaResolver {
    /// Creates a resolver with the given configuration.
    pub fn new(config: ResolverConfig) -> Self {
        Self {
            config,
            ..Self::default()
        }
    }

    /// Current configuration.
    pub fn config(&self) -> &ResolverConfig {
        &self.config
    }

    /// Replaces the configuration; affects later framing only.
    pub fn set_config(&mut self, config: ResolverConfig) {
        self.config = config;
    }

    /// Store index of the first area containing `content_pt`.
    pub fn hit_test(&self, areas: &AreaSet, content_pt: Point) -> Option<usize> {
        if !content_pt.is_finite() {
            return None;
        }
        areas.areas().iter().position(|area| area.contains(content_pt))
    }

    /// Computes how to frame `indices` in a view described by `state`.
    ///
    /// Returns `None` if the viewport is uninitialized or none of the
    /// indices name an area.
    pub fn frame_areas(
        &self,
        areas: &AreaSet,
        indices: &[usize],
        state: &ViewportState,
    ) -> Option<Framing> {
        if !state.initialized {
            return None;
        }
        let half_pad = self.config.selection_padding.max(0.0) * 0.5;
        let padded = areas.bounds_of(indices)?.inflate(half_pad, half_pad);
        let scale = if self.config.auto_fit && padded.width() > 0.0 && padded.height() > 0.0 {
            (state.view_width / padded.width()).min(state.view_height / padded.height())
        } else {
            state.scale
        };
        Some(Framing {
            center: padded.center(),
            scale,
        })
    }

    /// The areas currently highlighted.
    pub fn highlighted(&self) -> &HighlightSet {
        &self.highlight
    }

    /// Returns `true` if a request is waiting for the areas or viewport.
    pub fn has_pending(&self) -> bool {
        self.pending.is_some()
    }

    /// Shows the requested areas: replaces the highlight set and frames the
    /// areas in `viewport`.
    ///
    /// If `areas` is `None` or the viewport is uninitialized, the request is
    /// parked instead, replacing any earlier parked request, and `false` is
    /// returned.
    pub fn highlight(
        &mut self,
        request: HighlightRequest,
        areas: Option<&AreaSet>,
        viewport: &mut Viewport,
    ) -> bool {
        match areas {
            Some(areas) if viewport.is_initialized() => {
                self.pending = None;
                self.apply(request, areas, viewport);
                true
            }
            _ => {
                tracing::debug!(
                    areas = request.indices.len(),
                    "parking highlight request until map and view are ready"
                );
                self.pending = Some(request);
                false
            }
        }
    }

    /// Applies the parked request, if any, once both inputs are ready.
    ///
    /// Returns `true` if a request was applied. A request is applied at most
    /// once.
    pub fn replay_pending(&mut self, areas: Option<&AreaSet>, viewport: &mut Viewport) -> bool {
        let Some(areas) = areas else {
            return false;
        };
        if !viewport.is_initialized() {
            return false;
        }
        match self.pending.take() {
            Some(request) => {
                tracing::debug!(areas = request.indices.len(), "replaying parked highlight request");
                self.apply(request, areas, viewport);
                true
            }
            None => false,
        }
    }

    /// Drops the highlight set but keeps a parked request.
    ///
    /// Used when the store is replaced: old indices mean nothing in the new
    /// store, while a request made before the new store exists still applies.
    pub fn clear_highlighted(&mut self) {
        self.highlight.clear();
    }

    /// Drops the highlight set and any parked request.
    pub fn clear(&mut self) {
        self.highlight.clear();
        self.pending = None;
    }

    fn apply(&mut self, request: HighlightRequest, areas: &AreaSet, viewport: &mut Viewport) {
        let HighlightRequest { indices, styles } = request;
        let mut kept = Vec::with_capacity(indices.len());
        let mut kept_styles = Vec::new();
        for (position, index) in indices.into_iter().enumerate() {
            if index >= areas.len() {
                tracing::warn!(index, areas = areas.len(), "ignoring unknown area index");
                continue;
            }
            kept.push(index);
            // Resolve against the request's own list so dropped indices do not
            // shift later styles.
            if let Some(style) = styles.get(position).or(styles.last()) {
                kept_styles.push(*style);
            }
        }

        if let Some(framing) = self.frame_areas(areas, &kept, &viewport.state()) {
            viewport.center_on(framing.center, framing.scale);
        }
        self.highlight = HighlightSet::new(kept, kept_styles);
    }
}

#[cfg(test)]
mod tests {
    use kurbo::Size;
    use peniko::Color;

    use super::*;
    use crate::{AreaRecord, PaintStyle};

    fn square(id: i32, x: f64, y: f64, size: f64) -> AreaRecord {
        AreaRecord::new(
            id,
            0,
            [(x, y), (x + size, y), (x + size, y + size), (x, y + size)],
        )
    }

    fn areas() -> AreaSet {
        AreaSet::from_records([
            square(1, 0.0, 0.0, 100.0),
            square(2, 600.0, 600.0, 100.0),
            square(3, 50.0, 50.0, 100.0),
        ])
        .unwrap()
    }

    fn viewport() -> Viewport {
        let mut vp = Viewport::new();
        vp.initialize(Size::new(1000.0, 1000.0), Size::new(500.0, 500.0));
        vp
    }

    fn assert_close(a: f64, b: f64) {
        assert!((a - b).abs() < 1e-6, "expected {b}, got {a}");
    }

    #[test]
    fn hit_test_first_match_wins() {
        let resolver = AreaResolver::default();
        let set = areas();
        // Inside squares 0 and 2.
        assert_eq!(resolver.hit_test(&set, Point::new(75.0, 75.0)), Some(0));
        assert_eq!(resolver.hit_test(&set, Point::new(125.0, 125.0)), Some(2));
        assert_eq!(resolver.hit_test(&set, Point::new(400.0, 400.0)), None);
        assert_eq!(resolver.hit_test(&set, Point::new(f64::NAN, 1.0)), None);
    }

    #[test]
    fn framing_pads_half_per_side() {
        let resolver = AreaResolver::default();
        let vp = viewport();
        let framing = resolver
            .frame_areas(&areas(), &[0, 2], &vp.state())
            .unwrap();
        // Union is (0,0)-(150,150); padding keeps the center.
        assert_eq!(framing.center, Point::new(75.0, 75.0));
        assert_eq!(framing.scale, vp.scale());

        assert!(resolver.frame_areas(&areas(), &[], &vp.state()).is_none());
        assert!(resolver.frame_areas(&areas(), &[9], &vp.state()).is_none());
    }

    #[test]
    fn auto_fit_zooms_to_padded_bounds() {
        let mut resolver = AreaResolver::new(ResolverConfig {
            selection_padding: 50.0,
            auto_fit: true,
        });
        let mut vp = viewport();
        assert!(resolver.highlight(HighlightRequest::new([1], []), Some(&areas()), &mut vp));
        // 100 wide plus 50 padding in a 500 wide view.
        assert_close(vp.scale(), 500.0 / 150.0);
        let at = vp.content_to_view_point(Point::new(650.0, 650.0));
        assert_close(at.x, 250.0);
        assert_close(at.y, 250.0);
    }

    #[test]
    fn requests_park_until_ready_and_last_wins() {
        let mut resolver = AreaResolver::default();
        let mut vp = Viewport::new();
        let set = areas();

        assert!(!resolver.highlight(HighlightRequest::new([0], []), None, &mut vp));
        assert!(!resolver.highlight(HighlightRequest::new([1, 2], []), Some(&set), &mut vp));
        assert!(resolver.has_pending());
        assert!(resolver.highlighted().is_empty());

        // Areas are ready but the view is not.
        assert!(!resolver.replay_pending(Some(&set), &mut vp));

        vp.initialize(Size::new(1000.0, 1000.0), Size::new(500.0, 500.0));
        assert!(resolver.replay_pending(Some(&set), &mut vp));
        assert_eq!(resolver.highlighted().indices(), &[1, 2]);
        assert!(!resolver.replay_pending(Some(&set), &mut vp));
    }

    #[test]
    fn unknown_indices_are_dropped_without_shifting_styles() {
        let red = PaintStyle::fill(Color::from_rgba8(255, 0, 0, 255));
        let blue = PaintStyle::stroke(Color::from_rgba8(0, 0, 255, 255), 2.0);
        let mut resolver = AreaResolver::default();
        let mut vp = viewport();

        resolver.highlight(
            HighlightRequest::new([7, 0, 2], [red, blue]),
            Some(&areas()),
            &mut vp,
        );
        let resolved: Vec<_> = resolver
            .highlighted()
            .resolved(PaintStyle::default())
            .collect();
        assert_eq!(resolved, vec![(0, blue), (2, blue)]);

        resolver.clear();
        assert!(resolver.highlighted().is_empty());
    }
}
