// Copyright 2025 the Hotmap Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Which areas are highlighted, and how they are painted.

use peniko::Color;

/// Whether a highlighted area is filled or outlined.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
pub enum PaintKind {
    /// Fill the polygon.
    #[default]
    Fill,
    /// Stroke the polygon outline.
    Stroke,
}

/// Paint used for one highlighted area.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct PaintStyle {
    /// Fill or stroke.
    pub kind: PaintKind,
    /// Paint color.
    pub color: Color,
    /// Stroke width in view units; unused for fills.
    pub stroke_width: f64,
}

impl PaintStyle {
    /// Default stroke width for outlined highlights.
    pub const DEFAULT_STROKE_WIDTH: f64 = 4.0;

    /// A fill in `color`.
    #[must_use]
    pub fn fill(color: Color) -> Self {
        Self {
            kind: PaintKind::Fill,
            color,
            stroke_width: Self::DEFAULT_STROKE_WIDTH,
        }
    }

    /// An outline in `color` of the given width.
    #[must_use]
    pub fn stroke(color: Color, width: f64) -> Self {
        Self {
            kind: PaintKind::Stroke,
            color,
            stroke_width: width,
        }
    }
}

impl Default for PaintStyle {
    /// Opaque green fill.
    fn default() -> Self {
        Self::fill(Color::from_rgba8(0x00, 0xff, 0x00, 0xff))
    }
}

/// A "show these areas" request, by store index.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct HighlightRequest {
    /// Store indices of the areas to show.
    pub indices: Vec<usize>,
    /// Styles aligned with `indices`; may be shorter or empty.
    pub styles: Vec<PaintStyle>,
}

impl HighlightRequest {
    /// Creates a request.
    pub fn new(indices: impl Into<Vec<usize>>, styles: impl Into<Vec<PaintStyle>>) -> Self {
        Self {
            indices: indices.into(),
            styles: styles.into(),
        }
    }
}

/// The areas currently highlighted.
///
/// Replaced wholesale by each applied [`HighlightRequest`].
#[derive(Clone, Debug, Default, PartialEq)]
pub struct HighlightSet {
    indices: Vec<usize>,
    styles: Vec<PaintStyle>,
}

impl HighlightSet {
    /// Creates a set from indices and aligned styles.
    pub fn new(indices: Vec<usize>, styles: Vec<PaintStyle>) -> Self {
        Self { indices, styles }
    }

    /// Returns `true` if nothing is highlighted.
    pub fn is_empty(&self) -> bool {
        self.indices.is_empty()
    }

    /// Highlighted store indices, in request order.
    pub fn indices(&self) -> &[usize] {
        &self.indices
    }

    /// Styles as requested.
    pub fn styles(&self) -> &[PaintStyle] {
        &self.styles
    }

    /// Removes all highlights.
    pub fn clear(&mut self) {
        self.indices.clear();
        self.styles.clear();
    }

    /// Style for the `position`-th highlighted area.
    ///
    /// Positions past the end of the style list reuse the last style; with no
    /// styles at all, `default` is used.
    pub fn style_at(&self, position: usize, default: PaintStyle) -> PaintStyle {
        self.styles
            .get(position)
            .or(self.styles.last())
            .copied()
            .unwrap_or(default)
    }

    /// Each highlighted index with the style to paint it in.
    pub fn resolved(&self, default: PaintStyle) -> impl Iterator<Item = (usize, PaintStyle)> + '_ {
        self.indices
            .iter()
            .enumerate()
            .map(move |(position, &index)| (index, self.style_at(position, default)))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn red() -> PaintStyle {
        PaintStyle::fill(Color::from_rgba8(0xff, 0, 0, 0xff))
    }

    fn blue_outline() -> PaintStyle {
        PaintStyle::stroke(Color::from_rgba8(0, 0, 0xff, 0xff), 2.0)
    }

    #[test]
    fn missing_styles_fall_back_to_default() {
        let set = HighlightSet::new(vec![4, 2], Vec::new());
        let resolved: Vec<_> = set.resolved(PaintStyle::default()).collect();
        assert_eq!(
            resolved,
            vec![(4, PaintStyle::default()), (2, PaintStyle::default())]
        );
    }

    #[test]
    fn short_style_list_reuses_last_style() {
        let set = HighlightSet::new(vec![1, 2, 3], vec![red(), blue_outline()]);
        let resolved: Vec<_> = set.resolved(PaintStyle::default()).collect();
        assert_eq!(
            resolved,
            vec![(1, red()), (2, blue_outline()), (3, blue_outline())]
        );
    }

    #[test]
    fn clear_empties_set() {
        let mut set = HighlightSet::new(vec![1], vec![red()]);
        assert!(!set.is_empty());
        set.clear();
        assert!(set.is_empty());
        assert!(set.styles().is_empty());
    }

    #[test]
    fn default_style_is_green_fill() {
        let style = PaintStyle::default();
        assert_eq!(style.kind, PaintKind::Fill);
        assert_eq!(style.color, Color::from_rgba8(0, 255, 0, 255));
        assert_eq!(style.stroke_width, 4.0);
    }
}
