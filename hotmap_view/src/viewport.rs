// Copyright 2025 the Hotmap Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use kurbo::{Affine, Point, Rect, Size, Vec2};

use crate::ViewportState;

/// Multiple of the base scale beyond which [`Viewport::scale_in`] refuses to
/// zoom further.
pub const SCALE_IN_LIMIT: f64 = 3.0;

/// Smallest step used by [`Viewport::default_step`].
const MIN_STEP: f64 = 1.25;

/// Pan/zoom viewport over a fixed-size content rectangle.
///
/// `Viewport` maps content space (image pixels, origin at the top-left of the
/// image) into view space with `view = content * scale + offset`. Once both
/// sizes are known it maintains two invariants after every call:
/// - `scale >= base_scale`, where the base scale fits the whole content in the
///   view;
/// - on each axis the content either covers the view completely or, when it
///   is smaller than the view, is centered on that axis.
///
/// Calls that need a known geometry are ignored while the viewport is
/// uninitialized.
#[derive(Clone, Debug)]
pub struct Viewport {
    content: Size,
    view: Size,
    scale: f64,
    offset: Vec2,
    base_scale: f64,
    max_scale: f64,
    initialized: bool,
    content_to_view: Affine,
    view_to_content: Affine,
}

impl Default for Viewport {
    fn default() -> Self {
        Self::new()
    }
}

impl Viewport {
    /// Creates an uninitialized viewport.
    ///
    /// - Scale is `1.0` and the offset is zero until [`Viewport::initialize`]
    ///   succeeds.
    /// - The maximum scale is unbounded.
    #[must_use]
    pub fn new() -> Self {
        Self {
            content: Size::ZERO,
            view: Size::ZERO,
            scale: 1.0,
            offset: Vec2::ZERO,
            base_scale: 1.0,
            max_scale: f64::INFINITY,
            initialized: false,
            content_to_view: Affine::IDENTITY,
            view_to_content: Affine::IDENTITY,
        }
    }

    /// Sets both sizes and resets to the fitted, centered view.
    ///
    /// If either size has a non-positive (or non-finite) dimension this is a
    /// no-op: the viewport keeps its previous state.
    pub fn initialize(&mut self, content: Size, view: Size) {
        if !is_usable(content) || !is_usable(view) {
            return;
        }
        self.content = content;
        self.view = view;
        self.base_scale = (view.width / content.width).min(view.height / content.height);
        self.scale = self.base_scale;
        self.offset = self.centered_offset();
        self.initialized = true;
        self.rebuild_transforms();
    }

    /// Records a new content size, re-initializing if the geometry is usable.
    ///
    /// An unusable size marks the viewport uninitialized.
    pub fn set_content_size(&mut self, size: Size) {
        if self.content == size && self.initialized {
            return;
        }
        self.content = size;
        self.reinitialize();
    }

    /// Records a new view size, re-initializing if the geometry is usable.
    ///
    /// An unusable size marks the viewport uninitialized.
    pub fn set_view_size(&mut self, size: Size) {
        if self.view == size && self.initialized {
            return;
        }
        self.view = size;
        self.reinitialize();
    }

    /// Returns `true` once both sizes are known and positive.
    #[must_use]
    pub fn is_initialized(&self) -> bool {
        self.initialized
    }

    /// Returns the content size.
    #[must_use]
    pub fn content_size(&self) -> Size {
        self.content
    }

    /// Returns the view size.
    #[must_use]
    pub fn view_size(&self) -> Size {
        self.view
    }

    /// Returns the current scale.
    #[must_use]
    pub fn scale(&self) -> f64 {
        self.scale
    }

    /// Returns the fit-to-view scale, the lower zoom limit.
    #[must_use]
    pub fn base_scale(&self) -> f64 {
        self.base_scale
    }

    /// Returns the content origin offset in view space.
    #[must_use]
    pub fn offset(&self) -> Vec2 {
        self.offset
    }

    /// Returns the configured upper zoom limit.
    #[must_use]
    pub fn max_scale(&self) -> f64 {
        self.max_scale
    }

    /// Sets the upper zoom limit and re-clamps the current scale.
    ///
    /// The effective limit is never below the base scale. Non-positive or NaN
    /// values are ignored; `f64::INFINITY` removes the limit.
    pub fn set_max_scale(&mut self, max_scale: f64) {
        if max_scale.is_nan() || max_scale <= 0.0 {
            return;
        }
        self.max_scale = max_scale;
        if self.initialized && self.scale > self.upper_limit() {
            let center = self.view_center();
            let pivot = self.view_to_content_point(center);
            self.zoom_to(pivot, self.upper_limit());
        }
    }

    /// Pans the content by a delta in view space, then clamps.
    pub fn pan_by(&mut self, delta: Vec2) {
        if !self.initialized || !delta.is_finite() {
            return;
        }
        self.offset += delta;
        self.adjust_offset();
    }

    /// Multiplies the scale by `factor`, keeping `pivot` (in content space) at
    /// the same view position.
    ///
    /// The resulting scale is clamped to `[base_scale, max_scale]`. Non-positive
    /// and non-finite factors are ignored.
    pub fn zoom_by(&mut self, factor: f64, pivot: Point) {
        if !factor.is_finite() || factor <= 0.0 {
            return;
        }
        self.zoom_to(pivot, self.scale * factor);
    }

    /// Like [`Viewport::zoom_by`], with the pivot given in view space.
    pub fn zoom_about_view_point(&mut self, anchor_view: Point, factor: f64) {
        if !self.initialized {
            return;
        }
        let pivot = self.view_to_content_point(anchor_view);
        self.zoom_by(factor, pivot);
    }

    /// Sets an absolute scale, keeping `pivot` (in content space) at the same
    /// view position.
    pub fn zoom_to(&mut self, pivot: Point, scale: f64) {
        if !self.initialized || !scale.is_finite() || !pivot.is_finite() {
            return;
        }
        let anchor_view = self.content_to_view_point(pivot);
        self.scale = self.clamp_scale(scale);
        self.offset = anchor_view.to_vec2() - pivot.to_vec2() * self.scale;
        self.adjust_offset();
    }

    /// Sets an absolute scale and moves `pivot` (in content space) to the view
    /// center, as far as clamping allows.
    pub fn center_on(&mut self, pivot: Point, scale: f64) {
        if !self.initialized || !scale.is_finite() || !pivot.is_finite() {
            return;
        }
        self.scale = self.clamp_scale(scale);
        self.offset = self.view_center().to_vec2() - pivot.to_vec2() * self.scale;
        self.adjust_offset();
    }

    /// Restores the fitted, centered view. No-op while uninitialized.
    pub fn reset(&mut self) {
        if !self.initialized {
            return;
        }
        self.scale = self.base_scale;
        self.offset = self.centered_offset();
        self.rebuild_transforms();
    }

    /// Zoom step used by [`Viewport::scale_in`] / [`Viewport::scale_out`] when
    /// the caller has no preference.
    ///
    /// This is the inverse of the base scale, so one step from the fitted view
    /// shows the image at roughly its native resolution. It never drops below
    /// `1.25`.
    #[must_use]
    pub fn default_step(&self) -> f64 {
        (1.0 / self.base_scale).max(MIN_STEP)
    }

    /// Zooms in by `step` about the view center.
    ///
    /// Returns `false` without zooming once the scale has reached
    /// [`SCALE_IN_LIMIT`] times the base scale.
    pub fn scale_in(&mut self, step: f64) -> bool {
        if !self.initialized || self.scale >= self.base_scale * SCALE_IN_LIMIT {
            return false;
        }
        self.zoom_about_view_point(self.view_center(), step);
        true
    }

    /// Zooms out by `step` about the view center.
    pub fn scale_out(&mut self, step: f64) {
        if !step.is_finite() || step <= 0.0 {
            return;
        }
        self.zoom_about_view_point(self.view_center(), 1.0 / step);
    }

    /// Resets to the fitted view if zoomed in.
    ///
    /// Returns `false` when already at the base scale, which hosts typically
    /// treat as "nothing to undo" for back navigation.
    pub fn reset_to_overview(&mut self) -> bool {
        if !self.initialized || self.scale <= self.base_scale {
            return false;
        }
        self.reset();
        true
    }

    /// Center of the view in view space.
    #[must_use]
    pub fn view_center(&self) -> Point {
        Point::new(self.view.width * 0.5, self.view.height * 0.5)
    }

    /// Content → view transform.
    #[must_use]
    pub fn transform(&self) -> Affine {
        self.content_to_view
    }

    /// Converts a content-space point into view space.
    #[must_use]
    pub fn content_to_view_point(&self, pt: Point) -> Point {
        self.content_to_view * pt
    }

    /// Converts a view-space point into content space.
    #[must_use]
    pub fn view_to_content_point(&self, pt: Point) -> Point {
        self.view_to_content * pt
    }

    /// Converts a content-space rectangle into view space.
    #[must_use]
    pub fn content_to_view_rect(&self, rect: Rect) -> Rect {
        self.content_to_view.transform_rect_bbox(rect)
    }

    /// Returns the part of content space currently covered by the view.
    #[must_use]
    pub fn visible_content_rect(&self) -> Rect {
        self.view_to_content
            .transform_rect_bbox(Rect::from_origin_size(Point::ORIGIN, self.view))
    }

    /// Snapshot of the current state.
    #[must_use]
    pub fn state(&self) -> ViewportState {
        ViewportState {
            content_width: self.content.width,
            content_height: self.content.height,
            view_width: self.view.width,
            view_height: self.view.height,
            scale: self.scale,
            offset_x: self.offset.x,
            offset_y: self.offset.y,
            base_scale: self.base_scale,
            initialized: self.initialized,
        }
    }

    fn reinitialize(&mut self) {
        if is_usable(self.content) && is_usable(self.view) {
            self.initialize(self.content, self.view);
        } else {
            self.initialized = false;
        }
    }

    fn upper_limit(&self) -> f64 {
        self.max_scale.max(self.base_scale)
    }

    fn clamp_scale(&self, scale: f64) -> f64 {
        scale.clamp(self.base_scale, self.upper_limit())
    }

    fn centered_offset(&self) -> Vec2 {
        Vec2::new(
            (self.view.width - self.content.width * self.scale) * 0.5,
            (self.view.height - self.content.height * self.scale) * 0.5,
        )
    }

    /// Clamps the offset per axis: center an axis whose scaled content is
    /// smaller than the view, otherwise keep both content edges outside the
    /// view.
    fn adjust_offset(&mut self) {
        self.offset.x = clamp_axis(
            self.offset.x,
            self.content.width * self.scale,
            self.view.width,
        );
        self.offset.y = clamp_axis(
            self.offset.y,
            self.content.height * self.scale,
            self.view.height,
        );
        self.rebuild_transforms();
    }

    fn rebuild_transforms(&mut self) {
        self.content_to_view = Affine::translate(self.offset) * Affine::scale(self.scale);
        self.view_to_content = self.content_to_view.inverse();
    }
}

fn is_usable(size: Size) -> bool {
    size.is_finite() && size.width > 0.0 && size.height > 0.0
}

fn clamp_axis(offset: f64, extent: f64, view: f64) -> f64 {
    if extent < view {
        (view - extent) * 0.5
    } else {
        offset.clamp(view - extent, 0.0)
    }
}
