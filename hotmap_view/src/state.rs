// Copyright 2025 the Hotmap Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use kurbo::{Affine, Point, Size, Vec2};

/// Read-only snapshot of a [`Viewport`](crate::Viewport).
///
/// Hosts receive this for painting and for converting coordinates without
/// holding on to the viewport itself.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ViewportState {
    /// Content (image) width in content units.
    pub content_width: f64,
    /// Content (image) height in content units.
    pub content_height: f64,
    /// View width in view units.
    pub view_width: f64,
    /// View height in view units.
    pub view_height: f64,
    /// Current uniform scale.
    pub scale: f64,
    /// Horizontal offset of the content origin in view space.
    pub offset_x: f64,
    /// Vertical offset of the content origin in view space.
    pub offset_y: f64,
    /// Scale at which the whole content fits the view.
    pub base_scale: f64,
    /// Whether both sizes were known and positive when last set.
    pub initialized: bool,
}

impl ViewportState {
    /// Content size as a [`Size`].
    #[must_use]
    pub fn content_size(&self) -> Size {
        Size::new(self.content_width, self.content_height)
    }

    /// View size as a [`Size`].
    #[must_use]
    pub fn view_size(&self) -> Size {
        Size::new(self.view_width, self.view_height)
    }

    /// Content origin offset in view space.
    #[must_use]
    pub fn offset(&self) -> Vec2 {
        Vec2::new(self.offset_x, self.offset_y)
    }

    /// Content → view transform.
    #[must_use]
    pub fn transform(&self) -> Affine {
        Affine::translate(self.offset()) * Affine::scale(self.scale)
    }

    /// Maps a content-space point into view space.
    #[must_use]
    pub fn content_to_view_point(&self, pt: Point) -> Point {
        Point::new(
            pt.x * self.scale + self.offset_x,
            pt.y * self.scale + self.offset_y,
        )
    }

    /// Maps a view-space point into content space.
    #[must_use]
    pub fn view_to_content_point(&self, pt: Point) -> Point {
        Point::new(
            (pt.x - self.offset_x) / self.scale,
            (pt.y - self.offset_y) / self.scale,
        )
    }
}
