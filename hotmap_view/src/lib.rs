// Copyright 2025 the Hotmap Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

// After you edit the crate's doc comment, run this command, then check README.md for any missing links
// cargo rdme --workspace-project=hotmap_view --heading-base-level=0

//! Hotmap View: a clamped pan/zoom viewport over a fixed-size image.
//!
//! This crate provides a small, headless model of an image shown inside a
//! bounded view. Content space is the image's pixel grid; view space is the
//! on-screen viewport. It focuses on:
//! - Scale + offset state, with `view = content * scale + offset`.
//! - A **base scale** at which the whole image fits the view; zooming out
//!   past it is not allowed.
//! - Offset clamping so the image never retreats to leave a blank margin,
//!   except on an axis where the scaled image is smaller than the view, where
//!   it is centered instead.
//! - Zooming about a pivot point and centering on a content point.
//!
//! It does **not** decode images, paint, or interpret input. Callers are
//! expected to:
//! - Report the image size and the view size as they become known.
//! - Translate pointer input into [`Viewport::pan_by`] /
//!   [`Viewport::zoom_about_view_point`] calls (see `hotmap_gesture`).
//! - Read back [`Viewport::transform`] or a [`ViewportState`] snapshot when
//!   painting.
//!
//! ## Minimal example
//!
//! ```rust
//! use kurbo::{Point, Size};
//! use hotmap_view::Viewport;
//!
//! let mut view = Viewport::new();
//! // A tall floor plan inside a square view.
//! view.initialize(Size::new(1000.0, 2000.0), Size::new(500.0, 500.0));
//! assert_eq!(view.base_scale(), 0.25);
//!
//! // The image is narrower than the view, so it is centered horizontally.
//! let state = view.state();
//! assert_eq!((state.offset_x, state.offset_y), (125.0, 0.0));
//!
//! // Zoom in 2x about the view center, then map a tap back into the image.
//! view.zoom_about_view_point(Point::new(250.0, 250.0), 2.0);
//! let in_image = view.view_to_content_point(Point::new(250.0, 250.0));
//! assert!((in_image.y - 1000.0).abs() < 1e-9);
//! ```
//!
//! ## Design notes
//!
//! - Zoom is uniform; there is no rotation.
//! - Every mutating call ends by re-clamping the offset, so the clamping rule
//!   is the single source of truth for what may be shown.
//! - Calls made before both sizes are known are ignored rather than reported
//!   as errors, since layout passes may transiently report a zero size.
//!
//! This crate is `no_std`.

#![no_std]

mod state;
mod viewport;

pub use state::ViewportState;
pub use viewport::{SCALE_IN_LIMIT, Viewport};
