// Copyright 2025 the Hotmap Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

// After you edit the crate's doc comment, run this command, then check README.md for any missing links
// cargo rdme --workspace-project=hotmap --heading-base-level=0

//! Hotmap: a large image in a pan/zoom view, with clickable polygon areas.
//!
//! [`ImageMap`] is the piece a host view embeds. It owns:
//!
//! - a [`hotmap_view::Viewport`] that fits the image into the view and keeps
//!   it covering the view through pans and zooms;
//! - a [`hotmap_gesture::GestureInterpreter`] that turns pointer events into
//!   pans, pinch zooms, taps and double taps;
//! - the map's areas, built once per map through a
//!   [`hotmap_areas::AreaCache`] on a background thread, plus the highlight
//!   state.
//!
//! The host supplies the collaborators Hotmap does not implement: an
//! [`ImageDecoder`] that reports image dimensions, a
//! [`MapParser`](hotmap_areas::MapParser) that turns a map description into
//! polygons, and optionally an [`ImageMapListener`] for taps on areas. Each
//! frame it draws the image and the highlights described by
//! [`ImageMap::render_plan`]. A single tap is confirmed only once the
//! double-tap window passes, so the host also calls [`ImageMap::poll`] when
//! [`ImageMap::tap_deadline_ms`] is reached.
//!
//! ## Layering
//!
//! The lower crates are usable on their own: `hotmap_view` and
//! `hotmap_gesture` are `no_std` and know nothing of areas, and
//! `hotmap_areas` knows nothing of pointer input.
//!
//! ## Minimal example
//!
//! ```rust
//! use hotmap::{ImageMap, ImageMapConfig};
//! use hotmap_areas::{AreaRecord, MapIdentity, MapLoadError};
//! use kurbo::Point;
//!
//! let parser = |_: &MapIdentity| -> Result<Vec<AreaRecord>, MapLoadError> {
//!     Ok(vec![AreaRecord::new(
//!         7,
//!         0,
//!         [(100.0, 100.0), (300.0, 100.0), (300.0, 300.0), (100.0, 300.0)],
//!     )])
//! };
//! let mut map = ImageMap::with_parser(ImageMapConfig::default(), parser);
//! map.on_viewport_resized(500.0, 500.0);
//! map.on_content_ready(1000.0, 1000.0);
//! map.set_map(MapIdentity::Resource(1)).unwrap().wait().unwrap();
//!
//! // At the fitted scale of 0.5, content (200, 200) is at view (100, 100).
//! assert_eq!(map.hit_test(Point::new(100.0, 100.0)), Some(0));
//! assert_eq!(map.data_id(0), Some(7));
//!
//! map.show_area(0);
//! assert_eq!(map.render_plan().highlights.len(), 1);
//! ```

mod config;
mod decode;
mod image_map;
mod listener;
mod load;
mod render;

pub use config::ImageMapConfig;
pub use decode::{DecodeError, ImageDecoder, ImageResource, ImageSize};
pub use image_map::ImageMap;
pub use listener::{AreaHit, ImageMapListener};
pub use load::{MapLoad, MapLoadStatus};
pub use render::{HighlightPaint, RenderPlan};
