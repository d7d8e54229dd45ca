// Copyright 2025 the Hotmap Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

// After you edit the crate's doc comment, run this command, then check README.md for any missing links
// cargo rdme --workspace-project=hotmap_areas --heading-base-level=0

//! Hotmap Areas: clickable polygon areas over an image.
//!
//! A map description lists polygons in image (content) coordinates, each with
//! a logical `id` and a `target_group` discriminator so one id can own several
//! polygons. This crate covers everything that happens after such a
//! description has been parsed:
//!
//! - [`AreaSet`]: the immutable, indexed polygon store for one map.
//! - [`AreaCache`] / [`SimpleAreaCache`]: build an [`AreaSet`] once per
//!   [`MapIdentity`], serializing concurrent first builds.
//! - [`AreaResolver`]: point-in-polygon hit testing, framing a set of areas in
//!   a [`hotmap_view::Viewport`], and the current [`HighlightSet`], with
//!   highlight requests queued until both the areas and the viewport are
//!   ready.
//!
//! Parsing itself is delegated to a [`MapParser`] supplied by the host.
//!
//! ## Minimal example
//!
//! ```rust
//! use kurbo::Point;
//! use hotmap_areas::{AreaRecord, AreaResolver, AreaSet, TargetGroup};
//!
//! let areas = AreaSet::from_records([
//!     AreaRecord::new(10, 0, [(0.0, 0.0), (100.0, 0.0), (100.0, 100.0), (0.0, 100.0)]),
//!     AreaRecord::new(20, 0, [(50.0, 50.0), (150.0, 50.0), (150.0, 150.0)]),
//! ])
//! .unwrap();
//!
//! let resolver = AreaResolver::default();
//! // Both polygons contain (75, 60); the first one defined wins.
//! assert_eq!(resolver.hit_test(&areas, Point::new(75.0, 60.0)), Some(0));
//! assert_eq!(areas.data_id(0), Some(10));
//! assert_eq!(areas.resolve_store_index(20, TargetGroup::Any), Some(1));
//! ```

mod area;
mod cache;
mod error;
mod highlight;
mod identity;
mod resolve;

pub use area::{Area, AreaRecord, AreaSet, TargetGroup};
pub use cache::{AreaCache, MapParser, SimpleAreaCache};
pub use error::MapLoadError;
pub use highlight::{HighlightRequest, HighlightSet, PaintKind, PaintStyle};
pub use identity::MapIdentity;
pub use resolve::{AreaResolver, Framing, ResolverConfig};
