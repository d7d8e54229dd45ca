// Copyright 2025 the Hotmap Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use core::fmt;
use std::sync::Arc;
use std::thread;

use hotmap_areas::{
    AreaCache, AreaResolver, AreaSet, HighlightRequest, HighlightSet, MapIdentity, MapLoadError,
    MapParser, PaintStyle, SimpleAreaCache, TargetGroup,
};
use hotmap_gesture::{GestureAction, GestureInterpreter, PointerEvent};
use hotmap_view::{Viewport, ViewportState};
use kurbo::{Affine, Point, Size};
use parking_lot::Mutex;
use smallvec::SmallVec;

use crate::{
    AreaHit, DecodeError, ImageDecoder, ImageMapConfig, ImageMapListener, ImageResource,
    ImageSize, MapLoad, MapLoadStatus, RenderPlan,
};

const BUILD_THREAD_NAME: &str = "hotmap-map-build";

type GestureHits = SmallVec<[AreaHit; 1]>;

/// State shared between the interaction thread and background map builds.
///
/// A single mutex guards all of it:
///
/// - `viewport`: the transform; `viewport.is_initialized()` is the
///   "view ready" condition.
/// - `areas`: the installed store for `map`; `Some` is the "map built"
///   condition.
/// - `resolver`: the highlight set and any parked highlight request.
/// - `map` and `generation`: the current map identity and a counter bumped by
///   every [`ImageMap::set_map`]. A build installs its result only if the
///   counter still has the value it started with.
/// - `redraw`: coalesced redraw request.
///
/// Listener callbacks are never made with the lock held.
#[derive(Debug, Default)]
struct Shared {
    viewport: Viewport,
    areas: Option<Arc<AreaSet>>,
    resolver: AreaResolver,
    map: Option<MapIdentity>,
    generation: u64,
    redraw: bool,
}

impl Shared {
    /// Installs a built store and applies a parked highlight request.
    fn install(&mut self, areas: Arc<AreaSet>) {
        self.areas = Some(areas);
        self.replay();
        self.redraw = true;
    }

    fn replay(&mut self) {
        if self
            .resolver
            .replay_pending(self.areas.as_deref(), &mut self.viewport)
        {
            self.redraw = true;
        }
    }

    fn hit_at(&self, view_pt: Point) -> Option<AreaHit> {
        if !self.viewport.is_initialized() {
            return None;
        }
        let areas = self.areas.as_deref()?;
        let content_pt = self.viewport.view_to_content_point(view_pt);
        let index = self.resolver.hit_test(areas, content_pt)?;
        Some(AreaHit {
            index,
            data_id: areas.data_id(index)?,
        })
    }
}

/// An image in a pan/zoom viewport with clickable polygon areas.
///
/// `ImageMap` wires host input to the viewport and the area machinery:
///
/// - Pointer events go through a [`GestureInterpreter`]; drags pan, pinches
///   zoom about the view center, taps are hit tested and reported to the
///   [`ImageMapListener`], and double taps zoom in one step.
/// - [`ImageMap::set_map`] builds the map's areas on a background thread
///   through the [`AreaCache`].
/// - "Show areas" requests highlight and frame areas. Requests made before
///   both the map and the view are ready are parked and applied once, when
///   they are.
/// - [`ImageMap::render_plan`] says what to draw.
///
/// All methods except the pointer and resize handlers take `&self`, and the
/// shared state sits behind one mutex, so a host may keep the map in an
/// `Arc` and query it from several threads.
pub struct ImageMap {
    config: ImageMapConfig,
    gestures: GestureInterpreter,
    shared: Arc<Mutex<Shared>>,
    cache: Arc<dyn AreaCache>,
    listener: Option<Arc<dyn ImageMapListener>>,
}

impl fmt::Debug for ImageMap {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ImageMap")
            .field("config", &self.config)
            .field("gestures", &self.gestures)
            .field("shared", &*self.shared.lock())
            .field("has_listener", &self.listener.is_some())
            .finish_non_exhaustive()
    }
}

impl ImageMap {
    /// Creates a map view that takes its areas from `cache`.
    pub fn new(config: ImageMapConfig, cache: Arc<dyn AreaCache>) -> Self {
        let mut viewport = Viewport::new();
        if let Some(max_scale) = config.max_scale {
            viewport.set_max_scale(max_scale);
        }
        Self {
            gestures: GestureInterpreter::new(config.gesture),
            shared: Arc::new(Mutex::new(Shared {
                viewport,
                resolver: AreaResolver::new(config.resolver),
                ..Shared::default()
            })),
            cache,
            listener: None,
            config,
        }
    }

    /// Creates a map view with a private [`SimpleAreaCache`] around `parser`.
    pub fn with_parser<P: MapParser + 'static>(config: ImageMapConfig, parser: P) -> Self {
        Self::new(config, Arc::new(SimpleAreaCache::new(parser)))
    }

    /// Current configuration.
    pub fn config(&self) -> &ImageMapConfig {
        &self.config
    }

    /// Sets the receiver of tap and load-failure callbacks.
    ///
    /// Builds already running keep the listener they started with.
    pub fn set_listener(&mut self, listener: Arc<dyn ImageMapListener>) {
        self.listener = Some(listener);
    }

    /// Removes the listener.
    pub fn clear_listener(&mut self) {
        self.listener = None;
    }

    /// Feeds one pointer event through the gesture interpreter and applies
    /// the resulting actions.
    ///
    /// Every event raises the redraw flag, whether or not it moved anything.
    pub fn on_pointer_event(&mut self, event: &PointerEvent) {
        let actions = self.gestures.on_pointer_event(event);
        self.apply(&actions, true);
    }

    /// Confirms a held single tap once the double-tap window has passed by
    /// `now_ms`, resolving it and notifying the listener.
    ///
    /// Hosts call this from a timer armed for [`ImageMap::tap_deadline_ms`].
    /// A tap that is part of a double tap is never confirmed.
    pub fn poll(&mut self, now_ms: u64) {
        let actions = self.gestures.poll(now_ms);
        self.apply(&actions, false);
    }

    /// When [`ImageMap::poll`] will confirm the held tap, if one is held.
    pub fn tap_deadline_ms(&self) -> Option<u64> {
        self.gestures.tap_deadline_ms()
    }

    fn apply(&self, actions: &[GestureAction], redraw: bool) {
        let mut hits = GestureHits::new();
        {
            let mut shared = self.shared.lock();
            for action in actions {
                tracing::trace!(?action, "gesture action");
                match *action {
                    GestureAction::PanBy(delta) => shared.viewport.pan_by(delta),
                    GestureAction::ZoomAboutViewPoint { anchor, factor } => {
                        shared.viewport.zoom_about_view_point(anchor, factor);
                    }
                    GestureAction::Tap(pt) => {
                        let hit = shared.hit_at(pt);
                        tracing::trace!(?pt, ?hit, "tap resolved");
                        hits.extend(hit);
                    }
                    GestureAction::DoubleTap(_) => {
                        let step = shared.viewport.default_step();
                        shared.viewport.scale_in(step);
                    }
                }
            }
            if redraw || !actions.is_empty() {
                shared.redraw = true;
            }
        }

        if let Some(listener) = &self.listener {
            for hit in hits {
                listener.on_area_resolved(hit);
            }
        }
    }

    /// The view was laid out at a new size.
    ///
    /// Non-positive sizes leave the map inactive until a usable size arrives.
    pub fn on_viewport_resized(&mut self, width: f64, height: f64) {
        let size = Size::new(width, height);
        self.gestures.set_view_size(size);
        let mut shared = self.shared.lock();
        shared.viewport.set_view_size(size);
        tracing::debug!(width, height, ready = shared.viewport.is_initialized(), "view resized");
        shared.replay();
        shared.redraw = true;
    }

    /// The image is known to be `width` by `height` pixels.
    pub fn on_content_ready(&self, width: f64, height: f64) {
        let mut shared = self.shared.lock();
        shared.viewport.set_content_size(Size::new(width, height));
        tracing::debug!(width, height, ready = shared.viewport.is_initialized(), "content ready");
        shared.replay();
        shared.redraw = true;
    }

    /// Asks `decoder` for the size of `resource` and uses it as the content
    /// size.
    ///
    /// Decode failures are returned as is and leave the current content in
    /// place.
    pub fn set_image<D>(&self, resource: &ImageResource, decoder: &D) -> Result<ImageSize, DecodeError>
    where
        D: ImageDecoder + ?Sized,
    {
        let size = decoder.decode(resource).inspect_err(|err| {
            tracing::warn!(?resource, %err, "image decode failed");
        })?;
        let content = size.to_size();
        self.on_content_ready(content.width, content.height);
        Ok(size)
    }

    /// Makes `identity` the current map and builds its areas in the
    /// background.
    ///
    /// Highlights of the previous map are dropped; a parked highlight request
    /// is kept and applies to the new map. If another map is set before the
    /// build finishes, the result is discarded. Build failures are logged,
    /// reported to the listener and returned from [`MapLoad::wait`].
    pub fn set_map(&self, identity: MapIdentity) -> Result<MapLoad, MapLoadError> {
        identity.validate()?;

        let generation = {
            let mut shared = self.shared.lock();
            shared.generation += 1;
            shared.map = Some(identity.clone());
            shared.areas = None;
            shared.resolver.clear_highlighted();
            shared.redraw = true;
            shared.generation
        };
        tracing::debug!(map = %identity, generation, "map requested");

        let shared = Arc::clone(&self.shared);
        let cache = Arc::clone(&self.cache);
        let listener = self.listener.clone();
        let build_identity = identity.clone();
        let handle = thread::Builder::new()
            .name(BUILD_THREAD_NAME.into())
            .spawn(move || build_map(&shared, &*cache, listener.as_deref(), &build_identity, generation))
            .map_err(|err| MapLoadError::Io(format!("cannot start map build: {err}")))?;
        Ok(MapLoad::new(identity, handle))
    }

    /// The current map, if one was set.
    pub fn current_map(&self) -> Option<MapIdentity> {
        self.shared.lock().map.clone()
    }

    /// Returns `true` once the current map's areas are installed.
    pub fn is_map_ready(&self) -> bool {
        self.shared.lock().areas.is_some()
    }

    /// Logical id of the area at `index`, building the map now if needed.
    pub fn data_id(&self, index: usize) -> Option<i32> {
        self.ensure_areas()?.data_id(index)
    }

    /// First store index for `id` in `group`, building the map now if
    /// needed.
    pub fn area_index(&self, id: i32, group: TargetGroup) -> Option<usize> {
        self.ensure_areas()?.resolve_store_index(id, group)
    }

    /// Target groups registered under `id`, building the map now if needed.
    pub fn area_groups(&self, id: i32) -> Vec<i32> {
        self.ensure_areas()
            .map(|areas| areas.groups_for_id(id).to_vec())
            .unwrap_or_default()
    }

    /// Highlights and frames the areas at `indices`.
    ///
    /// `styles` pairs with `indices`; missing entries reuse the last style,
    /// or the configured selection style when `styles` is empty. Returns
    /// `false` if the request was parked until the map and view are ready.
    pub fn show_areas(&self, indices: &[usize], styles: &[PaintStyle]) -> bool {
        let request = HighlightRequest::new(indices, styles);
        let mut shared = self.shared.lock();
        let shared = &mut *shared;
        let applied = shared
            .resolver
            .highlight(request, shared.areas.as_deref(), &mut shared.viewport);
        if applied {
            shared.redraw = true;
        }
        applied
    }

    /// Highlights and frames one area in the selection style.
    pub fn show_area(&self, index: usize) -> bool {
        self.show_areas(&[index], &[])
    }

    /// Highlights and frames one area in `style`.
    pub fn show_area_with(&self, index: usize, style: PaintStyle) -> bool {
        self.show_areas(&[index], &[style])
    }

    /// Highlights and frames every polygon of the areas with logical ids
    /// `ids`, building the map now if needed.
    ///
    /// Each id's style applies to all of its polygons. Unknown ids are
    /// skipped. Returns `false` if the map could not be built or the view is
    /// not ready.
    pub fn show_data_ids(&self, ids: &[i32], styles: &[PaintStyle]) -> bool {
        let Some(areas) = self.ensure_areas() else {
            return false;
        };
        let mut indices = Vec::new();
        let mut expanded = Vec::new();
        for (position, &id) in ids.iter().enumerate() {
            let found = areas.indices_for_id(id);
            if found.is_empty() {
                tracing::debug!(id, "no area with this id");
                continue;
            }
            let style = styles.get(position).or(styles.last());
            for &index in found {
                indices.push(index);
                if let Some(style) = style {
                    expanded.push(*style);
                }
            }
        }
        self.show_areas(&indices, &expanded)
    }

    /// The highlight set currently shown.
    pub fn highlighted(&self) -> HighlightSet {
        self.shared.lock().resolver.highlighted().clone()
    }

    /// Restores the fitted view and drops all highlights, including a
    /// parked request.
    pub fn reset(&self) {
        let mut shared = self.shared.lock();
        shared.viewport.reset();
        shared.resolver.clear();
        shared.redraw = true;
    }

    /// Zooms in one step about the view center.
    ///
    /// Returns `false` once zoomed in to the step-zoom limit.
    pub fn scale_in(&self) -> bool {
        let mut shared = self.shared.lock();
        let step = shared.viewport.default_step();
        let zoomed = shared.viewport.scale_in(step);
        shared.redraw |= zoomed;
        zoomed
    }

    /// Zooms out one step about the view center.
    pub fn scale_out(&self) {
        let mut shared = self.shared.lock();
        let step = shared.viewport.default_step();
        shared.viewport.scale_out(step);
        shared.redraw = true;
    }

    /// Returns to the fitted view if zoomed in; `false` if already there.
    pub fn reset_to_overview(&self) -> bool {
        let mut shared = self.shared.lock();
        let changed = shared.viewport.reset_to_overview();
        shared.redraw |= changed;
        changed
    }

    /// Shows content point `center` at the view center, at `scale`.
    pub fn scale_to(&self, center: Point, scale: f64) {
        let mut shared = self.shared.lock();
        shared.viewport.center_on(center, scale);
        shared.redraw = true;
    }

    /// Snapshot of the pan/zoom state.
    pub fn pan_zoom_state(&self) -> ViewportState {
        self.shared.lock().viewport.state()
    }

    /// Current content-to-view transform.
    pub fn transform(&self) -> Affine {
        self.shared.lock().viewport.transform()
    }

    /// Store index of the area under a view-space point, if the map and view
    /// are ready.
    pub fn hit_test(&self, view_pt: Point) -> Option<usize> {
        self.hit_area(view_pt).map(|hit| hit.index)
    }

    /// Like [`ImageMap::hit_test`], also reporting the area's logical id.
    ///
    /// Does not notify the listener.
    pub fn hit_area(&self, view_pt: Point) -> Option<AreaHit> {
        self.shared.lock().hit_at(view_pt)
    }

    /// What to draw now.
    pub fn render_plan(&self) -> RenderPlan {
        let shared = self.shared.lock();
        RenderPlan::build(
            &shared.viewport,
            shared.areas.as_deref(),
            shared.resolver.highlighted(),
            self.config.selection_style,
        )
    }

    /// Returns `true` once per batch of changes that need a redraw.
    pub fn take_redraw_request(&self) -> bool {
        core::mem::take(&mut self.shared.lock().redraw)
    }

    /// The installed store, or a synchronous build of the current map.
    ///
    /// A failed build is reported to the listener unless the map changed
    /// while it ran.
    fn ensure_areas(&self) -> Option<Arc<AreaSet>> {
        let (identity, generation) = {
            let shared = self.shared.lock();
            if let Some(areas) = &shared.areas {
                return Some(Arc::clone(areas));
            }
            (shared.map.clone()?, shared.generation)
        };
        match self.cache.get_or_build(&identity) {
            Ok(areas) => {
                let mut shared = self.shared.lock();
                if shared.generation != generation {
                    return None;
                }
                if shared.areas.is_none() {
                    shared.install(Arc::clone(&areas));
                }
                Some(areas)
            }
            Err(err) => {
                tracing::warn!(map = %identity, %err, "map unavailable");
                let current = self.shared.lock().generation == generation;
                if current && let Some(listener) = &self.listener {
                    listener.on_map_load_failed(&err);
                }
                None
            }
        }
    }
}

fn build_map(
    shared: &Mutex<Shared>,
    cache: &dyn AreaCache,
    listener: Option<&dyn ImageMapListener>,
    identity: &MapIdentity,
    generation: u64,
) -> Result<MapLoadStatus, MapLoadError> {
    let result = cache.get_or_build(identity);

    let mut guard = shared.lock();
    if guard.generation != generation {
        drop(guard);
        tracing::warn!(map = %identity, generation, "discarding stale map build");
        return Ok(MapLoadStatus::Superseded);
    }
    match result {
        Ok(areas) => {
            if guard.areas.is_none() {
                guard.install(Arc::clone(&areas));
            }
            drop(guard);
            tracing::debug!(map = %identity, areas = areas.len(), "map installed");
            Ok(MapLoadStatus::Installed(areas))
        }
        Err(err) => {
            drop(guard);
            tracing::warn!(map = %identity, %err, "map build failed");
            if let Some(listener) = listener {
                listener.on_map_load_failed(&err);
            }
            Err(err)
        }
    }
}
