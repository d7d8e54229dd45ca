// Copyright 2025 the Hotmap Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Drag state helper: pan deltas for a single pointer, gated by a touch slop.
//!
//! ## Usage
//!
//! 1) Call [`DragState::start`] when the pointer goes down.
//! 2) On each move, call [`DragState::update`]. Until the pointer has moved
//!    further than the slop from where it went down, nothing is returned, so
//!    small jitter during a tap does not pan. The first update past the slop
//!    returns the whole offset since the press; later updates return the
//!    movement since the previous update.
//! 3) Call [`DragState::end`] when the pointer lifts.
//!
//! [`DragState::resume`] starts a drag that is already scrolling, for when a
//! pinch ends and one finger remains on the surface.
//!
//! ## Minimal example
//!
//! ```
//! use kurbo::{Point, Vec2};
//! use hotmap_gesture::PointerId;
//! use hotmap_gesture::drag::DragState;
//!
//! let mut drag = DragState::default();
//! drag.start(PointerId(0), Point::new(10.0, 20.0), 0);
//!
//! // Within the slop: no pan yet.
//! assert_eq!(drag.update(Point::new(12.0, 21.0), 8.0), None);
//! assert!(!drag.is_scrolling());
//!
//! // Past the slop: pan by everything since the press.
//! assert_eq!(drag.update(Point::new(30.0, 20.0), 8.0), Some(Vec2::new(20.0, 0.0)));
//! assert!(drag.is_scrolling());
//! ```

use kurbo::{Point, Vec2};

use crate::PointerId;

/// Tracks one pointer's drag between down and up.
#[derive(Debug, Clone, Default, Copy)]
pub struct DragState {
    pointer: Option<PointerId>,
    start_pos: Point,
    last_pos: Point,
    start_time: u64,
    scrolling: bool,
}

impl DragState {
    /// Starts tracking `pointer` from `pos`.
    pub fn start(&mut self, pointer: PointerId, pos: Point, time_ms: u64) {
        *self = Self {
            pointer: Some(pointer),
            start_pos: pos,
            last_pos: pos,
            start_time: time_ms,
            scrolling: false,
        };
    }

    /// Starts tracking `pointer` from `pos` with the slop already crossed.
    pub fn resume(&mut self, pointer: PointerId, pos: Point, time_ms: u64) {
        self.start(pointer, pos, time_ms);
        self.scrolling = true;
    }

    /// Feeds a new position and returns the pan delta, if any.
    pub fn update(&mut self, pos: Point, slop: f64) -> Option<Vec2> {
        self.pointer?;
        if !self.scrolling {
            if (pos - self.start_pos).hypot() <= slop {
                return None;
            }
            self.scrolling = true;
        }
        let delta = pos - self.last_pos;
        self.last_pos = pos;
        Some(delta)
    }

    /// Offset from the press position, while dragging.
    pub fn total_offset(&self, current_pos: Point) -> Option<Vec2> {
        self.pointer.map(|_| current_pos - self.start_pos)
    }

    /// Stops tracking.
    pub fn end(&mut self) {
        *self = Self::default();
    }

    /// The pointer being tracked, if any.
    pub fn pointer(&self) -> Option<PointerId> {
        self.pointer
    }

    /// Timestamp of the press.
    pub fn start_time(&self) -> u64 {
        self.start_time
    }

    /// Position of the press.
    pub fn start_pos(&self) -> Point {
        self.start_pos
    }

    /// Returns `true` once the slop has been crossed.
    pub fn is_scrolling(&self) -> bool {
        self.scrolling
    }

    /// Returns `true` while a pointer is tracked.
    pub fn is_dragging(&self) -> bool {
        self.pointer.is_some()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const SLOP: f64 = 8.0;

    #[test]
    fn new_drag_state_is_not_dragging() {
        let drag = DragState::default();
        assert!(!drag.is_dragging());
        assert!(!drag.is_scrolling());
        assert_eq!(drag.pointer(), None);
    }

    #[test]
    fn update_returns_none_when_not_dragging() {
        let mut drag = DragState::default();
        assert_eq!(drag.update(Point::new(100.0, 100.0), SLOP), None);
        assert_eq!(drag.total_offset(Point::new(1.0, 1.0)), None);
    }

    #[test]
    fn jitter_inside_slop_does_not_pan() {
        let mut drag = DragState::default();
        drag.start(PointerId(3), Point::new(50.0, 50.0), 10);
        assert_eq!(drag.update(Point::new(55.0, 50.0), SLOP), None);
        assert_eq!(drag.update(Point::new(50.0, 57.9), SLOP), None);
        assert!(!drag.is_scrolling());
        assert_eq!(
            drag.total_offset(Point::new(50.0, 57.9)),
            Some(Vec2::new(0.0, 57.9 - 50.0))
        );
    }

    #[test]
    fn first_scroll_includes_offset_since_press() {
        let mut drag = DragState::default();
        drag.start(PointerId(0), Point::new(0.0, 0.0), 0);
        drag.update(Point::new(4.0, 0.0), SLOP);
        assert_eq!(
            drag.update(Point::new(10.0, 0.0), SLOP),
            Some(Vec2::new(10.0, 0.0))
        );
    }

    #[test]
    fn multiple_updates_track_incremental_deltas() {
        let mut drag = DragState::default();
        drag.start(PointerId(0), Point::new(0.0, 0.0), 0);

        assert_eq!(
            drag.update(Point::new(20.0, 3.0), SLOP),
            Some(Vec2::new(20.0, 3.0))
        );
        assert_eq!(
            drag.update(Point::new(23.0, 7.0), SLOP),
            Some(Vec2::new(3.0, 4.0))
        );
        // Coming back inside the slop keeps panning once scrolling.
        assert_eq!(
            drag.update(Point::new(1.0, 1.0), SLOP),
            Some(Vec2::new(-22.0, -6.0))
        );
    }

    #[test]
    fn resume_pans_immediately() {
        let mut drag = DragState::default();
        drag.resume(PointerId(2), Point::new(100.0, 100.0), 500);
        assert!(drag.is_scrolling());
        assert_eq!(
            drag.update(Point::new(101.0, 99.0), SLOP),
            Some(Vec2::new(1.0, -1.0))
        );
    }

    #[test]
    fn end_resets_drag_state() {
        let mut drag = DragState::default();
        drag.start(PointerId(1), Point::new(10.0, 20.0), 7);
        drag.update(Point::new(40.0, 20.0), SLOP);

        drag.end();

        assert!(!drag.is_dragging());
        assert!(!drag.is_scrolling());
        assert_eq!(drag.start_time(), 0);
    }

    #[test]
    fn start_overwrites_previous_drag() {
        let mut drag = DragState::default();
        drag.start(PointerId(1), Point::new(0.0, 0.0), 0);
        drag.update(Point::new(30.0, 30.0), SLOP);

        drag.start(PointerId(2), Point::new(50.0, 60.0), 100);
        assert_eq!(drag.pointer(), Some(PointerId(2)));
        assert_eq!(drag.start_pos(), Point::new(50.0, 60.0));
        assert!(!drag.is_scrolling());
        assert_eq!(
            drag.total_offset(Point::new(55.0, 65.0)),
            Some(Vec2::new(5.0, 5.0))
        );
    }
}
