// Copyright 2025 the Hotmap Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use kurbo::{Point, Size, Vec2};
use smallvec::SmallVec;

use crate::drag::DragState;
use crate::pinch::PinchState;
use crate::tap::{TapKind, TapState};
use crate::{PointerEvent, PointerId, PointerPhase};

/// Something the caller should do in response to a pointer event.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum GestureAction {
    /// Move the content by this view-space delta.
    PanBy(Vec2),
    /// Multiply the scale by `factor`, keeping `anchor` (view space) fixed.
    ZoomAboutViewPoint {
        /// Fixed point in view space.
        anchor: Point,
        /// Multiplicative zoom factor.
        factor: f64,
    },
    /// A confirmed single tap at this view-space position.
    ///
    /// Emitted once the double-tap window has passed without a second tap,
    /// from [`GestureInterpreter::poll`] or from the next press.
    Tap(Point),
    /// The second tap of a double tap at this view-space position.
    DoubleTap(Point),
}

/// Actions produced by one pointer event or poll.
pub type GestureActions = SmallVec<[GestureAction; 2]>;

/// Which gesture is in progress.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
pub enum GesturePhase {
    /// No pointer is down.
    #[default]
    Idle,
    /// One pointer is down; moves pan.
    SingleDrag,
    /// Two or more pointers are down; the first two pinch-zoom.
    MultiPinch,
}

/// Tuning for [`GestureInterpreter`].
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct GestureConfig {
    /// Distance a pointer may travel before a press becomes a drag.
    pub tap_slop: f64,
    /// Longest press, in milliseconds, that still counts as a tap.
    pub tap_timeout_ms: u64,
    /// Longest gap between two taps that forms a double tap.
    pub double_tap_timeout_ms: u64,
    /// Largest distance between two taps that forms a double tap.
    pub double_tap_slop: f64,
    /// Pinch distance changes at or below this are ignored.
    pub pinch_dead_zone: f64,
    /// Pinch distance change, in view units, that adds one to the zoom factor.
    pub pinch_sensitivity: f64,
}

impl Default for GestureConfig {
    fn default() -> Self {
        Self {
            tap_slop: 8.0,
            tap_timeout_ms: 300,
            double_tap_timeout_ms: 300,
            double_tap_slop: 48.0,
            pinch_dead_zone: 2.0,
            pinch_sensitivity: 200.0,
        }
    }
}

/// Pointer-count state machine producing pan, pinch-zoom and tap actions.
///
/// Events must be fed in order; each one is processed to completion. The
/// interpreter needs the view size to find the view center, which anchors
/// pinch zooms.
///
/// The interpreter has no clock of its own. A lone tap is held until the
/// double-tap window passes, so callers should [`poll`] it at or after
/// [`tap_deadline_ms`] to release the confirmed [`GestureAction::Tap`].
///
/// [`poll`]: GestureInterpreter::poll
/// [`tap_deadline_ms`]: GestureInterpreter::tap_deadline_ms
#[derive(Clone, Debug, Default)]
pub struct GestureInterpreter {
    config: GestureConfig,
    view_size: Size,
    pointers: SmallVec<[(PointerId, Point); 4]>,
    phase: GesturePhase,
    drag: DragState,
    pinch: PinchState,
    taps: TapState,
    // Set once the current press sequence has involved a second pointer.
    pinched: bool,
}

impl GestureInterpreter {
    /// Creates an interpreter with the given tuning.
    #[must_use]
    pub fn new(config: GestureConfig) -> Self {
        Self {
            config,
            ..Self::default()
        }
    }

    /// Current tuning.
    #[must_use]
    pub fn config(&self) -> &GestureConfig {
        &self.config
    }

    /// Updates the view size used for the pinch anchor.
    pub fn set_view_size(&mut self, size: Size) {
        self.view_size = size;
    }

    /// Current phase.
    #[must_use]
    pub fn phase(&self) -> GesturePhase {
        self.phase
    }

    /// Number of pointers currently down.
    #[must_use]
    pub fn pointer_count(&self) -> usize {
        self.pointers.len()
    }

    /// Drops all tracked pointers and pending taps.
    pub fn reset(&mut self) {
        self.pointers.clear();
        self.phase = GesturePhase::Idle;
        self.drag.end();
        self.pinch.reset();
        self.taps.clear();
        self.pinched = false;
    }

    /// Processes one pointer event.
    pub fn on_pointer_event(&mut self, event: &PointerEvent) -> GestureActions {
        let mut actions = GestureActions::new();
        match event.phase {
            PointerPhase::Down => self.on_down(event, &mut actions),
            PointerPhase::Move => self.on_move(event, &mut actions),
            PointerPhase::Up => self.on_lift(event, true, &mut actions),
            PointerPhase::Cancel => self.on_lift(event, false, &mut actions),
        }
        actions
    }

    /// Releases a held tap whose double-tap window has passed by `now_ms`.
    ///
    /// While a pointer is down the held tap waits for that press instead.
    pub fn poll(&mut self, now_ms: u64) -> GestureActions {
        let mut actions = GestureActions::new();
        if self.pointers.is_empty()
            && let Some(pos) = self.taps.expire(now_ms, self.config.double_tap_timeout_ms)
        {
            actions.push(GestureAction::Tap(pos));
        }
        actions
    }

    /// When [`GestureInterpreter::poll`] will release the held tap, if any.
    #[must_use]
    pub fn tap_deadline_ms(&self) -> Option<u64> {
        self.taps.deadline_ms(self.config.double_tap_timeout_ms)
    }

    fn view_center(&self) -> Point {
        Point::new(self.view_size.width * 0.5, self.view_size.height * 0.5)
    }

    fn position_of(&self, pointer: PointerId) -> Option<usize> {
        self.pointers.iter().position(|(id, _)| *id == pointer)
    }

    fn on_down(&mut self, event: &PointerEvent, actions: &mut GestureActions) {
        match self.position_of(event.pointer) {
            Some(i) => self.pointers[i].1 = event.position,
            None => self.pointers.push((event.pointer, event.position)),
        }
        if self.pointers.len() == 1 {
            self.phase = GesturePhase::SingleDrag;
            self.pinched = false;
            self.drag.start(event.pointer, event.position, event.time_ms);
            let held = self.taps.on_press(
                event.position,
                event.time_ms,
                self.config.double_tap_timeout_ms,
                self.config.double_tap_slop,
            );
            if let Some(pos) = held {
                actions.push(GestureAction::Tap(pos));
            }
            return;
        }

        // A new pointer joined: (re)start the pinch and bring the midpoint of
        // the pinching pair to the view center so zooms anchor there.
        self.phase = GesturePhase::MultiPinch;
        self.pinched = true;
        self.drag.end();
        self.pinch.reset();
        let mid = self.pointers[0].1.midpoint(self.pointers[1].1);
        actions.push(GestureAction::PanBy(self.view_center() - mid));
    }

    fn on_move(&mut self, event: &PointerEvent, actions: &mut GestureActions) {
        let Some(i) = self.position_of(event.pointer) else {
            return;
        };
        self.pointers[i].1 = event.position;
        match self.phase {
            GesturePhase::Idle => {}
            GesturePhase::SingleDrag => {
                if self.drag.pointer() == Some(event.pointer)
                    && let Some(delta) = self.drag.update(event.position, self.config.tap_slop)
                {
                    actions.push(GestureAction::PanBy(delta));
                }
            }
            GesturePhase::MultiPinch => {
                if i > 1 {
                    return;
                }
                let factor = self.pinch.update(
                    self.pointers[0].1,
                    self.pointers[1].1,
                    self.config.pinch_dead_zone,
                    self.config.pinch_sensitivity,
                );
                if let Some(factor) = factor {
                    actions.push(GestureAction::ZoomAboutViewPoint {
                        anchor: self.view_center(),
                        factor,
                    });
                }
            }
        }
    }

    fn on_lift(&mut self, event: &PointerEvent, released: bool, actions: &mut GestureActions) {
        let Some(i) = self.position_of(event.pointer) else {
            return;
        };
        self.pointers.remove(i);
        match self.pointers.len() {
            0 => {
                // A press that was not a tap drops any held tap: it was the
                // start of a double-tap sequence that did not complete.
                let tap = if released { self.recognize_tap(event) } else { None };
                match tap {
                    Some(TapKind::Double) => actions.push(GestureAction::DoubleTap(event.position)),
                    Some(TapKind::Pending) => {}
                    None => self.taps.clear(),
                }
                self.phase = GesturePhase::Idle;
                self.drag.end();
                self.pinch.reset();
                self.pinched = false;
            }
            1 => {
                self.phase = GesturePhase::SingleDrag;
                self.pinch.reset();
                let (pointer, pos) = self.pointers[0];
                self.drag.resume(pointer, pos, event.time_ms);
            }
            _ => {
                // The pinching pair may have changed; take a fresh baseline.
                self.pinch.reset();
            }
        }
    }

    fn recognize_tap(&mut self, event: &PointerEvent) -> Option<TapKind> {
        if self.pinched
            || self.drag.is_scrolling()
            || self.drag.pointer() != Some(event.pointer)
        {
            return None;
        }
        let moved = self.drag.total_offset(event.position)?.hypot();
        let held = event.time_ms.saturating_sub(self.drag.start_time());
        if moved > self.config.tap_slop || held > self.config.tap_timeout_ms {
            return None;
        }
        Some(self.taps.on_tap(event.position, event.time_ms))
    }
}
