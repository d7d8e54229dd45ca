// Copyright 2025 the Hotmap Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use kurbo::Point;

/// Identifies one contact (finger, pen, mouse) for the duration of a press.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct PointerId(pub u64);

/// What happened to a pointer.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum PointerPhase {
    /// The pointer touched down.
    Down,
    /// The pointer moved while down.
    Move,
    /// The pointer lifted.
    Up,
    /// The platform took the pointer away (no tap is recognized).
    Cancel,
}

/// A single abstract pointer event in view space.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct PointerEvent {
    /// Which contact this event belongs to.
    pub pointer: PointerId,
    /// Event kind.
    pub phase: PointerPhase,
    /// Position in view coordinates.
    pub position: Point,
    /// Monotonic timestamp in milliseconds.
    pub time_ms: u64,
}

impl PointerEvent {
    /// Creates an event.
    #[must_use]
    pub const fn new(pointer: PointerId, phase: PointerPhase, position: Point, time_ms: u64) -> Self {
        Self {
            pointer,
            phase,
            position,
            time_ms,
        }
    }

    /// Shorthand for a [`PointerPhase::Down`] event.
    #[must_use]
    pub const fn down(pointer: PointerId, position: Point, time_ms: u64) -> Self {
        Self::new(pointer, PointerPhase::Down, position, time_ms)
    }

    /// Shorthand for a [`PointerPhase::Move`] event.
    #[must_use]
    pub const fn moved(pointer: PointerId, position: Point, time_ms: u64) -> Self {
        Self::new(pointer, PointerPhase::Move, position, time_ms)
    }

    /// Shorthand for a [`PointerPhase::Up`] event.
    #[must_use]
    pub const fn up(pointer: PointerId, position: Point, time_ms: u64) -> Self {
        Self::new(pointer, PointerPhase::Up, position, time_ms)
    }

    /// Shorthand for a [`PointerPhase::Cancel`] event.
    #[must_use]
    pub const fn cancel(pointer: PointerId, position: Point, time_ms: u64) -> Self {
        Self::new(pointer, PointerPhase::Cancel, position, time_ms)
    }
}
