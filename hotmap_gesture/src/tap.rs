// Copyright 2025 the Hotmap Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Tap and double-tap recognition.
//!
//! A press counts as a tap when it is released quickly and without crossing
//! the touch slop; the caller decides both and reports the release to
//! [`TapState::on_tap`]. A lone tap is not confirmed right away: it stays
//! pending until the double-tap window has passed, so the second tap of a
//! pair can claim it and the pair is reported only as a double tap.
//!
//! A pending tap is confirmed by one of:
//!
//! - [`TapState::expire`], once the window has run out with no new press.
//! - [`TapState::on_press`], when a press arrives too late or too far away to
//!   pair with it.
//!
//! ```
//! use kurbo::Point;
//! use hotmap_gesture::tap::{TapKind, TapState};
//!
//! let mut taps = TapState::default();
//! assert_eq!(taps.on_press(Point::new(10.0, 10.0), 960, 300, 48.0), None);
//! assert_eq!(taps.on_tap(Point::new(10.0, 10.0), 1_000), TapKind::Pending);
//!
//! // Second press in time and in range: the pair is a double tap.
//! assert_eq!(taps.on_press(Point::new(14.0, 12.0), 1_150, 300, 48.0), None);
//! assert_eq!(taps.on_tap(Point::new(14.0, 12.0), 1_200), TapKind::Double);
//!
//! // A lone tap is confirmed once the window has passed.
//! taps.on_tap(Point::new(14.0, 12.0), 2_000);
//! assert_eq!(taps.expire(2_200, 300), None);
//! assert_eq!(taps.expire(2_301, 300), Some(Point::new(14.0, 12.0)));
//! ```

use kurbo::Point;

/// Result of a recognized tap.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum TapKind {
    /// A first tap, held until it is confirmed or paired.
    Pending,
    /// The second tap of a quick pair.
    Double,
}

/// Holds the last unconfirmed tap for double-tap pairing.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct TapState {
    pending: Option<(Point, u64)>,
}

impl TapState {
    /// A pointer went down at `pos` and `time_ms`.
    ///
    /// Returns the pending tap, now confirmed, if this press is too late or
    /// too far away to pair with it. Otherwise the pending tap stays held for
    /// the press's release to claim.
    pub fn on_press(
        &mut self,
        pos: Point,
        time_ms: u64,
        double_tap_timeout_ms: u64,
        double_tap_slop: f64,
    ) -> Option<Point> {
        let (last_pos, last_time) = self.pending?;
        let in_time = time_ms.saturating_sub(last_time) <= double_tap_timeout_ms;
        if in_time && (pos - last_pos).hypot() <= double_tap_slop {
            return None;
        }
        self.pending = None;
        Some(last_pos)
    }

    /// Classifies a tap released at `pos` and `time_ms`.
    ///
    /// Pairing was decided by [`TapState::on_press`]: any tap still pending
    /// here is claimed as the first half of a double tap.
    pub fn on_tap(&mut self, pos: Point, time_ms: u64) -> TapKind {
        if self.pending.take().is_some() {
            return TapKind::Double;
        }
        self.pending = Some((pos, time_ms));
        TapKind::Pending
    }

    /// Confirms and returns the pending tap if the double-tap window has
    /// passed by `now_ms`.
    pub fn expire(&mut self, now_ms: u64, double_tap_timeout_ms: u64) -> Option<Point> {
        let (pos, time) = self.pending?;
        if now_ms.saturating_sub(time) <= double_tap_timeout_ms {
            return None;
        }
        self.pending = None;
        Some(pos)
    }

    /// Earliest time at which [`TapState::expire`] confirms the pending tap.
    #[must_use]
    pub fn deadline_ms(&self, double_tap_timeout_ms: u64) -> Option<u64> {
        self.pending
            .map(|(_, time)| time.saturating_add(double_tap_timeout_ms).saturating_add(1))
    }

    /// Whether a tap is waiting for confirmation.
    #[must_use]
    pub fn is_pending(&self) -> bool {
        self.pending.is_some()
    }

    /// Drops any pending tap without confirming it.
    pub fn clear(&mut self) {
        self.pending = None;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn lone_tap_is_held_until_window_passes() {
        let mut taps = TapState::default();
        assert_eq!(taps.on_tap(Point::new(5.0, 5.0), 0), TapKind::Pending);
        assert_eq!(taps.deadline_ms(300), Some(301));
        assert_eq!(taps.expire(300, 300), None);
        assert!(taps.is_pending());
        assert_eq!(taps.expire(301, 300), Some(Point::new(5.0, 5.0)));
        assert!(!taps.is_pending());
        assert_eq!(taps.expire(1_000, 300), None);
    }

    #[test]
    fn late_press_confirms_pending_tap() {
        let mut taps = TapState::default();
        taps.on_tap(Point::new(0.0, 0.0), 0);
        assert_eq!(
            taps.on_press(Point::new(0.0, 0.0), 301, 300, 48.0),
            Some(Point::new(0.0, 0.0))
        );
        assert_eq!(taps.on_tap(Point::new(0.0, 0.0), 340), TapKind::Pending);
    }

    #[test]
    fn distant_press_confirms_pending_tap() {
        let mut taps = TapState::default();
        taps.on_tap(Point::new(0.0, 0.0), 0);
        assert_eq!(
            taps.on_press(Point::new(100.0, 0.0), 50, 300, 48.0),
            Some(Point::new(0.0, 0.0))
        );
        assert_eq!(taps.on_tap(Point::new(100.0, 0.0), 80), TapKind::Pending);
        // ...and the distant tap can pair with the next one.
        assert_eq!(taps.on_press(Point::new(101.0, 1.0), 120, 300, 48.0), None);
        assert_eq!(taps.on_tap(Point::new(101.0, 1.0), 150), TapKind::Double);
        assert!(!taps.is_pending());
    }

    #[test]
    fn clear_drops_pending_tap_unconfirmed() {
        let mut taps = TapState::default();
        taps.on_tap(Point::new(0.0, 0.0), 0);
        taps.clear();
        assert_eq!(taps.expire(1_000, 300), None);
        assert_eq!(taps.on_tap(Point::new(0.0, 0.0), 1_010), TapKind::Pending);
    }
}
