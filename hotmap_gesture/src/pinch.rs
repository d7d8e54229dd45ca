// Copyright 2025 the Hotmap Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Two-pointer pinch tracking.
//!
//! [`PinchState`] remembers the distance between the two pinching pointers
//! from the previous move. Each new move compares against it: a change larger
//! than the dead zone yields a multiplicative zoom factor of
//! `1 + delta / sensitivity`. The remembered distance is refreshed on every
//! move, whether or not it produced a zoom, so slow drifts inside the dead
//! zone never accumulate into a jump.
//!
//! ```
//! use kurbo::Point;
//! use hotmap_gesture::pinch::PinchState;
//!
//! let mut pinch = PinchState::default();
//! // The first sample only establishes the baseline.
//! assert_eq!(pinch.update(Point::new(0.0, 0.0), Point::new(100.0, 0.0), 2.0, 200.0), None);
//! // 100 -> 130: delta 30, factor 1 + 30 / 200.
//! let factor = pinch.update(Point::new(0.0, 0.0), Point::new(130.0, 0.0), 2.0, 200.0);
//! assert_eq!(factor, Some(1.15));
//! ```

use kurbo::Point;

/// Distance baseline for an ongoing pinch.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct PinchState {
    previous_distance: f64,
}

impl PinchState {
    /// Forgets the baseline; the next update only records a distance.
    pub fn reset(&mut self) {
        self.previous_distance = 0.0;
    }

    /// Last recorded pointer distance, `0.0` when there is no baseline.
    pub fn previous_distance(&self) -> f64 {
        self.previous_distance
    }

    /// Records the distance between `a` and `b` and returns a zoom factor
    /// when it changed by more than `dead_zone` since the previous sample.
    pub fn update(&mut self, a: Point, b: Point, dead_zone: f64, sensitivity: f64) -> Option<f64> {
        let current = (b - a).hypot();
        let previous = self.previous_distance;
        self.previous_distance = current;
        if previous == 0.0 {
            return None;
        }
        let delta = current - previous;
        if delta.abs() > dead_zone {
            Some(1.0 + delta / sensitivity)
        } else {
            None
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn pair(distance: f64) -> (Point, Point) {
        (Point::new(10.0, 10.0), Point::new(10.0, 10.0 + distance))
    }

    #[test]
    fn first_sample_sets_baseline_only() {
        let mut pinch = PinchState::default();
        let (a, b) = pair(100.0);
        assert_eq!(pinch.update(a, b, 2.0, 200.0), None);
        assert_eq!(pinch.previous_distance(), 100.0);
    }

    #[test]
    fn spreading_zooms_in_and_pinching_zooms_out() {
        let mut pinch = PinchState::default();
        let (a, b) = pair(100.0);
        pinch.update(a, b, 2.0, 200.0);

        let (a, b) = pair(130.0);
        assert_eq!(pinch.update(a, b, 2.0, 200.0), Some(1.15));

        let (a, b) = pair(90.0);
        let factor = pinch.update(a, b, 2.0, 200.0).unwrap();
        assert!((factor - 0.8).abs() < 1e-12);
    }

    #[test]
    fn dead_zone_suppresses_jitter_but_moves_baseline() {
        let mut pinch = PinchState::default();
        let (a, b) = pair(100.0);
        pinch.update(a, b, 2.0, 200.0);

        let (a, b) = pair(102.0);
        assert_eq!(pinch.update(a, b, 2.0, 200.0), None);
        let (a, b) = pair(104.0);
        assert_eq!(pinch.update(a, b, 2.0, 200.0), None);
        assert_eq!(pinch.previous_distance(), 104.0);
    }

    #[test]
    fn reset_clears_baseline() {
        let mut pinch = PinchState::default();
        let (a, b) = pair(100.0);
        pinch.update(a, b, 2.0, 200.0);
        pinch.reset();
        let (a, b) = pair(300.0);
        assert_eq!(pinch.update(a, b, 2.0, 200.0), None);
    }
}
