// Copyright 2025 the Hotmap Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

// After you edit the crate's doc comment, run this command, then check README.md for any missing links
// cargo rdme --workspace-project=hotmap_gesture --heading-base-level=0

//! Hotmap Gesture: turn raw pointer events into pan/zoom/tap actions.
//!
//! This crate provides a small, synchronous state machine that consumes
//! abstract pointer events (down/move/up/cancel with a pointer id, a
//! view-space position and a timestamp) and produces [`GestureAction`]s:
//!
//! - [`drag`]: single-pointer drag tracking with a touch slop
//! - [`pinch`]: two-pointer distance tracking with a dead zone
//! - [`tap`]: tap and double-tap recognition; a lone tap is confirmed
//!   only once the double-tap window passes (see [`GestureInterpreter::poll`])
//! - [`GestureInterpreter`]: ties the three together by pointer count
//!
//! The interpreter never mutates a viewport itself. Callers apply the
//! returned actions to whatever transform they own (for example
//! `hotmap_view::Viewport`), which keeps the gesture logic testable without
//! a view.
//!
//! ## Minimal example
//!
//! ```rust
//! use kurbo::{Point, Size, Vec2};
//! use hotmap_gesture::{GestureAction, GestureInterpreter, PointerEvent, PointerId};
//!
//! let mut gestures = GestureInterpreter::default();
//! gestures.set_view_size(Size::new(400.0, 400.0));
//!
//! let finger = PointerId(1);
//! gestures.on_pointer_event(&PointerEvent::down(finger, Point::new(100.0, 100.0), 0));
//!
//! // Moving past the touch slop starts panning by the full offset so far.
//! let actions = gestures.on_pointer_event(&PointerEvent::moved(finger, Point::new(130.0, 100.0), 16));
//! assert_eq!(actions.as_slice(), &[GestureAction::PanBy(Vec2::new(30.0, 0.0))]);
//!
//! // Later moves pan incrementally.
//! let actions = gestures.on_pointer_event(&PointerEvent::moved(finger, Point::new(135.0, 90.0), 32));
//! assert_eq!(actions.as_slice(), &[GestureAction::PanBy(Vec2::new(5.0, -10.0))]);
//! ```
//!
//! This crate is `no_std` compatible.

#![no_std]

pub mod drag;
mod event;
mod interpreter;
pub mod pinch;
pub mod tap;

pub use event::{PointerEvent, PointerId, PointerPhase};
pub use interpreter::{GestureAction, GestureActions, GestureConfig, GestureInterpreter, GesturePhase};
