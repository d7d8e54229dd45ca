// Copyright 2025 the Hotmap Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! The image decoding seam.
//!
//! Hotmap never decodes pixels. It only needs the image dimensions to size
//! the content space, so the host's decoder reports just that.

use core::fmt;
use std::sync::Arc;

use kurbo::Size;

/// Which image to show.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub enum ImageResource {
    /// An image bundled with the application, by resource id.
    Resource(u32),
    /// An image file on local storage.
    File(Arc<str>),
    /// Encoded image bytes already in memory.
    Bytes(Arc<[u8]>),
}

/// Pixel dimensions of a decoded image.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct ImageSize {
    /// Width in pixels.
    pub width: u32,
    /// Height in pixels.
    pub height: u32,
}

impl ImageSize {
    /// Creates a size.
    pub const fn new(width: u32, height: u32) -> Self {
        Self { width, height }
    }

    /// The size as content-space extents.
    pub fn to_size(self) -> Size {
        Size::new(f64::from(self.width), f64::from(self.height))
    }
}

/// Failure to decode an image.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum DecodeError {
    /// The resource or file does not exist.
    NotFound(String),
    /// The data is not in a supported format.
    Unsupported(String),
    /// Reading the data failed.
    Io(String),
}

impl fmt::Display for DecodeError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::NotFound(what) => write!(f, "image not found: {what}"),
            Self::Unsupported(what) => write!(f, "unsupported image: {what}"),
            Self::Io(msg) => write!(f, "failed to read image: {msg}"),
        }
    }
}

impl core::error::Error for DecodeError {}

/// Host service that decodes images far enough to know their size.
pub trait ImageDecoder {
    /// Returns the pixel dimensions of `resource`.
    fn decode(&self, resource: &ImageResource) -> Result<ImageSize, DecodeError>;
}
