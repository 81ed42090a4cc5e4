//! Primitive UI elements - atomic building blocks
//!
//! This module contains the lowest-level pieces that implement iced's
//! `canvas::Program` trait directly.
//!
//! # Design Principles
//!
//! - **No application logic**: Primitives only depend on the widget model
//! - **Generic Message types**: Use type parameters for flexibility
//!
//! # Contents
//!
//! - [`CircularImageCanvas`] - Replays a circular image's draw list on a canvas
//! - [`MaskedImageCache`] - Circular raster of the image fill

pub mod circular_canvas;
pub mod masked_image;

pub use circular_canvas::{CircularImageCanvas, view as circular_image};
pub use masked_image::{MaskedImage, MaskedImageCache};
