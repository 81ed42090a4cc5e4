//! circular-image - a circular image widget for iced
//!
//! Renders a bitmap clipped to a circle with an optional border ring, shows
//! placeholder initials while no image is set, and swaps to a checkmark when
//! checked.

pub mod circular_image;
pub mod color;
pub mod error;
pub mod ui;

pub use circular_image::{Attributes, CircularImage, Dimension, DrawOp};
pub use error::{AttributesError, CircularImageError};
