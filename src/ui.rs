//! iced integration for the circular image widget
//!
//! [`primitives`] holds the canvas program and the circular raster cache the
//! host keeps next to each [`crate::CircularImage`].

pub mod primitives;
