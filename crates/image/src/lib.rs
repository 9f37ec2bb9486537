//! Camera frame decoding for the classifier pipeline.
//!
//! Frames arrive in whatever encoding the camera produces. Everything here
//! converts them straight to packed RGB (`[R, G, B, R, G, B, ...]`, row-major)
//! without going through a lossy intermediate codec, then mirrors or resamples
//! the raster.

mod error;
pub use error::*;

mod frame;
pub use frame::*;

mod pixelformat;
pub use pixelformat::*;

mod rgb;
pub use rgb::*;

mod jpeg;
pub use jpeg::*;

mod resize;
pub use resize::*;
