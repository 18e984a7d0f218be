//! Two-channel quadrature encoder reader for the solar tracker.
//!
//! The decoder keeps a signed, wrapping position count that is stepped by one
//! on every logic change of either encoder channel. Everything here is
//! hardware independent: the board support lives behind [`EdgePlatform`].
#![cfg_attr(not(test), no_std)]

pub mod decode;
pub mod decoder;
pub mod error;
pub mod platform;
pub mod position;

pub use decode::{decode, Channel, Direction, Levels, Sense};
pub use decoder::QuadratureDecoder;
pub use error::EncoderError;
pub use platform::EdgePlatform;
pub use position::Position;
