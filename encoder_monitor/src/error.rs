//! Error types for the quadrature decoder.

use core::fmt;

/// Errors reported while setting up or servicing the decoder.
#[derive(Debug, PartialEq, Eq)]
pub enum EncoderError<E> {
    /// The platform could not configure a pin, arm an edge callback or read a level.
    Platform(E),

    /// `initialize` was called on a decoder whose callbacks are already registered.
    AlreadyInitialized,
}

// Allow `?` on raw platform errors.
impl<E> From<E> for EncoderError<E> {
    fn from(error: E) -> Self {
        EncoderError::Platform(error)
    }
}

impl<E: fmt::Debug> fmt::Display for EncoderError<E> {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            EncoderError::Platform(e) => write!(f, "platform error: {:?}", e),
            EncoderError::AlreadyInitialized => write!(f, "encoder already initialized"),
        }
    }
}

#[cfg(feature = "defmt")]
impl<E: defmt::Format> defmt::Format for EncoderError<E> {
    fn format(&self, f: defmt::Formatter) {
        match self {
            EncoderError::Platform(e) => defmt::write!(f, "platform error: {}", e),
            EncoderError::AlreadyInitialized => defmt::write!(f, "encoder already initialized"),
        }
    }
}
