use crate::decode::{decode, Channel, Direction, Sense};
use crate::error::EncoderError;
use crate::platform::EdgePlatform;
use crate::position::Position;

/// Turns edge events on the two encoder channels into a running position.
///
/// The decoder owns the board's [`EdgePlatform`] and borrows the [`Position`]
/// it steps, so the same cell can be handed to any number of readers.
///
/// # Example
///
/// ```ignore
/// static POSITION: Position = Position::new();
///
/// let mut decoder = QuadratureDecoder::new(board_pins, &POSITION);
/// decoder.initialize()?;
/// // from the GPIO interrupt handler:
/// decoder.dispatch()?;
/// // from anywhere:
/// let count = POSITION.get();
/// ```
pub struct QuadratureDecoder<'a, P> {
    platform: P,
    position: &'a Position,
    sense: Sense,
    initialized: bool,
}

impl<'a, P> QuadratureDecoder<'a, P>
where
    P: EdgePlatform,
{
    pub fn new(platform: P, position: &'a Position) -> Self {
        Self::with_sense(platform, position, Sense::Normal)
    }

    pub fn with_sense(platform: P, position: &'a Position, sense: Sense) -> Self {
        Self {
            platform,
            position,
            sense,
            initialized: false,
        }
    }

    /// Configures both channel lines as inputs, then arms an "any change"
    /// callback on each.
    ///
    /// Call once before edges are expected. A second call is refused with
    /// [`EncoderError::AlreadyInitialized`] and leaves the platform untouched.
    ///
    /// # Errors
    /// * [`EncoderError::Platform`] if a line cannot be configured or its
    ///   callback cannot be registered. The decoder is unusable then.
    pub fn initialize(&mut self) -> Result<(), EncoderError<P::Error>> {
        if self.initialized {
            return Err(EncoderError::AlreadyInitialized);
        }
        for channel in Channel::ALL {
            self.platform.configure_input(channel)?;
        }
        for channel in Channel::ALL {
            self.platform.register_edge_callback(channel)?;
        }
        self.initialized = true;
        Ok(())
    }

    /// Callback for a logic change on channel A.
    pub fn on_channel_a_edge(&mut self) -> Result<Direction, EncoderError<P::Error>> {
        self.on_edge(Channel::A)
    }

    /// Callback for a logic change on channel B.
    pub fn on_channel_b_edge(&mut self) -> Result<Direction, EncoderError<P::Error>> {
        self.on_edge(Channel::B)
    }

    /// Samples both lines and steps the position once for an edge on `channel`.
    ///
    /// The single sample is trusted as is. If both channels change at
    /// practically the same instant the step may be counted the wrong way.
    pub fn on_edge(&mut self, channel: Channel) -> Result<Direction, EncoderError<P::Error>> {
        let levels = self.platform.read_levels()?;
        let direction = decode(channel, levels, self.sense);
        self.position.step(direction);
        Ok(direction)
    }

    /// Runs the callback of every channel with a pending edge, A first.
    ///
    /// Returns the number of edges serviced. This is the body of the GPIO
    /// interrupt handler.
    pub fn dispatch(&mut self) -> Result<u8, EncoderError<P::Error>> {
        let mut serviced = 0;
        for channel in Channel::ALL {
            if self.platform.take_edge(channel)? {
                self.on_edge(channel)?;
                serviced += 1;
            }
        }
        Ok(serviced)
    }

    pub fn current_position(&self) -> i32 {
        self.position.get()
    }

    pub fn position(&self) -> &'a Position {
        self.position
    }

    pub fn sense(&self) -> Sense {
        self.sense
    }

    pub fn is_initialized(&self) -> bool {
        self.initialized
    }

    pub fn platform(&self) -> &P {
        &self.platform
    }

    pub fn platform_mut(&mut self) -> &mut P {
        &mut self.platform
    }
}
