//! The board capabilities the decoder needs.

use crate::decode::{Channel, Levels};

/// Digital inputs plus "on any change" edge callbacks for the two channel lines.
///
/// The decoder never touches hardware directly. A board implements this trait
/// for its two pins; tests implement it with simulated levels.
///
/// Edge delivery is pull based: the interrupt handler asks the decoder to
/// [`dispatch`](crate::QuadratureDecoder::dispatch), which calls
/// [`take_edge`](EdgePlatform::take_edge) for each channel and runs the
/// channel's callback when an edge is pending. Implementations used from
/// interrupt context must not block or allocate.
pub trait EdgePlatform {
    type Error;

    /// Configures the channel's line as a digital input.
    fn configure_input(&mut self, channel: Channel) -> Result<(), Self::Error>;

    /// Arms the channel's callback for every logic change, rising and falling.
    fn register_edge_callback(&mut self, channel: Channel) -> Result<(), Self::Error>;

    /// Instantaneous logic level of the channel's line.
    fn is_high(&mut self, channel: Channel) -> Result<bool, Self::Error>;

    /// Levels of both lines, as one sample.
    ///
    /// The default reads A then B. Boards that can latch both lines in one
    /// register access should override it to narrow the window in which a
    /// second transition can slip between the two reads.
    fn read_levels(&mut self) -> Result<Levels, Self::Error> {
        let a_high = self.is_high(Channel::A)?;
        let b_high = self.is_high(Channel::B)?;
        Ok(Levels::new(a_high, b_high))
    }

    /// Returns true, and acknowledges it, if an edge is pending on a registered channel.
    fn take_edge(&mut self, channel: Channel) -> Result<bool, Self::Error>;
}
