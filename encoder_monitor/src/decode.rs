//! The quadrature truth table.
//!
//! Channel A and channel B are 90° apart, so the level of the other channel at
//! the moment one channel changes tells which way the shaft moved. Channel B's
//! edges sit at the opposite point of the cycle, so its table is the mirror
//! image of channel A's.

/// One of the two encoder channels.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Channel {
    A,
    B,
}

impl Channel {
    /// Both channels, in servicing order.
    pub const ALL: [Channel; 2] = [Channel::A, Channel::B];
}

/// Logic levels of both channels, sampled together in one callback.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct Levels {
    pub a_high: bool,
    pub b_high: bool,
}

impl Levels {
    pub const fn new(a_high: bool, b_high: bool) -> Self {
        Self { a_high, b_high }
    }

    /// Returns true when both channels read the same logic level.
    pub const fn equal(&self) -> bool {
        self.a_high == self.b_high
    }
}

/// One quadrature step, as a signed delta on the position counter.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Direction {
    Increment,
    Decrement,
}

impl Direction {
    pub const fn delta(self) -> i32 {
        match self {
            Direction::Increment => 1,
            Direction::Decrement => -1,
        }
    }

    pub const fn reversed(self) -> Self {
        match self {
            Direction::Increment => Direction::Decrement,
            Direction::Decrement => Direction::Increment,
        }
    }
}

/// Which physical rotation counts up.
///
/// The sense depends on how the encoder is wired. Flipping it negates the
/// result for both channels alike, so A and B always stay mirrored.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Sense {
    /// A-equal increments, B-equal decrements.
    #[default]
    Normal,
    /// A-equal decrements, B-equal increments.
    Inverted,
}

/// Decodes one edge on `channel` given the levels read in its callback.
///
/// | channel | A == B    | A != B    |
/// |---------|-----------|-----------|
/// | A       | Increment | Decrement |
/// | B       | Decrement | Increment |
///
/// (for [`Sense::Normal`]; [`Sense::Inverted`] swaps every cell)
pub const fn decode(channel: Channel, levels: Levels, sense: Sense) -> Direction {
    let direction = match (channel, levels.equal()) {
        (Channel::A, true) | (Channel::B, false) => Direction::Increment,
        (Channel::A, false) | (Channel::B, true) => Direction::Decrement,
    };
    match sense {
        Sense::Normal => direction,
        Sense::Inverted => direction.reversed(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const ALL_LEVELS: [Levels; 4] = [
        Levels::new(false, false),
        Levels::new(false, true),
        Levels::new(true, false),
        Levels::new(true, true),
    ];

    #[test]
    fn channel_a_equal_levels_increment() {
        assert_eq!(decode(Channel::A, Levels::new(false, false), Sense::Normal), Direction::Increment);
        assert_eq!(decode(Channel::A, Levels::new(true, true), Sense::Normal), Direction::Increment);
    }

    #[test]
    fn channel_a_unequal_levels_decrement() {
        assert_eq!(decode(Channel::A, Levels::new(true, false), Sense::Normal), Direction::Decrement);
        assert_eq!(decode(Channel::A, Levels::new(false, true), Sense::Normal), Direction::Decrement);
    }

    #[test]
    fn channel_b_equal_levels_decrement() {
        assert_eq!(decode(Channel::B, Levels::new(false, false), Sense::Normal), Direction::Decrement);
        assert_eq!(decode(Channel::B, Levels::new(true, true), Sense::Normal), Direction::Decrement);
    }

    #[test]
    fn channel_b_unequal_levels_increment() {
        assert_eq!(decode(Channel::B, Levels::new(true, false), Sense::Normal), Direction::Increment);
        assert_eq!(decode(Channel::B, Levels::new(false, true), Sense::Normal), Direction::Increment);
    }

    #[test]
    fn channels_mirror_each_other_for_every_level_pair() {
        for sense in [Sense::Normal, Sense::Inverted] {
            for levels in ALL_LEVELS {
                assert_eq!(
                    decode(Channel::A, levels, sense),
                    decode(Channel::B, levels, sense).reversed(),
                    "levels {:?} sense {:?}",
                    levels,
                    sense
                );
            }
        }
    }

    #[test]
    fn inverted_sense_flips_every_cell() {
        for channel in Channel::ALL {
            for levels in ALL_LEVELS {
                assert_eq!(
                    decode(channel, levels, Sense::Inverted),
                    decode(channel, levels, Sense::Normal).reversed()
                );
            }
        }
    }

    #[test]
    fn direction_deltas() {
        assert_eq!(Direction::Increment.delta(), 1);
        assert_eq!(Direction::Decrement.delta(), -1);
        assert_eq!(Sense::default(), Sense::Normal);
    }
}
