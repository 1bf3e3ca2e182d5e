use crate::LsbMaskError;

/// A single color plane of an RGB image
#[derive(Debug, Default, Clone, Copy, Eq, PartialEq, Ord, PartialOrd, Hash)]
pub enum Channel {
    #[default]
    Red,
    Green,
    Blue,
}

impl Channel {
    /// offset of the channel inside an interleaved RGB pixel
    pub const fn index(self) -> usize {
        match self {
            Channel::Red => 0,
            Channel::Green => 1,
            Channel::Blue => 2,
        }
    }
}

impl TryFrom<u8> for Channel {
    type Error = LsbMaskError;

    fn try_from(value: u8) -> Result<Self, Self::Error> {
        match value {
            0 => Ok(Channel::Red),
            1 => Ok(Channel::Green),
            2 => Ok(Channel::Blue),
            _ => Err(LsbMaskError::InvalidChannel(value)),
        }
    }
}

/// Codec configuration for hiding and unveiling a mask
#[derive(Debug, Default, Clone, Copy, Eq, PartialEq)]
pub struct CodecOptions {
    /// The color channel whose least significant bit carries the mask.
    ///
    /// Both sides have to agree on it, an image hidden in the green channel
    /// unveils as noise when read from the red one.
    pub channel: Channel,
}

impl CodecOptions {
    pub fn with_channel(mut self, channel: Channel) -> Self {
        self.channel = channel;
        self
    }
}
