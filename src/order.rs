//! Color channel ordering within a pixel's buffer footprint.

/// Logical color channel of a pixel.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Channel {
    R,
    G,
    B,
    W,
}

/// Order in which a pixel expects its channels on the wire.
///
/// The W-suffixed orders are only valid with 4-channel protocols.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum ColorOrder {
    Rgb,
    Grb,
    Brg,
    Rbg,
    Gbr,
    Bgr,

    Rgbw,
    Grbw,
    Brgw,
    Rbgw,
    Gbrw,
    Bgrw,
}

impl ColorOrder {
    /// Whether this order carries a white channel.
    pub const fn has_white(self) -> bool {
        matches!(
            self,
            Self::Rgbw | Self::Grbw | Self::Brgw | Self::Rbgw | Self::Gbrw | Self::Bgrw
        )
    }

    /// Channels per pixel under this order (3 or 4).
    pub const fn channel_count(self) -> usize {
        if self.has_white() { 4 } else { 3 }
    }

    /// Byte offsets of R, G and B within one pixel's footprint.
    pub const fn rgb_offsets(self) -> [usize; 3] {
        match self {
            Self::Rgb | Self::Rgbw => [0, 1, 2],
            Self::Grb | Self::Grbw => [1, 0, 2],
            Self::Brg | Self::Brgw => [1, 2, 0],
            Self::Rbg | Self::Rbgw => [0, 2, 1],
            Self::Gbr | Self::Gbrw => [2, 0, 1],
            Self::Bgr | Self::Bgrw => [2, 1, 0],
        }
    }

    /// Byte offset of the white channel, if this order has one.
    ///
    /// White always trails the color channels on the supported pixels.
    pub const fn white_offset(self) -> Option<usize> {
        if self.has_white() { Some(3) } else { None }
    }

    /// Byte offset of `channel` within one pixel's footprint.
    ///
    /// Returns `None` for [`Channel::W`] on a 3-channel order.
    pub const fn offset_of(self, channel: Channel) -> Option<usize> {
        let [r, g, b] = self.rgb_offsets();
        match channel {
            Channel::R => Some(r),
            Channel::G => Some(g),
            Channel::B => Some(b),
            Channel::W => self.white_offset(),
        }
    }
}
