//! Pure symbol encoders: channel bytes in, UART queue bytes out.

use crate::protocol::GECE_MAX_PIXELS;

/// Inverted 6N1 UART lookup for WS2811, indexed by a 2-bit slice.
///
/// The top two bits of each entry are never shifted out; start and stop
/// bits complete the waveform: `00` -> `(1)000 100(0)` on the wire, etc.
pub const WS2811_LOOKUP: [u8; 4] = [
    0b0011_0111, // 00
    0b0000_0111, // 01
    0b0011_0100, // 10
    0b0000_0100, // 11
];

/// Expand one channel byte into the four UART bytes that carry it.
///
/// Slices are consumed most-significant bits first, so `out[0]` carries
/// bits 7..6 and `out[3]` carries bits 1..0.
pub const fn expand_ws2811(byte: u8) -> [u8; 4] {
    [
        WS2811_LOOKUP[((byte >> 6) & 0x3) as usize],
        WS2811_LOOKUP[((byte >> 4) & 0x3) as usize],
        WS2811_LOOKUP[((byte >> 2) & 0x3) as usize],
        WS2811_LOOKUP[(byte & 0x3) as usize],
    ]
}

/// 7N1 UART lookup for GECE, one entry per packet bit.
///
/// Bits are stored backwards because the UART shifts LSB first; start and
/// stop bits are part of each pulse.
pub const GECE_LOOKUP: [u8; 2] = [
    0b0111_1100, // 0
    0b0110_0000, // 1
];

/// Bits (and therefore UART bytes) in one GECE packet.
pub const GECE_PACKET_BITS: usize = 26;

/// Brightness a GECE packet carries unless the caller overrides it.
pub const GECE_DEFAULT_BRIGHTNESS: u8 = 0xCC;

/// One GECE packet: a 6-bit address, an 8-bit global brightness and
/// 4-bit red/green/blue fields.
///
/// A GECE string latches one packet per addressed bulb; the driver sends
/// one packet per pixel per frame.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct GecePacket {
    pub address: u8,
    pub brightness: u8,
    pub red: u8,
    pub green: u8,
    pub blue: u8,
}

impl GecePacket {
    /// Packet for `address` from full-range channel values.
    ///
    /// GECE color fields are 4 bits wide; the high nibble of each 8-bit
    /// channel value is used.
    pub const fn for_pixel(address: u8, brightness: u8, r: u8, g: u8, b: u8) -> Self {
        Self {
            address,
            brightness,
            red: r >> 4,
            green: g >> 4,
            blue: b >> 4,
        }
    }

    /// Compose the 26-bit packet word.
    ///
    /// Layout, MSB down: bits 25..20 address, 19..12 brightness, 11..8
    /// blue, 7..4 green, 3..0 red.
    pub const fn compose(self) -> u32 {
        debug_assert!((self.address as usize) < GECE_MAX_PIXELS + 1);
        ((self.address as u32 & 0x3F) << 20)
            | ((self.brightness as u32) << 12)
            | ((self.blue as u32 & 0xF) << 8)
            | ((self.green as u32 & 0xF) << 4)
            | (self.red as u32 & 0xF)
    }

    /// Expand the packet into its UART byte stream, MSB first.
    pub fn encode_into(self, out: &mut [u8; GECE_PACKET_BITS]) {
        let word = self.compose();
        for (i, slot) in out.iter_mut().enumerate() {
            *slot = GECE_LOOKUP[((word >> (GECE_PACKET_BITS - 1 - i)) & 0x1) as usize];
        }
    }
}
