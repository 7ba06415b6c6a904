//! Pixel protocol variants and their wire timing.
//!
//! Frame and idle times come from the datasheet-plus-tolerance values that
//! shipped hardware actually needs, not the nominal minimums; they are plain
//! constants so a build for marginal strips can adjust them in one place.

use embassy_time::Duration;

use crate::LineConfig;

/// WS2811-family frame time per pixel, in microseconds.
pub const WS2811_FRAME_US: u64 = 30;
/// WS2811-family idle (latch) time, in microseconds.
pub const WS2811_IDLE_US: u64 = 300;
/// SK6812 frame time per pixel, in microseconds (4 channels).
pub const SK6812_FRAME_US: u64 = 40;
/// SK6812 idle (latch) time, in microseconds.
pub const SK6812_IDLE_US: u64 = 300;
/// GECE frame time per packet, in microseconds.
pub const GECE_FRAME_US: u64 = 790;
/// GECE inter-packet idle time, in microseconds.
pub const GECE_IDLE_US: u64 = 45;

/// WS2811-family shift rate: 4 UART bits per 800 kHz pixel bit.
pub const WS2811_BAUD: u32 = 3_200_000;
/// GECE shift rate: 3 UART bits per ~100 kHz pixel bit.
pub const GECE_BAUD: u32 = 300_000;

/// Highest pixel count a GECE string can address (6-bit address field).
pub const GECE_MAX_PIXELS: usize = 63;

/// Supported pixel protocols.
///
/// Fixed at initialization; selects the channel count per pixel, the UART
/// line configuration, the encoding path, and the frame-rate limit.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum PixelProtocol {
    /// WS2811/WS2812 and timing-compatible RGB strips.
    Ws2811,
    /// SK6812 RGBW strips (WS2811 waveform, 4 channels per pixel).
    Sk6812Rgbw,
    /// GE Color Effects strings (one 26-bit packet per pixel address).
    Gece,
}

impl PixelProtocol {
    /// Channels per pixel footprint in the buffer (3 or 4).
    pub const fn channel_count(self) -> usize {
        match self {
            Self::Ws2811 | Self::Gece => 3,
            Self::Sk6812Rgbw => 4,
        }
    }

    /// UART line parameters for this protocol.
    ///
    /// WS2811-family uses an inverted 6N1 frame so start + 6 data + stop
    /// bits carry two pixel bits per queued byte; GECE uses an inverted 7N1
    /// frame carrying one pixel bit per queued byte.
    pub const fn line_config(self) -> LineConfig {
        match self {
            Self::Ws2811 | Self::Sk6812Rgbw => LineConfig {
                baud: WS2811_BAUD,
                data_bits: 6,
                invert: true,
            },
            Self::Gece => LineConfig {
                baud: GECE_BAUD,
                data_bits: 7,
                invert: true,
            },
        }
    }

    /// Time one frame occupies the wire for `pixels` pixels.
    pub const fn frame_time(self, pixels: usize) -> Duration {
        let us = match self {
            Self::Ws2811 => WS2811_FRAME_US * pixels as u64,
            Self::Sk6812Rgbw => SK6812_FRAME_US * pixels as u64,
            Self::Gece => GECE_FRAME_US * pixels as u64,
        };
        Duration::from_micros(us)
    }

    /// Quiet time the pixels need after a frame before latching.
    pub const fn idle_time(self) -> Duration {
        let us = match self {
            Self::Ws2811 => WS2811_IDLE_US,
            Self::Sk6812Rgbw => SK6812_IDLE_US,
            Self::Gece => GECE_IDLE_US,
        };
        Duration::from_micros(us)
    }

    /// Minimum interval between transmission starts for `pixels` pixels.
    ///
    /// GECE pays the idle gap per packet (one packet per pixel), the
    /// WS2811 family once per frame.
    pub const fn refresh_interval(self, pixels: usize) -> Duration {
        let us = match self {
            Self::Ws2811 => WS2811_FRAME_US * pixels as u64 + WS2811_IDLE_US,
            Self::Sk6812Rgbw => SK6812_FRAME_US * pixels as u64 + SK6812_IDLE_US,
            Self::Gece => (GECE_FRAME_US + GECE_IDLE_US) * pixels as u64,
        };
        Duration::from_micros(us)
    }
}
