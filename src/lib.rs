//! UART shift-register driver for addressable LED pixels.
//!
//! Drives WS2811-family strips (including SK6812 RGBW) and GECE strings by
//! abusing a UART transmitter as a programmable waveform generator: with the
//! line inverted, the start/stop framing bits become part of the pixel
//! bitstream and each queued byte carries a precomputed slice of the
//! protocol waveform. The hardware transmit queue is refilled from an
//! interrupt-context callback until a frame is drained, so the rest of the
//! firmware keeps running while a frame is clocked out.
//!
//! The crate is pure `no_std` logic. All hardware access goes through the
//! [`SerialBitstreamSink`] trait, and all timing goes through
//! [`embassy_time::Instant`] values supplied by the caller, so everything
//! here runs (and is tested) on the host.
//!
//! # Usage
//!
//! ```ignore
//! let sink = Uart1Sink::new(peripherals.UART1);
//! let mut driver: PixelDriver<_, 512> =
//!     PixelDriver::new(sink, PixelProtocol::Ws2811, ColorOrder::Grb, 170)?;
//!
//! driver.set_pixel(0, Rgb::new(255, 0, 0))?;
//! match driver.show(Instant::now()) {
//!     ShowOutcome::Started => {}
//!     ShowOutcome::SkippedRateLimited | ShowOutcome::SkippedBusy => {}
//! }
//!
//! // From the UART "TX queue has room" interrupt:
//! driver.on_tx_ready();
//! ```
#![no_std]

pub mod driver;
pub mod encode;
pub mod layout;
pub mod order;
pub mod protocol;

pub use driver::{DriverError, DriverState, PixelDriver, ShowOutcome};
pub use encode::{GecePacket, expand_ws2811};
pub use layout::Layout;
pub use order::{Channel, ColorOrder};
pub use protocol::PixelProtocol;

pub use embassy_time::{Duration, Instant};
use smart_leds::RGB8;

pub type Rgb = RGB8;

/// UART line parameters for one pixel protocol.
///
/// `invert` flips the line so the UART's start bit (normally low) becomes a
/// high pulse on the wire; the protocols here all idle low.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct LineConfig {
    /// Bit rate of the shift register.
    pub baud: u32,
    /// Data bits per UART frame (start and stop bits are extra).
    pub data_bits: u8,
    /// Invert the transmit line.
    pub invert: bool,
}

/// Hardware transmit capability the driver is generic over.
///
/// Implement this for the target's UART (or any peripheral that can shift
/// out bytes at a configurable rate with an inverted line). The driver only
/// ever touches hardware through these five operations, which keeps the
/// encoding and state machine portable.
///
/// Implementations must not block: [`PixelDriver::on_tx_ready`] is called
/// from interrupt context.
pub trait SerialBitstreamSink {
    /// Reconfigure the line for a protocol's bit timing.
    fn configure(&mut self, config: LineConfig);

    /// Route the transmit line to a different output pin.
    fn set_pin(&mut self, pin: u8);

    /// Total depth of the hardware transmit queue, in bytes.
    fn queue_capacity(&self) -> u8;

    /// Bytes that can be enqueued right now without overflowing the queue.
    fn queue_free_slots(&self) -> u8;

    /// Push one byte into the transmit queue.
    fn enqueue(&mut self, byte: u8);
}
