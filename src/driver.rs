//! The pixel driver: channel buffer, transmission state machine and
//! frame-rate governor.

use embassy_time::{Duration, Instant};
use heapless::Vec;

use crate::encode::{GECE_DEFAULT_BRIGHTNESS, GECE_PACKET_BITS, GecePacket, expand_ws2811};
use crate::layout::Layout;
use crate::order::{Channel, ColorOrder};
use crate::protocol::{GECE_MAX_PIXELS, PixelProtocol};
use crate::{Rgb, SerialBitstreamSink};

/// UART queue bytes per channel byte on the WS2811 path.
const WS2811_BYTES_PER_CHANNEL: u8 = 4;

/// Errors reported by the driver.
///
/// Rate limiting is not an error; see [`ShowOutcome`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[non_exhaustive]
pub enum DriverError {
    /// The color order's channel count does not match the protocol's.
    InvalidColorOrder,
    /// Pixel count is zero, exceeds the compiled-in channel capacity, or
    /// exceeds the protocol's address space.
    InvalidPixelCount,
    /// A frame is still being clocked out.
    Busy,
    /// Address lies outside the channel buffer.
    OutOfBounds,
}

/// Result of a [`PixelDriver::show`] request.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum ShowOutcome {
    /// Transmission started; the queue is being fed.
    Started,
    /// Too soon after the previous frame. Expected under rate limiting;
    /// reissue on the next cycle.
    SkippedRateLimited,
    /// The previous frame is still in flight.
    SkippedBusy,
}

/// Transmission engine state.
///
/// The main context only mutates driver fields in `Idle`; outside `Idle`
/// the refill callback owns the streaming cursor and the sink. That
/// structural split is the whole concurrency story, no locks involved.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum DriverState {
    /// No frame pending, queue empty.
    Idle,
    /// A `show` request is preparing the frame.
    Arming,
    /// The refill callback is feeding the queue.
    Streaming,
    /// Source exhausted, waiting for the queue to run dry.
    Draining,
}

/// Driver for one string of pixels behind one serial sink.
///
/// `MAX_CHANNELS` is the compile-time channel buffer capacity; the live
/// length is `pixel_count * channel_count`, fixed at construction. Rebuild
/// the driver to change protocol or pixel count (which also discards any
/// in-flight frame, since construction takes the sink by value).
pub struct PixelDriver<S: SerialBitstreamSink, const MAX_CHANNELS: usize> {
    sink: S,
    protocol: PixelProtocol,
    order: ColorOrder,
    layout: Layout,
    data: Vec<u8, MAX_CHANNELS>,
    num_pixels: usize,
    state: DriverState,
    /// WS2811 path: next channel byte to encode. GECE path: next address.
    cursor: usize,
    /// One composed GECE packet, rebuilt as each address drains.
    shadow: [u8; GECE_PACKET_BITS],
    gece_brightness: u8,
    start_time: Option<Instant>,
    refresh_interval: Duration,
}

impl<S: SerialBitstreamSink, const MAX_CHANNELS: usize> PixelDriver<S, MAX_CHANNELS> {
    /// Create a driver and configure the sink's line for `protocol`.
    pub fn new(
        mut sink: S,
        protocol: PixelProtocol,
        order: ColorOrder,
        pixel_count: u16,
    ) -> Result<Self, DriverError> {
        if order.channel_count() != protocol.channel_count() {
            return Err(DriverError::InvalidColorOrder);
        }
        let num_pixels = pixel_count as usize;
        if num_pixels == 0 {
            return Err(DriverError::InvalidPixelCount);
        }
        if protocol == PixelProtocol::Gece && num_pixels > GECE_MAX_PIXELS {
            return Err(DriverError::InvalidPixelCount);
        }

        let mut data = Vec::new();
        data.resize(num_pixels * protocol.channel_count(), 0)
            .map_err(|()| DriverError::InvalidPixelCount)?;

        sink.configure(protocol.line_config());

        Ok(Self {
            sink,
            protocol,
            order,
            layout: Layout::default(),
            data,
            num_pixels,
            state: DriverState::Idle,
            cursor: 0,
            shadow: [0; GECE_PACKET_BITS],
            gece_brightness: GECE_DEFAULT_BRIGHTNESS,
            start_time: None,
            refresh_interval: protocol.refresh_interval(num_pixels),
        })
    }

    /// Route the output to a different pin.
    pub fn set_pin(&mut self, pin: u8) -> Result<(), DriverError> {
        if self.state != DriverState::Idle {
            return Err(DriverError::Busy);
        }
        self.sink.set_pin(pin);
        Ok(())
    }

    /// Change the channel order. Buffer contents are untouched; values
    /// already written keep their old physical positions.
    pub fn update_color_order(&mut self, order: ColorOrder) -> Result<(), DriverError> {
        if self.state != DriverState::Idle {
            return Err(DriverError::Busy);
        }
        if order.channel_count() != self.protocol.channel_count() {
            return Err(DriverError::InvalidColorOrder);
        }
        self.order = order;
        Ok(())
    }

    /// Set the group/zigzag layout. Affects subsequent setter calls only.
    pub fn set_layout(&mut self, group: u16, zigzag: u16) {
        self.layout = Layout::new(group, zigzag);
    }

    /// Global brightness field for GECE packets (defaults to 0xCC).
    pub fn set_gece_brightness(&mut self, value: u8) {
        self.gece_brightness = value;
    }

    /// Write one byte at a physical buffer offset.
    pub fn set_raw_value(&mut self, offset: u16, value: u8) -> Result<(), DriverError> {
        if self.state != DriverState::Idle {
            return Err(DriverError::Busy);
        }
        let slot = self
            .data
            .get_mut(offset as usize)
            .ok_or(DriverError::OutOfBounds)?;
        *slot = value;
        Ok(())
    }

    /// Write one channel of a logical pixel, applying color order, grouping
    /// and zigzag.
    pub fn set_channel_value(
        &mut self,
        index: u16,
        channel: Channel,
        value: u8,
    ) -> Result<(), DriverError> {
        if self.state != DriverState::Idle {
            return Err(DriverError::Busy);
        }
        let offset = self
            .order
            .offset_of(channel)
            .ok_or(DriverError::OutOfBounds)?;
        let range = self.layout.physical_range(index as usize);
        if range.start >= self.num_pixels {
            return Err(DriverError::OutOfBounds);
        }
        let channels = self.protocol.channel_count();
        for physical in range {
            let wired = self.layout.wired_index(physical);
            // Partial trailing zigzag runs map past the end of the string.
            if wired < self.num_pixels {
                self.data[channels * wired + offset] = value;
            }
        }
        Ok(())
    }

    /// Write all color channels of a logical pixel. The white channel, if
    /// any, is left untouched.
    pub fn set_pixel(&mut self, index: u16, color: Rgb) -> Result<(), DriverError> {
        self.set_channel_value(index, Channel::R, color.r)?;
        self.set_channel_value(index, Channel::G, color.g)?;
        self.set_channel_value(index, Channel::B, color.b)?;
        Ok(())
    }

    /// Whether a refresh issued at `now` would start a frame.
    ///
    /// True once the previous frame's wire time plus the protocol's latch
    /// idle time have elapsed, and always true before the first frame.
    pub fn can_refresh(&self, now: Instant) -> bool {
        match self.start_time {
            Some(start) => now.as_micros() >= start.as_micros() + self.refresh_interval.as_micros(),
            None => true,
        }
    }

    /// Request a frame transmission.
    ///
    /// Non-blocking: arms the engine and primes the queue, then returns.
    /// A request during an in-flight frame or inside the rate limit is
    /// skipped, not an error.
    pub fn show(&mut self, now: Instant) -> ShowOutcome {
        if self.state != DriverState::Idle {
            return ShowOutcome::SkippedBusy;
        }
        if !self.can_refresh(now) {
            return ShowOutcome::SkippedRateLimited;
        }

        self.state = DriverState::Arming;
        self.cursor = 0;
        if self.protocol == PixelProtocol::Gece {
            self.compose_packet(0);
        }
        self.start_time = Some(now);

        self.state = DriverState::Streaming;
        self.on_tx_ready();
        ShowOutcome::Started
    }

    /// Refill the transmit queue. Call whenever the sink reports room,
    /// typically from the UART's queue-low interrupt.
    ///
    /// Encodes and enqueues source data until the queue has no room for a
    /// whole symbol group or the frame is exhausted, then waits for the
    /// queue to drain before going idle. Returns the state after the call
    /// so interrupt glue can disable its trigger once `Idle` is reached.
    ///
    /// `&mut self` already rules out overlap with `show`; interrupt glue
    /// sharing the driver with the main context must serialize access to
    /// uphold that (a critical section around the shared cell suffices).
    pub fn on_tx_ready(&mut self) -> DriverState {
        match self.state {
            DriverState::Streaming => {
                let done = match self.protocol {
                    PixelProtocol::Ws2811 | PixelProtocol::Sk6812Rgbw => self.fill_ws2811(),
                    PixelProtocol::Gece => self.fill_gece(),
                };
                if done {
                    self.state = DriverState::Draining;
                }
            }
            DriverState::Draining => {
                if self.sink.queue_free_slots() >= self.sink.queue_capacity() {
                    self.state = DriverState::Idle;
                }
            }
            DriverState::Idle | DriverState::Arming => {}
        }
        self.state
    }

    /// Encode channel bytes into the queue; true once the buffer is drained.
    fn fill_ws2811(&mut self) -> bool {
        let mut budget = self.sink.queue_free_slots() / WS2811_BYTES_PER_CHANNEL;
        while budget > 0 && self.cursor < self.data.len() {
            for byte in expand_ws2811(self.data[self.cursor]) {
                self.sink.enqueue(byte);
            }
            self.cursor += 1;
            budget -= 1;
        }
        self.cursor >= self.data.len()
    }

    /// Enqueue whole packets while they fit; true once every address is out.
    ///
    /// Inter-packet start/idle pacing is the sink's concern; the packets
    /// themselves carry no gap bytes.
    fn fill_gece(&mut self) -> bool {
        while self.cursor < self.num_pixels
            && self.sink.queue_free_slots() as usize >= GECE_PACKET_BITS
        {
            for byte in self.shadow {
                self.sink.enqueue(byte);
            }
            self.cursor += 1;
            if self.cursor < self.num_pixels {
                self.compose_packet(self.cursor);
            }
        }
        self.cursor >= self.num_pixels
    }

    /// Rebuild the shadow buffer with the packet for `address`.
    fn compose_packet(&mut self, address: usize) {
        let [r_off, g_off, b_off] = self.order.rgb_offsets();
        let base = address * self.protocol.channel_count();
        let packet = GecePacket::for_pixel(
            address as u8,
            self.gece_brightness,
            self.data[base + r_off],
            self.data[base + g_off],
            self.data[base + b_off],
        );
        packet.encode_into(&mut self.shadow);
    }

    /// Whether the buffer carries a white channel.
    pub fn has_white(&self) -> bool {
        self.protocol.channel_count() == 4
    }

    /// Read-only view of the channel buffer, in transmission order.
    pub fn data(&self) -> &[u8] {
        &self.data
    }

    /// Current engine state.
    pub fn state(&self) -> DriverState {
        self.state
    }

    /// Pixels on the string.
    pub fn num_pixels(&self) -> usize {
        self.num_pixels
    }

    /// Channels per pixel (3 or 4).
    pub fn channel_count(&self) -> usize {
        self.protocol.channel_count()
    }

    /// Minimum interval between transmission starts.
    pub fn refresh_interval(&self) -> Duration {
        self.refresh_interval
    }

    /// Access the sink, e.g. to drain it in tests or adjust the hardware.
    pub fn sink_mut(&mut self) -> &mut S {
        &mut self.sink
    }

    /// Tear down the driver and hand the sink back.
    pub fn into_sink(self) -> S {
        self.sink
    }
}
