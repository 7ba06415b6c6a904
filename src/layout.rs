//! Group and zigzag addressing transforms.
//!
//! Pure index maps between the caller's visual pixel positions and the
//! positions pixels occupy along the wire. Grouping drives several wired
//! pixels from one logical value; zigzag compensates for serpentine wiring
//! where every other run of pixels is soldered in reverse.

use core::ops::Range;

/// Group/zigzag layout parameters.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct Layout {
    group: u16,
    zigzag: u16,
}

impl Default for Layout {
    fn default() -> Self {
        Self::new(1, 0)
    }
}

impl Layout {
    /// Create a layout; `group` is clamped to at least 1, `zigzag = 0`
    /// disables direction reversal.
    pub const fn new(group: u16, zigzag: u16) -> Self {
        let group = if group == 0 { 1 } else { group };
        Self { group, zigzag }
    }

    /// Physical pixels driven by one logical pixel.
    pub const fn group(self) -> u16 {
        self.group
    }

    /// Physical pixels per visual row, 0 when zigzag is disabled.
    pub const fn zigzag(self) -> u16 {
        self.zigzag
    }

    /// Physical pixel positions covered by `logical`.
    pub const fn physical_range(self, logical: usize) -> Range<usize> {
        let start = logical * self.group as usize;
        start..start + self.group as usize
    }

    /// Map a visual pixel position to its position along the wire.
    ///
    /// Within every odd run of `zigzag` pixels the order reverses. The map
    /// is an involution, so it converts in both directions.
    pub const fn wired_index(self, visual: usize) -> usize {
        if self.zigzag == 0 {
            return visual;
        }
        let run = self.zigzag as usize;
        if (visual / run) % 2 == 1 {
            let run_start = run * (visual / run);
            run_start + (run - 1 - visual % run)
        } else {
            visual
        }
    }
}
