//! Overscanned frame buffer
//!
//! The buffer is laid out as
//!
//! ```text
//! [0, overscan)                     lead-in overscan
//! [overscan, overscan + visible)    visible window
//! [overscan + visible, len)         trail-out overscan
//! ```
//!
//! Objects are rendered over the whole buffer so they can slide into and out
//! of the visible window without popping, but only the visible window is ever
//! flushed to the strip.

use crate::OutputDriver;
use crate::color::{BLACK, CHANNEL_BITS, Color};

/// Strip geometry and overall brightness shared by every effect
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct StripConfig {
    /// Number of LEDs on the physical strip
    pub visible: usize,
    /// Off-screen cells on each side of the visible window
    pub overscan: usize,
    /// Overall brightness (0-255)
    pub brightness: u8,
}

impl StripConfig {
    pub const fn new(visible: usize, overscan: usize, brightness: u8) -> Self {
        Self {
            visible,
            overscan,
            brightness,
        }
    }

    /// Same geometry with a different brightness
    #[must_use]
    pub const fn with_brightness(mut self, brightness: u8) -> Self {
        self.brightness = brightness;
        self
    }

    /// Total number of buffer cells, overscan included
    pub const fn len(self) -> usize {
        self.visible + self.overscan * 2
    }

    pub const fn is_empty(self) -> bool {
        self.len() == 0
    }
}

/// Fixed capacity buffer of packed colors with a visible window
///
/// `N` is the capacity; the used length is `visible + 2 * overscan`.
#[derive(Debug, Clone)]
pub struct FrameBuffer<const N: usize> {
    cells: [Color; N],
    visible: usize,
    overscan: usize,
}

impl<const N: usize> FrameBuffer<N> {
    /// Create a black buffer
    ///
    /// Panics if the strip does not fit into `N` cells.
    pub fn new(visible: usize, overscan: usize) -> Self {
        let len = visible + overscan * 2;
        assert!(
            len <= N,
            "frame of {len} cells does not fit into a buffer of {N}"
        );
        Self {
            cells: [BLACK; N],
            visible,
            overscan,
        }
    }

    pub fn from_config(config: &StripConfig) -> Self {
        Self::new(config.visible, config.overscan)
    }

    /// Number of cells in use, overscan included
    pub const fn len(&self) -> usize {
        self.visible + self.overscan * 2
    }

    pub const fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// First visible index
    pub const fn min(&self) -> usize {
        self.overscan
    }

    /// One past the last visible index
    pub const fn max(&self) -> usize {
        self.overscan + self.visible
    }

    pub const fn visible_len(&self) -> usize {
        self.visible
    }

    pub const fn overscan(&self) -> usize {
        self.overscan
    }

    /// Every cell in use, overscan included
    pub fn cells(&self) -> &[Color] {
        &self.cells[..self.len()]
    }

    pub fn cells_mut(&mut self) -> &mut [Color] {
        let len = self.len();
        &mut self.cells[..len]
    }

    /// The cells that reach the strip
    pub fn visible(&self) -> &[Color] {
        &self.cells[self.min()..self.max()]
    }

    pub fn get(&self, index: usize) -> Color {
        self.cells()[index]
    }

    pub fn set(&mut self, index: usize, color: Color) {
        self.cells_mut()[index] = color;
    }

    /// OR a color into a cell
    pub fn blend(&mut self, index: usize, color: Color) {
        self.cells_mut()[index] |= color;
    }

    /// Set the visible window to a single color
    pub fn clear(&mut self, color: Color) {
        let (min, max) = (self.min(), self.max());
        self.cells[min..max].fill(color);
    }

    /// Set every cell, overscan included, to a single color
    pub fn clear_all(&mut self, color: Color) {
        self.cells_mut().fill(color);
    }

    /// Fill every cell in index order
    pub fn fill_with<F>(&mut self, next: F)
    where
        F: FnMut() -> Color,
    {
        self.cells_mut().fill_with(next);
    }

    /// Scroll the buffer one cell towards index 0
    ///
    /// The first cell is dropped and the last cell is taken from `next`.
    pub fn shift_left<F>(&mut self, next: F)
    where
        F: FnOnce() -> Color,
    {
        let cells = self.cells_mut();
        let Some(last) = cells.len().checked_sub(1) else {
            return;
        };
        cells.copy_within(1.., 0);
        cells[last] = next();
    }

    /// Hand the visible window to the strip
    pub fn flush<D: OutputDriver>(&self, driver: &mut D) {
        driver.write(self.visible(), CHANNEL_BITS);
    }
}
