//! Stripes effect
//!
//! Alternating bands of two colors marching along the strip. There are no
//! objects: the frame buffer itself is the state, and every frame scrolls it
//! by one cell and computes only the newly exposed cell.

use core::fmt;

use embassy_time::Duration;
use fastrand::Rng;

use super::{Effect, EffectState, Lifecycle};
use crate::color::Color;
use crate::frame::{FrameBuffer, StripConfig};

const MIN_WIDTH: usize = 6;
const MAX_WIDTH: usize = 16;
const MIN_WAIT_MS: u64 = 20;
const MAX_WAIT_MS: u64 = 80;

/// Stripes effect parameters
#[derive(Debug, Clone, Copy)]
pub struct StripesConfig {
    pub color1: Color,
    pub color2: Color,
    /// Band width in cells; random per run when `None`
    pub width: Option<usize>,
    /// Frame delay; random per run when `None`
    pub wait: Option<Duration>,
}

impl StripesConfig {
    pub const fn new(color1: Color, color2: Color) -> Self {
        Self {
            color1,
            color2,
            width: None,
            wait: None,
        }
    }

    #[must_use]
    pub const fn with_width(mut self, width: usize) -> Self {
        self.width = Some(width);
        self
    }

    #[must_use]
    pub const fn with_wait(mut self, wait: Duration) -> Self {
        self.wait = Some(wait);
        self
    }
}

/// Position inside one period of `width` cells of each color
#[derive(Debug, Clone, Copy)]
struct Bands {
    color1: Color,
    color2: Color,
    width: usize,
    offset: usize,
}

impl Bands {
    fn next_color(&mut self) -> Color {
        let color = if self.offset < self.width {
            self.color1
        } else {
            self.color2
        };
        self.offset += 1;
        if self.offset >= self.width * 2 {
            self.offset = 0;
        }
        color
    }
}

/// Stripes effect
#[derive(Debug, Clone)]
pub struct StripesEffect<const N: usize> {
    frame: FrameBuffer<N>,
    config: StripesConfig,
    bands: Bands,
    wait: Duration,
    lifecycle: Lifecycle,
}

impl<const N: usize> StripesEffect<N> {
    pub fn new(strip: &StripConfig, config: StripesConfig) -> Self {
        assert!(
            config.width.is_none_or(|width| width > 0),
            "stripes need a non-zero width"
        );

        Self {
            frame: FrameBuffer::from_config(strip),
            bands: Bands {
                color1: config.color1.scale(strip.brightness),
                color2: config.color2.scale(strip.brightness),
                width: config.width.unwrap_or(MIN_WIDTH),
                offset: 0,
            },
            config,
            wait: config.wait.unwrap_or(Duration::from_millis(MIN_WAIT_MS)),
            lifecycle: Lifecycle::default(),
        }
    }

    pub fn frame(&self) -> &FrameBuffer<N> {
        &self.frame
    }

    pub fn config(&self) -> &StripesConfig {
        &self.config
    }

    /// Band width chosen for the current run
    pub fn width(&self) -> usize {
        self.bands.width
    }

    /// Offset of the next cell to be exposed within one `2 * width` period
    pub fn phase(&self) -> usize {
        self.bands.offset
    }
}

impl<const N: usize> Effect for StripesEffect<N> {
    fn reinit(&mut self, rng: &mut Rng) {
        self.lifecycle = Lifecycle::Active;
        self.bands.width = self
            .config
            .width
            .unwrap_or_else(|| rng.usize(MIN_WIDTH..=MAX_WIDTH));
        self.wait = self
            .config
            .wait
            .unwrap_or_else(|| Duration::from_millis(rng.u64(MIN_WAIT_MS..=MAX_WAIT_MS)));
        self.bands.offset = 0;

        let bands = &mut self.bands;
        self.frame.fill_with(|| bands.next_color());
    }

    fn render(&mut self) {
        // The buffer already holds the pattern
    }

    fn advance(&mut self, _rng: &mut Rng) {
        let bands = &mut self.bands;
        self.frame.shift_left(|| bands.next_color());
    }

    fn wait(&self) -> Duration {
        self.wait
    }

    fn set_expired(&mut self) {
        self.lifecycle = Lifecycle::Expired;
    }

    fn state(&self) -> EffectState {
        self.lifecycle.state(true)
    }
}

impl<const N: usize> fmt::Display for StripesEffect<N> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Stripes({}, {})", self.config.color1, self.config.color2)
    }
}
