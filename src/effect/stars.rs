//! Stars effect
//!
//! A fixed set of points twinkling between two brightness levels. Each star
//! is a bounded oscillator: its luma moves by a constant step every frame and
//! bounces off the limits.

use core::fmt;

use embassy_time::Duration;
use fastrand::Rng;
use heapless::Vec;

use super::{Effect, EffectState, Lifecycle, pick_color};
use crate::color::{BLACK, Color, PaletteDisplay};
use crate::frame::{FrameBuffer, StripConfig};

/// Upper bound for `StarsConfig::count`
pub const MAX_STARS: usize = 32;

/// Dimmest a star gets
pub const STAR_MIN_LUMA: u8 = 0;
/// Brightest a star gets
pub const STAR_MAX_LUMA: u8 = 191;
/// Luma change per frame
pub const STAR_LUMA_DELTA: i16 = 16;

const FRAME_WAIT_MS: u64 = 50;

/// Stars effect parameters
#[derive(Debug, Clone, Copy)]
pub struct StarsConfig {
    /// Colors stars are picked from
    pub palette: &'static [Color],
    /// Number of stars per run
    pub count: usize,
}

impl StarsConfig {
    pub const fn new(palette: &'static [Color], count: usize) -> Self {
        Self { palette, count }
    }
}

/// A single twinkling point
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Star {
    pos: usize,
    color: Color,
    luma: u8,
    luma_delta: i16,
}

impl Star {
    /// A star that starts out getting brighter
    pub const fn new(pos: usize, color: Color, luma: u8) -> Self {
        Self {
            pos,
            color,
            luma,
            luma_delta: STAR_LUMA_DELTA,
        }
    }

    pub const fn pos(&self) -> usize {
        self.pos
    }

    pub const fn luma(&self) -> u8 {
        self.luma
    }

    pub const fn luma_delta(&self) -> i16 {
        self.luma_delta
    }

    /// Current color at the current luma
    pub const fn color(&self) -> Color {
        self.color.scale(self.luma)
    }

    /// Step the luma, reversing direction at either limit
    #[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
    pub fn twinkle(&mut self) {
        let luma = (i16::from(self.luma) + self.luma_delta)
            .clamp(i16::from(STAR_MIN_LUMA), i16::from(STAR_MAX_LUMA));
        self.luma = luma as u8;
        if self.luma <= STAR_MIN_LUMA || self.luma >= STAR_MAX_LUMA {
            self.luma_delta = -self.luma_delta;
        }
    }
}

/// Stars effect
#[derive(Debug, Clone)]
pub struct StarsEffect<const N: usize> {
    frame: FrameBuffer<N>,
    config: StarsConfig,
    brightness: u8,
    stars: Vec<Star, MAX_STARS>,
    lifecycle: Lifecycle,
}

impl<const N: usize> StarsEffect<N> {
    pub fn new(strip: &StripConfig, config: StarsConfig) -> Self {
        assert!(!config.palette.is_empty(), "stars need at least one color");
        assert!(
            config.count <= MAX_STARS,
            "at most {MAX_STARS} stars are supported"
        );
        assert!(strip.visible > 0, "stars need a visible window");

        Self {
            frame: FrameBuffer::from_config(strip),
            config,
            brightness: strip.brightness,
            stars: Vec::new(),
            lifecycle: Lifecycle::default(),
        }
    }

    pub fn frame(&self) -> &FrameBuffer<N> {
        &self.frame
    }

    pub fn config(&self) -> &StarsConfig {
        &self.config
    }

    pub fn stars(&self) -> &[Star] {
        &self.stars
    }
}

impl<const N: usize> Effect for StarsEffect<N> {
    fn reinit(&mut self, rng: &mut Rng) {
        self.lifecycle = Lifecycle::Active;
        self.frame.clear_all(BLACK);
        self.stars.clear();

        for _ in 0..self.config.count {
            let pos = rng.usize(self.frame.min()..self.frame.max());
            let color = pick_color(self.config.palette, rng);
            let luma = rng.u8(STAR_MIN_LUMA..STAR_MAX_LUMA);
            if self.stars.push(Star::new(pos, color, luma)).is_err() {
                panic!("star population exceeded its maximum");
            }
        }
    }

    fn render(&mut self) {
        self.frame.clear(BLACK);
        for star in &self.stars {
            self.frame.blend(star.pos, star.color().scale(self.brightness));
        }
    }

    fn advance(&mut self, _rng: &mut Rng) {
        for star in &mut self.stars {
            star.twinkle();
        }
    }

    fn wait(&self) -> Duration {
        Duration::from_millis(FRAME_WAIT_MS)
    }

    fn set_expired(&mut self) {
        self.lifecycle = Lifecycle::Expired;
    }

    fn state(&self) -> EffectState {
        self.lifecycle.state(true)
    }
}

impl<const N: usize> fmt::Display for StarsEffect<N> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Stars(colors={}, num_stars={})",
            PaletteDisplay(self.config.palette),
            self.config.count
        )
    }
}
