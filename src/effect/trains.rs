//! Trains effect
//!
//! Short bars of light in different colors whizz along the strip at different
//! speeds. They enter from the lead-in overscan, leave through the trail-out
//! overscan and are OR-ed together where they overlap.

use core::fmt;

use embassy_time::Duration;
use fastrand::Rng;
use heapless::Vec;

use super::{Effect, EffectState, Lifecycle, pick_color, roll_chance};
use crate::color::{BLACK, Color, PaletteDisplay};
use crate::falloff::intensity;
use crate::frame::{FrameBuffer, StripConfig};

/// Upper bound for `TrainsConfig::max_trains`
pub const MAX_TRAINS: usize = 16;

const DEFAULT_MAX_TRAINS: usize = 4;
const DEFAULT_SPAWN_CHANCE_PCT: u8 = 18;
const DEFAULT_MIN_WIDTH: u16 = 8;
const DEFAULT_MAX_WIDTH: u16 = 24;
const DEFAULT_SPEEDS: [f32; 3] = [0.5, 1.0, 2.0];

/// Trains effect parameters
#[derive(Debug, Clone, Copy)]
pub struct TrainsConfig {
    /// Colors new trains are picked from
    pub palette: &'static [Color],
    /// Maximum number of trains on the strip at once
    pub max_trains: usize,
    /// Chance (percent) of a new train per frame
    pub spawn_chance_pct: u8,
    /// Narrowest train, in cells
    pub min_width: u16,
    /// Widest train, in cells
    pub max_width: u16,
    /// Cells per frame a new train can travel at
    pub speeds: &'static [f32],
}

impl TrainsConfig {
    pub const fn new(palette: &'static [Color]) -> Self {
        Self {
            palette,
            max_trains: DEFAULT_MAX_TRAINS,
            spawn_chance_pct: DEFAULT_SPAWN_CHANCE_PCT,
            min_width: DEFAULT_MIN_WIDTH,
            max_width: DEFAULT_MAX_WIDTH,
            speeds: &DEFAULT_SPEEDS,
        }
    }
}

/// A single bar of light
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Train {
    color: Color,
    half_width: f32,
    speed: f32,
    pos: f32,
}

impl Train {
    /// Create a train centered on `pos`
    ///
    /// Odd widths lose their last cell: the half width is `width / 2`.
    pub fn new(color: Color, width: u16, speed: f32, pos: f32) -> Self {
        Self {
            color,
            half_width: f32::from(width / 2),
            speed,
            pos,
        }
    }

    pub const fn color(&self) -> Color {
        self.color
    }

    pub const fn pos(&self) -> f32 {
        self.pos
    }

    pub const fn half_width(&self) -> f32 {
        self.half_width
    }

    pub const fn speed(&self) -> f32 {
        self.speed
    }

    /// Trailing edge
    pub fn min(&self) -> f32 {
        self.pos - self.half_width
    }

    /// Leading edge
    pub fn max(&self) -> f32 {
        self.pos + self.half_width
    }

    pub fn advance(&mut self) {
        self.pos += self.speed;
    }

    /// Color this train contributes to cell `p`
    #[allow(clippy::cast_precision_loss)]
    pub fn color_at(&self, p: i32) -> Color {
        let distance = libm::fabsf(self.pos - p as f32);
        self.color.scale(intensity(distance, self.half_width))
    }
}

/// Trains effect
#[derive(Debug, Clone)]
pub struct TrainsEffect<const N: usize> {
    frame: FrameBuffer<N>,
    config: TrainsConfig,
    brightness: u8,
    trains: Vec<Train, MAX_TRAINS>,
    lifecycle: Lifecycle,
}

impl<const N: usize> TrainsEffect<N> {
    pub fn new(strip: &StripConfig, config: TrainsConfig) -> Self {
        assert!(!config.palette.is_empty(), "trains need at least one color");
        assert!(
            !config.speeds.is_empty() && config.speeds.iter().all(|speed| *speed > 0.0),
            "trains need positive speeds to leave the strip"
        );
        assert!(
            config.max_trains <= MAX_TRAINS,
            "at most {MAX_TRAINS} trains are supported"
        );
        assert!(
            config.min_width >= 2,
            "trains narrower than 2 cells have no visible body"
        );
        assert!(config.min_width <= config.max_width);

        Self {
            frame: FrameBuffer::from_config(strip),
            config,
            brightness: strip.brightness,
            trains: Vec::new(),
            lifecycle: Lifecycle::default(),
        }
    }

    pub fn frame(&self) -> &FrameBuffer<N> {
        &self.frame
    }

    pub fn config(&self) -> &TrainsConfig {
        &self.config
    }

    pub fn trains(&self) -> &[Train] {
        &self.trains
    }

    /// Put a train on the strip directly
    ///
    /// Returns the train if the population is already at its maximum.
    pub fn spawn(&mut self, train: Train) -> Result<(), Train> {
        if self.trains.len() >= self.config.max_trains {
            return Err(train);
        }
        self.trains.push(train)
    }

    fn spawn_random(&mut self, rng: &mut Rng) {
        let width = rng.u16(self.config.min_width..=self.config.max_width);
        let speed = self.config.speeds[rng.usize(..self.config.speeds.len())];
        let color = pick_color(self.config.palette, rng);
        // Leading edge starts at or before the first buffer cell
        let pos = -f32::from(width.div_ceil(2));

        if self.spawn(Train::new(color, width, speed, pos)).is_err() {
            panic!("train population exceeded its maximum");
        }
    }
}

impl<const N: usize> Effect for TrainsEffect<N> {
    fn reinit(&mut self, _rng: &mut Rng) {
        self.lifecycle = Lifecycle::Active;
        self.trains.clear();
        self.frame.clear_all(BLACK);
    }

    #[allow(
        clippy::cast_possible_truncation,
        clippy::cast_sign_loss,
        clippy::cast_precision_loss,
        clippy::cast_possible_wrap
    )]
    fn render(&mut self) {
        self.frame.clear_all(BLACK);

        let len = self.frame.len() as f32;
        for train in &self.trains {
            let start = libm::floorf(train.min()).max(0.0) as usize;
            let end = libm::ceilf(train.max()).min(len) as usize;
            for led in start..end {
                let color = train.color_at(led as i32).scale(self.brightness);
                self.frame.blend(led, color);
            }
        }
    }

    #[allow(clippy::cast_precision_loss)]
    fn advance(&mut self, rng: &mut Rng) {
        for train in &mut self.trains {
            train.advance();
        }

        // Gone once the trailing edge has passed the far end of the window
        let far_edge = self.frame.max() as f32;
        let mut i = 0;
        while i < self.trains.len() {
            if self.trains[i].min() > far_edge {
                self.trains.swap_remove(i);
            } else {
                i += 1;
            }
        }

        if !self.lifecycle.is_expired()
            && self.trains.len() < self.config.max_trains
            && roll_chance(rng, self.config.spawn_chance_pct)
        {
            self.spawn_random(rng);
        }

        debug_assert!(self.trains.len() <= self.config.max_trains);
    }

    fn wait(&self) -> Duration {
        Duration::from_millis(0)
    }

    fn set_expired(&mut self) {
        self.lifecycle = Lifecycle::Expired;
    }

    fn is_finished(&self) -> bool {
        self.trains.is_empty()
    }

    fn state(&self) -> EffectState {
        self.lifecycle.state(self.is_finished())
    }
}

impl<const N: usize> fmt::Display for TrainsEffect<N> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Trains(colors={})", PaletteDisplay(self.config.palette))
    }
}
