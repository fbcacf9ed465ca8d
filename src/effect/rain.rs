//! Rain effect
//!
//! Drops land at random cells and spread into a bar that grows to a random
//! size and then shrinks away again, like rain falling into a puddle.

use core::fmt;

use embassy_time::Duration;
use fastrand::Rng;
use heapless::Vec;

use super::{Effect, EffectState, Lifecycle, pick_color, roll_chance};
use crate::color::{BLACK, Color, PaletteDisplay};
use crate::falloff::intensity;
use crate::frame::{FrameBuffer, StripConfig};

/// Upper bound for `RainConfig::max_drops`
pub const MAX_DROPS: usize = 16;

const DEFAULT_MAX_DROPS: usize = 8;
const DEFAULT_SPAWN_CHANCE_PCT: u8 = 15;
const DEFAULT_MIN_SIZE: u8 = 5;
const DEFAULT_MAX_SIZE: u8 = 12;
const FRAME_WAIT_MS: u64 = 20;

/// Rain effect parameters
#[derive(Debug, Clone, Copy)]
pub struct RainConfig {
    /// Colors new drops are picked from
    pub palette: &'static [Color],
    /// Maximum number of drops at once
    pub max_drops: usize,
    /// Chance (percent) of a new drop per frame
    pub spawn_chance_pct: u8,
    /// Smallest peak radius
    pub min_size: u8,
    /// Largest peak radius
    pub max_size: u8,
}

impl RainConfig {
    pub const fn new(palette: &'static [Color]) -> Self {
        Self {
            palette,
            max_drops: DEFAULT_MAX_DROPS,
            spawn_chance_pct: DEFAULT_SPAWN_CHANCE_PCT,
            min_size: DEFAULT_MIN_SIZE,
            max_size: DEFAULT_MAX_SIZE,
        }
    }
}

/// A single splash
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RainDrop {
    pos: usize,
    color: Color,
    max_size: u8,
    current_size: u8,
    target_size: u8,
}

impl RainDrop {
    /// A fresh drop with no size that will grow to `max_size`
    pub const fn new(pos: usize, color: Color, max_size: u8) -> Self {
        Self {
            pos,
            color,
            max_size,
            current_size: 0,
            target_size: max_size,
        }
    }

    pub const fn pos(&self) -> usize {
        self.pos
    }

    pub const fn color(&self) -> Color {
        self.color
    }

    pub const fn max_size(&self) -> u8 {
        self.max_size
    }

    pub const fn current_size(&self) -> u8 {
        self.current_size
    }

    pub const fn target_size(&self) -> u8 {
        self.target_size
    }

    /// Grow towards the target; once reached, the target drops to 0 and the
    /// drop shrinks away
    pub fn advance(&mut self) {
        if self.current_size < self.target_size {
            self.current_size += 1;
            if self.current_size >= self.target_size {
                self.target_size = 0;
            }
        } else if self.current_size > 0 {
            self.current_size -= 1;
        }
    }

    /// Collapsed and not growing again
    pub const fn finished(&self) -> bool {
        self.current_size == 0 && self.target_size == 0
    }

    /// Color `offset` cells away from the center
    pub fn color_at_offset(&self, offset: u8) -> Color {
        let remaining = self.current_size.saturating_sub(offset);
        let luma = intensity(
            f32::from(self.max_size.saturating_sub(remaining)),
            f32::from(self.max_size),
        );
        self.color.scale(luma)
    }
}

/// Rain effect
#[derive(Debug, Clone)]
pub struct RainEffect<const N: usize> {
    frame: FrameBuffer<N>,
    config: RainConfig,
    brightness: u8,
    drops: Vec<RainDrop, MAX_DROPS>,
    lifecycle: Lifecycle,
}

impl<const N: usize> RainEffect<N> {
    pub fn new(strip: &StripConfig, config: RainConfig) -> Self {
        assert!(!config.palette.is_empty(), "rain needs at least one color");
        assert!(
            config.max_drops <= MAX_DROPS,
            "at most {MAX_DROPS} drops are supported"
        );
        assert!(0 < config.min_size && config.min_size <= config.max_size);
        assert!(strip.visible > 0, "rain needs a visible window");

        Self {
            frame: FrameBuffer::from_config(strip),
            config,
            brightness: strip.brightness,
            drops: Vec::new(),
            lifecycle: Lifecycle::default(),
        }
    }

    pub fn frame(&self) -> &FrameBuffer<N> {
        &self.frame
    }

    pub fn config(&self) -> &RainConfig {
        &self.config
    }

    pub fn drops(&self) -> &[RainDrop] {
        &self.drops
    }

    /// Put a drop on the strip directly
    ///
    /// Returns the drop if the population is already at its maximum.
    pub fn spawn(&mut self, drop: RainDrop) -> Result<(), RainDrop> {
        if self.drops.len() >= self.config.max_drops {
            return Err(drop);
        }
        self.drops.push(drop)
    }

    fn spawn_random(&mut self, rng: &mut Rng) {
        let pos = rng.usize(self.frame.min()..self.frame.max());
        let color = pick_color(self.config.palette, rng);
        let max_size = rng.u8(self.config.min_size..=self.config.max_size);

        if self.spawn(RainDrop::new(pos, color, max_size)).is_err() {
            panic!("drop population exceeded its maximum");
        }
    }
}

impl<const N: usize> Effect for RainEffect<N> {
    fn reinit(&mut self, _rng: &mut Rng) {
        self.lifecycle = Lifecycle::Active;
        self.drops.clear();
        self.frame.clear_all(BLACK);
    }

    fn render(&mut self) {
        self.frame.clear_all(BLACK);

        let (min, max) = (self.frame.min(), self.frame.max());
        for drop in &self.drops {
            for offset in 0..drop.current_size {
                let color = drop.color_at_offset(offset).scale(self.brightness);
                let offset = usize::from(offset);

                if let Some(led) = drop.pos.checked_sub(offset).filter(|led| *led >= min) {
                    self.frame.blend(led, color);
                }
                let led = drop.pos + offset;
                if led < max {
                    self.frame.blend(led, color);
                }
            }
        }
    }

    fn advance(&mut self, rng: &mut Rng) {
        for drop in &mut self.drops {
            drop.advance();
        }

        let mut i = 0;
        while i < self.drops.len() {
            if self.drops[i].finished() {
                self.drops.swap_remove(i);
            } else {
                i += 1;
            }
        }

        if !self.lifecycle.is_expired()
            && self.drops.len() < self.config.max_drops
            && roll_chance(rng, self.config.spawn_chance_pct)
        {
            self.spawn_random(rng);
        }

        debug_assert!(self.drops.len() <= self.config.max_drops);
    }

    fn wait(&self) -> Duration {
        Duration::from_millis(FRAME_WAIT_MS)
    }

    fn set_expired(&mut self) {
        self.lifecycle = Lifecycle::Expired;
    }

    fn is_finished(&self) -> bool {
        self.drops.is_empty()
    }

    fn state(&self) -> EffectState {
        self.lifecycle.state(self.is_finished())
    }
}

impl<const N: usize> fmt::Display for RainEffect<N> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Rain({})", PaletteDisplay(self.config.palette))
    }
}
