//! Effect system with compile-time known effect variants
//!
//! All effects are stored in an enum to avoid heap allocations.
//! Each effect implements the `Effect` trait and owns its frame buffer and
//! object population exclusively.

mod rain;
mod stars;
mod stripes;
mod trains;

use core::fmt;

use embassy_time::Duration;
use fastrand::Rng;
pub use rain::{MAX_DROPS, RainConfig, RainDrop, RainEffect};
pub use stars::{
    MAX_STARS, STAR_LUMA_DELTA, STAR_MAX_LUMA, STAR_MIN_LUMA, Star, StarsConfig, StarsEffect,
};
pub use stripes::{StripesConfig, StripesEffect};
pub use trains::{MAX_TRAINS, Train, TrainsConfig, TrainsEffect};

use crate::OutputDriver;
use crate::color::Color;
use crate::frame::FrameBuffer;

/// Externally observable effect state
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum EffectState {
    /// Never reinitialized
    Uninitialized,
    /// Running and spawning
    Active,
    /// Expired, existing objects still draining
    Expiring,
    /// Expired and drained
    Finished,
}

/// Internal lifecycle marker kept by every effect
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub(crate) enum Lifecycle {
    #[default]
    Uninitialized,
    Active,
    Expired,
}

impl Lifecycle {
    pub(crate) const fn is_expired(self) -> bool {
        matches!(self, Self::Expired)
    }

    /// Resolve the public state given whether the population has drained
    pub(crate) const fn state(self, finished: bool) -> EffectState {
        match self {
            Self::Uninitialized => EffectState::Uninitialized,
            Self::Active => EffectState::Active,
            Self::Expired if finished => EffectState::Finished,
            Self::Expired => EffectState::Expiring,
        }
    }
}

pub trait Effect {
    /// Reset the effect for a new run
    ///
    /// Must be called before the first use and before every reuse.
    fn reinit(&mut self, rng: &mut Rng);

    /// Render the current state into the frame buffer
    ///
    /// Rendering twice without advancing yields the same buffer.
    fn render(&mut self);

    /// Animate by one frame: move objects, drop exhausted ones and maybe
    /// spawn a new one
    fn advance(&mut self, rng: &mut Rng);

    /// Delay to insert after this frame
    fn wait(&self) -> Duration {
        Duration::from_millis(0)
    }

    /// Stop spawning so the effect can drain
    fn set_expired(&mut self);

    /// Whether the director can move on to the next effect
    fn is_finished(&self) -> bool {
        true
    }

    fn state(&self) -> EffectState;
}

/// Effect slot - enum containing all possible effects
#[derive(Debug, Clone)]
pub enum EffectSlot<const N: usize> {
    /// Bars of light whizzing along the strip
    Trains(TrainsEffect<N>),
    /// Two-color marquee
    Stripes(StripesEffect<N>),
    /// Drops splashing open and closing again
    Rain(RainEffect<N>),
    /// Twinkling fixed points
    Stars(StarsEffect<N>),
}

/// Known effect kinds
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum EffectKind {
    Trains,
    Stripes,
    Rain,
    Stars,
}

impl<const N: usize> EffectSlot<N> {
    pub fn kind(&self) -> EffectKind {
        match self {
            Self::Trains(_) => EffectKind::Trains,
            Self::Stripes(_) => EffectKind::Stripes,
            Self::Rain(_) => EffectKind::Rain,
            Self::Stars(_) => EffectKind::Stars,
        }
    }

    pub fn frame(&self) -> &FrameBuffer<N> {
        match self {
            Self::Trains(effect) => effect.frame(),
            Self::Stripes(effect) => effect.frame(),
            Self::Rain(effect) => effect.frame(),
            Self::Stars(effect) => effect.frame(),
        }
    }

    /// Number of live objects (always 0 for stripes)
    pub fn population(&self) -> usize {
        match self {
            Self::Trains(effect) => effect.trains().len(),
            Self::Stripes(_) => 0,
            Self::Rain(effect) => effect.drops().len(),
            Self::Stars(effect) => effect.stars().len(),
        }
    }

    pub fn reinit(&mut self, rng: &mut Rng) {
        match self {
            Self::Trains(effect) => effect.reinit(rng),
            Self::Stripes(effect) => effect.reinit(rng),
            Self::Rain(effect) => effect.reinit(rng),
            Self::Stars(effect) => effect.reinit(rng),
        }
    }

    pub fn render(&mut self) {
        match self {
            Self::Trains(effect) => effect.render(),
            Self::Stripes(effect) => effect.render(),
            Self::Rain(effect) => effect.render(),
            Self::Stars(effect) => effect.render(),
        }
    }

    pub fn advance(&mut self, rng: &mut Rng) {
        match self {
            Self::Trains(effect) => effect.advance(rng),
            Self::Stripes(effect) => effect.advance(rng),
            Self::Rain(effect) => effect.advance(rng),
            Self::Stars(effect) => effect.advance(rng),
        }
    }

    pub fn wait(&self) -> Duration {
        match self {
            Self::Trains(effect) => effect.wait(),
            Self::Stripes(effect) => effect.wait(),
            Self::Rain(effect) => effect.wait(),
            Self::Stars(effect) => effect.wait(),
        }
    }

    pub fn set_expired(&mut self) {
        match self {
            Self::Trains(effect) => effect.set_expired(),
            Self::Stripes(effect) => effect.set_expired(),
            Self::Rain(effect) => effect.set_expired(),
            Self::Stars(effect) => effect.set_expired(),
        }
    }

    pub fn is_finished(&self) -> bool {
        match self {
            Self::Trains(effect) => effect.is_finished(),
            Self::Stripes(effect) => effect.is_finished(),
            Self::Rain(effect) => effect.is_finished(),
            Self::Stars(effect) => effect.is_finished(),
        }
    }

    pub fn state(&self) -> EffectState {
        match self {
            Self::Trains(effect) => effect.state(),
            Self::Stripes(effect) => effect.state(),
            Self::Rain(effect) => effect.state(),
            Self::Stars(effect) => effect.state(),
        }
    }

    /// Flush the visible window of the last rendered frame
    pub fn flush<D: OutputDriver>(&self, driver: &mut D) {
        self.frame().flush(driver);
    }

    /// Run one complete frame: render, flush, advance, then report the wait
    ///
    /// Rendering happens before advancing so the flushed frame shows the
    /// positions that removal and spawning are decided on.
    pub fn cycle<D: OutputDriver>(&mut self, driver: &mut D, rng: &mut Rng) -> Duration {
        self.render();
        self.flush(driver);
        self.advance(rng);
        self.wait()
    }
}

impl<const N: usize> From<TrainsEffect<N>> for EffectSlot<N> {
    fn from(effect: TrainsEffect<N>) -> Self {
        Self::Trains(effect)
    }
}

impl<const N: usize> From<StripesEffect<N>> for EffectSlot<N> {
    fn from(effect: StripesEffect<N>) -> Self {
        Self::Stripes(effect)
    }
}

impl<const N: usize> From<RainEffect<N>> for EffectSlot<N> {
    fn from(effect: RainEffect<N>) -> Self {
        Self::Rain(effect)
    }
}

impl<const N: usize> From<StarsEffect<N>> for EffectSlot<N> {
    fn from(effect: StarsEffect<N>) -> Self {
        Self::Stars(effect)
    }
}

impl<const N: usize> fmt::Display for EffectSlot<N> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Trains(effect) => fmt::Display::fmt(effect, f),
            Self::Stripes(effect) => fmt::Display::fmt(effect, f),
            Self::Rain(effect) => fmt::Display::fmt(effect, f),
            Self::Stars(effect) => fmt::Display::fmt(effect, f),
        }
    }
}

/// Pick a color from a palette
///
/// Palettes are checked to be non-empty when an effect is constructed.
pub(crate) fn pick_color(palette: &[Color], rng: &mut Rng) -> Color {
    palette[rng.usize(..palette.len())]
}

/// Weighted coin flip: `true` with a probability of `chance_pct` percent
pub(crate) fn roll_chance(rng: &mut Rng, chance_pct: u8) -> bool {
    rng.u8(1..=100) <= chance_pct
}
