//! Stock effect rotation
//!
//! Palettes and brightness levels for a festive strip: trains and rain at
//! three quarters brightness, stripes dimmed down since they light every
//! cell.

use fastrand::Rng;
use heapless::Vec;

use crate::color::{BLUE, CYAN, Color, DARK_GREEN, GREEN, MAGENTA, RED, WHITE, YELLOW};
use crate::effect::{
    EffectSlot, RainConfig, RainEffect, StarsConfig, StarsEffect, StripesConfig, StripesEffect,
    TrainsConfig, TrainsEffect,
};
use crate::frame::StripConfig;

/// Number of effects returned by [`christmas`]
pub const CHRISTMAS_EFFECTS: usize = 15;

pub const TRAINS_BRIGHTNESS: u8 = 191;
pub const STRIPES_BRIGHTNESS: u8 = 31;
pub const RAIN_BRIGHTNESS: u8 = 191;
pub const STARS_BRIGHTNESS: u8 = 191;

const STARS_MIN: usize = 10;
const STARS_MAX: usize = 25;

const TRAINS_PALETTES: [&[Color]; 4] = [
    &[BLUE, WHITE, CYAN],
    &[RED, WHITE],
    &[RED, GREEN],
    &[RED, WHITE, BLUE],
];

const STRIPES_PAIRS: [(Color, Color); 4] = [
    (WHITE, BLUE),
    (GREEN, RED),
    (RED, WHITE),
    (DARK_GREEN, YELLOW),
];

const RAIN_PALETTES: [&[Color]; 4] = [
    &[CYAN],
    &[BLUE, CYAN],
    &[WHITE, CYAN],
    &[RED, YELLOW, DARK_GREEN, BLUE, CYAN, MAGENTA],
];

const STARS_PALETTES: [&[Color]; 3] = [&[CYAN, WHITE], &[BLUE, CYAN, WHITE], &[YELLOW, WHITE]];

/// Build the full rotation for a strip
///
/// The brightness in `strip` is ignored; each family has its own level.
/// `rng` decides how many stars each stars effect gets.
pub fn christmas<const N: usize>(
    strip: &StripConfig,
    rng: &mut Rng,
) -> Vec<EffectSlot<N>, CHRISTMAS_EFFECTS> {
    let mut effects = Vec::new();

    let trains = strip.with_brightness(TRAINS_BRIGHTNESS);
    let stripes = strip.with_brightness(STRIPES_BRIGHTNESS);
    let rain = strip.with_brightness(RAIN_BRIGHTNESS);
    let stars = strip.with_brightness(STARS_BRIGHTNESS);

    for palette in TRAINS_PALETTES {
        let effect = TrainsEffect::new(&trains, TrainsConfig::new(palette));
        push(&mut effects, EffectSlot::Trains(effect));
    }

    for (color1, color2) in STRIPES_PAIRS {
        let effect = StripesEffect::new(&stripes, StripesConfig::new(color1, color2));
        push(&mut effects, EffectSlot::Stripes(effect));
    }

    for palette in RAIN_PALETTES {
        let effect = RainEffect::new(&rain, RainConfig::new(palette));
        push(&mut effects, EffectSlot::Rain(effect));
    }

    for palette in STARS_PALETTES {
        let count = rng.usize(STARS_MIN..=STARS_MAX);
        let effect = StarsEffect::new(&stars, StarsConfig::new(palette, count));
        push(&mut effects, EffectSlot::Stars(effect));
    }

    effects
}

fn push<const N: usize>(effects: &mut Vec<EffectSlot<N>, CHRISTMAS_EFFECTS>, slot: EffectSlot<N>) {
    if effects.push(slot).is_err() {
        panic!("preset list exceeded {CHRISTMAS_EFFECTS} effects");
    }
}
