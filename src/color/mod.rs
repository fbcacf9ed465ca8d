//! Packed colors
//!
//! Colors are stored as a single `u32` in `0x00RRGGBB` order. Overlapping
//! objects are composited with a bitwise OR of the packed value, not with
//! additive blending, so bright overlaps can saturate individual bits.

mod named;

use core::fmt;
use core::ops::{BitOr, BitOrAssign};

pub use named::{
    BLACK, BLUE, CYAN, DARK_GREEN, GREEN, MAGENTA, PaletteDisplay, RED, WHITE, YELLOW,
};
use smart_leds::RGB8;

/// Channel type used by `smart-leds` drivers
pub type Rgb = RGB8;

/// Number of bits per channel handed to the output driver
pub const CHANNEL_BITS: u8 = 8;

/// Three channel color packed into an integer
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub struct Color(u32);

impl Color {
    /// Create a color from its channels
    pub const fn new(r: u8, g: u8, b: u8) -> Self {
        Self(((r as u32) << 16) | ((g as u32) << 8) | b as u32)
    }

    /// Create a color from a `0xRRGGBB` value
    ///
    /// Bits above the low 24 are discarded.
    pub const fn from_u32(value: u32) -> Self {
        Self(value & 0x00FF_FFFF)
    }

    /// Packed `0x00RRGGBB` value
    pub const fn to_u32(self) -> u32 {
        self.0
    }

    #[allow(clippy::cast_possible_truncation)]
    pub const fn r(self) -> u8 {
        (self.0 >> 16) as u8
    }

    #[allow(clippy::cast_possible_truncation)]
    pub const fn g(self) -> u8 {
        (self.0 >> 8) as u8
    }

    #[allow(clippy::cast_possible_truncation)]
    pub const fn b(self) -> u8 {
        self.0 as u8
    }

    pub const fn is_black(self) -> bool {
        self.0 == 0
    }

    /// Scale every channel by `luma` (0-255)
    ///
    /// Each channel becomes `floor(channel * luma / 255)`, so `0` yields
    /// black and `255` returns the color unchanged.
    #[must_use]
    pub const fn scale(self, luma: u8) -> Self {
        Self::new(
            scale_channel(self.r(), luma),
            scale_channel(self.g(), luma),
            scale_channel(self.b(), luma),
        )
    }

    /// Pack the channels in `0x00GGRRBB` order, as WS2812 strips expect them
    pub const fn to_grb(self) -> u32 {
        ((self.g() as u32) << 16) | ((self.r() as u32) << 8) | self.b() as u32
    }

    /// Convert to the `smart-leds` channel struct
    pub const fn to_rgb(self) -> Rgb {
        Rgb {
            r: self.r(),
            g: self.g(),
            b: self.b(),
        }
    }
}

#[inline]
#[allow(clippy::cast_possible_truncation)]
const fn scale_channel(channel: u8, luma: u8) -> u8 {
    (channel as u16 * luma as u16 / 255) as u8
}

/// Composite every color that contributes to one cell
pub fn combine<I>(colors: I) -> Color
where
    I: IntoIterator<Item = Color>,
{
    colors.into_iter().fold(BLACK, |acc, color| acc | color)
}

impl BitOr for Color {
    type Output = Self;

    fn bitor(self, rhs: Self) -> Self {
        Self(self.0 | rhs.0)
    }
}

impl BitOrAssign for Color {
    fn bitor_assign(&mut self, rhs: Self) {
        self.0 |= rhs.0;
    }
}

impl From<Rgb> for Color {
    fn from(rgb: Rgb) -> Self {
        Self::new(rgb.r, rgb.g, rgb.b)
    }
}

impl From<Color> for Rgb {
    fn from(color: Color) -> Self {
        color.to_rgb()
    }
}

impl fmt::Display for Color {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "0x{:06x}", self.0)
    }
}
