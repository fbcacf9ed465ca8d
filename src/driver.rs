//! Interfaces to the hardware around the engine
//!
//! The engine only ever pushes data outwards: a flushed frame goes to an
//! [`OutputDriver`] and the director's state goes to [`StatusIndicators`].

use smart_leds::SmartLedsWrite;

use crate::color::{CHANNEL_BITS, Color, Rgb};

/// Abstract LED driver trait
///
/// Implement this trait to support different hardware platforms.
/// The engine is generic over this trait and never waits for an
/// acknowledgement.
pub trait OutputDriver {
    /// Write colors to the LED strip
    ///
    /// `bits` is the width of a single channel.
    fn write(&mut self, colors: &[Color], bits: u8);
}

/// Status outputs driven by the director
pub trait StatusIndicators {
    /// Toggled once per frame while the director is running
    fn heartbeat(&mut self);

    /// Expiry light: blinks while the current effect is about to expire,
    /// stays lit while an expired effect drains and is off otherwise.
    fn set_expiry(&mut self, lit: bool);
}

impl StatusIndicators for () {
    fn heartbeat(&mut self) {}

    fn set_expiry(&mut self, _lit: bool) {}
}

/// Adapter for any `smart-leds` writer
///
/// Write errors are dropped: a stalled strip is the writer's problem, the
/// next frame is rendered regardless.
pub struct SmartLedsDriver<W> {
    writer: W,
}

impl<W> SmartLedsDriver<W>
where
    W: SmartLedsWrite,
    W::Color: From<Rgb>,
{
    pub const fn new(writer: W) -> Self {
        Self { writer }
    }

    pub fn into_inner(self) -> W {
        self.writer
    }
}

impl<W> OutputDriver for SmartLedsDriver<W>
where
    W: SmartLedsWrite,
    W::Color: From<Rgb>,
{
    fn write(&mut self, colors: &[Color], bits: u8) {
        debug_assert_eq!(bits, CHANNEL_BITS, "smart-leds writers take 8-bit channels");
        let _ = self.writer.write(colors.iter().map(|color| color.to_rgb()));
    }
}
