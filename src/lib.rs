#![no_std]

pub mod color;
pub mod director;
pub mod driver;
pub mod effect;
pub mod falloff;
pub mod frame;
pub mod presets;

pub use color::{Color, Rgb};
pub use director::{Director, DirectorConfig, FrameResult};
pub use driver::{OutputDriver, SmartLedsDriver, StatusIndicators};
pub use effect::{Effect, EffectKind, EffectSlot, EffectState};
pub use frame::{FrameBuffer, StripConfig};

pub use embassy_time::{Duration, Instant};
pub use fastrand::Rng;
