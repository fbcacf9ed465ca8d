//! Effect rotation
//!
//! Provides portable scheduling without async/await or platform-specific
//! timers. The caller is responsible for sleeping between frames, or can hand
//! the loop over to [`Director::run`].

use embassy_time::{Duration, Instant};
#[cfg(feature = "esp32-log")]
use esp_println::println;
use fastrand::Rng;
use heapless::Vec;

use crate::driver::{OutputDriver, StatusIndicators};
use crate::effect::EffectSlot;

/// Shortest run of a single effect
pub const DEFAULT_MIN_RUN: Duration = Duration::from_secs(10);

/// Longest run of a single effect
pub const DEFAULT_MAX_RUN: Duration = Duration::from_secs(20);

/// Remaining run time below which the expiry light starts blinking
pub const DEFAULT_WARNING: Duration = Duration::from_secs(5);

/// Configuration for the director
#[derive(Debug, Clone, Copy)]
pub struct DirectorConfig {
    pub min_run: Duration,
    pub max_run: Duration,
    pub warning: Duration,
}

impl DirectorConfig {
    pub const DEFAULT: Self = Self {
        min_run: DEFAULT_MIN_RUN,
        max_run: DEFAULT_MAX_RUN,
        warning: DEFAULT_WARNING,
    };
}

impl Default for DirectorConfig {
    fn default() -> Self {
        Self::DEFAULT
    }
}

/// Result of a frame tick operation.
#[derive(Debug, Clone, Copy)]
pub struct FrameResult {
    /// Index of the effect that produced this frame
    pub effect: usize,
    /// How long to wait before the next tick
    pub sleep_duration: Duration,
}

/// The effect currently on the strip
#[derive(Debug, Clone, Copy)]
struct Run {
    index: usize,
    expire_at: Instant,
    expired: bool,
    /// Whole seconds left when the expiry light was last updated
    last_remaining: Option<u64>,
}

/// Picks effects at random and runs each one for a random time
///
/// Every tick:
/// - starts a new effect if none is running
/// - expires the current effect once its time is up and swaps it for a new
///   one when it has drained
/// - drives the status indicators
/// - renders, flushes and advances one frame
pub struct Director<const N: usize, O, I, const EFFECTS: usize>
where
    O: OutputDriver,
    I: StatusIndicators,
{
    effects: Vec<EffectSlot<N>, EFFECTS>,
    output: O,
    indicators: I,
    rng: Rng,
    config: DirectorConfig,
    current: Option<Run>,
}

impl<const N: usize, O, I, const EFFECTS: usize> Director<N, O, I, EFFECTS>
where
    O: OutputDriver,
    I: StatusIndicators,
{
    /// Create a new director with the default run times.
    ///
    /// Panics if `effects` is empty.
    pub fn new(effects: Vec<EffectSlot<N>, EFFECTS>, output: O, indicators: I, rng: Rng) -> Self {
        Self::with_config(effects, output, indicators, rng, DirectorConfig::DEFAULT)
    }

    pub fn with_config(
        effects: Vec<EffectSlot<N>, EFFECTS>,
        output: O,
        indicators: I,
        rng: Rng,
        config: DirectorConfig,
    ) -> Self {
        assert!(!effects.is_empty(), "director needs at least one effect");
        assert!(config.min_run <= config.max_run);

        Self {
            effects,
            output,
            indicators,
            rng,
            config,
            current: None,
        }
    }

    /// Process one frame and return timing information.
    ///
    /// The caller is responsible for waiting `sleep_duration` before calling
    /// `tick` again.
    pub fn tick(&mut self, now: Instant) -> FrameResult {
        let mut run = match self.current {
            Some(run) => run,
            None => self.start(now),
        };

        if now >= run.expire_at {
            if !run.expired {
                #[cfg(feature = "esp32-log")]
                println!("Effect expired, draining");
                self.effects[run.index].set_expired();
                self.indicators.set_expiry(true);
                run.expired = true;
            }
            if self.effects[run.index].is_finished() {
                run = self.start(now);
            }
        } else {
            let remaining = run.expire_at.duration_since(now);
            if remaining < self.config.warning {
                let secs = remaining.as_secs();
                if run.last_remaining.is_none_or(|last| secs < last) {
                    #[cfg(feature = "esp32-log")]
                    println!("Expiring in {}s.", secs);
                    self.indicators.set_expiry(secs % 2 == 0);
                    run.last_remaining = Some(secs);
                }
            }
        }

        self.indicators.heartbeat();
        self.current = Some(run);

        let effect = &mut self.effects[run.index];
        let sleep_duration = effect.cycle(&mut self.output, &mut self.rng);

        FrameResult {
            effect: run.index,
            sleep_duration,
        }
    }

    /// Drive the strip forever, blocking between frames
    pub fn run(&mut self) -> ! {
        loop {
            let result = self.tick(Instant::now());
            embassy_time::block_for(result.sleep_duration);
        }
    }

    /// Pick, reinitialize and time the next effect
    fn start(&mut self, now: Instant) -> Run {
        self.indicators.set_expiry(false);

        let index = self.rng.usize(..self.effects.len());
        let effect = &mut self.effects[index];
        effect.reinit(&mut self.rng);

        let run_ms = self
            .rng
            .u64(self.config.min_run.as_millis()..=self.config.max_run.as_millis());

        #[cfg(feature = "esp32-log")]
        {
            println!("Displaying effect: {}", effect);
            println!("Running for {}ms.", run_ms);
        }

        Run {
            index,
            expire_at: now + Duration::from_millis(run_ms),
            expired: false,
            last_remaining: None,
        }
    }

    /// The effect on the strip, if any
    pub fn current(&self) -> Option<&EffectSlot<N>> {
        self.current.map(|run| &self.effects[run.index])
    }

    /// When the current effect stops spawning
    pub fn expires_at(&self) -> Option<Instant> {
        self.current.map(|run| run.expire_at)
    }

    pub fn effects(&self) -> &[EffectSlot<N>] {
        &self.effects
    }

    pub fn config(&self) -> &DirectorConfig {
        &self.config
    }

    /// Get a reference to the output driver.
    pub fn output(&self) -> &O {
        &self.output
    }

    /// Get a mutable reference to the output driver.
    pub fn output_mut(&mut self) -> &mut O {
        &mut self.output
    }

    pub fn indicators(&self) -> &I {
        &self.indicators
    }
}
