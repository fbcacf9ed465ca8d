//! Desktop preview app for strip-director effects
//!
//! Runs the christmas rotation against a virtual strip in a window.
//! Time is synthetic so the rotation can be paused and sped up.

use std::time::Instant as StdInstant;

use eframe::egui::{self};
use strip_director::{
    Color, Director, DirectorConfig, Duration, Instant, OutputDriver, Rng, StatusIndicators,
    StripConfig,
    presets::{CHRISTMAS_EFFECTS, christmas},
};

/// Maximum number of visible LEDs the preview supports
const MAX_LEDS: usize = 300;

/// Hidden cells on each side of the visible window
const OVERSCAN: usize = 12;

/// Buffer length, overscan included
const FRAME_LEN: usize = MAX_LEDS + OVERSCAN * 2;

/// Default number of LEDs in the simulated strip
const DEFAULT_LED_COUNT: usize = 120;

/// Size of each LED rectangle in pixels
const LED_SIZE: f32 = 10.0;

/// Gap between LEDs
const LED_GAP: f32 = 2.0;

/// Effects that ask for no wait still get this much frame time
const MIN_FRAME: Duration = Duration::from_millis(10);

/// Upper bound on frames simulated per repaint
const MAX_TICKS_PER_UPDATE: usize = 64;

/// Shorter runs than on a real strip so the rotation is easy to watch
const PREVIEW_DIRECTOR_CONFIG: DirectorConfig = DirectorConfig {
    min_run: Duration::from_secs(6),
    max_run: Duration::from_secs(12),
    warning: Duration::from_secs(3),
};

type PreviewDirector = Director<FRAME_LEN, VirtualStrip, VirtualIndicators, CHRISTMAS_EFFECTS>;

/// Keeps the last flushed frame for drawing
#[derive(Default)]
struct VirtualStrip {
    frame: Vec<Color>,
}

impl OutputDriver for VirtualStrip {
    fn write(&mut self, colors: &[Color], _bits: u8) {
        self.frame.clear();
        self.frame.extend_from_slice(colors);
    }
}

#[derive(Default)]
struct VirtualIndicators {
    heartbeat: bool,
    expiry: bool,
}

impl StatusIndicators for VirtualIndicators {
    fn heartbeat(&mut self) {
        self.heartbeat = !self.heartbeat;
    }

    fn set_expiry(&mut self, lit: bool) {
        self.expiry = lit;
    }
}

fn main() -> eframe::Result<()> {
    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_inner_size([900.0, 600.0])
            .with_title("Strip Director Preview"),
        ..Default::default()
    };

    eframe::run_native(
        "strip-director-preview",
        options,
        Box::new(|_cc| Ok(Box::new(PreviewApp::new()))),
    )
}

struct PreviewApp {
    director: PreviewDirector,
    /// Seed used for the current director
    seed: u64,
    /// Synthetic time in milliseconds
    t_ms: u64,
    /// Synthetic time of the next director tick
    next_tick_ms: u64,
    /// Wall-clock reference for delta time
    last_frame: StdInstant,
    /// Whether animation is playing
    playing: bool,
    /// Time scale multiplier (1.0 = realtime)
    time_scale: f32,
    /// LED pixel size for display
    led_size: f32,
    /// Number of LEDs to display
    led_count: usize,
}

impl PreviewApp {
    fn new() -> Self {
        let seed = 2023;
        Self {
            director: build_director(DEFAULT_LED_COUNT, seed),
            seed,
            t_ms: 0,
            next_tick_ms: 0,
            last_frame: StdInstant::now(),
            playing: true,
            time_scale: 1.0,
            led_size: LED_SIZE,
            led_count: DEFAULT_LED_COUNT,
        }
    }

    /// Start over with a fresh rotation
    fn reset(&mut self) {
        self.director = build_director(self.led_count, self.seed);
        self.t_ms = 0;
        self.next_tick_ms = 0;
        self.last_frame = StdInstant::now();
    }

    /// Update synthetic time based on wall clock and time scale
    fn update_time(&mut self) {
        let now = StdInstant::now();
        let delta = now.duration_since(self.last_frame);
        self.last_frame = now;

        if self.playing {
            let delta_ms_f64 = delta.as_secs_f64() * 1000.0 * f64::from(self.time_scale);
            let delta_ms_f64 = if delta_ms_f64.is_finite() {
                #[allow(clippy::cast_precision_loss)]
                delta_ms_f64.clamp(0.0, u64::MAX as f64)
            } else {
                0.0
            };
            #[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
            let delta_ms = delta_ms_f64 as u64;
            self.t_ms = self.t_ms.wrapping_add(delta_ms);
        }
    }

    /// Run every director tick that is due by the current synthetic time
    fn catch_up(&mut self) {
        let mut ticks = 0;
        while self.next_tick_ms <= self.t_ms && ticks < MAX_TICKS_PER_UPDATE {
            let result = self.director.tick(Instant::from_millis(self.next_tick_ms));
            let step = result.sleep_duration.max(MIN_FRAME);
            self.next_tick_ms += step.as_millis();
            ticks += 1;
        }
        // Drop frames rather than fall further behind
        if self.next_tick_ms < self.t_ms {
            self.next_tick_ms = self.t_ms;
        }
    }
}

fn build_director(led_count: usize, seed: u64) -> PreviewDirector {
    let mut rng = Rng::with_seed(seed);
    let strip = StripConfig::new(led_count, OVERSCAN, 255);
    let effects = christmas::<FRAME_LEN>(&strip, &mut rng);
    Director::with_config(
        effects,
        VirtualStrip::default(),
        VirtualIndicators::default(),
        rng,
        PREVIEW_DIRECTOR_CONFIG,
    )
}

fn indicator(ui: &mut egui::Ui, label: &str, lit: bool, color: egui::Color32) {
    ui.label(label);
    let (rect, _) = ui.allocate_exact_size(egui::vec2(12.0, 12.0), egui::Sense::hover());
    let fill = if lit { color } else { egui::Color32::from_gray(40) };
    ui.painter().circle_filled(rect.center(), 6.0, fill);
}

impl eframe::App for PreviewApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        self.update_time();
        self.catch_up();

        // Request continuous repaint for animation
        ctx.request_repaint();

        egui::CentralPanel::default().show(ctx, |ui| {
            ui.horizontal(|ui| {
                // <PlaybackControls>
                ui.vertical(|ui| {
                    ui.horizontal(|ui| {
                        if ui.button("⏮ Reset").clicked() {
                            self.reset();
                        }
                        if ui
                            .button(if self.playing { "⏸ Pause" } else { "▶ Play" })
                            .clicked()
                        {
                            self.playing = !self.playing;
                        }
                    });

                    ui.add_space(4.0);

                    let secs = self.t_ms / 1000;
                    let ms = self.t_ms % 1000;
                    ui.label(format!("Time: {secs}.{ms:03}s"));

                    ui.add_space(4.0);

                    ui.horizontal(|ui| {
                        ui.label("Speed:");
                        ui.add(egui::Slider::new(&mut self.time_scale, 0.1..=5.0).logarithmic(true));
                    });
                });
                // </PlaybackControls>
                ui.add_space(16.0);
                // <StripControls>
                ui.vertical(|ui| {
                    ui.horizontal(|ui| {
                        ui.label("Size: ");
                        ui.add(egui::Slider::new(&mut self.led_size, 4.0..=32.0));
                    });

                    ui.add_space(4.0);

                    ui.horizontal(|ui| {
                        ui.label("LEDs:");
                        let old_led_count = self.led_count;
                        ui.add(egui::Slider::new(&mut self.led_count, 1usize..=MAX_LEDS));
                        if self.led_count != old_led_count {
                            self.reset();
                        }
                    });

                    ui.add_space(4.0);

                    ui.horizontal(|ui| {
                        ui.label("Seed:");
                        let old_seed = self.seed;
                        ui.add(egui::DragValue::new(&mut self.seed));
                        if self.seed != old_seed {
                            self.reset();
                        }
                    });
                });
                // </StripControls>
            });

            ui.add_space(16.0);

            ui.horizontal(|ui| {
                let effect = self
                    .director
                    .current()
                    .map_or_else(|| "-".to_string(), ToString::to_string);
                ui.label(format!("Effect: {effect}"));

                ui.add_space(16.0);

                if let Some(expires_at) = self.director.expires_at() {
                    let now = Instant::from_millis(self.t_ms);
                    let left = expires_at.checked_duration_since(now).unwrap_or(Duration::from_millis(0));
                    ui.label(format!("Expires in: {}s", left.as_secs()));
                }

                ui.add_space(16.0);

                let indicators = self.director.indicators();
                indicator(ui, "Heartbeat", indicators.heartbeat, egui::Color32::GREEN);
                indicator(ui, "Expiry", indicators.expiry, egui::Color32::RED);
            });

            ui.add_space(16.0);

            // === LED Display ===
            let frame = &self.director.output().frame;
            let available_width = ui.available_width();
            let led_pitch = self.led_size + LED_GAP;

            #[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
            let leds_per_row = (available_width / led_pitch).floor().max(1.0) as usize;
            let rows = self.led_count.div_ceil(leds_per_row);
            #[allow(clippy::cast_precision_loss)]
            let height = rows as f32 * led_pitch;

            let (response, painter) =
                ui.allocate_painter(egui::vec2(available_width, height), egui::Sense::hover());
            let origin = response.rect.min;

            #[allow(clippy::cast_precision_loss)]
            for (i, pixel) in frame.iter().enumerate() {
                let row = i / leds_per_row;
                let col = i % leds_per_row;
                let x = origin.x + col as f32 * led_pitch;
                let y = origin.y + row as f32 * led_pitch;

                let rect = egui::Rect::from_min_size(
                    egui::pos2(x, y),
                    egui::vec2(self.led_size, self.led_size),
                );
                let color = egui::Color32::from_rgb(pixel.r(), pixel.g(), pixel.b());
                painter.rect_filled(rect, 3.0, color);
            }
        });
    }
}
