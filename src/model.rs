use std::ops::RangeInclusive;

use crate::config::Settings;
use crate::input::InputController;
use crate::sources::SourceSet;

/// Wavelength values the slider and config accept, in pixels.
pub const WAVELENGTH_RANGE: RangeInclusive<u32> = 10..=200;

/// Per-session wave parameters, read by both renderers every frame.
#[derive(Clone, Debug, PartialEq)]
pub struct WaveParams {
    /// Always positive, pixels.
    pub wavelength: u32,
    /// Phase advance, pixels per second.
    pub wave_speed: f32,
    pub show_interference: bool,
}

impl Default for WaveParams {
    fn default() -> Self {
        WaveParams {
            wavelength: 50,
            wave_speed: 2.0,
            show_interference: true,
        }
    }
}

impl WaveParams {
    pub fn wavelength_px(&self) -> f32 {
        self.wavelength as f32
    }

    pub fn toggle_interference(&mut self) -> bool {
        self.show_interference = !self.show_interference;
        self.show_interference
    }

    /// Moves the wavelength by `delta`, staying inside `WAVELENGTH_RANGE`.
    pub fn nudge_wavelength(&mut self, delta: i32) {
        let next = self.wavelength as i64 + delta as i64;
        let (lo, hi) = (*WAVELENGTH_RANGE.start() as i64, *WAVELENGTH_RANGE.end() as i64);
        self.wavelength = next.clamp(lo, hi) as u32;
    }
}

/// Text shown next to the wavelength slider.
pub fn wavelength_label(wavelength: u32) -> String {
    format!("{} px", wavelength)
}

/// Monotonic time since startup.
#[derive(Clone, Copy, Debug)]
pub struct Clock {
    start: wasm_timer::Instant,
}

impl Clock {
    pub fn start() -> Self {
        Clock {
            start: wasm_timer::Instant::now(),
        }
    }

    pub fn elapsed_secs(&self) -> f32 {
        self.start.elapsed().as_secs_f32()
    }
}

pub struct Model {
    pub egui: nannou_egui::Egui,
    pub sources: SourceSet,
    pub params: WaveParams,
    pub input: InputController,
    pub clock: Clock,
}

impl Model {
    pub fn new(settings: Settings, egui: nannou_egui::Egui) -> Self {
        Model {
            egui,
            sources: SourceSet::new(settings.sources),
            params: WaveParams {
                wavelength: settings.wavelength,
                wave_speed: settings.wave_speed,
                show_interference: settings.show_interference,
            },
            input: InputController::default(),
            clock: Clock::start(),
        }
    }
}
