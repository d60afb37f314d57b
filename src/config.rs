//! Startup settings.
//!
//! Native builds read an optional YAML file and command-line flags; the web
//! build reads the page's query string. Values are validated here so the
//! renderers can assume a positive wavelength and 1..=6 sources.

use std::str::FromStr;

use serde::Deserialize;

use crate::error::ConfigError;
use crate::model::WAVELENGTH_RANGE;
use crate::sources::{WaveSource, MAX_SOURCES, MIN_SOURCES};

/// Query parameters understood by `Settings::apply`.
#[cfg(target_family = "wasm")]
pub const QUERY_KEYS: [&str; 5] = ["width", "height", "wavelength", "speed", "interference"];

#[derive(Clone, Debug, PartialEq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct Settings {
    pub width: u32,
    pub height: u32,
    pub wavelength: u32,
    pub wave_speed: f32,
    pub show_interference: bool,
    pub sources: Vec<WaveSource>,
}

impl Default for Settings {
    fn default() -> Self {
        Settings {
            width: 800,
            height: 600,
            wavelength: 50,
            wave_speed: 2.0,
            show_interference: true,
            sources: vec![
                WaveSource::new(200.0, 300.0),
                WaveSource::new(400.0, 300.0),
                WaveSource::new(600.0, 300.0),
            ],
        }
    }
}

#[cfg_attr(not(target_family = "wasm"), allow(dead_code))]
fn parse<T: FromStr>(key: &str, value: &str) -> Result<T, ConfigError> {
    value.trim().parse().map_err(|_| ConfigError::InvalidValue {
        key: key.to_string(),
        value: value.to_string(),
    })
}

#[cfg_attr(not(target_family = "wasm"), allow(dead_code))]
fn parse_flag(key: &str, value: &str) -> Result<bool, ConfigError> {
    match value.trim().to_ascii_lowercase().as_str() {
        "1" | "true" | "on" | "yes" => Ok(true),
        "0" | "false" | "off" | "no" => Ok(false),
        _ => Err(ConfigError::InvalidValue {
            key: key.to_string(),
            value: value.to_string(),
        }),
    }
}

impl Settings {
    pub fn from_yaml(text: &str) -> Result<Self, ConfigError> {
        Ok(serde_yaml::from_str(text)?)
    }

    #[cfg(not(target_family = "wasm"))]
    pub fn load(path: &std::path::Path) -> Result<Self, ConfigError> {
        let text = std::fs::read_to_string(path)?;
        Self::from_yaml(&text)
    }

    /// Overrides one value from a `key=value` pair.
    #[cfg_attr(not(target_family = "wasm"), allow(dead_code))]
    pub fn apply(&mut self, key: &str, value: &str) -> Result<(), ConfigError> {
        match key {
            "width" => self.width = parse(key, value)?,
            "height" => self.height = parse(key, value)?,
            "wavelength" => self.wavelength = parse(key, value)?,
            "speed" => self.wave_speed = parse(key, value)?,
            "interference" => self.show_interference = parse_flag(key, value)?,
            _ => {
                return Err(ConfigError::InvalidValue {
                    key: key.to_string(),
                    value: value.to_string(),
                })
            }
        }
        Ok(())
    }

    pub fn validate(self) -> Result<Self, ConfigError> {
        if self.width == 0 {
            return Err(ConfigError::OutOfRange {
                key: "width",
                value: self.width.to_string(),
            });
        }
        if self.height == 0 {
            return Err(ConfigError::OutOfRange {
                key: "height",
                value: self.height.to_string(),
            });
        }
        if !WAVELENGTH_RANGE.contains(&self.wavelength) {
            return Err(ConfigError::OutOfRange {
                key: "wavelength",
                value: self.wavelength.to_string(),
            });
        }
        if !self.wave_speed.is_finite() || self.wave_speed <= 0.0 {
            return Err(ConfigError::OutOfRange {
                key: "wave_speed",
                value: self.wave_speed.to_string(),
            });
        }
        if !(MIN_SOURCES..=MAX_SOURCES).contains(&self.sources.len()) {
            return Err(ConfigError::SourceCount(self.sources.len()));
        }
        Ok(self)
    }
}

#[cfg(not(target_family = "wasm"))]
#[derive(clap::Parser, Debug)]
#[clap(
    name = "wavefront",
    version,
    about = "Animated wavefronts and interference of point sources"
)]
pub struct Args {
    /// YAML settings file; flags override its values.
    #[clap(short, long, env = "WAVEFRONT_CONFIG")]
    pub config: Option<std::path::PathBuf>,
    #[clap(long, env = "WAVEFRONT_WIDTH")]
    pub width: Option<u32>,
    #[clap(long, env = "WAVEFRONT_HEIGHT")]
    pub height: Option<u32>,
    /// Initial wavelength in pixels.
    #[clap(long, env = "WAVEFRONT_WAVELENGTH")]
    pub wavelength: Option<u32>,
    /// Ring phase speed in pixels per second.
    #[clap(long, env = "WAVEFRONT_WAVE_SPEED")]
    pub wave_speed: Option<f32>,
    /// Start with the interference overlay hidden.
    #[clap(long)]
    pub no_interference: bool,
}

#[cfg(not(target_family = "wasm"))]
impl Args {
    pub fn into_settings(self) -> Result<Settings, ConfigError> {
        let mut settings = match &self.config {
            Some(path) => Settings::load(path)?,
            None => Settings::default(),
        };
        if let Some(width) = self.width {
            settings.width = width;
        }
        if let Some(height) = self.height {
            settings.height = height;
        }
        if let Some(wavelength) = self.wavelength {
            settings.wavelength = wavelength;
        }
        if let Some(wave_speed) = self.wave_speed {
            settings.wave_speed = wave_speed;
        }
        if self.no_interference {
            settings.show_interference = false;
        }
        settings.validate()
    }
}

#[cfg(target_family = "wasm")]
pub fn from_location() -> Result<Settings, ConfigError> {
    let window = web_sys::window().ok_or_else(|| ConfigError::Browser("no window".to_string()))?;
    let search = window
        .location()
        .search()
        .map_err(|e| ConfigError::Browser(format!("{:?}", e)))?;
    let params = web_sys::UrlSearchParams::new_with_str(&search)
        .map_err(|e| ConfigError::Browser(format!("{:?}", e)))?;

    let mut settings = Settings::default();
    for key in QUERY_KEYS {
        if let Some(value) = params.get(key) {
            settings.apply(key, &value)?;
        }
    }
    settings.validate()
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn defaults_are_valid() {
        let settings = Settings::default().validate().unwrap();
        assert_eq!(settings.sources.len(), 3);
        assert_eq!((settings.width, settings.height), (800, 600));
    }

    #[test]
    fn yaml_fills_missing_fields_with_defaults() {
        let settings = Settings::from_yaml(
            "wavelength: 80\nsources:\n  - { x: 10, y: 20 }\n  - { x: 30, y: 40, frequency: 2 }\n",
        )
        .unwrap();
        assert_eq!(settings.wavelength, 80);
        assert_eq!(settings.width, 800);
        assert_eq!(settings.sources[0], WaveSource::new(10.0, 20.0));
        assert_eq!(settings.sources[1].frequency, 2.0);
    }

    #[test]
    fn yaml_rejects_unknown_fields() {
        assert!(matches!(
            Settings::from_yaml("wavelenght: 80\n"),
            Err(ConfigError::Yaml(_))
        ));
    }

    #[test]
    fn apply_overrides_query_values() {
        let mut settings = Settings::default();
        settings.apply("wavelength", "120").unwrap();
        settings.apply("speed", "3.5").unwrap();
        settings.apply("interference", "off").unwrap();
        assert_eq!(settings.wavelength, 120);
        assert_eq!(settings.wave_speed, 3.5);
        assert!(!settings.show_interference);
    }

    #[test]
    fn apply_rejects_garbage() {
        let mut settings = Settings::default();
        assert!(matches!(
            settings.apply("wavelength", "fifty"),
            Err(ConfigError::InvalidValue { .. })
        ));
        assert!(matches!(
            settings.apply("colour", "red"),
            Err(ConfigError::InvalidValue { .. })
        ));
    }

    #[test]
    fn validate_enforces_bounds() {
        let too_short = Settings {
            wavelength: 0,
            ..Settings::default()
        };
        assert!(matches!(
            too_short.validate(),
            Err(ConfigError::OutOfRange { key: "wavelength", .. })
        ));

        let empty = Settings {
            sources: vec![],
            ..Settings::default()
        };
        assert!(matches!(empty.validate(), Err(ConfigError::SourceCount(0))));

        let stalled = Settings {
            wave_speed: f32::NAN,
            ..Settings::default()
        };
        assert!(stalled.validate().is_err());
    }

    #[cfg(not(target_family = "wasm"))]
    #[test]
    fn flags_override_defaults() {
        use clap::Parser;

        let args = Args::parse_from([
            "wavefront",
            "--wavelength",
            "75",
            "--width",
            "640",
            "--no-interference",
        ]);
        let settings = args.into_settings().unwrap();
        assert_eq!(settings.wavelength, 75);
        assert_eq!(settings.width, 640);
        assert_eq!(settings.height, 600);
        assert!(!settings.show_interference);
    }

    #[cfg(not(target_family = "wasm"))]
    #[test]
    fn missing_config_file_is_io_error() {
        use clap::Parser;

        let args = Args::parse_from(["wavefront", "--config", "/nonexistent/wavefront.yaml"]);
        assert!(matches!(args.into_settings(), Err(ConfigError::Io(_))));
    }
}
