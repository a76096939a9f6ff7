use dotenv::dotenv;
use std::env;
use std::path::PathBuf;

pub const DEFAULT_FPS: u16 = 60;
pub const DEFAULT_WHEEL_STEP: f64 = 50.0;
pub const DEFAULT_LOG_FILE: &str = "wrapped.log";

#[derive(Debug, thiserror::Error, PartialEq, Eq)]
pub enum ConfigError {
    #[error("{key} must be {expected}, got '{value}'")]
    Invalid {
        key: &'static str,
        value: String,
        expected: &'static str,
    },
}

/// Runtime settings, read from the environment after `.env` is loaded.
#[derive(Debug, Clone, PartialEq)]
pub struct AppConfig {
    pub frame_rate: u16,
    pub wheel_step: f64,
    pub reduced_motion: bool,
    pub log_file: PathBuf,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            frame_rate: DEFAULT_FPS,
            wheel_step: DEFAULT_WHEEL_STEP,
            reduced_motion: false,
            log_file: PathBuf::from(DEFAULT_LOG_FILE),
        }
    }
}

impl AppConfig {
    /// Loads `.env` (if present) and reads the `WRAPPED_*` variables.
    pub fn from_env() -> Result<Self, ConfigError> {
        dotenv().ok();
        Self::from_lookup(|key| env::var(key).ok())
    }

    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, ConfigError> {
        let defaults = Self::default();

        let frame_rate = match lookup("WRAPPED_FPS") {
            Some(value) => parse_frame_rate(&value)?,
            None => defaults.frame_rate,
        };

        let wheel_step = match lookup("WRAPPED_WHEEL_STEP") {
            Some(value) => parse_wheel_step(&value)?,
            None => defaults.wheel_step,
        };

        let reduced_motion = match lookup("WRAPPED_REDUCED_MOTION") {
            Some(value) => parse_flag("WRAPPED_REDUCED_MOTION", &value)?,
            None => defaults.reduced_motion,
        };

        let log_file = lookup("WRAPPED_LOG_FILE")
            .filter(|value| !value.trim().is_empty())
            .map_or(defaults.log_file, PathBuf::from);

        Ok(Self {
            frame_rate,
            wheel_step,
            reduced_motion,
            log_file,
        })
    }

    pub fn frame_interval(&self) -> std::time::Duration {
        std::time::Duration::from_micros(1_000_000 / u64::from(self.frame_rate.max(1)))
    }
}

fn parse_frame_rate(value: &str) -> Result<u16, ConfigError> {
    value
        .trim()
        .parse::<u16>()
        .ok()
        .filter(|fps| (1..=240).contains(fps))
        .ok_or_else(|| ConfigError::Invalid {
            key: "WRAPPED_FPS",
            value: value.to_string(),
            expected: "an integer between 1 and 240",
        })
}

fn parse_wheel_step(value: &str) -> Result<f64, ConfigError> {
    value
        .trim()
        .parse::<f64>()
        .ok()
        .filter(|step| step.is_finite() && *step > 0.0)
        .ok_or_else(|| ConfigError::Invalid {
            key: "WRAPPED_WHEEL_STEP",
            value: value.to_string(),
            expected: "a positive number",
        })
}

fn parse_flag(key: &'static str, value: &str) -> Result<bool, ConfigError> {
    match value.trim().to_lowercase().as_str() {
        "1" | "true" | "yes" | "on" => Ok(true),
        "0" | "false" | "no" | "off" | "" => Ok(false),
        _ => Err(ConfigError::Invalid {
            key,
            value: value.to_string(),
            expected: "a boolean",
        }),
    }
}
