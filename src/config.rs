//! Application configuration
//!
//! Loaded from `config.toml` in the platform config directory; a missing
//! file yields the defaults.

use std::path::PathBuf;

use directories::ProjectDirs;
use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};
use crate::transmit::usb::UsbMatcher;

/// Top-level application configuration
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct AppConfig {
    pub audio: AudioConfig,
    pub usb: UsbConfig,
    pub builtin: BuiltinConfig,
}

/// Audio-jack backend configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct AudioConfig {
    /// PCM sample rate for waveform synthesis
    pub sample_rate: u32,

    /// Preferred output device name; `None` uses the system default
    pub output_device: Option<String>,
}

impl Default for AudioConfig {
    fn default() -> Self {
        Self {
            sample_rate: crate::constants::DEFAULT_SAMPLE_RATE,
            output_device: None,
        }
    }
}

/// USB-serial backend configuration
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct UsbConfig {
    /// Extra VID/PID pairs matched in addition to the built-in table
    pub extra_matchers: Vec<UsbMatcher>,
}

/// Built-in blaster configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct BuiltinConfig {
    /// Character device paths probed for IR hardware
    pub device_paths: Vec<PathBuf>,
}

impl Default for BuiltinConfig {
    fn default() -> Self {
        Self {
            device_paths: vec![PathBuf::from("/dev/lirc0"), PathBuf::from("/dev/lirc1")],
        }
    }
}

impl AppConfig {
    /// Load configuration from the platform config directory
    ///
    /// A missing file is not an error; a malformed one is.
    pub fn load() -> Result<Self> {
        let Some(path) = Self::config_path() else {
            return Ok(Self::default());
        };

        match std::fs::read_to_string(&path) {
            Ok(text) => {
                let config = toml::from_str(&text)
                    .map_err(|e| Error::Config(format!("{}: {}", path.display(), e)))?;
                tracing::info!("Loaded configuration from {}", path.display());
                Ok(config)
            }
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => Ok(Self::default()),
            Err(e) => Err(Error::Config(format!("{}: {}", path.display(), e))),
        }
    }

    /// Path of the configuration file, if a config directory exists
    pub fn config_path() -> Option<PathBuf> {
        ProjectDirs::from("", "", "irblast").map(|dirs| dirs.config_dir().join("config.toml"))
    }
}
