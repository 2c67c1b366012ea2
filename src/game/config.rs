use std::path::{Path, PathBuf};

use serde::Deserialize;

#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("Could not read config file {path:?}: {source}")]
    Read {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("Could not parse config file {path:?}: {source}")]
    Parse {
        path: PathBuf,
        source: toml::de::Error,
    },

    #[error("Tunable {name} must be a finite number, got {value}")]
    NonFinite { name: &'static str, value: f32 },

    #[error("repeat_count must be at least 1")]
    ZeroRepeatCount,
}

/// Tunables for the soldering choreography. Set once before activation.
#[derive(Clone, Copy, Debug, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct StationConfig {
    /// Z the carriage travels to at the start of a cycle.
    pub carriage_z_target: f32,
    /// First Y the head raises to.
    pub head_y_target: f32,
    /// X offset the head shifts to over the work piece.
    pub head_x_target: f32,
    /// Y the head moves to while the solder pulse runs.
    pub head_y_second_target: f32,
    /// Time for each move, in seconds.
    pub move_duration: f32,
    /// Pause between steps, in seconds.
    pub wait_between_steps: f32,
    /// Number of full cycles per trigger.
    pub repeat_count: u32,
}

impl Default for StationConfig {
    fn default() -> Self {
        Self {
            carriage_z_target: 2.0,
            head_y_target: 2.0,
            head_x_target: 1.0,
            head_y_second_target: 3.0,
            move_duration: 1.0,
            wait_between_steps: 1.0,
            repeat_count: 2,
        }
    }
}

impl StationConfig {
    pub fn from_toml_file(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        let text = std::fs::read_to_string(path).map_err(|source| ConfigError::Read {
            path: path.to_path_buf(),
            source,
        })?;

        let config = Self::from_toml_str(&text).map_err(|source| ConfigError::Parse {
            path: path.to_path_buf(),
            source,
        })?;

        config.validate()?;

        Ok(config)
    }

    pub fn from_toml_str(text: &str) -> Result<Self, toml::de::Error> {
        toml::from_str(text)
    }

    /// A negative or zero `move_duration` is allowed and means "snap to the
    /// target immediately"; only non-finite values and a zero repeat count
    /// are rejected.
    pub fn validate(&self) -> Result<(), ConfigError> {
        let tunables = [
            ("carriage_z_target", self.carriage_z_target),
            ("head_y_target", self.head_y_target),
            ("head_x_target", self.head_x_target),
            ("head_y_second_target", self.head_y_second_target),
            ("move_duration", self.move_duration),
            ("wait_between_steps", self.wait_between_steps),
        ];

        for (name, value) in tunables {
            if !value.is_finite() {
                return Err(ConfigError::NonFinite { name, value });
            }
        }

        if self.repeat_count == 0 {
            return Err(ConfigError::ZeroRepeatCount);
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_are_valid() {
        assert!(StationConfig::default().validate().is_ok());
    }

    #[test]
    fn non_finite_tunable_is_rejected() {
        let config = StationConfig {
            move_duration: f32::NAN,
            ..Default::default()
        };
        assert!(matches!(
            config.validate(),
            Err(ConfigError::NonFinite {
                name: "move_duration",
                ..
            })
        ));
    }

    #[test]
    fn zero_repeat_count_is_rejected() {
        let config = StationConfig {
            repeat_count: 0,
            ..Default::default()
        };
        assert!(matches!(
            config.validate(),
            Err(ConfigError::ZeroRepeatCount)
        ));
    }

    #[test]
    fn toml_overrides_merge_with_defaults() {
        let config = StationConfig::from_toml_str(
            r#"
            head_x_target = 4.5
            repeat_count = 3
            "#,
        )
        .unwrap();

        assert_eq!(config.head_x_target, 4.5);
        assert_eq!(config.repeat_count, 3);
        assert_eq!(config.carriage_z_target, 2.0);
    }

    #[test]
    fn unknown_toml_key_is_rejected() {
        assert!(StationConfig::from_toml_str("warp_speed = 9.0").is_err());
    }
}
