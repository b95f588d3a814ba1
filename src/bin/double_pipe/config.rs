//! TOML configuration for the command-line front end.
//!
//! Every field is optional; missing fields take the defaults below.
//!
//! ```toml
//! [exchanger]
//! hot_mass_rate = 1.0   # kg/s
//! cold_mass_rate = 1.0  # kg/s
//! hot_inlet = 70.0      # °C
//! cold_inlet = 20.0     # °C
//! length = 1.2          # m
//! arrangement = "counter"
//! resolution = 100
//!
//! [animation]
//! length = 10.0         # m
//! inner_radius = 0.5    # m
//! outer_radius = 1.0    # m
//! particle_count = 10
//! step = 0.05           # m per frame
//! frames = 200
//! ```

use std::{fs, path::Path};

use double_pipe_hx::models::thermal::double_pipe::{
    ExchangerParameters, FlowArrangement, InvalidParameter, ParticleFlowConfig, Resolution,
};
use serde::Deserialize;
use uom::si::{
    f64::{Length, MassRate, ThermodynamicTemperature},
    length::meter,
    mass_rate::kilogram_per_second,
    thermodynamic_temperature::degree_celsius,
};

use crate::CliError;

#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct Config {
    pub exchanger: ExchangerConfig,
    pub animation: AnimationConfig,
}

/// Exchanger operating point in plain units: kg/s, °C, m.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct ExchangerConfig {
    pub hot_mass_rate: f64,
    pub cold_mass_rate: f64,
    pub hot_inlet: f64,
    pub cold_inlet: f64,
    pub length: f64,
    pub arrangement: String,
    pub resolution: usize,
}

impl Default for ExchangerConfig {
    fn default() -> Self {
        Self {
            hot_mass_rate: 1.0,
            cold_mass_rate: 1.0,
            hot_inlet: 70.0,
            cold_inlet: 20.0,
            length: 1.2,
            arrangement: FlowArrangement::Counter.label().to_owned(),
            resolution: Resolution::DEFAULT,
        }
    }
}

/// Animation geometry in meters.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct AnimationConfig {
    pub length: f64,
    pub inner_radius: f64,
    pub outer_radius: f64,
    pub particle_count: usize,
    pub step: f64,
    pub frames: u32,
}

impl Default for AnimationConfig {
    fn default() -> Self {
        Self {
            length: 10.0,
            inner_radius: 0.5,
            outer_radius: 1.0,
            particle_count: 10,
            step: 0.05,
            frames: 200,
        }
    }
}

impl Config {
    /// Reads a configuration file.
    pub fn load(path: &Path) -> Result<Self, CliError> {
        let text = fs::read_to_string(path).map_err(|source| CliError::Read {
            path: path.to_owned(),
            source,
        })?;
        toml::from_str(&text).map_err(|source| CliError::Parse {
            path: path.to_owned(),
            source,
        })
    }

    /// Reads `path` if given, otherwise returns the defaults.
    pub fn load_or_default(path: Option<&Path>) -> Result<Self, CliError> {
        match path {
            Some(path) => {
                log::debug!("loading configuration from {}", path.display());
                Self::load(path)
            }
            None => Ok(Self::default()),
        }
    }
}

impl ExchangerConfig {
    pub fn arrangement(&self) -> Result<FlowArrangement, InvalidParameter> {
        self.arrangement.parse()
    }

    pub fn parameters(&self) -> Result<ExchangerParameters, InvalidParameter> {
        Ok(ExchangerParameters {
            hot_mass_rate: MassRate::new::<kilogram_per_second>(self.hot_mass_rate),
            cold_mass_rate: MassRate::new::<kilogram_per_second>(self.cold_mass_rate),
            hot_inlet: ThermodynamicTemperature::new::<degree_celsius>(self.hot_inlet),
            cold_inlet: ThermodynamicTemperature::new::<degree_celsius>(self.cold_inlet),
            length: Length::new::<meter>(self.length),
            arrangement: self.arrangement()?,
        })
    }

    pub fn resolution(&self) -> Result<Resolution, InvalidParameter> {
        Resolution::new(self.resolution)
    }
}

impl AnimationConfig {
    pub fn flow_config(&self) -> ParticleFlowConfig {
        ParticleFlowConfig {
            length: Length::new::<meter>(self.length),
            inner_radius: Length::new::<meter>(self.inner_radius),
            outer_radius: Length::new::<meter>(self.outer_radius),
            particle_count: self.particle_count,
            step: Length::new::<meter>(self.step),
        }
    }
}

#[cfg(test)]
mod tests {
    use std::io::Write;

    use clap::Parser;
    use tempfile::NamedTempFile;

    use crate::cli::{Cli, Command};

    use super::*;

    fn config_file(contents: &str) -> NamedTempFile {
        let mut file = NamedTempFile::new().unwrap();
        file.write_all(contents.as_bytes()).unwrap();
        file
    }

    #[test]
    fn flags_override_file_which_overrides_defaults() {
        let file = config_file(
            r#"
            [exchanger]
            hot_mass_rate = 1.5
            cold_inlet = 10.0
            "#,
        );
        let path = file.path().to_str().unwrap();
        let cli = Cli::parse_from(["double-pipe", "--config", path, "profile", "--hot-mass-rate", "2.5"]);

        let mut config = Config::load_or_default(cli.config.as_deref()).unwrap();
        assert_eq!(config.exchanger.hot_mass_rate, 1.5);

        let Command::Profile(args) = cli.command else {
            panic!("expected profile command");
        };
        args.apply(&mut config.exchanger);

        assert_eq!(config.exchanger.hot_mass_rate, 2.5);
        assert_eq!(config.exchanger.cold_inlet, 10.0);
        assert_eq!(config.exchanger.length, 1.2);
        assert_eq!(config.animation, AnimationConfig::default());
    }

    #[test]
    fn no_file_gives_defaults() {
        assert_eq!(Config::load_or_default(None).unwrap(), Config::default());
    }

    #[test]
    fn missing_file_is_a_read_error() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("absent.toml");

        let err = Config::load_or_default(Some(&path)).unwrap_err();

        assert!(matches!(err, CliError::Read { path: ref p, .. } if *p == path));
    }

    #[test]
    fn malformed_file_is_a_parse_error() {
        let file = config_file("[exchanger]\nhot_mass_rate = \"fast\"\n");

        let err = Config::load(file.path()).unwrap_err();

        assert!(matches!(err, CliError::Parse { ref path, .. } if path == file.path()));
        assert!(err.to_string().starts_with("invalid configuration in "));
    }

    #[test]
    fn empty_file_gives_defaults() {
        let config: Config = toml::from_str("").unwrap();
        assert_eq!(config, Config::default());
    }

    #[test]
    fn partial_sections_keep_other_defaults() {
        let config: Config = toml::from_str(
            r#"
            [exchanger]
            hot_mass_rate = 1.5
            arrangement = "parallel"

            [animation]
            frames = 50
            "#,
        )
        .unwrap();

        assert_eq!(config.exchanger.hot_mass_rate, 1.5);
        assert_eq!(config.exchanger.cold_mass_rate, 1.0);
        assert_eq!(
            config.exchanger.arrangement(),
            Ok(FlowArrangement::Parallel)
        );
        assert_eq!(config.animation.frames, 50);
        assert_eq!(config.animation.particle_count, 10);
    }

    #[test]
    fn unknown_keys_are_rejected() {
        let result = toml::from_str::<Config>("[exchanger]\nmass_rate = 1.0\n");
        assert!(result.is_err());
    }

    #[test]
    fn unknown_arrangement_surfaces_as_invalid_parameter() {
        let exchanger = ExchangerConfig {
            arrangement: "shell-and-tube".into(),
            ..ExchangerConfig::default()
        };

        assert_eq!(
            exchanger.parameters(),
            Err(InvalidParameter::FlowArrangement("shell-and-tube".into()))
        );
    }

    #[test]
    fn defaults_convert_to_model_inputs() {
        let exchanger = ExchangerConfig::default();

        let params = exchanger.parameters().unwrap();

        assert_eq!(params.arrangement, FlowArrangement::Counter);
        assert_eq!(params.length.get::<meter>(), 1.2);
        assert_eq!(exchanger.resolution().map(Resolution::get), Ok(100));
        assert_eq!(
            AnimationConfig::default().flow_config(),
            ParticleFlowConfig::default()
        );
    }
}
