use std::path::PathBuf;

use clap::{Args, Parser, Subcommand, ValueEnum};
use double_pipe_hx::models::thermal::double_pipe::FlowArrangement;

use crate::config::{AnimationConfig, ExchangerConfig};

/// Temperature profiles and flow animation frames of a double-pipe heat exchanger.
///
/// Values given on the command line override the configuration file, which
/// overrides the built-in defaults. Set `RUST_LOG=debug` to see the computed
/// NTU and effectiveness.
#[derive(Debug, Parser)]
#[command(name = "double-pipe", version)]
pub struct Cli {
    /// TOML configuration file.
    #[arg(long, short, global = true, value_name = "FILE")]
    pub config: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Debug, Subcommand)]
pub enum Command {
    /// Print hot and cold temperatures along the exchanger.
    Profile(ProfileArgs),
    /// Print particle positions for a run of animation frames.
    Particles(ParticlesArgs),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, ValueEnum)]
pub enum Format {
    #[default]
    Table,
    Csv,
}

#[derive(Debug, Args)]
pub struct ProfileArgs {
    /// Hot stream mass flow rate, kg/s.
    #[arg(long, value_name = "KG_PER_S")]
    pub hot_mass_rate: Option<f64>,

    /// Cold stream mass flow rate, kg/s.
    #[arg(long, value_name = "KG_PER_S")]
    pub cold_mass_rate: Option<f64>,

    /// Hot stream inlet temperature, °C.
    #[arg(long, value_name = "CELSIUS", allow_negative_numbers = true)]
    pub hot_inlet: Option<f64>,

    /// Cold stream inlet temperature, °C.
    #[arg(long, value_name = "CELSIUS", allow_negative_numbers = true)]
    pub cold_inlet: Option<f64>,

    /// Exchanger length, m.
    #[arg(long, value_name = "METERS")]
    pub length: Option<f64>,

    /// `counter` or `parallel`.
    #[arg(long, short)]
    pub arrangement: Option<FlowArrangement>,

    /// Number of samples along the exchanger.
    #[arg(long, short)]
    pub resolution: Option<usize>,

    #[arg(long, short, value_enum, default_value_t)]
    pub format: Format,
}

impl ProfileArgs {
    pub fn apply(&self, config: &mut ExchangerConfig) {
        override_with(&mut config.hot_mass_rate, self.hot_mass_rate);
        override_with(&mut config.cold_mass_rate, self.cold_mass_rate);
        override_with(&mut config.hot_inlet, self.hot_inlet);
        override_with(&mut config.cold_inlet, self.cold_inlet);
        override_with(&mut config.length, self.length);
        override_with(&mut config.resolution, self.resolution);
        if let Some(arrangement) = self.arrangement {
            config.arrangement = arrangement.label().to_owned();
        }
    }
}

#[derive(Debug, Args)]
pub struct ParticlesArgs {
    /// `counter` or `parallel`; defaults to the exchanger arrangement.
    #[arg(long, short)]
    pub arrangement: Option<FlowArrangement>,

    /// Number of frames to print, starting at frame 0.
    #[arg(long, short = 'n')]
    pub frames: Option<u32>,

    /// Particles per stream.
    #[arg(long)]
    pub particle_count: Option<usize>,

    /// Axial advance per frame, m.
    #[arg(long, value_name = "METERS")]
    pub step: Option<f64>,

    #[arg(long, short, value_enum, default_value_t)]
    pub format: Format,
}

impl ParticlesArgs {
    pub fn apply(&self, config: &mut AnimationConfig) {
        override_with(&mut config.frames, self.frames);
        override_with(&mut config.particle_count, self.particle_count);
        override_with(&mut config.step, self.step);
    }
}

fn override_with<T>(slot: &mut T, value: Option<T>) {
    if let Some(value) = value {
        *slot = value;
    }
}

#[cfg(test)]
mod tests {
    use clap::CommandFactory;

    use super::*;

    #[test]
    fn command_definition_is_consistent() {
        Cli::command().debug_assert();
    }

    #[test]
    fn profile_flags_override_config() {
        let cli = Cli::parse_from([
            "double-pipe",
            "profile",
            "--hot-mass-rate",
            "2.0",
            "--cold-inlet",
            "-5",
            "--arrangement",
            "parallel",
            "--format",
            "csv",
        ]);
        let Command::Profile(args) = cli.command else {
            panic!("expected profile command");
        };

        let mut config = ExchangerConfig::default();
        args.apply(&mut config);

        assert_eq!(config.hot_mass_rate, 2.0);
        assert_eq!(config.cold_mass_rate, 1.0);
        assert_eq!(config.cold_inlet, -5.0);
        assert_eq!(config.arrangement, "parallel");
        assert_eq!(args.format, Format::Csv);
    }

    #[test]
    fn bad_arrangement_is_a_usage_error() {
        let result = Cli::try_parse_from(["double-pipe", "profile", "--arrangement", "cross"]);
        assert!(result.is_err());
    }

    #[test]
    fn config_flag_is_global() {
        let cli = Cli::parse_from(["double-pipe", "particles", "--config", "hx.toml", "-n", "5"]);

        assert_eq!(cli.config, Some(PathBuf::from("hx.toml")));
        let Command::Particles(args) = cli.command else {
            panic!("expected particles command");
        };
        assert_eq!(args.frames, Some(5));
        assert_eq!(args.format, Format::Table);
    }
}
