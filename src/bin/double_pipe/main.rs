//! Command-line front end for the double-pipe heat exchanger model.

mod cli;
mod config;
mod output;

use std::{
    error::Error as _,
    io::{self, BufWriter, Write},
    path::PathBuf,
    process::ExitCode,
};

use clap::Parser;
use double_pipe_hx::models::thermal::double_pipe::{DoublePipeHx, InvalidParameter, ParticleFlow};
use thiserror::Error;
use twine_core::Model;

use cli::{Cli, Command, ParticlesArgs, ProfileArgs};
use config::Config;

#[derive(Debug, Error)]
pub enum CliError {
    #[error("failed to read {}", path.display())]
    Read { path: PathBuf, source: io::Error },

    #[error("invalid configuration in {}", path.display())]
    Parse {
        path: PathBuf,
        source: toml::de::Error,
    },

    #[error(transparent)]
    Parameter(#[from] InvalidParameter),

    #[error("failed to write output")]
    Write(#[from] io::Error),
}

fn main() -> ExitCode {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();

    match run(Cli::parse()) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            let mut message = err.to_string();
            let mut source = err.source();
            while let Some(cause) = source {
                message.push_str(&format!(": {cause}"));
                source = cause.source();
            }
            log::error!("{message}");
            ExitCode::FAILURE
        }
    }
}

fn run(cli: Cli) -> Result<(), CliError> {
    let mut config = Config::load_or_default(cli.config.as_deref())?;
    let stdout = io::stdout();
    let mut out = BufWriter::new(stdout.lock());

    match cli.command {
        Command::Profile(args) => profile(&args, &mut config, &mut out)?,
        Command::Particles(args) => particles(&args, &mut config, &mut out)?,
    }

    out.flush()?;
    Ok(())
}

fn profile(args: &ProfileArgs, config: &mut Config, out: &mut impl Write) -> Result<(), CliError> {
    args.apply(&mut config.exchanger);

    let params = config.exchanger.parameters()?;
    let model = DoublePipeHx::new(config.exchanger.resolution()?);
    let profile = model.call(&params)?;
    log::info!(
        "computed {} samples over {} m",
        profile.len(),
        config.exchanger.length
    );

    output::write_profile(out, &profile, args.format)?;
    Ok(())
}

fn particles(
    args: &ParticlesArgs,
    config: &mut Config,
    out: &mut impl Write,
) -> Result<(), CliError> {
    args.apply(&mut config.animation);

    let arrangement = match args.arrangement {
        Some(arrangement) => arrangement,
        None => config.exchanger.arrangement()?,
    };
    let model = ParticleFlow::new(&config.animation.flow_config(), arrangement)?;
    log::info!(
        "rendering {} {arrangement}-flow frames",
        config.animation.frames
    );

    let frames = (0..config.animation.frames).map(|frame| {
        let Ok(frame) = model.call(&frame);
        frame
    });
    output::write_frames(out, frames, args.format)?;
    Ok(())
}
