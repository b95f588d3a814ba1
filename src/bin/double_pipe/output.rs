//! Table and CSV rendering of model output.
//!
//! CSV output starts with `#` comment lines carrying the scalar results, so
//! it loads directly into spreadsheet tools and `pandas.read_csv(comment="#")`.

use std::io::{self, Write};

use double_pipe_hx::models::thermal::double_pipe::{ParticleFrame, TemperatureProfile};
use uom::si::{
    length::meter, power::watt, ratio::ratio, thermodynamic_temperature::degree_celsius,
};

use crate::cli::Format;

pub fn write_profile(
    out: &mut impl Write,
    profile: &TemperatureProfile,
    format: Format,
) -> io::Result<()> {
    let prefix = match format {
        Format::Table => "",
        Format::Csv => "# ",
    };
    writeln!(out, "{prefix}arrangement: {}", profile.arrangement)?;
    writeln!(out, "{prefix}ntu: {:.6}", profile.ntu.get::<ratio>())?;
    writeln!(
        out,
        "{prefix}capacity ratio: {:.6}",
        profile.capacity_ratio.get::<ratio>()
    )?;
    writeln!(
        out,
        "{prefix}effectiveness: {:.6}",
        profile.effectiveness.get::<ratio>()
    )?;
    writeln!(out, "{prefix}heat rate: {:.3} W", profile.heat_rate.get::<watt>())?;
    if let (Some(hot), Some(cold)) = (profile.hot_outlet(), profile.cold_outlet()) {
        writeln!(
            out,
            "{prefix}hot outlet: {:.4} °C",
            hot.get::<degree_celsius>()
        )?;
        writeln!(
            out,
            "{prefix}cold outlet: {:.4} °C",
            cold.get::<degree_celsius>()
        )?;
    }

    match format {
        Format::Table => {
            writeln!(out)?;
            writeln!(out, "{:>10}  {:>12}  {:>12}", "x (m)", "hot (°C)", "cold (°C)")?;
            for node in profile.nodes() {
                writeln!(
                    out,
                    "{:>10.4}  {:>12.4}  {:>12.4}",
                    node.position.get::<meter>(),
                    node.hot.get::<degree_celsius>(),
                    node.cold.get::<degree_celsius>(),
                )?;
            }
        }
        Format::Csv => {
            writeln!(out, "position_m,hot_c,cold_c")?;
            for node in profile.nodes() {
                writeln!(
                    out,
                    "{},{},{}",
                    node.position.get::<meter>(),
                    node.hot.get::<degree_celsius>(),
                    node.cold.get::<degree_celsius>(),
                )?;
            }
        }
    }
    Ok(())
}

pub fn write_frames(
    out: &mut impl Write,
    frames: impl IntoIterator<Item = ParticleFrame>,
    format: Format,
) -> io::Result<()> {
    match format {
        Format::Table => writeln!(
            out,
            "{:>6}  {:<8}  {:>3}  {:>8}  {:>8}  {:>8}",
            "frame", "stream", "#", "x (m)", "y (m)", "z (m)"
        )?,
        Format::Csv => writeln!(out, "frame,stream,index,x_m,y_m,z_m")?,
    }

    for frame in frames {
        let streams = [("inner", &frame.inner), ("annulus", &frame.annulus)];
        for (stream, particles) in streams {
            for (index, p) in particles.iter().enumerate() {
                let (x, y, z) = (p.x.get::<meter>(), p.y.get::<meter>(), p.z.get::<meter>());
                match format {
                    Format::Table => writeln!(
                        out,
                        "{:>6}  {stream:<8}  {index:>3}  {x:>8.4}  {y:>8.4}  {z:>8.4}",
                        frame.frame
                    )?,
                    Format::Csv => {
                        writeln!(out, "{},{stream},{index},{x},{y},{z}", frame.frame)?;
                    }
                }
            }
        }
    }
    Ok(())
}
