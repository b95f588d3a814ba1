use std::f64::consts::TAU;

use crate::support::constraint::{NonNegative, StrictlyPositive};
use uom::si::{f64::Length, length::meter};

use super::{FlowArrangement, InvalidParameter, Parameter, input::finite};

/// Geometry and pace of the particle-flow animation.
///
/// The pipe is centred on the origin with its axis along `z`. Inner-tube
/// particles ride the axis; annulus particles ride the mean radius between
/// the two tubes.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ParticleFlowConfig {
    /// Axial length of the drawn pipe.
    pub length: Length,
    /// Radius of the inner (hot) tube.
    pub inner_radius: Length,
    /// Radius of the outer (cold) tube.
    pub outer_radius: Length,
    /// Particles per stream.
    pub particle_count: usize,
    /// Axial distance each particle advances per frame. Steps longer than
    /// the pipe wrap around.
    pub step: Length,
}

impl Default for ParticleFlowConfig {
    fn default() -> Self {
        Self {
            length: Length::new::<meter>(10.0),
            inner_radius: Length::new::<meter>(0.5),
            outer_radius: Length::new::<meter>(1.0),
            particle_count: 10,
            step: Length::new::<meter>(0.05),
        }
    }
}

/// Location of one particle.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ParticlePosition {
    pub x: Length,
    pub y: Length,
    /// Axial coordinate, in `[-length/2, length/2)`.
    pub z: Length,
}

/// Particle positions of both streams for one animation frame.
#[derive(Debug, Clone, PartialEq)]
pub struct ParticleFrame {
    pub frame: u32,
    /// Particles in the inner tube.
    pub inner: Vec<ParticlePosition>,
    /// Particles in the annulus between the tubes.
    pub annulus: Vec<ParticlePosition>,
}

/// A validated [`ParticleFlowConfig`], in meters.
#[derive(Debug, Clone, Copy, PartialEq)]
pub(crate) struct ParticleGeometry {
    length: f64,
    mean_radius: f64,
    particle_count: usize,
    step: f64,
}

impl ParticleFlowConfig {
    pub(crate) fn validate(&self) -> Result<ParticleGeometry, InvalidParameter> {
        finite(Parameter::Length, self.length.value)?;
        finite(Parameter::InnerRadius, self.inner_radius.value)?;
        finite(Parameter::OuterRadius, self.outer_radius.value)?;
        finite(Parameter::Step, self.step.value)?;

        let length = StrictlyPositive::new(self.length.get::<meter>())
            .map_err(InvalidParameter::not_positive(Parameter::Length))?;
        let inner_radius = StrictlyPositive::new(self.inner_radius.get::<meter>())
            .map_err(InvalidParameter::not_positive(Parameter::InnerRadius))?;
        let outer_radius = StrictlyPositive::new(self.outer_radius.get::<meter>())
            .map_err(InvalidParameter::not_positive(Parameter::OuterRadius))?;
        let particle_count = StrictlyPositive::new(self.particle_count)
            .map_err(InvalidParameter::not_positive(Parameter::ParticleCount))?;
        let step = NonNegative::new(self.step.get::<meter>())
            .map_err(InvalidParameter::negative(Parameter::Step))?;

        let (inner_radius, outer_radius) = (inner_radius.into_inner(), outer_radius.into_inner());
        if inner_radius >= outer_radius {
            return Err(InvalidParameter::RadiusOrder);
        }

        // The axial travel `step·frame` stays below `length·u32::MAX` once the
        // step is folded into `[0, length)`, so it must not overflow.
        let length = length.into_inner();
        finite(Parameter::Length, length * f64::from(u32::MAX))?;

        Ok(ParticleGeometry {
            length,
            mean_radius: 0.5 * (inner_radius + outer_radius),
            particle_count: particle_count.into_inner(),
            step: step.into_inner().rem_euclid(length),
        })
    }
}

impl ParticleGeometry {
    /// Positions for `frame`, derived from the frame index alone.
    pub(crate) fn frame(&self, arrangement: FlowArrangement, frame: u32) -> ParticleFrame {
        let count = self.particle_count as f64;
        let offset = (self.step * f64::from(frame)).rem_euclid(self.length);
        let annulus_offset = match arrangement {
            FlowArrangement::Parallel => offset,
            FlowArrangement::Counter => -offset,
        };

        let slot = |k: usize| -0.5 * self.length + self.length * (k as f64) / count;

        let inner = (0..self.particle_count)
            .map(|k| position(0.0, 0.0, self.wrap(slot(k) + offset)))
            .collect();

        let annulus = (0..self.particle_count)
            .map(|k| {
                let angle = TAU * (k as f64) / count;
                position(
                    self.mean_radius * angle.cos(),
                    self.mean_radius * angle.sin(),
                    self.wrap(slot(k) + annulus_offset),
                )
            })
            .collect();

        log::trace!("particle frame {frame}: axial offset {offset:.4} m");

        ParticleFrame {
            frame,
            inner,
            annulus,
        }
    }

    /// Folds an axial coordinate back into `[-length/2, length/2)`.
    fn wrap(&self, z: f64) -> f64 {
        let shifted = (z + 0.5 * self.length).rem_euclid(self.length);
        // rem_euclid may round up to the divisor itself
        let shifted = if shifted >= self.length { 0.0 } else { shifted };
        shifted - 0.5 * self.length
    }
}

fn position(x: f64, y: f64, z: f64) -> ParticlePosition {
    ParticlePosition {
        x: Length::new::<meter>(x),
        y: Length::new::<meter>(y),
        z: Length::new::<meter>(z),
    }
}

/// Particle positions for one frame of the flow animation.
///
/// Inner-tube particles always advance toward `+z`. Annulus particles advance
/// toward `+z` for parallel flow and toward `-z` for counter flow. Particles
/// leaving one end of the pipe re-enter at the other.
///
/// # Errors
///
/// Returns [`InvalidParameter`] if the configuration is not usable.
pub fn particle_frame(
    config: &ParticleFlowConfig,
    arrangement: FlowArrangement,
    frame: u32,
) -> Result<ParticleFrame, InvalidParameter> {
    Ok(config.validate()?.frame(arrangement, frame))
}
