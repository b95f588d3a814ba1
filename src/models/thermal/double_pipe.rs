//! Double-pipe heat exchanger model.
//!
//! [`DoublePipeHx`] maps [`ExchangerParameters`] to a [`TemperatureProfile`]
//! of both streams along the exchanger. [`ParticleFlow`] gives the particle
//! positions of an illustrative flow animation, one frame at a time.
//!
//! # Example
//!
//! ```
//! use double_pipe_hx::models::thermal::double_pipe::{
//!     DoublePipeHx, ExchangerParameters, FlowArrangement,
//! };
//! use twine_core::Model;
//! use uom::si::{
//!     f64::{Length, MassRate, ThermodynamicTemperature},
//!     length::meter,
//!     mass_rate::kilogram_per_second,
//!     thermodynamic_temperature::degree_celsius,
//! };
//!
//! let params = ExchangerParameters {
//!     hot_mass_rate: MassRate::new::<kilogram_per_second>(1.0),
//!     cold_mass_rate: MassRate::new::<kilogram_per_second>(1.0),
//!     hot_inlet: ThermodynamicTemperature::new::<degree_celsius>(70.0),
//!     cold_inlet: ThermodynamicTemperature::new::<degree_celsius>(20.0),
//!     length: Length::new::<meter>(1.2),
//!     arrangement: "counter".parse::<FlowArrangement>()?,
//! };
//!
//! let profile = DoublePipeHx::default().call(&params)?;
//!
//! assert_eq!(profile.len(), 100);
//! assert_eq!(profile.hot[0], params.hot_inlet);
//! # Ok::<(), double_pipe_hx::models::thermal::double_pipe::InvalidParameter>(())
//! ```

mod core;

pub use self::core::{
    ExchangerParameters, FlowArrangement, InvalidParameter, Parameter, ParticleFlowConfig,
    ParticleFrame, ParticlePosition, ProfileNode, Resolution, TemperatureProfile, compute,
    particle_frame,
};

use std::convert::Infallible;

use twine_core::Model;

use self::core::ParticleGeometry;

/// Steady-state temperature profile model.
///
/// Holds the sample count; everything else comes with each input.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct DoublePipeHx {
    resolution: Resolution,
}

impl DoublePipeHx {
    /// Create a model sampling `resolution` points per profile.
    #[must_use]
    pub fn new(resolution: Resolution) -> Self {
        Self { resolution }
    }

    /// Samples per profile.
    #[must_use]
    pub fn resolution(&self) -> Resolution {
        self.resolution
    }
}

impl Model for DoublePipeHx {
    type Input = ExchangerParameters;
    type Output = TemperatureProfile;
    type Error = InvalidParameter;

    fn call(&self, input: &Self::Input) -> Result<Self::Output, Self::Error> {
        compute(input, self.resolution)
    }
}

/// Particle-flow animation model.
///
/// The geometry is validated once by [`ParticleFlow::new`]; each call then
/// maps a frame index to that frame's particle positions.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ParticleFlow {
    geometry: ParticleGeometry,
    arrangement: FlowArrangement,
}

impl ParticleFlow {
    /// Create an animation model for the given geometry and arrangement.
    ///
    /// # Errors
    ///
    /// Returns [`InvalidParameter`] if the configuration is not usable.
    pub fn new(
        config: &ParticleFlowConfig,
        arrangement: FlowArrangement,
    ) -> Result<Self, InvalidParameter> {
        Ok(Self {
            geometry: config.validate()?,
            arrangement,
        })
    }

    /// Flow arrangement driving the annulus particles.
    #[must_use]
    pub fn arrangement(&self) -> FlowArrangement {
        self.arrangement
    }
}

impl Model for ParticleFlow {
    type Input = u32;
    type Output = ParticleFrame;
    type Error = Infallible;

    fn call(&self, input: &Self::Input) -> Result<Self::Output, Self::Error> {
        Ok(self.geometry.frame(self.arrangement, *input))
    }
}
