use std::{fmt, str::FromStr};

use crate::support::{
    constraint::{Constrained, StrictlyPositive},
    hx::CapacitanceRate,
};
use uom::si::f64::{Length, MassRate, SpecificHeatCapacity, ThermodynamicTemperature};

use super::{InvalidParameter, Parameter};

/// Relative direction of the two streams.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum FlowArrangement {
    /// Both streams enter at the same end.
    Parallel,
    /// The streams enter at opposite ends.
    #[default]
    Counter,
}

impl FlowArrangement {
    /// The lowercase label used in configuration files and on the command line.
    #[must_use]
    pub fn label(self) -> &'static str {
        match self {
            Self::Parallel => "parallel",
            Self::Counter => "counter",
        }
    }
}

impl fmt::Display for FlowArrangement {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

impl FromStr for FlowArrangement {
    type Err = InvalidParameter;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let label = s.trim();
        if label.eq_ignore_ascii_case("parallel") {
            Ok(Self::Parallel)
        } else if label.eq_ignore_ascii_case("counter") {
            Ok(Self::Counter)
        } else {
            Err(InvalidParameter::FlowArrangement(s.to_owned()))
        }
    }
}

/// Operating conditions of a double-pipe exchanger.
///
/// Mass rates and length must be finite and strictly positive, and inlet
/// temperatures finite. A hot inlet colder than the cold inlet is accepted;
/// heat then flows the other way.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ExchangerParameters {
    /// Mass flow rate of the hot stream.
    pub hot_mass_rate: MassRate,
    /// Mass flow rate of the cold stream.
    pub cold_mass_rate: MassRate,
    /// Hot stream inlet temperature.
    pub hot_inlet: ThermodynamicTemperature,
    /// Cold stream inlet temperature.
    pub cold_inlet: ThermodynamicTemperature,
    /// Exchanger length.
    pub length: Length,
    /// Flow arrangement, reported with the profile.
    pub arrangement: FlowArrangement,
}

/// [`ExchangerParameters`] after validation.
#[derive(Debug, Clone, Copy)]
pub(super) struct Validated {
    pub(super) hot: CapacitanceRate,
    pub(super) cold: CapacitanceRate,
    pub(super) hot_inlet: ThermodynamicTemperature,
    pub(super) cold_inlet: ThermodynamicTemperature,
    pub(super) length: Constrained<Length, StrictlyPositive>,
}

impl ExchangerParameters {
    /// Checks every field and converts flow rates to capacitance rates.
    pub(super) fn validate(
        &self,
        specific_heat: SpecificHeatCapacity,
    ) -> Result<Validated, InvalidParameter> {
        finite(Parameter::HotMassRate, self.hot_mass_rate.value)?;
        finite(Parameter::ColdMassRate, self.cold_mass_rate.value)?;
        finite(Parameter::HotInlet, self.hot_inlet.value)?;
        finite(Parameter::ColdInlet, self.cold_inlet.value)?;
        finite(Parameter::Length, self.length.value)?;

        let hot = CapacitanceRate::from_mass_rate_and_specific_heat(self.hot_mass_rate, specific_heat)
            .map_err(InvalidParameter::not_positive(Parameter::HotMassRate))?;
        let cold =
            CapacitanceRate::from_mass_rate_and_specific_heat(self.cold_mass_rate, specific_heat)
                .map_err(InvalidParameter::not_positive(Parameter::ColdMassRate))?;
        let length = StrictlyPositive::new(self.length)
            .map_err(InvalidParameter::not_positive(Parameter::Length))?;

        // ṁ·c_p overflows for mass rates near f64::MAX
        finite(Parameter::HotMassRate, hot.value)?;
        finite(Parameter::ColdMassRate, cold.value)?;

        Ok(Validated {
            hot,
            cold,
            hot_inlet: self.hot_inlet,
            cold_inlet: self.cold_inlet,
            length,
        })
    }
}

pub(super) fn finite(parameter: Parameter, value: f64) -> Result<(), InvalidParameter> {
    if value.is_finite() {
        Ok(())
    } else {
        Err(InvalidParameter::NotFinite { parameter })
    }
}

/// Number of evenly spaced samples along the exchanger, including both ends.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Resolution(usize);

impl Resolution {
    /// Samples used when none are requested.
    pub const DEFAULT: usize = 100;

    /// Create a [`Resolution`] of `samples` points.
    ///
    /// # Errors
    ///
    /// Returns [`InvalidParameter::Resolution`] for fewer than 2 samples,
    /// since both ends of the exchanger must be sampled.
    pub fn new(samples: usize) -> Result<Self, InvalidParameter> {
        if samples < 2 {
            return Err(InvalidParameter::Resolution(samples));
        }
        Ok(Self(samples))
    }

    /// Number of samples.
    #[must_use]
    pub fn get(self) -> usize {
        self.0
    }
}

impl Default for Resolution {
    fn default() -> Self {
        Self(Self::DEFAULT)
    }
}
