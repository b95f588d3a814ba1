use std::ops::Deref;

use crate::support::constraint::{Constrained, ConstraintResult, StrictlyPositive};
use uom::si::f64::{MassRate, SpecificHeatCapacity, ThermalConductance};

/// Capacitance rate (`ṁ·c_p`) of one stream.
///
/// Always strictly positive.
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd)]
pub struct CapacitanceRate(Constrained<ThermalConductance, StrictlyPositive>);

impl CapacitanceRate {
    /// Create a [`CapacitanceRate`] from a scalar in unit `U`.
    ///
    /// # Errors
    ///
    /// Returns `Err` if the value is not strictly positive.
    pub fn new<U>(value: f64) -> ConstraintResult<Self>
    where
        U: uom::si::thermal_conductance::Unit + uom::Conversion<f64, T = f64>,
    {
        Self::from_quantity(ThermalConductance::new::<U>(value))
    }

    /// Create a [`CapacitanceRate`] from a thermal-conductance quantity.
    ///
    /// # Errors
    ///
    /// Returns `Err` if the quantity is not strictly positive.
    pub fn from_quantity(quantity: ThermalConductance) -> ConstraintResult<Self> {
        Ok(Self(StrictlyPositive::new(quantity)?))
    }

    /// Create a [`CapacitanceRate`] from a stream's mass rate and specific
    /// heat.
    ///
    /// # Errors
    ///
    /// Returns `Err` if the product is not strictly positive.
    pub fn from_mass_rate_and_specific_heat(
        mass_rate: MassRate,
        specific_heat: SpecificHeatCapacity,
    ) -> ConstraintResult<Self> {
        Self::from_quantity(mass_rate * specific_heat)
    }
}

impl Deref for CapacitanceRate {
    type Target = ThermalConductance;

    fn deref(&self) -> &Self::Target {
        self.0.as_ref()
    }
}

#[cfg(test)]
mod tests {
    use approx::assert_relative_eq;
    use uom::si::{
        mass_rate::kilogram_per_second, specific_heat_capacity::joule_per_kilogram_kelvin,
        thermal_conductance::watt_per_kelvin,
    };

    use super::*;

    #[test]
    fn water_at_one_kilogram_per_second() -> ConstraintResult<()> {
        let capacitance_rate = CapacitanceRate::from_mass_rate_and_specific_heat(
            MassRate::new::<kilogram_per_second>(1.0),
            SpecificHeatCapacity::new::<joule_per_kilogram_kelvin>(4186.0),
        )?;

        assert_relative_eq!(capacitance_rate.get::<watt_per_kelvin>(), 4186.0);
        Ok(())
    }

    #[test]
    fn stagnant_stream_is_rejected() {
        let result = CapacitanceRate::from_mass_rate_and_specific_heat(
            MassRate::new::<kilogram_per_second>(0.0),
            SpecificHeatCapacity::new::<joule_per_kilogram_kelvin>(4186.0),
        );

        assert!(result.is_err());
    }
}
