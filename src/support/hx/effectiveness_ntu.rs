use std::ops::Deref;

use crate::support::constraint::{Constrained, ConstraintResult, NonNegative, UnitInterval};
use uom::si::{
    f64::{Ratio, ThermalConductance},
    ratio::ratio,
};

use super::{CapacitanceRate, CapacityRatio};

/// The effectiveness of a heat exchanger.
///
/// The ratio of the heat actually transferred to the most that could be
/// transferred between the two inlet temperatures. Always in [0, 1].
#[derive(Debug, Clone, Copy)]
pub struct Effectiveness(Constrained<Ratio, UnitInterval>);

impl Effectiveness {
    /// Create an [`Effectiveness`] from a scalar value.
    ///
    /// # Errors
    ///
    /// Returns `Err` if the value lies outside [0, 1].
    pub fn new(value: f64) -> ConstraintResult<Self> {
        Self::from_quantity(Ratio::new::<ratio>(value))
    }

    /// Create an [`Effectiveness`] from a ratio quantity.
    ///
    /// # Errors
    ///
    /// Returns `Err` if the quantity lies outside [0, 1].
    pub fn from_quantity(quantity: Ratio) -> ConstraintResult<Self> {
        Ok(Self(UnitInterval::new(quantity)?))
    }

    /// Effectiveness of a two-stream exchanger from its NTU and capacity
    /// ratio.
    ///
    /// Uses the closed form
    ///
    /// ```text
    /// ε = (1 − exp(−NTU·(1 − Cr))) / (1 − Cr·exp(−NTU·(1 − Cr)))
    /// ```
    ///
    /// which is 0/0 for balanced flow. At `Cr = 1` the limit
    /// `ε = NTU / (1 + NTU)` is returned instead.
    #[must_use]
    pub fn from_ntu_and_capacity_ratio(ntu: Ntu, capacity_ratio: CapacityRatio) -> Self {
        let ntu = ntu.get::<ratio>();
        let cr = capacity_ratio.get::<ratio>();

        let value = if ntu.is_infinite() {
            1.
        } else if capacity_ratio.is_balanced() {
            ntu / (1. + ntu)
        } else {
            let decay = (-ntu * (1. - cr)).exp();
            (1. - decay) / (1. - cr * decay)
        };

        Self::new(value).expect("ntu should always yield valid effectiveness")
    }
}

impl Deref for Effectiveness {
    type Target = Ratio;

    fn deref(&self) -> &Self::Target {
        self.0.as_ref()
    }
}

/// The number of transfer units of a heat exchanger.
///
/// The dimensionless thermal size of the exchanger, always >= 0.
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd)]
pub struct Ntu(Constrained<Ratio, NonNegative>);

impl Ntu {
    /// Create an [`Ntu`] from a scalar value.
    ///
    /// # Errors
    ///
    /// Returns `Err` if the value is negative.
    pub fn new(value: f64) -> ConstraintResult<Self> {
        Self::from_quantity(Ratio::new::<ratio>(value))
    }

    /// Create an [`Ntu`] from a ratio quantity.
    ///
    /// # Errors
    ///
    /// Returns `Err` if the quantity is negative.
    pub fn from_quantity(quantity: Ratio) -> ConstraintResult<Self> {
        Ok(Self(NonNegative::new(quantity)?))
    }

    /// Create an [`Ntu`] from the exchanger conductance and the capacitance
    /// rate of the stream the NTU is referenced to.
    ///
    /// The textbook definition references `C_min`; callers choose which
    /// stream to pass.
    ///
    /// # Errors
    ///
    /// Returns `Err` if `ua` is negative.
    pub fn from_conductance_and_capacitance_rate(
        ua: ThermalConductance,
        reference: CapacitanceRate,
    ) -> ConstraintResult<Self> {
        Self::from_quantity(ua / *reference)
    }
}

impl Deref for Ntu {
    type Target = Ratio;

    fn deref(&self) -> &Self::Target {
        self.0.as_ref()
    }
}

#[cfg(test)]
mod tests {
    use approx::assert_relative_eq;
    use uom::si::thermal_conductance::watt_per_kelvin;

    use super::*;

    #[test]
    fn ntu_references_the_given_stream() -> ConstraintResult<()> {
        let ua = ThermalConductance::new::<watt_per_kelvin>(100.);
        let reference = CapacitanceRate::new::<watt_per_kelvin>(400.)?;

        let ntu = Ntu::from_conductance_and_capacitance_rate(ua, reference)?;

        assert_relative_eq!(ntu.get::<ratio>(), 0.25);
        Ok(())
    }

    #[test]
    fn balanced_flow_uses_limit() -> ConstraintResult<()> {
        for ntu in [0., 0.0613, 0.5, 1., 5.] {
            let eff = Effectiveness::from_ntu_and_capacity_ratio(
                Ntu::new(ntu)?,
                CapacityRatio::new(1.)?,
            );
            assert_relative_eq!(eff.get::<ratio>(), ntu / (1. + ntu));
        }
        Ok(())
    }

    #[test]
    fn general_form_approaches_balanced_limit() -> ConstraintResult<()> {
        for ntu in [0.1, 1., 3.] {
            let limit = Effectiveness::from_ntu_and_capacity_ratio(
                Ntu::new(ntu)?,
                CapacityRatio::new(1.)?,
            );
            let near = Effectiveness::from_ntu_and_capacity_ratio(
                Ntu::new(ntu)?,
                CapacityRatio::new(1. - 1e-7)?,
            );
            assert_relative_eq!(
                near.get::<ratio>(),
                limit.get::<ratio>(),
                max_relative = 1e-6
            );
        }
        Ok(())
    }

    #[test]
    fn single_stream_limit() -> ConstraintResult<()> {
        let eff = Effectiveness::from_ntu_and_capacity_ratio(Ntu::new(2.)?, CapacityRatio::new(0.)?);
        assert_relative_eq!(eff.get::<ratio>(), 1. - (-2.0_f64).exp());
        Ok(())
    }

    #[test]
    fn effectiveness_stays_in_unit_interval() -> ConstraintResult<()> {
        for ntu in [0., 1e-6, 0.3, 2., 50., f64::INFINITY] {
            for cr in [0., 0.25, 0.5, 0.999, 1.] {
                let eff = Effectiveness::from_ntu_and_capacity_ratio(
                    Ntu::new(ntu)?,
                    CapacityRatio::new(cr)?,
                );
                let value = eff.get::<ratio>();
                assert!((0.0..=1.0).contains(&value), "ntu={ntu} cr={cr} eff={value}");
            }
        }
        Ok(())
    }

    #[test]
    fn zero_ntu_moves_no_heat() -> ConstraintResult<()> {
        let eff = Effectiveness::from_ntu_and_capacity_ratio(Ntu::new(0.)?, CapacityRatio::new(0.5)?);
        assert_eq!(eff.get::<ratio>(), 0.);
        Ok(())
    }
}
