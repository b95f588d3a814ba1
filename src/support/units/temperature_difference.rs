use uom::si::{
    f64::{TemperatureInterval, ThermodynamicTemperature},
    temperature_interval::kelvin as delta_kelvin,
    thermodynamic_temperature::kelvin as abs_kelvin,
};

/// Subtraction of absolute temperatures yielding a [`TemperatureInterval`].
///
/// See [uom#380](https://github.com/iliekturtles/uom/issues/380) for why this
/// is not an operator.
pub trait TemperatureDifference {
    /// Returns `self - other`.
    fn minus(self, other: Self) -> TemperatureInterval;
}

impl TemperatureDifference for ThermodynamicTemperature {
    fn minus(self, other: Self) -> TemperatureInterval {
        TemperatureInterval::new::<delta_kelvin>(
            self.get::<abs_kelvin>() - other.get::<abs_kelvin>(),
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use approx::assert_relative_eq;
    use uom::si::thermodynamic_temperature::degree_celsius;

    #[test]
    fn inlet_span_keeps_sign() {
        let hot = ThermodynamicTemperature::new::<degree_celsius>(70.0);
        let cold = ThermodynamicTemperature::new::<degree_celsius>(20.0);

        assert_relative_eq!(hot.minus(cold).get::<delta_kelvin>(), 50.0, epsilon = 1e-9);
        assert_relative_eq!(cold.minus(hot).get::<delta_kelvin>(), -50.0, epsilon = 1e-9);
    }

    #[test]
    fn equal_temperatures_give_zero() {
        let t = ThermodynamicTemperature::new::<degree_celsius>(42.0);
        assert_eq!(t.minus(t).get::<delta_kelvin>(), 0.0);
    }
}
