use crate::support::hx::{CapacityRatio, Effectiveness, Ntu};
use uom::si::f64::{Length, Power, ThermodynamicTemperature};

use super::FlowArrangement;

/// Steady-state temperatures of both streams along the exchanger.
///
/// `positions`, `hot`, and `cold` have the same length. Positions run from
/// the hot inlet (0) to the far end (`length`) and are strictly increasing.
#[derive(Debug, Clone)]
pub struct TemperatureProfile {
    /// Flow arrangement the profile was computed for.
    pub arrangement: FlowArrangement,

    /// Sample positions measured from the hot inlet.
    pub positions: Vec<Length>,

    /// Hot stream temperature at each position.
    pub hot: Vec<ThermodynamicTemperature>,

    /// Cold stream temperature at each position.
    pub cold: Vec<ThermodynamicTemperature>,

    /// Number of transfer units, referenced to the cold stream.
    pub ntu: Ntu,

    /// Capacity ratio of the two streams.
    pub capacity_ratio: CapacityRatio,

    /// Exchanger effectiveness.
    pub effectiveness: Effectiveness,

    /// Heat transferred from the hot stream to the cold stream.
    ///
    /// Negative when the hot inlet is colder than the cold inlet.
    pub heat_rate: Power,
}

/// One sample of a [`TemperatureProfile`].
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ProfileNode {
    pub position: Length,
    pub hot: ThermodynamicTemperature,
    pub cold: ThermodynamicTemperature,
}

impl TemperatureProfile {
    /// Number of samples.
    #[must_use]
    pub fn len(&self) -> usize {
        self.positions.len()
    }

    /// Returns `true` if the profile holds no samples.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.positions.is_empty()
    }

    /// Iterates over samples from the inlet end.
    pub fn nodes(&self) -> impl Iterator<Item = ProfileNode> + '_ {
        self.positions
            .iter()
            .zip(&self.hot)
            .zip(&self.cold)
            .map(|((&position, &hot), &cold)| ProfileNode {
                position,
                hot,
                cold,
            })
    }

    /// Sample at the far end of the exchanger (`x = length`).
    #[must_use]
    pub fn last_node(&self) -> Option<ProfileNode> {
        self.nodes().last()
    }

    /// Hot stream temperature leaving the exchanger at `x = length`.
    #[must_use]
    pub fn hot_outlet(&self) -> Option<ThermodynamicTemperature> {
        self.hot.last().copied()
    }

    /// Cold stream temperature at `x = length`.
    ///
    /// With the linear profile this is the cold outlet for either
    /// arrangement.
    #[must_use]
    pub fn cold_outlet(&self) -> Option<ThermodynamicTemperature> {
        self.cold.last().copied()
    }
}

#[cfg(test)]
mod tests {
    use uom::si::{length::meter, power::watt, thermodynamic_temperature::degree_celsius};

    use super::*;

    fn celsius(values: &[f64]) -> Vec<ThermodynamicTemperature> {
        values
            .iter()
            .map(|&t| ThermodynamicTemperature::new::<degree_celsius>(t))
            .collect()
    }

    fn profile(hot: &[f64], cold: &[f64]) -> TemperatureProfile {
        TemperatureProfile {
            arrangement: FlowArrangement::Counter,
            positions: (0..hot.len())
                .map(|i| Length::new::<meter>(i as f64))
                .collect(),
            hot: celsius(hot),
            cold: celsius(cold),
            ntu: Ntu::new(0.5).unwrap(),
            capacity_ratio: CapacityRatio::new(1.0).unwrap(),
            effectiveness: Effectiveness::new(0.25).unwrap(),
            heat_rate: Power::new::<watt>(100.0),
        }
    }

    #[test]
    fn outlets_are_the_last_samples() {
        let profile = profile(&[80.0, 75.0, 70.0], &[20.0, 22.0, 24.0]);

        assert_eq!(profile.len(), 3);
        assert_eq!(
            profile.hot_outlet(),
            Some(ThermodynamicTemperature::new::<degree_celsius>(70.0))
        );
        assert_eq!(
            profile.cold_outlet(),
            Some(ThermodynamicTemperature::new::<degree_celsius>(24.0))
        );
        assert_eq!(
            profile.last_node().map(|node| node.position),
            Some(Length::new::<meter>(2.0))
        );
    }

    #[test]
    fn empty_profile_has_no_outlets() {
        let profile = profile(&[], &[]);

        assert!(profile.is_empty());
        assert_eq!(profile.hot_outlet(), None);
        assert_eq!(profile.cold_outlet(), None);
        assert_eq!(profile.nodes().count(), 0);
    }
}
