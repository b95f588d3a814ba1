//! Closed-form steady-state profiles of a double-pipe heat exchanger.
//!
//! Water flows in both the inner tube and the annulus. Properties are
//! constant, so the effectiveness-NTU method gives the total heat duty in
//! closed form, and the duty is spread linearly over the exchanger length.

mod error;
mod input;
mod particles;
mod profile;

pub use error::{InvalidParameter, Parameter};
pub use input::{ExchangerParameters, FlowArrangement, Resolution};
pub use particles::{ParticleFlowConfig, ParticleFrame, ParticlePosition, particle_frame};
pub use profile::{ProfileNode, TemperatureProfile};

pub(crate) use particles::ParticleGeometry;

use std::f64::consts::PI;

use crate::support::{
    hx::{CapacityRatio, Effectiveness, Ntu},
    units::TemperatureDifference,
};
use uom::si::{
    f64::{HeatTransfer, Length, Power, SpecificHeatCapacity, TemperatureInterval, ThermalConductance},
    heat_transfer::watt_per_square_meter_kelvin,
    length::meter,
    power::watt,
    ratio::ratio,
    specific_heat_capacity::joule_per_kilogram_kelvin,
};

use input::{Validated, finite};

/// Specific heat capacity of water, kJ/kg·K.
const WATER_SPECIFIC_HEAT: f64 = 4.186;

/// Overall heat transfer coefficient, W/m²·K.
const OVERALL_HEAT_TRANSFER_COEFFICIENT: f64 = 2000.0;

/// Outer tube diameter, m. The wetted area is `π·D` per meter of length.
const OUTER_TUBE_DIAMETER: f64 = 0.034;

fn specific_heat() -> SpecificHeatCapacity {
    SpecificHeatCapacity::new::<joule_per_kilogram_kelvin>(WATER_SPECIFIC_HEAT * 1000.0)
}

fn overall_heat_transfer_coefficient() -> HeatTransfer {
    HeatTransfer::new::<watt_per_square_meter_kelvin>(OVERALL_HEAT_TRANSFER_COEFFICIENT)
}

fn outer_tube_perimeter() -> Length {
    Length::new::<meter>(PI * OUTER_TUBE_DIAMETER)
}

/// Computes hot and cold temperatures at `resolution` evenly spaced
/// positions from `0` to `params.length`, both ends included.
///
/// NTU is referenced to the cold stream. Both flow arrangements share the
/// same linear profile; the arrangement is carried through as a label.
///
/// # Errors
///
/// Returns [`InvalidParameter`] if a mass rate or the length is not finite
/// and strictly positive, an inlet temperature is not finite, or the
/// capacitance rates or conductance derived from them overflow.
pub fn compute(
    params: &ExchangerParameters,
    resolution: Resolution,
) -> Result<TemperatureProfile, InvalidParameter> {
    let Validated {
        hot,
        cold,
        hot_inlet,
        cold_inlet,
        length,
    } = params.validate(specific_heat())?;
    let length = length.into_inner();

    let ua: ThermalConductance = overall_heat_transfer_coefficient() * outer_tube_perimeter() * length;
    finite(Parameter::Length, ua.value)?;
    let ntu = Ntu::from_conductance_and_capacitance_rate(ua, cold)
        .map_err(InvalidParameter::not_positive(Parameter::Length))?;
    let capacity_ratio = CapacityRatio::from_capacitance_rates([hot, cold]);
    let effectiveness = Effectiveness::from_ntu_and_capacity_ratio(ntu, capacity_ratio);

    let c_min = hot.min(*cold);
    let heat_rate: Power = *effectiveness * c_min * hot_inlet.minus(cold_inlet);

    log::debug!(
        "double-pipe hx ({}): ntu={:.4}, cr={:.4}, effectiveness={:.4}, q={:.1} W",
        params.arrangement,
        ntu.get::<ratio>(),
        capacity_ratio.get::<ratio>(),
        effectiveness.get::<ratio>(),
        heat_rate.get::<watt>(),
    );

    let hot_drop: TemperatureInterval = heat_rate / *hot;
    let cold_rise: TemperatureInterval = heat_rate / *cold;

    let last = (resolution.get() - 1) as f64;
    let positions: Vec<Length> = (0..resolution.get())
        .map(|i| length * (i as f64 / last))
        .collect();

    let mut hot_temps = Vec::with_capacity(positions.len());
    let mut cold_temps = Vec::with_capacity(positions.len());
    for &x in &positions {
        let fraction = (x / length).get::<ratio>();
        hot_temps.push(hot_inlet - hot_drop * fraction);
        cold_temps.push(cold_inlet + cold_rise * fraction);
    }

    Ok(TemperatureProfile {
        arrangement: params.arrangement,
        positions,
        hot: hot_temps,
        cold: cold_temps,
        ntu,
        capacity_ratio,
        effectiveness,
        heat_rate,
    })
}
