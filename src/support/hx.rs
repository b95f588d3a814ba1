//! Effectiveness-NTU quantities for two-stream heat exchangers.
//!
//! The effectiveness-NTU method relates how much heat an exchanger moves to
//! its thermal size, expressed as the number of transfer units, and to how
//! well the two streams' capacitance rates are matched.
//!
//! - [`CapacitanceRate`]: `ṁ·c_p` of one stream
//! - [`CapacityRatio`]: `C_min / C_max`
//! - [`Ntu`]: `UA / C` for a chosen reference stream
//! - [`Effectiveness`]: actual over maximum possible heat transfer
//!
//! # Example
//!
//! ```
//! use double_pipe_hx::support::constraint::ConstraintResult;
//! use double_pipe_hx::support::hx::{CapacitanceRate, CapacityRatio, Effectiveness, Ntu};
//! use uom::si::{f64::ThermalConductance, ratio::ratio, thermal_conductance::watt_per_kelvin};
//!
//! fn main() -> ConstraintResult<()> {
//!     let hot = CapacitanceRate::new::<watt_per_kelvin>(4186.0)?;
//!     let cold = CapacitanceRate::new::<watt_per_kelvin>(4186.0)?;
//!
//!     let ntu = Ntu::from_conductance_and_capacitance_rate(
//!         ThermalConductance::new::<watt_per_kelvin>(4186.0),
//!         cold,
//!     )?;
//!     let cr = CapacityRatio::from_capacitance_rates([hot, cold]);
//!     let eff = Effectiveness::from_ntu_and_capacity_ratio(ntu, cr);
//!
//!     // Balanced streams with NTU = 1 move half of the maximum heat.
//!     assert!((eff.get::<ratio>() - 0.5).abs() < 1e-12);
//!     Ok(())
//! }
//! ```

mod capacitance_rate;
mod capacity_ratio;
mod effectiveness_ntu;

pub use capacitance_rate::CapacitanceRate;
pub use capacity_ratio::CapacityRatio;
pub use effectiveness_ntu::{Effectiveness, Ntu};
