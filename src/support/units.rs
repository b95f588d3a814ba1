//! Extensions to [`uom`].
//!
//! Every physical value in this crate is a [`uom`] quantity. [`uom`] keeps
//! absolute temperatures and temperature intervals apart, but offers no way to
//! subtract two absolute temperatures; [`TemperatureDifference`] fills that
//! gap:
//!
//! ```
//! use uom::si::f64::ThermodynamicTemperature;
//! use uom::si::{temperature_interval, thermodynamic_temperature::degree_celsius};
//! use double_pipe_hx::support::units::TemperatureDifference;
//!
//! let hot_inlet = ThermodynamicTemperature::new::<degree_celsius>(70.0);
//! let cold_inlet = ThermodynamicTemperature::new::<degree_celsius>(20.0);
//! let span = hot_inlet.minus(cold_inlet);
//! assert!((span.get::<temperature_interval::kelvin>() - 50.0).abs() < 1e-9);
//! ```

mod temperature_difference;

pub use temperature_difference::TemperatureDifference;
