//! Supporting utilities shared by the models.
//!
//! - [`constraint`]: numeric invariants checked at construction
//! - [`hx`]: effectiveness-NTU quantities
//! - [`units`]: [`uom`] extensions

pub mod constraint;
pub mod hx;
pub mod units;
