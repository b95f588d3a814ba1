//! # Double-pipe heat exchanger
//!
//! Steady-state temperature profiles of a water-to-water double-pipe heat
//! exchanger, computed with the effectiveness-NTU method, plus the particle
//! positions of an illustrative flow animation.
//!
//! ## Crate layout
//!
//! - [`models`]: [`twine_core::Model`] implementations and their input and
//!   output types.
//! - [`support`]: numeric constraints, [`uom`] extensions, and
//!   effectiveness-NTU quantities used by the models.
//!
//! Rendering is left to callers. The `double-pipe` binary (feature `cli`)
//! prints profiles and animation frames as tables or CSV.

pub mod models;
pub mod support;
