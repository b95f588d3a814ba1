//! Public models.
//!
//! Models are grouped by domain. Each model module holds an internal `core`
//! submodule with the computation; the public surface is the
//! [`twine_core::Model`] adapter plus the input and output types it uses.

pub mod thermal;
