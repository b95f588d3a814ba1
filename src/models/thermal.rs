//! Thermal systems models.

pub mod double_pipe;
