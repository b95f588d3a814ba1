use std::fmt;

use thiserror::Error;

use crate::support::constraint::ConstraintError;

/// A model input that cannot be used.
///
/// Returned before any computation happens, so a failed call never produces
/// partial output.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[non_exhaustive]
pub enum InvalidParameter {
    /// A physical size (flow rate, length, radius, count) is not strictly positive.
    #[error("{parameter} must be strictly positive: {source}")]
    NotPositive {
        parameter: Parameter,
        source: ConstraintError,
    },

    /// A quantity that may be zero is negative.
    #[error("{parameter} must not be negative: {source}")]
    Negative {
        parameter: Parameter,
        source: ConstraintError,
    },

    /// A quantity is `NaN` or infinite.
    #[error("{parameter} must be finite")]
    NotFinite { parameter: Parameter },

    /// The flow arrangement label is neither `parallel` nor `counter`.
    #[error("unrecognized flow arrangement `{0}`, expected `parallel` or `counter`")]
    FlowArrangement(String),

    /// Fewer than two samples were requested.
    #[error("resolution must be at least 2 samples, got {0}")]
    Resolution(usize),

    /// The inner tube does not fit inside the outer tube.
    #[error("inner radius must be smaller than outer radius")]
    RadiusOrder,
}

impl InvalidParameter {
    pub(super) fn not_positive(parameter: Parameter) -> impl FnOnce(ConstraintError) -> Self {
        move |source| Self::NotPositive { parameter, source }
    }

    pub(super) fn negative(parameter: Parameter) -> impl FnOnce(ConstraintError) -> Self {
        move |source| Self::Negative { parameter, source }
    }
}

/// Names the input an [`InvalidParameter`] refers to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Parameter {
    HotMassRate,
    ColdMassRate,
    HotInlet,
    ColdInlet,
    Length,
    InnerRadius,
    OuterRadius,
    ParticleCount,
    Step,
}

impl fmt::Display for Parameter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Self::HotMassRate => "hot mass flow rate",
            Self::ColdMassRate => "cold mass flow rate",
            Self::HotInlet => "hot inlet temperature",
            Self::ColdInlet => "cold inlet temperature",
            Self::Length => "length",
            Self::InnerRadius => "inner radius",
            Self::OuterRadius => "outer radius",
            Self::ParticleCount => "particle count",
            Self::Step => "step",
        })
    }
}
