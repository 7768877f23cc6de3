/*!
Reports for a refutation.
*/

use crate::procedures::resolution::State;

/// High-level reports regarding a refutation.
#[derive(PartialEq, Eq, Clone, Copy, Debug)]
pub enum Report {
    /// The empty clause was derived, and so the formula is unsatisfiable.
    Conflict,

    /// No further resolvents exist, and so the formula is satisfiable.
    Saturated,

    /// The refutation was stopped before either a conflict or saturation.
    Unknown,
}

impl From<&State> for Report {
    fn from(value: &State) -> Self {
        match value {
            State::Active => Self::Unknown,
            State::Conflict(..) => Self::Conflict,
            State::Saturated => Self::Saturated,
        }
    }
}

impl std::fmt::Display for Report {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Conflict => write!(f, "Conflict"),
            Self::Saturated => write!(f, "Saturated"),
            Self::Unknown => write!(f, "Unknown"),
        }
    }
}
