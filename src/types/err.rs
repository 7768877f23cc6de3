//! Error types used in the library.
//!
//! - Formula errors are raised whenever some node breaks the shape contract of its kind, e.g. a `not` with two children, or an `or` in the position of a literal.
//! - Collapse errors are raised when [collapse](crate::transform::collapse) is asked to work on a formula which has not been through the earlier passes.
//! - Resolution errors are raised only when some budget from the [config](crate::config) ends a refutation early.
//!
//! All errors are recoverable, in the sense that no pass mutates its input.
//! A failed pass never returns a formula, and so the caller keeps whatever formula it had before.
//!
//! Names of the error enums overlap with the structures they relate to.
//  As such, throughout the library err::{self} is used to prefix use of the types with `err::`.

/// The kinds of error which may be returned from the library.
#[derive(Clone, Debug, Eq, PartialEq)]
pub enum ErrorKind {
    /// Some node violates its required child-count or shape.
    MalformedFormula(FormulaError),

    /// Collapse was invoked on a formula not yet in negation-pushed, distributed form.
    InvalidCollapseState(CollapseError),

    /// A refutation was stopped by some budget.
    Resolution(ResolutionError),
}

/// Noted shape violations.
///
/// Offending nodes are kept as their rendered text.
#[derive(Clone, Debug, Eq, PartialEq)]
pub enum FormulaError {
    /// An atom with an empty name.
    EmptyAtom,

    /// A disjunction without any disjuncts.
    EmptyClause,

    /// A tree node with the wrong number of children for its tag.
    Arity {
        tag: String,
        expected: Arity,
        found: usize,
    },

    /// A node in the position of a literal which is neither an atom nor a negated atom.
    NotALiteral(String),

    /// A node in the position of a clause which is not a disjunction.
    NotAClause(String),

    /// A node in the position of a clause set which is not a conjunction.
    NotAClauseSet(String),
}

/// The number of children some tag requires.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum Arity {
    Exactly(usize),
    AtLeast(usize),
}

impl From<FormulaError> for ErrorKind {
    fn from(e: FormulaError) -> Self {
        ErrorKind::MalformedFormula(e)
    }
}

/// Noted reasons a formula cannot be collapsed.
#[derive(Clone, Debug, Eq, PartialEq)]
pub enum CollapseError {
    /// A bicondition remains.
    Bicondition(String),

    /// A condition remains.
    Condition(String),

    /// A negation applies to something other than an atom.
    NegatedCompound(String),

    /// A disjunction has some conjunction below it.
    Undistributed(String),
}

impl From<CollapseError> for ErrorKind {
    fn from(e: CollapseError) -> Self {
        ErrorKind::InvalidCollapseState(e)
    }
}

/// Budgets which may stop a refutation before a conflict or saturation.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum ResolutionError {
    /// The time limit was exceeded.
    TimeUp,

    /// The limit on scans of the clause set was reached.
    RoundLimit,

    /// The limit on the size of the clause set was reached.
    ClauseLimit,
}

impl From<ResolutionError> for ErrorKind {
    fn from(e: ResolutionError) -> Self {
        ErrorKind::Resolution(e)
    }
}

impl std::fmt::Display for Arity {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Exactly(n) => write!(f, "exactly {n}"),
            Self::AtLeast(n) => write!(f, "at least {n}"),
        }
    }
}

impl std::fmt::Display for ErrorKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::MalformedFormula(e) => match e {
                FormulaError::EmptyAtom => write!(f, "MalformedFormula: an atom without a name"),
                FormulaError::EmptyClause => write!(f, "MalformedFormula: an or without children"),
                FormulaError::Arity {
                    tag,
                    expected,
                    found,
                } => write!(
                    f,
                    "MalformedFormula: {tag} requires {expected} children, found {found}"
                ),
                FormulaError::NotALiteral(node) => {
                    write!(f, "MalformedFormula: {node} is not a literal")
                }
                FormulaError::NotAClause(node) => {
                    write!(f, "MalformedFormula: {node} is not a clause")
                }
                FormulaError::NotAClauseSet(node) => {
                    write!(f, "MalformedFormula: {node} is not a clause set")
                }
            },

            Self::InvalidCollapseState(e) => match e {
                CollapseError::Bicondition(node) => {
                    write!(f, "InvalidCollapseState: bicondition {node} remains")
                }
                CollapseError::Condition(node) => {
                    write!(f, "InvalidCollapseState: condition {node} remains")
                }
                CollapseError::NegatedCompound(node) => {
                    write!(f, "InvalidCollapseState: negation {node} is not pushed to an atom")
                }
                CollapseError::Undistributed(node) => {
                    write!(f, "InvalidCollapseState: disjunction {node} is not distributed")
                }
            },

            Self::Resolution(e) => match e {
                ResolutionError::TimeUp => write!(f, "Resolution: time up"),
                ResolutionError::RoundLimit => write!(f, "Resolution: round limit reached"),
                ResolutionError::ClauseLimit => write!(f, "Resolution: clause limit reached"),
            },
        }
    }
}

impl std::error::Error for ErrorKind {}
