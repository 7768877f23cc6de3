//! Literals are atoms paired with a flag for negation.
//!
//! A literal is built from a formula which is either an atom or a negated atom, and fails to build from any other formula.
//!
//! ```rust
//! # use otter_resolution::structures::{formula::Formula, literal::Literal};
//! let not_p = Literal::try_from(&Formula::not(Formula::atom("p"))).unwrap();
//!
//! assert!(not_p.negated());
//! assert_eq!(not_p.atom(), "p");
//! assert!(not_p.is_inverse_of(&Literal::new("p", false)));
//! assert_eq!(not_p.negate(), Literal::new("p", false));
//!
//! assert!(Literal::try_from(&Formula::not(Formula::not(Formula::atom("p")))).is_err());
//! ```
//!
//! Literals are ordered by atom and then negation, with an atom strictly less than its negation.
//! The order is used only to give clauses a canonical form, see [Clause::canonical](crate::structures::clause::Clause::canonical).

use serde::{Deserialize, Serialize};

use crate::{
    structures::formula::Formula,
    types::err::{self},
};

/// An atom paired with a flag for negation.
#[derive(Clone, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct Literal {
    /// The atom of a literal.
    atom: String,

    /// Whether the atom is negated.
    negated: bool,
}

impl Literal {
    /// A fresh literal, specified by pairing an atom with a negation flag.
    pub fn new(atom: impl Into<String>, negated: bool) -> Self {
        Literal {
            atom: atom.into(),
            negated,
        }
    }

    /// The atom of the literal.
    pub fn atom(&self) -> &str {
        &self.atom
    }

    /// Whether the literal is negated.
    pub fn negated(&self) -> bool {
        self.negated
    }

    /// The negation of the literal.
    pub fn negate(&self) -> Self {
        Literal {
            atom: self.atom.clone(),
            negated: !self.negated,
        }
    }

    /// Whether the literal has the same atom as `other`, and the opposite negation.
    pub fn is_inverse_of(&self, other: &Literal) -> bool {
        self.atom == other.atom && self.negated != other.negated
    }
}

impl TryFrom<&Formula> for Literal {
    type Error = err::ErrorKind;

    fn try_from(node: &Formula) -> Result<Self, Self::Error> {
        node.check_node()?;
        match node {
            Formula::Atom(atom) => Ok(Literal::new(atom.as_str(), false)),

            Formula::Not(child) => match child.as_ref() {
                Formula::Atom(atom) => {
                    child.check_node()?;
                    Ok(Literal::new(atom.as_str(), true))
                }
                _ => Err(err::FormulaError::NotALiteral(node.to_string()).into()),
            },

            _ => Err(err::FormulaError::NotALiteral(node.to_string()).into()),
        }
    }
}

impl From<&Literal> for Formula {
    fn from(literal: &Literal) -> Self {
        match literal.negated {
            true => Formula::not(Formula::atom(literal.atom.as_str())),
            false => Formula::atom(literal.atom.as_str()),
        }
    }
}

impl std::fmt::Display for Literal {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        match self.negated {
            true => write!(f, "!{}", self.atom),
            false => write!(f, "{}", self.atom),
        }
    }
}
