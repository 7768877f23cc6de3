//! Clauses, aka. a collection of literals, interpreted as the disjunction of those literals.
//!
//! A clause owns its literals, and never contains two equal literals.
//! Literals are kept in the order they were first seen, though this order has no meaning: two clauses are equal whenever they contain the same literals.
//!
//! ```rust
//! # use otter_resolution::structures::{clause::Clause, literal::Literal};
//! let p = Literal::new("p", false);
//! let q = Literal::new("q", false);
//!
//! let clause = Clause::new([p.clone(), q.clone(), p.clone()]);
//! assert_eq!(clause.size(), 2);
//! assert_eq!(clause, Clause::new([q.clone(), p.clone()]));
//!
//! let other = Clause::new([p.negate(), q.clone()]);
//! assert!(clause.can_resolve_with(&other));
//! assert_eq!(clause.resolve_with(&other), Clause::new([q]));
//! ```
//!
//! # Resolution
//!
//! Given clauses *C* ∨ *l* and *D* ∨ ¬*l* the resolvent on the *pivot* *l* is *C* ∨ *D*.
//!
//! - When a pair of clauses clash on exactly one atom, the resolvent is the clause of every literal from either clause whose inverse is absent from the other clause.
//! - When a pair of clauses clash on more than one atom, every resolvent is a tautology, as removing one clashing pair leaves the others in place.
//!   [resolve_with](Clause::resolve_with) resolves on a single pivot, and so returns a tautology in this case.
//! - Two unit clauses on inverse literals resolve to the empty clause.
//!   This is a conflict, and is identified by [is_complementary_to](Clause::is_complementary_to) rather than by building the empty clause.

use serde::{Deserialize, Serialize};

use crate::{
    structures::{formula::Formula, literal::Literal},
    types::err::{self},
};

/// A disjunction of literals, without duplicates.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct Clause {
    literals: Vec<Literal>,
}

impl Clause {
    /// A clause of the given literals, with any duplicate literals merged.
    pub fn new(literals: impl IntoIterator<Item = Literal>) -> Self {
        let mut the_literals: Vec<Literal> = Vec::new();
        for literal in literals {
            if !the_literals.contains(&literal) {
                the_literals.push(literal);
            }
        }
        Clause {
            literals: the_literals,
        }
    }

    /// An iterator over the literals of the clause, in the order they were first seen.
    pub fn literals(&self) -> impl Iterator<Item = &Literal> {
        self.literals.iter()
    }

    /// The number of literals in the clause.
    pub fn size(&self) -> usize {
        self.literals.len()
    }

    pub fn is_empty(&self) -> bool {
        self.literals.is_empty()
    }

    pub fn is_unit(&self) -> bool {
        self.literals.len() == 1
    }

    pub fn contains(&self, literal: &Literal) -> bool {
        self.literals.contains(literal)
    }

    pub fn contains_inverse_of(&self, literal: &Literal) -> bool {
        self.literals.iter().any(|l| l.is_inverse_of(literal))
    }

    /// The literals of the clause, sorted.
    pub fn canonical(&self) -> Vec<Literal> {
        let mut the_literals = self.literals.clone();
        the_literals.sort_unstable();
        the_literals
    }

    /// Whether some literal of the clause has its inverse in the clause.
    pub fn is_tautology(&self) -> bool {
        self.literals.iter().any(|l| self.contains_inverse_of(l))
    }

    /// Whether *every* literal of the clause has its inverse in `other`.
    ///
    /// The relation is not symmetric, e.g. `p` conflicts with `!p || q`, but not conversely.
    pub fn conflicts_with(&self, other: &Clause) -> bool {
        self.literals.iter().all(|l| other.contains_inverse_of(l))
    }

    /// Whether the clauses are unit clauses on inverse literals, and so resolve to the empty clause.
    ///
    /// Equivalently, for clauses which are not tautologies, the clauses conflict with each other (in both directions) on a single atom.
    pub fn is_complementary_to(&self, other: &Clause) -> bool {
        self.is_unit() && self.conflicts_with(other) && other.conflicts_with(self)
    }

    /// The first literal of the clause whose inverse is in `other`, if one exists.
    pub fn pivot(&self, other: &Clause) -> Option<&Literal> {
        self.literals.iter().find(|l| other.contains_inverse_of(l))
    }

    /// Whether some literal of the clause has its inverse in `other`, and the pair are not complementary.
    pub fn can_resolve_with(&self, other: &Clause) -> bool {
        self.pivot(other).is_some() && !self.is_complementary_to(other)
    }

    /// The resolvent of the clause and `other` on the [pivot](Clause::pivot) of the clause.
    ///
    /// If there is no pivot the result is the union of the two clauses.
    pub fn resolve_with(&self, other: &Clause) -> Clause {
        let Some(pivot) = self.pivot(other) else {
            return Clause::new(self.literals.iter().chain(other.literals()).cloned());
        };
        let inverse = pivot.negate();

        let from_self = self.literals.iter().filter(|l| *l != pivot);
        let from_other = other.literals.iter().filter(|l| **l != inverse);

        Clause::new(from_self.chain(from_other).cloned())
    }
}

impl PartialEq for Clause {
    fn eq(&self, other: &Self) -> bool {
        self.literals.len() == other.literals.len()
            && self.literals.iter().all(|l| other.contains(l))
    }
}

impl Eq for Clause {}

impl std::hash::Hash for Clause {
    fn hash<H: std::hash::Hasher>(&self, state: &mut H) {
        self.canonical().hash(state);
    }
}

impl TryFrom<&Formula> for Clause {
    type Error = err::ErrorKind;

    /// Builds a clause from a disjunction whose children are all literals.
    fn try_from(node: &Formula) -> Result<Self, Self::Error> {
        node.check_node()?;
        match node {
            Formula::Or(children) => {
                let mut literals = Vec::with_capacity(children.len());
                for child in children {
                    literals.push(Literal::try_from(child)?);
                }
                Ok(Clause::new(literals))
            }

            _ => Err(err::FormulaError::NotAClause(node.to_string()).into()),
        }
    }
}

impl From<&Clause> for Formula {
    fn from(clause: &Clause) -> Self {
        Formula::Or(clause.literals.iter().map(Formula::from).collect())
    }
}

impl std::fmt::Display for Clause {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let mut the_string = String::default();
        for literal in &self.literals {
            the_string.push_str(format!("{literal} || ").as_str());
        }
        the_string.truncate(the_string.len().saturating_sub(4));
        write!(f, "{the_string}")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn lit(s: &str) -> Literal {
        match s.strip_prefix('!') {
            Some(atom) => Literal::new(atom, true),
            None => Literal::new(s, false),
        }
    }

    fn clause(literals: &[&str]) -> Clause {
        Clause::new(literals.iter().map(|l| lit(l)))
    }

    #[test]
    fn duplicates() {
        let c = clause(&["p", "q", "p", "!q", "q"]);
        assert_eq!(c.size(), 3);
        assert_eq!(c.to_string(), "p || q || !q");
    }

    #[test]
    fn set_equality() {
        assert_eq!(clause(&["p", "!q"]), clause(&["!q", "p"]));
        assert_ne!(clause(&["p", "!q"]), clause(&["p", "q"]));
        assert_ne!(clause(&["p"]), clause(&["p", "q"]));
    }

    #[test]
    fn tautology() {
        assert!(clause(&["p", "q", "!p"]).is_tautology());
        assert!(!clause(&["p", "q"]).is_tautology());
    }

    #[test]
    fn conflict_is_directional() {
        let p = clause(&["p"]);
        let not_p_q = clause(&["!p", "q"]);

        assert!(p.conflicts_with(&not_p_q));
        assert!(!not_p_q.conflicts_with(&p));

        assert!(!p.is_complementary_to(&not_p_q));
        assert!(p.is_complementary_to(&clause(&["!p"])));
    }

    #[test]
    fn multiple_clashes_are_not_complementary() {
        let a = clause(&["p", "q"]);
        let b = clause(&["!p", "!q"]);

        assert!(a.conflicts_with(&b) && b.conflicts_with(&a));
        assert!(!a.is_complementary_to(&b));

        assert!(a.can_resolve_with(&b));
        assert!(a.resolve_with(&b).is_tautology());
    }

    #[test]
    fn resolution() {
        let a = clause(&["p", "q"]);
        let b = clause(&["!p", "r", "q"]);

        assert!(a.can_resolve_with(&b));
        assert_eq!(a.resolve_with(&b), clause(&["q", "r"]));
        assert_eq!(b.resolve_with(&a), clause(&["q", "r"]));

        let c = clause(&["p", "r"]);
        assert!(!a.can_resolve_with(&c));
    }

    #[test]
    fn from_formula() {
        let or = Formula::or(Formula::atom("p"), Formula::not(Formula::atom("p")));
        assert_eq!(Clause::try_from(&or), Ok(clause(&["p", "!p"])));

        assert_eq!(
            Clause::try_from(&Formula::Or(vec![])),
            Err(err::ErrorKind::MalformedFormula(err::FormulaError::EmptyClause))
        );

        assert!(matches!(
            Clause::try_from(&Formula::atom("p")),
            Err(err::ErrorKind::MalformedFormula(
                err::FormulaError::NotAClause(_)
            ))
        ));
    }
}
