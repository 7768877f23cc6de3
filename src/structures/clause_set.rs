//! Clause sets, aka. a collection of clauses, interpreted as the conjunction of those clauses.
//!
//! A clause set owns its clauses and maintains two invariants:
//! - No two clauses of the set are equal.
//! - No clause of the set is a tautology.
//!
//! Tautologies and duplicates are dropped when the set is built, and any attempt to add a tautology or a duplicate afterwards is refused.
//! Clauses are never removed from a set once built, and so each clause is identified by a [ClauseKey] fixed at the time the clause was added.
//!
//! ```rust
//! # use otter_resolution::structures::{clause_set::ClauseSet, formula::Formula};
//! let p = || Formula::atom("p");
//! let q = || Formula::atom("q");
//!
//! let cnf = Formula::and_all([
//!     Formula::or(p(), q()),
//!     Formula::or(q(), p()),
//!     Formula::or(p(), Formula::not(p())),
//! ]);
//!
//! let set = ClauseSet::try_from(&cnf).unwrap();
//! assert_eq!(set.size(), 1);
//! assert_eq!(Formula::from(&set).to_string(), "(p || q)");
//! ```

use std::collections::HashSet;

use serde::Serialize;

use crate::{
    misc::log::targets::{self},
    structures::{clause::Clause, formula::Formula, literal::Literal},
    types::err::{self},
};

/// The key of a clause in a clause set, given by the order in which clauses were added.
pub type ClauseKey = usize;

/// A conjunction of clauses, without duplicates or tautologies.
#[derive(Clone, Debug, Default, Serialize)]
pub struct ClauseSet {
    clauses: Vec<Clause>,

    #[serde(skip)]
    index: HashSet<Vec<Literal>>,
}

impl ClauseSet {
    /// A clause set of the given clauses, with tautologies and duplicates dropped.
    pub fn from_clauses(clauses: impl IntoIterator<Item = Clause>) -> Self {
        let mut the_set = ClauseSet::default();
        let mut tautologies = 0;
        let mut duplicates = 0;

        for clause in clauses {
            if clause.is_tautology() {
                log::trace!(target: targets::CLAUSE_SET, "Dropped tautology {clause}");
                tautologies += 1;
            } else if the_set.insert(clause).is_none() {
                duplicates += 1;
            }
        }

        log::debug!(target: targets::CLAUSE_SET, "Built a set of {} clauses, dropping {tautologies} tautologies and {duplicates} duplicates", the_set.size());
        the_set
    }

    /// Adds a clause to the set, returning the key of the clause if added.
    ///
    /// The clause is not added if it is a tautology, or already in the set.
    pub(crate) fn insert(&mut self, clause: Clause) -> Option<ClauseKey> {
        if clause.is_tautology() || !self.index.insert(clause.canonical()) {
            return None;
        }
        let key = self.clauses.len();
        self.clauses.push(clause);
        Some(key)
    }

    /// An iterator over the clauses of the set, in the order the clauses were added.
    pub fn clauses(&self) -> impl Iterator<Item = &Clause> {
        self.clauses.iter()
    }

    pub fn get(&self, key: ClauseKey) -> Option<&Clause> {
        self.clauses.get(key)
    }

    pub fn contains(&self, clause: &Clause) -> bool {
        self.index.contains(&clause.canonical())
    }

    /// The number of clauses in the set.
    pub fn size(&self) -> usize {
        self.clauses.len()
    }

    pub fn is_empty(&self) -> bool {
        self.clauses.is_empty()
    }

    pub(crate) fn as_slice(&self) -> &[Clause] {
        &self.clauses
    }
}

impl PartialEq for ClauseSet {
    /// Set equality, regardless of the order clauses were added.
    fn eq(&self, other: &Self) -> bool {
        self.index == other.index
    }
}

impl Eq for ClauseSet {}

impl TryFrom<&Formula> for ClauseSet {
    type Error = err::ErrorKind;

    /// Builds a clause set from a conjunction whose children are all clauses.
    fn try_from(node: &Formula) -> Result<Self, Self::Error> {
        match node {
            Formula::And(children) => {
                let mut clauses = Vec::with_capacity(children.len());
                for child in children {
                    clauses.push(Clause::try_from(child)?);
                }
                Ok(ClauseSet::from_clauses(clauses))
            }

            _ => Err(err::FormulaError::NotAClauseSet(node.to_string()).into()),
        }
    }
}

impl From<&ClauseSet> for Formula {
    fn from(set: &ClauseSet) -> Self {
        Formula::And(set.clauses.iter().map(Formula::from).collect())
    }
}

impl std::fmt::Display for ClauseSet {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        for clause in &self.clauses {
            writeln!(f, "| {clause}")?;
        }
        Ok(())
    }
}
