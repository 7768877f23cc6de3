//! Collapse of a distributed formula to canonical conjunctive normal form.
//!
//! Collapse requires the formula to be free of conditions and biconditions, to have negations only on atoms, and to have no conjunction below any disjunction.
//! These are the guarantees of the earlier passes, and any formula without them is refused with [InvalidCollapseState](err::ErrorKind::InvalidCollapseState).
//!
//! Given such a formula, collapse:
//! 1. Flattens nested conjunctions into their parent conjunction, and likewise for disjunctions.
//! 2. Ensures the root is a conjunction, and each child of the root is a disjunction, wrapping a node in a singleton conjunction (or disjunction) when required.
//! 3. Reads the result as a [ClauseSet], so merging duplicate literals within each clause, dropping tautologies, and merging duplicate clauses.
//!
//! The result is a conjunction of disjunctions of literals, where no disjunction repeats a literal, no disjunction is a tautology, and no two disjunctions are equal.
//! If every clause was a tautology, the result is the empty conjunction.
//!
//! ```rust
//! # use otter_resolution::structures::formula::Formula;
//! # use otter_resolution::transform::collapse;
//! let p = || Formula::atom("p");
//! let q = || Formula::atom("q");
//!
//! let f = Formula::and(Formula::and(Formula::or(p(), Formula::or(q(), p())), q()), Formula::or(q(), p()));
//! assert_eq!(collapse(f).unwrap().to_string(), "(p || q) && q");
//! ```

use crate::{
    misc::log::targets::{self},
    structures::{clause_set::ClauseSet, formula::Formula},
    types::err::{self},
};

/// Collapses a negation-pushed, distributed formula to canonical form.
pub fn collapse(formula: Formula) -> Result<Formula, err::ErrorKind> {
    let the_set = collapse_to_clause_set(formula)?;
    Ok(Formula::from(&the_set))
}

/// Collapses a negation-pushed, distributed formula to a clause set.
pub fn collapse_to_clause_set(formula: Formula) -> Result<ClauseSet, err::ErrorKind> {
    log::trace!(target: targets::COLLAPSE, "Collapsing {formula}");
    check_collapsible(&formula, None)?;

    let the_formula = guarantee_shape(flatten(formula));
    log::trace!(target: targets::COLLAPSE, "Flattened and shaped: {the_formula}");

    let the_set = ClauseSet::try_from(&the_formula)?;
    log::debug!(target: targets::COLLAPSE, "Collapsed to {} clauses", the_set.size());
    Ok(the_set)
}

/// Checks the guarantees of the earlier passes, where `or` is the nearest disjunction above `formula`.
fn check_collapsible(formula: &Formula, or: Option<&Formula>) -> Result<(), err::ErrorKind> {
    formula.check_node()?;
    match formula {
        Formula::Atom(_) => Ok(()),

        Formula::Not(child) => match child.as_ref() {
            Formula::Atom(_) => child.check_node().map_err(err::ErrorKind::from),
            _ => Err(err::CollapseError::NegatedCompound(formula.to_string()).into()),
        },

        Formula::And(children) => {
            if let Some(the_or) = or {
                return Err(err::CollapseError::Undistributed(the_or.to_string()).into());
            }
            for child in children {
                check_collapsible(child, None)?;
            }
            Ok(())
        }

        Formula::Or(children) => {
            for child in children {
                check_collapsible(child, Some(formula))?;
            }
            Ok(())
        }

        Formula::Condition(..) => Err(err::CollapseError::Condition(formula.to_string()).into()),

        Formula::Bicondition(..) => {
            Err(err::CollapseError::Bicondition(formula.to_string()).into())
        }
    }
}

/// Splices the children of any conjunction into a parent conjunction, and likewise for disjunctions.
fn flatten(formula: Formula) -> Formula {
    match formula {
        Formula::And(children) => Formula::And(
            children
                .into_iter()
                .map(flatten)
                .flat_map(|child| match child {
                    Formula::And(grandchildren) => grandchildren,
                    other => vec![other],
                })
                .collect(),
        ),

        Formula::Or(children) => Formula::Or(
            children
                .into_iter()
                .map(flatten)
                .flat_map(|child| match child {
                    Formula::Or(grandchildren) => grandchildren,
                    other => vec![other],
                })
                .collect(),
        ),

        other => other,
    }
}

/// Wraps the root in a conjunction, and each child of the root in a disjunction, as required.
fn guarantee_shape(formula: Formula) -> Formula {
    let conjuncts = match formula {
        Formula::And(children) => children,
        other => vec![other],
    };

    Formula::And(
        conjuncts
            .into_iter()
            .map(|conjunct| match conjunct {
                Formula::Or(_) => conjunct,
                other => Formula::Or(vec![other]),
            })
            .collect(),
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    fn atom(name: &str) -> Formula {
        Formula::atom(name)
    }

    #[test]
    fn flatten_nested() {
        let f = Formula::and(
            Formula::and(atom("a"), Formula::and(atom("b"), atom("c"))),
            Formula::or(Formula::or(atom("d"), atom("e")), atom("f")),
        );
        assert_eq!(
            flatten(f),
            Formula::and_all([
                atom("a"),
                atom("b"),
                atom("c"),
                Formula::or_all([atom("d"), atom("e"), atom("f")])
            ])
        );
    }

    #[test]
    fn shape() {
        assert_eq!(
            guarantee_shape(atom("a")),
            Formula::And(vec![Formula::Or(vec![atom("a")])])
        );

        let f = Formula::and(Formula::not(atom("a")), Formula::or(atom("b"), atom("c")));
        assert_eq!(
            guarantee_shape(f),
            Formula::and(
                Formula::Or(vec![Formula::not(atom("a"))]),
                Formula::or(atom("b"), atom("c"))
            )
        );
    }

    #[test]
    fn refuses_earlier_stages() {
        let undistributed = Formula::or(atom("a"), Formula::and(atom("b"), atom("c")));
        assert!(matches!(
            collapse(undistributed),
            Err(err::ErrorKind::InvalidCollapseState(
                err::CollapseError::Undistributed(_)
            ))
        ));

        let deep = Formula::or(atom("a"), Formula::or(atom("d"), Formula::and(atom("b"), atom("c"))));
        assert!(matches!(
            collapse(deep),
            Err(err::ErrorKind::InvalidCollapseState(
                err::CollapseError::Undistributed(_)
            ))
        ));

        let negated = Formula::not(Formula::or(atom("a"), atom("b")));
        assert!(matches!(
            collapse(negated),
            Err(err::ErrorKind::InvalidCollapseState(
                err::CollapseError::NegatedCompound(_)
            ))
        ));

        let condition = Formula::condition(atom("a"), atom("b"));
        assert!(matches!(
            collapse(condition),
            Err(err::ErrorKind::InvalidCollapseState(
                err::CollapseError::Condition(_)
            ))
        ));
    }

    #[test]
    fn all_tautologies() {
        let f = Formula::or(atom("a"), Formula::not(atom("a")));
        assert_eq!(collapse(f), Ok(Formula::And(vec![])));
    }
}
