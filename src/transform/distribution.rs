//! Distribution of disjunction over conjunction.
//!
//! Every disjunction with some conjunction as a child is rewritten by one of:
//! - `(A && B) || C` to `(A || C) && (B || C)`.
//! - `A || (B && C)` to `(A || B) && (A || C)`.
//!
//! With more than two children, the first conjunction is distributed over the remaining children.
//! For example, `A || (B && C) || D` becomes `(A || B || D) && (A || C || D)`.
//!
//! The disjunctions built by a rewrite are checked again, as a distribution may expose a further conjunction (e.g. a disjunction of two conjunctions), and so on return no disjunction has a conjunction as a child.
//!
//! The number of clauses may grow exponentially.
//! For example, distribution over `(A1 && B1) || … || (An && Bn)` gives 2^n disjunctions.

use crate::{
    misc::log::targets::{self},
    structures::formula::Formula,
    transform::map_children,
    types::err::{self},
};

/// Distributes every disjunction over any conjunction among its children.
pub fn distribute_or_over_and(formula: Formula) -> Result<Formula, err::ErrorKind> {
    log::trace!(target: targets::TRANSFORM, "Distributing disjunctions in {formula}");
    let the_formula = distribute(formula)?;
    log::trace!(target: targets::TRANSFORM, "Disjunctions distributed: {the_formula}");
    Ok(the_formula)
}

fn distribute(formula: Formula) -> Result<Formula, err::ErrorKind> {
    match map_children(formula, distribute)? {
        Formula::Or(children) => Ok(distribute_children(children)),

        other => Ok(other),
    }
}

/// Distributes a disjunction of `children`, where each child is already distributed.
fn distribute_children(mut children: Vec<Formula>) -> Formula {
    let Some(position) = children.iter().position(|c| matches!(c, Formula::And(_))) else {
        return Formula::Or(children);
    };

    let Formula::And(conjuncts) = children.remove(position) else {
        unreachable!("position is of a conjunction");
    };

    Formula::And(
        conjuncts
            .into_iter()
            .map(|conjunct| {
                let mut disjuncts = children.clone();
                disjuncts.insert(position, conjunct);
                distribute_children(disjuncts)
            })
            .collect(),
    )
}
