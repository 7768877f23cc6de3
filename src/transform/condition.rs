//! Elimination of conditions.
//!
//! Every `A => B` is replaced with `B || !A`.
//!
//! As with [biconditions](super::bicondition), children are transformed first.
//! Biconditions are left in place, so this pass is usually applied after biconditions have been eliminated.

use crate::{
    misc::log::targets::{self},
    structures::formula::Formula,
    transform::map_children,
    types::err::{self},
};

/// Replaces every condition with a disjunction.
pub fn eliminate_conditions(formula: Formula) -> Result<Formula, err::ErrorKind> {
    log::trace!(target: targets::TRANSFORM, "Eliminating conditions from {formula}");
    let the_formula = eliminate(formula)?;
    log::trace!(target: targets::TRANSFORM, "Conditions eliminated: {the_formula}");
    Ok(the_formula)
}

fn eliminate(formula: Formula) -> Result<Formula, err::ErrorKind> {
    match map_children(formula, eliminate)? {
        Formula::Condition(antecedent, consequent) => {
            Ok(Formula::or(*consequent, Formula::Not(antecedent)))
        }

        other => Ok(other),
    }
}
