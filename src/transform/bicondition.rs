//! Elimination of biconditions.
//!
//! Every `A <=> B` is replaced with `(A => B) && (B => A)`.
//!
//! Children are transformed before the node itself, and so a bicondition nested within either side of another bicondition is eliminated before the enclosing bicondition is rewritten (and then copied to both conditions).
//!
//! ```rust
//! # use otter_resolution::structures::formula::Formula;
//! # use otter_resolution::transform::eliminate_biconditions;
//! let f = Formula::bicondition(Formula::atom("p"), Formula::atom("q"));
//! let g = eliminate_biconditions(f).unwrap();
//! assert_eq!(g.to_string(), "(p => q) && (q => p)");
//! ```

use crate::{
    misc::log::targets::{self},
    structures::formula::Formula,
    transform::map_children,
    types::err::{self},
};

/// Replaces every bicondition with a conjunction of conditions.
pub fn eliminate_biconditions(formula: Formula) -> Result<Formula, err::ErrorKind> {
    log::trace!(target: targets::TRANSFORM, "Eliminating biconditions from {formula}");
    let the_formula = eliminate(formula)?;
    log::trace!(target: targets::TRANSFORM, "Biconditions eliminated: {the_formula}");
    Ok(the_formula)
}

fn eliminate(formula: Formula) -> Result<Formula, err::ErrorKind> {
    match map_children(formula, eliminate)? {
        Formula::Bicondition(left, right) => Ok(Formula::and(
            Formula::Condition(left.clone(), right.clone()),
            Formula::Condition(right, left),
        )),

        other => Ok(other),
    }
}
