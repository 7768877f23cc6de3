//! Pushing negations to atoms.
//!
//! Every negation of something other than an atom is rewritten by one of:
//! - `!!A` to `A`.
//! - `!(A && B)` to `!A || !B`, and `!(A && B && …)` to `!A || !B || …`.
//! - `!(A || B)` to `!A && !B`, and `!(A || B || …)` to `!A && !B && …`.
//!
//! A rewrite may leave a fresh negation of something other than an atom (e.g. `!(!A && B)` becomes `!!A || !B`), and so negations are pushed until a [term](Formula::is_term) is reached.
//!
//! Conditions and biconditions are expected to have been [eliminated](super::condition) before this pass.
//! If one remains, a negation of the condition (or bicondition) is left in place, with negations pushed within each side.
//!
//! The negation of the empty conjunction is the empty disjunction, which has no place in a formula, and so is refused with [EmptyClause](err::FormulaError::EmptyClause).
//!
//! ```rust
//! # use otter_resolution::structures::formula::Formula;
//! # use otter_resolution::transform::push_negations_inward;
//! let p = || Formula::atom("p");
//! let q = || Formula::atom("q");
//!
//! let f = Formula::not(Formula::and(Formula::not(p()), Formula::or(p(), q())));
//! let g = push_negations_inward(f).unwrap();
//! assert_eq!(g.to_string(), "p || (!p && !q)");
//! ```

use crate::{
    misc::log::targets::{self},
    structures::formula::Formula,
    transform::map_children,
    types::err::{self},
};

/// Pushes every negation to some atom.
pub fn push_negations_inward(formula: Formula) -> Result<Formula, err::ErrorKind> {
    log::trace!(target: targets::TRANSFORM, "Pushing negations inward in {formula}");
    let the_formula = push(formula)?;
    log::trace!(target: targets::TRANSFORM, "Negations pushed: {the_formula}");
    Ok(the_formula)
}

fn push(formula: Formula) -> Result<Formula, err::ErrorKind> {
    match formula {
        Formula::Not(child) => negate(*child),

        other => map_children(other, push),
    }
}

/// The negation of `formula`, with negations pushed.
fn negate(formula: Formula) -> Result<Formula, err::ErrorKind> {
    formula.check_node()?;
    match formula {
        Formula::Atom(_) => Ok(Formula::not(formula)),

        Formula::Not(child) => push(*child),

        Formula::And(children) if children.is_empty() => {
            Err(err::FormulaError::EmptyClause.into())
        }

        Formula::And(children) => Ok(Formula::Or(
            children
                .into_iter()
                .map(negate)
                .collect::<Result<_, _>>()?,
        )),

        Formula::Or(children) => Ok(Formula::And(
            children
                .into_iter()
                .map(negate)
                .collect::<Result<_, _>>()?,
        )),

        Formula::Condition(..) | Formula::Bicondition(..) => {
            log::debug!(target: targets::TRANSFORM, "Negation of {formula} left in place");
            Ok(Formula::not(push(formula)?))
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn atom(name: &str) -> Formula {
        Formula::atom(name)
    }

    #[test]
    fn nary_de_morgan() {
        let f = Formula::not(Formula::or_all([atom("a"), Formula::not(atom("b")), atom("c")]));
        assert_eq!(
            push_negations_inward(f).unwrap(),
            Formula::and_all([Formula::not(atom("a")), atom("b"), Formula::not(atom("c"))])
        );
    }

    #[test]
    fn negated_empty_conjunction() {
        let f = Formula::or(atom("a"), Formula::not(Formula::And(vec![])));
        assert_eq!(
            push_negations_inward(f),
            Err(err::ErrorKind::MalformedFormula(err::FormulaError::EmptyClause))
        );

        let f = Formula::not(Formula::not(Formula::And(vec![])));
        assert_eq!(push_negations_inward(f), Ok(Formula::And(vec![])));
    }

    #[test]
    fn negated_condition_left_in_place() {
        let f = Formula::not(Formula::condition(Formula::not(Formula::not(atom("a"))), atom("b")));
        assert_eq!(
            push_negations_inward(f).unwrap(),
            Formula::not(Formula::condition(atom("a"), atom("b")))
        );
    }
}
