/*!
Passes which rewrite a formula to conjunctive normal form.

Each pass is a function from a formula to a formula, and preserves the value of the formula on every [valuation](crate::structures::valuation).
Passes take ownership of their input and build a fresh formula from the bottom up, and so a pass which fails leaves nothing half-rewritten behind.

The passes, in order, are:

| Pass                        | Function                   | Result                                              |
|-----------------------------|----------------------------|-----------------------------------------------------|
| Eliminate biconditions      | [eliminate_biconditions]   | no `<=>`                                            |
| Eliminate conditions        | [eliminate_conditions]     | no `=>`                                             |
| Push negations inward       | [push_negations_inward]    | `!` on atoms only                                   |
| Distribute `\|\|` over `&&` | [distribute_or_over_and]   | no `&&` below `\|\|`                                |
| Collapse                    | [collapse]                 | a single `&&` of `\|\|`s of literals, without redundancy |

Each pass may be applied on its own, e.g. by some driver which shows the formula between passes, or all together through [normal_form].
Only [collapse] has a precondition, and it is exactly the result of the earlier passes.

```rust
# use otter_resolution::structures::formula::Formula;
# use otter_resolution::transform::{normal_form, Pass};
let p = || Formula::atom("p");
let q = || Formula::atom("q");

let f = Formula::not(Formula::bicondition(p(), q()));

let mut stepped = f.clone();
for pass in Pass::ALL {
    stepped = pass.apply(stepped).unwrap();
}

assert_eq!(stepped, normal_form(f).unwrap());
assert_eq!(stepped.to_string(), "(!q || !p) && (p || q)");
```
*/

mod bicondition;
mod collapse;
mod condition;
mod distribution;
mod negation;

pub use bicondition::eliminate_biconditions;
pub use collapse::{collapse, collapse_to_clause_set};
pub use condition::eliminate_conditions;
pub use distribution::distribute_or_over_and;
pub use negation::push_negations_inward;

use crate::{
    misc::log::targets::{self},
    structures::formula::Formula,
    types::err::{self},
};

/// The passes, in the order they are to be applied.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord)]
pub enum Pass {
    EliminateBiconditions,
    EliminateConditions,
    PushNegationsInward,
    DistributeOrOverAnd,
    Collapse,
}

impl Pass {
    /// Every pass, in order.
    pub const ALL: [Pass; 5] = [
        Pass::EliminateBiconditions,
        Pass::EliminateConditions,
        Pass::PushNegationsInward,
        Pass::DistributeOrOverAnd,
        Pass::Collapse,
    ];

    /// Applies the pass to a formula.
    pub fn apply(self, formula: Formula) -> Result<Formula, err::ErrorKind> {
        match self {
            Pass::EliminateBiconditions => eliminate_biconditions(formula),
            Pass::EliminateConditions => eliminate_conditions(formula),
            Pass::PushNegationsInward => push_negations_inward(formula),
            Pass::DistributeOrOverAnd => distribute_or_over_and(formula),
            Pass::Collapse => collapse(formula),
        }
    }

    /// The pass after this pass, if any.
    pub fn next(self) -> Option<Pass> {
        Pass::ALL.get(self as usize + 1).copied()
    }
}

impl std::fmt::Display for Pass {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::EliminateBiconditions => write!(f, "eliminate_biconditions"),
            Self::EliminateConditions => write!(f, "eliminate_conditions"),
            Self::PushNegationsInward => write!(f, "push_negations_inward"),
            Self::DistributeOrOverAnd => write!(f, "distribute_or_over_and"),
            Self::Collapse => write!(f, "collapse"),
        }
    }
}

/// Applies every pass, in order.
pub fn normal_form(formula: Formula) -> Result<Formula, err::ErrorKind> {
    let mut the_formula = formula;
    for pass in Pass::ALL {
        the_formula = pass.apply(the_formula)?;
        log::debug!(target: targets::TRANSFORM, "After {pass}: {} nodes", the_formula.size());
    }
    Ok(the_formula)
}

/// Rebuilds a node with `pass` applied to each child, after checking the shape of the node.
pub(crate) fn map_children(
    formula: Formula,
    pass: fn(Formula) -> Result<Formula, err::ErrorKind>,
) -> Result<Formula, err::ErrorKind> {
    formula.check_node()?;
    match formula {
        Formula::Atom(_) => Ok(formula),

        Formula::Not(child) => Ok(Formula::not(pass(*child)?)),

        Formula::And(children) => Ok(Formula::And(
            children.into_iter().map(pass).collect::<Result<_, _>>()?,
        )),

        Formula::Or(children) => Ok(Formula::Or(
            children.into_iter().map(pass).collect::<Result<_, _>>()?,
        )),

        Formula::Condition(antecedent, consequent) => Ok(Formula::condition(
            pass(*antecedent)?,
            pass(*consequent)?,
        )),

        Formula::Bicondition(left, right) => {
            Ok(Formula::bicondition(pass(*left)?, pass(*right)?))
        }
    }
}
