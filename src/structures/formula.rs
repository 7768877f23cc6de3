/*!
Formulas, aka. trees of propositional connectives over atoms.

A formula is either an atom or a connective applied to formulas:

| Variant       | Children                          | Reading          |
|---------------|-----------------------------------|------------------|
| `Atom`        | none                              | `p`              |
| `Not`         | one                               | `!p`             |
| `And`         | any number                        | `p && q && …`    |
| `Or`          | one or more                       | `p \|\| q \|\| …`|
| `Condition`   | two, antecedent then consequent   | `p => q`         |
| `Bicondition` | two                               | `p <=> q`        |

Formulas are values.
Each [pass](crate::transform) takes ownership of a formula and returns some new formula, and so no two passes ever share a node.

```rust
# use otter_resolution::structures::formula::Formula;
let f = Formula::bicondition(Formula::atom("p"), Formula::not(Formula::atom("q")));
assert_eq!(f.to_string(), "p <=> !q");
assert_eq!(f.atoms(), vec!["p", "q"]);
```

# Notes
- The empty conjunction is permitted, and is the canonical form of a formula whose every clause is a tautology.
- The empty disjunction is not permitted, and any pass which meets one fails with [EmptyClause](crate::types::err::FormulaError::EmptyClause).
*/

use std::collections::BTreeSet;

use serde::{Deserialize, Serialize};

use crate::{
    structures::valuation::Valuation,
    types::err::{self},
};

/// A propositional formula.
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Formula {
    Atom(String),
    Not(Box<Formula>),
    And(Vec<Formula>),
    Or(Vec<Formula>),
    Condition(Box<Formula>, Box<Formula>),
    Bicondition(Box<Formula>, Box<Formula>),
}

impl Formula {
    pub fn atom(name: impl Into<String>) -> Self {
        Formula::Atom(name.into())
    }

    #[allow(clippy::should_implement_trait)]
    pub fn not(child: Formula) -> Self {
        Formula::Not(Box::new(child))
    }

    pub fn and(left: Formula, right: Formula) -> Self {
        Formula::And(vec![left, right])
    }

    pub fn or(left: Formula, right: Formula) -> Self {
        Formula::Or(vec![left, right])
    }

    pub fn and_all(children: impl IntoIterator<Item = Formula>) -> Self {
        Formula::And(children.into_iter().collect())
    }

    pub fn or_all(children: impl IntoIterator<Item = Formula>) -> Self {
        Formula::Or(children.into_iter().collect())
    }

    pub fn condition(antecedent: Formula, consequent: Formula) -> Self {
        Formula::Condition(Box::new(antecedent), Box::new(consequent))
    }

    pub fn bicondition(left: Formula, right: Formula) -> Self {
        Formula::Bicondition(Box::new(left), Box::new(right))
    }

    /// The tag of the node, as used by the [tree](crate::structures::tree) grammar.
    /// For an atom, this is the name of the atom.
    pub fn tag(&self) -> &str {
        match self {
            Formula::Atom(name) => name,
            Formula::Not(_) => "not",
            Formula::And(_) => "and",
            Formula::Or(_) => "or",
            Formula::Condition(..) => "condition",
            Formula::Bicondition(..) => "bicondition",
        }
    }

    pub fn is_atom(&self) -> bool {
        matches!(self, Formula::Atom(_))
    }

    /// Whether the formula is an atom or a negated atom.
    /// Negations are pushed no further than a term.
    pub fn is_term(&self) -> bool {
        match self {
            Formula::Atom(_) => true,
            Formula::Not(child) => child.is_atom(),
            _ => false,
        }
    }

    /// The atoms of the formula, sorted and without duplicates.
    pub fn atoms(&self) -> Vec<&str> {
        let mut atoms = BTreeSet::new();
        self.collect_atoms(&mut atoms);
        atoms.into_iter().collect()
    }

    fn collect_atoms<'f>(&'f self, atoms: &mut BTreeSet<&'f str>) {
        match self {
            Formula::Atom(name) => {
                atoms.insert(name);
            }
            Formula::Not(child) => child.collect_atoms(atoms),
            Formula::And(children) | Formula::Or(children) => {
                for child in children {
                    child.collect_atoms(atoms)
                }
            }
            Formula::Condition(left, right) | Formula::Bicondition(left, right) => {
                left.collect_atoms(atoms);
                right.collect_atoms(atoms);
            }
        }
    }

    /// The value of the formula on a valuation.
    pub fn evaluate(&self, valuation: &Valuation) -> bool {
        match self {
            Formula::Atom(name) => valuation.value_of(name),
            Formula::Not(child) => !child.evaluate(valuation),
            Formula::And(children) => children.iter().all(|c| c.evaluate(valuation)),
            Formula::Or(children) => children.iter().any(|c| c.evaluate(valuation)),
            Formula::Condition(antecedent, consequent) => {
                !antecedent.evaluate(valuation) || consequent.evaluate(valuation)
            }
            Formula::Bicondition(left, right) => {
                left.evaluate(valuation) == right.evaluate(valuation)
            }
        }
    }

    /// The count of nodes in the formula.
    pub fn size(&self) -> usize {
        match self {
            Formula::Atom(_) => 1,
            Formula::Not(child) => 1 + child.size(),
            Formula::And(children) | Formula::Or(children) => {
                1 + children.iter().map(Formula::size).sum::<usize>()
            }
            Formula::Condition(left, right) | Formula::Bicondition(left, right) => {
                1 + left.size() + right.size()
            }
        }
    }

    /// Checks the shape contract of this node only, not of its children.
    pub(crate) fn check_node(&self) -> Result<(), err::FormulaError> {
        match self {
            Formula::Atom(name) if name.is_empty() => Err(err::FormulaError::EmptyAtom),
            Formula::Or(children) if children.is_empty() => Err(err::FormulaError::EmptyClause),
            _ => Ok(()),
        }
    }

    fn fmt_child(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Formula::Atom(_) | Formula::Not(_) => write!(f, "{self}"),
            Formula::And(children) | Formula::Or(children) if children.len() == 1 => {
                children[0].fmt_child(f)
            }
            _ => write!(f, "({self})"),
        }
    }
}

fn fmt_junction(
    f: &mut std::fmt::Formatter<'_>,
    children: &[Formula],
    op: &str,
) -> std::fmt::Result {
    for (index, child) in children.iter().enumerate() {
        if index > 0 {
            write!(f, " {op} ")?;
        }
        child.fmt_child(f)?;
    }
    Ok(())
}

impl std::fmt::Display for Formula {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Formula::Atom(name) => write!(f, "{name}"),
            Formula::Not(child) => {
                write!(f, "!")?;
                child.fmt_child(f)
            }
            Formula::And(children) if children.is_empty() => write!(f, "true"),
            Formula::And(children) => fmt_junction(f, children, "&&"),
            Formula::Or(children) => fmt_junction(f, children, "||"),
            Formula::Condition(antecedent, consequent) => {
                antecedent.fmt_child(f)?;
                write!(f, " => ")?;
                consequent.fmt_child(f)
            }
            Formula::Bicondition(left, right) => {
                left.fmt_child(f)?;
                write!(f, " <=> ")?;
                right.fmt_child(f)
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn p() -> Formula {
        Formula::atom("p")
    }

    fn q() -> Formula {
        Formula::atom("q")
    }

    #[test]
    fn display() {
        let f = Formula::condition(Formula::and(p(), q()), Formula::not(Formula::or(p(), q())));
        assert_eq!(f.to_string(), "(p && q) => !(p || q)");

        assert_eq!(Formula::And(vec![]).to_string(), "true");
        assert_eq!(Formula::Or(vec![Formula::not(p())]).to_string(), "!p");
    }

    #[test]
    fn terms() {
        assert!(p().is_term());
        assert!(Formula::not(p()).is_term());
        assert!(!Formula::not(Formula::not(p())).is_term());
        assert!(!Formula::or(p(), q()).is_term());
    }

    #[test]
    fn evaluation() {
        let f = Formula::bicondition(p(), Formula::not(q()));

        let mut valuation = Valuation::default();
        assert!(!f.evaluate(&valuation));

        valuation.set("p", true);
        assert!(f.evaluate(&valuation));

        valuation.set("q", true);
        assert!(!f.evaluate(&valuation));
    }

    #[test]
    fn atoms_are_sorted_and_unique() {
        let f = Formula::and_all([q(), p(), Formula::not(q())]);
        assert_eq!(f.atoms(), vec!["p", "q"]);
        assert_eq!(f.size(), 5);
    }
}
