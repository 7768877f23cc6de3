/*!
Trees, aka. the grammar shared with parsers and renderers.

A tree is a named node with an ordered list of children.
The name of a node is either the tag of a connective or, for a leaf, the name of an atom:

| Tag           | Children                             |
|---------------|--------------------------------------|
| *identifier*  | none (an atom, case-sensitive)       |
| `not`         | exactly one                          |
| `and`         | any number, none being `true`        |
| `or`          | one or more                          |
| `condition`   | exactly two, antecedent first        |
| `bicondition` | exactly two                          |

Trees are checked against the grammar when read as a [Formula], and any violation is a [MalformedFormula](err::ErrorKind::MalformedFormula).
A formula can always be written as a tree, and so a renderer may take a snapshot of a formula at any point (e.g. between passes) without access to the formula itself.

```rust
# use otter_resolution::structures::{formula::Formula, tree::Tree};
let tree = Tree::node("condition", vec![Tree::leaf("p"), Tree::node("not", vec![Tree::leaf("q")])]);
let formula = Formula::try_from(&tree).unwrap();
assert_eq!(formula.to_string(), "p => !q");

let broken = Tree::node("not", vec![Tree::leaf("p"), Tree::leaf("q")]);
assert!(Formula::try_from(&broken).is_err());
```

# Notes
- An atom may not share a name with a tag, as a leaf named `and` (say) is read as an `and` without children.
- An `and` without children is the empty conjunction, which is how [collapse](crate::transform::collapse) writes a formula whose every clause is a tautology.
*/

use serde::{Deserialize, Serialize};

use crate::{
    structures::formula::Formula,
    types::err::{self, Arity},
};

/// A node of the grammar shared with parsers and renderers.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Tree {
    pub name: String,

    #[serde(default)]
    pub children: Vec<Tree>,
}

impl Tree {
    pub fn leaf(name: impl Into<String>) -> Self {
        Tree {
            name: name.into(),
            children: Vec::default(),
        }
    }

    pub fn node(name: impl Into<String>, children: Vec<Tree>) -> Self {
        Tree {
            name: name.into(),
            children,
        }
    }

    fn arity_error(&self, expected: Arity) -> err::ErrorKind {
        err::FormulaError::Arity {
            tag: self.name.clone(),
            expected,
            found: self.children.len(),
        }
        .into()
    }

    fn exactly<const N: usize>(&self) -> Result<[Formula; N], err::ErrorKind> {
        if self.children.len() != N {
            return Err(self.arity_error(Arity::Exactly(N)));
        }
        let children = self
            .children
            .iter()
            .map(Formula::try_from)
            .collect::<Result<Vec<_>, _>>()?;

        children
            .try_into()
            .map_err(|_| self.arity_error(Arity::Exactly(N)))
    }

    fn at_least_one(&self) -> Result<Vec<Formula>, err::ErrorKind> {
        if self.children.is_empty() {
            return Err(self.arity_error(Arity::AtLeast(1)));
        }
        self.children.iter().map(Formula::try_from).collect()
    }
}

impl TryFrom<&Tree> for Formula {
    type Error = err::ErrorKind;

    fn try_from(tree: &Tree) -> Result<Self, Self::Error> {
        match tree.name.as_str() {
            "not" => {
                let [child] = tree.exactly::<1>()?;
                Ok(Formula::not(child))
            }

            "and" => Ok(Formula::And(
                tree.children
                    .iter()
                    .map(Formula::try_from)
                    .collect::<Result<_, _>>()?,
            )),

            "or" => Ok(Formula::Or(tree.at_least_one()?)),

            "condition" => {
                let [antecedent, consequent] = tree.exactly::<2>()?;
                Ok(Formula::condition(antecedent, consequent))
            }

            "bicondition" => {
                let [left, right] = tree.exactly::<2>()?;
                Ok(Formula::bicondition(left, right))
            }

            "" => Err(err::FormulaError::EmptyAtom.into()),

            _ if !tree.children.is_empty() => Err(tree.arity_error(Arity::Exactly(0))),

            name => Ok(Formula::atom(name)),
        }
    }
}

impl From<&Formula> for Tree {
    fn from(formula: &Formula) -> Self {
        let children = match formula {
            Formula::Atom(_) => Vec::default(),
            Formula::Not(child) => vec![Tree::from(child.as_ref())],
            Formula::And(children) | Formula::Or(children) => {
                children.iter().map(Tree::from).collect()
            }
            Formula::Condition(left, right) | Formula::Bicondition(left, right) => {
                vec![Tree::from(left.as_ref()), Tree::from(right.as_ref())]
            }
        };
        Tree::node(formula.tag(), children)
    }
}
