//! Key structures, such as formulas, literals, and clauses.
//!
//! # Formulas and trees
//!
//! A [formula](formula) is a tree of connectives over atoms, and is the structure each [pass](crate::transform) consumes and returns.
//! A [tree](tree) is the same information as a formula, written in the untyped grammar shared with parsers and renderers.
//!
//! # Literals, clauses, and clause sets
//!
//! After the passes, a formula is a conjunction of disjunctions of literals, and is read as a [clause set](clause_set) of [clauses](clause) of [literals](literal).
//! Each of these structures has a notion of equality which ignores order and duplicates:
//! - Literals are equal when their atom and negation are equal.
//! - Clauses are equal when they contain the same literals.
//! - Clause sets are equal when they contain the same clauses.
//!
//! # Others
//!
//! - [Valuations](valuation) give values to atoms, and support checking that passes preserve the value of a formula.
//! - [Derivations](derivation) record the parents of each resolvent found during [resolution](crate::procedures::resolution).

pub mod clause;
pub mod clause_set;
pub mod derivation;
pub mod formula;
pub mod literal;
pub mod tree;
pub mod valuation;
