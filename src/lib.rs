//! A library for converting propositional formulas to conjunctive normal form, and for refuting the result by resolution.
//!
//! otter_resolution is a reference for the two classic halves of deciding propositional satisfiability by hand: rewriting a formula to conjunctive normal form, and saturating the resulting clauses under resolution.
//! Each half is written to be inspected, with each pass of the conversion available on its own, and a record kept of how each clause of a refutation was found.
//!
//! # Orientation
//!
//! A formula is a [tree](structures::formula) of connectives over atoms, and is converted to conjunctive normal form by five [passes](transform), applied in order:
//! 1. [Eliminate biconditions](transform::eliminate_biconditions).
//! 2. [Eliminate conditions](transform::eliminate_conditions).
//! 3. [Push negations inward](transform::push_negations_inward).
//! 4. [Distribute disjunction over conjunction](transform::distribute_or_over_and).
//! 5. [Collapse](transform::collapse) to a conjunction of distinct, non-tautological disjunctions of literals.
//!
//! The result is read as a [clause set](structures::clause_set), and given to a [resolution engine](procedures::resolution::ResolutionEngine), which adds resolvents until either a pair of complementary clauses is found, or no fresh resolvent exists.
//!
//! Useful starting points, then, may be:
//! - The [transform] module, to see the passes.
//! - The [resolution procedure](crate::procedures::resolution), to see the fixpoint.
//! - The [structures], to familiarise yourself with formulas, literals, clauses, and clause sets.
//! - The [configuration](crate::config), to see what budgets are supported.
//!
//! # Examples
//!
//! + Convert a formula, one pass at a time.
//!
//! ```rust
//! # use otter_resolution::structures::formula::Formula;
//! use otter_resolution::{collapse, distribute_or_over_and, eliminate_biconditions, eliminate_conditions, push_negations_inward};
//!
//! let a = || Formula::atom("a");
//! let b = || Formula::atom("b");
//! let c = || Formula::atom("c");
//!
//! let f = Formula::or(Formula::and(a(), b()), Formula::condition(c(), a()));
//!
//! let f = eliminate_biconditions(f).unwrap();
//! let f = eliminate_conditions(f).unwrap();
//! let f = push_negations_inward(f).unwrap();
//! let f = distribute_or_over_and(f).unwrap();
//! let f = collapse(f).unwrap();
//!
//! assert_eq!(f.to_string(), "(a || !c) && (b || a || !c)");
//! ```
//!
//! + Refute a formula.
//!
//! ```rust
//! # use otter_resolution::structures::formula::Formula;
//! # use otter_resolution::transform::normal_form;
//! use otter_resolution::apply_resolution;
//!
//! let (a, b, c) = (|| Formula::atom("a"), || Formula::atom("b"), || Formula::atom("c"));
//!
//! let f = Formula::and_all([
//!     Formula::or(Formula::not(a()), c()),
//!     Formula::or(Formula::not(b()), c()),
//!     Formula::or(a(), b()),
//!     Formula::not(c()),
//! ]);
//!
//! let (conflict, _) = apply_resolution(normal_form(f).unwrap()).unwrap();
//! assert!(conflict);
//! ```
//!
//! # Logs
//!
//! Calls to [log!](log) are made throughout, and a variety of targets are defined in order to help narrow output to relevant parts of the library.
//!
//! The targets are listed in [misc::log].
//!
//! For example, when used with [env_logger](https://docs.rs/env_logger/latest/env_logger/):
//! - Logs of each step of a refutation can be found with `RUST_LOG=resolution=debug …` or,
//! - Logs of each clause staged during a scan can be found with `RUST_LOG=scan=trace …`

#![allow(clippy::single_match)]

pub mod config;
pub mod procedures;
pub mod reports;
pub mod structures;
pub mod transform;
pub mod types;

pub mod misc;

pub use procedures::resolution::apply_resolution;
pub use transform::{
    collapse, distribute_or_over_and, eliminate_biconditions, eliminate_conditions,
    push_negations_inward,
};
