//! Determines whether a clause set is refutable by resolution.
//!
//! # Overview
//!
//! [refute](ResolutionEngine::refute) computes a fixpoint over a clause set.
//! Each step [scans](crate::procedures::scan) every pair of clauses in the set, and then:
//! - If some pair of clauses are complementary, the empty clause follows, and the engine moves to the [Conflict](State::Conflict) state.
//! - If no pair of clauses gives a resolvent not already in the set, the engine moves to the [Saturated](State::Saturated) state.
//! - Otherwise, every resolvent found is added to the set, and the engine remains [Active](State::Active).
//!
//! Roughly, the states are as diagrammed:
//!
//! ```none
//!               +------------+
//!   +---------->|   Active   |-----+-----> Conflict, if some pair of clauses are complementary
//!   |           +------------+     |
//!   |                              +-----> Saturated, if no fresh resolvent was found
//!   |                              |
//!   +------------------------------+
//!        if some fresh resolvent was found
//! ```
//!
//! Resolvents found during a scan are only added once the scan is complete, and so are checked against each other (and against the clauses they were resolved from) on the following step.
//!
//! # Termination
//!
//! Resolution never introduces an atom, and so every clause of the set is over the atoms of the input.
//! There are finitely many clauses over finitely many atoms, and each step either adds some clause or halts, so the fixpoint is reached after finitely many steps.
//! Still, the number of clauses over *n* atoms is 3^*n*, and so [budgets](crate::config::Config) are available.
//!
//! # Example
//!
//! ```rust
//! # use otter_resolution::config::Config;
//! # use otter_resolution::procedures::resolution::ResolutionEngine;
//! # use otter_resolution::reports::Report;
//! # use otter_resolution::structures::{clause_set::ClauseSet, formula::Formula};
//! let p = || Formula::atom("p");
//! let q = || Formula::atom("q");
//!
//! let cnf = Formula::and_all([
//!     Formula::or(p(), q()),
//!     Formula::or(Formula::not(p()), q()),
//!     Formula::Or(vec![Formula::not(q())]),
//! ]);
//!
//! let mut engine = ResolutionEngine::new(ClauseSet::try_from(&cnf).unwrap(), Config::default());
//! assert_eq!(engine.refute(), Report::Conflict);
//!
//! let [a, b] = engine.conflict().unwrap();
//! assert!(a.is_complementary_to(b));
//! assert_eq!(engine.core().len(), 3);
//! ```

use std::time::{Duration, Instant};

use crate::{
    config::Config,
    misc::log::targets::{self},
    procedures::scan::{self},
    reports::Report,
    structures::{
        clause::Clause,
        clause_set::{ClauseKey, ClauseSet},
        derivation::Derivation,
        formula::Formula,
    },
    transform::{self},
    types::err::{self},
};

/// The state of a refutation.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum State {
    /// Some resolvent may yet be found.
    Active,

    /// The pair of clauses with the given keys are complementary.
    Conflict(ClauseKey, ClauseKey),

    /// Every resolvent of the set is in the set.
    Saturated,
}

impl std::fmt::Display for State {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Active => write!(f, "Active"),
            Self::Conflict(a, b) => write!(f, "Conflict({a}, {b})"),
            Self::Saturated => write!(f, "Saturated"),
        }
    }
}

/// Counts for various things which count, roughly.
#[derive(Clone, Debug, Default)]
pub struct Counters {
    /// A count of every scan of the clause set.
    pub rounds: usize,

    /// A count of every pair of clauses checked.
    pub pairs: usize,

    /// A count of every resolvent added to the clause set.
    pub resolvents: usize,

    /// The time taken during refutation.
    pub time: Duration,
}

/// A resolution refutation over a clause set.
pub struct ResolutionEngine {
    config: Config,
    clause_set: ClauseSet,
    state: State,
    derivation: Derivation,
    counters: Counters,

    /// The budget which stopped the refutation, if any.
    exhausted: Option<err::ResolutionError>,
}

impl ResolutionEngine {
    pub fn new(clause_set: ClauseSet, config: Config) -> Self {
        let mut derivation = Derivation::default();
        for key in 0..clause_set.size() {
            derivation.add_input(key);
        }

        ResolutionEngine {
            config,
            clause_set,
            state: State::Active,
            derivation,
            counters: Counters::default(),
            exhausted: None,
        }
    }

    /// Makes a single scan of the clause set, and adds any fresh resolvents to the set.
    ///
    /// Returns the state after the scan, and has no effect outside of the [Active](State::Active) state.
    pub fn step(&mut self) -> State {
        if self.state != State::Active {
            return self.state;
        }

        self.counters.rounds += 1;
        let round = self.counters.rounds;

        let the_scan = match self.config.parallel() {
            true => scan::parallel(&self.clause_set, self.config.workers),
            false => scan::sequential(&self.clause_set),
        };
        self.counters.pairs += the_scan.pairs;

        log::debug!(target: targets::RESOLUTION, "Round {round}: {} clauses, {} pairs, {} staged", self.clause_set.size(), the_scan.pairs, the_scan.staged.len());

        if let Some([a, b]) = the_scan.conflict {
            self.state = State::Conflict(a, b);
            return self.state;
        }

        if the_scan.staged.is_empty() {
            self.state = State::Saturated;
            return self.state;
        }

        for staged in the_scan.staged {
            if let Some(key) = self.clause_set.insert(staged.clause) {
                self.derivation.add_resolvent(key, staged.parents, round);
                self.counters.resolvents += 1;
            }
        }

        self.state
    }

    /// Steps until a conflict, saturation, or some budget is exceeded.
    pub fn refute(&mut self) -> Report {
        let total_time = Instant::now();
        let previous_time = self.counters.time;

        while self.state == State::Active {
            self.counters.time = previous_time + total_time.elapsed();

            if let Some(budget) = self.exceeded_budget() {
                log::info!(target: targets::RESOLUTION, "Refutation stopped: {budget:?}");
                self.exhausted = Some(budget);
                return Report::Unknown;
            }

            self.step();
        }

        self.counters.time = previous_time + total_time.elapsed();
        log::info!(target: targets::RESOLUTION, "Refutation ended in {} after {} rounds, with {} clauses", self.state, self.counters.rounds, self.clause_set.size());
        Report::from(&self.state)
    }

    fn exceeded_budget(&self) -> Option<err::ResolutionError> {
        if self
            .config
            .time_limit
            .is_some_and(|limit| self.counters.time >= limit)
        {
            return Some(err::ResolutionError::TimeUp);
        }

        if self
            .config
            .round_limit
            .is_some_and(|limit| self.counters.rounds >= limit)
        {
            return Some(err::ResolutionError::RoundLimit);
        }

        if self
            .config
            .clause_limit
            .is_some_and(|limit| self.clause_set.size() > limit)
        {
            return Some(err::ResolutionError::ClauseLimit);
        }

        None
    }

    pub fn state(&self) -> State {
        self.state
    }

    /// The report of the current state.
    pub fn report(&self) -> Report {
        Report::from(&self.state)
    }

    /// The budget which stopped the last refutation, if any.
    pub fn exhausted(&self) -> Option<err::ResolutionError> {
        self.exhausted
    }

    pub fn clause_set(&self) -> &ClauseSet {
        &self.clause_set
    }

    pub fn into_clause_set(self) -> ClauseSet {
        self.clause_set
    }

    pub fn counters(&self) -> &Counters {
        &self.counters
    }

    pub fn derivation(&self) -> &Derivation {
        &self.derivation
    }

    /// The complementary pair of clauses, if a conflict was found.
    pub fn conflict(&self) -> Option<[&Clause; 2]> {
        match self.state {
            State::Conflict(a, b) => Some([self.clause_set.get(a)?, self.clause_set.get(b)?]),
            _ => None,
        }
    }

    /// The input clauses the conflict depends on, if a conflict was found, in order of key.
    ///
    /// The conjunction of these clauses is unsatisfiable.
    pub fn core(&self) -> Vec<&Clause> {
        match self.state {
            State::Conflict(a, b) => self
                .derivation
                .origins([a, b])
                .into_iter()
                .filter_map(|key| self.clause_set.get(key))
                .collect(),
            _ => Vec::default(),
        }
    }
}

/// Applies resolution to a canonical formula, with the default configuration.
///
/// Returns whether a conflict was derived, and the canonical formula of the final clause set.
pub fn apply_resolution(formula: Formula) -> Result<(bool, Formula), err::ErrorKind> {
    apply_resolution_with(formula, &Config::default())
}

/// Applies resolution to a canonical formula.
///
/// If some budget of the config stops the refutation, the budget is returned as an error.
pub fn apply_resolution_with(
    formula: Formula,
    config: &Config,
) -> Result<(bool, Formula), err::ErrorKind> {
    let the_set = ClauseSet::try_from(&formula)?;
    let mut engine = ResolutionEngine::new(the_set, config.clone());

    match engine.refute() {
        Report::Conflict => Ok((true, Formula::from(engine.clause_set()))),
        Report::Saturated => Ok((false, Formula::from(engine.clause_set()))),
        Report::Unknown => Err(engine
            .exhausted()
            .unwrap_or(err::ResolutionError::RoundLimit)
            .into()),
    }
}

/// Whether a formula is satisfiable, by normal form and refutation.
pub fn satisfiable(formula: Formula, config: &Config) -> Result<bool, err::ErrorKind> {
    let mut the_formula = formula;
    for pass in transform::Pass::ALL {
        if pass == transform::Pass::Collapse {
            break;
        }
        the_formula = pass.apply(the_formula)?;
    }
    let the_set = transform::collapse_to_clause_set(the_formula)?;

    let mut engine = ResolutionEngine::new(the_set, config.clone());
    match engine.refute() {
        Report::Conflict => Ok(false),
        Report::Saturated => Ok(true),
        Report::Unknown => Err(engine
            .exhausted()
            .unwrap_or(err::ResolutionError::RoundLimit)
            .into()),
    }
}
