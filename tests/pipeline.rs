use std::collections::HashSet;

use otter_resolution::{
    collapse,
    structures::{clause::Clause, clause_set::ClauseSet, formula::Formula, literal::Literal},
    transform::{normal_form, Pass},
};

use rand::{rngs::StdRng, Rng, SeedableRng};

fn random_formula(rng: &mut StdRng, depth: usize) -> Formula {
    const ATOMS: [&str; 4] = ["a", "b", "c", "d"];

    if depth == 0 || rng.gen_ratio(1, 4) {
        let atom = Formula::atom(ATOMS[rng.gen_range(0..ATOMS.len())]);
        return match rng.gen_bool(0.5) {
            true => Formula::not(atom),
            false => atom,
        };
    }

    let connective = rng.gen_range(0..5);
    let mut child = || random_formula(rng, depth - 1);
    match connective {
        0 => Formula::not(child()),
        1 => Formula::and_all([child(), child(), child()]),
        2 => Formula::or(child(), child()),
        3 => Formula::condition(child(), child()),
        _ => Formula::bicondition(child(), child()),
    }
}

/// Checks the canonical shape, returning the clauses read.
fn check_shape(f: &Formula) -> Vec<Clause> {
    let Formula::And(conjuncts) = f else {
        panic!("root of {f} is not a conjunction");
    };

    let mut clauses = Vec::default();
    for conjunct in conjuncts {
        let Formula::Or(disjuncts) = conjunct else {
            panic!("{conjunct} is not a disjunction");
        };

        let literals = disjuncts
            .iter()
            .map(|d| Literal::try_from(d).expect("a literal"))
            .collect::<Vec<_>>();
        let distinct = literals.iter().collect::<HashSet<_>>();
        assert_eq!(distinct.len(), literals.len(), "{conjunct} repeats a literal");

        let clause = Clause::new(literals);
        assert!(!clause.is_tautology(), "{conjunct} is a tautology");
        clauses.push(clause);
    }

    let distinct = clauses.iter().collect::<HashSet<_>>();
    assert_eq!(distinct.len(), clauses.len(), "{f} repeats a clause");

    clauses
}

#[test]
fn collapse_shape() {
    let mut rng = StdRng::seed_from_u64(5);

    for _ in 0..200 {
        let f = normal_form(random_formula(&mut rng, 3)).unwrap();
        check_shape(&f);
    }
}

#[test]
fn collapse_is_idempotent() {
    let mut rng = StdRng::seed_from_u64(8);

    for _ in 0..200 {
        let once = normal_form(random_formula(&mut rng, 3)).unwrap();
        let twice = collapse(once.clone()).unwrap();

        assert_eq!(
            ClauseSet::try_from(&once).unwrap(),
            ClauseSet::try_from(&twice).unwrap()
        );
    }
}

#[test]
fn collapse_merges_duplicates() {
    let a = || Formula::atom("a");
    let b = || Formula::atom("b");

    let f = Formula::and_all([
        Formula::or_all([a(), b(), a()]),
        Formula::or(b(), a()),
        Formula::or(Formula::not(b()), b()),
        Formula::and(a(), a()),
    ]);

    let g = collapse(f).unwrap();
    assert_eq!(check_shape(&g).len(), 2);
    assert_eq!(g.to_string(), "(a || b) && a");
}

#[test]
fn literal_root() {
    let f = Formula::not(Formula::atom("a"));
    let g = normal_form(f).unwrap();
    assert_eq!(
        g,
        Formula::And(vec![Formula::Or(vec![Formula::not(Formula::atom("a"))])])
    );
}

#[test]
fn snapshot_between_passes() {
    let p = || Formula::atom("p");
    let q = || Formula::atom("q");
    let f = Formula::bicondition(p(), Formula::not(q()));

    let mut snapshots = vec![f.to_string()];
    let mut the_formula = f;
    for pass in Pass::ALL {
        the_formula = pass.apply(the_formula).unwrap();
        snapshots.push(the_formula.to_string());
    }

    assert_eq!(
        snapshots,
        vec![
            "p <=> !q",
            "(p => !q) && (!q => p)",
            "(!q || !p) && (p || !!q)",
            "(!q || !p) && (p || q)",
            "(!q || !p) && (p || q)",
            "(!q || !p) && (p || q)",
        ]
    );
}
