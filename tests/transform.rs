use otter_resolution::{
    structures::{formula::Formula, valuation::Valuation},
    transform::{
        collapse, distribute_or_over_and, eliminate_biconditions, eliminate_conditions,
        normal_form, push_negations_inward, Pass,
    },
    types::err::{self},
};

use rand::{rngs::StdRng, Rng, SeedableRng};

fn a() -> Formula {
    Formula::atom("A")
}

fn b() -> Formula {
    Formula::atom("B")
}

fn c() -> Formula {
    Formula::atom("C")
}

mod passes {
    use super::*;

    #[test]
    fn bicondition_elimination() {
        let f = Formula::bicondition(a(), b());
        assert_eq!(
            eliminate_biconditions(f).unwrap(),
            Formula::and(Formula::condition(a(), b()), Formula::condition(b(), a()))
        );
    }

    #[test]
    fn nested_biconditions() {
        let f = Formula::bicondition(Formula::bicondition(a(), b()), c());
        let g = eliminate_biconditions(f).unwrap();
        assert_eq!(
            g.to_string(),
            "(((A => B) && (B => A)) => C) && (C => ((A => B) && (B => A)))"
        );
    }

    #[test]
    fn condition_elimination() {
        let f = Formula::condition(a(), b());
        assert_eq!(
            eliminate_conditions(f).unwrap(),
            Formula::or(b(), Formula::not(a()))
        );
    }

    #[test]
    fn double_negation() {
        let f = Formula::not(Formula::not(a()));
        assert_eq!(push_negations_inward(f).unwrap(), a());

        let f = Formula::not(Formula::not(Formula::not(Formula::not(a()))));
        assert_eq!(push_negations_inward(f).unwrap(), a());
    }

    #[test]
    fn de_morgan_over_and() {
        let f = Formula::not(Formula::and(a(), b()));
        assert_eq!(
            push_negations_inward(f).unwrap(),
            Formula::or(Formula::not(a()), Formula::not(b()))
        );
    }

    #[test]
    fn de_morgan_over_or() {
        let f = Formula::not(Formula::or(a(), b()));
        assert_eq!(
            push_negations_inward(f).unwrap(),
            Formula::and(Formula::not(a()), Formula::not(b()))
        );
    }

    #[test]
    fn negations_pushed_repeatedly() {
        let f = Formula::not(Formula::and(Formula::not(Formula::or(a(), b())), c()));
        let g = push_negations_inward(f).unwrap();
        assert_eq!(g.to_string(), "(A || B) || !C");
    }

    #[test]
    fn distribution() {
        let f = Formula::or(Formula::and(a(), b()), c());
        assert_eq!(
            distribute_or_over_and(f).unwrap(),
            Formula::and(Formula::or(a(), c()), Formula::or(b(), c()))
        );
    }

    #[test]
    fn distribution_below_a_conjunction() {
        let f = Formula::and(a(), Formula::or(b(), Formula::and(a(), c())));
        assert_eq!(
            distribute_or_over_and(f).unwrap().to_string(),
            "A && ((B || A) && (B || C))"
        );
    }

    #[test]
    fn passes_in_order() {
        assert_eq!(Pass::ALL[0].next(), Some(Pass::EliminateConditions));
        assert_eq!(Pass::Collapse.next(), None);
        assert_eq!(Pass::DistributeOrOverAnd.to_string(), "distribute_or_over_and");
    }
}

mod malformed {
    use super::*;

    #[test]
    fn empty_atom() {
        let f = Formula::not(Formula::atom(""));
        assert_eq!(
            normal_form(f),
            Err(err::ErrorKind::MalformedFormula(err::FormulaError::EmptyAtom))
        );
    }

    #[test]
    fn empty_disjunction() {
        let f = Formula::and(a(), Formula::Or(vec![]));
        for pass in Pass::ALL {
            assert_eq!(
                pass.apply(f.clone()),
                Err(err::ErrorKind::MalformedFormula(err::FormulaError::EmptyClause))
            );
        }
    }

    #[test]
    fn collapse_before_distribution() {
        let f = Formula::or(a(), Formula::and(b(), c()));
        assert!(matches!(
            collapse(f),
            Err(err::ErrorKind::InvalidCollapseState(_))
        ));
    }

    #[test]
    fn collapse_before_elimination() {
        let f = Formula::bicondition(a(), b());
        assert_eq!(
            collapse(f),
            Err(err::ErrorKind::InvalidCollapseState(
                err::CollapseError::Bicondition("A <=> B".to_string())
            ))
        );
    }
}

/// Random formulas over a few atoms, of bounded depth.
fn random_formula(rng: &mut StdRng, depth: usize) -> Formula {
    const ATOMS: [&str; 3] = ["p", "q", "r"];

    if depth == 0 || rng.gen_ratio(1, 5) {
        return Formula::atom(ATOMS[rng.gen_range(0..ATOMS.len())]);
    }

    let connective = rng.gen_range(0..6);
    let mut child = || random_formula(rng, depth - 1);
    match connective {
        0 => Formula::not(child()),
        1 => Formula::and(child(), child()),
        2 => Formula::or(child(), child()),
        3 => Formula::or_all([child(), child(), child()]),
        4 => Formula::condition(child(), child()),
        _ => Formula::bicondition(child(), child()),
    }
}

fn agree(f: &Formula, g: &Formula) -> bool {
    let atoms = ["p", "q", "r"];
    let equivalent = Valuation::all_over(&atoms).all(|v| f.evaluate(&v) == g.evaluate(&v));
    equivalent
}

#[test]
fn passes_preserve_value() {
    let mut rng = StdRng::seed_from_u64(71);

    for _ in 0..200 {
        let original = random_formula(&mut rng, 3);

        let mut the_formula = original.clone();
        for pass in Pass::ALL {
            let next = pass.apply(the_formula.clone()).unwrap();
            assert!(
                agree(&the_formula, &next),
                "{pass} changed the value of {the_formula}, giving {next}"
            );
            the_formula = next;
        }

        assert!(agree(&original, &the_formula));
    }
}

#[test]
fn passes_leave_their_guarantees() {
    fn no_biconditions(f: &Formula) -> bool {
        match f {
            Formula::Atom(_) => true,
            Formula::Not(child) => no_biconditions(child),
            Formula::And(children) | Formula::Or(children) => children.iter().all(no_biconditions),
            Formula::Condition(l, r) => no_biconditions(l) && no_biconditions(r),
            Formula::Bicondition(..) => false,
        }
    }

    fn negations_on_atoms(f: &Formula) -> bool {
        match f {
            Formula::Atom(_) => true,
            Formula::Not(child) => child.is_atom(),
            Formula::And(children) | Formula::Or(children) => {
                children.iter().all(negations_on_atoms)
            }
            Formula::Condition(..) | Formula::Bicondition(..) => false,
        }
    }

    fn distributed(f: &Formula) -> bool {
        match f {
            Formula::Atom(_) | Formula::Not(_) => true,
            Formula::And(children) => children.iter().all(distributed),
            Formula::Or(children) => children
                .iter()
                .all(|c| !matches!(c, Formula::And(_)) && distributed(c)),
            Formula::Condition(..) | Formula::Bicondition(..) => false,
        }
    }

    let mut rng = StdRng::seed_from_u64(13);

    for _ in 0..200 {
        let f = eliminate_biconditions(random_formula(&mut rng, 3)).unwrap();
        assert!(no_biconditions(&f));

        let f = eliminate_conditions(f).unwrap();
        let f = push_negations_inward(f).unwrap();
        assert!(negations_on_atoms(&f), "{f}");

        let f = distribute_or_over_and(f).unwrap();
        assert!(distributed(&f), "{f}");
        assert!(negations_on_atoms(&f));
    }
}
