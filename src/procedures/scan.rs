/*!
Scans over every unordered pair of clauses in a clause set.

For each pair (including each clause paired with itself) a scan:
- Halts, if the pair are [complementary](Clause::is_complementary_to), noting the pair as a conflict.
- Stages the resolvent of the pair, if the pair [can be resolved](Clause::can_resolve_with), and the resolvent is neither a tautology, already in the set, nor already staged.

Pairs are visited in order of key, and so a scan is deterministic.

# Parallel scans

Checks on distinct pairs are independent, and a [parallel] scan splits the rows of pairs across scoped threads.
- Each thread stages resolvents in a buffer of its own.
- Any thread which finds a conflict raises a shared flag, and every thread stops on seeing the flag.
- Buffers are merged in order of pair and deduplicated once all threads have finished.

When more than one conflict is found before the threads stop, the least pair is kept, so a parallel scan which finds a conflict may report a different pair than a sequential scan, though never a different outcome.
*/

use std::{
    collections::HashSet,
    sync::atomic::{AtomicBool, Ordering},
};

use crate::{
    config::WorkerCount,
    misc::log::targets::{self},
    structures::{
        clause::Clause,
        clause_set::{ClauseKey, ClauseSet},
    },
};

/// A resolvent, paired with the keys of the clauses it was resolved from.
#[derive(Clone, Debug)]
pub struct Staged {
    pub clause: Clause,
    pub parents: [ClauseKey; 2],
}

/// The result of a scan.
#[derive(Debug, Default)]
pub struct Scan {
    /// The first pair of complementary clauses found, if any.
    pub conflict: Option<[ClauseKey; 2]>,

    /// Distinct resolvents not in the set, in order of parents.
    pub staged: Vec<Staged>,

    /// The count of pairs checked.
    pub pairs: usize,
}

/// Scans each pair of clauses on the calling thread.
pub fn sequential(set: &ClauseSet) -> Scan {
    scan_rows(set, 0..set.size(), None)
}

/// Scans each pair of clauses across `workers` threads.
///
/// Should a thread panic, the scan is made again on the calling thread.
pub fn parallel(set: &ClauseSet, workers: WorkerCount) -> Scan {
    let size = set.size();
    let workers = workers.clamp(1, size.max(1));
    let found = AtomicBool::new(false);

    let scans = crossbeam::thread::scope(|scope| {
        let handles = (0..workers)
            .map(|worker| {
                let found = &found;
                scope.spawn(move |_| scan_rows(set, (worker..size).step_by(workers), Some(found)))
            })
            .collect::<Vec<_>>();

        handles
            .into_iter()
            .map(|handle| handle.join())
            .collect::<Result<Vec<_>, _>>()
    });

    match scans {
        Ok(Ok(scans)) => merge(scans),
        _ => {
            log::error!(target: targets::SCAN, "A scanning thread panicked, scanning sequentially");
            sequential(set)
        }
    }
}

/// Scans the pairs (i, j) with i from `rows` and j ≥ i.
fn scan_rows(
    set: &ClauseSet,
    rows: impl Iterator<Item = ClauseKey>,
    found: Option<&AtomicBool>,
) -> Scan {
    let clauses = set.as_slice();
    let mut the_scan = Scan::default();
    let mut seen = HashSet::new();

    for i in rows {
        if found.is_some_and(|flag| flag.load(Ordering::Relaxed)) {
            break;
        }

        let a = &clauses[i];
        for (j, b) in clauses.iter().enumerate().skip(i) {
            the_scan.pairs += 1;

            if a.is_complementary_to(b) {
                log::trace!(target: targets::SCAN, "Conflict between {i} and {j}");
                if let Some(flag) = found {
                    flag.store(true, Ordering::Relaxed);
                }
                the_scan.conflict = Some([i, j]);
                return the_scan;
            }

            if a.can_resolve_with(b) {
                let resolvent = a.resolve_with(b);
                if resolvent.is_tautology() || set.contains(&resolvent) {
                    continue;
                }
                if seen.insert(resolvent.canonical()) {
                    log::trace!(target: targets::SCAN, "Staged {resolvent} from {i} and {j}");
                    the_scan.staged.push(Staged {
                        clause: resolvent,
                        parents: [i, j],
                    });
                }
            }
        }
    }

    the_scan
}

fn merge(scans: Vec<Scan>) -> Scan {
    let mut the_scan = Scan::default();
    let mut staged = Vec::new();

    for scan in scans {
        the_scan.pairs += scan.pairs;
        the_scan.conflict = match (the_scan.conflict, scan.conflict) {
            (Some(a), Some(b)) => Some(a.min(b)),
            (a, b) => a.or(b),
        };
        staged.extend(scan.staged);
    }

    if the_scan.conflict.is_some() {
        return the_scan;
    }

    staged.sort_by_key(|s| s.parents);
    let mut seen = HashSet::new();
    the_scan.staged = staged
        .into_iter()
        .filter(|s| seen.insert(s.clause.canonical()))
        .collect();

    the_scan
}
