use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;

use crate::models::{Signal, SignalId};

/// One mutually-exclusive pair found among the active signals.
/// `signal_a` always sorts before `signal_b`, so reciprocal declarations
/// collapse into a single record.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ConflictReport {
    pub signal_a: SignalId,
    pub signal_b: SignalId,
}

/// Report every declared conflict among the active signals.
///
/// A conflict counts no matter which side declares it; the catalog declares
/// some relationships one-sided. Diagnostic only: the grading path never
/// consults this.
pub fn find_conflicts(active: &[Signal]) -> Vec<ConflictReport> {
    let active_ids: BTreeSet<&SignalId> = active.iter().map(|s| &s.id).collect();

    let mut pairs = BTreeSet::new();
    for signal in active {
        for target in &signal.conflicts_with {
            if *target == signal.id || !active_ids.contains(target) {
                continue;
            }
            let (a, b) = if signal.id < *target {
                (signal.id.clone(), target.clone())
            } else {
                (target.clone(), signal.id.clone())
            };
            pairs.insert((a, b));
        }
    }

    pairs
        .into_iter()
        .map(|(signal_a, signal_b)| ConflictReport { signal_a, signal_b })
        .collect()
}
