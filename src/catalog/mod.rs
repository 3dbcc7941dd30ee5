pub mod builtin;

use serde::Deserialize;
use std::collections::BTreeMap;
use thiserror::Error;

use crate::models::{NoGoCondition, NoGoId, Signal, SignalCategory, SignalId};

#[derive(Debug, Error)]
pub enum CatalogError {
    #[error("duplicate signal id: {0}")]
    DuplicateSignalId(SignalId),

    #[error("duplicate no-go id: {0}")]
    DuplicateNoGoId(NoGoId),

    #[error("signal {id}: {points} points disagree with {category} category")]
    PointsSignMismatch {
        id: SignalId,
        points: i32,
        category: SignalCategory,
    },

    #[error("signal {id}: conflicts_with references unknown signal {target}")]
    UnknownConflictTarget { id: SignalId, target: SignalId },

    #[error("invalid catalog document: {0}")]
    Parse(#[from] serde_json::Error),
}

/// On-disk shape of a catalog document.
#[derive(Debug, Deserialize)]
struct CatalogFile {
    signals: Vec<Signal>,
    #[serde(default)]
    no_go_conditions: Vec<NoGoCondition>,
}

/// Immutable registry of every recognized signal and no-go condition.
///
/// Built once at startup and shared read-only from then on; lookups by
/// unknown id return `None`. Construction is the only failure point: a
/// duplicate id, a points/category sign disagreement, or a `conflicts_with`
/// entry naming a signal that does not exist all abort with `CatalogError`.
#[derive(Debug, Clone)]
pub struct SignalCatalog {
    signals: BTreeMap<SignalId, Signal>,
    no_go_conditions: BTreeMap<NoGoId, NoGoCondition>,
}

impl SignalCatalog {
    pub fn new(
        signals: Vec<Signal>,
        no_go_conditions: Vec<NoGoCondition>,
    ) -> Result<Self, CatalogError> {
        let mut signal_map = BTreeMap::new();
        for signal in signals {
            let sign_ok = match signal.category {
                SignalCategory::Bullish => signal.points > 0,
                SignalCategory::Bearish => signal.points < 0,
            };
            if !sign_ok {
                return Err(CatalogError::PointsSignMismatch {
                    id: signal.id.clone(),
                    points: signal.points,
                    category: signal.category,
                });
            }
            if signal_map.contains_key(&signal.id) {
                return Err(CatalogError::DuplicateSignalId(signal.id));
            }
            signal_map.insert(signal.id.clone(), signal);
        }

        for signal in signal_map.values() {
            for target in &signal.conflicts_with {
                if !signal_map.contains_key(target) {
                    return Err(CatalogError::UnknownConflictTarget {
                        id: signal.id.clone(),
                        target: target.clone(),
                    });
                }
            }
        }

        let mut no_go_map = BTreeMap::new();
        for condition in no_go_conditions {
            if no_go_map.contains_key(&condition.id) {
                return Err(CatalogError::DuplicateNoGoId(condition.id));
            }
            no_go_map.insert(condition.id.clone(), condition);
        }

        Ok(Self {
            signals: signal_map,
            no_go_conditions: no_go_map,
        })
    }

    /// The shipped production catalog. Its validity is pinned by tests, so a
    /// construction failure here is a build defect, not a runtime condition.
    pub fn builtin() -> Self {
        Self::new(builtin::builtin_signals(), builtin::builtin_no_go_conditions())
            .expect("builtin catalog must validate")
    }

    /// Load and validate a `{"signals": [...], "no_go_conditions": [...]}` document.
    pub fn from_json_str(json: &str) -> Result<Self, CatalogError> {
        let file: CatalogFile = serde_json::from_str(json)?;
        Self::new(file.signals, file.no_go_conditions)
    }

    pub fn lookup_signal(&self, id: &SignalId) -> Option<&Signal> {
        self.signals.get(id)
    }

    pub fn lookup_no_go(&self, id: &NoGoId) -> Option<&NoGoCondition> {
        self.no_go_conditions.get(id)
    }

    pub fn all_signals(&self) -> impl Iterator<Item = &Signal> {
        self.signals.values()
    }

    pub fn all_no_go_conditions(&self) -> impl Iterator<Item = &NoGoCondition> {
        self.no_go_conditions.values()
    }

    pub fn signal_count(&self) -> usize {
        self.signals.len()
    }

    pub fn no_go_count(&self) -> usize {
        self.no_go_conditions.len()
    }
}
