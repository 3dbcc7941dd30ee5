use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;

use crate::catalog::SignalCatalog;
use crate::models::{AnalysisInput, ConfluenceCategory, NoGoCondition, Signal};

/// Aggregates consumed by the grader. Resolution and arithmetic only; no
/// classification happens here.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ScoreResult {
    pub bullish: Vec<Signal>,
    pub bearish: Vec<Signal>,
    pub no_go: Vec<NoGoCondition>,
    pub bullish_score: i32,
    /// Absolute value of the bearish point total.
    pub bearish_score: i32,
    pub net_score: i32,
    /// Distinct confluence tags among the active bullish signals. Bearish
    /// signals never contribute, even when they share a tag.
    pub confluence_categories: BTreeSet<ConfluenceCategory>,
    pub has_disqualifying_signal: bool,
}

impl ScoreResult {
    pub fn bullish_count(&self) -> usize {
        self.bullish.len()
    }

    pub fn bearish_count(&self) -> usize {
        self.bearish.len()
    }

    pub fn confluence_count(&self) -> usize {
        self.confluence_categories.len()
    }

    pub fn has_no_go(&self) -> bool {
        !self.no_go.is_empty()
    }
}

/// Resolve the active ids against the catalog and aggregate.
///
/// Unknown ids are dropped silently; id hygiene belongs to the detection
/// layer upstream. Input sets are ordered, so the resolved lists and every
/// derived number are deterministic for a given input.
pub fn score(input: &AnalysisInput, catalog: &SignalCatalog) -> ScoreResult {
    let mut bullish = Vec::new();
    let mut bearish = Vec::new();

    for id in &input.active_signal_ids {
        match catalog.lookup_signal(id) {
            Some(signal) if signal.is_bullish() => bullish.push(signal.clone()),
            Some(signal) => bearish.push(signal.clone()),
            None => tracing::trace!("[SCORE] ignoring unknown signal id {}", id),
        }
    }

    let no_go: Vec<NoGoCondition> = input
        .active_no_go_ids
        .iter()
        .filter_map(|id| match catalog.lookup_no_go(id) {
            Some(condition) => Some(condition.clone()),
            None => {
                tracing::trace!("[SCORE] ignoring unknown no-go id {}", id);
                None
            }
        })
        .collect();

    let bullish_score: i32 = bullish.iter().map(|s| s.points).sum();
    let bearish_score: i32 = bearish.iter().map(|s| s.points.abs()).sum();

    let confluence_categories: BTreeSet<ConfluenceCategory> = bullish
        .iter()
        .filter_map(|s| s.confluence_category)
        .collect();

    let has_disqualifying_signal = bearish.iter().any(|s| s.disqualifies_top_grade);

    ScoreResult {
        net_score: bullish_score - bearish_score,
        bullish,
        bearish,
        no_go,
        bullish_score,
        bearish_score,
        confluence_categories,
        has_disqualifying_signal,
    }
}
