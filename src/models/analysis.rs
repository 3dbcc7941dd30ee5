use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;

use crate::models::{NoGoId, SignalId};

/// Current price plus the nearest support/resistance levels. All three are
/// needed to derive trade parameters, so they travel as one optional unit
/// rather than three fields that can go missing independently.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PriceLevels {
    pub current_price: f64,
    pub support_level: f64,
    pub resistance_level: f64,
}

/// One grading request: which catalog entries fired, plus optional prices.
///
/// Ids that do not exist in the catalog are ignored, never an error; the
/// detection layer upstream owns id hygiene.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct AnalysisInput {
    #[serde(default)]
    pub active_signal_ids: BTreeSet<SignalId>,
    #[serde(default)]
    pub active_no_go_ids: BTreeSet<NoGoId>,
    #[serde(default)]
    pub price_levels: Option<PriceLevels>,
}

impl AnalysisInput {
    pub fn from_signal_ids<I, S>(ids: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<SignalId>,
    {
        Self {
            active_signal_ids: ids.into_iter().map(Into::into).collect(),
            ..Self::default()
        }
    }

    pub fn with_no_go_ids<I, S>(mut self, ids: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<NoGoId>,
    {
        self.active_no_go_ids = ids.into_iter().map(Into::into).collect();
        self
    }

    pub fn with_price_levels(mut self, levels: PriceLevels) -> Self {
        self.price_levels = Some(levels);
        self
    }
}
