use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;

use crate::catalog::SignalCatalog;
use crate::core::grader::{grade, GradeResult};
use crate::core::scorer::{score, ScoreResult};
use crate::core::trade_params::{compute_trade_parameters, TradeParameters};
use crate::models::{AnalysisInput, ConfluenceCategory, Grade, NoGoCondition, Signal};

/// Complete grading verdict for one input.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AnalysisResult {
    pub grade: Grade,
    pub grade_label: String,
    pub grade_description: String,
    pub grade_color: String,
    pub total_score: i32,
    pub should_enter: bool,
    pub active_bullish_signals: Vec<Signal>,
    pub active_bearish_signals: Vec<Signal>,
    pub active_no_go_conditions: Vec<NoGoCondition>,
    pub confluence_count: usize,
    pub confluence_categories: BTreeSet<ConfluenceCategory>,
    pub reasons: Vec<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub trade_parameters: Option<TradeParameters>,
}

/// The grading pipeline: catalog-backed scoring, the grade table, and trade
/// parameters, assembled into one result.
///
/// Owns an immutable catalog; `analyze` takes `&self` and no other state, so
/// one engine can serve any number of threads and identical inputs always
/// produce identical results.
pub struct GradingEngine {
    catalog: SignalCatalog,
}

impl GradingEngine {
    pub fn new(catalog: SignalCatalog) -> Self {
        Self { catalog }
    }

    pub fn with_builtin_catalog() -> Self {
        Self::new(SignalCatalog::builtin())
    }

    pub fn catalog(&self) -> &SignalCatalog {
        &self.catalog
    }

    pub fn analyze(&self, input: &AnalysisInput) -> AnalysisResult {
        // Step 1: resolve and aggregate
        let score = score(input, &self.catalog);
        tracing::debug!(
            "[ANALYZE] resolved {} bullish / {} bearish / {} no-go, net {}",
            score.bullish_count(),
            score.bearish_count(),
            score.no_go.len(),
            score.net_score,
        );

        // Step 2: grade
        let grade_result = grade(&score);

        // Step 3: trade parameters, only for entry-permitting grades
        let trade_parameters =
            compute_trade_parameters(grade_result.should_enter, input.price_levels.as_ref());

        // Step 4: assemble
        let reasons = build_reasons(&score, &grade_result);
        AnalysisResult {
            grade: grade_result.grade,
            grade_label: grade_result.label,
            grade_description: grade_result.description,
            grade_color: grade_result.color,
            total_score: score.net_score,
            should_enter: grade_result.should_enter,
            confluence_count: score.confluence_count(),
            confluence_categories: score.confluence_categories.clone(),
            active_bullish_signals: score.bullish,
            active_bearish_signals: score.bearish,
            active_no_go_conditions: score.no_go,
            reasons,
            trade_parameters,
        }
    }
}

/// Human-readable explanation lines, ordered: no-go first, then bullish,
/// bearish, the disqualifier note, the confluence summary, and the grade
/// line. Diagnostic only; nothing downstream parses these.
fn build_reasons(score: &ScoreResult, grade_result: &GradeResult) -> Vec<String> {
    let mut reasons = Vec::new();

    for condition in &score.no_go {
        reasons.push(format!("NO-GO: {}", condition.name));
    }

    for signal in &score.bullish {
        match signal.confluence_category {
            Some(category) => reasons.push(format!(
                "+{} {} [{}]",
                signal.points, signal.display_name, category
            )),
            None => reasons.push(format!("+{} {}", signal.points, signal.display_name)),
        }
    }

    for signal in &score.bearish {
        reasons.push(format!("{} {}", signal.points, signal.display_name));
    }

    for signal in score.bearish.iter().filter(|s| s.disqualifies_top_grade) {
        reasons.push(format!("{} rules out the top grade", signal.display_name));
    }

    if score.confluence_count() > 0 {
        let categories: Vec<String> = score
            .confluence_categories
            .iter()
            .map(|c| c.to_string())
            .collect();
        reasons.push(format!(
            "Confluence across {} categories: {}",
            score.confluence_count(),
            categories.join(", ")
        ));
    }

    reasons.push(format!(
        "Graded {} ({})",
        grade_result.grade, grade_result.label
    ));

    reasons
}
