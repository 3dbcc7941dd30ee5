use serde::{Deserialize, Serialize};

use crate::core::scorer::ScoreResult;
use crate::models::Grade;

const TOP_NET_SCORE: i32 = 90;
const TOP_BULLISH_COUNT: usize = 5;
const TOP_CONFLUENCE: usize = 3;
const GREAT_NET_SCORE: i32 = 75;
const GREAT_BULLISH_COUNT: usize = 4;
const GREAT_CONFLUENCE: usize = 2;
const GREAT_MAX_BEARISH: usize = 1;
const GOOD_NET_SCORE: i32 = 60;
const GOOD_BULLISH_COUNT: usize = 3;
const DECENT_NET_SCORE: i32 = 50;
const RISKY_NET_SCORE: i32 = 40;
const WEAK_NET_SCORE: i32 = 30;
const POOR_NET_SCORE: i32 = 20;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GradeResult {
    pub grade: Grade,
    pub label: String,
    pub description: String,
    pub color: String,
    pub should_enter: bool,
}

/// One row of the grading table: the first rule whose predicate holds wins.
struct GradeRule {
    grade: Grade,
    label: &'static str,
    applies: fn(&ScoreResult) -> bool,
    describe: fn(&ScoreResult) -> String,
}

/// The grading table, strictest first. Order is the contract: a looser rule
/// further down must never shadow a stricter match above it, and the final
/// rule is unconditional so every input grades to something.
const RULES: &[GradeRule] = &[
    GradeRule {
        grade: Grade::F,
        label: "NO-GO!",
        applies: |s| s.has_no_go(),
        describe: describe_no_go,
    },
    GradeRule {
        grade: Grade::APlus,
        label: "TAKE IT!",
        applies: |s| {
            s.net_score >= TOP_NET_SCORE
                && s.bullish_count() >= TOP_BULLISH_COUNT
                && s.confluence_count() >= TOP_CONFLUENCE
                && !s.has_disqualifying_signal
        },
        describe: describe_confluence,
    },
    GradeRule {
        grade: Grade::A,
        label: "GREAT!",
        applies: |s| {
            s.net_score >= GREAT_NET_SCORE
                && s.bullish_count() >= GREAT_BULLISH_COUNT
                && s.confluence_count() >= GREAT_CONFLUENCE
                && s.bearish_count() <= GREAT_MAX_BEARISH
        },
        describe: describe_confluence,
    },
    GradeRule {
        grade: Grade::BPlus,
        label: "GOOD",
        applies: |s| s.net_score >= GOOD_NET_SCORE && s.bullish_count() >= GOOD_BULLISH_COUNT,
        describe: |_| "Solid setup, one tier short of top confluence.".to_string(),
    },
    GradeRule {
        grade: Grade::B,
        label: "DECENT",
        applies: |s| s.net_score >= DECENT_NET_SCORE,
        describe: |_| "Tradeable, but the edge is modest.".to_string(),
    },
    GradeRule {
        grade: Grade::CPlus,
        label: "RISKY",
        applies: |s| s.net_score >= RISKY_NET_SCORE,
        describe: |_| "Marginal edge. Size down or wait for confirmation.".to_string(),
    },
    GradeRule {
        grade: Grade::C,
        label: "WEAK",
        applies: |s| s.net_score >= WEAK_NET_SCORE,
        describe: |_| "Most signals are not in agreement.".to_string(),
    },
    GradeRule {
        grade: Grade::D,
        label: "POOR",
        applies: |s| s.net_score >= POOR_NET_SCORE,
        describe: |_| "Not enough working in this setup's favor.".to_string(),
    },
    GradeRule {
        grade: Grade::F,
        label: "SKIP!",
        applies: |_| true,
        describe: |_| "No edge present. Stand aside.".to_string(),
    },
];

fn describe_no_go(score: &ScoreResult) -> String {
    let names: Vec<&str> = score.no_go.iter().map(|c| c.name.as_str()).collect();
    format!("No-go conditions present: {}", names.join(", "))
}

fn describe_confluence(score: &ScoreResult) -> String {
    format!(
        "{} bullish signals agreeing across {} confluence categories.",
        score.bullish_count(),
        score.confluence_count()
    )
}

/// Map score aggregates to a grade. Total: the final table row catches
/// everything, so this never fails and an empty input degrades to F.
pub fn grade(score: &ScoreResult) -> GradeResult {
    let rule = RULES
        .iter()
        .find(|rule| (rule.applies)(score))
        .expect("final grading rule is unconditional");

    tracing::debug!(
        "[GRADE] net={} bullish={} bearish={} confluence={} disqualifier={} no_go={} -> {} ({})",
        score.net_score,
        score.bullish_count(),
        score.bearish_count(),
        score.confluence_count(),
        score.has_disqualifying_signal,
        score.has_no_go(),
        rule.grade,
        rule.label,
    );

    GradeResult {
        grade: rule.grade,
        label: rule.label.to_string(),
        description: (rule.describe)(score),
        color: rule.grade.color().to_string(),
        should_enter: rule.grade.should_enter(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::BTreeSet;

    use crate::models::ConfluenceCategory;
    use crate::test_helpers::{make_bearish_signal, make_bullish_signal, make_no_go};

    fn empty_score() -> ScoreResult {
        ScoreResult {
            bullish: Vec::new(),
            bearish: Vec::new(),
            no_go: Vec::new(),
            bullish_score: 0,
            bearish_score: 0,
            net_score: 0,
            confluence_categories: BTreeSet::new(),
            has_disqualifying_signal: false,
        }
    }

    /// Score with n bullish signals of equal points spread across distinct
    /// confluence categories (up to the six that exist).
    fn bullish_score(count: usize, points_each: i32) -> ScoreResult {
        let categories = [
            ConfluenceCategory::Volume,
            ConfluenceCategory::Momentum,
            ConfluenceCategory::Trend,
            ConfluenceCategory::Pattern,
            ConfluenceCategory::SupportResistance,
            ConfluenceCategory::Catalyst,
        ];
        let bullish: Vec<_> = (0..count)
            .map(|i| {
                make_bullish_signal(
                    &format!("bull-{i}"),
                    points_each,
                    Some(categories[i % categories.len()]),
                )
            })
            .collect();
        let confluence_categories = bullish.iter().filter_map(|s| s.confluence_category).collect();
        let bullish_score: i32 = bullish.iter().map(|s| s.points).sum();
        ScoreResult {
            net_score: bullish_score,
            bullish_score,
            bullish,
            confluence_categories,
            ..empty_score()
        }
    }

    #[test]
    fn empty_input_grades_f_skip() {
        let result = grade(&empty_score());
        assert_eq!(result.grade, Grade::F);
        assert_eq!(result.label, "SKIP!");
        assert!(!result.should_enter);
    }

    #[test]
    fn no_go_dominates_a_perfect_score() {
        let mut score = bullish_score(6, 15);
        score.no_go = vec![make_no_go("storm", "Storm Warning")];
        let result = grade(&score);
        assert_eq!(result.grade, Grade::F);
        assert_eq!(result.label, "NO-GO!");
        assert!(!result.should_enter);
        assert!(result.description.contains("Storm Warning"));
    }

    #[test]
    fn no_go_description_joins_all_names() {
        let mut score = empty_score();
        score.no_go = vec![make_no_go("a", "First Problem"), make_no_go("b", "Second Problem")];
        let result = grade(&score);
        assert_eq!(result.description, "No-go conditions present: First Problem, Second Problem");
    }

    #[test]
    fn top_grade_needs_score_count_and_confluence() {
        // 6 signals x 15 = net 90, six distinct categories.
        let result = grade(&bullish_score(6, 15));
        assert_eq!(result.grade, Grade::APlus);
        assert_eq!(result.label, "TAKE IT!");
        assert!(result.should_enter);
        assert!(result.description.contains("6 bullish signals"));
    }

    #[test]
    fn high_score_without_count_is_not_top_grade() {
        // Net 90 from only 4 signals: fails the 5-count gate, lands on A.
        let mut score = bullish_score(4, 15);
        score.bullish_score = 90;
        score.net_score = 90;
        let result = grade(&score);
        assert_eq!(result.grade, Grade::A);
    }

    #[test]
    fn disqualifier_blocks_top_grade_only() {
        let mut score = bullish_score(6, 15);
        score.has_disqualifying_signal = true;
        // Still net 90 with zero bearish signals, so rule 3 catches it.
        let result = grade(&score);
        assert_eq!(result.grade, Grade::A);
        assert!(result.should_enter);
    }

    #[test]
    fn great_rejected_when_bearish_count_exceeds_one() {
        // Net 75+ and plenty of bullish signals, but two bearish entries.
        let mut score = bullish_score(5, 15);
        score.bearish = vec![
            make_bearish_signal("bear-1", -10, None),
            make_bearish_signal("bear-2", -10, None),
        ];
        score.bearish_score = 20;
        score.net_score = score.bullish_score - 20; // 55
        let result = grade(&score);
        // 55 with 5 bullish: B+ needs net >= 60, so B.
        assert_eq!(result.grade, Grade::B);
    }

    #[test]
    fn score_band_thresholds() {
        // Counts stay at zero so only the net-score bands decide.
        for (net, expected) in [
            (59, Grade::B),
            (50, Grade::B),
            (49, Grade::CPlus),
            (40, Grade::CPlus),
            (39, Grade::C),
            (30, Grade::C),
            (29, Grade::D),
            (20, Grade::D),
            (19, Grade::F),
            (0, Grade::F),
            (-40, Grade::F),
        ] {
            let mut score = empty_score();
            score.net_score = net;
            let result = grade(&score);
            assert_eq!(result.grade, expected, "net_score {net}");
            assert_eq!(result.should_enter, expected.should_enter());
        }
    }

    #[test]
    fn b_plus_needs_three_bullish_signals() {
        // Net 60 from three signals across three categories: B+.
        let result = grade(&bullish_score(3, 20));
        assert_eq!(result.grade, Grade::BPlus);

        // Same net from two signals misses the count gate and falls to B.
        let result = grade(&bullish_score(2, 30));
        assert_eq!(result.grade, Grade::B);
    }

    #[test]
    fn should_enter_always_tracks_grade() {
        for net in -50..=120 {
            let mut score = empty_score();
            score.net_score = net;
            let result = grade(&score);
            assert_eq!(result.should_enter, result.grade.should_enter());
        }
    }

    #[test]
    fn color_round_trips_with_grade() {
        let result = grade(&bullish_score(6, 15));
        assert_eq!(result.color, result.grade.color());
        let json = serde_json::to_string(&result).unwrap();
        let back: GradeResult = serde_json::from_str(&json).unwrap();
        assert_eq!(back, result);
    }

    #[test]
    fn raising_score_never_worsens_the_grade() {
        // Hold counts fixed and sweep the net score upward. Grade's Ord runs
        // best-to-worst, so the grade value must never increase.
        let grade_at = |net: i32| {
            let mut score = bullish_score(6, 10);
            score.net_score = net;
            grade(&score).grade
        };
        let mut previous = grade_at(-30);
        for net in -29..=130 {
            let current = grade_at(net);
            assert!(
                current <= previous,
                "grade worsened from {previous} to {current} when net rose to {net}"
            );
            previous = current;
        }
    }
}
