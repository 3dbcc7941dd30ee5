use trade_grader::models::{AnalysisInput, PriceLevels};

/// Input activating the given signal ids against the builtin catalog.
pub fn input(ids: &[&str]) -> AnalysisInput {
    AnalysisInput::from_signal_ids(ids.iter().copied())
}

/// The five-signal momentum setup used across the scenario tests:
/// +12 volume, +12 momentum, +15 trend, +12 momentum, +13 trend = net 64.
pub fn baseline_setup() -> Vec<&'static str> {
    vec![
        "high-buy-vol",
        "macd-green",
        "higher-high-higher-low",
        "tech-align",
        "first-two-pullbacks",
    ]
}

/// Price levels from the worked stop/target example: entry 10.00, support
/// 9.50, resistance 11.00.
pub fn example_levels() -> PriceLevels {
    PriceLevels {
        current_price: 10.00,
        support_level: 9.50,
        resistance_level: 11.00,
    }
}
