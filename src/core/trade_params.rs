use serde::{Deserialize, Serialize};

use crate::models::PriceLevels;

/// Stop sits 10% of the entry-to-support distance below support; target sits
/// 10% of the current-to-resistance distance inside resistance.
const STOP_BUFFER_RATIO: f64 = 0.1;
const TARGET_BUFFER_RATIO: f64 = 0.1;

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct TradeParameters {
    pub entry_price: f64,
    pub stop_loss: f64,
    pub take_profit: f64,
    pub risk: f64,
    pub reward: f64,
    /// `None` when risk is non-positive (support at or above the current
    /// price): the ratio is undefined there, and NaN/Infinity never leak.
    pub risk_reward_ratio: Option<f64>,
}

/// Derive entry/stop/target from the supplied levels.
///
/// Runs only for entry-permitting grades with all three prices present;
/// `None` otherwise. Missing prices are an expected case, not an error.
pub fn compute_trade_parameters(
    should_enter: bool,
    levels: Option<&PriceLevels>,
) -> Option<TradeParameters> {
    if !should_enter {
        return None;
    }
    let levels = levels?;

    let entry_price = levels.current_price;
    let stop_loss =
        levels.support_level - (levels.current_price - levels.support_level) * STOP_BUFFER_RATIO;
    let take_profit = levels.resistance_level
        - (levels.resistance_level - levels.current_price) * TARGET_BUFFER_RATIO;

    let risk = entry_price - stop_loss;
    let reward = take_profit - entry_price;

    let risk_reward_ratio = if risk > 0.0 {
        Some(round3(reward / risk))
    } else {
        tracing::debug!(
            "[PARAMS] support {} at or above entry {}, risk/reward undefined",
            levels.support_level,
            entry_price
        );
        None
    };

    Some(TradeParameters {
        entry_price: round2(entry_price),
        stop_loss: round2(stop_loss),
        take_profit: round2(take_profit),
        risk: round2(risk),
        reward: round2(reward),
        risk_reward_ratio,
    })
}

fn round2(x: f64) -> f64 {
    (x * 100.0).round() / 100.0
}

fn round3(x: f64) -> f64 {
    (x * 1000.0).round() / 1000.0
}
