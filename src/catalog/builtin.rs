use std::collections::BTreeSet;

use crate::models::{ConfluenceCategory, NoGoCondition, NoGoId, Signal, SignalCategory, SignalId};

use ConfluenceCategory::{Catalyst, Momentum, Pattern, SupportResistance, Trend, Volume};

fn bullish(
    id: &str,
    display_name: &str,
    short_name: &str,
    points: i32,
    confluence: ConfluenceCategory,
    conflicts: &[&str],
) -> Signal {
    Signal {
        id: SignalId::new(id),
        display_name: display_name.to_string(),
        short_name: short_name.to_string(),
        points,
        category: SignalCategory::Bullish,
        confluence_category: Some(confluence),
        conflicts_with: conflicts.iter().map(|&c| SignalId::new(c)).collect::<BTreeSet<_>>(),
        disqualifies_top_grade: false,
    }
}

fn bearish(
    id: &str,
    display_name: &str,
    short_name: &str,
    points: i32,
    confluence: ConfluenceCategory,
    conflicts: &[&str],
) -> Signal {
    Signal {
        id: SignalId::new(id),
        display_name: display_name.to_string(),
        short_name: short_name.to_string(),
        points,
        category: SignalCategory::Bearish,
        confluence_category: Some(confluence),
        conflicts_with: conflicts.iter().map(|&c| SignalId::new(c)).collect::<BTreeSet<_>>(),
        disqualifies_top_grade: false,
    }
}

fn no_go(id: &str, name: &str, description: &str) -> NoGoCondition {
    NoGoCondition {
        id: NoGoId::new(id),
        name: name.to_string(),
        description: description.to_string(),
    }
}

/// The production signal universe. Conflict declarations are one-sided in
/// places (a conflict counts no matter which side declares it).
pub fn builtin_signals() -> Vec<Signal> {
    vec![
        // Volume
        bullish(
            "high-buy-vol",
            "High Buying Volume",
            "Buy Vol",
            12,
            Volume,
            &["heavy-sell-vol"],
        ),
        bullish(
            "rising-volume-trend",
            "Rising Volume on Up Moves",
            "Vol Trend",
            8,
            Volume,
            &[],
        ),
        // Momentum
        bullish("macd-green", "MACD Crossed Green", "MACD", 12, Momentum, &[]),
        bullish(
            "tech-align",
            "Technical Alignment",
            "Alignment",
            12,
            Momentum,
            &[],
        ),
        bullish(
            "rel-strength",
            "Relative Strength vs Market",
            "Rel Str",
            9,
            Momentum,
            &[],
        ),
        bullish(
            "breaking-high-of-day",
            "Breaking High of Day",
            "HOD Break",
            13,
            Momentum,
            &[],
        ),
        // Trend
        bullish(
            "higher-high-higher-low",
            "Higher Highs and Higher Lows",
            "HH/HL",
            15,
            Trend,
            &["lower-high-lower-low"],
        ),
        bullish(
            "first-two-pullbacks",
            "First or Second Pullback",
            "Pullback",
            13,
            Trend,
            &[],
        ),
        bullish(
            "good-risk-reward",
            "Favorable Risk to Reward",
            "R:R",
            15,
            Trend,
            &[],
        ),
        bullish("above-vwap", "Holding Above VWAP", "VWAP+", 10, Trend, &[]),
        bullish(
            "gap-and-hold",
            "Gap Up Holding Gains",
            "Gap Hold",
            9,
            Trend,
            &[],
        ),
        // Pattern
        bullish("cup-handle", "Cup and Handle", "Cup", 14, Pattern, &[]),
        bullish("bull-flag", "Bull Flag", "Flag", 14, Pattern, &["bear-flag"]),
        bullish("abcd-pattern", "ABCD Pattern", "ABCD", 12, Pattern, &[]),
        bullish(
            "bullish-engulfing",
            "Bullish Engulfing Candle",
            "Engulfing",
            10,
            Pattern,
            &[],
        ),
        bullish(
            "hammer-candle",
            "Hammer off Support",
            "Hammer",
            8,
            Pattern,
            &[],
        ),
        // Support / resistance
        bullish(
            "near-support",
            "Bouncing off Major Support",
            "Support",
            10,
            SupportResistance,
            &[],
        ),
        bullish(
            "room-to-resistance",
            "Clear Air to Next Resistance",
            "Clear Air",
            10,
            SupportResistance,
            &[],
        ),
        // Catalyst
        bullish(
            "news-catalyst",
            "Breaking News Catalyst",
            "News",
            11,
            Catalyst,
            &[],
        ),
        bullish("earnings-beat", "Earnings Beat", "Earnings", 9, Catalyst, &[]),
        bullish(
            "unusual-options",
            "Unusual Options Activity",
            "Options",
            6,
            Catalyst,
            &[],
        ),
        // Bearish
        bearish(
            "heavy-sell-vol",
            "Heavy Selling Volume",
            "Sell Vol",
            -13,
            Volume,
            &[],
        ),
        bearish(
            "fading-volume",
            "Fading Volume on Push",
            "Vol Fade",
            -10,
            Volume,
            &["rising-volume-trend"],
        ),
        bearish(
            "macd-red",
            "MACD Crossed Red",
            "MACD-",
            -11,
            Momentum,
            &["macd-green"],
        ),
        Signal {
            disqualifies_top_grade: true,
            ..bearish(
                "sudden-rejection",
                "Sudden Rejection Wick",
                "Rejection",
                -15,
                Momentum,
                &[],
            )
        },
        bearish(
            "lower-high-lower-low",
            "Lower Highs and Lower Lows",
            "LH/LL",
            -14,
            Trend,
            &[],
        ),
        bearish(
            "extended-from-base",
            "Overextended From Base",
            "Extended",
            -10,
            Trend,
            &[],
        ),
        bearish("bear-flag", "Bear Flag", "Bear Flag", -12, Pattern, &[]),
        bearish(
            "overhead-resistance",
            "Heavy Overhead Resistance",
            "Overhead",
            -11,
            SupportResistance,
            &["room-to-resistance"],
        ),
    ]
}

pub fn builtin_no_go_conditions() -> Vec<NoGoCondition> {
    vec![
        no_go(
            "below-vwap",
            "Below VWAP",
            "Price is trading below the volume-weighted average price.",
        ),
        no_go(
            "halt-risk",
            "Halt Risk",
            "A circuit-breaker halt looks imminent; fills cannot be trusted.",
        ),
        no_go(
            "thin-tape",
            "Thin Tape",
            "Volume is too light to get in or out at size.",
        ),
        no_go(
            "wide-spread",
            "Wide Spread",
            "The bid/ask spread is wide enough to eat the edge.",
        ),
        no_go(
            "against-market",
            "Fighting the Market",
            "The broad market is moving hard in the opposite direction.",
        ),
        no_go(
            "midday-chop",
            "Midday Chop",
            "Low-conviction lunch hours; ranges resolve randomly.",
        ),
    ]
}
