use std::collections::BTreeSet;

use crate::catalog::SignalCatalog;
use crate::models::{
    ConfluenceCategory, NoGoCondition, NoGoId, Signal, SignalCategory, SignalId,
};

/// Bullish catalog entry with the given points and optional confluence tag.
pub fn make_bullish_signal(
    id: &str,
    points: i32,
    confluence: Option<ConfluenceCategory>,
) -> Signal {
    Signal {
        id: SignalId::new(id),
        display_name: format!("Bullish {id}"),
        short_name: id.to_string(),
        points,
        category: SignalCategory::Bullish,
        confluence_category: confluence,
        conflicts_with: BTreeSet::new(),
        disqualifies_top_grade: false,
    }
}

/// Bearish catalog entry. `points` must be negative to pass catalog validation.
pub fn make_bearish_signal(
    id: &str,
    points: i32,
    confluence: Option<ConfluenceCategory>,
) -> Signal {
    Signal {
        id: SignalId::new(id),
        display_name: format!("Bearish {id}"),
        short_name: id.to_string(),
        points,
        category: SignalCategory::Bearish,
        confluence_category: confluence,
        conflicts_with: BTreeSet::new(),
        disqualifies_top_grade: false,
    }
}

pub fn make_no_go(id: &str, name: &str) -> NoGoCondition {
    NoGoCondition {
        id: NoGoId::new(id),
        name: name.to_string(),
        description: format!("{name} condition for tests"),
    }
}

/// A small synthetic catalog: four bullish signals across three confluence
/// categories, two bearish signals (one disqualifier), one no-go condition.
pub fn synthetic_catalog() -> SignalCatalog {
    let mut rejection = make_bearish_signal("rejection", -15, Some(ConfluenceCategory::Momentum));
    rejection.disqualifies_top_grade = true;

    let mut buy_vol = make_bullish_signal("buy-vol", 12, Some(ConfluenceCategory::Volume));
    buy_vol.conflicts_with.insert("sell-vol".into());

    SignalCatalog::new(
        vec![
            buy_vol,
            make_bullish_signal("momo", 12, Some(ConfluenceCategory::Momentum)),
            make_bullish_signal("trend-up", 15, Some(ConfluenceCategory::Trend)),
            make_bullish_signal("untagged", 10, None),
            make_bearish_signal("sell-vol", -13, Some(ConfluenceCategory::Volume)),
            rejection,
        ],
        vec![make_no_go("storm", "Storm Warning")],
    )
    .expect("synthetic catalog must validate")
}
