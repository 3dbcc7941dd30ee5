use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;
use std::fmt;

/// Catalog identifier for a bullish/bearish signal. Stable across catalog versions.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct SignalId(String);

impl SignalId {
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for SignalId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<&str> for SignalId {
    fn from(id: &str) -> Self {
        Self(id.to_string())
    }
}

/// Catalog identifier for a no-go condition.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct NoGoId(String);

impl NoGoId {
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for NoGoId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<&str> for NoGoId {
    fn from(id: &str) -> Self {
        Self(id.to_string())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SignalCategory {
    Bullish,
    Bearish,
}

impl fmt::Display for SignalCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SignalCategory::Bullish => write!(f, "bullish"),
            SignalCategory::Bearish => write!(f, "bearish"),
        }
    }
}

/// Grouping tag counting how many independent technical dimensions agree.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ConfluenceCategory {
    Volume,
    Momentum,
    Trend,
    Pattern,
    SupportResistance,
    Catalyst,
}

impl fmt::Display for ConfluenceCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ConfluenceCategory::Volume => write!(f, "volume"),
            ConfluenceCategory::Momentum => write!(f, "momentum"),
            ConfluenceCategory::Trend => write!(f, "trend"),
            ConfluenceCategory::Pattern => write!(f, "pattern"),
            ConfluenceCategory::SupportResistance => write!(f, "support_resistance"),
            ConfluenceCategory::Catalyst => write!(f, "catalyst"),
        }
    }
}

/// One catalog entry: a pre-detected chart condition with a fixed point value.
///
/// `points` is signed: positive for bullish entries, negative for bearish.
/// The sign must agree with `category`; the catalog rejects entries where it
/// does not.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Signal {
    pub id: SignalId,
    pub display_name: String,
    pub short_name: String,
    pub points: i32,
    pub category: SignalCategory,
    #[serde(default)]
    pub confluence_category: Option<ConfluenceCategory>,
    #[serde(default)]
    pub conflicts_with: BTreeSet<SignalId>,
    #[serde(default)]
    pub disqualifies_top_grade: bool,
}

impl Signal {
    pub fn is_bullish(&self) -> bool {
        self.category == SignalCategory::Bullish
    }

    pub fn is_bearish(&self) -> bool {
        self.category == SignalCategory::Bearish
    }
}

/// A condition that forces the worst grade outcome no matter what else fired.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NoGoCondition {
    pub id: NoGoId,
    pub name: String,
    pub description: String,
}
