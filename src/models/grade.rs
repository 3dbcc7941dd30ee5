use serde::{Deserialize, Serialize};
use std::fmt;

/// The eight grade tiers, best first. `Ord` follows declaration order, so
/// `Grade::APlus < Grade::F` and "worse" means strictly greater.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize,
)]
pub enum Grade {
    #[serde(rename = "A+")]
    APlus,
    #[serde(rename = "A")]
    A,
    #[serde(rename = "B+")]
    BPlus,
    #[serde(rename = "B")]
    B,
    #[serde(rename = "C+")]
    CPlus,
    #[serde(rename = "C")]
    C,
    #[serde(rename = "D")]
    D,
    #[serde(rename = "F")]
    F,
}

impl Grade {
    pub fn as_str(&self) -> &'static str {
        match self {
            Grade::APlus => "A+",
            Grade::A => "A",
            Grade::BPlus => "B+",
            Grade::B => "B",
            Grade::CPlus => "C+",
            Grade::C => "C",
            Grade::D => "D",
            Grade::F => "F",
        }
    }

    /// Entry permission is a function of the grade alone: everything above D
    /// is tradeable. Keeping this here is what stops the flag and the grade
    /// from ever disagreeing.
    pub fn should_enter(&self) -> bool {
        !matches!(self, Grade::D | Grade::F)
    }

    /// Presentation color tag. Carries no meaning for grading.
    pub fn color(&self) -> &'static str {
        match self {
            Grade::APlus => "#16a34a",
            Grade::A => "#22c55e",
            Grade::BPlus => "#84cc16",
            Grade::B => "#a3b018",
            Grade::CPlus => "#eab308",
            Grade::C => "#f97316",
            Grade::D => "#ef4444",
            Grade::F => "#dc2626",
        }
    }
}

impl fmt::Display for Grade {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}
