pub mod analysis;
pub mod grade;
pub mod signal;

pub use analysis::{AnalysisInput, PriceLevels};
pub use grade::Grade;
pub use signal::{ConfluenceCategory, NoGoCondition, NoGoId, Signal, SignalCategory, SignalId};
