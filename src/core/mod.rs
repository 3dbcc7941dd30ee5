pub mod conflicts;
pub mod engine;
pub mod grader;
pub mod scorer;
pub mod trade_params;
