//! Match comments and prediction summaries
//!
//! Heuristic rules over two teams' aggregated statistics.

pub mod comment;
pub mod comparison;
pub mod summary;

pub use comment::{match_comment, Tendency};
pub use comparison::form_verdict;
pub use summary::{predict_summary, Assessment, Lean, Market, PredictionSummary};
