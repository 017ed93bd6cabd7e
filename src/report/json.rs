//! Machine-readable comparison output

use crate::predict::PredictionSummary;
use crate::{Result, TeamAnalysis};

/// Pretty-printed JSON document for a two-team comparison
pub fn comparison_json(
    a: &TeamAnalysis,
    b: &TeamAnalysis,
    comment: &str,
    summary: &PredictionSummary,
) -> Result<String> {
    let json = serde_json::json!({
        "team1": a,
        "team2": b,
        "comment": comment,
        "prediction": summary,
    });
    Ok(serde_json::to_string_pretty(&json)?)
}
