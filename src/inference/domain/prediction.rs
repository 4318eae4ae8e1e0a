//! Skill prediction result type.

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Outcome of a skill prediction: the chosen skill names, per-skill
/// confidence, and the oracle's (or fallback's) rationale.
///
/// Skill names are guaranteed to come from the catalog handed to the
/// predictor; the confidence map is reported as parsed and may mention
/// names outside the final skill list.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SkillPrediction {
    /// Predicted skill names, filtered to the available catalog.
    pub skill_names: Vec<String>,
    /// Per-skill confidence scores as reported by the oracle.
    pub confidence: BTreeMap<String, f64>,
    /// Human-readable rationale for the prediction.
    pub reasoning: String,
}
