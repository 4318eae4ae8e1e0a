//! Two-pass skill prediction over the completion oracle.

use crate::inference::domain::{SkillPrediction, first_json_array, first_json_object};
use crate::inference::ports::{
    CompletionClient, CompletionError, PredictionError, SimilarTask, SimilarTaskFinder,
    SkillPredictor,
};
use crate::skill::domain::Skill;
use async_trait::async_trait;
use serde::Deserialize;
use std::collections::{BTreeMap, HashSet};
use std::sync::Arc;
use tracing::{debug, warn};

use super::prompts;

/// Number of similar historical tasks consulted as prediction evidence.
pub const SIMILAR_TASK_LIMIT: usize = 5;

/// Maximum keywords returned by keyword extraction.
const MAX_KEYWORDS: usize = 5;

/// Keywords shorter than this are discarded during keyword extraction.
const MIN_KEYWORD_LENGTH: usize = 3;

/// Reasoning marker reported by the deterministic fallback.
const FALLBACK_REASONING: &str = "Fallback keyword-based prediction";

/// Reasoning reported when the oracle omits the field.
const DEFAULT_REASONING: &str = "LLM analysis completed";

/// Confidence assigned uniformly by the deterministic fallback.
const FALLBACK_CONFIDENCE: f64 = 0.5;

/// Title signals suggesting frontend work.
const FRONTEND_SIGNALS: [&str; 10] = [
    "ui",
    "frontend",
    "page",
    "component",
    "responsive",
    "mobile",
    "design",
    "css",
    "html",
    "react",
];

/// Title signals suggesting backend work.
const BACKEND_SIGNALS: [&str; 8] = [
    "api", "backend", "database", "server", "auth", "security", "log", "data",
];

/// Outcome of one oracle round trip after the decode step.
///
/// Every non-parsed outcome is routed through an explicit fallback policy
/// by the caller; decode problems never escape as generic errors.
enum OracleOutcome {
    /// The response contained a usable prediction.
    Parsed(SkillPrediction),
    /// The response carried no decodable JSON payload.
    ParseFailure(String),
    /// The oracle could not be reached.
    TransportFailure(CompletionError),
}

/// Lenient decode target for oracle prediction responses. Missing fields
/// degrade to empty values rather than failing the decode.
#[derive(Debug, Deserialize)]
struct RawPrediction {
    #[serde(default)]
    skills: Vec<String>,
    #[serde(default)]
    confidence: BTreeMap<String, f64>,
    #[serde(default)]
    reasoning: Option<String>,
}

/// Two-pass skill predictor service.
///
/// Pass one proposes a skill set from the title, the legal skill names,
/// and similar historical tasks; pass two asks the oracle to verify the
/// proposal against the same evidence. Oracle failures are absorbed: pass
/// one falls back to [`fallback_prediction`], pass two falls back to the
/// initial proposal.
#[derive(Clone)]
pub struct SkillPredictorService<F, C>
where
    F: SimilarTaskFinder,
    C: CompletionClient,
{
    finder: Arc<F>,
    completions: Arc<C>,
}

impl<F, C> SkillPredictorService<F, C>
where
    F: SimilarTaskFinder,
    C: CompletionClient,
{
    /// Creates a new predictor service.
    #[must_use]
    pub const fn new(finder: Arc<F>, completions: Arc<C>) -> Self {
        Self { finder, completions }
    }

    /// Extracts 3-5 core technical keywords from a task title.
    ///
    /// Best-effort: transport failures, missing JSON, and malformed arrays
    /// all yield an empty vector. Keywords of fewer than three characters
    /// are discarded and at most five are returned.
    pub async fn extract_keywords(&self, title: &str) -> Vec<String> {
        let prompt = match prompts::keywords_prompt(title) {
            Ok(prompt) => prompt,
            Err(error) => {
                warn!(%error, "keyword prompt rendering failed");
                return Vec::new();
            }
        };

        let text = match self.completions.complete(&prompt).await {
            Ok(text) => text,
            Err(error) => {
                warn!(%error, "keyword extraction failed");
                return Vec::new();
            }
        };

        let Some(payload) = first_json_array(&text) else {
            warn!("keyword extraction response carried no JSON array");
            return Vec::new();
        };
        match serde_json::from_str::<Vec<String>>(payload) {
            Ok(keywords) => keywords
                .into_iter()
                .filter(|keyword| keyword.chars().count() >= MIN_KEYWORD_LENGTH)
                .take(MAX_KEYWORDS)
                .collect(),
            Err(error) => {
                warn!(%error, "keyword extraction response was not a string array");
                Vec::new()
            }
        }
    }

    async fn consult(&self, prompt: &str, available_skills: &[Skill]) -> OracleOutcome {
        match self.completions.complete(prompt).await {
            Ok(text) => match parse_prediction(&text, available_skills) {
                Ok(prediction) => OracleOutcome::Parsed(prediction),
                Err(reason) => OracleOutcome::ParseFailure(reason),
            },
            Err(error) => OracleOutcome::TransportFailure(error),
        }
    }

    async fn initial_pass(
        &self,
        title: &str,
        skill_names: &str,
        available_skills: &[Skill],
        similar_tasks: &[SimilarTask],
        frequency: &[(String, f64)],
    ) -> SkillPrediction {
        let prompt = match prompts::initial_prompt(title, skill_names, similar_tasks, frequency) {
            Ok(prompt) => prompt,
            Err(error) => {
                warn!(%error, "initial prompt rendering failed, using fallback");
                return fallback_prediction(title, available_skills);
            }
        };

        match self.consult(&prompt, available_skills).await {
            OracleOutcome::Parsed(prediction) => prediction,
            OracleOutcome::ParseFailure(reason) => {
                warn!(%reason, "initial prediction unparsable, using fallback");
                fallback_prediction(title, available_skills)
            }
            OracleOutcome::TransportFailure(error) => {
                warn!(%error, "initial prediction transport failure, using fallback");
                fallback_prediction(title, available_skills)
            }
        }
    }

    async fn verification_pass(
        &self,
        title: &str,
        skill_names: &str,
        available_skills: &[Skill],
        initial: SkillPrediction,
        similar_tasks: &[SimilarTask],
        frequency: &[(String, f64)],
    ) -> SkillPrediction {
        let prompt = match prompts::verification_prompt(
            title,
            skill_names,
            &initial.skill_names.join(", "),
            &initial.reasoning,
            similar_tasks,
            frequency,
        ) {
            Ok(prompt) => prompt,
            Err(error) => {
                warn!(%error, "verification prompt rendering failed, keeping initial");
                return initial;
            }
        };

        match self.consult(&prompt, available_skills).await {
            OracleOutcome::Parsed(prediction) => prediction,
            OracleOutcome::ParseFailure(reason) => {
                warn!(%reason, "verification unparsable, keeping initial prediction");
                initial
            }
            OracleOutcome::TransportFailure(error) => {
                warn!(%error, "verification transport failure, keeping initial prediction");
                initial
            }
        }
    }
}

#[async_trait]
impl<F, C> SkillPredictor for SkillPredictorService<F, C>
where
    F: SimilarTaskFinder,
    C: CompletionClient,
{
    async fn predict(
        &self,
        title: &str,
        available_skills: &[Skill],
    ) -> Result<SkillPrediction, PredictionError> {
        let similar_tasks = self.finder.find_similar(title, SIMILAR_TASK_LIMIT).await?;
        debug!(count = similar_tasks.len(), "similar tasks found");

        let frequency = skill_frequency(&similar_tasks);
        let skill_names = available_skills
            .iter()
            .map(|skill| skill.name().as_str().to_owned())
            .collect::<Vec<String>>()
            .join(", ");

        let initial = self
            .initial_pass(
                title,
                &skill_names,
                available_skills,
                &similar_tasks,
                &frequency,
            )
            .await;
        let verified = self
            .verification_pass(
                title,
                &skill_names,
                available_skills,
                initial,
                &similar_tasks,
                &frequency,
            )
            .await;
        Ok(verified)
    }
}

/// Computes, for each skill seen among similar tasks, the fraction of
/// those tasks that require it. Skills appear in first-encountered order.
fn skill_frequency(similar_tasks: &[SimilarTask]) -> Vec<(String, f64)> {
    if similar_tasks.is_empty() {
        return Vec::new();
    }

    let mut counts: Vec<(String, usize)> = Vec::new();
    for task in similar_tasks {
        for skill in &task.skills {
            match counts.iter_mut().find(|(name, _)| *name == skill.name) {
                Some((_, count)) => *count += 1,
                None => counts.push((skill.name.clone(), 1)),
            }
        }
    }

    let total = similar_tasks.len() as f64;
    counts
        .into_iter()
        .map(|(name, count)| (name, count as f64 / total))
        .collect()
}

/// Decodes a prediction from raw oracle text.
///
/// The first brace-delimited JSON object is decoded leniently; predicted
/// skill names outside the available catalog are discarded and missing
/// reasoning is replaced with a fixed marker. Returns a human-readable
/// reason when no usable JSON is present.
fn parse_prediction(text: &str, available_skills: &[Skill]) -> Result<SkillPrediction, String> {
    let payload = first_json_object(text).ok_or_else(|| "no JSON found in response".to_owned())?;
    let raw: RawPrediction =
        serde_json::from_str(payload).map_err(|error| error.to_string())?;

    let valid_names: HashSet<&str> = available_skills
        .iter()
        .map(|skill| skill.name().as_str())
        .collect();

    Ok(SkillPrediction {
        skill_names: raw
            .skills
            .into_iter()
            .filter(|name| valid_names.contains(name.as_str()))
            .collect(),
        confidence: raw.confidence,
        reasoning: raw.reasoning.unwrap_or_else(|| DEFAULT_REASONING.to_owned()),
    })
}

/// Deterministic keyword-heuristic prediction used when the oracle is
/// unavailable or unparsable.
///
/// The lowercased title's words are tested for membership in fixed
/// frontend and backend signal sets; available skills whose names contain
/// `frontend` or `backend` are selected for whichever signal class fired.
/// When the resulting set is empty every available skill is selected.
/// Confidence is uniformly 0.5.
#[must_use]
pub fn fallback_prediction(title: &str, available_skills: &[Skill]) -> SkillPrediction {
    let lowered = title.to_lowercase();
    let title_words: HashSet<&str> = lowered
        .split(|c: char| !c.is_alphanumeric())
        .filter(|word| !word.is_empty())
        .collect();
    let has_frontend = FRONTEND_SIGNALS
        .iter()
        .any(|keyword| title_words.contains(keyword));
    let has_backend = BACKEND_SIGNALS
        .iter()
        .any(|keyword| title_words.contains(keyword));

    let mut skill_names: Vec<String> = Vec::new();
    for skill in available_skills {
        let skill_lowered = skill.name().as_str().to_lowercase();
        if has_frontend && skill_lowered.contains("frontend") {
            skill_names.push(skill.name().as_str().to_owned());
        } else if has_backend && skill_lowered.contains("backend") {
            skill_names.push(skill.name().as_str().to_owned());
        }
    }

    if skill_names.is_empty() {
        skill_names = available_skills
            .iter()
            .map(|skill| skill.name().as_str().to_owned())
            .collect();
    }

    let confidence = skill_names
        .iter()
        .map(|name| (name.clone(), FALLBACK_CONFIDENCE))
        .collect();

    SkillPrediction {
        skill_names,
        confidence,
        reasoning: FALLBACK_REASONING.to_owned(),
    }
}
