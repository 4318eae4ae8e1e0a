//! Prompt construction for the completion oracle.
//!
//! Prompts are rendered from embedded templates with the same template
//! engine used elsewhere for text expansion. The wording is part of the
//! predictor's observable behavior (it shapes what the oracle returns), so
//! the templates spell out the persona, the evidence, the required JSON
//! shape, and the rules verbatim.

use crate::inference::ports::SimilarTask;
use minijinja::Environment;
use serde_json::{Map, Value, json};
use thiserror::Error;

/// Template for the first consultation pass.
const INITIAL_TEMPLATE: &str = r#"You are an experienced lead software engineer analyzing task requirements.

Task: "{{ title }}"

Available skills: {{ skill_names }}
{%- if similar_tasks %}

Similar tasks from our database:
{%- for task in similar_tasks %}
{{ loop.index }}. "{{ task.title }}" → Skills: [{{ task.skills }}]
{%- endfor %}
{%- if frequency %}

Pattern analysis:{% for entry in frequency %} {{ entry.percent }}% needed {{ entry.skill }}{% if not loop.last %},{% endif %}{% endfor %}
{%- endif %}
{%- endif %}

Analyze this task step-by-step:
1. What UI components or user interactions are needed? → Frontend skill
2. What server logic, APIs, or data persistence is needed? → Backend skill
3. Consider that tasks may require BOTH skills if they involve full-stack work
4. You should be resolute and concise in your selection. Focus ONLY on the title as the task's objective, not what could be tangentially related.

Respond with valid JSON only:
{
  "skills": ["skill1", "skill2"],
  "confidence": {"skill1": 0.95, "skill2": 0.85},
  "reasoning": "Detailed explanation of your analysis"
}

Rules:
- Only use skills from: {{ skill_names }}
- Minimum confidence: 0.6
- Be specific in reasoning
- Must be valid JSON"#;

/// Template for the verification pass.
const VERIFICATION_TEMPLATE: &str = r#"You are a senior technical lead reviewing a skill assignment.

Task: "{{ title }}"

Available skills: {{ skill_names }}

Initial prediction:
- Skills: {{ initial_skills }}
- Reasoning: {{ initial_reasoning }}
{%- if similar_tasks %}

Historical context from database:
{%- for task in similar_tasks %}
{{ loop.index }}. "{{ task.title }}" → Skills: [{{ task.skills }}]
{%- endfor %}
{%- if frequency %}

Pattern from similar tasks:{% for entry in frequency %} {{ entry.percent }}% needed {{ entry.skill }}{% if not loop.last %},{% endif %}{% endfor %}
{%- endif %}
{%- endif %}

Verify this prediction:
1. Does the initial prediction align with historical patterns above?
2. Is any required skill missing based on similar tasks?
3. Is any skill unnecessary?

Respond with valid JSON only:
{
  "skills": ["skill1", "skill2"],
  "confidence": {"skill1": 0.95, "skill2": 0.85},
  "reasoning": "Explanation referencing historical patterns if relevant"
}

Rules:
- Only use skills from: {{ skill_names }}
- Minimum confidence: 0.6
- Must be valid JSON"#;

/// Template for keyword extraction.
const KEYWORDS_TEMPLATE: &str = r#"Extract 3-5 core technical keywords from this task title.
Focus on: technologies, features, components, actions.
Ignore: filler words, "As a", "I want to", "so that".
Return only a JSON array of keywords.

Title: "{{ title }}"

Example response: ["authentication", "API", "database"]"#;

/// Errors returned while rendering prompt templates.
#[derive(Debug, Clone, Error)]
pub enum PromptError {
    /// Template rendering failed.
    #[error("prompt template rendering failed: {0}")]
    Render(String),
}

fn render(template: &str, context: Map<String, Value>) -> Result<String, PromptError> {
    let environment = Environment::new();
    environment
        .render_str(template, context)
        .map_err(|error| PromptError::Render(error.to_string()))
}

fn similar_task_values(similar_tasks: &[SimilarTask]) -> Value {
    let entries: Vec<Value> = similar_tasks
        .iter()
        .map(|task| {
            let skill_list = task
                .skills
                .iter()
                .map(|skill| skill.name.clone())
                .collect::<Vec<String>>()
                .join(", ");
            json!({ "title": task.title, "skills": skill_list })
        })
        .collect();
    Value::Array(entries)
}

fn frequency_values(frequency: &[(String, f64)]) -> Value {
    let entries: Vec<Value> = frequency
        .iter()
        .map(|(skill, fraction)| {
            let percent = (fraction * 100.0).round() as i64;
            json!({ "skill": skill, "percent": percent })
        })
        .collect();
    Value::Array(entries)
}

/// Renders the first-pass prompt.
pub fn initial_prompt(
    title: &str,
    skill_names: &str,
    similar_tasks: &[SimilarTask],
    frequency: &[(String, f64)],
) -> Result<String, PromptError> {
    let mut context = Map::new();
    context.insert("title".to_owned(), Value::String(title.to_owned()));
    context.insert(
        "skill_names".to_owned(),
        Value::String(skill_names.to_owned()),
    );
    context.insert(
        "similar_tasks".to_owned(),
        similar_task_values(similar_tasks),
    );
    context.insert("frequency".to_owned(), frequency_values(frequency));
    render(INITIAL_TEMPLATE, context)
}

/// Renders the verification-pass prompt.
pub fn verification_prompt(
    title: &str,
    skill_names: &str,
    initial_skills: &str,
    initial_reasoning: &str,
    similar_tasks: &[SimilarTask],
    frequency: &[(String, f64)],
) -> Result<String, PromptError> {
    let mut context = Map::new();
    context.insert("title".to_owned(), Value::String(title.to_owned()));
    context.insert(
        "skill_names".to_owned(),
        Value::String(skill_names.to_owned()),
    );
    context.insert(
        "initial_skills".to_owned(),
        Value::String(initial_skills.to_owned()),
    );
    context.insert(
        "initial_reasoning".to_owned(),
        Value::String(initial_reasoning.to_owned()),
    );
    context.insert(
        "similar_tasks".to_owned(),
        similar_task_values(similar_tasks),
    );
    context.insert("frequency".to_owned(), frequency_values(frequency));
    render(VERIFICATION_TEMPLATE, context)
}

/// Renders the keyword-extraction prompt.
pub fn keywords_prompt(title: &str) -> Result<String, PromptError> {
    let mut context = Map::new();
    context.insert("title".to_owned(), Value::String(title.to_owned()));
    render(KEYWORDS_TEMPLATE, context)
}
