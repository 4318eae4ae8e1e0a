//! Domain model for skill inference.

mod extract;
mod prediction;
mod similarity;

pub use extract::{first_json_array, first_json_object};
pub use prediction::SkillPrediction;
pub use similarity::{
    SIMILARITY_THRESHOLD, WORD_SIMILARITY_THRESHOLD, similarity, title_score, word_similarity,
};
