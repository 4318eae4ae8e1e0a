//! Port contracts for skill inference.

pub mod completion;
pub mod predictor;
pub mod similarity;

pub use completion::{CompletionClient, CompletionError};
pub use predictor::{PredictionError, SkillPredictor};
pub use similarity::{SimilarTask, SimilarTaskFinder, SimilarityError};
