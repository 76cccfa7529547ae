//! Model module containing forecast data structures

mod model_config;
mod prediction;

pub use model_config::{ModelConfig, SeasonalityMode};
pub use prediction::Prediction;
