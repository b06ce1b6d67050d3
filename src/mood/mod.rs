pub mod analysis;
pub mod fallback;
pub mod llm;
pub mod resolver;

pub use analysis::MoodAnalysis;
pub use fallback::fallback_analysis;
pub use llm::{GroqAnalyzer, MoodAnalyzer};
pub use resolver::MoodResolver;
