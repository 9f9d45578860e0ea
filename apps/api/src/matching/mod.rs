// Resume ↔ job-description matching engine.
// Extraction, scoring and explanation are pure functions; only `handlers` touches HTTP.

pub mod context;
pub mod experience;
pub mod explainer;
pub mod handlers;
pub mod patterns;
pub mod pipeline;
pub mod scorer;
pub mod skills;
pub mod suggestions;
pub mod verdict;
pub mod vocabulary;

pub use pipeline::{match_resume, MatchEngine, MatchError, MatchResult, RuleBasedMatcher};
