//! Matching pipeline — sequences extraction, scoring, explanation and suggestions.
//!
//! Pure and synchronous: no I/O, no clocks, no randomness. Identical inputs give
//! identical results. `AppState` holds an `Arc<dyn MatchEngine>` so the backend can
//! be swapped without touching handlers.

use serde::{Deserialize, Serialize};
use thiserror::Error;
use tracing::debug;

use crate::matching::context::extract_context;
use crate::matching::experience::{extract_experience, ExperienceEstimate};
use crate::matching::explainer::{explain, Explanation};
use crate::matching::scorer::{
    combine, keyword_score, lexical_overlap_score, rule_score, ScoreBreakdown, ScoreWeights,
    SubScores,
};
use crate::matching::skills::extract_skills;
use crate::matching::suggestions::{generate_suggestions, Suggestion};
use crate::matching::verdict::{verdict, Verdict};

#[derive(Debug, Error, PartialEq, Eq)]
pub enum MatchError {
    #[error("Invalid input: {0}")]
    InvalidInput(String),
}

/// Everything a single match produces. Constructed per call, owned by the caller.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MatchResult {
    pub score: u32,
    pub breakdown: ScoreBreakdown,
    pub explanation: Explanation,
    pub suggestions: Vec<Suggestion>,
    pub resume_experience: Option<ExperienceEstimate>,
    pub job_experience: Option<ExperienceEstimate>,
    pub verdict: Verdict,
}

/// A matching backend. Implement this to swap strategies behind the API.
pub trait MatchEngine: Send + Sync {
    fn evaluate(&self, resume_text: &str, jd_text: &str) -> Result<MatchResult, MatchError>;

    /// Short backend name, surfaced in logs.
    fn backend(&self) -> &'static str;
}

/// Default backend: vocabulary keywords, lexical overlap and regional rules.
#[derive(Debug, Clone, Copy, Default)]
pub struct RuleBasedMatcher {
    pub weights: ScoreWeights,
}

impl MatchEngine for RuleBasedMatcher {
    fn evaluate(&self, resume_text: &str, jd_text: &str) -> Result<MatchResult, MatchError> {
        match_with_weights(resume_text, jd_text, &self.weights)
    }

    fn backend(&self) -> &'static str {
        "rule_based"
    }
}

/// Scores `resume_text` against `jd_text` with the default weights.
///
/// Total over text: blank or nonsensical input yields a low, well-defined score.
/// Only non-text input (embedded NUL characters, as in pasted binary documents)
/// is rejected.
pub fn match_resume(resume_text: &str, jd_text: &str) -> Result<MatchResult, MatchError> {
    match_with_weights(resume_text, jd_text, &ScoreWeights::default())
}

fn match_with_weights(
    resume_text: &str,
    jd_text: &str,
    weights: &ScoreWeights,
) -> Result<MatchResult, MatchError> {
    ensure_text("resume_text", resume_text)?;
    ensure_text("jd_text", jd_text)?;

    let resume_skills = extract_skills(resume_text);
    let jd_skills = extract_skills(jd_text);

    let resume_exp = extract_experience(resume_text);
    let jd_exp = extract_experience(jd_text);

    let resume_ctx = extract_context(resume_text);
    let jd_ctx = extract_context(jd_text);

    debug!(
        resume_skills = resume_skills.len(),
        jd_skills = jd_skills.len(),
        ?resume_exp,
        ?jd_exp,
        "Extracted match features"
    );

    let scores = SubScores {
        keyword: keyword_score(&resume_skills, &jd_skills),
        semantic: lexical_overlap_score(resume_text, jd_text),
        rule: rule_score(resume_exp, jd_exp, &resume_ctx, &jd_ctx),
    };
    let score = combine(&scores, weights);

    let explanation = explain(&resume_skills, &jd_skills, resume_exp, jd_exp, &resume_ctx);
    let suggestions = generate_suggestions(&explanation, &resume_ctx);

    debug!(score, ?scores, suggestions = suggestions.len(), "Match scored");

    Ok(MatchResult {
        score,
        breakdown: ScoreBreakdown::from(&scores),
        explanation,
        suggestions,
        resume_experience: resume_exp,
        job_experience: jd_exp,
        verdict: verdict(score),
    })
}

fn ensure_text(field: &str, text: &str) -> Result<(), MatchError> {
    if text.contains('\0') {
        return Err(MatchError::InvalidInput(format!(
            "{field} contains binary data; paste plain text"
        )));
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::matching::suggestions::{Priority, SuggestionCategory};
    use crate::matching::verdict::ScoreLabel;

    const RESUME_A: &str = "Python Django React AWS, 3 years experience, CTC 8 LPA, TCS 2021-2023";
    const JD_A: &str = "Senior Backend Engineer, 4-6 years, Python, Django, AWS, Docker, \
                        Kubernetes, REST API, Microservices";

    #[test]
    fn test_backend_scenario() {
        let result = match_resume(RESUME_A, JD_A).unwrap();

        for skill in ["python", "django", "aws"] {
            assert!(result.explanation.matched_skills.iter().any(|s| s == skill));
        }
        for skill in ["docker", "kubernetes", "rest api", "microservices"] {
            assert!(result.explanation.missing_skills.iter().any(|s| s == skill));
        }
        assert_eq!(result.explanation.extra_skills, vec!["react"]);

        // 3 of 7 required skills
        assert_eq!(result.breakdown.keyword_score, 43);
        // 3 vs 6 years (-30) and TCS against a non-outsourcing JD (-5)
        assert_eq!(result.breakdown.rule_score, 65);
        assert_eq!(
            result.resume_experience,
            Some(ExperienceEstimate::Years { years: 3.0 })
        );
        assert_eq!(
            result.job_experience,
            Some(ExperienceEstimate::Years { years: 6.0 })
        );

        let expected = combine(
            &SubScores {
                keyword: 300.0 / 7.0,
                semantic: lexical_overlap_score(RESUME_A, JD_A),
                rule: 65.0,
            },
            &ScoreWeights::default(),
        );
        assert_eq!(result.score, expected);
        assert!(result.score <= 100);
    }

    #[test]
    fn test_backend_scenario_suggestions() {
        let result = match_resume(RESUME_A, JD_A).unwrap();
        let categories: Vec<_> = result.suggestions.iter().map(|s| s.category).collect();
        // CTC is mentioned, so no resume-format suggestion
        assert_eq!(
            categories,
            vec![
                SuggestionCategory::SkillGap,
                SuggestionCategory::SkillGap,
                SuggestionCategory::SkillGap,
                SuggestionCategory::KeywordOptimization,
                SuggestionCategory::ExperienceHighlighting,
                SuggestionCategory::AtsOptimization,
            ]
        );
        assert!(result.suggestions[0].recommendation.contains("docker"));
        assert_eq!(result.suggestions[0].priority, Priority::High);
    }

    #[test]
    fn test_fresher_mismatch_penalties_add_up() {
        let resume = "Java developer with 5 years experience";
        let jd = "Entry level Java developer role";
        let result = match_resume(resume, jd).unwrap();
        assert_eq!(result.job_experience, Some(ExperienceEstimate::Fresher));
        // band penalty (-30) plus fresher mismatch (-20)
        assert_eq!(result.breakdown.rule_score, 50);
    }

    #[test]
    fn test_identical_inputs_give_identical_results() {
        let first = match_resume(RESUME_A, JD_A).unwrap();
        let second = match_resume(RESUME_A, JD_A).unwrap();
        assert_eq!(first, second);
        assert_eq!(
            serde_json::to_string(&first).unwrap(),
            serde_json::to_string(&second).unwrap()
        );
    }

    #[test]
    fn test_empty_inputs_are_not_errors() {
        let result = match_resume("", "").unwrap();
        assert_eq!(result.breakdown.keyword_score, 0);
        assert_eq!(result.breakdown.semantic_score, 0);
        assert_eq!(result.breakdown.rule_score, 100);
        assert_eq!(result.score, 20);
        assert_eq!(result.resume_experience, None);
        assert!(result.explanation.matched_skills.is_empty());
        assert_eq!(result.verdict.label, ScoreLabel::Poor);
        assert_eq!(
            result.suggestions.last().unwrap().category,
            SuggestionCategory::AtsOptimization
        );
    }

    #[test]
    fn test_swapping_inputs_changes_keyword_score() {
        let a = "Python";
        let b = "Python, Docker, AWS, Kubernetes";
        let ab = match_resume(a, b).unwrap().breakdown.keyword_score;
        let ba = match_resume(b, a).unwrap().breakdown.keyword_score;
        assert_eq!(ab, 25);
        assert_eq!(ba, 100);
    }

    #[test]
    fn test_binary_input_is_invalid() {
        let err = match_resume("%PDF-1.7\0\0stream", "Python developer").unwrap_err();
        assert!(matches!(err, MatchError::InvalidInput(msg) if msg.contains("resume_text")));
    }

    #[test]
    fn test_engine_matches_free_function() {
        let engine = RuleBasedMatcher::default();
        assert_eq!(engine.backend(), "rule_based");
        assert_eq!(
            engine.evaluate(RESUME_A, JD_A).unwrap(),
            match_resume(RESUME_A, JD_A).unwrap()
        );
    }
}
