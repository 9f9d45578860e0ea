//! Scorer — three independent sub-scores in [0, 100] and their weighted combination.

use std::collections::HashSet;
use std::sync::LazyLock;

use regex::Regex;
use serde::{Deserialize, Serialize};

use crate::matching::context::DomainContext;
use crate::matching::experience::ExperienceEstimate;
use crate::matching::skills::SkillSet;

const STOP_WORDS: &[&str] = &[
    "the", "is", "at", "which", "on", "a", "an", "and", "or", "but", "in", "with", "to", "for",
    "of", "as", "by",
];

/// Tokens of this many characters or fewer carry no signal.
const MIN_TOKEN_CHARS: usize = 3;

static WORD: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"\w+").expect("valid regex"));

const EXPERIENCE_NEAR_PENALTY: f64 = 15.0;
const EXPERIENCE_FAR_PENALTY: f64 = 30.0;
const FRESHER_MISMATCH_PENALTY: f64 = 20.0;
const OUTSOURCING_PENALTY: f64 = 5.0;

#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct ScoreWeights {
    pub keyword: f64,
    pub semantic: f64,
    pub rule: f64,
}

impl Default for ScoreWeights {
    fn default() -> Self {
        Self {
            keyword: 0.30,
            semantic: 0.50,
            rule: 0.20,
        }
    }
}

/// Unrounded sub-scores. The final score is always combined from these.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SubScores {
    pub keyword: f64,
    pub semantic: f64,
    pub rule: f64,
}

/// Sub-scores rounded for display.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ScoreBreakdown {
    pub keyword_score: u32,
    pub semantic_score: u32,
    pub rule_score: u32,
}

impl From<&SubScores> for ScoreBreakdown {
    fn from(scores: &SubScores) -> Self {
        Self {
            keyword_score: scores.keyword.round() as u32,
            semantic_score: scores.semantic.round() as u32,
            rule_score: scores.rule.round() as u32,
        }
    }
}

/// Share of job-description skills present in the resume, scaled to 100.
///
/// Not symmetric: the denominator is the job-description skill count. An empty
/// job-description skill set scores 0.
pub fn keyword_score(resume_skills: &SkillSet, jd_skills: &SkillSet) -> f64 {
    if jd_skills.is_empty() {
        return 0.0;
    }
    let matched = jd_skills.intersection(resume_skills).len();
    (matched as f64 / jd_skills.len() as f64) * 100.0
}

/// Jaccard overlap of significant lower-case word tokens, scaled to 100.
pub fn lexical_overlap_score(resume_text: &str, jd_text: &str) -> f64 {
    let resume_tokens = significant_tokens(resume_text);
    let jd_tokens = significant_tokens(jd_text);

    let union = resume_tokens.union(&jd_tokens).count();
    if union == 0 {
        return 0.0;
    }
    let intersection = resume_tokens.intersection(&jd_tokens).count();
    (intersection as f64 / union as f64) * 100.0
}

fn significant_tokens(text: &str) -> HashSet<String> {
    let lowered = text.to_lowercase();
    WORD.find_iter(&lowered)
        .map(|m| m.as_str())
        .filter(|w| !STOP_WORDS.contains(w) && w.chars().count() >= MIN_TOKEN_CHARS)
        .map(str::to_owned)
        .collect()
}

/// Heuristic score starting at 100, reduced by additive mismatch penalties.
pub fn rule_score(
    resume_exp: Option<ExperienceEstimate>,
    jd_exp: Option<ExperienceEstimate>,
    resume_ctx: &DomainContext,
    jd_ctx: &DomainContext,
) -> f64 {
    let mut score = 100.0;

    if let (Some(resume), Some(jd)) = (resume_exp, jd_exp) {
        let diff = (resume.years() - jd.years()).abs();
        // within a year of the requirement costs nothing
        if diff > 2.0 {
            score -= EXPERIENCE_FAR_PENALTY;
        } else if diff > 1.0 {
            score -= EXPERIENCE_NEAR_PENALTY;
        }
    }

    let resume_years = resume_exp.map(|e| e.years());
    if jd_ctx.is_fresher && !resume_ctx.is_fresher && resume_years.is_some_and(|y| y > 2.0) {
        score -= FRESHER_MISMATCH_PENALTY;
    }

    if resume_ctx.has_outsourcing_experience && !jd_ctx.has_outsourcing_experience {
        score -= OUTSOURCING_PENALTY;
    }

    f64::max(0.0, score)
}

/// Weighted sum of the unrounded sub-scores, rounded once.
pub fn combine(scores: &SubScores, weights: &ScoreWeights) -> u32 {
    let total =
        weights.keyword * scores.keyword + weights.semantic * scores.semantic + weights.rule * scores.rule;
    total.round().clamp(0.0, 100.0) as u32
}
