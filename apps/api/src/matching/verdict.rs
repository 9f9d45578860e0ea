use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ScoreLabel {
    #[serde(rename = "Excellent Match")]
    Excellent,
    #[serde(rename = "Good Match")]
    Good,
    #[serde(rename = "Moderate Match")]
    Moderate,
    #[serde(rename = "Poor Match")]
    Poor,
}

/// Human-facing reading of a final score. Derived from the score only.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Verdict {
    pub label: ScoreLabel,
    pub next_steps: Vec<String>,
}

const APPLY_STEPS: &[&str] = &[
    "Apply to this position - you're a strong candidate!",
    "Tailor your resume using the suggestions above for an even better match",
    "Prepare for interviews by focusing on your matched skills",
];

const SKILL_UP_STEPS: &[&str] = &[
    "Work on the missing skills through online courses (Coursera, Udemy India, YouTube)",
    "Update your resume with relevant projects showcasing required technologies",
    "Consider similar roles that better match your current skill level",
];

/// Scores at or above this are worth applying with as-is.
const APPLY_THRESHOLD: u32 = 70;

pub fn score_label(score: u32) -> ScoreLabel {
    match score {
        90.. => ScoreLabel::Excellent,
        70..=89 => ScoreLabel::Good,
        50..=69 => ScoreLabel::Moderate,
        _ => ScoreLabel::Poor,
    }
}

pub fn next_steps(score: u32) -> Vec<String> {
    let steps = if score >= APPLY_THRESHOLD {
        APPLY_STEPS
    } else {
        SKILL_UP_STEPS
    };
    steps.iter().map(|s| s.to_string()).collect()
}

pub fn verdict(score: u32) -> Verdict {
    Verdict {
        label: score_label(score),
        next_steps: next_steps(score),
    }
}
