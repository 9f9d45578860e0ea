//! Suggestion generator — prioritized, ordered recommendations.
//!
//! Order is fixed: skill gaps, resume format, keyword optimization, experience
//! highlighting, and the generic ATS suggestion always last.

use serde::{Deserialize, Serialize};

use crate::matching::context::DomainContext;
use crate::matching::explainer::Explanation;

const MAX_SKILL_GAP_SUGGESTIONS: usize = 3;
const MAX_EMPHASIZED_SKILLS: usize = 3;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Priority {
    High,
    Medium,
    Low,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum SuggestionCategory {
    #[serde(rename = "Skill Gap")]
    SkillGap,
    #[serde(rename = "Resume Format")]
    ResumeFormat,
    #[serde(rename = "Keyword Optimization")]
    KeywordOptimization,
    #[serde(rename = "Experience Highlighting")]
    ExperienceHighlighting,
    #[serde(rename = "ATS Optimization")]
    AtsOptimization,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Suggestion {
    pub category: SuggestionCategory,
    pub recommendation: String,
    pub priority: Priority,
    /// Static, human-authored estimate; not computed.
    pub impact: String,
}

impl Suggestion {
    fn new(
        category: SuggestionCategory,
        recommendation: impl Into<String>,
        priority: Priority,
        impact: &str,
    ) -> Self {
        Self {
            category,
            recommendation: recommendation.into(),
            priority,
            impact: impact.to_string(),
        }
    }
}

pub fn generate_suggestions(explanation: &Explanation, resume_ctx: &DomainContext) -> Vec<Suggestion> {
    let mut suggestions: Vec<Suggestion> = explanation
        .missing_skills
        .iter()
        .take(MAX_SKILL_GAP_SUGGESTIONS)
        .map(|skill| {
            Suggestion::new(
                SuggestionCategory::SkillGap,
                format!(
                    "Add {skill} to your skillset. Consider free courses on Coursera, Udemy India, or YouTube."
                ),
                Priority::High,
                "+12-15 points",
            )
        })
        .collect();

    if !resume_ctx.compensation_mentioned {
        suggestions.push(Suggestion::new(
            SuggestionCategory::ResumeFormat,
            "Add Current/Expected CTC in LPA format (standard in Indian resumes)",
            Priority::Medium,
            "+5 points",
        ));
    }

    if !explanation.matched_skills.is_empty() {
        let emphasized = explanation
            .matched_skills
            .iter()
            .take(MAX_EMPHASIZED_SKILLS)
            .map(String::as_str)
            .collect::<Vec<_>>()
            .join(", ");
        suggestions.push(Suggestion::new(
            SuggestionCategory::KeywordOptimization,
            format!("Emphasize matched skills ({emphasized}) in project descriptions"),
            Priority::Medium,
            "+8-10 points",
        ));
    }

    if resume_ctx.has_outsourcing_experience {
        suggestions.push(Suggestion::new(
            SuggestionCategory::ExperienceHighlighting,
            "Highlight individual contributions and technical ownership in service-based projects",
            Priority::Medium,
            "+6-8 points",
        ));
    }

    suggestions.push(Suggestion::new(
        SuggestionCategory::AtsOptimization,
        "Use standard section headers: Summary, Skills, Experience, Education, Projects",
        Priority::Low,
        "+3-5 points",
    ));

    suggestions
}
