//! Explainer — matched/missing/extra skills plus advisory strengths and weaknesses.
//!
//! Output is text for the reader only; nothing here feeds back into scoring.

use serde::{Deserialize, Serialize};

use crate::matching::context::DomainContext;
use crate::matching::experience::ExperienceEstimate;
use crate::matching::skills::SkillSet;

const MAX_EXTRA_SKILLS: usize = 5;
const MAX_LISTED_SKILLS: usize = 5;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Explanation {
    pub matched_skills: Vec<String>,
    pub missing_skills: Vec<String>,
    pub extra_skills: Vec<String>,
    pub strengths: Vec<String>,
    pub weaknesses: Vec<String>,
}

pub fn explain(
    resume_skills: &SkillSet,
    jd_skills: &SkillSet,
    resume_exp: Option<ExperienceEstimate>,
    jd_exp: Option<ExperienceEstimate>,
    resume_ctx: &DomainContext,
) -> Explanation {
    let matched = jd_skills.intersection(resume_skills);
    let missing = jd_skills.difference(resume_skills);
    let extra: Vec<&str> = resume_skills
        .difference(jd_skills)
        .into_iter()
        .take(MAX_EXTRA_SKILLS)
        .collect();

    let known_years = resume_exp.zip(jd_exp).map(|(r, j)| (r.years(), j.years()));

    let mut strengths = Vec::new();
    if !matched.is_empty() {
        strengths.push(format!(
            "Strong match in {} key skills: {}",
            matched.len(),
            list_first(&matched, MAX_LISTED_SKILLS)
        ));
    }
    if let Some((resume_years, jd_years)) = known_years {
        if (resume_years - jd_years).abs() <= 1.0 {
            strengths.push(format!(
                "Experience level matches requirement ({resume_years} years vs {jd_years} years required)"
            ));
        }
    }
    if resume_ctx.has_outsourcing_experience {
        strengths.push(
            "Experience in service-based companies shows client-facing project work".to_string(),
        );
    }

    let mut weaknesses = Vec::new();
    if !missing.is_empty() {
        weaknesses.push(format!(
            "Missing {} required skills: {}",
            missing.len(),
            list_first(&missing, MAX_LISTED_SKILLS)
        ));
    }
    if let Some((resume_years, jd_years)) = known_years {
        if resume_years < jd_years - 1.0 {
            weaknesses.push(format!(
                "Experience gap: Resume shows {resume_years} years, JD requires {jd_years}+ years"
            ));
        }
    }

    Explanation {
        matched_skills: owned(&matched),
        missing_skills: owned(&missing),
        extra_skills: owned(&extra),
        strengths,
        weaknesses,
    }
}

fn list_first(skills: &[&str], n: usize) -> String {
    skills.iter().take(n).copied().collect::<Vec<_>>().join(", ")
}

fn owned(skills: &[&str]) -> Vec<String> {
    skills.iter().map(|s| s.to_string()).collect()
}
