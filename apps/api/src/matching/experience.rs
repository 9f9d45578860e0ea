use serde::{Deserialize, Serialize};

use crate::matching::patterns::{FRESHER, TENURE};

/// Best estimate of professional experience found in a text.
///
/// Unknown experience is modelled as `Option::None` by callers and is never the
/// same thing as `Fresher`.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum ExperienceEstimate {
    Years { years: f64 },
    Fresher,
}

impl ExperienceEstimate {
    /// Numeric years, with a fresher counted as zero.
    pub fn years(&self) -> f64 {
        match self {
            ExperienceEstimate::Years { years } => *years,
            ExperienceEstimate::Fresher => 0.0,
        }
    }
}

/// Extracts the maximum tenure mentioned in `text`.
///
/// Numeric mentions win over junior-indicator phrases; a junior phrase alone yields
/// `Fresher`; no signal at all yields `None`.
pub fn extract_experience(text: &str) -> Option<ExperienceEstimate> {
    let max_years = TENURE
        .captures_iter(text)
        .filter_map(|caps| caps.get(1)?.as_str().parse::<f64>().ok())
        .fold(None, |acc: Option<f64>, years| {
            Some(acc.map_or(years, |best| best.max(years)))
        });

    match max_years {
        Some(years) => Some(ExperienceEstimate::Years { years }),
        None if FRESHER.is_match(text) => Some(ExperienceEstimate::Fresher),
        None => None,
    }
}
