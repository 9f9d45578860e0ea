//! Domain context — regional signals that feed the rule-based score and suggestions.

use serde::{Deserialize, Serialize};

use crate::matching::patterns::{COMPENSATION, FRESHER, NOTICE_PERIOD, OUTSOURCING_FIRM};

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct DomainContext {
    pub is_fresher: bool,
    pub has_outsourcing_experience: bool,
    pub compensation_mentioned: bool,
    /// First CTC amount found, in lakhs per annum.
    pub compensation_value: Option<f64>,
    pub notice_period_mentioned: bool,
}

/// Each flag is an independent existence test over the whole text.
pub fn extract_context(text: &str) -> DomainContext {
    let compensation_value = COMPENSATION
        .captures(text)
        .and_then(|caps| caps.get(1))
        .and_then(|m| m.as_str().parse::<f64>().ok());

    DomainContext {
        is_fresher: FRESHER.is_match(text),
        has_outsourcing_experience: OUTSOURCING_FIRM.is_match(text),
        compensation_mentioned: COMPENSATION.is_match(text),
        compensation_value,
        notice_period_mentioned: NOTICE_PERIOD.is_match(text),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_text_has_no_signals() {
        assert_eq!(extract_context(""), DomainContext::default());
    }

    #[test]
    fn test_full_resume_context() {
        let text = "Current CTC: 8 LPA\nNotice Period: 30 days\nTCS (2021-2023)";
        let ctx = extract_context(text);
        assert!(ctx.compensation_mentioned);
        assert_eq!(ctx.compensation_value, Some(8.0));
        assert!(ctx.notice_period_mentioned);
        assert!(ctx.has_outsourcing_experience);
        assert!(!ctx.is_fresher);
    }

    #[test]
    fn test_first_compensation_wins() {
        let ctx = extract_context("Current CTC 6.5 LPA, Expected CTC 10 LPA");
        assert_eq!(ctx.compensation_value, Some(6.5));
    }

    #[test]
    fn test_flags_are_independent() {
        let ctx = extract_context("Fresher, internship at Infosys");
        assert!(ctx.is_fresher);
        assert!(ctx.has_outsourcing_experience);
        assert!(!ctx.compensation_mentioned);
        assert_eq!(ctx.compensation_value, None);
    }

    #[test]
    fn test_repeated_extraction_is_identical() {
        let text = "fresher, CTC 3 LPA, NP 15 days, Wipro";
        let first = extract_context(text);
        for _ in 0..3 {
            assert_eq!(extract_context(text), first);
        }
    }
}
