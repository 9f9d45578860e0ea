//! Regional job-market patterns: compensation (CTC in LPA), tenure, notice period,
//! fresher phrasing and IT-services employers.
//!
//! `regex::Regex` keeps no search cursor between calls, so the compiled patterns are
//! shared process-wide and every test against them is independent.

use std::sync::LazyLock;

use regex::Regex;

/// Current/expected CTC, e.g. `CTC: INR 8.5 LPA`. Group 1 is the amount.
pub static COMPENSATION: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(
        r"(?i)(?:CTC|Current CTC|Expected CTC)[:\s]*(?:INR\s*)?(\d+(?:\.\d+)?)\s*(?:LPA|Lakhs?|L|per annum)",
    )
    .expect("valid regex")
});

/// Tenure mentions, e.g. `3 years of experience`, `2.5 yrs`. Group 1 is the number.
pub static TENURE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?i)(\d+(?:\.\d+)?)\s*(?:years?|yrs?)\s*(?:of\s*)?(?:experience)?")
        .expect("valid regex")
});

/// Notice period, e.g. `Notice Period: 30 days`, `NP 2 months`.
pub static NOTICE_PERIOD: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?i)\b(?:Notice Period|NP)[:\s]*(\d+)\s*(?:days?|months?)")
        .expect("valid regex")
});

/// Junior-indicator phrases.
pub static FRESHER: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?i)\b(?:fresher|recent graduate|0-1 years?|entry level)\b").expect("valid regex")
});

/// Recognised IT-services / outsourcing employers.
pub static OUTSOURCING_FIRM: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(
        r"(?i)\b(?:TCS|Infosys|Wipro|HCL|Tech Mahindra|Cognizant|Accenture|Capgemini)\b",
    )
    .expect("valid regex")
});
