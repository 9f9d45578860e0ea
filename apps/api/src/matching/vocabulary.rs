//! Skill vocabulary — canonical skill names and the surface forms that map to them.
//!
//! Declaration order is significant: extracted skill sets, extra-skill truncation and
//! suggestion output all follow it.

use std::sync::LazyLock;

use regex::Regex;
use serde::Serialize;

/// Canonical skill → surface forms, in declaration order.
pub const SKILL_VOCABULARY: &[(&str, &[&str])] = &[
    ("javascript", &["js", "javascript", "ecmascript", "es6", "es2015"]),
    ("python", &["python", "py", "python3"]),
    ("react", &["react", "reactjs", "react.js", "react native"]),
    ("node", &["node", "nodejs", "node.js", "express"]),
    ("java", &["java", "core java", "j2ee", "spring", "spring boot"]),
    ("aws", &["aws", "amazon web services", "ec2", "s3", "lambda"]),
    ("docker", &["docker", "containerization", "containers"]),
    ("kubernetes", &["kubernetes", "k8s", "container orchestration"]),
    (
        "machine learning",
        &["ml", "machine learning", "ai/ml", "artificial intelligence"],
    ),
    ("sql", &["sql", "mysql", "postgresql", "oracle", "sql server"]),
    ("mongodb", &["mongodb", "mongo", "nosql"]),
    ("git", &["git", "github", "gitlab", "version control"]),
    ("agile", &["agile", "scrum", "sprint", "kanban"]),
    ("rest api", &["rest", "rest api", "restful", "api"]),
    (
        "microservices",
        &["microservices", "micro services", "microservice architecture"],
    ),
    ("devops", &["devops", "ci/cd", "jenkins", "gitlab ci"]),
    ("angular", &["angular", "angularjs", "angular2+"]),
    ("vue", &["vue", "vuejs", "vue.js"]),
    ("django", &["django", "django rest framework", "drf"]),
    ("flask", &["flask", "flask-restful"]),
    ("azure", &["azure", "microsoft azure", "azure devops"]),
    ("gcp", &["gcp", "google cloud", "google cloud platform"]),
];

/// One canonical skill with a compiled matcher covering all of its surface forms.
pub struct SkillMatcher {
    pub canonical: &'static str,
    pub pattern: Regex,
}

/// Compiled once per process, read-only afterwards.
pub static SKILL_MATCHERS: LazyLock<Vec<SkillMatcher>> = LazyLock::new(|| {
    SKILL_VOCABULARY
        .iter()
        .map(|&(canonical, forms)| SkillMatcher {
            canonical,
            pattern: compile_surface_forms(forms),
        })
        .collect()
});

/// Serializable view of a vocabulary entry (for the `/api/v1/skills` listing).
#[derive(Debug, Clone, Serialize)]
pub struct VocabularyEntry {
    pub canonical: &'static str,
    pub surface_forms: &'static [&'static str],
}

pub fn vocabulary_entries() -> Vec<VocabularyEntry> {
    SKILL_VOCABULARY
        .iter()
        .map(|&(canonical, surface_forms)| VocabularyEntry {
            canonical,
            surface_forms,
        })
        .collect()
}

/// Builds a single case-insensitive alternation from the surface forms.
///
/// Each form is escaped literally. A word boundary is asserted on an edge only when
/// that edge is a word character, so `angular2+` still matches at end of text while
/// `java` never matches inside `javascript`.
fn compile_surface_forms(forms: &[&str]) -> Regex {
    let alternation = forms
        .iter()
        .map(|form| whole_phrase_pattern(form))
        .collect::<Vec<_>>()
        .join("|");
    Regex::new(&format!("(?i){alternation}")).expect("valid regex")
}

fn whole_phrase_pattern(form: &str) -> String {
    let is_word = |c: char| c.is_alphanumeric() || c == '_';
    let leading = if form.chars().next().is_some_and(is_word) {
        r"\b"
    } else {
        ""
    };
    let trailing = if form.chars().next_back().is_some_and(is_word) {
        r"\b"
    } else {
        ""
    };
    format!("(?:{leading}{}{trailing})", regex::escape(form))
}
