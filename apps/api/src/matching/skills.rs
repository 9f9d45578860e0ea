//! Skill extraction against the vocabulary table.

use std::collections::HashSet;

use serde::{Serialize, Serializer};

use crate::matching::vocabulary::SKILL_MATCHERS;

/// Insertion-ordered set of canonical skills.
///
/// Order follows the vocabulary declaration order, so downstream truncation
/// (first N extra skills, first N gaps) is deterministic.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SkillSet {
    ordered: Vec<&'static str>,
    index: HashSet<&'static str>,
}

impl SkillSet {
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds a skill; returns false if it was already present.
    pub fn insert(&mut self, skill: &'static str) -> bool {
        if self.index.insert(skill) {
            self.ordered.push(skill);
            true
        } else {
            false
        }
    }

    pub fn contains(&self, skill: &str) -> bool {
        self.index.contains(skill)
    }

    pub fn len(&self) -> usize {
        self.ordered.len()
    }

    pub fn is_empty(&self) -> bool {
        self.ordered.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &'static str> + '_ {
        self.ordered.iter().copied()
    }

    pub fn as_slice(&self) -> &[&'static str] {
        &self.ordered
    }

    /// Skills of `self` also present in `other`, in `self`'s order.
    pub fn intersection(&self, other: &SkillSet) -> Vec<&'static str> {
        self.iter().filter(|s| other.contains(s)).collect()
    }

    /// Skills of `self` absent from `other`, in `self`'s order.
    pub fn difference(&self, other: &SkillSet) -> Vec<&'static str> {
        self.iter().filter(|s| !other.contains(s)).collect()
    }
}

impl FromIterator<&'static str> for SkillSet {
    fn from_iter<I: IntoIterator<Item = &'static str>>(iter: I) -> Self {
        let mut set = SkillSet::new();
        for skill in iter {
            set.insert(skill);
        }
        set
    }
}

impl Serialize for SkillSet {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        self.ordered.serialize(serializer)
    }
}

/// Returns every canonical skill with at least one surface form present in `text`.
///
/// Presence is binary: frequency is ignored and each canonical skill appears once.
pub fn extract_skills(text: &str) -> SkillSet {
    let lowered = text.to_lowercase();
    SKILL_MATCHERS
        .iter()
        .filter(|matcher| matcher.pattern.is_match(&lowered))
        .map(|matcher| matcher.canonical)
        .collect()
}
