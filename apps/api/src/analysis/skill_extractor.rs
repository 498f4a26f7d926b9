//! Skill Extractor: literal, case-insensitive, whole-word keyword search over resume text.

use std::collections::BTreeSet;

use anyhow::{Context, Result};
use regex::Regex;

/// Vocabulary compiled into one word-bounded pattern per skill.
///
/// Both the text and each skill are lowercased before matching; the skill is
/// regex-escaped so punctuation (`C++`, `CI/CD`, `Node.js`) is taken literally.
/// `\b` sits on both ends, so a skill ending in a non-word character only
/// matches when a word character follows it (`C++` in "C++17" but not "C++ dev").
#[derive(Debug, Clone)]
pub struct SkillExtractor {
    patterns: Vec<(String, Regex)>,
}

impl SkillExtractor {
    pub fn new<S: AsRef<str>>(vocabulary: &[S]) -> Result<Self> {
        let patterns = vocabulary
            .iter()
            .map(|skill| {
                let skill = skill.as_ref();
                let pattern = format!(r"\b{}\b", regex::escape(&skill.to_lowercase()));
                let regex = Regex::new(&pattern)
                    .with_context(|| format!("Failed to compile pattern for skill '{skill}'"))?;
                Ok((skill.to_string(), regex))
            })
            .collect::<Result<Vec<_>>>()?;

        Ok(Self { patterns })
    }

    /// Returns every vocabulary skill present in `text`, in canonical casing.
    pub fn extract(&self, text: &str) -> BTreeSet<String> {
        let text_lower = text.to_lowercase();
        self.patterns
            .iter()
            .filter(|(_, regex)| regex.is_match(&text_lower))
            .map(|(skill, _)| skill.clone())
            .collect()
    }

    pub fn vocabulary_len(&self) -> usize {
        self.patterns.len()
    }
}

/// One-shot extraction against an arbitrary vocabulary.
pub fn extract_skills<S: AsRef<str>>(text: &str, vocabulary: &[S]) -> Result<BTreeSet<String>> {
    Ok(SkillExtractor::new(vocabulary)?.extract(text))
}
