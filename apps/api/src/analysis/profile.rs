use std::collections::BTreeSet;

use bytes::Bytes;
use serde::Serialize;

use crate::analysis::skill_extractor::SkillExtractor;
use crate::extraction::{DocumentKind, ExtractionError, TextExtractor};

/// What an uploaded resume yielded.
#[derive(Debug, Clone, Serialize)]
pub struct ResumeProfile {
    #[serde(skip_serializing)]
    pub text: String,
    pub skills: BTreeSet<String>,
    pub skill_count: usize,
}

impl ResumeProfile {
    pub fn from_text(text: String, skill_extractor: &SkillExtractor) -> Self {
        let skills = skill_extractor.extract(&text);
        Self {
            skill_count: skills.len(),
            skills,
            text,
        }
    }
}

/// Classifies, decodes and scans an upload. Any failure happens before scoring.
pub async fn parse_resume(
    file_name: &str,
    data: Bytes,
    extractor: &dyn TextExtractor,
    skill_extractor: &SkillExtractor,
) -> Result<ResumeProfile, ExtractionError> {
    let kind = DocumentKind::from_file_name(file_name)?;
    let text = extractor.extract(kind, data).await?;
    Ok(ResumeProfile::from_text(text, skill_extractor))
}
