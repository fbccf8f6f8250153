//! Résumé analysis: uploaded bytes → plain text → raw profile.
//!
//! Extraction is best-effort. Whatever it finds is handed to the normal profile
//! normalizer, so a sparse résumé still yields a usable profile.

use std::path::Path;

use regex::Regex;
use serde::Serialize;
use thiserror::Error;
use tracing::debug;

use crate::extraction::vocabulary::SkillVocabulary;
use crate::profile::normalizer::{RawEducation, RawExperience, RawProfile, RawSkill};

#[derive(Debug, Error)]
pub enum ExtractionError {
    #[error("Unsupported résumé format: {0}")]
    UnsupportedFormat(String),

    #[error("Could not read PDF: {0}")]
    Pdf(String),

    #[error("Résumé contains no readable text")]
    Empty,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum ResumeFormat {
    Pdf,
    Text,
}

impl ResumeFormat {
    /// File extension decides; the declared content type is the fallback.
    pub fn detect(file_name: Option<&str>, content_type: Option<&str>) -> Result<Self, ExtractionError> {
        let extension = file_name
            .and_then(|name| Path::new(name).extension())
            .and_then(|ext| ext.to_str())
            .map(str::to_lowercase);

        match extension.as_deref() {
            Some("pdf") => return Ok(ResumeFormat::Pdf),
            Some("txt") | Some("text") => return Ok(ResumeFormat::Text),
            Some(other @ ("doc" | "docx" | "rtf" | "odt")) => {
                return Err(ExtractionError::UnsupportedFormat(format!(".{other}")))
            }
            _ => {}
        }

        match content_type.map(|ct| ct.split(';').next().unwrap_or(ct).trim()) {
            Some("application/pdf") => Ok(ResumeFormat::Pdf),
            Some("text/plain") => Ok(ResumeFormat::Text),
            Some(other) => Err(ExtractionError::UnsupportedFormat(other.to_string())),
            None => Err(ExtractionError::UnsupportedFormat(
                file_name.unwrap_or("unnamed upload").to_string(),
            )),
        }
    }
}

/// Blocking for PDFs. Call from `spawn_blocking` inside async code.
pub fn extract_text(format: ResumeFormat, bytes: &[u8]) -> Result<String, ExtractionError> {
    let text = match format {
        ResumeFormat::Pdf => pdf_extract::extract_text_from_mem(bytes)
            .map_err(|e| ExtractionError::Pdf(e.to_string()))?,
        ResumeFormat::Text => String::from_utf8_lossy(bytes).into_owned(),
    };

    if text.trim().is_empty() {
        return Err(ExtractionError::Empty);
    }
    Ok(text)
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ResumeAnalysis {
    pub skills: Vec<String>,
    /// Largest "N years of experience" figure stated anywhere.
    pub years_experience: Option<f64>,
    pub degrees: Vec<String>,
    pub field: Option<String>,
}

impl ResumeAnalysis {
    pub fn into_raw_profile(self, interests: Vec<String>) -> RawProfile {
        let education = if self.degrees.is_empty() && self.field.is_none() {
            None
        } else {
            Some(RawEducation {
                degrees: self.degrees,
                degree_count: None,
                field: self.field,
            })
        };

        RawProfile {
            skills: self
                .skills
                .into_iter()
                .map(|name| RawSkill { name, level: None })
                .collect(),
            experience: self
                .years_experience
                .map(|years| vec![RawExperience { years: Some(years) }])
                .unwrap_or_default(),
            education,
            interests,
        }
    }
}

const DEGREE_PATTERNS: &[(&str, &str)] = &[
    ("PhD", r"(?i)\b(?:ph\.?\s?d|doctorate)\b"),
    ("MBA", r"(?i)\bmba\b"),
    ("M.Tech", r"(?i)\bm\.?\s?tech\b"),
    ("B.Tech", r"(?i)\bb\.?\s?tech\b"),
    ("B.E", r"(?i)\bb\.e\b"),
    ("Master", r"(?i)\bmaster(?:'s|s)?\s+(?:of|in|degree)\b"),
    ("Bachelor", r"(?i)\bbachelor(?:'s|s)?\b"),
    ("Diploma", r"(?i)\bdiploma\b"),
];

const FIELDS: &[&str] = &[
    "computer science",
    "information technology",
    "data science",
    "electrical engineering",
    "mathematics",
    "statistics",
    "engineering",
    "business",
    "physics",
];

pub struct ResumeAnalyzer {
    vocabulary: SkillVocabulary,
    years_patterns: Vec<Regex>,
    degree_patterns: Vec<(&'static str, Regex)>,
}

impl ResumeAnalyzer {
    pub fn new(vocabulary: SkillVocabulary) -> Result<Self, regex::Error> {
        let years_patterns = vec![
            Regex::new(
                r"(?i)(\d+(?:\.\d+)?)\s*\+?\s*(?:years?|yrs?)\s*(?:of\s+)?(?:\w+\s+)?(?:experience|exp)\b",
            )?,
            Regex::new(r"(?i)(?:experience|exp)\s*(?:of|:|-)?\s*(\d+(?:\.\d+)?)\s*\+?\s*(?:years?|yrs?)")?,
        ];
        let degree_patterns = DEGREE_PATTERNS
            .iter()
            .map(|(label, pattern)| Regex::new(pattern).map(|re| (*label, re)))
            .collect::<Result<Vec<_>, _>>()?;

        Ok(Self {
            vocabulary,
            years_patterns,
            degree_patterns,
        })
    }

    pub fn vocabulary(&self) -> &SkillVocabulary {
        &self.vocabulary
    }

    pub fn analyze(&self, text: &str) -> ResumeAnalysis {
        let skills = self.vocabulary.extract(text);

        let years_experience = self
            .years_patterns
            .iter()
            .flat_map(|re| re.captures_iter(text))
            .filter_map(|caps| caps.get(1)?.as_str().parse::<f64>().ok())
            .filter(|years| years.is_finite() && *years <= 60.0)
            .reduce(f64::max);

        let degrees: Vec<String> = self
            .degree_patterns
            .iter()
            .filter(|(_, re)| re.is_match(text))
            .map(|(label, _)| label.to_string())
            .collect();

        let lower = text.to_lowercase();
        let field = FIELDS
            .iter()
            .find(|field| lower.contains(*field))
            .map(|field| field.to_string());

        debug!(
            "Résumé analysis: {} skills, years={:?}, degrees={:?}",
            skills.len(),
            years_experience,
            degrees
        );

        ResumeAnalysis {
            skills,
            years_experience,
            degrees,
            field,
        }
    }
}
