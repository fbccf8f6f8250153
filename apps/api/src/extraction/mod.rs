// Skill extraction and résumé analysis.
// Text extraction accuracy is best-effort; results always pass through the profile normalizer.

pub mod handlers;
pub mod resume;
pub mod vocabulary;
