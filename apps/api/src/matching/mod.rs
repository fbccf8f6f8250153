// Matching Engine: weighted compatibility between one profile and one role.
// Pure and deterministic. No I/O happens in this module.

pub mod engine;
pub mod weights;

pub use engine::{score_role, MatchResult};
pub use weights::ScoringWeights;
