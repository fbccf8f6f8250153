// Profile normalization: raw profile input → canonical Profile.
// Alias expansion lives in `aliases`; the HTTP entry point in `handlers`.

pub mod aliases;
pub mod handlers;
pub mod normalizer;
