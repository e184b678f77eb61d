mod brainstorm;
mod sources;

#[cfg(test)]
pub use brainstorm::{FALLBACK_ASPECTS, FALLBACK_OVERVIEW};
pub use brainstorm::{parse_brainstorm, MAX_SUGGESTED_ASPECTS};
pub use sources::normalize_sources;
