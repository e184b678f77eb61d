//! Instruction text sent to the grounded model.
//!
//! Both builders are pure: same input, same text, no I/O.

mod aspect;
mod brainstorm;

pub use aspect::{build_aspect_prompt, RESEARCH_SYSTEM_INSTRUCTION};
pub use brainstorm::{build_brainstorm_prompt, ASPECTS_MARKER, OVERVIEW_MARKER};
