mod brainstorm;
mod executor;
mod orchestrator;

pub use orchestrator::{BatchReport, Orchestrator};
