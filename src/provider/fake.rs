//! Scripted client used by the orchestrator tests.

use super::{GroundedClient, QueryOutput, RawCitation};
use crate::error::ProviderError;
use async_trait::async_trait;
use std::collections::{HashMap, HashSet};
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Mutex;
use std::time::Duration;

const ASPECT_LINE: &str = "Aspect spécifique à rechercher : ";

/// Answers keyed by the aspect named in the prompt; brainstorm prompts use the key `""`
#[derive(Default)]
pub struct ScriptedClient {
    replies: HashMap<String, (String, Vec<RawCitation>)>,
    failures: HashSet<String>,
    delays: HashMap<String, Duration>,
    calls: AtomicUsize,
    system_instructions: Mutex<Vec<Option<String>>>,
}

impl ScriptedClient {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn reply(mut self, key: &str, text: &str, citations: Vec<RawCitation>) -> Self {
        self.replies
            .insert(key.to_string(), (text.to_string(), citations));
        self
    }

    pub fn fail(mut self, key: &str) -> Self {
        self.failures.insert(key.to_string());
        self
    }

    pub fn delay(mut self, key: &str, millis: u64) -> Self {
        self.delays
            .insert(key.to_string(), Duration::from_millis(millis));
        self
    }

    pub fn calls(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }

    pub fn system_instructions(&self) -> Vec<Option<String>> {
        self.system_instructions.lock().unwrap().clone()
    }

    fn key_for(prompt: &str) -> String {
        prompt
            .find(ASPECT_LINE)
            .map(|at| {
                prompt[at + ASPECT_LINE.len()..]
                    .lines()
                    .next()
                    .unwrap_or_default()
                    .to_string()
            })
            .unwrap_or_default()
    }
}

#[async_trait]
impl GroundedClient for ScriptedClient {
    fn name(&self) -> &'static str {
        "scripted"
    }

    async fn query(
        &self,
        prompt: &str,
        system_instruction: Option<&str>,
    ) -> Result<QueryOutput, ProviderError> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        self.system_instructions
            .lock()
            .unwrap()
            .push(system_instruction.map(str::to_string));

        let key = Self::key_for(prompt);

        if let Some(delay) = self.delays.get(&key) {
            tokio::time::sleep(*delay).await;
        }

        if self.failures.contains(&key) {
            return Err(ProviderError::Status {
                code: 503,
                body: format!("unavailable for {}", key),
            });
        }

        match self.replies.get(&key) {
            Some((text, citations)) => Ok(QueryOutput::new(text.clone(), citations.clone())),
            None => Ok(QueryOutput::new(format!("Notes : {}", key), Vec::new())),
        }
    }
}
