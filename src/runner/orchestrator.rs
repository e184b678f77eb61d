use crate::provider::GroundedClient;
use crate::research::{AspectResult, ResearchRequest, SearchOptions};
use futures::stream::{FuturesUnordered, StreamExt};
use std::sync::Arc;
use std::time::{Duration, Instant};
use tracing::{debug, info};

use super::executor::research_aspect;

#[derive(Debug)]
pub struct BatchReport {
    pub subject: String,
    pub options: SearchOptions,
    /// Index-aligned with the submitted aspects
    pub results: Vec<AspectResult>,
    pub duration: Duration,
}

impl BatchReport {
    pub fn failed_count(&self) -> usize {
        self.results.iter().filter(|r| r.is_failed()).count()
    }
}

pub struct Orchestrator {
    client: Arc<dyn GroundedClient>,
    excluded_domains: Vec<String>,
}

impl Orchestrator {
    pub fn new(client: Arc<dyn GroundedClient>, excluded_domains: Vec<String>) -> Self {
        Self {
            client,
            excluded_domains,
        }
    }

    pub(super) fn client(&self) -> &dyn GroundedClient {
        self.client.as_ref()
    }

    /// Research a validated request and time the batch
    pub async fn research(&self, request: &ResearchRequest, options: SearchOptions) -> BatchReport {
        let start = Instant::now();

        info!(
            "Researching {} aspects of '{}' ({} mode)",
            request.aspects.len(),
            request.subject,
            options.mode
        );

        let results = self
            .run_batch(&request.subject, &request.aspects, options)
            .await;

        let report = BatchReport {
            subject: request.subject.clone(),
            options,
            results,
            duration: start.elapsed(),
        };

        info!(
            "Batch completed in {:.1}s: {} aspects, {} failed",
            report.duration.as_secs_f64(),
            report.results.len(),
            report.failed_count()
        );

        report
    }

    /// Run one pipeline per aspect concurrently and wait for all of them.
    ///
    /// Output is index-aligned with `aspects` whatever the completion order;
    /// a failing aspect yields a fallback result and never affects the others.
    pub async fn run_batch(
        &self,
        subject: &str,
        aspects: &[String],
        options: SearchOptions,
    ) -> Vec<AspectResult> {
        if aspects.is_empty() {
            return Vec::new();
        }

        let client = self.client();
        let excluded = self.excluded_domains.as_slice();

        let mut pending: FuturesUnordered<_> = aspects
            .iter()
            .enumerate()
            .map(|(idx, aspect)| async move {
                let result = research_aspect(client, subject, aspect, options, excluded).await;
                (idx, result)
            })
            .collect();

        let mut slots: Vec<Option<AspectResult>> = (0..aspects.len()).map(|_| None).collect();

        while let Some((idx, result)) = pending.next().await {
            if result.is_failed() {
                debug!("Aspect {} '{}' settled with an error", idx + 1, result.aspect);
            } else {
                info!(
                    "Completed aspect {} '{}': {} sources",
                    idx + 1,
                    result.aspect,
                    result.sources.len()
                );
            }
            slots[idx] = Some(result);
        }

        slots.into_iter().flatten().collect()
    }
}
