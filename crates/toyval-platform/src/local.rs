//! In-process Platform client.

use async_trait::async_trait;
use std::sync::atomic::{AtomicU64, Ordering};
use std::time::Instant;
use tracing::{debug, warn};

use toyval_traits::{Document, PlatformClient, PlatformError, ResultTable};

use crate::evaluator::Evaluator;

/// Evaluates documents in the calling task, without any transport.
///
/// Holds no per-request state, so one instance can serve any number of
/// concurrent callers.
#[derive(Debug, Default)]
pub struct LocalPlatform {
    evaluator: Evaluator,
    evaluations: AtomicU64,
    failures: AtomicU64,
}

impl LocalPlatform {
    /// Creates a platform.
    pub fn new() -> Self {
        Self::default()
    }

    /// Evaluates a document synchronously.
    pub fn evaluate_now(&self, document: &Document) -> Result<ResultTable, PlatformError> {
        let start = Instant::now();
        self.evaluations.fetch_add(1, Ordering::Relaxed);

        let result = self.evaluator.evaluate(document);
        let elapsed_us = start.elapsed().as_micros() as u64;

        match &result {
            Ok(table) => debug!(
                request_id = %document.request_id,
                nodes = document.len(),
                rows = table.len(),
                elapsed_us,
                "Document evaluated"
            ),
            Err(e) => {
                self.failures.fetch_add(1, Ordering::Relaxed);
                warn!(request_id = %document.request_id, error = %e, "Document evaluation failed");
            }
        }
        result
    }

    /// Number of documents evaluated so far.
    pub fn evaluations(&self) -> u64 {
        self.evaluations.load(Ordering::Relaxed)
    }

    /// Number of evaluations that returned an error.
    pub fn failures(&self) -> u64 {
        self.failures.load(Ordering::Relaxed)
    }
}

#[async_trait]
impl PlatformClient for LocalPlatform {
    async fn evaluate(&self, document: &Document) -> Result<ResultTable, PlatformError> {
        self.evaluate_now(document)
    }

    fn name(&self) -> &str {
        "local"
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use toyval_traits::NodeId;

    #[tokio::test]
    async fn test_counts_failures() {
        let platform = LocalPlatform::new();
        let doc = Document::new(NodeId::new("missing"), Vec::new());

        assert!(platform.evaluate(&doc).await.is_err());
        assert_eq!(platform.evaluations(), 1);
        assert_eq!(platform.failures(), 1);
        assert_eq!(platform.name(), "local");
    }
}
