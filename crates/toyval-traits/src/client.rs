//! The Platform client capability.

use async_trait::async_trait;
use std::sync::Arc;

use crate::error::PlatformError;
use crate::result::ResultTable;
use crate::wire::Document;

/// Something that can evaluate a [`Document`].
///
/// This is the whole surface the SDK needs from a Platform: submit one graph,
/// get back the root's value as a table or an error. Implementations decide
/// transport, authentication and timeouts.
#[async_trait]
pub trait PlatformClient: Send + Sync {
    /// Evaluate the document and return the root node's value.
    async fn evaluate(&self, document: &Document) -> Result<ResultTable, PlatformError>;

    /// Human-readable name for logs.
    fn name(&self) -> &str {
        "platform"
    }
}

#[async_trait]
impl<T: PlatformClient + ?Sized> PlatformClient for Arc<T> {
    async fn evaluate(&self, document: &Document) -> Result<ResultTable, PlatformError> {
        (**self).evaluate(document).await
    }

    fn name(&self) -> &str {
        (**self).name()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::result::Cell;
    use crate::wire::NodeId;

    struct Fixed;

    #[async_trait]
    impl PlatformClient for Fixed {
        async fn evaluate(&self, _document: &Document) -> Result<ResultTable, PlatformError> {
            Ok(ResultTable::new(vec![vec!["USD".into(), Cell::Number(42.5)]]))
        }
    }

    #[tokio::test]
    async fn test_dyn_client() {
        let client: Arc<dyn PlatformClient> = Arc::new(Fixed);
        let doc = Document::new(NodeId::new("x"), Vec::new());
        let table = client.evaluate(&doc).await.unwrap();
        assert_eq!(table.get(0, 1).and_then(Cell::as_number), Some(42.5));
        assert_eq!(client.name(), "platform");
    }
}
