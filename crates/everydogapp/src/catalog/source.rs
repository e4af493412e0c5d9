use crate::error::Result;
use crate::model::BreedRecord;
use async_trait::async_trait;

/// Abstract interface for wherever breed records come from.
///
/// A source only fetches; it holds no catalog state. Implementations return
/// the whole record list or an error, never a partial list.
#[async_trait]
pub trait CatalogSource: Send + Sync {
    /// Fetch the full breed list.
    async fn fetch(&self) -> Result<Vec<BreedRecord>>;

    /// Short human-readable description (URL, file path, ...) for logs.
    fn describe(&self) -> String;
}
