use super::{parse_payload, CatalogSource};
use crate::error::Result;
use crate::model::BreedRecord;
use async_trait::async_trait;
use std::path::{Path, PathBuf};

/// A breed list saved to disk in the Dog API JSON shape.
#[derive(Debug, Clone)]
pub struct FileSource {
    path: PathBuf,
}

impl FileSource {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

#[async_trait]
impl CatalogSource for FileSource {
    async fn fetch(&self) -> Result<Vec<BreedRecord>> {
        let text = tokio::fs::read_to_string(&self.path).await?;
        parse_payload(&text)
    }

    fn describe(&self) -> String {
        self.path.display().to_string()
    }
}
