use super::CatalogSource;
use crate::error::{EverydogError, Result};
use crate::model::BreedRecord;
use async_trait::async_trait;

/// In-memory source for testing.
///
/// Either hands back a fixed record list or fails with a fixed message.
#[derive(Debug, Clone)]
pub struct MemorySource {
    outcome: std::result::Result<Vec<BreedRecord>, String>,
}

impl MemorySource {
    pub fn new(records: Vec<BreedRecord>) -> Self {
        Self {
            outcome: Ok(records),
        }
    }

    pub fn failing(reason: impl Into<String>) -> Self {
        Self {
            outcome: Err(reason.into()),
        }
    }
}

#[async_trait]
impl CatalogSource for MemorySource {
    async fn fetch(&self) -> Result<Vec<BreedRecord>> {
        self.outcome.clone().map_err(EverydogError::Api)
    }

    fn describe(&self) -> String {
        "memory".to_string()
    }
}

// --- Test Fixtures ---

#[cfg(any(test, feature = "test_utils"))]
pub mod fixtures {
    use crate::facets::FacetOption;
    use crate::model::BreedRecord;

    /// Akita, Husky and Pug. Pug has no breed group.
    pub fn sample_catalog() -> Vec<BreedRecord> {
        vec![
            BreedRecord::new(1, "Akita")
                .with_breed_group("Working")
                .with_origin("Japan")
                .with_image_id("BFRYBufpm")
                .with_life_span("10 - 14 years")
                .with_temperament("Docile, Alert, Responsive"),
            BreedRecord::new(2, "Husky")
                .with_breed_group("Working")
                .with_origin("Russia")
                .with_life_span("12 - 15 years"),
            BreedRecord::new(3, "Pug")
                .with_origin("China")
                .with_image_id("HyJvcl9N7")
                .with_temperament("Charming, Mischievous"),
        ]
    }

    pub fn names<'a>(records: &[&'a BreedRecord]) -> Vec<&'a str> {
        records.iter().map(|r| r.name.as_str()).collect()
    }

    pub fn values(options: &[FacetOption]) -> Vec<&str> {
        options.iter().map(|o| o.value.as_str()).collect()
    }
}
