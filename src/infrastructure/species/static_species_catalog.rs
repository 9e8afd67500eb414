use std::collections::HashMap;
use std::path::Path;

use crate::application::ports::{SpeciesCatalogError, SpeciesRepository};
use crate::domain::{Label, SpeciesRecord};

const EMBEDDED_CATALOG: &str = include_str!("../../../data/species.json");

#[derive(Debug, Clone)]
pub struct StaticSpeciesCatalog {
    records: Vec<SpeciesRecord>,
    index: HashMap<Label, usize>,
}

impl StaticSpeciesCatalog {
    pub fn embedded() -> Result<Self, SpeciesCatalogError> {
        Self::from_json(EMBEDDED_CATALOG)
    }

    pub fn from_file(path: &Path) -> Result<Self, SpeciesCatalogError> {
        let contents = std::fs::read_to_string(path)
            .map_err(|e| SpeciesCatalogError::Io(format!("{}: {}", path.display(), e)))?;
        Self::from_json(&contents)
    }

    pub fn from_json(json: &str) -> Result<Self, SpeciesCatalogError> {
        let records: Vec<SpeciesRecord> =
            serde_json::from_str(json).map_err(|e| SpeciesCatalogError::Parse(e.to_string()))?;
        Self::from_records(records)
    }

    pub fn from_records(records: Vec<SpeciesRecord>) -> Result<Self, SpeciesCatalogError> {
        if records.is_empty() {
            return Err(SpeciesCatalogError::Empty);
        }

        let mut index = HashMap::with_capacity(records.len());
        for (i, record) in records.iter().enumerate() {
            if index.insert(record.sound_label.clone(), i).is_some() {
                return Err(SpeciesCatalogError::DuplicateLabel(
                    record.sound_label.clone(),
                ));
            }
        }

        tracing::debug!(species = records.len(), "Species catalog loaded");

        Ok(Self { records, index })
    }

    pub fn labels(&self) -> Vec<Label> {
        self.records.iter().map(|r| r.sound_label.clone()).collect()
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }
}

impl SpeciesRepository for StaticSpeciesCatalog {
    fn find_by_label(&self, label: &Label) -> Option<&SpeciesRecord> {
        self.index.get(label).map(|&i| &self.records[i])
    }

    fn list(&self) -> Vec<&SpeciesRecord> {
        self.records.iter().collect()
    }
}
