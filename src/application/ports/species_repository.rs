use crate::domain::{Label, SpeciesRecord};

pub trait SpeciesRepository: Send + Sync {
    fn find_by_label(&self, label: &Label) -> Option<&SpeciesRecord>;

    fn list(&self) -> Vec<&SpeciesRecord>;
}

#[derive(Debug, thiserror::Error)]
pub enum SpeciesCatalogError {
    #[error("failed to read species catalog: {0}")]
    Io(String),
    #[error("failed to parse species catalog: {0}")]
    Parse(String),
    #[error("duplicate sound label in species catalog: {0}")]
    DuplicateLabel(Label),
    #[error("species catalog is empty")]
    Empty,
}
