mod static_species_catalog;

pub use static_species_catalog::StaticSpeciesCatalog;
