pub mod audio;
pub mod classification;
pub mod inference;
pub mod observability;
pub mod species;
