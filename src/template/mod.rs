// Template Method Pattern - fixed algorithm skeletons with overridable steps
//
// Each skeleton is a provided trait method; implementors fill in the
// required steps and may override the optional hooks.

pub mod beverage;
pub mod exporter;

pub use beverage::{CaffeineBeverage, Coffee, Tea};
pub use exporter::{CsvExporter, DataExporter, Export, JsonExporter, Row};

#[derive(Debug, thiserror::Error)]
pub enum ExportError {
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Write failed: {0}")]
    Write(String),
}

pub type ExportResult<T> = Result<T, ExportError>;
