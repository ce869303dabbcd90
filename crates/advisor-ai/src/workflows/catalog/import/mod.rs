//! Bulk catalog loading from administrator-provided CSV exports.

mod normalizer;
mod parser;

use std::collections::HashSet;
use std::io::Read;
use std::path::Path;

use super::domain::{CatalogItem, ToolId};

#[derive(Debug, thiserror::Error)]
pub enum CatalogImportError {
    #[error("failed to read catalog export: {0}")]
    Io(#[from] std::io::Error),
    #[error("invalid catalog CSV data: {0}")]
    Csv(#[from] csv::Error),
    #[error("line {line}: invalid value '{value}' for {field}")]
    InvalidField {
        line: usize,
        field: &'static str,
        value: String,
    },
}

pub struct CatalogCsvImporter;

impl CatalogCsvImporter {
    pub fn from_path<P: AsRef<Path>>(path: P) -> Result<Vec<CatalogItem>, CatalogImportError> {
        let file = std::fs::File::open(path)?;
        Self::from_reader(file)
    }

    /// Parse catalog rows, keeping the first occurrence when an export
    /// repeats a tool name.
    pub fn from_reader<R: Read>(reader: R) -> Result<Vec<CatalogItem>, CatalogImportError> {
        let mut seen: HashSet<ToolId> = HashSet::new();
        let mut items = Vec::new();

        for item in parser::parse_items(reader)? {
            if seen.insert(item.id.clone()) {
                items.push(item);
            }
        }

        Ok(items)
    }
}
