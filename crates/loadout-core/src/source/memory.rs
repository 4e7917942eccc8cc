use indexmap::IndexMap;

use crate::error::ProfileError;
use crate::source::{Row, TableSource};

/// Sheets held in memory. Used by tests and by callers that already have
/// the rows from another spreadsheet library.
#[derive(Debug, Clone, Default)]
pub struct MemorySource {
    name: String,
    sheets: IndexMap<String, Vec<Row>>,
}

impl MemorySource {
    pub fn new(name: impl Into<String>) -> Self {
        MemorySource {
            name: name.into(),
            sheets: IndexMap::new(),
        }
    }

    pub fn with_sheet(mut self, name: impl Into<String>, rows: Vec<Row>) -> Self {
        self.sheets.insert(name.into(), rows);
        self
    }
}

impl TableSource for MemorySource {
    fn sheet(&self, name: &str) -> Result<Vec<Row>, ProfileError> {
        self.sheets
            .get(name)
            .cloned()
            .ok_or_else(|| ProfileError::MissingSection {
                sheet: name.to_string(),
            })
    }

    fn source_name(&self) -> &str {
        &self.name
    }
}
