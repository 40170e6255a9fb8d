//! Local prompt library
//!
//! Stands in for the hosted persistence layer: a JSON file holding an array
//! of prompt records, or a directory tree of such files.

mod filter;
mod store;

pub use filter::{PromptFilter, SortKey};

use crate::error::{CriapromptError, Result};
use crate::prompt::PromptRecord;
use std::collections::{BTreeMap, HashSet};
use std::path::Path;

/// Validated collection of prompt records with unique ids
#[derive(Debug, Clone, Default, PartialEq)]
pub struct PromptLibrary {
    records: Vec<PromptRecord>,
}

impl PromptLibrary {
    /// Build a library from records, validating each and rejecting duplicate ids
    pub fn from_records(records: Vec<PromptRecord>) -> Result<Self> {
        let mut ids = HashSet::new();
        for record in &records {
            record.validate()?;
            if !ids.insert(record.id.as_str()) {
                return Err(CriapromptError::LibraryDuplicateId(record.id.clone()));
            }
        }
        Ok(Self { records })
    }

    /// Load from a `.json` file or a directory of `.json` files
    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let records = store::read_records(path)?;
        let library = Self::from_records(records)?;
        tracing::debug!(path = %path.display(), count = library.len(), "loaded prompt library");
        Ok(library)
    }

    /// Write every record to a single JSON file, atomically
    pub fn save(&self, path: impl AsRef<Path>) -> Result<()> {
        store::write_records(path.as_ref(), &self.records)
    }

    pub fn records(&self) -> &[PromptRecord] {
        &self.records
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    pub fn get(&self, id: &str) -> Option<&PromptRecord> {
        self.records.iter().find(|r| r.id == id)
    }

    /// Like [`get`](Self::get), failing with `PROMPT_NOT_FOUND`
    pub fn require(&self, id: &str) -> Result<&PromptRecord> {
        self.get(id)
            .ok_or_else(|| CriapromptError::PromptNotFound(id.to_string()))
    }

    /// Records matching `filter`, in the order it asks for
    pub fn filter(&self, filter: &PromptFilter) -> Vec<&PromptRecord> {
        filter.apply(&self.records)
    }

    /// Number of records per tag, keyed by lowercase tag
    pub fn tags(&self) -> BTreeMap<String, usize> {
        let mut counts = BTreeMap::new();
        for tag in self.records.iter().flat_map(|r| r.tags.iter()) {
            *counts.entry(tag.to_lowercase()).or_insert(0) += 1;
        }
        counts
    }

    /// Insert a new record or replace the one with the same id
    pub fn upsert(&mut self, record: PromptRecord) -> Result<()> {
        record.validate()?;
        match self.records.iter_mut().find(|r| r.id == record.id) {
            Some(existing) => *existing = record,
            None => self.records.push(record),
        }
        Ok(())
    }
}
