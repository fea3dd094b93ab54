//! Static disease-trigger knowledgebase.
//!
//! Everything here is compiled-in, immutable data: disease records with
//! tiered trigger terms, the multilingual synonym table, and the fixed
//! severity score table. Loaded once, shared by reference, never mutated
//! after startup.

pub mod diseases;
pub mod severity;
pub mod synonyms;

pub use diseases::DiseaseRecord;
pub use severity::SeverityTier;

/// Read-only view over the compiled-in knowledgebase.
#[derive(Debug, Clone, Copy)]
pub struct Knowledgebase {
    records: &'static [DiseaseRecord],
    synonyms: &'static [(&'static str, &'static [&'static str])],
}

impl Knowledgebase {
    /// The built-in dataset. Cheap to copy; all data is `'static`.
    pub fn builtin() -> Self {
        Self {
            records: diseases::DISEASES,
            synonyms: synonyms::SYNONYMS,
        }
    }

    /// Look up a disease by canonical key. Linear scan; the table holds a
    /// dozen records.
    pub fn disease(&self, key: &str) -> Option<&'static DiseaseRecord> {
        self.records.iter().find(|d| d.key == key)
    }

    /// All disease records, in declaration order.
    pub fn diseases(&self) -> &'static [DiseaseRecord] {
        self.records
    }

    /// Synonym entries in declaration order (first match wins).
    pub fn synonym_entries(&self) -> &'static [(&'static str, &'static [&'static str])] {
        self.synonyms
    }

    pub fn disease_count(&self) -> usize {
        self.records.len()
    }
}
