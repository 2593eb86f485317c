use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::path::PathBuf;

// ===== PROTECTION TYPES =====
// A protected span is a piece of markup lifted out of the document before the
// rule cascade runs and spliced back verbatim afterwards.

/// Which protection pattern claimed a span.
///
/// Variants are declared in scan order; `protection::PROTECTION_ORDER` lists
/// them in the same order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum SpanClass {
    /// Characters from the placeholder alphabet already present in the input
    Reserved,
    DisplayMath,
    InlineMath,
    Citation,
    Reference,
    Label,
    EnvironmentBegin,
    EnvironmentEnd,
    Section,
    Subsection,
    Subsubsection,
    Bold,
    Italic,
    Caption,
    Graphics,
    /// Any other `\name{...}`
    CommandWithArgument,
    /// Any other `\name`
    BareCommand,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProtectedSpan {
    pub id: usize,
    pub original: String,
    pub class: SpanClass,
}

/// Placeholder id → protected span. Ids are dense and allocated in scan order,
/// so the id doubles as the index.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct PlaceholderTable {
    spans: Vec<ProtectedSpan>,
}

impl PlaceholderTable {
    pub fn new() -> Self {
        Self::default()
    }

    /// Record a span and return its freshly allocated id
    pub fn push(&mut self, original: &str, class: SpanClass) -> usize {
        let id = self.spans.len();
        self.spans.push(ProtectedSpan {
            id,
            original: original.to_string(),
            class,
        });
        id
    }

    pub fn get(&self, id: usize) -> Option<&ProtectedSpan> {
        self.spans.get(id)
    }

    pub fn len(&self) -> usize {
        self.spans.len()
    }

    pub fn is_empty(&self) -> bool {
        self.spans.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &ProtectedSpan> {
        self.spans.iter()
    }

    pub fn count_by_class(&self) -> BTreeMap<SpanClass, usize> {
        let mut counts = BTreeMap::new();
        for span in &self.spans {
            *counts.entry(span.class).or_insert(0) += 1;
        }
        counts
    }
}

/// Output of the protector: text safe to hand to the rule cascade, plus the
/// table needed to undo the masking.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MaskedDocument {
    pub text: String,
    pub table: PlaceholderTable,
}

// ===== REPORTING TYPES =====

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct TransformStats {
    /// Length of the input in characters (not bytes)
    pub original_chars: usize,
    pub output_chars: usize,
    pub protected_spans: usize,
    pub spans_by_class: BTreeMap<SpanClass, usize>,
}

impl TransformStats {
    /// Relative length change in percent. Empty input reports 0.
    pub fn change_percent(&self) -> f64 {
        if self.original_chars == 0 {
            return 0.0;
        }
        (self.output_chars as f64 - self.original_chars as f64) / self.original_chars as f64
            * 100.0
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct TransformOutcome {
    pub text: String,
    pub stats: TransformStats,
}

/// Summary of one processed file
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FileReport {
    pub input: PathBuf,
    pub output: PathBuf,
    pub stats: TransformStats,
    pub input_sha256: String,
    pub output_sha256: String,
    pub processed_at: DateTime<Utc>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_table_allocates_dense_ids() {
        let mut table = PlaceholderTable::new();
        assert_eq!(table.push("$x$", SpanClass::InlineMath), 0);
        assert_eq!(table.push("\\cite{a}", SpanClass::Citation), 1);
        assert_eq!(table.get(1).map(|s| s.original.as_str()), Some("\\cite{a}"));
        assert_eq!(table.len(), 2);
    }

    #[test]
    fn test_count_by_class() {
        let mut table = PlaceholderTable::new();
        table.push("$a$", SpanClass::InlineMath);
        table.push("$b$", SpanClass::InlineMath);
        table.push("\\label{x}", SpanClass::Label);
        let counts = table.count_by_class();
        assert_eq!(counts[&SpanClass::InlineMath], 2);
        assert_eq!(counts[&SpanClass::Label], 1);
    }

    #[test]
    fn test_change_percent() {
        let stats = TransformStats {
            original_chars: 200,
            output_chars: 230,
            ..Default::default()
        };
        assert!((stats.change_percent() - 15.0).abs() < 1e-9);

        let empty = TransformStats::default();
        assert_eq!(empty.change_percent(), 0.0);
    }
}
