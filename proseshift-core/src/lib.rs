// Proseshift Core Library
//
// Rewrites the prose of LaTeX documents through an ordered cascade of
// substitution rules. Markup, math, citations and labels are masked out
// before the cascade and restored byte-for-byte afterwards.

pub mod config;
pub mod error;
pub mod processor;
pub mod protection;
pub mod rules;
pub mod types;

// Re-export main types and functions for easy use
pub use config::ShiftConfig;
pub use error::{RestoreError, ShiftError, ShiftResult};
pub use processor::{default_output_path, DocumentProcessor, PipelineStages, StepProfiler};
pub use protection::{protect, restore};
pub use rules::RuleEngine;
pub use types::*;
