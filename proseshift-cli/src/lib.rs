// All rewriting lives in proseshift-core
// This CLI acts as a thin wrapper around the core library

// CLI-specific modules
pub mod report;

// Re-export core types for convenience
pub use proseshift_core::*;

pub use report::{format_report, format_totals, save_stages};
