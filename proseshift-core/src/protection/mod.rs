//! Span protection
//!
//! ```text
//! raw LaTeX ──protect──▶ masked text + PlaceholderTable
//!                              │
//!                        [rule cascade]
//!                              │
//! final LaTeX ◀──restore── rewritten masked text
//! ```
//!
//! - `patterns.rs`: the ordered protection classes
//! - `placeholder.rs`: token encoding
//! - `protector.rs`: masking fold
//! - `restorer.rs`: single-scan restoration

pub mod patterns;
pub mod placeholder;
pub mod protector;
pub mod restorer;

pub use patterns::PROTECTION_ORDER;
pub use protector::protect;
pub use restorer::{restore, restore_lenient};
