//! PII detection module
//!
//! Two independent strategies feed the classifier:
//! - [`StandaloneDetector`]: a single recognized identifier field whose value
//!   matches its category pattern
//! - [`CombinatorialScorer`]: the number of quasi-identifying signals present
//!   at the same time
//!
//! Both are field-name gated: a value only counts for a category when it sits
//! in a field the taxonomy assigns to that category.

pub mod combinatorial;
pub mod standalone;

pub use combinatorial::CombinatorialScorer;
pub use standalone::StandaloneDetector;
