//! Shared rule set: field taxonomy plus pattern library

use crate::pii::patterns::PatternLibrary;
use crate::pii::taxonomy::FieldTaxonomy;
use anyhow::Result;
use std::path::Path;

/// Immutable rules consulted by every detector and masker
///
/// Built once at startup and shared behind an `Arc`.
#[derive(Debug, Clone)]
pub struct PiiRules {
    /// Category to field-name mapping
    pub taxonomy: FieldTaxonomy,
    /// Compiled detection and masking patterns
    pub patterns: PatternLibrary,
}

impl PiiRules {
    /// Rules built from the embedded taxonomy
    pub fn builtin() -> Result<Self> {
        Ok(Self {
            taxonomy: FieldTaxonomy::builtin()?,
            patterns: PatternLibrary::new()?,
        })
    }

    /// Rules with a taxonomy loaded from `path`
    pub fn with_taxonomy_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        Ok(Self {
            taxonomy: FieldTaxonomy::from_file(path)?,
            patterns: PatternLibrary::new()?,
        })
    }

    /// Rules built from an explicit taxonomy
    pub fn with_taxonomy(taxonomy: FieldTaxonomy) -> Result<Self> {
        Ok(Self {
            taxonomy,
            patterns: PatternLibrary::new()?,
        })
    }
}
