//! Field taxonomy
//!
//! Maps PII categories to the field-name spellings that carry them. The
//! built-in taxonomy is embedded from `taxonomy/field_taxonomy.toml`; a
//! replacement file can be supplied through configuration.

use crate::pii::models::PiiCategory;
use anyhow::{Context, Result};
use serde::Deserialize;
use std::collections::{HashMap, HashSet};
use std::path::Path;

/// Taxonomy document as written in TOML
#[derive(Debug, Deserialize)]
struct TaxonomyDocument {
    #[serde(default)]
    categories: HashMap<String, Vec<String>>,
    #[serde(default)]
    name_pair: Option<NamePair>,
    #[serde(default)]
    address_context: AddressContextDefinition,
}

#[derive(Debug, Default, Deserialize)]
struct AddressContextDefinition {
    #[serde(default)]
    city: Vec<String>,
    #[serde(default)]
    state: Vec<String>,
    #[serde(default)]
    postal_code: Vec<String>,
}

/// Given-name and surname field spellings, matched case-sensitively
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct NamePair {
    /// Given-name field
    pub given: String,
    /// Surname field
    pub surname: String,
}

/// Which part of an address a context field supplies
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AddressContext {
    /// City or town
    City,
    /// State or province
    State,
    /// Postal code
    PostalCode,
}

/// Immutable category to field-name mapping
#[derive(Debug, Clone)]
pub struct FieldTaxonomy {
    fields: HashMap<PiiCategory, HashSet<String>>,
    name_pair: Option<NamePair>,
    address_context: HashMap<String, AddressContext>,
}

impl FieldTaxonomy {
    /// Load a taxonomy from a TOML file
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = std::fs::read_to_string(path.as_ref()).with_context(|| {
            format!("Failed to read field taxonomy: {}", path.as_ref().display())
        })?;

        Self::from_toml(&content)
    }

    /// Parse a taxonomy from TOML content
    pub fn from_toml(content: &str) -> Result<Self> {
        let document: TaxonomyDocument =
            toml::from_str(content).context("Failed to parse field taxonomy TOML")?;

        let mut fields: HashMap<PiiCategory, HashSet<String>> = HashMap::new();
        let mut owner: HashMap<String, PiiCategory> = HashMap::new();

        for (key, spellings) in document.categories {
            let category = PiiCategory::from_taxonomy_key(&key)
                .with_context(|| format!("Unknown PII category in taxonomy: {key}"))?;

            for spelling in spellings {
                let spelling = spelling.trim();
                if spelling.is_empty() {
                    anyhow::bail!("Empty field name in taxonomy category '{key}'");
                }
                let spelling = if category.is_case_sensitive() {
                    spelling.to_string()
                } else {
                    spelling.to_lowercase()
                };

                if let Some(previous) = owner.insert(spelling.clone(), category) {
                    if previous != category {
                        anyhow::bail!(
                            "Field '{spelling}' is listed under both {previous} and {category}"
                        );
                    }
                }
                fields.entry(category).or_default().insert(spelling);
            }
        }

        if let Some(ref pair) = document.name_pair {
            if pair.given.is_empty() || pair.surname.is_empty() {
                anyhow::bail!("name_pair requires both 'given' and 'surname'");
            }
            if pair.given == pair.surname {
                anyhow::bail!("name_pair 'given' and 'surname' must differ");
            }
        }

        let mut address_context = HashMap::new();
        let context = document.address_context;
        for (spellings, kind) in [
            (context.city, AddressContext::City),
            (context.state, AddressContext::State),
            (context.postal_code, AddressContext::PostalCode),
        ] {
            for spelling in spellings {
                address_context.insert(spelling.trim().to_lowercase(), kind);
            }
        }

        Ok(Self {
            fields,
            name_pair: document.name_pair,
            address_context,
        })
    }

    /// The built-in taxonomy
    pub fn builtin() -> Result<Self> {
        let default_toml = include_str!("../../taxonomy/field_taxonomy.toml");
        Self::from_toml(default_toml)
    }

    /// Check whether `field_name` is a recognized spelling for `category`
    pub fn is_field(&self, category: PiiCategory, field_name: &str) -> bool {
        let Some(spellings) = self.fields.get(&category) else {
            return false;
        };
        if category.is_case_sensitive() {
            spellings.contains(field_name)
        } else {
            spellings.contains(&field_name.to_lowercase())
        }
    }

    /// Category a field name belongs to, if any
    pub fn category_of(&self, field_name: &str) -> Option<PiiCategory> {
        PiiCategory::ALL
            .into_iter()
            .find(|category| self.is_field(*category, field_name))
    }

    /// Recognized spellings for a category
    pub fn spellings(&self, category: PiiCategory) -> impl Iterator<Item = &str> {
        self.fields
            .get(&category)
            .into_iter()
            .flat_map(|set| set.iter().map(String::as_str))
    }

    /// Given-name and surname fields, if configured
    pub fn name_pair(&self) -> Option<&NamePair> {
        self.name_pair.as_ref()
    }

    /// Address context kind supplied by a field, if any
    pub fn address_context(&self, field_name: &str) -> Option<AddressContext> {
        self.address_context
            .get(&field_name.to_lowercase())
            .copied()
    }
}
