//! Translation table — the immutable English-to-Japanese phrase map.
//!
//! Built once at startup from the builtin catalog plus configured extras,
//! then shared read-only. Lookup trims the input and exact-matches against
//! the keys; the `translate` helper falls back to the input phrase on a
//! miss, so callers never need to handle a missing entry.

mod builtin;

#[cfg(test)]
mod tests;

use std::collections::{BTreeMap, HashMap};
use tracing::{info, warn};

use crate::config::TableConfig;
use crate::error::WayakuError;

/// Immutable phrase map with identity-fallback lookup.
#[derive(Debug, Clone)]
pub struct TranslationTable {
    entries: HashMap<String, String>,
}

impl TranslationTable {
    /// Build the table from the builtin catalog plus configured extras.
    ///
    /// Extra keys are trimmed on merge; an extra that repeats a builtin
    /// key overrides it. Values are stored verbatim.
    pub fn new(config: &TableConfig) -> Self {
        let mut entries: HashMap<String, String> = builtin::BUILTIN
            .iter()
            .map(|(k, v)| ((*k).to_string(), (*v).to_string()))
            .collect();

        for (key, value) in &config.extra {
            let key = key.trim();
            if key.is_empty() {
                warn!("table: ignoring extra entry with blank key");
                continue;
            }
            entries.insert(key.to_string(), value.clone());
        }

        let table = Self { entries };
        info!("table: {} phrases loaded", table.len());
        for (key, value) in table.colliding_values() {
            warn!("table: value \"{value}\" for \"{key}\" is itself a key, rewrites may chain");
        }
        table
    }

    /// Build the table from the builtin catalog only.
    pub fn builtin() -> Self {
        Self::new(&TableConfig::default())
    }

    /// Look up a phrase: surrounding whitespace is trimmed, then the key
    /// must match exactly. No case folding, no partial matching.
    pub fn lookup(&self, phrase: &str) -> Option<&str> {
        self.entries.get(phrase.trim()).map(String::as_str)
    }

    /// Translate a phrase, returning the input unchanged (as given,
    /// untrimmed) when the table has no entry for it.
    pub fn translate<'a>(&'a self, phrase: &'a str) -> &'a str {
        self.lookup(phrase).unwrap_or(phrase)
    }

    /// Entries whose value is itself a key, sorted by key.
    ///
    /// A rewritten leaf then matches again on the next pass, so these
    /// entries can chain across repeated rewrites. Identity pairs are
    /// excluded: a leaf holding its own key is stable, and the rewriter
    /// leaves it alone.
    pub fn colliding_values(&self) -> Vec<(&str, &str)> {
        let mut hits: Vec<(&str, &str)> = self
            .entries
            .iter()
            .filter(|(k, v)| *k != *v && self.entries.contains_key(v.as_str()))
            .map(|(k, v)| (k.as_str(), v.as_str()))
            .collect();
        hits.sort_unstable();
        hits
    }

    /// Number of phrase pairs.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Iterate all pairs in unspecified order.
    pub fn entries(&self) -> impl Iterator<Item = (&str, &str)> + '_ {
        self.entries.iter().map(|(k, v)| (k.as_str(), v.as_str()))
    }

    /// All pairs as pretty-printed JSON, keys sorted.
    pub fn to_json(&self) -> Result<String, WayakuError> {
        let map: BTreeMap<&str, &str> = self.entries().collect();
        Ok(serde_json::to_string_pretty(&map)?)
    }
}
