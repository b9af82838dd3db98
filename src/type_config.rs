/*!
 * Type-description configuration store
 *
 * Maps exact filenames and extensions to human-readable type descriptions,
 * loaded from a simple `key = description` text format.
 */

use std::collections::BTreeMap;
use std::fs;
use std::path::Path;

/// Ordered rule store for entry type descriptions.
///
/// Keys starting with a dot are extension rules (leading dot kept,
/// case-sensitive exact match); all other keys are exact-filename rules.
/// Once bootstrapped the store is read-only for the rest of the session.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TypeConfig {
    by_name: BTreeMap<String, String>,
    by_extension: BTreeMap<String, String>,
}

impl TypeConfig {
    /// Parse the line-oriented `key = description` format.
    ///
    /// Blank lines and `#` comments are ignored. Malformed lines (no `=`)
    /// are skipped, never fatal. Within one source the last write for a key
    /// wins.
    pub fn parse(text: &str) -> Self {
        let mut config = Self::default();

        for line in text.lines() {
            let line = line.trim();
            if line.is_empty() || line.starts_with('#') {
                continue;
            }

            let (key, desc) = match line.split_once('=') {
                Some(pair) => pair,
                None => continue,
            };
            let key = key.trim();
            let desc = desc.trim();
            if key.is_empty() {
                continue;
            }

            if key.starts_with('.') {
                config.by_extension.insert(key.to_string(), desc.to_string());
            } else {
                config.by_name.insert(key.to_string(), desc.to_string());
            }
        }

        config
    }

    /// Serialize back to the text format, suitable for reparsing.
    ///
    /// Filename rules come first, then extension rules, each group in
    /// sorted key order.
    pub fn serialize(&self) -> String {
        let mut out = String::new();
        for (key, desc) in self.by_name.iter().chain(self.by_extension.iter()) {
            out.push_str(key);
            out.push_str(" = ");
            out.push_str(desc);
            out.push('\n');
        }
        out
    }

    /// Insert every rule from `other` whose key is not already present.
    ///
    /// Existing rules are never overwritten: local rules win over shipped
    /// defaults.
    pub fn merge_with(&mut self, other: &TypeConfig) {
        for (key, desc) in &other.by_name {
            self.by_name
                .entry(key.clone())
                .or_insert_with(|| desc.clone());
        }
        for (key, desc) in &other.by_extension {
            self.by_extension
                .entry(key.clone())
                .or_insert_with(|| desc.clone());
        }
    }

    /// Look up a description for an entry.
    ///
    /// An exact filename match wins over an extension match.
    pub fn lookup(&self, filename: &str, extension: Option<&str>) -> Option<&str> {
        self.by_name
            .get(filename)
            .or_else(|| extension.and_then(|ext| self.by_extension.get(ext)))
            .map(String::as_str)
    }

    /// Load a config file, treating missing or unreadable files as empty.
    pub fn read_from(path: &Path) -> Self {
        match fs::read_to_string(path) {
            Ok(text) => Self::parse(&text),
            Err(_) => Self::default(),
        }
    }

    /// True when no rules are loaded
    pub fn is_empty(&self) -> bool {
        self.by_name.is_empty() && self.by_extension.is_empty()
    }

    /// Number of rules across both maps
    pub fn len(&self) -> usize {
        self.by_name.len() + self.by_extension.len()
    }
}
