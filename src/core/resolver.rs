//! Reconciles country names coming from map datasets with the registry.

use crate::core::registry::CountryRegistry;
use crate::domain::model::Country;
use crate::utils::error::{GlobalDriveError, Result};
use std::collections::HashMap;

/// Feature names that cannot be matched by normalization alone, or that
/// would otherwise be captured by an earlier registry entry
/// (e.g. "Nigeria" contains "Niger", "Romania" contains "Oman").
const BUILTIN_ALIASES: &[(&str, &str)] = &[
    ("United States of America", "United States"),
    ("Russian Federation", "Russia"),
    ("Korea, Republic of", "South Korea"),
    ("Dem. People's Rep. of Korea", "North Korea"),
    ("United Kingdom", "United Kingdom"),
    ("Great Britain", "United Kingdom"),
    ("Viet Nam", "Vietnam"),
    ("Iran (Islamic Republic of)", "Iran"),
    ("Taiwan", "Taiwan"),
    ("Bolivia (Plurinational State of)", "Bolivia"),
    ("Venezuela (Bolivarian Republic of)", "Venezuela"),
    ("Syrian Arab Republic", "Syria"),
    ("Tanzania", "Tanzania"),
    ("United Republic of Tanzania", "Tanzania"),
    ("Congo", "Congo (Republic)"),
    ("Republic of the Congo", "Congo (Republic)"),
    ("Democratic Republic of the Congo", "Congo (DRC)"),
    ("Czech Republic", "Czechia"),
    ("Macedonia", "North Macedonia"),
    ("Republic of Serbia", "Serbia"),
    ("The Bahamas", "Bahamas"),
    ("Côte d'Ivoire", "Ivory Coast"),
    ("Türkiye", "Turkey"),
    ("Lao PDR", "Laos"),
    ("Burma", "Myanmar"),
    ("Nigeria", "Nigeria"),
    ("Romania", "Romania"),
    ("Sudan", "Sudan"),
];

/// Lower-cases and keeps only ASCII letters and digits.
pub fn normalize(name: &str) -> String {
    name.chars()
        .flat_map(char::to_lowercase)
        .filter(|c| c.is_ascii_lowercase() || c.is_ascii_digit())
        .collect()
}

/// Exact external name to canonical registry name.
#[derive(Debug, Clone, Default)]
pub struct AliasTable {
    entries: HashMap<String, String>,
}

impl AliasTable {
    pub fn builtin() -> Self {
        BUILTIN_ALIASES.iter().copied().collect()
    }

    pub fn get(&self, external_name: &str) -> Option<&str> {
        self.entries.get(external_name).map(String::as_str)
    }

    pub fn insert(&mut self, external_name: impl Into<String>, canonical: impl Into<String>) {
        self.entries.insert(external_name.into(), canonical.into());
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.entries.iter().map(|(k, v)| (k.as_str(), v.as_str()))
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Alias targets missing from `registry`. Any entry here is a country
    /// that can never be reached through its alias.
    pub fn unknown_targets(&self, registry: &CountryRegistry) -> Vec<String> {
        let mut missing: Vec<String> = self
            .entries
            .values()
            .filter(|target| registry.by_name(target).is_none())
            .cloned()
            .collect();
        missing.sort();
        missing.dedup();
        missing
    }
}

impl<K: Into<String>, V: Into<String>> FromIterator<(K, V)> for AliasTable {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        Self {
            entries: iter
                .into_iter()
                .map(|(k, v)| (k.into(), v.into()))
                .collect(),
        }
    }
}

#[derive(Debug, Clone)]
pub struct NameResolver<'r> {
    registry: &'r CountryRegistry,
    aliases: AliasTable,
    normalized: Vec<String>,
}

impl NameResolver<'static> {
    pub fn builtin() -> Self {
        Self::new(CountryRegistry::builtin(), AliasTable::builtin())
    }
}

impl<'r> NameResolver<'r> {
    pub fn new(registry: &'r CountryRegistry, aliases: AliasTable) -> Self {
        let normalized = registry.all().iter().map(|c| normalize(&c.name)).collect();
        Self {
            registry,
            aliases,
            normalized,
        }
    }

    pub fn registry(&self) -> &'r CountryRegistry {
        self.registry
    }

    pub fn aliases(&self) -> &AliasTable {
        &self.aliases
    }

    /// Maps a map-feature name to a registry entry.
    ///
    /// An alias hit is final, even when its target is missing from the
    /// registry. Otherwise the first registry entry (in registry order) whose
    /// normalized name equals, is contained in, or contains the normalized
    /// input wins.
    pub fn resolve(&self, external_name: &str) -> Option<&'r Country> {
        if let Some(canonical) = self.aliases.get(external_name) {
            let hit = self.registry.by_name(canonical);
            tracing::debug!(external_name, canonical, found = hit.is_some(), "alias lookup");
            return hit;
        }

        let needle = normalize(external_name);
        if needle.is_empty() {
            return None;
        }

        let hit = self.normalized_matches(&needle).next();

        match hit {
            Some(country) => {
                tracing::debug!(external_name, resolved = %country.name, "normalized match")
            }
            None => tracing::debug!(external_name, "no matching country"),
        }
        hit
    }

    /// Registry entries, in order, whose normalized name equals, is
    /// contained in, or contains `needle`.
    fn normalized_matches<'a>(&'a self, needle: &'a str) -> impl Iterator<Item = &'r Country> + 'a {
        self.registry
            .all()
            .iter()
            .zip(&self.normalized)
            .filter(move |(_, candidate)| {
                candidate.as_str() == needle
                    || needle.contains(candidate.as_str())
                    || candidate.contains(needle)
            })
            .map(|(country, _)| country)
    }

    /// Typed input: exact registry name, ISO code, alias key, or a name that
    /// normalizes to a registry name. Anything else is accepted only when
    /// exactly one entry contains or is contained in it; several matches are
    /// reported instead of picking the first.
    pub fn lookup(&self, input: &str) -> Result<&'r Country> {
        let input = input.trim();
        let exact = self
            .registry
            .by_name(input)
            .or_else(|| self.registry.by_code(input))
            .or_else(|| {
                self.aliases
                    .get(input)
                    .and_then(|canonical| self.registry.by_name(canonical))
            });
        if let Some(country) = exact {
            return Ok(country);
        }

        let needle = normalize(input);
        let same_spelling = self
            .registry
            .all()
            .iter()
            .zip(&self.normalized)
            .find(|(_, candidate)| !needle.is_empty() && candidate.as_str() == needle);
        if let Some((country, _)) = same_spelling {
            return Ok(country);
        }

        let matches: Vec<&'r Country> = if needle.is_empty() {
            Vec::new()
        } else {
            self.normalized_matches(&needle).collect()
        };

        match matches.as_slice() {
            [] => Err(GlobalDriveError::UnknownCountry {
                name: input.to_string(),
            }),
            [country] => {
                tracing::info!(input, country = %country.name, "Interpreted country name");
                Ok(*country)
            }
            several => Err(GlobalDriveError::AmbiguousCountry {
                name: input.to_string(),
                candidates: several
                    .iter()
                    .map(|c| c.name.as_str())
                    .collect::<Vec<_>>()
                    .join(", "),
            }),
        }
    }
}
