//! Symptom catalog: the fixed, ordered list of known symptom names.
//!
//! The catalog is read-only once built. The dropdown filters it by
//! substring and direct entry resolves free text against it.

use serde::{Deserialize, Serialize};

// ═══════════════════════════════════════════
// Constants — built-in symptom list
// ═══════════════════════════════════════════

pub const SYMPTOMS: &[&str] = &[
    "Abdominal pain",
    "Allergic reaction",
    "Anxiety",
    "Back pain",
    "Bloating",
    "Blurred vision",
    "Bruising",
    "Chest pain",
    "Chest tightness",
    "Chills",
    "Confusion",
    "Congestion",
    "Constipation",
    "Cough",
    "Diarrhea",
    "Difficulty concentrating",
    "Difficulty swallowing",
    "Dizziness",
    "Dry mouth",
    "Ear pain",
    "Fainting",
    "Fatigue",
    "Fever",
    "Fracture",
    "Headache",
    "Heartburn",
    "High fever",
    "Hives",
    "Irritability",
    "Itching",
    "Joint pain",
    "Loss of appetite",
    "Loss of smell",
    "Low mood",
    "Memory issues",
    "Muscle pain",
    "Nausea",
    "Neck pain",
    "Night sweats",
    "Nosebleed",
    "Numbness",
    "Palpitations",
    "Rash",
    "Runny nose",
    "Seizure",
    "Severe abdominal pain",
    "Severe bleeding",
    "Severe headache",
    "Shortness of breath",
    "Sleep difficulty",
    "Sneezing",
    "Sore throat",
    "Sprain",
    "Stiff neck",
    "Swelling",
    "Tingling",
    "Tremor",
    "Unconsciousness",
    "Vomiting",
    "Weakness",
    "Weight change",
    "Wheezing",
];

/// Ordered list of known symptom names.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Catalog {
    entries: Vec<String>,
}

impl Catalog {
    pub fn new<I, S>(entries: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            entries: entries.into_iter().map(Into::into).collect(),
        }
    }

    pub fn entries(&self) -> &[String] {
        &self.entries
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Entries whose lowercase form contains the trimmed, lowercased query,
    /// in catalog order, truncated to `limit`. An empty query matches all.
    pub fn filter(&self, query: &str, limit: usize) -> Vec<&str> {
        let needle = query.trim().to_lowercase();
        self.entries
            .iter()
            .filter(|s| s.to_lowercase().contains(&needle))
            .take(limit)
            .map(String::as_str)
            .collect()
    }

    /// Case-insensitive exact lookup, returning the catalog spelling.
    pub fn find_exact(&self, text: &str) -> Option<&str> {
        let wanted = text.to_lowercase();
        self.entries
            .iter()
            .find(|s| s.to_lowercase() == wanted)
            .map(String::as_str)
    }

    /// Resolves committed free text to a symptom name.
    ///
    /// Blank text yields `None`. Otherwise the catalog spelling of a
    /// case-insensitive match, or the trimmed text verbatim.
    pub fn resolve(&self, text: &str) -> Option<String> {
        let trimmed = text.trim();
        if trimmed.is_empty() {
            return None;
        }
        Some(
            self.find_exact(trimmed)
                .map(str::to_string)
                .unwrap_or_else(|| trimmed.to_string()),
        )
    }
}

impl Default for Catalog {
    fn default() -> Self {
        Self::new(SYMPTOMS.iter().copied())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::MAX_VISIBLE_MATCHES;
    use crate::rules::RULES;

    fn big_catalog() -> Catalog {
        Catalog::new((0..150).map(|i| format!("Symptom {i}")))
    }

    #[test]
    fn default_catalog_contains_every_rule_trigger() {
        let catalog = Catalog::default();
        for rule in RULES {
            for trigger in rule.triggers {
                assert!(
                    catalog.find_exact(trigger).is_some(),
                    "missing trigger {trigger}"
                );
            }
        }
    }

    #[test]
    fn default_catalog_has_no_duplicates() {
        let catalog = Catalog::default();
        let mut seen = std::collections::HashSet::new();
        for entry in catalog.entries() {
            assert!(seen.insert(entry.to_lowercase()), "duplicate {entry}");
        }
    }

    #[test]
    fn empty_query_matches_everything_up_to_cap() {
        let catalog = big_catalog();
        let shown = catalog.filter("", MAX_VISIBLE_MATCHES);
        assert_eq!(shown.len(), MAX_VISIBLE_MATCHES);
        assert_eq!(shown[0], "Symptom 0");
        assert_eq!(shown[59], "Symptom 59");
    }

    #[test]
    fn filter_is_case_insensitive_and_keeps_catalog_order() {
        let catalog = Catalog::new(["Sore throat", "Chest pain", "Back PAIN", "Cough"]);
        assert_eq!(catalog.filter("PaIn", 60), vec!["Chest pain", "Back PAIN"]);
    }

    #[test]
    fn filter_never_exceeds_cap_and_every_entry_matches() {
        let catalog = big_catalog();
        for query in ["", "symptom", "1", "SYMPTOM 1", "9", "zzz"] {
            let shown = catalog.filter(query, MAX_VISIBLE_MATCHES);
            assert!(shown.len() <= MAX_VISIBLE_MATCHES);
            let needle = query.to_lowercase();
            for entry in shown {
                assert!(entry.to_lowercase().contains(&needle));
            }
        }
    }

    #[test]
    fn filter_trims_the_query() {
        let catalog = Catalog::default();
        assert_eq!(catalog.filter("  cough ", 60), vec!["Cough"]);
    }

    #[test]
    fn filter_with_no_match_is_empty() {
        let catalog = Catalog::default();
        assert!(catalog.filter("xylophone", 60).is_empty());
    }

    #[test]
    fn resolve_prefers_catalog_spelling() {
        let catalog = Catalog::default();
        assert_eq!(catalog.resolve("  chest PAIN "), Some("Chest pain".into()));
    }

    #[test]
    fn resolve_keeps_unknown_text_verbatim() {
        let catalog = Catalog::default();
        assert_eq!(catalog.resolve(" Stubbed toe "), Some("Stubbed toe".into()));
    }

    #[test]
    fn resolve_blank_is_none() {
        let catalog = Catalog::default();
        assert_eq!(catalog.resolve("   "), None);
        assert_eq!(catalog.resolve(""), None);
    }
}
