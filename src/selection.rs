//! The user's chosen symptoms.
//!
//! Insertion order is display order. Membership is exact, case-sensitive
//! string equality; nothing checks catalog membership.

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ChosenSet {
    items: Vec<String>,
}

impl ChosenSet {
    pub fn new() -> Self {
        Self::default()
    }

    /// Appends `symptom` unless already present. Returns whether it was added.
    pub fn add(&mut self, symptom: &str) -> bool {
        if self.contains(symptom) {
            return false;
        }
        self.items.push(symptom.to_string());
        true
    }

    /// Removes every entry equal to `symptom`. Returns whether anything was removed.
    pub fn remove(&mut self, symptom: &str) -> bool {
        let before = self.items.len();
        self.items.retain(|s| s != symptom);
        self.items.len() != before
    }

    pub fn reset(&mut self) {
        self.items.clear();
    }

    pub fn contains(&self, symptom: &str) -> bool {
        self.items.iter().any(|s| s == symptom)
    }

    pub fn as_slice(&self) -> &[String] {
        &self.items
    }

    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.items.iter().map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }
}
