use serde::Serialize;

/// A trigger-keyword to diagnosis mapping.
///
/// Rules are declared once in a static table and evaluated in
/// declaration order; the first rule that matches wins.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Rule {
    pub triggers: &'static [&'static str],
    pub diagnosis: &'static str,
    pub recommendation: &'static str,
    pub is_emergency: bool,
    /// Percentage, 0 to 100.
    pub confidence: u8,
}

impl Rule {
    /// True when any trigger is a case-insensitive substring of any chosen
    /// symptom.
    pub fn matches<S: AsRef<str>>(&self, chosen: &[S]) -> bool {
        let chosen: Vec<String> = chosen.iter().map(|c| c.as_ref().to_lowercase()).collect();
        self.triggers.iter().any(|trigger| {
            let trigger = trigger.to_lowercase();
            chosen.iter().any(|c| c.contains(&trigger))
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const SPRAIN: Rule = Rule {
        triggers: &["Fracture", "Sprain"],
        diagnosis: "Musculoskeletal injury",
        recommendation: "Immobilize",
        is_emergency: false,
        confidence: 60,
    };

    #[test]
    fn matches_exact_trigger() {
        assert!(SPRAIN.matches(&["Sprain"]));
    }

    #[test]
    fn matches_trigger_inside_longer_symptom() {
        assert!(SPRAIN.matches(&["ankle sprain after running"]));
    }

    #[test]
    fn match_ignores_case() {
        assert!(SPRAIN.matches(&["FRACTURE"]));
    }

    #[test]
    fn any_chosen_symptom_can_match() {
        assert!(SPRAIN.matches(&["Cough", "Headache", "wrist fracture"]));
    }

    #[test]
    fn symptom_inside_trigger_does_not_match() {
        // "pra" is contained in "Sprain" but containment runs the other way
        assert!(!SPRAIN.matches(&["pra"]));
    }

    #[test]
    fn empty_selection_never_matches() {
        let none: [&str; 0] = [];
        assert!(!SPRAIN.matches(&none));
    }
}
