//! Rule table and the fixed texts the analyzer falls back on.
//!
//! Order matters: earlier rules shadow later ones when both match.

use crate::models::Rule;

pub static RULES: &[Rule] = &[
    Rule {
        triggers: &["Chest pain", "Shortness of breath"],
        diagnosis: "Cardiac or respiratory problem — urgent evaluation",
        recommendation: "Oxygen & cardiac evaluation",
        is_emergency: true,
        confidence: 96,
    },
    Rule {
        triggers: &["Severe bleeding", "Unconsciousness"],
        diagnosis: "Major trauma or hemorrhage",
        recommendation: "Bleeding control & emergency care",
        is_emergency: true,
        confidence: 98,
    },
    Rule {
        triggers: &["High fever", "Severe abdominal pain"],
        diagnosis: "Possible infection or appendicitis",
        recommendation: "Antipyretics; urgent assessment",
        is_emergency: false,
        confidence: 78,
    },
    Rule {
        triggers: &["Seizure", "Confusion"],
        diagnosis: "Neurological event — urgent workup",
        recommendation: "Neurologic stabilization",
        is_emergency: true,
        confidence: 92,
    },
    Rule {
        triggers: &["Cough", "Sore throat", "Runny nose"],
        diagnosis: "Likely viral upper respiratory infection",
        recommendation: "Supportive care (fluids, rest)",
        is_emergency: false,
        confidence: 64,
    },
    Rule {
        triggers: &["Rash", "Allergic reaction"],
        diagnosis: "Allergic reaction",
        recommendation: "Antihistamines; consider epinephrine if severe",
        is_emergency: false,
        confidence: 70,
    },
    Rule {
        triggers: &["Fracture", "Sprain"],
        diagnosis: "Musculoskeletal injury",
        recommendation: "Immobilize, pain control; ortho follow-up",
        is_emergency: false,
        confidence: 60,
    },
];

pub const NOTHING_SELECTED_DIAGNOSIS: &str = "No symptoms selected — nothing to analyze.";

pub const FALLBACK_DIAGNOSIS: &str =
    "Non-urgent or undifferentiated symptoms — recommend primary care / telehealth.";
pub const FALLBACK_RECOMMENDATION: &str = "Supportive care; follow-up if symptoms worsen.";
pub const FALLBACK_CONFIDENCE: u8 = 40;

/// Sub-message shown inside the emergency banner.
pub const EMERGENCY_WARNING: &str = "Get to the ER now — don't be a hero (quack!).";

/// Diagnosis text shown before any analysis and after reset.
pub const NO_ANALYSIS_YET: &str = "No analysis yet — press Enter.";
