use serde::{Deserialize, Serialize};

use super::enums::FormField;

/// Raw text of the demographic form, exactly as typed.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct DemographicForm {
    pub age: String,
    pub sex: String,
    pub weight: String,
    pub height: String,
}

impl DemographicForm {
    pub fn set(&mut self, field: FormField, text: impl Into<String>) {
        let text = text.into();
        match field {
            FormField::Age => self.age = text,
            FormField::Sex => self.sex = text,
            FormField::Weight => self.weight = text,
            FormField::Height => self.height = text,
        }
    }

    pub fn get(&self, field: FormField) -> &str {
        match field {
            FormField::Age => &self.age,
            FormField::Sex => &self.sex,
            FormField::Weight => &self.weight,
            FormField::Height => &self.height,
        }
    }

    pub fn clear(&mut self) {
        *self = Self::default();
    }

    /// Parses the form. Numeric fields that are blank or unparseable
    /// become 0; sex is kept verbatim.
    pub fn parse(&self) -> Demographics {
        Demographics {
            age: parse_number(&self.age),
            sex: self.sex.clone(),
            weight: parse_number(&self.weight),
            height: parse_number(&self.height),
        }
    }
}

/// Parsed demographic inputs handed to the analyzer.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Demographics {
    pub age: f64,
    pub sex: String,
    pub weight: f64,
    pub height: f64,
}

fn parse_number(text: &str) -> f64 {
    match text.trim().parse::<f64>() {
        Ok(value) if value.is_finite() => value,
        _ => 0.0,
    }
}
