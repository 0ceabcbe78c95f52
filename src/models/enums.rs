use serde::{Deserialize, Serialize};

use crate::error::CommandError;

/// Macro to generate enum with as_str + std::str::FromStr pattern
macro_rules! str_enum {
    ($name:ident { $($variant:ident => $s:literal),+ $(,)? }) => {
        #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
        #[serde(rename_all = "snake_case")]
        pub enum $name {
            $($variant),+
        }

        impl $name {
            pub const ALL: &'static [$name] = &[$(Self::$variant),+];

            pub fn as_str(&self) -> &'static str {
                match self {
                    $(Self::$variant => $s),+
                }
            }
        }

        impl std::str::FromStr for $name {
            type Err = CommandError;

            fn from_str(s: &str) -> Result<Self, Self::Err> {
                match s {
                    $($s => Ok(Self::$variant)),+,
                    _ => Err(CommandError::InvalidEnum {
                        field: stringify!($name).into(),
                        value: s.into(),
                    }),
                }
            }
        }

        impl std::fmt::Display for $name {
            fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
                f.write_str(self.as_str())
            }
        }
    };
}

str_enum!(FormField {
    Age => "age",
    Sex => "sex",
    Weight => "weight",
    Height => "height",
});

str_enum!(AnalysisOutcome {
    NothingSelected => "nothing_selected",
    Matched => "matched",
    Fallback => "fallback",
});

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn form_field_round_trips_through_str() {
        for field in FormField::ALL {
            assert_eq!(field.as_str().parse::<FormField>().unwrap(), *field);
        }
    }

    #[test]
    fn unknown_field_is_rejected() {
        let err = "shoe_size".parse::<FormField>().unwrap_err();
        assert!(matches!(
            err,
            CommandError::InvalidEnum { ref field, ref value }
                if field == "FormField" && value == "shoe_size"
        ));
    }

    #[test]
    fn outcome_serializes_snake_case() {
        let json = serde_json::to_string(&AnalysisOutcome::NothingSelected).unwrap();
        assert_eq!(json, "\"nothing_selected\"");
    }
}
