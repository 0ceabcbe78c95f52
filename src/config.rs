/// Application-level constants
pub const APP_NAME: &str = "Symptom Checker";
pub const APP_VERSION: &str = env!("CARGO_PKG_VERSION");

/// Maximum number of catalog entries shown in the dropdown at once.
pub const MAX_VISIBLE_MATCHES: usize = 60;

/// Placeholder shown in result fields that have no value yet.
pub const PLACEHOLDER: &str = "—";

/// Format used for the "last updated" stamp (locale-style time of day).
pub const TIME_OF_DAY_FORMAT: &str = "%-I:%M:%S %p";

/// Log filter used when `RUST_LOG` is not set.
pub fn default_log_filter() -> &'static str {
    "symptom_checker_lib=info,warn"
}

/// Log filter used with `--verbose`.
pub fn verbose_log_filter() -> &'static str {
    "symptom_checker_lib=debug,info"
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn app_name_is_symptom_checker() {
        assert_eq!(APP_NAME, "Symptom Checker");
    }

    #[test]
    fn app_version_matches_cargo() {
        assert_eq!(APP_VERSION, "0.1.0");
    }

    #[test]
    fn dropdown_cap_is_sixty() {
        assert_eq!(MAX_VISIBLE_MATCHES, 60);
    }

    #[test]
    fn log_filters_target_this_crate() {
        assert!(default_log_filter().starts_with("symptom_checker_lib="));
        assert!(verbose_log_filter().contains("debug"));
    }
}
