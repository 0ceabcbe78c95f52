use clap::{Parser, ValueEnum};

/// How renders are written to stdout.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    /// Human-readable text
    Text,
    /// One JSON object per render, one per line
    Json,
}

/// Top-level CLI parser for the `symptom-checker` binary.
#[derive(Debug, Parser)]
#[command(
    name = "symptom-checker",
    version,
    about = "Pick symptoms from a searchable list and get a triage suggestion"
)]
pub struct Cli {
    /// Output format: text, json
    #[arg(short, long, default_value = "text")]
    pub format: OutputFormat,

    /// Verbose mode (debug logging on stderr)
    #[arg(short, long)]
    pub verbose: bool,
}

#[cfg(test)]
mod tests {
    use clap::{CommandFactory, Parser};

    use super::*;

    #[test]
    fn clap_command_tree_is_valid() {
        Cli::command().debug_assert();
    }

    #[test]
    fn defaults_to_text() {
        let cli = Cli::try_parse_from(["symptom-checker"]).unwrap();
        assert_eq!(cli.format, OutputFormat::Text);
        assert!(!cli.verbose);
    }

    #[test]
    fn json_and_verbose() {
        let cli = Cli::try_parse_from(["symptom-checker", "--format", "json", "-v"]).unwrap();
        assert_eq!(cli.format, OutputFormat::Json);
        assert!(cli.verbose);
    }

    #[test]
    fn rejects_unknown_format() {
        assert!(Cli::try_parse_from(["symptom-checker", "-f", "xml"]).is_err());
    }
}
