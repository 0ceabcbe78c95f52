use thiserror::Error;

/// Errors at the edges of the widget: terminal I/O and JSON rendering.
///
/// Selection, filtering and analysis are total and never produce these.
#[derive(Debug, Error)]
pub enum WidgetError {
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
    #[error("Serialization error: {0}")]
    Json(#[from] serde_json::Error),
}

/// Errors from parsing a line of user input into an event.
///
/// Shown to the user as a notice; they never change widget state.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum CommandError {
    #[error("Unknown command: {0} (type `help` for the list)")]
    Unknown(String),
    #[error("`{command}` needs {expected}")]
    MissingArgument {
        command: &'static str,
        expected: &'static str,
    },
    #[error("No entry #{index} in the {list}")]
    NoSuchEntry { list: &'static str, index: usize },
    #[error("Not a valid position: {0}")]
    InvalidIndex(String),
    #[error("Invalid {field} value: {value}")]
    InvalidEnum { field: String, value: String },
}
