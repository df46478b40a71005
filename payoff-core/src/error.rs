//! Error types for loading and validating debt input.

use std::path::PathBuf;
use thiserror::Error;
use validator::ValidationErrors;

/// Everything that can go wrong before a simulation starts.
///
/// All variants are terminal: the engine never sees a partially valid ledger.
#[derive(Debug, Error)]
pub enum InputError {
    /// The debt file could not be read.
    #[error("Failed to read debt file {path}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// The debt file is not a JSON array of debt records, or a field is missing
    /// or of the wrong type.
    #[error("Malformed debt input")]
    Malformed(#[from] serde_json::Error),

    /// A record parsed but holds a value outside its allowed range.
    #[error("Invalid debt record #{index} ({name}):\n{reason}")]
    InvalidRecord {
        index: usize,
        name: String,
        reason: String,
    },
}

impl InputError {
    pub(crate) fn invalid_record(index: usize, name: &str, errors: &ValidationErrors) -> Self {
        InputError::InvalidRecord {
            index,
            name: name.to_string(),
            reason: format_validation_errors(errors),
        }
    }
}

fn format_validation_errors(errors: &ValidationErrors) -> String {
    use std::fmt::Write;

    let mut output = String::new();
    let mut fields: Vec<_> = errors.field_errors().into_iter().collect();
    fields.sort_by(|a, b| a.0.cmp(&b.0));
    for (field, errors) in fields {
        let _ = writeln!(output, "Field '{}':", field);
        for error in errors {
            let message = match &error.message {
                Some(msg) => msg.to_string(),
                None => error.code.to_string(),
            };
            let _ = writeln!(output, "  - {}", message);
        }
    }
    output
}
