//! Error handling for the CLI application

use std::fmt;

/// Custom error type for CLI-specific errors
#[derive(Debug)]
pub enum CliError {
    /// Input file not found or unreadable
    InputNotFound(String),
    /// Output file could not be created or written
    OutputError(String),
    /// Configuration error
    ConfigError(String),
    /// Translation error from core
    TranslationError(String),
}

impl fmt::Display for CliError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CliError::InputNotFound(path) => write!(f, "Input file not found: {path}"),
            CliError::OutputError(path) => write!(f, "Cannot write output file: {path}"),
            CliError::ConfigError(msg) => write!(f, "Configuration error: {msg}"),
            CliError::TranslationError(msg) => write!(f, "Translation error: {msg}"),
        }
    }
}

impl std::error::Error for CliError {}

impl CliError {
    /// Describe a core translation error in CLI terms
    pub fn from_core(err: &piglatin_core::Error) -> Self {
        match err {
            piglatin_core::Error::MissingSource { path, .. } => {
                CliError::InputNotFound(path.display().to_string())
            }
            piglatin_core::Error::CreateOutput { path, .. } => {
                CliError::OutputError(path.display().to_string())
            }
            piglatin_core::Error::SameFile { path } => {
                CliError::OutputError(path.display().to_string())
            }
            piglatin_core::Error::Configuration(msg) => CliError::ConfigError(msg.clone()),
            other => CliError::TranslationError(other.to_string()),
        }
    }
}

/// Wrap a core error so the CLI description leads and the cause follows
pub fn core_error(err: piglatin_core::Error) -> anyhow::Error {
    let context = CliError::from_core(&err);
    anyhow::Error::new(err).context(context)
}

/// Result type alias for CLI operations
pub type CliResult<T> = Result<T, anyhow::Error>;

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::PathBuf;

    #[test]
    fn test_input_not_found_error_display() {
        let error = CliError::InputNotFound("story.txt".to_string());
        assert_eq!(error.to_string(), "Input file not found: story.txt");
    }

    #[test]
    fn test_output_error_display() {
        let error = CliError::OutputError("/readonly/output.txt".to_string());
        assert_eq!(
            error.to_string(),
            "Cannot write output file: /readonly/output.txt"
        );
    }

    #[test]
    fn test_config_error_display() {
        let error = CliError::ConfigError("invalid format".to_string());
        assert_eq!(error.to_string(), "Configuration error: invalid format");
    }

    #[test]
    fn test_translation_error_display() {
        let error = CliError::TranslationError("bad bytes".to_string());
        assert_eq!(error.to_string(), "Translation error: bad bytes");
    }

    #[test]
    fn test_from_missing_source() {
        let core = piglatin_core::Error::MissingSource {
            path: PathBuf::from("missing.txt"),
            source: std::io::Error::new(std::io::ErrorKind::NotFound, "gone"),
        };
        let error = CliError::from_core(&core);
        assert!(matches!(error, CliError::InputNotFound(ref p) if p == "missing.txt"));

        let wrapped = core_error(core);
        assert_eq!(wrapped.to_string(), "Input file not found: missing.txt");
        assert!(format!("{wrapped:#}").contains("gone"));
    }

    #[test]
    fn test_from_other_core_errors() {
        let config = CliError::from_core(&piglatin_core::Error::Configuration("threads".into()));
        assert!(matches!(config, CliError::ConfigError(_)));

        let same = CliError::from_core(&piglatin_core::Error::SameFile {
            path: PathBuf::from("story.txt"),
        });
        assert_eq!(same.to_string(), "Cannot write output file: story.txt");

        let encoding = CliError::from_core(&piglatin_core::Error::InvalidEncoding("0xff".into()));
        assert!(encoding.to_string().starts_with("Translation error:"));
    }

    #[test]
    fn test_error_trait_implementation() {
        let error = CliError::InputNotFound("test.txt".to_string());
        let _: &dyn std::error::Error = &error;

        let debug_str = format!("{:?}", error);
        assert!(debug_str.contains("InputNotFound"));
        assert!(debug_str.contains("test.txt"));
    }

    #[test]
    fn test_cli_result_type_alias() {
        let success: CliResult<String> = Ok("test".to_string());
        assert_eq!(success.as_ref().unwrap(), "test");

        let failure: CliResult<String> = Err(anyhow::anyhow!("test error"));
        assert!(failure.unwrap_err().to_string().contains("test error"));
    }
}
