use thiserror::Error;

#[derive(Error, Debug)]
pub enum ConfigError {
    /// Required environment variable is not set.
    ///
    /// The application requires this environment variable to be defined. Check the
    /// `.env.example` file for required configuration variables.
    #[error("Missing required environment variable: {0}")]
    MissingEnvVar(String),

    /// Environment variable is set but its value cannot be parsed.
    ///
    /// Numeric settings (channel IDs, role IDs, cooldowns, bag size) must be plain
    /// unsigned integers.
    #[error("Invalid value '{value}' for environment variable {name}")]
    InvalidEnvVar {
        /// Name of the offending variable
        name: String,
        /// The raw value that failed to parse
        value: String,
    },

    /// The self-role catalog file could not be read or parsed.
    #[error("Failed to load self-role catalog from '{path}': {reason}")]
    InvalidSelfRoleCatalog {
        /// Path given in SELFROLES_PATH
        path: String,
        /// Underlying IO or JSON error message
        reason: String,
    },
}
