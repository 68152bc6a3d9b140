use thiserror::Error;

#[derive(Error, Debug)]
pub enum ConfigError {
    /// Required environment variable is not set.
    ///
    /// The application requires this environment variable to be defined. Check the
    /// documentation or `.env.example` file for required configuration variables.
    #[error("Missing required environment variable: {0}")]
    MissingEnvVar(String),

    /// Environment variable is set but could not be parsed.
    #[error("Invalid value for environment variable {name}: {reason}")]
    InvalidValue {
        /// Name of the environment variable
        name: String,
        /// Why the value was rejected
        reason: String,
    },
}
