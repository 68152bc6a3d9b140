use thiserror::Error;

/// Internal issues with the codebase indicating unexpected behavior & possible bugs
#[derive(Error, Debug)]
pub enum InternalError {
    /// A stored enumeration value did not match any known variant.
    ///
    /// Results in a 500 Internal Server Error with a generic message returned
    /// to client.
    #[error("Unknown {kind} value '{value}' stored in database")]
    InvalidEnumValue {
        /// Name of the enumeration being parsed
        kind: &'static str,
        /// The stored value that failed to parse
        value: String,
    },

    /// Failure to hash a password or parse a stored password hash.
    #[error("Password hashing failed: {0}")]
    PasswordHash(String),

    /// Stored preference rows could not be read against the preference schema.
    #[error("Failed to parse stored preferences: {0}")]
    PreferenceParse(#[from] serde_json::Error),
}
