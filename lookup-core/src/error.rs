use thiserror::Error;

/// Shown when the user submits an empty identifier. No request is issued.
pub const VALIDATION_MESSAGE: &str = "Please enter a valid ID.";

/// Shown for a backend failure whose body carries no `detail` field.
pub const GENERIC_FAILURE_MESSAGE: &str = "Failed to fetch weather data.";

/// Shown when no response could be obtained at all.
pub const NETWORK_FAILURE_MESSAGE: &str = "Network error: Could not connect to the server.";

/// Everything a lookup can fail with.
///
/// `Display` is the user-visible message: the view surfaces these as a single
/// text line and never rethrows them, so the rendered form of each variant is
/// part of the contract. Sources are kept for diagnostics only.
#[derive(Debug, Error)]
pub enum LookupError {
    #[error("{}", VALIDATION_MESSAGE)]
    EmptyId,

    /// Non-success status; `message` is the body's `detail` when present,
    /// otherwise the generic fallback.
    #[error("{message}")]
    Backend { status: u16, message: String },

    /// The backend wrapped the record in a sequence and the sequence was empty.
    #[error("Backend returned an empty result set.")]
    EmptyBatch,

    /// Success status but a body that does not parse as a record.
    #[error("{}", GENERIC_FAILURE_MESSAGE)]
    Malformed(#[source] serde_json::Error),

    #[error("{}", NETWORK_FAILURE_MESSAGE)]
    Network(#[source] reqwest::Error),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn display_is_the_user_visible_message() {
        assert_eq!(LookupError::EmptyId.to_string(), "Please enter a valid ID.");
        assert_eq!(
            LookupError::Backend { status: 404, message: "Weather data not found".into() }
                .to_string(),
            "Weather data not found"
        );
        assert_eq!(
            LookupError::EmptyBatch.to_string(),
            "Backend returned an empty result set."
        );
    }
}
