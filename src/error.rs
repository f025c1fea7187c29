//! Error types for the ranking engine
//!
//! Every failure the core can report is a variant of [`RankingError`]. None of
//! them are fatal; the presentation layer turns them into a notice for the user
//! via [`RankingError::title`] and [`RankingError::notice`].

/// Result type alias for convenience
pub type Result<T> = std::result::Result<T, RankingError>;

/// Errors returned by the registry, the rating engine and the session store
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum RankingError {
    #[error("Invalid player identifier: identifier cannot be empty")]
    InvalidIdentifier,

    #[error("Duplicate player identifier: {id}")]
    DuplicateIdentifier { id: String },

    #[error("Invalid score: {reason}")]
    InvalidScore { reason: String },

    #[error("Player not found: {id}")]
    NotFound { id: String },

    #[error("Same player selected for both sides")]
    SamePlayer,

    #[error("Invalid final score: {home_score}-{away_score} is not a finished game")]
    InvalidFinalScore { home_score: u32, away_score: u32 },

    #[error("Session store I/O failed: {message}")]
    Io { message: String },
}

impl RankingError {
    /// Short title for an alert shown to the end user
    pub fn title(&self) -> &'static str {
        match self {
            RankingError::InvalidIdentifier => "Invalid Player ID",
            RankingError::DuplicateIdentifier { .. } => "Duplicate Player ID",
            RankingError::InvalidScore { .. } => "Invalid Score",
            RankingError::NotFound { .. } => "Unknown Player",
            RankingError::SamePlayer => "Same Player",
            RankingError::InvalidFinalScore { .. } => "Invalid Final Score",
            RankingError::Io { .. } => "Save Failed",
        }
    }

    /// Human-readable message to go with [`RankingError::title`]
    pub fn notice(&self) -> String {
        match self {
            RankingError::InvalidIdentifier => "Please enter a player ID.".to_string(),
            RankingError::DuplicateIdentifier { id } => {
                format!("The player ID {} already exists in the list.", id)
            }
            RankingError::InvalidScore { .. } => "Please enter a valid score.".to_string(),
            RankingError::NotFound { id } => format!("No player with ID {} is registered.", id),
            RankingError::SamePlayer => "Same player selected twice.".to_string(),
            RankingError::InvalidFinalScore { .. } => "This is not a finished game.".to_string(),
            RankingError::Io { message } => {
                format!("The ranking could not be saved ({}). Try again.", message)
            }
        }
    }
}

impl From<std::io::Error> for RankingError {
    fn from(err: std::io::Error) -> Self {
        RankingError::Io {
            message: err.to_string(),
        }
    }
}

impl From<serde_json::Error> for RankingError {
    fn from(err: serde_json::Error) -> Self {
        RankingError::Io {
            message: err.to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_notice_mentions_duplicate_id() {
        let err = RankingError::DuplicateIdentifier {
            id: "alice".to_string(),
        };
        assert_eq!(err.title(), "Duplicate Player ID");
        assert!(err.notice().contains("alice"));
    }

    #[test]
    fn test_io_error_conversion() {
        let io = std::io::Error::new(std::io::ErrorKind::PermissionDenied, "read-only");
        let err: RankingError = io.into();
        assert!(matches!(err, RankingError::Io { .. }));
        assert!(err.to_string().contains("read-only"));
    }
}
