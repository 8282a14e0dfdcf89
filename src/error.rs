//! Error types for catalog loading and configuration.

/// Everything that can go wrong before a layout pass runs.
///
/// The layout itself never fails; errors only come from host-supplied
/// catalogs and configuration.
#[derive(Debug, thiserror::Error)]
pub enum CloudError {
    #[error("Malformed JSON: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Unknown category '{0}'")]
    UnknownCategory(String),

    #[error("Skill at position {0} has an empty name")]
    EmptySkillName(usize),

    #[error("Duplicate skill '{0}'")]
    DuplicateSkill(String),

    #[error("Invalid layout config: {0}")]
    InvalidConfig(String),
}

impl CloudError {
    /// Short machine-readable kind, sent to the host alongside the message.
    pub fn kind(&self) -> &'static str {
        match self {
            CloudError::Json(_) => "json",
            CloudError::UnknownCategory(_) => "unknown_category",
            CloudError::EmptySkillName(_) => "empty_name",
            CloudError::DuplicateSkill(_) => "duplicate_skill",
            CloudError::InvalidConfig(_) => "invalid_config",
        }
    }
}

pub type Result<T> = std::result::Result<T, CloudError>;
