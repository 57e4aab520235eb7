/// Crate-wide result alias for adapter operations.
pub type OptResult<T> = Result<T, OptError>;

#[derive(Debug, Clone, PartialEq)]
pub enum OptError {
    // ---- Stopping criteria ----
    /// Stop limit needs to be positive and finite.
    InvalidStopLimit {
        limit: f64,
        reason: &'static str,
    },

    // ---- Method selection ----
    /// Invalid abstract method name.
    InvalidMethodName {
        name: String,
        reason: &'static str,
    },
}

impl std::error::Error for OptError {}

impl std::fmt::Display for OptError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            OptError::InvalidStopLimit { limit, reason } => {
                write!(f, "Invalid stop limit {limit}: {reason}")
            }
            OptError::InvalidMethodName { name, reason } => {
                write!(f, "Invalid method name '{name}': {reason}")
            }
        }
    }
}
