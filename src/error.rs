#[derive(Debug, thiserror::Error)]
pub enum DashboardError {
    #[error("Validation error: {0}")]
    Validation(String),

    #[error("Remote error: {0}")]
    Remote(String),

    #[error("Network error: {0}")]
    Network(#[from] reqwest::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("A search is already in flight for this session")]
    Busy,

    #[error("Invalid argument: {0}")]
    InvalidArgument(String),

    #[error("Background task failed: {0}")]
    Task(String),
}

impl DashboardError {
    /// The text shown to the user in an error notice.
    ///
    /// Transport failures read the same as remote failures.
    pub fn user_message(&self) -> String {
        match self {
            DashboardError::Validation(msg)
            | DashboardError::Remote(msg)
            | DashboardError::InvalidArgument(msg) => msg.clone(),
            DashboardError::Network(e) => e.to_string(),
            DashboardError::Json(e) => format!("malformed response: {e}"),
            DashboardError::Busy => "a search is already running".to_string(),
            DashboardError::Task(_) => "internal error, please retry".to_string(),
        }
    }
}

pub type Result<T> = std::result::Result<T, DashboardError>;
