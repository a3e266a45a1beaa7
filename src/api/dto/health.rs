//! Response body of `GET /health`.

use serde::Serialize;

/// Overall service status plus the result of the repository check.
///
/// `status` is `"healthy"` when the repository answered and `"degraded"`
/// otherwise.
#[derive(Debug, Serialize)]
pub struct HealthResponse {
    pub status: String,
    pub version: String,
    pub checks: HealthChecks,
}

/// Component checks run by the health endpoint. The repository is the only one.
#[derive(Debug, Serialize)]
pub struct HealthChecks {
    pub repository: CheckStatus,
}

/// Result of counting the stored characters.
#[derive(Debug, Serialize)]
pub struct CheckStatus {
    /// `"ok"` or `"error"`.
    pub status: String,

    /// Stored record count on success, the repository error otherwise.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
}

impl CheckStatus {
    pub fn ok(stored: usize) -> Self {
        Self {
            status: "ok".to_string(),
            message: Some(format!("Characters stored: {stored}")),
        }
    }

    pub fn error(reason: impl std::fmt::Display) -> Self {
        Self {
            status: "error".to_string(),
            message: Some(format!("Repository error: {reason}")),
        }
    }

    pub fn is_ok(&self) -> bool {
        self.status == "ok"
    }
}
