//! Backend health banner

use crate::infrastructure::api::{ApiError, HealthReport};

/// What the status banner currently says about the backend
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HealthBanner {
    Checking,
    Healthy { chunks: u64 },
    Failed,
}

impl HealthBanner {
    /// Map a health check outcome to a banner. Anything short of a healthy report is a failure.
    pub fn from_outcome(outcome: &Result<HealthReport, ApiError>) -> Self {
        match outcome {
            Ok(report) if report.is_healthy() => HealthBanner::Healthy {
                chunks: report.chunks_loaded,
            },
            _ => HealthBanner::Failed,
        }
    }

    pub fn message(&self) -> String {
        match self {
            HealthBanner::Checking => "Checking backend...".to_string(),
            HealthBanner::Healthy { chunks } => {
                format!("✅ Knowledge base loaded: {chunks} chunks")
            }
            HealthBanner::Failed => "❌ Failed to connect to backend".to_string(),
        }
    }

    pub fn is_failed(&self) -> bool {
        matches!(self, HealthBanner::Failed)
    }
}
