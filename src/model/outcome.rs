use serde::{Deserialize, Serialize};

use crate::downstream::proto::{self, OperationStatus};

/// Coarse result state reported to REST clients.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ResultStatus {
    Success,
    /// Accepted but not finished, or finished with warnings.
    Pending,
    Failure,
}

/// `{message, success, status}` triple carried by every success envelope.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Outcome {
    pub message: String,
    pub success: bool,
    pub status: ResultStatus,
}

impl Outcome {
    /// Translate the core service's outcome. A response without one still
    /// completed with an OK status, so it reads as success with `fallback`
    /// as the message.
    pub fn resolve(outcome: Option<proto::Outcome>, fallback: &str) -> Self {
        match outcome {
            Some(outcome) => {
                let status = match OperationStatus::try_from(outcome.status) {
                    Ok(OperationStatus::Success) => ResultStatus::Success,
                    Ok(OperationStatus::Pending) | Ok(OperationStatus::Warning) => {
                        ResultStatus::Pending
                    }
                    Ok(OperationStatus::Failure) => ResultStatus::Failure,
                    Ok(OperationStatus::Unspecified) | Err(_) => {
                        if outcome.success {
                            ResultStatus::Success
                        } else {
                            ResultStatus::Failure
                        }
                    }
                };
                Self {
                    message: outcome.message,
                    success: outcome.success,
                    status,
                }
            }
            None => Self {
                message: fallback.to_string(),
                success: true,
                status: ResultStatus::Success,
            },
        }
    }
}
