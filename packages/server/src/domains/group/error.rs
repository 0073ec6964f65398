use thiserror::Error;
use tracing::{error, warn};

use crate::common::{ApiError, BranchId, GroupId};

/// Errors raised by group lifecycle activities.
#[derive(Error, Debug)]
pub enum GroupError {
    /// A required field was missing or empty.
    #[error("{0}")]
    InvalidInput(String),

    /// No group with this id exists in the branch.
    #[error("group {group_id} not found in branch {branch_id}")]
    NotFound {
        branch_id: BranchId,
        group_id: GroupId,
    },

    /// Store or event stream failure.
    #[error(transparent)]
    Downstream(#[from] anyhow::Error),
}

/// Wire mapping: validation misses become 400s; everything else collapses
/// into one generic 500 so callers cannot tell a missing group from a
/// broken store. The distinction is preserved here, in the log.
impl From<GroupError> for ApiError {
    fn from(err: GroupError) -> Self {
        match err {
            GroupError::InvalidInput(message) => ApiError::Validation(message),
            GroupError::NotFound {
                branch_id,
                group_id,
            } => {
                warn!(%branch_id, %group_id, "group lookup missed");
                ApiError::Internal("group operation failed".to_string())
            }
            GroupError::Downstream(source) => {
                error!(error = %source, "group operation failed");
                ApiError::Internal("group operation failed".to_string())
            }
        }
    }
}
