use crate::database::models::Idea;
use crate::error::ApiError;
use crate::middleware::AuthUser;

/// Reject mutation of an idea the caller does not own.
///
/// Callers must confirm existence first: a missing idea is reported as
/// not-found regardless of who asks.
pub fn ensure_owner(idea: &Idea, auth: &AuthUser) -> Result<(), ApiError> {
    if idea.owner != auth.user_id {
        return Err(ApiError::forbidden("Not authorized to modify this idea"));
    }
    Ok(())
}
