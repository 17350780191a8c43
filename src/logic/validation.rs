//! Client-side form checks
//!
//! These run before any request is made; a failing check means no network
//! call happens.

#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum ValidationError {
    #[error("username or password not filled in")]
    MissingCredentials,
    #[error("A post cannot have an empty title")]
    EmptyTitle,
    #[error("current password is required")]
    MissingCurrentPassword,
    #[error("nothing to follow")]
    EmptyFollowTarget,
}

/// Username and password must both be present
pub fn check_credentials(username: &str, password: &str) -> Result<(), ValidationError> {
    if username.is_empty() || password.is_empty() {
        return Err(ValidationError::MissingCredentials);
    }
    Ok(())
}

pub fn check_title(title: &str) -> Result<(), ValidationError> {
    if title.is_empty() {
        return Err(ValidationError::EmptyTitle);
    }
    Ok(())
}

pub fn check_current_password(password: &str) -> Result<(), ValidationError> {
    if password.is_empty() {
        return Err(ValidationError::MissingCurrentPassword);
    }
    Ok(())
}

pub fn check_follow_target(target: &str) -> Result<(), ValidationError> {
    if target.trim().is_empty() {
        return Err(ValidationError::EmptyFollowTarget);
    }
    Ok(())
}
