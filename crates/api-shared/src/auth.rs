/// Header carrying the admin key on export requests.
pub const ADMIN_KEY_HEADER: &str = "x-admin-key";

/// Reasons an export request is refused.
#[derive(Debug, PartialEq, Eq, thiserror::Error)]
pub enum AuthError {
    #[error("usage export is disabled: no admin key configured")]
    Disabled,
    #[error("admin key missing")]
    Missing,
    #[error("invalid admin key")]
    Invalid,
}

/// Validates the provided admin key against the key resolved at startup.
///
/// Returns `Ok(())` if the key matches. Export is disabled entirely when no key is configured.
pub fn validate_admin_key(provided: Option<&str>, expected: Option<&str>) -> Result<(), AuthError> {
    let expected = expected.ok_or(AuthError::Disabled)?;
    let provided = provided
        .map(str::trim)
        .filter(|k| !k.is_empty())
        .ok_or(AuthError::Missing)?;

    if provided == expected {
        Ok(())
    } else {
        Err(AuthError::Invalid)
    }
}
