use poem::Request;
use poem_openapi::{SecurityScheme, auth::ApiKey};

use business::domain::shared::value_objects::UserId;

const MAX_USER_ID_LEN: usize = 128;

#[derive(Debug, PartialEq, Eq, thiserror::Error)]
pub enum UserHeaderError {
    #[error("auth.user_id_missing")]
    Missing,
    #[error("auth.user_id_too_long")]
    TooLong,
    #[error("auth.user_id_invalid")]
    Invalid,
}

/// Validates the user id forwarded by the identity provider.
pub fn parse_user_header(raw: &str) -> Result<UserId, UserHeaderError> {
    let value = raw.trim();
    if value.is_empty() {
        return Err(UserHeaderError::Missing);
    }
    if value.len() > MAX_USER_ID_LEN {
        return Err(UserHeaderError::TooLong);
    }
    if value.chars().any(|c| c.is_control() || c.is_whitespace()) {
        return Err(UserHeaderError::Invalid);
    }
    Ok(UserId::new(value))
}

/// Already-authenticated caller, identified by the `X-User-Id` header the
/// gateway sets after verifying the session.
#[derive(SecurityScheme)]
#[oai(
    ty = "api_key",
    key_name = "X-User-Id",
    key_in = "header",
    checker = "trusted_user_checker"
)]
pub struct TrustedUser(pub UserId);

async fn trusted_user_checker(_req: &Request, api_key: ApiKey) -> Option<UserId> {
    match parse_user_header(&api_key.key) {
        Ok(user_id) => Some(user_id),
        Err(e) => {
            tracing::warn!("Rejected user header: {e}");
            None
        }
    }
}
