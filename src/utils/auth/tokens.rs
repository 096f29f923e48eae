use chrono::{Duration, Utc};
use pasetors::{
    claims::{Claims, ClaimsValidationRules},
    keys::SymmetricKey,
    local,
    token::UntrustedToken,
    version4::V4,
    Local,
};
use uuid::Uuid;

use crate::settings::types::Settings;

const USER_ID_CLAIM: &str = "user_id";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ConfirmationToken {
    pub user_id: Uuid,
}

#[derive(Debug, thiserror::Error)]
pub enum TokenError {
    #[error("secret key must be exactly 32 bytes: {0}")]
    Key(pasetors::errors::Error),
    #[error("failed to issue token: {0}")]
    Issue(pasetors::errors::Error),
    #[error("token is invalid or expired")]
    Invalid,
    #[error("token does not carry a user id")]
    MissingUserId,
}

/// Issues a PASETO v4.local token bound to `user_id` which expires after
/// `secret.token_expiration` minutes.
#[tracing::instrument(name = "Issue confirmation token", skip(settings))]
pub fn issue_confirmation_token(user_id: Uuid, settings: &Settings) -> Result<String, TokenError> {
    let expires_at = Utc::now() + Duration::minutes(settings.secret.token_expiration);

    let mut claims = Claims::new().map_err(TokenError::Issue)?;
    claims
        .expiration(&expires_at.to_rfc3339())
        .map_err(TokenError::Issue)?;
    claims
        .add_additional(USER_ID_CLAIM, serde_json::json!(user_id))
        .map_err(TokenError::Issue)?;

    local::encrypt(
        &secret_key(settings)?,
        &claims,
        None,
        Some(settings.secret.hmac_secret.as_bytes()),
    )
    .map_err(TokenError::Issue)
}

#[tracing::instrument(name = "Verify confirmation token", skip(token, settings))]
pub fn verify_confirmation_token(
    token: &str,
    settings: &Settings,
) -> Result<ConfirmationToken, TokenError> {
    let sk = secret_key(settings)?;
    let untrusted_token =
        UntrustedToken::<Local, V4>::try_from(token).map_err(|_| TokenError::Invalid)?;
    let trusted_token = local::decrypt(
        &sk,
        &untrusted_token,
        &ClaimsValidationRules::new(),
        None,
        Some(settings.secret.hmac_secret.as_bytes()),
    )
    .map_err(|e| {
        tracing::event!(target: "backend", tracing::Level::INFO, "Rejected confirmation token: {}", e);
        TokenError::Invalid
    })?;

    trusted_token
        .payload_claims()
        .and_then(|claims| claims.get_claim(USER_ID_CLAIM))
        .and_then(|user_id| user_id.as_str())
        .and_then(|user_id| Uuid::parse_str(user_id).ok())
        .map(|user_id| ConfirmationToken { user_id })
        .ok_or(TokenError::MissingUserId)
}

fn secret_key(settings: &Settings) -> Result<SymmetricKey<V4>, TokenError> {
    SymmetricKey::<V4>::from(settings.secret.secret_key.as_bytes()).map_err(TokenError::Key)
}
