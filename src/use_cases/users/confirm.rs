use uuid::Uuid;

use crate::{
    db_adapters::user_adapter::{UserAdapter, UserMutation, UserQuery},
    settings::types::Settings,
    use_cases::{error_500, UseCaseError},
    utils::{
        auth::tokens::{verify_confirmation_token, TokenError},
        base36::base36_to_int,
    },
};

use super::types::UserVisible;

const INVALID_LINK_MESSAGE: &str = "This activation link is invalid or has expired.";

/// Activates the account behind an emailed `uid`/`token` pair. A token works
/// once: an account that is already active is reported as gone.
#[tracing::instrument(name = "Activating a new user", skip(token, user_adapter, settings))]
pub async fn confirm_registration(
    uid: &str,
    token: &str,
    user_adapter: UserAdapter<'_>,
    settings: &Settings,
) -> Result<UserVisible, UseCaseError> {
    let user_id = base36_to_int(uid)
        .map(Uuid::from_u128)
        .map_err(|_| invalid_link())?;

    let confirmation_token = verify_confirmation_token(token, settings).map_err(|e| match e {
        TokenError::Key(_) | TokenError::Issue(_) => error_500(e),
        TokenError::Invalid | TokenError::MissingUserId => invalid_link(),
    })?;
    if confirmation_token.user_id != user_id {
        return Err(invalid_link());
    }

    let user = user_adapter
        .clone()
        .get_by_id(user_id)
        .await
        .map_err(error_500)?
        .ok_or(UseCaseError::NotFound(
            "User for this activation link was not found.".to_string(),
        ))?;
    if user.is_active {
        return Err(UseCaseError::Gone(
            "This account has already been activated.".to_string(),
        ));
    }

    user_adapter
        .activate(user)
        .await
        .map(UserVisible::from)
        .map_err(error_500)
}

fn invalid_link() -> UseCaseError {
    UseCaseError::BadRequest(INVALID_LINK_MESSAGE.to_string())
}
