use tower_sessions::Session;

use crate::server::{
    data::user::UserRepository,
    error::{auth::AuthError, Error},
    model::{app::AppState, auth::AuthUser, session::user::SessionUserId},
};

/// Resolves the caller from the session's user ID.
///
/// A session that points at a deleted user is cleared.
///
/// # Returns
/// - `Ok(AuthUser)` - The caller
/// - `Err(Error::AuthError(UserNotInSession))` - No user ID in the session
/// - `Err(Error::AuthError(UserNotInDatabase))` - The user no longer exists
pub async fn get_user_from_session(state: &AppState, session: &Session) -> Result<AuthUser, Error> {
    let Some(user_id) = SessionUserId::get(session).await? else {
        return Err(Error::AuthError(AuthError::UserNotInSession));
    };

    let Some(user) = UserRepository::new(&state.db).get_by_id(user_id).await? else {
        session.clear().await;

        tracing::debug!(
            "Session cleared for user ID {} with active session but was not found in database",
            user_id
        );

        return Err(Error::AuthError(AuthError::UserNotInDatabase(user_id)));
    };

    Ok(AuthUser::from(user))
}
