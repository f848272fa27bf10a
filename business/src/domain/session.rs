use crate::domain::shared::value_objects::{AuthToken, UserId};

/// Credentials for the signed-in user, as handed over by the host application.
#[derive(Debug, Clone)]
pub struct Session {
    pub user_id: UserId,
    pub token: AuthToken,
}

/// Port supplying the active session, if any.
///
/// `None` means unauthenticated: use cases refuse to fetch and leave the
/// redirect decision to the caller.
pub trait SessionProvider: Send + Sync {
    fn current(&self) -> Option<Session>;
}
