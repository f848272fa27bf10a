use business::domain::session::{Session, SessionProvider};
use business::domain::shared::value_objects::{AuthToken, UserId};

/// Session provider backed by credentials loaded once at startup.
///
/// Either value missing means unauthenticated: `current` returns `None`
/// and the use cases refuse to fetch.
pub struct StaticSessionProvider {
    user_id: Option<String>,
    token: Option<String>,
}

impl StaticSessionProvider {
    pub fn new(user_id: Option<String>, token: Option<String>) -> Self {
        Self { user_id, token }
    }
}

impl SessionProvider for StaticSessionProvider {
    fn current(&self) -> Option<Session> {
        let user_id = self.user_id.as_deref()?;
        let token = self.token.as_deref()?;
        Some(Session {
            user_id: UserId::new(user_id),
            token: AuthToken::new(token),
        })
    }
}
