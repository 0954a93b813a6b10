use crate::{
    error::{AuthError, StorageError},
    management::Preferences,
    remote::{self, ApiClient},
    types::{Credentials, SessionToken},
};

pub const TOKEN_KEY: &str = "token";

/// Holds the session token in memory and mirrors it into the preferences store.
///
/// The token is read once when the manager is created and is only replaced by
/// a successful login or dropped by [`SessionManager::logout`]. There is no
/// expiry handling; an expired token surfaces as a rejected submission.
pub struct SessionManager {
    preferences: Preferences,
    token: Option<SessionToken>,
}

impl SessionManager {
    pub fn new(preferences: Preferences) -> Self {
        let token = preferences
            .get(TOKEN_KEY)
            .filter(|t| !t.is_empty())
            .map(SessionToken::new);

        Self { preferences, token }
    }

    /// Loads the manager from the default preferences file.
    pub async fn load() -> Result<Self, StorageError> {
        Ok(Self::new(Preferences::load().await?))
    }

    /// Signs in and stores the resulting token.
    ///
    /// On any failure the stored and in-memory tokens are left as they were.
    pub async fn login(
        &mut self,
        client: &ApiClient,
        credentials: &Credentials,
    ) -> Result<SessionToken, AuthError> {
        let token = remote::auth::login(client, credentials).await?;

        self.preferences.put(TOKEN_KEY, token.as_str()).await?;
        self.token = Some(token.clone());

        Ok(token)
    }

    pub async fn logout(&mut self) -> Result<(), StorageError> {
        self.preferences.remove(TOKEN_KEY).await?;
        self.token = None;
        Ok(())
    }

    pub fn current_token(&self) -> Option<&SessionToken> {
        self.token.as_ref()
    }

    pub fn is_logged_in(&self) -> bool {
        self.token.is_some()
    }

    pub fn preferences(&self) -> &Preferences {
        &self.preferences
    }
}
