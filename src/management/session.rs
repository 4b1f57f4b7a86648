use rand::{Rng, distr::Alphanumeric};

use crate::{
    error::{Error, Result},
    spotify::auth::OAuthClient,
    types::Credential,
};

/// Where a session currently stands.
#[derive(Debug, Clone, PartialEq)]
pub enum SessionState {
    Unauthenticated,
    AwaitingRedirect { authorize_url: String, state: String },
    Authenticated(Credential),
}

/// Coarse view of [`SessionState`] that also tells expired credentials
/// apart.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SessionStatus {
    Unauthenticated,
    AwaitingRedirect,
    Authenticated,
    Expired,
}

/// Owns the credential of one interactive session.
///
/// The credential lives in memory only. A session starts unauthenticated,
/// moves to awaiting-redirect once an authorize URL was handed out, and holds
/// a credential after the code exchange. A rejected refresh drops it back to
/// unauthenticated; the user has to log in again.
pub struct SessionManager {
    oauth: OAuthClient,
    state: SessionState,
}

impl SessionManager {
    pub fn new(oauth: OAuthClient) -> Self {
        Self {
            oauth,
            state: SessionState::Unauthenticated,
        }
    }

    /// Starts a session from an existing credential.
    pub fn with_credential(oauth: OAuthClient, credential: Credential) -> Self {
        Self {
            oauth,
            state: SessionState::Authenticated(credential),
        }
    }

    pub fn state(&self) -> &SessionState {
        &self.state
    }

    pub fn status(&self) -> SessionStatus {
        match &self.state {
            SessionState::Unauthenticated => SessionStatus::Unauthenticated,
            SessionState::AwaitingRedirect { .. } => SessionStatus::AwaitingRedirect,
            SessionState::Authenticated(credential) if credential.is_expired() => {
                SessionStatus::Expired
            }
            SessionState::Authenticated(_) => SessionStatus::Authenticated,
        }
    }

    pub fn credential(&self) -> Option<&Credential> {
        match &self.state {
            SessionState::Authenticated(credential) => Some(credential),
            _ => None,
        }
    }

    /// Hands out a fresh authorize URL and waits for the redirect.
    ///
    /// Calling it again replaces the pending state, so only the latest URL
    /// can complete the login.
    pub fn begin_authorization(&mut self) -> Result<String> {
        let state = generate_state();
        let authorize_url = self.oauth.authorize_url(&state)?;
        self.state = SessionState::AwaitingRedirect {
            authorize_url: authorize_url.clone(),
            state,
        };
        Ok(authorize_url)
    }

    /// Completes the login with the URL the browser was redirected to.
    ///
    /// On failure the session stays where it was so the user can paste the URL
    /// again.
    pub async fn obtain_initial_token(&mut self, redirect_url: &str) -> Result<&Credential> {
        let expected_state = match &self.state {
            SessionState::AwaitingRedirect { state, .. } => Some(state.clone()),
            _ => None,
        };

        let credential = self
            .oauth
            .obtain_initial_token(redirect_url, expected_state.as_deref())
            .await?;

        self.state = SessionState::Authenticated(credential);
        self.credential().ok_or(Error::NotAuthenticated)
    }

    /// Refreshes the held credential when it has expired.
    ///
    /// # Errors
    ///
    /// - [`Error::NotAuthenticated`] when no credential is held.
    /// - [`Error::TokenRefresh`] when the refresh token was rejected; the
    ///   session is torn down.
    pub async fn ensure_fresh(&mut self) -> Result<&Credential> {
        let SessionState::Authenticated(credential) = &self.state else {
            return Err(Error::NotAuthenticated);
        };

        match self.oauth.ensure_fresh(credential.clone()).await {
            Ok(fresh) => {
                self.state = SessionState::Authenticated(fresh);
                self.credential().ok_or(Error::NotAuthenticated)
            }
            Err(e @ Error::TokenRefresh(_)) => {
                self.logout();
                Err(e)
            }
            Err(e) => Err(e),
        }
    }

    /// Access token that is valid right now.
    pub async fn access_token(&mut self) -> Result<String> {
        Ok(self.ensure_fresh().await?.access_token.clone())
    }

    /// Forgets the credential.
    pub fn logout(&mut self) {
        self.state = SessionState::Unauthenticated;
    }
}

/// Random value for the OAuth `state` parameter.
pub fn generate_state() -> String {
    rand::rng()
        .sample_iter(&Alphanumeric)
        .take(32)
        .map(char::from)
        .collect()
}
