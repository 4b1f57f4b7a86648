use chrono::{Duration, Utc};
use reqwest::{Client, Response, Url};

use crate::{
    config::Config,
    error::{Error, Result},
    types::{Credential, TokenErrorResponse, TokenResponse},
};

/// Seconds shaved off `expires_in` so a token is refreshed shortly before
/// Spotify would reject it.
pub const EXPIRY_MARGIN_SECS: i64 = 60;

/// OAuth 2.0 authorization-code client for the Spotify accounts service.
///
/// The client authenticates itself with its id and secret (HTTP Basic) on the
/// token endpoint. It holds no token state; see
/// [`crate::management::SessionManager`] for that.
#[derive(Debug, Clone)]
pub struct OAuthClient {
    http: Client,
    client_id: String,
    client_secret: String,
    redirect_uri: String,
    auth_url: String,
    token_url: String,
    scope: String,
}

impl OAuthClient {
    pub fn new(config: &Config) -> Self {
        Self {
            http: Client::new(),
            client_id: config.client_id.clone(),
            client_secret: config.client_secret.clone(),
            redirect_uri: config.redirect_uri.clone(),
            auth_url: config.auth_url.clone(),
            token_url: config.token_url.clone(),
            scope: config.scope.clone(),
        }
    }

    /// Builds the URL the user has to open to grant access.
    ///
    /// `show_dialog` is always set so the user can switch accounts.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Config`] when the configured authorize URL is invalid.
    pub fn authorize_url(&self, state: &str) -> Result<String> {
        let url = Url::parse_with_params(
            &self.auth_url,
            &[
                ("client_id", self.client_id.as_str()),
                ("response_type", "code"),
                ("redirect_uri", self.redirect_uri.as_str()),
                ("scope", self.scope.as_str()),
                ("state", state),
                ("show_dialog", "true"),
            ],
        )
        .map_err(|e| Error::Config(format!("invalid authorize URL {}: {}", self.auth_url, e)))?;

        Ok(url.to_string())
    }

    /// Extracts the authorization code from the URL the browser was
    /// redirected to.
    ///
    /// Accepts a full URL as well as a bare query string. When
    /// `expected_state` is given the response has to carry the same `state`.
    ///
    /// # Errors
    ///
    /// Returns [`Error::AuthExchange`] when the user denied access, the state
    /// is missing or does not match, or no code is present.
    pub fn parse_response_code(redirect_url: &str, expected_state: Option<&str>) -> Result<String> {
        let input = redirect_url.trim();
        let url = Url::parse(input)
            .or_else(|_| {
                Url::parse(&format!(
                    "http://localhost/?{}",
                    input.trim_start_matches('?')
                ))
            })
            .map_err(|e| Error::AuthExchange(format!("cannot parse redirect URL: {}", e)))?;

        let param = |name: &str| {
            url.query_pairs()
                .find(|(key, _)| key == name)
                .map(|(_, value)| value.into_owned())
        };

        if let Some(error) = param("error") {
            return Err(Error::AuthExchange(format!(
                "authorization was denied: {}",
                error
            )));
        }

        if let Some(expected) = expected_state {
            if param("state").as_deref() != Some(expected) {
                return Err(Error::AuthExchange(
                    "state missing or mismatched in redirect URL".to_string(),
                ));
            }
        }

        match param("code") {
            Some(code) if !code.is_empty() => Ok(code),
            _ => Err(Error::AuthExchange(
                "redirect URL does not contain an authorization code".to_string(),
            )),
        }
    }

    /// Exchanges the code found in `redirect_url` for a credential.
    pub async fn obtain_initial_token(
        &self,
        redirect_url: &str,
        expected_state: Option<&str>,
    ) -> Result<Credential> {
        let code = Self::parse_response_code(redirect_url, expected_state)?;
        self.exchange_code(&code).await
    }

    /// Exchanges an authorization code for an access and refresh token.
    ///
    /// # Errors
    ///
    /// Returns [`Error::AuthExchange`] for every failure: unreachable token
    /// endpoint, rejected code, redirect URI mismatch or invalid client
    /// credentials.
    pub async fn exchange_code(&self, code: &str) -> Result<Credential> {
        let response = self
            .http
            .post(&self.token_url)
            .basic_auth(&self.client_id, Some(&self.client_secret))
            .form(&[
                ("grant_type", "authorization_code"),
                ("code", code),
                ("redirect_uri", self.redirect_uri.as_str()),
            ])
            .send()
            .await
            .map_err(|e| Error::AuthExchange(e.to_string()))?;

        let token = Self::token_response(response)
            .await
            .map_err(Error::AuthExchange)?;

        let refresh_token = token.refresh_token.clone().ok_or_else(|| {
            Error::AuthExchange("token response did not include a refresh token".to_string())
        })?;

        Ok(Self::credential(token, refresh_token))
    }

    /// Exchanges a refresh token for a new access token.
    ///
    /// Spotify does not always rotate the refresh token; the old one is kept
    /// when the response has none.
    ///
    /// # Errors
    ///
    /// Returns [`Error::TokenRefresh`] when the accounts service rejects the
    /// refresh token, and [`Error::Http`] when it cannot be reached.
    pub async fn refresh(&self, refresh_token: &str) -> Result<Credential> {
        let response = self
            .http
            .post(&self.token_url)
            .basic_auth(&self.client_id, Some(&self.client_secret))
            .form(&[
                ("grant_type", "refresh_token"),
                ("refresh_token", refresh_token),
            ])
            .send()
            .await?;

        let token = Self::token_response(response)
            .await
            .map_err(Error::TokenRefresh)?;

        let refresh_token = token
            .refresh_token
            .clone()
            .unwrap_or_else(|| refresh_token.to_string());

        Ok(Self::credential(token, refresh_token))
    }

    /// Returns `credential` untouched while it is valid, otherwise a
    /// refreshed one.
    pub async fn ensure_fresh(&self, credential: Credential) -> Result<Credential> {
        if !credential.is_expired() {
            return Ok(credential);
        }

        self.refresh(&credential.refresh_token).await
    }

    async fn token_response(response: Response) -> std::result::Result<TokenResponse, String> {
        let status = response.status();
        let body = response.text().await.map_err(|e| e.to_string())?;

        if !status.is_success() {
            return Err(match serde_json::from_str::<TokenErrorResponse>(&body) {
                Ok(err) => match err.error_description {
                    Some(description) => format!("{}: {}", err.error, description),
                    None => err.error,
                },
                Err(_) => format!("token endpoint answered {}", status),
            });
        }

        serde_json::from_str::<TokenResponse>(&body)
            .map_err(|e| format!("malformed token response: {}", e))
    }

    fn credential(token: TokenResponse, refresh_token: String) -> Credential {
        let lifetime = (token.expires_in - EXPIRY_MARGIN_SECS).max(0);
        Credential {
            access_token: token.access_token,
            refresh_token,
            scope: token.scope,
            expires_at: Utc::now() + Duration::seconds(lifetime),
        }
    }
}
