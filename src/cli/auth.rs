use std::{io::Write, time::Duration};

use tokio::{
    io::{AsyncBufReadExt, BufReader},
    task::JoinHandle,
};

use crate::{
    config::Config,
    error::{Error, Result},
    info,
    management::SessionManager,
    server::{self, SharedCallback},
    spotify::{SpotifyClient, auth::OAuthClient},
    success, warning,
};

const CALLBACK_TIMEOUT: Duration = Duration::from_secs(120);

/// Runs the interactive login and leaves `session` authenticated.
///
/// The authorize URL is opened in the browser. The redirect is either pasted
/// back by the user or, with `callback`, captured by a local listener bound to
/// the redirect URI. The listener is up before the browser opens.
pub async fn login(session: &mut SessionManager, config: &Config, callback: bool) -> Result<()> {
    let authorize_url = session.begin_authorization()?;

    let listener = if callback {
        Some(start_listener(config).await?)
    } else {
        None
    };

    info!("Log in with Spotify:\n{}", authorize_url);
    if webbrowser::open(&authorize_url).is_err() {
        warning!("Failed to open browser. Please navigate to the URL above manually.");
    }

    let redirect = match listener {
        Some((handle, state)) => capture_redirect(handle, state).await?,
        None => prompt_redirect().await?,
    };

    session.obtain_initial_token(&redirect).await?;
    success!("Authentication successful!");
    Ok(())
}

/// `genremix auth`: log in and show which account the credential belongs to.
pub async fn auth(config: &Config, callback: bool) -> Result<()> {
    let mut session = SessionManager::new(OAuthClient::new(config));
    login(&mut session, config, callback).await?;

    let token = session.access_token().await?;
    let user = SpotifyClient::new(&config.api_url).current_user(&token).await?;
    success!(
        "Logged in as {}",
        user.display_name.unwrap_or(user.id)
    );

    Ok(())
}

async fn prompt_redirect() -> Result<String> {
    print!("Paste the full URL you were redirected to after login: ");
    std::io::stdout().flush()?;

    let mut lines = BufReader::new(tokio::io::stdin()).lines();
    match lines.next_line().await? {
        Some(line) if !line.trim().is_empty() => Ok(line.trim().to_string()),
        _ => Err(Error::AuthExchange("no redirect URL entered".to_string())),
    }
}

async fn start_listener(config: &Config) -> Result<(JoinHandle<()>, SharedCallback)> {
    let addr = config.callback_addr()?;
    let path = config.callback_path()?;
    let state = server::shared_callback(&config.redirect_uri);

    let (bound, handle) = server::start_api_server(addr, &path, state.clone()).await?;
    info!("Waiting for the redirect on http://{}{}", bound, path);

    Ok((handle, state))
}

async fn capture_redirect(handle: JoinHandle<()>, state: SharedCallback) -> Result<String> {
    let redirect = server::wait_for_redirect(state, CALLBACK_TIMEOUT).await;
    handle.abort();

    redirect.ok_or_else(|| {
        Error::AuthExchange("timed out waiting for the redirect".to_string())
    })
}
