use crate::{error::Result, spotify::SpotifyClient, types::CurrentUser};

impl SpotifyClient {
    /// Returns the profile of the user the token belongs to.
    pub async fn current_user(&self, token: &str) -> Result<CurrentUser> {
        let response = self
            .http
            .get(self.url("/me"))
            .bearer_auth(token)
            .send()
            .await?;

        Ok(Self::check(response).await?.json::<CurrentUser>().await?)
    }
}
