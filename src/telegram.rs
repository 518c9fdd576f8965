pub mod methods;
pub mod notifier;
pub mod objects;
pub mod result;

use std::fmt::Debug;

use reqwest::Client;
use secrecy::{ExposeSecret, SecretString};
use serde::de::DeserializeOwned;
use url::Url;

use crate::{
    prelude::*,
    telegram::{methods::Method, result::TelegramResult},
};

/// Telegram bot API connection.
#[must_use]
#[derive(Clone)]
pub struct Telegram {
    client: Client,
    token: SecretString,
    root_url: Url,
}

impl Telegram {
    pub fn new(client: Client, token: SecretString) -> Result<Self> {
        Ok(Self { client, token, root_url: Url::parse("https://api.telegram.org")? })
    }

    /// Call the Telegram Bot API method.
    #[instrument(skip_all, fields(method = M::NAME))]
    pub async fn call<M>(&self, method: &M) -> Result<M::Response>
    where
        M: Method + ?Sized,
        M::Response: Debug + DeserializeOwned,
    {
        let mut url = self.root_url.clone();
        url.set_path(&format!("bot{}/{}", self.token.expose_secret(), M::NAME));
        self.client
            .post(url)
            .json(method)
            .timeout(method.timeout())
            .send()
            .await
            .context("failed to call the Telegram API")?
            .json::<TelegramResult<M::Response>>()
            .await
            .context("failed to parse the Telegram API response")?
            .into()
    }
}
