pub mod error;
pub mod models;
pub mod status;

use chrono::Utc;
use reqwest::{header, Client, StatusCode};
use secrecy::{ExposeSecret, SecretString};
use serde_json::Value;
use url::Url;

use crate::{practicum::error::PracticumError, prelude::*};

/// Homework-review API connection.
#[must_use]
#[derive(Clone)]
pub struct Practicum {
    client: Client,
    token: SecretString,
    endpoint: Url,
}

impl Practicum {
    pub fn new(client: Client, token: SecretString) -> Result<Self> {
        Ok(Self {
            client,
            token,
            endpoint: Url::parse("https://practicum.yandex.ru/api/user_api/homework_statuses/")?,
        })
    }

    /// Fetch the homework statuses changed since `from_date`.
    ///
    /// A non-positive `from_date` falls back to the current time. The body is
    /// returned as raw JSON: shape checking is up to [`models::validate`].
    /// Retrying is the caller's responsibility.
    #[instrument(skip_all, fields(from_date = from_date), err(level = Level::DEBUG))]
    pub async fn get_statuses(&self, from_date: i64) -> Result<Value, PracticumError> {
        let from_date = if from_date > 0 { from_date } else { Utc::now().timestamp() };
        info!(from_date, "📡 Requesting homework statuses…");
        let response = self
            .client
            .get(self.endpoint.clone())
            .header(header::AUTHORIZATION, format!("OAuth {}", self.token.expose_secret()))
            .query(&[("from_date", from_date)])
            .send()
            .await
            .map_err(PracticumError::Connection)?;
        let status = response.status();
        if status != StatusCode::OK {
            let body = response.text().await.unwrap_or_default();
            return Err(PracticumError::HttpStatus { status, body, from_date });
        }
        let body = response.json().await.context("failed to parse the response body")?;
        Ok(body)
    }
}
