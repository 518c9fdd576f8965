use clap::Parser;
use secrecy::SecretString;

use crate::prelude::*;

#[derive(Parser)]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Yandex Practicum API token.
    #[clap(long, env = "PRACTICUM_TOKEN", hide_env_values = true)]
    pub practicum_token: Option<String>,

    /// Telegram bot API token.
    #[clap(long, env = "TELEGRAM_TOKEN", hide_env_values = true)]
    pub telegram_token: Option<String>,

    /// Chat to deliver the notifications to: a numeric identifier or a `@channelusername`.
    #[clap(long, env = "TELEGRAM_CHAT_ID")]
    pub telegram_chat_id: Option<String>,

    /// Interval between the polls, in seconds.
    #[clap(long, env = "POLL_INTERVAL_SECS", default_value = "600")]
    pub poll_interval_secs: u64,
}

/// The secrets without which the bot cannot run.
///
/// The CLI accepts them as optional so that startup can report their absence
/// itself instead of leaving that to the argument parser.
#[must_use]
pub struct Credentials {
    pub practicum_token: SecretString,
    pub telegram_token: SecretString,
    pub chat_id: String,
}

impl Credentials {
    /// Validate that all the required secrets are present and non-empty.
    pub fn from_cli(cli: &Cli) -> Result<Self> {
        Ok(Self {
            practicum_token: required(cli.practicum_token.as_deref(), "PRACTICUM_TOKEN")?
                .to_string()
                .into(),
            telegram_token: required(cli.telegram_token.as_deref(), "TELEGRAM_TOKEN")?
                .to_string()
                .into(),
            chat_id: required(cli.telegram_chat_id.as_deref(), "TELEGRAM_CHAT_ID")?.to_string(),
        })
    }
}

fn required<'a>(value: Option<&'a str>, name: &'static str) -> Result<&'a str> {
    match value {
        Some(value) if !value.trim().is_empty() => Ok(value),
        _ => bail!("`{name}` is not set"),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn cli(practicum: Option<&str>, telegram: Option<&str>, chat_id: Option<&str>) -> Cli {
        Cli {
            practicum_token: practicum.map(ToString::to_string),
            telegram_token: telegram.map(ToString::to_string),
            telegram_chat_id: chat_id.map(ToString::to_string),
            poll_interval_secs: 600,
        }
    }

    #[test]
    fn all_credentials_present_ok() -> Result {
        let credentials =
            Credentials::from_cli(&cli(Some("practicum"), Some("telegram"), Some("42")))?;
        assert_eq!(credentials.chat_id, "42");
        Ok(())
    }

    #[test]
    fn missing_credential_fails() {
        assert!(Credentials::from_cli(&cli(None, Some("telegram"), Some("42"))).is_err());
        assert!(Credentials::from_cli(&cli(Some("practicum"), None, Some("42"))).is_err());
        assert!(Credentials::from_cli(&cli(Some("practicum"), Some("telegram"), None)).is_err());
    }

    #[test]
    fn empty_credential_fails() {
        assert!(Credentials::from_cli(&cli(Some(""), Some("telegram"), Some("42"))).is_err());
    }
}
