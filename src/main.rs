mod bot;
mod cli;
mod client;
mod logging;
mod practicum;
mod prelude;
mod telegram;

use clap::Parser;
use secrecy::SecretString;

use crate::{
    bot::Bot,
    cli::{Cli, Credentials},
    practicum::Practicum,
    prelude::*,
    telegram::{notifier::Notifier, objects::ChatId, Telegram},
};

#[tokio::main]
async fn main() -> Result {
    let cli = Cli::parse();
    let _logging_guard = logging::init()?;
    let client = client::build_client()?;

    let credentials = match Credentials::from_cli(&cli) {
        Ok(credentials) => credentials,
        Err(error) => {
            report_missing_config(&client, &cli).await;
            return Err(error);
        }
    };

    let practicum = Practicum::new(client.clone(), credentials.practicum_token)?;
    let telegram = Telegram::new(client, credentials.telegram_token)?;
    let notifier = Notifier::new(telegram, ChatId::from(credentials.chat_id));
    Bot::builder()
        .practicum(practicum)
        .notifier(notifier)
        .poll_interval(Duration::from_secs(cli.poll_interval_secs))
        .build()
        .run()
        .await;
    Ok(())
}

/// One best-effort notification about the missing configuration, sent before
/// the process exits with a failure.
///
/// Only possible when the Telegram pair itself is present.
async fn report_missing_config(client: &reqwest::Client, cli: &Cli) {
    error!("💥 Required environment variables are unavailable");
    let (Some(token), Some(chat_id)) = (&cli.telegram_token, &cli.telegram_chat_id) else {
        return;
    };
    let Ok(telegram) = Telegram::new(client.clone(), SecretString::from(token.clone())) else {
        return;
    };
    let notifier = Notifier::new(telegram, ChatId::from(chat_id.clone()));
    if let Err(error) =
        notifier.notify("Сбой в работе программы: переменные окружения недоступны").await
    {
        warn!("Failed to send the fatal notification: {error:#}");
    }
}
